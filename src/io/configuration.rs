//! Driver constants and display defaults

/// Fixed seed for reproducible best-first ordering
pub const DEFAULT_SEED: u64 = 42;

/// Glyph marking a queen's square in rendered boards
pub const QUEEN_GLYPH: char = 'Q';

/// One cell's worth of horizontal border in rendered boards
pub const CELL_SEGMENT: &str = " ---";

/// Banner printed before the interactive size prompt
pub const BANNER: &str = ".: N-Queens Problem :.";

/// Interactive prompt asking for the board size
pub const SIZE_PROMPT: &str = "Please enter the size of the board: ";

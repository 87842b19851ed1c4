/// Cells along the outer (`x`) axis
pub const BOARD_WIDTH: usize = 10;
/// Cells along the inner (`y`) axis
pub const BOARD_HEIGHT: usize = 10;
/// Slots in a floor's action ring buffer
pub const ACTION_LOG_CAPACITY: usize = 20;

/// Reserved action id meaning "slot never used"
pub const EMPTY_ACTION_ID: u64 = 0;

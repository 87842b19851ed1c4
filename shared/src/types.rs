pub type ActionId = u64;
pub type FloorId = u32;
pub type FloorNumber = u16;
pub type TransactionCounter = u16;

/// Board coordinate pair, `x` is the outer index and `y` the inner one
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct Coordinate {
    pub x: u8,
    pub y: u8,
}

impl Coordinate {
    pub fn new(x: u8, y: u8) -> Self {
        Self { x, y }
    }

    /// Whether this coordinate names a cell on the board
    pub fn in_bounds(self) -> bool {
        usize::from(self.x) < crate::BOARD_WIDTH && usize::from(self.y) < crate::BOARD_HEIGHT
    }
}

impl std::fmt::Display for Coordinate {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Assert that every cell of the session board has the tile type the
/// snapshot holds for it
#[macro_export]
macro_rules! assert_board_matches {
    ($board:expr, $snapshot:expr) => {
        for (coordinate, tile) in $snapshot.iter_tiles() {
            let local = $board
                .cell_at(coordinate)
                .and_then(|cell| cell.tile_type());
            assert_eq!(
                local,
                Some(tile.tile_type),
                "Board diverges from snapshot at {}",
                coordinate
            );
        }
    };
}

use proptest::prelude::*;
use rand::{rngs::SmallRng, SeedableRng};
use seabattle::{Board, CellState, Orientation, Ship, BOARD_HEIGHT, BOARD_WIDTH};

fn assert_no_adjacency(board: &Board) -> Result<(), TestCaseError> {
    let ships: Vec<_> = board.ships().map(|(_, s)| *s).collect();
    for (i, a) in ships.iter().enumerate() {
        for b in &ships[i + 1..] {
            let grown = a.region().inflated(1, 1).unwrap();
            prop_assert!(
                !grown.intersects_with(&b.region()),
                "{:?} touches {:?}",
                a,
                b
            );
        }
    }
    Ok(())
}

fn occupied_cells(board: &Board) -> usize {
    board
        .cells()
        .iter()
        .filter(|&&c| c == CellState::Occupied)
        .count()
}

fn placement() -> impl Strategy<Value = (usize, bool, i32, i32)> {
    (1..=4usize, any::<bool>(), -1..=BOARD_WIDTH, -1..=BOARD_HEIGHT)
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(64))]

    #[test]
    fn adjacency_holds_after_every_add(moves in prop::collection::vec(placement(), 0..40)) {
        let mut board = Board::new();
        for (len, vertical, x, y) in moves {
            let orient = if vertical { Orientation::Vertical } else { Orientation::Horizontal };
            let ship = Ship::with_orientation(len, orient).unwrap();
            let allowed = board.can_place(&ship, x, y);
            prop_assert_eq!(board.add_ship(ship, x, y).is_ok(), allowed);
            assert_no_adjacency(&board)?;
        }
        let expected: usize = board.ships().map(|(_, s)| s.length()).sum();
        prop_assert_eq!(occupied_cells(&board), expected);
    }

    #[test]
    fn clear_resets_generated_board(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.generate_random_fleet(&mut rng);
        board.clear();
        prop_assert_eq!(board.ship_count(), 0);
        prop_assert!(board.cells().iter().all(|&c| c == CellState::Normal));
        prop_assert_eq!(board.cells().len(), 100);
    }

    #[test]
    fn remove_restores_previous_cells(seed in any::<u64>()) {
        let mut rng = SmallRng::seed_from_u64(seed);
        let mut board = Board::new();
        board.generate_random_fleet(&mut rng);
        let ids: Vec<_> = board.ships().map(|(id, _)| id).collect();
        for id in ids {
            let ship = board.remove_ship(id).unwrap();
            for (x, y) in ship.region().cells() {
                prop_assert_eq!(board.cell_state_at(x, y).unwrap(), CellState::Normal);
            }
            let expected: usize = board.ships().map(|(_, s)| s.length()).sum();
            prop_assert_eq!(occupied_cells(&board), expected);
        }
        prop_assert_eq!(board.ship_count(), 0);
    }
}

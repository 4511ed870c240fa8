use rand::rngs::SmallRng;
use rand::{RngCore, SeedableRng};
use seabattle::fleet::{find_placement, random_orientation};
use seabattle::{
    generate_fleet, Board, BoardError, CellState, Orientation, Ship, BOARD_HEIGHT, BOARD_WIDTH,
    FLEET, TOTAL_SHIP_CELLS,
};

#[test]
fn test_same_seed_same_board() {
    let mut board1 = Board::new();
    let mut board2 = Board::new();
    let out1 = board1.generate_random_fleet(&mut SmallRng::seed_from_u64(42));
    let out2 = board2.generate_random_fleet(&mut SmallRng::seed_from_u64(42));
    assert_eq!(out1, out2);
    assert_eq!(board1, board2);
}

#[test]
fn test_generated_fleets_are_legal() {
    for seed in 0..200 {
        let mut board = Board::new();
        let outcome = board.generate_random_fleet(&mut SmallRng::seed_from_u64(seed));
        assert_eq!(outcome.requested(), FLEET.len());
        assert!(outcome.placed() <= FLEET.len());
        assert_eq!(board.ship_count(), outcome.placed());

        let ships: Vec<Ship> = board.ships().map(|(_, s)| *s).collect();
        for (i, a) in ships.iter().enumerate() {
            let r = a.region();
            assert!(r.x() >= 0 && r.y() >= 0, "seed {}: {:?}", seed, a);
            assert!(r.right() < BOARD_WIDTH && r.bottom() < BOARD_HEIGHT);
            let grown = r.inflated(1, 1).unwrap();
            for b in &ships[i + 1..] {
                assert!(!grown.intersects_with(&b.region()), "seed {}", seed);
            }
        }

        let occupied = board
            .cells()
            .iter()
            .filter(|&&c| c == CellState::Occupied)
            .count();
        let lengths: usize = ships.iter().map(Ship::length).sum();
        assert_eq!(occupied, lengths);
        if outcome.is_complete() {
            assert_eq!(occupied, TOTAL_SHIP_CELLS);
        }
    }
}

#[test]
fn test_largest_ships_placed_first() {
    let mut board = Board::new();
    let outcome = generate_fleet(&mut board, &mut SmallRng::seed_from_u64(7));
    let lengths: Vec<usize> = board.ships().map(|(_, s)| s.length()).collect();
    assert_eq!(lengths.len(), outcome.placed());
    assert!(lengths.windows(2).all(|w| w[0] >= w[1]));
}

#[test]
fn test_keeps_existing_ships() -> Result<(), BoardError> {
    let mut board = Board::new();
    let id = board.add_ship(Ship::new(1)?, 4, 4)?;
    let outcome = board.generate_random_fleet(&mut SmallRng::seed_from_u64(3));
    assert_eq!(board.ship(id).map(Ship::anchor), Some((4, 4)));
    assert_eq!(board.ship_count(), outcome.placed() + 1);
    Ok(())
}

#[test]
fn test_blocked_board_places_nothing() -> Result<(), BoardError> {
    // single-cell ships on every even cell leave no legal anchor
    let mut board = Board::new();
    for x in (0..BOARD_WIDTH - 1).step_by(2) {
        for y in (0..BOARD_HEIGHT - 1).step_by(2) {
            board.add_ship(Ship::new(1)?, x, y)?;
        }
    }
    let before = board.ship_count();
    assert_eq!(before, 25);

    let outcome = board.generate_random_fleet(&mut SmallRng::seed_from_u64(1));
    assert_eq!(outcome.placed(), 0);
    assert!(!outcome.is_complete());
    assert_eq!(board.ship_count(), before);
    Ok(())
}

#[test]
fn test_find_placement_on_empty_board() -> Result<(), BoardError> {
    let board = Board::new();
    let mut rng = SmallRng::seed_from_u64(11);
    for len in 1..=4 {
        let ship = Ship::with_orientation(len, Orientation::Vertical)?;
        let (x, y) = find_placement(&board, &ship, &mut rng).expect("empty board has room");
        assert!(board.can_place(&ship, x, y));
    }
    Ok(())
}

#[test]
fn test_random_orientation_covers_both() {
    let mut rng = SmallRng::seed_from_u64(5);
    let draws: Vec<_> = (0..100).map(|_| random_orientation(&mut rng)).collect();
    assert!(draws.contains(&Orientation::Horizontal));
    assert!(draws.contains(&Orientation::Vertical));
}

/// Every draw is the same, so random anchors all land on the diagonal.
struct StuckRng;

impl RngCore for StuckRng {
    fn next_u32(&mut self) -> u32 {
        u32::MAX
    }

    fn next_u64(&mut self) -> u64 {
        u64::MAX
    }

    fn fill_bytes(&mut self, dst: &mut [u8]) {
        dst.fill(0xff);
    }
}

#[test]
fn test_scan_walks_columns_first() -> Result<(), BoardError> {
    // block every anchor except (0, 8) and (8, 0)
    let mut board = Board::new();
    for x in (0..BOARD_WIDTH - 1).step_by(2) {
        for y in (0..BOARD_HEIGHT - 1).step_by(2) {
            if (x, y) != (0, 8) && (x, y) != (8, 0) {
                board.add_ship(Ship::new(1)?, x, y)?;
            }
        }
    }
    assert_eq!(board.ship_count(), 23);

    let one = Ship::new(1)?;
    assert!(board.can_place(&one, 0, 8));
    assert!(board.can_place(&one, 8, 0));
    for k in 0..=BOARD_WIDTH {
        assert!(!board.can_place(&one, k, k));
    }
    assert_eq!(find_placement(&board, &one, &mut StuckRng), Some((0, 8)));
    Ok(())
}

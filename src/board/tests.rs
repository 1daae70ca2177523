use super::*;
use crate::error::GameError;

#[test]
fn test_stone_opponent() {
    assert_eq!(Stone::Black.opponent(), Stone::White);
    assert_eq!(Stone::White.opponent(), Stone::Black);
    assert_eq!(Stone::Empty.opponent(), Stone::Empty);
}

#[test]
fn test_pos_new() {
    let pos = Pos::new(9, 3);
    assert_eq!(pos.x, 9);
    assert_eq!(pos.y, 3);
    assert_eq!(pos.to_string(), "(9, 3)");
}

#[test]
fn test_pos_step() {
    let pos = Pos::new(0, 4);
    assert_eq!(pos.step(1, -1, 2), (2, 2));
    assert_eq!(pos.step(1, 0, -1), (-1, 4));
}

#[test]
fn test_board_defaults() {
    let board = Board::new();
    assert_eq!(board.size(), BOARD_SIZE);
    assert!(board.is_board_empty());
    assert_eq!(board.center(), Pos::new(9, 9));
    assert_eq!(board.empty_cells().count(), 361);
}

#[test]
fn test_board_size_validation() {
    assert!(Board::with_size(15).is_ok());
    assert_eq!(Board::with_size(4), Err(GameError::InvalidBoardSize(4)));
    assert_eq!(Board::with_size(300), Err(GameError::InvalidBoardSize(300)));
}

#[test]
fn test_place_and_read() {
    let mut board = Board::new();
    let pos = Pos::new(3, 7);
    board.place(pos, Stone::Black).unwrap();
    assert_eq!(board.get(pos), Stone::Black);
    assert_eq!(board.value_at(pos), Ok(Stone::Black));
    assert_eq!(board.is_empty(pos), Ok(false));
    assert_eq!(board.is_empty(Pos::new(7, 3)), Ok(true));
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_place_rejects_occupied() {
    let mut board = Board::new();
    let pos = Pos::new(9, 9);
    board.place(pos, Stone::White).unwrap();
    assert_eq!(
        board.place(pos, Stone::Black),
        Err(GameError::CellOccupied { pos, occupant: Stone::White })
    );
    assert_eq!(board.get(pos), Stone::White);
    assert_eq!(board.stone_count(), 1);
}

#[test]
fn test_place_rejects_empty_stone() {
    let mut board = Board::new();
    let pos = Pos::new(1, 1);
    assert_eq!(board.place(pos, Stone::Empty), Err(GameError::EmptyStone(pos)));
    assert!(board.is_board_empty());
}

#[test]
fn test_out_of_bounds() {
    let mut board = Board::with_size(9).unwrap();
    let pos = Pos::new(9, 0);
    let err = GameError::OutOfBounds { pos, size: 9 };
    assert_eq!(board.value_at(pos), Err(err.clone()));
    assert_eq!(board.is_empty(pos), Err(err.clone()));
    assert_eq!(board.place(pos, Stone::Black), Err(err));
}

#[test]
#[should_panic]
fn test_get_out_of_bounds_panics() {
    let board = Board::with_size(9).unwrap();
    let _ = board.get(Pos::new(0, 9));
}

#[test]
fn test_probe_edges() {
    let mut board = Board::with_size(5).unwrap();
    board.place(Pos::new(4, 0), Stone::White).unwrap();
    assert_eq!(board.probe(4, 0), Some(Stone::White));
    assert_eq!(board.probe(0, 0), Some(Stone::Empty));
    assert_eq!(board.probe(-1, 0), None);
    assert_eq!(board.probe(5, 0), None);
    assert_eq!(board.probe(0, 5), None);
}

#[test]
fn test_empty_cells_scan_order() {
    let mut board = Board::with_size(5).unwrap();
    board.place(Pos::new(0, 0), Stone::Black).unwrap();
    let cells: Vec<Pos> = board.empty_cells().take(5).collect();
    // Outer loop over x, inner over y
    assert_eq!(
        cells,
        vec![
            Pos::new(0, 1),
            Pos::new(0, 2),
            Pos::new(0, 3),
            Pos::new(0, 4),
            Pos::new(1, 0),
        ]
    );
}

#[test]
fn test_board_full() {
    let mut board = Board::with_size(5).unwrap();
    for x in 0..5 {
        for y in 0..5 {
            board.place(Pos::new(x, y), Stone::Black).unwrap();
        }
    }
    assert!(board.is_full());
    assert_eq!(board.empty_cells().count(), 0);
}

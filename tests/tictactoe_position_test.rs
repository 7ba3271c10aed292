//! Tests for positions, coordinates and win lines.

use std::collections::HashSet;
use time_travel_tictactoe::{Board, Coordinate, Player, Position, check_winner};

#[test]
fn test_position_to_index() {
    assert_eq!(Position::TopLeft.to_index(), 0);
    assert_eq!(Position::Center.to_index(), 4);
    assert_eq!(Position::BottomRight.to_index(), 8);
}

#[test]
fn test_position_from_index() {
    assert_eq!(Position::from_index(0), Some(Position::TopLeft));
    assert_eq!(Position::from_index(4), Some(Position::Center));
    assert_eq!(Position::from_index(8), Some(Position::BottomRight));
    assert_eq!(Position::from_index(9), None);
}

#[test]
fn test_coordinate_mapping_is_bijection() {
    let coordinates: Vec<Coordinate> = (0..9)
        .map(|i| Position::from_index(i).unwrap().coordinate())
        .collect();

    let expected: Vec<Coordinate> = (1..=3)
        .flat_map(|x| (1..=3).map(move |y| Coordinate { x, y }))
        .collect();
    assert_eq!(coordinates, expected);

    let unique: HashSet<Coordinate> = coordinates.iter().copied().collect();
    assert_eq!(unique.len(), 9);

    for (index, coordinate) in coordinates.into_iter().enumerate() {
        assert_eq!(coordinate.position().map(Position::to_index), Some(index));
    }
}

#[test]
fn test_valid_moves_filters_occupied() {
    let board = Board::new()
        .placed(Position::TopLeft, Player::X)
        .placed(Position::Center, Player::O);

    let valid = Position::valid_moves(&board);
    assert_eq!(valid.len(), 7);
    assert!(!valid.contains(&Position::TopLeft));
    assert!(!valid.contains(&Position::Center));
    assert!(valid.contains(&Position::BottomRight));
}

#[test]
fn test_full_lines_win() {
    let lines: [[usize; 3]; 8] = [
        [0, 1, 2],
        [3, 4, 5],
        [6, 7, 8],
        [0, 3, 6],
        [1, 4, 7],
        [2, 5, 8],
        [0, 4, 8],
        [2, 4, 6],
    ];
    for line in lines {
        for player in [Player::X, Player::O] {
            let board = line.iter().fold(Board::new(), |board, &i| {
                board.placed(Position::from_index(i).unwrap(), player)
            });
            assert_eq!(check_winner(&board), Some(player), "line {:?}", line);
        }
    }
    assert_eq!(check_winner(&Board::new()), None);
}

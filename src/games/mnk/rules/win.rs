//! Win detection logic.

use super::super::{Board, Cell, Occupant};

/// Line directions walked from each origin, in scan order:
/// horizontal, vertical, down-right diagonal, up-right diagonal.
const DIRECTIONS: [(isize, isize); 4] = [(1, 0), (0, 1), (1, 1), (1, -1)];

/// Checks if there is a winner on the board.
///
/// Origins are visited `x` outer and `y` inner; from each occupied origin
/// the four [`DIRECTIONS`] are tried in order. The first run of
/// `win_length` identical occupants is returned, so when several runs
/// coexist the result depends on this traversal.
pub fn check_winner(board: &Board) -> Option<Occupant> {
    board.coords().find_map(|origin| {
        let Some(Cell::Occupied(occupant)) = board.get(origin.x, origin.y) else {
            return None;
        };
        DIRECTIONS
            .iter()
            .any(|&(dx, dy)| run_matches(board, origin.x, origin.y, dx, dy, occupant))
            .then_some(occupant)
    })
}

/// Walks `win_length - 1` steps from the origin, requiring every cell to stay
/// on the board and hold `occupant`.
fn run_matches(
    board: &Board,
    x: usize,
    y: usize,
    dx: isize,
    dy: isize,
    occupant: Occupant,
) -> bool {
    (1..board.win_length() as isize).all(|step| {
        let nx = x.checked_add_signed(dx * step);
        let ny = y.checked_add_signed(dy * step);
        match (nx, ny) {
            (Some(nx), Some(ny)) => board.get(nx, ny) == Some(Cell::Occupied(occupant)),
            _ => false,
        }
    })
}

#[cfg(test)]
mod tests {
    use super::super::super::Move;
    use super::*;

    fn place(board: &mut Board, occupant: Occupant, cells: &[(usize, usize)]) {
        for &(x, y) in cells {
            board.set(Move::new(x, y), Cell::Occupied(occupant));
        }
    }

    #[test]
    fn test_no_winner_empty_board() {
        let board = Board::new(3, 3, 3);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_winner_row() {
        let mut board = Board::new(3, 3, 3);
        place(&mut board, Occupant::Cross, &[(0, 1), (1, 1), (2, 1)]);
        assert_eq!(check_winner(&board), Some(Occupant::Cross));
    }

    #[test]
    fn test_winner_column() {
        let mut board = Board::new(3, 3, 3);
        place(&mut board, Occupant::Circle, &[(2, 0), (2, 1), (2, 2)]);
        assert_eq!(check_winner(&board), Some(Occupant::Circle));
    }

    #[test]
    fn test_winner_diagonal() {
        let mut board = Board::new(3, 3, 3);
        place(&mut board, Occupant::Circle, &[(0, 0), (1, 1), (2, 2)]);
        assert_eq!(check_winner(&board), Some(Occupant::Circle));
    }

    #[test]
    fn test_winner_anti_diagonal() {
        let mut board = Board::new(3, 3, 3);
        place(&mut board, Occupant::Triangle, &[(0, 2), (1, 1), (2, 0)]);
        assert_eq!(check_winner(&board), Some(Occupant::Triangle));
    }

    #[test]
    fn test_no_winner_incomplete() {
        let mut board = Board::new(3, 3, 3);
        place(&mut board, Occupant::Cross, &[(0, 0), (1, 0)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_run_does_not_wrap_around_edge() {
        let mut board = Board::new(4, 4, 3);
        // Adjacent in storage, but (1, 3) is the bottom of its column.
        place(&mut board, Occupant::Circle, &[(1, 2), (1, 3), (2, 0)]);
        assert_eq!(check_winner(&board), None);
    }

    #[test]
    fn test_longer_win_length_on_wide_board() {
        let mut board = Board::new(6, 4, 4);
        place(&mut board, Occupant::Square, &[(1, 3), (2, 3), (3, 3)]);
        assert_eq!(check_winner(&board), None);
        place(&mut board, Occupant::Square, &[(4, 3)]);
        assert_eq!(check_winner(&board), Some(Occupant::Square));
    }

    #[test]
    fn test_first_run_in_scan_order_wins() {
        let mut board = Board::new(4, 4, 3);
        // Cross holds the top row, Circle the left column. Origins are
        // visited x outer, so (0, 1) comes before (1, 0).
        place(&mut board, Occupant::Cross, &[(1, 0), (2, 0), (3, 0)]);
        place(&mut board, Occupant::Circle, &[(0, 1), (0, 2), (0, 3)]);
        assert_eq!(check_winner(&board), Some(Occupant::Circle));
    }

    #[test]
    fn test_leftmost_column_wins_over_rightmost() {
        let mut board = Board::new(3, 3, 3);
        place(&mut board, Occupant::Cross, &[(2, 0), (2, 1), (2, 2)]);
        place(&mut board, Occupant::Circle, &[(0, 0), (0, 1), (0, 2)]);
        assert_eq!(check_winner(&board), Some(Occupant::Circle));
    }
}

use super::types::{Mark, MoveError};

pub const BOARD_CELLS: usize = 9;

pub type Board = [Mark; BOARD_CELLS];

pub fn empty_board() -> Board {
    [Mark::Empty; BOARD_CELLS]
}

/// Empty cell indices in ascending order. The bot's tie-break relies on
/// this scan order, so it must stay ascending.
pub fn get_available_moves(board: &Board) -> Vec<usize> {
    board
        .iter()
        .enumerate()
        .filter(|&(_, &cell)| cell == Mark::Empty)
        .map(|(index, _)| index)
        .collect()
}

/// Pure move application: returns a new board, never touches the input.
pub fn apply_move(board: &Board, index: usize, mark: Mark) -> Result<Board, MoveError> {
    if index >= BOARD_CELLS {
        return Err(MoveError::OutOfRange);
    }
    if board[index] != Mark::Empty {
        return Err(MoveError::CellOccupied);
    }

    let mut next = *board;
    next[index] = mark;
    Ok(next)
}

pub fn is_full(board: &Board) -> bool {
    board.iter().all(|&cell| cell != Mark::Empty)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_apply_move_sets_cell() {
        let board = empty_board();
        let next = apply_move(&board, 4, Mark::X).unwrap();
        assert_eq!(next[4], Mark::X);
        assert_eq!(next.iter().filter(|&&c| c == Mark::Empty).count(), 8);
    }

    #[test]
    fn test_apply_move_rejects_occupied_cell() {
        let board = apply_move(&empty_board(), 4, Mark::X).unwrap();
        let result = apply_move(&board, 4, Mark::O);
        assert_eq!(result, Err(MoveError::CellOccupied));
        // failed application leaves the source board untouched
        assert_eq!(board[4], Mark::X);
    }

    #[test]
    fn test_apply_move_rejects_out_of_range_index() {
        let board = empty_board();
        assert_eq!(apply_move(&board, 9, Mark::X), Err(MoveError::OutOfRange));
        assert_eq!(board, empty_board());
    }

    #[test]
    fn test_available_moves_are_ascending() {
        let mut board = empty_board();
        board[0] = Mark::X;
        board[4] = Mark::O;
        board[7] = Mark::X;
        assert_eq!(get_available_moves(&board), vec![1, 2, 3, 5, 6, 8]);
    }

    #[test]
    fn test_is_full() {
        let mut board = empty_board();
        assert!(!is_full(&board));
        for (index, cell) in board.iter_mut().enumerate() {
            *cell = if index % 2 == 0 { Mark::X } else { Mark::O };
        }
        assert!(is_full(&board));
    }
}

use super::board::Board;
use super::types::{Mark, WinningLine, WIN_PATTERNS};

pub fn check_win(board: &Board, mark: Mark) -> bool {
    WIN_PATTERNS
        .iter()
        .any(|&[a, b, c]| board[a] == mark && board[b] == mark && board[c] == mark)
}

/// First completed pattern in declaration order, so the view can
/// highlight the line.
pub fn check_win_with_line(board: &Board) -> Option<WinningLine> {
    for &[a, b, c] in &WIN_PATTERNS {
        let mark = board[a];
        if mark != Mark::Empty && board[b] == mark && board[c] == mark {
            return Some(WinningLine {
                cells: [a, b, c],
                mark,
            });
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::games::tictactoe::board::{empty_board, is_full};

    #[test]
    fn test_check_win_all_patterns_both_marks() {
        for mark in [Mark::X, Mark::O] {
            for pattern in WIN_PATTERNS {
                let mut board = empty_board();
                for index in pattern {
                    board[index] = mark;
                }
                assert!(check_win(&board, mark), "{mark} should win on {pattern:?}");
                assert!(!check_win(&board, mark.opponent().unwrap()));
            }
        }
    }

    #[test]
    fn test_check_win_empty_board() {
        let board = empty_board();
        assert!(!check_win(&board, Mark::X));
        assert!(!check_win(&board, Mark::O));
    }

    #[test]
    fn test_check_win_with_line_reports_cells() {
        let mut board = empty_board();
        board[2] = Mark::O;
        board[4] = Mark::O;
        board[6] = Mark::O;
        let line = check_win_with_line(&board).unwrap();
        assert_eq!(line.cells, [2, 4, 6]);
        assert_eq!(line.mark, Mark::O);
    }

    #[test]
    fn test_full_board_without_winner() {
        // X X O / O O X / X X O
        let board = [
            Mark::X,
            Mark::X,
            Mark::O,
            Mark::O,
            Mark::O,
            Mark::X,
            Mark::X,
            Mark::X,
            Mark::O,
        ];
        assert!(is_full(&board));
        assert!(!check_win(&board, Mark::X));
        assert!(!check_win(&board, Mark::O));
        assert_eq!(check_win_with_line(&board), None);
    }
}

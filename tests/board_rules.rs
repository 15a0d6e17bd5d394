//! Board rules: move validation, outcome detection and value semantics

use noughts::tictactoe::{Board, Cell, LineAnalyzer, Mark, Move, Outcome, WINNING_LINES};

fn board_with(marks: &[(usize, Mark)]) -> Board {
    let mut cells = [Cell::Empty; 9];
    for &(index, mark) in marks {
        cells[index] = mark.to_cell();
    }
    Board::from_cells(cells)
}

mod outcome_detection {
    use super::*;

    #[test]
    fn test_every_line_wins_for_both_marks() {
        for mark in [Mark::X, Mark::O] {
            for line in WINNING_LINES {
                let marks: Vec<_> = line.iter().map(|&i| (i, mark)).collect();
                let board = board_with(&marks);
                assert_eq!(
                    board.outcome(),
                    Outcome::Win(mark),
                    "line {line:?} should win for {mark}"
                );
                assert!(board.is_terminal());
                assert_eq!(board.winner(), Some(mark));
            }
        }
    }

    #[test]
    fn test_every_line_wins_with_opponent_marks_around_it() {
        for mark in [Mark::X, Mark::O] {
            let other = mark.opponent();
            for line in WINNING_LINES {
                // Fill off-line cells with the opponent, skipping any cell
                // that would hand it a line of its own.
                let mut opponent_cells = [Cell::Empty; 9];
                for i in (0..9).filter(|i| !line.contains(i)) {
                    opponent_cells[i] = other.to_cell();
                    if LineAnalyzer::first_complete_line(&opponent_cells).is_some() {
                        opponent_cells[i] = Cell::Empty;
                    }
                }

                let mut marks: Vec<_> = line.iter().map(|&i| (i, mark)).collect();
                marks.extend(
                    (0..9)
                        .filter(|&i| opponent_cells[i] != Cell::Empty)
                        .map(|i| (i, other)),
                );
                let board = board_with(&marks);

                assert!(board.mark_count(other) >= 3, "line {line:?}");
                assert_eq!(
                    board.outcome(),
                    Outcome::Win(mark),
                    "line {line:?} with opponent marks should win for {mark}"
                );
            }
        }
    }

    #[test]
    fn test_full_board_without_line_is_draw() {
        // X O X
        // X O O
        // O X X
        let board: Board = "XOX/XOO/OXX".parse().unwrap();
        assert!(board.is_full());
        assert_eq!(board.outcome(), Outcome::Draw);
        assert!(board.available_moves().is_empty());
    }

    #[test]
    fn test_win_on_last_cell_is_not_a_draw() {
        // X O X
        // O X O
        // O X X  <- X completes the main diagonal on the final cell
        let board: Board = "XOX/OXO/OXX".parse().unwrap();
        assert!(board.is_full());
        assert_eq!(board.outcome(), Outcome::Win(Mark::X));
    }

    #[test]
    fn test_queries_are_idempotent() {
        // in progress, won by X, drawn
        for text in ["XO./.X./..O", "XXX/OO./...", "XOX/XOO/OXX"] {
            let board: Board = text.parse().unwrap();
            let snapshot = board;

            let outcome = board.outcome();
            let moves = board.available_moves();
            let terminal = board.is_terminal();
            for _ in 0..3 {
                assert_eq!(board.outcome(), outcome, "{text}");
                assert_eq!(board.available_moves(), moves, "{text}");
                assert_eq!(board.is_terminal(), terminal, "{text}");
            }
            assert_eq!(board, snapshot);
        }
    }

    #[test]
    fn test_two_in_a_row_is_in_progress() {
        let board: Board = "XX./OO./...".parse().unwrap();
        assert_eq!(board.outcome(), Outcome::InProgress);
        assert!(!board.is_terminal());
    }
}

mod move_validation {
    use super::*;

    #[test]
    fn test_out_of_range_rejected() {
        let mut board = Board::new();
        assert!(!board.is_valid_move(3, 0));
        assert!(!board.is_valid_move(0, 3));
        assert!(!board.apply_move(3, 3, Mark::X));
        assert_eq!(board, Board::new());
    }

    #[test]
    fn test_occupied_cell_rejected_without_change() {
        let mut board = Board::new();
        assert!(board.apply_move(1, 1, Mark::X));
        let before = board;

        assert!(!board.is_valid_move(1, 1));
        assert!(!board.apply_move(1, 1, Mark::O));
        assert!(!board.apply_move(1, 1, Mark::X));
        assert_eq!(board, before);
        assert_eq!(board.cell(1, 1), Some(Cell::X));
    }

    #[test]
    fn test_with_move_reports_invalid_move() {
        let board: Board = "X........".parse().unwrap();
        let err = board.with_move(Move::new(0, 0), Mark::O).unwrap_err();
        assert!(matches!(err, noughts::Error::InvalidMove { row: 0, col: 0 }));
    }

    #[test]
    fn test_available_moves_row_major() {
        let board: Board = ".X./O../..X".parse().unwrap();
        let moves = board.available_moves();
        assert_eq!(
            moves,
            vec![
                Move::new(0, 0),
                Move::new(0, 2),
                Move::new(1, 1),
                Move::new(1, 2),
                Move::new(2, 0),
                Move::new(2, 1),
            ]
        );
    }
}

mod value_semantics {
    use super::*;

    #[test]
    fn test_copies_are_independent() {
        let original: Board = "X...O....".parse().unwrap();
        let mut copy = original;
        assert!(copy.apply_move(2, 2, Mark::X));

        assert_eq!(original.cell(2, 2), Some(Cell::Empty));
        assert_eq!(copy.cell(2, 2), Some(Cell::X));
        assert_eq!(original.occupied_count(), 2);
    }

    #[test]
    fn test_with_move_leaves_source_untouched() {
        let board = Board::new();
        let next = board.with_move(Move::new(0, 1), Mark::X).unwrap();
        assert_eq!(board, Board::new());
        assert_eq!(next.encode(), ".X.......");
    }
}

mod text_form {
    use super::*;

    #[test]
    fn test_parse_rejects_impossible_counts() {
        let err = "XXX/.../...".parse::<Board>().unwrap_err();
        assert!(matches!(
            err,
            noughts::Error::InvalidPieceCounts { x_count: 3, o_count: 0 }
        ));
    }

    #[test]
    fn test_parse_rejects_wrong_length() {
        assert!("XO.".parse::<Board>().is_err());
        assert!("........../".parse::<Board>().is_err());
    }

    #[test]
    fn test_empty_cell_spellings_and_separators() {
        let dotted: Board = "XX./.O./...".parse().unwrap();
        for text in ["XX-/-O-/---", "XX_ _O_ ___", "XX.|.O.|...", "X X . . O . . . ."] {
            assert_eq!(text.parse::<Board>().unwrap(), dotted, "{text}");
        }

        // A space separates cells; it is never read as an empty cell
        assert!(matches!(
            "XX  .O. ...".parse::<Board>(),
            Err(noughts::Error::InvalidBoardLength { got: 8, .. })
        ));
    }

    #[test]
    fn test_encode_parses_back() {
        let board = board_with(&[(0, Mark::X), (4, Mark::O), (8, Mark::X)]);
        let reparsed: Board = board.encode().parse().unwrap();
        assert_eq!(reparsed, board);
    }

    #[test]
    fn test_display_grid() {
        let board: Board = "X../.O./...".parse().unwrap();
        let text = board.to_string();
        assert!(text.starts_with("    0   1   2"));
        assert!(text.contains("0   X |   |  "));
        assert!(text.contains("---+---+---"));
    }
}

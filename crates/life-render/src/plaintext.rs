//! Plaintext (`.cells`) pattern parsing.
//!
//! ```text
//! !Name: Glider
//! .O.
//! ..O
//! OOO
//! ```

use life_core::{Board, Cell, LifeError, LifeResult};

/// Parse a plaintext pattern into live coordinates.
///
/// `!` lines are comments. `O`, `o`, `#`, `*` and `1` are live; `.`, `0` and
/// spaces are dead. Rows may differ in length.
pub fn parse(text: &str) -> LifeResult<Board> {
    let mut board = Board::default();

    let rows = text.lines().filter(|line| !line.starts_with('!'));
    for (row, line) in rows.enumerate() {
        for (col, ch) in line.trim_end().chars().enumerate() {
            match ch {
                'O' | 'o' | '#' | '*' | '1' => {
                    board.insert(Cell::new(row as i64, col as i64));
                }
                '.' | '0' | ' ' => {}
                other => {
                    return Err(LifeError::InvalidInput(format!(
                        "unexpected {other:?} at line {}, column {}",
                        row + 1,
                        col + 1
                    )));
                }
            }
        }
    }

    Ok(board)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_glider() {
        let board = parse("!Name: Glider\n.O.\n..O\nOOO\n").unwrap();
        let expected: Board = [(0, 1), (1, 2), (2, 0), (2, 1), (2, 2)]
            .into_iter()
            .map(Cell::from)
            .collect();
        assert_eq!(board, expected);
    }

    #[test]
    fn test_parse_ragged_rows() {
        let board = parse("O\n..O").unwrap();
        assert!(board.contains(&Cell::new(0, 0)));
        assert!(board.contains(&Cell::new(1, 2)));
    }

    #[test]
    fn test_parse_rejects_unknown_char() {
        let err = parse(".O.\n.X.\n").unwrap_err();
        assert_eq!(
            err,
            LifeError::InvalidInput("unexpected 'X' at line 2, column 2".to_string())
        );
    }

    #[test]
    fn test_parse_blank_is_empty() {
        assert!(parse("!only a comment\n").unwrap().is_empty());
    }
}

use thiserror::Error;

use crate::{Coord, Coord2, GameConfig};

/// Interpretation of one line of prompt input.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum PickInput {
    Position(Coord2),
    Quit,
}

/// Reasons a pick line was rejected, shown verbatim to the player.
#[derive(Error, Debug, Copy, Clone, PartialEq, Eq)]
pub enum ParsePickError {
    #[error("expected two numbers")]
    ExpectedTwoNumbers,
    #[error("numbers only")]
    NumbersOnly,
    #[error("position outside board")]
    OutsideBoard,
}

const QUIT_TOKENS: [&str; 3] = ["q", "quit", "exit"];

/// Whether the line is one of the quit tokens, in any case.
pub fn is_quit(raw: &str) -> bool {
    let raw = raw.trim();
    QUIT_TOKENS.iter().any(|token| raw.eq_ignore_ascii_case(token))
}

/// Parses a 1-indexed `row col` pick, accepting whitespace or comma
/// separators, into a 0-indexed position on the board.
pub fn parse_pick(raw: &str, config: GameConfig) -> Result<PickInput, ParsePickError> {
    let raw = raw.trim();
    if is_quit(raw) {
        return Ok(PickInput::Quit);
    }

    let mut parts = raw.split([',', ' ', '\t']).filter(|part| !part.is_empty());
    let (Some(first), Some(second), None) = (parts.next(), parts.next(), parts.next()) else {
        return Err(ParsePickError::ExpectedTwoNumbers);
    };

    let row = parse_axis(first, config.rows)?;
    let col = parse_axis(second, config.cols)?;
    Ok(PickInput::Position((row, col)))
}

/// Converts one 1-indexed token into a 0-indexed coordinate below `limit`.
fn parse_axis(token: &str, limit: Coord) -> Result<Coord, ParsePickError> {
    if !token.bytes().all(|byte| byte.is_ascii_digit()) {
        return Err(ParsePickError::NumbersOnly);
    }

    // an all-digit token too long for u64 cannot be on any board
    let index: u64 = token.parse().map_err(|_| ParsePickError::OutsideBoard)?;
    let coord = index
        .checked_sub(1)
        .and_then(|zero_based| Coord::try_from(zero_based).ok())
        .ok_or(ParsePickError::OutsideBoard)?;

    if coord < limit {
        Ok(coord)
    } else {
        Err(ParsePickError::OutsideBoard)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const CONFIG: GameConfig = GameConfig::new_unchecked(4, 4);

    #[test]
    fn separators_and_padding_parse_alike() {
        for line in ["2 3", "2,3", "2, 3", "  2\t3 "] {
            assert_eq!(
                parse_pick(line, CONFIG),
                Ok(PickInput::Position((1, 2))),
                "line: {line:?}"
            );
        }
    }

    #[test]
    fn quit_tokens_are_recognized_in_any_case() {
        for line in ["q", "Q", "quit", "QUIT", "Exit", " exit "] {
            assert_eq!(parse_pick(line, CONFIG), Ok(PickInput::Quit), "line: {line:?}");
        }
        assert!(!is_quit("quitter"));
    }

    #[test]
    fn wrong_token_count_is_rejected() {
        for line in ["", "2", "2 3 4", ", ,"] {
            assert_eq!(
                parse_pick(line, CONFIG),
                Err(ParsePickError::ExpectedTwoNumbers),
                "line: {line:?}"
            );
        }
    }

    #[test]
    fn non_numeric_tokens_are_rejected() {
        for line in ["a b", "2 x", "-1 2", "1.5 2"] {
            assert_eq!(
                parse_pick(line, CONFIG),
                Err(ParsePickError::NumbersOnly),
                "line: {line:?}"
            );
        }
    }

    #[test]
    fn out_of_range_positions_are_rejected() {
        for line in ["0 1", "1 0", "5 1", "1 5", "99 1", "18446744073709551616 1"] {
            assert_eq!(
                parse_pick(line, CONFIG),
                Err(ParsePickError::OutsideBoard),
                "line: {line:?}"
            );
        }
    }
}

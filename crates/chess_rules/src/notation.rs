//! Four-character move notation
//!
//! `e2e4` is file, rank, file, rank. Files are case-insensitive. Rank `8`
//! maps to row index 0 and rank `1` to row index 7.

use std::str::FromStr;

use crate::constants::BOARD_SIZE;
use crate::error::{ParseError, ParseResult};
use crate::types::{Move, Square};

const NOTATION_LEN: usize = 4;

/// Parse `file rank file rank` into a [`Move`]
///
/// # Errors
///
/// [`ParseError::Length`] unless the text is exactly four characters, then
/// the first out-of-range file or rank character.
///
/// # Examples
///
/// ```rust,ignore
/// let mv = parse_move("E2e4")?;
/// assert_eq!(mv.to_string(), "e2e4");
/// ```
pub fn parse_move(text: &str) -> ParseResult<Move> {
    let chars: Vec<char> = text.chars().collect();
    if chars.len() != NOTATION_LEN {
        return Err(ParseError::Length { len: chars.len() });
    }

    let from = square_from_chars(chars[0], chars[1], 0)?;
    let to = square_from_chars(chars[2], chars[3], 2)?;
    Ok(Move::new(from, to))
}

/// Parse a two-character square such as `d1`
pub fn parse_square(text: &str) -> ParseResult<Square> {
    let mut chars = text.chars();
    match (chars.next(), chars.next(), chars.next()) {
        (Some(file), Some(rank), None) => square_from_chars(file, rank, 0),
        _ => Err(ParseError::Length {
            len: text.chars().count(),
        }),
    }
}

/// Inverse of [`parse_move`]; always lowercase
pub fn unparse_move(mv: Move) -> String {
    mv.to_string()
}

fn square_from_chars(file: char, rank: char, position: usize) -> ParseResult<Square> {
    let file_index = match file.to_ascii_lowercase() {
        c @ 'a'..='h' => c as u8 - b'a',
        _ => {
            return Err(ParseError::InvalidFile {
                position,
                found: file,
            })
        }
    };

    let rank_index = match rank {
        c @ '1'..='8' => BOARD_SIZE as u8 - (c as u8 - b'0'),
        _ => {
            return Err(ParseError::InvalidRank {
                position: position + 1,
                found: rank,
            })
        }
    };

    Square::new(file_index, rank_index).ok_or(ParseError::InvalidRank {
        position: position + 1,
        found: rank,
    })
}

impl FromStr for Move {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_move(s)
    }
}

impl FromStr for Square {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_square(s)
    }
}

//! Square label conversions for the placement boundary.
//!
//! Converts between human-readable labels (e.g., `D4`) and internal square
//! indexes. Row 0 holds displayed rank 8, so `row = 8 - rank`; column 0 is
//! file 'A'. The boundary must go through these helpers instead of re-deriving
//! board geometry.

use crate::board::board_types::{square_at, square_col, square_row, Square};
use crate::errors::{PlacementError, PlacementResult};

/// Convert a file letter ('A'..'H', case-insensitive) to a column index.
#[inline]
pub fn column_from_letter(letter: char) -> PlacementResult<u8> {
    let lower = letter.to_ascii_lowercase();
    if ('a'..='h').contains(&lower) {
        Ok(lower as u8 - b'a')
    } else {
        Err(PlacementError::InvalidFormat(letter.to_string()))
    }
}

/// Convert a displayed rank (1..=8) to a row index.
#[inline]
pub fn row_from_rank(rank: i8) -> PlacementResult<u8> {
    if (1..=8).contains(&rank) {
        Ok((8 - rank) as u8)
    } else {
        Err(PlacementError::OutOfRange { row: 8 - rank, col: 0 })
    }
}

/// Parse a two-character label (for example: "D4") into a square index.
/// Unparseable text is `InvalidFormat`; a digit that parses but lands off the
/// board (0 or 9) is `OutOfRange`.
pub fn square_from_label(label: &str) -> PlacementResult<Square> {
    let trimmed = label.trim();
    let mut chars = trimmed.chars();

    let (Some(letter), Some(digit), None) = (chars.next(), chars.next(), chars.next()) else {
        return Err(PlacementError::InvalidFormat(label.to_owned()));
    };

    let col = column_from_letter(letter)?;
    let rank = digit
        .to_digit(10)
        .ok_or_else(|| PlacementError::InvalidFormat(label.to_owned()))? as i8;
    let row = row_from_rank(rank)?;

    square_at(row as i8, col as i8)
}

/// Convert a square index back to its display label (for example: "D4").
pub fn square_to_label(square: Square) -> PlacementResult<String> {
    if square as usize >= 64 {
        return Err(PlacementError::OutOfRange {
            row: (square / 8) as i8,
            col: (square % 8) as i8,
        });
    }

    let letter = char::from(b'A' + square_col(square));
    let rank = 8 - square_row(square);
    Ok(format!("{letter}{rank}"))
}

#[cfg(test)]
mod tests {
    use super::{column_from_letter, row_from_rank, square_from_label, square_to_label};
    use crate::board::board_types::square_index;
    use crate::errors::PlacementError;

    #[test]
    fn labels_map_to_row_major_squares() {
        assert_eq!(square_from_label("A8").expect("A8 should parse"), 0);
        assert_eq!(square_from_label("H1").expect("H1 should parse"), 63);
        assert_eq!(
            square_from_label("D4").expect("D4 should parse"),
            square_index(4, 3)
        );
    }

    #[test]
    fn parsing_is_case_insensitive_and_trims() {
        assert_eq!(
            square_from_label("d4").expect("lowercase should parse"),
            square_from_label(" D4 ").expect("padded should parse")
        );
    }

    #[test]
    fn malformed_labels_are_invalid_format() {
        for label in ["", "D", "D44", "44", "Z4", "D?"] {
            assert!(
                matches!(square_from_label(label), Err(PlacementError::InvalidFormat(_))),
                "label {label:?} should be rejected as malformed"
            );
        }
    }

    #[test]
    fn off_board_rank_is_out_of_range() {
        assert!(matches!(
            square_from_label("D9"),
            Err(PlacementError::OutOfRange { .. })
        ));
        assert!(matches!(
            square_from_label("D0"),
            Err(PlacementError::OutOfRange { .. })
        ));
        assert!(matches!(row_from_rank(9), Err(PlacementError::OutOfRange { .. })));
    }

    #[test]
    fn letters_map_to_columns() {
        assert_eq!(column_from_letter('A').expect("A should parse"), 0);
        assert_eq!(column_from_letter('h').expect("h should parse"), 7);
        assert!(matches!(
            column_from_letter('1'),
            Err(PlacementError::InvalidFormat(_))
        ));
    }

    #[test]
    fn round_trip_label_conversions() {
        for square in 0..64 {
            let label = square_to_label(square).expect("square should convert");
            assert_eq!(square_from_label(&label).expect("label should parse"), square);
        }
        assert!(square_to_label(64).is_err());
    }
}

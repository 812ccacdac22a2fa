//! Miscellaneous project utilities.

use crate::EDGE_LENGTH;
use std::fmt::{self, Write};

/// Format 64 characters into a grid with 1-based row and column labels.
/// `piece_iter` must yield exactly 64 items.
pub fn format_grid<T, W>(mut piece_iter: T, f: &mut W) -> fmt::Result
where
    T: Iterator<Item = char>,
    W: Write + ?Sized,
{
    f.write_str("  ")?;
    for column in 1..=EDGE_LENGTH {
        write!(f, " {}", column)?;
    }

    for row in 1..=EDGE_LENGTH {
        write!(f, "\n{} ", row)?;
        for _ in 0..EDGE_LENGTH {
            write!(f, " {}", piece_iter.next().ok_or(fmt::Error)?)?;
        }
    }

    match piece_iter.next() {
        None => Ok(()),
        _ => Err(fmt::Error),
    }
}

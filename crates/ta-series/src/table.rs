//! Named-column price tables.
//!
//! A [`PriceTable`] holds several price series (`Open`, `High`, `Low`,
//! `Close`, ...) that share one ordered index. Indicators that need more than
//! one column, or that let the caller pick the column, read from a table by
//! name. Every column has the same length as the table, so outputs computed
//! from any column align index-for-index with every other column.
//!
//! # Example
//!
//! ```
//! use ta_series::table::{PriceTable, CLOSE, HIGH, LOW};
//!
//! let table = PriceTable::from_columns([
//!     (HIGH, vec![11.0_f64, 12.0, 13.0]),
//!     (LOW, vec![9.0, 10.0, 11.0]),
//!     (CLOSE, vec![10.0, 11.0, 12.0]),
//! ])
//! .unwrap()
//! .with_index(vec![1_700_000_000, 1_700_000_060, 1_700_000_120])
//! .unwrap();
//!
//! assert_eq!(table.len(), 3);
//! assert_eq!(table.column(CLOSE).unwrap(), &[10.0, 11.0, 12.0]);
//! assert!(table.column("Adj Close").is_err());
//! ```

use crate::error::{Error, Result};
use crate::traits::SeriesElement;

/// Conventional name of the opening-price column.
pub const OPEN: &str = "Open";
/// Conventional name of the high-price column.
pub const HIGH: &str = "High";
/// Conventional name of the low-price column.
pub const LOW: &str = "Low";
/// Conventional name of the closing-price column.
pub const CLOSE: &str = "Close";
/// Conventional name of the volume column.
pub const VOLUME: &str = "Volume";

/// An ordered set of equally long, named price series.
///
/// Column names are case-sensitive and keep insertion order. The optional
/// index holds one label per row (typically a Unix timestamp); it is carried
/// for the caller and never reordered.
#[derive(Debug, Clone, PartialEq)]
pub struct PriceTable<T> {
    index: Option<Vec<i64>>,
    columns: Vec<(String, Vec<T>)>,
}

impl<T> Default for PriceTable<T> {
    fn default() -> Self {
        Self {
            index: None,
            columns: Vec::new(),
        }
    }
}

impl<T: SeriesElement> PriceTable<T> {
    /// Creates an empty table with no columns and no index.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Builds a table from `(name, values)` pairs.
    ///
    /// The first column fixes the table length. A repeated name replaces the
    /// earlier column.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if any column differs in length from the first.
    pub fn from_columns<I, S>(columns: I) -> Result<Self>
    where
        I: IntoIterator<Item = (S, Vec<T>)>,
        S: Into<String>,
    {
        let mut table = Self::new();
        for (name, values) in columns {
            table.insert_column(name, values)?;
        }
        Ok(table)
    }

    /// Builds a single-column table holding closing prices.
    #[must_use]
    pub fn from_close(close: Vec<T>) -> Self {
        Self {
            index: None,
            columns: vec![(CLOSE.to_string(), close)],
        }
    }

    /// Builds a `High`/`Low`/`Close` table.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if the three series differ in length.
    pub fn from_hlc(high: Vec<T>, low: Vec<T>, close: Vec<T>) -> Result<Self> {
        Self::from_columns([(HIGH, high), (LOW, low), (CLOSE, close)])
    }

    /// Attaches an index of row labels.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if the index length differs from the
    /// table length (a table without columns accepts any length).
    pub fn with_index(mut self, index: Vec<i64>) -> Result<Self> {
        if let Some(first) = self.columns.first() {
            check_len("index", first.1.len(), index.len())?;
        }
        self.index = Some(index);
        Ok(self)
    }

    /// Inserts a column, replacing any existing column with the same name.
    ///
    /// # Errors
    ///
    /// Returns `Error::LengthMismatch` if the table already has a length and
    /// `values` does not match it.
    pub fn insert_column(&mut self, name: impl Into<String>, values: Vec<T>) -> Result<()> {
        let name = name.into();
        if let Some(expected) = self.shape() {
            check_len(&name, expected, values.len())?;
        }

        if let Some(slot) = self.columns.iter_mut().find(|(existing, _)| *existing == name) {
            slot.1 = values;
        } else {
            self.columns.push((name, values));
        }
        Ok(())
    }

    /// Returns the named column.
    ///
    /// # Errors
    ///
    /// Returns `Error::MissingColumn` if no column has that exact name.
    pub fn column(&self, name: &str) -> Result<&[T]> {
        self.get(name).ok_or_else(|| Error::MissingColumn {
            column: name.to_string(),
        })
    }

    /// Returns the named column, or `None` if it is absent.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&[T]> {
        self.columns
            .iter()
            .find(|(existing, _)| existing == name)
            .map(|(_, values)| values.as_slice())
    }

    /// Returns `true` if the table has a column with this name.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.get(name).is_some()
    }

    /// Column names in insertion order.
    pub fn column_names(&self) -> impl Iterator<Item = &str> {
        self.columns.iter().map(|(name, _)| name.as_str())
    }

    /// Row labels, if an index was attached.
    #[must_use]
    pub fn index(&self) -> Option<&[i64]> {
        self.index.as_deref()
    }

    /// Number of rows.
    #[must_use]
    pub fn len(&self) -> usize {
        self.shape().unwrap_or(0)
    }

    /// Returns `true` if the table has no rows.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn shape(&self) -> Option<usize> {
        self.columns
            .first()
            .map(|(_, values)| values.len())
            .or_else(|| self.index.as_ref().map(Vec::len))
    }
}

fn check_len(column: &str, expected: usize, actual: usize) -> Result<()> {
    if expected == actual {
        Ok(())
    } else {
        Err(Error::LengthMismatch {
            column: column.to_string(),
            expected,
            actual,
        })
    }
}

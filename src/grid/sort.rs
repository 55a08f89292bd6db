//! Sort state, the tri-state header indicator and the record comparator.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::columns::Column;
use super::search::fold;
use super::value::CellValue;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortDirection {
    #[default]
    Asc,
    Desc,
}

impl SortDirection {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// How a column's values are compared.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortPolicy {
    /// Accent- and case-folded text, raw text as tie-breaker.
    #[default]
    Lexicographic,
    Numeric,
    Date,
}

/// Caller-owned sort state echoed back into the grid.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SortState {
    pub key: Option<String>,
    pub direction: SortDirection,
}

impl SortState {
    pub fn new(key: impl Into<String>, direction: SortDirection) -> Self {
        Self {
            key: Some(key.into()),
            direction,
        }
    }

    pub fn indicator(&self, column_key: &str) -> SortIndicator {
        SortIndicator::for_column(column_key, self.key.as_deref(), self.direction)
    }

    /// The sort a header click on `column_key` requests.
    ///
    /// Same column flips the direction; a different column always starts
    /// ascending.
    pub fn next_request(&self, column_key: &str) -> (String, SortDirection) {
        let direction = match self.key.as_deref() {
            Some(current) if current == column_key => self.direction.toggled(),
            _ => SortDirection::Asc,
        };
        (column_key.to_string(), direction)
    }
}

/// What a sortable header shows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortIndicator {
    Unsorted,
    Ascending,
    Descending,
}

impl SortIndicator {
    pub fn for_column(column_key: &str, sort_key: Option<&str>, direction: SortDirection) -> Self {
        match sort_key {
            Some(key) if key == column_key => match direction {
                SortDirection::Asc => Self::Ascending,
                SortDirection::Desc => Self::Descending,
            },
            _ => Self::Unsorted,
        }
    }

    pub fn glyph(self) -> &'static str {
        match self {
            Self::Unsorted => "↕",
            Self::Ascending => "▲",
            Self::Descending => "▼",
        }
    }
}

/// One level of a [`SortComparator`].
#[derive(Debug)]
pub struct SortKey<'a, R> {
    pub column: &'a Column<R>,
    pub direction: SortDirection,
}

/// Stable two-key comparator over records.
///
/// The secondary key only breaks ties of the primary key. Empty values sort
/// last in both directions so blank rows never crowd the first page.
#[derive(Debug)]
pub struct SortComparator<'a, R> {
    primary: SortKey<'a, R>,
    secondary: Option<SortKey<'a, R>>,
}

impl<'a, R> SortComparator<'a, R> {
    pub fn new(column: &'a Column<R>, direction: SortDirection) -> Self {
        Self {
            primary: SortKey { column, direction },
            secondary: None,
        }
    }

    /// Resolve a caller sort state against the column set.
    ///
    /// Returns `None` when nothing is sorted or the key names no column.
    /// Hidden columns still resolve: visibility and sorting are independent.
    pub fn from_state(columns: &'a [Column<R>], state: &SortState) -> Option<Self> {
        let key = state.key.as_deref()?;
        let column = columns.iter().find(|c| c.key() == key)?;
        Some(Self::new(column, state.direction))
    }

    pub fn then_by(mut self, column: &'a Column<R>, direction: SortDirection) -> Self {
        self.secondary = Some(SortKey { column, direction });
        self
    }

    pub fn compare(&self, a: &R, b: &R) -> Ordering {
        let primary = compare_key(&self.primary, a, b);
        if primary != Ordering::Equal {
            return primary;
        }
        match &self.secondary {
            Some(secondary) => compare_key(secondary, a, b),
            None => Ordering::Equal,
        }
    }

    /// Stable in-place sort.
    pub fn sort(&self, records: &mut [&R]) {
        records.sort_by(|a, b| self.compare(a, b));
    }
}

fn compare_key<R>(key: &SortKey<'_, R>, a: &R, b: &R) -> Ordering {
    let left = key.column.value(a);
    let right = key.column.value(b);
    match (left.is_empty(), right.is_empty()) {
        (true, true) => return Ordering::Equal,
        (true, false) => return Ordering::Greater,
        (false, true) => return Ordering::Less,
        (false, false) => {}
    }
    let ordering = compare_values(key.column.sort_policy(), &left, &right);
    match key.direction {
        SortDirection::Asc => ordering,
        SortDirection::Desc => ordering.reverse(),
    }
}

pub fn compare_values(policy: SortPolicy, left: &CellValue, right: &CellValue) -> Ordering {
    match policy {
        SortPolicy::Numeric => match (left.as_number(), right.as_number()) {
            (Some(l), Some(r)) => l.total_cmp(&r),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => compare_text(left, right),
        },
        SortPolicy::Date => match (left.as_datetime(), right.as_datetime()) {
            (Some(l), Some(r)) => l.cmp(&r),
            (Some(_), None) => Ordering::Less,
            (None, Some(_)) => Ordering::Greater,
            (None, None) => compare_text(left, right),
        },
        SortPolicy::Lexicographic => compare_text(left, right),
    }
}

fn compare_text(left: &CellValue, right: &CellValue) -> Ordering {
    let (left, right) = (left.to_string(), right.to_string());
    fold(&left)
        .cmp(&fold(&right))
        .then_with(|| left.cmp(&right))
}

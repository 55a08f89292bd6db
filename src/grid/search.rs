//! Accent- and case-insensitive substring search.
//!
//! Callers filter their collection with [`SearchPredicate`] before handing it
//! to the grid. "Agência" matches "agencia", "AGENCIA" and "gên".

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

use super::columns::Column;

/// Fold text for comparison: canonical decomposition, combining marks
/// dropped, lowercased.
pub fn fold(text: &str) -> String {
    text.nfd()
        .filter(|c| !is_combining_mark(*c))
        .flat_map(char::to_lowercase)
        .collect()
}

/// A prepared search query.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct SearchPredicate {
    needle: String,
}

impl SearchPredicate {
    pub fn new(query: &str) -> Self {
        Self {
            needle: fold(query.trim()),
        }
    }

    /// A blank query matches everything.
    pub fn is_blank(&self) -> bool {
        self.needle.is_empty()
    }

    pub fn matches(&self, haystack: &str) -> bool {
        self.is_blank() || fold(haystack).contains(&self.needle)
    }

    /// True if any of the values contains the query.
    pub fn matches_any<I, S>(&self, values: I) -> bool
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        if self.is_blank() {
            return true;
        }
        values
            .into_iter()
            .any(|value| fold(value.as_ref()).contains(&self.needle))
    }

    /// Keep the records whose displayed text in any of `columns` matches.
    ///
    /// Matching runs against the rendered cell text, so a status column that
    /// renders `true` as "Active" is searchable as "active".
    pub fn filter<'a, R>(&self, records: &'a [R], columns: &[Column<R>]) -> Vec<&'a R> {
        if self.is_blank() {
            return records.iter().collect();
        }
        records
            .iter()
            .filter(|record| {
                self.matches_any(columns.iter().map(|column| column.display(record)))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fold_strips_accents_and_case() {
        assert_eq!(fold("Agência São Paulo"), "agencia sao paulo");
        assert_eq!(fold("ÇÃO"), "cao");
    }

    #[test]
    fn blank_query_matches_everything() {
        let predicate = SearchPredicate::new("   ");
        assert!(predicate.is_blank());
        assert!(predicate.matches(""));
        assert!(predicate.matches("anything"));
    }

    #[test]
    fn query_is_folded_too() {
        let predicate = SearchPredicate::new("GÊN");
        assert!(predicate.matches("Agencia"));
        assert!(!predicate.matches("Unidade"));
    }

    #[test]
    fn matches_any_checks_each_value() {
        let predicate = SearchPredicate::new("fonte");
        assert!(predicate.matches_any(["Recurso", "Fonte própria"]));
        assert!(!predicate.matches_any(["Recurso", "Fornecedor"]));
    }
}

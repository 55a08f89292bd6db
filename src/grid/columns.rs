//! Column descriptors and the visibility set driven by the column picker.

use std::collections::BTreeSet;
use std::fmt;

use super::sort::SortPolicy;
use super::value::CellValue;

pub type Accessor<R> = Box<dyn Fn(&R) -> CellValue>;
pub type CellRenderer<R> = Box<dyn Fn(&CellValue, &R) -> String>;

/// Declarative description of one table column.
///
/// `key` is the stable identity used by sorting, visibility and the picker.
/// The accessor replaces stringly-typed property lookup; synthetic columns
/// pair an empty accessor with a renderer.
pub struct Column<R> {
    key: String,
    title: String,
    sortable: bool,
    width: Option<u16>,
    policy: SortPolicy,
    accessor: Accessor<R>,
    render: Option<CellRenderer<R>>,
}

impl<R> Column<R> {
    pub fn new(
        key: impl Into<String>,
        title: impl Into<String>,
        accessor: impl Fn(&R) -> CellValue + 'static,
    ) -> Self {
        Self {
            key: key.into(),
            title: title.into(),
            sortable: false,
            width: None,
            policy: SortPolicy::Lexicographic,
            accessor: Box::new(accessor),
            render: None,
        }
    }

    /// A column with no backing field; its text comes from `render` alone.
    pub fn synthetic(
        key: impl Into<String>,
        title: impl Into<String>,
        render: impl Fn(&CellValue, &R) -> String + 'static,
    ) -> Self {
        Self::new(key, title, |_| CellValue::Empty).render(render)
    }

    pub fn sortable(mut self) -> Self {
        self.sortable = true;
        self
    }

    pub fn width(mut self, width: u16) -> Self {
        self.width = Some(width);
        self
    }

    pub fn policy(mut self, policy: SortPolicy) -> Self {
        self.policy = policy;
        self
    }

    pub fn render(mut self, render: impl Fn(&CellValue, &R) -> String + 'static) -> Self {
        self.render = Some(Box::new(render));
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn is_sortable(&self) -> bool {
        self.sortable
    }

    pub fn width_hint(&self) -> Option<u16> {
        self.width
    }

    pub fn sort_policy(&self) -> SortPolicy {
        self.policy
    }

    pub fn value(&self, record: &R) -> CellValue {
        (self.accessor)(record)
    }

    /// Cell text: `render(value, record)` when a renderer exists, otherwise
    /// the raw value coerced to text.
    pub fn display(&self, record: &R) -> String {
        let value = self.value(record);
        match &self.render {
            Some(render) => render(&value, record),
            None => value.to_string(),
        }
    }
}

impl<R> fmt::Debug for Column<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Column")
            .field("key", &self.key)
            .field("title", &self.title)
            .field("sortable", &self.sortable)
            .field("width", &self.width)
            .field("policy", &self.policy)
            .field("render", &self.render.is_some())
            .finish()
    }
}

pub fn column_keys<R>(columns: &[Column<R>]) -> Vec<String> {
    columns.iter().map(|c| c.key.clone()).collect()
}

/// Which columns are currently shown.
///
/// Membership is tracked as a hidden set against the original column order,
/// so visibility filters columns but never reorders them. Sorting is not
/// consulted: hiding the active sort column leaves the sort untouched.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ColumnVisibility {
    order: Vec<String>,
    hidden: BTreeSet<String>,
}

impl ColumnVisibility {
    /// Every column visible.
    pub fn all(keys: Vec<String>) -> Self {
        Self {
            order: keys,
            hidden: BTreeSet::new(),
        }
    }

    pub fn is_visible(&self, key: &str) -> bool {
        self.order.iter().any(|k| k == key) && !self.hidden.contains(key)
    }

    /// Flip a column. Unknown keys are ignored. Returns the new visibility.
    pub fn toggle(&mut self, key: &str) -> bool {
        let visible = !self.is_visible(key);
        self.set(key, visible);
        visible
    }

    pub fn set(&mut self, key: &str, visible: bool) {
        if !self.order.iter().any(|k| k == key) {
            return;
        }
        if visible {
            self.hidden.remove(key);
        } else {
            self.hidden.insert(key.to_string());
        }
    }

    pub fn show_all(&mut self) {
        self.hidden.clear();
    }

    /// Visible keys in original column order.
    pub fn visible_keys(&self) -> Vec<String> {
        self.order
            .iter()
            .filter(|k| !self.hidden.contains(*k))
            .cloned()
            .collect()
    }

    pub fn all_keys(&self) -> &[String] {
        &self.order
    }

    pub fn visible_count(&self) -> usize {
        self.order.len() - self.hidden.len()
    }

    /// Columns to render, in their declared order.
    pub fn filter<'a, R>(&self, columns: &'a [Column<R>]) -> Vec<&'a Column<R>> {
        columns
            .iter()
            .filter(|c| !self.hidden.contains(c.key()))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Agency {
        name: &'static str,
        active: bool,
    }

    fn columns() -> Vec<Column<Agency>> {
        vec![
            Column::new("name", "Name", |a: &Agency| CellValue::text(a.name)).sortable(),
            Column::new("active", "Status", |a: &Agency| CellValue::Bool(a.active)).render(
                |value, _| match value {
                    CellValue::Bool(true) => "Active".to_string(),
                    _ => "Inactive".to_string(),
                },
            ),
            Column::synthetic("badge", "", |_, a: &Agency| format!("#{}", a.name.len())),
        ]
    }

    #[test]
    fn display_prefers_renderer() {
        let cols = columns();
        let agency = Agency {
            name: "Sede",
            active: true,
        };
        assert_eq!(cols[0].display(&agency), "Sede");
        assert_eq!(cols[1].display(&agency), "Active");
        assert_eq!(cols[2].display(&agency), "#4");
    }

    #[test]
    fn hiding_keeps_declared_order() {
        let cols = columns();
        let mut visibility = ColumnVisibility::all(column_keys(&cols));
        visibility.toggle("active");
        let keys: Vec<&str> = visibility.filter(&cols).iter().map(|c| c.key()).collect();
        assert_eq!(keys, vec!["name", "badge"]);

        visibility.toggle("active");
        assert_eq!(visibility.visible_keys(), vec!["name", "active", "badge"]);
    }

    #[test]
    fn unknown_keys_are_ignored() {
        let mut visibility = ColumnVisibility::all(vec!["a".into()]);
        visibility.set("zzz", false);
        assert_eq!(visibility.visible_count(), 1);
        assert!(!visibility.is_visible("zzz"));
    }
}

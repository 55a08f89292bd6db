//! Per-row actions.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ActionVariant {
    #[default]
    Default,
    Primary,
    Danger,
}

/// One button in a row's action rail.
///
/// Activating it emits [`GridEvent::RowAction`](super::GridEvent::RowAction)
/// carrying `id`; the page maps the id back to its handler.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RowAction {
    pub id: &'static str,
    pub icon: &'static str,
    pub label: String,
    pub variant: ActionVariant,
}

impl RowAction {
    pub fn new(id: &'static str, icon: &'static str, label: impl Into<String>) -> Self {
        Self {
            id,
            icon,
            label: label.into(),
            variant: ActionVariant::Default,
        }
    }

    pub fn variant(mut self, variant: ActionVariant) -> Self {
        self.variant = variant;
        self
    }
}

pub type ActionFactory<R> = Box<dyn Fn(&R) -> Vec<RowAction>>;

/// Where row actions come from.
///
/// A per-row factory lets actions follow record state ("Activate" versus
/// "Deactivate"). Being an enum, a static list and a factory can never be
/// in effect together; the factory wins by construction.
pub enum ActionSource<R> {
    None,
    Static(Vec<RowAction>),
    PerRow(ActionFactory<R>),
}

impl<R> ActionSource<R> {
    pub fn per_row(factory: impl Fn(&R) -> Vec<RowAction> + 'static) -> Self {
        Self::PerRow(Box::new(factory))
    }

    pub fn has_actions(&self) -> bool {
        match self {
            Self::None => false,
            Self::Static(actions) => !actions.is_empty(),
            Self::PerRow(_) => true,
        }
    }

    pub fn for_record(&self, record: &R) -> Vec<RowAction> {
        match self {
            Self::None => Vec::new(),
            Self::Static(actions) => actions.clone(),
            Self::PerRow(factory) => factory(record),
        }
    }
}

impl<R> Default for ActionSource<R> {
    fn default() -> Self {
        Self::None
    }
}

impl<R> fmt::Debug for ActionSource<R> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::None => f.write_str("ActionSource::None"),
            Self::Static(actions) => f.debug_tuple("ActionSource::Static").field(actions).finish(),
            Self::PerRow(_) => f.write_str("ActionSource::PerRow(..)"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn per_row_actions_follow_record_state() {
        let source = ActionSource::per_row(|active: &bool| {
            if *active {
                vec![RowAction::new("inactivate", "⊘", "Deactivate").variant(ActionVariant::Danger)]
            } else {
                vec![RowAction::new("reactivate", "↺", "Activate")]
            }
        });
        assert_eq!(source.for_record(&true)[0].id, "inactivate");
        assert_eq!(source.for_record(&false)[0].id, "reactivate");
    }

    #[test]
    fn empty_static_list_has_no_rail() {
        let source: ActionSource<()> = ActionSource::Static(Vec::new());
        assert!(!source.has_actions());
    }
}

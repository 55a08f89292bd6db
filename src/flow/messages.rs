//! Dialog texts for each flow, with `{entity}` substitution.

use serde::{Deserialize, Serialize};

use super::state::FlowKind;

/// Message templates. `{entity}` is replaced with the screen's entity label
/// ("agency", "funding source").
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct FlowMessages {
    pub inactivate_title: String,
    pub inactivate_description: String,
    pub reactivate_title: String,
    pub reactivate_description: String,
    pub creating: String,
    pub created: String,
    pub editing: String,
    pub edited: String,
    pub inactivating: String,
    pub inactivated: String,
    pub reactivating: String,
    pub reactivated: String,
}

impl Default for FlowMessages {
    fn default() -> Self {
        Self {
            inactivate_title: "Deactivate {entity}?".to_string(),
            inactivate_description:
                "The {entity} will no longer be offered for new records. You can reactivate it later."
                    .to_string(),
            reactivate_title: "Reactivate {entity}?".to_string(),
            reactivate_description: "The {entity} will be available again.".to_string(),
            creating: "Creating {entity}...".to_string(),
            created: "The {entity} was created successfully.".to_string(),
            editing: "Saving {entity}...".to_string(),
            edited: "The {entity} was updated successfully.".to_string(),
            inactivating: "Deactivating {entity}...".to_string(),
            inactivated: "The {entity} was deactivated.".to_string(),
            reactivating: "Reactivating {entity}...".to_string(),
            reactivated: "The {entity} was reactivated.".to_string(),
        }
    }
}

impl FlowMessages {
    pub fn processing(&self, kind: FlowKind, entity: &str) -> String {
        let template = match kind {
            FlowKind::Create => &self.creating,
            FlowKind::Edit => &self.editing,
            FlowKind::Inactivate => &self.inactivating,
            FlowKind::Reactivate => &self.reactivating,
        };
        substitute(template, entity)
    }

    pub fn success(&self, kind: FlowKind, entity: &str) -> String {
        let template = match kind {
            FlowKind::Create => &self.created,
            FlowKind::Edit => &self.edited,
            FlowKind::Inactivate => &self.inactivated,
            FlowKind::Reactivate => &self.reactivated,
        };
        substitute(template, entity)
    }

    pub fn inactivate_confirmation(&self, entity: &str) -> (String, String) {
        (
            substitute(&self.inactivate_title, entity),
            substitute(&self.inactivate_description, entity),
        )
    }

    pub fn reactivate_confirmation(&self, entity: &str) -> (String, String) {
        (
            substitute(&self.reactivate_title, entity),
            substitute(&self.reactivate_description, entity),
        )
    }
}

fn substitute(template: &str, entity: &str) -> String {
    template.replace("{entity}", entity)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn entity_is_substituted() {
        let messages = FlowMessages::default();
        assert_eq!(messages.processing(FlowKind::Create, "agency"), "Creating agency...");
        assert_eq!(
            messages.inactivate_confirmation("unit").0,
            "Deactivate unit?"
        );
    }

    #[test]
    fn partial_toml_keeps_defaults() {
        let messages: FlowMessages = toml::from_str(r#"created = "Done!""#).unwrap();
        assert_eq!(messages.success(FlowKind::Create, "x"), "Done!");
        assert_eq!(messages.success(FlowKind::Edit, "x"), "The x was updated successfully.");
    }
}

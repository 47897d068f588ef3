pub mod rules;
pub mod schema;

pub use rules::{TemplateRule, builtin_rules, fallback_template};
pub use schema::{Classification, Entity, EntityCategory, Relationship, Template};

use tracing::debug;

/// Maps free text onto a template by keyword containment.
/// Rules are tried in order and the first match wins.
pub struct Classifier {
    rules: Vec<TemplateRule>,
    fallback: Template,
}

impl Classifier {
    pub fn with_rules(rules: Vec<TemplateRule>, fallback: Template) -> Self {
        Self { rules, fallback }
    }

    pub fn classify(&self, text: &str) -> Classification {
        let lowered = text.to_lowercase();

        let (name, template) = self
            .rules
            .iter()
            .find(|rule| rule.matches(&lowered))
            .map(|rule| (rule.name.as_str(), &rule.template))
            .unwrap_or((rules::DEFAULT_TEMPLATE, &self.fallback));

        debug!(
            template = name,
            entities = template.entities.len(),
            relationships = template.relationships.len(),
            "Classified description"
        );

        Classification {
            template: name.to_string(),
            entities: template.entities.clone(),
            relationships: template.relationships.clone(),
        }
    }
}

impl Default for Classifier {
    fn default() -> Self {
        Self::with_rules(builtin_rules(), fallback_template())
    }
}

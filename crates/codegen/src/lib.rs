pub mod template;

use tracing::debug;

pub const DEFAULT_ENTITY: &str = "Item";

/// Renders a UI component around the primary (first) entity.
#[derive(Debug, Clone)]
pub struct CodeSynthesizer {
    default_entity: String,
}

impl CodeSynthesizer {
    pub fn new() -> Self {
        Self::with_default_entity(DEFAULT_ENTITY)
    }

    /// Placeholder used when there are no entities to render.
    pub fn with_default_entity(name: impl Into<String>) -> Self {
        Self {
            default_entity: name.into(),
        }
    }

    pub fn primary_entity<'a>(&'a self, entities: &'a [String]) -> &'a str {
        entities
            .first()
            .map(String::as_str)
            .unwrap_or(self.default_entity.as_str())
    }

    pub fn render(&self, entities: &[String]) -> String {
        let primary = self.primary_entity(entities);
        let code = template::render_dashboard(primary, &primary.to_lowercase());

        debug!(primary, bytes = code.len(), "Rendered UI component");
        code
    }
}

impl Default for CodeSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}

/// Collection route hinted at by the generated component. Pluralization is a
/// plain `s` suffix: `Person` becomes `/persons`.
pub fn route_path(primary: &str) -> String {
    format!("/{}s", primary.to_lowercase())
}

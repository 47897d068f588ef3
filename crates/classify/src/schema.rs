use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityCategory {
    Entity,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Entity {
    pub name: String,
    pub category: EntityCategory,
}

impl Entity {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            category: EntityCategory::Entity,
        }
    }
}

/// Directed, typed edge between two entity names.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Relationship {
    pub source: String,
    pub target: String,
    #[serde(rename = "type")]
    pub relation: String,
}

impl Relationship {
    pub fn new(
        source: impl Into<String>,
        target: impl Into<String>,
        relation: impl Into<String>,
    ) -> Self {
        Self {
            source: source.into(),
            target: target.into(),
            relation: relation.into(),
        }
    }
}

/// An entity list paired with the relationships between them.
/// Entity order is significant: the first one is the primary entity.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Template {
    pub entities: Vec<String>,
    pub relationships: Vec<Relationship>,
}

impl Template {
    pub fn new(entities: Vec<String>, relationships: Vec<Relationship>) -> Self {
        Self {
            entities,
            relationships,
        }
    }

    pub fn primary(&self) -> Option<&str> {
        self.entities.first().map(String::as_str)
    }

    pub fn entity_nodes(&self) -> Vec<Entity> {
        self.entities.iter().map(Entity::new).collect()
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Classification {
    /// Name of the rule that matched, or the fallback's name
    pub template: String,
    pub entities: Vec<String>,
    pub relationships: Vec<Relationship>,
}

impl Classification {
    pub fn primary(&self) -> Option<&str> {
        self.entities.first().map(String::as_str)
    }
}

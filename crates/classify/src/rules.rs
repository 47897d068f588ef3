use crate::schema::{Relationship, Template};

pub const KANBAN_TEMPLATE: &str = "kanban";
pub const CRM_TEMPLATE: &str = "crm";
pub const DEFAULT_TEMPLATE: &str = "default";

/// A keyword-triggered template. Triggers are stored lower-cased.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TemplateRule {
    pub name: String,
    pub triggers: Vec<String>,
    pub template: Template,
}

impl TemplateRule {
    pub fn new<I, S>(name: impl Into<String>, triggers: I, template: Template) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            name: name.into(),
            triggers: triggers
                .into_iter()
                .map(|t| t.as_ref().to_lowercase())
                .collect(),
            template,
        }
    }

    /// `text` must already be lower-cased.
    pub fn matches(&self, text: &str) -> bool {
        self.triggers.iter().any(|t| text.contains(t.as_str()))
    }
}

fn template(entities: &[&str], relationships: &[(&str, &str, &str)]) -> Template {
    Template::new(
        entities.iter().map(|e| e.to_string()).collect(),
        relationships
            .iter()
            .map(|&(source, target, relation)| Relationship::new(source, target, relation))
            .collect(),
    )
}

/// Built-in rules in priority order.
pub fn builtin_rules() -> Vec<TemplateRule> {
    vec![
        TemplateRule::new(
            KANBAN_TEMPLATE,
            ["kanban", "todo"],
            template(
                &["Task", "Column", "User", "Board"],
                &[
                    ("Board", "Column", "CONTAINS"),
                    ("Column", "Task", "CONTAINS"),
                    ("Task", "User", "ASSIGNED_TO"),
                ],
            ),
        ),
        TemplateRule::new(
            CRM_TEMPLATE,
            ["crm"],
            template(
                &["Customer", "Deal", "Salesperson", "Meeting"],
                &[
                    ("Salesperson", "Deal", "MANAGES"),
                    ("Customer", "Deal", "HAS"),
                    ("Deal", "Meeting", "SCHEDULES"),
                ],
            ),
        ),
    ]
}

pub fn fallback_template() -> Template {
    template(&["EntityA", "EntityB"], &[("EntityA", "EntityB", "LINKS_TO")])
}

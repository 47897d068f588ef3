use anyhow::{Context, Result};
use classify::{Classifier, Relationship};
use codegen::CodeSynthesizer;
use graph::{GraphBuilder, GraphStats};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::config::PipelineConfig;

pub const SUCCESS_MESSAGE: &str = "App architecture and UI generated successfully.";

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GraphAnalysis {
    pub template: String,
    pub entities: Vec<String>,
    pub relationships: Vec<Relationship>,
    pub graph_stats: GraphStats,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GenerateResponse {
    pub graph: GraphAnalysis,
    pub ui_code: String,
    pub message: String,
}

/// Classify, build the graph and render the UI for one description.
/// Each call owns its graph; nothing carries over between calls.
pub fn generate(
    classifier: &Classifier,
    description: &str,
    config: &PipelineConfig,
) -> Result<GenerateResponse> {
    // Step 1: Pick a template
    let classification = classifier.classify(description);

    // Step 2: Build the entity graph
    let mut builder = GraphBuilder::new(config.endpoint_policy);
    builder
        .build(&classification.entities, &classification.relationships)
        .with_context(|| format!("Failed to build graph for template '{}'", classification.template))?;
    let graph_stats = builder.stats();

    // Step 3: Render UI around the primary entity
    let synthesizer = CodeSynthesizer::with_default_entity(config.default_entity.clone());
    let ui_code = synthesizer.render(&classification.entities);

    debug!(
        template = %classification.template,
        nodes = graph_stats.nodes,
        edges = graph_stats.edges,
        "Generated app architecture"
    );

    Ok(GenerateResponse {
        graph: GraphAnalysis {
            template: classification.template,
            entities: classification.entities,
            relationships: classification.relationships,
            graph_stats,
        },
        ui_code,
        message: SUCCESS_MESSAGE.to_string(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use classify::{Template, TemplateRule, fallback_template};
    use graph::EndpointPolicy;
    use std::collections::HashSet;

    #[test]
    fn test_crm_example() {
        let response = generate(
            &Classifier::default(),
            "Build me a CRM for my sales team",
            &PipelineConfig::default(),
        )
        .unwrap();

        assert_eq!(
            response.graph.entities,
            vec!["Customer", "Deal", "Salesperson", "Meeting"]
        );
        assert_eq!(response.graph.graph_stats, GraphStats { nodes: 4, edges: 3 });
        assert!(response.ui_code.contains("CustomerDashboard"));
        assert!(response.ui_code.contains("GET /customers"));
        assert_eq!(response.message, SUCCESS_MESSAGE);
    }

    #[test]
    fn test_fallback_example() {
        let response =
            generate(&Classifier::default(), "random idea", &PipelineConfig::default()).unwrap();

        assert_eq!(response.graph.entities, vec!["EntityA", "EntityB"]);
        assert_eq!(response.graph.relationships.len(), 1);
        assert_eq!(response.graph.relationships[0].relation, "LINKS_TO");
        assert!(response.ui_code.contains("EntityADashboard"));
        assert!(response.ui_code.contains("GET /entityas"));
    }

    #[test]
    fn test_stats_match_returned_lists() {
        let classifier = Classifier::default();
        let config = PipelineConfig::default();

        for text in ["KANBAN please", "my CRM", "a todo list", "nothing in particular"] {
            let first = generate(&classifier, text, &config).unwrap();
            let second = generate(&classifier, text, &config).unwrap();

            let distinct: HashSet<&String> = first.graph.entities.iter().collect();
            assert_eq!(first.graph.graph_stats.nodes, distinct.len());
            assert_eq!(first.graph.graph_stats.edges, first.graph.relationships.len());
            assert_eq!(first.graph.graph_stats, second.graph.graph_stats);

            let primary = &first.graph.entities[0];
            assert!(first.ui_code.contains(&format!("{}Dashboard", primary)));
            assert!(first.ui_code.contains(&format!("GET /{}s", primary.to_lowercase())));
        }
    }

    #[test]
    fn test_dangling_rule_respects_policy() {
        let broken = Template::new(
            vec!["Order".to_string()],
            vec![Relationship::new("Order", "Invoice", "BILLED_BY")],
        );
        let classifier = Classifier::with_rules(
            vec![TemplateRule::new("billing", ["billing"], broken)],
            fallback_template(),
        );

        let err = generate(&classifier, "billing app", &PipelineConfig::default()).unwrap_err();
        assert!(format!("{:#}", err).contains("'Invoice'"));

        let config = PipelineConfig {
            endpoint_policy: EndpointPolicy::Materialize,
            ..PipelineConfig::default()
        };
        let response = generate(&classifier, "billing app", &config).unwrap();
        assert_eq!(response.graph.graph_stats, GraphStats { nodes: 2, edges: 1 });
        assert!(response.ui_code.contains("OrderDashboard"));
    }

    #[test]
    fn test_empty_template_uses_default_entity() {
        let classifier =
            Classifier::with_rules(Vec::new(), Template::new(Vec::new(), Vec::new()));
        let config = PipelineConfig {
            default_entity: "Widget".to_string(),
            ..PipelineConfig::default()
        };

        let response = generate(&classifier, "anything", &config).unwrap();
        assert_eq!(response.graph.graph_stats, GraphStats { nodes: 0, edges: 0 });
        assert!(response.ui_code.contains("WidgetDashboard"));
    }

    #[test]
    fn test_response_shape() {
        let response =
            generate(&Classifier::default(), "todo", &PipelineConfig::default()).unwrap();
        let json = serde_json::to_value(&response).unwrap();

        assert_eq!(json["graph"]["graph_stats"], serde_json::json!({"nodes": 4, "edges": 3}));
        assert_eq!(json["graph"]["relationships"][0]["type"], "CONTAINS");
        assert_eq!(json["graph"]["entities"][0], "Task");
        assert!(json["ui_code"].as_str().unwrap().contains("TaskDashboard"));
    }
}

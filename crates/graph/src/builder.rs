use std::collections::HashMap;

use classify::{Entity, Relationship};
use petgraph::Direction;
use petgraph::graph::{DiGraph, NodeIndex};
use petgraph::visit::EdgeRef;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::GraphError;

/// Node weight is the entity, edge weight is the relationship type.
pub type EntityGraph = DiGraph<Entity, String>;

/// What to do with a relationship whose endpoint is not in the entity list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EndpointPolicy {
    /// Fail the build and leave the graph empty
    #[default]
    Reject,
    /// Create the missing endpoint as a node
    Materialize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct GraphStats {
    pub nodes: usize,
    pub edges: usize,
}

pub struct GraphBuilder {
    policy: EndpointPolicy,
    graph: EntityGraph,
    entity_to_idx: HashMap<String, NodeIndex>,
}

impl GraphBuilder {
    pub fn new(policy: EndpointPolicy) -> Self {
        Self {
            policy,
            graph: EntityGraph::new(),
            entity_to_idx: HashMap::new(),
        }
    }

    /// Rebuild the graph from scratch. Prior contents never survive a call,
    /// including a failed one.
    pub fn build(
        &mut self,
        entities: &[String],
        relationships: &[Relationship],
    ) -> Result<&EntityGraph, GraphError> {
        self.clear();

        for name in entities {
            self.add_entity(name);
        }

        for rel in relationships {
            if let Err(e) = self.add_relationship(rel) {
                self.clear();
                return Err(e);
            }
        }

        debug!(
            nodes = self.graph.node_count(),
            edges = self.graph.edge_count(),
            "Built entity graph"
        );

        Ok(&self.graph)
    }

    pub fn stats(&self) -> GraphStats {
        GraphStats {
            nodes: self.graph.node_count(),
            edges: self.graph.edge_count(),
        }
    }

    pub fn graph(&self) -> &EntityGraph {
        &self.graph
    }

    pub fn node(&self, name: &str) -> Option<&Entity> {
        self.entity_to_idx
            .get(name)
            .and_then(|&idx| self.graph.node_weight(idx))
    }

    /// Outgoing neighbours of `name` with the relationship type, in no
    /// particular order.
    pub fn successors(&self, name: &str) -> Vec<(&str, &str)> {
        let Some(&idx) = self.entity_to_idx.get(name) else {
            return Vec::new();
        };

        self.graph
            .edges_directed(idx, Direction::Outgoing)
            .map(|e| (self.graph[e.target()].name.as_str(), e.weight().as_str()))
            .collect()
    }

    /// All edges as relationships, in insertion order.
    pub fn edges(&self) -> Vec<Relationship> {
        self.graph
            .edge_references()
            .map(|e| {
                Relationship::new(
                    self.graph[e.source()].name.clone(),
                    self.graph[e.target()].name.clone(),
                    e.weight().clone(),
                )
            })
            .collect()
    }

    fn clear(&mut self) {
        self.graph.clear();
        self.entity_to_idx.clear();
    }

    fn add_entity(&mut self, name: &str) -> NodeIndex {
        if let Some(&idx) = self.entity_to_idx.get(name) {
            return idx;
        }

        let idx = self.graph.add_node(Entity::new(name));
        self.entity_to_idx.insert(name.to_string(), idx);
        idx
    }

    fn add_relationship(&mut self, rel: &Relationship) -> Result<(), GraphError> {
        let source = self.endpoint(rel, &rel.source)?;
        let target = self.endpoint(rel, &rel.target)?;
        self.graph.add_edge(source, target, rel.relation.clone());
        Ok(())
    }

    fn endpoint(&mut self, rel: &Relationship, name: &str) -> Result<NodeIndex, GraphError> {
        if let Some(&idx) = self.entity_to_idx.get(name) {
            return Ok(idx);
        }

        match self.policy {
            EndpointPolicy::Materialize => {
                debug!(entity = name, relation = %rel.relation, "Materializing missing endpoint");
                Ok(self.add_entity(name))
            }
            EndpointPolicy::Reject => Err(GraphError::DanglingEndpoint {
                from: rel.source.clone(),
                to: rel.target.clone(),
                relation: rel.relation.clone(),
                missing: name.to_string(),
            }),
        }
    }
}

impl Default for GraphBuilder {
    fn default() -> Self {
        Self::new(EndpointPolicy::default())
    }
}

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GraphError {
    #[error("relationship {from} -[{relation}]-> {to} references unknown entity '{missing}'")]
    DanglingEndpoint {
        from: String,
        to: String,
        relation: String,
        missing: String,
    },
}

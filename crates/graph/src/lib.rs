pub mod builder;
pub mod error;

pub use builder::{EndpointPolicy, EntityGraph, GraphBuilder, GraphStats};
pub use error::GraphError;

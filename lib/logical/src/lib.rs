mod active_graph;
mod query_helpers;
mod representation;
mod representation_builder;
mod sigma;

pub use active_graph::ActiveGraph;
pub use query_helpers::{
    has_projection, has_property_path, query_pattern, query_variables, walk_graph_pattern,
};
pub use representation::{OtherVariable, QueryRepresentation, RelevantVariable, Service};
pub use representation_builder::QueryRepresentationBuilder;
pub use sigma::SigmaTerm;

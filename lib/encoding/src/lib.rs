mod constant;
mod encoder;
mod iri;

pub use constant::{Constant, ConstantKind, DEFAULT_GRAPH, RDF_VALUE_SORT};
pub use encoder::{scoped_variable_name, TermEncoder};
pub use iri::rename_iri;

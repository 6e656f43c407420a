#![doc = include_str!("../README.md")]
#![cfg_attr(docsrs, feature(doc_auto_cfg))]

mod check;

pub use check::{is_contained_str, z3_checker};
pub use sparql_containment_engine::{
    ContainmentChecker, ContainmentError, ContainmentSemantics, SolverResponse,
};

pub mod model {
    pub use sparql_containment_model::*;
}

pub mod encoding {
    pub use sparql_containment_encoding::*;
}

pub mod logical {
    pub use sparql_containment_logical::*;
}

pub mod solver {
    pub use sparql_containment_solver::*;
}

pub mod engine {
    pub use sparql_containment_engine::*;
}

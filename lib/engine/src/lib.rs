mod compatibility;
mod containment;
mod error;
mod federation;
pub mod formula;
mod response;
mod semantics;

pub use compatibility::{tilde_check, tilde_check_bag_set};
pub use containment::ContainmentChecker;
pub use error::ContainmentError;
pub use federation::{pair_services, ServicePairing};
pub use response::SolverResponse;
pub use semantics::ContainmentSemantics;

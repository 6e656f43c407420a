use async_trait::async_trait;
use sparql_containment_engine::ContainmentChecker;
use sparql_containment_model::Query;
use sparql_containment_solver::{SmtSolver, SolverError};
use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

pub fn parse(query: &str) -> Query {
    query.parse().unwrap()
}

/// A solver that replies with scripted responses and records every formula it is asked about.
#[derive(Debug, Default)]
pub struct RecordingSolver {
    replies: Mutex<VecDeque<String>>,
    formulas: Mutex<Vec<String>>,
}

impl RecordingSolver {
    pub fn replying(replies: &[&str]) -> Arc<Self> {
        Arc::new(Self {
            replies: Mutex::new(replies.iter().map(|reply| (*reply).to_owned()).collect()),
            formulas: Mutex::default(),
        })
    }

    pub fn formulas(&self) -> Vec<String> {
        self.formulas.lock().unwrap().clone()
    }

    pub fn calls(&self) -> usize {
        self.formulas.lock().unwrap().len()
    }
}

#[async_trait]
impl SmtSolver for RecordingSolver {
    async fn evaluate(&self, formula: &str) -> Result<String, SolverError> {
        self.formulas.lock().unwrap().push(formula.to_owned());
        self.replies
            .lock()
            .unwrap()
            .pop_front()
            .ok_or_else(|| SolverError::UnexpectedResponse("no scripted reply left".to_owned()))
    }
}

pub fn checker(solver: &Arc<RecordingSolver>) -> ContainmentChecker<Arc<RecordingSolver>> {
    ContainmentChecker::new(Arc::clone(solver))
}

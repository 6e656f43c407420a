use crate::formula::{containment_conjecture, theta_conjecture};
use crate::{
    pair_services, tilde_check, tilde_check_bag_set, ContainmentError, ContainmentSemantics,
    ServicePairing, SolverResponse,
};
use futures::future::BoxFuture;
use futures::FutureExt;
use sparql_containment_encoding::TermEncoder;
use sparql_containment_logical::{has_projection, QueryRepresentation, QueryRepresentationBuilder};
use sparql_containment_model::Query;
use sparql_containment_solver::{classify_response, SatResult, SmtSolver};
use std::collections::BTreeMap;
use tracing::{debug, info, trace, warn};

/// Decides whether a query is contained in another query.
///
/// A check proceeds as follows:
/// 1. Both queries are translated into a [QueryRepresentation]. A fresh [TermEncoder] is used for
///    every check, so that independent checks never share constants.
/// 2. The federated sub-queries are paired by their endpoint. If the super-query misses an
///    endpoint of the sub-query, the check fails without asking the solver. Otherwise, each pair
///    is checked recursively under set semantics, one after the other. The first pair that is not
///    contained fails the whole check.
/// 3. If the relevant variables of both queries are compatible (`~`), the query-containment
///    conjecture is decided. Otherwise, the theta conjecture is decided.
///
/// Both conjectures are phrased such that `unsat` means that the sub-query is contained. Any other
/// reply of the solver is an error and never a verdict.
pub struct ContainmentChecker<S> {
    solver: S,
}

impl<S: SmtSolver> ContainmentChecker<S> {
    pub fn new(solver: S) -> Self {
        Self { solver }
    }

    pub fn solver(&self) -> &S {
        &self.solver
    }

    /// Checks whether `sub` is contained in `sup` under the given `semantics`.
    ///
    /// [ContainmentSemantics::Bag] is not implemented. Under [ContainmentSemantics::BagSet], a
    /// sub-query without projection is checked under set semantics.
    pub async fn is_contained(
        &self,
        sub: &Query,
        sup: &Query,
        semantics: ContainmentSemantics,
    ) -> Result<SolverResponse, ContainmentError> {
        let semantics = match semantics {
            ContainmentSemantics::Bag => {
                return ContainmentError::not_implemented("Containment under BAG semantics")
            }
            ContainmentSemantics::BagSet if !has_projection(sub) => {
                debug!("The sub-query has no projection, checking under SET semantics");
                ContainmentSemantics::Set
            }
            semantics => semantics,
        };

        let mut encoder = TermEncoder::new();
        let sub_representation = QueryRepresentationBuilder::new(&mut encoder).build_query(sub)?;
        let super_representation =
            QueryRepresentationBuilder::new(&mut encoder).build_query(sup)?;

        let response = self
            .check(
                &sub_representation,
                &super_representation,
                &encoder,
                semantics,
            )
            .await?;
        info!(
            "Containment under {semantics} semantics: {}",
            response.result()
        );
        Ok(response)
    }

    /// Checks two representations that were built with `encoder`.
    pub fn check<'check>(
        &'check self,
        sub: &'check QueryRepresentation,
        sup: &'check QueryRepresentation,
        encoder: &'check TermEncoder,
        semantics: ContainmentSemantics,
    ) -> BoxFuture<'check, Result<SolverResponse, ContainmentError>> {
        async move {
            let pairs = match pair_services(sub.services(), sup.services()) {
                ServicePairing::Paired(pairs) => pairs,
                ServicePairing::Missing(url) => {
                    warn!("The super-query does not address the endpoint <{url}>");
                    return Ok(SolverResponse::rejected(format!(
                        "The super-query has no SERVICE clause for the endpoint <{url}>"
                    )));
                }
            };

            let mut endpoint_results = BTreeMap::new();
            for (sub_service, super_service) in pairs {
                let url = sub_service.url();
                debug!("Checking containment of SERVICE <{url}>");
                let response = self
                    .check(
                        sub_service.query(),
                        super_service.query(),
                        encoder,
                        ContainmentSemantics::Set,
                    )
                    .await?;

                let contained = response.result();
                endpoint_results.insert(url.to_owned(), response);
                if !contained {
                    warn!("SERVICE <{url}> is not contained, skipping the remaining checks");
                    return Ok(SolverResponse::rejected(format!(
                        "The SERVICE clause for the endpoint <{url}> is not contained"
                    ))
                    .with_endpoint_results(endpoint_results));
                }
            }

            let compatible = match semantics {
                ContainmentSemantics::Set => {
                    tilde_check(sub.relevant_variables(), sup.relevant_variables())
                }
                ContainmentSemantics::BagSet => tilde_check_bag_set(sub, sup),
                ContainmentSemantics::Bag => {
                    return ContainmentError::not_implemented("Containment under BAG semantics")
                }
            };

            let response = if compatible {
                let formula = containment_conjecture(sub, sup, encoder);
                let contained = self.decide(&formula).await? == SatResult::Unsat;
                SolverResponse::decided(contained, formula)
            } else {
                debug!("The relevant variables differ, deciding the theta conjecture");
                let formula = theta_conjecture(sub);
                let has_no_answer = self.decide(&formula).await? == SatResult::Unsat;
                SolverResponse::decided(has_no_answer, formula).with_justification(
                    "The queries project different variables. Hence, the sub-query is only contained if it has no answer.",
                )
            };
            Ok(response.with_endpoint_results(endpoint_results))
        }
        .boxed()
    }

    async fn decide(&self, formula: &str) -> Result<SatResult, ContainmentError> {
        debug!("Submitting formula with {} lines", formula.lines().count());
        trace!("Formula:\n{formula}");

        let response = self.solver.evaluate(formula).await?;
        debug!("Solver replied: {}", response.trim());
        Ok(classify_response(&response)?)
    }
}

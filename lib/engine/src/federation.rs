use rustc_hash::FxHashMap;
use sparql_containment_logical::Service;

/// The services of a sub-query paired with the services of a super-query.
#[derive(Debug, PartialEq, Eq)]
pub enum ServicePairing<'query> {
    /// Every endpoint of the sub-query is also addressed by the super-query. Each pair holds the
    /// service of the sub-query and the service of the super-query, in the order of the sub-query.
    Paired(Vec<(&'query Service, &'query Service)>),
    /// The super-query does not address the endpoint with this URL.
    Missing(String),
}

/// Pairs the services of both queries by the URL of their endpoint.
///
/// The super-query must address every endpoint of the sub-query. It may address additional
/// endpoints, which are ignored. If an endpoint is missing, the first missing URL (in the order of
/// the sub-query) is reported.
pub fn pair_services<'query>(
    sub: &'query [Service],
    sup: &'query [Service],
) -> ServicePairing<'query> {
    let super_services = sup
        .iter()
        .map(|service| (service.url(), service))
        .collect::<FxHashMap<_, _>>();

    let mut pairs = Vec::with_capacity(sub.len());
    for service in sub {
        match super_services.get(service.url()) {
            Some(super_service) => pairs.push((service, *super_service)),
            None => return ServicePairing::Missing(service.url().to_owned()),
        }
    }
    ServicePairing::Paired(pairs)
}

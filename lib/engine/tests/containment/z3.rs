use crate::test_utils::parse;
use sparql_containment_engine::{ContainmentChecker, ContainmentSemantics};
use sparql_containment_solver::{SolverConfig, Z3Solver};
use std::error::Error;
use std::time::Duration;

/// Returns a checker backed by the z3 binary on the `PATH`, or `None` if z3 is not installed.
async fn z3_checker() -> Option<ContainmentChecker<Z3Solver>> {
    let solver = Z3Solver::new(SolverConfig::default().with_timeout(Duration::from_secs(10)));
    match solver.version().await {
        Ok(_) => Some(ContainmentChecker::new(solver)),
        Err(_) => None,
    }
}

async fn is_contained(
    checker: &ContainmentChecker<Z3Solver>,
    sub: &str,
    sup: &str,
    semantics: ContainmentSemantics,
) -> Result<bool, Box<dyn Error>> {
    let response = checker
        .is_contained(&parse(sub), &parse(sup), semantics)
        .await?;
    Ok(response.result())
}

#[tokio::test]
async fn test_reflexivity() -> Result<(), Box<dyn Error>> {
    let Some(checker) = z3_checker().await else {
        return Ok(());
    };

    let queries = [
        "SELECT ?s WHERE { ?s ?p ?o }",
        "SELECT * WHERE { ?s ?p ?o }",
        r#"PREFIX ex: <http://example.com/> SELECT ?s WHERE { ?s ex:name "Paris" ; ex:knows ?o }"#,
        "PREFIX up: <http://purl.uniprot.org/core/>
        SELECT ?protein WHERE {
            ?protein up:organism ?organism .
            SERVICE <https://sparql.uniprot.org/sparql> { ?protein up:annotation ?annotation . }
        }",
    ];

    for query in queries {
        assert!(
            is_contained(&checker, query, query, ContainmentSemantics::Set).await?,
            "{query}"
        );
    }

    Ok(())
}

#[tokio::test]
async fn test_asymmetric_pair() -> Result<(), Box<dyn Error>> {
    let Some(checker) = z3_checker().await else {
        return Ok(());
    };

    let specific = "PREFIX ex: <http://example.com/>
        SELECT ?s WHERE { ?s ex:p ?o . ?s ex:q ?x }";
    let general = "PREFIX ex: <http://example.com/>
        SELECT ?s WHERE { ?s ex:p ?o }";

    assert!(is_contained(&checker, specific, general, ContainmentSemantics::Set).await?);
    assert!(!is_contained(&checker, general, specific, ContainmentSemantics::Set).await?);

    Ok(())
}

#[tokio::test]
async fn test_different_predicates_are_not_contained() -> Result<(), Box<dyn Error>> {
    let Some(checker) = z3_checker().await else {
        return Ok(());
    };

    let sub = "SELECT ?s WHERE { ?s <http://example.com/p> ?o }";
    let sup = "SELECT ?s WHERE { ?s <http://example.com/q> ?o }";

    assert!(!is_contained(&checker, sub, sup, ContainmentSemantics::Set).await?);

    Ok(())
}

#[tokio::test]
async fn test_constant_is_contained_in_variable() -> Result<(), Box<dyn Error>> {
    let Some(checker) = z3_checker().await else {
        return Ok(());
    };

    let sub = r#"SELECT ?s WHERE { ?s <http://example.com/name> "Paris" }"#;
    let sup = "SELECT ?s WHERE { ?s <http://example.com/name> ?name }";

    assert!(is_contained(&checker, sub, sup, ContainmentSemantics::Set).await?);
    assert!(!is_contained(&checker, sup, sub, ContainmentSemantics::Set).await?);

    Ok(())
}

#[tokio::test]
async fn test_relevant_variable_mismatch_is_not_contained() -> Result<(), Box<dyn Error>> {
    let Some(checker) = z3_checker().await else {
        return Ok(());
    };

    let sub = "SELECT ?s WHERE { ?s ?p ?o }";
    let sup = "SELECT ?s ?p WHERE { ?s ?p ?o }";

    assert!(!is_contained(&checker, sub, sup, ContainmentSemantics::Set).await?);

    Ok(())
}

#[tokio::test]
async fn test_bag_set() -> Result<(), Box<dyn Error>> {
    let Some(checker) = z3_checker().await else {
        return Ok(());
    };

    let sub = "SELECT ?s WHERE { ?s ?p ?o }";
    let sup = "SELECT ?s WHERE { ?s ?p ?o . ?s ?p ?x }";

    assert!(is_contained(&checker, sub, sup, ContainmentSemantics::BagSet).await?);
    assert!(!is_contained(&checker, sup, sub, ContainmentSemantics::BagSet).await?);

    Ok(())
}

#[tokio::test]
async fn test_federated_pattern_does_not_match_default_graph() -> Result<(), Box<dyn Error>> {
    let Some(checker) = z3_checker().await else {
        return Ok(());
    };

    let local = "SELECT ?s WHERE { ?s <http://example.com/p> ?o }";
    let federated = "SELECT ?s WHERE {
        SERVICE <http://example.com/sparql> { ?s <http://example.com/p> ?o }
    }";

    assert!(!is_contained(&checker, federated, local, ContainmentSemantics::Set).await?);
    assert!(!is_contained(&checker, local, federated, ContainmentSemantics::Set).await?);

    Ok(())
}

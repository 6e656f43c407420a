use crate::test_utils::parse;
use sparql_containment_encoding::TermEncoder;
use sparql_containment_engine::formula::{containment_conjecture, theta_conjecture};
use sparql_containment_logical::{QueryRepresentation, QueryRepresentationBuilder};
use sparql_containment_model::ModelError;

fn build_pair(
    sub: &str,
    sup: &str,
) -> Result<(TermEncoder, QueryRepresentation, QueryRepresentation), ModelError> {
    let mut encoder = TermEncoder::new();
    let sub = QueryRepresentationBuilder::new(&mut encoder).build_query(&parse(sub))?;
    let sup = QueryRepresentationBuilder::new(&mut encoder).build_query(&parse(sup))?;
    Ok((encoder, sub, sup))
}

#[test]
fn test_containment_conjecture_with_iris_and_literals() -> Result<(), ModelError> {
    let (encoder, sub, sup) = build_pair(
        r#"SELECT ?s WHERE { ?s <http://example.com/name> "Paris" }"#,
        "SELECT ?s WHERE { ?s <http://example.com/name> ?name }",
    )?;

    insta::assert_snapshot!(containment_conjecture(&sub, &sup, &encoder), @r"
    ; ------------ Sort and Predicate -------------------
    (declare-sort RDFValue 0)
    (declare-fun P (RDFValue RDFValue RDFValue RDFValue) Bool)
    (declare-const <default_graph> RDFValue)
    ; ------------ IRIs ---------------------------------
    (declare-const <example_com_name> RDFValue)
    ; ------------ Literals -----------------------------
    (declare-const <l_0> RDFValue)
    ; ------------ Unique Names -------------------------
    (assert (distinct <default_graph> <example_com_name> <l_0>))
    ; ------------ Variables ----------------------------
    (declare-const <s> RDFValue)
    ; ------------ Conjecture ---------------------------
    (assert (P <s> <example_com_name> <l_0> <default_graph>))
    (assert (not (exists ((<super.s> RDFValue) (<super.name> RDFValue)) (and (P <super.s> <example_com_name> <super.name> <default_graph>) (= <super.s> <s>)))))
    (check-sat)
    ");

    Ok(())
}

#[test]
fn test_containment_conjecture_places_service_patterns_in_endpoint_graph() -> Result<(), ModelError>
{
    let (encoder, sub, sup) = build_pair(
        "SELECT ?s WHERE {
            ?s <http://example.com/p> ?o .
            SERVICE <http://example.com/sparql> { ?o <http://example.com/q> ?x }
        }",
        "SELECT ?s WHERE {
            ?s <http://example.com/p> ?o .
            SERVICE <http://example.com/sparql> { ?o <http://example.com/q> ?y }
        }",
    )?;

    insta::assert_snapshot!(containment_conjecture(&sub, &sup, &encoder), @r"
    ; ------------ Sort and Predicate -------------------
    (declare-sort RDFValue 0)
    (declare-fun P (RDFValue RDFValue RDFValue RDFValue) Bool)
    (declare-const <default_graph> RDFValue)
    ; ------------ IRIs ---------------------------------
    (declare-const <example_com_p> RDFValue)
    (declare-const <example_com_q> RDFValue)
    (declare-const <example_com_sparql> RDFValue)
    ; ------------ Literals -----------------------------
    ; ------------ Unique Names -------------------------
    (assert (distinct <default_graph> <example_com_p> <example_com_q> <example_com_sparql>))
    ; ------------ Variables ----------------------------
    (declare-const <s> RDFValue)
    (declare-const <o> RDFValue)
    (declare-const <x> RDFValue)
    ; ------------ Conjecture ---------------------------
    (assert (P <s> <example_com_p> <o> <default_graph>))
    (assert (P <o> <example_com_q> <x> <example_com_sparql>))
    (assert (not (exists ((<super.s> RDFValue) (<super.o> RDFValue) (<super.y> RDFValue)) (and (P <super.s> <example_com_p> <super.o> <default_graph>) (P <super.o> <example_com_q> <super.y> <example_com_sparql>) (= <super.s> <s>)))))
    (check-sat)
    ");

    Ok(())
}

#[test]
fn test_theta_conjecture_only_involves_sub_query() -> Result<(), ModelError> {
    let (_, sub, _) = build_pair(
        r#"SELECT ?s WHERE { ?s <http://example.com/name> "Paris" }"#,
        "SELECT ?name WHERE { ?s <http://example.com/label> ?name }",
    )?;

    insta::assert_snapshot!(theta_conjecture(&sub), @r"
    ; ------------ Sort and Predicate -------------------
    (declare-sort RDFValue 0)
    (declare-fun P (RDFValue RDFValue RDFValue RDFValue) Bool)
    (declare-const <default_graph> RDFValue)
    ; ------------ IRIs ---------------------------------
    (declare-const <example_com_name> RDFValue)
    ; ------------ Literals -----------------------------
    (declare-const <l_0> RDFValue)
    ; ------------ Unique Names -------------------------
    (assert (distinct <default_graph> <example_com_name> <l_0>))
    ; ------------ Variables ----------------------------
    (declare-const <s> RDFValue)
    ; ------------ Conjecture ---------------------------
    (assert (P <s> <example_com_name> <l_0> <default_graph>))
    (check-sat)
    ");

    Ok(())
}

#[test]
fn test_every_constant_is_declared_once() -> Result<(), ModelError> {
    let (encoder, sub, sup) = build_pair(
        "PREFIX ex: <http://example.com/>
        SELECT ?a WHERE { ?a ex:knows ?b . ?b ex:knows ?c . ?c ex:knows ?a }",
        "PREFIX ex: <http://example.com/>
        SELECT ?a WHERE { ?a ex:knows ?b . ?b ex:knows ?a }",
    )?;

    let formula = containment_conjecture(&sub, &sup, &encoder);
    let declarations = formula
        .lines()
        .filter(|line| line.starts_with("(declare-const"))
        .collect::<Vec<_>>();
    let mut unique = declarations.clone();
    unique.sort_unstable();
    unique.dedup();

    assert_eq!(declarations.len(), unique.len());
    assert_eq!(declarations.len(), 5);

    Ok(())
}

#[test]
fn test_equal_formulas_for_equal_inputs() -> Result<(), ModelError> {
    let sub = "PREFIX ex: <http://example.com/> SELECT ?a WHERE { ?a ex:p \"1\" ; ex:q ?b }";
    let sup = "PREFIX ex: <http://example.com/> SELECT ?a WHERE { ?a ex:p ?c }";

    let (first_encoder, first_sub, first_sup) = build_pair(sub, sup)?;
    let (second_encoder, second_sub, second_sup) = build_pair(sub, sup)?;

    assert_eq!(
        containment_conjecture(&first_sub, &first_sup, &first_encoder),
        containment_conjecture(&second_sub, &second_sup, &second_encoder)
    );

    Ok(())
}

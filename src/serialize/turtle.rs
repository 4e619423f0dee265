use std::io::Write;

use indexmap::IndexMap;

use crate::constants::namespaces::PREFIXES;
use crate::errors::PipelineError;
use crate::graph::vocab::RDF_TYPE;
use crate::graph::{Graph, Literal, Statement, Term};

use super::escape_string;

/// Write `graph` as Turtle.
///
/// Prefix declarations come first. Statements are grouped by subject in
/// first-seen order, and objects sharing a predicate are comma-joined.
pub fn write_turtle(graph: &Graph, out: &mut dyn Write) -> Result<(), PipelineError> {
    for (prefix, namespace) in PREFIXES {
        writeln!(out, "@prefix {prefix}: <{namespace}> .")?;
    }

    let mut subjects: IndexMap<&str, IndexMap<&str, Vec<&Term>>> = IndexMap::new();
    for Statement {
        subject,
        predicate,
        object,
    } in graph.statements()
    {
        subjects
            .entry(subject.as_str())
            .or_default()
            .entry(predicate.as_str())
            .or_default()
            .push(object);
    }

    for (subject, predicates) in &subjects {
        writeln!(out)?;
        write!(out, "{}", iri_term(subject))?;
        let last = predicates.len().saturating_sub(1);
        for (idx, (predicate, objects)) in predicates.iter().enumerate() {
            let verb = if *predicate == RDF_TYPE {
                "a".to_string()
            } else {
                iri_term(predicate)
            };
            let objects: Vec<String> = objects.iter().map(|term| object_term(term)).collect();
            let separator = if idx == 0 { " " } else { "    " };
            let terminator = if idx == last { " ." } else { " ;" };
            writeln!(out, "{separator}{verb} {}{terminator}", objects.join(", "))?;
        }
    }
    Ok(())
}

/// Prefixed name when the IRI falls in a bound namespace with a simple
/// local part, otherwise a full `<iri>` reference.
fn iri_term(iri: &str) -> String {
    for (prefix, namespace) in PREFIXES {
        match iri.strip_prefix(namespace) {
            Some(local) if is_simple_local(local) => return format!("{prefix}:{local}"),
            _ => {}
        }
    }
    format!("<{iri}>")
}

fn is_simple_local(local: &str) -> bool {
    !local.is_empty() && local.chars().all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn object_term(term: &Term) -> String {
    match term {
        Term::Iri(iri) => iri_term(iri),
        Term::Literal(literal) => literal_term(literal),
    }
}

fn literal_term(literal: &Literal) -> String {
    let lexical = escape_string(&literal.lexical());
    match literal.datatype() {
        Some(datatype) => format!("\"{lexical}\"^^{}", iri_term(&datatype.iri())),
        None => format!("\"{lexical}\""),
    }
}

use std::io::Write;

use crate::errors::PipelineError;
use crate::graph::{Graph, Literal, Term};

use super::escape_string;

/// Write `graph` as N-Triples, one statement per line in emission order.
pub fn write_ntriples(graph: &Graph, out: &mut dyn Write) -> Result<(), PipelineError> {
    for statement in graph.statements() {
        writeln!(
            out,
            "<{}> <{}> {} .",
            statement.subject,
            statement.predicate,
            object_term(&statement.object)
        )?;
    }
    Ok(())
}

fn object_term(term: &Term) -> String {
    match term {
        Term::Iri(iri) => format!("<{iri}>"),
        Term::Literal(literal) => literal_term(literal),
    }
}

fn literal_term(literal: &Literal) -> String {
    let lexical = escape_string(&literal.lexical());
    match literal.datatype() {
        Some(datatype) => format!("\"{lexical}\"^^<{}>", datatype.iri()),
        None => format!("\"{lexical}\""),
    }
}

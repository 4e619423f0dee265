//! In-memory statement graph.
//!
//! A `Graph` is produced whole by `GraphBuilder::build` and is never mutated
//! afterwards; a new run regenerates it from the full record set.

use chrono::NaiveDate;

use crate::types::Iri;

/// Graph construction from cleaned records.
pub mod builder;
/// Namespaces, classes and property metadata.
pub mod vocab;

pub use builder::{BuildStats, GraphBuilder};
pub use vocab::{Datatype, PropertyRange, PropertySpec};

/// Typed literal value of a statement object.
#[derive(Clone, Debug, PartialEq)]
pub enum Literal {
    /// `xsd:integer`.
    Integer(i64),
    /// `xsd:decimal`.
    Float(f64),
    /// `xsd:boolean`.
    Boolean(bool),
    /// Plain string.
    String(String),
    /// `xsd:date`.
    Date(NaiveDate),
}

impl Literal {
    /// Lexical form as written between quotes.
    pub fn lexical(&self) -> String {
        match self {
            Literal::Integer(value) => value.to_string(),
            Literal::Float(value) => {
                if value.fract() == 0.0 {
                    format!("{value:.1}")
                } else {
                    value.to_string()
                }
            }
            Literal::Boolean(value) => value.to_string(),
            Literal::String(value) => value.clone(),
            Literal::Date(value) => value.format("%Y-%m-%d").to_string(),
        }
    }

    /// Datatype of the literal; `None` for plain strings.
    pub fn datatype(&self) -> Option<Datatype> {
        match self {
            Literal::Integer(_) => Some(Datatype::Integer),
            Literal::Float(_) => Some(Datatype::Decimal),
            Literal::Boolean(_) => Some(Datatype::Boolean),
            Literal::String(_) => None,
            Literal::Date(_) => Some(Datatype::Date),
        }
    }
}

/// Statement object: an entity reference or a literal.
#[derive(Clone, Debug, PartialEq)]
pub enum Term {
    /// Reference to another resource.
    Iri(Iri),
    /// Typed or plain literal.
    Literal(Literal),
}

impl Term {
    /// Entity reference term.
    pub fn iri(iri: impl Into<Iri>) -> Self {
        Term::Iri(iri.into())
    }

    /// Plain string literal term.
    pub fn string(value: impl Into<String>) -> Self {
        Term::Literal(Literal::String(value.into()))
    }

    /// Integer literal term.
    pub fn integer(value: i64) -> Self {
        Term::Literal(Literal::Integer(value))
    }

    /// Referenced IRI, if this is an entity reference.
    pub fn as_iri(&self) -> Option<&str> {
        match self {
            Term::Iri(iri) => Some(iri),
            Term::Literal(_) => None,
        }
    }

    /// Literal value, if this is a literal.
    pub fn as_literal(&self) -> Option<&Literal> {
        match self {
            Term::Iri(_) => None,
            Term::Literal(literal) => Some(literal),
        }
    }
}

/// One subject-predicate-object statement.
#[derive(Clone, Debug, PartialEq)]
pub struct Statement {
    /// Subject IRI.
    pub subject: Iri,
    /// Predicate IRI.
    pub predicate: Iri,
    /// Object term.
    pub object: Term,
}

/// Ordered, write-once set of statements.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Graph {
    statements: Vec<Statement>,
}

impl Graph {
    pub(crate) fn from_statements(statements: Vec<Statement>) -> Self {
        Self { statements }
    }

    /// Statements in emission order.
    pub fn statements(&self) -> &[Statement] {
        &self.statements
    }

    /// Number of statements.
    pub fn len(&self) -> usize {
        self.statements.len()
    }

    /// True when the graph holds no statements.
    pub fn is_empty(&self) -> bool {
        self.statements.is_empty()
    }

    /// Objects of every `subject predicate ?o` statement.
    pub fn objects<'a, 'q>(
        &'a self,
        subject: &'q str,
        predicate: &'q str,
    ) -> impl Iterator<Item = &'a Term> + 'q
    where
        'a: 'q,
    {
        self.statements
            .iter()
            .filter(move |s| s.subject == subject && s.predicate == predicate)
            .map(|s| &s.object)
    }

    /// Subjects typed as `class`, in emission order.
    pub fn subjects_of_type(&self, class: &str) -> Vec<&str> {
        self.statements
            .iter()
            .filter(|s| s.predicate == vocab::RDF_TYPE && s.object.as_iri() == Some(class))
            .map(|s| s.subject.as_str())
            .collect()
    }
}

use std::collections::HashMap;
use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::errors::PipelineError;
use crate::types::Iri;

/// Read-only mapping from brand and architecture names to external IRIs.
///
/// A missing entry means no same-as statement is emitted for that entity.
pub trait LinkTable {
    /// External identifier for a brand name.
    fn brand_link(&self, brand: &str) -> Option<&str>;
    /// External identifier for an architecture name.
    fn architecture_link(&self, architecture: &str) -> Option<&str>;
}

/// Link table backed by two name-keyed maps.
///
/// JSON form: `{"brands": {"NVIDIA": "http://..."}, "architectures": {...}}`.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StaticLinkTable {
    /// Brand name to external IRI.
    #[serde(default)]
    pub brands: HashMap<String, Iri>,
    /// Architecture name to external IRI.
    #[serde(default)]
    pub architectures: HashMap<String, Iri>,
}

impl StaticLinkTable {
    /// Empty table; no entity gets a same-as link.
    pub fn empty() -> Self {
        Self::default()
    }

    /// Add a brand link.
    pub fn with_brand(mut self, name: impl Into<String>, iri: impl Into<Iri>) -> Self {
        self.brands.insert(name.into(), iri.into());
        self
    }

    /// Add an architecture link.
    pub fn with_architecture(mut self, name: impl Into<String>, iri: impl Into<Iri>) -> Self {
        self.architectures.insert(name.into(), iri.into());
        self
    }

    /// Load a table from a JSON file.
    pub fn from_json_file(path: impl AsRef<Path>) -> Result<Self, PipelineError> {
        let path = path.as_ref();
        let raw = fs::read_to_string(path).map_err(|err| PipelineError::LinkTable {
            path: path.to_path_buf(),
            reason: err.to_string(),
        })?;
        let table: StaticLinkTable =
            serde_json::from_str(&raw).map_err(|err| PipelineError::LinkTable {
                path: path.to_path_buf(),
                reason: err.to_string(),
            })?;
        if let Some((name, iri)) = table
            .brands
            .iter()
            .chain(table.architectures.iter())
            .find(|(_, iri)| !is_absolute_iri(iri))
        {
            return Err(PipelineError::LinkTable {
                path: path.to_path_buf(),
                reason: format!("link for '{name}' is not an absolute IRI: '{iri}'"),
            });
        }
        Ok(table)
    }
}

impl LinkTable for StaticLinkTable {
    fn brand_link(&self, brand: &str) -> Option<&str> {
        self.brands.get(brand).map(String::as_str)
    }

    fn architecture_link(&self, architecture: &str) -> Option<&str> {
        self.architectures.get(architecture).map(String::as_str)
    }
}

fn is_absolute_iri(iri: &str) -> bool {
    match iri.split_once(':') {
        Some((scheme, rest)) => {
            !rest.is_empty()
                && scheme
                    .chars()
                    .next()
                    .is_some_and(|c| c.is_ascii_alphabetic())
                && scheme
                    .chars()
                    .all(|c| c.is_ascii_alphanumeric() || matches!(c, '+' | '-' | '.'))
                && !iri.chars().any(|c| c.is_whitespace() || matches!(c, '<' | '>' | '"'))
        }
        None => false,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn lookups_are_exact_by_name() {
        let table = StaticLinkTable::empty()
            .with_brand("NVIDIA", "http://www.wikidata.org/entity/Q182477")
            .with_architecture("Ada Lovelace", "http://example.com/arch/ada");
        assert_eq!(
            table.brand_link("NVIDIA"),
            Some("http://www.wikidata.org/entity/Q182477")
        );
        assert_eq!(table.brand_link("nvidia"), None);
        assert_eq!(
            table.architecture_link("Ada Lovelace"),
            Some("http://example.com/arch/ada")
        );
        assert_eq!(table.architecture_link("Turing"), None);
    }

    #[test]
    fn json_file_round_trips_and_validates_iris() {
        let temp = tempdir().unwrap();
        let good = temp.path().join("links.json");
        fs::write(
            &good,
            r#"{"brands": {"AMD": "http://example.com/amd"}, "architectures": {}}"#,
        )
        .unwrap();
        let table = StaticLinkTable::from_json_file(&good).unwrap();
        assert_eq!(table.brand_link("AMD"), Some("http://example.com/amd"));

        let partial = temp.path().join("brands_only.json");
        fs::write(&partial, r#"{"brands": {}}"#).unwrap();
        assert!(
            StaticLinkTable::from_json_file(&partial)
                .unwrap()
                .architectures
                .is_empty()
        );

        let bad = temp.path().join("bad.json");
        fs::write(&bad, r#"{"brands": {"AMD": "not an iri"}}"#).unwrap();
        assert!(matches!(
            StaticLinkTable::from_json_file(&bad),
            Err(PipelineError::LinkTable { .. })
        ));

        let missing = temp.path().join("missing.json");
        assert!(StaticLinkTable::from_json_file(&missing).is_err());
    }
}

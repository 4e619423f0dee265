//! Deterministic slug identifiers for products, brands and architectures.

use indexmap::IndexMap;
use tracing::warn;

use crate::config::CollisionPolicy;
use crate::data::CleanedRecord;
use crate::errors::PipelineError;
use crate::types::UriId;

/// URI-safe slug of a human-readable name.
///
/// Spaces, `/`, `-` and `|` become `_`; brackets and commas are removed;
/// `.` becomes `_`; runs of `_` collapse and edge underscores are trimmed.
pub fn slug(text: &str) -> UriId {
    let mut out = String::with_capacity(text.len());
    for ch in text.trim().chars() {
        let mapped = match ch {
            ' ' | '/' | '-' | '|' | '.' => '_',
            '(' | ')' | '[' | ']' | ',' => continue,
            other => other,
        };
        if mapped == '_' && out.ends_with('_') {
            continue;
        }
        out.push(mapped);
    }
    out.trim_matches('_').to_string()
}

/// Records with identifiers assigned.
#[derive(Clone, Debug, PartialEq)]
pub struct Identified {
    /// Records in input order, each with a unique `product_uri_id`.
    pub records: Vec<CleanedRecord>,
    /// Records dropped under `CollisionPolicy::KeepFirst`.
    pub collisions_dropped: usize,
}

/// Fill `product_uri_id`, `brand_uri_id` and `arch_uri_id` on every record.
///
/// Products, brands and architectures share one identifier space. Two
/// records deriving the same product identifier, or two distinct entities of
/// any kind deriving the same slug, are a collision handled per `policy`.
/// Under `KeepFirst` a colliding product record is dropped, while a colliding
/// brand or architecture keeps its record but loses the identifier.
/// A record whose brand and product name slug to nothing fails with
/// `MissingIdentity`.
pub fn assign_identifiers(
    records: Vec<CleanedRecord>,
    policy: CollisionPolicy,
) -> Result<Identified, PipelineError> {
    let mut owners: IndexMap<UriId, String> = IndexMap::with_capacity(records.len());
    let mut kept = Vec::with_capacity(records.len());
    let mut collisions_dropped = 0;

    for (idx, mut record) in records.into_iter().enumerate() {
        let product_id = slug(&format!("{} {}", record.brand, record.product_name));
        if product_id.is_empty() {
            return Err(PipelineError::MissingIdentity { index: idx + 1 });
        }

        if let Some(first) = owners.get(&product_id) {
            collision(policy, &product_id, first, record.display_name())?;
            collisions_dropped += 1;
            continue;
        }
        owners.insert(product_id.clone(), record.display_name());

        let mut brand_id = slug(&record.brand);
        if !brand_id.is_empty() {
            let owner = format!("{} (brand)", record.brand);
            match owners.get(&brand_id) {
                Some(first) if *first != owner => {
                    collision(policy, &brand_id, first, owner)?;
                    brand_id.clear();
                }
                Some(_) => {}
                None => {
                    owners.insert(brand_id.clone(), owner);
                }
            }
        }

        let mut arch_id = if record.architecture.is_empty() {
            None
        } else {
            Some(slug(&record.architecture)).filter(|id| !id.is_empty())
        };
        if let Some(id) = arch_id.clone() {
            let owner = format!("{} (architecture)", record.architecture);
            match owners.get(&id) {
                Some(first) if *first != owner => {
                    collision(policy, &id, first, owner)?;
                    arch_id = None;
                }
                Some(_) => {}
                None => {
                    owners.insert(id, owner);
                }
            }
        }

        record.brand_uri_id = brand_id;
        record.arch_uri_id = arch_id;
        record.product_uri_id = product_id;
        kept.push(record);
    }

    Ok(Identified {
        records: kept,
        collisions_dropped,
    })
}

fn collision(
    policy: CollisionPolicy,
    id: &str,
    first: &str,
    second: String,
) -> Result<(), PipelineError> {
    match policy {
        CollisionPolicy::Fail => Err(PipelineError::IdentifierCollision {
            id: id.to_string(),
            first: first.to_string(),
            second,
        }),
        CollisionPolicy::KeepFirst => {
            warn!(
                "[gpu_graph:ids] identifier '{}' already taken by '{}'; skipping '{}'",
                id, first, second
            );
            Ok(())
        }
    }
}

use std::collections::HashSet;

use tracing::info;

use crate::constants::dedup::KEY_SEPARATOR;
use crate::data::CleanedRecord;
use crate::types::DedupKey;

/// Outcome of collapsing exact duplicates.
#[derive(Clone, Debug, PartialEq)]
pub struct Deduplicated {
    /// Surviving records, first occurrences in input order.
    pub records: Vec<CleanedRecord>,
    /// Number of rows dropped as duplicates of an earlier row.
    pub removed: usize,
}

/// Collapse records identical across every normalized field, keeping the
/// first occurrence of each.
pub fn dedup_records(records: Vec<CleanedRecord>) -> Deduplicated {
    let total = records.len();
    let mut seen: HashSet<DedupKey> = HashSet::with_capacity(total);
    let records: Vec<CleanedRecord> = records
        .into_iter()
        .filter(|record| seen.insert(dedup_key(record)))
        .collect();
    let removed = total - records.len();
    info!(
        "[gpu_graph:dedup] removed {} duplicate rows ({} remain)",
        removed,
        records.len()
    );
    Deduplicated { records, removed }
}

/// Exact-match key over the normalized fields.
///
/// Identifier columns are excluded: they are derived from fields already in
/// the key. Floats are keyed by bit pattern so equal values compare equal.
fn dedup_key(record: &CleanedRecord) -> DedupKey {
    fn opt<T: ToString>(value: Option<T>) -> String {
        value.map(|v| v.to_string()).unwrap_or_default()
    }
    let parts = [
        record.brand.clone(),
        record.product_name.clone(),
        record.gpu_name.clone(),
        record.gpu_codename.clone(),
        record.architecture.clone(),
        opt(record.release_year),
        opt(record.release_month),
        opt(record.release_date),
        opt(record.shading_units),
        opt(record.base_clock_mhz),
        opt(record.boost_clock_mhz),
        opt(record.max_clock_mhz),
        opt(record.mem_size_kb),
        record.mem_type.clone(),
        opt(record.mem_bus_bits),
        opt(record.bandwidth_mbs.map(f64::to_bits)),
        record.is_system_dependent.to_string(),
        opt(record.fp32_gflops.map(f64::to_bits)),
        opt(record.tdp_watts),
        opt(record.launch_price),
    ];
    let mut separator = [0u8; 4];
    parts.join(KEY_SEPARATOR.encode_utf8(&mut separator))
}

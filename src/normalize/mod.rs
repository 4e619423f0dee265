//! Field-level normalizers turning raw cells into typed values.
//!
//! Every normalizer is a pure function of one cell. Shared absence rule: an
//! empty or whitespace-only cell, or the tokens `unknown`/`nan` in any case,
//! normalizes to absence and never to an error.

use tracing::warn;

use crate::config::MonthTable;
use crate::constants::units::{NAN, UNKNOWN};
use crate::data::{CleanedRecord, Field};
use crate::errors::PipelineError;
use crate::source::ProjectedRecord;
use crate::types::RowNumber;

/// Release date extraction.
pub mod dates;
pub mod names;
pub mod units;

pub use dates::{ReleaseDate, parse_release_date};
pub use units::Bandwidth;

/// Why a strict field rejected a non-empty cell.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FieldError {
    /// The required unit token is missing.
    UnexpectedUnit,
    /// The cell matches none of the accepted notations.
    UnexpectedFormat,
    /// The cell carries zero or several of the accepted units.
    UnknownFormat,
    /// The unit is present but the remaining number does not parse.
    InvalidNumber,
}

impl FieldError {
    /// Attach column, row and raw cell context.
    pub fn at(self, field: Field, row: RowNumber, value: &str) -> PipelineError {
        let column = field.as_str().to_string();
        let value = value.to_string();
        match self {
            FieldError::UnexpectedUnit => PipelineError::UnexpectedUnit { column, row, value },
            FieldError::UnexpectedFormat => PipelineError::UnexpectedFormat { column, row, value },
            FieldError::UnknownFormat => PipelineError::UnknownFormat { column, row, value },
            FieldError::InvalidNumber => PipelineError::InvalidNumber { column, row, value },
        }
    }
}

/// True for empty, whitespace-only, `unknown` and `nan` cells.
pub fn is_absent(cell: &str) -> bool {
    let trimmed = cell.trim();
    trimmed.is_empty() || trimmed.eq_ignore_ascii_case(UNKNOWN) || trimmed.eq_ignore_ascii_case(NAN)
}

/// 2^63, the first magnitude an `i64` cannot hold.
const I64_BOUND: f64 = 9_223_372_036_854_775_808.0;

/// Parse a finite, non-negative decimal number, ignoring surrounding
/// whitespace and thousands separators.
pub(crate) fn parse_number(text: &str) -> Option<f64> {
    let cleaned = text.trim().replace(',', "");
    cleaned
        .parse::<f64>()
        .ok()
        .filter(|value| value.is_finite() && *value >= 0.0)
}

/// Parse a non-negative whole number, ignoring surrounding whitespace and
/// thousands separators.
pub(crate) fn parse_integer(text: &str) -> Option<i64> {
    text.trim()
        .replace(',', "")
        .parse::<i64>()
        .ok()
        .filter(|value| *value >= 0)
}

/// Truncate a parsed quantity to a whole number; `None` when it does not fit.
pub(crate) fn whole_number(value: f64) -> Option<i64> {
    (0.0..I64_BOUND)
        .contains(&value)
        .then(|| value.trunc() as i64)
}

/// Normalize one projected row into a typed record.
///
/// Identifier fields are left empty; they are filled by `ids::assign_identifiers`.
pub fn normalize_record(
    record: &ProjectedRecord,
    months: &MonthTable,
) -> Result<CleanedRecord, PipelineError> {
    let row = record.row;
    let strict = |field: Field, error: FieldError| error.at(field, row, record.cell(field));

    let release = parse_release_date(record.cell(Field::ReleaseDate), months);

    let base_clock_mhz =
        units::clock_mhz(record.cell(Field::BaseClock)).map_err(|e| strict(Field::BaseClock, e))?;
    let boost_clock_mhz = units::clock_mhz(record.cell(Field::BoostClock))
        .map_err(|e| strict(Field::BoostClock, e))?;

    let mem_cell = record.cell(Field::MemSize);
    let mem_size_kb = units::memory_size_kb(mem_cell);
    if mem_size_kb.is_none() && !is_absent(mem_cell) {
        warn!(
            "[gpu_graph:normalize] row {}: memory size '{}' not understood, treating as absent",
            row, mem_cell
        );
    }

    let mem_bus_bits =
        units::memory_bus_bits(record.cell(Field::MemBus)).map_err(|e| strict(Field::MemBus, e))?;
    let bandwidth =
        units::bandwidth(record.cell(Field::Bandwidth)).map_err(|e| strict(Field::Bandwidth, e))?;
    let fp32_gflops =
        units::fp32_gflops(record.cell(Field::Fp32)).map_err(|e| strict(Field::Fp32, e))?;
    let tdp_watts = units::tdp_watts(record.cell(Field::Tdp)).map_err(|e| strict(Field::Tdp, e))?;
    let launch_price = units::launch_price(record.cell(Field::LaunchPrice))
        .map_err(|e| strict(Field::LaunchPrice, e))?;

    let shading_cell = record.cell(Field::ShadingUnits);
    let shading_units = names::shading_units(shading_cell);
    if shading_units.is_none() && !is_absent(shading_cell) {
        warn!(
            "[gpu_graph:normalize] row {}: shading units '{}' not a count, treating as absent",
            row, shading_cell
        );
    }

    Ok(CleanedRecord {
        brand: names::text_field(record.cell(Field::Brand)),
        product_name: names::text_field(record.cell(Field::ProductName)),
        gpu_name: names::text_field(record.cell(Field::GpuName)),
        gpu_codename: names::codename(record.cell(Field::GpuCodename)),
        architecture: names::architecture(record.cell(Field::Architecture)),
        release_year: release.year,
        release_month: release.month,
        release_date: release.date,
        shading_units,
        base_clock_mhz,
        boost_clock_mhz,
        max_clock_mhz: units::max_clock_mhz(base_clock_mhz, boost_clock_mhz),
        mem_size_kb,
        mem_type: names::text_field(record.cell(Field::MemType)),
        mem_bus_bits,
        bandwidth_mbs: bandwidth.mbs,
        is_system_dependent: bandwidth.system_dependent,
        fp32_gflops,
        tdp_watts,
        launch_price,
        ..CleanedRecord::default()
    })
}

/// Normalize every row, aborting on the first fatal cell.
pub fn normalize_all(
    records: &[ProjectedRecord],
    months: &MonthTable,
) -> Result<Vec<CleanedRecord>, PipelineError> {
    records
        .iter()
        .map(|record| normalize_record(record, months))
        .collect()
}

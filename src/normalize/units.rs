//! Strict unit-bearing field normalizers.
//!
//! Each parser accepts only its fixed unit vocabulary. A non-empty cell
//! outside that vocabulary is a `FieldError`, which the caller lifts into a
//! fatal `PipelineError` carrying the column and raw value.

use super::{FieldError, is_absent, parse_integer, parse_number, whole_number};
use crate::constants::units::{
    BANDWIDTH_UNITS, BIT, GFLOPS, MEMORY_SIZE_UNITS, MHZ, SYSTEM_DEPENDENT, SYSTEM_SHARED, TFLOPS,
    UNKNOWN, USD, WATT,
};

/// Normalized bandwidth cell.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Bandwidth {
    /// Bandwidth in MB/s; absent for system-dependent or blank cells.
    pub mbs: Option<f64>,
    /// True when the cell says the figure depends on the host system.
    pub system_dependent: bool,
}

/// Clock speed in whole MHz (`1500 MHz` -> 1500).
pub fn clock_mhz(cell: &str) -> Result<Option<i64>, FieldError> {
    if is_absent(cell) {
        return Ok(None);
    }
    if !cell.contains(MHZ) {
        return Err(FieldError::UnexpectedUnit);
    }
    parse_number(&cell.replace(MHZ, ""))
        .and_then(whole_number)
        .map(Some)
        .ok_or(FieldError::InvalidNumber)
}

/// Larger of base and boost clock, ignoring absent values.
pub fn max_clock_mhz(base: Option<i64>, boost: Option<i64>) -> Option<i64> {
    match (base, boost) {
        (Some(base), Some(boost)) => Some(base.max(boost)),
        (one, None) | (None, one) => one,
    }
}

/// Memory size in kilobytes (`24 GB` -> 25165824).
///
/// Missing unit, an unparseable number or a size beyond `i64` yields absence
/// rather than an error.
pub fn memory_size_kb(cell: &str) -> Option<i64> {
    if is_absent(cell) {
        return None;
    }
    let (unit, multiplier) = MEMORY_SIZE_UNITS
        .iter()
        .find(|(unit, _)| cell.contains(unit))?;
    parse_number(&cell.replace(unit, "")).and_then(|value| whole_number(value * multiplier))
}

/// Memory bus width in bits (`384 bit` -> 384); `System Shared` is absent.
pub fn memory_bus_bits(cell: &str) -> Result<Option<i64>, FieldError> {
    if is_absent(cell) || cell.trim() == SYSTEM_SHARED {
        return Ok(None);
    }
    if !cell.contains(BIT) {
        return Err(FieldError::UnexpectedUnit);
    }
    parse_integer(&cell.replace(BIT, ""))
        .map(Some)
        .ok_or(FieldError::InvalidNumber)
}

/// Memory bandwidth in MB/s (`1.01 TB/s` -> 1059061.76).
pub fn bandwidth(cell: &str) -> Result<Bandwidth, FieldError> {
    if is_absent(cell) {
        return Ok(Bandwidth::default());
    }
    if cell.contains(SYSTEM_DEPENDENT) || cell.contains(SYSTEM_SHARED) {
        return Ok(Bandwidth {
            mbs: None,
            system_dependent: true,
        });
    }
    let mut matched = BANDWIDTH_UNITS.iter().filter(|(unit, _)| cell.contains(unit));
    let (unit, multiplier) = match (matched.next(), matched.next()) {
        (Some(hit), None) => hit,
        _ => return Err(FieldError::UnknownFormat),
    };
    let value = parse_number(&cell.replace(unit, "")).ok_or(FieldError::InvalidNumber)?;
    Ok(Bandwidth {
        mbs: Some(value * multiplier),
        system_dependent: false,
    })
}

/// Single-precision throughput in GFLOPS (`82.58 TFLOPS` -> 82580.0).
pub fn fp32_gflops(cell: &str) -> Result<Option<f64>, FieldError> {
    if is_absent(cell) {
        return Ok(None);
    }
    let (unit, multiplier) = if cell.contains(TFLOPS) {
        (TFLOPS, 1000.0)
    } else if cell.contains(GFLOPS) {
        (GFLOPS, 1.0)
    } else {
        return Err(FieldError::UnexpectedFormat);
    };
    let value = parse_number(&cell.replace(unit, "")).ok_or(FieldError::InvalidNumber)?;
    Ok(Some(value * multiplier))
}

/// Thermal design power in watts (`450 W` -> 450); `unknown` is absent.
pub fn tdp_watts(cell: &str) -> Result<Option<i64>, FieldError> {
    if is_absent(cell) || cell.to_ascii_lowercase().contains(UNKNOWN) {
        return Ok(None);
    }
    if !cell.contains(WATT) {
        return Err(FieldError::UnexpectedUnit);
    }
    parse_integer(&cell.replace(WATT, ""))
        .map(Some)
        .ok_or(FieldError::InvalidNumber)
}

/// Launch price in whole US dollars (`$1,599 USD` -> 1599).
pub fn launch_price(cell: &str) -> Result<Option<i64>, FieldError> {
    if is_absent(cell) {
        return Ok(None);
    }
    if !cell.contains(USD) {
        return Err(FieldError::UnexpectedFormat);
    }
    let stripped = cell.replace(USD, "");
    let amount = stripped.trim();
    let amount = amount.strip_prefix('$').unwrap_or(amount);
    parse_number(amount)
        .and_then(whole_number)
        .map(Some)
        .ok_or(FieldError::InvalidNumber)
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::types::UriId;

/// Internal field names a source column can be projected onto.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Field {
    /// Manufacturer name.
    Brand,
    /// Marketed product name.
    ProductName,
    /// Free-text release date.
    ReleaseDate,
    /// Graphics processor die name.
    GpuName,
    /// Vendor codename of the die.
    GpuCodename,
    /// Microarchitecture name.
    Architecture,
    /// Shader core count.
    ShadingUnits,
    /// Base clock with unit.
    BaseClock,
    /// Boost clock with unit.
    BoostClock,
    /// Memory size with unit.
    MemSize,
    /// Memory technology.
    MemType,
    /// Memory bus width with unit.
    MemBus,
    /// Memory bandwidth with unit.
    Bandwidth,
    /// FP32 throughput with unit.
    Fp32,
    /// Thermal design power with unit.
    Tdp,
    /// Launch price in USD.
    LaunchPrice,
}

impl Field {
    /// Every field in projection order.
    pub const ALL: [Field; 16] = [
        Field::Brand,
        Field::ProductName,
        Field::ReleaseDate,
        Field::GpuName,
        Field::GpuCodename,
        Field::Architecture,
        Field::ShadingUnits,
        Field::BaseClock,
        Field::BoostClock,
        Field::MemSize,
        Field::MemType,
        Field::MemBus,
        Field::Bandwidth,
        Field::Fp32,
        Field::Tdp,
        Field::LaunchPrice,
    ];

    /// Internal column name used in logs and errors.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Field::Brand => "brand",
            Field::ProductName => "product_name",
            Field::ReleaseDate => "release_date",
            Field::GpuName => "gpu_name",
            Field::GpuCodename => "gpu_codename",
            Field::Architecture => "architecture",
            Field::ShadingUnits => "shading_units",
            Field::BaseClock => "base_clock",
            Field::BoostClock => "boost_clock",
            Field::MemSize => "mem_size",
            Field::MemType => "mem_type",
            Field::MemBus => "mem_bus",
            Field::Bandwidth => "bandwidth",
            Field::Fp32 => "tflops_fp32",
            Field::Tdp => "tdp",
            Field::LaunchPrice => "launch_price",
        }
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Fully typed, per-product row used to build the graph.
///
/// Also the row type of the persisted cleaned table; optional fields are
/// written as empty cells.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CleanedRecord {
    /// Manufacturer brand name.
    pub brand: String,
    /// Marketed product name.
    pub product_name: String,
    /// GPU die name; empty when absent.
    pub gpu_name: String,
    /// GPU die codename; empty when absent.
    pub gpu_codename: String,
    /// Normalized architecture name; empty when absent.
    pub architecture: String,
    /// Release year when determinable.
    pub release_year: Option<i32>,
    /// Release month (1-12) when determinable.
    pub release_month: Option<u32>,
    /// Full release date, only when year, month and day all resolve.
    pub release_date: Option<NaiveDate>,
    /// Shader/core count.
    pub shading_units: Option<i64>,
    /// Base clock in MHz.
    pub base_clock_mhz: Option<i64>,
    /// Boost clock in MHz.
    pub boost_clock_mhz: Option<i64>,
    /// Larger of base and boost clock.
    pub max_clock_mhz: Option<i64>,
    /// Memory size in kilobytes.
    pub mem_size_kb: Option<i64>,
    /// Memory technology; empty when absent.
    pub mem_type: String,
    /// Memory bus width in bits.
    pub mem_bus_bits: Option<i64>,
    /// Memory bandwidth in MB/s.
    pub bandwidth_mbs: Option<f64>,
    /// True when bandwidth depends on the host system.
    pub is_system_dependent: bool,
    /// Single-precision throughput in GFLOPS.
    pub fp32_gflops: Option<f64>,
    /// Thermal design power in watts.
    pub tdp_watts: Option<i64>,
    /// Launch price in whole US dollars.
    pub launch_price: Option<i64>,
    /// Product slug derived from `"<brand> <product_name>"`.
    #[serde(default)]
    pub product_uri_id: UriId,
    /// Brand slug.
    #[serde(default)]
    pub brand_uri_id: UriId,
    /// Architecture slug; absent when the architecture is empty.
    #[serde(default)]
    pub arch_uri_id: Option<UriId>,
}

impl CleanedRecord {
    /// Human-readable identity used in collision reports.
    pub fn display_name(&self) -> String {
        format!("{} {}", self.brand, self.product_name)
    }
}

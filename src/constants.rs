/// Column headers of the raw spec-sheet export.
pub mod columns {
    /// Manufacturer brand.
    pub const BRAND: &str = "Brand";
    /// Marketed product name.
    pub const NAME: &str = "Name";
    /// Free-text release date (for example `Sep 20th, 2022`).
    pub const RELEASE_DATE: &str = "Graphics Card__Release Date";
    /// GPU die name.
    pub const GPU_NAME: &str = "Graphics Processor__GPU Name";
    /// GPU die codename.
    pub const CODENAME: &str = "Graphics Processor__Codename";
    /// Microarchitecture name, optionally `|`-separated with aliases.
    pub const ARCHITECTURE: &str = "Graphics Processor__Architecture";
    /// Shader/core count.
    pub const SHADING_UNITS: &str = "Render Config__Shading Units";
    /// Base clock with `MHz` unit.
    pub const BASE_CLOCK: &str = "Clock Speeds__Base Clock";
    /// Boost clock with `MHz` unit.
    pub const BOOST_CLOCK: &str = "Clock Speeds__Boost Clock";
    /// Memory size with `GB`/`MB`/`KB` unit.
    pub const MEMORY_SIZE: &str = "Memory__Memory Size";
    /// Memory technology (GDDR6X, HBM2, ...).
    pub const MEMORY_TYPE: &str = "Memory__Memory Type";
    /// Memory bus width with `bit` unit.
    pub const MEMORY_BUS: &str = "Memory__Memory Bus";
    /// Memory bandwidth with `TB/s`/`GB/s`/`MB/s` unit.
    pub const BANDWIDTH: &str = "Memory__Bandwidth";
    /// Single-precision throughput with `TFLOPS`/`GFLOPS` unit.
    pub const FP32: &str = "Theoretical Performance__FP32 (float)";
    /// Thermal design power with `W` unit.
    pub const TDP: &str = "Board Design__TDP";
    /// Launch price with `USD` marker.
    pub const LAUNCH_PRICE: &str = "Graphics Card__Launch Price";
}

/// Unit and marker tokens recognized by the field normalizers.
pub mod units {
    /// Clock speed unit.
    pub const MHZ: &str = "MHz";
    /// Memory size units in match priority order with their KB multiplier.
    pub const MEMORY_SIZE_UNITS: [(&str, f64); 3] =
        [("GB", 1024.0 * 1024.0), ("MB", 1024.0), ("KB", 1.0)];
    /// Memory bus unit.
    pub const BIT: &str = "bit";
    /// Bus value meaning the GPU shares system memory.
    pub const SYSTEM_SHARED: &str = "System Shared";
    /// Bandwidth value meaning the figure depends on the host system.
    pub const SYSTEM_DEPENDENT: &str = "System Dependent";
    /// Bandwidth units with their MB/s multiplier.
    pub const BANDWIDTH_UNITS: [(&str, f64); 3] =
        [("TB/s", 1024.0 * 1024.0), ("GB/s", 1024.0), ("MB/s", 1.0)];
    /// FP32 throughput in teraflops.
    pub const TFLOPS: &str = "TFLOPS";
    /// FP32 throughput in gigaflops.
    pub const GFLOPS: &str = "GFLOPS";
    /// Power unit.
    pub const WATT: &str = "W";
    /// Currency marker required on launch prices.
    pub const USD: &str = "USD";
    /// Placeholder meaning "no value".
    pub const UNKNOWN: &str = "unknown";
    /// Placeholder written by dataframe tooling for blank cells.
    pub const NAN: &str = "nan";
}

/// Namespace IRIs and prefixes used in the emitted graph.
pub mod namespaces {
    /// Domain vocabulary namespace.
    pub const EX: &str = "http://example.org/gpu/";
    /// schema.org vocabulary namespace.
    pub const SCHEMA: &str = "https://schema.org/";
    /// OWL namespace.
    pub const OWL: &str = "http://www.w3.org/2002/07/owl#";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XML Schema datatypes namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// Prefix bindings written at the top of Turtle output, in output order.
    pub const PREFIXES: [(&str, &str); 6] = [
        ("ex", EX),
        ("schema", SCHEMA),
        ("owl", OWL),
        ("rdf", RDF),
        ("rdfs", RDFS),
        ("xsd", XSD),
    ];
}

/// Default file locations, relative to the working directory.
pub mod paths {
    /// Default data directory.
    pub const DEFAULT_DATA_DIR: &str = "data";
    /// Default raw spec-sheet filename.
    pub const DEFAULT_SOURCE_FILENAME: &str = "gpu_1986-2026.csv";
    /// Default cleaned intermediate table filename.
    pub const DEFAULT_CLEANED_FILENAME: &str = "gpu_info_cleaned.csv";
    /// Default graph output filename.
    pub const DEFAULT_GRAPH_FILENAME: &str = "gpu_data.ttl";
    /// Extension used for in-progress writes before the final rename.
    pub const TEMP_EXTENSION: &str = "tmp";

    /// Environment override for the raw source path.
    pub const ENV_SOURCE: &str = "GPU_GRAPH_SOURCE";
    /// Environment override for the cleaned table path.
    pub const ENV_CLEANED: &str = "GPU_GRAPH_CLEANED";
    /// Environment override for the graph output path.
    pub const ENV_OUTPUT: &str = "GPU_GRAPH_OUTPUT";
}

/// Constants used when building dedup keys.
pub mod dedup {
    /// Unit separator placed between key components; never present in cell text.
    pub const KEY_SEPARATOR: char = '\u{1f}';
}

//! Vocabulary terms used by the graph.

use crate::constants::namespaces::{EX, XSD};
use crate::types::Iri;

/// `rdf:type`.
pub const RDF_TYPE: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#type";
/// `rdf:Property`.
pub const RDF_PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
/// `rdfs:Class`.
pub const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
/// `rdfs:label`.
pub const RDFS_LABEL: &str = "http://www.w3.org/2000/01/rdf-schema#label";
/// `rdfs:comment`.
pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";
/// `rdfs:range`.
pub const RDFS_RANGE: &str = "http://www.w3.org/2000/01/rdf-schema#range";
/// `rdfs:subClassOf`.
pub const RDFS_SUB_CLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
/// `owl:sameAs`.
pub const OWL_SAME_AS: &str = "http://www.w3.org/2002/07/owl#sameAs";

/// Brand entity class.
pub const SCHEMA_ORGANIZATION: &str = "https://schema.org/Organization";
/// Product entity class.
pub const SCHEMA_PRODUCT: &str = "https://schema.org/Product";
/// Display name of any entity.
pub const SCHEMA_NAME: &str = "https://schema.org/name";
/// Product to brand relation.
pub const SCHEMA_MANUFACTURER: &str = "https://schema.org/manufacturer";
/// Launch price.
pub const SCHEMA_PRICE: &str = "https://schema.org/price";
/// Currency code of the launch price.
pub const SCHEMA_PRICE_CURRENCY: &str = "https://schema.org/priceCurrency";
/// Full release date.
pub const SCHEMA_RELEASE_DATE: &str = "https://schema.org/releaseDate";

/// Domain class of graphics cards, a subclass of `schema:Product`.
pub const EX_GPU: &str = "http://example.org/gpu/GPU";
/// Domain class of GPU microarchitectures.
pub const EX_GPU_ARCHITECTURE: &str = "http://example.org/gpu/GPUArchitecture";

/// XSD datatypes of literal values.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Datatype {
    /// `xsd:string`; string literals themselves are written untyped.
    String,
    /// `xsd:integer`.
    Integer,
    /// `xsd:decimal`.
    Decimal,
    /// `xsd:boolean`.
    Boolean,
    /// `xsd:date`.
    Date,
}

impl Datatype {
    /// Local name in the XSD namespace.
    pub const fn local(&self) -> &'static str {
        match self {
            Datatype::String => "string",
            Datatype::Integer => "integer",
            Datatype::Decimal => "decimal",
            Datatype::Boolean => "boolean",
            Datatype::Date => "date",
        }
    }

    /// Full datatype IRI.
    pub fn iri(&self) -> Iri {
        format!("{XSD}{}", self.local())
    }
}

/// Declared range of a custom property.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PropertyRange {
    /// Literal values of one datatype.
    Datatype(Datatype),
    /// References to instances of a class IRI.
    Class(&'static str),
}

impl PropertyRange {
    /// Range IRI written as the `rdfs:range` object.
    pub fn iri(&self) -> Iri {
        match self {
            PropertyRange::Datatype(datatype) => datatype.iri(),
            PropertyRange::Class(class) => class.to_string(),
        }
    }
}

/// Metadata for one custom property of the domain vocabulary.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PropertySpec {
    /// Local name in the `ex:` namespace.
    pub local: &'static str,
    /// Human-readable label.
    pub label: &'static str,
    /// Datatype or class of the values.
    pub range: PropertyRange,
    /// Descriptive comment.
    pub comment: &'static str,
}

impl PropertySpec {
    /// Full property IRI.
    pub fn iri(&self) -> Iri {
        format!("{EX}{}", self.local)
    }
}

macro_rules! property {
    ($name:ident, $local:literal, $label:literal, $range:ident, $comment:literal) => {
        #[doc = $comment]
        pub const $name: PropertySpec = PropertySpec {
            local: $local,
            label: $label,
            range: $range,
            comment: $comment,
        };
    };
}

const TEXT: PropertyRange = PropertyRange::Datatype(Datatype::String);
const INTEGER: PropertyRange = PropertyRange::Datatype(Datatype::Integer);
const DECIMAL: PropertyRange = PropertyRange::Datatype(Datatype::Decimal);
const BOOLEAN: PropertyRange = PropertyRange::Datatype(Datatype::Boolean);
const ARCHITECTURE_CLASS: PropertyRange = PropertyRange::Class(EX_GPU_ARCHITECTURE);

property!(
    HAS_ARCHITECTURE,
    "hasArchitecture",
    "architecture",
    ARCHITECTURE_CLASS,
    "GPU microarchitecture the product is built on."
);
property!(GPU_NAME, "gpuName", "GPU name", TEXT, "Name of the graphics processor die.");
property!(CODENAME, "codename", "codename", TEXT, "Vendor codename of the graphics processor.");
property!(
    MEMORY_TYPE,
    "memoryType",
    "memory type",
    TEXT,
    "Memory technology, for example GDDR6X or HBM2."
);
property!(RELEASE_YEAR, "releaseYear", "release year", INTEGER, "Calendar year of release.");
property!(
    RELEASE_MONTH,
    "releaseMonth",
    "release month",
    INTEGER,
    "Calendar month of release, 1 to 12."
);
property!(SHADING_UNITS, "shadingUnits", "shading units", INTEGER, "Number of shader cores.");
property!(BASE_CLOCK, "baseClockMHz", "base clock (MHz)", INTEGER, "Base GPU clock in megahertz.");
property!(
    BOOST_CLOCK,
    "boostClockMHz",
    "boost clock (MHz)",
    INTEGER,
    "Boost GPU clock in megahertz."
);
property!(
    MAX_CLOCK,
    "maxClockMHz",
    "max clock (MHz)",
    INTEGER,
    "Larger of base and boost clock in megahertz."
);
property!(
    MEMORY_SIZE,
    "memorySizeKB",
    "memory size (KB)",
    INTEGER,
    "On-board memory size in kilobytes."
);
property!(
    MEMORY_BUS,
    "memoryBusBits",
    "memory bus (bits)",
    INTEGER,
    "Memory interface width in bits."
);
property!(
    BANDWIDTH,
    "bandwidthMBs",
    "bandwidth (MB/s)",
    DECIMAL,
    "Memory bandwidth in megabytes per second."
);
property!(
    SYSTEM_DEPENDENT_BANDWIDTH,
    "systemDependentBandwidth",
    "system dependent bandwidth",
    BOOLEAN,
    "True when memory bandwidth depends on the host system."
);
property!(
    FP32,
    "fp32GFLOPS",
    "FP32 performance (GFLOPS)",
    DECIMAL,
    "Theoretical single-precision throughput in gigaflops."
);
property!(TDP, "tdpWatts", "TDP (W)", INTEGER, "Thermal design power in watts.");

/// Every custom property, in metadata emission order.
pub const CUSTOM_PROPERTIES: [PropertySpec; 16] = [
    HAS_ARCHITECTURE,
    GPU_NAME,
    CODENAME,
    MEMORY_TYPE,
    RELEASE_YEAR,
    RELEASE_MONTH,
    SHADING_UNITS,
    BASE_CLOCK,
    BOOST_CLOCK,
    MAX_CLOCK,
    MEMORY_SIZE,
    MEMORY_BUS,
    BANDWIDTH,
    SYSTEM_DEPENDENT_BANDWIDTH,
    FP32,
    TDP,
];

/// IRI of an entity in the domain namespace.
///
/// Characters not allowed inside an IRI reference are percent-encoded.
pub fn entity_iri(id: &str) -> Iri {
    let mut iri = String::with_capacity(EX.len() + id.len());
    iri.push_str(EX);
    for ch in id.chars() {
        if needs_escape(ch) {
            let mut buf = [0u8; 4];
            for byte in ch.encode_utf8(&mut buf).bytes() {
                iri.push_str(&format!("%{byte:02X}"));
            }
        } else {
            iri.push(ch);
        }
    }
    iri
}

fn needs_escape(ch: char) -> bool {
    ch.is_control()
        || matches!(
            ch,
            ' ' | '<' | '>' | '"' | '{' | '}' | '|' | '^' | '`' | '\\' | '%'
        )
}

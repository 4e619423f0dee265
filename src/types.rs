/// Column header as it appears in the raw source table.
/// Examples: `Brand`, `Memory__Memory Size`, `Board Design__TDP`
pub type ColumnName = String;
/// Raw, untyped cell text read from the source table.
/// Examples: `24 GB`, `1.01 TB/s`, `System Dependent`, `unknown`
pub type RawCell = String;
/// URI-safe slug used as the local part of an entity IRI.
/// Examples: `NVIDIA`, `NVIDIA_GeForce_RTX_4090`, `Ada_Lovelace`
pub type UriId = String;
/// Absolute IRI string.
/// Example: `http://example.org/gpu/NVIDIA_GeForce_RTX_4090`
pub type Iri = String;
/// One-based data row number in the source table (header excluded).
pub type RowNumber = usize;
/// Components joined into an exact-match deduplication key.
/// Example: `NVIDIA\u{1f}GeForce RTX 4090\u{1f}AD102\u{1f}...`
pub type DedupKey = String;

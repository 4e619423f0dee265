//! Normalizers for identity and descriptive text fields.

use super::{is_absent, parse_number, whole_number};

/// Trimmed text, or empty when the cell is absent.
pub fn text_field(cell: &str) -> String {
    if is_absent(cell) {
        String::new()
    } else {
        cell.trim().to_string()
    }
}

/// GPU codename; `unknown` collapses to the empty string.
pub fn codename(cell: &str) -> String {
    text_field(cell)
}

/// Normalized architecture name.
///
/// Keeps the first `|`-separated segment and folds Intel naming variants:
/// `Generation 9.5` becomes `Intel Gen 9.5`, `Xe-LPG` becomes `Intel Xe-LPG`.
pub fn architecture(cell: &str) -> String {
    let head = cell.split('|').next().unwrap_or("").trim();
    if is_absent(head) {
        return String::new();
    }
    if let Some(rest) = head.strip_prefix("Generation") {
        return format!("Intel Gen{rest}");
    }
    if head.starts_with("Xe") {
        return format!("Intel {head}");
    }
    head.to_string()
}

/// Shader count; tolerates a trailing `.0`. Non-numeric, negative or
/// oversized text is absent.
pub fn shading_units(cell: &str) -> Option<i64> {
    if is_absent(cell) {
        return None;
    }
    parse_number(cell).and_then(whole_number)
}

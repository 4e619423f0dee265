use chrono::NaiveDate;

use crate::config::MonthTable;

/// Release date pieces recovered from a free-text cell.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ReleaseDate {
    /// Four-digit year starting with 19 or 20.
    pub year: Option<i32>,
    /// Month number from a three-letter month abbreviation.
    pub month: Option<u32>,
    /// Calendar date, only when year, month and day form a valid date.
    pub date: Option<NaiveDate>,
}

/// Parse a release date cell such as `Sep 20th, 2022`, `Mar 2019` or `2004`.
///
/// Partial results are kept: a missing day still yields year and month, a
/// missing month still yields the year. Never fails; unparseable text yields
/// an empty `ReleaseDate`.
pub fn parse_release_date(cell: &str, months: &MonthTable) -> ReleaseDate {
    let tokens: Vec<&str> = cell
        .split(|c: char| !c.is_ascii_alphanumeric())
        .filter(|token| !token.is_empty())
        .collect();

    let year = tokens.iter().find_map(|token| parse_year_token(token));
    let month = tokens
        .iter()
        .find_map(|token| parse_month_token(token, months));
    let day = tokens.iter().find_map(|token| parse_ordinal_day_token(token));

    let date = match (year, month, day) {
        (Some(year), Some(month), Some(day)) => NaiveDate::from_ymd_opt(year, month, day),
        _ => None,
    };

    ReleaseDate { year, month, date }
}

/// A four-digit token beginning with `19` or `20`.
fn parse_year_token(token: &str) -> Option<i32> {
    if token.len() != 4 || !token.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    if !(token.starts_with("19") || token.starts_with("20")) {
        return None;
    }
    token.parse().ok()
}

/// An alphabetic token whose first three letters name a month.
fn parse_month_token(token: &str, months: &MonthTable) -> Option<u32> {
    if token.len() < 3 || !token.bytes().all(|b| b.is_ascii_alphabetic()) {
        return None;
    }
    months.lookup(&token[..3])
}

/// A one- or two-digit day followed by `st`, `nd`, `rd` or `th`.
fn parse_ordinal_day_token(token: &str) -> Option<u32> {
    let split = token.find(|c: char| !c.is_ascii_digit())?;
    let (digits, suffix) = token.split_at(split);
    if digits.is_empty() || digits.len() > 2 {
        return None;
    }
    if !matches!(suffix, "st" | "nd" | "rd" | "th") {
        return None;
    }
    digits.parse().ok()
}

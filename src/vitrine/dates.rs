use chrono::NaiveDate;
use lazy_static::lazy_static;
use regex::Regex;

// Exactly as the backoffice editors write them: lowercase, accents kept.
// "marco" does not match "março".
const PORTUGUESE_MONTHS: [&str; 12] = [
    "janeiro",
    "fevereiro",
    "março",
    "abril",
    "maio",
    "junho",
    "julho",
    "agosto",
    "setembro",
    "outubro",
    "novembro",
    "dezembro",
];

lazy_static! {
    static ref SLASH_DATE: Regex =
        Regex::new(r"^(\d{1,2})/(\d{1,2})/(\d{4})").expect("Failed to create slash date regex");
    static ref ISO_DATE: Regex =
        Regex::new(r"^(\d{4})-(\d{2})-(\d{2})").expect("Failed to create ISO date regex");
    static ref WRITTEN_DATE: Regex =
        Regex::new(r"(?i)^\s*(\d{1,2})(?:\s+a\s+\d{1,2})?(?:\s+de)?\s+(\p{L}+)(?:\s+de)?\s+(\d{4})")
            .expect("Failed to create written date regex");
}

/// Interprets an event's display date, trying each accepted format in a
/// fixed order: "20/03/2026", then "2026-03-20", then "20 de março de 2026"
/// (optionally with an "a 22" range, in which case only the first day
/// counts). Trailing text such as a time suffix is ignored. Anything else
/// is unparseable and the event has no date for scheduling purposes.
pub fn parse_display_date(raw: &str) -> Option<NaiveDate> {
    parse_slash_date(raw)
        .or_else(|| parse_iso_date(raw))
        .or_else(|| parse_written_date(raw))
}

fn parse_slash_date(raw: &str) -> Option<NaiveDate> {
    let captures = SLASH_DATE.captures(raw)?;

    let day = captures[1].parse().ok()?;
    let month = captures[2].parse().ok()?;
    let year = captures[3].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_iso_date(raw: &str) -> Option<NaiveDate> {
    let captures = ISO_DATE.captures(raw)?;

    let year = captures[1].parse().ok()?;
    let month = captures[2].parse().ok()?;
    let day = captures[3].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn parse_written_date(raw: &str) -> Option<NaiveDate> {
    let captures = WRITTEN_DATE.captures(raw)?;

    let day = captures[1].parse().ok()?;
    let month = month_number(&captures[2])?;
    let year = captures[3].parse().ok()?;

    NaiveDate::from_ymd_opt(year, month, day)
}

fn month_number(name: &str) -> Option<u32> {
    let name = name.to_lowercase();

    PORTUGUESE_MONTHS
        .iter()
        .position(|month| *month == name)
        .map(|index| index as u32 + 1)
}

pub fn month_name(month: u32) -> &'static str {
    PORTUGUESE_MONTHS[(month - 1) as usize]
}

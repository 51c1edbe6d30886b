//! Date specification parsing.
//!
//! A specification is a comma-separated list of tokens. Each token is either a
//! single date (`DD.MM.YYYY`) or an inclusive range (`DD.MM.YYYY-DD.MM.YYYY`).
//! Tokens expand in order; ranges expand day by day in ascending order. The
//! result is neither deduplicated nor sorted across tokens.
use chrono::NaiveDate;

use crate::error::{Error, Result};
use crate::types::{INPUT_DATE_FORMAT, OUTPUT_DATE_FORMAT};

const TOKEN_SEPARATOR: char = ',';
const RANGE_SEPARATOR: char = '-';

/// Parse a single `DD.MM.YYYY` date, ignoring surrounding whitespace.
///
/// The year must be exactly four digits; chrono alone would read `01.01.20`
/// as the year 20.
pub fn parse_date(token: &str) -> Result<NaiveDate> {
    let token = token.trim();
    let four_digit_year = token
        .rsplit_once('.')
        .is_some_and(|(_, year)| year.len() == 4 && year.bytes().all(|b| b.is_ascii_digit()));
    if !four_digit_year {
        return Err(Error::format(token, "expected DD.MM.YYYY (four-digit year)"));
    }
    NaiveDate::parse_from_str(token, INPUT_DATE_FORMAT)
        .map_err(|e| Error::format(token, format!("expected DD.MM.YYYY ({})", e)))
}

/// Every date from `start` to `finish`, both inclusive.
///
/// A reversed range yields no dates.
pub fn expand_range(start: NaiveDate, finish: NaiveDate) -> Vec<NaiveDate> {
    start.iter_days().take_while(|day| *day <= finish).collect()
}

fn parse_range(token: &str) -> Result<Vec<NaiveDate>> {
    let bounds: Vec<&str> = token.split(RANGE_SEPARATOR).collect();
    match bounds.as_slice() {
        [start, finish] => Ok(expand_range(parse_date(start)?, parse_date(finish)?)),
        _ => Err(Error::format(
            token,
            format!(
                "range must be DD.MM.YYYY-DD.MM.YYYY, found {} parts",
                bounds.len()
            ),
        )),
    }
}

/// Parse a date specification into the ordered list of dates it names.
///
/// # Examples
///
/// ```
/// use skim_request_machine::core::dates::{format_dates, parse_dates};
///
/// let dates = parse_dates("01.01.2020,05.01.2020-07.01.2020").unwrap();
/// assert_eq!(
///     format_dates(&dates),
///     vec!["2020-01-01", "2020-01-05", "2020-01-06", "2020-01-07"]
/// );
/// ```
pub fn parse_dates(spec: &str) -> Result<Vec<NaiveDate>> {
    let mut dates = Vec::new();
    for token in spec.split(TOKEN_SEPARATOR) {
        let token = token.trim();
        if token.contains(RANGE_SEPARATOR) {
            dates.extend(parse_range(token)?);
        } else {
            dates.push(parse_date(token)?);
        }
    }
    Ok(dates)
}

/// Render dates in their wire form (`YYYY-MM-DD`).
pub fn format_dates(dates: &[NaiveDate]) -> Vec<String> {
    dates
        .iter()
        .map(|d| d.format(OUTPUT_DATE_FORMAT).to_string())
        .collect()
}

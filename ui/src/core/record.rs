//! Raw obituary records and their enriched, display-ready form.

use serde::Deserialize;
use time::{macros::format_description, Date};

use super::error::ParseError;

/// One entry exactly as it appears in the record payload.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    pub name: String,
    /// Open category such as `"model"` or `"product"`.
    #[serde(rename = "type")]
    pub category: String,
    pub company: String,
    pub born: String,
    pub died: String,
    pub description: String,
    pub cause: String,
    #[serde(default)]
    pub link: Option<String>,
}

/// A record with its derived fields computed. Built once by [`enrich`] and
/// shared read-only afterwards.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EnrichedRecord {
    pub name: String,
    pub category: String,
    pub company: String,
    pub born: String,
    pub died: String,
    pub description: String,
    pub cause: String,
    pub link: Option<String>,
    pub born_date: Date,
    pub died_date: Date,
    /// Whole days from `born_date` to `died_date`; never negative.
    pub lifespan_days: u32,
    pub lifespan_text: String,
}

/// Parse the dates of `raw` and compute its lifespan.
pub fn enrich(raw: RawRecord) -> Result<EnrichedRecord, ParseError> {
    let born_date = parse_date(&raw.name, "born", &raw.born)?;
    let died_date = parse_date(&raw.name, "died", &raw.died)?;

    let days = (died_date - born_date).whole_days();
    if days < 0 {
        return Err(ParseError::DiedBeforeBorn {
            record: raw.name,
            born: raw.born,
            died: raw.died,
        });
    }
    let lifespan_days = u32::try_from(days).unwrap_or(u32::MAX);

    let RawRecord {
        name,
        category,
        company,
        born,
        died,
        description,
        cause,
        link,
    } = raw;

    Ok(EnrichedRecord {
        name,
        category,
        company,
        born,
        died,
        description,
        cause,
        link,
        born_date,
        died_date,
        lifespan_days,
        lifespan_text: lifespan_text(lifespan_days),
    })
}

fn parse_date(record: &str, field: &'static str, value: &str) -> Result<Date, ParseError> {
    Date::parse(value, format_description!("[year]-[month]-[day]")).map_err(|_| {
        ParseError::InvalidDate {
            record: record.to_string(),
            field,
            value: value.to_string(),
        }
    })
}

/// Human phrase for a lifespan:
/// - < 7 days -> "N days"
/// - < 30 days -> "N weeks"
/// - < 365 days -> "N months" (30-day months)
/// - otherwise -> "N years" or "Ny Mm"
pub fn lifespan_text(days: u32) -> String {
    if days < 7 {
        return counted(days, "day");
    }
    if days < 30 {
        return counted(days / 7, "week");
    }
    if days < 365 {
        return counted(days / 30, "month");
    }

    let years = days / 365;
    let rem_months = (days % 365) / 30;
    if rem_months == 0 {
        counted(years, "year")
    } else {
        format!("{years}y {rem_months}m")
    }
}

fn counted(n: u32, unit: &str) -> String {
    if n == 1 {
        format!("{n} {unit}")
    } else {
        format!("{n} {unit}s")
    }
}

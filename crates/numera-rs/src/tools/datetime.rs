//! Date and time tool.
//!
//! Pattern-matches a free-text query (Spanish or English phrasings)
//! against a small set of date questions: current date/time, a date N
//! days away, the difference between two dates, the weekday of a date,
//! leap years, days until year end, ISO week, day of the year, unix
//! timestamp. Anything unmatched falls back to the full current date
//! and time.

use std::sync::LazyLock;

use chrono::{Datelike, Duration, Local, NaiveDate};
use regex::Regex;
use schemars::JsonSchema;
use serde::Deserialize;

use crate::ToolDef;
use crate::tools::core::{Tool, ToolFuture, parse_tool_args};
use crate::tools::names;
use crate::tools::spec::ToolSpec;

/// Typed arguments for `datetime`.
#[derive(Deserialize, JsonSchema)]
pub struct DateTimeArgs {
    /// A date/time question, e.g. 'fecha actual', 'in 30 days',
    /// 'es 2024 bisiesto', 'timestamp'.
    pub query: String,
}

/// Answer date and time questions against the local clock.
pub struct DateTimeTool;

static IN_DAYS: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:en|in)\s+(\d+)\s+d(?:[ií]as?|ays?)").expect("pattern compiles")
});
static DAYS_AGO: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:hace\s+(\d+)\s+d[ií]as?|(\d+)\s+days?\s+ago)").expect("pattern compiles")
});
static YEAR: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\b(\d{4})\b").expect("pattern compiles"));
static DAYS_BETWEEN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)d(?:[ií]as?|ays?)\s+(?:entre|between)\s+(\d{4}-\d{2}-\d{2})\s+(?:y|and)\s+(\d{4}-\d{2}-\d{2})")
        .expect("pattern compiles")
});
static WEEKDAY_OF: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"(?i)(?:d[ií]a\s+de\s+la\s+semana\s+es|day\s+of\s+the\s+week\s+is)\s+(\d{4}-\d{2}-\d{2})")
        .expect("pattern compiles")
});

impl Tool for DateTimeTool {
    fn definition(&self) -> ToolDef {
        ToolSpec::builder(names::DATETIME)
            .purpose("Answer date and time questions")
            .when_to_use(
                "For the current date or time, dates N days in the past or \
                 future, days between two dates, the weekday of a date, leap \
                 years, days until year end, the ISO week number, the day of \
                 the year, or the unix timestamp",
            )
            .when_not_to_use("For calendar math the query patterns don't cover")
            .parameters_for::<DateTimeArgs>()
            .example("datetime(query='fecha actual')", "the current date")
            .example("datetime(query='in 30 days')", "the date 30 days from now")
            .example(
                "datetime(query='días entre 2024-01-01 y 2024-12-31')",
                "the number of days between the two dates",
            )
            .example("datetime(query='es 2024 bisiesto')", "whether 2024 is a leap year")
            .output_format("A single informative line")
            .build()
            .to_tool_def()
    }

    fn execute(&self, arguments: &str) -> ToolFuture<'_> {
        let arguments = arguments.to_string();
        Box::pin(async move {
            let args: DateTimeArgs = match parse_tool_args(&arguments) {
                Ok(a) => a,
                Err(e) => return e,
            };
            answer(&args.query)
        })
    }
}

fn answer(query: &str) -> String {
    let query_lower = query.trim().to_lowercase();
    let now = Local::now();

    if ["fecha actual", "hoy", "today", "current date", "qué fecha es"]
        .iter()
        .any(|t| query_lower.contains(t))
    {
        return now.format("%A, %d %B %Y").to_string();
    }

    if ["hora actual", "qué hora es", "current time", "what time"]
        .iter()
        .any(|t| query_lower.contains(t))
    {
        return format!("{} (local time)", now.format("%H:%M:%S"));
    }

    if let Some(captures) = IN_DAYS.captures(&query_lower)
        && let Some(days) = captures.get(1).and_then(|m| m.as_str().parse::<i64>().ok())
    {
        let future = now + Duration::days(days);
        return format!("In {days} days it will be {}", future.format("%A, %d %B %Y"));
    }

    if let Some(captures) = DAYS_AGO.captures(&query_lower) {
        let days = captures
            .get(1)
            .or_else(|| captures.get(2))
            .and_then(|m| m.as_str().parse::<i64>().ok());
        if let Some(days) = days {
            let past = now - Duration::days(days);
            return format!("{days} days ago it was {}", past.format("%A, %d %B %Y"));
        }
    }

    if let Some(captures) = DAYS_BETWEEN.captures(&query_lower) {
        return match (parse_date(&captures[1]), parse_date(&captures[2])) {
            (Some(a), Some(b)) => {
                let days = (b - a).num_days().abs();
                format!("There are {days} days between {} and {}", &captures[1], &captures[2])
            }
            _ => format!("Error: invalid date in '{}'", captures[0].trim()),
        };
    }

    if let Some(captures) = WEEKDAY_OF.captures(&query_lower) {
        return match parse_date(&captures[1]) {
            Some(date) => format!("{} is a {}", &captures[1], date.format("%A")),
            None => format!("Error: invalid date '{}'", &captures[1]),
        };
    }

    if ["fin de año", "año nuevo", "end of the year", "new year"]
        .iter()
        .any(|t| query_lower.contains(t))
    {
        let today = now.date_naive();
        // Dec 31 always exists, so the constructor cannot fail here.
        let days_left = NaiveDate::from_ymd_opt(today.year(), 12, 31)
            .map(|end| (end - today).num_days())
            .unwrap_or(0);
        return format!("{days_left} days left until the end of {}", today.year());
    }

    if query_lower.contains("día del año") || query_lower.contains("day of the year") {
        return format!("Today is day {} of {}", now.ordinal(), now.year());
    }

    if query_lower.contains("bisiesto") || query_lower.contains("leap") {
        let year = YEAR
            .captures(&query_lower)
            .and_then(|c| c.get(1))
            .and_then(|m| m.as_str().parse::<i32>().ok())
            .unwrap_or_else(|| now.year());
        return if is_leap_year(year) {
            format!("{year} is a leap year (366 days)")
        } else {
            format!("{year} is not a leap year (365 days)")
        };
    }

    if query_lower.contains("semana") || query_lower.contains("week") {
        let week = now.iso_week();
        return format!("ISO week {} of {}", week.week(), week.year());
    }

    if query_lower.contains("timestamp") || query_lower.contains("unix") {
        return format!("Current unix timestamp: {}", now.timestamp());
    }

    now.format("%Y-%m-%d %H:%M:%S").to_string()
}

fn parse_date(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text, "%Y-%m-%d").ok()
}

fn is_leap_year(year: i32) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

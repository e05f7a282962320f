//! Birthday matching and message composition
//!
//! Matching compares the month-day component of each record against today's
//! month-day, ignoring any year prefix. Composition renders literal string
//! templates; the top-level [`birthday_message`] always returns a sendable
//! string, never an error.

use chrono::{Datelike, Month, NaiveDate};

use crate::store::{load_records, BirthdayRecord};
use crate::{Error, Result};
use std::path::Path;

const FILE_NOT_FOUND_MESSAGE: &str = "❗ Error: Birthday database file not found!";

const MALFORMED_STORE_MESSAGE: &str =
    "❗ Error: There was an issue reading the birthday database file. Please check the JSON format.";

const CELEBRATION_HEADER: &str = "✨🎉 **🎂 Happy Birthday! 🎂** 🎉✨\n\n";

const CLOSING_LINES: &str = "🎊 Don't forget to send them your warmest wishes! 💌\n\n\
                             🎉 *Celebrate like there's no tomorrow!* 🥂";

/// A parsed birth date: a full calendar date or a year-less month-day pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BirthDate {
    Full(NaiveDate),
    MonthDay { month: u32, day: u32 },
}

impl BirthDate {
    /// Parse a date string in `YYYY-MM-DD` or `MM-DD` form.
    pub fn parse(s: &str) -> Result<Self> {
        if let Ok(date) = NaiveDate::parse_from_str(s, "%Y-%m-%d") {
            return Ok(BirthDate::Full(date));
        }
        if let Some((month, day)) = parse_month_day(s) {
            return Ok(BirthDate::MonthDay { month, day });
        }
        Err(Error::UnparseableDate(s.to_string()))
    }

    /// Birth year, when the date carries one.
    pub fn year(&self) -> Option<i32> {
        match self {
            BirthDate::Full(date) => Some(date.year()),
            BirthDate::MonthDay { .. } => None,
        }
    }

    /// Long human-readable form: "23 September 2000" or "23 September".
    pub fn format_long(&self) -> String {
        match self {
            BirthDate::Full(date) => date.format("%d %B %Y").to_string(),
            BirthDate::MonthDay { month, day } => {
                format!("{:02} {}", day, month_name(*month))
            }
        }
    }
}

/// Year-less month-day pair, validated against a leap year so `02-29`
/// entries stay legal.
fn parse_month_day(s: &str) -> Option<(u32, u32)> {
    let (month, day) = s.split_once('-')?;
    if month.len() != 2 || day.len() != 2 {
        return None;
    }
    let month: u32 = month.parse().ok()?;
    let day: u32 = day.parse().ok()?;
    NaiveDate::from_ymd_opt(2000, month, day)?;
    Some((month, day))
}

fn month_name(month: u32) -> &'static str {
    u8::try_from(month)
        .ok()
        .and_then(|m| Month::try_from(m).ok())
        .map(|m| m.name())
        .unwrap_or("")
}

/// Month-day component used for matching: a 10-char date carries a `YYYY-`
/// prefix which is stripped; anything else is compared whole.
fn month_day_key(date: &str) -> &str {
    if date.len() == 10 {
        date.get(5..).unwrap_or(date)
    } else {
        date
    }
}

fn no_birthdays_message(today: NaiveDate) -> String {
    format!(
        "🌞 **Good Day! Today is {}.**\n\n\
         🚫 *No birthdays today!* 🎂 But every day is special, so why not spread some joy and make someone smile today? 🌟\n\n\
         ✨ Remember, life is worth celebrating every single day! 💫\n\n\
         💌 Want to add your birthday to the list? Let me know, and we’ll make sure you get the spotlight when your day arrives! 🎉",
        today.format("%d %B %Y")
    )
}

/// Compose the notification for `records` on `today`.
///
/// Matched records are reported in input order. Records with a birth year get
/// an age line (`current_year - birth_year`, plain subtraction); year-less
/// records get a generic celebratory line.
pub fn compose_message(records: &[BirthdayRecord], today: NaiveDate) -> Result<String> {
    let today_key = today.format("%m-%d").to_string();

    let celebrants: Vec<&BirthdayRecord> = records
        .iter()
        .filter(|record| month_day_key(&record.date) == today_key)
        .collect();

    if celebrants.is_empty() {
        return Ok(no_birthdays_message(today));
    }

    let mut message = String::from(CELEBRATION_HEADER);
    for record in celebrants {
        let birth_date = BirthDate::parse(&record.date)?;
        let formatted = birth_date.format_long();

        match birth_date.year() {
            Some(birth_year) => {
                let age = today.year() - birth_year;
                message.push_str(&format!(
                    "🎁 **{}** 🎉\n🎂 Born on: *{}*\n🌟 Turns **{} years old** today! 🥳\n\n",
                    record.name, formatted, age
                ));
            }
            None => {
                message.push_str(&format!(
                    "🎁 **{}** 🎉\n🎂 Born on: *{}*\n✨ Let's make their day amazing! 🌈\n\n",
                    record.name, formatted
                ));
            }
        }
    }
    message.push_str(CLOSING_LINES);

    Ok(message)
}

/// Read the store at `path` and compose today's notification.
///
/// Never fails: read, parse and compose errors are converted into the
/// user-facing error strings so the result is always sendable.
pub fn birthday_message<P: AsRef<Path>>(path: P, today: NaiveDate) -> String {
    match load_records(path).and_then(|records| compose_message(&records, today)) {
        Ok(message) => message,
        Err(Error::StoreNotFound(_)) => FILE_NOT_FOUND_MESSAGE.to_string(),
        Err(Error::MalformedStore(_)) => MALFORMED_STORE_MESSAGE.to_string(),
        Err(err) => format!("❗ An unexpected error occurred: {}", err),
    }
}

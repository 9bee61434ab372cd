use chrono::{DateTime, TimeZone};

use crate::ledger::Amount;

pub struct FormatUtils {}

impl FormatUtils {
    /// Zero-padded `HH:MM:SS`. Hours keep growing past 99 rather than wrapping.
    pub fn countdown(seconds: u64) -> String {
        let hours = seconds / 3600;
        let minutes = (seconds % 3600) / 60;
        let secs = seconds % 60;
        format!("{:02}:{:02}:{:02}", hours, minutes, secs)
    }

    pub fn rupees(amount: Amount) -> String {
        format!("₹{}", amount)
    }

    /// e.g. `Oct 16, 3:05 PM`
    pub fn transaction_date<Tz: TimeZone>(at: &DateTime<Tz>) -> String
    where
        Tz::Offset: std::fmt::Display,
    {
        at.format("%b %-d, %-I:%M %p").to_string()
    }
}

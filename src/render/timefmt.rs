// run  := cargo run --
// dir  := .
// kid  :=

use chrono::{DateTime, FixedOffset, Local};

pub const DATE_FORMAT: &str = "%Y-%m-%d %H:%M %Z";

#[derive(Debug, Clone, Copy)]
pub enum TimeFormat {
    Local,
    Fixed(FixedOffset)
}

impl TimeFormat {
    pub fn format(&self, t: &DateTime<FixedOffset>) -> String {
        match self {
            TimeFormat::Local => t.with_timezone(&Local).format(DATE_FORMAT).to_string(),
            TimeFormat::Fixed(offset) => t.with_timezone(offset).format(DATE_FORMAT).to_string()
        }
    }
}

//! Queue attribute names and display formatting

use chrono::{DateTime, Utc};
use qident_core::FormatError;

pub const VISIBILITY_TIMEOUT: &str = "VisibilityTimeout";
pub const DELAY_SECONDS: &str = "DelaySeconds";
pub const MAXIMUM_MESSAGE_SIZE: &str = "MaximumMessageSize";
pub const MESSAGE_RETENTION_PERIOD: &str = "MessageRetentionPeriod";
pub const CREATED_TIMESTAMP: &str = "CreatedTimestamp";
pub const LAST_MODIFIED_TIMESTAMP: &str = "LastModifiedTimestamp";

const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S UTC";

/// How an attribute value is rendered for display
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormatRule {
    /// Append a unit after the raw value, e.g. `30 seconds`
    AppendUnit(&'static str),
    /// Integer seconds rendered as a duration, e.g. `4 days`
    DurationSeconds,
    /// Integer epoch seconds rendered as a UTC date and time
    EpochSecondsTimestamp,
    PassThrough,
}

impl FormatRule {
    pub fn for_attribute(name: &str) -> Self {
        match name {
            VISIBILITY_TIMEOUT => Self::AppendUnit("seconds"),
            MAXIMUM_MESSAGE_SIZE => Self::AppendUnit("bytes"),
            MESSAGE_RETENTION_PERIOD => Self::DurationSeconds,
            CREATED_TIMESTAMP | LAST_MODIFIED_TIMESTAMP => Self::EpochSecondsTimestamp,
            _ => Self::PassThrough,
        }
    }

    /// Render `value` of the attribute `name` under this rule
    pub fn apply(self, name: &str, value: &str) -> Result<String, FormatError> {
        match self {
            Self::AppendUnit(unit) => Ok(format!("{} {}", value.trim(), unit)),
            Self::DurationSeconds => parse_integer(name, value).map(format_duration),
            Self::EpochSecondsTimestamp => {
                let seconds = parse_integer(name, value)?;
                format_timestamp(seconds).ok_or_else(|| FormatError::TimestampOutOfRange {
                    attribute: name.to_string(),
                    value: seconds,
                })
            }
            Self::PassThrough => Ok(value.to_string()),
        }
    }
}

fn parse_integer(name: &str, value: &str) -> Result<i64, FormatError> {
    value
        .trim()
        .parse::<i64>()
        .map_err(|_| FormatError::NotAnInteger {
            attribute: name.to_string(),
            value: value.to_string(),
        })
}

/// Split a camel-case attribute name into words
///
/// A break is inserted before an uppercase letter that follows a lowercase
/// letter or digit, and before the last capital of an acronym run when a
/// lowercase letter follows it (`SQSManaged` becomes `SQS Managed`).
pub fn humanize_key(key: &str) -> String {
    let chars: Vec<char> = key.chars().collect();
    let mut out = String::with_capacity(key.len() + 4);

    for (i, &c) in chars.iter().enumerate() {
        if i > 0 && c.is_uppercase() {
            let prev = chars[i - 1];
            let next_is_lower = chars.get(i + 1).is_some_and(|n| n.is_lowercase());
            if prev.is_lowercase()
                || prev.is_ascii_digit()
                || (prev.is_uppercase() && next_is_lower)
            {
                out.push(' ');
            }
        }
        out.push(c);
    }

    out
}

/// Render a number of seconds as days, hours, minutes and seconds
///
/// Only non-zero units are listed: `345600` is `4 days`, `3661` is
/// `1 hour 1 minute 1 second`, and zero is `0 seconds`.
pub fn format_duration(seconds: i64) -> String {
    const UNITS: [(u64, &str); 4] = [
        (86_400, "day"),
        (3_600, "hour"),
        (60, "minute"),
        (1, "second"),
    ];

    if seconds == 0 {
        return "0 seconds".to_string();
    }

    let mut remaining = seconds.unsigned_abs();
    let mut parts = Vec::new();
    for (size, unit) in UNITS {
        let count = remaining / size;
        remaining %= size;
        if count > 0 {
            let plural = if count == 1 { "" } else { "s" };
            parts.push(format!("{} {}{}", count, unit, plural));
        }
    }

    let joined = parts.join(" ");
    if seconds < 0 {
        format!("-{}", joined)
    } else {
        joined
    }
}

/// Render epoch seconds as a UTC date and time, or `None` when out of range
pub fn format_timestamp(epoch_seconds: i64) -> Option<String> {
    DateTime::<Utc>::from_timestamp(epoch_seconds, 0)
        .map(|dt| dt.format(TIMESTAMP_FORMAT).to_string())
}

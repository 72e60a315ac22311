use chrono::{DateTime, FixedOffset, Utc};
use thiserror::Error;

/// Errors raised locally, before anything is sent to EC2.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum SpotPriceError {
    #[error("'startTime' must be before 'endTime'. startTime: {start_time}, endTime: {end_time}")]
    InvalidTimeRange {
        start_time: DateTime<FixedOffset>,
        end_time: DateTime<FixedOffset>,
    },
    #[error("lookback of {lookback_seconds} seconds from {now} is out of range")]
    LookbackOutOfRange {
        lookback_seconds: i64,
        now: DateTime<Utc>,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use assert2::check;

    #[test]
    fn invalid_time_range_message_contains_both_timestamps() {
        let start_time = DateTime::parse_from_rfc3339("2010-08-16T06:00:00Z").unwrap();
        let end_time = DateTime::parse_from_rfc3339("2010-08-16T00:00:00Z").unwrap();

        // act
        let message = SpotPriceError::InvalidTimeRange {
            start_time,
            end_time,
        }
        .to_string();

        check!(message.starts_with("'startTime' must be before 'endTime'."));
        check!(message.contains("startTime: 2010-08-16 06:00:00 +00:00"));
        check!(message.contains("endTime: 2010-08-16 00:00:00 +00:00"));
    }
}

//! Display formatting for values coming back from the YouTube Data API
//!
//! Durations arrive as ISO-8601 strings (`PT1H2M3S`) and view counts as raw
//! integers; both are turned into the short strings shown next to a thumbnail.

/// Error produced when a duration string does not follow `P[nD][T[nH][nM][nS]]`
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum DurationError {
    #[error("Duration is empty")]
    Empty,

    #[error("Duration '{0}' does not start with 'P'")]
    MissingPrefix(String),

    #[error("Duration '{0}' has an empty time section")]
    EmptyTimeSection(String),

    #[error("Unknown duration designator '{0}'")]
    UnknownDesignator(char),

    #[error("Duration component '{0}' is repeated or out of order")]
    OutOfOrder(char),

    #[error("Duration component '{0}' has no value")]
    MissingValue(char),

    #[error("Duration has trailing digits '{0}' without a designator")]
    TrailingDigits(String),

    #[error("Duration component '{0}' is too large")]
    Overflow(char),
}

/// Hours, minutes and seconds exactly as written in the duration string
///
/// Components are not normalized: `PT90S` stays 0 minutes and 90 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ClockDuration {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl ClockDuration {
    /// Parses `P[nD][T[nH][nM][nS]]`
    ///
    /// Components must appear in D, H, M, S order and at most once. Days are
    /// folded into hours. Anything else (`PT3M1H`, `PT1.5S`, `1H`) is rejected.
    pub fn parse(value: &str) -> Result<Self, DurationError> {
        if value.is_empty() {
            return Err(DurationError::Empty);
        }

        let rest = value
            .strip_prefix('P')
            .ok_or_else(|| DurationError::MissingPrefix(value.to_string()))?;
        if rest.is_empty() {
            return Err(DurationError::Empty);
        }

        let (date_part, time_part) = match rest.split_once('T') {
            Some((date, time)) => (date, Some(time)),
            None => (rest, None),
        };

        let [days] = parse_components(date_part, ['D'])?;
        let [hours, minutes, seconds] = match time_part {
            Some("") => return Err(DurationError::EmptyTimeSection(value.to_string())),
            Some(time) => parse_components(time, ['H', 'M', 'S'])?,
            None => [0, 0, 0],
        };

        let hours = days
            .checked_mul(24)
            .and_then(|day_hours| day_hours.checked_add(hours))
            .ok_or(DurationError::Overflow('D'))?;

        Ok(Self {
            hours,
            minutes,
            seconds,
        })
    }

    /// `H:MM:SS` when there is at least one hour, `M:SS` otherwise
    pub fn to_display(&self) -> String {
        if self.hours > 0 {
            format!("{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
        } else {
            format!("{}:{:02}", self.minutes, self.seconds)
        }
    }
}

/// Reads `<digits><designator>` pairs whose designators follow `order`
fn parse_components<const N: usize>(
    part: &str,
    order: [char; N],
) -> Result<[u64; N], DurationError> {
    let mut values = [0u64; N];
    let mut next_slot = 0;
    let mut start = 0;

    for (idx, ch) in part.char_indices() {
        if ch.is_ascii_digit() {
            continue;
        }

        let slot = order
            .iter()
            .position(|designator| *designator == ch)
            .ok_or(DurationError::UnknownDesignator(ch))?;
        if slot < next_slot {
            return Err(DurationError::OutOfOrder(ch));
        }

        let digits = &part[start..idx];
        if digits.is_empty() {
            return Err(DurationError::MissingValue(ch));
        }
        values[slot] = digits.parse().map_err(|_| DurationError::Overflow(ch))?;

        next_slot = slot + 1;
        start = idx + ch.len_utf8();
    }

    if start < part.len() {
        return Err(DurationError::TrailingDigits(part[start..].to_string()));
    }

    Ok(values)
}

/// Formats an ISO-8601 video duration for display
///
/// ```
/// use video_search_fn::formatting::format_duration;
///
/// assert_eq!(format_duration("PT1H2M3S").unwrap(), "1:02:03");
/// assert_eq!(format_duration("PT5M9S").unwrap(), "5:09");
/// ```
pub fn format_duration(value: &str) -> Result<String, DurationError> {
    ClockDuration::parse(value).map(|duration| duration.to_display())
}

/// Formats a view count as `1.5M`, `3K` or the plain number
///
/// Both suffixed forms round half up on integer arithmetic, so 2,500 becomes
/// `3K` and 1,250,000 becomes `1.3M`.
pub fn format_views(views: u64) -> String {
    if views >= 1_000_000 {
        let tenths = round_half_up(views, 100_000);
        format!("{}.{}M", tenths / 10, tenths % 10)
    } else if views >= 1_000 {
        format!("{}K", round_half_up(views, 1_000))
    } else {
        views.to_string()
    }
}

/// `value / unit` rounded half up, without overflowing near `u64::MAX`
fn round_half_up(value: u64, unit: u64) -> u64 {
    value / unit + u64::from(value % unit >= unit / 2)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_duration_with_hours() {
        assert_eq!(format_duration("PT1H2M3S").unwrap(), "1:02:03");
        assert_eq!(format_duration("PT10H0M0S").unwrap(), "10:00:00");
        assert_eq!(format_duration("PT2H").unwrap(), "2:00:00");
    }

    #[test]
    fn test_format_duration_without_hours() {
        assert_eq!(format_duration("PT5M9S").unwrap(), "5:09");
        assert_eq!(format_duration("PT45S").unwrap(), "0:45");
        assert_eq!(format_duration("PT12M").unwrap(), "12:00");
        assert_eq!(format_duration("PT0S").unwrap(), "0:00");
    }

    #[test]
    fn test_format_duration_skipped_minutes() {
        assert_eq!(format_duration("PT1H5S").unwrap(), "1:00:05");
    }

    #[test]
    fn test_format_duration_folds_days_into_hours() {
        assert_eq!(format_duration("P1DT1H").unwrap(), "25:00:00");
        assert_eq!(format_duration("P0D").unwrap(), "0:00");
    }

    #[test]
    fn test_format_duration_keeps_components_unnormalized() {
        assert_eq!(format_duration("PT90S").unwrap(), "0:90");
    }

    #[test]
    fn test_format_duration_rejects_out_of_order_components() {
        assert_eq!(
            format_duration("PT3M1H"),
            Err(DurationError::OutOfOrder('H'))
        );
        assert_eq!(
            format_duration("PT1M2M"),
            Err(DurationError::OutOfOrder('M'))
        );
    }

    #[test]
    fn test_format_duration_rejects_malformed_input() {
        assert_eq!(format_duration(""), Err(DurationError::Empty));
        assert_eq!(format_duration("P"), Err(DurationError::Empty));
        assert_eq!(
            format_duration("1H2M"),
            Err(DurationError::MissingPrefix("1H2M".to_string()))
        );
        assert_eq!(
            format_duration("PT"),
            Err(DurationError::EmptyTimeSection("PT".to_string()))
        );
        assert_eq!(format_duration("PTM"), Err(DurationError::MissingValue('M')));
        assert_eq!(
            format_duration("PT1.5S"),
            Err(DurationError::UnknownDesignator('.'))
        );
        assert_eq!(
            format_duration("PT12"),
            Err(DurationError::TrailingDigits("12".to_string()))
        );
        assert_eq!(
            format_duration("PT1H2D"),
            Err(DurationError::UnknownDesignator('D'))
        );
    }

    #[test]
    fn test_format_duration_overflow() {
        assert_eq!(
            format_duration("PT99999999999999999999S"),
            Err(DurationError::Overflow('S'))
        );
    }

    #[test]
    fn test_format_views_millions() {
        assert_eq!(format_views(1_500_000), "1.5M");
        assert_eq!(format_views(1_000_000), "1.0M");
        assert_eq!(format_views(1_250_000), "1.3M");
        assert_eq!(format_views(12_340_000), "12.3M");
    }

    #[test]
    fn test_format_views_thousands_round_half_up() {
        assert_eq!(format_views(2_500), "3K");
        assert_eq!(format_views(1_000), "1K");
        assert_eq!(format_views(1_499), "1K");
        assert_eq!(format_views(999_499), "999K");
    }

    #[test]
    fn test_format_views_largest_count() {
        assert_eq!(format_views(u64::MAX), "18446744073709.6M");
        assert_eq!(format_views("18446744073709551615".parse().unwrap()), "18446744073709.6M");
    }

    #[test]
    fn test_format_views_small_counts() {
        assert_eq!(format_views(999), "999");
        assert_eq!(format_views(0), "0");
    }
}

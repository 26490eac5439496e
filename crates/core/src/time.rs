/// Default quiz duration: 30 minutes.
pub const DEFAULT_TIME_LIMIT_SECS: u32 = 30 * 60;

/// Number of questions requested per attempt unless configured otherwise.
pub const DEFAULT_QUESTION_COUNT: u8 = 15;

/// Remaining time at or below which the countdown is shown as a warning.
pub const WARNING_THRESHOLD_SECS: u32 = 5 * 60;

/// Remaining time at or below which the countdown is shown as critical.
pub const CRITICAL_THRESHOLD_SECS: u32 = 60;

/// How close the countdown is to running out.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TimerUrgency {
    Normal,
    Warning,
    Critical,
}

impl TimerUrgency {
    #[must_use]
    pub fn from_remaining(remaining_secs: u32) -> Self {
        if remaining_secs <= CRITICAL_THRESHOLD_SECS {
            Self::Critical
        } else if remaining_secs <= WARNING_THRESHOLD_SECS {
            Self::Warning
        } else {
            Self::Normal
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            TimerUrgency::Normal => "normal",
            TimerUrgency::Warning => "warning",
            TimerUrgency::Critical => "critical",
        }
    }
}

/// Formats seconds as zero-padded `MM:SS`. Minutes are not wrapped into hours.
#[must_use]
pub fn format_clock(seconds: u32) -> String {
    let minutes = seconds / 60;
    let remainder = seconds % 60;
    format!("{minutes:02}:{remainder:02}")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clock_is_zero_padded() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(61), "01:01");
        assert_eq!(format_clock(DEFAULT_TIME_LIMIT_SECS), "30:00");
        assert_eq!(format_clock(6000), "100:00");
    }

    #[test]
    fn urgency_thresholds() {
        assert_eq!(TimerUrgency::from_remaining(1800), TimerUrgency::Normal);
        assert_eq!(TimerUrgency::from_remaining(301), TimerUrgency::Normal);
        assert_eq!(TimerUrgency::from_remaining(300), TimerUrgency::Warning);
        assert_eq!(TimerUrgency::from_remaining(61), TimerUrgency::Warning);
        assert_eq!(TimerUrgency::from_remaining(60), TimerUrgency::Critical);
        assert_eq!(TimerUrgency::from_remaining(0), TimerUrgency::Critical);
    }
}

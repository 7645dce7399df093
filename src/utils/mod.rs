use std::time::Duration;

use chrono::{DateTime, Local, TimeDelta};

const CLOCK_FORMAT: &str = "%H:%M:%S";

/// Local wall-clock time `after` from now, formatted as HH:MM:SS
pub fn clock_time_after(after: Duration) -> String {
    format_clock(Local::now() + TimeDelta::from_std(after).unwrap_or(TimeDelta::zero()))
}

fn format_clock(time: DateTime<Local>) -> String {
    time.format(CLOCK_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_format_clock() {
        let time = Local.with_ymd_and_hms(2024, 3, 9, 7, 5, 3).unwrap();
        assert_eq!(format_clock(time), "07:05:03");
    }

    #[test]
    fn test_clock_time_after_shape() {
        let clock = clock_time_after(Duration::from_secs(660));
        assert_eq!(clock.len(), 8);
        assert_eq!(clock.matches(':').count(), 2);
    }
}

use std::time::Duration;

use crate::domain::models::ScreenFraction;

pub struct AutomationConfig;

impl AutomationConfig {
    pub const FIRST_CLICK: ScreenFraction = ScreenFraction { x: 0.800, y: 0.260 };
    pub const SECOND_CLICK: ScreenFraction = ScreenFraction { x: 0.800, y: 0.750 };

    pub const BEEP_FREQUENCY_HZ: u32 = 1000;
    pub const BEEP_DURATION: Duration = Duration::from_millis(500);

    // Sequence pacing
    pub const AFTER_FIRST_CLICK: Duration = Duration::from_secs(10);
    pub const AFTER_SUBMIT: Duration = Duration::from_secs(10);
    pub const IDLE_WINDOW: Duration = Duration::from_secs(660);
    pub const AFTER_SECOND_CLICK: Duration = Duration::from_secs(10);
    pub const COOLDOWN: Duration = Duration::from_secs(30);

    /// Sum of the fixed pauses in one cycle, excluding step latencies.
    pub const NOMINAL_CYCLE: Duration = Duration::from_secs(
        Self::AFTER_FIRST_CLICK.as_secs()
            + Self::AFTER_SUBMIT.as_secs()
            + Self::IDLE_WINDOW.as_secs()
            + Self::AFTER_SECOND_CLICK.as_secs()
            + Self::COOLDOWN.as_secs(),
    );

    // Input simulation delays
    pub const MOUSE_CLICK_DELAY_MS: u64 = 10;
    pub const KEY_EVENT_DELAY_MS: u64 = 10;

    pub const PROFILE_ENV_VAR: &'static str = "AUTONEXT_PROFILE";
    pub const SCREEN_ACCESS_HINT: &'static str =
        "Make sure your screen is accessible for mouse movements.";
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nominal_cycle_is_twelve_minutes() {
        assert_eq!(AutomationConfig::NOMINAL_CYCLE, Duration::from_secs(720));
    }
}

use anyhow::Result;
use std::time::Duration;

#[link(name = "AppKit", kind = "framework")]
extern "C" {
    fn NSBeep();
}

pub struct SoundPlayerImpl;

impl SoundPlayerImpl {
    /// NSBeep plays the system alert sound; pitch cannot be chosen.
    pub async fn beep(&self, _frequency_hz: u32, duration: Duration) -> Result<()> {
        unsafe {
            NSBeep();
        }
        tokio::time::sleep(duration).await;
        Ok(())
    }
}

use anyhow::Result;
use std::time::Duration;
use windows::Win32::System::Diagnostics::Debug::Beep;

pub struct SoundPlayerImpl;

impl SoundPlayerImpl {
    pub async fn beep(&self, frequency_hz: u32, duration: Duration) -> Result<()> {
        let duration_ms = duration.as_millis() as u32;
        // Beep blocks for the whole tone.
        tokio::task::spawn_blocking(move || unsafe { Beep(frequency_hz, duration_ms) })
            .await??;
        Ok(())
    }
}

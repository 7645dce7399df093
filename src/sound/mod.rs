#[cfg(target_os = "linux")]
mod unix;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(windows)]
mod windows;

use anyhow::Result;
use std::time::Duration;

#[cfg(target_os = "linux")]
use unix::SoundPlayerImpl;

#[cfg(target_os = "macos")]
use macos::SoundPlayerImpl;

#[cfg(windows)]
use self::windows::SoundPlayerImpl;

/// Audible cue played at the start of every cycle
#[async_trait::async_trait]
pub trait SoundService: Send + Sync {
    /// Plays a tone and returns once it has finished.
    async fn beep(&self, frequency_hz: u32, duration: Duration) -> Result<()>;
}

pub struct SoundPlayer {
    inner: SoundPlayerImpl,
}

impl SoundPlayer {
    pub fn new() -> Self {
        Self {
            inner: SoundPlayerImpl,
        }
    }
}

#[async_trait::async_trait]
impl SoundService for SoundPlayer {
    async fn beep(&self, frequency_hz: u32, duration: Duration) -> Result<()> {
        self.inner.beep(frequency_hz, duration).await
    }
}

#[cfg(any(target_os = "linux", target_os = "macos"))]
mod keymap;
#[cfg(target_os = "linux")]
mod unix;
#[cfg(target_os = "macos")]
mod macos;
#[cfg(windows)]
mod windows;

use anyhow::Result;

use crate::domain::models::{ClickPoint, Modifier, NamedKey, ScreenSize};

#[cfg(target_os = "linux")]
use unix::InputHandlerImpl;

#[cfg(target_os = "macos")]
use macos::InputHandlerImpl;

#[cfg(windows)]
use self::windows::InputHandlerImpl;

/// Simulated pointer and keyboard operations the automation loop performs
#[async_trait::async_trait]
pub trait InputSimulator: Send + Sync {
    async fn screen_size(&self) -> Result<ScreenSize>;
    async fn move_to(&self, point: ClickPoint) -> Result<()>;
    async fn click(&self) -> Result<()>;
    /// Types one character into the focused window.
    async fn type_char(&self, ch: char) -> Result<()>;
    async fn press_key(&self, key: NamedKey) -> Result<()>;
    async fn press_hotkey(&self, modifier: Modifier, key: char) -> Result<()>;
}

/// Delegates input simulation to the platform-specific implementation
pub struct InputHandler {
    inner: InputHandlerImpl,
}

impl InputHandler {
    /// Creates a new InputHandler with platform-specific implementation
    pub fn new() -> Result<Self> {
        Ok(Self {
            inner: InputHandlerImpl::new()?,
        })
    }
}

#[async_trait::async_trait]
impl InputSimulator for InputHandler {
    async fn screen_size(&self) -> Result<ScreenSize> {
        self.inner.screen_size().await
    }

    async fn move_to(&self, point: ClickPoint) -> Result<()> {
        self.inner.mouse_move(point.x as f64, point.y as f64).await
    }

    async fn click(&self) -> Result<()> {
        self.inner.mouse_click().await
    }

    async fn type_char(&self, ch: char) -> Result<()> {
        self.inner.type_char(ch).await
    }

    async fn press_key(&self, key: NamedKey) -> Result<()> {
        self.inner.key_tap(key).await
    }

    async fn press_hotkey(&self, modifier: Modifier, key: char) -> Result<()> {
        self.inner.hotkey(modifier, key).await
    }
}

#[async_trait::async_trait]
pub(crate) trait InputHandlerTrait: Send + Sync {
    async fn screen_size(&self) -> Result<ScreenSize>;
    async fn mouse_move(&self, x: f64, y: f64) -> Result<()>;
    async fn mouse_click(&self) -> Result<()>;
    async fn type_char(&self, ch: char) -> Result<()>;
    async fn key_tap(&self, key: NamedKey) -> Result<()>;
    async fn hotkey(&self, modifier: Modifier, key: char) -> Result<()>;
}

use anyhow::Result;
use crate::input::keymap::{self, Keystroke};
use crate::input::InputHandlerTrait;
use crate::domain::config::AutomationConfig;
use crate::domain::models::{Modifier, NamedKey, ScreenSize};
use rdev::{simulate, Button, EventType, Key, SimulateError};
use std::time::Duration;

pub struct InputHandlerImpl;

impl InputHandlerImpl {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }
}

fn send_event(event_type: EventType) -> Result<()> {
    match simulate(&event_type) {
        Ok(()) => Ok(()),
        Err(SimulateError) => Err(anyhow::anyhow!(
            "Failed to simulate event: {:?}",
            event_type
        )),
    }
}

async fn key_event_pause() {
    tokio::time::sleep(Duration::from_millis(AutomationConfig::KEY_EVENT_DELAY_MS)).await;
}

async fn tap(key: Key) -> Result<()> {
    send_event(EventType::KeyPress(key))?;
    key_event_pause().await;
    send_event(EventType::KeyRelease(key))?;
    Ok(())
}

async fn chord(modifier: Key, key: Key) -> Result<()> {
    send_event(EventType::KeyPress(modifier))?;
    key_event_pause().await;
    let result = tap(key).await;
    key_event_pause().await;
    send_event(EventType::KeyRelease(modifier))?;
    result
}

#[async_trait::async_trait]
impl InputHandlerTrait for InputHandlerImpl {
    async fn screen_size(&self) -> Result<ScreenSize> {
        let (width, height) = rdev::display_size()
            .map_err(|e| anyhow::anyhow!("Failed to query display size: {:?}", e))?;
        Ok(ScreenSize::new(width as u32, height as u32))
    }

    async fn mouse_move(&self, x: f64, y: f64) -> Result<()> {
        send_event(EventType::MouseMove { x, y })
    }

    async fn mouse_click(&self) -> Result<()> {
        send_event(EventType::ButtonPress(Button::Left))?;
        tokio::time::sleep(Duration::from_millis(AutomationConfig::MOUSE_CLICK_DELAY_MS)).await;
        send_event(EventType::ButtonRelease(Button::Left))?;
        Ok(())
    }

    async fn type_char(&self, ch: char) -> Result<()> {
        match keymap::char_to_keystroke(ch) {
            Some(Keystroke { key, shift: true }) => chord(Key::ShiftLeft, key).await,
            Some(Keystroke { key, shift: false }) => tap(key).await,
            None => {
                log::warn!("No key mapping for {:?}, skipping", ch);
                Ok(())
            }
        }
    }

    async fn key_tap(&self, key: NamedKey) -> Result<()> {
        tap(keymap::named_key(key)).await
    }

    async fn hotkey(&self, modifier: Modifier, key: char) -> Result<()> {
        let key_enum = keymap::letter_key(key)
            .ok_or_else(|| anyhow::anyhow!("Unsupported hotkey key: {:?}", key))?;
        chord(keymap::modifier_key(modifier), key_enum).await
    }
}

use crate::domain::config::AutomationConfig;
use crate::domain::models::{Modifier, NamedKey, ScreenSize};
use crate::input::keymap::{self, Keystroke};
use crate::input::InputHandlerTrait;
use anyhow::Result;
use rdev::{simulate, EventType, Key, SimulateError};
use std::sync::Mutex;
use std::time::Duration;

#[link(name = "CoreGraphics", kind = "framework")]
extern "C" {}

pub struct InputHandlerImpl {
    current_pos: Mutex<Option<(f64, f64)>>,
}

impl InputHandlerImpl {
    pub fn new() -> Result<Self> {
        Ok(Self {
            current_pos: Mutex::new(None),
        })
    }

    fn resolve_pointer_position(&self) -> Result<(f64, f64)> {
        let pos = self
            .current_pos
            .lock()
            .expect("Cursor position mutex poisoned");
        pos.ok_or_else(|| anyhow::anyhow!("Pointer position unknown, move before clicking"))
    }

    // CGEvent clicks land at an explicit position; rdev presses would use
    // whatever location the event system last saw.
    fn send_left_button_event(position: (f64, f64), is_press: bool) -> Result<()> {
        unsafe {
            #[repr(C)]
            struct CGPoint {
                x: f64,
                y: f64,
            }

            const LEFT_DOWN: u32 = 1;
            const LEFT_UP: u32 = 2;
            const KCG_MOUSE_EVENT_CLICK_STATE: u32 = 1;

            extern "C" {
                fn CGEventCreateMouseEvent(
                    source: *const std::ffi::c_void,
                    mouseType: u32,
                    mouseCursorPosition: CGPoint,
                    mouseButton: u32,
                ) -> *const std::ffi::c_void;
                fn CGEventSetIntegerValueField(
                    event: *const std::ffi::c_void,
                    field: u32,
                    value: i64,
                );
                fn CGEventPost(tap: u32, event: *const std::ffi::c_void) -> i32;
                fn CFRelease(ptr: *const std::ffi::c_void);
            }

            let event_type = if is_press { LEFT_DOWN } else { LEFT_UP };
            let point = CGPoint {
                x: position.0,
                y: position.1,
            };
            let event = CGEventCreateMouseEvent(std::ptr::null(), event_type, point, 0);

            if event.is_null() {
                return Err(anyhow::anyhow!("Failed to create mouse button event"));
            }

            CGEventSetIntegerValueField(event, KCG_MOUSE_EVENT_CLICK_STATE, 1);
            CGEventPost(0, event);
            CFRelease(event);
        }

        Ok(())
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
    key_event_pause().await;
    Ok(())
}

async fn chord(modifier: Key, key: Key) -> Result<()> {
    send_event(EventType::KeyPress(modifier))?;
    key_event_pause().await;
    let result = tap(key).await;
    send_event(EventType::KeyRelease(modifier))?;
    key_event_pause().await;
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
        {
            let mut pos = self
                .current_pos
                .lock()
                .expect("Cursor position mutex poisoned");
            *pos = Some((x, y));
        }
        send_event(EventType::MouseMove { x, y })
    }

    async fn mouse_click(&self) -> Result<()> {
        let position = self.resolve_pointer_position()?;

        Self::send_left_button_event(position, true)?;
        tokio::time::sleep(Duration::from_millis(AutomationConfig::MOUSE_CLICK_DELAY_MS)).await;
        Self::send_left_button_event(position, false)?;
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

#[cfg(test)]
mod tests {
    use super::InputHandlerImpl;

    #[test]
    fn test_click_requires_known_position() {
        let handler = InputHandlerImpl::new().unwrap();
        assert!(handler.resolve_pointer_position().is_err());

        *handler.current_pos.lock().unwrap() = Some((10.0, 20.0));
        assert_eq!(handler.resolve_pointer_position().unwrap(), (10.0, 20.0));
    }
}

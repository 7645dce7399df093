use anyhow::Result;
use crate::input::InputHandlerTrait;
use crate::domain::config::AutomationConfig;
use crate::domain::models::{Modifier, NamedKey, ScreenSize};
use std::time::Duration;
use windows::Win32::UI::WindowsAndMessaging::{
    GetSystemMetrics, SetCursorPos, SM_CXSCREEN, SM_CYSCREEN,
};
use windows::Win32::UI::Input::KeyboardAndMouse::*;

pub struct InputHandlerImpl;

impl InputHandlerImpl {
    pub fn new() -> Result<Self> {
        Ok(Self)
    }
}

fn send_inputs(inputs: &[INPUT]) -> Result<()> {
    let sent = unsafe { SendInput(inputs, std::mem::size_of::<INPUT>() as i32) };
    if sent as usize != inputs.len() {
        return Err(anyhow::anyhow!(
            "SendInput injected {} of {} events: {}",
            sent,
            inputs.len(),
            windows::core::Error::from_win32()
        ));
    }
    Ok(())
}

fn mouse_input(flags: MOUSE_EVENT_FLAGS) -> INPUT {
    INPUT {
        r#type: INPUT_MOUSE,
        Anonymous: INPUT_0 {
            mi: MOUSEINPUT {
                dx: 0,
                dy: 0,
                mouseData: 0,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

fn keyboard_input(vk: VIRTUAL_KEY, scan: u16, flags: KEYBD_EVENT_FLAGS) -> INPUT {
    INPUT {
        r#type: INPUT_KEYBOARD,
        Anonymous: INPUT_0 {
            ki: KEYBDINPUT {
                wVk: vk,
                wScan: scan,
                dwFlags: flags,
                time: 0,
                dwExtraInfo: 0,
            },
        },
    }
}

fn key_down(vk: VIRTUAL_KEY) -> INPUT {
    keyboard_input(vk, 0, KEYBD_EVENT_FLAGS(0u32))
}

fn key_up(vk: VIRTUAL_KEY) -> INPUT {
    keyboard_input(vk, 0, KEYEVENTF_KEYUP)
}

fn named_key_to_vk(key: NamedKey) -> VIRTUAL_KEY {
    match key {
        NamedKey::Enter => VK_RETURN,
    }
}

fn modifier_to_vk(modifier: Modifier) -> VIRTUAL_KEY {
    match modifier {
        Modifier::Ctrl => VK_CONTROL,
    }
}

// Virtual-key codes for letters and digits equal their uppercase ASCII values.
fn char_to_vk(ch: char) -> Option<VIRTUAL_KEY> {
    if ch.is_ascii_alphanumeric() {
        Some(VIRTUAL_KEY(ch.to_ascii_uppercase() as u16))
    } else {
        None
    }
}

async fn key_event_pause() {
    tokio::time::sleep(Duration::from_millis(AutomationConfig::KEY_EVENT_DELAY_MS)).await;
}

#[async_trait::async_trait]
impl InputHandlerTrait for InputHandlerImpl {
    async fn screen_size(&self) -> Result<ScreenSize> {
        let (width, height) = unsafe {
            (GetSystemMetrics(SM_CXSCREEN), GetSystemMetrics(SM_CYSCREEN))
        };
        if width <= 0 || height <= 0 {
            return Err(anyhow::anyhow!("GetSystemMetrics reported no primary display"));
        }
        Ok(ScreenSize::new(width as u32, height as u32))
    }

    async fn mouse_move(&self, x: f64, y: f64) -> Result<()> {
        unsafe {
            SetCursorPos(x as i32, y as i32)?;
        }
        Ok(())
    }

    async fn mouse_click(&self) -> Result<()> {
        send_inputs(&[mouse_input(MOUSEEVENTF_LEFTDOWN)])?;
        tokio::time::sleep(Duration::from_millis(AutomationConfig::MOUSE_CLICK_DELAY_MS)).await;
        send_inputs(&[mouse_input(MOUSEEVENTF_LEFTUP)])?;
        Ok(())
    }

    async fn type_char(&self, ch: char) -> Result<()> {
        if ch == '\n' || ch == '\r' {
            return self.key_tap(NamedKey::Enter).await;
        }

        let mut units = [0u16; 2];
        for unit in ch.encode_utf16(&mut units).iter() {
            send_inputs(&[
                keyboard_input(VIRTUAL_KEY(0), *unit, KEYEVENTF_UNICODE),
                keyboard_input(VIRTUAL_KEY(0), *unit, KEYEVENTF_UNICODE | KEYEVENTF_KEYUP),
            ])?;
        }
        Ok(())
    }

    async fn key_tap(&self, key: NamedKey) -> Result<()> {
        let vk = named_key_to_vk(key);
        send_inputs(&[key_down(vk)])?;
        key_event_pause().await;
        send_inputs(&[key_up(vk)])?;
        Ok(())
    }

    async fn hotkey(&self, modifier: Modifier, key: char) -> Result<()> {
        let key_vk = char_to_vk(key)
            .ok_or_else(|| anyhow::anyhow!("Unsupported hotkey key: {:?}", key))?;
        let modifier_vk = modifier_to_vk(modifier);

        send_inputs(&[key_down(modifier_vk)])?;
        key_event_pause().await;
        let result = send_inputs(&[key_down(key_vk), key_up(key_vk)]);
        key_event_pause().await;
        send_inputs(&[key_up(modifier_vk)])?;
        result
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_char_to_vk() {
        assert_eq!(char_to_vk('n'), Some(VK_N));
        assert_eq!(char_to_vk('7'), Some(VK_7));
        assert_eq!(char_to_vk('!'), None);
    }
}

use anyhow::Result;
use std::os::raw::{c_int, c_ulong};
use std::time::Duration;
use x11::xlib;

pub struct SoundPlayerImpl;

impl SoundPlayerImpl {
    pub async fn beep(&self, frequency_hz: u32, duration: Duration) -> Result<()> {
        ring_bell(frequency_hz, duration)?;
        // XBell returns as soon as the request is flushed.
        tokio::time::sleep(duration).await;
        Ok(())
    }
}

/// Rings the X server bell at the given pitch, then restores the user's bell settings.
fn ring_bell(frequency_hz: u32, duration: Duration) -> Result<()> {
    unsafe {
        let display = xlib::XOpenDisplay(std::ptr::null());
        if display.is_null() {
            return Err(anyhow::anyhow!("Failed to open X display for bell"));
        }

        let mut previous: xlib::XKeyboardState = std::mem::zeroed();
        xlib::XGetKeyboardControl(display, &mut previous);

        let mask = (xlib::KBBellPitch | xlib::KBBellDuration) as c_ulong;
        let mut control: xlib::XKeyboardControl = std::mem::zeroed();
        control.bell_pitch = frequency_hz as c_int;
        control.bell_duration = duration.as_millis() as c_int;
        xlib::XChangeKeyboardControl(display, mask, &mut control);
        xlib::XBell(display, 100);

        control.bell_pitch = previous.bell_pitch as c_int;
        control.bell_duration = previous.bell_duration as c_int;
        xlib::XChangeKeyboardControl(display, mask, &mut control);

        xlib::XFlush(display);
        xlib::XCloseDisplay(display);
    }
    Ok(())
}

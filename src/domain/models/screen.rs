use std::fmt;

/// Current display dimensions in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScreenSize {
    pub width: u32,
    pub height: u32,
}

impl ScreenSize {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    pub fn is_empty(&self) -> bool {
        self.width == 0 || self.height == 0
    }
}

impl fmt::Display for ScreenSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

/// Absolute pointer position in pixels
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClickPoint {
    pub x: u32,
    pub y: u32,
}

impl fmt::Display for ClickPoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({}, {})", self.x, self.y)
    }
}

/// Position expressed as a share of the screen's width and height
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ScreenFraction {
    pub x: f64,
    pub y: f64,
}

impl ScreenFraction {
    /// Resolves the fraction against a screen, truncating toward zero and
    /// keeping the result on screen.
    pub fn resolve(&self, screen: ScreenSize) -> ClickPoint {
        ClickPoint {
            x: scale(screen.width, self.x),
            y: scale(screen.height, self.y),
        }
    }
}

fn scale(extent: u32, fraction: f64) -> u32 {
    let scaled = (extent as f64 * fraction) as u32;
    scaled.min(extent.saturating_sub(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::config::AutomationConfig;

    #[test]
    fn test_full_hd_click_points() {
        let screen = ScreenSize::new(1920, 1080);
        assert_eq!(
            AutomationConfig::FIRST_CLICK.resolve(screen),
            ClickPoint { x: 1536, y: 280 }
        );
        assert_eq!(
            AutomationConfig::SECOND_CLICK.resolve(screen),
            ClickPoint { x: 1536, y: 810 }
        );
    }

    #[test]
    fn test_click_points_stay_on_screen() {
        let extents = [1u32, 2, 3, 7, 99, 640, 1023, 1366, 2560, 3840, 7680];
        for &width in &extents {
            for &height in &extents {
                let screen = ScreenSize::new(width, height);
                for fraction in [AutomationConfig::FIRST_CLICK, AutomationConfig::SECOND_CLICK] {
                    let point = fraction.resolve(screen);
                    assert!(point.x < width, "x out of bounds for {}", screen);
                    assert!(point.y < height, "y out of bounds for {}", screen);
                }
            }
        }
    }

    #[test]
    fn test_fraction_truncates() {
        let point = ScreenFraction { x: 0.5, y: 0.26 }.resolve(ScreenSize::new(1365, 1000));
        assert_eq!(point, ClickPoint { x: 682, y: 260 });
    }

    #[test]
    fn test_empty_screen() {
        assert!(ScreenSize::new(0, 1080).is_empty());
        assert!(ScreenSize::new(1920, 0).is_empty());
        assert!(!ScreenSize::new(1, 1).is_empty());
    }
}

use serde::Serialize;
use strum::{AsRefStr, Display as StrumDisplay, EnumIter};

/// Widths below this are phones.
pub const MOBILE_MAX_WIDTH: u32 = 768;
/// Widths at or above this are desktops.
pub const DESKTOP_MIN_WIDTH: u32 = 1024;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, StrumDisplay, EnumIter, AsRefStr)]
#[strum(serialize_all = "lowercase")]
pub enum Breakpoint {
    Mobile,
    Tablet,
    Desktop,
}

impl Breakpoint {
    pub fn for_width(width: u32) -> Self {
        if width < MOBILE_MAX_WIDTH {
            Self::Mobile
        } else if width < DESKTOP_MIN_WIDTH {
            Self::Tablet
        } else {
            Self::Desktop
        }
    }
}

/// Value Object - viewport classification, always rebuilt as a whole
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ViewportState {
    pub is_mobile: bool,
    pub is_tablet: bool,
    pub is_desktop: bool,
    pub width: u32,
}

impl ViewportState {
    pub fn breakpoint(&self) -> Breakpoint {
        Breakpoint::for_width(self.width)
    }
}

impl Default for ViewportState {
    /// Desktop until the first real measurement arrives.
    fn default() -> Self {
        classify(1920)
    }
}

pub fn classify(width: u32) -> ViewportState {
    let breakpoint = Breakpoint::for_width(width);
    ViewportState {
        is_mobile: breakpoint == Breakpoint::Mobile,
        is_tablet: breakpoint == Breakpoint::Tablet,
        is_desktop: breakpoint == Breakpoint::Desktop,
        width,
    }
}

/// Browsers report fractional CSS pixels; negative or NaN input counts as zero.
pub fn classify_css_width(width: f64) -> ViewportState {
    let clamped = if width.is_finite() { width.max(0.0).min(u32::MAX as f64) } else { 0.0 };
    classify(clamped as u32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn boundaries_fall_on_the_upper_class() {
        assert!(classify(767).is_mobile);
        assert!(classify(768).is_tablet);
        assert!(classify(1023).is_tablet);
        assert!(classify(1024).is_desktop);
        assert!(classify(0).is_mobile);
    }

    #[test]
    fn css_width_is_sanitised() {
        assert_eq!(classify_css_width(-20.0).width, 0);
        assert_eq!(classify_css_width(f64::NAN).width, 0);
        assert_eq!(classify_css_width(1023.9).breakpoint(), Breakpoint::Tablet);
    }
}

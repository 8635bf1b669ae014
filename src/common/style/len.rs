use std::fmt;

use crate::common::unit::{
    EMUS_PER_CM, EMUS_PER_INCH, EMUS_PER_MM, EMUS_PER_PT, emu_to_hundredth_pt,
};

/// A distance in EMUs (English Metric Units), the fixed-point unit DrawingML
/// stores positions and extents in.
///
/// Constructors from physical units truncate toward zero, so a length built
/// from inches or points is exact whenever the value is a whole number of
/// EMUs.
///
/// # Examples
///
/// ```rust
/// use ooxml_dml::common::Length;
///
/// let length = Length::from_emus(914400);
/// assert_eq!(length.inches(), 1.0);
/// assert_eq!(length.hundredth_points(), 7200);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Default)]
pub struct Length {
    emus: i64,
}

impl Length {
    #[inline]
    pub const fn from_emus(emus: i64) -> Self {
        Self { emus }
    }

    #[inline]
    pub fn from_inches(inches: f64) -> Self {
        Self {
            emus: (inches * EMUS_PER_INCH as f64) as i64,
        }
    }

    #[inline]
    pub fn from_cm(cm: f64) -> Self {
        Self {
            emus: (cm * EMUS_PER_CM as f64) as i64,
        }
    }

    #[inline]
    pub fn from_mm(mm: f64) -> Self {
        Self {
            emus: (mm * EMUS_PER_MM as f64) as i64,
        }
    }

    /// From typographic points (1/72 inch).
    #[inline]
    pub fn from_points(points: f64) -> Self {
        Self {
            emus: (points * EMUS_PER_PT as f64) as i64,
        }
    }

    #[inline]
    pub const fn emus(&self) -> i64 {
        self.emus
    }

    #[inline]
    pub fn inches(&self) -> f64 {
        self.emus as f64 / EMUS_PER_INCH as f64
    }

    #[inline]
    pub fn cm(&self) -> f64 {
        self.emus as f64 / EMUS_PER_CM as f64
    }

    #[inline]
    pub fn points(&self) -> f64 {
        self.emus as f64 / EMUS_PER_PT as f64
    }

    /// Whole hundredths of a point, truncated toward zero.
    #[inline]
    pub const fn hundredth_points(&self) -> i64 {
        emu_to_hundredth_pt(self.emus)
    }
}

impl fmt::Display for Length {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.2}\"", self.inches())
    }
}

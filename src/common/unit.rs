//! Units of the DrawingML schemas and conversions between them.
//!
//! DrawingML stores distances in EMUs (English Metric Units), font sizes in
//! hundredths of a point and angles in 60000ths of a degree. Universal
//! measures (`"2.5cm"`, `"-12pt"`) carry an explicit unit suffix.

use std::fmt;
use std::str::FromStr;

pub const EMUS_PER_INCH: i64 = 914_400;
pub const EMUS_PER_CM: i64 = 360_000;
pub const EMUS_PER_MM: i64 = 36_000;
pub const EMUS_PER_PT: i64 = 12_700;
pub const EMUS_PER_PICA: i64 = 152_400;
/// One hundredth of a point, the unit of `sz` on run properties.
pub const EMUS_PER_HUNDREDTH_PT: i64 = 127;
/// Angle attributes count 60000ths of a degree.
pub const ANGLE_UNITS_PER_DEGREE: i64 = 60_000;
/// Percentage attributes count thousandths of a percent.
pub const PERCENTAGE_UNITS_PER_PERCENT: i64 = 1_000;

/// Convert EMUs to hundredths of a point, truncating toward zero.
#[inline]
pub const fn emu_to_hundredth_pt(emu: i64) -> i64 {
    emu / EMUS_PER_HUNDREDTH_PT
}

/// Convert degrees to the 60000ths-of-a-degree angle unit, truncating.
#[inline]
pub fn degrees_to_angle(degrees: f64) -> i64 {
    (degrees * ANGLE_UNITS_PER_DEGREE as f64) as i64
}

/// Units accepted by `ST_UniversalMeasure`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LengthUnit {
    Millimeter,
    Centimeter,
    Inch,
    Point,
    /// Pica (1/6 inch), written `pc`
    Pica,
    /// Pica (1/6 inch), written `pi`
    PicaAlt,
}

impl LengthUnit {
    /// Suffix as written in `ST_UniversalMeasure`.
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Millimeter => "mm",
            Self::Centimeter => "cm",
            Self::Inch => "in",
            Self::Point => "pt",
            Self::Pica => "pc",
            Self::PicaAlt => "pi",
        }
    }

    /// EMUs in one of this unit.
    #[inline]
    pub fn emus(&self) -> i64 {
        match self {
            Self::Millimeter => EMUS_PER_MM,
            Self::Centimeter => EMUS_PER_CM,
            Self::Inch => EMUS_PER_INCH,
            Self::Point => EMUS_PER_PT,
            Self::Pica | Self::PicaAlt => EMUS_PER_PICA,
        }
    }

    fn from_suffix(s: &str) -> Option<Self> {
        match s {
            "mm" => Some(Self::Millimeter),
            "cm" => Some(Self::Centimeter),
            "in" => Some(Self::Inch),
            "pt" => Some(Self::Point),
            "pc" => Some(Self::Pica),
            "pi" => Some(Self::PicaAlt),
            _ => None,
        }
    }
}

impl fmt::Display for LengthUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A numeric value with an explicit unit, e.g. `2.5cm`.
///
/// # Examples
///
/// ```
/// use ooxml_dml::common::unit::{Measure, LengthUnit};
///
/// let m = "2.5cm".parse::<Measure>().unwrap();
/// assert_eq!(m.unit(), LengthUnit::Centimeter);
/// assert_eq!(m.to_emus(), 900_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Measure {
    value: f64,
    unit: LengthUnit,
}

impl Measure {
    #[inline]
    pub fn new(value: f64, unit: LengthUnit) -> Self {
        Self { value, unit }
    }

    #[inline]
    pub fn value(&self) -> f64 {
        self.value
    }

    #[inline]
    pub fn unit(&self) -> LengthUnit {
        self.unit
    }

    /// Convert to EMUs, truncating toward zero.
    #[inline]
    pub fn to_emus(&self) -> i64 {
        (self.value * self.unit.emus() as f64) as i64
    }
}

impl FromStr for Measure {
    type Err = String;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        if s.len() < 3 || !s.is_char_boundary(s.len() - 2) {
            return Err(format!("'{}' is not a universal measure", s));
        }
        let (number, suffix) = s.split_at(s.len() - 2);
        let unit = LengthUnit::from_suffix(suffix)
            .ok_or_else(|| format!("Unknown length unit '{}'", suffix))?;
        let value: f64 = number
            .parse()
            .map_err(|_| format!("Failed to parse numeric value from '{}'", s))?;
        Ok(Self::new(value, unit))
    }
}

impl fmt::Display for Measure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.value, self.unit.as_str())
    }
}

//! Attribute-level scalar codecs.
//!
//! Every attribute type implements [`XmlValue`]. Parsing happens at decode
//! time and a parse failure aborts the decode; [`XmlValue::check`] carries
//! the range and pattern constraints that are only enforced by validation.
//!
//! The `req` and `opt` modules give the per-cardinality operations the
//! `complex_type!` macro dispatches to.

use crate::ooxml::error::{OoxmlError, Result};
use crate::ooxml::schema::validate::{ValidationError, field_path};
use quick_xml::events::BytesStart;

/// A scalar that can live in an XML attribute value.
pub trait XmlValue: Sized {
    /// Textual form written to the attribute.
    fn to_xml_value(&self) -> String;

    /// Parse the textual form; the error is a human-readable reason.
    fn parse_value(s: &str) -> std::result::Result<Self, String>;

    /// Check range and pattern constraints.
    fn check(&self) -> std::result::Result<(), String> {
        Ok(())
    }
}

impl XmlValue for bool {
    fn to_xml_value(&self) -> String {
        if *self { "true" } else { "false" }.to_string()
    }

    fn parse_value(s: &str) -> std::result::Result<Self, String> {
        match s {
            "true" | "1" => Ok(true),
            "false" | "0" => Ok(false),
            _ => Err(format!("'{}' is not a boolean", s)),
        }
    }
}

macro_rules! int_value {
    ($($t:ty),*) => {
        $(
            impl XmlValue for $t {
                fn to_xml_value(&self) -> String {
                    itoa::Buffer::new().format(*self).to_string()
                }

                fn parse_value(s: &str) -> std::result::Result<Self, String> {
                    s.parse::<$t>()
                        .map_err(|e| format!("'{}' is not a valid {}: {}", s, stringify!($t), e))
                }
            }
        )*
    };
}

int_value!(i8, u8, i16, u16, i32, u32, i64, u64);

impl XmlValue for f64 {
    fn to_xml_value(&self) -> String {
        if self.is_nan() {
            return "NaN".to_string();
        }
        if self.is_infinite() {
            return if *self > 0.0 { "INF" } else { "-INF" }.to_string();
        }
        let mut buf = ryu::Buffer::new();
        let s = buf.format_finite(*self);
        s.strip_suffix(".0").unwrap_or(s).to_string()
    }

    fn parse_value(s: &str) -> std::result::Result<Self, String> {
        match s {
            "INF" => Ok(f64::INFINITY),
            "-INF" => Ok(f64::NEG_INFINITY),
            "NaN" => Ok(f64::NAN),
            _ => s
                .parse::<f64>()
                .map_err(|e| format!("'{}' is not a valid double: {}", s, e)),
        }
    }
}

impl XmlValue for String {
    fn to_xml_value(&self) -> String {
        self.clone()
    }

    fn parse_value(s: &str) -> std::result::Result<Self, String> {
        Ok(s.to_string())
    }
}

fn parse_attribute<T: XmlValue>(start: &BytesStart<'_>, name: &str, value: &str) -> Result<T> {
    T::parse_value(value)
        .map_err(|reason| OoxmlError::invalid_attribute(start, name, value, reason))
}

/// Mandatory attribute: always written.
pub mod req {
    use super::*;

    pub type Slot<T> = T;

    #[inline]
    pub fn init<T>(default: T) -> T {
        default
    }

    #[inline]
    pub fn write<T: XmlValue>(slot: &T) -> Option<String> {
        Some(slot.to_xml_value())
    }

    pub fn read<T: XmlValue>(
        slot: &mut T,
        start: &BytesStart<'_>,
        name: &str,
        value: &str,
    ) -> Result<()> {
        *slot = parse_attribute(start, name, value)?;
        Ok(())
    }

    pub fn check<T: XmlValue>(
        slot: &T,
        path: &str,
        field: &str,
    ) -> std::result::Result<(), ValidationError> {
        slot.check()
            .map_err(|message| ValidationError::new(field_path(path, field), message))
    }
}

/// Optional attribute: written only when set.
pub mod opt {
    use super::*;

    pub type Slot<T> = Option<T>;

    #[inline]
    pub fn init<T>(_default: T) -> Option<T> {
        None
    }

    #[inline]
    pub fn write<T: XmlValue>(slot: &Option<T>) -> Option<String> {
        slot.as_ref().map(XmlValue::to_xml_value)
    }

    pub fn read<T: XmlValue>(
        slot: &mut Option<T>,
        start: &BytesStart<'_>,
        name: &str,
        value: &str,
    ) -> Result<()> {
        *slot = Some(parse_attribute(start, name, value)?);
        Ok(())
    }

    pub fn check<T: XmlValue>(
        slot: &Option<T>,
        path: &str,
        field: &str,
    ) -> std::result::Result<(), ValidationError> {
        match slot {
            Some(v) => super::req::check(v, path, field),
            None => Ok(()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bool_forms() {
        assert_eq!(bool::parse_value("1"), Ok(true));
        assert_eq!(bool::parse_value("false"), Ok(false));
        assert!(bool::parse_value("yes").is_err());
        assert_eq!(true.to_xml_value(), "true");
    }

    #[test]
    fn test_double_formatting() {
        assert_eq!(1.0f64.to_xml_value(), "1");
        assert_eq!(0.75f64.to_xml_value(), "0.75");
        assert_eq!((-2.5f64).to_xml_value(), "-2.5");
        assert_eq!(f64::NEG_INFINITY.to_xml_value(), "-INF");
        assert_eq!(f64::parse_value("INF"), Ok(f64::INFINITY));
        assert!(f64::parse_value("NaN").unwrap().is_nan());
    }

    #[test]
    fn test_integer_errors_name_type() {
        let err = u32::parse_value("-1").unwrap_err();
        assert!(err.contains("u32"));
        assert_eq!(i64::parse_value("-27273042329600"), Ok(-27_273_042_329_600));
    }

    #[test]
    fn test_opt_check_skips_none() {
        let slot: Option<u8> = None;
        assert!(opt::check(&slot, "", "val").is_ok());
    }
}

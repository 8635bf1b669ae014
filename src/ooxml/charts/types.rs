//! Value elements and enumerations of the chart schema.
//!
//! Most chart properties are single-attribute elements (`<c:barDir val="col"/>`).
//! Each is declared here as a complex type with one `val` attribute; the
//! enumerations carrying the allowed values end in `Value`.

use crate::{bounded, complex_type, st_enum};

/// Declare a `val`-only element. Optional values carry the schema default
/// returned by `value()`.
macro_rules! val_element {
    ($(#[$meta:meta])* pub struct $name:ident(req $ty:ty);) => {
        complex_type! {
            $(#[$meta])*
            pub struct $name {
                attributes {
                    val: req $ty = "val",
                }
                children {}
            }
        }

        impl $name {
            #[inline]
            pub fn with_val(val: $ty) -> Self {
                Self { val }
            }
        }
    };
    ($(#[$meta:meta])* pub struct $name:ident(opt $ty:ty = $default:expr);) => {
        complex_type! {
            $(#[$meta])*
            pub struct $name {
                attributes {
                    val: opt $ty = "val",
                }
                children {}
            }
        }

        impl $name {
            #[inline]
            pub fn with_val(val: $ty) -> Self {
                Self { val: Some(val) }
            }

            /// The value, or the schema default when `val` is absent.
            #[inline]
            pub fn value(&self) -> $ty {
                self.val.unwrap_or($default)
            }
        }
    };
}

st_enum! {
    pub enum OrientationValue {
        MinMax = "minMax",
        MaxMin = "maxMin",
    }
}

st_enum! {
    pub enum AxPosValue {
        Bottom = "b",
        Left = "l",
        Right = "r",
        Top = "t",
    }
}

st_enum! {
    pub enum LegendPosValue {
        Right = "r",
        Bottom = "b",
        Left = "l",
        Top = "t",
        TopRight = "tr",
    }
}

st_enum! {
    pub enum DLblPosValue {
        BestFit = "bestFit",
        Bottom = "b",
        Center = "ctr",
        InsideBase = "inBase",
        InsideEnd = "inEnd",
        Left = "l",
        OutsideEnd = "outEnd",
        Right = "r",
        Top = "t",
    }
}

st_enum! {
    pub enum BarDirValue {
        Col = "col",
        Bar = "bar",
    }
}

st_enum! {
    pub enum BarGroupingValue {
        Clustered = "clustered",
        PercentStacked = "percentStacked",
        Standard = "standard",
        Stacked = "stacked",
    }
}

st_enum! {
    pub enum GroupingValue {
        Standard = "standard",
        PercentStacked = "percentStacked",
        Stacked = "stacked",
    }
}

st_enum! {
    pub enum DispBlanksAsValue {
        Zero = "zero",
        Span = "span",
        Gap = "gap",
    }
}

st_enum! {
    pub enum TickLblPosValue {
        NextTo = "nextTo",
        High = "high",
        Low = "low",
        None = "none",
    }
}

st_enum! {
    pub enum TickMarkValue {
        Cross = "cross",
        In = "in",
        None = "none",
        Out = "out",
    }
}

st_enum! {
    pub enum CrossesValue {
        AutoZero = "autoZero",
        Max = "max",
        Min = "min",
    }
}

st_enum! {
    pub enum CrossBetweenValue {
        Between = "between",
        MidCat = "midCat",
    }
}

st_enum! {
    pub enum LayoutModeValue {
        Factor = "factor",
        Edge = "edge",
    }
}

st_enum! {
    pub enum LayoutTargetValue {
        Outer = "outer",
        Inner = "inner",
    }
}

st_enum! {
    pub enum MarkerStyleValue {
        None = "none",
        Auto = "auto",
        Circle = "circle",
        Dash = "dash",
        Diamond = "diamond",
        Dot = "dot",
        Picture = "picture",
        Plus = "plus",
        Square = "square",
        Star = "star",
        Triangle = "triangle",
        X = "x",
    }
}

st_enum! {
    pub enum ScatterStyleValue {
        Marker = "marker",
        None = "none",
        Line = "line",
        LineMarker = "lineMarker",
        Smooth = "smooth",
        SmoothMarker = "smoothMarker",
    }
}

st_enum! {
    pub enum LblAlgnValue {
        Center = "ctr",
        Left = "l",
        Right = "r",
    }
}

bounded! {
    /// `ST_Style`
    pub struct StyleValue(u8) in [1, 48] = 2;
}

bounded! {
    /// `ST_GapAmount`, in percent of the bar width.
    pub struct GapAmountValue(u16) in [0, 500] = 150;
}

bounded! {
    /// `ST_Overlap`
    pub struct OverlapValue(i8) in [-100, 100] = 0;
}

bounded! {
    /// `ST_FirstSliceAng`, in degrees.
    pub struct FirstSliceAngValue(u16) in [0, 360] = 0;
}

bounded! {
    /// `ST_HoleSize`
    pub struct HoleSizeValue(u8) in [1, 90] = 10;
}

bounded! {
    /// `ST_LogBase`
    pub struct LogBaseValue(f64) in [2.0, 1000.0] = 10.0;
}

bounded! {
    /// `ST_AxisUnit`: strictly positive.
    pub struct AxisUnitValue(f64) in [f64::MIN_POSITIVE, f64::MAX] = 1.0;
}

bounded! {
    /// `ST_MarkerSize`, in points.
    pub struct MarkerSizeValue(u8) in [2, 72] = 5;
}

bounded! {
    /// `ST_Skip`
    pub struct SkipValue(u32) in [1, u32::MAX] = 1;
}

bounded! {
    /// `ST_LblOffset`
    pub struct LblOffsetValue(u16) in [0, 1000] = 100;
}

bounded! {
    /// `ST_RotX`, in degrees.
    pub struct RotXValue(i8) in [-90, 90] = 0;
}

bounded! {
    /// `ST_RotY`, in degrees.
    pub struct RotYValue(u16) in [0, 360] = 0;
}

bounded! {
    /// `ST_HPercent`
    pub struct HPercentValue(u16) in [5, 500] = 100;
}

bounded! {
    /// `ST_DepthPercent`
    pub struct DepthPercentValue(u16) in [20, 2000] = 100;
}

bounded! {
    /// `ST_Perspective`, in half degrees.
    pub struct PerspectiveValue(u8) in [0, 240] = 30;
}

val_element! {
    /// `CT_Boolean`: a flag element whose absent `val` means true.
    pub struct Boolean(opt bool = true);
}

val_element! {
    /// `CT_UnsignedInt` (`c:idx`, `c:order`, `c:axId`, `c:ptCount`, ...).
    pub struct UnsignedInt(req u32);
}

val_element! {
    /// `CT_Double`
    pub struct Double(req f64);
}

val_element! {
    pub struct Style(req StyleValue);
}

val_element! {
    /// `CT_TextLanguageID` (`c:lang`).
    pub struct TextLanguageId(req String);
}

val_element! {
    pub struct GapAmount(opt GapAmountValue = GapAmountValue(150));
}

val_element! {
    pub struct Overlap(opt OverlapValue = OverlapValue(0));
}

val_element! {
    pub struct FirstSliceAng(opt FirstSliceAngValue = FirstSliceAngValue(0));
}

val_element! {
    pub struct HoleSize(opt HoleSizeValue = HoleSizeValue(10));
}

val_element! {
    pub struct LogBase(req LogBaseValue);
}

val_element! {
    pub struct AxisUnit(req AxisUnitValue);
}

val_element! {
    pub struct Orientation(opt OrientationValue = OrientationValue::MinMax);
}

val_element! {
    pub struct AxPos(req AxPosValue);
}

val_element! {
    pub struct LegendPos(opt LegendPosValue = LegendPosValue::Right);
}

val_element! {
    pub struct DLblPos(req DLblPosValue);
}

val_element! {
    pub struct BarDir(opt BarDirValue = BarDirValue::Col);
}

val_element! {
    pub struct BarGrouping(opt BarGroupingValue = BarGroupingValue::Clustered);
}

val_element! {
    pub struct Grouping(opt GroupingValue = GroupingValue::Standard);
}

val_element! {
    pub struct DispBlanksAs(opt DispBlanksAsValue = DispBlanksAsValue::Zero);
}

val_element! {
    pub struct TickLblPos(opt TickLblPosValue = TickLblPosValue::NextTo);
}

val_element! {
    pub struct TickMark(opt TickMarkValue = TickMarkValue::Cross);
}

val_element! {
    pub struct Crosses(req CrossesValue);
}

val_element! {
    pub struct CrossBetween(req CrossBetweenValue);
}

val_element! {
    pub struct LayoutMode(opt LayoutModeValue = LayoutModeValue::Factor);
}

val_element! {
    pub struct LayoutTarget(opt LayoutTargetValue = LayoutTargetValue::Outer);
}

val_element! {
    pub struct MarkerStyle(req MarkerStyleValue);
}

val_element! {
    pub struct MarkerSize(opt MarkerSizeValue = MarkerSizeValue(5));
}

val_element! {
    pub struct ScatterStyle(opt ScatterStyleValue = ScatterStyleValue::Marker);
}

val_element! {
    pub struct LblAlgn(req LblAlgnValue);
}

val_element! {
    pub struct LblOffset(opt LblOffsetValue = LblOffsetValue(100));
}

val_element! {
    pub struct Skip(req SkipValue);
}

val_element! {
    pub struct RotX(opt RotXValue = RotXValue(0));
}

val_element! {
    pub struct RotY(opt RotYValue = RotYValue(0));
}

val_element! {
    pub struct HPercent(opt HPercentValue = HPercentValue(100));
}

val_element! {
    pub struct DepthPercent(opt DepthPercentValue = DepthPercentValue(100));
}

val_element! {
    pub struct Perspective(opt PerspectiveValue = PerspectiveValue(30));
}

complex_type! {
    /// `CT_NumFmt`
    pub struct NumFmt {
        attributes {
            format_code: req String = "formatCode" => "General".to_string(),
            source_linked: opt bool = "sourceLinked",
        }
        children {}
    }
}

impl NumFmt {
    #[inline]
    pub fn with_code(format_code: impl Into<String>) -> Self {
        Self {
            format_code: format_code.into(),
            source_linked: None,
        }
    }

    /// Set whether the format follows the source cells.
    #[inline]
    pub fn with_source_linked(mut self, linked: bool) -> Self {
        self.source_linked = Some(linked);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::schema::{Validate, XmlValue, from_xml_str, to_xml_string};
    use proptest::prelude::*;

    #[test]
    fn test_boolean_defaults_to_true() {
        let flag: Boolean = from_xml_str("<c:varyColors/>", "c:varyColors").unwrap();
        assert_eq!(flag.val, None);
        assert!(flag.value());

        let flag: Boolean = from_xml_str(r#"<c:varyColors val="0"/>"#, "c:varyColors").unwrap();
        assert!(!flag.value());
        assert_eq!(
            to_xml_string(&flag, "c:varyColors").unwrap(),
            r#"<c:varyColors val="false"/>"#
        );
    }

    #[test]
    fn test_enum_wrappers() {
        let dir: BarDir = from_xml_str(r#"<c:barDir val="bar"/>"#, "c:barDir").unwrap();
        assert_eq!(dir.value(), BarDirValue::Bar);
        assert_eq!(BarDir::new().value(), BarDirValue::Col);

        let err = from_xml_str::<AxPos>(r#"<c:axPos val="center"/>"#, "c:axPos").unwrap_err();
        assert!(err.to_string().contains("AxPosValue"));
    }

    #[test]
    fn test_style_range() {
        assert!(Style::new().validate().is_ok());
        let err = Style::with_val(StyleValue(49)).validate().unwrap_err();
        assert_eq!(err.path, "/val");
    }

    #[test]
    fn test_num_fmt() {
        let fmt = NumFmt::with_code("0.0%").with_source_linked(false);
        assert_eq!(
            to_xml_string(&fmt, "c:numFmt").unwrap(),
            r#"<c:numFmt formatCode="0.0%" sourceLinked="false"/>"#
        );
        assert_eq!(NumFmt::new().format_code, "General");
    }

    #[test]
    fn test_double_keeps_precision() {
        let d: Double = from_xml_str(r#"<c:x val="0.123456789"/>"#, "c:x").unwrap();
        assert_eq!(d.val, 0.123456789);
        assert_eq!(to_xml_string(&d, "c:x").unwrap(), r#"<c:x val="0.123456789"/>"#);
    }

    #[test]
    fn test_axis_unit_must_be_positive() {
        assert!(AxisUnit::with_val(AxisUnitValue(0.5)).validate().is_ok());
        assert!(AxisUnit::with_val(AxisUnitValue(0.0)).validate().is_err());
    }

    proptest! {
        #[test]
        fn test_gap_amount_check(v in 0u16..=1000) {
            prop_assert_eq!(GapAmountValue(v).check().is_ok(), v <= 500);
        }

        #[test]
        fn test_rot_x_round_trip(v in -90i8..=90) {
            let rot = RotX::with_val(RotXValue(v));
            let xml = to_xml_string(&rot, "c:rotX").unwrap();
            let back: RotX = from_xml_str(&xml, "c:rotX").unwrap();
            prop_assert_eq!(back.value(), RotXValue(v));
        }
    }
}

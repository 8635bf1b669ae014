//! Line (outline) properties: `a:ln`.

use crate::ooxml::drawings::ext::ExtensionList;
use crate::ooxml::drawings::fill::LineFillProperties;
use crate::ooxml::drawings::simple_types::{
    CompoundLine, LineCap, LineEndLength, LineEndType, LineEndWidth, LineWidth, PenAlignment,
    PositivePercentage, PresetLineDashValue,
};
use crate::{choice, complex_type};

complex_type! {
    /// `CT_PresetLineDashProperties`
    pub struct PresetLineDash {
        attributes {
            val: opt PresetLineDashValue = "val",
        }
        children {}
    }
}

complex_type! {
    /// `CT_DashStop`: dash and space lengths relative to the line width.
    pub struct DashStop {
        attributes {
            d: req PositivePercentage = "d",
            sp: req PositivePercentage = "sp",
        }
        children {}
    }
}

complex_type! {
    /// `CT_DashStopList`
    pub struct DashStopList {
        attributes {}
        children {
            stops: many DashStop = "a:ds",
        }
    }
}

choice! {
    /// `EG_LineDashProperties`
    pub enum LineDashProperties("EG_LineDashProperties") {
        Preset(PresetLineDash) = "a:prstDash",
        Custom(DashStopList) = "a:custDash",
    }
}

complex_type! {
    /// `CT_LineJoinRound`
    pub struct LineJoinRound {
        attributes {}
        children {}
    }
}

complex_type! {
    /// `CT_LineJoinBevel`
    pub struct LineJoinBevel {
        attributes {}
        children {}
    }
}

complex_type! {
    /// `CT_LineJoinMiterProperties`
    pub struct LineJoinMiter {
        attributes {
            lim: opt PositivePercentage = "lim",
        }
        children {}
    }
}

choice! {
    /// `EG_LineJoinProperties`
    pub enum LineJoinProperties("EG_LineJoinProperties") {
        Round(LineJoinRound) = "a:round",
        Bevel(LineJoinBevel) = "a:bevel",
        Miter(LineJoinMiter) = "a:miter",
    }
}

complex_type! {
    /// `CT_LineEndProperties` (`a:headEnd`, `a:tailEnd`).
    pub struct LineEndProperties {
        attributes {
            kind: opt LineEndType = "type",
            w: opt LineEndWidth = "w",
            len: opt LineEndLength = "len",
        }
        children {}
    }
}

complex_type! {
    /// `CT_LineProperties`
    pub struct LineProperties {
        attributes {
            w: opt LineWidth = "w",
            cap: opt LineCap = "cap",
            cmpd: opt CompoundLine = "cmpd",
            algn: opt PenAlignment = "algn",
        }
        children {
            fill: choice LineFillProperties,
            dash: choice LineDashProperties,
            join: choice LineJoinProperties,
            head_end: opt LineEndProperties = "a:headEnd",
            tail_end: opt LineEndProperties = "a:tailEnd",
            ext_lst: opt ExtensionList = "a:extLst",
        }
    }
}

impl LineDashProperties {
    pub fn preset(val: PresetLineDashValue) -> Self {
        Self::Preset(PresetLineDash { val: Some(val) })
    }
}

impl LineEndProperties {
    pub fn of_type(kind: LineEndType) -> Self {
        Self {
            kind: Some(kind),
            w: None,
            len: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::common::RGBColor;
    use crate::ooxml::error::OoxmlError;
    use crate::ooxml::schema::{
        ReaderOptions, Validate, from_xml_str, from_xml_str_with_options, to_xml_string,
    };

    #[test]
    fn test_line_properties_layout() {
        let mut ln = LineProperties::new();
        ln.w = Some(LineWidth(12_700));
        ln.cap = Some(LineCap::Round);
        ln.fill = Some(LineFillProperties::solid(RGBColor::new(0, 0, 0)));
        ln.dash = Some(LineDashProperties::preset(PresetLineDashValue::Dash));
        ln.join = Some(LineJoinProperties::Round(LineJoinRound::new()));
        ln.tail_end = Some(LineEndProperties::of_type(LineEndType::Triangle));

        let xml = to_xml_string(&ln, "a:ln").unwrap();
        assert_eq!(
            xml,
            r#"<a:ln w="12700" cap="rnd"><a:solidFill><a:srgbClr val="000000"/></a:solidFill><a:prstDash val="dash"/><a:round/><a:tailEnd type="triangle"/></a:ln>"#
        );
        let back: LineProperties = from_xml_str(&xml, "a:ln").unwrap();
        assert_eq!(back, ln);
        assert!(back.validate().is_ok());
    }

    #[test]
    fn test_last_join_wins_when_lenient() {
        let xml = r#"<a:ln><a:round/><a:miter lim="800000"/></a:ln>"#;
        let ln: LineProperties = from_xml_str(xml, "a:ln").unwrap();
        assert!(matches!(ln.join, Some(LineJoinProperties::Miter(_))));
    }

    #[test]
    fn test_strict_rejects_second_join() {
        let xml = r#"<a:ln><a:round/><a:bevel/></a:ln>"#;
        let err = from_xml_str_with_options::<LineProperties>(
            xml,
            "a:ln",
            ReaderOptions::new().with_strict_choices(true),
        )
        .unwrap_err();
        match err {
            OoxmlError::ChoiceConflict { group, previous, found } => {
                assert_eq!(group, "EG_LineJoinProperties");
                assert_eq!(previous, "a:round");
                assert_eq!(found, "bevel");
            },
            other => panic!("unexpected error: {other:?}"),
        }
    }

    #[test]
    fn test_line_width_range() {
        let mut ln = LineProperties::new();
        ln.w = Some(LineWidth(20_116_801));
        assert_eq!(ln.validate().unwrap_err().path, "/w");
    }

    #[test]
    fn test_custom_dash() {
        let xml = r#"<a:ln><a:custDash><a:ds d="400000" sp="300000"/><a:ds d="100000" sp="300000"/></a:custDash></a:ln>"#;
        let ln: LineProperties = from_xml_str(xml, "a:ln").unwrap();
        match &ln.dash {
            Some(LineDashProperties::Custom(list)) => assert_eq!(list.stops.len(), 2),
            other => panic!("unexpected dash: {other:?}"),
        }
        assert_eq!(to_xml_string(&ln, "a:ln").unwrap(), xml);
    }
}

//! Chart legend.

use crate::ooxml::charts::models::Layout;
use crate::ooxml::charts::types::{Boolean, LegendPos, LegendPosValue, UnsignedInt};
use crate::ooxml::drawings::ext::ExtensionList;
use crate::ooxml::drawings::shape::ShapeProperties;
use crate::ooxml::drawings::text::TextBody;
use crate::{choice, complex_type};

choice! {
    /// Content of a legend entry after its index.
    pub enum LegendEntryContent("CT_LegendEntry") {
        Delete(Boolean) = "c:delete",
        TxPr(TextBody) = "c:txPr",
    }
}

complex_type! {
    /// `CT_LegendEntry`: override for the entry of one series or category.
    pub struct LegendEntry {
        attributes {}
        children {
            idx: req UnsignedInt = "c:idx",
            content: choice LegendEntryContent,
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

impl LegendEntry {
    /// An entry hiding item `idx`.
    pub fn hidden(idx: u32) -> Self {
        Self {
            idx: UnsignedInt::with_val(idx),
            content: Some(LegendEntryContent::Delete(Boolean::with_val(true))),
            ext_lst: None,
        }
    }
}

complex_type! {
    /// `CT_Legend`
    pub struct Legend {
        attributes {}
        children {
            legend_pos: opt LegendPos = "c:legendPos",
            entries: many LegendEntry = "c:legendEntry",
            layout: opt Layout = "c:layout",
            overlay: opt Boolean = "c:overlay",
            sp_pr: opt ShapeProperties = "c:spPr",
            tx_pr: opt TextBody = "c:txPr",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

impl Legend {
    /// A legend at `position`, not overlapping the plot.
    #[inline]
    pub fn at(position: LegendPosValue) -> Self {
        let mut legend = Self::new();
        legend.legend_pos = Some(LegendPos::with_val(position));
        legend.overlay = Some(Boolean::with_val(false));
        legend
    }

    #[inline]
    pub fn with_overlay(mut self, overlay: bool) -> Self {
        self.overlay = Some(Boolean::with_val(overlay));
        self
    }

    #[inline]
    pub fn with_layout(mut self, layout: Layout) -> Self {
        self.layout = Some(layout);
        self
    }

    /// Position, defaulting to the right when unset.
    #[inline]
    pub fn position(&self) -> LegendPosValue {
        self.legend_pos
            .as_ref()
            .map_or(LegendPosValue::Right, LegendPos::value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::schema::{Validate, from_xml_str, to_xml_string};

    #[test]
    fn test_legend_layout() {
        let mut legend = Legend::at(LegendPosValue::Bottom);
        legend.entries.push(LegendEntry::hidden(2));
        assert_eq!(
            to_xml_string(&legend, "c:legend").unwrap(),
            concat!(
                r#"<c:legend><c:legendPos val="b"/>"#,
                r#"<c:legendEntry><c:idx val="2"/><c:delete val="true"/></c:legendEntry>"#,
                r#"<c:overlay val="false"/></c:legend>"#
            )
        );
        assert!(legend.validate().is_ok());
    }

    #[test]
    fn test_position_default() {
        assert_eq!(Legend::new().position(), LegendPosValue::Right);
        let legend: Legend = from_xml_str(
            r#"<c:legend><c:legendPos val="tr"/><c:unknown/></c:legend>"#,
            "c:legend",
        )
        .unwrap();
        assert_eq!(legend.position(), LegendPosValue::TopRight);
    }
}

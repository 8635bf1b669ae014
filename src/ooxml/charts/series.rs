//! Series, data points and data labels.

use crate::complex_type;
use crate::ooxml::charts::axis::ChartLines;
use crate::ooxml::charts::models::{AxData, AxDataSource, Layout, NumDataSource, NumSource, SerTx, Tx};
use crate::ooxml::charts::types::{
    Boolean, DLblPos, MarkerSize, MarkerStyle, NumFmt, UnsignedInt,
};
use crate::ooxml::drawings::ext::ExtensionList;
use crate::ooxml::drawings::shape::ShapeProperties;
use crate::ooxml::drawings::text::TextBody;
use crate::ooxml::error::Result;
use crate::ooxml::schema::validate::field_path;
use crate::ooxml::schema::{
    BytesStart, ChoiceGroup, Seen, Validate, ValidationError, XmlElement, XmlReader, XmlWriter,
    element_local_name,
};
use std::io::{BufRead, Write};

complex_type! {
    /// `CT_Marker`
    pub struct Marker {
        attributes {}
        children {
            symbol: opt MarkerStyle = "c:symbol",
            size: opt MarkerSize = "c:size",
            sp_pr: opt ShapeProperties = "c:spPr",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

complex_type! {
    /// `CT_DPt`: formatting override for one data point.
    pub struct DataPoint {
        attributes {}
        children {
            idx: req UnsignedInt = "c:idx",
            invert_if_negative: opt Boolean = "c:invertIfNegative",
            marker: opt Marker = "c:marker",
            bubble_3d: opt Boolean = "c:bubble3D",
            explosion: opt UnsignedInt = "c:explosion",
            sp_pr: opt ShapeProperties = "c:spPr",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

complex_type! {
    /// `Group_DLbl`: settings of a single data label.
    pub struct DLblGroup {
        attributes {}
        children {
            layout: opt Layout = "c:layout",
            tx: opt Tx = "c:tx",
            num_fmt: opt NumFmt = "c:numFmt",
            sp_pr: opt ShapeProperties = "c:spPr",
            tx_pr: opt TextBody = "c:txPr",
            d_lbl_pos: opt DLblPos = "c:dLblPos",
            show_legend_key: opt Boolean = "c:showLegendKey",
            show_val: opt Boolean = "c:showVal",
            show_cat_name: opt Boolean = "c:showCatName",
            show_ser_name: opt Boolean = "c:showSerName",
            show_percent: opt Boolean = "c:showPercent",
            show_bubble_size: opt Boolean = "c:showBubbleSize",
            separator: opt String = "c:separator",
        }
    }
}

complex_type! {
    /// `Group_DLbls`: settings shared by all labels of a series or group.
    pub struct DLblsGroup {
        attributes {}
        children {
            num_fmt: opt NumFmt = "c:numFmt",
            sp_pr: opt ShapeProperties = "c:spPr",
            tx_pr: opt TextBody = "c:txPr",
            d_lbl_pos: opt DLblPos = "c:dLblPos",
            show_legend_key: opt Boolean = "c:showLegendKey",
            show_val: opt Boolean = "c:showVal",
            show_cat_name: opt Boolean = "c:showCatName",
            show_ser_name: opt Boolean = "c:showSerName",
            show_percent: opt Boolean = "c:showPercent",
            show_bubble_size: opt Boolean = "c:showBubbleSize",
            separator: opt String = "c:separator",
            show_leader_lines: opt Boolean = "c:showLeaderLines",
            leader_lines: opt ChartLines = "c:leaderLines",
        }
    }
}

/// A named group of elements spliced inline into its parent rather than
/// wrapped in an element of its own.
pub trait InlineGroup: Default + Validate {
    /// Schema name of the group.
    const NAME: &'static str;

    /// Whether `local` names a member element.
    fn accepts(local: &str) -> bool;

    /// Decode one member element.
    fn decode_member<R: BufRead>(
        &mut self,
        r: &mut XmlReader<R>,
        start: &BytesStart<'_>,
    ) -> Result<()>;

    /// Write all present members in order.
    fn encode_members<W: Write>(&self, w: &mut XmlWriter<W>) -> Result<()>;
}

macro_rules! inline_group {
    ($($group:ident = $name:literal),* $(,)?) => {
        $(
            impl InlineGroup for $group {
                const NAME: &'static str = $name;

                fn accepts(local: &str) -> bool {
                    Self::accepts_child(local)
                }

                fn decode_member<R: BufRead>(
                    &mut self,
                    r: &mut XmlReader<R>,
                    start: &BytesStart<'_>,
                ) -> Result<()> {
                    self.decode_child(r, start, &mut Seen::new()).map(|_| ())
                }

                fn encode_members<W: Write>(&self, w: &mut XmlWriter<W>) -> Result<()> {
                    self.encode_children(w)
                }
            }
        )*
    };
}

inline_group!(DLblGroup = "Group_DLbl", DLblsGroup = "Group_DLbls");

/// The choice inside `CT_DLbl` and `CT_DLbls`: either `c:delete` or the
/// members of an inline label group.
#[derive(Debug, Clone, PartialEq)]
pub enum LabelChoice<G> {
    Delete(Boolean),
    Group(G),
}

pub type DLblChoice = LabelChoice<DLblGroup>;
pub type DLblsChoice = LabelChoice<DLblsGroup>;

const DELETE: &str = "c:delete";

impl<G: Default> Default for LabelChoice<G> {
    fn default() -> Self {
        Self::Group(G::default())
    }
}

impl<G: InlineGroup> ChoiceGroup for LabelChoice<G> {
    const GROUP: &'static str = G::NAME;

    fn accepts(local: &str) -> bool {
        local == "delete" || G::accepts(local)
    }

    fn holds(&self, local: &str) -> bool {
        match self {
            Self::Delete(_) => local == "delete",
            Self::Group(_) => G::accepts(local),
        }
    }

    fn element_name(&self) -> &'static str {
        match self {
            Self::Delete(_) => DELETE,
            Self::Group(_) => G::NAME,
        }
    }

    fn variant_name(&self) -> &'static str {
        match self {
            Self::Delete(_) => "Delete",
            Self::Group(_) => "Group",
        }
    }

    fn decode_new<R: BufRead>(r: &mut XmlReader<R>, start: &BytesStart<'_>) -> Result<Self> {
        if element_local_name(start)? == "delete" {
            let mut delete = Boolean::new();
            delete.decode(r, start)?;
            return Ok(Self::Delete(delete));
        }
        let mut group = G::default();
        group.decode_member(r, start)?;
        Ok(Self::Group(group))
    }

    /// Members of the inline group accumulate into the group already held.
    fn decode_existing<R: BufRead>(
        &mut self,
        r: &mut XmlReader<R>,
        start: &BytesStart<'_>,
    ) -> Result<()> {
        match self {
            Self::Delete(_) => {
                *self = Self::decode_new(r, start)?;
                Ok(())
            },
            Self::Group(group) => group.decode_member(r, start),
        }
    }

    fn encode_choice<W: Write>(&self, w: &mut XmlWriter<W>) -> Result<()> {
        match self {
            Self::Delete(delete) => delete.encode(w, DELETE),
            Self::Group(group) => group.encode_members(w),
        }
    }
}

impl<G: InlineGroup> Validate for LabelChoice<G> {
    fn validate_with_path(&self, path: &str) -> std::result::Result<(), ValidationError> {
        let path = field_path(path, self.variant_name());
        match self {
            Self::Delete(delete) => delete.validate_with_path(&path),
            Self::Group(group) => group.validate_with_path(&path),
        }
    }
}

complex_type! {
    /// `CT_DLbl`: label of one data point.
    pub struct DLbl {
        attributes {}
        children {
            idx: req UnsignedInt = "c:idx",
            content: choice DLblChoice,
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

complex_type! {
    /// `CT_DLbls`
    pub struct DLbls {
        attributes {}
        children {
            labels: many DLbl = "c:dLbl",
            content: choice DLblsChoice,
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

impl DLbls {
    /// Labels showing the value and nothing else.
    pub fn values() -> Self {
        let off = || Some(Boolean::with_val(false));
        let group = DLblsGroup {
            show_legend_key: off(),
            show_val: Some(Boolean::with_val(true)),
            show_cat_name: off(),
            show_ser_name: off(),
            show_percent: off(),
            show_bubble_size: off(),
            ..DLblsGroup::new()
        };
        Self {
            labels: Vec::new(),
            content: Some(LabelChoice::Group(group)),
            ext_lst: None,
        }
    }

    /// Labels removed altogether.
    pub fn deleted() -> Self {
        Self {
            labels: Vec::new(),
            content: Some(LabelChoice::Delete(Boolean::with_val(true))),
            ext_lst: None,
        }
    }

    pub fn is_deleted(&self) -> bool {
        matches!(&self.content, Some(LabelChoice::Delete(d)) if d.value())
    }
}

complex_type! {
    /// `CT_BarSer`
    pub struct BarSer {
        attributes {}
        children {
            idx: req UnsignedInt = "c:idx",
            order: req UnsignedInt = "c:order",
            tx: opt SerTx = "c:tx",
            sp_pr: opt ShapeProperties = "c:spPr",
            invert_if_negative: opt Boolean = "c:invertIfNegative",
            d_pt: many DataPoint = "c:dPt",
            d_lbls: opt DLbls = "c:dLbls",
            cat: opt AxDataSource = "c:cat",
            val: opt NumDataSource = "c:val",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

complex_type! {
    /// `CT_LineSer`
    pub struct LineSer {
        attributes {}
        children {
            idx: req UnsignedInt = "c:idx",
            order: req UnsignedInt = "c:order",
            tx: opt SerTx = "c:tx",
            sp_pr: opt ShapeProperties = "c:spPr",
            marker: opt Marker = "c:marker",
            d_pt: many DataPoint = "c:dPt",
            d_lbls: opt DLbls = "c:dLbls",
            cat: opt AxDataSource = "c:cat",
            val: opt NumDataSource = "c:val",
            smooth: opt Boolean = "c:smooth",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

complex_type! {
    /// `CT_PieSer`
    pub struct PieSer {
        attributes {}
        children {
            idx: req UnsignedInt = "c:idx",
            order: req UnsignedInt = "c:order",
            tx: opt SerTx = "c:tx",
            sp_pr: opt ShapeProperties = "c:spPr",
            explosion: opt UnsignedInt = "c:explosion",
            d_pt: many DataPoint = "c:dPt",
            d_lbls: opt DLbls = "c:dLbls",
            cat: opt AxDataSource = "c:cat",
            val: opt NumDataSource = "c:val",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

complex_type! {
    /// `CT_AreaSer`
    pub struct AreaSer {
        attributes {}
        children {
            idx: req UnsignedInt = "c:idx",
            order: req UnsignedInt = "c:order",
            tx: opt SerTx = "c:tx",
            sp_pr: opt ShapeProperties = "c:spPr",
            d_pt: many DataPoint = "c:dPt",
            d_lbls: opt DLbls = "c:dLbls",
            cat: opt AxDataSource = "c:cat",
            val: opt NumDataSource = "c:val",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

complex_type! {
    /// `CT_ScatterSer`
    pub struct ScatterSer {
        attributes {}
        children {
            idx: req UnsignedInt = "c:idx",
            order: req UnsignedInt = "c:order",
            tx: opt SerTx = "c:tx",
            sp_pr: opt ShapeProperties = "c:spPr",
            marker: opt Marker = "c:marker",
            d_pt: many DataPoint = "c:dPt",
            d_lbls: opt DLbls = "c:dLbls",
            x_val: opt AxDataSource = "c:xVal",
            y_val: opt NumDataSource = "c:yVal",
            smooth: opt Boolean = "c:smooth",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

macro_rules! series_builders {
    ($($ser:ident { $cat:ident, $val:ident }),* $(,)?) => {
        $(
            impl $ser {
                /// A series whose index and plot order are both `idx`.
                pub fn indexed(idx: u32) -> Self {
                    let mut series = Self::new();
                    series.idx = UnsignedInt::with_val(idx);
                    series.order = UnsignedInt::with_val(idx);
                    series
                }

                #[inline]
                pub fn with_name(mut self, name: impl Into<String>) -> Self {
                    self.tx = Some(SerTx::literal(name));
                    self
                }

                #[inline]
                pub fn with_categories(mut self, data: AxData) -> Self {
                    self.$cat = Some(AxDataSource { data });
                    self
                }

                #[inline]
                pub fn with_values(mut self, data: NumSource) -> Self {
                    self.$val = Some(NumDataSource { data });
                    self
                }
            }
        )*
    };
}

series_builders! {
    BarSer { cat, val },
    LineSer { cat, val },
    PieSer { cat, val },
    AreaSer { cat, val },
    ScatterSer { x_val, y_val },
}

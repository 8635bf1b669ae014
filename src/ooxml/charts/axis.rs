//! Chart axes.
//!
//! Category and value axes share the `EG_AxShared` members (id, scaling,
//! position, gridlines, tick marks, crossing), declared separately on each
//! type in schema order.

use crate::ooxml::charts::chart::Title;
use crate::ooxml::charts::types::{
    AxPos, AxPosValue, AxisUnit, AxisUnitValue, Boolean, CrossBetween, Crosses, CrossesValue,
    Double, LblAlgn, LblOffset, LogBase, LogBaseValue, NumFmt, Orientation, Skip, TickLblPos,
    TickMark, UnsignedInt,
};
use crate::ooxml::drawings::ext::ExtensionList;
use crate::ooxml::drawings::shape::ShapeProperties;
use crate::ooxml::drawings::text::TextBody;
use crate::{choice, complex_type};

complex_type! {
    /// `CT_Scaling`
    pub struct Scaling {
        attributes {}
        children {
            log_base: opt LogBase = "c:logBase",
            orientation: opt Orientation = "c:orientation",
            max: opt Double = "c:max",
            min: opt Double = "c:min",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

complex_type! {
    /// `CT_ChartLines` (gridlines, drop lines, leader lines).
    pub struct ChartLines {
        attributes {}
        children {
            sp_pr: opt ShapeProperties = "c:spPr",
        }
    }
}

choice! {
    /// Where the perpendicular axis crosses this one.
    pub enum AxisCrosses("EG_AxShared/crosses") {
        Crosses(Crosses) = "c:crosses",
        CrossesAt(Double) = "c:crossesAt",
    }
}

complex_type! {
    /// `CT_CatAx`
    pub struct CatAx {
        attributes {}
        children {
            ax_id: req UnsignedInt = "c:axId",
            scaling: req Scaling = "c:scaling",
            delete: opt Boolean = "c:delete",
            ax_pos: req AxPos = "c:axPos",
            major_gridlines: opt ChartLines = "c:majorGridlines",
            minor_gridlines: opt ChartLines = "c:minorGridlines",
            title: opt Title = "c:title",
            num_fmt: opt NumFmt = "c:numFmt",
            major_tick_mark: opt TickMark = "c:majorTickMark",
            minor_tick_mark: opt TickMark = "c:minorTickMark",
            tick_lbl_pos: opt TickLblPos = "c:tickLblPos",
            sp_pr: opt ShapeProperties = "c:spPr",
            tx_pr: opt TextBody = "c:txPr",
            cross_ax: req UnsignedInt = "c:crossAx",
            crosses: choice AxisCrosses,
            auto: opt Boolean = "c:auto",
            lbl_algn: opt LblAlgn = "c:lblAlgn",
            lbl_offset: opt LblOffset = "c:lblOffset",
            tick_lbl_skip: opt Skip = "c:tickLblSkip",
            tick_mark_skip: opt Skip = "c:tickMarkSkip",
            no_multi_lvl_lbl: opt Boolean = "c:noMultiLvlLbl",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

complex_type! {
    /// `CT_ValAx`
    pub struct ValAx {
        attributes {}
        children {
            ax_id: req UnsignedInt = "c:axId",
            scaling: req Scaling = "c:scaling",
            delete: opt Boolean = "c:delete",
            ax_pos: req AxPos = "c:axPos",
            major_gridlines: opt ChartLines = "c:majorGridlines",
            minor_gridlines: opt ChartLines = "c:minorGridlines",
            title: opt Title = "c:title",
            num_fmt: opt NumFmt = "c:numFmt",
            major_tick_mark: opt TickMark = "c:majorTickMark",
            minor_tick_mark: opt TickMark = "c:minorTickMark",
            tick_lbl_pos: opt TickLblPos = "c:tickLblPos",
            sp_pr: opt ShapeProperties = "c:spPr",
            tx_pr: opt TextBody = "c:txPr",
            cross_ax: req UnsignedInt = "c:crossAx",
            crosses: choice AxisCrosses,
            cross_between: opt CrossBetween = "c:crossBetween",
            major_unit: opt AxisUnit = "c:majorUnit",
            minor_unit: opt AxisUnit = "c:minorUnit",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

choice! {
    /// `EG_Axes` as used by the plot area.
    pub enum Axis("EG_Axes") {
        Category(CatAx) = "c:catAx",
        Value(ValAx) = "c:valAx",
    }
}

impl CatAx {
    /// A category axis with id `ax_id` at `position`, crossing `cross_ax`
    /// at the automatic zero.
    pub fn at(ax_id: u32, position: AxPosValue, cross_ax: u32) -> Self {
        let mut axis = Self::new();
        axis.ax_id = UnsignedInt::with_val(ax_id);
        axis.ax_pos = AxPos::with_val(position);
        axis.cross_ax = UnsignedInt::with_val(cross_ax);
        axis.crosses = Some(AxisCrosses::Crosses(Crosses::with_val(CrossesValue::AutoZero)));
        axis
    }

    #[inline]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(Title::with_text(title));
        self
    }
}

impl ValAx {
    /// A value axis with id `ax_id` at `position`, crossing `cross_ax` at
    /// the automatic zero.
    pub fn at(ax_id: u32, position: AxPosValue, cross_ax: u32) -> Self {
        let mut axis = Self::new();
        axis.ax_id = UnsignedInt::with_val(ax_id);
        axis.ax_pos = AxPos::with_val(position);
        axis.cross_ax = UnsignedInt::with_val(cross_ax);
        axis.crosses = Some(AxisCrosses::Crosses(Crosses::with_val(CrossesValue::AutoZero)));
        axis
    }

    #[inline]
    pub fn with_title(mut self, title: &str) -> Self {
        self.title = Some(Title::with_text(title));
        self
    }

    #[inline]
    pub fn with_range(mut self, min: f64, max: f64) -> Self {
        self.scaling.min = Some(Double::with_val(min));
        self.scaling.max = Some(Double::with_val(max));
        self
    }

    #[inline]
    pub fn with_major_unit(mut self, unit: f64) -> Self {
        self.major_unit = Some(AxisUnit::with_val(AxisUnitValue(unit)));
        self
    }

    #[inline]
    pub fn with_log_scale(mut self, base: f64) -> Self {
        self.scaling.log_base = Some(LogBase::with_val(LogBaseValue(base)));
        self
    }

    #[inline]
    pub fn with_major_gridlines(mut self) -> Self {
        self.major_gridlines = Some(ChartLines::new());
        self
    }
}

impl Axis {
    pub fn id(&self) -> u32 {
        match self {
            Self::Category(a) => a.ax_id.val,
            Self::Value(a) => a.ax_id.val,
        }
    }

    /// Id of the axis this one crosses.
    pub fn cross_id(&self) -> u32 {
        match self {
            Self::Category(a) => a.cross_ax.val,
            Self::Value(a) => a.cross_ax.val,
        }
    }
}

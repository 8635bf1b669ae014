//! Plot area and chart groups.
//!
//! A plot area holds one or more chart groups (bar, line, pie, ...), each
//! referencing its axes by id, followed by the axes themselves.

use crate::ooxml::charts::axis::{Axis, ChartLines};
use crate::ooxml::charts::models::Layout;
use crate::ooxml::charts::series::{AreaSer, BarSer, DLbls, LineSer, PieSer, ScatterSer};
use crate::ooxml::charts::types::{
    BarDir, BarDirValue, BarGrouping, BarGroupingValue, Boolean, FirstSliceAng, GapAmount,
    Grouping, HoleSize, Overlap, OverlapValue, ScatterStyle, UnsignedInt,
};
use crate::ooxml::drawings::ext::ExtensionList;
use crate::ooxml::drawings::shape::ShapeProperties;
use crate::ooxml::schema::ChoiceGroup;
use crate::{choice, complex_type};

complex_type! {
    /// `CT_BarChart`
    pub struct BarChart {
        attributes {}
        children {
            bar_dir: req BarDir = "c:barDir",
            grouping: opt BarGrouping = "c:grouping",
            vary_colors: opt Boolean = "c:varyColors",
            series: many BarSer = "c:ser",
            d_lbls: opt DLbls = "c:dLbls",
            gap_width: opt GapAmount = "c:gapWidth",
            overlap: opt Overlap = "c:overlap",
            ser_lines: many ChartLines = "c:serLines",
            ax_ids: many1 UnsignedInt = "c:axId",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

complex_type! {
    /// `CT_LineChart`
    pub struct LineChart {
        attributes {}
        children {
            grouping: req Grouping = "c:grouping",
            vary_colors: opt Boolean = "c:varyColors",
            series: many LineSer = "c:ser",
            d_lbls: opt DLbls = "c:dLbls",
            drop_lines: opt ChartLines = "c:dropLines",
            hi_low_lines: opt ChartLines = "c:hiLowLines",
            marker: opt Boolean = "c:marker",
            smooth: opt Boolean = "c:smooth",
            ax_ids: many1 UnsignedInt = "c:axId",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

complex_type! {
    /// `CT_PieChart`
    pub struct PieChart {
        attributes {}
        children {
            vary_colors: opt Boolean = "c:varyColors",
            series: many PieSer = "c:ser",
            d_lbls: opt DLbls = "c:dLbls",
            first_slice_ang: opt FirstSliceAng = "c:firstSliceAng",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

complex_type! {
    /// `CT_DoughnutChart`
    pub struct DoughnutChart {
        attributes {}
        children {
            vary_colors: opt Boolean = "c:varyColors",
            series: many PieSer = "c:ser",
            d_lbls: opt DLbls = "c:dLbls",
            first_slice_ang: opt FirstSliceAng = "c:firstSliceAng",
            hole_size: opt HoleSize = "c:holeSize",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

complex_type! {
    /// `CT_AreaChart`
    pub struct AreaChart {
        attributes {}
        children {
            grouping: opt Grouping = "c:grouping",
            vary_colors: opt Boolean = "c:varyColors",
            series: many AreaSer = "c:ser",
            d_lbls: opt DLbls = "c:dLbls",
            drop_lines: opt ChartLines = "c:dropLines",
            ax_ids: many1 UnsignedInt = "c:axId",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

complex_type! {
    /// `CT_ScatterChart`
    pub struct ScatterChart {
        attributes {}
        children {
            scatter_style: req ScatterStyle = "c:scatterStyle",
            vary_colors: opt Boolean = "c:varyColors",
            series: many ScatterSer = "c:ser",
            d_lbls: opt DLbls = "c:dLbls",
            ax_ids: many1 UnsignedInt = "c:axId",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

choice! {
    /// `EG_PlotAreaCharts` (2D subset).
    pub enum ChartGroup("EG_PlotAreaCharts") {
        BarChart(BarChart) = "c:barChart",
        LineChart(LineChart) = "c:lineChart",
        PieChart(PieChart) = "c:pieChart",
        DoughnutChart(DoughnutChart) = "c:doughnutChart",
        AreaChart(AreaChart) = "c:areaChart",
        ScatterChart(ScatterChart) = "c:scatterChart",
    }
}

complex_type! {
    /// `CT_PlotArea`. The schema asks for at least one chart group; an
    /// empty `charts` list is not reported by validation, so a fresh plot
    /// area can be filled in with [`PlotArea::with_chart`].
    pub struct PlotArea {
        attributes {}
        children {
            layout: opt Layout = "c:layout",
            charts: choices ChartGroup,
            axes: choices Axis,
            sp_pr: opt ShapeProperties = "c:spPr",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

fn axis_pair(primary: u32, secondary: u32) -> Vec<UnsignedInt> {
    vec![UnsignedInt::with_val(primary), UnsignedInt::with_val(secondary)]
}

impl BarChart {
    /// An empty bar chart plotted on axes `cat_ax` and `val_ax`.
    pub fn with_axes(
        dir: BarDirValue,
        grouping: BarGroupingValue,
        cat_ax: u32,
        val_ax: u32,
    ) -> Self {
        let mut chart = Self::new();
        chart.bar_dir = BarDir::with_val(dir);
        chart.grouping = Some(BarGrouping::with_val(grouping));
        chart.vary_colors = Some(Boolean::with_val(false));
        chart.ax_ids = axis_pair(cat_ax, val_ax);
        if matches!(grouping, BarGroupingValue::Stacked | BarGroupingValue::PercentStacked) {
            chart.overlap = Some(Overlap::with_val(OverlapValue(100)));
        }
        chart
    }
}

impl LineChart {
    pub fn with_axes(cat_ax: u32, val_ax: u32) -> Self {
        let mut chart = Self::new();
        chart.vary_colors = Some(Boolean::with_val(false));
        chart.marker = Some(Boolean::with_val(true));
        chart.ax_ids = axis_pair(cat_ax, val_ax);
        chart
    }
}

impl AreaChart {
    pub fn with_axes(cat_ax: u32, val_ax: u32) -> Self {
        let mut chart = Self::new();
        chart.ax_ids = axis_pair(cat_ax, val_ax);
        chart
    }
}

impl ScatterChart {
    pub fn with_axes(x_ax: u32, y_ax: u32) -> Self {
        let mut chart = Self::new();
        chart.vary_colors = Some(Boolean::with_val(false));
        chart.ax_ids = axis_pair(x_ax, y_ax);
        chart
    }
}

impl ChartGroup {
    /// Number of series in the group.
    pub fn series_len(&self) -> usize {
        match self {
            Self::BarChart(c) => c.series.len(),
            Self::LineChart(c) => c.series.len(),
            Self::PieChart(c) => c.series.len(),
            Self::DoughnutChart(c) => c.series.len(),
            Self::AreaChart(c) => c.series.len(),
            Self::ScatterChart(c) => c.series.len(),
        }
    }

    /// Axis ids the group is plotted on; empty for pie and doughnut charts.
    pub fn axis_ids(&self) -> impl Iterator<Item = u32> + '_ {
        let ids: &[UnsignedInt] = match self {
            Self::BarChart(c) => &c.ax_ids,
            Self::LineChart(c) => &c.ax_ids,
            Self::AreaChart(c) => &c.ax_ids,
            Self::ScatterChart(c) => &c.ax_ids,
            Self::PieChart(_) | Self::DoughnutChart(_) => &[],
        };
        ids.iter().map(|id| id.val)
    }

    /// Whether the group draws on axes at all.
    #[inline]
    pub fn has_axes(&self) -> bool {
        !matches!(self, Self::PieChart(_) | Self::DoughnutChart(_))
    }
}

impl PlotArea {
    #[inline]
    pub fn with_chart(mut self, chart: ChartGroup) -> Self {
        self.charts.push(chart);
        self
    }

    #[inline]
    pub fn with_axis(mut self, axis: Axis) -> Self {
        self.axes.push(axis);
        self
    }

    pub fn axis(&self, id: u32) -> Option<&Axis> {
        self.axes.iter().find(|a| a.id() == id)
    }

    pub fn series_count(&self) -> usize {
        self.charts.iter().map(ChartGroup::series_len).sum()
    }

    /// Element names of the chart groups, in document order.
    pub fn chart_kinds(&self) -> Vec<&'static str> {
        self.charts.iter().map(|c| c.element_name()).collect()
    }

    /// Axis ids referenced by a chart group but not declared in the plot
    /// area.
    pub fn dangling_axis_ids(&self) -> Vec<u32> {
        let mut missing: Vec<u32> = self
            .charts
            .iter()
            .flat_map(ChartGroup::axis_ids)
            .filter(|id| self.axis(*id).is_none())
            .collect();
        missing.sort_unstable();
        missing.dedup();
        missing
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::charts::axis::{CatAx, ValAx};
    use crate::ooxml::charts::types::AxPosValue;
    use crate::ooxml::schema::{Validate, from_xml_str, to_xml_string};

    fn column_plot() -> PlotArea {
        let mut bar = BarChart::with_axes(BarDirValue::Col, BarGroupingValue::Clustered, 1, 2);
        bar.series.push(BarSer::indexed(0).with_name("North"));
        PlotArea::new()
            .with_chart(ChartGroup::BarChart(bar))
            .with_axis(Axis::Category(CatAx::at(1, AxPosValue::Bottom, 2)))
            .with_axis(Axis::Value(ValAx::at(2, AxPosValue::Left, 1)))
    }

    #[test]
    fn test_plot_area_order() {
        let plot = column_plot();
        let xml = to_xml_string(&plot, "c:plotArea").unwrap();
        let bar = xml.find("<c:barChart>").unwrap();
        let cat = xml.find("<c:catAx>").unwrap();
        let val = xml.find("<c:valAx>").unwrap();
        assert!(bar < cat && cat < val);
        assert_eq!(plot.series_count(), 1);
        assert_eq!(plot.chart_kinds(), vec!["c:barChart"]);
        assert!(plot.dangling_axis_ids().is_empty());
        assert_eq!(from_xml_str::<PlotArea>(&xml, "c:plotArea").unwrap(), plot);
    }

    #[test]
    fn test_missing_axis_ids_path() {
        let mut plot = column_plot();
        if let ChartGroup::BarChart(bar) = &mut plot.charts[0] {
            bar.ax_ids.clear();
        }
        let err = plot.validate().unwrap_err();
        assert_eq!(err.path, "/charts[0]/BarChart/ax_ids");
    }

    #[test]
    fn test_decoded_group_without_axis_ids_is_invalid() {
        let xml = r#"<c:barChart><c:barDir val="col"/></c:barChart>"#;
        let bar: BarChart = from_xml_str(xml, "c:barChart").unwrap();
        assert!(bar.ax_ids.is_empty());
        assert_eq!(bar.validate().unwrap_err().path, "/ax_ids");
        assert_eq!(to_xml_string(&bar, "c:barChart").unwrap(), xml);

        let line: LineChart =
            from_xml_str(r#"<c:lineChart><c:grouping val="standard"/></c:lineChart>"#, "c:lineChart")
                .unwrap();
        assert_eq!(line.validate().unwrap_err().path, "/ax_ids");
    }

    #[test]
    fn test_decoded_plot_area_has_no_phantom_axis_ids() {
        let xml = r#"<c:plotArea><c:barChart><c:barDir val="col"/></c:barChart></c:plotArea>"#;
        let plot: PlotArea = from_xml_str(xml, "c:plotArea").unwrap();
        assert!(plot.dangling_axis_ids().is_empty());
        assert_eq!(plot.validate().unwrap_err().path, "/charts[0]/BarChart/ax_ids");
    }

    #[test]
    fn test_dangling_axis_ids() {
        let plot = PlotArea::new().with_chart(ChartGroup::LineChart(LineChart::with_axes(5, 6)));
        assert_eq!(plot.dangling_axis_ids(), vec![5, 6]);
    }

    #[test]
    fn test_mixed_groups_decode_in_order() {
        let xml = concat!(
            r#"<c:plotArea><c:layout/>"#,
            r#"<c:barChart><c:barDir val="col"/><c:axId val="1"/><c:axId val="2"/></c:barChart>"#,
            r#"<c:lineChart><c:grouping val="standard"/><c:axId val="1"/><c:axId val="2"/></c:lineChart>"#,
            r#"<c:pieChart><c:varyColors val="true"/></c:pieChart>"#,
            r#"<c:bar3DChart/>"#,
            r#"</c:plotArea>"#
        );
        let plot: PlotArea = from_xml_str(xml, "c:plotArea").unwrap();
        assert_eq!(
            plot.chart_kinds(),
            vec!["c:barChart", "c:lineChart", "c:pieChart"]
        );
        assert!(!plot.charts[2].has_axes());
        assert_eq!(plot.charts[0].axis_ids().collect::<Vec<_>>(), vec![1, 2]);
    }

    #[test]
    fn test_stacked_bars_overlap() {
        let bar = BarChart::with_axes(BarDirValue::Bar, BarGroupingValue::Stacked, 1, 2);
        assert_eq!(bar.overlap.as_ref().unwrap().value().get(), 100);
    }
}

//! Chart part bindings (`c:` namespace).
//!
//! This module covers the chart part of DrawingML:
//!
//! - The part root [`ChartSpace`] and the [`Chart`] it holds
//! - Plot area with bar, line, pie, doughnut, area and scatter groups
//! - Series with literal or referenced data and their caches
//! - Category and value axes, legends, titles and data labels
//! - Print settings of the part
//!
//! Text properties (`c:txPr`, `c:rich`) reuse the DrawingML
//! [`TextBody`](crate::ooxml::drawings::TextBody) and shape properties reuse
//! [`ShapeProperties`](crate::ooxml::drawings::ShapeProperties).
//!
//! # Example
//!
//! ```rust
//! use ooxml_dml::ooxml::charts::{
//!     AxPosValue, Axis, BarChart, BarDirValue, BarGroupingValue, BarSer, CatAx, Chart,
//!     ChartGroup, ChartSpace, Legend, LegendPosValue, NumRef, NumSource, PlotArea, StrRef,
//!     AxData, ValAx,
//! };
//! use ooxml_dml::ooxml::schema::{Validate, XmlDocument};
//!
//! let mut bars = BarChart::with_axes(BarDirValue::Col, BarGroupingValue::Clustered, 1, 2);
//! bars.series.push(
//!     BarSer::indexed(0)
//!         .with_name("Q1 Sales")
//!         .with_categories(AxData::StrRef(
//!             StrRef::from_formula("Sheet1!$A$2:$A$4").with_cache(&["Jan", "Feb", "Mar"]),
//!         ))
//!         .with_values(NumSource::NumRef(
//!             NumRef::from_formula("Sheet1!$B$2:$B$4").with_cache(&[100.0, 150.0, 200.0]),
//!         )),
//! );
//!
//! let plot_area = PlotArea::new()
//!     .with_chart(ChartGroup::BarChart(bars))
//!     .with_axis(Axis::Category(CatAx::at(1, AxPosValue::Bottom, 2)))
//!     .with_axis(Axis::Value(ValAx::at(2, AxPosValue::Left, 1)));
//!
//! let chart = Chart::new()
//!     .with_title("Sales Report")
//!     .with_plot_area(plot_area)
//!     .with_legend(Legend::at(LegendPosValue::Right));
//!
//! let space = ChartSpace::with_chart(chart, "en-US");
//! assert!(space.validate().is_ok());
//!
//! let xml = space.to_xml().unwrap();
//! let parsed = ChartSpace::from_xml(&xml).unwrap();
//! assert_eq!(parsed, space);
//! ```

pub mod axis;
pub mod chart;
pub mod legend;
pub mod models;
pub mod plot_area;
pub mod series;
pub mod types;

pub use axis::{Axis, AxisCrosses, CatAx, ChartLines, Scaling, ValAx};
pub use chart::{
    Chart, ChartSpace, ExternalData, HeaderFooter, PageMargins, PageSetup, PageSetupOrientation,
    PrintSettings, RelId, Surface, Title, View3D,
};
pub use legend::{Legend, LegendEntry, LegendEntryContent};
pub use models::{
    AxData, AxDataSource, Layout, ManualLayout, NumData, NumDataSource, NumRef, NumSource,
    NumVal, SerTx, SeriesText, StrData, StrRef, StrVal, TitleText, Tx,
};
pub use plot_area::{
    AreaChart, BarChart, ChartGroup, DoughnutChart, LineChart, PieChart, PlotArea, ScatterChart,
};
pub use series::{
    AreaSer, BarSer, DLbl, DLblChoice, DLblGroup, DLbls, DLblsChoice, DLblsGroup, DataPoint,
    InlineGroup, LabelChoice, LineSer, Marker, PieSer, ScatterSer,
};
pub use types::*;

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::schema::{ReaderOptions, Validate, XmlDocument};

    /// A pie chart part as written by a spreadsheet application, including
    /// markup this crate does not model.
    const PIE_PART: &str = concat!(
        r#"<?xml version="1.0" encoding="UTF-8" standalone="yes"?>"#,
        r#"<c:chartSpace xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart" "#,
        r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
        r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships" "#,
        r#"xmlns:mc="http://schemas.openxmlformats.org/markup-compatibility/2006">"#,
        r#"<c:date1904 val="0"/><c:lang val="en-US"/><c:roundedCorners val="0"/>"#,
        r#"<mc:AlternateContent><mc:Choice Requires="c14"><c14:style val="102"/></mc:Choice></mc:AlternateContent>"#,
        r#"<c:chart><c:title><c:tx><c:rich><a:bodyPr/><a:lstStyle/><a:p><a:r><a:t>Market share</a:t></a:r></a:p></c:rich></c:tx><c:overlay val="0"/></c:title>"#,
        r#"<c:autoTitleDeleted val="0"/><c:plotArea><c:layout/>"#,
        r#"<c:pieChart><c:varyColors val="1"/><c:ser><c:idx val="0"/><c:order val="0"/>"#,
        r#"<c:tx><c:strRef><c:f>Sheet1!$B$1</c:f><c:strCache><c:ptCount val="1"/><c:pt idx="0"><c:v>Share</c:v></c:pt></c:strCache></c:strRef></c:tx>"#,
        r#"<c:dPt><c:idx val="0"/><c:bubble3D val="0"/><c:spPr><a:solidFill><a:schemeClr val="accent1"/></a:solidFill></c:spPr></c:dPt>"#,
        r#"<c:dLbls><c:showLegendKey val="0"/><c:showVal val="0"/><c:showCatName val="0"/><c:showSerName val="0"/><c:showPercent val="1"/><c:showBubbleSize val="0"/><c:showLeaderLines val="1"/></c:dLbls>"#,
        r#"<c:cat><c:strRef><c:f>Sheet1!$A$2:$A$3</c:f></c:strRef></c:cat>"#,
        r#"<c:val><c:numRef><c:f>Sheet1!$B$2:$B$3</c:f><c:numCache><c:formatCode>0%</c:formatCode><c:ptCount val="2"/><c:pt idx="0"><c:v>0.6</c:v></c:pt><c:pt idx="1"><c:v>0.4</c:v></c:pt></c:numCache></c:numRef></c:val>"#,
        r#"</c:ser><c:firstSliceAng val="0"/></c:pieChart></c:plotArea>"#,
        r#"<c:legend><c:legendPos val="r"/><c:overlay val="0"/></c:legend><c:plotVisOnly val="1"/><c:dispBlanksAs val="gap"/></c:chart>"#,
        r#"<c:externalData r:id="rId1"><c:autoUpdate val="0"/></c:externalData>"#,
        r#"</c:chartSpace>"#
    );

    #[test]
    fn test_decode_application_part() {
        let space = ChartSpace::from_xml(PIE_PART).unwrap();
        assert_eq!(space.lang.as_ref().unwrap().val, "en-US");
        assert_eq!(space.chart.title_text().as_deref(), Some("Market share"));
        assert_eq!(space.external_data.as_ref().unwrap().id, "rId1");

        let plot = &space.chart.plot_area;
        assert_eq!(plot.chart_kinds(), vec!["c:pieChart"]);
        let ChartGroup::PieChart(pie) = &plot.charts[0] else {
            panic!("expected a pie chart");
        };
        let series = &pie.series[0];
        assert_eq!(series.d_pt.len(), 1);
        match &series.val.as_ref().unwrap().data {
            NumSource::NumRef(r) => {
                assert_eq!(r.num_cache.as_ref().unwrap().values(), vec![(0, 0.6), (1, 0.4)]);
            },
            other => panic!("unexpected values: {other:?}"),
        }
        assert_eq!(
            space.chart.disp_blanks_as.as_ref().unwrap().value(),
            DispBlanksAsValue::Gap
        );
        assert!(space.validate().is_ok());
    }

    #[test]
    fn test_re_encoded_part_decodes_identically() {
        let space = ChartSpace::from_xml(PIE_PART).unwrap();
        let xml = space.to_xml().unwrap();
        assert!(!xml.contains("AlternateContent"));
        assert_eq!(ChartSpace::from_xml(&xml).unwrap(), space);
    }

    #[test]
    fn test_strict_mode_accepts_well_formed_part() {
        let strict = ReaderOptions::new().with_strict_choices(true);
        assert!(ChartSpace::from_xml_with_options(PIE_PART, strict).is_ok());
    }

    #[test]
    fn test_validation_path_through_plot_area() {
        let mut space = ChartSpace::from_xml(PIE_PART).unwrap();
        space.chart.plot_area.charts.push(ChartGroup::BarChart(BarChart::new()));
        if let ChartGroup::BarChart(bar) = &mut space.chart.plot_area.charts[1] {
            bar.ax_ids.clear();
        }
        let err = space.validate().unwrap_err();
        assert_eq!(err.path, "/chart/plot_area/charts[1]/BarChart/ax_ids");
    }
}

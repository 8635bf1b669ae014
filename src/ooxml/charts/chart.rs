//! Chart part root (`c:chartSpace`) and the top-level chart structure.
//!
//! A chart part holds one [`Chart`] (title, 3D view, walls, plot area and
//! legend) plus part-wide settings: language, style, rounded corners, the
//! linked workbook and print settings.

use crate::ooxml::charts::legend::Legend;
use crate::ooxml::charts::models::{Layout, Tx};
use crate::ooxml::charts::plot_area::PlotArea;
use crate::ooxml::charts::types::{
    Boolean, DepthPercent, DispBlanksAs, HPercent, Perspective, RotX, RotY, Style, StyleValue,
    TextLanguageId,
};
use crate::ooxml::drawings::ext::ExtensionList;
use crate::ooxml::drawings::shape::ShapeProperties;
use crate::ooxml::drawings::text::TextBody;
use crate::ooxml::schema::{Namespaces, XmlDocument};
use crate::{complex_type, st_enum};

/// Chart namespace.
pub const CHART_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/chart";
/// DrawingML main namespace.
pub const DRAWINGML_NS: &str = "http://schemas.openxmlformats.org/drawingml/2006/main";
/// Relationships namespace used by `r:id`.
pub const RELATIONSHIPS_NS: &str =
    "http://schemas.openxmlformats.org/officeDocument/2006/relationships";

complex_type! {
    /// `CT_Title`
    pub struct Title {
        attributes {}
        children {
            tx: opt Tx = "c:tx",
            layout: opt Layout = "c:layout",
            overlay: opt Boolean = "c:overlay",
            sp_pr: opt ShapeProperties = "c:spPr",
            tx_pr: opt TextBody = "c:txPr",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

impl Title {
    /// A non-overlaid title with rich text `text`.
    pub fn with_text(text: &str) -> Self {
        let mut title = Self::new();
        title.tx = Some(Tx::rich(text));
        title.overlay = Some(Boolean::with_val(false));
        title
    }
}

complex_type! {
    /// `CT_View3D`
    pub struct View3D {
        attributes {}
        children {
            rot_x: opt RotX = "c:rotX",
            h_percent: opt HPercent = "c:hPercent",
            rot_y: opt RotY = "c:rotY",
            depth_percent: opt DepthPercent = "c:depthPercent",
            r_ang_ax: opt Boolean = "c:rAngAx",
            perspective: opt Perspective = "c:perspective",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

complex_type! {
    /// `CT_Surface`: floor, side wall or back wall of a 3D chart.
    pub struct Surface {
        attributes {}
        children {
            sp_pr: opt ShapeProperties = "c:spPr",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

complex_type! {
    /// `CT_Chart`
    pub struct Chart {
        attributes {}
        children {
            title: opt Title = "c:title",
            auto_title_deleted: opt Boolean = "c:autoTitleDeleted",
            view_3d: opt View3D = "c:view3D",
            floor: opt Surface = "c:floor",
            side_wall: opt Surface = "c:sideWall",
            back_wall: opt Surface = "c:backWall",
            plot_area: req PlotArea = "c:plotArea",
            legend: opt Legend = "c:legend",
            plot_vis_only: opt Boolean = "c:plotVisOnly",
            disp_blanks_as: opt DispBlanksAs = "c:dispBlanksAs",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

impl Chart {
    #[inline]
    pub fn with_title(mut self, text: &str) -> Self {
        self.title = Some(Title::with_text(text));
        self.auto_title_deleted = Some(Boolean::with_val(false));
        self
    }

    #[inline]
    pub fn with_legend(mut self, legend: Legend) -> Self {
        self.legend = Some(legend);
        self
    }

    #[inline]
    pub fn with_plot_area(mut self, plot_area: PlotArea) -> Self {
        self.plot_area = plot_area;
        self
    }

    /// Plain text of the title, when it is rich text.
    pub fn title_text(&self) -> Option<String> {
        self.title.as_ref()?.tx.as_ref().map(Tx::plain_text)
    }
}

complex_type! {
    /// `CT_HeaderFooter`. Header and footer strings use the `&`-code
    /// format of spreadsheet headers.
    pub struct HeaderFooter {
        attributes {
            align_with_margins: opt bool = "alignWithMargins",
            different_odd_even: opt bool = "differentOddEven",
            different_first: opt bool = "differentFirst",
        }
        children {
            odd_header: opt String = "c:oddHeader",
            odd_footer: opt String = "c:oddFooter",
            even_header: opt String = "c:evenHeader",
            even_footer: opt String = "c:evenFooter",
            first_header: opt String = "c:firstHeader",
            first_footer: opt String = "c:firstFooter",
        }
    }
}

complex_type! {
    /// `CT_PageMargins`, in inches.
    pub struct PageMargins {
        attributes {
            l: req f64 = "l" => 0.7,
            r: req f64 = "r" => 0.7,
            t: req f64 = "t" => 0.75,
            b: req f64 = "b" => 0.75,
            header: req f64 = "header" => 0.3,
            footer: req f64 = "footer" => 0.3,
        }
        children {}
    }
}

st_enum! {
    pub enum PageSetupOrientation {
        Default = "default",
        Portrait = "portrait",
        Landscape = "landscape",
    }
}

complex_type! {
    /// `CT_PageSetup`
    pub struct PageSetup {
        attributes {
            paper_size: opt u32 = "paperSize",
            paper_height: opt String = "paperHeight",
            paper_width: opt String = "paperWidth",
            first_page_number: opt u32 = "firstPageNumber",
            orientation: opt PageSetupOrientation = "orientation",
            black_and_white: opt bool = "blackAndWhite",
            draft: opt bool = "draft",
            use_first_page_number: opt bool = "useFirstPageNumber",
            horizontal_dpi: opt i32 = "horizontalDpi",
            vertical_dpi: opt i32 = "verticalDpi",
            copies: opt u32 = "copies",
        }
        children {}
    }
}

complex_type! {
    /// `CT_PrintSettings`
    pub struct PrintSettings {
        attributes {}
        children {
            header_footer: opt HeaderFooter = "c:headerFooter",
            page_margins: opt PageMargins = "c:pageMargins",
            page_setup: opt PageSetup = "c:pageSetup",
        }
    }
}

complex_type! {
    /// `CT_ExternalData`: relationship to the embedded workbook.
    pub struct ExternalData {
        attributes {
            id: req String = "r:id",
        }
        children {
            auto_update: opt Boolean = "c:autoUpdate",
        }
    }
}

complex_type! {
    /// `CT_RelId`
    pub struct RelId {
        attributes {
            id: req String = "r:id",
        }
        children {}
    }
}

complex_type! {
    /// `CT_ChartSpace`
    pub struct ChartSpace {
        attributes {}
        children {
            date1904: opt Boolean = "c:date1904",
            lang: opt TextLanguageId = "c:lang",
            rounded_corners: opt Boolean = "c:roundedCorners",
            style: opt Style = "c:style",
            chart: req Chart = "c:chart",
            sp_pr: opt ShapeProperties = "c:spPr",
            tx_pr: opt TextBody = "c:txPr",
            external_data: opt ExternalData = "c:externalData",
            print_settings: opt PrintSettings = "c:printSettings",
            user_shapes: opt RelId = "c:userShapes",
            ext_lst: opt ExtensionList = "c:extLst",
        }
    }
}

impl ChartSpace {
    /// A chart part around `chart`, in `lang` with square corners.
    pub fn with_chart(chart: Chart, lang: &str) -> Self {
        let mut space = Self::new();
        space.date1904 = Some(Boolean::with_val(false));
        space.lang = Some(TextLanguageId::with_val(lang.to_string()));
        space.rounded_corners = Some(Boolean::with_val(false));
        space.chart = chart;
        space
    }

    #[inline]
    pub fn with_style(mut self, style: u8) -> Self {
        self.style = Some(Style::with_val(StyleValue(style)));
        self
    }

    /// Link the chart to the workbook at relationship `r_id`.
    #[inline]
    pub fn with_external_data(mut self, r_id: &str) -> Self {
        self.external_data = Some(ExternalData {
            id: r_id.to_string(),
            auto_update: Some(Boolean::with_val(false)),
        });
        self
    }
}

impl XmlDocument for ChartSpace {
    const ROOT: &'static str = "c:chartSpace";
    const NAMESPACES: Namespaces = &[
        ("xmlns:c", CHART_NS),
        ("xmlns:a", DRAWINGML_NS),
        ("xmlns:r", RELATIONSHIPS_NS),
    ];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::schema::{Validate, WriterOptions, from_xml_str, to_xml_string};

    #[test]
    fn test_new_chart_space_is_valid() {
        let space = ChartSpace::new();
        assert!(space.validate().is_ok());
        let xml = space
            .to_xml_with_options(&WriterOptions::new().with_declaration(false))
            .unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<c:chartSpace xmlns:c="http://schemas.openxmlformats.org/drawingml/2006/chart" "#,
                r#"xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main" "#,
                r#"xmlns:r="http://schemas.openxmlformats.org/officeDocument/2006/relationships">"#,
                r#"<c:chart><c:plotArea/></c:chart></c:chartSpace>"#
            )
        );
        assert_eq!(ChartSpace::from_xml(&xml).unwrap(), space);
    }

    #[test]
    fn test_stream_round_trip() {
        let space = ChartSpace::with_chart(Chart::new().with_title("Units"), "de-DE")
            .with_style(26)
            .with_external_data("rId3");
        let mut buf = Vec::new();
        space.write_to(&mut buf).unwrap();
        assert!(buf.starts_with(b"<?xml version=\"1.0\""));

        let parsed = ChartSpace::read_from(buf.as_slice()).unwrap();
        assert_eq!(parsed, space);
        assert_eq!(parsed.style.as_ref().unwrap().val, StyleValue(26));
    }

    #[test]
    fn test_wrong_root_is_rejected() {
        let err = ChartSpace::from_xml("<c:chart/>").unwrap_err();
        assert!(err.to_string().contains("c:chartSpace"));
    }

    #[test]
    fn test_page_margin_defaults() {
        let margins = PageMargins::new();
        assert_eq!(
            to_xml_string(&margins, "c:pageMargins").unwrap(),
            r#"<c:pageMargins l="0.7" r="0.7" t="0.75" b="0.75" header="0.3" footer="0.3"/>"#
        );
    }

    #[test]
    fn test_print_settings_round_trip() {
        let xml = concat!(
            r#"<c:printSettings><c:headerFooter alignWithMargins="false"><c:oddHeader>&amp;CQuarterly</c:oddHeader></c:headerFooter>"#,
            r#"<c:pageMargins l="0.7" r="0.7" t="0.75" b="0.75" header="0.3" footer="0.3"/>"#,
            r#"<c:pageSetup orientation="landscape"/></c:printSettings>"#
        );
        let settings: PrintSettings = from_xml_str(xml, "c:printSettings").unwrap();
        let hf = settings.header_footer.as_ref().unwrap();
        assert_eq!(hf.odd_header.as_deref(), Some("&CQuarterly"));
        assert_eq!(
            settings.page_setup.as_ref().unwrap().orientation,
            Some(PageSetupOrientation::Landscape)
        );
        assert_eq!(to_xml_string(&settings, "c:printSettings").unwrap(), xml);
    }

    #[test]
    fn test_style_out_of_range_path() {
        let space = ChartSpace::with_chart(Chart::new(), "en-US").with_style(0);
        assert_eq!(space.validate().unwrap_err().path, "/style/val");
    }

    #[test]
    fn test_title_text() {
        let chart = Chart::new().with_title("Sales Report");
        assert_eq!(chart.title_text().as_deref(), Some("Sales Report"));
        assert_eq!(Chart::new().title_text(), None);
    }
}

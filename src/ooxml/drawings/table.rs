//! DrawingML tables (`a:tbl`).

use crate::complex_type;
use crate::ooxml::drawings::ext::ExtensionList;
use crate::ooxml::drawings::fill::FillProperties;
use crate::ooxml::drawings::line::LineProperties;
use crate::ooxml::drawings::simple_types::{
    Coordinate, Coordinate32, TextAnchoringType, TextHorzOverflowType, TextVerticalType,
};
use crate::ooxml::drawings::text::TextBody;
use crate::ooxml::schema::{Namespaces, XmlDocument};

complex_type! {
    /// `CT_TableProperties` (`a:tblPr`).
    pub struct TableProperties {
        attributes {
            rtl: opt bool = "rtl",
            first_row: opt bool = "firstRow",
            first_col: opt bool = "firstCol",
            last_row: opt bool = "lastRow",
            last_col: opt bool = "lastCol",
            band_row: opt bool = "bandRow",
            band_col: opt bool = "bandCol",
        }
        children {
            fill: choice FillProperties,
            table_style_id: opt String = "a:tableStyleId",
            ext_lst: opt ExtensionList = "a:extLst",
        }
    }
}

complex_type! {
    /// `CT_TableCol`
    pub struct GridColumn {
        attributes {
            w: req Coordinate = "w",
        }
        children {
            ext_lst: opt ExtensionList = "a:extLst",
        }
    }
}

complex_type! {
    /// `CT_TableGrid`
    pub struct TableGrid {
        attributes {}
        children {
            columns: many GridColumn = "a:gridCol",
        }
    }
}

complex_type! {
    /// `CT_TableCellProperties` (`a:tcPr`).
    pub struct TableCellProperties {
        attributes {
            mar_l: opt Coordinate32 = "marL",
            mar_r: opt Coordinate32 = "marR",
            mar_t: opt Coordinate32 = "marT",
            mar_b: opt Coordinate32 = "marB",
            vert: opt TextVerticalType = "vert",
            anchor: opt TextAnchoringType = "anchor",
            anchor_ctr: opt bool = "anchorCtr",
            horz_overflow: opt TextHorzOverflowType = "horzOverflow",
        }
        children {
            ln_l: opt LineProperties = "a:lnL",
            ln_r: opt LineProperties = "a:lnR",
            ln_t: opt LineProperties = "a:lnT",
            ln_b: opt LineProperties = "a:lnB",
            ln_tl_to_br: opt LineProperties = "a:lnTlToBr",
            ln_bl_to_tr: opt LineProperties = "a:lnBlToTr",
            fill: choice FillProperties,
            ext_lst: opt ExtensionList = "a:extLst",
        }
    }
}

complex_type! {
    /// `CT_TableCell` (`a:tc`).
    pub struct TableCell {
        attributes {
            row_span: opt i32 = "rowSpan",
            grid_span: opt i32 = "gridSpan",
            h_merge: opt bool = "hMerge",
            v_merge: opt bool = "vMerge",
            id: opt String = "id",
        }
        children {
            tx_body: opt TextBody = "a:txBody",
            tc_pr: opt TableCellProperties = "a:tcPr",
            ext_lst: opt ExtensionList = "a:extLst",
        }
    }
}

complex_type! {
    /// `CT_TableRow` (`a:tr`).
    pub struct TableRow {
        attributes {
            h: req Coordinate = "h",
        }
        children {
            cells: many TableCell = "a:tc",
            ext_lst: opt ExtensionList = "a:extLst",
        }
    }
}

complex_type! {
    /// `CT_Table`
    pub struct Table {
        attributes {}
        children {
            tbl_pr: opt TableProperties = "a:tblPr",
            tbl_grid: req TableGrid = "a:tblGrid",
            rows: many TableRow = "a:tr",
        }
    }
}

impl Table {
    /// A table with the given column widths and `rows` rows of height
    /// `row_height`, every cell holding an empty text body.
    pub fn with_grid(column_widths: &[i64], rows: usize, row_height: i64) -> Self {
        let mut table = Self::new();
        table.tbl_grid.columns = column_widths
            .iter()
            .map(|&w| GridColumn {
                w: Coordinate::from_emus(w),
                ext_lst: None,
            })
            .collect();
        table.rows = (0..rows)
            .map(|_| {
                let mut row = TableRow::new();
                row.h = Coordinate::from_emus(row_height);
                row.cells = column_widths
                    .iter()
                    .map(|_| {
                        let mut cell = TableCell::new();
                        cell.tx_body = Some(TextBody::new());
                        cell
                    })
                    .collect();
                row
            })
            .collect();
        table
    }

    pub fn cell(&self, row: usize, col: usize) -> Option<&TableCell> {
        self.rows.get(row)?.cells.get(col)
    }

    pub fn cell_mut(&mut self, row: usize, col: usize) -> Option<&mut TableCell> {
        self.rows.get_mut(row)?.cells.get_mut(col)
    }
}

impl XmlDocument for Table {
    const ROOT: &'static str = "a:tbl";
    const NAMESPACES: Namespaces = &[(
        "xmlns:a",
        "http://schemas.openxmlformats.org/drawingml/2006/main",
    )];
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ooxml::drawings::text::RegularTextRun;
    use crate::ooxml::drawings::text::TextRun;
    use crate::ooxml::schema::{Validate, WriterOptions};

    #[test]
    fn test_grid_shape() {
        let table = Table::with_grid(&[914_400, 1_828_800], 3, 370_840);
        assert_eq!(table.tbl_grid.columns.len(), 2);
        assert_eq!(table.rows.len(), 3);
        assert!(table.cell(2, 1).is_some());
        assert!(table.cell(3, 0).is_none());
        assert!(table.validate().is_ok());
    }

    #[test]
    fn test_document_round_trip() {
        let mut table = Table::with_grid(&[914_400], 1, 370_840);
        let mut tbl_pr = TableProperties::new();
        tbl_pr.first_row = Some(true);
        tbl_pr.table_style_id = Some("{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}".to_string());
        table.tbl_pr = Some(tbl_pr);
        let body = table.cell_mut(0, 0).unwrap().tx_body.as_mut().unwrap();
        body.paragraphs[0]
            .runs
            .push(TextRun::Run(RegularTextRun::with_text("Q1")));

        let xml = table
            .to_xml_with_options(&WriterOptions::new().with_declaration(false))
            .unwrap();
        assert_eq!(
            xml,
            concat!(
                r#"<a:tbl xmlns:a="http://schemas.openxmlformats.org/drawingml/2006/main">"#,
                r#"<a:tblPr firstRow="true"><a:tableStyleId>{5C22544A-7EE6-4342-B048-85BDC9FD1C3A}</a:tableStyleId></a:tblPr>"#,
                r#"<a:tblGrid><a:gridCol w="914400"/></a:tblGrid>"#,
                r#"<a:tr h="370840"><a:tc><a:txBody><a:bodyPr/><a:p><a:r><a:t>Q1</a:t></a:r></a:p></a:txBody></a:tc></a:tr>"#,
                r#"</a:tbl>"#
            )
        );
        assert_eq!(Table::from_xml(&xml).unwrap(), table);
    }

    #[test]
    fn test_cell_border_lines() {
        let xml = r#"<a:tbl><a:tblGrid/><a:tr h="0"><a:tc><a:tcPr marL="0"><a:lnL w="12700"><a:solidFill><a:srgbClr val="000000"/></a:solidFill></a:lnL><a:noFill/></a:tcPr></a:tc></a:tr></a:tbl>"#;
        let table = Table::from_xml(xml).unwrap();
        let tc_pr = table.cell(0, 0).unwrap().tc_pr.as_ref().unwrap();
        assert!(tc_pr.ln_l.is_some());
        assert!(matches!(tc_pr.fill, Some(FillProperties::NoFill(_))));
    }
}

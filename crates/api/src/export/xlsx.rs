//! Spreadsheet report assembled as a minimal OOXML package.
//!
//! The workbook is six XML parts in a zip container: content types,
//! the two relationship files, the workbook, a stylesheet and one
//! worksheet. Cell text is written as inline strings, so no shared
//! string table is needed.

use std::io::{Cursor, Write};

use sirius_db::models::project::ProjectExportRow;
use zip::result::ZipError;
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

use super::{format_currency, format_date, UNASSIGNED};

/// Column headers, in sheet order.
pub const HEADERS: [&str; 9] = [
    "ID",
    "Nombre",
    "Cliente",
    "Estado",
    "Prioridad",
    "Fecha Inicio",
    "Fecha Fin Est.",
    "Presupuesto",
    "Responsable",
];

const SHEET_NAME: &str = "Proyectos Sirius";

/// Columns wider than this are clamped.
const MAX_COLUMN_WIDTH: usize = 50;

const XML_DECL: &str = "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n";

const CONTENT_TYPES_XML: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
    "<Types xmlns=\"http://schemas.openxmlformats.org/package/2006/content-types\">",
    "<Default Extension=\"rels\" ContentType=\"application/vnd.openxmlformats-package.relationships+xml\"/>",
    "<Default Extension=\"xml\" ContentType=\"application/xml\"/>",
    "<Override PartName=\"/xl/workbook.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.sheet.main+xml\"/>",
    "<Override PartName=\"/xl/worksheets/sheet1.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.worksheet+xml\"/>",
    "<Override PartName=\"/xl/styles.xml\" ContentType=\"application/vnd.openxmlformats-officedocument.spreadsheetml.styles+xml\"/>",
    "</Types>"
);

const ROOT_RELS_XML: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
    "<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">",
    "<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/officeDocument\" Target=\"xl/workbook.xml\"/>",
    "</Relationships>"
);

const WORKBOOK_RELS_XML: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
    "<Relationships xmlns=\"http://schemas.openxmlformats.org/package/2006/relationships\">",
    "<Relationship Id=\"rId1\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/worksheet\" Target=\"worksheets/sheet1.xml\"/>",
    "<Relationship Id=\"rId2\" Type=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships/styles\" Target=\"styles.xml\"/>",
    "</Relationships>"
);

/// Font 1 is the bold white header face; fill 2 the solid header blue.
/// Cell format 1 combines them with centered alignment.
const STYLES_XML: &str = concat!(
    "<?xml version=\"1.0\" encoding=\"UTF-8\" standalone=\"yes\"?>\n",
    "<styleSheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\">",
    "<fonts count=\"2\">",
    "<font><sz val=\"11\"/><name val=\"Calibri\"/></font>",
    "<font><b/><color rgb=\"FFFFFFFF\"/><sz val=\"11\"/><name val=\"Calibri\"/></font>",
    "</fonts>",
    "<fills count=\"3\">",
    "<fill><patternFill patternType=\"none\"/></fill>",
    "<fill><patternFill patternType=\"gray125\"/></fill>",
    "<fill><patternFill patternType=\"solid\"><fgColor rgb=\"FF366092\"/><bgColor indexed=\"64\"/></patternFill></fill>",
    "</fills>",
    "<borders count=\"1\"><border><left/><right/><top/><bottom/><diagonal/></border></borders>",
    "<cellXfs count=\"2\">",
    "<xf numFmtId=\"0\" fontId=\"0\" fillId=\"0\" borderId=\"0\"/>",
    "<xf numFmtId=\"0\" fontId=\"1\" fillId=\"2\" borderId=\"0\" applyFont=\"1\" applyFill=\"1\" applyAlignment=\"1\">",
    "<alignment horizontal=\"center\" vertical=\"center\"/>",
    "</xf>",
    "</cellXfs>",
    "</styleSheet>"
);

/// Build the full workbook for the given export rows.
pub fn build_projects_workbook(rows: &[ProjectExportRow]) -> Result<Vec<u8>, ZipError> {
    let sheet = sheet_xml(rows);

    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);

    writer.start_file("[Content_Types].xml", options)?;
    writer.write_all(CONTENT_TYPES_XML.as_bytes())?;
    writer.start_file("_rels/.rels", options)?;
    writer.write_all(ROOT_RELS_XML.as_bytes())?;
    writer.start_file("xl/workbook.xml", options)?;
    writer.write_all(workbook_xml().as_bytes())?;
    writer.start_file("xl/_rels/workbook.xml.rels", options)?;
    writer.write_all(WORKBOOK_RELS_XML.as_bytes())?;
    writer.start_file("xl/styles.xml", options)?;
    writer.write_all(STYLES_XML.as_bytes())?;
    writer.start_file("xl/worksheets/sheet1.xml", options)?;
    writer.write_all(sheet.as_bytes())?;

    let cursor = writer.finish()?;
    Ok(cursor.into_inner())
}

fn workbook_xml() -> String {
    format!(
        "{XML_DECL}<workbook xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\" \
         xmlns:r=\"http://schemas.openxmlformats.org/officeDocument/2006/relationships\">\
         <sheets><sheet name=\"{SHEET_NAME}\" sheetId=\"1\" r:id=\"rId1\"/></sheets></workbook>"
    )
}

/// One sheet row in display form: the numeric id plus the eight text
/// columns.
struct DisplayRow {
    id: i64,
    cells: [String; 8],
}

fn display_row(row: &ProjectExportRow) -> DisplayRow {
    DisplayRow {
        id: row.id,
        cells: [
            row.name.clone(),
            row.client_display(),
            row.status.label().to_string(),
            row.priority.label().to_string(),
            format_date(row.start_date),
            format_date(row.estimated_end_date),
            format_currency(row.total_budget, 2),
            row.responsible_username
                .clone()
                .unwrap_or_else(|| UNASSIGNED.to_string()),
        ],
    }
}

/// Widest content per column plus padding, clamped to
/// [`MAX_COLUMN_WIDTH`].
fn column_widths(rows: &[DisplayRow]) -> [usize; 9] {
    let mut widths = [0usize; 9];
    for (i, header) in HEADERS.iter().enumerate() {
        widths[i] = header.chars().count();
    }
    for row in rows {
        widths[0] = widths[0].max(row.id.to_string().len());
        for (i, cell) in row.cells.iter().enumerate() {
            widths[i + 1] = widths[i + 1].max(cell.chars().count());
        }
    }
    for width in &mut widths {
        *width = (*width + 2).min(MAX_COLUMN_WIDTH);
    }
    widths
}

fn sheet_xml(rows: &[ProjectExportRow]) -> String {
    let display: Vec<DisplayRow> = rows.iter().map(display_row).collect();
    let widths = column_widths(&display);

    let mut xml = String::with_capacity(1024 + display.len() * 512);
    xml.push_str(XML_DECL);
    xml.push_str(
        "<worksheet xmlns=\"http://schemas.openxmlformats.org/spreadsheetml/2006/main\">",
    );

    xml.push_str("<cols>");
    for (i, width) in widths.iter().enumerate() {
        xml.push_str(&format!(
            "<col min=\"{0}\" max=\"{0}\" width=\"{1}\" customWidth=\"1\"/>",
            i + 1,
            width
        ));
    }
    xml.push_str("</cols><sheetData>");

    xml.push_str("<row r=\"1\">");
    for (i, header) in HEADERS.iter().enumerate() {
        xml.push_str(&format!(
            "<c r=\"{}1\" t=\"inlineStr\" s=\"1\"><is><t>{}</t></is></c>",
            col_letter(i),
            xml_escape(header)
        ));
    }
    xml.push_str("</row>");

    for (index, row) in display.iter().enumerate() {
        let r = index + 2;
        xml.push_str(&format!("<row r=\"{r}\">"));
        xml.push_str(&format!("<c r=\"A{r}\"><v>{}</v></c>", row.id));
        for (i, cell) in row.cells.iter().enumerate() {
            xml.push_str(&format!(
                "<c r=\"{}{r}\" t=\"inlineStr\"><is><t>{}</t></is></c>",
                col_letter(i + 1),
                xml_escape(cell)
            ));
        }
        xml.push_str("</row>");
    }

    xml.push_str("</sheetData></worksheet>");
    xml
}

/// Column letter for a zero-based index. The sheet has nine columns, so
/// a single letter always suffices.
fn col_letter(index: usize) -> char {
    (b'A' + index as u8) as char
}

fn xml_escape(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for c in value.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(c),
        }
    }
    out
}

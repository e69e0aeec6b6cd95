//! PDF report assembled with lopdf.
//!
//! One letter-size page: a title line and a four-column table of the
//! caller's newest visible projects, with a grey header band, white
//! header text and a ruled grid. Rows beyond the handler's cap never
//! reach this module.

use lopdf::{dictionary, Document, Object, Stream};
use sirius_db::models::project::ProjectExportRow;

use super::format_currency;

const TITLE: &str = "Reporte de Proyectos - Sirius";

const TABLE_HEADERS: [&str; 4] = ["Proyecto", "Cliente", "Estado", "Presupuesto"];

const PAGE_HEIGHT: f64 = 792.0;
const MARGIN: f64 = 50.0;
const ROW_HEIGHT: f64 = 20.0;
const TITLE_FONT_SIZE: f64 = 16.0;
const HEADER_FONT_SIZE: f64 = 10.0;
const BODY_FONT_SIZE: f64 = 9.0;

/// Column widths in points; together they fill the printable width of a
/// 612pt page inside the margins.
const COLUMN_WIDTHS: [f64; 4] = [170.0, 150.0, 90.0, 102.0];

/// Characters kept of the project name.
const NAME_CHARS: usize = 30;

/// Characters kept of the client display form.
const CLIENT_CHARS: usize = 25;

/// Build the one-page report for the given export rows.
pub fn build_projects_document(rows: &[ProjectExportRow]) -> Result<Vec<u8>, lopdf::Error> {
    let mut doc = Document::with_version("1.5");

    let pages_id = doc.new_object_id();
    let font_id = doc.new_object_id();
    let resources_id = doc.new_object_id();
    let content_id = doc.new_object_id();
    let page_id = doc.new_object_id();

    // Font
    doc.objects.insert(
        font_id,
        Object::Dictionary(dictionary! {
            "Type" => "Font",
            "Subtype" => "Type1",
            "BaseFont" => "Helvetica",
        }),
    );

    // Resources
    doc.objects.insert(
        resources_id,
        Object::Dictionary(dictionary! {
            "Font" => dictionary! {
                "F1" => font_id,
            },
        }),
    );

    // Content stream
    let content = page_content(rows);
    doc.objects.insert(
        content_id,
        Object::Stream(Stream::new(dictionary! {}, content.into_bytes())),
    );

    // Page
    doc.objects.insert(
        page_id,
        Object::Dictionary(dictionary! {
            "Type" => "Page",
            "Parent" => pages_id,
            "MediaBox" => vec![0.into(), 0.into(), 612.into(), 792.into()],
            "Resources" => resources_id,
            "Contents" => content_id,
        }),
    );

    // Pages
    doc.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => vec![page_id.into()],
            "Count" => 1,
        }),
    );

    // Catalog
    let catalog_id = doc.add_object(dictionary! {
        "Type" => "Catalog",
        "Pages" => pages_id,
    });
    doc.trailer.set("Root", catalog_id);

    let mut buffer = Vec::new();
    doc.save_to(&mut buffer)?;
    Ok(buffer)
}

/// Display cells for one table row.
fn table_cells(row: &ProjectExportRow) -> [String; 4] {
    [
        truncate_chars(&row.name, NAME_CHARS),
        truncate_chars(&row.client_display(), CLIENT_CHARS),
        row.status.label().to_string(),
        format_currency(row.total_budget, 0),
    ]
}

fn page_content(rows: &[ProjectExportRow]) -> String {
    let table_width: f64 = COLUMN_WIDTHS.iter().sum();
    let table_top = PAGE_HEIGHT - MARGIN - 40.0;
    let mut ops = String::new();

    // Title
    ops.push_str(&format!(
        "BT\n/F1 {TITLE_FONT_SIZE} Tf\n0 0 0 rg\n{MARGIN} {:.1} Td\n({}) Tj\nET\n",
        PAGE_HEIGHT - MARGIN - 12.0,
        escape_pdf_string(TITLE)
    ));

    // Header band
    ops.push_str(&format!(
        "0.5 0.5 0.5 rg\n{MARGIN} {:.1} {table_width} {ROW_HEIGHT} re f\n",
        table_top - ROW_HEIGHT
    ));
    for (column, header) in TABLE_HEADERS.iter().enumerate() {
        ops.push_str(&cell_text(
            header,
            column,
            table_top - ROW_HEIGHT,
            HEADER_FONT_SIZE,
            "1 1 1",
        ));
    }

    // Body rows
    for (index, row) in rows.iter().enumerate() {
        let cell_bottom = table_top - ROW_HEIGHT * (index as f64 + 2.0);
        for (column, text) in table_cells(row).iter().enumerate() {
            ops.push_str(&cell_text(text, column, cell_bottom, BODY_FONT_SIZE, "0 0 0"));
        }
    }

    // Grid
    let line_count = rows.len() + 1;
    let table_bottom = table_top - ROW_HEIGHT * line_count as f64;
    ops.push_str("0 0 0 RG\n1 w\n");
    for line in 0..=line_count {
        let y = table_top - ROW_HEIGHT * line as f64;
        ops.push_str(&format!(
            "{MARGIN} {y:.1} m {:.1} {y:.1} l S\n",
            MARGIN + table_width
        ));
    }
    let mut x = MARGIN;
    ops.push_str(&format!(
        "{x:.1} {table_top:.1} m {x:.1} {table_bottom:.1} l S\n"
    ));
    for width in COLUMN_WIDTHS {
        x += width;
        ops.push_str(&format!(
            "{x:.1} {table_top:.1} m {x:.1} {table_bottom:.1} l S\n"
        ));
    }

    ops
}

/// One centered cell text op. Helvetica's average glyph runs about half
/// the font size, close enough to center short table text.
fn cell_text(text: &str, column: usize, cell_bottom: f64, font_size: f64, color: &str) -> String {
    let col_x: f64 = MARGIN + COLUMN_WIDTHS[..column].iter().sum::<f64>();
    let escaped = escape_pdf_string(text);
    let approx_width = escaped.chars().count() as f64 * font_size * 0.5;
    let x = col_x + ((COLUMN_WIDTHS[column] - approx_width) / 2.0).max(2.0);
    let y = cell_bottom + 6.0;
    format!("BT\n/F1 {font_size} Tf\n{color} rg\n{x:.1} {y:.1} Td\n({escaped}) Tj\nET\n")
}

fn truncate_chars(value: &str, max: usize) -> String {
    value.chars().take(max).collect()
}

fn escape_pdf_string(s: &str) -> String {
    s.chars()
        .map(|c| match c {
            '(' => "\\(".to_string(),
            ')' => "\\)".to_string(),
            '\\' => "\\\\".to_string(),
            c if c.is_ascii() && !c.is_control() => c.to_string(),
            _ => " ".to_string(), // Replace non-ASCII with space for simplicity
        })
        .collect()
}

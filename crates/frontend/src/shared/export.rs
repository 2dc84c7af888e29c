//! Export of rendered HTML tables to CSV files

use std::string::FromUtf8Error;
use thiserror::Error;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Blob, BlobPropertyBag, Element, HtmlAnchorElement, HtmlElement, Url};

/// MIME type of the produced file
pub const CSV_MIME: &str = "text/csv;charset=utf-8";

#[derive(Debug, Error)]
pub enum ExportError {
    #[error("Table not found: #{0}")]
    TableNotFound(String),

    #[error("DOM error: {0}")]
    Dom(String),

    #[error("CSV error: {0}")]
    Csv(#[from] csv::Error),

    #[error("CSV is not valid UTF-8: {0}")]
    Encoding(#[from] FromUtf8Error),
}

fn dom_err(e: JsValue) -> ExportError {
    ExportError::Dom(format!("{:?}", e))
}

/// Cell texts of a table, row by row, as seen at capture time
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TableSnapshot {
    rows: Vec<Vec<String>>,
}

impl TableSnapshot {
    pub fn new(rows: Vec<Vec<String>>) -> Self {
        Self { rows }
    }

    pub fn rows(&self) -> &[Vec<String>] {
        &self.rows
    }

    pub fn is_empty(&self) -> bool {
        self.rows.iter().all(|r| r.is_empty())
    }
}

/// Reads a table by element id
pub trait TableSource {
    fn snapshot(&self, table_id: &str) -> Result<TableSnapshot, ExportError>;
}

/// Hands a finished file to the user
pub trait DownloadSink {
    fn download(&self, filename: &str, mime: &str, content: &str) -> Result<(), ExportError>;
}

/// Removes line breaks, then collapses every run of two or more
/// whitespace characters into one space
///
/// A lone whitespace character is kept as it is, so `"5\u{a0}mg"` and
/// `"a\tb"` pass through untouched.
pub fn clean_cell(text: &str) -> String {
    let mut cleaned = String::with_capacity(text.len());
    let mut run = String::new();

    let flush = |cleaned: &mut String, run: &mut String| {
        match run.chars().count() {
            0 => {}
            1 => cleaned.push_str(run.as_str()),
            _ => cleaned.push(' '),
        }
        run.clear();
    };

    for c in text.chars().filter(|c| *c != '\n' && *c != '\r') {
        if c.is_whitespace() {
            run.push(c);
        } else {
            flush(&mut cleaned, &mut run);
            cleaned.push(c);
        }
    }
    flush(&mut cleaned, &mut run);

    cleaned
}

/// Serializes a snapshot: every field quoted, inner quotes doubled,
/// `,` between cells and `\n` between rows (none after the last row)
///
/// Rows without cells are skipped.
pub fn to_csv(snapshot: &TableSnapshot) -> Result<String, ExportError> {
    let mut writer = csv::WriterBuilder::new()
        .quote_style(csv::QuoteStyle::Always)
        .terminator(csv::Terminator::Any(b'\n'))
        .flexible(true)
        .from_writer(Vec::new());

    for row in snapshot.rows().iter().filter(|r| !r.is_empty()) {
        writer.write_record(row.iter().map(|cell| clean_cell(cell)))?;
    }

    let bytes = writer
        .into_inner()
        .map_err(|e| ExportError::Csv(e.into_error().into()))?;
    let mut content = String::from_utf8(bytes)?;
    if content.ends_with('\n') {
        content.pop();
    }

    Ok(content)
}

pub fn csv_filename(filename: &str) -> String {
    format!("{}.csv", filename)
}

/// Captures `table_id` from `source`, serializes it and hands it to `sink`
/// as `<filename>.csv`
pub fn export_table<S: TableSource, D: DownloadSink>(
    source: &S,
    sink: &D,
    table_id: &str,
    filename: &str,
) -> Result<(), ExportError> {
    let snapshot = source.snapshot(table_id)?;
    let content = to_csv(&snapshot)?;
    let name = csv_filename(filename);

    sink.download(&name, CSV_MIME, &content)?;
    log::info!(
        "Exported #{} ({} rows) to {}",
        table_id,
        snapshot.rows().len(),
        name
    );
    Ok(())
}

/// Exports a table of the current page and starts the browser download
pub fn export_table_to_csv(table_id: &str, filename: &str) -> Result<(), ExportError> {
    export_table(&DomTableSource, &BrowserDownload, table_id, filename)
}

/// Reads `tr` rows and their `th`/`td` cells in document order
pub struct DomTableSource;

impl TableSource for DomTableSource {
    fn snapshot(&self, table_id: &str) -> Result<TableSnapshot, ExportError> {
        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| ExportError::Dom("No document object".to_string()))?;

        let table = document
            .get_element_by_id(table_id)
            .ok_or_else(|| ExportError::TableNotFound(table_id.to_string()))?;

        let rows = table.query_selector_all("tr").map_err(dom_err)?;
        let mut captured = Vec::with_capacity(rows.length() as usize);

        for i in 0..rows.length() {
            let Some(row) = rows.item(i).and_then(|n| n.dyn_into::<Element>().ok()) else {
                continue;
            };
            let cells = row.query_selector_all("td, th").map_err(dom_err)?;
            let mut values = Vec::with_capacity(cells.length() as usize);
            for j in 0..cells.length() {
                if let Some(cell) = cells.item(j).and_then(|n| n.dyn_into::<HtmlElement>().ok()) {
                    values.push(cell.inner_text());
                }
            }
            captured.push(values);
        }

        Ok(TableSnapshot::new(captured))
    }
}

/// Downloads through a temporary hidden anchor pointing at a Blob URL
pub struct BrowserDownload;

impl DownloadSink for BrowserDownload {
    fn download(&self, filename: &str, mime: &str, content: &str) -> Result<(), ExportError> {
        let blob = create_blob(content, mime)?;
        download_blob(&blob, filename)
    }
}

fn create_blob(content: &str, mime: &str) -> Result<Blob, ExportError> {
    let array = js_sys::Array::new();
    array.push(&JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(mime);

    Blob::new_with_str_sequence_and_options(&array, &properties).map_err(dom_err)
}

fn download_blob(blob: &Blob, filename: &str) -> Result<(), ExportError> {
    let window = web_sys::window().ok_or_else(|| ExportError::Dom("No window object".to_string()))?;
    let document = window
        .document()
        .ok_or_else(|| ExportError::Dom("No document object".to_string()))?;
    let body = document
        .body()
        .ok_or_else(|| ExportError::Dom("No body element".to_string()))?;

    let url = Url::create_object_url_with_blob(blob).map_err(dom_err)?;

    let anchor = document
        .create_element("a")
        .map_err(dom_err)?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|_| ExportError::Dom("Failed to cast to anchor".to_string()))?;

    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.set_target("_blank");
    anchor
        .style()
        .set_property("display", "none")
        .map_err(dom_err)?;

    body.append_child(&anchor).map_err(dom_err)?;
    anchor.click();
    let removed = body.remove_child(&anchor).map(|_| ()).map_err(dom_err);

    // the URL is released even if the anchor could not be removed
    Url::revoke_object_url(&url).map_err(dom_err)?;
    removed
}

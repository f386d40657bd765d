//! File exports: CSV, XLSX (through the page's SheetJS bundle) and ZIP
//! archives of images.

use std::io::{Cursor, Write};

use gloo_net::http::Request;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};
use zip::write::SimpleFileOptions;
use zip::{CompressionMethod, ZipWriter};

/// Types that can be exported as table rows.
pub trait Exportable {
    fn headers() -> Vec<&'static str>;

    /// One value per header.
    fn to_row(&self) -> Vec<String>;
}

#[wasm_bindgen]
extern "C" {
    /// Defined in `index.html` on top of SheetJS.
    #[wasm_bindgen(catch, js_name = writeExcelFile)]
    fn write_excel_file(rows: JsValue, sheet: &str, filename: &str) -> Result<(), JsValue>;
}

fn escape_csv_cell(cell: &str) -> String {
    if cell.contains(',') || cell.contains('"') || cell.contains('\n') || cell.contains('\r') {
        format!("\"{}\"", cell.replace('"', "\"\""))
    } else {
        cell.to_string()
    }
}

/// Header plus data rows.
pub fn table_rows<T: Exportable>(data: &[T]) -> Vec<Vec<String>> {
    let mut rows = Vec::with_capacity(data.len() + 1);
    rows.push(T::headers().into_iter().map(str::to_string).collect());
    rows.extend(data.iter().map(Exportable::to_row));
    rows
}

/// CSV text: UTF-8 BOM (so spreadsheet apps pick the encoding), comma
/// separated, quoted where needed, CRLF line ends.
pub fn build_csv<T: Exportable>(data: &[T]) -> String {
    let mut csv = String::from('\u{FEFF}');
    for row in table_rows(data) {
        let cells: Vec<String> = row.iter().map(|cell| escape_csv_cell(cell)).collect();
        csv.push_str(&cells.join(","));
        csv.push_str("\r\n");
    }
    csv
}

pub fn export_csv<T: Exportable>(data: &[T], filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }
    let array = js_sys::Array::new();
    array.push(&JsValue::from_str(&build_csv(data)));

    let properties = BlobPropertyBag::new();
    properties.set_type("text/csv;charset=utf-8;");
    let blob = Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;
    download_blob(&blob, filename)
}

pub fn export_xlsx<T: Exportable>(data: &[T], sheet: &str, filename: &str) -> Result<(), String> {
    if data.is_empty() {
        return Err("Nothing to export".to_string());
    }
    let rows = serde_wasm_bindgen::to_value(&table_rows(data))
        .map_err(|e| format!("Failed to convert rows: {}", e))?;
    write_excel_file(rows, sheet, filename).map_err(|e| format!("Excel export failed: {:?}", e))
}

/// Deflated ZIP of `(name, bytes)` entries. Repeated names get a numeric
/// suffix so no entry is shadowed.
pub fn build_zip(files: &[(String, Vec<u8>)]) -> Result<Vec<u8>, String> {
    let mut writer = ZipWriter::new(Cursor::new(Vec::new()));
    let options = SimpleFileOptions::default().compression_method(CompressionMethod::Deflated);
    let mut used: Vec<String> = Vec::new();

    for (name, bytes) in files {
        let name = unique_name(name, &used);
        writer
            .start_file(name.as_str(), options)
            .map_err(|e| format!("Failed to add {}: {}", name, e))?;
        writer
            .write_all(bytes)
            .map_err(|e| format!("Failed to write {}: {}", name, e))?;
        used.push(name);
    }

    let cursor = writer
        .finish()
        .map_err(|e| format!("Failed to finish archive: {}", e))?;
    Ok(cursor.into_inner())
}

fn unique_name(name: &str, used: &[String]) -> String {
    if !used.iter().any(|u| u == name) {
        return name.to_string();
    }
    let (stem, ext) = match name.rsplit_once('.') {
        Some((stem, ext)) if !stem.is_empty() => (stem, format!(".{}", ext)),
        _ => (name, String::new()),
    };
    (1..)
        .map(|n| format!("{}-{}{}", stem, n, ext))
        .find(|candidate| !used.iter().any(|u| u == candidate))
        .unwrap_or_else(|| name.to_string())
}

async fn fetch_bytes(url: &str) -> Result<Vec<u8>, String> {
    let response = Request::get(url)
        .send()
        .await
        .map_err(|e| format!("Failed to fetch {}: {}", url, e))?;
    if !response.ok() {
        return Err(format!("Failed to fetch {}: {}", url, response.status()));
    }
    response
        .binary()
        .await
        .map_err(|e| format!("Failed to read {}: {}", url, e))
}

/// Downloads every `(name, url)` and saves them as one archive.
///
/// Files that fail to download are skipped; returns how many were packed.
pub async fn download_zip(files: Vec<(String, String)>, filename: &str) -> Result<usize, String> {
    let mut entries = Vec::with_capacity(files.len());
    for (name, url) in files {
        match fetch_bytes(&url).await {
            Ok(bytes) => entries.push((name, bytes)),
            Err(e) => log::warn!("zip export: {}", e),
        }
    }
    if entries.is_empty() {
        return Err("No files could be downloaded".to_string());
    }

    let archive = build_zip(&entries)?;
    let array = js_sys::Array::new();
    array.push(&js_sys::Uint8Array::from(archive.as_slice()));
    let properties = BlobPropertyBag::new();
    properties.set_type("application/zip");
    let blob = Blob::new_with_u8_array_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))?;
    download_blob(&blob, filename)?;
    Ok(entries.len())
}

/// Saves `blob` through a temporary link.
fn download_blob(blob: &Blob, filename: &str) -> Result<(), String> {
    let window = web_sys::window().ok_or("No window object")?;
    let document = window.document().ok_or("No document object")?;

    let url = Url::create_object_url_with_blob(blob)
        .map_err(|e| format!("Failed to create object URL: {:?}", e))?;

    let anchor = document
        .create_element("a")
        .map_err(|e| format!("Failed to create anchor: {:?}", e))?
        .dyn_into::<HtmlAnchorElement>()
        .map_err(|e| format!("Failed to cast to anchor: {:?}", e))?;
    anchor.set_href(&url);
    anchor.set_download(filename);

    let body = document.body().ok_or("No body element")?;
    body.append_child(&anchor)
        .map_err(|e| format!("Failed to append anchor: {:?}", e))?;
    anchor.click();
    body.remove_child(&anchor)
        .map_err(|e| format!("Failed to remove anchor: {:?}", e))?;

    Url::revoke_object_url(&url).map_err(|e| format!("Failed to revoke URL: {:?}", e))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Read;

    struct Row {
        email: &'static str,
        note: &'static str,
    }

    impl Exportable for Row {
        fn headers() -> Vec<&'static str> {
            vec!["Email", "Note"]
        }

        fn to_row(&self) -> Vec<String> {
            vec![self.email.to_string(), self.note.to_string()]
        }
    }

    #[test]
    fn csv_has_bom_header_and_crlf() {
        let csv = build_csv(&[Row {
            email: "a@shop.test",
            note: "vip",
        }]);
        assert_eq!(csv, "\u{FEFF}Email,Note\r\na@shop.test,vip\r\n");
    }

    #[test]
    fn csv_quotes_separators_quotes_and_newlines() {
        let csv = build_csv(&[Row {
            email: "b@shop.test",
            note: "said \"hi\", twice\nthen left",
        }]);
        assert!(csv.ends_with("b@shop.test,\"said \"\"hi\"\", twice\nthen left\"\r\n"));
    }

    #[test]
    fn zip_keeps_every_entry() {
        let files = vec![
            ("a.png".to_string(), vec![1, 2, 3]),
            ("a.png".to_string(), vec![4]),
            ("notes".to_string(), b"hello".to_vec()),
        ];
        let bytes = build_zip(&files).unwrap();

        let mut archive = zip::ZipArchive::new(Cursor::new(bytes)).unwrap();
        assert_eq!(archive.len(), 3);
        let mut names: Vec<String> = archive.file_names().map(str::to_string).collect();
        names.sort();
        assert_eq!(names, vec!["a-1.png", "a.png", "notes"]);

        let mut content = String::new();
        archive
            .by_name("notes")
            .unwrap()
            .read_to_string(&mut content)
            .unwrap();
        assert_eq!(content, "hello");
    }
}

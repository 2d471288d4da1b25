//! File downloads produced by the backend export endpoint.
//!
//! The server renders the file (CSV with BOM or pretty JSON) and names it;
//! the browser only turns the response body into a Blob and clicks a
//! temporary link.

use gloo_net::http::Request;
use wasm_bindgen::JsCast;
use web_sys::{Blob, BlobPropertyBag, HtmlAnchorElement, Url};

use super::api_utils::{api_url, error_message, with_query};
use super::list_utils::ListControls;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Json,
}

impl ExportFormat {
    pub fn as_str(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "csv",
            ExportFormat::Json => "json",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            ExportFormat::Csv => "CSV",
            ExportFormat::Json => "JSON",
        }
    }
}

/// `attachment; filename="tickets_export_2025-04-15.csv"` → the file name.
pub fn filename_from_disposition(header: &str) -> Option<String> {
    let start = header.find("filename=")? + "filename=".len();
    let name = header[start..].split(';').next()?.trim().trim_matches('"');
    if name.is_empty() {
        None
    } else {
        Some(name.to_string())
    }
}

/// Export address for `entity` with the page's current search, filters and
/// sort. Paging is left out: the whole filtered set is exported.
pub fn export_path(entity: &str, controls: &ListControls, format: ExportFormat) -> String {
    let mut params = controls.request_params();
    params.insert("format".to_string(), format.as_str().to_string());
    with_query(&format!("/api/export/{}", entity), &params)
}

/// Fetch the rendered file and hand it to the browser. An empty selection
/// comes back as 422 with `No data available to export`.
pub async fn download_export(entity: &str, controls: &ListControls, format: ExportFormat) -> Result<(), String> {
    let path = export_path(entity, controls, format);
    let response = Request::get(&api_url(&path))
        .send()
        .await
        .map_err(|e| format!("Failed to send request: {}", e))?;

    let status = response.status();
    if !response.ok() {
        let body = response.text().await.unwrap_or_default();
        return Err(error_message(status, &body));
    }

    let filename = response
        .headers()
        .get("content-disposition")
        .and_then(|h| filename_from_disposition(&h))
        .unwrap_or_else(|| format!("{}_export.{}", entity, format.as_str()));
    let content_type = response
        .headers()
        .get("content-type")
        .unwrap_or_else(|| "application/octet-stream".to_string());
    let body = response
        .text()
        .await
        .map_err(|e| format!("Failed to read export: {}", e))?;

    let blob = create_blob(&body, &content_type)?;
    download_blob(&blob, &filename)?;
    log::info!("downloaded {}", filename);
    Ok(())
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Some(window) = web_sys::window() {
        let _ = window.alert_with_message(message);
    }
}

fn create_blob(content: &str, content_type: &str) -> Result<Blob, String> {
    let array = js_sys::Array::new();
    array.push(&wasm_bindgen::JsValue::from_str(content));

    let properties = BlobPropertyBag::new();
    properties.set_type(content_type);

    Blob::new_with_str_sequence_and_options(&array, &properties)
        .map_err(|e| format!("Failed to create blob: {:?}", e))
}

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
    anchor
        .style()
        .set_property("display", "none")
        .map_err(|e| format!("Failed to set style: {:?}", e))?;

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

    #[test]
    fn test_filename_from_disposition() {
        assert_eq!(
            filename_from_disposition("attachment; filename=\"tickets_export_2025-04-15.csv\""),
            Some("tickets_export_2025-04-15.csv".to_string())
        );
        assert_eq!(
            filename_from_disposition("attachment; filename=a.json; size=3"),
            Some("a.json".to_string())
        );
        assert_eq!(filename_from_disposition("inline"), None);
    }

    #[test]
    fn test_export_path_carries_filters_but_not_paging() {
        let mut controls = ListControls::new("newest", true, 10);
        controls.set_search("smith");
        controls.set_filter("status", "active");
        controls.set_filter("type", "all-types");
        controls.page = 3;
        let path = export_path("tickets", &controls, ExportFormat::Json);
        assert_eq!(
            path,
            "/api/export/tickets?ascending=true&format=json&search=smith&sort=newest&status=active"
        );
    }
}

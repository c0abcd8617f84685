//! CSV export: build the text, then hand it to the browser as a download.

/// Assemble a CSV document. Fields containing commas, quotes or newlines are
/// quoted; everything else passes through untouched.
pub fn to_csv(headers: &[&str], rows: &[Vec<String>]) -> String {
    let mut out = String::new();
    push_row(&mut out, headers.iter().map(|h| h.to_string()));
    for row in rows {
        push_row(&mut out, row.iter().cloned());
    }
    out
}

fn push_row(out: &mut String, fields: impl Iterator<Item = String>) {
    let mut first = true;
    for field in fields {
        if !first {
            out.push(',');
        }
        first = false;
        out.push_str(&escape(&field));
    }
    out.push('\n');
}

fn escape(field: &str) -> String {
    if field.contains(',') || field.contains('"') || field.contains('\n') {
        format!("\"{}\"", field.replace('"', "\"\""))
    } else {
        field.to_string()
    }
}

/// Trigger a browser download of `content` as `filename`.
#[cfg(target_arch = "wasm32")]
pub fn download(filename: &str, content: &str) {
    use wasm_bindgen::JsCast;

    let result = (|| -> Result<(), wasm_bindgen::JsValue> {
        let parts = js_sys::Array::new();
        parts.push(&wasm_bindgen::JsValue::from_str(content));
        let options = web_sys::BlobPropertyBag::new();
        options.set_type("text/csv");
        let blob = web_sys::Blob::new_with_str_sequence_and_options(&parts, &options)?;
        let url = web_sys::Url::create_object_url_with_blob(&blob)?;

        let document = web_sys::window()
            .and_then(|w| w.document())
            .ok_or_else(|| wasm_bindgen::JsValue::from_str("no document"))?;
        let anchor: web_sys::HtmlAnchorElement = document.create_element("a")?.unchecked_into();
        anchor.set_href(&url);
        anchor.set_download(filename);
        anchor.click();
        web_sys::Url::revoke_object_url(&url)?;
        Ok(())
    })();

    if let Err(err) = result {
        tracing::error!("csv download failed: {err:?}");
    }
}

#[cfg(not(target_arch = "wasm32"))]
pub fn download(filename: &str, _content: &str) {
    tracing::debug!("csv download skipped outside the browser: {filename}");
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_plain_fields_pass_through() {
        let csv = to_csv(
            &["Tag ID", "Name"],
            &[vec!["C001".to_string(), "Bahati".to_string()]],
        );
        assert_eq!(csv, "Tag ID,Name\nC001,Bahati\n");
    }

    #[test]
    fn test_commas_and_quotes_are_escaped() {
        let csv = to_csv(
            &["Notes"],
            &[
                vec!["calm, easy milker".to_string()],
                vec!["tag reads \"C2\"".to_string()],
            ],
        );
        assert_eq!(csv, "Notes\n\"calm, easy milker\"\n\"tag reads \"\"C2\"\"\"\n");
    }

    #[test]
    fn test_empty_rows_yield_header_only() {
        assert_eq!(to_csv(&["A", "B"], &[]), "A,B\n");
    }
}

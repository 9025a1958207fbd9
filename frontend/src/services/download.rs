use anyhow::{anyhow, Result};
use wasm_bindgen::{JsCast, JsValue};

/// Offers an in-memory HTML document as a browser file download. The file
/// never leaves the client: a blob object URL is attached to a transient
/// anchor element and clicked.
pub fn download_html(filename: &str, html: &str) -> Result<()> {
    let window = web_sys::window().ok_or_else(|| anyhow!("window unavailable"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow!("document unavailable"))?;

    let parts = js_sys::Array::of1(&JsValue::from_str(html));
    let options = web_sys::BlobPropertyBag::new();
    options.set_type("text/html;charset=utf-8");
    let blob =
        web_sys::Blob::new_with_str_sequence_and_options(&parts, &options).map_err(js_error)?;
    let url = web_sys::Url::create_object_url_with_blob(&blob).map_err(js_error)?;

    let anchor: web_sys::HtmlAnchorElement = document
        .create_element("a")
        .map_err(js_error)?
        .dyn_into()
        .map_err(|_| anyhow!("anchor cast failed"))?;
    anchor.set_href(&url);
    anchor.set_download(filename);
    anchor.click();

    web_sys::Url::revoke_object_url(&url).map_err(js_error)?;
    Ok(())
}

fn js_error(value: JsValue) -> anyhow::Error {
    anyhow!(value
        .as_string()
        .unwrap_or_else(|| "browser error".to_string()))
}

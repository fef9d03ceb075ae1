//! Thin wrappers over the `web-sys` calls the views need.

use crate::config::PRINT_DELAY_MS;
use crate::error::ClientError;
use gloo_timers::future::TimeoutFuture;
use tracing::warn;
use wasm_bindgen::JsCast;
use wasm_bindgen_futures::JsFuture;
use web_sys::{Document, HtmlElement, Window};

fn window() -> Result<Window, ClientError> {
    web_sys::window().ok_or_else(|| ClientError::Browser("no window available".into()))
}

fn document() -> Result<Document, ClientError> {
    window()?
        .document()
        .ok_or_else(|| ClientError::Browser("no document available".into()))
}

fn body() -> Result<HtmlElement, ClientError> {
    document()?
        .body()
        .ok_or_else(|| ClientError::Browser("document has no body".into()))
}

/// Sets a CSS custom property on `<html>`.
pub fn set_root_property(name: &str, value: &str) -> Result<(), ClientError> {
    let root: HtmlElement = document()?
        .document_element()
        .ok_or_else(|| ClientError::Browser("document has no root element".into()))?
        .dyn_into()
        .map_err(|_| ClientError::Browser("root element is not an HTML element".into()))?;
    root.style().set_property(name, value)?;
    Ok(())
}

pub fn lock_body_scroll(locked: bool) -> Result<(), ClientError> {
    let style = body()?.style();
    if locked {
        style.set_property("overflow", "hidden")?;
    } else {
        style.remove_property("overflow")?;
    }
    Ok(())
}

pub fn current_href() -> Result<String, ClientError> {
    Ok(window()?.location().href()?)
}

pub fn open_popup(url: &str) -> Result<(), ClientError> {
    window()?.open_with_url_and_target_and_features(url, "_blank", "width=600,height=400")?;
    Ok(())
}

pub async fn copy_text(text: &str) -> Result<(), ClientError> {
    let promise = window()?.navigator().clipboard().write_text(text);
    JsFuture::from(promise).await?;
    Ok(())
}

/// Enters fullscreen on `element_id`, or leaves it. Returns whether
/// fullscreen was requested.
pub fn toggle_fullscreen(element_id: &str) -> Result<bool, ClientError> {
    let document = document()?;
    if document.fullscreen_element().is_some() {
        document.exit_fullscreen();
        return Ok(false);
    }
    let element = document
        .get_element_by_id(element_id)
        .ok_or_else(|| ClientError::Browser(format!("no element #{}", element_id)))?;
    element.request_fullscreen()?;
    Ok(true)
}

pub fn scroll_to_top(selector: &str) -> Result<(), ClientError> {
    if let Some(element) = document()?.query_selector(selector)? {
        element.set_scroll_top(0);
    }
    Ok(())
}

/// Opens `html` in a new window, prints it and closes the window.
pub fn print_html(html: &str) -> Result<(), ClientError> {
    let popup = window()?
        .open_with_url_and_target("", "_blank")?
        .ok_or_else(|| ClientError::Browser("the print window was blocked".into()))?;
    let root = popup
        .document()
        .and_then(|doc| doc.document_element())
        .ok_or_else(|| ClientError::Browser("print window has no document".into()))?;
    root.set_inner_html(html);
    popup.focus()?;

    wasm_bindgen_futures::spawn_local(async move {
        TimeoutFuture::new(PRINT_DELAY_MS).await;
        if let Err(err) = popup.print() {
            warn!(error = ?err, "print failed");
        }
        if let Err(err) = popup.close() {
            warn!(error = ?err, "could not close print window");
        }
    });
    Ok(())
}

use crate::constants::{TOAST_DESCRIPTION_ID, TOAST_ID, TOAST_TITLE_ID, TOAST_VISIBLE_MS};
use crate::dom;
use std::cell::Cell;
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys as web;

thread_local! {
    // Pending auto-hide for the toast currently on screen.
    static HIDE_TIMER: Cell<Option<i32>> = Cell::new(None);
}

#[inline]
pub fn hide(document: &web::Document) {
    if let Some(el) = document.get_element_by_id(TOAST_ID) {
        let _ = el.set_attribute("style", "display:none");
    }
}

/// Show a transient notice; it hides itself `TOAST_VISIBLE_MS` after the most
/// recent `show`.
pub fn show(document: &web::Document, title: &str, description: &str) {
    dom::set_text(document, TOAST_TITLE_ID, title);
    dom::set_text(document, TOAST_DESCRIPTION_ID, description);
    let Some(el) = document.get_element_by_id(TOAST_ID) else {
        log::info!("[toast] {} - {}", title, description);
        return;
    };
    let _ = el.set_attribute("style", "");

    let Some(window) = web::window() else {
        return;
    };
    if let Some(handle) = HIDE_TIMER.with(|t| t.take()) {
        window.clear_timeout_with_handle(handle);
    }
    let doc = document.clone();
    let hide_cb = Closure::once_into_js(move || {
        HIDE_TIMER.with(|t| t.set(None));
        hide(&doc);
    });
    match window.set_timeout_with_callback_and_timeout_and_arguments_0(
        hide_cb.unchecked_ref::<js_sys::Function>(),
        TOAST_VISIBLE_MS,
    ) {
        Ok(handle) => HIDE_TIMER.with(|t| t.set(Some(handle))),
        Err(e) => log::warn!("[toast] setTimeout failed: {:?}", e),
    }
}

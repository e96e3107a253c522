#![cfg(target_arch = "wasm32")]
use paint_core::{restore_session, ConfigStore};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use web_sys as web;

mod actions;
mod constants;
mod dom;
mod labels;
mod preview;
mod storage;
mod toast;
mod widgets;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(constants::LOG_LEVEL).ok();
    log::info!("paint-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let location = window.location();
    let query = location.search().unwrap_or_default();
    let origin = location
        .origin()
        .map_err(|e| anyhow::anyhow!("location.origin: {:?}", e))?;

    let storage = storage::open(&window);
    let restored = restore_session(&query, &*storage);
    log::info!(
        "[session] source={:?} issues={}",
        restored.source,
        restored.issues.len()
    );

    let store = Rc::new(RefCell::new(ConfigStore::new(restored.config.clone())));

    let built = [
        widgets::build_color_grid(&document, &store),
        widgets::build_finish_list(&document, &store),
        widgets::build_environment_grid(&document, &store),
    ];
    for e in built.into_iter().filter_map(Result::err) {
        log::error!("[dom] widget setup failed: {:?}", e);
    }
    widgets::refresh_selection(&document, store.borrow().config());

    {
        let mut s = store.borrow_mut();
        s.attach_renderer(preview::DomPreview::new(document.clone()));
        let doc = document.clone();
        s.subscribe(move |config| widgets::refresh_selection(&doc, config));
    }

    actions::wire_actions(actions::ActionWiring {
        document: document.clone(),
        store,
        storage: Rc::new(RefCell::new(storage)),
        share_base: origin,
    });

    if let Some((title, description)) = labels::restore_notice(&restored) {
        toast::show(&document, &title, &description);
    }
    Ok(())
}

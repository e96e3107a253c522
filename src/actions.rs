//! Quick actions: save, share, reset, random.

use crate::constants::*;
use crate::dom;
use crate::labels;
use crate::toast;
use paint_core::{save, to_share_link, ConfigStore, Storage};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

pub struct ActionWiring {
    pub document: web::Document,
    pub store: Rc<RefCell<ConfigStore>>,
    pub storage: Rc<RefCell<Box<dyn Storage>>>,
    /// Base for share links, normally `location.origin`.
    pub share_base: String,
}

fn handle_save(document: &web::Document, store: &ConfigStore, storage: &mut dyn Storage) {
    match save(storage, &store.snapshot()) {
        Ok(_) => toast::show(document, labels::SAVED_TITLE, labels::SAVED_DESCRIPTION),
        Err(e) => {
            log::error!("[storage] save failed: {}", e);
            toast::show(document, labels::SAVE_FAILED_TITLE, &e.to_string());
        }
    }
}

fn handle_share(document: &web::Document, link: String) {
    log::info!("[share] {}", link);
    let Some(window) = web::window() else {
        return;
    };
    let promise = window.navigator().clipboard().write_text(&link);
    let document = document.clone();
    spawn_local(async move {
        match JsFuture::from(promise).await {
            Ok(_) => toast::show(&document, labels::SHARED_TITLE, labels::SHARED_DESCRIPTION),
            Err(e) => {
                log::error!("[share] clipboard write failed: {:?}", e);
                toast::show(&document, labels::SHARE_FAILED_TITLE, &link);
            }
        }
    });
}

pub fn wire_actions(w: ActionWiring) {
    let ActionWiring {
        document,
        store,
        storage,
        share_base,
    } = w;

    {
        let doc = document.clone();
        let store = store.clone();
        dom::add_click_listener(&document, SAVE_BUTTON_ID, move || {
            let store = store.borrow();
            let mut storage = storage.borrow_mut();
            handle_save(&doc, &store, &mut **storage);
        });
    }
    {
        let doc = document.clone();
        let store = store.clone();
        dom::add_click_listener(&document, SHARE_BUTTON_ID, move || {
            let link = to_share_link(&store.borrow().snapshot(), &share_base);
            handle_share(&doc, link);
        });
    }
    {
        let store = store.clone();
        dom::add_click_listener(&document, RESET_BUTTON_ID, move || {
            store.borrow_mut().reset();
        });
    }
    dom::add_click_listener(&document, RANDOM_BUTTON_ID, move || {
        store.borrow_mut().randomize();
    });
}

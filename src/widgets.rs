//! Catalog widgets: color swatch grid, finish cards and environment cards.
//!
//! Each option becomes a clickable element with a stable id so the selection
//! highlight can be refreshed from a plain `&Configuration`.

use crate::constants::*;
use crate::dom;
use crate::labels::option_element_id;
use paint_core::{ConfigStore, Configuration, Environment, Finish, COLOR_CATALOG};
use std::cell::RefCell;
use std::rc::Rc;
use web_sys as web;

fn container(document: &web::Document, id: &str) -> Option<web::Element> {
    let el = document.get_element_by_id(id);
    if el.is_none() {
        log::warn!("[dom] missing #{}; options not built", id);
    }
    el
}

fn card(
    document: &web::Document,
    id: &str,
    class: &str,
    title: &str,
    description: Option<&str>,
) -> anyhow::Result<web::Element> {
    let el = dom::create(document, "button", class)?;
    el.set_id(id);
    let _ = el.set_attribute("type", "button");
    let name = dom::create(document, "span", "option-name")?;
    name.set_text_content(Some(title));
    dom::append(&el, &name)?;
    if let Some(text) = description {
        let desc = dom::create(document, "span", "option-description")?;
        desc.set_text_content(Some(text));
        dom::append(&el, &desc)?;
    }
    Ok(el)
}

pub fn build_color_grid(
    document: &web::Document,
    store: &Rc<RefCell<ConfigStore>>,
) -> anyhow::Result<()> {
    let Some(grid) = container(document, COLOR_GRID_ID) else {
        return Ok(());
    };
    for option in COLOR_CATALOG.iter() {
        let hex = option.value.to_hex();
        let el = card(
            document,
            &option_element_id(COLOR_OPTION_PREFIX, &hex),
            "color-option",
            option.name,
            None,
        )?;
        let swatch = dom::create(document, "span", "swatch")?;
        dom::set_background(&swatch, &hex);
        el.prepend_with_node_1(&swatch)
            .map_err(|e| anyhow::anyhow!("prepend swatch: {:?}", e))?;

        let store = store.clone();
        let color = option.value;
        dom::on_click(&el, move || store.borrow_mut().set_color(color));
        dom::append(&grid, &el)?;
    }
    Ok(())
}

pub fn build_finish_list(
    document: &web::Document,
    store: &Rc<RefCell<ConfigStore>>,
) -> anyhow::Result<()> {
    let Some(list) = container(document, FINISH_LIST_ID) else {
        return Ok(());
    };
    for finish in Finish::ALL {
        let el = card(
            document,
            &option_element_id(FINISH_OPTION_PREFIX, finish.id()),
            "finish-option",
            finish.display_name(),
            Some(finish.description()),
        )?;
        let store = store.clone();
        dom::on_click(&el, move || store.borrow_mut().set_finish(finish));
        dom::append(&list, &el)?;
    }
    Ok(())
}

pub fn build_environment_grid(
    document: &web::Document,
    store: &Rc<RefCell<ConfigStore>>,
) -> anyhow::Result<()> {
    let Some(grid) = container(document, ENVIRONMENT_GRID_ID) else {
        return Ok(());
    };
    for env in Environment::ALL {
        let el = card(
            document,
            &option_element_id(ENVIRONMENT_OPTION_PREFIX, env.id()),
            "environment-option",
            env.display_name(),
            Some(env.description()),
        )?;
        let _ = el.set_attribute("data-preset", env.renderer_preset());
        let store = store.clone();
        dom::on_click(&el, move || store.borrow_mut().set_environment(env));
        dom::append(&grid, &el)?;
    }
    Ok(())
}

/// Mark exactly the configured options as selected.
pub fn refresh_selection(document: &web::Document, config: &Configuration) {
    for option in COLOR_CATALOG.iter() {
        let id = option_element_id(COLOR_OPTION_PREFIX, &option.value.to_hex());
        dom::set_class(document, &id, SELECTED_CLASS, option.value == config.color);
    }
    for finish in Finish::ALL {
        let id = option_element_id(FINISH_OPTION_PREFIX, finish.id());
        dom::set_class(document, &id, SELECTED_CLASS, finish == config.finish);
    }
    for env in Environment::ALL {
        let id = option_element_id(ENVIRONMENT_OPTION_PREFIX, env.id());
        dom::set_class(document, &id, SELECTED_CLASS, env == config.environment);
    }
}

use crate::constants::*;
use crate::dom;
use crate::labels;
use paint_core::{RenderSnapshot, Renderer};
use web_sys as web;

/// Stand-in renderer while the 3D view is disabled: fills the "Current
/// Configuration" card and tags the viewport with the environment preset and
/// material values so CSS can style the backdrop.
pub struct DomPreview {
    document: web::Document,
}

impl DomPreview {
    pub fn new(document: web::Document) -> Self {
        Self { document }
    }
}

impl Renderer for DomPreview {
    fn render(&mut self, snapshot: &RenderSnapshot) {
        let doc = &self.document;
        let hex = snapshot.color.to_hex();
        if let Some(swatch) = doc.get_element_by_id(SUMMARY_SWATCH_ID) {
            dom::set_background(&swatch, &hex);
        }
        let config = snapshot.configuration();
        dom::set_text(doc, SUMMARY_COLOR_ID, &labels::summary_color(&config));
        dom::set_text(doc, SUMMARY_FINISH_ID, &labels::summary_finish(&config));
        dom::set_text(
            doc,
            SUMMARY_ENVIRONMENT_ID,
            &labels::summary_environment(&config),
        );
        if let Some(viewport) = doc.get_element_by_id(VIEWPORT_ID) {
            let m = &snapshot.material;
            let _ = viewport.set_attribute("data-environment", snapshot.environment_preset);
            let _ = viewport.set_attribute("data-metalness", &format!("{:.2}", m.reflectivity));
            let _ = viewport.set_attribute("data-roughness", &format!("{:.2}", m.roughness()));
            let _ = viewport.set_attribute(
                "data-env-intensity",
                &format!("{:.2}", m.environment_reflection_strength),
            );
        }
    }
}

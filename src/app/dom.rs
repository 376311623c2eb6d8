use leptos::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::HtmlElement;

use crate::sections::{PageLayout, SectionBounds, SectionId};

/// Reads section geometry from the rendered document.
#[derive(Debug, Clone, Copy, Default)]
pub struct DomLayout;

impl PageLayout for DomLayout {
    fn section_bounds(&self, id: SectionId) -> Option<SectionBounds> {
        let el = document()
            .get_element_by_id(id.as_str())?
            .dyn_into::<HtmlElement>()
            .ok()?;
        Some(SectionBounds {
            top: el.offset_top() as f64,
            height: el.offset_height() as f64,
        })
    }

    fn viewport_height(&self) -> f64 {
        window()
            .inner_height()
            .ok()
            .and_then(|h| h.as_f64())
            .unwrap_or_default()
    }

    fn document_height(&self) -> f64 {
        document()
            .body()
            .map(|body| body.offset_height() as f64)
            .unwrap_or_default()
    }
}

/// Scrolls a section into view; smoothing comes from `scroll-behavior` in CSS.
pub fn scroll_to_section(id: SectionId) {
    if let Some(el) = document().get_element_by_id(id.as_str()) {
        el.scroll_into_view();
    } else {
        log::warn!("no element for section {id}");
    }
}

pub fn scroll_to_offset(y: f64) {
    window().scroll_to_with_x_and_y(0.0, y);
}

/// Top edge of a section relative to the viewport.
pub fn section_viewport_top(id: SectionId) -> Option<f64> {
    document()
        .get_element_by_id(id.as_str())
        .map(|el| el.get_bounding_client_rect().top())
}

//! Browser bindings
//!
//! Implements the DOM traits for `web_sys` handles and registers the page
//! behaviors with the browser's event dispatcher.

use std::rc::Rc;

use log::{error, info};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{Document, Element, Event, EventTarget, ScrollBehavior, ScrollIntoViewOptions, Window};

use crate::config::PageConfig;
use crate::dom::{DomDocument, DomElement, DomEvent};
use crate::error::{NavError, NavResult};
use crate::logging;
use crate::page::PageBehaviors;

fn dom_error(err: JsValue) -> NavError {
    NavError::Dom(err.as_string().unwrap_or_else(|| format!("{:?}", err)))
}

impl DomElement for Element {
    fn has_class(&self, class: &str) -> bool {
        self.class_list().contains(class)
    }

    fn add_class(&self, class: &str) -> NavResult<()> {
        self.class_list().add_1(class).map_err(dom_error)
    }

    fn remove_class(&self, class: &str) -> NavResult<()> {
        self.class_list().remove_1(class).map_err(dom_error)
    }

    fn toggle_class(&self, class: &str) -> NavResult<bool> {
        self.class_list().toggle(class).map_err(dom_error)
    }

    fn attribute(&self, name: &str) -> Option<String> {
        self.get_attribute(name)
    }

    fn query_selector(&self, selector: &str) -> NavResult<Option<Self>> {
        Element::query_selector(self, selector).map_err(|_| NavError::InvalidSelector(selector.to_string()))
    }

    fn viewport_top(&self) -> f64 {
        self.get_bounding_client_rect().top()
    }

    fn scroll_into_view_smooth(&self) {
        let options = ScrollIntoViewOptions::new();
        options.set_behavior(ScrollBehavior::Smooth);
        self.scroll_into_view_with_scroll_into_view_options(&options);
    }
}

impl DomEvent for Event {
    fn prevent_default(&self) {
        Event::prevent_default(self);
    }
}

/// The page's document together with its window
#[derive(Debug, Clone)]
pub struct WebDocument {
    window: Window,
    document: Document,
}

impl WebDocument {
    /// The document of the global `window`
    pub fn current() -> NavResult<Self> {
        let window = web_sys::window().ok_or_else(|| NavError::Dom("no global window".to_string()))?;
        let document = window
            .document()
            .ok_or_else(|| NavError::Dom("window has no document".to_string()))?;
        Ok(Self { window, document })
    }

    pub fn window(&self) -> &Window {
        &self.window
    }
}

impl DomDocument for WebDocument {
    type Element = Element;

    fn element_by_id(&self, id: &str) -> Option<Element> {
        self.document.get_element_by_id(id)
    }

    fn query_selector_all(&self, selector: &str) -> NavResult<Vec<Element>> {
        let nodes = self
            .document
            .query_selector_all(selector)
            .map_err(|_| NavError::InvalidSelector(selector.to_string()))?;
        Ok((0..nodes.length())
            .filter_map(|i| nodes.item(i))
            .filter_map(|node| node.dyn_into::<Element>().ok())
            .collect())
    }

    fn viewport_height(&self) -> NavResult<f64> {
        self.window
            .inner_height()
            .map_err(dom_error)?
            .as_f64()
            .ok_or_else(|| NavError::Dom("innerHeight is not a number".to_string()))
    }
}

/// Register `handler` for `event` on `target` for the lifetime of the page
fn listen<F>(target: &EventTarget, event: &str, handler: F) -> NavResult<()>
where
    F: FnMut(Event) + 'static,
{
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(event, closure.as_ref().unchecked_ref())
        .map_err(dom_error)?;
    closure.forget();
    Ok(())
}

/// Bind every behavior to the current page
pub fn attach(config: &PageConfig) -> NavResult<()> {
    let document = WebDocument::current()?;
    let window = document.window().clone();
    let behaviors = Rc::new(PageBehaviors::bind(document, config)?);

    let control = behaviors.toggle_control().clone();
    let page = Rc::clone(&behaviors);
    listen(&control, "click", move |_event| {
        if let Err(e) = page.on_toggle_click() {
            error!("menu toggle failed: {}", e);
        }
    })?;

    for (index, link) in behaviors.links().iter().enumerate() {
        let page = Rc::clone(&behaviors);
        listen(link, "click", move |event| {
            if let Err(e) = page.on_link_click(index, &event) {
                error!("link {} failed: {}", index, e);
            }
        })?;
    }

    let page = Rc::clone(&behaviors);
    listen(&window, "scroll", move |_event| {
        if let Err(e) = page.on_scroll() {
            error!("scroll reveal failed: {}", e);
        }
    })?;

    info!("attached to page");
    Ok(())
}

/// Entry point run when the module is instantiated.
///
/// With the `autostart` feature disabled, call `attachWithConfig` from the
/// page instead so the behaviors are not bound twice.
#[cfg_attr(feature = "autostart", wasm_bindgen(start))]
#[cfg_attr(not(feature = "autostart"), wasm_bindgen)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::init();
    attach(&PageConfig::default())?;
    Ok(())
}

/// Bind the behaviors using identifiers from a JS object, e.g.
/// `attachWithConfig({ reveal_section_id: "features" })`
#[wasm_bindgen(js_name = "attachWithConfig")]
pub fn attach_with_config(config: JsValue) -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    logging::init();
    let config: PageConfig = if config.is_undefined() || config.is_null() {
        PageConfig::default()
    } else {
        serde_wasm_bindgen::from_value(config)?
    };
    attach(&config)?;
    Ok(())
}

/// Get version information
#[wasm_bindgen]
pub fn version() -> String {
    env!("CARGO_PKG_VERSION").to_string()
}

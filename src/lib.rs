//! page-nav - navigation and reveal behaviors for a static page
//!
//! Three independent behaviors, each driven by one platform event:
//! - [`MenuToggle`]: flips the `show` class on the navigation list when the
//!   `#menu-toggle` control is clicked
//! - [`SmoothScrollRouter`]: turns clicks on `a[href^="#"]` links into smooth
//!   scrolls to their targets and closes the menu
//! - [`ScrollRevealWatcher`]: adds `visible` to `#workflow` once its top edge
//!   passes `innerHeight / 1.3`
//!
//! The behaviors are generic over the [`dom`] traits. In the browser they run
//! against `web_sys` (see `web`); natively they run against [`dom::memory`].
//!
//! ## Example
//! ```rust
//! use page_nav::prelude::*;
//!
//! let doc = MemoryDocument::new(650.0);
//! doc.append(&doc.create_element("button").with_id("menu-toggle"));
//! let nav = doc.create_element("nav").with_id("navbar");
//! let list = doc.create_element("ul");
//! list.append_child(&doc.create_element("a").with_attribute("href", "#workflow"));
//! nav.append_child(&list);
//! doc.append(&nav);
//! let section = doc.create_element("section").with_id("workflow");
//! doc.append(&section);
//!
//! let page = PageBehaviors::bind(doc.clone(), &PageConfig::default()).unwrap();
//!
//! assert!(page.on_toggle_click().unwrap());
//! let outcome = page.on_link_click(0, &MemoryEvent::click()).unwrap();
//! assert!(outcome.is_scrolled());
//! assert!(!page.menu().is_open());
//!
//! section.set_viewport_top(480.0);
//! assert_eq!(page.on_scroll().unwrap(), RevealState::Revealed { newly: true });
//! ```

pub mod config;
pub mod dom;
pub mod error;
pub mod logging;
pub mod menu_toggle;
pub mod page;
pub mod scroll_reveal;
pub mod smooth_scroll;

#[cfg(target_arch = "wasm32")]
pub mod web;

pub use menu_toggle::MenuToggle;
pub use scroll_reveal::ScrollRevealWatcher;
pub use smooth_scroll::SmoothScrollRouter;

// Re-export common types
pub mod prelude {
    pub use crate::config::PageConfig;
    pub use crate::dom::memory::{MemoryDocument, MemoryElement, MemoryEvent};
    pub use crate::dom::{DomDocument, DomElement, DomEvent};
    pub use crate::error::{NavError, NavResult};
    pub use crate::menu_toggle::MenuToggle;
    pub use crate::page::PageBehaviors;
    pub use crate::scroll_reveal::{reveal_threshold, RevealState, ScrollRevealWatcher};
    pub use crate::smooth_scroll::{fragment_of, ScrollOutcome, SmoothScrollRouter};
}

//! Smooth scrolling for in-page links
//!
//! Each internal link gets its own handler invocation; a link whose target
//! does not exist only affects its own activation.

use log::{debug, warn};

use crate::dom::{DomDocument, DomElement, DomEvent};
use crate::error::NavResult;

/// What a link activation did
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ScrollOutcome {
    /// A smooth scroll was requested to the element with this identifier
    Scrolled { fragment: String },
    /// No element matched; nothing was scrolled
    Unresolved { fragment: String },
}

impl ScrollOutcome {
    pub fn fragment(&self) -> &str {
        match self {
            ScrollOutcome::Scrolled { fragment } | ScrollOutcome::Unresolved { fragment } => fragment,
        }
    }

    pub fn is_scrolled(&self) -> bool {
        matches!(self, ScrollOutcome::Scrolled { .. })
    }
}

/// Extract the element identifier from an in-page link target.
///
/// `"#about"` gives `Some("about")`; a bare `"#"` or any non-fragment
/// target gives `None`.
pub fn fragment_of(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Routes in-page link activations to smooth scrolls and closes the menu.
#[derive(Clone)]
pub struct SmoothScrollRouter<D: DomDocument> {
    document: D,
    nav_list: D::Element,
    open_class: String,
}

impl<D: DomDocument> SmoothScrollRouter<D> {
    pub fn new(document: D, nav_list: D::Element, open_class: impl Into<String>) -> Self {
        Self {
            document,
            nav_list,
            open_class: open_class.into(),
        }
    }

    /// Links this router should be bound to
    pub fn internal_links(&self, selector: &str) -> NavResult<Vec<D::Element>> {
        self.document.query_selector_all(selector)
    }

    /// Handle an activation of `anchor`.
    ///
    /// The default navigation is always suppressed and the menu is always
    /// closed, whether or not the target resolves.
    pub fn handle<V: DomEvent>(&self, anchor: &D::Element, event: &V) -> NavResult<ScrollOutcome> {
        event.prevent_default();

        let href = anchor.attribute("href").unwrap_or_default();
        let fragment = href.strip_prefix('#').unwrap_or(&href).to_string();
        let target = fragment_of(&href).and_then(|id| self.document.element_by_id(id));

        let outcome = match target {
            Some(target) => {
                target.scroll_into_view_smooth();
                ScrollOutcome::Scrolled { fragment }
            }
            None => {
                warn!("no element matches link target '{}'", href);
                ScrollOutcome::Unresolved { fragment }
            }
        };

        self.nav_list.remove_class(&self.open_class)?;
        debug!("link '{}' handled: {:?}", href, outcome);
        Ok(outcome)
    }
}

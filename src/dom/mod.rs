//! DOM capabilities consumed by the page behaviors
//!
//! The behaviors never talk to `web_sys` directly. They are generic over
//! these traits, implemented for the browser in [`crate::web`] and for an
//! in-memory tree in [`memory`].
//!
//! All methods take `&self`: element handles are shared, cloned references
//! into a tree that is mutated through interior mutability, the same way the
//! browser's handles behave.

pub mod memory;

use crate::error::NavResult;

/// An element handle
pub trait DomElement: Clone {
    /// Whether the class list contains `class`
    fn has_class(&self, class: &str) -> bool;

    /// Add `class`; adding a present class is a no-op
    fn add_class(&self, class: &str) -> NavResult<()>;

    /// Remove `class`; removing an absent class is a no-op
    fn remove_class(&self, class: &str) -> NavResult<()>;

    /// Flip `class`, returning whether it is now present
    fn toggle_class(&self, class: &str) -> NavResult<bool>;

    /// Raw attribute value
    fn attribute(&self, name: &str) -> Option<String>;

    /// First descendant matching `selector`
    fn query_selector(&self, selector: &str) -> NavResult<Option<Self>>;

    /// Top edge relative to the viewport (`getBoundingClientRect().top`)
    fn viewport_top(&self) -> f64;

    /// Fire-and-forget request to animate the viewport to this element
    fn scroll_into_view_smooth(&self);
}

/// A document and the window it is displayed in
pub trait DomDocument {
    type Element: DomElement;

    fn element_by_id(&self, id: &str) -> Option<Self::Element>;

    /// All elements matching `selector`, in document order
    fn query_selector_all(&self, selector: &str) -> NavResult<Vec<Self::Element>>;

    /// Viewport height in CSS pixels (`window.innerHeight`)
    fn viewport_height(&self) -> NavResult<f64>;
}

/// An activation event whose default action can be suppressed
pub trait DomEvent {
    fn prevent_default(&self);
}

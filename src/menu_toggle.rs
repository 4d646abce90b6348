//! Menu toggle - opens and closes the navigation list

use log::debug;

use crate::dom::DomElement;
use crate::error::NavResult;

/// Owns the open/closed state of the navigation list.
///
/// The state lives only in the list's class list; nothing is cached here.
#[derive(Debug, Clone)]
pub struct MenuToggle<E: DomElement> {
    nav_list: E,
    open_class: String,
}

impl<E: DomElement> MenuToggle<E> {
    pub fn new(nav_list: E, open_class: impl Into<String>) -> Self {
        Self {
            nav_list,
            open_class: open_class.into(),
        }
    }

    /// Handle an activation of the toggle control. Returns whether the menu is now open.
    pub fn handle(&self) -> NavResult<bool> {
        let open = self.nav_list.toggle_class(&self.open_class)?;
        debug!("menu toggled {}", if open { "open" } else { "closed" });
        Ok(open)
    }

    pub fn is_open(&self) -> bool {
        self.nav_list.has_class(&self.open_class)
    }

    pub fn close(&self) -> NavResult<()> {
        self.nav_list.remove_class(&self.open_class)
    }

    pub fn nav_list(&self) -> &E {
        &self.nav_list
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::MemoryDocument;

    fn menu() -> MenuToggle<crate::dom::memory::MemoryElement> {
        let doc = MemoryDocument::new(800.0);
        MenuToggle::new(doc.create_element("ul"), "show")
    }

    #[test]
    fn test_toggle_flips_state() {
        let menu = menu();
        assert!(!menu.is_open());
        assert!(menu.handle().unwrap());
        assert!(menu.is_open());
        assert!(!menu.handle().unwrap());
        assert!(!menu.is_open());
    }

    #[test]
    fn test_open_iff_odd_activations() {
        for n in 0..7 {
            let menu = menu();
            for _ in 0..n {
                menu.handle().unwrap();
            }
            assert_eq!(menu.is_open(), n % 2 == 1, "after {} activations", n);
        }
    }

    #[test]
    fn test_close_is_unconditional() {
        let menu = menu();
        menu.close().unwrap();
        assert!(!menu.is_open());
        menu.handle().unwrap();
        menu.close().unwrap();
        assert!(!menu.is_open());
    }

    #[test]
    fn test_only_open_class_is_touched() {
        let menu = menu();
        menu.nav_list().add_class("links").unwrap();
        menu.handle().unwrap();
        menu.handle().unwrap();
        assert!(menu.nav_list().has_class("links"));
    }
}

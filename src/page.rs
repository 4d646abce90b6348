//! Page behaviors - binds the menu toggle, link router and reveal watcher to one document
//!
//! `PageBehaviors` is the dispatch table: one entry point per platform event.
//! The browser binding in [`crate::web`] forwards real events here; tests call
//! the entry points directly with synthetic events.

use log::info;

use crate::config::PageConfig;
use crate::dom::{DomDocument, DomElement, DomEvent};
use crate::error::{NavError, NavResult};
use crate::menu_toggle::MenuToggle;
use crate::scroll_reveal::{RevealState, ScrollRevealWatcher};
use crate::smooth_scroll::{ScrollOutcome, SmoothScrollRouter};

pub struct PageBehaviors<D: DomDocument> {
    toggle_control: D::Element,
    links: Vec<D::Element>,
    menu: MenuToggle<D::Element>,
    router: SmoothScrollRouter<D>,
    watcher: ScrollRevealWatcher<D>,
}

impl<D: DomDocument + Clone> PageBehaviors<D> {
    /// Resolve the elements named in `config` and construct every behavior.
    ///
    /// Fails with [`NavError::MissingElement`] if the toggle control, the
    /// navigation container or its list is absent. The reveal section is
    /// optional and is looked up on each scroll instead.
    pub fn bind(document: D, config: &PageConfig) -> NavResult<Self> {
        config.validate()?;

        let toggle_control = document
            .element_by_id(&config.menu_toggle_id)
            .ok_or_else(|| NavError::MissingElement(format!("#{}", config.menu_toggle_id)))?;
        let navbar = document
            .element_by_id(&config.navbar_id)
            .ok_or_else(|| NavError::MissingElement(format!("#{}", config.navbar_id)))?;
        let nav_list = navbar.query_selector(&config.nav_list_selector)?.ok_or_else(|| {
            NavError::MissingElement(format!("#{} {}", config.navbar_id, config.nav_list_selector))
        })?;

        let menu = MenuToggle::new(nav_list.clone(), config.menu_open_class.as_str());
        let router = SmoothScrollRouter::new(document.clone(), nav_list, config.menu_open_class.as_str());
        let links = router.internal_links(&config.link_selector)?;
        let watcher = ScrollRevealWatcher::new(
            document,
            config.reveal_section_id.as_str(),
            config.reveal_class.as_str(),
            config.reveal_divisor,
        );

        info!(
            "page behaviors bound: toggle #{}, {} internal link(s), reveal #{}",
            config.menu_toggle_id,
            links.len(),
            config.reveal_section_id
        );

        Ok(Self {
            toggle_control,
            links,
            menu,
            router,
            watcher,
        })
    }
}

impl<D: DomDocument> PageBehaviors<D> {
    /// Click on the toggle control
    pub fn on_toggle_click(&self) -> NavResult<bool> {
        self.menu.handle()
    }

    /// Click on the internal link at `index` (document order)
    pub fn on_link_click<V: DomEvent>(&self, index: usize, event: &V) -> NavResult<ScrollOutcome> {
        let anchor = self.links.get(index).ok_or(NavError::UnknownLink(index))?;
        self.router.handle(anchor, event)
    }

    /// Window scroll notification
    pub fn on_scroll(&self) -> NavResult<RevealState> {
        self.watcher.handle()
    }

    pub fn toggle_control(&self) -> &D::Element {
        &self.toggle_control
    }

    pub fn links(&self) -> &[D::Element] {
        &self.links
    }

    pub fn menu(&self) -> &MenuToggle<D::Element> {
        &self.menu
    }

    pub fn router(&self) -> &SmoothScrollRouter<D> {
        &self.router
    }

    pub fn watcher(&self) -> &ScrollRevealWatcher<D> {
        &self.watcher
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::{MemoryDocument, MemoryEvent};

    fn page() -> MemoryDocument {
        let doc = MemoryDocument::new(650.0);
        doc.append(&doc.create_element("button").with_id("menu-toggle"));
        let nav = doc.create_element("nav").with_id("navbar");
        let list = doc.create_element("ul");
        list.append_child(&doc.create_element("a").with_attribute("href", "#workflow"));
        nav.append_child(&list);
        doc.append(&nav);
        doc
    }

    #[test]
    fn test_bind_collects_links() {
        let behaviors = PageBehaviors::bind(page(), &PageConfig::default()).unwrap();
        assert_eq!(behaviors.links().len(), 1);
        assert_eq!(behaviors.toggle_control().id().as_deref(), Some("menu-toggle"));
    }

    #[test]
    fn test_bind_requires_nav_list() {
        let doc = MemoryDocument::new(650.0);
        doc.append(&doc.create_element("button").with_id("menu-toggle"));
        doc.append(&doc.create_element("nav").with_id("navbar"));
        match PageBehaviors::bind(doc, &PageConfig::default()) {
            Err(NavError::MissingElement(what)) => assert_eq!(what, "#navbar ul"),
            Err(e) => panic!("unexpected error: {}", e),
            Ok(_) => panic!("bind should fail without a nav list"),
        }
    }

    #[test]
    fn test_bind_validates_config() {
        let config = PageConfig {
            reveal_divisor: -1.0,
            ..PageConfig::default()
        };
        assert!(matches!(
            PageBehaviors::bind(page(), &config),
            Err(NavError::InvalidConfig(_))
        ));
    }

    #[test]
    fn test_unknown_link_index() {
        let behaviors = PageBehaviors::bind(page(), &PageConfig::default()).unwrap();
        let err = behaviors.on_link_click(3, &MemoryEvent::click()).unwrap_err();
        assert!(matches!(err, NavError::UnknownLink(3)));
    }

    #[test]
    fn test_toggle_then_link_closes_menu() {
        let behaviors = PageBehaviors::bind(page(), &PageConfig::default()).unwrap();
        assert!(behaviors.on_toggle_click().unwrap());
        assert!(behaviors.menu().is_open());
        behaviors.on_link_click(0, &MemoryEvent::click()).unwrap();
        assert!(!behaviors.menu().is_open());
    }
}

//! Scroll reveal - marks a section visible once it scrolls into view
//!
//! The reveal is one-way: the class is added the first time the section's
//! top edge passes the threshold and is never removed.

use log::debug;

use crate::dom::{DomDocument, DomElement};
use crate::error::NavResult;

/// Result of one scroll notification
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RevealState {
    /// The watched section is not in the document
    Missing,
    /// The section is still below the threshold
    Hidden { top: f64, threshold: f64 },
    /// The section carries the reveal class; `newly` is true on the notification that added it
    Revealed { newly: bool },
}

/// Viewport-relative offset above which a section counts as in view
pub fn reveal_threshold(viewport_height: f64, divisor: f64) -> f64 {
    viewport_height / divisor
}

/// Watches the scroll position and reveals one section.
#[derive(Clone)]
pub struct ScrollRevealWatcher<D: DomDocument> {
    document: D,
    section_id: String,
    reveal_class: String,
    divisor: f64,
}

impl<D: DomDocument> ScrollRevealWatcher<D> {
    pub fn new(
        document: D,
        section_id: impl Into<String>,
        reveal_class: impl Into<String>,
        divisor: f64,
    ) -> Self {
        Self {
            document,
            section_id: section_id.into(),
            reveal_class: reveal_class.into(),
            divisor,
        }
    }

    /// Handle a scroll notification
    pub fn handle(&self) -> NavResult<RevealState> {
        // The section is looked up on every notification; it may be added late.
        let Some(section) = self.document.element_by_id(&self.section_id) else {
            return Ok(RevealState::Missing);
        };

        let already = section.has_class(&self.reveal_class);
        let top = section.viewport_top();
        let threshold = reveal_threshold(self.document.viewport_height()?, self.divisor);

        if top < threshold {
            section.add_class(&self.reveal_class)?;
            if !already {
                debug!("section '{}' revealed at top {:.1} (threshold {:.1})", self.section_id, top, threshold);
            }
            return Ok(RevealState::Revealed { newly: !already });
        }

        if already {
            Ok(RevealState::Revealed { newly: false })
        } else {
            Ok(RevealState::Hidden { top, threshold })
        }
    }

    pub fn is_revealed(&self) -> bool {
        self.document
            .element_by_id(&self.section_id)
            .is_some_and(|section| section.has_class(&self.reveal_class))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dom::memory::{MemoryDocument, MemoryElement};
    use approx::assert_relative_eq;

    fn setup(viewport: f64) -> (MemoryDocument, MemoryElement, ScrollRevealWatcher<MemoryDocument>) {
        let doc = MemoryDocument::new(viewport);
        let section = doc.create_element("section").with_id("workflow");
        doc.append(&section);
        let watcher = ScrollRevealWatcher::new(doc.clone(), "workflow", "visible", 1.3);
        (doc, section, watcher)
    }

    #[test]
    fn test_threshold() {
        assert_relative_eq!(reveal_threshold(650.0, 1.3), 500.0, epsilon = 1e-9);
        assert_relative_eq!(reveal_threshold(1300.0, 1.3), 1000.0, epsilon = 1e-9);
    }

    #[test]
    fn test_reveals_above_threshold() {
        let (_, section, watcher) = setup(650.0);
        section.set_viewport_top(480.0);
        assert_eq!(watcher.handle().unwrap(), RevealState::Revealed { newly: true });
        assert!(section.has_class("visible"));
    }

    #[test]
    fn test_stays_hidden_below_threshold() {
        let (_, section, watcher) = setup(650.0);
        section.set_viewport_top(520.0);
        match watcher.handle().unwrap() {
            RevealState::Hidden { top, threshold } => {
                assert_eq!(top, 520.0);
                assert_relative_eq!(threshold, 500.0, epsilon = 1e-9);
            }
            other => panic!("expected hidden, got {:?}", other),
        }
        assert!(!section.has_class("visible"));
    }

    #[test]
    fn test_threshold_is_strict() {
        let (_, section, watcher) = setup(1300.0);
        section.set_viewport_top(1000.0);
        assert!(matches!(watcher.handle().unwrap(), RevealState::Hidden { .. }));
    }

    #[test]
    fn test_reveal_is_permanent() {
        let (_, section, watcher) = setup(650.0);
        section.set_viewport_top(100.0);
        watcher.handle().unwrap();

        for top in [900.0, 5000.0, -200.0, 499.0] {
            section.set_viewport_top(top);
            assert_eq!(watcher.handle().unwrap(), RevealState::Revealed { newly: false });
        }
        assert_eq!(section.classes(), vec!["visible"]);
    }

    #[test]
    fn test_missing_section_is_noop() {
        let doc = MemoryDocument::new(650.0);
        let watcher = ScrollRevealWatcher::new(doc, "workflow", "visible", 1.3);
        for _ in 0..5 {
            assert_eq!(watcher.handle().unwrap(), RevealState::Missing);
        }
        assert!(!watcher.is_revealed());
    }
}

//! Thin layer over the live document.
//!
//! Everything that changes document-level styles goes through [`StyleGuard`],
//! which puts the old value back when it is dropped. Components keep the
//! guard inside an effect so every way out of that effect (dependency change,
//! unmount) restores the page.

use log::warn;
use wasm_bindgen::JsCast;
use web_sys::{Element, HtmlElement, Window};

use crate::error::DomError;

#[cfg_attr(test, mockall::automock)]
pub trait StyleTarget {
    /// Current inline value, empty when the property is not set.
    fn style_value(&self, property: &str) -> Result<String, DomError>;
    fn set_style(&self, property: &str, value: &str) -> Result<(), DomError>;
    fn clear_style(&self, property: &str) -> Result<(), DomError>;
}

fn style_error(property: &str, reason: wasm_bindgen::JsValue) -> DomError {
    DomError::Style {
        property: property.to_string(),
        reason: format!("{:?}", reason),
    }
}

impl StyleTarget for HtmlElement {
    fn style_value(&self, property: &str) -> Result<String, DomError> {
        self.style()
            .get_property_value(property)
            .map_err(|e| style_error(property, e))
    }

    fn set_style(&self, property: &str, value: &str) -> Result<(), DomError> {
        self.style()
            .set_property(property, value)
            .map_err(|e| style_error(property, e))
    }

    fn clear_style(&self, property: &str) -> Result<(), DomError> {
        self.style()
            .remove_property(property)
            .map(|_| ())
            .map_err(|e| style_error(property, e))
    }
}

/// Holds one inline style override and undoes it on drop.
pub struct StyleGuard<T: StyleTarget> {
    target: T,
    property: &'static str,
    previous: String,
}

impl<T: StyleTarget> StyleGuard<T> {
    pub fn apply(target: T, property: &'static str, value: &str) -> Result<Self, DomError> {
        let previous = target.style_value(property)?;
        target.set_style(property, value)?;
        Ok(Self {
            target,
            property,
            previous,
        })
    }

    pub fn previous(&self) -> &str {
        &self.previous
    }
}

impl<T: StyleTarget> Drop for StyleGuard<T> {
    fn drop(&mut self) {
        let restored = if self.previous.is_empty() {
            self.target.clear_style(self.property)
        } else {
            self.target.set_style(self.property, &self.previous)
        };
        if let Err(e) = restored {
            warn!("Failed to restore page style: {}", e);
        }
    }
}

pub fn window() -> Result<Window, DomError> {
    web_sys::window().ok_or(DomError::NoWindow)
}

pub fn body() -> Result<HtmlElement, DomError> {
    window()?
        .document()
        .ok_or(DomError::NoDocument)?
        .body()
        .ok_or(DomError::NoBody)
}

pub fn document_root() -> Result<HtmlElement, DomError> {
    window()?
        .document()
        .ok_or(DomError::NoDocument)?
        .document_element()
        .and_then(|root| root.dyn_into::<HtmlElement>().ok())
        .ok_or(DomError::NoDocumentElement)
}

/// Stops `target` from scrolling until the guard is dropped.
pub fn lock_scroll<T: StyleTarget>(target: T) -> Result<StyleGuard<T>, DomError> {
    StyleGuard::apply(target, "overflow", "hidden")
}

/// Stops the page behind an overlay from scrolling.
pub fn lock_body_scroll() -> Result<StyleGuard<HtmlElement>, DomError> {
    lock_scroll(body()?)
}

/// Makes in-page anchor jumps animate instead of snapping.
pub fn smooth_root_scroll() -> Result<StyleGuard<HtmlElement>, DomError> {
    StyleGuard::apply(document_root()?, "scroll-behavior", "smooth")
}

pub fn document_scroll_height() -> Result<f64, DomError> {
    Ok(document_root()?.scroll_height() as f64)
}

/// Rendered size of an element in CSS pixels.
pub fn element_size(element: &Element) -> (f64, f64) {
    let rect = element.get_bounding_client_rect();
    (rect.width(), rect.height())
}

/// Top and bottom edge of an element relative to the viewport.
pub fn element_span(element: &Element) -> (f64, f64) {
    let rect = element.get_bounding_client_rect();
    (rect.top(), rect.bottom())
}

/// In-memory stand-in for an element's inline style.
#[cfg(test)]
pub(crate) mod testing {
    use std::cell::RefCell;
    use std::collections::HashMap;
    use std::rc::Rc;

    use super::StyleTarget;
    use crate::error::DomError;

    #[derive(Clone, Default)]
    pub struct FakeElement {
        styles: Rc<RefCell<HashMap<String, String>>>,
    }

    impl FakeElement {
        pub fn get(&self, property: &str) -> Option<String> {
            self.styles.borrow().get(property).cloned()
        }
    }

    impl StyleTarget for FakeElement {
        fn style_value(&self, property: &str) -> Result<String, DomError> {
            Ok(self.get(property).unwrap_or_default())
        }

        fn set_style(&self, property: &str, value: &str) -> Result<(), DomError> {
            self.styles
                .borrow_mut()
                .insert(property.to_string(), value.to_string());
            Ok(())
        }

        fn clear_style(&self, property: &str) -> Result<(), DomError> {
            self.styles.borrow_mut().remove(property);
            Ok(())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::testing::FakeElement;
    use super::*;

    #[test]
    fn test_lock_restores_unset_overflow() {
        let body = FakeElement::default();
        {
            let _guard = lock_scroll(body.clone()).unwrap();
            assert_eq!(body.get("overflow").as_deref(), Some("hidden"));
        }
        assert_eq!(body.get("overflow"), None);
    }

    #[test]
    fn test_lock_restores_previous_value() {
        let body = FakeElement::default();
        body.set_style("overflow", "auto").unwrap();
        let guard = lock_scroll(body.clone()).unwrap();
        assert_eq!(guard.previous(), "auto");
        drop(guard);
        assert_eq!(body.get("overflow").as_deref(), Some("auto"));
    }

    #[test]
    fn test_guard_writes_then_clears() {
        let mut target = MockStyleTarget::new();
        target
            .expect_style_value()
            .withf(|property| property == "overflow")
            .times(1)
            .returning(|_| Ok(String::new()));
        target
            .expect_set_style()
            .withf(|property, value| property == "overflow" && value == "hidden")
            .times(1)
            .returning(|_, _| Ok(()));
        target
            .expect_clear_style()
            .withf(|property| property == "overflow")
            .times(1)
            .returning(|_| Ok(()));

        let guard = StyleGuard::apply(target, "overflow", "hidden").unwrap();
        drop(guard);
    }

    #[test]
    fn test_failed_read_applies_nothing() {
        let mut target = MockStyleTarget::new();
        target.expect_style_value().returning(|property| {
            Err(DomError::Style {
                property: property.to_string(),
                reason: "detached".to_string(),
            })
        });
        target.expect_set_style().never();
        target.expect_clear_style().never();

        assert!(StyleGuard::apply(target, "overflow", "hidden").is_err());
    }
}

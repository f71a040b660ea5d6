//! Live-DOM adapter for the browser.
//!
//! Scans the page for the marker attributes and exposes the matching
//! elements through [`TranslatableDocument`]. Elements get a stable
//! identity by stamping an internal uid attribute on first sight; all
//! other state stays inside the applier.

#[cfg(target_arch = "wasm32")]
pub use imp::DomDocument;

#[cfg(target_arch = "wasm32")]
mod imp {
    use std::sync::atomic::{AtomicU64, Ordering};

    use wasm_bindgen::JsCast;
    use web_sys::Element;

    use crate::core::document::{
        Binding, DomHandle, TranslatableDocument, PLACEHOLDER_ATTR, TEXT_ATTR, UID_ATTR,
    };

    static NEXT_UID: AtomicU64 = AtomicU64::new(1);

    pub struct DomDocument {
        document: web_sys::Document,
    }

    impl DomDocument {
        /// Attach to the page. `None` when there is no window or
        /// document to translate (headless contexts).
        pub fn attach() -> Option<Self> {
            let document = web_sys::window()?.document()?;
            Some(Self { document })
        }

        fn scan(&self, marker: &str) -> Vec<Binding<DomHandle>> {
            let nodes = match self.document.query_selector_all(&format!("[{marker}]")) {
                Ok(nodes) => nodes,
                Err(_) => return Vec::new(),
            };

            let mut bindings = Vec::with_capacity(nodes.length() as usize);
            for idx in 0..nodes.length() {
                let Some(node) = nodes.item(idx) else {
                    continue;
                };
                let Ok(element) = node.dyn_into::<Element>() else {
                    continue;
                };
                let Some(key) = element.get_attribute(marker) else {
                    continue;
                };
                bindings.push(Binding {
                    handle: uid_of(&element),
                    key,
                });
            }
            bindings
        }

        fn element(&self, handle: &DomHandle) -> Option<Element> {
            self.document
                .query_selector(&format!("[{UID_ATTR}=\"{handle}\"]"))
                .ok()
                .flatten()
        }
    }

    fn uid_of(element: &Element) -> DomHandle {
        if let Some(uid) = element.get_attribute(UID_ATTR) {
            return uid;
        }
        let uid = NEXT_UID.fetch_add(1, Ordering::Relaxed).to_string();
        element.set_attribute(UID_ATTR, &uid).ok();
        uid
    }

    impl TranslatableDocument for DomDocument {
        type Handle = DomHandle;

        fn text_bindings(&self) -> Vec<Binding<DomHandle>> {
            self.scan(TEXT_ATTR)
        }

        fn placeholder_bindings(&self) -> Vec<Binding<DomHandle>> {
            self.scan(PLACEHOLDER_ATTR)
        }

        fn text(&self, handle: &DomHandle) -> Option<String> {
            self.element(handle).and_then(|el| el.text_content())
        }

        fn set_text(&mut self, handle: &DomHandle, value: &str) {
            if let Some(el) = self.element(handle) {
                el.set_text_content(Some(value));
            }
        }

        fn placeholder(&self, handle: &DomHandle) -> Option<String> {
            self.element(handle).and_then(|el| el.get_attribute("placeholder"))
        }

        fn set_placeholder(&mut self, handle: &DomHandle, value: &str) {
            if let Some(el) = self.element(handle) {
                el.set_attribute("placeholder", value).ok();
            }
        }
    }
}

//! The seam between the localization service and a concrete page.
//!
//! Pages declare translatable content through marker attributes owned
//! by the templates; the applier only ever sees handles and keys, so
//! the same logic runs against the live DOM in the browser and against
//! [`MemoryDocument`] natively.

use std::hash::Hash;

/// Marker attribute binding an element's text content to a key.
pub const TEXT_ATTR: &str = "data-i18n";

/// Marker attribute binding an element's placeholder to a key.
pub const PLACEHOLDER_ATTR: &str = "data-i18n-placeholder";

/// Internal identity attribute stamped by the DOM adapter. Carries no
/// state, only a stable handle across scans.
pub const UID_ATTR: &str = "data-i18n-uid";

/// Handle type used by the live-DOM adapter.
pub type DomHandle = String;

/// One element bound to a translation key on one channel.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Binding<H> {
    pub handle: H,
    pub key: String,
}

/// A page whose marked elements can be read and rewritten.
///
/// `text_bindings` and `placeholder_bindings` snapshot the currently
/// bound elements per channel; an element may appear in both with the
/// same or different keys.
pub trait TranslatableDocument {
    type Handle: Clone + Eq + Hash;

    fn text_bindings(&self) -> Vec<Binding<Self::Handle>>;
    fn placeholder_bindings(&self) -> Vec<Binding<Self::Handle>>;

    fn text(&self, handle: &Self::Handle) -> Option<String>;
    fn set_text(&mut self, handle: &Self::Handle, value: &str);

    fn placeholder(&self, handle: &Self::Handle) -> Option<String>;
    fn set_placeholder(&mut self, handle: &Self::Handle, value: &str);
}

/// In-memory page model. Stands in for the DOM off-browser: native
/// targets, unit tests and the integration suite all drive the applier
/// through this.
#[derive(Debug, Clone, Default)]
pub struct MemoryDocument {
    elements: Vec<MemoryElement>,
}

#[derive(Debug, Clone, Default)]
struct MemoryElement {
    text: String,
    placeholder: Option<String>,
    text_key: Option<String>,
    placeholder_key: Option<String>,
}

impl MemoryDocument {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element whose text content is bound to `key`.
    pub fn add_text(&mut self, key: &str, text: &str) -> usize {
        self.push(MemoryElement {
            text: text.to_string(),
            text_key: Some(key.to_string()),
            ..Default::default()
        })
    }

    /// Add an input whose placeholder is bound to `key`.
    pub fn add_input(&mut self, key: &str, placeholder: &str) -> usize {
        self.push(MemoryElement {
            placeholder: Some(placeholder.to_string()),
            placeholder_key: Some(key.to_string()),
            ..Default::default()
        })
    }

    /// Add an element bound on both channels, like a search input with
    /// a visible label and a placeholder.
    pub fn add_dual(
        &mut self,
        text_key: &str,
        text: &str,
        placeholder_key: &str,
        placeholder: &str,
    ) -> usize {
        self.push(MemoryElement {
            text: text.to_string(),
            placeholder: Some(placeholder.to_string()),
            text_key: Some(text_key.to_string()),
            placeholder_key: Some(placeholder_key.to_string()),
        })
    }

    /// Add an element with no bindings at all.
    pub fn add_unbound(&mut self, text: &str) -> usize {
        self.push(MemoryElement {
            text: text.to_string(),
            ..Default::default()
        })
    }

    pub fn text_of(&self, id: usize) -> &str {
        &self.elements[id].text
    }

    pub fn placeholder_of(&self, id: usize) -> Option<&str> {
        self.elements[id].placeholder.as_deref()
    }

    fn push(&mut self, element: MemoryElement) -> usize {
        self.elements.push(element);
        self.elements.len() - 1
    }

    fn bindings_by(&self, pick: impl Fn(&MemoryElement) -> Option<&String>) -> Vec<Binding<usize>> {
        self.elements
            .iter()
            .enumerate()
            .filter_map(|(idx, el)| {
                pick(el).map(|key| Binding {
                    handle: idx,
                    key: key.clone(),
                })
            })
            .collect()
    }
}

impl TranslatableDocument for MemoryDocument {
    type Handle = usize;

    fn text_bindings(&self) -> Vec<Binding<usize>> {
        self.bindings_by(|el| el.text_key.as_ref())
    }

    fn placeholder_bindings(&self) -> Vec<Binding<usize>> {
        self.bindings_by(|el| el.placeholder_key.as_ref())
    }

    fn text(&self, handle: &usize) -> Option<String> {
        self.elements.get(*handle).map(|el| el.text.clone())
    }

    fn set_text(&mut self, handle: &usize, value: &str) {
        if let Some(el) = self.elements.get_mut(*handle) {
            el.text = value.to_string();
        }
    }

    fn placeholder(&self, handle: &usize) -> Option<String> {
        self.elements.get(*handle).and_then(|el| el.placeholder.clone())
    }

    fn set_placeholder(&mut self, handle: &usize, value: &str) {
        if let Some(el) = self.elements.get_mut(*handle) {
            el.placeholder = Some(value.to_string());
        }
    }
}

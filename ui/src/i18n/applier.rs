//! Applies catalog strings to a page, and undoes itself.
//!
//! Each bound element is in one of two states: original (authored
//! English) or translated. The applier keeps the original values in an
//! explicit handle → originals map rather than in sidecar attributes
//! on the elements, so state never leaks into the page and the same
//! applier runs against any [`TranslatableDocument`].
//!
//! Contract:
//! - applying the same language twice is the same as applying it once;
//! - applying the default language restores every element that was
//!   ever translated, no matter how many languages ran in between;
//! - an element whose key is missing from the active catalog is left
//!   as it currently is.

use std::collections::HashMap;
use std::hash::Hash;

use crate::core::document::TranslatableDocument;

use super::catalog::CatalogSet;
use super::lang::Lang;

/// Authored values captured the first time an element is translated.
/// Never overwritten afterwards.
#[derive(Debug, Clone, Default)]
struct Originals {
    text: Option<String>,
    placeholder: Option<String>,
}

pub struct TextApplier<H> {
    originals: HashMap<H, Originals>,
}

impl<H> Default for TextApplier<H> {
    fn default() -> Self {
        Self {
            originals: HashMap::new(),
        }
    }
}

impl<H: Clone + Eq + Hash> TextApplier<H> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Rewrite every bound element for `lang`. The default language
    /// restores captured originals instead of consulting the catalogs.
    pub fn apply_language<D>(&mut self, doc: &mut D, catalogs: &CatalogSet, lang: Lang)
    where
        D: TranslatableDocument<Handle = H>,
    {
        for binding in doc.text_bindings() {
            if lang.is_default() {
                let cached = self
                    .originals
                    .get(&binding.handle)
                    .and_then(|o| o.text.clone());
                if let Some(original) = cached {
                    doc.set_text(&binding.handle, &original);
                }
                continue;
            }

            let current = doc.text(&binding.handle).unwrap_or_default();
            let slot = self.originals.entry(binding.handle.clone()).or_default();
            if slot.text.is_none() {
                slot.text = Some(current);
            }
            if let Some(translated) = catalogs.lookup(lang, &binding.key) {
                doc.set_text(&binding.handle, translated);
            }
        }

        for binding in doc.placeholder_bindings() {
            if lang.is_default() {
                let cached = self
                    .originals
                    .get(&binding.handle)
                    .and_then(|o| o.placeholder.clone());
                if let Some(original) = cached {
                    doc.set_placeholder(&binding.handle, &original);
                }
                continue;
            }

            let current = doc.placeholder(&binding.handle).unwrap_or_default();
            let slot = self.originals.entry(binding.handle.clone()).or_default();
            if slot.placeholder.is_none() {
                slot.placeholder = Some(current);
            }
            if let Some(translated) = catalogs.lookup(lang, &binding.key) {
                doc.set_placeholder(&binding.handle, translated);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::document::MemoryDocument;
    use crate::i18n::catalog::Catalog;

    fn catalogs() -> CatalogSet {
        let mut set = CatalogSet::empty();
        set.insert(
            Catalog::parse(
                Lang::Hi,
                r#"{
                    "dashboard": { "title": "डैशबोर्ड" },
                    "market": { "search_placeholder": "स्टॉक खोजें..." }
                }"#,
            )
            .unwrap(),
        );
        set.insert(
            Catalog::parse(
                Lang::Ta,
                r#"{
                    "dashboard": { "title": "டாஷ்போர்டு" },
                    "market": { "search_placeholder": "பங்குகளைத் தேடுங்கள்..." }
                }"#,
            )
            .unwrap(),
        );
        set
    }

    #[test]
    fn translates_bound_text() {
        let mut doc = MemoryDocument::new();
        let title = doc.add_text("dashboard.title", "Dashboard");
        let mut applier = TextApplier::new();

        applier.apply_language(&mut doc, &catalogs(), Lang::Hi);
        assert_eq!(doc.text_of(title), "डैशबोर्ड");
    }

    #[test]
    fn translates_bound_placeholder() {
        let mut doc = MemoryDocument::new();
        let search = doc.add_input("market.search_placeholder", "Search for stocks...");
        let mut applier = TextApplier::new();

        applier.apply_language(&mut doc, &catalogs(), Lang::Ta);
        assert_eq!(
            doc.placeholder_of(search),
            Some("பங்குகளைத் தேடுங்கள்...")
        );
    }

    #[test]
    fn reapplying_the_same_language_is_idempotent() {
        let mut doc = MemoryDocument::new();
        let title = doc.add_text("dashboard.title", "Dashboard");
        let search = doc.add_input("market.search_placeholder", "Search for stocks...");
        let mut applier = TextApplier::new();

        applier.apply_language(&mut doc, &catalogs(), Lang::Hi);
        let once = (doc.text_of(title).to_string(), doc.placeholder_of(search).map(String::from));
        applier.apply_language(&mut doc, &catalogs(), Lang::Hi);
        let twice = (doc.text_of(title).to_string(), doc.placeholder_of(search).map(String::from));

        assert_eq!(once, twice);
    }

    #[test]
    fn default_language_restores_originals() {
        let mut doc = MemoryDocument::new();
        let title = doc.add_text("dashboard.title", "Dashboard");
        let mut applier = TextApplier::new();

        applier.apply_language(&mut doc, &catalogs(), Lang::Hi);
        applier.apply_language(&mut doc, &catalogs(), Lang::En);
        assert_eq!(doc.text_of(title), "Dashboard");
    }

    #[test]
    fn originals_survive_switching_between_languages() {
        let mut doc = MemoryDocument::new();
        let title = doc.add_text("dashboard.title", "Dashboard");
        let search = doc.add_input("market.search_placeholder", "Search for stocks...");
        let mut applier = TextApplier::new();

        applier.apply_language(&mut doc, &catalogs(), Lang::Hi);
        applier.apply_language(&mut doc, &catalogs(), Lang::Ta);
        assert_eq!(doc.text_of(title), "டாஷ்போர்டு");

        applier.apply_language(&mut doc, &catalogs(), Lang::En);
        assert_eq!(doc.text_of(title), "Dashboard");
        assert_eq!(doc.placeholder_of(search), Some("Search for stocks..."));
    }

    #[test]
    fn second_translation_does_not_overwrite_the_captured_original() {
        let mut doc = MemoryDocument::new();
        let title = doc.add_text("dashboard.title", "Dashboard");
        let mut applier = TextApplier::new();

        // After the first pass the element shows Hindi; the second pass
        // must not capture that Hindi text as the "original".
        applier.apply_language(&mut doc, &catalogs(), Lang::Hi);
        applier.apply_language(&mut doc, &catalogs(), Lang::Hi);
        applier.apply_language(&mut doc, &catalogs(), Lang::En);
        assert_eq!(doc.text_of(title), "Dashboard");
    }

    #[test]
    fn missing_key_leaves_the_element_unchanged() {
        let mut doc = MemoryDocument::new();
        let news = doc.add_text("market.latest_news", "Latest News & Sentiment");
        let mut applier = TextApplier::new();

        applier.apply_language(&mut doc, &catalogs(), Lang::Hi);
        assert_eq!(doc.text_of(news), "Latest News & Sentiment");

        // Still restorable: the original was captured before the miss.
        applier.apply_language(&mut doc, &catalogs(), Lang::En);
        assert_eq!(doc.text_of(news), "Latest News & Sentiment");
    }

    #[test]
    fn missing_language_leaves_everything_unchanged() {
        let mut doc = MemoryDocument::new();
        let title = doc.add_text("dashboard.title", "Dashboard");
        let mut applier = TextApplier::new();

        applier.apply_language(&mut doc, &catalogs(), Lang::Te);
        assert_eq!(doc.text_of(title), "Dashboard");
    }

    #[test]
    fn default_without_prior_translation_is_a_noop() {
        let mut doc = MemoryDocument::new();
        let title = doc.add_text("dashboard.title", "Dashboard");
        let mut applier = TextApplier::new();

        applier.apply_language(&mut doc, &catalogs(), Lang::En);
        assert_eq!(doc.text_of(title), "Dashboard");
    }

    #[test]
    fn text_and_placeholder_channels_are_independent() {
        let mut doc = MemoryDocument::new();
        // Same key bound on both channels of one element, plus a plain
        // text element with that key: translating one channel must not
        // bleed into the other.
        let dual = doc.add_dual(
            "dashboard.title",
            "Dashboard",
            "market.search_placeholder",
            "Search for stocks...",
        );
        let label = doc.add_text("market.search_placeholder", "Search for stocks...");
        let mut applier = TextApplier::new();

        applier.apply_language(&mut doc, &catalogs(), Lang::Hi);
        assert_eq!(doc.text_of(dual), "डैशबोर्ड");
        assert_eq!(doc.placeholder_of(dual), Some("स्टॉक खोजें..."));
        assert_eq!(doc.text_of(label), "स्टॉक खोजें...");

        applier.apply_language(&mut doc, &catalogs(), Lang::En);
        assert_eq!(doc.text_of(dual), "Dashboard");
        assert_eq!(doc.placeholder_of(dual), Some("Search for stocks..."));
        assert_eq!(doc.text_of(label), "Search for stocks...");
    }

    #[test]
    fn unbound_elements_are_never_touched() {
        let mut doc = MemoryDocument::new();
        let plain = doc.add_unbound("hand-written footnote");
        let mut applier = TextApplier::new();

        applier.apply_language(&mut doc, &catalogs(), Lang::Hi);
        applier.apply_language(&mut doc, &catalogs(), Lang::En);
        assert_eq!(doc.text_of(plain), "hand-written footnote");
    }
}

//! Runtime UI localization for `vernacular-ui`.
//!
//! This module wires together:
//! - [`catalog`] — bundled and fetched JSON translation tables
//! - [`applier`] — rewrites marked page elements and restores them
//! - [`prefs`] — the persisted language choice
//! - [`lang`] — the supported language set
//!
//! The service object is [`Localizer`]. The web shell keeps one in a
//! `Signal` provided through context, so UI callbacks receive it as a
//! context value instead of reaching for a process-wide singleton:
//!
//! ```ignore
//! let mut localizer = use_context_provider(|| Signal::new(PageLocalizer::new()));
//! i18n::set_page_language(&mut localizer.write(), Lang::Ta);
//! ```
//!
//! Pages opt in per element with the `data-i18n` marker attribute
//! (text content) and `data-i18n-placeholder` (placeholder), keeping
//! the English string inline as the authored original. Views call
//! [`use_apply_language`] so the page is re-translated after every
//! mount and language change.

pub mod applier;
pub mod catalog;
pub mod lang;
pub mod prefs;

pub use applier::TextApplier;
pub use catalog::{Catalog, CatalogError, CatalogSet};
pub use lang::Lang;
pub use prefs::Preferences;

use std::hash::Hash;

use dioxus::prelude::*;

use crate::core::document::{DomHandle, TranslatableDocument};

#[cfg(target_arch = "wasm32")]
use crate::core::dom::DomDocument;

/// Catalogs + applier + current language, behind one explicit service.
pub struct Localizer<H> {
    catalogs: CatalogSet,
    applier: TextApplier<H>,
    current: Lang,
}

/// The localizer as used against the live page.
pub type PageLocalizer = Localizer<DomHandle>;

impl<H: Clone + Eq + Hash> Localizer<H> {
    /// Bundled catalogs, current language at the authored default.
    pub fn new() -> Self {
        Self::with_catalogs(catalog::bundled().clone())
    }

    pub fn with_catalogs(catalogs: CatalogSet) -> Self {
        Self {
            catalogs,
            applier: TextApplier::new(),
            current: Lang::En,
        }
    }

    /// Adopt the persisted language choice as current, without
    /// touching any page. Called once at startup, before first render.
    pub fn restore_preference(&mut self) {
        self.current = Preferences::load();
    }

    pub fn current(&self) -> Lang {
        self.current
    }

    pub fn catalogs(&self) -> &CatalogSet {
        &self.catalogs
    }

    /// Install freshly fetched catalogs over the bundled ones.
    pub fn install(&mut self, fresh: Vec<Catalog>) {
        for catalog in fresh {
            self.catalogs.insert(catalog);
        }
    }

    pub fn lookup(&self, lang: Lang, key: &str) -> Option<&str> {
        self.catalogs.lookup(lang, key)
    }

    /// Apply `lang` to `doc` and make it current. Persistence is the
    /// caller's concern (see [`set_page_language`]): the selector flow
    /// saves, programmatic re-application does not.
    pub fn set_language<D>(&mut self, doc: &mut D, lang: Lang)
    where
        D: TranslatableDocument<Handle = H>,
    {
        self.applier.apply_language(doc, &self.catalogs, lang);
        self.current = lang;
    }

    /// Re-apply the current language, e.g. after a mount or a catalog
    /// refresh.
    pub fn apply_current<D>(&mut self, doc: &mut D)
    where
        D: TranslatableDocument<Handle = H>,
    {
        self.applier.apply_language(doc, &self.catalogs, self.current);
    }

    /// Switch to the next language in selector order and return it.
    pub fn cycle<D>(&mut self, doc: &mut D) -> Lang
    where
        D: TranslatableDocument<Handle = H>,
    {
        let next = self.current.next();
        self.set_language(doc, next);
        next
    }
}

impl<H: Clone + Eq + Hash> Default for Localizer<H> {
    fn default() -> Self {
        Self::new()
    }
}

/// Selector entry point: apply `lang` to the live page and persist the
/// choice. Off-browser this only records the language.
pub fn set_page_language(localizer: &mut PageLocalizer, lang: Lang) {
    #[cfg(target_arch = "wasm32")]
    {
        match DomDocument::attach() {
            Some(mut doc) => localizer.set_language(&mut doc, lang),
            None => {
                eprintln!("[i18n] document unavailable; nothing to translate");
                localizer.current = lang;
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        // No page to rewrite off-browser; just record the choice.
        localizer.current = lang;
    }

    Preferences::save(lang);
}

/// Re-apply the current language to the live page. No-op off-browser.
pub fn apply_to_page(localizer: &mut PageLocalizer) {
    #[cfg(target_arch = "wasm32")]
    {
        match DomDocument::attach() {
            Some(mut doc) => localizer.apply_current(&mut doc),
            None => eprintln!("[i18n] document unavailable; nothing to translate"),
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        let _ = localizer;
    }
}

/// Fetch every non-default language's catalog from
/// `/translations/{code}.json`. Failures are logged per language and
/// the bundled table stays in place; partial results are normal.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_remote_catalogs() -> Vec<Catalog> {
    let mut fresh = Vec::new();
    for lang in Lang::ALL.into_iter().filter(|lang| !lang.is_default()) {
        match catalog::fetch_catalog(lang).await {
            Ok(catalog) => fresh.push(catalog),
            Err(err) => eprintln!("[i18n] keeping bundled {} catalog: {err}", lang.code()),
        }
    }
    fresh
}

#[cfg(not(target_arch = "wasm32"))]
pub async fn fetch_remote_catalogs() -> Vec<Catalog> {
    Vec::new()
}

/// View hook: re-translate the page after mount and whenever the
/// language signal changes. Safe without providers (renders untranslated).
pub fn use_apply_language() {
    let lang: Option<Signal<Lang>> = try_use_context();
    let localizer: Option<Signal<PageLocalizer>> = try_use_context();

    use_effect(move || {
        if let (Some(lang), Some(mut localizer)) = (lang, localizer) {
            // Subscribe to the language so the effect re-runs on change.
            let _ = lang();
            apply_to_page(&mut localizer.write());
        }
    });
}

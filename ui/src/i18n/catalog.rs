//! Translation catalogs.
//!
//! A catalog file is a JSON object mapping dotted keys to localized
//! strings. Both shapes are accepted and may be mixed:
//!
//! ```json
//! { "dashboard.title": "डैशबोर्ड" }
//! { "dashboard": { "title": "डैशबोर्ड" } }
//! ```
//!
//! Files are decoded into a typed node tree and flattened into dotted
//! keys once at load time, so lookups are plain map hits and a
//! malformed file is rejected up front instead of surfacing as lookup
//! misses later. English has no catalog: its strings are authored in
//! the markup itself.

use std::collections::{BTreeMap, HashMap};

use once_cell::sync::Lazy;
use rust_embed::Embed;
use serde::Deserialize;
use thiserror::Error;

use super::lang::Lang;

/// Why a language's catalog could not be loaded. Never fatal: the
/// language simply keeps its previous (or no) table.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("{lang}: catalog fetch failed: {reason}")]
    Fetch { lang: Lang, reason: String },

    #[error("{lang}: catalog request returned HTTP {status}")]
    Status { lang: Lang, status: u16 },

    #[error("{lang}: catalog must be a JSON object of strings or nested objects: {source}")]
    Decode {
        lang: Lang,
        #[source]
        source: serde_json::Error,
    },
}

/// One level of a catalog file: a localized string or more nesting.
#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
enum Node {
    Leaf(String),
    Branch(BTreeMap<String, Node>),
}

fn flatten(prefix: &str, node: &Node, out: &mut BTreeMap<String, String>) {
    match node {
        Node::Leaf(value) => {
            out.insert(prefix.to_string(), value.clone());
        }
        Node::Branch(children) => {
            for (segment, child) in children {
                let path = if prefix.is_empty() {
                    segment.clone()
                } else {
                    format!("{prefix}.{segment}")
                };
                flatten(&path, child, out);
            }
        }
    }
}

/// One language's key → string table, immutable after load.
#[derive(Debug, Clone)]
pub struct Catalog {
    lang: Lang,
    entries: BTreeMap<String, String>,
}

impl Catalog {
    /// Strict decode: the root must be an object and every leaf a
    /// string. Anything else rejects the whole file.
    pub fn parse(lang: Lang, source: &str) -> Result<Self, CatalogError> {
        let tree: BTreeMap<String, Node> =
            serde_json::from_str(source).map_err(|source| CatalogError::Decode { lang, source })?;

        let mut entries = BTreeMap::new();
        for (segment, node) in &tree {
            flatten(segment, node, &mut entries);
        }
        Ok(Self { lang, entries })
    }

    pub fn lang(&self) -> Lang {
        self.lang
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.entries.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

/// Catalog JSON bundled into the binary, one `{code}.json` per
/// non-default language.
#[derive(Embed)]
#[folder = "i18n"]
struct BundledCatalogs;

static BUNDLED: Lazy<CatalogSet> = Lazy::new(CatalogSet::load_embedded);

/// The bundled catalogs, parsed once per process.
pub fn bundled() -> &'static CatalogSet {
    &BUNDLED
}

/// All loaded catalogs, keyed by language.
#[derive(Debug, Clone, Default)]
pub struct CatalogSet {
    tables: HashMap<Lang, Catalog>,
}

impl CatalogSet {
    pub fn empty() -> Self {
        Self::default()
    }

    /// Load every bundled catalog. A file that fails to decode is
    /// logged and skipped; that language's table stays absent.
    pub fn load_embedded() -> Self {
        let mut set = Self::empty();
        for file in BundledCatalogs::iter() {
            let filename = file.as_ref();
            let Some(stem) = filename.strip_suffix(".json") else {
                continue;
            };
            let Some(lang) = Lang::from_code(stem) else {
                eprintln!("[i18n] ignoring bundled catalog with unknown language: {filename}");
                continue;
            };
            if lang.is_default() {
                eprintln!("[i18n] ignoring bundled {filename}: English is authored in markup");
                continue;
            }
            let Some(content) = BundledCatalogs::get(filename) else {
                continue;
            };
            let source = String::from_utf8_lossy(content.data.as_ref());
            match Catalog::parse(lang, &source) {
                Ok(catalog) => {
                    set.insert(catalog);
                }
                Err(err) => eprintln!("[i18n] skipping bundled catalog: {err}"),
            }
        }
        set
    }

    /// Install or replace one language's table.
    pub fn insert(&mut self, catalog: Catalog) {
        self.tables.insert(catalog.lang(), catalog);
    }

    pub fn contains(&self, lang: Lang) -> bool {
        self.tables.contains_key(&lang)
    }

    /// Loaded languages, in selector order.
    pub fn loaded(&self) -> Vec<Lang> {
        Lang::ALL
            .into_iter()
            .filter(|lang| self.tables.contains_key(lang))
            .collect()
    }

    /// Look up a key. Absent when the language has no table or the
    /// table has no such key; the default language is always absent.
    pub fn lookup(&self, lang: Lang, key: &str) -> Option<&str> {
        self.tables.get(&lang).and_then(|catalog| catalog.get(key))
    }
}

/// Fetch one language's catalog from `/translations/{code}.json`.
#[cfg(target_arch = "wasm32")]
pub async fn fetch_catalog(lang: Lang) -> Result<Catalog, CatalogError> {
    use wasm_bindgen::JsCast;
    use wasm_bindgen_futures::JsFuture;

    let window = web_sys::window().ok_or_else(|| CatalogError::Fetch {
        lang,
        reason: "window unavailable".into(),
    })?;

    let url = format!("/translations/{}.json", lang.code());
    let response = JsFuture::from(window.fetch_with_str(&url))
        .await
        .map_err(|_| CatalogError::Fetch {
            lang,
            reason: "network error".into(),
        })?;
    let response: web_sys::Response = response.dyn_into().map_err(|_| CatalogError::Fetch {
        lang,
        reason: "response cast failed".into(),
    })?;

    if !response.ok() {
        return Err(CatalogError::Status {
            lang,
            status: response.status(),
        });
    }

    let body = response.text().map_err(|_| CatalogError::Fetch {
        lang,
        reason: "body unavailable".into(),
    })?;
    let body = JsFuture::from(body).await.map_err(|_| CatalogError::Fetch {
        lang,
        reason: "body read failed".into(),
    })?;

    Catalog::parse(lang, &body.as_string().unwrap_or_default())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn nested_and_flat_sources_flatten_identically() {
        let nested = Catalog::parse(
            Lang::Hi,
            r#"{ "dashboard": { "title": "डैशबोर्ड", "total_purse": "कुल पर्स" } }"#,
        )
        .unwrap();
        let flat = Catalog::parse(
            Lang::Hi,
            r#"{ "dashboard.title": "डैशबोर्ड", "dashboard.total_purse": "कुल पर्स" }"#,
        )
        .unwrap();

        assert_eq!(
            nested.keys().collect::<Vec<_>>(),
            flat.keys().collect::<Vec<_>>()
        );
        assert_eq!(nested.get("dashboard.title"), Some("डैशबोर्ड"));
        assert_eq!(flat.get("dashboard.title"), Some("डैशबोर्ड"));
    }

    #[test]
    fn mixed_nesting_is_accepted() {
        let catalog = Catalog::parse(
            Lang::Ta,
            r#"{ "nav.dashboard": "டாஷ்போர்டு", "market": { "title": "சந்தை தேடல்" } }"#,
        )
        .unwrap();
        assert_eq!(catalog.get("nav.dashboard"), Some("டாஷ்போர்டு"));
        assert_eq!(catalog.get("market.title"), Some("சந்தை தேடல்"));
        assert_eq!(catalog.len(), 2);
    }

    #[test]
    fn non_string_leaf_is_rejected() {
        let err = Catalog::parse(Lang::Hi, r#"{ "dashboard": { "title": 42 } }"#).unwrap_err();
        assert!(matches!(err, CatalogError::Decode { lang: Lang::Hi, .. }));
    }

    #[test]
    fn non_object_root_is_rejected() {
        for source in [r#"["dashboard.title"]"#, r#""dashboard""#, "7", "null"] {
            let err = Catalog::parse(Lang::Te, source).unwrap_err();
            assert!(matches!(err, CatalogError::Decode { lang: Lang::Te, .. }));
        }
    }

    #[test]
    fn empty_object_is_a_valid_catalog() {
        let catalog = Catalog::parse(Lang::Hi, "{}").unwrap();
        assert!(catalog.is_empty());
    }

    #[test]
    fn lookup_tolerates_missing_language_and_key() {
        let mut set = CatalogSet::empty();
        set.insert(Catalog::parse(Lang::Hi, r#"{ "nav": { "dashboard": "डैशबोर्ड" } }"#).unwrap());

        assert_eq!(set.lookup(Lang::Hi, "nav.dashboard"), Some("डैशबोर्ड"));
        assert_eq!(set.lookup(Lang::Hi, "nav.performance"), None);
        assert_eq!(set.lookup(Lang::Hi, "nav"), None);
        assert_eq!(set.lookup(Lang::Ta, "nav.dashboard"), None);
        assert_eq!(set.lookup(Lang::En, "nav.dashboard"), None);
    }

    #[test]
    fn insert_replaces_a_language_table() {
        let mut set = CatalogSet::empty();
        set.insert(Catalog::parse(Lang::Hi, r#"{ "a": "old" }"#).unwrap());
        set.insert(Catalog::parse(Lang::Hi, r#"{ "a": "new" }"#).unwrap());
        assert_eq!(set.lookup(Lang::Hi, "a"), Some("new"));
        assert_eq!(set.loaded(), vec![Lang::Hi]);
    }
}

//! Persisted language preference.
//!
//! One value under one key: the last language the user picked. Read
//! once at startup, written on every change. In the browser this is
//! `localStorage`; natively it is a one-line file in the per-user data
//! directory so dev shells and tests see the same API. A missing or
//! blocked store degrades to the default language, never an error.

use super::lang::Lang;

/// localStorage key / preference file content contract.
pub const STORAGE_KEY: &str = "preferredLanguage";

pub struct Preferences;

impl Preferences {
    /// Last saved language, or the default if nothing usable is stored.
    pub fn load() -> Lang {
        #[cfg(target_arch = "wasm32")]
        {
            local_storage()
                .and_then(|storage| storage.get_item(STORAGE_KEY).ok().flatten())
                .and_then(|code| Lang::from_code(&code))
                .unwrap_or_default()
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            preference_path()
                .and_then(|path| Self::load_from(&path))
                .unwrap_or_default()
        }
    }

    /// Persist `lang` synchronously. Failures are logged and dropped.
    pub fn save(lang: Lang) {
        #[cfg(target_arch = "wasm32")]
        {
            match local_storage() {
                Some(storage) => {
                    if storage.set_item(STORAGE_KEY, lang.code()).is_err() {
                        eprintln!("[i18n] preference write blocked by the browser");
                    }
                }
                None => eprintln!("[i18n] localStorage unavailable; preference not saved"),
            }
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let Some(path) = preference_path() else {
                eprintln!("[i18n] no data directory; preference not saved");
                return;
            };
            if let Err(err) = Self::save_to(&path, lang) {
                eprintln!("[i18n] preference write failed: {err}");
            }
        }
    }

    /// Read a preference file at an explicit path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Option<Lang> {
        std::fs::read_to_string(path)
            .ok()
            .and_then(|code| Lang::from_code(code.trim()))
    }

    /// Write a preference file at an explicit path.
    #[cfg(not(target_arch = "wasm32"))]
    pub fn save_to(path: &std::path::Path, lang: Lang) -> std::io::Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }
        std::fs::write(path, lang.code())
    }
}

#[cfg(target_arch = "wasm32")]
fn local_storage() -> Option<web_sys::Storage> {
    web_sys::window().and_then(|window| window.local_storage().ok().flatten())
}

#[cfg(not(target_arch = "wasm32"))]
fn preference_path() -> Option<std::path::PathBuf> {
    let dirs = directories::ProjectDirs::from("com", "Vernacular", "Vernacular")?;
    Some(dirs.data_dir().join(STORAGE_KEY))
}

#[cfg(all(test, not(target_arch = "wasm32")))]
mod tests {
    use super::*;

    #[test]
    fn save_then_load_round_trips() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORAGE_KEY);

        Preferences::save_to(&path, Lang::Ta).unwrap();
        assert_eq!(Preferences::load_from(&path), Some(Lang::Ta));
    }

    #[test]
    fn missing_file_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        assert_eq!(Preferences::load_from(&dir.path().join("absent")), None);
    }

    #[test]
    fn garbage_content_yields_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORAGE_KEY);
        std::fs::write(&path, "klingon\n").unwrap();
        assert_eq!(Preferences::load_from(&path), None);
    }

    #[test]
    fn stored_region_tag_still_parses() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join(STORAGE_KEY);
        std::fs::write(&path, "hi-IN\n").unwrap();
        assert_eq!(Preferences::load_from(&path), Some(Lang::Hi));
    }
}

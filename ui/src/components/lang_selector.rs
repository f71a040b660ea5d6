//! Language dropdown.
//!
//! Trigger button labelled with the active language, a menu listing
//! every supported language with the active one highlighted, an
//! invisible backdrop to close on outside click. Selecting an option
//! retranslates the page and persists the choice.

use dioxus::prelude::*;

use crate::i18n::{self, Lang, PageLocalizer};

#[component]
pub fn LangSelector() -> Element {
    let mut open = use_signal(|| false);

    // Provided by the shell; absent in bare renders (e.g. previews).
    let localizer_ctx: Option<Signal<PageLocalizer>> = try_use_context();
    let lang_ctx: Option<Signal<Lang>> = try_use_context();

    let current = lang_ctx.map(|lang| lang()).unwrap_or_default();

    #[cfg(debug_assertions)]
    {
        println!("[i18n] LangSelector render lang={current}");
    }

    rsx! {
        div { class: "lang-selector",
            button {
                class: "lang-selector__trigger",
                onclick: move |_| {
                    let next = !open();
                    open.set(next);
                },
                "{current.native_name()}"
            }
            if open() {
                div {
                    class: "lang-selector__backdrop",
                    onclick: move |_| open.set(false),
                }
                div { class: "lang-selector__menu",
                    { Lang::ALL.iter().map(|lang| {
                        let lang = *lang;
                        let class = if lang == current {
                            "lang-option lang-option--active"
                        } else {
                            "lang-option"
                        };
                        rsx! {
                            button {
                                key: "{lang.code()}",
                                class: "{class}",
                                onclick: move |_| {
                                    if let Some(mut localizer) = localizer_ctx {
                                        i18n::set_page_language(&mut localizer.write(), lang);
                                    }
                                    if let Some(mut code) = lang_ctx {
                                        code.set(lang);
                                    }
                                    open.set(false);
                                },
                                "{lang.native_name()}"
                            }
                        }
                    })}
                }
            }
        }
    }
}

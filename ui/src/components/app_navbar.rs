//! Application navbar: brand, shell-supplied nav links, language
//! selector. Re-renders on language change through the context signal
//! so the selector label stays in sync.

use dioxus::prelude::*;

use crate::components::LangSelector;
use crate::i18n::Lang;

#[component]
pub fn AppNavbar(children: Element) -> Element {
    // Establish a reactive dependency on the active language (if the
    // shell provided one) so the navbar re-renders after a switch.
    let lang_ctx: Option<Signal<Lang>> = try_use_context();
    let _lang_marker = lang_ctx.map(|lang| lang()).unwrap_or_default();

    rsx! {
        header { id: "navbar", class: "navbar",
            div { class: "navbar__inner",
                div { class: "navbar__brand",
                    span { class: "navbar__brand-mark", "Vernacular" }
                }

                nav { class: "navbar__links", {children} }

                div { class: "navbar__locale", LangSelector {} }
            }
        }
    }
}

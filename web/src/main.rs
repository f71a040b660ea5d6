use dioxus::prelude::*;

use ui::components::AppNavbar;
use ui::i18n::{self, PageLocalizer};
use ui::views::{Dashboard, Market};

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum Route {
    #[layout(WebNavbar)]
    #[route("/")]
    Dashboard {},
    #[route("/market")]
    Market {},
}

const MAIN_CSS: Asset = asset!("/assets/main.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    // The localizer is shared through context as an explicit value;
    // the language signal mirrors its current language for reactivity.
    let mut localizer = use_context_provider(|| {
        let mut localizer = PageLocalizer::new();
        localizer.restore_preference();
        Signal::new(localizer)
    });
    let mut lang = use_context_provider(|| Signal::new(localizer.peek().current()));

    // Startup: refresh catalogs from /translations/{code}.json (any
    // failure keeps the bundled table), then retranslate the page.
    use_effect(move || {
        spawn(async move {
            let fresh = i18n::fetch_remote_catalogs().await;
            let current = {
                let mut localizer = localizer.write();
                if !fresh.is_empty() {
                    localizer.install(fresh);
                }
                i18n::apply_to_page(&mut localizer);
                localizer.current()
            };
            // Nudge subscribers in case the saved language arrived
            // before the first view rendered.
            lang.set(current);
        });
    });

    rsx! {
        document::Link { rel: "stylesheet", href: MAIN_CSS }

        Router::<Route> {}
    }
}

/// A web-specific Router around the shared `AppNavbar` component
/// which allows us to use the web-specific `Route` enum.
#[component]
fn WebNavbar() -> Element {
    rsx! {
        AppNavbar {
            Link { class: "navbar__link", to: Route::Dashboard {},
                span { "data-i18n": "nav.dashboard", "Dashboard" }
            }
            Link { class: "navbar__link", to: Route::Market {},
                span { "data-i18n": "nav.market_lookup", "Market Lookup" }
            }
        }
        Outlet::<Route> {}
    }
}

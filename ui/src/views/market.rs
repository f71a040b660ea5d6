use dioxus::prelude::*;

use crate::i18n;

#[component]
pub fn Market() -> Element {
    i18n::use_apply_language();

    rsx! {
        section { class: "page page-market",
            h1 { "data-i18n": "market.title", "Market Lookup" }

            input {
                class: "page-market__search",
                r#type: "search",
                "data-i18n-placeholder": "market.search_placeholder",
                placeholder: "Search for stocks...",
            }

            div { class: "page-market__facts",
                span { class: "fact", "data-i18n": "market.industry", "Industry" }
                span { class: "fact", "data-i18n": "market.stock_price", "Stock Price" }
                span { class: "fact", "data-i18n": "market.website", "Website" }
            }

            h2 { "data-i18n": "market.latest_news", "Latest News & Sentiment" }
            p {
                class: "page-market__empty",
                "data-i18n": "market.no_news",
                "No news available for this stock."
            }
        }
    }
}

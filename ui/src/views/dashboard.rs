use dioxus::prelude::*;

use crate::i18n;

#[component]
pub fn Dashboard() -> Element {
    i18n::use_apply_language();

    rsx! {
        section { class: "page page-dashboard",
            h1 { "data-i18n": "dashboard.title", "Dashboard" }

            dl { class: "page-dashboard__stats",
                div { class: "stat",
                    dt { "data-i18n": "dashboard.total_purse", "Total Purse" }
                    dd { "—" }
                }
                div { class: "stat",
                    dt { "data-i18n": "dashboard.portfolio_value", "Portfolio Value" }
                    dd { "—" }
                }
                div { class: "stat",
                    dt { "data-i18n": "dashboard.profit_loss", "Profit/Loss" }
                    dd { "—" }
                }
                div { class: "stat",
                    dt { "data-i18n": "dashboard.total_return", "Total Return" }
                    dd { "—" }
                }
            }
        }
    }
}

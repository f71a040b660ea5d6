//! Demo pages. Each marks its translatable elements with `data-i18n`
//! attributes and keeps the English string inline.

mod dashboard;
mod market;

pub use dashboard::Dashboard;
pub use market::Market;

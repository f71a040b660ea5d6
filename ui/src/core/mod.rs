//! Framework-agnostic page plumbing used by the localization service.

pub mod document;
pub mod dom;

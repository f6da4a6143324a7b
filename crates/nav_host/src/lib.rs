//! Host-service contracts and pure classification logic for guarded
//! navigation.
//!
//! The crate is browser-free: the [`LinkNavigator`] trait abstracts the
//! mechanism that performs an outbound navigation, and the classifier
//! helpers resolve hrefs against the current location with plain `url`
//! parsing so every rule is unit-testable off the wasm target.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod classifier;
mod navigator;

pub use classifier::{classify_href, is_external_url, resolve_href, ClickIntent, HrefError};
pub use navigator::{effective_rel, LinkNavigator, NoopLinkNavigator};

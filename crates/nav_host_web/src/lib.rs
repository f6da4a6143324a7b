//! Browser adapters for the navigation host services.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use nav_host::{effective_rel, LinkNavigator};
use ui_kit_contract::LinkHints;

#[derive(Debug, Clone, Copy, Default)]
/// Navigator that performs the navigation through a synthetic anchor click,
/// so the browser applies its ordinary target/rel handling.
pub struct DomLinkNavigator;

impl LinkNavigator for DomLinkNavigator {
    fn open_link(&self, href: &str, hints: &LinkHints) -> Result<(), String> {
        #[cfg(target_arch = "wasm32")]
        {
            use wasm_bindgen::JsCast;

            let document = web_sys::window()
                .and_then(|window| window.document())
                .ok_or_else(|| "document unavailable".to_string())?;
            let body = document
                .body()
                .ok_or_else(|| "document body unavailable".to_string())?;

            let anchor = document
                .create_element("a")
                .map_err(|err| format!("anchor creation failed: {err:?}"))?
                .unchecked_into::<web_sys::HtmlAnchorElement>();
            anchor.set_href(href);
            if let Some(target) = hints.target.as_deref() {
                anchor.set_target(target);
            }
            anchor.set_rel(effective_rel(hints));

            body.append_child(&anchor)
                .map_err(|err| format!("anchor attach failed: {err:?}"))?;
            anchor.click();
            anchor.remove();
            Ok(())
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (href, hints, effective_rel(hints));
            Ok(())
        }
    }
}

/// Current document location, used as the base for href classification.
/// Empty off-browser, which the classifier treats as "nothing is external".
pub fn current_location_href() -> String {
    #[cfg(target_arch = "wasm32")]
    {
        web_sys::window()
            .and_then(|window| window.location().href().ok())
            .unwrap_or_default()
    }

    #[cfg(not(target_arch = "wasm32"))]
    {
        String::new()
    }
}

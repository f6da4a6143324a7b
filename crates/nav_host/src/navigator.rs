//! Link-navigation host-service contracts.

use ui_kit_contract::LinkHints;

/// Host service that performs an outbound navigation once it has been
/// confirmed. Implementations decide the mechanism (synthetic anchor click
/// in the browser, no-op elsewhere).
pub trait LinkNavigator {
    /// Navigates to `href` honoring the anchor hints.
    fn open_link(&self, href: &str, hints: &LinkHints) -> Result<(), String>;
}

#[derive(Debug, Clone, Copy, Default)]
/// No-op navigator for unsupported targets and tests.
pub struct NoopLinkNavigator;

impl LinkNavigator for NoopLinkNavigator {
    fn open_link(&self, _href: &str, _hints: &LinkHints) -> Result<(), String> {
        Ok(())
    }
}

/// Rel attribute a navigation should carry: an explicit rel wins, and a
/// `_blank` target without one gets the cross-origin isolation pair.
pub fn effective_rel(hints: &LinkHints) -> &str {
    match (&hints.rel, hints.target.as_deref()) {
        (Some(rel), _) => rel,
        (None, Some("_blank")) => "noopener noreferrer",
        (None, _) => "",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_target_defaults_to_noopener_noreferrer() {
        assert_eq!(effective_rel(&LinkHints::new_tab()), "noopener noreferrer");
    }

    #[test]
    fn explicit_rel_is_preserved() {
        let hints = LinkHints {
            target: Some("_blank".to_string()),
            rel: Some("external".to_string()),
        };
        assert_eq!(effective_rel(&hints), "external");
    }

    #[test]
    fn same_context_navigation_has_no_rel() {
        assert_eq!(effective_rel(&LinkHints::default()), "");
    }
}

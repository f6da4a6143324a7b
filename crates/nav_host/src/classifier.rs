//! Pure external-link classification shared by guard engines and components.

use thiserror::Error;
use ui_kit_contract::ExternalLinkPolicy;
use url::Url;

#[derive(Debug, Error)]
/// Failure to resolve an href against the current location.
pub enum HrefError {
    /// The current-location base is not an absolute URL.
    #[error("invalid base url: {0}")]
    Base(url::ParseError),
    /// The href does not parse, even relative to the base.
    #[error("invalid href: {0}")]
    Href(url::ParseError),
}

/// Resolves `href` the way an anchor element would: absolute hrefs stand on
/// their own, everything else is joined onto `base`.
pub fn resolve_href(href: &str, base: &str) -> Result<Url, HrefError> {
    let base = Url::parse(base).map_err(HrefError::Base)?;
    base.join(href).map_err(HrefError::Href)
}

/// Baseline classification: `mailto:`/`tel:` schemes and cross-origin
/// targets are external. Malformed hrefs classify as internal so ordinary
/// navigation proceeds instead of crashing.
pub fn is_external_url(href: &str, base: &str) -> bool {
    if href.starts_with("mailto:") || href.starts_with("tel:") {
        return true;
    }

    let Ok(base) = Url::parse(base) else {
        return false;
    };
    match base.join(href) {
        Ok(url) => url.origin() != base.origin(),
        Err(_) => false,
    }
}

/// Full policy-aware classification.
///
/// A non-empty allow-list replaces the origin check: only listed hosts count
/// as external. The bypass-list is applied after the allow-list and forces
/// listed hosts to internal, so a host on both lists is internal.
pub fn classify_href(href: &str, base: &str, policy: &ExternalLinkPolicy) -> bool {
    let mut external = is_external_url(href, base);

    if !policy.allowlist_hosts.is_empty() {
        external = match resolve_href(href, base) {
            Ok(url) => url
                .host_str()
                .map(|host| policy.allowlist_hosts.iter().any(|allowed| allowed == host))
                .unwrap_or(false),
            Err(_) => false,
        };
    }

    if !policy.bypass_hosts.is_empty() {
        if let Ok(url) = resolve_href(href, base) {
            let bypassed = url
                .host_str()
                .map(|host| policy.bypass_hosts.iter().any(|bypass| bypass == host))
                .unwrap_or(false);
            if bypassed {
                external = false;
            }
        }
    }

    external
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
/// Pointer-activation snapshot used to decide whether a click may be
/// intercepted by a guard.
pub struct ClickIntent {
    /// Pointer button index; 0 is the primary button.
    pub button: i16,
    /// Meta/command key held.
    pub meta: bool,
    /// Control key held.
    pub ctrl: bool,
    /// Shift key held.
    pub shift: bool,
    /// Alt/option key held.
    pub alt: bool,
}

impl ClickIntent {
    /// True for a plain primary-button activation with no modifier keys.
    /// Anything else keeps the browser's default behavior (new tab,
    /// context menu, download, ...).
    pub fn is_plain_primary(self) -> bool {
        self.button == 0 && !self.meta && !self.ctrl && !self.shift && !self.alt
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const BASE: &str = "https://app.example.com/settings";

    fn policy(allow: &[&str], bypass: &[&str]) -> ExternalLinkPolicy {
        ExternalLinkPolicy {
            allowlist_hosts: allow.iter().map(|host| host.to_string()).collect(),
            bypass_hosts: bypass.iter().map(|host| host.to_string()).collect(),
        }
    }

    #[test]
    fn baseline_classification_matches_expected_cases() {
        let cases = [
            ("https://other.example.org/docs", true),
            ("mailto:team@example.com", true),
            ("tel:+15550100", true),
            ("https://app.example.com/profile", false),
            ("/relative/path", false),
            ("#fragment", false),
            ("http://app.example.com/profile", true), // scheme change is a new origin
            ("https://app.example.com:8443/", true),  // port change is a new origin
        ];

        for (href, expected) in cases {
            assert_eq!(is_external_url(href, BASE), expected, "href={href:?}");
        }
    }

    #[test]
    fn malformed_href_is_not_external() {
        assert!(!is_external_url("https://", BASE));
        assert!(!classify_href("https://", BASE, &policy(&["a.com"], &[])));
    }

    #[test]
    fn malformed_base_is_not_external() {
        assert!(!is_external_url("https://other.example.org", "not a url"));
    }

    #[test]
    fn allowlist_restricts_external_to_listed_hosts() {
        let policy = policy(&["partner.example.net"], &[]);
        assert!(classify_href(
            "https://partner.example.net/page",
            BASE,
            &policy
        ));
        // Cross-origin but unlisted: treated as internal under an allow-list.
        assert!(!classify_href("https://other.example.org", BASE, &policy));
    }

    #[test]
    fn allowlist_with_hostless_scheme_is_not_external() {
        // mailto has no host, so it cannot match an allow-list entry.
        let policy = policy(&["partner.example.net"], &[]);
        assert!(!classify_href("mailto:team@example.com", BASE, &policy));
    }

    #[test]
    fn bypass_hosts_never_warn() {
        let policy = policy(&[], &["docs.example.org"]);
        assert!(!classify_href("https://docs.example.org/guide", BASE, &policy));
        assert!(classify_href("https://other.example.org", BASE, &policy));
    }

    #[test]
    fn bypass_overrides_allowlist() {
        // Host on both lists: the bypass check runs second and wins.
        let policy = policy(&["partner.example.net"], &["partner.example.net"]);
        assert!(!classify_href(
            "https://partner.example.net/page",
            BASE,
            &policy
        ));
    }

    #[test]
    fn plain_primary_click_is_required_for_interception() {
        assert!(ClickIntent::default().is_plain_primary());

        let shifted = ClickIntent {
            shift: true,
            ..ClickIntent::default()
        };
        assert!(!shifted.is_plain_primary());

        let middle = ClickIntent {
            button: 1,
            ..ClickIntent::default()
        };
        assert!(!middle.is_plain_primary());
    }
}

//! Shared contract types for the component library.
//!
//! The crate owns the plain data shapes exchanged between the headless
//! engines, the web adapters, and the rendering components: toast severity
//! tokens, leave-confirmation copy, external-link classification policy, and
//! anchor navigation hints. No behavior lives here beyond token mapping and
//! defaults.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
/// Semantic severity of a queued toast notification.
pub enum ToastVariant {
    /// Neutral informational message.
    Info,
    /// Positive completion message.
    Success,
    /// Failure message.
    Error,
}

impl Default for ToastVariant {
    fn default() -> Self {
        Self::Info
    }
}

impl ToastVariant {
    /// Stable token consumed by the `data-ui-variant` DOM contract.
    pub fn token(self) -> &'static str {
        match self {
            Self::Info => "info",
            Self::Success => "success",
            Self::Error => "error",
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
/// Copy rendered by a leave-confirmation surface.
pub struct LeaveCopy {
    /// Dialog heading.
    pub title: String,
    /// Dialog body text.
    pub message: String,
    /// Label of the button that confirms leaving.
    pub confirm_label: String,
    /// Label of the button that stays.
    pub cancel_label: String,
}

impl Default for LeaveCopy {
    fn default() -> Self {
        Self {
            title: "Leave without saving?".to_string(),
            message: "You have unsaved changes. If you leave now, your changes will be lost."
                .to_string(),
            confirm_label: "Leave".to_string(),
            cancel_label: "Stay".to_string(),
        }
    }
}

impl LeaveCopy {
    /// Default copy for the external-link disclaimer dialog.
    pub fn external_link_default() -> Self {
        Self {
            title: "You are now leaving this website".to_string(),
            message: "The site you are about to visit is a third-party website. We are not \
                      responsible for its content or privacy practices."
                .to_string(),
            confirm_label: "Continue".to_string(),
            cancel_label: "Cancel".to_string(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Host-list configuration for the external-link classifier.
///
/// An empty list means the corresponding rule is inactive. When
/// `allowlist_hosts` is non-empty, only listed hosts classify as external.
/// `bypass_hosts` is applied after the allow-list and forces listed hosts to
/// classify as internal.
pub struct ExternalLinkPolicy {
    /// Hosts that are the only ones treated as external, when non-empty.
    pub allowlist_hosts: Vec<String>,
    /// Hosts that never trigger the disclaimer, even when cross-origin.
    pub bypass_hosts: Vec<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
/// Navigation hints carried alongside a guarded anchor href.
pub struct LinkHints {
    /// Anchor `target` attribute, e.g. `_blank`.
    pub target: Option<String>,
    /// Explicit anchor `rel` attribute. When absent and `target` is
    /// `_blank`, navigation applies `noopener noreferrer`.
    pub rel: Option<String>,
}

impl LinkHints {
    /// Hints for opening in a new browsing context with no explicit rel.
    pub fn new_tab() -> Self {
        Self {
            target: Some("_blank".to_string()),
            rel: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn toast_variant_defaults_to_info() {
        assert_eq!(ToastVariant::default(), ToastVariant::Info);
        assert_eq!(ToastVariant::default().token(), "info");
    }

    #[test]
    fn leave_copy_defaults_match_unsaved_changes_dialog() {
        let copy = LeaveCopy::default();
        assert_eq!(copy.title, "Leave without saving?");
        assert_eq!(copy.confirm_label, "Leave");
        assert_eq!(copy.cancel_label, "Stay");
    }

    #[test]
    fn empty_policy_has_no_active_rules() {
        let policy = ExternalLinkPolicy::default();
        assert!(policy.allowlist_hosts.is_empty());
        assert!(policy.bypass_hosts.is_empty());
    }

    #[test]
    fn policy_loads_from_json_config() {
        let policy: ExternalLinkPolicy = serde_json::from_str(
            r#"{ "allowlist_hosts": ["partner.example.net"], "bypass_hosts": ["docs.example.org"] }"#,
        )
        .expect("policy json");
        assert_eq!(policy.allowlist_hosts, vec!["partner.example.net"]);
        assert_eq!(policy.bypass_hosts, vec!["docs.example.org"]);
    }
}

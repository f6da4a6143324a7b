//! Leptos component library for the demo application surface.
//!
//! The crate owns the reusable primitives (buttons, cards, fields, modals,
//! tabs) plus the two stateful providers — toast notifications and
//! leave-navigation guards — and the stable `data-ui-*` DOM contract the
//! stylesheet layers consume. Apps compose these primitives instead of
//! emitting ad hoc control markup.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod primitives;

pub use primitives::{
    use_before_unload, use_external_link_guard, use_toasts, Button, ButtonVariant, Card, CardBody,
    CardHeader, ExternalLink, ExternalLinkGuard, LinkVariant, Modal, Tab, TabList, TabPanel, Tabs,
    TabsOrientation, TextField, ToastProvider, ToastViewport, WarnButton, WarnLink,
    WarnOnLeaveModal,
};

/// Convenience imports for application crates consuming the component set.
pub mod prelude {
    pub use crate::{
        use_before_unload, use_external_link_guard, use_toasts, Button, ButtonVariant, Card,
        CardBody, CardHeader, ExternalLink, ExternalLinkGuard, LinkVariant, Modal, Tab, TabList,
        TabPanel, Tabs, TabsOrientation, TextField, ToastProvider, ToastViewport, WarnButton,
        WarnLink, WarnOnLeaveModal,
    };
    pub use leave_guard::LeaveGuard;
    pub use toast_queue::{ToastAction, ToastInput, ToastQueue};
    pub use ui_kit_contract::{ExternalLinkPolicy, LeaveCopy, LinkHints, ToastVariant};
}

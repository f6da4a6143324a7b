//! Shared control, overlay, navigation, toast, and guard primitives.

use std::cell::Cell;

use leptos::ev::{KeyboardEvent, MouseEvent};
use leptos::*;

mod controls;
mod data_display;
mod guard;
mod navigation;
mod overlays;
mod toast;

pub use controls::{Button, TextField};
pub use data_display::{Card, CardBody, CardHeader};
pub use guard::{
    use_before_unload, use_external_link_guard, ExternalLink, ExternalLinkGuard, WarnButton,
    WarnLink,
};
pub use navigation::{Tab, TabList, TabPanel, Tabs};
pub use overlays::{Modal, WarnOnLeaveModal};
pub use toast::{use_toasts, ToastProvider, ToastViewport};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Shared button variants.
pub enum ButtonVariant {
    /// Emphasized action button.
    Primary,
    /// Quiet/borderless button.
    Ghost,
}

impl Default for ButtonVariant {
    fn default() -> Self {
        Self::Primary
    }
}

impl ButtonVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Primary => "primary",
            Self::Ghost => "ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Visual treatments for guarded anchors.
pub enum LinkVariant {
    /// Plain hyperlink treatment.
    Link,
    /// Button-shaped treatment.
    Button,
}

impl Default for LinkVariant {
    fn default() -> Self {
        Self::Link
    }
}

impl LinkVariant {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Link => "link",
            Self::Button => "button",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
/// Tab list orientations.
pub enum TabsOrientation {
    /// Triggers laid out in a row; Left/Right arrows move focus.
    Horizontal,
    /// Triggers laid out in a column; Up/Down arrows move focus.
    Vertical,
}

impl Default for TabsOrientation {
    fn default() -> Self {
        Self::Horizontal
    }
}

impl TabsOrientation {
    pub(crate) fn token(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

pub(crate) fn merge_layout_class(base: &'static str, layout_class: Option<&'static str>) -> String {
    match layout_class {
        Some(layout_class) if !layout_class.is_empty() => format!("{base} {layout_class}"),
        _ => base.to_string(),
    }
}

pub(crate) fn bool_token(value: bool) -> &'static str {
    if value {
        "true"
    } else {
        "false"
    }
}

/// Per-instance DOM id generation for label/description wiring.
pub(crate) fn next_instance_id(prefix: &str) -> String {
    thread_local! {
        static NEXT_INSTANCE_ID: Cell<u64> = const { Cell::new(0) };
    }
    let next = NEXT_INSTANCE_ID.with(|cell| {
        let next = cell.get().saturating_add(1);
        cell.set(next);
        next
    });
    format!("ui-{prefix}-{next}")
}

//! Headless leave-confirmation state machines.
//!
//! Two engines share one shape — `Idle` / `PendingConfirmation` with a
//! single pending slot that a new request silently replaces:
//!
//! - [`LeaveGuard`] defers an arbitrary in-app action behind a confirmation
//!   surface while its enablement signal is true.
//! - [`ExternalLinkGuardState`] defers outbound anchor navigation behind the
//!   disclaimer dialog, classifying hrefs with the configured policy and
//!   performing confirmed navigation through a [`LinkNavigator`].
//!
//! Confirmation waits indefinitely; there is no timeout. `confirm`/`cancel`
//! while idle are safe no-ops.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{cell::RefCell, rc::Rc};

use leptos::{
    create_rw_signal, logging, ReadSignal, RwSignal, Signal, SignalGetUntracked, SignalSet,
};
use nav_host::{classify_href, LinkNavigator};
use ui_kit_contract::{ExternalLinkPolicy, LeaveCopy, LinkHints};

type PendingAction = Rc<RefCell<Option<Box<dyn FnOnce()>>>>;

#[derive(Clone)]
/// Guard that defers "leaving" actions behind a user confirmation.
///
/// At most one action is pending at a time; requesting again before
/// resolution replaces the stored action without running it.
pub struct LeaveGuard {
    should_warn: Signal<bool>,
    open: RwSignal<bool>,
    pending: PendingAction,
}

impl LeaveGuard {
    /// Creates a guard whose enablement is read from `should_warn` at the
    /// moment each guarded action fires, never latched.
    pub fn new(should_warn: Signal<bool>) -> Self {
        Self {
            should_warn,
            open: create_rw_signal(false),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Whether a confirmation surface should currently be visible.
    pub fn open(&self) -> ReadSignal<bool> {
        self.open.read_only()
    }

    /// Current enablement, read untracked at the moment of asking.
    pub fn should_warn(&self) -> bool {
        self.should_warn.get_untracked()
    }

    /// Runs `action` immediately when warnings are disabled; otherwise
    /// stores it as the pending action and opens the confirmation surface.
    pub fn request_leave(&self, action: impl FnOnce() + 'static) {
        if !self.should_warn.get_untracked() {
            action();
            return;
        }

        *self.pending.borrow_mut() = Some(Box::new(action));
        self.open.set(true);
    }

    /// Runs the pending action exactly once and closes the surface.
    pub fn confirm(&self) {
        let action = self.pending.borrow_mut().take();
        self.open.set(false);
        if let Some(action) = action {
            action();
        }
    }

    /// Discards the pending action without running it and closes the
    /// surface.
    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
        self.open.set(false);
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
/// Deferred outbound navigation awaiting confirmation.
pub struct PendingLink {
    /// Target location.
    pub href: String,
    /// Anchor navigation hints.
    pub hints: LinkHints,
}

#[derive(Clone)]
/// Shared state behind an external-link guard provider.
pub struct ExternalLinkGuardState {
    policy: ExternalLinkPolicy,
    copy: LeaveCopy,
    navigator: Rc<dyn LinkNavigator>,
    base_href: Rc<dyn Fn() -> String>,
    open: RwSignal<bool>,
    pending: Rc<RefCell<Option<PendingLink>>>,
}

impl ExternalLinkGuardState {
    /// Creates guard state with the given classification policy, dialog
    /// copy, navigation service, and current-location source. The location
    /// is re-read for every classification so in-app route changes are
    /// honored.
    pub fn new(
        policy: ExternalLinkPolicy,
        copy: LeaveCopy,
        navigator: Rc<dyn LinkNavigator>,
        base_href: impl Fn() -> String + 'static,
    ) -> Self {
        Self {
            policy,
            copy,
            navigator,
            base_href: Rc::new(base_href),
            open: create_rw_signal(false),
            pending: Rc::new(RefCell::new(None)),
        }
    }

    /// Dialog copy for the rendering collaborator.
    pub fn copy(&self) -> &LeaveCopy {
        &self.copy
    }

    /// Whether the disclaimer dialog should currently be visible.
    pub fn open(&self) -> ReadSignal<bool> {
        self.open.read_only()
    }

    /// Classifies `href` under the configured policy against the current
    /// location.
    pub fn is_external(&self, href: &str) -> bool {
        classify_href(href, &(self.base_href)(), &self.policy)
    }

    /// Stores `href` as the pending navigation (replacing any prior one
    /// without navigating) and opens the disclaimer dialog.
    pub fn confirm_external_link(&self, href: impl Into<String>, hints: LinkHints) {
        *self.pending.borrow_mut() = Some(PendingLink {
            href: href.into(),
            hints,
        });
        self.open.set(true);
    }

    /// Performs the pending navigation and closes the dialog.
    pub fn confirm(&self) {
        let pending = self.pending.borrow_mut().take();
        self.open.set(false);
        let Some(pending) = pending else {
            return;
        };
        if let Err(err) = self.navigator.open_link(&pending.href, &pending.hints) {
            logging::warn!("external navigation failed: {err}");
        }
    }

    /// Discards the pending navigation and closes the dialog.
    pub fn cancel(&self) {
        self.pending.borrow_mut().take();
        self.open.set(false);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn disabled_guard_runs_action_synchronously() {
        let _ = leptos::create_runtime();
        let warn = create_rw_signal(false);
        let guard = LeaveGuard::new(warn.into());

        let runs = Rc::new(Cell::new(0u32));
        let counter = runs.clone();
        guard.request_leave(move || counter.set(counter.get() + 1));

        assert_eq!(runs.get(), 1);
        assert!(!guard.open().get_untracked());
    }

    #[test]
    fn enabled_guard_defers_until_confirm() {
        let _ = leptos::create_runtime();
        let warn = create_rw_signal(true);
        let guard = LeaveGuard::new(warn.into());

        let runs = Rc::new(Cell::new(0u32));
        let counter = runs.clone();
        guard.request_leave(move || counter.set(counter.get() + 1));

        assert_eq!(runs.get(), 0);
        assert!(guard.open().get_untracked());

        guard.confirm();
        assert_eq!(runs.get(), 1);
        assert!(!guard.open().get_untracked());

        // The action was consumed; a second confirm is a no-op.
        guard.confirm();
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn cancel_discards_without_running() {
        let _ = leptos::create_runtime();
        let warn = create_rw_signal(true);
        let guard = LeaveGuard::new(warn.into());

        let runs = Rc::new(Cell::new(0u32));
        let counter = runs.clone();
        guard.request_leave(move || counter.set(counter.get() + 1));
        guard.cancel();

        assert_eq!(runs.get(), 0);
        assert!(!guard.open().get_untracked());
    }

    #[test]
    fn new_request_replaces_pending_action_silently() {
        let _ = leptos::create_runtime();
        let warn = create_rw_signal(true);
        let guard = LeaveGuard::new(warn.into());

        let first = Rc::new(Cell::new(0u32));
        let second = Rc::new(Cell::new(0u32));
        let first_counter = first.clone();
        let second_counter = second.clone();

        guard.request_leave(move || first_counter.set(first_counter.get() + 1));
        guard.request_leave(move || second_counter.set(second_counter.get() + 1));
        guard.confirm();

        assert_eq!(first.get(), 0);
        assert_eq!(second.get(), 1);
    }

    #[test]
    fn confirm_and_cancel_while_idle_are_noops() {
        let _ = leptos::create_runtime();
        let warn = create_rw_signal(true);
        let guard = LeaveGuard::new(warn.into());

        guard.confirm();
        guard.cancel();
        assert!(!guard.open().get_untracked());
    }

    #[test]
    fn enablement_is_read_at_fire_time() {
        let _ = leptos::create_runtime();
        let warn = create_rw_signal(true);
        let guard = LeaveGuard::new(warn.into());

        warn.set(false);
        let runs = Rc::new(Cell::new(0u32));
        let counter = runs.clone();
        guard.request_leave(move || counter.set(counter.get() + 1));

        assert_eq!(runs.get(), 1);
    }

    #[derive(Clone, Default)]
    struct RecordingNavigator {
        opened: Rc<RefCell<Vec<PendingLink>>>,
    }

    impl LinkNavigator for RecordingNavigator {
        fn open_link(&self, href: &str, hints: &LinkHints) -> Result<(), String> {
            self.opened.borrow_mut().push(PendingLink {
                href: href.to_string(),
                hints: hints.clone(),
            });
            Ok(())
        }
    }

    fn link_guard() -> (ExternalLinkGuardState, RecordingNavigator) {
        let navigator = RecordingNavigator::default();
        let state = ExternalLinkGuardState::new(
            ExternalLinkPolicy::default(),
            LeaveCopy::external_link_default(),
            Rc::new(navigator.clone()),
            || "https://app.example.com/".to_string(),
        );
        (state, navigator)
    }

    #[test]
    fn confirmed_link_navigates_once() {
        let _ = leptos::create_runtime();
        let (state, navigator) = link_guard();

        assert!(state.is_external("https://other.example.org"));
        state.confirm_external_link("https://other.example.org", LinkHints::new_tab());
        assert!(state.open().get_untracked());

        state.confirm();
        state.confirm();

        let opened = navigator.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].href, "https://other.example.org");
        assert!(!state.open().get_untracked());
    }

    #[test]
    fn cancelled_link_never_navigates() {
        let _ = leptos::create_runtime();
        let (state, navigator) = link_guard();

        state.confirm_external_link("https://other.example.org", LinkHints::default());
        state.cancel();

        assert!(navigator.opened.borrow().is_empty());
        assert!(!state.open().get_untracked());
    }

    #[test]
    fn new_pending_link_replaces_prior() {
        let _ = leptos::create_runtime();
        let (state, navigator) = link_guard();

        state.confirm_external_link("https://first.example.org", LinkHints::default());
        state.confirm_external_link("https://second.example.org", LinkHints::default());
        state.confirm();

        let opened = navigator.opened.borrow();
        assert_eq!(opened.len(), 1);
        assert_eq!(opened[0].href, "https://second.example.org");
    }

    #[test]
    fn same_origin_href_is_internal() {
        let _ = leptos::create_runtime();
        let (state, _) = link_guard();
        assert!(!state.is_external("/docs"));
        assert!(!state.is_external("https://app.example.com/docs"));
    }
}

use super::*;

use std::rc::Rc;

use leave_guard::{ExternalLinkGuardState, LeaveGuard};
use nav_host::{effective_rel, ClickIntent, LinkNavigator};
use nav_host_web::DomLinkNavigator;
use ui_kit_contract::{ExternalLinkPolicy, LeaveCopy, LinkHints};

/// Arms the browser's native leave prompt while `when` reads true.
///
/// Best effort only: the browser owns the prompt copy and may skip it
/// entirely without a prior user gesture. The listener is removed when the
/// calling scope is disposed.
pub fn use_before_unload(when: Signal<bool>) {
    let listener = window_event_listener(ev::beforeunload, move |ev| {
        if when.get_untracked() {
            ev.prevent_default();
            ev.set_return_value("");
        }
    });
    on_cleanup(move || listener.remove());
}

fn click_intent(ev: &MouseEvent) -> ClickIntent {
    ClickIntent {
        button: ev.button(),
        meta: ev.meta_key(),
        ctrl: ev.ctrl_key(),
        shift: ev.shift_key(),
        alt: ev.alt_key(),
    }
}

#[component]
/// Button whose activation is deferred behind the given [`LeaveGuard`].
///
/// While the guard warns, clicking stores `on_activate` as the pending
/// action and opens the guard's confirmation surface; otherwise it runs
/// immediately.
pub fn WarnButton(
    /// Guard deciding whether activation needs confirmation.
    guard: LeaveGuard,
    /// Runs once the activation is allowed through.
    on_activate: Callback<()>,
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    let on_click = Callback::new(move |_| {
        guard.request_leave(move || on_activate.call(()));
    });

    view! {
        <Button variant=variant disabled=disabled on_click=on_click>
            {children()}
        </Button>
    }
}

#[component]
/// Anchor whose navigation is deferred behind the given [`LeaveGuard`].
///
/// Only a plain primary click is intercepted; modified and auxiliary clicks,
/// and clicks a caller handler already prevented, keep native browser
/// behavior. With the guard disabled the anchor navigates natively too.
pub fn WarnLink(
    /// Guard deciding whether navigation needs confirmation.
    guard: LeaveGuard,
    /// Target location.
    #[prop(into)]
    href: String,
    #[prop(optional, into)] target: Option<String>,
    #[prop(optional, into)] rel: Option<String>,
    #[prop(optional)] variant: LinkVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Navigation service for the confirmed branch; the DOM navigator by
    /// default.
    #[prop(optional)]
    navigator: Option<Rc<dyn LinkNavigator>>,
    /// Caller click handler, run before any guard handling.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let navigator: Rc<dyn LinkNavigator> = navigator.unwrap_or_else(|| Rc::new(DomLinkNavigator));
    let hints = LinkHints {
        target: target.clone(),
        rel: rel.clone(),
    };
    let anchor_rel = {
        let rel = effective_rel(&hints).to_string();
        (!rel.is_empty()).then_some(rel)
    };
    let click_href = href.clone();

    view! {
        <a
            class=merge_layout_class("ui-link", layout_class)
            href=href
            target=target
            rel=anchor_rel
            data-ui-primitive="true"
            data-ui-kind="warn-link"
            data-ui-variant=variant.token()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev.clone());
                }
                if ev.default_prevented() {
                    return;
                }
                if !click_intent(&ev).is_plain_primary() {
                    return;
                }
                if !guard.should_warn() {
                    return;
                }

                ev.prevent_default();
                let navigator = navigator.clone();
                let href = click_href.clone();
                let hints = hints.clone();
                guard.request_leave(move || {
                    if let Err(err) = navigator.open_link(&href, &hints) {
                        logging::warn!("guarded navigation failed: {err}");
                    }
                });
            }
        >
            {children()}
        </a>
    }
}

/// Returns the ambient [`ExternalLinkGuardState`] installed by
/// [`ExternalLinkGuard`].
///
/// # Panics
///
/// Panics when called outside a provider subtree.
pub fn use_external_link_guard() -> ExternalLinkGuardState {
    use_context::<ExternalLinkGuardState>()
        .expect("ExternalLinkGuardState not provided; wrap the tree in <ExternalLinkGuard />")
}

#[component]
/// Provider for the external-link disclaimer: installs the guard state in
/// context and renders the shared confirmation dialog after the children.
pub fn ExternalLinkGuard(
    /// Host-list classification policy; everything cross-origin by default.
    #[prop(optional)]
    policy: ExternalLinkPolicy,
    /// Dialog copy; the third-party disclaimer wording by default.
    #[prop(optional)]
    copy: Option<LeaveCopy>,
    /// Navigation service for confirmed links; the DOM navigator by default.
    #[prop(optional)]
    navigator: Option<Rc<dyn LinkNavigator>>,
    children: Children,
) -> impl IntoView {
    let navigator: Rc<dyn LinkNavigator> = navigator.unwrap_or_else(|| Rc::new(DomLinkNavigator));
    let state = ExternalLinkGuardState::new(
        policy,
        copy.unwrap_or_else(LeaveCopy::external_link_default),
        navigator,
        nav_host_web::current_location_href,
    );
    provide_context(state.clone());

    let open = state.open();
    let dialog_copy = state.copy().clone();
    let confirm_state = state.clone();
    let cancel_state = state;

    view! {
        {children()}
        <WarnOnLeaveModal
            open=open
            copy=dialog_copy
            on_confirm=Callback::new(move |()| confirm_state.confirm())
            on_cancel=Callback::new(move |()| cancel_state.cancel())
        />
    }
}

#[component]
/// Anchor that routes through the ambient external-link disclaimer.
///
/// A plain primary click on an href that classifies as external is
/// intercepted and handed to the guard; internal hrefs, modified clicks, and
/// clicks a caller handler already prevented navigate natively.
pub fn ExternalLink(
    /// Target location.
    #[prop(into)]
    href: String,
    #[prop(optional, into)] target: Option<String>,
    #[prop(optional, into)] rel: Option<String>,
    #[prop(optional)] variant: LinkVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    /// Caller click handler, run before any guard handling.
    #[prop(optional)]
    on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    let state = use_external_link_guard();
    let hints = LinkHints {
        target: target.clone(),
        rel: rel.clone(),
    };
    let anchor_rel = {
        let rel = effective_rel(&hints).to_string();
        (!rel.is_empty()).then_some(rel)
    };
    let click_href = href.clone();

    view! {
        <a
            class=merge_layout_class("ui-link", layout_class)
            href=href
            target=target
            rel=anchor_rel
            data-ui-primitive="true"
            data-ui-kind="external-link"
            data-ui-variant=variant.token()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev.clone());
                }
                if ev.default_prevented() {
                    return;
                }
                if !click_intent(&ev).is_plain_primary() {
                    return;
                }
                if !state.is_external(&click_href) {
                    return;
                }

                ev.prevent_default();
                state.confirm_external_link(click_href.clone(), hints.clone());
            }
        >
            {children()}
        </a>
    }
}

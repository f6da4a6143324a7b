use super::*;

use ui_kit_contract::LeaveCopy;

/// Toggles the document-body scroll lock held while an overlay is open.
fn set_body_scroll_locked(locked: bool) {
    #[cfg(target_arch = "wasm32")]
    {
        let Some(body) = web_sys::window()
            .and_then(|window| window.document())
            .and_then(|document| document.body())
        else {
            return;
        };
        let result = if locked {
            body.style().set_property("overflow", "hidden")
        } else {
            body.style().remove_property("overflow").map(|_| ())
        };
        if result.is_err() {
            logging::warn!("body scroll lock toggle failed");
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    let _ = locked;
}

#[component]
/// Dialog overlay rendered through a portal attached to the document body,
/// with teardown guaranteed on unmount.
///
/// While open, body scrolling is locked; Escape and backdrop mouse-down
/// close the dialog unless opted out.
pub fn Modal(
    /// Whether the dialog is visible.
    #[prop(into)]
    open: MaybeSignal<bool>,
    /// Optional heading, also used as the dialog's accessible label.
    #[prop(optional, into)]
    title: Option<String>,
    /// Invoked for every close request (backdrop, Escape, close button).
    on_close: Callback<()>,
    #[prop(default = true)] close_on_backdrop: bool,
    #[prop(default = true)] close_on_escape: bool,
    children: ChildrenFn,
) -> impl IntoView {
    // Copyable handles so the portal and show closures stay `Fn`.
    let open = Signal::derive(move || open.get());
    let title = store_value(title);
    let children = store_value(children);

    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if close_on_escape && ev.key() == "Escape" && open.get_untracked() {
            ev.prevent_default();
            on_close.call(());
        }
    });
    on_cleanup(move || escape_listener.remove());

    create_effect(move |_| set_body_scroll_locked(open.get()));
    on_cleanup(|| set_body_scroll_locked(false));

    view! {
        <Portal>
            <Show when=move || open.get() fallback=|| ()>
                <div
                    class="ui-modal-backdrop"
                    data-ui-primitive="true"
                    data-ui-kind="modal-backdrop"
                    on:mousedown=move |_| {
                        if close_on_backdrop {
                            on_close.call(());
                        }
                    }
                >
                    <div
                        class="ui-modal"
                        role="dialog"
                        aria-modal="true"
                        aria-label=move || title.get_value()
                        data-ui-primitive="true"
                        data-ui-kind="modal"
                        on:mousedown=|ev| ev.stop_propagation()
                    >
                        <header data-ui-slot="header">
                            {title.get_value().map(|title| view! { <h2 data-ui-slot="title">{title}</h2> })}
                            <button
                                type="button"
                                aria-label="Close"
                                data-ui-slot="close"
                                on:click=move |_| on_close.call(())
                            >
                                "\u{2715}"
                            </button>
                        </header>
                        <div data-ui-slot="body">{children.with_value(|children| children())}</div>
                    </div>
                </div>
            </Show>
        </Portal>
    }
}

#[component]
/// Leave-confirmation surface consumed by the navigation guards.
///
/// Purely presentational: receives `open` plus confirm/cancel callbacks from
/// a guard and renders the configured copy. Backdrop clicks cancel.
pub fn WarnOnLeaveModal(
    /// Whether the confirmation surface is visible.
    #[prop(into)]
    open: MaybeSignal<bool>,
    /// Dialog copy; defaults to the unsaved-changes wording.
    #[prop(optional)]
    copy: Option<LeaveCopy>,
    /// Invoked when the user confirms leaving.
    on_confirm: Callback<()>,
    /// Invoked when the user stays.
    on_cancel: Callback<()>,
) -> impl IntoView {
    let copy = copy.unwrap_or_default();
    let title_id = next_instance_id("leave-title");

    view! {
        <Show when=move || open.get() fallback=|| ()>
            <div
                class="ui-modal-backdrop"
                role="presentation"
                data-ui-primitive="true"
                data-ui-kind="leave-backdrop"
                on:click=move |_| on_cancel.call(())
            >
                <div
                    class="ui-modal"
                    role="dialog"
                    aria-modal="true"
                    aria-labelledby=title_id.clone()
                    data-ui-primitive="true"
                    data-ui-kind="leave-modal"
                    on:click=|ev| ev.stop_propagation()
                >
                    <h2 data-ui-slot="title" id=title_id.clone()>{copy.title.clone()}</h2>
                    <div data-ui-slot="body">{copy.message.clone()}</div>
                    <div data-ui-slot="actions">
                        <button
                            type="button"
                            data-ui-slot="cancel"
                            on:click=move |_| on_cancel.call(())
                        >
                            {copy.cancel_label.clone()}
                        </button>
                        <button
                            type="button"
                            data-ui-slot="confirm"
                            on:click=move |_| on_confirm.call(())
                        >
                            {copy.confirm_label.clone()}
                        </button>
                    </div>
                </div>
            </div>
        </Show>
    }
}

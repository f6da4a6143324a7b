use super::*;

use std::rc::Rc;

use toast_queue::{TimeoutScheduler, ToastItem, ToastQueue, DEFAULT_MAX_TOASTS};

/// Returns the ambient [`ToastQueue`] installed by [`ToastProvider`].
///
/// # Panics
///
/// Panics when called outside a provider subtree.
pub fn use_toasts() -> ToastQueue {
    use_context::<ToastQueue>().expect("ToastQueue not provided; wrap the tree in <ToastProvider />")
}

#[component]
/// Installs a [`ToastQueue`] in context and renders its viewport after the
/// children, portalled to the document body by default.
pub fn ToastProvider(
    /// Live-toast cap; the oldest toast is evicted beyond it.
    #[prop(default = DEFAULT_MAX_TOASTS)]
    max_toasts: usize,
    /// Renders the viewport through a body portal. Disable to keep it inline
    /// where the provider sits.
    #[prop(default = true)]
    portal: bool,
    children: Children,
) -> impl IntoView {
    let queue = ToastQueue::new(max_toasts, Rc::new(TimeoutScheduler));
    provide_context(queue);

    let viewport = if portal {
        view! {
            <Portal>
                <ToastViewport/>
            </Portal>
        }
        .into_view()
    } else {
        view! { <ToastViewport/> }.into_view()
    };

    view! {
        {children()}
        {viewport}
    }
}

#[component]
/// Renders the live toasts of the ambient queue, newest first.
///
/// The region announces additions politely; Escape dismisses every toast
/// while any are showing.
pub fn ToastViewport() -> impl IntoView {
    let queue = use_toasts();
    let toasts = queue.toasts();

    let escape_queue = queue.clone();
    let escape_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.key() == "Escape" && !escape_queue.toasts().get_untracked().is_empty() {
            escape_queue.dismiss_all();
        }
    });
    on_cleanup(move || escape_listener.remove());

    view! {
        <div
            class="ui-toast-viewport"
            role="region"
            aria-label="Notifications"
            aria-live="polite"
            aria-relevant="additions removals"
            data-ui-primitive="true"
            data-ui-kind="toast-viewport"
        >
            <For each=move || toasts.get() key=|item| item.id let:item>
                <ToastCard item=item/>
            </For>
        </div>
    }
}

#[component]
fn ToastCard(item: ToastItem) -> impl IntoView {
    let queue = use_toasts();
    let id = item.id;
    let action_queue = queue.clone();

    view! {
        <div
            class="ui-toast"
            role="status"
            data-ui-primitive="true"
            data-ui-kind="toast"
            data-ui-variant=item.variant.token()
        >
            {item.title.map(|title| view! { <div data-ui-slot="title">{title}</div> })}
            <div data-ui-slot="message">{item.message}</div>
            {item.action.map(|action| {
                view! {
                    <button
                        type="button"
                        data-ui-slot="action"
                        on:click=move |_| action_queue.run_action(id)
                    >
                        {action.label}
                    </button>
                }
            })}
            <button
                type="button"
                aria-label="Dismiss"
                data-ui-slot="dismiss"
                on:click=move |_| queue.dismiss(id)
            >
                "\u{2715}"
            </button>
        </div>
    }
}

//! Headless notification-queue engine.
//!
//! [`ToastQueue`] owns the ordered collection of live toasts behind a
//! reactive signal: newest first, capped at a configured maximum with the
//! oldest evicted from the tail. Auto-expiry is delegated to an
//! [`ExpiryScheduler`] so queue semantics stay testable without a browser
//! event loop. Removal is idempotent by id, which makes timer callbacks and
//! manual dismissal safe in any order.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use std::{cell::Cell, rc::Rc, time::Duration};

use leptos::{
    create_rw_signal, logging, Callback, Callable, ReadSignal, RwSignal, SignalGetUntracked,
    SignalUpdate,
};
use ui_kit_contract::ToastVariant;

/// Default live-toast cap.
pub const DEFAULT_MAX_TOASTS: usize = 4;

/// Default display duration before auto-dismissal.
pub const DEFAULT_TOAST_DURATION_MS: i64 = 3500;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
/// Identifier of a live toast, unique within its queue.
pub struct ToastId(u64);

#[derive(Clone)]
/// Single action offered on a toast. The callback runs exactly once, right
/// before the toast is dismissed, and only on explicit selection — never on
/// auto-expiry.
pub struct ToastAction {
    /// Button label.
    pub label: String,
    /// Invoked when the user selects the action.
    pub on_select: Callback<()>,
}

#[derive(Clone)]
/// Request to enqueue one toast.
pub struct ToastInput {
    /// Optional heading.
    pub title: Option<String>,
    /// Body text; required and non-empty.
    pub message: String,
    /// Severity token.
    pub variant: ToastVariant,
    /// Display duration in milliseconds, 3500 by default. Zero or negative
    /// toasts persist until dismissed.
    pub duration_ms: i64,
    /// Optional single action.
    pub action: Option<ToastAction>,
}

impl Default for ToastInput {
    fn default() -> Self {
        Self {
            title: None,
            message: String::new(),
            variant: ToastVariant::default(),
            duration_ms: DEFAULT_TOAST_DURATION_MS,
            action: None,
        }
    }
}

impl ToastInput {
    /// Input with the default duration and severity for `message`.
    pub fn message(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
            ..Self::default()
        }
    }
}

#[derive(Clone)]
/// One live toast owned by the queue.
pub struct ToastItem {
    /// Queue-unique identifier.
    pub id: ToastId,
    /// Optional heading.
    pub title: Option<String>,
    /// Body text.
    pub message: String,
    /// Severity token.
    pub variant: ToastVariant,
    /// Configured display duration.
    pub duration_ms: i64,
    /// Optional single action.
    pub action: Option<ToastAction>,
}

/// Schedules the one-shot auto-dismissal of a toast.
///
/// Cancellation is implicit: `remove` calls [`ToastQueue::dismiss`], which
/// is a no-op once the id is gone, so schedulers never need to track or
/// cancel outstanding timers.
pub trait ExpiryScheduler {
    /// Arranges for `remove` to run once, `after` from now.
    fn schedule_removal(&self, id: ToastId, after: Duration, remove: Box<dyn FnOnce()>);
}

#[derive(Debug, Clone, Copy, Default)]
/// Browser scheduler backed by `setTimeout`. Inert off the wasm target.
pub struct TimeoutScheduler;

impl ExpiryScheduler for TimeoutScheduler {
    fn schedule_removal(&self, _id: ToastId, after: Duration, remove: Box<dyn FnOnce()>) {
        #[cfg(target_arch = "wasm32")]
        {
            leptos::set_timeout(remove, after);
        }

        #[cfg(not(target_arch = "wasm32"))]
        {
            let _ = (after, remove);
        }
    }
}

#[derive(Debug, Clone, Copy, Default)]
/// Scheduler that never expires anything; toasts persist until dismissed.
pub struct NoopScheduler;

impl ExpiryScheduler for NoopScheduler {
    fn schedule_removal(&self, _id: ToastId, _after: Duration, _remove: Box<dyn FnOnce()>) {}
}

#[derive(Clone)]
/// Bounded, ordered collection of live toasts.
///
/// The queue exclusively owns its items; rendering collaborators observe
/// them through [`ToastQueue::toasts`] and mutate only through the dismissal
/// operations.
pub struct ToastQueue {
    items: RwSignal<Vec<ToastItem>>,
    max_toasts: usize,
    next_id: Rc<Cell<u64>>,
    scheduler: Rc<dyn ExpiryScheduler>,
}

impl ToastQueue {
    /// Creates a queue capped at `max_toasts` with the given scheduler.
    pub fn new(max_toasts: usize, scheduler: Rc<dyn ExpiryScheduler>) -> Self {
        Self {
            items: create_rw_signal(Vec::new()),
            max_toasts,
            next_id: Rc::new(Cell::new(0)),
            scheduler,
        }
    }

    /// Queue with the default cap and the browser timeout scheduler.
    pub fn with_defaults() -> Self {
        Self::new(DEFAULT_MAX_TOASTS, Rc::new(TimeoutScheduler))
    }

    /// Read-only view of the live toasts, newest first.
    pub fn toasts(&self) -> ReadSignal<Vec<ToastItem>> {
        self.items.read_only()
    }

    /// Enqueues a toast and returns its id for later explicit dismissal.
    ///
    /// The new item is prepended and the collection truncated to the cap,
    /// evicting the oldest. A positive duration schedules auto-dismissal; a
    /// blank message enqueues nothing and the returned id is never live.
    pub fn enqueue(&self, input: ToastInput) -> ToastId {
        let id = self.next_id();
        if input.message.trim().is_empty() {
            logging::warn!("toast discarded: empty message");
            return id;
        }

        let duration_ms = input.duration_ms;
        let item = ToastItem {
            id,
            title: input.title,
            message: input.message,
            variant: input.variant,
            duration_ms,
            action: input.action,
        };

        let max_toasts = self.max_toasts;
        self.items.update(|items| {
            items.insert(0, item);
            items.truncate(max_toasts);
        });

        if duration_ms > 0 {
            let queue = self.clone();
            self.scheduler.schedule_removal(
                id,
                Duration::from_millis(duration_ms as u64),
                Box::new(move || queue.dismiss(id)),
            );
        }

        id
    }

    /// Removes the toast with `id` if it is still live. Idempotent.
    pub fn dismiss(&self, id: ToastId) {
        self.items.update(|items| items.retain(|item| item.id != id));
    }

    /// Clears every live toast.
    pub fn dismiss_all(&self) {
        self.items.update(Vec::clear);
    }

    /// Runs the toast's action callback, then dismisses it.
    ///
    /// No-op when the id is gone or the toast carries no action, so the
    /// callback can never run twice.
    pub fn run_action(&self, id: ToastId) {
        let action = self
            .items
            .get_untracked()
            .iter()
            .find(|item| item.id == id)
            .and_then(|item| item.action.clone());
        if let Some(action) = action {
            action.on_select.call(());
        }
        self.dismiss(id);
    }

    fn next_id(&self) -> ToastId {
        let next = self.next_id.get().saturating_add(1);
        self.next_id.set(next);
        ToastId(next)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::RefCell;

    type Scheduled = (ToastId, Duration, Box<dyn FnOnce()>);

    #[derive(Clone, Default)]
    struct RecordingScheduler {
        scheduled: Rc<RefCell<Vec<Scheduled>>>,
    }

    impl ExpiryScheduler for RecordingScheduler {
        fn schedule_removal(&self, id: ToastId, after: Duration, remove: Box<dyn FnOnce()>) {
            self.scheduled.borrow_mut().push((id, after, remove));
        }
    }

    fn queue_with_recorder(max_toasts: usize) -> (ToastQueue, RecordingScheduler) {
        let scheduler = RecordingScheduler::default();
        let queue = ToastQueue::new(max_toasts, Rc::new(scheduler.clone()));
        (queue, scheduler)
    }

    fn messages(queue: &ToastQueue) -> Vec<String> {
        queue
            .toasts()
            .get_untracked()
            .iter()
            .map(|item| item.message.clone())
            .collect()
    }

    #[test]
    fn capacity_keeps_newest_first() {
        let _ = leptos::create_runtime();
        let (queue, _) = queue_with_recorder(4);

        for n in 1..=5 {
            queue.enqueue(ToastInput::message(format!("toast {n}")));
        }

        assert_eq!(
            messages(&queue),
            vec!["toast 5", "toast 4", "toast 3", "toast 2"]
        );
    }

    #[test]
    fn dismiss_is_idempotent() {
        let _ = leptos::create_runtime();
        let (queue, _) = queue_with_recorder(4);

        let keep = queue.enqueue(ToastInput::message("keep"));
        let drop = queue.enqueue(ToastInput::message("drop"));

        queue.dismiss(drop);
        queue.dismiss(drop);

        assert_eq!(messages(&queue), vec!["keep"]);
        let _ = keep;
    }

    #[test]
    fn dismiss_all_empties_any_size() {
        let _ = leptos::create_runtime();
        let (queue, _) = queue_with_recorder(8);

        for n in 0..3 {
            queue.enqueue(ToastInput::message(format!("toast {n}")));
        }
        queue.dismiss_all();

        assert!(queue.toasts().get_untracked().is_empty());
    }

    #[test]
    fn zero_duration_schedules_nothing() {
        let _ = leptos::create_runtime();
        let (queue, scheduler) = queue_with_recorder(4);

        queue.enqueue(ToastInput {
            message: "sticky".to_string(),
            duration_ms: 0,
            ..ToastInput::default()
        });
        queue.enqueue(ToastInput {
            message: "negative".to_string(),
            duration_ms: -1,
            ..ToastInput::default()
        });

        assert!(scheduler.scheduled.borrow().is_empty());
        assert_eq!(queue.toasts().get_untracked().len(), 2);
    }

    #[test]
    fn positive_duration_schedules_once_with_configured_delay() {
        let _ = leptos::create_runtime();
        let (queue, scheduler) = queue_with_recorder(4);

        let id = queue.enqueue(ToastInput::message("timed"));

        let scheduled = scheduler.scheduled.borrow();
        assert_eq!(scheduled.len(), 1);
        assert_eq!(scheduled[0].0, id);
        assert_eq!(
            scheduled[0].1,
            Duration::from_millis(DEFAULT_TOAST_DURATION_MS as u64)
        );
    }

    #[test]
    fn stale_timer_firing_after_manual_dismissal_is_harmless() {
        let _ = leptos::create_runtime();
        let (queue, scheduler) = queue_with_recorder(4);

        let id = queue.enqueue(ToastInput::message("timed"));
        queue.enqueue(ToastInput::message("other"));
        queue.dismiss(id);

        let (_, _, remove) = scheduler.scheduled.borrow_mut().remove(0);
        remove();

        assert_eq!(messages(&queue), vec!["other"]);
    }

    #[test]
    fn action_runs_exactly_once_then_dismisses() {
        let _ = leptos::create_runtime();
        let (queue, _) = queue_with_recorder(4);

        let runs = Rc::new(Cell::new(0u32));
        let counter = runs.clone();
        let id = queue.enqueue(ToastInput {
            message: "failed".to_string(),
            duration_ms: 0,
            action: Some(ToastAction {
                label: "Retry".to_string(),
                on_select: Callback::new(move |()| counter.set(counter.get() + 1)),
            }),
            ..ToastInput::default()
        });

        queue.run_action(id);
        queue.run_action(id);

        assert_eq!(runs.get(), 1);
        assert!(queue.toasts().get_untracked().is_empty());
    }

    #[test]
    fn expiry_does_not_run_the_action_callback() {
        let _ = leptos::create_runtime();
        let (queue, scheduler) = queue_with_recorder(4);

        let runs = Rc::new(Cell::new(0u32));
        let counter = runs.clone();
        queue.enqueue(ToastInput {
            message: "failed".to_string(),
            duration_ms: 1000,
            action: Some(ToastAction {
                label: "Retry".to_string(),
                on_select: Callback::new(move |()| counter.set(counter.get() + 1)),
            }),
            ..ToastInput::default()
        });

        let (_, _, remove) = scheduler.scheduled.borrow_mut().remove(0);
        remove();

        assert_eq!(runs.get(), 0);
        assert!(queue.toasts().get_untracked().is_empty());
    }

    #[test]
    fn blank_message_enqueues_nothing() {
        let _ = leptos::create_runtime();
        let (queue, scheduler) = queue_with_recorder(4);

        let id = queue.enqueue(ToastInput::message("   "));

        assert!(queue.toasts().get_untracked().is_empty());
        assert!(scheduler.scheduled.borrow().is_empty());
        // The returned id is total for dismissal anyway.
        queue.dismiss(id);
    }
}

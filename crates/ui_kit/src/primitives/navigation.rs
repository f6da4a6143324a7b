use super::*;

use wasm_bindgen::JsCast;

/// Selection state and wiring shared by the tab components.
#[derive(Clone)]
struct TabsContext {
    base_id: String,
    orientation: TabsOrientation,
    selected: Signal<String>,
    select: Callback<String>,
}

fn use_tabs() -> TabsContext {
    use_context::<TabsContext>().expect("Tabs components must be used within <Tabs />")
}

fn trigger_id(base_id: &str, value: &str) -> String {
    format!("{base_id}-tab-{value}")
}

fn panel_id(base_id: &str, value: &str) -> String {
    format!("{base_id}-panel-{value}")
}

/// Focus movement requested by a key press on the tab list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum FocusMove {
    Relative(i32),
    First,
    Last,
}

/// Maps a keydown on the tab list to a focus move, honoring orientation.
fn key_focus_move(key: &str, orientation: TabsOrientation) -> Option<FocusMove> {
    match (key, orientation) {
        ("ArrowRight", TabsOrientation::Horizontal) => Some(FocusMove::Relative(1)),
        ("ArrowLeft", TabsOrientation::Horizontal) => Some(FocusMove::Relative(-1)),
        ("ArrowDown", TabsOrientation::Vertical) => Some(FocusMove::Relative(1)),
        ("ArrowUp", TabsOrientation::Vertical) => Some(FocusMove::Relative(-1)),
        ("Home", _) => Some(FocusMove::First),
        ("End", _) => Some(FocusMove::Last),
        _ => None,
    }
}

/// Index arithmetic for roving focus, wrapping at either end.
fn moved_index(current: usize, len: usize, focus_move: FocusMove) -> usize {
    match focus_move {
        FocusMove::Relative(delta) => (current as i32 + delta).rem_euclid(len as i32) as usize,
        FocusMove::First => 0,
        FocusMove::Last => len.saturating_sub(1),
    }
}

/// Enabled tab triggers inside a tab list, in DOM order.
fn enabled_tabs(list_id: &str) -> Vec<web_sys::HtmlElement> {
    let Some(document) = web_sys::window().and_then(|window| window.document()) else {
        return Vec::new();
    };
    let Some(list) = document.get_element_by_id(list_id) else {
        return Vec::new();
    };
    let Ok(nodes) = list.query_selector_all(r#"[role="tab"]"#) else {
        return Vec::new();
    };

    let mut tabs = Vec::new();
    for index in 0..nodes.length() {
        let Some(node) = nodes.item(index) else {
            continue;
        };
        let Ok(tab) = node.dyn_into::<web_sys::HtmlElement>() else {
            continue;
        };
        if tab.get_attribute("disabled").is_some() {
            continue;
        }
        if tab.get_attribute("aria-disabled").as_deref() == Some("true") {
            continue;
        }
        tabs.push(tab);
    }

    tabs
}

/// Moves focus within the list and returns the newly focused trigger's value.
fn move_tab_focus(list_id: &str, focus_move: FocusMove) -> Option<String> {
    let tabs = enabled_tabs(list_id);
    if tabs.is_empty() {
        return None;
    }

    let active_id = web_sys::window()
        .and_then(|window| window.document())
        .and_then(|document| document.active_element())
        .map(|element| element.id())
        .unwrap_or_default();
    let current = tabs
        .iter()
        .position(|tab| !active_id.is_empty() && tab.id() == active_id)
        .unwrap_or(0);

    let next = &tabs[moved_index(current, tabs.len(), focus_move)];
    let _ = next.focus();
    next.get_attribute("data-ui-value")
}

#[component]
/// Tabbed region root: owns the selected value and provides it to the
/// [`TabList`]/[`Tab`]/[`TabPanel`] children through context.
///
/// Selection is uncontrolled by default (seeded from `default_value`); pass
/// `value` to control it from outside, with `on_value_change` reporting user
/// selections either way.
pub fn Tabs(
    /// Externally controlled selection.
    #[prop(optional, into)]
    value: Option<MaybeSignal<String>>,
    /// Initial selection for uncontrolled usage.
    #[prop(optional, into)]
    default_value: Option<String>,
    /// Reports every user-driven selection change.
    #[prop(optional)]
    on_value_change: Option<Callback<String>>,
    #[prop(optional)] orientation: TabsOrientation,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    let base_id = next_instance_id("tabs");
    let internal = create_rw_signal(default_value.unwrap_or_default());
    let is_controlled = value.is_some();

    let selected = Signal::derive(move || match value.as_ref() {
        Some(value) => value.get(),
        None => internal.get(),
    });
    let select = Callback::new(move |next: String| {
        if !is_controlled {
            internal.set(next.clone());
        }
        if let Some(on_value_change) = on_value_change.as_ref() {
            on_value_change.call(next);
        }
    });

    provide_context(TabsContext {
        base_id,
        orientation,
        selected,
        select,
    });

    view! {
        <div
            class=merge_layout_class("ui-tabs", layout_class)
            data-ui-primitive="true"
            data-ui-kind="tabs"
            data-ui-orientation=orientation.token()
        >
            {children()}
        </div>
    }
}

#[component]
/// Container for the tab triggers; handles roving arrow-key focus.
///
/// Arrow keys (per orientation) plus Home/End move focus between enabled
/// triggers with wraparound, selecting the newly focused tab.
pub fn TabList(
    #[prop(optional, into)] aria_label: Option<String>,
    children: Children,
) -> impl IntoView {
    let ctx = use_tabs();
    let list_id = format!("{}-list", ctx.base_id);
    let orientation = ctx.orientation;
    let select = ctx.select;

    let on_keydown = {
        let list_id = list_id.clone();
        move |ev: KeyboardEvent| {
            let Some(focus_move) = key_focus_move(ev.key().as_str(), orientation) else {
                return;
            };
            ev.prevent_default();
            if let Some(value) = move_tab_focus(&list_id, focus_move) {
                select.call(value);
            }
        }
    };

    view! {
        <div
            id=list_id
            class="ui-tab-list"
            role="tablist"
            aria-label=aria_label
            aria-orientation=orientation.token()
            data-ui-primitive="true"
            data-ui-kind="tab-list"
            on:keydown=on_keydown
        >
            {children()}
        </div>
    }
}

#[component]
/// Single tab trigger; clicking it selects the matching [`TabPanel`].
pub fn Tab(
    /// Value connecting this trigger to its panel.
    #[prop(into)]
    value: String,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    children: Children,
) -> impl IntoView {
    let ctx = use_tabs();
    let id = trigger_id(&ctx.base_id, &value);
    let controls = panel_id(&ctx.base_id, &value);
    let selected_signal = ctx.selected;
    let is_selected = {
        let value = value.clone();
        move || selected_signal.get() == value
    };
    let tab_index = {
        let is_selected = is_selected.clone();
        move || if is_selected() { "0" } else { "-1" }
    };
    let select = ctx.select;
    let click_value = value.clone();

    view! {
        <button
            type="button"
            id=id
            class="ui-tab"
            role="tab"
            aria-selected=move || bool_token(is_selected())
            aria-controls=controls
            tabindex=tab_index
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="tab"
            data-ui-value=value
            on:click=move |_| {
                if !disabled.get_untracked() {
                    select.call(click_value.clone());
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Content region shown while its tab is selected.
///
/// Unselected panels are unmounted unless `force_mount` keeps them in the
/// tree behind the `hidden` attribute.
pub fn TabPanel(
    /// Value connecting this panel to its trigger.
    #[prop(into)]
    value: String,
    /// Keeps the panel mounted (hidden) while unselected.
    #[prop(optional)]
    force_mount: bool,
    children: ChildrenFn,
) -> impl IntoView {
    let ctx = use_tabs();
    let id = panel_id(&ctx.base_id, &value);
    let labelled_by = trigger_id(&ctx.base_id, &value);
    let selected_signal = ctx.selected;
    let selected = Signal::derive(move || selected_signal.get() == value);
    let children = store_value(children);

    view! {
        <Show when=move || force_mount || selected.get() fallback=|| ()>
            <div
                id=id.clone()
                class="ui-tab-panel"
                role="tabpanel"
                aria-labelledby=labelled_by.clone()
                tabindex="0"
                hidden=move || force_mount && !selected.get()
                data-ui-primitive="true"
                data-ui-kind="tab-panel"
            >
                {children.with_value(|children| children())}
            </div>
        </Show>
    }
}

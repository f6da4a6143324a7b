use super::*;

#[component]
/// Shared button primitive with semantic variant tokens.
pub fn Button(
    #[prop(default = ButtonVariant::Primary)] variant: ButtonVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            id=id
            aria-label=aria_label
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {children()}
        </button>
    }
}

#[component]
/// Labelled text input with hint and error wiring.
///
/// Generated ids connect the label, hint, and error copy through
/// `aria-describedby`; a non-empty error marks the field invalid and renders
/// the error line with `role="alert"`.
pub fn TextField(
    #[prop(optional, into)] label: Option<String>,
    #[prop(optional, into)] hint: Option<String>,
    #[prop(optional, into)] error: MaybeSignal<String>,
    #[prop(optional, into)] id: Option<String>,
    #[prop(optional, into)] placeholder: Option<String>,
    #[prop(optional, into)] value: MaybeSignal<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] on_input: Option<Callback<web_sys::Event>>,
) -> impl IntoView {
    let input_id = id.unwrap_or_else(|| next_instance_id("field"));
    let hint_id = hint.as_ref().map(|_| format!("{input_id}-hint"));
    let error_id = format!("{input_id}-error");

    let described_by = {
        let hint_id = hint_id.clone();
        let error_id = error_id.clone();
        let error = error.clone();
        move || {
            let mut ids = Vec::new();
            if let Some(hint_id) = hint_id.as_ref() {
                ids.push(hint_id.clone());
            }
            if !error.get().is_empty() {
                ids.push(error_id.clone());
            }
            (!ids.is_empty()).then(|| ids.join(" "))
        }
    };

    let invalid = {
        let error = error.clone();
        move || (!error.get().is_empty()).then_some("true")
    };
    let error_line = {
        let error = error.clone();
        let error_id = error_id.clone();
        move || {
            let message = error.get();
            (!message.is_empty()).then(|| {
                view! {
                    <div data-ui-slot="error" id=error_id.clone() role="alert">
                        {message}
                    </div>
                }
            })
        }
    };

    view! {
        <div
            class=merge_layout_class("ui-field", layout_class)
            data-ui-primitive="true"
            data-ui-kind="field"
        >
            {label.map(|label| {
                let hint = hint.clone();
                let hint_id = hint_id.clone();
                view! {
                    <div data-ui-slot="label-row">
                        <label data-ui-slot="label" for=input_id.clone()>{label}</label>
                        {hint.map(|hint| view! { <span data-ui-slot="hint" id=hint_id>{hint}</span> })}
                    </div>
                }
            })}
            <input
                type="text"
                id=input_id.clone()
                placeholder=placeholder
                prop:value=move || value.get()
                aria-invalid=invalid
                aria-describedby=described_by
                data-ui-slot="input"
                on:input=move |ev| {
                    if let Some(on_input) = on_input.as_ref() {
                        on_input.call(ev);
                    }
                }
            />
            {error_line}
        </div>
    }
}

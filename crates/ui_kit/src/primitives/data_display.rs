use super::*;

#[component]
/// Shared card surface.
pub fn Card(
    #[prop(default = true)] padded: bool,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-card", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card"
            data-ui-padded=bool_token(padded)
        >
            {children()}
        </div>
    }
}

#[component]
/// Card header with optional title and description copy.
pub fn CardHeader(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-card-header", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-header"
        >
            {title.map(|title| view! { <h3 data-ui-slot="title">{title}</h3> })}
            {description.map(|description| view! { <p data-ui-slot="description">{description}</p> })}
            {children.map(|children| children())}
        </div>
    }
}

#[component]
/// Card body content region.
pub fn CardBody(
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-card-body", layout_class)
            data-ui-primitive="true"
            data-ui-kind="card-body"
        >
            {children()}
        </div>
    }
}

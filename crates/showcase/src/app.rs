use leptos::*;
use ui_kit::prelude::*;

#[component]
/// Demo surface exercising every primitive and both navigation guards.
pub fn ShowcaseApp() -> impl IntoView {
    view! {
        <ToastProvider>
            <header>
                <h1>"Component Library"</h1>
            </header>
            <main class="main">
                <section>
                    <h2>"Buttons"</h2>
                    <ButtonsDemo/>
                </section>
                <section>
                    <h2>"Modal"</h2>
                    <ModalDemo/>
                </section>
                <section>
                    <h2>"Cards"</h2>
                    <CardsDemo/>
                </section>
                <section>
                    <h2>"Tabs"</h2>
                    <TabsDemo/>
                </section>
                <section>
                    <h2>"Toasts"</h2>
                    <ToastDemo/>
                </section>
                <section>
                    <h2>"Unsaved changes"</h2>
                    <LeaveDemo/>
                </section>
                <section>
                    <h2>"External links"</h2>
                    <ExternalLinksDemo/>
                </section>
            </main>
        </ToastProvider>
    }
}

#[component]
fn ButtonsDemo() -> impl IntoView {
    let toasts = use_toasts();

    view! {
        <div class="container">
            <Button on_click=Callback::new(move |_| {
                toasts.enqueue(ToastInput::message("Primary button pressed."));
            })>
                "Primary"
            </Button>
            <Button variant=ButtonVariant::Ghost>"Ghost"</Button>
            <Button disabled=true>"Disabled"</Button>
        </div>
    }
}

#[component]
fn ModalDemo() -> impl IntoView {
    let open = create_rw_signal(false);

    view! {
        <div class="container">
            <Button on_click=Callback::new(move |_| open.set(true))>"Open modal"</Button>
            <Modal open=open title="Confirm" on_close=Callback::new(move |()| open.set(false))>
                <p>
                    "Escape, the backdrop, and the close button all route through the same "
                    "close callback, and body scrolling stays locked while this is open."
                </p>
            </Modal>
        </div>
    }
}

#[component]
fn CardsDemo() -> impl IntoView {
    view! {
        <div class="container card-row">
            <Card padded=false>
                <CardHeader title="Profile" description="Public info"/>
                <CardBody>
                    "Everything rendered here carries the stable data-ui attributes the "
                    "stylesheet layers target."
                </CardBody>
            </Card>
            <Card>
                <CardHeader title="Billing" description="Private"/>
                <CardBody>"Padded variant of the same surface."</CardBody>
            </Card>
        </div>
    }
}

#[component]
fn TabsDemo() -> impl IntoView {
    view! {
        <Tabs default_value="overview">
            <TabList aria_label="Project sections">
                <Tab value="overview">"Overview"</Tab>
                <Tab value="activity">"Activity"</Tab>
                <Tab value="settings" disabled=true>"Settings"</Tab>
            </TabList>
            <TabPanel value="overview">
                <p>"Arrow keys move focus between enabled tabs and wrap at the ends."</p>
            </TabPanel>
            <TabPanel value="activity">
                <p>"Unselected panels are unmounted unless force-mounted."</p>
            </TabPanel>
            <TabPanel value="settings">
                <p>"Unreachable while the trigger is disabled."</p>
            </TabPanel>
        </Tabs>
    }
}

#[component]
fn ToastDemo() -> impl IntoView {
    let toasts = use_toasts();
    let success_queue = toasts.clone();
    let error_queue = toasts;

    view! {
        <div class="container">
            <Button on_click=Callback::new(move |_| {
                success_queue.enqueue(ToastInput {
                    title: Some("Saved".to_string()),
                    message: "Changes saved successfully.".to_string(),
                    variant: ToastVariant::Success,
                    ..ToastInput::default()
                });
            })>
                "Success toast"
            </Button>
            <Button variant=ButtonVariant::Ghost on_click=Callback::new(move |_| {
                error_queue.enqueue(ToastInput {
                    title: Some("Something failed".to_string()),
                    message: "Could not save your changes.".to_string(),
                    variant: ToastVariant::Error,
                    // Persists until the user retries or dismisses it.
                    duration_ms: 0,
                    action: Some(ToastAction {
                        label: "Retry".to_string(),
                        on_select: Callback::new(|()| logging::log!("retry requested")),
                    }),
                    ..ToastInput::default()
                });
            })>
                "Error toast"
            </Button>
        </div>
    }
}

#[component]
fn LeaveDemo() -> impl IntoView {
    let draft = create_rw_signal(String::new());
    let dirty = Signal::derive(move || !draft.get().is_empty());
    let guard = LeaveGuard::new(dirty);
    use_before_unload(dirty);

    let toasts = use_toasts();
    let on_discard = Callback::new(move |()| {
        draft.set(String::new());
        toasts.enqueue(ToastInput::message("Draft discarded."));
    });

    let open = guard.open();
    let button_guard = guard.clone();
    let link_guard = guard.clone();
    let confirm_guard = guard.clone();
    let cancel_guard = guard;

    view! {
        <div class="container">
            <TextField
                label="Draft"
                hint="Non-empty text arms the leave guards"
                value=draft
                on_input=Callback::new(move |ev: web_sys::Event| {
                    draft.set(event_target_value(&ev));
                })
            />
            <div class="container">
                <WarnButton guard=button_guard on_activate=on_discard>
                    "Discard draft"
                </WarnButton>
                <WarnLink guard=link_guard href="/docs" variant=LinkVariant::Button>
                    "Back to docs"
                </WarnLink>
            </div>
            <WarnOnLeaveModal
                open=open
                on_confirm=Callback::new(move |()| confirm_guard.confirm())
                on_cancel=Callback::new(move |()| cancel_guard.cancel())
            />
        </div>
    }
}

#[component]
fn ExternalLinksDemo() -> impl IntoView {
    let policy = ExternalLinkPolicy {
        allowlist_hosts: Vec::new(),
        bypass_hosts: vec!["docs.rs".to_string()],
    };

    view! {
        <ExternalLinkGuard policy=policy>
            <div class="container">
                <ExternalLink href="https://example.org" target="_blank">
                    "example.org (new tab)"
                </ExternalLink>
                <ExternalLink href="https://docs.rs/leptos">
                    "docs.rs (bypassed, navigates directly)"
                </ExternalLink>
                <ExternalLink href="/about">"Internal link"</ExternalLink>
            </div>
        </ExternalLinkGuard>
    }
}

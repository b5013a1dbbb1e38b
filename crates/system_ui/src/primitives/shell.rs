use super::*;

#[component]
/// Outer device frame. The skin id drives every skin-specific style rule.
pub fn PhoneFrame(
    #[prop(into)] skin: MaybeSignal<String>,
    #[prop(optional, into)] locked: MaybeSignal<bool>,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            id="phone-shell-root"
            class=merge_layout_class("phone-frame", layout_class)
            data-ui-primitive="true"
            data-ui-kind="phone-frame"
            data-skin=move || skin.get()
            data-locked=move || bool_token(locked.get())
        >
            {children()}
        </div>
    }
}

#[component]
/// Top status bar: time on the leading edge, indicator children on the trailing edge.
pub fn StatusBar(
    #[prop(into)] time: Signal<String>,
    #[prop(optional)] on_leading_click: Option<Callback<MouseEvent>>,
    #[prop(optional)] on_trailing_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <header class="ui-status-bar" data-ui-primitive="true" data-ui-kind="status-bar">
            <button
                type="button"
                data-ui-slot="leading"
                on:click=move |ev| {
                    if let Some(on_leading_click) = on_leading_click.as_ref() {
                        on_leading_click.call(ev);
                    }
                }
            >
                {move || time.get()}
            </button>
            <button
                type="button"
                data-ui-slot="trailing"
                on:click=move |ev| {
                    if let Some(on_trailing_click) = on_trailing_click.as_ref() {
                        on_trailing_click.call(ev);
                    }
                }
            >
                {children()}
            </button>
        </header>
    }
}

#[component]
/// Home-screen icon grid.
pub fn HomeGrid(
    #[prop(default = 4)] columns: u8,
    #[prop(optional)] layout_class: Option<&'static str>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class=merge_layout_class("ui-home-grid", layout_class)
            style=format!("--ui-home-columns:{columns};")
            data-ui-primitive="true"
            data-ui-kind="home-grid"
        >
            {children()}
        </div>
    }
}

#[component]
/// App launcher icon with label and optional badge count.
pub fn AppIconButton(
    icon: IconName,
    #[prop(into)] label: String,
    #[prop(optional, into)] badge: MaybeSignal<usize>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
) -> impl IntoView {
    let aria_label = label.clone();
    view! {
        <button
            type="button"
            class="ui-app-icon"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="app-icon"
            data-ui-icon=icon.token()
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            <span data-ui-slot="tile">
                <Icon icon=icon size=IconSize::Lg />
                <Show when=move || { badge.get() > 0 } fallback=|| ()>
                    <span data-ui-slot="badge">{move || badge.get()}</span>
                </Show>
            </span>
            <span data-ui-slot="label">{label}</span>
        </button>
    }
}

#[component]
/// Bottom dock row on the home screen.
pub fn Dock(children: Children) -> impl IntoView {
    view! {
        <nav class="ui-dock" data-ui-primitive="true" data-ui-kind="dock">
            {children()}
        </nav>
    }
}

#[component]
/// Full-screen app container with a title bar and back control.
pub fn AppScreen(
    #[prop(into)] title: String,
    #[prop(optional)] on_back: Option<Callback<MouseEvent>>,
    #[prop(optional, into)] app: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <section
            class="ui-app-screen"
            data-ui-primitive="true"
            data-ui-kind="app-screen"
            data-app=app
        >
            <header data-ui-slot="title-bar">
                <button
                    type="button"
                    aria-label="Back"
                    data-ui-slot="back"
                    on:click=move |ev| {
                        if let Some(on_back) = on_back.as_ref() {
                            on_back.call(ev);
                        }
                    }
                >
                    <Icon icon=IconName::Back />
                </button>
                <h1 data-ui-slot="title">{title}</h1>
            </header>
            <div data-ui-slot="body">{children()}</div>
        </section>
    }
}

#[component]
/// Three-button navigation bar (recents, home, back).
pub fn NavigationBar(
    on_recents: Callback<MouseEvent>,
    on_home: Callback<MouseEvent>,
    on_back: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <nav class="ui-navigation-bar" data-ui-primitive="true" data-ui-kind="navigation-bar">
            <button type="button" aria-label="Recent apps" on:click=move |ev| on_recents.call(ev)>
                <Icon icon=IconName::Recents />
            </button>
            <button type="button" aria-label="Home" on:click=move |ev| on_home.call(ev)>
                <Icon icon=IconName::Home />
            </button>
            <button type="button" aria-label="Back" on:click=move |ev| on_back.call(ev)>
                <Icon icon=IconName::Back />
            </button>
        </nav>
    }
}

use super::*;
use crate::apps::{HomeEntry, DOCK_APPS, HOME_GRID};

fn app_icon(runtime: PhoneRuntimeContext, app_id: AppId) -> View {
    let Some((label, icon)) = runtime
        .registry
        .with_value(|registry| registry.lookup(app_id).map(|app| (app.display_name, app.icon)))
    else {
        return ().into_view();
    };
    let badge = Signal::derive(move || {
        runtime.state.with(|state| {
            state
                .notifications
                .entries()
                .iter()
                .filter(|entry| entry.app_id == Some(app_id))
                .count()
        })
    });
    view! {
        <AppIconButton
            icon=icon
            label=label
            badge=badge
            on_click=Callback::new(move |_| runtime.dispatch_action(PhoneAction::OpenApp { app_id }))
        />
    }
    .into_view()
}

fn folder_icon(runtime: PhoneRuntimeContext, folder: FolderId) -> View {
    view! {
        <AppIconButton
            icon=IconName::Folder
            label=folder.label()
            on_click=Callback::new(move |_| {
                runtime.dispatch_action(PhoneAction::OpenFolder { folder })
            })
        />
    }
    .into_view()
}

#[component]
pub(super) fn HomeScreen(now: Signal<WallClock>) -> impl IntoView {
    let runtime = use_phone_runtime();
    let skin = Signal::derive(move || runtime.state.with(|state| state.theme.skin));

    view! {
        <section class="phone-home" aria-label="Home screen" data-ui-kind="home">
            <Show when=move || skin.get() == Skin::OneUi fallback=|| ()>
                <header data-ui-slot="hero-clock">
                    <time data-ui-slot="time">{move || now.get().hh_mm()}</time>
                    <p data-ui-slot="date">{move || now.get().short_date()}</p>
                </header>
            </Show>
            <HomeGrid columns=4>
                {HOME_GRID
                    .into_iter()
                    .map(|entry| match entry {
                        HomeEntry::App(app_id) => app_icon(runtime, app_id),
                        HomeEntry::Folder(folder) => folder_icon(runtime, folder),
                    })
                    .collect_view()}
            </HomeGrid>
            <Show when=move || skin.get() == Skin::HyperOs fallback=|| ()>
                <Dock>
                    {DOCK_APPS
                        .into_iter()
                        .map(|app_id| app_icon(runtime, app_id))
                        .collect_view()}
                </Dock>
            </Show>
        </section>
    }
}

#[component]
pub(super) fn ForegroundApp(app_id: AppId) -> impl IntoView {
    let runtime = use_phone_runtime();
    let descriptor = runtime
        .registry
        .with_value(|registry| registry.lookup(app_id).copied());
    descriptor.map(|descriptor| {
        view! {
            <div class="phone-app" data-app=app_id.as_str()>
                {descriptor.mount(runtime.app_services(app_id))}
            </div>
        }
    })
}

use super::*;
use crate::{
    apps::folder_apps,
    model::{QuickSetting, QuickSettings},
};

fn quick_setting_icon(setting: QuickSetting) -> IconName {
    match setting {
        QuickSetting::Wifi => IconName::Wifi,
        QuickSetting::Bluetooth => IconName::Bluetooth,
        QuickSetting::AirplaneMode => IconName::Airplane,
        QuickSetting::DoNotDisturb => IconName::DoNotDisturb,
        QuickSetting::Flashlight => IconName::Flashlight,
    }
}

fn dismiss(runtime: PhoneRuntimeContext) -> Callback<ev::MouseEvent> {
    Callback::new(move |_| runtime.dispatch_action(PhoneAction::CloseOverlay))
}

#[component]
/// Renders whichever overlay the manager reports visible for the current navigator state.
pub(super) fn ActiveOverlay() -> impl IntoView {
    let runtime = use_phone_runtime();
    let visible =
        create_memo(move |_| runtime.state.with(|state| state.overlay.visible(&state.shell)));

    move || {
        visible.get().map(|overlay| match overlay {
            Overlay::Folder(folder) => view! { <FolderOverlay folder=folder /> }.into_view(),
            Overlay::ControlCenter => view! { <ControlCenterOverlay /> }.into_view(),
            Overlay::NotificationCenter => view! { <NotificationCenterOverlay /> }.into_view(),
            Overlay::AppSwitcher => view! { <AppSwitcherOverlay /> }.into_view(),
        })
    }
}

#[component]
fn FolderOverlay(folder: FolderId) -> impl IntoView {
    let runtime = use_phone_runtime();
    let apps: Vec<(AppId, &'static str, IconName)> = runtime.registry.with_value(|registry| {
        folder_apps(folder)
            .iter()
            .filter_map(|id| registry.lookup(*id))
            .map(|app| (app.id, app.display_name, app.icon))
            .collect()
    });

    view! {
        <OverlaySheet
            kind=Overlay::Folder(folder).token()
            aria_label=folder.label()
            on_dismiss=dismiss(runtime)
        >
            <h2 data-ui-slot="title">{folder.label()}</h2>
            <HomeGrid columns=3>
                {apps
                    .into_iter()
                    .map(|(app_id, label, icon)| {
                        view! {
                            <AppIconButton
                                icon=icon
                                label=label
                                on_click=Callback::new(move |_| {
                                    runtime.dispatch_action(PhoneAction::OpenApp { app_id })
                                })
                            />
                        }
                    })
                    .collect_view()}
            </HomeGrid>
        </OverlaySheet>
    }
}

#[component]
fn ControlCenterOverlay() -> impl IntoView {
    let runtime = use_phone_runtime();
    let settings: Signal<QuickSettings> =
        Signal::derive(move || runtime.state.with(|state| state.quick_settings));

    view! {
        <OverlaySheet
            kind=Overlay::ControlCenter.token()
            aria_label="Control centre"
            on_dismiss=dismiss(runtime)
        >
            <div data-ui-slot="tiles">
                {QuickSetting::ALL
                    .into_iter()
                    .map(|setting| {
                        view! {
                            <QuickTile
                                icon=quick_setting_icon(setting)
                                label=setting.label()
                                active=Signal::derive(move || settings.get().is_enabled(setting))
                                on_click=Callback::new(move |_| {
                                    runtime
                                        .dispatch_action(PhoneAction::ToggleQuickSetting { setting })
                                })
                            />
                        }
                    })
                    .collect_view()}
            </div>
            <label data-ui-slot="brightness">
                <Icon icon=IconName::Brightness />
                <RangeField
                    value=Signal::derive(move || settings.get().brightness)
                    aria_label="Brightness"
                    on_input=Callback::new(move |value: u8| {
                        runtime.dispatch_action(PhoneAction::SetBrightness { value })
                    })
                />
            </label>
            <Button
                variant=ButtonVariant::Quiet
                leading_icon=IconName::Lock
                on_click=Callback::new(move |_| runtime.dispatch_action(PhoneAction::Lock))
            >
                "Lock"
            </Button>
        </OverlaySheet>
    }
}

#[component]
fn NotificationCenterOverlay() -> impl IntoView {
    let runtime = use_phone_runtime();
    let entries = Signal::derive(move || {
        runtime
            .state
            .with(|state| state.notifications.entries().to_vec())
    });

    view! {
        <OverlaySheet
            kind=Overlay::NotificationCenter.token()
            aria_label="Notifications"
            on_dismiss=dismiss(runtime)
        >
            <header data-ui-slot="header">
                <h2 data-ui-slot="title">"Notifications"</h2>
                <Button
                    variant=ButtonVariant::Quiet
                    disabled=Signal::derive(move || entries.with(Vec::is_empty))
                    on_click=Callback::new(move |_| {
                        runtime.dispatch_action(PhoneAction::ClearNotifications)
                    })
                >
                    "Clear all"
                </Button>
            </header>
            <Show
                when=move || entries.with(|entries| !entries.is_empty())
                fallback=|| view! { <EmptyState message="No notifications" /> }
            >
                <ul data-ui-slot="list">
                    <For
                        each=move || entries.get()
                        key=|entry| entry.id
                        children=move |entry| {
                            let id = entry.id;
                            let posted = WallClock::from_unix_ms(entry.posted_at_ms).hh_mm();
                            view! {
                                <ListRow title=entry.title subtitle=entry.body leading_icon=IconName::Bell>
                                    <time>{posted}</time>
                                    <Button
                                        variant=ButtonVariant::Quiet
                                        aria_label="Dismiss notification"
                                        leading_icon=IconName::Close
                                        on_click=Callback::new(move |_| {
                                            runtime
                                                .dispatch_action(PhoneAction::DismissNotification { id })
                                        })
                                    >
                                        ""
                                    </Button>
                                </ListRow>
                            }
                        }
                    />
                </ul>
            </Show>
        </OverlaySheet>
    }
}

#[component]
fn AppSwitcherOverlay() -> impl IntoView {
    let runtime = use_phone_runtime();
    let recents = Signal::derive(move || {
        runtime.state.with(|state| {
            runtime.registry.with_value(|registry| {
                state
                    .shell
                    .recent_apps(registry)
                    .into_iter()
                    .map(|app| (app.id, app.display_name, app.icon))
                    .collect::<Vec<_>>()
            })
        })
    });

    view! {
        <OverlaySheet
            kind=Overlay::AppSwitcher.token()
            aria_label="Recent apps"
            on_dismiss=dismiss(runtime)
        >
            <Show
                when=move || recents.with(|recents| !recents.is_empty())
                fallback=|| view! { <EmptyState message="No recent apps" /> }
            >
                <ul data-ui-slot="cards">
                    <For
                        each=move || recents.get()
                        key=|(app_id, _, _)| *app_id
                        children=move |(app_id, label, icon)| {
                            view! {
                                <li data-ui-slot="card" data-app=app_id.as_str()>
                                    <button
                                        type="button"
                                        data-ui-slot="preview"
                                        on:click=move |_| {
                                            runtime.dispatch_action(PhoneAction::OpenApp { app_id })
                                        }
                                    >
                                        <Icon icon=icon size=IconSize::Lg />
                                        <span>{label}</span>
                                    </button>
                                    <button
                                        type="button"
                                        data-ui-slot="remove"
                                        aria-label=format!("Remove {label} from recents")
                                        on:click=move |_| {
                                            runtime.dispatch_action(PhoneAction::RemoveRecent { app_id })
                                        }
                                    >
                                        <Icon icon=IconName::Close size=IconSize::Sm />
                                    </button>
                                </li>
                            }
                        }
                    />
                </ul>
                <Button
                    variant=ButtonVariant::Quiet
                    on_click=Callback::new(move |_| runtime.dispatch_action(PhoneAction::ClearRecents))
                >
                    "Clear all"
                </Button>
            </Show>
        </OverlaySheet>
    }
}

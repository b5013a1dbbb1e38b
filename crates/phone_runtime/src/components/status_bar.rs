use super::*;

#[component]
pub(super) fn PhoneStatusBar(now: Signal<WallClock>) -> impl IntoView {
    let runtime = use_phone_runtime();
    let state = runtime.state;
    let settings = Signal::derive(move || state.with(|state| state.quick_settings));
    let unread = Signal::derive(move || state.with(|state| state.notifications.len()));

    let toggle = move |overlay: Overlay| {
        Callback::new(move |_| runtime.dispatch_action(PhoneAction::ToggleOverlay { overlay }))
    };

    view! {
        <StatusBar
            time=Signal::derive(move || now.get().hh_mm())
            on_leading_click=toggle(Overlay::NotificationCenter)
            on_trailing_click=toggle(Overlay::ControlCenter)
        >
            <Show when=move || { unread.get() > 0 } fallback=|| ()>
                <span data-ui-slot="unread" aria-label="Unread notifications">
                    <Icon icon=IconName::Bell size=IconSize::Sm />
                    {move || unread.get()}
                </span>
            </Show>
            <Show when=move || settings.get().do_not_disturb fallback=|| ()>
                <Icon icon=IconName::DoNotDisturb size=IconSize::Sm />
            </Show>
            {move || {
                if settings.get().airplane_mode {
                    view! { <Icon icon=IconName::Airplane size=IconSize::Sm /> }
                } else {
                    view! { <Icon icon=IconName::Signal size=IconSize::Sm /> }
                }
            }}
            <Show when=move || settings.get().wifi fallback=|| ()>
                <Icon icon=IconName::Wifi size=IconSize::Sm />
            </Show>
            <Show when=move || settings.get().bluetooth fallback=|| ()>
                <Icon icon=IconName::Bluetooth size=IconSize::Sm />
            </Show>
            <Icon icon=IconName::Battery size=IconSize::Sm />
        </StatusBar>
    }
}

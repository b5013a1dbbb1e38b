//! Phone shell UI composition and interaction surfaces.

mod home;
mod keyboard;
mod lock_screen;
mod overlays;
mod status_bar;

use std::time::Duration;

use leptos::*;
use phone_app_contract::{use_ticker, AppId, Skin};
use platform_host::WallClock;
use system_ui::{
    AppIconButton, Button, ButtonVariant, Dock, EmptyState, HomeGrid, Icon, IconName, IconSize,
    ListRow, NavigationBar, OverlaySheet, PhoneFrame, QuickTile, RangeField, StatusBar,
};

use self::{
    home::{ForegroundApp, HomeScreen},
    keyboard::shell_key_action,
    lock_screen::LockScreen,
    overlays::ActiveOverlay,
    status_bar::PhoneStatusBar,
};
use crate::{
    overlay::{FolderId, Overlay},
    reducer::PhoneAction,
};

pub use crate::runtime_context::{use_phone_runtime, PhoneProvider, PhoneRuntimeContext};

const CLOCK_TICK: Duration = Duration::from_secs(1);

#[component]
fn BootSplash() -> impl IntoView {
    view! {
        <div class="phone-boot" role="status" aria-label="Starting">
            <span data-ui-slot="spinner" aria-hidden="true"></span>
        </div>
    }
}

#[component]
/// Shell view: status bar, home or foreground app, overlays, navigation bar, and lock screen.
pub fn PhoneShell() -> impl IntoView {
    let runtime = use_phone_runtime();
    let state = runtime.state;

    let now = create_rw_signal(WallClock::now());
    use_ticker(CLOCK_TICK, move || now.set(WallClock::now()));
    let now: Signal<WallClock> = now.into();

    let key_listener = window_event_listener(ev::keydown, move |ev| {
        if ev.default_prevented() || ev.ctrl_key() || ev.meta_key() || ev.alt_key() {
            return;
        }
        let action = state.with_untracked(|state| shell_key_action(state, &ev.key()));
        if let Some(action) = action {
            ev.prevent_default();
            runtime.dispatch_action(action);
        }
    });
    on_cleanup(move || key_listener.remove());

    let boot_complete = create_memo(move |_| state.with(|state| state.boot_complete));
    let locked = create_memo(move |_| state.with(|state| state.lock.is_locked()));
    let foreground = create_memo(move |_| state.with(|state| state.shell.foreground_app_id()));
    let skin_id = Signal::derive(move || state.with(|state| state.theme.skin.css_id().to_string()));
    let brightness = Signal::derive(move || state.with(|state| state.quick_settings.brightness));

    let on_recents = Callback::new(move |_| {
        runtime.dispatch_action(PhoneAction::ToggleOverlay {
            overlay: Overlay::AppSwitcher,
        })
    });
    let on_home = Callback::new(move |_| runtime.dispatch_action(PhoneAction::GoHome));
    let on_back = Callback::new(move |_| {
        let has_overlay = state.with_untracked(|state| state.overlay.active().is_some());
        if has_overlay {
            runtime.dispatch_action(PhoneAction::CloseOverlay);
        } else {
            runtime.dispatch_action(PhoneAction::CloseApp);
        }
    });

    view! {
        <PhoneFrame skin=skin_id locked=Signal::derive(move || locked.get())>
            <div
                data-ui-slot="display"
                style=move || format!("--phone-brightness:{}%;", brightness.get())
            >
                <Show when=move || boot_complete.get() fallback=|| view! { <BootSplash /> }>
                    <Show
                        when=move || !locked.get()
                        fallback=move || view! { <LockScreen now=now /> }
                    >
                        <PhoneStatusBar now=now />
                        <main data-ui-slot="screen">
                            {move || match foreground.get() {
                                Some(app_id) => view! { <ForegroundApp app_id=app_id /> }.into_view(),
                                None => view! { <HomeScreen now=now /> }.into_view(),
                            }}
                        </main>
                        <ActiveOverlay />
                        <NavigationBar on_recents=on_recents on_home=on_home on_back=on_back />
                    </Show>
                </Show>
            </div>
        </PhoneFrame>
    }
}

use leptos::{create_effect, logging, spawn_local, Callable, Callback};
use platform_host::unix_time_ms_now;

use crate::{host::PhoneHostContext, persistence, reducer::PhoneAction};

const WELCOME_TITLE: &str = "Welcome";
const WELCOME_BODY: &str = "Swipe through the apps to see what I have been building.";

pub(super) fn install_boot_hydration(host: PhoneHostContext, dispatch: Callback<PhoneAction>) {
    create_effect(move |_| {
        let host = host.clone();
        spawn_local(async move {
            let skip_lock = persistence::load_skip_lock(&host).await;
            logging::log!(
                "phone shell booted on {} host (skip lock: {skip_lock})",
                host.host_strategy_name()
            );
            dispatch.call(PhoneAction::BootHydrated { skip_lock });
            dispatch.call(PhoneAction::PushNotification {
                title: WELCOME_TITLE.to_string(),
                body: WELCOME_BODY.to_string(),
                app_id: None,
                posted_at_ms: unix_time_ms_now(),
            });
        });
    });
}

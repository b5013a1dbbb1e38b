//! Built-in Settings app: lock-screen preference, skin picker, and a lock-now shortcut.
//!
//! Every change is sent to the shell through [`phone_app_contract::AppServices`]; the app keeps
//! no state of its own beyond what it reads from the injected signals.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

use leptos::*;
use phone_app_contract::{AppServices, Skin};
use system_ui::prelude::*;

fn skin_note(skin: Skin) -> &'static str {
    match skin {
        Skin::HyperOs => "Compact status header, dock, rounded-square icons.",
        Skin::OneUi => "Large clock header, squircle icons, roomy spacing.",
    }
}

#[component]
/// Settings app screen.
pub fn SettingsApp(
    /// Injected shell services.
    services: AppServices,
) -> impl IntoView {
    let skip_lock = services.skip_lock();
    let skin = services.skin();

    let on_back = {
        let services = services.clone();
        Callback::new(move |_| services.close())
    };
    let on_skip_lock = {
        let services = services.clone();
        Callback::new(move |enabled: bool| services.set_skip_lock(enabled))
    };
    let on_lock_now = {
        let services = services.clone();
        Callback::new(move |_| services.lock_now())
    };

    view! {
        <AppScreen title="Settings" app="settings" on_back=on_back>
            <section class="app-settings-section" aria-labelledby="settings-security">
                <h2 id="settings-security">"Lock screen"</h2>
                <ToggleRow
                    title="Skip lock screen"
                    description="Open straight to the home screen on the next visit."
                >
                    <Switch checked=skip_lock aria_label="Skip lock screen" on_toggle=on_skip_lock />
                </ToggleRow>
                <Button
                    variant=ButtonVariant::Primary
                    leading_icon=IconName::Lock
                    disabled=Signal::derive(move || skip_lock.get())
                    on_click=on_lock_now
                >
                    "Lock now"
                </Button>
            </section>
            <section class="app-settings-section" aria-labelledby="settings-skin">
                <h2 id="settings-skin">"Skin"</h2>
                <ul role="radiogroup" aria-labelledby="settings-skin">
                    {Skin::ALL
                        .into_iter()
                        .map(|option| {
                            let services = services.clone();
                            view! {
                                <ListRow title=option.label() subtitle=skin_note(option)>
                                    <Switch
                                        checked=Signal::derive(move || skin.get() == option)
                                        aria_label=format!("Use {}", option.label())
                                        on_toggle=Callback::new(move |_| services.set_skin(option))
                                    />
                                </ListRow>
                            }
                        })
                        .collect_view()}
                </ul>
            </section>
        </AppScreen>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_skin_has_a_description() {
        for skin in Skin::ALL {
            assert!(!skin_note(skin).is_empty());
        }
        assert_ne!(skin_note(Skin::HyperOs), skin_note(Skin::OneUi));
    }
}

use super::*;
use crate::lock::{PASSCODE, PASSCODE_LENGTH};

const KEYPAD: [char; 10] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '0'];

#[component]
pub(super) fn LockScreen(now: Signal<WallClock>) -> impl IntoView {
    let runtime = use_phone_runtime();
    let state = runtime.state;
    let entered = Signal::derive(move || state.with(|state| state.lock.entered_digits().len()));
    let failed = Signal::derive(move || state.with(|state| state.lock.last_attempt_failed()));

    view! {
        <section
            class="phone-lock-screen"
            aria-label="Lock screen"
            data-ui-kind="lock-screen"
            data-failed=move || failed.get().to_string()
        >
            <header data-ui-slot="clock">
                <Icon icon=IconName::Lock size=IconSize::Xl />
                <time data-ui-slot="time">{move || now.get().hh_mm()}</time>
                <p data-ui-slot="date">{move || now.get().short_date()}</p>
            </header>
            <div
                data-ui-slot="dots"
                role="status"
                aria-live="polite"
                aria-label=move || format!("{} of {PASSCODE_LENGTH} digits entered", entered.get())
            >
                {(0..PASSCODE_LENGTH)
                    .map(|index| {
                        view! {
                            <span
                                data-ui-slot="dot"
                                data-filled=move || (index < entered.get()).to_string()
                            ></span>
                        }
                    })
                    .collect_view()}
            </div>
            <div data-ui-slot="keypad" role="group" aria-label="Passcode keypad">
                {KEYPAD
                    .into_iter()
                    .map(|digit| {
                        view! {
                            <button
                                type="button"
                                data-ui-slot="key"
                                on:click=move |_| {
                                    runtime.dispatch_action(PhoneAction::SubmitDigit { digit })
                                }
                            >
                                {digit.to_string()}
                            </button>
                        }
                    })
                    .collect_view()}
                <button
                    type="button"
                    data-ui-slot="key"
                    aria-label="Delete digit"
                    on:click=move |_| runtime.dispatch_action(PhoneAction::DeleteDigit)
                >
                    <Icon icon=IconName::Backspace />
                </button>
            </div>
            // Demo hint: the passcode is a fixed placeholder, not a secret.
            <p data-ui-slot="hint">{format!("Passcode: {PASSCODE}")}</p>
        </section>
    }
}

//! Built-in Clock app: wall clock, stopwatch with laps, and a countdown timer.
//!
//! A single 100 ms ticker is the only thing that advances time. It measures real elapsed
//! milliseconds between ticks, so a throttled background tab catches up instead of drifting.

#![warn(missing_docs, rustdoc::broken_intra_doc_links)]

mod engine;

use std::{cell::Cell, rc::Rc, time::Duration};

use leptos::*;
use phone_app_contract::{use_ticker, AppServices};
use platform_host::{unix_time_ms_now, WallClock};
use system_ui::prelude::*;

pub use engine::{format_countdown, format_stopwatch, Countdown, Stopwatch, MAX_COUNTDOWN_MINUTES};

const TICK: Duration = Duration::from_millis(100);

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum ClockTab {
    #[default]
    Clock,
    Stopwatch,
    Timer,
}

impl ClockTab {
    const ALL: [Self; 3] = [Self::Clock, Self::Stopwatch, Self::Timer];

    fn label(self) -> &'static str {
        match self {
            Self::Clock => "Clock",
            Self::Stopwatch => "Stopwatch",
            Self::Timer => "Timer",
        }
    }
}

fn parse_field(raw: &str) -> u32 {
    raw.trim().parse().unwrap_or(0)
}

#[component]
/// Clock app screen.
pub fn ClockApp(
    /// Injected shell services.
    services: AppServices,
) -> impl IntoView {
    let tab = create_rw_signal(ClockTab::default());
    let now = create_rw_signal(WallClock::now());
    let stopwatch = create_rw_signal(Stopwatch::default());
    let countdown = create_rw_signal(Countdown::default());
    let timer_minutes = create_rw_signal(5_u32);
    let timer_seconds = create_rw_signal(0_u32);
    countdown.update(|countdown| countdown.set(5, 0));

    let last_tick = Rc::new(Cell::new(unix_time_ms_now()));
    {
        let services = services.clone();
        use_ticker(TICK, move || {
            let tick_ms = unix_time_ms_now();
            let delta = tick_ms.saturating_sub(last_tick.replace(tick_ms));

            now.set(WallClock::from_unix_ms(tick_ms));
            if stopwatch.with_untracked(Stopwatch::is_running) {
                stopwatch.update(|stopwatch| stopwatch.tick(delta));
            }
            if countdown.with_untracked(Countdown::is_running) {
                let mut finished = false;
                countdown.update(|countdown| finished = countdown.tick(delta));
                if finished {
                    services.notify("Timer", "Time's up.");
                }
            }
        });
    }

    let apply_duration = move || {
        countdown.update(|countdown| {
            countdown.set(timer_minutes.get_untracked(), timer_seconds.get_untracked())
        });
    };
    let on_back = Callback::new(move |_| services.close());

    view! {
        <AppScreen title="Clock" app="clock" on_back=on_back>
            <div class="app-clock-tabs" role="tablist" aria-label="Clock modes">
                {ClockTab::ALL
                    .into_iter()
                    .map(|option| {
                        view! {
                            <Button
                                variant=ButtonVariant::Quiet
                                layout_class="app-clock-tab"
                                aria_label=option.label()
                                on_click=Callback::new(move |_| tab.set(option))
                            >
                                <span
                                    role="tab"
                                    aria-selected=move || (tab.get() == option).to_string()
                                >
                                    {option.label()}
                                </span>
                            </Button>
                        }
                    })
                    .collect_view()}
            </div>
            {move || match tab.get() {
                ClockTab::Clock => {
                    view! {
                        <div class="app-clock-face" aria-live="off">
                            <p data-ui-slot="time">{move || now.get().hh_mm_ss()}</p>
                            <p data-ui-slot="date">{move || now.get().short_date()}</p>
                        </div>
                    }
                        .into_view()
                }
                ClockTab::Stopwatch => {
                    view! {
                        <div class="app-clock-stopwatch">
                            <p data-ui-slot="readout">
                                {move || stopwatch.with(|stopwatch| format_stopwatch(stopwatch.elapsed_ms()))}
                            </p>
                            <div data-ui-slot="controls">
                                <Button
                                    variant=ButtonVariant::Primary
                                    on_click=Callback::new(move |_| {
                                        stopwatch
                                            .update(|stopwatch| {
                                                if stopwatch.is_running() {
                                                    stopwatch.stop();
                                                } else {
                                                    stopwatch.start();
                                                }
                                            })
                                    })
                                >
                                    {move || {
                                        if stopwatch.with(Stopwatch::is_running) { "Stop" } else { "Start" }
                                    }}
                                </Button>
                                <Button
                                    disabled=Signal::derive(move || !stopwatch.with(Stopwatch::is_running))
                                    on_click=Callback::new(move |_| stopwatch.update(Stopwatch::lap))
                                >
                                    "Lap"
                                </Button>
                                <Button
                                    disabled=Signal::derive(move || stopwatch.with(Stopwatch::is_running))
                                    on_click=Callback::new(move |_| stopwatch.update(Stopwatch::reset))
                                >
                                    "Reset"
                                </Button>
                            </div>
                            <ol class="app-clock-laps" aria-label="Laps">
                                {move || {
                                    stopwatch
                                        .with(|stopwatch| {
                                            let count = stopwatch.laps().len();
                                            stopwatch
                                                .laps()
                                                .iter()
                                                .enumerate()
                                                .map(|(index, split)| {
                                                    view! {
                                                        <ListRow
                                                            title=format!("Lap {}", count - index)
                                                            subtitle=format_stopwatch(*split)
                                                        />
                                                    }
                                                })
                                                .collect_view()
                                        })
                                }}
                            </ol>
                        </div>
                    }
                        .into_view()
                }
                ClockTab::Timer => {
                    view! {
                        <div class="app-clock-timer">
                            <p data-ui-slot="readout">
                                {move || countdown.with(|countdown| format_countdown(countdown.remaining_ms()))}
                            </p>
                            <div data-ui-slot="fields">
                                <label>
                                    "Minutes"
                                    <input
                                        type="number"
                                        min="0"
                                        max=MAX_COUNTDOWN_MINUTES.to_string()
                                        prop:value=move || timer_minutes.get().to_string()
                                        disabled=move || countdown.with(Countdown::is_running)
                                        on:change=move |ev| {
                                            timer_minutes
                                                .set(parse_field(&event_target_value(&ev)).min(MAX_COUNTDOWN_MINUTES));
                                            apply_duration();
                                        }
                                    />
                                </label>
                                <label>
                                    "Seconds"
                                    <input
                                        type="number"
                                        min="0"
                                        max="59"
                                        prop:value=move || timer_seconds.get().to_string()
                                        disabled=move || countdown.with(Countdown::is_running)
                                        on:change=move |ev| {
                                            timer_seconds.set(parse_field(&event_target_value(&ev)).min(59));
                                            apply_duration();
                                        }
                                    />
                                </label>
                            </div>
                            <div data-ui-slot="controls">
                                <Button
                                    variant=ButtonVariant::Primary
                                    on_click=Callback::new(move |_| {
                                        countdown
                                            .update(|countdown| {
                                                if countdown.is_running() {
                                                    countdown.pause();
                                                } else {
                                                    countdown.start();
                                                }
                                            })
                                    })
                                >
                                    {move || {
                                        if countdown.with(Countdown::is_running) { "Pause" } else { "Start" }
                                    }}
                                </Button>
                                <Button on_click=Callback::new(move |_| countdown.update(Countdown::reset))>
                                    "Reset"
                                </Button>
                            </div>
                        </div>
                    }
                        .into_view()
                }
            }}
        </AppScreen>
    }
}

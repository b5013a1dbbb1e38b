//! Built-in placeholder apps backed by static content.

use leptos::*;
use phone_app_contract::AppServices;
use system_ui::{AppScreen, Button, ButtonVariant, Icon, IconName, ListRow};

struct Track {
    title: &'static str,
    artist: &'static str,
    length: &'static str,
}

const TRACKS: [Track; 4] = [
    Track {
        title: "Night Drive",
        artist: "Neon Coast",
        length: "3:42",
    },
    Track {
        title: "Compile Time",
        artist: "The Borrow Checkers",
        length: "4:05",
    },
    Track {
        title: "Static Export",
        artist: "Late Commit",
        length: "2:58",
    },
    Track {
        title: "Lo-fi Refactor",
        artist: "Quiet Hours",
        length: "5:11",
    },
];

const THREADS: [(&str, &str, &str); 3] = [
    ("Recruiter", "Are you open to a quick call this week?", "09:12"),
    ("Mom", "Did you eat?", "Yesterday"),
    ("CI Bot", "Build #482 passed on main.", "Mon"),
];

const DIAL_KEYS: [char; 12] = ['1', '2', '3', '4', '5', '6', '7', '8', '9', '*', '0', '#'];
const MAX_DIAL_DIGITS: usize = 15;

fn back_callback(services: &AppServices) -> Callback<leptos::ev::MouseEvent> {
    let services = services.clone();
    Callback::new(move |_| services.close())
}

/// Mounts the Music placeholder.
pub(super) fn mount_music(services: AppServices) -> View {
    let playing = create_rw_signal::<Option<usize>>(None);
    let on_back = back_callback(&services);

    view! {
        <AppScreen title="Music" app="music" on_back=on_back>
            <ul class="app-music-tracks">
                {TRACKS
                    .iter()
                    .enumerate()
                    .map(|(index, track)| {
                        let is_playing = move || playing.get() == Some(index);
                        view! {
                            <ListRow
                                title=track.title
                                subtitle=format!("{} · {}", track.artist, track.length)
                                leading_icon=IconName::Music
                            >
                                <Button
                                    variant=ButtonVariant::Quiet
                                    aria_label=format!("Play {}", track.title)
                                    on_click=Callback::new(move |_| {
                                        playing.update(|current| {
                                            *current = if *current == Some(index) {
                                                None
                                            } else {
                                                Some(index)
                                            };
                                        })
                                    })
                                >
                                    {move || {
                                        let icon = if is_playing() {
                                            IconName::Pause
                                        } else {
                                            IconName::Play
                                        };
                                        view! { <Icon icon=icon /> }
                                    }}
                                </Button>
                            </ListRow>
                        }
                    })
                    .collect_view()}
            </ul>
            <p class="app-music-now-playing" aria-live="polite">
                {move || match playing.get() {
                    Some(index) => format!("Now playing: {}", TRACKS[index].title),
                    None => "Paused".to_string(),
                }}
            </p>
        </AppScreen>
    }
    .into_view()
}

/// Mounts the Phone placeholder.
pub(super) fn mount_phone(services: AppServices) -> View {
    let dialed = create_rw_signal(String::new());
    let on_back = back_callback(&services);

    view! {
        <AppScreen title="Phone" app="phone" on_back=on_back>
            <output class="app-phone-display" aria-live="polite">
                {move || dialed.get()}
            </output>
            <div class="app-phone-keypad" role="group" aria-label="Dial pad">
                {DIAL_KEYS
                    .into_iter()
                    .map(|key| {
                        view! {
                            <Button on_click=Callback::new(move |_| {
                                dialed.update(|value| {
                                    if value.len() < MAX_DIAL_DIGITS {
                                        value.push(key);
                                    }
                                })
                            })>{key.to_string()}</Button>
                        }
                    })
                    .collect_view()}
            </div>
            <Button
                variant=ButtonVariant::Quiet
                aria_label="Delete digit"
                leading_icon=IconName::Backspace
                on_click=Callback::new(move |_| {
                    dialed.update(|value| {
                        value.pop();
                    })
                })
            >
                ""
            </Button>
        </AppScreen>
    }
    .into_view()
}

/// Mounts the Messages placeholder.
pub(super) fn mount_messages(services: AppServices) -> View {
    let on_back = back_callback(&services);

    view! {
        <AppScreen title="Messages" app="messages" on_back=on_back>
            <ul class="app-messages-threads">
                {THREADS
                    .into_iter()
                    .map(|(sender, preview, when)| {
                        view! {
                            <ListRow title=sender subtitle=preview leading_icon=IconName::Messages>
                                <span class="app-messages-time">{when}</span>
                            </ListRow>
                        }
                    })
                    .collect_view()}
            </ul>
        </AppScreen>
    }
    .into_view()
}

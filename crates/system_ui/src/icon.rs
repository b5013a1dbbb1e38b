use leptos::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
/// Named glyphs used across the shell. Rendering is text based so no icon font ships.
pub enum IconName {
    /// Person silhouette.
    About,
    /// Folder with code.
    Projects,
    /// Music note.
    Music,
    /// Handset.
    Phone,
    /// Speech bubble.
    Messages,
    /// Alarm clock.
    Clock,
    /// Gear.
    Settings,
    /// Closed folder.
    Folder,
    /// Wi-Fi arcs.
    Wifi,
    /// Bluetooth rune.
    Bluetooth,
    /// Airplane.
    Airplane,
    /// Crescent moon.
    DoNotDisturb,
    /// Torch.
    Flashlight,
    /// Bell.
    Bell,
    /// Padlock.
    Lock,
    /// House.
    Home,
    /// Left chevron.
    Back,
    /// Stacked cards.
    Recents,
    /// Delete-left key.
    Backspace,
    /// Play triangle.
    Play,
    /// Pause bars.
    Pause,
    /// Star.
    Star,
    /// Branching fork.
    Fork,
    /// Cross.
    Close,
    /// Battery.
    Battery,
    /// Signal bars.
    Signal,
    /// Sun.
    Brightness,
}

impl IconName {
    /// Stable token written to `data-ui-icon`.
    pub const fn token(self) -> &'static str {
        match self {
            Self::About => "about",
            Self::Projects => "projects",
            Self::Music => "music",
            Self::Phone => "phone",
            Self::Messages => "messages",
            Self::Clock => "clock",
            Self::Settings => "settings",
            Self::Folder => "folder",
            Self::Wifi => "wifi",
            Self::Bluetooth => "bluetooth",
            Self::Airplane => "airplane",
            Self::DoNotDisturb => "do-not-disturb",
            Self::Flashlight => "flashlight",
            Self::Bell => "bell",
            Self::Lock => "lock",
            Self::Home => "home",
            Self::Back => "back",
            Self::Recents => "recents",
            Self::Backspace => "backspace",
            Self::Play => "play",
            Self::Pause => "pause",
            Self::Star => "star",
            Self::Fork => "fork",
            Self::Close => "close",
            Self::Battery => "battery",
            Self::Signal => "signal",
            Self::Brightness => "brightness",
        }
    }

    /// Text glyph rendered inside the icon span.
    pub const fn glyph(self) -> &'static str {
        match self {
            Self::About => "\u{1F464}",
            Self::Projects => "\u{1F4C1}",
            Self::Music => "\u{266B}",
            Self::Phone => "\u{260E}",
            Self::Messages => "\u{1F4AC}",
            Self::Clock => "\u{23F0}",
            Self::Settings => "\u{2699}",
            Self::Folder => "\u{1F5C2}",
            Self::Wifi => "\u{1F4F6}",
            Self::Bluetooth => "\u{16D2}",
            Self::Airplane => "\u{2708}",
            Self::DoNotDisturb => "\u{263E}",
            Self::Flashlight => "\u{1F526}",
            Self::Bell => "\u{1F514}",
            Self::Lock => "\u{1F512}",
            Self::Home => "\u{2302}",
            Self::Back => "\u{2039}",
            Self::Recents => "\u{25A4}",
            Self::Backspace => "\u{232B}",
            Self::Play => "\u{25B6}",
            Self::Pause => "\u{23F8}",
            Self::Star => "\u{2605}",
            Self::Fork => "\u{2442}",
            Self::Close => "\u{2715}",
            Self::Battery => "\u{1F50B}",
            Self::Signal => "\u{2582}\u{2584}\u{2586}",
            Self::Brightness => "\u{2600}",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
/// Icon sizing tokens.
pub enum IconSize {
    /// Inline with text.
    Sm,
    /// Default.
    #[default]
    Md,
    /// Home-screen icon.
    Lg,
    /// Lock-screen hero.
    Xl,
}

impl IconSize {
    fn token(self) -> &'static str {
        match self {
            Self::Sm => "sm",
            Self::Md => "md",
            Self::Lg => "lg",
            Self::Xl => "xl",
        }
    }
}

#[component]
/// Decorative icon glyph.
pub fn Icon(icon: IconName, #[prop(optional)] size: IconSize) -> impl IntoView {
    view! {
        <span
            class="ui-icon"
            aria-hidden="true"
            data-ui-primitive="true"
            data-ui-kind="icon"
            data-ui-icon=icon.token()
            data-ui-size=size.token()
        >
            {icon.glyph()}
        </span>
    }
}

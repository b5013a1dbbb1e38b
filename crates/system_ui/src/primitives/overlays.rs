use super::*;

#[component]
/// Full-screen overlay sheet with a dismiss scrim.
pub fn OverlaySheet(
    kind: &'static str,
    #[prop(into)] aria_label: String,
    on_dismiss: Callback<MouseEvent>,
    children: Children,
) -> impl IntoView {
    view! {
        <div
            class="ui-overlay"
            role="dialog"
            aria-modal="true"
            aria-label=aria_label
            data-ui-primitive="true"
            data-ui-kind="overlay"
            data-ui-variant=kind
        >
            <div data-ui-slot="scrim" on:click=move |ev| on_dismiss.call(ev)></div>
            <div data-ui-slot="sheet">{children()}</div>
        </div>
    }
}

#[component]
/// Control-centre tile.
pub fn QuickTile(
    icon: IconName,
    #[prop(into)] label: String,
    #[prop(into)] active: MaybeSignal<bool>,
    on_click: Callback<MouseEvent>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class="ui-quick-tile"
            aria-pressed=move || bool_token(active.get())
            data-ui-primitive="true"
            data-ui-kind="quick-tile"
            data-ui-selected=move || bool_token(active.get())
            on:click=move |ev| on_click.call(ev)
        >
            <Icon icon=icon />
            <span data-ui-slot="label">{label}</span>
        </button>
    }
}

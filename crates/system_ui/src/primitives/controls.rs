use super::*;

#[component]
/// Shared button primitive.
pub fn Button(
    #[prop(default = ButtonVariant::Standard)] variant: ButtonVariant,
    #[prop(optional)] layout_class: Option<&'static str>,
    #[prop(optional, into)] aria_label: Option<String>,
    #[prop(optional, into)] disabled: MaybeSignal<bool>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] on_click: Option<Callback<MouseEvent>>,
    children: Children,
) -> impl IntoView {
    view! {
        <button
            type="button"
            class=merge_layout_class("ui-button", layout_class)
            aria-label=aria_label
            disabled=move || disabled.get()
            data-ui-primitive="true"
            data-ui-kind="button"
            data-ui-variant=variant.token()
            data-ui-disabled=move || bool_token(disabled.get())
            on:click=move |ev| {
                if let Some(on_click) = on_click.as_ref() {
                    on_click.call(ev);
                }
            }
        >
            {leading_icon.map(|icon| view! { <Icon icon=icon size=IconSize::Sm /> })}
            {children()}
        </button>
    }
}

#[component]
/// Binary switch.
pub fn Switch(
    #[prop(into)] checked: MaybeSignal<bool>,
    #[prop(into)] aria_label: String,
    on_toggle: Callback<bool>,
) -> impl IntoView {
    view! {
        <button
            type="button"
            role="switch"
            class="ui-switch"
            aria-label=aria_label
            aria-checked=move || bool_token(checked.get())
            data-ui-primitive="true"
            data-ui-kind="switch"
            data-ui-selected=move || bool_token(checked.get())
            on:click=move |_| on_toggle.call(!checked.get_untracked())
        >
            <span data-ui-slot="thumb"></span>
        </button>
    }
}

#[component]
/// Settings row with copy on the leading edge and a control on the trailing edge.
pub fn ToggleRow(
    #[prop(optional, into)] title: Option<String>,
    #[prop(optional, into)] description: Option<String>,
    children: Children,
) -> impl IntoView {
    view! {
        <div class="ui-toggle-row" data-ui-primitive="true" data-ui-kind="toggle-row">
            <span data-ui-slot="copy">
                {title.map(|title| view! { <span data-ui-slot="title">{title}</span> })}
                {description
                    .map(|description| view! { <span data-ui-slot="description">{description}</span> })}
            </span>
            <span data-ui-slot="control">{children()}</span>
        </div>
    }
}

#[component]
/// Slider bound to an integer value.
pub fn RangeField(
    #[prop(into)] value: MaybeSignal<u8>,
    #[prop(into)] aria_label: String,
    #[prop(default = 0)] min: u8,
    #[prop(default = 100)] max: u8,
    on_input: Callback<u8>,
) -> impl IntoView {
    view! {
        <input
            type="range"
            class="ui-range"
            aria-label=aria_label
            min=min
            max=max
            prop:value=move || value.get().to_string()
            data-ui-primitive="true"
            data-ui-kind="range"
            on:input=move |ev| {
                if let Ok(parsed) = event_target_value(&ev).parse::<u8>() {
                    on_input.call(parsed);
                }
            }
        />
    }
}

#[component]
/// List row with a title, optional subtitle and trailing children.
pub fn ListRow(
    #[prop(into)] title: String,
    #[prop(optional, into)] subtitle: Option<String>,
    #[prop(optional)] leading_icon: Option<IconName>,
    #[prop(optional)] children: Option<Children>,
) -> impl IntoView {
    view! {
        <li class="ui-list-row" data-ui-primitive="true" data-ui-kind="list-row">
            {leading_icon.map(|icon| view! { <Icon icon=icon /> })}
            <span data-ui-slot="copy">
                <span data-ui-slot="title">{title}</span>
                {subtitle.map(|subtitle| view! { <span data-ui-slot="subtitle">{subtitle}</span> })}
            </span>
            <span data-ui-slot="trailing">{children.map(|children| children())}</span>
        </li>
    }
}

#[component]
/// Placeholder for empty or loading lists.
pub fn EmptyState(#[prop(into)] message: String) -> impl IntoView {
    view! {
        <p class="ui-empty-state" data-ui-primitive="true" data-ui-kind="empty-state">
            {message}
        </p>
    }
}

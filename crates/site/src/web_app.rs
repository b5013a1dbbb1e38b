use leptos::*;
use leptos_meta::*;
use leptos_router::*;
use phone_app_contract::Skin;
use phone_runtime::{PhoneProvider, PhoneShell};
use platform_host_web::build_host_services;

#[component]
pub fn SiteApp() -> impl IntoView {
    provide_meta_context();

    view! {
        <Title text="Portfolio Phone" />
        <Meta name="description" content="A personal portfolio presented as a simulated phone." />

        <Router>
            <main class="site-root">
                <Routes>
                    <Route path="" view=|| view! { <PhoneEntry skin=Skin::HyperOs /> } />
                    <Route path="/oneui" view=|| view! { <PhoneEntry skin=Skin::OneUi /> } />
                    <Route path="/*any" view=|| view! { <Redirect path="/" /> } />
                </Routes>
            </main>
        </Router>
    }
}

#[component]
/// Phone shell mounted with the browser host bundle.
pub fn PhoneEntry(skin: Skin) -> impl IntoView {
    view! {
        <PhoneProvider host_services=build_host_services() skin=skin>
            <PhoneShell />
        </PhoneProvider>
    }
}

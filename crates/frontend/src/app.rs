use crate::routes::routes::AppRoutes;
use crate::shared::config::load_config;
use crate::system::auth::context::SessionProvider;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Конфигурация читается один раз при старте
    provide_context(load_config());

    view! {
        <SessionProvider>
            <AppRoutes />
        </SessionProvider>
    }
}

use crate::shared::config::AppConfig;
use crate::shared::icons::icon;
use crate::system::auth::context::{use_granted_session, use_session_context};
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Верхняя панель: название, пользователь, выход
#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx = use_session_context();
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let session = use_granted_session();
    let navigate = use_navigate();
    let login = config.routes.login.clone();

    let logout = move |_| {
        ctx.sign_out();
        navigate(&login, NavigateOptions::default());
    };

    view! {
        <header class="top-header">
            <div class="top-header__brand">"Панель администратора"</div>
            <div class="top-header__user">
                <span class="top-header__name">{session.user.name.clone()}</span>
                <span class="top-header__role">{session.role().code().to_string()}</span>
                <button class="button button--icon" title="Выйти" on:click=logout>
                    {icon("logout")}
                </button>
            </div>
        </header>
    }
}

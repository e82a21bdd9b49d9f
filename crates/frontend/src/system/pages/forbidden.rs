use crate::shared::config::AppConfig;
use crate::system::auth::context::use_session_context;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

/// Страница для сессии без доступной стартовой страницы
#[component]
pub fn ForbiddenPage() -> impl IntoView {
    let ctx = use_session_context();
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let navigate = use_navigate();
    let login = config.routes.login.clone();

    let logout = move |_| {
        ctx.sign_out();
        navigate(&login, NavigateOptions::default());
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"Доступ запрещён"</h2>
                <p>"У вашей учётной записи нет доступа к панели администратора."</p>
                <button class="button button--secondary" on:click=logout>
                    "Войти под другим пользователем"
                </button>
            </div>
        </div>
    }
}

use crate::shared::api_utils::ApiClient;
use crate::shared::config::AppConfig;
use crate::shared::grid::FailureKind;
use crate::system::auth::api;
use crate::system::auth::context::use_session_context;
use contracts::system::auth::Session;
use leptos::prelude::*;
use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;

#[component]
pub fn LoginPage() -> impl IntoView {
    let username = RwSignal::new(String::new());
    let password = RwSignal::new(String::new());
    let error_message = RwSignal::new(Option::<String>::None);
    let is_loading = RwSignal::new(false);

    let ctx = use_session_context();
    let config = use_context::<AppConfig>().expect("AppConfig not found in context");
    let navigate = use_navigate();

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();

        let username_val = username.get_untracked();
        let password_val = password.get_untracked();
        if username_val.trim().is_empty() || password_val.is_empty() {
            error_message.set(Some("Введите логин и пароль".to_string()));
            return;
        }

        is_loading.set(true);
        error_message.set(None);

        let client = ApiClient::new(config.api.base_url.clone());
        let routes = config.routes.clone();
        let ctx = ctx.clone();
        let navigate = navigate.clone();
        wasm_bindgen_futures::spawn_local(async move {
            match api::login(&client, username_val, password_val).await {
                Ok(response) => {
                    let session = Session::from(response);
                    let target = routes.landing_for(session.role()).to_string();
                    ctx.sign_in(session);
                    let _ = is_loading.try_set(false);
                    navigate(&target, NavigateOptions::default());
                }
                Err(e) => {
                    let text = match e.kind() {
                        FailureKind::Session | FailureKind::Validation => {
                            "Неверный логин или пароль".to_string()
                        }
                        _ => format!("Ошибка входа: {}", e),
                    };
                    let _ = error_message.try_set(Some(text));
                    let _ = is_loading.try_set(false);
                }
            }
        });
    };

    view! {
        <div class="login-container">
            <div class="login-box">
                <h1>"Панель администратора"</h1>
                <h2>"Вход в систему"</h2>

                <Show when=move || error_message.get().is_some()>
                    <div class="error-message">
                        {move || error_message.get().unwrap_or_default()}
                    </div>
                </Show>

                <form on:submit=on_submit>
                    <div class="form-group">
                        <label for="username">"Логин"</label>
                        <input
                            type="text"
                            id="username"
                            prop:value=move || username.get()
                            on:input=move |ev| username.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <div class="form-group">
                        <label for="password">"Пароль"</label>
                        <input
                            type="password"
                            id="password"
                            prop:value=move || password.get()
                            on:input=move |ev| password.set(event_target_value(&ev))
                            required
                            disabled=move || is_loading.get()
                        />
                    </div>

                    <button
                        type="submit"
                        class="button button--primary"
                        disabled=move || is_loading.get()
                    >
                        {move || if is_loading.get() { "Вход..." } else { "Войти" }}
                    </button>
                </form>
            </div>
        </div>
    }
}

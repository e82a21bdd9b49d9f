use crate::shared::icons::icon;
use gloo_timers::future::TimeoutFuture;
use leptos::ev;
use leptos::prelude::*;
use std::sync::Arc;
use wasm_bindgen_futures::spawn_local;

#[component]
pub fn Modal(
    /// Title of the modal
    #[prop(into)]
    title: Signal<String>,
    /// Callback when modal should close
    on_close: Callback<()>,
    /// Optional action buttons (Save, Cancel, etc.) rendered under the content
    #[prop(optional)]
    footer: Option<ChildrenFn>,
    /// Modal content
    children: Children,
) -> impl IntoView {
    // Escape закрывает окно; обработчик снимается вместе с окном
    let handle = window_event_listener(ev::keydown, move |event| {
        if event.key() == "Escape" {
            on_close.run(());
        }
    });
    on_cleanup(move || handle.remove());

    // Закрытие откладывается на следующий тик: оверлей удаляется во время
    // собственного click-обработчика
    let close_deferred = move || {
        spawn_local(async move {
            TimeoutFuture::new(0).await;
            on_close.run(());
        });
    };

    let handle_overlay_click = move |ev: ev::MouseEvent| {
        let direct = match (ev.target(), ev.current_target()) {
            (Some(t), Some(ct)) => t == ct,
            _ => false,
        };
        if direct {
            close_deferred();
        }
    };

    view! {
        <div class="modal-overlay" on:click=handle_overlay_click>
            <div class="modal" role="dialog">
                <div class="modal-header">
                    <h2 class="modal-title">{move || title.get()}</h2>
                    <button class="button button--icon modal__close" on:click=move |_| close_deferred()>
                        {icon("x")}
                    </button>
                </div>
                <div class="modal-body">
                    {children()}
                </div>
                {footer.map(|footer| view! { <div class="modal-footer">{footer()}</div> })}
            </div>
        </div>
    }
}

/// Подтверждение удаления
#[component]
pub fn ConfirmDelete(
    /// Что удаляется (например, название категории)
    #[prop(into)]
    subject: Signal<String>,
    #[prop(into)]
    busy: Signal<bool>,
    on_confirm: Callback<()>,
    on_close: Callback<()>,
) -> impl IntoView {
    view! {
        <Modal
            title=Signal::derive(|| "Подтверждение удаления".to_string())
            on_close=on_close
            footer=Arc::new(move || view! {
                <button class="button button--secondary" on:click=move |_| on_close.run(())>
                    "Отмена"
                </button>
                <button
                    class="button button--danger"
                    disabled=move || busy.get()
                    on:click=move |_| on_confirm.run(())
                >
                    {icon("delete")}
                    {move || if busy.get() { "Удаление..." } else { "Удалить" }}
                </button>
            }.into_any())
        >
            <p>
                "Удалить «" {move || subject.get()} "»? Действие нельзя отменить."
            </p>
        </Modal>
    }
}

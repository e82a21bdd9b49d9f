use crate::dashboards::StatsDashboard;
use crate::domain::a001_category::ui::list::CategoryList;
use crate::domain::a002_product::ui::list::ProductList;
use crate::domain::a003_order::ui::list::OrderList;
use crate::layout::Shell;
use crate::system::auth::guard::{HomeRedirect, RequireRole};
use crate::system::pages::forbidden::ForbiddenPage;
use crate::system::pages::login::LoginPage;
use contracts::system::auth::Role;
use leptos::prelude::*;
use leptos_router::components::{Route, Router, Routes};
use leptos_router::path;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="login-container">
            <div class="login-box">
                <h2>"Страница не найдена"</h2>
                <a href="/">"На главную"</a>
            </div>
        </div>
    }
}

/// Страницы администратора: проверка роли, затем каркас
#[component]
fn AdminPage(#[prop(into)] path: String, children: ChildrenFn) -> impl IntoView {
    let children = StoredValue::new(children);
    view! {
        <RequireRole role=Role::Admin path=path>
            <Shell>{children.with_value(|c| c())}</Shell>
        </RequireRole>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Routes fallback=|| view! { <NotFound /> }>
                <Route path=path!("/") view=HomeRedirect />
                <Route path=path!("/login") view=LoginPage />
                <Route path=path!("/forbidden") view=ForbiddenPage />
                <Route
                    path=path!("/dashboard")
                    view=|| view! { <AdminPage path="/dashboard"><StatsDashboard /></AdminPage> }
                />
                <Route
                    path=path!("/categories")
                    view=|| view! { <AdminPage path="/categories"><CategoryList /></AdminPage> }
                />
                <Route
                    path=path!("/products")
                    view=|| view! { <AdminPage path="/products"><ProductList /></AdminPage> }
                />
                <Route
                    path=path!("/orders")
                    view=|| view! { <AdminPage path="/orders"><OrderList /></AdminPage> }
                />
            </Routes>
        </Router>
    }
}

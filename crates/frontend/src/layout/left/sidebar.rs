use crate::shared::icons::icon;
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

#[derive(Clone, Copy, Debug, PartialEq)]
struct MenuItem {
    path: &'static str,
    label: &'static str,
    icon: &'static str,
}

fn menu_items() -> [MenuItem; 4] {
    [
        MenuItem {
            path: "/dashboard",
            label: "Панель",
            icon: "dashboard",
        },
        MenuItem {
            path: "/categories",
            label: "Категории",
            icon: "categories",
        },
        MenuItem {
            path: "/products",
            label: "Товары",
            icon: "products",
        },
        MenuItem {
            path: "/orders",
            label: "Заказы",
            icon: "orders",
        },
    ]
}

/// Пункт активен на своей странице и на её вложенных путях
fn is_active(current: &str, path: &str) -> bool {
    current == path
        || current
            .strip_prefix(path)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let pathname = use_location().pathname;

    view! {
        <nav class="app-sidebar__content">
            {menu_items().into_iter().map(|item| view! {
                <A href=item.path>
                    <div
                        class="app-sidebar__item"
                        class:app-sidebar__item--active=move || is_active(&pathname.get(), item.path)
                    >
                        <div class="app-sidebar__item-content">
                            {icon(item.icon)}
                            <span>{item.label}</span>
                        </div>
                    </div>
                </A>
            }).collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_active_item_matches_nested_paths_only() {
        assert!(is_active("/products", "/products"));
        assert!(is_active("/products/7", "/products"));
        assert!(!is_active("/products-archive", "/products"));
        assert!(!is_active("/orders", "/products"));
    }

    #[test]
    fn test_menu_covers_admin_pages() {
        let paths: Vec<_> = menu_items().iter().map(|i| i.path).collect();
        assert_eq!(paths, vec!["/dashboard", "/categories", "/products", "/orders"]);
    }
}

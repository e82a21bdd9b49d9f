pub mod left;
pub mod top_header;

use leptos::prelude::*;

/// Каркас защищённых страниц.
///
/// ```text
/// +------------------------------------------+
/// |              TopHeader                   |
/// +------------------------------------------+
/// |  Sidebar  |          Content             |
/// +------------------------------------------+
/// ```
#[component]
pub fn Shell(children: Children) -> impl IntoView {
    view! {
        <div class="app-layout">
            <top_header::TopHeader />
            <div class="app-body">
                <aside class="app-sidebar">
                    <left::sidebar::Sidebar />
                </aside>
                <main class="app-main">
                    {children()}
                </main>
            </div>
        </div>
    }
}

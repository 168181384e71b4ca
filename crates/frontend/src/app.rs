use crate::routes::routes::AppRoutes;
use crate::shared::theme::AppearanceContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Оформление берётся из системной настройки и доступно всем страницам
    provide_context(AppearanceContext::detect());

    view! {
        <AppRoutes />
    }
}

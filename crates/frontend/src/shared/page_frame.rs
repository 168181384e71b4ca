//! PageFrame - standard root wrapper for every routed page.
//!
//! Guarantees metadata attributes on the root DOM element:
//!   - `id`                  - `"{entity}--{category}"`, e.g. `"a002_store--list"`
//!   - `data-page-category`  - one of the PAGE_CAT_* constants
//!   - `data-appearance`     - current light/dark appearance from context

use super::page_standard::*;
use super::theme::use_appearance;
use leptos::prelude::*;

#[component]
pub fn PageFrame(
    /// HTML id in format `{entity}--{category}`
    page_id: &'static str,
    /// One of the PAGE_CAT_* constants from `page_standard`.
    category: &'static str,
    children: Children,
) -> impl IntoView {
    let appearance = use_appearance();
    let class = match category {
        PAGE_CAT_DETAIL => "page page--detail",
        _ => "page",
    };

    view! {
        <div
            id=page_id
            class=class
            data-page-category=category
            data-appearance=move || appearance.get().as_str()
        >
            {children()}
        </div>
    }
}

//! Боковое меню разделов

use contracts::domain::{
    a001_company, a002_store, a003_filter_installation, a004_maintenance_schedule,
};
use leptos::prelude::*;
use leptos_router::components::A;
use leptos_router::hooks::use_location;

use crate::shared::icons::icon;

#[derive(Clone, Debug, PartialEq)]
struct MenuItem {
    route: &'static str,
    label: &'static str,
    icon: &'static str,
}

fn get_menu_items() -> Vec<MenuItem> {
    vec![
        MenuItem {
            route: a001_company::aggregate::LIST_ROUTE,
            label: "Компании",
            icon: "building",
        },
        MenuItem {
            route: a002_store::aggregate::LIST_ROUTE,
            label: "Торговые точки",
            icon: "store",
        },
        MenuItem {
            route: a003_filter_installation::aggregate::LIST_ROUTE,
            label: "Установленные фильтры",
            icon: "droplet",
        },
        MenuItem {
            route: a004_maintenance_schedule::aggregate::LIST_ROUTE,
            label: "График обслуживания",
            icon: "calendar",
        },
    ]
}

/// Пункт активен и на своей странице, и на вложенных (карточка QR)
fn is_active(pathname: &str, route: &str) -> bool {
    pathname == route
        || pathname
            .strip_prefix(route)
            .is_some_and(|rest| rest.starts_with('/'))
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let location = use_location();

    view! {
        <nav class="sidebar">
            {get_menu_items()
                .into_iter()
                .map(|item| {
                    let route = item.route;
                    let class = move || {
                        if location.pathname.with(|p| is_active(p, route)) {
                            "sidebar__item sidebar__item--active"
                        } else {
                            "sidebar__item"
                        }
                    };
                    view! {
                        <A href=route attr:class=class>
                            {icon(item.icon)}
                            <span class="sidebar__label">{item.label}</span>
                        </A>
                    }
                })
                .collect_view()}
        </nav>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_route_is_active() {
        assert!(is_active("/installations", "/installations"));
        assert!(is_active("/installations/qr/QR-1", "/installations"));
        assert!(!is_active("/installations-archive", "/installations"));
        assert!(!is_active("/stores", "/installations"));
    }

    #[test]
    fn test_menu_covers_every_list() {
        let routes: Vec<_> = get_menu_items().into_iter().map(|i| i.route).collect();
        assert_eq!(routes, ["/companies", "/stores", "/installations", "/schedules"]);
    }
}

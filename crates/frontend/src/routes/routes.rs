use leptos::prelude::*;
use leptos_router::components::{Redirect, Route, Router, Routes};
use leptos_router::path;

use crate::domain::a001_company::ui::list::CompanyList;
use crate::domain::a002_store::ui::list::StoreList;
use crate::domain::a003_filter_installation::ui::details::InstallationQrCard;
use crate::domain::a003_filter_installation::ui::list::InstallationList;
use crate::domain::a004_maintenance_schedule::ui::list::ScheduleList;
use crate::layout::Shell;

#[component]
fn NotFound() -> impl IntoView {
    view! {
        <div class="page">
            <h1 class="page__title">"Страница не найдена"</h1>
        </div>
    }
}

#[component]
pub fn AppRoutes() -> impl IntoView {
    view! {
        <Router>
            <Shell>
                <Routes fallback=|| view! { <NotFound /> }>
                    <Route path=path!("/") view=|| view! { <Redirect path="/installations" /> } />
                    <Route path=path!("/companies") view=CompanyList />
                    <Route path=path!("/stores") view=StoreList />
                    <Route path=path!("/installations") view=InstallationList />
                    <Route path=path!("/installations/qr/:code") view=InstallationQrCard />
                    <Route path=path!("/schedules") view=ScheduleList />
                </Routes>
            </Shell>
        </Router>
    }
}

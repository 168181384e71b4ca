use contracts::domain::a002_store::aggregate::{
    StoreDto, API_PATH, DEFAULT_SORT, FILTERS, LIST_ROUTE,
};
use contracts::enums::StoreStatus;
use contracts::shared::filter_state::keys;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use crate::shared::api_utils::{api_url, delete};
use crate::shared::components::confirm_dialog::ConfirmDialog;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::select_filter::{use_remote_options, SelectFilter};
use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::date_utils::format_date;
use crate::shared::filter_sync::{use_filter_sync, use_paginated_listing, DEFAULT_DEBOUNCE};
use crate::shared::icons::icon;
use crate::shared::list_utils::{table_wrapper_class, SearchInput, SortableHeader};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

fn status_options() -> Vec<(String, String)> {
    StoreStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect()
}

#[component]
pub fn StoreList() -> impl IntoView {
    let filters = use_filter_sync(LIST_ROUTE, FILTERS, DEFAULT_DEBOUNCE);
    let listing = use_paginated_listing::<StoreDto>(API_PATH, FILTERS);
    let companies = use_remote_options("/api/companies/options");
    let is_filter_expanded = RwSignal::new(true);

    // Запись, ожидающая подтверждения удаления
    let pending_delete = RwSignal::new(None::<StoreDto>);
    let deleting = RwSignal::new(false);

    let confirm_delete = move |_: ()| {
        let Some(store) = pending_delete.get_untracked() else {
            return;
        };
        deleting.set(true);
        spawn_local(async move {
            let url = api_url(&format!("{}/{}", API_PATH, store.id));
            match delete(&url).await {
                Ok(()) => {
                    log::info!("store {} deleted", store.id);
                    listing.refresh();
                }
                Err(e) => {
                    log::error!("delete store {}: {}", store.id, e);
                    listing.fail(e.to_string());
                }
            }
            deleting.set(false);
            pending_delete.set(None);
        });
    };

    let company_id = filters.value(keys::COMPANY_ID);
    let status = filters.value(keys::STATUS);
    let company_name = Signal::derive(move || {
        let id = company_id.get();
        companies.with(|opts| {
            opts.iter()
                .find(|(code, _)| *code == id)
                .map(|(_, name)| name.clone())
                .unwrap_or(id)
        })
    });
    let status_name = Signal::derive(move || {
        let code = status.get();
        StoreStatus::from_code(&code)
            .map(|s| s.display_name().to_string())
            .unwrap_or(code)
    });

    view! {
        <PageFrame page_id="a002_store--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Торговые точки"</h1>
                    <Badge variant="primary".to_string()>
                        {move || listing.total().get().to_string()}
                    </Badge>
                </div>
            </div>

            <div class="page__content">
                <FilterPanel
                    filters=filters
                    is_expanded=is_filter_expanded
                    pagination_controls=move || view! { <PaginationControls page={listing.page()} /> }
                    filter_content=move || view! {
                        <Flex gap=FlexGap::Small align=FlexAlign::End>
                            <SearchInput filters=filters placeholder="Код, наименование, адрес..." />
                            <SelectFilter
                                filters=filters
                                field=keys::STATUS
                                label="Статус"
                                options=Signal::derive(status_options)
                                error=listing.field_error(keys::STATUS)
                            />
                            <SelectFilter
                                filters=filters
                                field=keys::COMPANY_ID
                                label="Компания"
                                options=companies
                                error=listing.field_error(keys::COMPANY_ID)
                            />
                        </Flex>
                    }
                    filter_tags=move || view! {
                        <FilterTag filters=filters field=keys::SEARCH label="Поиск" />
                        <FilterTag filters=filters field=keys::STATUS label="Статус" display=status_name />
                        <FilterTag filters=filters field=keys::COMPANY_ID label="Компания" display=company_name />
                    }
                />

                {move || listing.error().get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class=move || table_wrapper_class(listing.loading().get())>
                    <Table attr:style="width: 100%; min-width: 800px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=90.0>
                                    <SortableHeader filters=filters field="code" label="Код" fallback=DEFAULT_SORT />
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>
                                    <SortableHeader filters=filters field="name" label="Наименование" fallback=DEFAULT_SORT />
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=180.0>
                                    <SortableHeader filters=filters field="company_name" label="Компания" fallback=DEFAULT_SORT />
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=220.0>"Адрес"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>"Статус"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=110.0>
                                    <SortableHeader filters=filters field="created_at" label="Создана" fallback=DEFAULT_SORT />
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=50.0>""</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || listing.page().get().map(|p| p.data).unwrap_or_default()
                                key=|store| store.id
                                children=move |store| {
                                    let for_delete = store.clone();
                                    view! {
                                        <TableRow>
                                            <TableCell>
                                                <TableCellLayout truncate=true>
                                                    <span style="font-family: monospace;">{store.code.clone()}</span>
                                                </TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{store.name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{store.company_name.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout truncate=true>{store.address.clone()}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout><StatusBadge status=store.status /></TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <TableCellLayout>{format_date(store.created_at)}</TableCellLayout>
                                            </TableCell>
                                            <TableCell>
                                                <button
                                                    class="button button--icon"
                                                    title="Удалить"
                                                    on:click=move |_| pending_delete.set(Some(for_delete.clone()))
                                                >
                                                    {icon("trash")}
                                                </button>
                                            </TableCell>
                                        </TableRow>
                                    }
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>

            {move || pending_delete.get().map(|store| view! {
                <ConfirmDialog
                    title="Удаление торговой точки"
                    message=format!("Удалить «{}» ({})? Действие нельзя отменить.", store.name, store.code)
                    on_confirm=Callback::new(confirm_delete)
                    on_cancel=Callback::new(move |_| pending_delete.set(None))
                    busy=deleting
                />
            })}
        </PageFrame>
    }
}

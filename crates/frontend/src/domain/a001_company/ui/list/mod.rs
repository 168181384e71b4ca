use contracts::domain::a001_company::aggregate::{
    CompanyDto, API_PATH, DEFAULT_SORT, FILTERS, LIST_ROUTE,
};
use contracts::shared::filter_state::keys;
use leptos::prelude::*;
use thaw::*;

use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::ui::Badge;
use crate::shared::filter_sync::{use_filter_sync, use_paginated_listing, DEFAULT_DEBOUNCE};
use crate::shared::list_utils::{table_wrapper_class, SearchInput, SortableHeader};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

#[component]
pub fn CompanyList() -> impl IntoView {
    let filters = use_filter_sync(LIST_ROUTE, FILTERS, DEFAULT_DEBOUNCE);
    let listing = use_paginated_listing::<CompanyDto>(API_PATH, FILTERS);
    let is_filter_expanded = RwSignal::new(true);

    view! {
        <PageFrame page_id="a001_company--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Компании"</h1>
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
                            <SearchInput filters=filters placeholder="Код, наименование, город..." />
                        </Flex>
                    }
                    filter_tags=move || view! {
                        <FilterTag filters=filters field=keys::SEARCH label="Поиск" />
                    }
                />

                {move || listing.error().get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class=move || table_wrapper_class(listing.loading().get())>
                    <Table attr:style="width: 100%; min-width: 700px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=90.0>
                                    <SortableHeader filters=filters field="code" label="Код" fallback=DEFAULT_SORT />
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=220.0>
                                    <SortableHeader filters=filters field="name" label="Наименование" fallback=DEFAULT_SORT />
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>
                                    <SortableHeader filters=filters field="city" label="Город" fallback=DEFAULT_SORT />
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=140.0>"Телефон"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=90.0>
                                    <SortableHeader filters=filters field="stores_count" label="Точек" fallback=DEFAULT_SORT />
                                </TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || listing.page().get().map(|p| p.data).unwrap_or_default()
                                key=|company| company.id
                                children=move |company| view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <span style="font-family: monospace;">{company.code.clone()}</span>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{company.name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{company.city.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>
                                                {company.phone.clone().unwrap_or_else(|| "—".to_string())}
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout>{company.stores_count.to_string()}</TableCellLayout>
                                        </TableCell>
                                    </TableRow>
                                }
                            />
                        </TableBody>
                    </Table>
                </div>
            </div>
        </PageFrame>
    }
}

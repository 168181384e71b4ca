use contracts::domain::a004_maintenance_schedule::aggregate::{
    MaintenanceScheduleDto, API_PATH, FILTERS, LIST_ROUTE,
};
use contracts::enums::ScheduleStatus;
use contracts::shared::filter_state::keys;
use leptos::prelude::*;
use leptos_router::components::A;
use thaw::*;

use crate::domain::a003_filter_installation::ui::qr_card_url;
use crate::shared::components::date_range_picker::DateRangePicker;
use crate::shared::components::filter_panel::{FilterPanel, FilterTag};
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::components::select_filter::{use_remote_options, FieldError, SelectFilter};
use crate::shared::components::ui::{Badge, StatusBadge};
use crate::shared::date_utils::format_date;
use crate::shared::filter_sync::{use_filter_sync, use_paginated_listing, DEFAULT_DEBOUNCE};
use crate::shared::list_utils::{table_wrapper_class, SearchInput, SortableHeader};
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;

fn status_options() -> Vec<(String, String)> {
    ScheduleStatus::all()
        .into_iter()
        .map(|s| (s.code().to_string(), s.display_name().to_string()))
        .collect()
}

#[component]
pub fn ScheduleList() -> impl IntoView {
    let filters = use_filter_sync(LIST_ROUTE, FILTERS, DEFAULT_DEBOUNCE);
    let listing = use_paginated_listing::<MaintenanceScheduleDto>(API_PATH, FILTERS);
    let stores = use_remote_options("/api/stores/options");
    let is_filter_expanded = RwSignal::new(true);

    let date_from = filters.value(keys::DATE_FROM);
    let date_to = filters.value(keys::DATE_TO);
    let store_id = filters.value(keys::STORE_ID);
    let status = filters.value(keys::STATUS);

    let on_period_change = Callback::new(move |(from, to): (String, String)| {
        filters.set_fields([(keys::DATE_FROM, from), (keys::DATE_TO, to)]);
    });

    let store_name = Signal::derive(move || {
        let id = store_id.get();
        stores.with(|opts| {
            opts.iter()
                .find(|(code, _)| *code == id)
                .map(|(_, name)| name.clone())
                .unwrap_or(id)
        })
    });
    let status_name = Signal::derive(move || {
        let code = status.get();
        ScheduleStatus::from_code(&code)
            .map(|s| s.display_name().to_string())
            .unwrap_or(code)
    });
    let period = Signal::derive(move || format!("{} — {}", date_from.get(), date_to.get()));

    view! {
        <PageFrame page_id="a004_maintenance_schedule--list" category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"График обслуживания"</h1>
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
                            <SearchInput filters=filters placeholder="Техник, QR-код, заметки..." />
                            <SelectFilter
                                filters=filters
                                field=keys::STATUS
                                label="Статус"
                                options=Signal::derive(status_options)
                                error=listing.field_error(keys::STATUS)
                            />
                            <SelectFilter
                                filters=filters
                                field=keys::STORE_ID
                                label="Торговая точка"
                                options=stores
                                error=listing.field_error(keys::STORE_ID)
                            />
                            <Flex vertical=true gap=FlexGap::Small>
                                <DateRangePicker
                                    date_from=date_from
                                    date_to=date_to
                                    on_change=on_period_change
                                    label="Плановая дата".to_string()
                                />
                                <FieldError error=listing.field_error(keys::DATE_FROM) />
                                <FieldError error=listing.field_error(keys::DATE_TO) />
                            </Flex>
                        </Flex>
                    }
                    filter_tags=move || view! {
                        <FilterTag filters=filters field=keys::SEARCH label="Поиск" />
                        <FilterTag filters=filters field=keys::STATUS label="Статус" display=status_name />
                        <FilterTag filters=filters field=keys::STORE_ID label="Точка" display=store_name />
                        <FilterTag filters=filters field=keys::DATE_FROM label="Период" display=period paired=keys::DATE_TO />
                    }
                />

                {move || listing.error().get().map(|err| view! {
                    <div class="alert alert--error">{err}</div>
                })}

                <div class=move || table_wrapper_class(listing.loading().get())>
                    <Table attr:style="width: 100%; min-width: 900px;">
                        <TableHeader>
                            <TableRow>
                                <TableHeaderCell resizable=false min_width=110.0>
                                    <SortableHeader filters=filters field="scheduled_for" label="Дата" />
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=200.0>
                                    <SortableHeader filters=filters field="store_name" label="Торговая точка" />
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=130.0>"QR-код"</TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=160.0>
                                    <SortableHeader filters=filters field="technician" label="Техник" />
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=120.0>
                                    <SortableHeader filters=filters field="status" label="Статус" />
                                </TableHeaderCell>
                                <TableHeaderCell resizable=false min_width=220.0>"Заметки"</TableHeaderCell>
                            </TableRow>
                        </TableHeader>
                        <TableBody>
                            <For
                                each=move || listing.page().get().map(|p| p.data).unwrap_or_default()
                                key=|item| item.id
                                children=move |item| view! {
                                    <TableRow>
                                        <TableCell>
                                            <TableCellLayout>{format_date(item.scheduled_for)}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{item.store_name.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                <A href=qr_card_url(&item.qr_code)>
                                                    <span style="font-family: monospace;">{item.qr_code.clone()}</span>
                                                </A>
                                            </TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>{item.technician.clone()}</TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout><StatusBadge status=item.status /></TableCellLayout>
                                        </TableCell>
                                        <TableCell>
                                            <TableCellLayout truncate=true>
                                                {item.notes.clone().unwrap_or_default()}
                                            </TableCellLayout>
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

use std::cmp::Ordering;

use contracts::domain::a004_maintenance_schedule::aggregate::{
    MaintenanceScheduleDto, FILTERS, LIST_ROUTE, SORT_FIELDS,
};
use contracts::enums::ScheduleStatus;
use contracts::shared::Paginated;

use crate::shared::data::store::{ScheduleRow, Store};
use crate::shared::listing::{ListingRequest, ListingSchema};

fn is_status(code: &str) -> bool {
    ScheduleStatus::from_code(code).is_some()
}

pub const SCHEMA: ListingSchema = ListingSchema {
    route: LIST_ROUTE,
    filters: FILTERS,
    sort_fields: SORT_FIELDS,
    is_status: Some(is_status),
};

/// Запись графика с данными установки и точки; `None`, если установки уже нет
fn to_dto(store: &Store, row: &ScheduleRow) -> Option<MaintenanceScheduleDto> {
    let installation = store.installation(row.installation_id)?;
    Some(MaintenanceScheduleDto {
        id: row.id,
        installation_id: row.installation_id,
        qr_code: installation.qr_code.clone(),
        store_id: installation.store_id,
        store_name: store.store_name(installation.store_id),
        technician: row.technician.clone(),
        scheduled_for: row.scheduled_for,
        status: row.status,
        notes: row.notes.clone(),
    })
}

fn compare(a: &MaintenanceScheduleDto, b: &MaintenanceScheduleDto, field: &str) -> Ordering {
    let ordering = match field {
        "store_name" => a.store_name.cmp(&b.store_name),
        "technician" => a.technician.cmp(&b.technician),
        "status" => a.status.code().cmp(b.status.code()),
        _ => a.scheduled_for.cmp(&b.scheduled_for),
    };
    ordering.then(a.id.cmp(&b.id))
}

/// Период фильтрует по плановой дате визита
pub fn list(store: &Store, req: &ListingRequest) -> Paginated<MaintenanceScheduleDto> {
    let rows = store
        .schedules
        .iter()
        .filter(|s| req.matches_status(s.status.code()))
        .filter(|s| req.in_period(s.scheduled_for))
        .filter_map(|row| to_dto(store, row))
        .filter(|s| req.matches_store(s.store_id))
        .filter(|s| {
            req.matches_search(&[
                s.technician.as_str(),
                s.qr_code.as_str(),
                s.store_name.as_str(),
                s.notes.as_deref().unwrap_or_default(),
            ])
        })
        .collect();
    req.paginate(rows, "scheduled_for", compare)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shared::config::ListingConfig;
    use crate::shared::data::seed::demo_store;
    use std::collections::HashMap;

    fn request(pairs: &[(&str, &str)]) -> ListingRequest {
        let params: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ListingRequest::parse(&SCHEMA, &params, ListingConfig::default()).unwrap()
    }

    #[test]
    fn test_search_qr_within_store() {
        let page = list(
            &demo_store(),
            &request(&[("store_id", "1"), ("search", "QR-0002")]),
        );
        assert_eq!(page.total, 2);
        assert!(page.data.iter().all(|s| s.qr_code == "QR-0002"));
    }

    #[test]
    fn test_planned_in_period() {
        let page = list(
            &demo_store(),
            &request(&[
                ("status", "planned"),
                ("date_from", "2024-07-01"),
                ("date_to", "2024-07-31"),
            ]),
        );
        assert!(page.total > 0);
        assert!(page.data.iter().all(|s| {
            s.status == ScheduleStatus::Planned
                && s.scheduled_for.format("%Y-%m").to_string() == "2024-07"
        }));
    }

    #[test]
    fn test_sort_by_technician_desc() {
        let page = list(
            &demo_store(),
            &request(&[("sort_by", "technician"), ("sort_direction", "desc")]),
        );
        assert_eq!(page.data[0].technician, "Rina Hartono");
    }

    #[test]
    fn test_orphaned_rows_skipped() {
        let mut store = demo_store();
        store.installations.retain(|i| i.id != 1);
        let page = list(&store, &request(&[("search", "QR-0001")]));
        assert_eq!(page.total, 0);
    }
}

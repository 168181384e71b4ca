use std::cmp::Ordering;

use contracts::domain::a003_filter_installation::aggregate::{
    FilterInstallationDto, FILTERS, LIST_ROUTE, SORT_FIELDS,
};
use contracts::enums::InstallationStatus;
use contracts::shared::{Loadable, Paginated};

use crate::shared::data::store::{InstallationRow, Store};
use crate::shared::listing::{ListingRequest, ListingSchema};

fn is_status(code: &str) -> bool {
    InstallationStatus::from_code(code).is_some()
}

pub const SCHEMA: ListingSchema = ListingSchema {
    route: LIST_ROUTE,
    filters: FILTERS,
    sort_fields: SORT_FIELDS,
    is_status: Some(is_status),
};

fn to_dto(store: &Store, row: &InstallationRow) -> FilterInstallationDto {
    FilterInstallationDto {
        id: row.id,
        qr_code: row.qr_code.clone(),
        store_id: row.store_id,
        store_name: store.store_name(row.store_id),
        filter_model: row.filter_model.clone(),
        status: row.status,
        installed_at: row.installed_at,
        next_service_on: row.next_service_on,
    }
}

fn compare(a: &FilterInstallationDto, b: &FilterInstallationDto, field: &str) -> Ordering {
    let ordering = match field {
        "qr_code" => a.qr_code.cmp(&b.qr_code),
        "store_name" => a.store_name.cmp(&b.store_name),
        "installed_at" => a.installed_at.cmp(&b.installed_at),
        _ => a.next_service_on.cmp(&b.next_service_on),
    };
    ordering.then(a.id.cmp(&b.id))
}

/// Период фильтрует по дате установки
pub fn list(store: &Store, req: &ListingRequest) -> Paginated<FilterInstallationDto> {
    let rows = store
        .installations
        .iter()
        .filter(|i| req.matches_status(i.status.code()))
        .filter(|i| req.matches_store(i.store_id))
        .filter(|i| req.in_period(i.installed_at))
        .map(|row| to_dto(store, row))
        .filter(|i| {
            req.matches_search(&[
                i.qr_code.as_str(),
                i.filter_model.as_str(),
                i.store_name.as_str(),
            ])
        })
        .collect();
    req.paginate(rows, "next_service_on", compare)
}

/// Установка по QR-коду; неизвестный код даёт заглушку с тем же кодом
pub fn find_by_qr(store: &Store, qr_code: &str) -> Loadable<FilterInstallationDto> {
    let qr_code = qr_code.trim();
    match store
        .installations
        .iter()
        .find(|i| i.qr_code.eq_ignore_ascii_case(qr_code))
    {
        Some(row) => Loadable::Loaded(to_dto(store, row)),
        None => Loadable::Unloaded(FilterInstallationDto::placeholder(qr_code)),
    }
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
    fn test_default_sort_next_service_ascending() {
        let page = list(&demo_store(), &request(&[]));
        assert!(page
            .data
            .windows(2)
            .all(|w| w[0].next_service_on <= w[1].next_service_on));
        // ссылки несут сортировку по умолчанию
        assert_eq!(
            page.links[2].url.as_deref(),
            Some("/installations?sort_by=next_service_on&page=2")
        );
    }

    #[test]
    fn test_store_and_period_filters() {
        let page = list(
            &demo_store(),
            &request(&[
                ("store_id", "1"),
                ("date_from", "2024-01-19"),
                ("date_to", "2024-01-30"),
            ]),
        );
        // установки 1 и 2 точки 1: 2024-01-19 и 2024-01-30, обе границы включены
        let codes: Vec<_> = page.data.iter().map(|i| i.qr_code.as_str()).collect();
        assert_eq!(codes, ["QR-0001", "QR-0002"]);
    }

    #[test]
    fn test_status_filter() {
        let page = list(&demo_store(), &request(&[("status", "service_due")]));
        assert!(page.total > 0);
        assert!(page
            .data
            .iter()
            .all(|i| i.status == InstallationStatus::ServiceDue));
    }

    #[test]
    fn test_find_by_qr() {
        let store = demo_store();
        let found = find_by_qr(&store, "qr-0004");
        assert!(found.is_loaded());
        assert_eq!(found.record().store_name, "Toko Abadi");

        let missing = find_by_qr(&store, "QR-9999");
        assert!(!missing.is_loaded());
        assert_eq!(missing.record().qr_code, "QR-9999");
    }
}

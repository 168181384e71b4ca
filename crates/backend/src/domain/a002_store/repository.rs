use std::cmp::Ordering;

use contracts::domain::a002_store::aggregate::{
    StoreDto, DEFAULT_SORT, FILTERS, LIST_ROUTE, SORT_FIELDS,
};
use contracts::domain::common::SelectOption;
use contracts::enums::StoreStatus;
use contracts::shared::Paginated;

use crate::shared::data::store::{RemovedStore, Store, StoreRow};
use crate::shared::listing::{ListingRequest, ListingSchema};

fn is_status(code: &str) -> bool {
    StoreStatus::from_code(code).is_some()
}

pub const SCHEMA: ListingSchema = ListingSchema {
    route: LIST_ROUTE,
    filters: FILTERS,
    sort_fields: SORT_FIELDS,
    is_status: Some(is_status),
};

fn to_dto(store: &Store, row: &StoreRow) -> StoreDto {
    StoreDto {
        id: row.id,
        code: row.code.clone(),
        name: row.name.clone(),
        company_id: row.company_id,
        company_name: store.company_name(row.company_id),
        address: row.address.clone(),
        status: row.status,
        created_at: row.created_at,
    }
}

fn compare(a: &StoreDto, b: &StoreDto, field: &str) -> Ordering {
    let ordering = match field {
        "code" => a.code.cmp(&b.code),
        "company_name" => a.company_name.cmp(&b.company_name),
        "created_at" => a.created_at.cmp(&b.created_at),
        _ => a.name.cmp(&b.name),
    };
    ordering.then(a.id.cmp(&b.id))
}

pub fn list(store: &Store, req: &ListingRequest) -> Paginated<StoreDto> {
    let rows = store
        .stores
        .iter()
        .filter(|s| req.matches_status(s.status.code()))
        .filter(|s| req.matches_company(s.company_id))
        .map(|row| to_dto(store, row))
        .filter(|s| {
            req.matches_search(&[
                s.code.as_str(),
                s.name.as_str(),
                s.address.as_str(),
                s.company_name.as_str(),
            ])
        })
        .collect();
    req.paginate(rows, DEFAULT_SORT, compare)
}

pub fn options(store: &Store) -> Vec<SelectOption> {
    let mut options: Vec<_> = store
        .stores
        .iter()
        .map(|s| SelectOption {
            id: s.id,
            name: s.name.clone(),
        })
        .collect();
    options.sort_by(|a, b| a.name.cmp(&b.name));
    options
}

pub fn delete(store: &mut Store, id: i64) -> Option<RemovedStore> {
    store.remove_store(id)
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
    fn test_search_toko_a() {
        let page = list(&demo_store(), &request(&[("search", "toko a")]));
        let names: Vec<_> = page.data.iter().map(|s| s.name.as_str()).collect();
        assert_eq!(names, ["Toko A", "Toko Abadi"]);
    }

    #[test]
    fn test_filter_inactive_within_company() {
        let page = list(
            &demo_store(),
            &request(&[("status", "inactive"), ("company_id", "2")]),
        );
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].name, "Toko Cahaya");
        assert_eq!(page.data[0].company_name, "CV Air Bersih");
    }

    #[test]
    fn test_sort_by_created_at_desc() {
        let page = list(
            &demo_store(),
            &request(&[("sort_by", "created_at"), ("sort_direction", "desc")]),
        );
        assert!(page
            .data
            .windows(2)
            .all(|w| w[0].created_at >= w[1].created_at));
    }

    #[test]
    fn test_delete_then_list() {
        let mut store = demo_store();
        assert!(delete(&mut store, 1).is_some());
        assert!(delete(&mut store, 1).is_none());
        let page = list(&store, &request(&[("search", "toko a")]));
        assert_eq!(page.total, 1);
    }
}

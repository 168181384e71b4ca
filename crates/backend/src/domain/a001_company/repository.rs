use std::cmp::Ordering;

use contracts::domain::a001_company::aggregate::{
    CompanyDto, DEFAULT_SORT, FILTERS, LIST_ROUTE, SORT_FIELDS,
};
use contracts::domain::common::SelectOption;
use contracts::shared::Paginated;

use crate::shared::data::store::{CompanyRow, Store};
use crate::shared::listing::{ListingRequest, ListingSchema};

pub const SCHEMA: ListingSchema = ListingSchema {
    route: LIST_ROUTE,
    filters: FILTERS,
    sort_fields: SORT_FIELDS,
    is_status: None,
};

fn to_dto(store: &Store, row: &CompanyRow) -> CompanyDto {
    CompanyDto {
        id: row.id,
        code: row.code.clone(),
        name: row.name.clone(),
        city: row.city.clone(),
        phone: row.phone.clone(),
        stores_count: store.stores.iter().filter(|s| s.company_id == row.id).count(),
    }
}

fn compare(a: &CompanyDto, b: &CompanyDto, field: &str) -> Ordering {
    let ordering = match field {
        "code" => a.code.cmp(&b.code),
        "city" => a.city.cmp(&b.city),
        "stores_count" => a.stores_count.cmp(&b.stores_count),
        _ => a.name.cmp(&b.name),
    };
    ordering.then(a.id.cmp(&b.id))
}

pub fn list(store: &Store, req: &ListingRequest) -> Paginated<CompanyDto> {
    let rows = store
        .companies
        .iter()
        .map(|row| to_dto(store, row))
        .filter(|c| req.matches_search(&[c.code.as_str(), c.name.as_str(), c.city.as_str()]))
        .collect();
    req.paginate(rows, DEFAULT_SORT, compare)
}

pub fn options(store: &Store) -> Vec<SelectOption> {
    let mut options: Vec<_> = store
        .companies
        .iter()
        .map(|c| SelectOption {
            id: c.id,
            name: c.name.clone(),
        })
        .collect();
    options.sort_by(|a, b| a.name.cmp(&b.name));
    options
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
    fn test_search_by_city() {
        let page = list(&demo_store(), &request(&[("search", "bandung")]));
        assert_eq!(page.total, 1);
        assert_eq!(page.data[0].name, "CV Air Bersih");
    }

    #[test]
    fn test_sort_by_stores_count_desc() {
        let page = list(
            &demo_store(),
            &request(&[("sort_by", "stores_count"), ("sort_direction", "desc")]),
        );
        let counts: Vec<_> = page.data.iter().map(|c| c.stores_count).collect();
        assert_eq!(counts, vec![3, 3, 2, 2]);
        assert_eq!(page.data[0].code, "CMP-003");
    }

    #[test]
    fn test_options_sorted_by_name() {
        let names: Vec<_> = options(&demo_store()).into_iter().map(|o| o.name).collect();
        assert_eq!(names, ["CV Air Bersih", "PT Sumber Segar", "PT Tirta Jaya", "UD Mata Air"]);
    }
}

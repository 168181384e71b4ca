use contracts::domain::a001_company::aggregate::CompanyDto;
use contracts::domain::common::SelectOption;
use contracts::shared::Paginated;
use tokio::sync::RwLock;

use super::repository;
use crate::shared::data::store::{get_store, Store};
use crate::shared::listing::ListingRequest;

/// Страница списка компаний
pub async fn list(req: &ListingRequest) -> anyhow::Result<Paginated<CompanyDto>> {
    Ok(list_in(get_store()?, req).await)
}

async fn list_in(lock: &RwLock<Store>, req: &ListingRequest) -> Paginated<CompanyDto> {
    let store = lock.read().await;
    repository::list(&store, req)
}

/// Варианты для выпадающего списка
pub async fn options() -> anyhow::Result<Vec<SelectOption>> {
    let store = get_store()?.read().await;
    Ok(repository::options(&store))
}

use contracts::domain::a002_store::aggregate::StoreDto;
use contracts::domain::common::SelectOption;
use contracts::shared::Paginated;
use tokio::sync::RwLock;

use super::repository;
use crate::shared::data::store::{get_store, Store};
use crate::shared::listing::ListingRequest;

/// Страница списка торговых точек
pub async fn list(req: &ListingRequest) -> anyhow::Result<Paginated<StoreDto>> {
    let store = get_store()?.read().await;
    Ok(repository::list(&store, req))
}

pub async fn options() -> anyhow::Result<Vec<SelectOption>> {
    let store = get_store()?.read().await;
    Ok(repository::options(&store))
}

/// Удаление точки вместе с её установками и графиком обслуживания
pub async fn delete(id: i64) -> anyhow::Result<bool> {
    Ok(delete_in(get_store()?, id).await)
}

async fn delete_in(lock: &RwLock<Store>, id: i64) -> bool {
    let mut store = lock.write().await;
    match repository::delete(&mut store, id) {
        Some(removed) => {
            tracing::info!(
                "Store {} deleted with {} installations and {} schedule entries",
                id,
                removed.installations,
                removed.schedules
            );
            true
        }
        None => false,
    }
}

use contracts::domain::a004_maintenance_schedule::aggregate::MaintenanceScheduleDto;
use contracts::shared::Paginated;

use super::repository;
use crate::shared::data::store::get_store;
use crate::shared::listing::ListingRequest;

pub async fn list(req: &ListingRequest) -> anyhow::Result<Paginated<MaintenanceScheduleDto>> {
    let store = get_store()?.read().await;
    Ok(repository::list(&store, req))
}

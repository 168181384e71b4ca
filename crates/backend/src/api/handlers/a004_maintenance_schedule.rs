use std::collections::HashMap;

use axum::{extract::Query, Json};
use contracts::domain::a004_maintenance_schedule::aggregate::MaintenanceScheduleDto;
use contracts::shared::Paginated;

use crate::domain::a004_maintenance_schedule::{repository, service};
use crate::shared::config::listing_config;
use crate::shared::error::ApiResult;
use crate::shared::listing::ListingRequest;

/// GET /api/schedules
pub async fn list(
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<Paginated<MaintenanceScheduleDto>>> {
    let req = ListingRequest::parse(&repository::SCHEMA, &params, listing_config())?;
    Ok(Json(service::list(&req).await?))
}

use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::Json;
use contracts::domain::a003_filter_installation::aggregate::FilterInstallationDto;
use contracts::shared::{Loadable, Paginated};

use crate::domain::a003_filter_installation::{repository, service};
use crate::shared::config::listing_config;
use crate::shared::error::ApiResult;
use crate::shared::listing::ListingRequest;

/// GET /api/installations
pub async fn list(
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<Paginated<FilterInstallationDto>>> {
    let req = ListingRequest::parse(&repository::SCHEMA, &params, listing_config())?;
    Ok(Json(service::list(&req).await?))
}

/// GET /api/installations/qr/:code
///
/// Всегда 200: неизвестный код возвращается как `Unloaded` с заглушкой.
pub async fn get_by_qr(
    Path(code): Path<String>,
) -> ApiResult<Json<Loadable<FilterInstallationDto>>> {
    Ok(Json(service::get_by_qr(&code).await?))
}

use std::collections::HashMap;

use axum::{extract::Query, Json};
use contracts::domain::a001_company::aggregate::CompanyDto;
use contracts::domain::common::SelectOption;
use contracts::shared::Paginated;

use crate::domain::a001_company::{repository, service};
use crate::shared::config::listing_config;
use crate::shared::error::ApiResult;
use crate::shared::listing::ListingRequest;

/// GET /api/companies
pub async fn list(
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<Paginated<CompanyDto>>> {
    let req = ListingRequest::parse(&repository::SCHEMA, &params, listing_config())?;
    Ok(Json(service::list(&req).await?))
}

/// GET /api/companies/options
pub async fn options() -> ApiResult<Json<Vec<SelectOption>>> {
    Ok(Json(service::options().await?))
}

use std::collections::HashMap;

use axum::extract::{Path, Query};
use axum::http::StatusCode;
use axum::Json;
use contracts::domain::a002_store::aggregate::StoreDto;
use contracts::domain::common::SelectOption;
use contracts::shared::{Paginated, ValidationErrors};

use crate::domain::a002_store::{repository, service};
use crate::shared::config::listing_config;
use crate::shared::error::{ApiError, ApiResult};
use crate::shared::listing::ListingRequest;

/// GET /api/stores
pub async fn list(
    Query(params): Query<HashMap<String, String>>,
) -> ApiResult<Json<Paginated<StoreDto>>> {
    let req = ListingRequest::parse(&repository::SCHEMA, &params, listing_config())?;
    Ok(Json(service::list(&req).await?))
}

/// GET /api/stores/options
pub async fn options() -> ApiResult<Json<Vec<SelectOption>>> {
    Ok(Json(service::options().await?))
}

/// DELETE /api/stores/:id
pub async fn delete(Path(id): Path<String>) -> ApiResult<StatusCode> {
    let id = id.trim().parse::<i64>().map_err(|_| {
        let mut errors = ValidationErrors::new();
        errors.add("id", "Некорректный идентификатор");
        ApiError::Validation(errors)
    })?;
    if service::delete(id).await? {
        Ok(StatusCode::NO_CONTENT)
    } else {
        Err(ApiError::NotFound)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_bad_filters_rejected_before_lookup() {
        let params: HashMap<String, String> =
            [("company_id".to_string(), "first".to_string())].into();
        match list(Query(params)).await {
            Err(ApiError::Validation(errors)) => {
                assert!(errors.first("company_id").is_some())
            }
            other => panic!("expected validation error, got {:?}", other.map(|_| ())),
        }
    }

    #[tokio::test]
    async fn test_delete_non_numeric_id() {
        let result = delete(Path("abc".to_string())).await;
        assert!(matches!(result, Err(ApiError::Validation(_))));
    }
}

use contracts::domain::a003_filter_installation::aggregate::FilterInstallationDto;
use contracts::shared::{Loadable, Paginated};

use super::repository;
use crate::shared::data::store::get_store;
use crate::shared::listing::ListingRequest;

pub async fn list(req: &ListingRequest) -> anyhow::Result<Paginated<FilterInstallationDto>> {
    let store = get_store()?.read().await;
    Ok(repository::list(&store, req))
}

/// Карточка по QR-коду. Решение «найдено / заглушка» принимается здесь.
pub async fn get_by_qr(qr_code: &str) -> anyhow::Result<Loadable<FilterInstallationDto>> {
    let store = get_store()?.read().await;
    let card = repository::find_by_qr(&store, qr_code);
    if !card.is_loaded() {
        tracing::warn!("Unknown QR code scanned: {}", qr_code);
    }
    Ok(card)
}

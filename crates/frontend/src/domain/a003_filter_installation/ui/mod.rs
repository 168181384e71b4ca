pub mod details;
pub mod list;

use contracts::domain::a003_filter_installation::aggregate::QR_ROUTE_PREFIX;

/// Адрес карточки установки по QR-коду (код кодируется как сегмент пути)
pub fn qr_card_url(qr_code: &str) -> String {
    format!("{}/{}", QR_ROUTE_PREFIX, urlencoding::encode(qr_code))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_qr_card_url_encodes_segment() {
        assert_eq!(qr_card_url("QR-0001"), "/installations/qr/QR-0001");
        assert_eq!(qr_card_url("A/B 1"), "/installations/qr/A%2FB%201");
    }
}

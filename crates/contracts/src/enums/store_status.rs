use serde::{Deserialize, Serialize};

/// Статус торговой точки
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StoreStatus {
    Active,
    Inactive,
}

impl StoreStatus {
    /// Код статуса в запросе и в JSON
    pub fn code(&self) -> &'static str {
        match self {
            StoreStatus::Active => "active",
            StoreStatus::Inactive => "inactive",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            StoreStatus::Active => "Активна",
            StoreStatus::Inactive => "Неактивна",
        }
    }

    pub fn all() -> Vec<StoreStatus> {
        vec![StoreStatus::Active, StoreStatus::Inactive]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "active" => Some(StoreStatus::Active),
            "inactive" => Some(StoreStatus::Inactive),
            _ => None,
        }
    }
}

impl std::fmt::Display for StoreStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

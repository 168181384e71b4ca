use serde::{Deserialize, Serialize};

/// Состояние установленного фильтра
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstallationStatus {
    Installed,
    ServiceDue,
    Replaced,
    Removed,
}

impl InstallationStatus {
    pub fn code(&self) -> &'static str {
        match self {
            InstallationStatus::Installed => "installed",
            InstallationStatus::ServiceDue => "service_due",
            InstallationStatus::Replaced => "replaced",
            InstallationStatus::Removed => "removed",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            InstallationStatus::Installed => "Установлен",
            InstallationStatus::ServiceDue => "Требует обслуживания",
            InstallationStatus::Replaced => "Заменён",
            InstallationStatus::Removed => "Демонтирован",
        }
    }

    pub fn all() -> Vec<InstallationStatus> {
        vec![
            InstallationStatus::Installed,
            InstallationStatus::ServiceDue,
            InstallationStatus::Replaced,
            InstallationStatus::Removed,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "installed" => Some(InstallationStatus::Installed),
            "service_due" => Some(InstallationStatus::ServiceDue),
            "replaced" => Some(InstallationStatus::Replaced),
            "removed" => Some(InstallationStatus::Removed),
            _ => None,
        }
    }
}

impl std::fmt::Display for InstallationStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

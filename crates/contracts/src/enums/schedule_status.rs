use serde::{Deserialize, Serialize};

/// Статус планового обслуживания
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ScheduleStatus {
    Planned,
    Done,
    Cancelled,
}

impl ScheduleStatus {
    pub fn code(&self) -> &'static str {
        match self {
            ScheduleStatus::Planned => "planned",
            ScheduleStatus::Done => "done",
            ScheduleStatus::Cancelled => "cancelled",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            ScheduleStatus::Planned => "Запланировано",
            ScheduleStatus::Done => "Выполнено",
            ScheduleStatus::Cancelled => "Отменено",
        }
    }

    pub fn all() -> Vec<ScheduleStatus> {
        vec![
            ScheduleStatus::Planned,
            ScheduleStatus::Done,
            ScheduleStatus::Cancelled,
        ]
    }

    pub fn from_code(code: &str) -> Option<Self> {
        match code {
            "planned" => Some(ScheduleStatus::Planned),
            "done" => Some(ScheduleStatus::Done),
            "cancelled" => Some(ScheduleStatus::Cancelled),
            _ => None,
        }
    }
}

impl std::fmt::Display for ScheduleStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.code())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::enums::{InstallationStatus, StoreStatus};

    #[test]
    fn test_codes_round_trip() {
        for s in ScheduleStatus::all() {
            assert_eq!(ScheduleStatus::from_code(s.code()), Some(s));
        }
        for s in InstallationStatus::all() {
            assert_eq!(InstallationStatus::from_code(s.code()), Some(s));
        }
        for s in StoreStatus::all() {
            assert_eq!(StoreStatus::from_code(s.code()), Some(s));
        }
    }

    #[test]
    fn test_all_is_not_a_status() {
        // «все» передаётся пустой строкой, а не литералом
        assert_eq!(StoreStatus::from_code("all"), None);
        assert_eq!(ScheduleStatus::from_code(""), None);
    }

    #[test]
    fn test_serde_uses_codes() {
        assert_eq!(
            serde_json::to_string(&InstallationStatus::ServiceDue).unwrap(),
            "\"service_due\""
        );
    }
}

//! Демонстрационные данные. Генерация детерминирована: одни и те же
//! записи при каждом запуске, даты отсчитываются от фиксированной базы.

use chrono::{Duration, NaiveDate};
use contracts::enums::{InstallationStatus, ScheduleStatus, StoreStatus};

use super::store::{CompanyRow, InstallationRow, ScheduleRow, Store, StoreRow};

const COMPANIES: &[(&str, &str, &str, Option<&str>)] = &[
    ("CMP-001", "PT Tirta Jaya", "Jakarta", Some("+62 21 555 0101")),
    ("CMP-002", "CV Air Bersih", "Bandung", Some("+62 22 555 0202")),
    ("CMP-003", "PT Sumber Segar", "Surabaya", None),
    ("CMP-004", "UD Mata Air", "Medan", Some("+62 61 555 0404")),
];

// (наименование, компания, адрес)
const STORES: &[(&str, i64, &str)] = &[
    ("Toko A", 1, "Jl. Sudirman 12, Jakarta"),
    ("Toko Abadi", 1, "Jl. Thamrin 7, Jakarta"),
    ("Toko Berkah", 1, "Jl. Gatot Subroto 45, Jakarta"),
    ("Toko Cahaya", 2, "Jl. Braga 3, Bandung"),
    ("Warung Segar", 2, "Jl. Dago 88, Bandung"),
    ("Toko Damai", 3, "Jl. Tunjungan 21, Surabaya"),
    ("Minimarket Sejahtera", 3, "Jl. Darmo 5, Surabaya"),
    ("Toko Elok", 3, "Jl. Pemuda 30, Surabaya"),
    ("Toko Fajar", 4, "Jl. Merdeka 2, Medan"),
    ("Kedai Harapan", 4, "Jl. Gajah Mada 19, Medan"),
];

const FILTER_MODELS: &[&str] = &["AquaPure 200", "ClearFlow RO-5", "PureLine UF-3"];

const TECHNICIANS: &[&str] = &["Budi Santoso", "Agus Wijaya", "Dewi Lestari", "Rina Hartono"];

const INSTALLATIONS_PER_STORE: i64 = 3;
const SERVICE_INTERVAL_DAYS: i64 = 180;

fn base_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 1, 8).unwrap_or_default()
}

fn installation_status(id: i64) -> InstallationStatus {
    if id % 11 == 0 {
        InstallationStatus::Removed
    } else if id % 7 == 0 {
        InstallationStatus::Replaced
    } else if id % 5 == 0 {
        InstallationStatus::ServiceDue
    } else {
        InstallationStatus::Installed
    }
}

pub fn demo_store() -> Store {
    let base = base_date();
    let mut store = Store::default();

    for (i, (code, name, city, phone)) in COMPANIES.iter().enumerate() {
        store.companies.push(CompanyRow {
            id: i as i64 + 1,
            code: code.to_string(),
            name: name.to_string(),
            city: city.to_string(),
            phone: phone.map(str::to_string),
        });
    }

    for (i, (name, company_id, address)) in STORES.iter().enumerate() {
        let id = i as i64 + 1;
        store.stores.push(StoreRow {
            id,
            code: format!("ST-{:03}", id),
            name: name.to_string(),
            company_id: *company_id,
            address: address.to_string(),
            // каждая четвёртая точка закрыта
            status: if id % 4 == 0 {
                StoreStatus::Inactive
            } else {
                StoreStatus::Active
            },
            created_at: base - Duration::days(30 * (STORES.len() as i64 - i as i64)),
        });
    }

    let mut schedule_id = 0;
    for store_row in &store.stores {
        for n in 0..INSTALLATIONS_PER_STORE {
            let id = (store_row.id - 1) * INSTALLATIONS_PER_STORE + n + 1;
            let installed_at = base + Duration::days(id * 11);
            let next_service_on = installed_at + Duration::days(SERVICE_INTERVAL_DAYS);
            store.installations.push(InstallationRow {
                id,
                qr_code: format!("QR-{:04}", id),
                store_id: store_row.id,
                filter_model: FILTER_MODELS[(id as usize) % FILTER_MODELS.len()].to_string(),
                status: installation_status(id),
                installed_at,
                next_service_on,
            });

            // промежуточная проверка и плановая замена картриджа
            let visits = [
                (SERVICE_INTERVAL_DAYS / 2, false),
                (SERVICE_INTERVAL_DAYS, true),
            ];
            for (offset, planned) in visits {
                schedule_id += 1;
                let status = if schedule_id % 9 == 0 {
                    ScheduleStatus::Cancelled
                } else if planned {
                    ScheduleStatus::Planned
                } else {
                    ScheduleStatus::Done
                };
                store.schedules.push(ScheduleRow {
                    id: schedule_id,
                    installation_id: id,
                    technician: TECHNICIANS[(schedule_id as usize) % TECHNICIANS.len()]
                        .to_string(),
                    scheduled_for: installed_at + Duration::days(offset),
                    status,
                    notes: match status {
                        ScheduleStatus::Cancelled => {
                            Some("Точка закрыта в день визита".to_string())
                        }
                        ScheduleStatus::Planned => Some("Замена картриджа".to_string()),
                        ScheduleStatus::Done => None,
                    },
                });
            }
        }
    }

    store
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_demo_store_counts() {
        let store = demo_store();
        assert_eq!(store.companies.len(), COMPANIES.len());
        assert_eq!(store.stores.len(), STORES.len());
        assert_eq!(store.installations.len(), STORES.len() * 3);
        assert_eq!(store.schedules.len(), store.installations.len() * 2);
    }

    #[test]
    fn test_qr_codes_unique() {
        let store = demo_store();
        let codes: HashSet<_> = store.installations.iter().map(|i| &i.qr_code).collect();
        assert_eq!(codes.len(), store.installations.len());
    }

    #[test]
    fn test_references_resolve() {
        let store = demo_store();
        assert!(store.stores.iter().all(|s| store.company(s.company_id).is_some()));
        assert!(store.installations.iter().all(|i| store.store(i.store_id).is_some()));
        assert!(store
            .schedules
            .iter()
            .all(|s| store.installation(s.installation_id).is_some()));
    }

    #[test]
    fn test_demo_store_is_deterministic() {
        let a = demo_store();
        let b = demo_store();
        assert_eq!(a.installations, b.installations);
        assert_eq!(a.schedules, b.schedules);
    }
}

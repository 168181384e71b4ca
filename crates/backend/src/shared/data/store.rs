use chrono::NaiveDate;
use contracts::enums::{InstallationStatus, ScheduleStatus, StoreStatus};
use once_cell::sync::OnceCell;
use tokio::sync::RwLock;

use crate::shared::config::SeedConfig;

#[derive(Debug, Clone, PartialEq)]
pub struct CompanyRow {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub city: String,
    pub phone: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct StoreRow {
    pub id: i64,
    pub code: String,
    pub name: String,
    pub company_id: i64,
    pub address: String,
    pub status: StoreStatus,
    pub created_at: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct InstallationRow {
    pub id: i64,
    pub qr_code: String,
    pub store_id: i64,
    pub filter_model: String,
    pub status: InstallationStatus,
    pub installed_at: NaiveDate,
    pub next_service_on: NaiveDate,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ScheduleRow {
    pub id: i64,
    pub installation_id: i64,
    pub technician: String,
    pub scheduled_for: NaiveDate,
    pub status: ScheduleStatus,
    pub notes: Option<String>,
}

/// Данные сервиса в памяти процесса
#[derive(Debug, Clone, Default)]
pub struct Store {
    pub companies: Vec<CompanyRow>,
    pub stores: Vec<StoreRow>,
    pub installations: Vec<InstallationRow>,
    pub schedules: Vec<ScheduleRow>,
}

impl Store {
    pub fn company(&self, id: i64) -> Option<&CompanyRow> {
        self.companies.iter().find(|c| c.id == id)
    }

    pub fn store(&self, id: i64) -> Option<&StoreRow> {
        self.stores.iter().find(|s| s.id == id)
    }

    pub fn installation(&self, id: i64) -> Option<&InstallationRow> {
        self.installations.iter().find(|i| i.id == id)
    }

    pub fn company_name(&self, id: i64) -> String {
        self.company(id).map(|c| c.name.clone()).unwrap_or_default()
    }

    pub fn store_name(&self, id: i64) -> String {
        self.store(id).map(|s| s.name.clone()).unwrap_or_default()
    }

    /// Удалить точку вместе с её установками и их графиком.
    /// `None` - точки с таким id нет.
    pub fn remove_store(&mut self, id: i64) -> Option<RemovedStore> {
        let index = self.stores.iter().position(|s| s.id == id)?;
        self.stores.remove(index);

        let removed_installations: Vec<i64> = self
            .installations
            .iter()
            .filter(|i| i.store_id == id)
            .map(|i| i.id)
            .collect();
        self.installations.retain(|i| i.store_id != id);

        let schedules_before = self.schedules.len();
        self.schedules
            .retain(|s| !removed_installations.contains(&s.installation_id));

        Some(RemovedStore {
            installations: removed_installations.len(),
            schedules: schedules_before - self.schedules.len(),
        })
    }
}

/// Сколько зависимых записей ушло вместе с точкой
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RemovedStore {
    pub installations: usize,
    pub schedules: usize,
}

static STORE: OnceCell<RwLock<Store>> = OnceCell::new();

pub fn initialize_store(seed: &SeedConfig) -> anyhow::Result<()> {
    let store = if seed.demo_data {
        super::seed::demo_store()
    } else {
        Store::default()
    };
    tracing::info!(
        "Store initialized: {} companies, {} stores, {} installations, {} schedules",
        store.companies.len(),
        store.stores.len(),
        store.installations.len(),
        store.schedules.len()
    );
    STORE
        .set(RwLock::new(store))
        .map_err(|_| anyhow::anyhow!("Store already initialized"))?;
    Ok(())
}

pub fn get_store() -> anyhow::Result<&'static RwLock<Store>> {
    STORE
        .get()
        .ok_or_else(|| anyhow::anyhow!("Store has not been initialized"))
}

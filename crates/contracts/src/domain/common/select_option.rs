use serde::{Deserialize, Serialize};

/// Элемент выпадающего списка (id + наименование)
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SelectOption {
    pub id: i64,
    pub name: String,
}

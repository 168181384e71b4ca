//! Общие типы фронтенда и бэкенда: фильтры списков, пагинация, DTO.

pub mod domain;
pub mod enums;
pub mod shared;

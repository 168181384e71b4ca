use serde::{Deserialize, Serialize};

/// Результат загрузки записи для страницы.
///
/// Решение «загружено или заглушка» принимает сервер; представление только
/// отображает вариант и никогда не подставляет запись по умолчанию само.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "state", content = "record", rename_all = "snake_case")]
pub enum Loadable<T> {
    Loaded(T),
    /// Запись не найдена; содержит явную заглушку для отображения
    Unloaded(T),
}

impl<T> Loadable<T> {
    pub fn is_loaded(&self) -> bool {
        matches!(self, Loadable::Loaded(_))
    }

    pub fn record(&self) -> &T {
        match self {
            Loadable::Loaded(r) | Loadable::Unloaded(r) => r,
        }
    }

    pub fn into_record(self) -> T {
        match self {
            Loadable::Loaded(r) | Loadable::Unloaded(r) => r,
        }
    }

    pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Loadable<U> {
        match self {
            Loadable::Loaded(r) => Loadable::Loaded(f(r)),
            Loadable::Unloaded(r) => Loadable::Unloaded(f(r)),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_wire_format() {
        let loaded = Loadable::Loaded(7);
        assert_eq!(
            serde_json::to_string(&loaded).unwrap(),
            r#"{"state":"loaded","record":7}"#
        );
        let unloaded: Loadable<i32> =
            serde_json::from_str(r#"{"state":"unloaded","record":0}"#).unwrap();
        assert!(!unloaded.is_loaded());
        assert_eq!(*unloaded.record(), 0);
    }

    #[test]
    fn test_map_keeps_variant() {
        let v = Loadable::Unloaded(2).map(|x| x * 10);
        assert_eq!(v, Loadable::Unloaded(20));
        assert_eq!(v.into_record(), 20);
    }
}

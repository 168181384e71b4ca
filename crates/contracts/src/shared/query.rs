//! Сериализация параметров фильтра в строку запроса и обратно.
//!
//! Формат `application/x-www-form-urlencoded` (`serde_urlencoded`): пробел
//! кодируется как `+`, порядок пар сохраняется.

use std::fmt;

/// Непустое подмножество полей фильтра, отправляемое на сервер
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash)]
pub struct QueryRequest {
    pairs: Vec<(String, String)>,
}

impl QueryRequest {
    pub fn new() -> Self {
        Self::default()
    }

    /// Добавить пару; пустые значения отбрасываются
    pub fn with(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.push(key, value);
        self
    }

    pub fn push(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let value = value.into();
        if value.is_empty() {
            return;
        }
        self.pairs.push((key.into(), value));
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.pairs
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.pairs.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }

    pub fn len(&self) -> usize {
        self.pairs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pairs.is_empty()
    }

    /// Строка запроса без ведущего `?`
    pub fn to_query_string(&self) -> String {
        // пары строк сериализуются всегда
        serde_urlencoded::to_string(&self.pairs).unwrap_or_default()
    }

    /// URL маршрута с параметрами; без `?`, если параметров нет
    pub fn url_for(&self, route: &str) -> String {
        if self.pairs.is_empty() {
            route.to_string()
        } else {
            format!("{}?{}", route, self.to_query_string())
        }
    }

    /// Разбор строки запроса (ведущий `?` допускается).
    /// Пары с пустым значением пропускаются.
    pub fn parse(input: &str) -> Self {
        let pairs: Vec<(String, String)> =
            serde_urlencoded::from_str(input.trim_start_matches('?')).unwrap_or_default();
        pairs.into_iter().filter(|(k, _)| !k.is_empty()).collect()
    }
}

impl fmt::Display for QueryRequest {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_query_string())
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for QueryRequest {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut query = Self::new();
        for (k, v) in iter {
            query.push(k, v);
        }
        query
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_space_encoded_as_plus() {
        let q = QueryRequest::new().with("search", "toko a");
        assert_eq!(q.to_query_string(), "search=toko+a");
    }

    #[test]
    fn test_reserved_characters_escaped() {
        let q = QueryRequest::new().with("search", "a+b&c=d");
        assert_eq!(q.to_query_string(), "search=a%2Bb%26c%3Dd");
        assert_eq!(QueryRequest::parse(&q.to_query_string()), q);
    }

    #[test]
    fn test_empty_values_never_serialized() {
        let q = QueryRequest::new().with("search", "").with("status", "active");
        assert_eq!(q.len(), 1);
        assert_eq!(q.to_query_string(), "status=active");
    }

    #[test]
    fn test_parse_drops_empty_values() {
        let q = QueryRequest::parse("?search=&status=active&store_id=3&&=x");
        assert_eq!(q.get("search"), None);
        assert_eq!(q.get("status"), Some("active"));
        assert_eq!(q.get("store_id"), Some("3"));
        assert_eq!(q.len(), 2);
        assert!(!q.to_query_string().contains("search"));
    }

    #[test]
    fn test_parse_decodes_plus_and_percent() {
        let q = QueryRequest::parse("search=toko+a&city=Jakarta%20Barat");
        assert_eq!(q.get("search"), Some("toko a"));
        assert_eq!(q.get("city"), Some("Jakarta Barat"));
    }

    #[test]
    fn test_parse_incomplete_escape_kept_literal() {
        let q = QueryRequest::parse("search=100%");
        assert_eq!(q.get("search"), Some("100%"));
    }

    #[test]
    fn test_parse_keeps_order() {
        let q = QueryRequest::parse("status=done&search=a&page=2");
        let keys: Vec<_> = q.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, vec!["status", "search", "page"]);
    }

    #[test]
    fn test_url_for() {
        assert_eq!(QueryRequest::new().url_for("/stores"), "/stores");
        let q = QueryRequest::new().with("status", "active").with("page", "2");
        assert_eq!(q.url_for("/stores"), "/stores?status=active&page=2");
    }
}

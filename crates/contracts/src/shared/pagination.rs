use serde::{Deserialize, Serialize};

use super::query::QueryRequest;

/// Ссылка навигации по страницам
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationLink {
    /// `None` для неактивных «назад»/«вперёд»
    pub url: Option<String>,
    pub label: String,
    pub active: bool,
}

/// Страница записей с метаданными пагинации
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Paginated<T> {
    pub data: Vec<T>,
    /// Номер страницы, начиная с 1
    pub current_page: usize,
    pub last_page: usize,
    pub per_page: usize,
    pub total: usize,
    /// Позиция первой записи страницы (с 1), `None` для пустой страницы
    pub from: Option<usize>,
    pub to: Option<usize>,
    pub links: Vec<PaginationLink>,
}

pub const PREVIOUS_LABEL: &str = "« Назад";
pub const NEXT_LABEL: &str = "Вперёд »";

/// `(offset, limit)` для страницы с номером `page` (с 1)
pub fn page_window(page: usize, per_page: usize) -> (usize, usize) {
    (page.saturating_sub(1) * per_page, per_page)
}

impl<T> Paginated<T> {
    /// Собрать страницу. `data` - уже вырезанные записи текущей страницы,
    /// `query` - фильтры, с которыми сервер построил выборку.
    pub fn new(
        data: Vec<T>,
        total: usize,
        page: usize,
        per_page: usize,
        route: &str,
        query: &QueryRequest,
    ) -> Self {
        let per_page = per_page.max(1);
        let last_page = total.div_ceil(per_page).max(1);
        let current_page = page.clamp(1, last_page);
        let (offset, _) = page_window(current_page, per_page);
        let (from, to) = if data.is_empty() {
            (None, None)
        } else {
            (Some(offset + 1), Some(offset + data.len()))
        };

        let page_url = |n: usize| {
            let mut q = query.clone();
            if n > 1 {
                q.push("page", n.to_string());
            }
            q.url_for(route)
        };

        let mut links = Vec::with_capacity(last_page + 2);
        links.push(PaginationLink {
            url: (current_page > 1).then(|| page_url(current_page - 1)),
            label: PREVIOUS_LABEL.to_string(),
            active: false,
        });
        for n in 1..=last_page {
            links.push(PaginationLink {
                url: Some(page_url(n)),
                label: n.to_string(),
                active: n == current_page,
            });
        }
        links.push(PaginationLink {
            url: (current_page < last_page).then(|| page_url(current_page + 1)),
            label: NEXT_LABEL.to_string(),
            active: false,
        });

        Self {
            data,
            current_page,
            last_page,
            per_page,
            total,
            from,
            to,
            links,
        }
    }

    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    pub fn map<U, F: FnMut(T) -> U>(self, f: F) -> Paginated<U> {
        Paginated {
            data: self.data.into_iter().map(f).collect(),
            current_page: self.current_page,
            last_page: self.last_page,
            per_page: self.per_page,
            total: self.total,
            from: self.from,
            to: self.to,
            links: self.links,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_window() {
        assert_eq!(page_window(1, 15), (0, 15));
        assert_eq!(page_window(3, 15), (30, 15));
        assert_eq!(page_window(0, 15), (0, 15));
    }

    #[test]
    fn test_metadata_and_links() {
        let query = QueryRequest::new().with("status", "active");
        let page = Paginated::new(vec![11, 12, 13, 14, 15], 23, 3, 5, "/stores", &query);
        assert_eq!(page.last_page, 5);
        assert_eq!(page.from, Some(11));
        assert_eq!(page.to, Some(15));
        // prev + 5 страниц + next
        assert_eq!(page.links.len(), 7);
        assert_eq!(
            page.links[0].url.as_deref(),
            Some("/stores?status=active&page=2")
        );
        assert_eq!(page.links[1].url.as_deref(), Some("/stores?status=active"));
        assert!(page.links[3].active);
        assert_eq!(page.links[3].label, "3");
        assert_eq!(
            page.links[6].url.as_deref(),
            Some("/stores?status=active&page=4")
        );
    }

    #[test]
    fn test_empty_result() {
        let page: Paginated<u32> =
            Paginated::new(vec![], 0, 1, 15, "/stores", &QueryRequest::new());
        assert_eq!(page.last_page, 1);
        assert_eq!(page.from, None);
        assert_eq!(page.to, None);
        assert_eq!(page.links[0].url, None);
        assert_eq!(page.links.last().unwrap().url, None);
        assert!(page.links[1].active);
    }

    #[test]
    fn test_page_clamped_to_range() {
        let page = Paginated::new(vec![1], 1, 9, 10, "/stores", &QueryRequest::new());
        assert_eq!(page.current_page, 1);
    }
}

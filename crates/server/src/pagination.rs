//! Paginated response envelope with absolute neighbour links.

use serde::Serialize;
use url::Url;

use service::pagination::Page;

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub count: u64,
    pub next: Option<String>,
    pub previous: Option<String>,
    pub results: Vec<T>,
}

/// Absolute URL of the current request, from its `Host` and original URI.
pub fn request_url(host: Option<&str>, path_and_query: &str) -> Option<Url> {
    let host = host.filter(|h| !h.is_empty()).unwrap_or("localhost");
    Url::parse(&format!("http://{host}{path_and_query}")).ok()
}

/// `base` with its `page` parameter replaced; other parameters keep their
/// order. Page 1 drops the parameter entirely.
pub fn page_link(base: &Url, page: u64) -> String {
    let mut url = base.clone();
    let mut pairs: Vec<(String, String)> = base
        .query_pairs()
        .filter(|(k, _)| k != "page")
        .map(|(k, v)| (k.into_owned(), v.into_owned()))
        .collect();
    if page > 1 {
        pairs.push(("page".to_string(), page.to_string()));
    }
    if pairs.is_empty() {
        url.set_query(None);
    } else {
        url.query_pairs_mut().clear().extend_pairs(pairs);
    }
    url.to_string()
}

impl<T> Paginated<T> {
    pub fn from_page(page: Page<T>, base: Option<&Url>) -> Self {
        let next = base.zip(page.next_page()).map(|(u, p)| page_link(u, p));
        let previous = base.zip(page.previous_page()).map(|(u, p)| page_link(u, p));
        Paginated { count: page.count, next, previous, results: page.results }
    }
}

//! Filtering, sorting and pagination over an in-memory article list.
//!
//! The public blog index and the admin article list both run this pipeline on
//! the full fetched collection; callers are expected to hand in only published
//! articles in public contexts.

use std::collections::HashMap;
use std::str::FromStr;

use emergences_shared::Article;
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Sort order for article lists.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum SortKey {
    /// Most recently published first (default).
    #[default]
    Newest,
    /// Oldest publication first.
    Oldest,
    /// Title ascending.
    #[serde(rename = "a-z")]
    TitleAsc,
    /// Title descending.
    #[serde(rename = "z-a")]
    TitleDesc,
}

/// Error returned when parsing an unknown sort key.
#[derive(Debug, Error, PartialEq, Eq)]
#[error("unknown sort key: {0:?}")]
pub struct ParseSortKeyError(String);

impl FromStr for SortKey {
    type Err = ParseSortKeyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "newest" => Ok(Self::Newest),
            "oldest" => Ok(Self::Oldest),
            "a-z" => Ok(Self::TitleAsc),
            "z-a" => Ok(Self::TitleDesc),
            other => Err(ParseSortKeyError(other.to_string())),
        }
    }
}

/// A category name with its article count.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryCount {
    /// Category name as stored on the articles.
    pub name: String,
    /// Number of articles carrying the category.
    pub count: usize,
}

/// One display-ready page of results plus derived metadata.
#[derive(Debug, Clone, Serialize)]
pub struct QueryOutput {
    /// Articles for the requested page, already filtered and sorted.
    pub page_items: Vec<Article>,
    /// Total page count for the filtered set, at least 1.
    pub total_pages: usize,
    /// Category index over the search-filtered set, sorted by name.
    pub category_index: Vec<CategoryCount>,
}

/// Keep articles whose title, content or excerpt contains `query`,
/// case-insensitively. An empty or whitespace-only query is a no-op.
#[must_use]
pub fn filter_by_search(articles: &[Article], query: &str) -> Vec<Article> {
    let needle = query.trim().to_lowercase();
    if needle.is_empty() {
        return articles.to_vec();
    }
    articles
        .iter()
        .filter(|article| {
            article.title.to_lowercase().contains(&needle)
                || article.content.to_lowercase().contains(&needle)
                || article.excerpt.to_lowercase().contains(&needle)
        })
        .cloned()
        .collect()
}

/// Keep articles whose category list contains `category` exactly. An empty
/// category is a no-op.
#[must_use]
pub fn filter_by_category(articles: &[Article], category: &str) -> Vec<Article> {
    if category.is_empty() {
        return articles.to_vec();
    }
    articles
        .iter()
        .filter(|article| article.categories.iter().any(|c| c == category))
        .cloned()
        .collect()
}

/// Stable sort by the given key. Date keys compare `published_at` (falling
/// back to `created_at`) as millisecond epochs; title keys compare
/// case-insensitively. Ties keep input order.
#[must_use]
pub fn sort_articles(articles: &[Article], key: SortKey) -> Vec<Article> {
    let mut sorted = articles.to_vec();
    match key {
        SortKey::Newest => sorted.sort_by_key(|a| std::cmp::Reverse(a.sort_timestamp())),
        SortKey::Oldest => sorted.sort_by_key(Article::sort_timestamp),
        SortKey::TitleAsc => {
            sorted.sort_by(|a, b| a.title.to_lowercase().cmp(&b.title.to_lowercase()));
        }
        SortKey::TitleDesc => {
            sorted.sort_by(|a, b| b.title.to_lowercase().cmp(&a.title.to_lowercase()));
        }
    }
    sorted
}

/// 1-indexed page slice. Does not clamp: an out-of-range page (or a zero page
/// number or page size) yields an empty slice, which callers render as "no
/// results".
#[must_use]
pub fn paginate(articles: &[Article], page_size: usize, page_number: usize) -> Vec<Article> {
    if page_number == 0 || page_size == 0 {
        return Vec::new();
    }
    let start = (page_number - 1).saturating_mul(page_size);
    if start >= articles.len() {
        return Vec::new();
    }
    let end = (start + page_size).min(articles.len());
    articles[start..end].to_vec()
}

/// Per-category article counts over the input set, sorted by name. Categories
/// with no articles never appear.
#[must_use]
pub fn build_category_index(articles: &[Article]) -> Vec<CategoryCount> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for article in articles {
        for category in &article.categories {
            *counts.entry(category.clone()).or_insert(0) += 1;
        }
    }

    let mut index: Vec<CategoryCount> = counts
        .into_iter()
        .map(|(name, count)| CategoryCount { name, count })
        .collect();
    index.sort_by(|a, b| a.name.cmp(&b.name));
    index
}

/// Full pipeline: search filter, category filter, sort, paginate.
///
/// The category index is built from the search-filtered set (before the
/// category filter) so its counts reflect the current search. Callers reset
/// `page` to 1 whenever the filters change.
#[must_use]
pub fn filter_and_sort(
    articles: &[Article],
    search: &str,
    category: &str,
    sort_key: SortKey,
    page: usize,
    page_size: usize,
) -> QueryOutput {
    let searched = filter_by_search(articles, search);
    let category_index = build_category_index(&searched);
    let filtered = filter_by_category(&searched, category);
    let sorted = sort_articles(&filtered, sort_key);

    let total_pages = if page_size == 0 {
        1
    } else {
        sorted.len().div_ceil(page_size).max(1)
    };
    let page_items = paginate(&sorted, page_size, page);

    QueryOutput {
        page_items,
        total_pages,
        category_index,
    }
}

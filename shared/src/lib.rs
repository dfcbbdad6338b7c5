//! Shared data model for the Émergences blog.
//!
//! These types mirror the shape of the hosted `articles` table. They are plain
//! value objects: every transform in `emergences-core` consumes them read-only
//! and returns new collections.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

pub mod slug;
pub mod text;

/// A tag attached to an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tag {
    /// Opaque identifier.
    pub id: String,
    /// Display name.
    pub name: String,
    /// URL-safe identifier.
    pub slug: String,
}

/// A category reference (name plus URL-safe slug).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Category {
    /// Display name, as stored in `Article::categories`.
    pub name: String,
    /// URL-safe identifier.
    pub slug: String,
}

/// A blog post record, published or draft.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Article {
    /// Opaque unique identifier.
    pub id: String,
    /// Display title.
    pub title: String,
    /// Short plain-text or lightly formatted summary.
    #[serde(default)]
    pub excerpt: String,
    /// Rendered HTML body.
    #[serde(default)]
    pub content: String,
    /// URL-safe unique identifier derived from the title.
    pub slug: String,
    /// Ordered category names. May be empty; duplicates are not rejected here.
    #[serde(default)]
    pub categories: Vec<String>,
    /// Attached tags.
    #[serde(default)]
    pub tags: Vec<Tag>,
    /// SEO keywords.
    #[serde(default)]
    pub keywords: Vec<String>,
    /// Cover image URL.
    #[serde(default)]
    pub image_url: Option<String>,
    /// Hand-written meta description; falls back to the excerpt when absent.
    #[serde(default)]
    pub seo_description: Option<String>,
    /// Author display name.
    #[serde(default)]
    pub author: Option<String>,
    /// Only published articles are visible in public contexts.
    pub published: bool,
    /// Publication timestamp, set when `published` first becomes true.
    #[serde(default)]
    pub published_at: Option<DateTime<Utc>>,
    /// Record creation timestamp.
    pub created_at: DateTime<Utc>,
    /// Last modification timestamp.
    #[serde(default)]
    pub updated_at: Option<DateTime<Utc>>,
    /// Stored reading time in minutes; derived from the content when absent.
    #[serde(default)]
    pub read_time: Option<u32>,
}

/// Words per minute used to derive a reading time from the content.
pub const READING_WORDS_PER_MINUTE: u32 = 200;

impl Article {
    /// Site-relative URL of this article.
    #[must_use]
    pub fn url(&self) -> String {
        format!("/article/{}", self.slug)
    }

    /// Millisecond epoch used for date ordering: `published_at` when present,
    /// otherwise `created_at`.
    #[must_use]
    pub fn sort_timestamp(&self) -> i64 {
        self.published_at
            .unwrap_or(self.created_at)
            .timestamp_millis()
    }

    /// Most recent of `updated_at`, `published_at` and `created_at`, in that
    /// priority order (sitemap `lastmod` semantics).
    #[must_use]
    pub fn last_modified(&self) -> DateTime<Utc> {
        self.updated_at
            .or(self.published_at)
            .unwrap_or(self.created_at)
    }

    /// Reading time in minutes. Uses the stored value when present, otherwise
    /// estimates from the tag-stripped word count at
    /// [`READING_WORDS_PER_MINUTE`]. Never less than 1.
    #[must_use]
    pub fn read_time_minutes(&self) -> u32 {
        if let Some(stored) = self.read_time {
            return stored.max(1);
        }
        let words = text::word_count(&text::strip_html(&self.content)) as u32;
        words.div_ceil(READING_WORDS_PER_MINUTE).max(1)
    }
}

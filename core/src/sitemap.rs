//! Sitemap XML assembly and validation.
//!
//! Serialization follows the sitemaps.org protocol: entries sorted by
//! descending priority, XML-escaped locations, and the Google limits (50 000
//! URLs, 50 MB) checked post-hoc rather than enforced by construction.

use chrono::NaiveDate;
use emergences_shared::{Article, Category};
use serde::{Deserialize, Serialize};
use tracing::warn;

/// Maximum `<url>` entries per sitemap document.
pub const MAX_SITEMAP_URLS: usize = 50_000;

/// Maximum serialized size in bytes (50 MB).
pub const MAX_SITEMAP_BYTES: usize = 52_428_800;

/// Expected change frequency of a sitemap entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeFreq {
    /// Changes on every access.
    Always,
    /// Hourly changes.
    Hourly,
    /// Daily changes.
    Daily,
    /// Weekly changes.
    Weekly,
    /// Monthly changes.
    Monthly,
    /// Yearly changes.
    Yearly,
    /// Archived, never changes.
    Never,
}

impl ChangeFreq {
    /// Protocol string for the `<changefreq>` element.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Always => "always",
            Self::Hourly => "hourly",
            Self::Daily => "daily",
            Self::Weekly => "weekly",
            Self::Monthly => "monthly",
            Self::Yearly => "yearly",
            Self::Never => "never",
        }
    }
}

/// One sitemap entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SitemapUrl {
    /// Absolute URL.
    pub loc: String,
    /// Last modification date.
    pub lastmod: NaiveDate,
    /// Expected change frequency.
    pub changefreq: ChangeFreq,
    /// Crawl priority in `0.0..=1.0`.
    pub priority: f32,
}

/// Post-hoc validation result; never a hard error so the caller can decide
/// whether to serve a fallback document.
#[derive(Debug, Clone, Serialize)]
pub struct SitemapValidation {
    /// True when no check failed.
    pub valid: bool,
    /// Human-readable failures, empty when valid.
    pub errors: Vec<String>,
}

fn xml_escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
        .replace('\'', "&apos;")
}

/// Serialize entries into a sitemap document, sorted by descending priority.
#[must_use]
pub fn build_sitemap_xml(urls: &[SitemapUrl]) -> String {
    let mut sorted: Vec<&SitemapUrl> = urls.iter().collect();
    sorted.sort_by(|a, b| b.priority.total_cmp(&a.priority));

    let mut xml = String::from(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <urlset xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n",
    );
    for url in sorted {
        xml.push_str(&format!(
            "  <url>\n    <loc>{}</loc>\n    <lastmod>{}</lastmod>\n    \
             <changefreq>{}</changefreq>\n    <priority>{:.1}</priority>\n  </url>\n",
            xml_escape(&url.loc),
            url.lastmod.format("%Y-%m-%d"),
            url.changefreq.as_str(),
            url.priority,
        ));
    }
    xml.push_str("</urlset>\n");
    xml
}

/// Check a serialized sitemap against the protocol basics and the Google
/// limits.
#[must_use]
pub fn validate_sitemap_xml(xml: &str) -> SitemapValidation {
    let mut errors = Vec::new();

    if !xml.contains("<?xml") {
        errors.push("missing XML declaration".to_string());
    }
    if !xml.contains("<urlset") {
        errors.push("missing urlset root element".to_string());
    }
    let url_count = xml.matches("<url>").count();
    if url_count > MAX_SITEMAP_URLS {
        errors.push(format!("too many URLs: {url_count} (max {MAX_SITEMAP_URLS})"));
    }
    if xml.len() > MAX_SITEMAP_BYTES {
        errors.push(format!(
            "sitemap too large: {} bytes (max {MAX_SITEMAP_BYTES})",
            xml.len()
        ));
    }

    if !errors.is_empty() {
        warn!(errors = ?errors, "sitemap validation failed");
    }
    SitemapValidation {
        valid: errors.is_empty(),
        errors,
    }
}

/// Assemble the full site URL list: homepage, published articles, category
/// pages and the static pages, sorted by descending priority.
///
/// `today` stamps entries that have no modification date of their own.
#[must_use]
pub fn site_urls(
    base_url: &str,
    today: NaiveDate,
    articles: &[Article],
    categories: &[Category],
) -> Vec<SitemapUrl> {
    let base = base_url.trim_end_matches('/');
    let mut urls = vec![SitemapUrl {
        loc: base.to_string(),
        lastmod: today,
        changefreq: ChangeFreq::Daily,
        priority: 1.0,
    }];

    for article in articles.iter().filter(|a| a.published) {
        urls.push(SitemapUrl {
            loc: format!("{base}/article/{}", urlencoding::encode(&article.slug)),
            lastmod: article.last_modified().date_naive(),
            changefreq: ChangeFreq::Weekly,
            priority: 0.8,
        });
    }

    for category in categories {
        urls.push(SitemapUrl {
            loc: format!("{base}/category/{}", urlencoding::encode(&category.name)),
            lastmod: today,
            changefreq: ChangeFreq::Weekly,
            priority: 0.6,
        });
    }

    for path in ["/about", "/faq"] {
        urls.push(SitemapUrl {
            loc: format!("{base}{path}"),
            lastmod: today,
            changefreq: ChangeFreq::Monthly,
            priority: 0.5,
        });
    }

    urls.sort_by(|a, b| b.priority.total_cmp(&a.priority));
    urls
}

/// Single-entry sitemap index pointing at `/sitemap.xml`.
#[must_use]
pub fn build_sitemap_index_xml(base_url: &str, today: NaiveDate) -> String {
    let base = base_url.trim_end_matches('/');
    format!(
        "<?xml version=\"1.0\" encoding=\"UTF-8\"?>\n\
         <sitemapindex xmlns=\"http://www.sitemaps.org/schemas/sitemap/0.9\">\n  \
         <sitemap>\n    <loc>{}/sitemap.xml</loc>\n    <lastmod>{}</lastmod>\n  \
         </sitemap>\n</sitemapindex>\n",
        xml_escape(base),
        today.format("%Y-%m-%d"),
    )
}

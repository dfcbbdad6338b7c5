//! SEO artifacts: meta descriptions, JSON-LD structured data, robots.txt.

use emergences_shared::Article;
use serde_json::{json, Value};

pub use emergences_shared::text::{strip_html, truncate_text};

/// Character budget for meta descriptions.
pub const META_DESCRIPTION_CHARS: usize = 160;

/// Best-effort description for an article: the hand-written
/// `seo_description`, else the excerpt, else the content — stripped to plain
/// text and truncated to [`META_DESCRIPTION_CHARS`].
#[must_use]
pub fn extract_description(article: &Article) -> String {
    if let Some(desc) = article.seo_description.as_deref() {
        let text = strip_html(desc);
        if !text.is_empty() {
            return truncate_text(&text, META_DESCRIPTION_CHARS);
        }
    }
    if !article.excerpt.is_empty() {
        return truncate_text(&strip_html(&article.excerpt), META_DESCRIPTION_CHARS);
    }
    truncate_text(&strip_html(&article.content), META_DESCRIPTION_CHARS)
}

/// Canonical absolute URL for an article.
#[must_use]
pub fn canonical_url(article: &Article, base_url: &str) -> String {
    format!(
        "{}/article/{}",
        base_url.trim_end_matches('/'),
        urlencoding::encode(&article.slug)
    )
}

/// schema.org `BlogPosting` JSON-LD for an article. Serialization handles all
/// escaping; no hand-built JSON strings.
#[must_use]
pub fn article_json_ld(article: &Article, base_url: &str) -> Value {
    let canonical = canonical_url(article, base_url);
    let mut ld = json!({
        "@context": "https://schema.org",
        "@type": "BlogPosting",
        "headline": article.title,
        "description": extract_description(article),
        "url": canonical,
        "mainEntityOfPage": { "@type": "WebPage", "@id": canonical },
        "datePublished": article.published_at.unwrap_or(article.created_at).to_rfc3339(),
        "dateModified": article.last_modified().to_rfc3339(),
        "timeRequired": format!("PT{}M", article.read_time_minutes()),
    });

    if let Some(obj) = ld.as_object_mut() {
        if let Some(author) = &article.author {
            obj.insert(
                "author".to_string(),
                json!({ "@type": "Person", "name": author }),
            );
        }
        if let Some(image) = &article.image_url {
            obj.insert("image".to_string(), json!(image));
        }
        if !article.keywords.is_empty() {
            obj.insert("keywords".to_string(), json!(article.keywords.join(", ")));
        }
    }
    ld
}

/// Wrap a JSON-LD value in its script tag for head injection.
#[must_use]
pub fn json_ld_script(ld: &Value) -> String {
    format!("<script type=\"application/ld+json\">\n{ld}\n</script>")
}

/// robots.txt body with the sitemap pointer.
#[must_use]
pub fn robots_txt(base_url: &str) -> String {
    let base = base_url.trim_end_matches('/');
    format!("User-agent: *\nAllow: /\n\nSitemap: {base}/sitemap.xml\n")
}

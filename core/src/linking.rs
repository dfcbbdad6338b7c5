//! Automatic internal-link injection for rendered article HTML.
//!
//! Given a ranked set of keyword-to-URL rules, the engine inserts anchor tags
//! at the first unlinked occurrence of each keyword, capped per rule and per
//! article. The rewrite is substring surgery over the HTML string, guarded so
//! that text inside tag bodies (attribute values) or inside an existing
//! anchor is never touched.

use std::collections::HashSet;

use emergences_shared::Article;
use once_cell::sync::Lazy;
use regex::{Regex, RegexBuilder};
use serde::{Deserialize, Serialize};
use tracing::debug;

/// A keyword-to-URL mapping used to auto-insert one hyperlink.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkingRule {
    /// Match strings, tried in order. Case-insensitive, whole-word.
    pub keywords: Vec<String>,
    /// Explicit destination. Takes precedence over `target_article`.
    pub target_url: Option<String>,
    /// Destination derived from the article collection (`/article/{slug}`).
    pub target_article: Option<String>,
    /// Anchor text; defaults to the matched article title or first keyword.
    pub link_text: Option<String>,
    /// Higher priority rules are applied first.
    pub priority: i32,
    /// How many links this rule may insert into one document.
    pub max_occurrences: usize,
}

impl Default for LinkingRule {
    fn default() -> Self {
        Self {
            keywords: Vec::new(),
            target_url: None,
            target_article: None,
            link_text: None,
            priority: 0,
            max_occurrences: 1,
        }
    }
}

impl LinkingRule {
    /// Resolved destination: `target_url` first, then `target_article`.
    #[must_use]
    pub fn target(&self) -> Option<&str> {
        self.target_url.as_deref().or(self.target_article.as_deref())
    }
}

/// Caps and exclusions for one processing pass.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LinkingConfig {
    /// Total insertions allowed across all rules in one document.
    pub max_links_per_article: usize,
    /// Minimum spacing to an existing anchor, approximated as
    /// `min_words_between_links * 5` characters.
    pub min_words_between_links: usize,
    /// Leave the leading paragraph untouched.
    pub exclude_first_paragraph: bool,
    /// Collect existing anchor hrefs and never duplicate their targets.
    pub respect_existing_links: bool,
}

impl Default for LinkingConfig {
    fn default() -> Self {
        Self {
            max_links_per_article: 5,
            min_words_between_links: 50,
            exclude_first_paragraph: true,
            respect_existing_links: true,
        }
    }
}

/// A read-only linking candidate, for editorial preview.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct LinkSuggestion {
    /// The keyword that matched.
    pub keyword: String,
    /// Destination URL.
    pub target_url: String,
    /// Anchor text that would be inserted.
    pub link_text: String,
}

/// Maximum number of entries returned by [`InternalLinkingEngine::suggested_links`].
pub const MAX_SUGGESTIONS: usize = 10;

struct DefaultRule {
    keywords: &'static [&'static str],
    target_url: Option<&'static str>,
    link_text: &'static str,
    priority: i32,
}

// Predefined linking rules for the hypnotherapy blog. Rules without a target
// URL resolve one from the article collection at engine construction.
const DEFAULT_RULES: &[DefaultRule] = &[
    DefaultRule {
        keywords: &["hypnose ericksonienne", "hypnose ericksonnienne", "Milton Erickson"],
        target_url: Some("/about"),
        link_text: "hypnose ericksonienne",
        priority: 10,
    },
    DefaultRule {
        keywords: &["gestion du stress", "gérer le stress", "stress", "anxiété"],
        target_url: None,
        link_text: "gestion du stress par l'hypnose",
        priority: 9,
    },
    DefaultRule {
        keywords: &["peur de parler en public", "glossophobie", "trac"],
        target_url: Some("https://peur-de-parler-en-public.novahypnose.fr"),
        link_text: "surmonter la peur de parler en public",
        priority: 9,
    },
    DefaultRule {
        keywords: &["confiance en soi", "estime de soi", "manque de confiance"],
        target_url: None,
        link_text: "développer sa confiance en soi",
        priority: 8,
    },
    DefaultRule {
        keywords: &["troubles du sommeil", "insomnie", "mal dormir"],
        target_url: None,
        link_text: "améliorer son sommeil avec l'hypnose",
        priority: 8,
    },
    DefaultRule {
        keywords: &["séance d'hypnose", "consultation", "thérapie"],
        target_url: Some("/faq"),
        link_text: "déroulement d'une séance d'hypnose",
        priority: 7,
    },
    DefaultRule {
        keywords: &["auto-hypnose", "autohypnose"],
        target_url: None,
        link_text: "techniques d'auto-hypnose",
        priority: 7,
    },
    DefaultRule {
        keywords: &["hypnothérapeute Paris", "thérapeute Paris"],
        target_url: Some("https://novahypnose.fr"),
        link_text: "hypnothérapeute à Paris",
        priority: 6,
    },
    DefaultRule {
        keywords: &["transformation", "changement", "évolution personnelle"],
        target_url: None,
        link_text: "transformation personnelle par l'hypnose",
        priority: 6,
    },
    DefaultRule {
        keywords: &["bien-être", "bien être", "développement personnel"],
        target_url: None,
        link_text: "bien-être et hypnothérapie",
        priority: 5,
    },
];

/// The built-in rule set for the blog, highest priority first after
/// enrichment.
#[must_use]
pub fn default_rules() -> Vec<LinkingRule> {
    DEFAULT_RULES
        .iter()
        .map(|rule| LinkingRule {
            keywords: rule.keywords.iter().map(|k| (*k).to_string()).collect(),
            target_url: rule.target_url.map(str::to_string),
            link_text: Some(rule.link_text.to_string()),
            priority: rule.priority,
            ..LinkingRule::default()
        })
        .collect()
}

static HREF_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r#"(?i)<a[^>]*href=['"]([^'"]*)['"]"#).expect("static regex")
});

// Leading run of text up to and including the first blank line. Single
// paragraph documents (no blank line) are processed whole.
static FIRST_PARAGRAPH_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?s)^(.*?\n[ \t]*\n)").expect("static regex"));

/// Caller-owned linking engine. Construct one per article collection; there is
/// no process-wide instance.
#[derive(Debug, Clone)]
pub struct InternalLinkingEngine {
    rules: Vec<LinkingRule>,
    config: LinkingConfig,
}

impl InternalLinkingEngine {
    /// Build an engine from the default rule set plus `custom_rules`, resolving
    /// targets against `articles` and sorting by descending priority.
    #[must_use]
    pub fn new(articles: &[Article], custom_rules: Vec<LinkingRule>, config: LinkingConfig) -> Self {
        let mut rules = default_rules();
        rules.extend(custom_rules);
        Self::with_rules(articles, rules, config)
    }

    /// Build an engine from exactly the given rules (no defaults), still
    /// enriched against `articles` and sorted by descending priority.
    #[must_use]
    pub fn with_rules(
        articles: &[Article],
        mut rules: Vec<LinkingRule>,
        config: LinkingConfig,
    ) -> Self {
        enrich_rules(&mut rules, articles);
        rules.sort_by(|a, b| b.priority.cmp(&a.priority));
        Self { rules, config }
    }

    /// The enriched, priority-ordered rule set.
    #[must_use]
    pub fn rules(&self) -> &[LinkingRule] {
        &self.rules
    }

    /// Rewrite `content`, inserting at most `max_links_per_article` anchors.
    ///
    /// `self_url` is the current article's own URL; rules pointing at it are
    /// skipped. Empty content is returned unchanged. The input is never
    /// mutated.
    #[must_use]
    pub fn process_content(&self, content: &str, self_url: &str) -> String {
        if content.is_empty() {
            return String::new();
        }

        let mut linked_urls: HashSet<String> = HashSet::new();
        if self.config.respect_existing_links {
            for caps in HREF_RE.captures_iter(content) {
                linked_urls.insert(caps[1].to_string());
            }
        }

        let (first_paragraph, mut body) = if self.config.exclude_first_paragraph {
            split_first_paragraph(content)
        } else {
            (String::new(), content.to_string())
        };

        let window = self.config.min_words_between_links * 5;
        let mut added_links = 0usize;

        for rule in &self.rules {
            if added_links >= self.config.max_links_per_article {
                break;
            }
            let Some(target) = rule.target() else {
                // No explicit target and enrichment found nothing; skip forever.
                continue;
            };
            if target == self_url || linked_urls.contains(target) {
                continue;
            }
            let target = target.to_string();
            let Some(link_text) = rule
                .link_text
                .clone()
                .or_else(|| rule.keywords.first().cloned())
            else {
                continue;
            };

            let mut occurrences_added = 0usize;
            for keyword in &rule.keywords {
                if occurrences_added >= rule.max_occurrences
                    || added_links >= self.config.max_links_per_article
                {
                    break;
                }
                let Some(pattern) = keyword_pattern(keyword) else {
                    continue;
                };

                let matches: Vec<(usize, usize)> =
                    pattern.find_iter(&body).map(|m| (m.start(), m.end())).collect();
                for (start, end) in matches {
                    if inside_tag(&body, start) || inside_anchor(&body, start) {
                        continue;
                    }
                    if has_nearby_link(&body, start, end, window) {
                        continue;
                    }

                    let anchor = render_anchor(&target, &link_text);
                    let mut rewritten = String::with_capacity(body.len() + anchor.len());
                    rewritten.push_str(&body[..start]);
                    rewritten.push_str(&anchor);
                    rewritten.push_str(&body[end..]);
                    body = rewritten;

                    debug!(keyword = %keyword, url = %target, "inserted internal link");
                    linked_urls.insert(target.clone());
                    occurrences_added += 1;
                    added_links += 1;
                    // Only one occurrence per keyword is ever linked.
                    break;
                }
            }
        }

        format!("{first_paragraph}{body}")
    }

    /// Up to [`MAX_SUGGESTIONS`] linking candidates for `article`, one per
    /// rule, without modifying any content.
    #[must_use]
    pub fn suggested_links(&self, article: &Article) -> Vec<LinkSuggestion> {
        let haystack =
            format!("{} {} {}", article.title, article.excerpt, article.content).to_lowercase();

        let mut suggestions = Vec::new();
        for rule in &self.rules {
            if suggestions.len() >= MAX_SUGGESTIONS {
                break;
            }
            let Some(target) = rule.target() else {
                continue;
            };
            for keyword in &rule.keywords {
                if haystack.contains(&keyword.to_lowercase()) {
                    suggestions.push(LinkSuggestion {
                        keyword: keyword.clone(),
                        target_url: target.to_string(),
                        link_text: rule
                            .link_text
                            .clone()
                            .unwrap_or_else(|| keyword.clone()),
                    });
                    break;
                }
            }
        }
        suggestions
    }
}

/// One-shot rewrite with an explicit rule set; builds a throwaway engine.
/// Callers that process many articles should construct an
/// [`InternalLinkingEngine`] once instead.
#[must_use]
pub fn process_article_content(
    html: &str,
    rules: Vec<LinkingRule>,
    config: LinkingConfig,
    self_url: &str,
) -> String {
    InternalLinkingEngine::with_rules(&[], rules, config).process_content(html, self_url)
}

/// Resolve a target article for every rule lacking one, by keyword scoring
/// over the collection: occurrence count in title+excerpt+content, +5 when the
/// keyword appears in the title, +3 per matching category.
fn enrich_rules(rules: &mut [LinkingRule], articles: &[Article]) {
    for rule in rules.iter_mut() {
        if rule.target_url.is_some() || rule.target_article.is_some() {
            continue;
        }
        if let Some(article) = best_matching_article(&rule.keywords, articles) {
            rule.target_article = Some(article.url());
            if rule.link_text.is_none() {
                rule.link_text = Some(article.title.clone());
            }
        }
    }
}

fn best_matching_article<'a>(keywords: &[String], articles: &'a [Article]) -> Option<&'a Article> {
    let mut best: Option<&Article> = None;
    let mut best_score = 0usize;

    for article in articles {
        let haystack =
            format!("{} {} {}", article.title, article.excerpt, article.content).to_lowercase();
        let title = article.title.to_lowercase();

        let mut score = 0usize;
        for keyword in keywords {
            let needle = keyword.to_lowercase();
            if needle.is_empty() {
                continue;
            }
            score += haystack.matches(&needle).count();
            if title.contains(&needle) {
                score += 5;
            }
            score += 3
                * article
                    .categories
                    .iter()
                    .filter(|c| c.to_lowercase().contains(&needle))
                    .count();
        }

        if score > best_score {
            best_score = score;
            best = Some(article);
        }
    }
    best
}

/// Whole-word, case-insensitive pattern for a keyword. Metacharacters are
/// escaped; blank keywords yield no pattern.
fn keyword_pattern(keyword: &str) -> Option<Regex> {
    let trimmed = keyword.trim();
    if trimmed.is_empty() {
        return None;
    }
    RegexBuilder::new(&format!(r"\b{}\b", regex::escape(trimmed)))
        .case_insensitive(true)
        .build()
        .ok()
}

/// Split off the leading run of text up to the first blank line. Content
/// without a blank line has no excluded prefix.
fn split_first_paragraph(content: &str) -> (String, String) {
    match FIRST_PARAGRAPH_RE.find(content) {
        Some(m) => (content[..m.end()].to_string(), content[m.end()..].to_string()),
        None => (String::new(), content.to_string()),
    }
}

/// True when `pos` falls between an unclosed `<` and its `>`, i.e. inside a
/// tag body where attribute values live.
///
/// An unclosed `<` is trusted all the way back to the previous `>`: a stray
/// literal `<` in body text suppresses linking until the next `>` or end of
/// document. Rendered article HTML escapes literal brackets as `&lt;`.
fn inside_tag(content: &str, pos: usize) -> bool {
    let before = &content[..pos];
    match (before.rfind('<'), before.rfind('>')) {
        (Some(open), Some(close)) => open > close,
        (Some(_), None) => true,
        _ => false,
    }
}

/// True when `pos` falls inside the text of an existing `<a>…</a>` pair.
fn inside_anchor(content: &str, pos: usize) -> bool {
    let before = &content[..pos];
    let open = before.rfind("<a ").max(before.rfind("<a>"));
    let close = before.rfind("</a>");
    open > close
}

/// Character-window approximation of "an anchor is too close": scan
/// `window` bytes on both sides for literal anchor markers.
fn has_nearby_link(content: &str, start: usize, end: usize, window: usize) -> bool {
    let from = floor_char_boundary(content, start.saturating_sub(window));
    let to = ceil_char_boundary(content, (end + window).min(content.len()));
    let before = &content[from..start];
    let after = &content[end..to];
    before.contains("<a ")
        || before.contains("</a>")
        || after.contains("<a ")
        || after.contains("</a>")
}

fn floor_char_boundary(s: &str, mut index: usize) -> usize {
    while index > 0 && !s.is_char_boundary(index) {
        index -= 1;
    }
    index
}

fn ceil_char_boundary(s: &str, mut index: usize) -> usize {
    while index < s.len() && !s.is_char_boundary(index) {
        index += 1;
    }
    index
}

fn render_anchor(target: &str, text: &str) -> String {
    if target.starts_with("http") {
        format!(r#"<a href="{target}" target="_blank" rel="noopener noreferrer">{text}</a>"#)
    } else {
        format!(r#"<a href="{target}">{text}</a>"#)
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use emergences_shared::Article;

    use super::{
        default_rules, InternalLinkingEngine, LinkingConfig, LinkingRule, MAX_SUGGESTIONS,
    };

    fn article(title: &str, slug: &str, content: &str, categories: &[&str]) -> Article {
        Article {
            id: slug.to_string(),
            title: title.to_string(),
            excerpt: String::new(),
            content: content.to_string(),
            slug: slug.to_string(),
            categories: categories.iter().map(|c| (*c).to_string()).collect(),
            tags: vec![],
            keywords: vec![],
            image_url: None,
            seo_description: None,
            author: None,
            published: true,
            published_at: None,
            created_at: Utc.with_ymd_and_hms(2024, 1, 1, 0, 0, 0).unwrap(),
            updated_at: None,
            read_time: None,
        }
    }

    fn rule(keywords: &[&str], target_url: &str, link_text: &str) -> LinkingRule {
        LinkingRule {
            keywords: keywords.iter().map(|k| (*k).to_string()).collect(),
            target_url: Some(target_url.to_string()),
            link_text: Some(link_text.to_string()),
            ..LinkingRule::default()
        }
    }

    fn engine_with(rules: Vec<LinkingRule>) -> InternalLinkingEngine {
        InternalLinkingEngine::with_rules(&[], rules, LinkingConfig::default())
    }

    #[test]
    fn links_first_occurrence_with_link_text() {
        let engine = engine_with(vec![rule(&["stress"], "/about", "gestion du stress")]);
        let out = engine.process_content("Je gère mon stress au travail.", "/article/autre");
        assert_eq!(
            out,
            r#"Je gère mon <a href="/about">gestion du stress</a> au travail."#
        );
        assert_eq!(out.matches("<a ").count(), 1);
    }

    #[test]
    fn empty_content_round_trips() {
        let engine = engine_with(vec![rule(&["stress"], "/about", "stress")]);
        assert_eq!(engine.process_content("", "/article/x"), "");
    }

    #[test]
    fn never_links_to_self() {
        let engine = engine_with(vec![rule(&["stress"], "/article/stress", "stress")]);
        let content = "Un article sur le stress.";
        assert_eq!(engine.process_content(content, "/article/stress"), content);
    }

    #[test]
    fn respects_existing_link_targets() {
        let engine = engine_with(vec![rule(&["sommeil"], "/article/sommeil", "sommeil")]);
        let content = r#"<a href="/article/sommeil">déjà lié</a> et on reparle de sommeil ici."#;
        let out = engine.process_content(content, "/article/autre");
        assert_eq!(out, content);
    }

    #[test]
    fn caps_total_links_per_article() {
        let rules: Vec<LinkingRule> = (0..8i32)
            .map(|i| LinkingRule {
                keywords: vec![format!("mot{i}")],
                target_url: Some(format!("/cible{i}")),
                link_text: Some(format!("mot{i}")),
                priority: 10 - i,
                ..LinkingRule::default()
            })
            .collect();
        let config = LinkingConfig {
            min_words_between_links: 0,
            exclude_first_paragraph: false,
            ..LinkingConfig::default()
        };
        let engine = InternalLinkingEngine::with_rules(&[], rules, config);
        let content = (0..8).map(|i| format!("texte mot{i} ")).collect::<String>();
        let out = engine.process_content(&content, "/article/x");
        assert_eq!(out.matches("<a ").count(), 5);
    }

    #[test]
    fn second_link_within_proximity_window_is_skipped() {
        let rules = vec![
            {
                let mut r = rule(&["stress"], "/about", "stress");
                r.priority = 10;
                r
            },
            {
                let mut r = rule(&["sommeil"], "/sommeil", "sommeil");
                r.priority = 5;
                r
            },
        ];

        // Both keywords inside the 50×5-char window: only the higher-priority
        // rule links.
        let engine = engine_with(rules.clone());
        let out = engine.process_content("Le stress pèse et le sommeil se dérobe.", "/article/x");
        assert_eq!(out.matches("<a ").count(), 1);
        assert!(out.contains(r#"<a href="/about">stress</a>"#));

        // Same rules with the second keyword pushed past the window: both link.
        let padding = "mot ".repeat(80);
        let far = format!("Le stress pèse. {padding}Le sommeil se dérobe.");
        let engine = engine_with(rules);
        let out = engine.process_content(&far, "/article/x");
        assert_eq!(out.matches("<a ").count(), 2);
        assert!(out.contains(r#"<a href="/sommeil">sommeil</a>"#));
    }

    #[test]
    fn max_occurrences_links_at_most_one_occurrence_per_keyword() {
        let padding = "mot ".repeat(80);
        let content = format!(
            "L'insomnie ronge. {padding}Le sommeil fuit, l'insomnie revient encore."
        );
        let r = LinkingRule {
            keywords: vec!["insomnie".to_string(), "sommeil".to_string()],
            target_url: Some("/dormir".to_string()),
            link_text: Some("mieux dormir".to_string()),
            max_occurrences: 2,
            ..LinkingRule::default()
        };
        let engine = engine_with(vec![r]);
        let out = engine.process_content(&content, "/article/x");

        // One insertion per keyword, two in total for the rule.
        assert_eq!(out.matches(r#"<a href="/dormir">"#).count(), 2);
        // The second "insomnie" occurrence stays unlinked.
        assert!(out.contains("l'insomnie revient encore"));
    }

    #[test]
    fn stray_open_bracket_suppresses_linking_until_next_tag_end() {
        let engine = engine_with(vec![rule(&["stress"], "/about", "stress")]);

        let content = "Si 5 < 10, le stress ne compte pas ici.";
        assert_eq!(engine.process_content(content, "/article/x"), content);

        let content = "Si 5 < 10 alors <em>oui</em>, le stress compte à nouveau.";
        let out = engine.process_content(content, "/article/x");
        assert_eq!(out.matches("<a ").count(), 1);
        assert!(out.contains(r#"<a href="/about">stress</a>"#));
    }

    #[test]
    fn does_not_rewrite_attribute_values() {
        let engine = engine_with(vec![rule(&["stress"], "/about", "stress")]);
        let content = r#"<img alt="stress relief"> Parlons du stress maintenant."#;
        let out = engine.process_content(content, "/article/x");
        assert!(out.contains(r#"alt="stress relief""#));
        assert_eq!(out.matches("<a ").count(), 1);
    }

    #[test]
    fn excludes_leading_paragraph_when_blank_line_present() {
        let engine = engine_with(vec![rule(&["stress"], "/about", "stress")]);
        let content = "Intro sur le stress.\n\nPlus loin, le stress revient.";
        let out = engine.process_content(content, "/article/x");
        assert!(out.starts_with("Intro sur le stress.\n\n"));
        assert!(out.contains(r#"<a href="/about">stress</a> revient"#));
        assert_eq!(out.matches("<a ").count(), 1);
    }

    #[test]
    fn external_targets_open_in_new_tab() {
        let engine = engine_with(vec![rule(
            &["glossophobie"],
            "https://exemple.fr/peur",
            "glossophobie",
        )]);
        let out = engine.process_content("La glossophobie se soigne.", "/article/x");
        assert!(out.contains(r#"target="_blank" rel="noopener noreferrer""#));
    }

    #[test]
    fn keyword_matching_is_whole_word() {
        let engine = engine_with(vec![rule(&["trac"], "/faq", "trac")]);
        let content = "Le tracteur ne compte pas.";
        assert_eq!(engine.process_content(content, "/article/x"), content);
    }

    #[test]
    fn enrichment_targets_best_scoring_article() {
        let articles = vec![
            article("Divers", "divers", "rien à voir", &[]),
            article(
                "Mieux dormir",
                "mieux-dormir",
                "L'insomnie se traite par hypnose. L'insomnie n'est pas une fatalité.",
                &["Sommeil"],
            ),
        ];
        let custom = vec![LinkingRule {
            keywords: vec!["insomnie".to_string()],
            priority: 9,
            ..LinkingRule::default()
        }];
        let engine = InternalLinkingEngine::with_rules(&articles, custom, LinkingConfig::default());
        let enriched = &engine.rules()[0];
        assert_eq!(enriched.target_article.as_deref(), Some("/article/mieux-dormir"));
        assert_eq!(enriched.link_text.as_deref(), Some("Mieux dormir"));
    }

    #[test]
    fn unresolvable_rules_are_skipped_silently() {
        let orphan = LinkingRule {
            keywords: vec!["fantôme".to_string()],
            priority: 99,
            ..LinkingRule::default()
        };
        let engine = InternalLinkingEngine::with_rules(&[], vec![orphan], LinkingConfig::default());
        let content = "Un fantôme passe.";
        assert_eq!(engine.process_content(content, "/article/x"), content);
    }

    #[test]
    fn rules_sort_by_descending_priority() {
        let engine = engine_with(vec![
            rule(&["a"], "/a", "a"),
            {
                let mut r = rule(&["b"], "/b", "b");
                r.priority = 5;
                r
            },
        ]);
        assert_eq!(engine.rules()[0].priority, 5);
    }

    #[test]
    fn default_rules_carry_the_blog_rule_table() {
        let rules = default_rules();
        assert_eq!(rules.len(), 10);
        assert!(rules.iter().any(|r| r.target_url.as_deref() == Some("/faq")));
        assert!(rules.iter().all(|r| !r.keywords.is_empty()));
    }

    #[test]
    fn suggestions_are_read_only_and_capped() {
        let engine = InternalLinkingEngine::new(&[], vec![], LinkingConfig::default());
        let a = article(
            "Stress et consultation",
            "stress-et-consultation",
            "Le stress se traite en consultation avec un hypnothérapeute Paris.",
            &[],
        );
        let suggestions = engine.suggested_links(&a);
        assert!(!suggestions.is_empty());
        assert!(suggestions.len() <= MAX_SUGGESTIONS);
        // One suggestion per rule at most.
        let mut targets: Vec<&str> = suggestions.iter().map(|s| s.target_url.as_str()).collect();
        targets.dedup();
        assert_eq!(targets.len(), suggestions.len());
    }
}

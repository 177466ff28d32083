// Display formatting for articles.
// Derives date, reading time, and a coarse category from a provider article.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::news::Article;

const WORDS_PER_MINUTE: usize = 200;
const FALLBACK_READ_TIME: &str = "2 min read";
const INVALID_DATE: &str = "Invalid Date";

const TECH_SOURCES: &[&str] = &["TechCrunch", "Ars Technica", "Wired", "The Verge", "Engadget"];
const BUSINESS_SOURCES: &[&str] = &["Bloomberg", "Forbes", "Business Insider", "CNBC"];
const NEWS_SOURCES: &[&str] = &["BBC News", "CNN", "Reuters", "Associated Press"];

/// Display-only projection of an article.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FormattedArticle {
    pub title: String,
    pub description: String,
    pub url: String,
    pub url_to_image: String,
    pub published_at: String,
    pub source: String,
    pub author: String,
    pub category: &'static str,
    pub read_time: String,
}

/// Project an article for display.
pub fn format_article(article: &Article) -> FormattedArticle {
    let source = article.source_name().to_string();
    let author = article
        .author
        .as_deref()
        .filter(|a| !a.is_empty())
        .map(str::to_string)
        .unwrap_or_else(|| source.clone());

    FormattedArticle {
        title: article.title.clone().unwrap_or_default(),
        description: article.description.clone().unwrap_or_default(),
        url: article.url.clone().unwrap_or_default(),
        url_to_image: article.url_to_image.clone().unwrap_or_default(),
        published_at: format_date(article.published_at.as_deref()),
        category: category_for_source(&source),
        author,
        source,
        read_time: estimate_read_time(article.description.as_deref()),
    }
}

/// Render an RFC 3339 timestamp as e.g. "Jan 5, 2024" (UTC).
pub fn format_date(published_at: Option<&str>) -> String {
    published_at
        .and_then(|s| DateTime::parse_from_rfc3339(s).ok())
        .map(|dt| dt.with_timezone(&Utc).format("%b %-d, %Y").to_string())
        .unwrap_or_else(|| INVALID_DATE.to_string())
}

/// Reading time at 200 words per minute, rounded up, at least one minute.
pub fn estimate_read_time(text: Option<&str>) -> String {
    let Some(text) = text.filter(|t| !t.is_empty()) else {
        return FALLBACK_READ_TIME.to_string();
    };

    let words = text.split_whitespace().count();
    let minutes = words.div_ceil(WORDS_PER_MINUTE).max(1);
    format!("{minutes} min read")
}

/// First matching allow-list wins: tech, then business, then news.
pub fn category_for_source(source_name: &str) -> &'static str {
    let matches = |list: &[&str]| list.iter().any(|s| source_name.contains(s));

    if matches(TECH_SOURCES) {
        "Technology"
    } else if matches(BUSINESS_SOURCES) {
        "Business"
    } else if matches(NEWS_SOURCES) {
        "News"
    } else {
        "General"
    }
}

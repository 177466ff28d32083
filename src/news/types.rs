// News provider response types and request options.
// Article fields are all optional: the provider schema is only presence-checked, never validated.
// A field of an unexpected type decodes as absent, and list elements that are not objects are skipped.

use serde::de::{DeserializeOwned, Deserializer};
use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Source reference embedded in an article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArticleSource {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub name: Option<String>,
}

/// A provider article.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Article {
    #[serde(deserialize_with = "lenient_source")]
    pub source: ArticleSource,
    #[serde(deserialize_with = "lenient_string")]
    pub author: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub title: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub url_to_image: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub published_at: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub content: Option<String>,
}

impl Article {
    /// Source name, or empty if the provider omitted it.
    pub fn source_name(&self) -> &str {
        self.source.name.as_deref().unwrap_or_default()
    }
}

/// Response body for top-headlines and everything.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticlesResponse {
    pub status: String,
    #[serde(default, deserialize_with = "lenient_u64")]
    pub total_results: u64,
    #[serde(default, deserialize_with = "lenient_list")]
    pub articles: Vec<Article>,
}

/// A publisher listed by the sources endpoint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct NewsSource {
    #[serde(deserialize_with = "lenient_string")]
    pub id: Option<String>,
    #[serde(deserialize_with = "lenient_name")]
    pub name: String,
    #[serde(deserialize_with = "lenient_string")]
    pub description: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub url: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub category: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub language: Option<String>,
    #[serde(deserialize_with = "lenient_string")]
    pub country: Option<String>,
}

/// Response body for the sources endpoint.
#[derive(Debug, Clone, Deserialize)]
pub struct SourcesResponse {
    pub status: String,
    #[serde(default, deserialize_with = "lenient_list")]
    pub sources: Vec<NewsSource>,
}

fn lenient_string<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Option<String>, D::Error> {
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

fn lenient_name<'de, D: Deserializer<'de>>(deserializer: D) -> Result<String, D::Error> {
    Ok(lenient_string(deserializer)?.unwrap_or_default())
}

fn lenient_u64<'de, D: Deserializer<'de>>(deserializer: D) -> Result<u64, D::Error> {
    Ok(Value::deserialize(deserializer)?.as_u64().unwrap_or_default())
}

fn lenient_source<'de, D: Deserializer<'de>>(deserializer: D) -> Result<ArticleSource, D::Error> {
    Ok(serde_json::from_value(Value::deserialize(deserializer)?).unwrap_or_default())
}

fn lenient_list<'de, D, T>(deserializer: D) -> Result<Vec<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let items = match Value::deserialize(deserializer)? {
        Value::Array(items) => items,
        _ => return Ok(Vec::new()),
    };

    Ok(items
        .into_iter()
        .filter(Value::is_object)
        .filter_map(|item| serde_json::from_value(item).ok())
        .collect())
}

/// Options for top headlines. Unset fields fall back to config defaults.
#[derive(Debug, Clone, Default)]
pub struct TopHeadlinesOptions {
    pub country: Option<String>,
    pub category: Option<String>,
    pub sources: Option<String>,
    pub query: Option<String>,
    pub page_size: Option<u32>,
    pub page: Option<u32>,
}

/// Options for full-text search over all articles.
#[derive(Debug, Clone, Default)]
pub struct EverythingOptions {
    pub query: Option<String>,
    pub sources: Option<String>,
    pub domains: Option<String>,
    pub from: Option<String>,
    pub to: Option<String>,
    pub language: Option<String>,
    pub sort_by: Option<String>,
    pub page_size: Option<u32>,
    pub page: Option<u32>,
}

/// Options for the sources listing.
#[derive(Debug, Clone, Default)]
pub struct SourcesOptions {
    pub category: Option<String>,
    pub language: Option<String>,
    pub country: Option<String>,
}

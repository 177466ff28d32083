// News provider endpoint functions.
// Shapes parameters with defaults and decodes payloads into typed responses.

use crate::error::Result;

use super::client::NewsClient;
use super::query::{Endpoint, Query};
use super::types::{
    ArticlesResponse, EverythingOptions, SourcesOptions, SourcesResponse, TopHeadlinesOptions,
};

const DEFAULT_SEARCH_QUERY: &str = "technology";
const DEFAULT_LANGUAGE: &str = "en";
const DEFAULT_SORT: &str = "publishedAt";

/// Use `value` unless it is unset or empty.
fn or_default<'a>(value: Option<&'a str>, default: &'a str) -> &'a str {
    value.filter(|v| !v.is_empty()).unwrap_or(default)
}

/// Use `value` unless it is unset or zero.
fn or_default_num(value: Option<u32>, default: u32) -> u32 {
    value.filter(|&v| v > 0).unwrap_or(default)
}

impl NewsClient {
    pub(crate) fn top_headlines_query(&self, options: &TopHeadlinesOptions) -> Query {
        let config = self.config();
        Query::new(Endpoint::TopHeadlines)
            .param(
                "country",
                Some(or_default(options.country.as_deref(), &config.default_country)),
            )
            .param("category", options.category.as_deref())
            .param("sources", options.sources.as_deref())
            .param("q", options.query.as_deref())
            .param(
                "pageSize",
                Some(or_default_num(options.page_size, config.default_page_size)),
            )
            .param("page", Some(or_default_num(options.page, 1)))
    }

    pub(crate) fn everything_query(&self, options: &EverythingOptions) -> Query {
        let config = self.config();
        Query::new(Endpoint::Everything)
            .param(
                "q",
                Some(or_default(options.query.as_deref(), DEFAULT_SEARCH_QUERY)),
            )
            .param("sources", options.sources.as_deref())
            .param("domains", options.domains.as_deref())
            .param("from", options.from.as_deref())
            .param("to", options.to.as_deref())
            .param(
                "language",
                Some(or_default(options.language.as_deref(), DEFAULT_LANGUAGE)),
            )
            .param(
                "sortBy",
                Some(or_default(options.sort_by.as_deref(), DEFAULT_SORT)),
            )
            .param(
                "pageSize",
                Some(or_default_num(options.page_size, config.default_page_size)),
            )
            .param("page", Some(or_default_num(options.page, 1)))
    }

    pub(crate) fn sources_query(&self, options: &SourcesOptions) -> Query {
        Query::new(Endpoint::Sources)
            .param("category", options.category.as_deref())
            .param(
                "language",
                Some(or_default(options.language.as_deref(), DEFAULT_LANGUAGE)),
            )
            .param("country", options.country.as_deref())
    }

    /// Get top headlines.
    pub async fn get_top_headlines(&self, options: &TopHeadlinesOptions) -> Result<ArticlesResponse> {
        let payload = self.request(&self.top_headlines_query(options)).await?;
        Ok(serde_json::from_value(payload)?)
    }

    /// Search all articles.
    pub async fn search_everything(&self, options: &EverythingOptions) -> Result<ArticlesResponse> {
        let payload = self.request(&self.everything_query(options)).await?;
        Ok(serde_json::from_value(payload)?)
    }

    /// List news sources.
    pub async fn get_sources(&self, options: &SourcesOptions) -> Result<SourcesResponse> {
        let payload = self.request(&self.sources_query(options)).await?;
        Ok(serde_json::from_value(payload)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::NewsConfig;

    fn client() -> NewsClient {
        NewsClient::new(NewsConfig::new("test-key")).unwrap()
    }

    fn param<'a>(query: &'a Query, name: &str) -> Option<&'a str> {
        query.params().get(name).map(String::as_str)
    }

    #[test]
    fn test_top_headlines_defaults() {
        let query = client().top_headlines_query(&TopHeadlinesOptions::default());

        assert_eq!(query.endpoint(), Endpoint::TopHeadlines);
        assert_eq!(param(&query, "country"), Some("us"));
        assert_eq!(param(&query, "pageSize"), Some("20"));
        assert_eq!(param(&query, "page"), Some("1"));
        assert_eq!(param(&query, "category"), None);
        assert_eq!(param(&query, "q"), None);
        assert_eq!(query.params().len(), 3);
    }

    #[test]
    fn test_top_headlines_overrides() {
        let query = client().top_headlines_query(&TopHeadlinesOptions {
            country: Some(String::new()),
            category: Some("business".to_string()),
            page_size: Some(5),
            page: Some(0),
            ..Default::default()
        });

        // Empty and zero values count as unset
        assert_eq!(param(&query, "country"), Some("us"));
        assert_eq!(param(&query, "page"), Some("1"));
        assert_eq!(param(&query, "category"), Some("business"));
        assert_eq!(param(&query, "pageSize"), Some("5"));
    }

    #[test]
    fn test_everything_defaults() {
        let query = client().everything_query(&EverythingOptions::default());

        assert_eq!(param(&query, "q"), Some("technology"));
        assert_eq!(param(&query, "language"), Some("en"));
        assert_eq!(param(&query, "sortBy"), Some("publishedAt"));
        assert_eq!(param(&query, "pageSize"), Some("20"));
        assert_eq!(param(&query, "page"), Some("1"));
        assert_eq!(param(&query, "from"), None);
    }

    #[test]
    fn test_sources_defaults() {
        let query = client().sources_query(&SourcesOptions {
            category: Some("science".to_string()),
            ..Default::default()
        });

        assert_eq!(query.endpoint(), Endpoint::Sources);
        assert_eq!(param(&query, "category"), Some("science"));
        assert_eq!(param(&query, "language"), Some("en"));
        assert_eq!(param(&query, "country"), None);
    }
}

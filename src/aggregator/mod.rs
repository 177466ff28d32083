// Article aggregation over the news client.
// Composes client calls into display queries and degrades every failure to an empty result.

pub mod filter;
pub mod format;

use serde::Serialize;
use tracing::warn;

use crate::error::Result;
use crate::news::{Article, EverythingOptions, NewsClient, TopHeadlinesOptions};

pub use filter::{REMOVED_PLACEHOLDER, filter_articles, is_displayable};
pub use format::{FormattedArticle, format_article};

/// Maximum number of featured articles surfaced.
pub const FEATURED_LIMIT: usize = 6;
const FEATURED_HEADLINES_PAGE_SIZE: u32 = 5;
const FEATURED_SEARCH_PAGE_SIZE: u32 = 10;
const FEATURED_SEARCH_QUERY: &str = "technology OR programming OR web development";

/// Default page size for category and search queries.
pub const DEFAULT_LIMIT: u32 = 10;
const DEFAULT_SEARCH_SORT: &str = "relevancy";
const SEARCH_LANGUAGE: &str = "en";

/// A filtered article list and its size.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ArticleBatch {
    pub articles: Vec<Article>,
    pub total_results: usize,
}

impl ArticleBatch {
    pub fn new(articles: Vec<Article>) -> Self {
        let total_results = articles.len();
        Self {
            articles,
            total_results,
        }
    }

    pub fn empty() -> Self {
        Self::default()
    }
}

/// Options for free-text search.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    /// Provider sort key; defaults to "relevancy".
    pub sort_by: Option<String>,
    /// Page size; defaults to 10.
    pub limit: Option<u32>,
}

/// Translates display intents into client calls.
///
/// The plain methods are the recovery boundary: they log and return empty results.
/// The `try_` variants expose the underlying error instead.
pub struct ArticleAggregator {
    client: NewsClient,
}

impl ArticleAggregator {
    pub fn new(client: NewsClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &NewsClient {
        &self.client
    }

    /// Mix of top headlines and a broad technology search, at most six articles.
    pub async fn featured_articles(&self) -> ArticleBatch {
        self.try_featured_articles().await.unwrap_or_else(|e| {
            warn!(error = %e, "error fetching featured articles");
            ArticleBatch::empty()
        })
    }

    pub async fn try_featured_articles(&self) -> Result<ArticleBatch> {
        let headlines_options = TopHeadlinesOptions {
            page_size: Some(FEATURED_HEADLINES_PAGE_SIZE),
            ..Default::default()
        };
        let search_options = EverythingOptions {
            query: Some(FEATURED_SEARCH_QUERY.to_string()),
            page_size: Some(FEATURED_SEARCH_PAGE_SIZE),
            ..Default::default()
        };

        // Both calls settle before either result is inspected.
        let (headlines, search) = tokio::join!(
            self.client.get_top_headlines(&headlines_options),
            self.client.search_everything(&search_options)
        );
        let (headlines, search) = (headlines?, search?);

        let mut articles = filter_articles(
            headlines
                .articles
                .into_iter()
                .chain(search.articles)
                .collect(),
        );
        articles.truncate(FEATURED_LIMIT);

        Ok(ArticleBatch::new(articles))
    }

    /// Top headlines for a category.
    pub async fn articles_by_category(&self, category: &str, limit: u32) -> Vec<Article> {
        self.try_articles_by_category(category, limit)
            .await
            .unwrap_or_else(|e| {
                warn!(category = %category, error = %e, "error fetching category articles");
                Vec::new()
            })
    }

    pub async fn try_articles_by_category(&self, category: &str, limit: u32) -> Result<Vec<Article>> {
        let options = TopHeadlinesOptions {
            category: Some(category.to_lowercase()),
            page_size: Some(limit),
            ..Default::default()
        };

        let response = self.client.get_top_headlines(&options).await?;
        Ok(filter_articles(response.articles))
    }

    /// Full-text search in English.
    pub async fn search_articles(&self, query: &str, options: &SearchOptions) -> Vec<Article> {
        self.try_search_articles(query, options)
            .await
            .unwrap_or_else(|e| {
                warn!(query = %query, error = %e, "error searching articles");
                Vec::new()
            })
    }

    pub async fn try_search_articles(
        &self,
        query: &str,
        options: &SearchOptions,
    ) -> Result<Vec<Article>> {
        let search_options = EverythingOptions {
            query: Some(query.to_string()),
            sort_by: Some(
                options
                    .sort_by
                    .clone()
                    .filter(|s| !s.is_empty())
                    .unwrap_or_else(|| DEFAULT_SEARCH_SORT.to_string()),
            ),
            page_size: Some(options.limit.filter(|&l| l > 0).unwrap_or(DEFAULT_LIMIT)),
            language: Some(SEARCH_LANGUAGE.to_string()),
            ..Default::default()
        };

        let response = self.client.search_everything(&search_options).await?;
        Ok(filter_articles(response.articles))
    }

    /// Project an article for display.
    pub fn format_article(&self, article: &Article) -> FormattedArticle {
        format_article(article)
    }
}

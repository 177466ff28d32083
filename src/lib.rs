// newsdesk: cached news provider client with article aggregation.

pub mod aggregator;
pub mod cache;
pub mod config;
pub mod error;
pub mod logging;
pub mod news;

pub use aggregator::{ArticleAggregator, ArticleBatch, FormattedArticle, SearchOptions};
pub use config::NewsConfig;
pub use error::{NewsError, Result};
pub use news::NewsClient;

// newsdesk command-line entry point.
// Loads config, runs one aggregator query, and prints formatted articles.

use std::process::ExitCode;

use clap::{Parser, Subcommand};
use tracing::{error, info};

use newsdesk::aggregator::DEFAULT_LIMIT;
use newsdesk::news::SourcesOptions;
use newsdesk::{ArticleAggregator, FormattedArticle, NewsClient, NewsConfig, SearchOptions, logging};

#[derive(Parser)]
#[command(name = "newsdesk")]
#[command(about = "Browse headlines from NewsAPI")]
#[command(version = env!("CARGO_PKG_VERSION"))]
struct Args {
    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,

    /// Print JSON instead of text
    #[arg(long)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Mix of top headlines and technology news
    Featured,
    /// Top headlines for a category (defaults to the configured category)
    Category {
        name: Option<String>,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
    },
    /// Full-text search
    Search {
        query: String,
        #[arg(long, default_value_t = DEFAULT_LIMIT)]
        limit: u32,
        /// relevancy, popularity, or publishedAt
        #[arg(long)]
        sort_by: Option<String>,
    },
    /// List news sources
    Sources {
        #[arg(long)]
        category: Option<String>,
    },
}

#[tokio::main]
async fn main() -> ExitCode {
    let args = Args::parse();
    logging::init(args.verbose);

    match run(args).await {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            error!("{e}");
            ExitCode::FAILURE
        }
    }
}

async fn run(args: Args) -> newsdesk::Result<()> {
    let config = NewsConfig::load()?;
    info!(base_url = %config.base_url, "starting newsdesk");

    let default_category = config.default_category.clone();
    let aggregator = ArticleAggregator::new(NewsClient::new(config)?);

    let articles = match args.command {
        Command::Featured => aggregator.featured_articles().await.articles,
        Command::Category { name, limit } => {
            let category = name.unwrap_or(default_category);
            aggregator.articles_by_category(&category, limit).await
        }
        Command::Search {
            query,
            limit,
            sort_by,
        } => {
            let options = SearchOptions {
                sort_by,
                limit: Some(limit),
            };
            aggregator.search_articles(&query, &options).await
        }
        Command::Sources { category } => {
            let options = SourcesOptions {
                category,
                ..Default::default()
            };
            let response = aggregator.client().get_sources(&options).await?;
            if args.json {
                println!("{}", serde_json::to_string_pretty(&response.sources)?);
            } else {
                for source in &response.sources {
                    println!(
                        "{:<30} {}",
                        source.name,
                        source.category.as_deref().unwrap_or("-")
                    );
                }
            }
            return Ok(());
        }
    };

    let formatted: Vec<FormattedArticle> =
        articles.iter().map(|a| aggregator.format_article(a)).collect();

    if args.json {
        println!("{}", serde_json::to_string_pretty(&formatted)?);
        return Ok(());
    }

    if formatted.is_empty() {
        println!("No articles found.");
    }
    for article in &formatted {
        println!("[{}] {}", article.category, article.title);
        println!(
            "    {} · {} · {} · {}",
            article.source, article.author, article.published_at, article.read_time
        );
        println!("    {}", article.url);
    }

    Ok(())
}

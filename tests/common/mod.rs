#![allow(dead_code)]

use std::sync::Arc;

use chrono::Utc;
use mockito::{Matcher, ServerGuard};
use serde_json::{Value, json};

use newsdesk::cache::ManualClock;
use newsdesk::{NewsClient, NewsConfig};

pub const API_KEY: &str = "test-key";

pub fn client_for(server: &ServerGuard) -> (NewsClient, Arc<ManualClock>) {
    let mut config = NewsConfig::new(API_KEY);
    config.base_url = server.url();

    let clock = Arc::new(ManualClock::new(Utc::now()));
    let client = NewsClient::with_clock(config, clock.clone()).unwrap();
    (client, clock)
}

pub fn article(title: &str, url: &str, image: Option<&str>) -> Value {
    json!({
        "source": {"id": null, "name": "TechCrunch"},
        "author": null,
        "title": title,
        "description": format!("Summary of {title}"),
        "url": url,
        "urlToImage": image,
        "publishedAt": "2024-05-01T09:00:00Z",
        "content": null
    })
}

pub fn articles_body(articles: Vec<Value>) -> String {
    json!({
        "status": "ok",
        "totalResults": articles.len(),
        "articles": articles
    })
    .to_string()
}

pub fn query(pairs: &[(&str, &str)]) -> Matcher {
    let mut matchers = vec![Matcher::UrlEncoded("apiKey".into(), API_KEY.into())];
    matchers.extend(
        pairs
            .iter()
            .map(|(k, v)| Matcher::UrlEncoded(k.to_string(), v.to_string())),
    );
    Matcher::AllOf(matchers)
}

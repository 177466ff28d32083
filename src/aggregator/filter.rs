// Quality and de-duplication filter applied to every surfaced article list.

use std::collections::HashSet;

use crate::news::Article;

/// Title the provider substitutes for removed content.
pub const REMOVED_PLACEHOLDER: &str = "[Removed]";

fn is_present(value: Option<&str>) -> bool {
    value.is_some_and(|v| !v.is_empty())
}

/// An article is displayable if it has an image, a description, and is not a removal placeholder.
pub fn is_displayable(article: &Article) -> bool {
    is_present(article.url_to_image.as_deref())
        && is_present(article.description.as_deref())
        && article.title.as_deref() != Some(REMOVED_PLACEHOLDER)
}

/// Keep the first occurrence of each exact title, and only displayable articles.
///
/// A title counts as seen from its first occurrence in the batch, even when that
/// occurrence is itself dropped. Survivor order is preserved.
pub fn filter_articles(articles: Vec<Article>) -> Vec<Article> {
    let mut seen = HashSet::new();
    articles
        .into_iter()
        .filter(|article| {
            let first = seen.insert(article.title.clone());
            first && is_displayable(article)
        })
        .collect()
}

use std::collections::HashMap;

use tracing::debug;

use super::{Article, ArticleId};

/// In-memory index of articles keyed by their id.
///
/// Lookups only accept an [`ArticleId`]; handing over the id of any other
/// entity is rejected by the compiler:
///
/// ```compile_fail
/// use taggedid::article::ArticleManager;
/// use taggedid::user::UserId;
///
/// let manager = ArticleManager::new();
/// let user_id = UserId::new("john-sundell");
/// manager.find(&user_id);
/// ```
///
/// ```
/// use taggedid::article::{Article, ArticleManager};
///
/// let article = Article {
///     id: "article-01".into(),
///     title: "My First Article".into(),
/// };
/// let manager = ArticleManager::new();
/// assert!(manager.find(&article.id).is_none());
/// ```
#[derive(Clone, Debug, Default)]
pub struct ArticleManager {
    articles: HashMap<ArticleId, Article>,
}

impl ArticleManager {
    pub fn new() -> ArticleManager {
        ArticleManager::default()
    }

    /// Returns the article previously stored under the same id, if any.
    #[tracing::instrument(skip(self))]
    pub fn insert(&mut self, article: Article) -> Option<Article> {
        self.articles.insert(article.id.clone(), article)
    }

    #[tracing::instrument(skip(self))]
    pub fn find(&self, id: &ArticleId) -> Option<Article> {
        let article = self.articles.get(id).cloned();
        if article.is_none() {
            debug!("no article with id {}", id);
        }

        article
    }
}

use serde::{Deserialize, Serialize};

use crate::taggedid::TaggedId;

pub mod manager;
pub use manager::ArticleManager;

pub type ArticleId = TaggedId<Article>;

#[derive(Clone, Debug, PartialEq, Eq, Deserialize, Serialize)]
pub struct Article {
    pub id: ArticleId,
    pub title: String,
}

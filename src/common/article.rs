use super::{newtypes::ArticleSlug, user::Profile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub slug: ArticleSlug,
    pub title: String,
    pub description: String,
    /// Markdown
    pub body: String,
    #[serde(default)]
    pub tag_list: Vec<String>,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    #[serde(default)]
    pub favorited: bool,
    #[serde(default)]
    pub favorites_count: u32,
    pub author: Profile,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct ArticleResponse {
    pub article: Article,
}

use super::ApiClient;
use crate::{
    common::{
        article::{Article, ArticleResponse},
        comment::{Comment, CommentsResponse},
        newtypes::ArticleSlug,
    },
    frontend::utils::errors::FrontendResult,
};

impl ApiClient {
    pub async fn get_article(
        &self,
        slug: &ArticleSlug,
        token: Option<&str>,
    ) -> FrontendResult<Article> {
        let res: ArticleResponse = self.get(&format!("/articles/{slug}"), token).await?;
        Ok(res.article)
    }

    pub async fn get_comments(
        &self,
        slug: &ArticleSlug,
        token: Option<&str>,
    ) -> FrontendResult<Vec<Comment>> {
        let res: CommentsResponse = self
            .get(&format!("/articles/{slug}/comments"), token)
            .await?;
        Ok(res.comments)
    }

    /// Everything needed to show the article page.
    pub async fn get_article_with_comments(
        &self,
        slug: &ArticleSlug,
        token: Option<&str>,
    ) -> FrontendResult<(Article, Vec<Comment>)> {
        let article = self.get_article(slug, token).await?;
        let comments = self.get_comments(slug, token).await?;
        Ok((article, comments))
    }
}

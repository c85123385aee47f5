use super::ApiClient;
use crate::{
    common::{
        comment::{Comment, CommentResponse, CreateCommentParams},
        newtypes::{ArticleSlug, CommentId},
    },
    frontend::utils::errors::FrontendResult,
};

impl ApiClient {
    pub async fn create_comment(
        &self,
        slug: &ArticleSlug,
        body: &str,
        token: &str,
    ) -> FrontendResult<Comment> {
        let params = CreateCommentParams::new(body);
        let res: CommentResponse = self
            .post(&format!("/articles/{slug}/comments"), Some(token), &params)
            .await?;
        Ok(res.comment)
    }

    pub async fn delete_comment(
        &self,
        slug: &ArticleSlug,
        id: CommentId,
        token: &str,
    ) -> FrontendResult<()> {
        let _: serde_json::Value = self
            .delete(&format!("/articles/{slug}/comments/{id}"), Some(token))
            .await?;
        Ok(())
    }
}

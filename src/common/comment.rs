use super::{newtypes::CommentId, user::Profile};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Comment {
    pub id: CommentId,
    pub body: String,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
    pub author: Profile,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct CommentResponse {
    pub comment: Comment,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct CommentsResponse {
    pub comments: Vec<Comment>,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct NewComment {
    pub body: String,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct CreateCommentParams {
    pub comment: NewComment,
}

impl CreateCommentParams {
    pub fn new(body: impl Into<String>) -> Self {
        Self {
            comment: NewComment { body: body.into() },
        }
    }
}

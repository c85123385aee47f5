use super::ApiClient;
use crate::{
    common::user::{User, UserResponse},
    frontend::utils::errors::FrontendResult,
};

impl ApiClient {
    pub async fn current_user(&self, token: &str) -> FrontendResult<User> {
        let res: UserResponse = self.get("/user", Some(token)).await?;
        Ok(res.user)
    }
}

use serde::{Deserialize, Serialize};

/// The logged in user, including the token used to authenticate api requests.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct User {
    pub email: String,
    pub token: String,
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
}

/// `None` when nobody is logged in.
pub type UserState = Option<User>;

/// Public data about an article or comment author.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq, Default)]
pub struct Profile {
    pub username: String,
    pub bio: Option<String>,
    pub image: Option<String>,
    #[serde(default)]
    pub following: bool,
}

#[derive(Deserialize, Serialize, Debug)]
pub struct UserResponse {
    pub user: User,
}

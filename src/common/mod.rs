pub mod article;
pub mod comment;
pub mod newtypes;
pub mod state;
pub mod user;

/// Name of the cookie which holds the jwt of the logged in user.
pub static AUTH_COOKIE: &str = "jwt";

#[cfg(test)]
pub(crate) mod test_utils {
    use super::{
        article::Article,
        comment::Comment,
        newtypes::{ArticleSlug, CommentId},
        user::{Profile, User},
    };
    use chrono::{TimeZone, Utc};

    pub fn test_profile(username: &str) -> Profile {
        Profile {
            username: username.to_string(),
            bio: None,
            image: None,
            following: false,
        }
    }

    pub fn test_article(slug: &str) -> Article {
        let published = Utc
            .with_ymd_and_hms(2024, 3, 14, 9, 30, 0)
            .single()
            .unwrap_or_default();
        Article {
            slug: ArticleSlug::new(slug),
            title: format!("Title of {slug}"),
            description: "Ever wonder how?".to_string(),
            body: "# Dragons\n\nIt takes a **Jacobian**".to_string(),
            tag_list: vec!["dragons".to_string(), "training".to_string()],
            created_at: published,
            updated_at: published,
            favorited: false,
            favorites_count: 3,
            author: test_profile("jake"),
        }
    }

    pub fn test_comment(id: i32, body: &str) -> Comment {
        let published = Utc
            .with_ymd_and_hms(2024, 3, 15, 12, 0, 0)
            .single()
            .unwrap_or_default();
        Comment {
            id: CommentId(id),
            body: body.to_string(),
            created_at: published,
            updated_at: published,
            author: test_profile("jake"),
        }
    }

    pub fn test_user(username: &str) -> User {
        User {
            email: format!("{username}@example.com"),
            token: "jwt.token.here".to_string(),
            username: username.to_string(),
            bio: None,
            image: None,
        }
    }
}

use chrono::{DateTime, Utc};

/// Shown for users who haven't uploaded an avatar.
pub const DEFAULT_AVATAR: &str = "https://api.realworld.io/images/smiley-cyrus.jpeg";

pub fn profile_path(username: &str) -> String {
    format!("/profile/{username}")
}

pub fn avatar_url(image: Option<&str>) -> String {
    match image {
        Some(image) if !image.trim().is_empty() => image.to_string(),
        _ => DEFAULT_AVATAR.to_string(),
    }
}

/// Formats as "March 14, 2024".
pub fn render_date(date_time: DateTime<Utc>) -> String {
    date_time.format("%B %-d, %Y").to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_render_date() {
        let date = Utc
            .with_ymd_and_hms(2016, 2, 8, 3, 22, 56)
            .single()
            .unwrap_or_default();
        assert_eq!("February 8, 2016", render_date(date));
    }

    #[test]
    fn test_avatar_fallback() {
        assert_eq!(DEFAULT_AVATAR, avatar_url(None));
        assert_eq!(DEFAULT_AVATAR, avatar_url(Some(" ")));
        assert_eq!("https://x.org/a.jpg", avatar_url(Some("https://x.org/a.jpg")));
    }

    #[test]
    fn test_profile_path() {
        assert_eq!("/profile/jake", profile_path("jake"));
    }
}

use crate::{
    common::article::Article,
    frontend::utils::formatting::{avatar_url, profile_path, render_date},
};
use leptos::prelude::*;

#[component]
pub fn ArticleMeta(article: Article) -> impl IntoView {
    let profile = profile_path(&article.author.username);
    let avatar = avatar_url(article.author.image.as_deref());
    let favorites = match article.favorites_count {
        1 => "1 favorite".to_string(),
        n => format!("{n} favorites"),
    };
    view! {
        <div class="article-meta">
            <a href=profile.clone()>
                <img src=avatar />
            </a>
            <div class="info">
                <a class="author" href=profile>
                    {article.author.username}
                </a>
                <span class="date">{render_date(article.created_at)}</span>
            </div>
            <span class="favorites-count">{favorites}</span>
        </div>
    }
}

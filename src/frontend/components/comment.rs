use crate::{
    common::{comment::Comment, user::UserState},
    frontend::utils::formatting::{avatar_url, profile_path, render_date},
};
use leptos::{
    callback::{Callable, Callback},
    prelude::*,
};
use phosphor_leptos::{Icon, TRASH};

#[component]
pub fn CommentCard(
    comment: Comment,
    current_user: UserState,
    on_delete: Callback<Comment>,
) -> impl IntoView {
    let can_delete = current_user
        .as_ref()
        .is_some_and(|user| user.username == comment.author.username);
    let profile = profile_path(&comment.author.username);
    let avatar = avatar_url(comment.author.image.as_deref());
    let anchor = format!("comment-{}", comment.id);
    let body = comment.body.clone();
    let author = comment.author.username.clone();
    let published = render_date(comment.created_at);
    let delete = can_delete.then(move || {
        view! {
            <span class="mod-options" on:click=move |_| on_delete.run(comment.clone())>
                <Icon icon=TRASH />
            </span>
        }
    });

    view! {
        <div class="card" id=anchor>
            <div class="card-block">
                <p class="card-text">{body}</p>
            </div>
            <div class="card-footer">
                <a class="comment-author" href=profile.clone()>
                    <img class="comment-author-img" src=avatar />
                </a>
                " "
                <a class="comment-author" href=profile>
                    {author}
                </a>
                <span class="date-posted">{published}</span>
                {delete}
            </div>
        </div>
    }
}

use crate::{common::user::User, frontend::utils::formatting::avatar_url};
use leptos::{
    callback::{Callable, Callback},
    ev::SubmitEvent,
    prelude::*,
};

#[component]
pub fn CommentForm(current_user: User, on_submit: Callback<String>) -> impl IntoView {
    let (content, set_content) = signal(String::new());
    let submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        if let Some(body) = comment_body(&content.get_untracked()) {
            on_submit.run(body);
            set_content.set(String::new());
        }
    };

    view! {
        <form class="card comment-form" on:submit=submit>
            <div class="card-block">
                <textarea
                    class="form-control"
                    placeholder="Write a comment..."
                    rows="3"
                    prop:value=content
                    on:input=move |evt| {
                        set_content.set(event_target_value(&evt));
                    }
                ></textarea>
            </div>
            <div class="card-footer">
                <img class="comment-author-img" src=avatar_url(current_user.image.as_deref()) />
                <button class="btn btn-sm btn-primary" type="submit">
                    "Post Comment"
                </button>
            </div>
        </form>
    }
}

/// Text which is actually sent, `None` if there is nothing to send.
fn comment_body(raw: &str) -> Option<String> {
    let body = raw.trim();
    (!body.is_empty()).then(|| body.to_string())
}

#[test]
fn test_comment_body() {
    assert_eq!(None, comment_body(""));
    assert_eq!(None, comment_body(" \n\t"));
    assert_eq!(Some("Nice".to_string()), comment_body("  Nice\n"));
}

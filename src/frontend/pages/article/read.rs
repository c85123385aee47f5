use crate::{
    common::{comment::Comment, newtypes::ArticleSlug},
    frontend::{
        components::{
            article_meta::ArticleMeta,
            comment::CommentCard,
            comment_form::CommentForm,
            tag_list::TagList,
        },
        markdown::render_markdown,
        pages::article::view::{render_plan, Activation, ArticlePageData, ArticleView, RenderPlan},
        store::Store,
    },
};
use leptos::{callback::Callback, prelude::*};
use leptos_meta::Title;
use leptos_router::{components::Redirect, hooks::use_params_map};

#[component]
pub fn ArticlePage() -> impl IntoView {
    let params = use_params_map();
    let slug = ArticleSlug::new(params.with_untracked(|p| p.get("slug")).unwrap_or_default());
    let store = Store::use_store();

    let controller = ArticleView::new(slug, store);
    let activation = activate_article(&controller, store);
    on_cleanup(move || activation.deactivate());

    let submit_controller = controller.clone();
    let on_submit_comment =
        Callback::new(move |body: String| submit_controller.submit_comment(body));
    let on_delete_comment =
        Callback::new(move |comment: Comment| controller.delete_comment(comment));

    move || {
        let plan = store
            .article
            .with(|state| store.user.with(|user| render_plan(state, user)));
        match plan {
            RenderPlan::Redirect(path) => view! { <Redirect path=path /> }.into_any(),
            RenderPlan::Nothing => ().into_any(),
            RenderPlan::Page(page) => {
                let title = page.article.title.clone();
                view! {
                    <Title text=title />
                    <ArticleContent
                        page=page
                        on_submit_comment=on_submit_comment
                        on_delete_comment=on_delete_comment
                    />
                }
                .into_any()
            }
        }
    }
}

/// Activates on a snapshot of the state. No guard of `store.article` may be held during
/// `activate`, because the load request writes to the same signal.
fn activate_article(controller: &ArticleView<Store>, store: Store) -> Activation<Store> {
    let state = store.article.get_untracked();
    controller.activate(&state)
}

#[component]
pub fn ArticleContent(
    page: ArticlePageData,
    on_submit_comment: Callback<String>,
    on_delete_comment: Callback<Comment>,
) -> impl IntoView {
    let ArticlePageData {
        article,
        comments,
        user,
    } = page;
    let body = render_markdown(&article.body);
    let comment_form = user.clone().map(|current_user| {
        view! { <CommentForm current_user=current_user on_submit=on_submit_comment /> }
    });
    let comment_list = comments
        .into_iter()
        .map(|comment| {
            view! {
                <CommentCard comment=comment current_user=user.clone() on_delete=on_delete_comment />
            }
        })
        .collect_view();

    view! {
        <div class="article-page">
            <div class="banner">
                <div class="container">
                    <h1>{article.title.clone()}</h1>
                    <ArticleMeta article=article.clone() />
                </div>
            </div>
            <div class="container page">
                <div class="row article-content">
                    <div class="col-md-12">
                        <div inner_html=body></div>
                        <TagList tags=article.tag_list.clone() tag_class="tag-outline" />
                    </div>
                </div>
                <hr />
                <div class="article-actions">
                    <ArticleMeta article=article />
                </div>
                <div class="row">
                    <div class="col-xs-12 col-md-8 offset-md-2">
                        {comment_form}
                        {comment_list}
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::test_utils::{test_article, test_comment, test_user},
        frontend::api::ApiClient,
    };
    use any_spawner::Executor;
    use leptos::reactive::owner::Owner;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn render(page: ArticlePageData) -> String {
        let owner = Owner::new();
        owner.with(|| {
            let on_submit_comment = Callback::new(|_: String| {});
            let on_delete_comment = Callback::new(|_: Comment| {});
            view! {
                <ArticleContent
                    page=page
                    on_submit_comment=on_submit_comment
                    on_delete_comment=on_delete_comment
                />
            }
            .to_html()
        })
    }

    #[test]
    fn test_page_lists_comments_in_order() {
        let html = render(ArticlePageData {
            article: test_article("dragons"),
            comments: vec![
                test_comment(2, "Second comment"),
                test_comment(1, "First comment"),
                test_comment(3, "Third comment"),
            ],
            user: None,
        });
        assert_eq!(3, html.matches("class=\"card-text\"").count());
        let second = html.find("Second comment");
        let first = html.find("First comment");
        let third = html.find("Third comment");
        assert!(second.is_some() && first.is_some() && third.is_some());
        assert!(second < first && first < third, "{html}");
    }

    #[test]
    fn test_page_without_user_has_no_form() {
        let html = render(ArticlePageData {
            article: test_article("dragons"),
            comments: vec![test_comment(1, "hello")],
            user: None,
        });
        assert_eq!(0, html.matches("comment-form").count());
        assert_eq!(0, html.matches("mod-options").count());
    }

    #[test]
    fn test_page_with_user_has_one_form() {
        let html = render(ArticlePageData {
            article: test_article("dragons"),
            comments: vec![test_comment(1, "mine")],
            user: Some(test_user("jake")),
        });
        assert_eq!(1, html.matches("comment-form").count());
        // jake wrote the test comment, so it can be deleted
        assert_eq!(1, html.matches("mod-options").count());
    }

    #[test]
    fn test_page_renders_article() {
        let mut article = test_article("dragons");
        article.body = "Some *markdown* <b>raw</b>".to_string();
        let html = render(ArticlePageData {
            article,
            comments: vec![],
            user: None,
        });
        assert!(html.contains("Title of dragons"), "{html}");
        assert!(html.contains("<em>markdown</em>"), "{html}");
        assert!(!html.contains("<b>raw</b>"), "{html}");
        assert_eq!(2, html.matches("tag-outline").count());
        assert_eq!(2, html.matches("class=\"article-meta\"").count());
    }

    #[tokio::test]
    async fn test_activation_through_store_loads_and_unloads() {
        _ = Executor::init_tokio();
        let owner = Owner::new();
        let (store, activation) = owner.with(|| {
            // nothing listens on the discard port, so the load fails quickly
            provide_context(ApiClient::new("http://127.0.0.1:9/api"));
            let store = Store::new();
            let controller = ArticleView::new(ArticleSlug::new("dragons"), store);
            let activation = activate_article(&controller, store);
            (store, activation)
        });
        assert!(store.article.with_untracked(|s| s.is_loading));

        for _ in 0..100 {
            if !store.article.with_untracked(|s| s.is_loading) {
                break;
            }
            tokio::time::sleep(Duration::from_millis(50)).await;
        }
        let state = store.article.get_untracked();
        assert!(state.error);
        assert!(!state.is_loading);

        activation.deactivate();
        let state = store.article.get_untracked();
        assert!(!state.error);
        assert!(state.article.is_none());
    }
}

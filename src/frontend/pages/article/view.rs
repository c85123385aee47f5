use crate::{
    common::{
        article::Article,
        comment::Comment,
        newtypes::ArticleSlug,
        state::ArticleState,
        user::UserState,
    },
    frontend::store::ArticleActions,
};
use log::debug;

/// Where the article page sends the user when loading fails.
pub const ROOT_PATH: &str = "/";

/// Controller of the article page for one slug. Holds no state of its own, it reads the
/// state it is given and forwards user intents to [ArticleActions].
#[derive(Clone, Debug)]
pub struct ArticleView<A> {
    slug: ArticleSlug,
    actions: A,
}

impl<A> ArticleView<A>
where
    A: ArticleActions + Clone,
{
    pub fn new(slug: ArticleSlug, actions: A) -> Self {
        Self { slug, actions }
    }

    /// Requests a load unless the article is already there. The article gets unloaded again
    /// when the returned value is dropped.
    #[must_use = "the article is unloaded as soon as the activation is dropped"]
    pub fn activate(&self, state: &ArticleState) -> Activation<A> {
        if state.article.is_none() {
            debug!("Loading article {}", self.slug);
            self.actions.load_article(self.slug.clone());
        }
        Activation {
            actions: self.actions.clone(),
        }
    }

    pub fn submit_comment(&self, body: String) {
        self.actions.add_comment(body, self.slug.clone());
    }

    pub fn delete_comment(&self, comment: Comment) {
        self.actions.remove_comment(comment, self.slug.clone());
    }
}

/// Active article page. Dropping it, on any path, issues exactly one unload.
#[derive(Debug)]
pub struct Activation<A: ArticleActions> {
    actions: A,
}

impl<A: ArticleActions> Activation<A> {
    pub fn deactivate(self) {}
}

impl<A: ArticleActions> Drop for Activation<A> {
    fn drop(&mut self) {
        self.actions.unload_article();
    }
}

#[derive(Clone, Debug, PartialEq)]
pub enum RenderPlan {
    Redirect(&'static str),
    Nothing,
    Page(ArticlePageData),
}

#[derive(Clone, Debug, PartialEq)]
pub struct ArticlePageData {
    pub article: Article,
    pub comments: Vec<Comment>,
    pub user: UserState,
}

impl ArticlePageData {
    pub fn shows_comment_form(&self) -> bool {
        self.user.is_some()
    }
}

/// Decides what the page shows. Error wins over everything else, then loading.
pub fn render_plan(state: &ArticleState, user: &UserState) -> RenderPlan {
    if state.error {
        return RenderPlan::Redirect(ROOT_PATH);
    }
    match &state.article {
        Some(article) if !state.is_loading => RenderPlan::Page(ArticlePageData {
            article: article.clone(),
            comments: state.comments.clone(),
            user: user.clone(),
        }),
        _ => RenderPlan::Nothing,
    }
}

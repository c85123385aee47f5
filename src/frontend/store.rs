use crate::{
    common::{
        article::Article,
        comment::Comment,
        newtypes::ArticleSlug,
        state::{ArticleEvent, ArticleState, LoadTicket},
        user::UserState,
    },
    frontend::{api::api_client, utils::errors::FrontendResult},
};
use leptos::{prelude::*, task::spawn};
use log::{debug, warn};
use std::sync::Arc;

/// Requests which modify the article page state. The view only ever goes through this
/// interface, the actual work happens in the implementation.
pub trait ArticleActions {
    fn load_article(&self, slug: ArticleSlug);
    fn add_comment(&self, body: String, slug: ArticleSlug);
    fn remove_comment(&self, comment: Comment, slug: ArticleSlug);
    fn unload_article(&self);
}

impl<T: ArticleActions + ?Sized> ArticleActions for Arc<T> {
    fn load_article(&self, slug: ArticleSlug) {
        (**self).load_article(slug)
    }
    fn add_comment(&self, body: String, slug: ArticleSlug) {
        (**self).add_comment(body, slug)
    }
    fn remove_comment(&self, comment: Comment, slug: ArticleSlug) {
        (**self).remove_comment(comment, slug)
    }
    fn unload_article(&self) {
        (**self).unload_article()
    }
}

/// Application state, provided as context by the app root.
#[derive(Clone, Copy, Debug)]
pub struct Store {
    pub article: RwSignal<ArticleState>,
    pub user: RwSignal<UserState>,
}

impl Default for Store {
    fn default() -> Self {
        Self::new()
    }
}

impl Store {
    pub fn new() -> Self {
        Self {
            article: RwSignal::new(ArticleState::default()),
            user: RwSignal::new(None),
        }
    }

    pub fn provide() -> Self {
        let store = Self::new();
        provide_context(store);
        store
    }

    pub fn use_store() -> Self {
        expect_context::<Store>()
    }

    fn start_load(&self) -> Option<LoadTicket> {
        self.article.try_update(|state| {
            let ticket = state.begin_load();
            state.apply(ArticleEvent::LoadStarted(ticket));
            ticket
        })
    }

    /// Returns false if the load was stale and its result got discarded.
    fn finish_load(
        &self,
        slug: &ArticleSlug,
        ticket: LoadTicket,
        result: FrontendResult<(Article, Vec<Comment>)>,
    ) -> bool {
        let event = match result {
            Ok((article, comments)) => ArticleEvent::Loaded {
                ticket,
                article,
                comments,
            },
            Err(e) => {
                warn!("Failed to load article {slug}: {e}");
                ArticleEvent::LoadFailed(ticket)
            }
        };
        let applied = self
            .article
            .try_update(|state| state.apply(event))
            .unwrap_or(false);
        if !applied {
            debug!("Discarding stale load of article {slug}");
        }
        applied
    }

    fn token(&self) -> Option<String> {
        self.user
            .with_untracked(|user| user.as_ref().map(|u| u.token.clone()))
    }
}

impl ArticleActions for Store {
    fn load_article(&self, slug: ArticleSlug) {
        let Some(ticket) = self.start_load() else {
            return;
        };
        let store = *self;
        let token = self.token();
        let client = api_client();
        spawn(async move {
            let result = client
                .get_article_with_comments(&slug, token.as_deref())
                .await;
            store.finish_load(&slug, ticket, result);
        });
    }

    fn add_comment(&self, body: String, slug: ArticleSlug) {
        let Some(token) = self.token() else {
            warn!("Cannot comment on {slug} without login");
            return;
        };
        let article = self.article;
        let client = api_client();
        spawn(async move {
            match client.create_comment(&slug, &body, &token).await {
                Ok(comment) => article.update(|state| {
                    state.apply(ArticleEvent::CommentAdded(comment));
                }),
                Err(e) => warn!("Failed to add comment to {slug}: {e}"),
            }
        });
    }

    fn remove_comment(&self, comment: Comment, slug: ArticleSlug) {
        let Some(token) = self.token() else {
            warn!("Cannot delete comment on {slug} without login");
            return;
        };
        let article = self.article;
        let client = api_client();
        spawn(async move {
            match client.delete_comment(&slug, comment.id, &token).await {
                Ok(()) => article.update(|state| {
                    state.apply(ArticleEvent::CommentRemoved(comment.id));
                }),
                Err(e) => warn!("Failed to delete comment {} on {slug}: {e}", comment.id),
            }
        });
    }

    fn unload_article(&self) {
        self.article.update(|state| {
            state.apply(ArticleEvent::Unloaded);
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{
        common::test_utils::{test_article, test_comment},
        frontend::utils::errors::FrontendError,
    };
    use leptos::reactive::owner::Owner;
    use pretty_assertions::assert_eq;

    fn slug() -> ArticleSlug {
        ArticleSlug::new("dragons")
    }

    #[test]
    fn test_load_flow_success() {
        Owner::new().with(|| {
            let store = Store::new();
            let Some(ticket) = store.start_load() else {
                panic!("signal disposed");
            };
            assert!(store.article.get_untracked().is_loading);

            let applied = store.finish_load(
                &slug(),
                ticket,
                Ok((test_article("dragons"), vec![test_comment(1, "hi")])),
            );
            assert!(applied);
            let state = store.article.get_untracked();
            assert!(!state.is_loading);
            assert!(!state.error);
            assert_eq!(1, state.comments.len());
            assert_eq!(
                Some("dragons"),
                state.article.as_ref().map(|a| a.slug.as_str())
            );
        });
    }

    #[test]
    fn test_load_flow_failure() {
        Owner::new().with(|| {
            let store = Store::new();
            let Some(ticket) = store.start_load() else {
                panic!("signal disposed");
            };
            assert!(store.finish_load(&slug(), ticket, Err(FrontendError::new("404"))));
            let state = store.article.get_untracked();
            assert!(state.error);
            assert!(!state.is_loading);
        });
    }

    #[test]
    fn test_unload_makes_pending_load_stale() {
        Owner::new().with(|| {
            let store = Store::new();
            let Some(ticket) = store.start_load() else {
                panic!("signal disposed");
            };
            store.unload_article();

            let loaded = Ok((test_article("dragons"), vec![]));
            assert!(!store.finish_load(&slug(), ticket, loaded));
            assert!(!store.finish_load(&slug(), ticket, Err(FrontendError::new("late"))));
            let state = store.article.get_untracked();
            assert_eq!(None, state.article);
            assert!(!state.error);
            assert!(!state.is_loading);
        });
    }

    #[test]
    fn test_unload_resets_store() {
        Owner::new().with(|| {
            let store = Store::new();
            store.article.update(|state| {
                let ticket = state.begin_load();
                state.apply(ArticleEvent::LoadStarted(ticket));
            });
            assert!(store.article.get_untracked().is_loading);

            store.unload_article();
            let state = store.article.get_untracked();
            assert!(!state.is_loading);
            assert!(state.article.is_none());
        });
    }

    #[test]
    fn test_comment_actions_require_login() {
        Owner::new().with(|| {
            let store = Store::new();
            store.add_comment("hi".to_string(), ArticleSlug::new("a"));
            store.remove_comment(test_comment(1, "x"), ArticleSlug::new("a"));
            assert!(store.article.get_untracked().comments.is_empty());
        });
    }
}

use super::{article::Article, comment::Comment, newtypes::CommentId};

/// Identifies one load request. Completions carrying an outdated ticket are ignored, so that
/// a load which finishes after the article was unloaded (or reloaded) can't overwrite state.
#[derive(Debug, Copy, Clone, Eq, PartialEq)]
pub struct LoadTicket(u64);

/// State of the article page, shared between the view and the actions which modify it.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ArticleState {
    pub article: Option<Article>,
    pub comments: Vec<Comment>,
    pub is_loading: bool,
    pub error: bool,
    generation: u64,
    pending: Option<LoadTicket>,
}

#[derive(Debug)]
pub enum ArticleEvent {
    LoadStarted(LoadTicket),
    Loaded {
        ticket: LoadTicket,
        article: Article,
        comments: Vec<Comment>,
    },
    LoadFailed(LoadTicket),
    CommentAdded(Comment),
    CommentRemoved(CommentId),
    Unloaded,
}

impl ArticleState {
    /// Returns a ticket for a new load. It only becomes current once `LoadStarted` is applied.
    pub fn begin_load(&mut self) -> LoadTicket {
        self.generation += 1;
        LoadTicket(self.generation)
    }

    pub fn is_pending(&self, ticket: LoadTicket) -> bool {
        self.pending == Some(ticket)
    }

    /// Returns false if the event was discarded as stale.
    pub fn apply(&mut self, event: ArticleEvent) -> bool {
        match event {
            ArticleEvent::LoadStarted(ticket) => {
                self.pending = Some(ticket);
                self.is_loading = true;
                self.error = false;
            }
            ArticleEvent::Loaded {
                ticket,
                article,
                comments,
            } => {
                if !self.is_pending(ticket) {
                    return false;
                }
                self.pending = None;
                self.article = Some(article);
                self.comments = comments;
                self.is_loading = false;
            }
            ArticleEvent::LoadFailed(ticket) => {
                if !self.is_pending(ticket) {
                    return false;
                }
                self.pending = None;
                self.is_loading = false;
                self.error = true;
            }
            ArticleEvent::CommentAdded(comment) => {
                // api lists comments newest first
                self.comments.insert(0, comment);
            }
            ArticleEvent::CommentRemoved(id) => {
                self.comments.retain(|c| c.id != id);
            }
            ArticleEvent::Unloaded => {
                // keep the generation so that tickets issued before the unload stay stale
                *self = ArticleState {
                    generation: self.generation,
                    ..Default::default()
                };
            }
        }
        true
    }
}

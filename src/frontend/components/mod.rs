pub mod article_meta;
pub mod comment;
pub mod comment_form;
pub mod tag_list;

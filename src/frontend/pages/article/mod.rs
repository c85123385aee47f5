pub mod read;
pub mod view;

mod api;
mod auth;

pub use api::{RedditClient, RedditCommentData, RedditPostData};

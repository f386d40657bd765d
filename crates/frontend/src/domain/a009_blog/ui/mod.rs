pub mod details;
pub mod list;

pub use details::BlogPostDetails;
pub use list::BlogPostList;

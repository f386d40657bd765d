pub mod details;
pub mod list;

pub use details::FaqDetails;
pub use list::FaqList;

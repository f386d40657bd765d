pub mod details;
pub mod list;

pub use details::ReviewDetails;
pub use list::ReviewList;

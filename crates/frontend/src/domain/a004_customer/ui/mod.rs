pub mod details;
pub mod list;

pub use details::CustomerDetails;
pub use list::CustomerList;

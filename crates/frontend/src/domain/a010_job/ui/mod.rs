pub mod details;
pub mod list;

pub use details::JobDetails;
pub use list::JobList;

pub mod details;
pub mod list;

pub use details::InquiryDetails;
pub use list::InquiryList;

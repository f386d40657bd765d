pub mod details;
pub mod list;

pub use details::CourierDetails;
pub use list::CourierList;

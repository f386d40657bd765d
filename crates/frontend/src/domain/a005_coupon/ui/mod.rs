pub mod details;
pub mod list;

pub use details::CouponDetails;
pub use list::CouponList;

pub mod campaign;
pub mod list;

pub use campaign::NewsletterCampaign;
pub use list::SubscriberList;

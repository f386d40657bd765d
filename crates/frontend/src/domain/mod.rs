pub mod a001_product;
pub mod a002_category;
pub mod a003_order;
pub mod a004_customer;
pub mod a005_coupon;
pub mod a006_courier;
pub mod a007_staff;
pub mod a008_media;
pub mod a009_blog;
pub mod a010_job;
pub mod a011_faq;
pub mod a012_newsletter;
pub mod a013_product_review;
pub mod a014_transaction;
pub mod a015_inquiry;

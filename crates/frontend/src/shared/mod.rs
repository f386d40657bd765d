pub mod api_client;
pub mod api_utils;
pub mod components;
pub mod config;
pub mod export;
pub mod form;
pub mod format;
pub mod icons;
pub mod notifications;
pub mod page_frame;
pub mod page_standard;
pub mod query;
pub mod realtime;
pub mod resource;

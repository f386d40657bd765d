pub mod badge;
pub mod fields;
pub mod file_input;
pub mod pagination_controls;
pub mod stat_card;

pub use badge::{ActiveBadge, Badge, BadgeVariant};
pub use fields::{enum_options, CheckboxField, SelectField, TextAreaField, TextField};
pub use file_input::{selected_files, FileInput};
pub use pagination_controls::PaginationControls;
pub use stat_card::StatCard;

pub mod api_error;
pub mod realtime;
pub mod response;
pub mod validation;

pub use api_error::{ApiError, ApiErrorKind};
pub use response::{ApiResponse, Paginated};
pub use validation::{validate_field, validate_form, FormErrors, GLOBAL_ERROR_KEY};

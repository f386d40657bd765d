//! Shared contracts of the storefront admin console.
//!
//! Everything here is platform independent: DTOs exchanged with the REST
//! API, the normalized error shape, typed form validation and the pure
//! product-variant generator. The wasm frontend depends on this crate and
//! so do the native unit tests.

pub mod dashboards;
pub mod domain;
pub mod shared;
pub mod system;

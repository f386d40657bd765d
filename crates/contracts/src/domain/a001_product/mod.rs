pub mod aggregate;
pub mod draft;
pub mod variants;

pub use aggregate::{Product, ProductForm, ProductStatus};
pub use draft::{ProductDraft, VariationError};
pub use variants::{generate_combinations, generate_variants, Variant, VariantDetail, Variation, VariationItem};

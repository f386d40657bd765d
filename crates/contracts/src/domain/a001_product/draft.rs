//! Variation editing on a product being created or edited.

use thiserror::Error;
use uuid::Uuid;

use super::variants::{generate_variants, Variant, Variation, VariationItem};

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum VariationError {
    #[error("Variation name is required")]
    EmptyName,
    #[error("Variation \"{0}\" already exists")]
    DuplicateVariation(String),
    #[error("Value is required")]
    EmptyValue,
    #[error("\"{value}\" is already a value of {variation}")]
    DuplicateValue { variation: String, value: String },
    #[error("Variation not found")]
    UnknownVariation,
    #[error("Variant {0} not found")]
    UnknownVariant(u32),
    #[error("Additional price cannot be negative")]
    NegativePrice,
    #[error("Add a variation before generating variants")]
    NoVariations,
    #[error("Variation \"{0}\" needs at least one value before variants can be generated")]
    EmptyVariation(String),
}

/// Variations and generated variants of the product draft.
///
/// Variants are only rebuilt by [`ProductDraft::regenerate_variants`];
/// editing variations leaves the current variants untouched until then.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProductDraft {
    pub variations: Vec<Variation>,
    pub variants: Vec<Variant>,
}

impl ProductDraft {
    pub fn new(variations: Vec<Variation>, variants: Vec<Variant>) -> Self {
        Self {
            variations,
            variants,
        }
    }

    /// Adds an axis; names are unique case-insensitively. Returns its id.
    pub fn add_variation(&mut self, name: &str, unit: &str) -> Result<String, VariationError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(VariationError::EmptyName);
        }
        if self
            .variations
            .iter()
            .any(|v| v.name.eq_ignore_ascii_case(name))
        {
            return Err(VariationError::DuplicateVariation(name.to_string()));
        }

        let id = Uuid::new_v4().to_string();
        self.variations.push(Variation {
            id: id.clone(),
            name: name.to_string(),
            unit: unit.trim().to_string(),
            variation_items: Vec::new(),
        });
        Ok(id)
    }

    pub fn remove_variation(&mut self, variation_id: &str) -> Result<Variation, VariationError> {
        let index = self
            .variations
            .iter()
            .position(|v| v.id == variation_id)
            .ok_or(VariationError::UnknownVariation)?;
        Ok(self.variations.remove(index))
    }

    /// Adds a value to an axis; values are unique within the axis.
    pub fn add_variation_item(
        &mut self,
        variation_id: &str,
        value: &str,
    ) -> Result<String, VariationError> {
        let value = value.trim();
        if value.is_empty() {
            return Err(VariationError::EmptyValue);
        }
        let variation = self
            .variations
            .iter_mut()
            .find(|v| v.id == variation_id)
            .ok_or(VariationError::UnknownVariation)?;

        if variation
            .variation_items
            .iter()
            .any(|item| item.value.eq_ignore_ascii_case(value))
        {
            return Err(VariationError::DuplicateValue {
                variation: variation.name.clone(),
                value: value.to_string(),
            });
        }

        let id = Uuid::new_v4().to_string();
        variation.variation_items.push(VariationItem {
            id: id.clone(),
            value: value.to_string(),
        });
        Ok(id)
    }

    pub fn remove_variation_item(
        &mut self,
        variation_id: &str,
        item_id: &str,
    ) -> Result<(), VariationError> {
        let variation = self
            .variations
            .iter_mut()
            .find(|v| v.id == variation_id)
            .ok_or(VariationError::UnknownVariation)?;
        variation.variation_items.retain(|item| item.id != item_id);
        Ok(())
    }

    /// Rebuilds variants from the current variations.
    ///
    /// Every previously entered additional price is reset to zero.
    /// Why [`ProductDraft::regenerate_variants`] would yield nothing, if it would.
    pub fn check_generatable(&self) -> Result<(), VariationError> {
        if self.variations.is_empty() {
            return Err(VariationError::NoVariations);
        }
        match self.variations.iter().find(|v| v.variation_items.is_empty()) {
            Some(empty) => Err(VariationError::EmptyVariation(empty.name.clone())),
            None => Ok(()),
        }
    }

    pub fn regenerate_variants(&mut self) -> usize {
        self.variants = generate_variants(&self.variations);
        self.variants.len()
    }

    pub fn set_additional_price(&mut self, variant_id: u32, price: f64) -> Result<(), VariationError> {
        if price < 0.0 || price.is_nan() {
            return Err(VariationError::NegativePrice);
        }
        let variant = self
            .variants
            .iter_mut()
            .find(|v| v.id == variant_id)
            .ok_or(VariationError::UnknownVariant(variant_id))?;
        variant.additional_price = price;
        Ok(())
    }

    /// Drops variations and variants, e.g. after a successful save.
    pub fn reset(&mut self) {
        self.variations.clear();
        self.variants.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn draft_with_color_and_size() -> (ProductDraft, String, String) {
        let mut draft = ProductDraft::default();
        let color = draft.add_variation("Color", "").unwrap();
        let size = draft.add_variation("Size", "EU").unwrap();
        draft.add_variation_item(&color, "Red").unwrap();
        draft.add_variation_item(&color, "Blue").unwrap();
        for value in ["S", "M", "L"] {
            draft.add_variation_item(&size, value).unwrap();
        }
        (draft, color, size)
    }

    #[test]
    fn regenerate_builds_all_combinations() {
        let (mut draft, _, _) = draft_with_color_and_size();
        assert_eq!(draft.regenerate_variants(), 6);
        assert_eq!(draft.variants[0].label(), "Red / S");
        assert_eq!(draft.variants[5].label(), "Blue / L");
    }

    #[test]
    fn generation_blockers_are_told_apart() {
        let mut draft = ProductDraft::default();
        assert_eq!(draft.check_generatable(), Err(VariationError::NoVariations));

        let color = draft.add_variation("Color", "").unwrap();
        assert_eq!(
            draft.check_generatable(),
            Err(VariationError::EmptyVariation("Color".into()))
        );

        draft.add_variation_item(&color, "Red").unwrap();
        assert_eq!(draft.check_generatable(), Ok(()));
        assert_eq!(draft.regenerate_variants(), 1);
    }

    #[test]
    fn regenerate_discards_entered_prices() {
        let (mut draft, _, _) = draft_with_color_and_size();
        draft.regenerate_variants();
        draft.set_additional_price(2, 4.5).unwrap();
        assert_eq!(draft.variants[1].additional_price, 4.5);

        draft.regenerate_variants();
        assert!(draft.variants.iter().all(|v| v.additional_price == 0.0));
    }

    #[test]
    fn duplicate_values_are_rejected_per_axis() {
        let (mut draft, color, size) = draft_with_color_and_size();
        assert_eq!(
            draft.add_variation_item(&color, " red "),
            Err(VariationError::DuplicateValue {
                variation: "Color".into(),
                value: "red".into()
            })
        );
        // same value on another axis is fine
        assert!(draft.add_variation_item(&size, "Red").is_ok());
    }

    #[test]
    fn variation_names_must_be_present_and_unique() {
        let (mut draft, _, _) = draft_with_color_and_size();
        assert_eq!(draft.add_variation("  ", ""), Err(VariationError::EmptyName));
        assert_eq!(
            draft.add_variation("color", ""),
            Err(VariationError::DuplicateVariation("color".into()))
        );
    }

    #[test]
    fn removing_does_not_touch_variants_until_regenerated() {
        let (mut draft, color, _) = draft_with_color_and_size();
        draft.regenerate_variants();
        let removed = draft.remove_variation(&color).unwrap();
        assert_eq!(removed.name, "Color");
        assert_eq!(draft.variants.len(), 6);
        assert_eq!(draft.regenerate_variants(), 3);
    }

    #[test]
    fn removing_an_item_shrinks_the_axis() {
        let (mut draft, color, _) = draft_with_color_and_size();
        let red = draft.variations[0].variation_items[0].id.clone();
        draft.remove_variation_item(&color, &red).unwrap();
        assert_eq!(draft.regenerate_variants(), 3);
        assert_eq!(
            draft.remove_variation_item("missing", &red),
            Err(VariationError::UnknownVariation)
        );
    }

    #[test]
    fn price_updates_are_checked() {
        let (mut draft, _, _) = draft_with_color_and_size();
        draft.regenerate_variants();
        assert_eq!(draft.set_additional_price(1, -1.0), Err(VariationError::NegativePrice));
        assert_eq!(
            draft.set_additional_price(99, 1.0),
            Err(VariationError::UnknownVariant(99))
        );
    }
}

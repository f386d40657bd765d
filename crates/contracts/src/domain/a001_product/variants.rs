//! Product variations and the variant combination generator.
//!
//! A [`Variation`] is one axis of differentiation ("Color") with its
//! allowed values. A [`Variant`] is one point of the cartesian product of
//! all axes, carrying its own price delta.

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariationItem {
    pub id: String,
    pub value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variation {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub unit: String,
    #[serde(default)]
    pub variation_items: Vec<VariationItem>,
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VariantDetail {
    pub variation_name: String,
    pub variation_item_value: String,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Variant {
    pub id: u32,
    #[serde(default)]
    pub additional_price: f64,
    #[serde(default)]
    pub variant_details: Vec<VariantDetail>,
}

impl VariantDetail {
    fn of(variation: &Variation, item: &VariationItem) -> Self {
        Self {
            variation_name: variation.name.clone(),
            variation_item_value: item.value.clone(),
        }
    }
}

impl Variant {
    /// Human label, e.g. `"Red / M"`.
    pub fn label(&self) -> String {
        self.variant_details
            .iter()
            .map(|d| d.variation_item_value.as_str())
            .collect::<Vec<_>>()
            .join(" / ")
    }
}

/// Every combination of one item per variation, axis order preserved.
///
/// The first axis seeds the result; each following axis is cross-joined as
/// the fast-varying inner loop. No variations, or any variation without
/// items, yields an empty result. Input is not validated: duplicate axis
/// names or values are passed through.
pub fn generate_combinations(variations: &[Variation]) -> Vec<Vec<VariantDetail>> {
    let Some((first, rest)) = variations.split_first() else {
        return Vec::new();
    };

    let mut combinations: Vec<Vec<VariantDetail>> = first
        .variation_items
        .iter()
        .map(|item| vec![VariantDetail::of(first, item)])
        .collect();

    for variation in rest {
        combinations = combinations
            .iter()
            .flat_map(|combination| {
                variation.variation_items.iter().map(move |item| {
                    let mut next = Vec::with_capacity(combination.len() + 1);
                    next.extend_from_slice(combination);
                    next.push(VariantDetail::of(variation, item));
                    next
                })
            })
            .collect();
    }

    combinations
}

/// Wraps each combination into a [`Variant`] with a 1-based id and a zero
/// additional price.
pub fn generate_variants(variations: &[Variation]) -> Vec<Variant> {
    generate_combinations(variations)
        .into_iter()
        .enumerate()
        .map(|(index, variant_details)| Variant {
            id: index as u32 + 1,
            additional_price: 0.0,
            variant_details,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn axis(name: &str, values: &[&str]) -> Variation {
        Variation {
            id: format!("v-{name}"),
            name: name.to_string(),
            unit: String::new(),
            variation_items: values
                .iter()
                .enumerate()
                .map(|(i, v)| VariationItem {
                    id: format!("{name}-{i}"),
                    value: v.to_string(),
                })
                .collect(),
        }
    }

    fn values(variant: &Variant) -> Vec<&str> {
        variant
            .variant_details
            .iter()
            .map(|d| d.variation_item_value.as_str())
            .collect()
    }

    #[test]
    fn color_by_size_gives_six_in_nested_loop_order() {
        let variations = vec![axis("Color", &["Red", "Blue"]), axis("Size", &["S", "M", "L"])];
        let variants = generate_variants(&variations);

        assert_eq!(variants.len(), 6);
        let order: Vec<Vec<&str>> = variants.iter().map(values).collect();
        assert_eq!(
            order,
            vec![
                vec!["Red", "S"],
                vec!["Red", "M"],
                vec!["Red", "L"],
                vec!["Blue", "S"],
                vec!["Blue", "M"],
                vec!["Blue", "L"],
            ]
        );
        for variant in &variants {
            assert_eq!(variant.variant_details.len(), 2);
            assert_eq!(variant.variant_details[0].variation_name, "Color");
            assert_eq!(variant.variant_details[1].variation_name, "Size");
        }
    }

    #[test]
    fn ids_are_sequential_and_prices_zero() {
        let variants = generate_variants(&[axis("Size", &["S", "M"]), axis("Fit", &["Slim"])]);
        let ids: Vec<u32> = variants.iter().map(|v| v.id).collect();
        assert_eq!(ids, vec![1, 2]);
        assert!(variants.iter().all(|v| v.additional_price == 0.0));
        assert_eq!(variants[1].label(), "M / Slim");
    }

    #[test]
    fn no_variations_yield_nothing() {
        assert!(generate_variants(&[]).is_empty());
    }

    #[test]
    fn an_empty_axis_anywhere_collapses_the_product() {
        let first_empty = vec![axis("Color", &[]), axis("Size", &["S"])];
        let middle_empty = vec![axis("Color", &["Red"]), axis("Fabric", &[]), axis("Size", &["S"])];
        let last_empty = vec![axis("Color", &["Red", "Blue"]), axis("Size", &[])];
        assert!(generate_variants(&first_empty).is_empty());
        assert!(generate_variants(&middle_empty).is_empty());
        assert!(generate_variants(&last_empty).is_empty());
    }

    #[test]
    fn single_axis_maps_items_one_to_one() {
        let variants = generate_variants(&[axis("Color", &["Red", "Green", "Blue"])]);
        let order: Vec<Vec<&str>> = variants.iter().map(values).collect();
        assert_eq!(order, vec![vec!["Red"], vec!["Green"], vec!["Blue"]]);
    }

    #[test]
    fn duplicate_axis_names_pass_through() {
        let variants = generate_variants(&[axis("Color", &["Red"]), axis("Color", &["Blue"])]);
        assert_eq!(variants.len(), 1);
        assert_eq!(values(&variants[0]), vec!["Red", "Blue"]);
    }

    #[test]
    fn wire_format_is_camel_case() {
        let json = serde_json::to_value(&generate_variants(&[axis("Color", &["Red"])])[0]).unwrap();
        assert_eq!(json["additionalPrice"], 0.0);
        assert_eq!(json["variantDetails"][0]["variationName"], "Color");
        assert_eq!(json["variantDetails"][0]["variationItemValue"], "Red");
    }

    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        fn variations_strategy(min_items: usize) -> impl Strategy<Value = Vec<Variation>> {
            prop::collection::vec(
                ("[A-Z][a-z]{1,8}", prop::collection::vec("[a-z0-9]{1,6}", min_items..5)),
                0..5,
            )
            .prop_map(|axes| {
                axes.into_iter()
                    .enumerate()
                    .map(|(i, (name, items))| Variation {
                        id: format!("v{i}"),
                        name,
                        unit: String::new(),
                        variation_items: items
                            .into_iter()
                            .enumerate()
                            .map(|(j, value)| VariationItem {
                                id: format!("v{i}-{j}"),
                                value,
                            })
                            .collect(),
                    })
                    .collect()
            })
        }

        proptest! {
            #![proptest_config(ProptestConfig {
                cases: 256,
                ..ProptestConfig::default()
            })]

            /// Count equals the product of item counts.
            #[test]
            fn count_is_product_of_item_counts(variations in variations_strategy(1)) {
                let expected = if variations.is_empty() {
                    0
                } else {
                    variations.iter().map(|v| v.variation_items.len()).product::<usize>()
                };
                let variants = generate_variants(&variations);
                prop_assert_eq!(variants.len(), expected);
                for variant in &variants {
                    prop_assert_eq!(variant.variant_details.len(), variations.len());
                }
            }

            /// Same input, same detail sequence.
            #[test]
            fn generation_is_deterministic(variations in variations_strategy(0)) {
                prop_assert_eq!(generate_combinations(&variations), generate_combinations(&variations));
            }

            /// Any empty axis collapses the result.
            #[test]
            fn empty_axis_gives_zero(
                mut variations in variations_strategy(1),
                position in 0usize..5,
            ) {
                let empty = Variation { id: "empty".into(), name: "Empty".into(), ..Variation::default() };
                let at = position.min(variations.len());
                variations.insert(at, empty);
                prop_assert!(generate_variants(&variations).is_empty());
            }
        }
    }
}

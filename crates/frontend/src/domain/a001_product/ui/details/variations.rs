//! Variation axes and generated variants of the product being edited.

use contracts::domain::a001_product::{ProductDraft, VariationError};
use leptos::prelude::*;
use thaw::*;

use crate::shared::form::parse_number;
use crate::shared::format::format_money;
use crate::shared::icons::icon;
use crate::shared::resource::confirm;

fn apply(
    draft: RwSignal<ProductDraft>,
    error: RwSignal<Option<String>>,
    op: impl FnOnce(&mut ProductDraft) -> Result<(), VariationError>,
) -> bool {
    let mut result = Ok(());
    draft.update(|d| result = op(d));
    let ok = result.is_ok();
    error.set(result.err().map(|e| e.to_string()));
    ok
}

#[component]
fn VariationRow(
    draft: RwSignal<ProductDraft>,
    error: RwSignal<Option<String>>,
    variation_id: String,
) -> impl IntoView {
    let new_value = RwSignal::new(String::new());
    let id = StoredValue::new(variation_id);

    let heading = move || {
        draft.with(|d| {
            id.with_value(|id| {
                d.variations
                    .iter()
                    .find(|v| &v.id == id)
                    .map(|v| {
                        if v.unit.is_empty() {
                            v.name.clone()
                        } else {
                            format!("{} ({})", v.name, v.unit)
                        }
                    })
                    .unwrap_or_default()
            })
        })
    };

    let items = move || {
        draft.with(|d| {
            id.with_value(|id| {
                d.variations
                    .iter()
                    .find(|v| &v.id == id)
                    .map(|v| v.variation_items.clone())
                    .unwrap_or_default()
            })
        })
    };

    let add_item = move || {
        let value = new_value.get_untracked();
        let variation_id = id.get_value();
        if apply(draft, error, |d| {
            d.add_variation_item(&variation_id, &value).map(|_| ())
        }) {
            new_value.set(String::new());
        }
    };

    view! {
        <div class="variation">
            <div class="variation__header">
                <strong>{heading}</strong>
                <Button
                    size=ButtonSize::Small
                    appearance=ButtonAppearance::Subtle
                    on_click=move |_| {
                        let variation_id = id.get_value();
                        apply(draft, error, |d| d.remove_variation(&variation_id).map(|_| ()));
                    }
                >
                    {icon("delete")}
                </Button>
            </div>
            <div class="variation__items">
                <For
                    each=items
                    key=|item| item.id.clone()
                    children=move |item| {
                        let item_id = item.id.clone();
                        view! {
                            <span class="chip">
                                {item.value}
                                <button
                                    class="chip__remove"
                                    on:click=move |_| {
                                        let variation_id = id.get_value();
                                        apply(draft, error, |d| d.remove_variation_item(&variation_id, &item_id));
                                    }
                                >
                                    "×"
                                </button>
                            </span>
                        }
                    }
                />
            </div>
            <form
                class="variation__add"
                on:submit=move |ev| {
                    ev.prevent_default();
                    add_item();
                }
            >
                <Flex gap=FlexGap::Small>
                    <Input value=new_value placeholder="New value" />
                    <Button appearance=ButtonAppearance::Secondary>{icon("plus")}</Button>
                </Flex>
            </form>
        </div>
    }
}

#[component]
pub fn VariationsEditor(draft: RwSignal<ProductDraft>, base_price: Signal<f64>) -> impl IntoView {
    let error = RwSignal::new(None::<String>);
    let new_name = RwSignal::new(String::new());
    let new_unit = RwSignal::new(String::new());

    let add_variation = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        let name = new_name.get_untracked();
        let unit = new_unit.get_untracked();
        if apply(draft, error, |d| d.add_variation(&name, &unit).map(|_| ())) {
            new_name.set(String::new());
            new_unit.set(String::new());
        }
    };

    let regenerate = move |_| {
        if let Err(blocker) = draft.with_untracked(|d| d.check_generatable()) {
            error.set(Some(blocker.to_string()));
            return;
        }
        let has_prices = draft.with_untracked(|d| d.variants.iter().any(|v| v.additional_price > 0.0));
        if has_prices && !confirm("Regenerating variants resets every additional price. Continue?") {
            return;
        }
        draft.update(|d| {
            d.regenerate_variants();
        });
        error.set(None);
    };

    let variant_rows = move || {
        draft.with(|d| {
            d.variants
                .iter()
                .map(|v| (v.id, v.label()))
                .collect::<Vec<_>>()
        })
    };

    view! {
        <section class="variations">
            <h3>"Variations"</h3>
            {move || error.get().map(|e| view! {
                <div class="warning-box warning-box--error">
                    <span class="warning-box__text">{e}</span>
                </div>
            })}

            <For
                each=move || draft.with(|d| d.variations.iter().map(|v| v.id.clone()).collect::<Vec<_>>())
                key=|id| id.clone()
                children=move |variation_id| view! {
                    <VariationRow draft=draft error=error variation_id=variation_id />
                }
            />

            <form class="variations__add" on:submit=add_variation>
                <Flex gap=FlexGap::Small>
                    <Input value=new_name placeholder="Variation, e.g. Color" />
                    <Input value=new_unit placeholder="Unit (optional)" />
                    <Button appearance=ButtonAppearance::Secondary>
                        {icon("plus")}
                        " Add variation"
                    </Button>
                </Flex>
            </form>

            <div class="variants">
                <Flex justify=FlexJustify::SpaceBetween align=FlexAlign::Center>
                    <h3>{move || format!("Variants ({})", draft.with(|d| d.variants.len()))}</h3>
                    <Button appearance=ButtonAppearance::Secondary on_click=regenerate>
                        {icon("refresh")}
                        " Generate variants"
                    </Button>
                </Flex>
                <Table>
                    <TableHeader>
                        <TableRow>
                            <TableHeaderCell resizable=false min_width=50.0>"#"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=200.0>"Variant"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Additional price"</TableHeaderCell>
                            <TableHeaderCell resizable=false min_width=120.0>"Final price"</TableHeaderCell>
                        </TableRow>
                    </TableHeader>
                    <TableBody>
                        <For
                            each=variant_rows
                            key=|row| row.clone()
                            children=move |(variant_id, label)| {
                                let additional = move || {
                                    draft.with(|d| {
                                        d.variants
                                            .iter()
                                            .find(|v| v.id == variant_id)
                                            .map(|v| v.additional_price)
                                            .unwrap_or(0.0)
                                    })
                                };
                                view! {
                                    <TableRow>
                                        <TableCell>{variant_id}</TableCell>
                                        <TableCell>{label}</TableCell>
                                        <TableCell>
                                            <input
                                                class="form__input form__input--compact"
                                                type="number"
                                                min="0"
                                                step="0.01"
                                                prop:value=move || additional().to_string()
                                                on:change=move |ev| {
                                                    let price: f64 = parse_number(&event_target_value(&ev));
                                                    apply(draft, error, |d| d.set_additional_price(variant_id, price));
                                                }
                                            />
                                        </TableCell>
                                        <TableCell>{move || format_money(base_price.get() + additional())}</TableCell>
                                    </TableRow>
                                }
                            }
                        />
                    </TableBody>
                </Table>
            </div>
        </section>
    }
}

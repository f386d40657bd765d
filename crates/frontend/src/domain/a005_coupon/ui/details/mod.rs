use contracts::domain::a005_coupon::aggregate::{Coupon, CouponForm, DiscountType};
use leptos::prelude::*;

use crate::domain::a005_coupon::api;
use crate::domain::a005_coupon::Coupons;
use crate::shared::api_client::ApiClient;
use crate::shared::components::{CheckboxField, SelectField, TextField};
use crate::shared::form::{non_empty, parse_number, FormBanner, FormState};
use crate::shared::resource::{DetailsFrame, PageActions};

fn discount_type_options() -> Vec<(String, String)> {
    vec![
        (DiscountType::Percentage.as_str().to_string(), "Percentage".to_string()),
        (DiscountType::Fixed.as_str().to_string(), "Fixed amount".to_string()),
    ]
}

#[component]
pub fn CouponDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let actions = PageActions::new();
    let state = FormState::new(CouponForm {
        is_active: true,
        ..Default::default()
    });
    let loading = RwSignal::new(false);
    let current = RwSignal::new(None::<Coupon>);

    if let Some(id) = id.clone() {
        actions.load::<Coupons>(id, loading, move |coupon| {
            state.reset(CouponForm::from(&coupon));
            current.set(Some(coupon));
        });
    }

    let title = {
        let is_new = id.is_none();
        Signal::derive(move || {
            if is_new {
                "New coupon".to_string()
            } else {
                current.with(|c| c.as_ref().map(|c| c.code.clone()).unwrap_or_default())
            }
        })
    };

    let save = Callback::new(move |_| {
        let id = id.clone();
        let previous_code = current.with_untracked(|c| c.as_ref().map(|c| c.code.clone()));
        actions.submit(
            state,
            move |token, form| async move {
                api::save_coupon(
                    &ApiClient::authorized(token.as_deref()),
                    id.as_deref(),
                    previous_code.as_deref(),
                    &form,
                )
                .await
            },
            move |_| on_close.run(()),
        );
    });

    view! {
        <DetailsFrame
            page_id="a005_coupon--detail"
            title=title
            loading=loading
            saving=state.saving
            on_save=save
            on_close=on_close
        >
            <div class="details-form">
                <FormBanner state=state />
                <TextField
                    state=state
                    field="code"
                    label="Code"
                    placeholder="SPRING10"
                    get=|f: &CouponForm| f.code.clone()
                    set=|f: &mut CouponForm, v| f.code = v
                />
                <div class="details-form__grid">
                    <SelectField
                        state=state
                        field="discount_type"
                        label="Discount type"
                        options=Signal::derive(discount_type_options)
                        get=|f: &CouponForm| f.discount_type.as_str().to_string()
                        set=|f: &mut CouponForm, v: String| {
                            if let Some(kind) = DiscountType::parse(&v) {
                                f.discount_type = kind;
                            }
                        }
                    />
                    <TextField
                        state=state
                        field="discount_value"
                        label="Discount"
                        kind="number"
                        get=|f: &CouponForm| f.discount_value.to_string()
                        set=|f: &mut CouponForm, v: String| f.discount_value = parse_number(&v)
                    />
                    <TextField
                        state=state
                        field="min_order_amount"
                        label="Minimum order amount"
                        kind="number"
                        get=|f: &CouponForm| f.min_order_amount.to_string()
                        set=|f: &mut CouponForm, v: String| f.min_order_amount = parse_number(&v)
                    />
                    <TextField
                        state=state
                        field="max_uses"
                        label="Usage limit"
                        kind="number"
                        placeholder="Unlimited"
                        get=|f: &CouponForm| f.max_uses.map(|n| n.to_string()).unwrap_or_default()
                        set=|f: &mut CouponForm, v: String| {
                            f.max_uses = non_empty(v).map(|n| parse_number(&n))
                        }
                    />
                    <TextField
                        state=state
                        field="starts_at"
                        label="Starts"
                        kind="date"
                        get=|f: &CouponForm| f.starts_at.clone()
                        set=|f: &mut CouponForm, v| f.starts_at = v
                    />
                    <TextField
                        state=state
                        field="expires_at"
                        label="Expires"
                        kind="date"
                        get=|f: &CouponForm| f.expires_at.clone()
                        set=|f: &mut CouponForm, v| f.expires_at = v
                    />
                </div>
                <CheckboxField
                    state=state
                    field="is_active"
                    label="Active"
                    get=|f: &CouponForm| f.is_active
                    set=|f: &mut CouponForm, v| f.is_active = v
                />
            </div>
        </DetailsFrame>
    }
}

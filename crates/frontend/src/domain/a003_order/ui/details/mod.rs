use contracts::domain::a003_order::aggregate::{Order, OrderStatus, PaymentStatus, UpdateOrderStatusForm};
use contracts::domain::a006_courier::aggregate::Courier;
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::list::status_badge;
use crate::domain::a003_order::api;
use crate::domain::a003_order::Orders;
use crate::domain::a006_courier::api::active_couriers;
use crate::shared::api_client::ApiClient;
use crate::shared::components::{enum_options, SelectField, TextAreaField, TextField};
use crate::shared::form::{non_empty, FormBanner, FormState};
use crate::shared::format::{format_datetime, format_money};
use crate::shared::resource::{DetailsFrame, PageActions};

#[component]
fn OrderSummary(order: Order) -> impl IntoView {
    let items = order
        .items
        .iter()
        .map(|item| {
            let name = match &item.variant_label {
                Some(variant) => format!("{} ({})", item.product_name, variant),
                None => item.product_name.clone(),
            };
            let quantity = item.quantity;
            let unit_price = format_money(item.unit_price);
            let line_total = format_money(item.line_total());
            view! {
                <TableRow>
                    <TableCell>{name}</TableCell>
                    <TableCell>{quantity}</TableCell>
                    <TableCell>{unit_price}</TableCell>
                    <TableCell>{line_total}</TableCell>
                </TableRow>
            }
        })
        .collect_view();

    view! {
        <div class="order-summary">
            <div class="details-form__grid">
                <div class="info-block">
                    <h3>"Customer"</h3>
                    <div>{order.customer_name.clone()}</div>
                    <div>{order.customer_email.clone()}</div>
                    <div>{order.phone.clone()}</div>
                </div>
                <div class="info-block">
                    <h3>"Shipping address"</h3>
                    <div class="pre-wrap">{order.shipping_address.clone()}</div>
                </div>
                <div class="info-block">
                    <h3>"Order"</h3>
                    <div>{status_badge(order.status)}</div>
                    <div>{format!("Payment: {}", order.payment_method)}</div>
                    <div>{order.created_at.as_deref().map(format_datetime).unwrap_or_default()}</div>
                </div>
            </div>

            <Table>
                <TableHeader>
                    <TableRow>
                        <TableHeaderCell resizable=false min_width=240.0>"Product"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=60.0>"Qty"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=100.0>"Unit price"</TableHeaderCell>
                        <TableHeaderCell resizable=false min_width=100.0>"Total"</TableHeaderCell>
                    </TableRow>
                </TableHeader>
                <TableBody>{items}</TableBody>
            </Table>

            <dl class="order-totals">
                <dt>"Subtotal"</dt>
                <dd>{format_money(order.subtotal)}</dd>
                <dt>"Shipping"</dt>
                <dd>{format_money(order.shipping_cost)}</dd>
                <dt>"Discount"</dt>
                <dd>{format_money(-order.discount)}</dd>
                <dt>"Total"</dt>
                <dd class="order-totals__grand">{format_money(order.total)}</dd>
            </dl>
        </div>
    }
}

#[component]
pub fn OrderDetails(id: String, on_close: Callback<()>) -> impl IntoView {
    let actions = PageActions::new();
    let state = FormState::new(UpdateOrderStatusForm::default());
    let loading = RwSignal::new(false);
    let current = RwSignal::new(None::<Order>);
    let couriers = RwSignal::new(Vec::<Courier>::new());

    actions.load::<Orders>(id.clone(), loading, move |order| {
        state.reset(UpdateOrderStatusForm::from(&order));
        current.set(Some(order));
    });

    let token = actions.token();
    spawn_local(async move {
        match active_couriers(&ApiClient::authorized(token.as_deref())).await {
            Ok(list) => {
                couriers.try_set(list);
            }
            Err(err) => actions.report(err),
        }
    });

    let title = Signal::derive(move || {
        current.with(|o| {
            o.as_ref()
                .map(|o| format!("Order #{}", o.order_number))
                .unwrap_or_else(|| "Order".to_string())
        })
    });

    let courier_options = Signal::derive(move || {
        let mut options = vec![(String::new(), "Not assigned".to_string())];
        couriers.with(|list| options.extend(list.iter().map(|c| (c.id.clone(), c.name.clone()))));
        options
    });

    let tracking_link = move || {
        state.form.with(|form| {
            let courier_id = form.courier_id.as_deref()?;
            couriers.with(|list| {
                list.iter()
                    .find(|c| c.id == courier_id)
                    .and_then(|c| c.tracking_link(&form.tracking_number))
            })
        })
    };

    let save = Callback::new(move |_| {
        let id = id.clone();
        actions.submit(
            state,
            move |token, form| async move {
                api::update_status(&ApiClient::authorized(token.as_deref()), &id, &form).await
            },
            move |response| {
                let order: Order = response.data;
                if !order.id.is_empty() {
                    state.reset(UpdateOrderStatusForm::from(&order));
                    current.set(Some(order));
                }
            },
        );
    });

    let status_options = Signal::derive(|| {
        enum_options(&OrderStatus::ALL, OrderStatus::as_str, OrderStatus::label)
    });
    let payment_options = Signal::derive(|| {
        enum_options(&PaymentStatus::ALL, PaymentStatus::as_str, PaymentStatus::label)
    });

    view! {
        <DetailsFrame
            page_id="a003_order--detail"
            title=title
            loading=loading
            saving=state.saving
            on_save=save
            on_close=on_close
        >
            {move || current.get().map(|order| view! { <OrderSummary order=order /> })}

            <div class="details-form">
                <h3>"Fulfilment"</h3>
                <FormBanner state=state />
                <div class="details-form__grid">
                    <SelectField
                        state=state
                        field="status"
                        label="Order status"
                        options=status_options
                        get=|f: &UpdateOrderStatusForm| f.status.as_str().to_string()
                        set=|f: &mut UpdateOrderStatusForm, v: String| {
                            if let Some(status) = OrderStatus::parse(&v) {
                                f.status = status;
                            }
                        }
                    />
                    <SelectField
                        state=state
                        field="payment_status"
                        label="Payment status"
                        options=payment_options
                        get=|f: &UpdateOrderStatusForm| f.payment_status.as_str().to_string()
                        set=|f: &mut UpdateOrderStatusForm, v: String| {
                            if let Some(status) = PaymentStatus::parse(&v) {
                                f.payment_status = status;
                            }
                        }
                    />
                    <SelectField
                        state=state
                        field="courier_id"
                        label="Courier"
                        options=courier_options
                        get=|f: &UpdateOrderStatusForm| f.courier_id.clone().unwrap_or_default()
                        set=|f: &mut UpdateOrderStatusForm, v| f.courier_id = non_empty(v)
                    />
                    <TextField
                        state=state
                        field="tracking_number"
                        label="Tracking number"
                        get=|f: &UpdateOrderStatusForm| f.tracking_number.clone()
                        set=|f: &mut UpdateOrderStatusForm, v| f.tracking_number = v
                    />
                </div>
                {move || tracking_link().map(|href| view! {
                    <a class="link" href=href target="_blank" rel="noopener">"Open tracking page"</a>
                })}
                <TextAreaField
                    state=state
                    field="note"
                    label="Note to customer"
                    rows=3
                    get=|f: &UpdateOrderStatusForm| f.note.clone()
                    set=|f: &mut UpdateOrderStatusForm, v| f.note = v
                />
            </div>
        </DetailsFrame>
    }
}

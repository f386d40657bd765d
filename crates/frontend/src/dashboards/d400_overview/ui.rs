use contracts::dashboards::d400_overview::{DashboardSummary, RecentOrder, SalesPoint};
use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::api::{bar_height, fetch_summary};
use crate::domain::a003_order::ui::status_badge;
use crate::domain::a003_order::Orders;
use crate::domain::a015_inquiry::Inquiries;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::api_client::ApiClient;
use crate::shared::components::StatCard;
use crate::shared::format::{format_date, format_money, format_opt_date};
use crate::shared::icons::icon;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_DASHBOARD;
use crate::shared::realtime::use_realtime;
use crate::shared::resource::{PageActions, Resource};

#[component]
fn SalesChart(points: Vec<SalesPoint>, peak: f64) -> impl IntoView {
    if points.is_empty() {
        return view! { <div class="list-empty">"No sales in this period"</div> }.into_any();
    }
    view! {
        <div class="sales-chart">
            {points.into_iter().map(|point| {
                let height = format!("{:.1}%", bar_height(point.revenue, peak));
                let title = format!("{}: {} ({} orders)", format_date(&point.date), format_money(point.revenue), point.orders);
                view! {
                    <div class="sales-chart__column" title=title>
                        <div class="sales-chart__bar" style:height=height></div>
                        <div class="sales-chart__label">{point.date.get(5..).unwrap_or_default().to_string()}</div>
                    </div>
                }
            }).collect_view()}
        </div>
    }
    .into_any()
}

#[component]
fn RecentOrders(orders: Vec<RecentOrder>) -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    view! {
        <Table>
            <TableHeader>
                <TableRow>
                    <TableHeaderCell>"Order"</TableHeaderCell>
                    <TableHeaderCell>"Customer"</TableHeaderCell>
                    <TableHeaderCell>"Total"</TableHeaderCell>
                    <TableHeaderCell>"Status"</TableHeaderCell>
                    <TableHeaderCell>"Date"</TableHeaderCell>
                </TableRow>
            </TableHeader>
            <TableBody>
                {orders.into_iter().map(|order| {
                    let key = Orders::details_key(&order.id);
                    let title = detail_tab_label("Order", &order.id);
                    view! {
                        <TableRow>
                            <TableCell>
                                <a href="#" class="table__link" on:click=move |ev| {
                                    ev.prevent_default();
                                    ctx.open_tab(&key, &title);
                                }>{order.order_number.clone()}</a>
                            </TableCell>
                            <TableCell>{order.customer_name.clone()}</TableCell>
                            <TableCell>{format_money(order.total)}</TableCell>
                            <TableCell>{status_badge(order.status)}</TableCell>
                            <TableCell>{format_opt_date(order.created_at.as_deref())}</TableCell>
                        </TableRow>
                    }
                }).collect_view()}
            </TableBody>
        </Table>
    }
}

/// Headline figures, daily sales and the latest orders.
#[component]
pub fn OverviewDashboard() -> impl IntoView {
    let actions = PageActions::new();
    let realtime = use_realtime();
    let summary = RwSignal::new(None::<DashboardSummary>);
    let loading = RwSignal::new(false);
    let reload = RwSignal::new(0u32);

    // new orders and inquiries arrive over the realtime channel
    Effect::new(move |_| {
        reload.track();
        if let Some(realtime) = realtime {
            realtime.track(Orders::PATH);
            realtime.track(Inquiries::PATH);
        }
        loading.set(true);
        let token = actions.token();
        spawn_local(async move {
            let result = fetch_summary(&ApiClient::authorized(token.as_deref())).await;
            loading.try_set(false);
            match result {
                Ok(response) => {
                    summary.try_set(Some(response.data));
                }
                Err(err) => actions.report(err),
            }
        });
    });

    let figure = move |pick: fn(&DashboardSummary) -> String| {
        Signal::derive(move || summary.with(|s| s.as_ref().map(pick)))
    };

    view! {
        <PageFrame page_id="d400_overview--dashboard" category=PAGE_CAT_DASHBOARD>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">"Dashboard"</h1>
                </div>
                <div class="page__header-right">
                    <Button
                        appearance=ButtonAppearance::Secondary
                        disabled=Signal::derive(move || loading.get())
                        on_click=move |_| reload.update(|n| *n += 1)
                    >
                        {icon("refresh")}
                        " Refresh"
                    </Button>
                </div>
            </div>
            <div class="page__content">
                <div class="stat-grid">
                    <StatCard label="Revenue" icon_name="transactions" value=figure(|s| format_money(s.total_revenue)) />
                    <StatCard
                        label="Orders"
                        icon_name="orders"
                        value=figure(|s| s.total_orders.to_string())
                        subtitle=figure(|s| format!("{} pending", s.pending_orders))
                    />
                    <StatCard label="Average order" icon_name="orders" value=figure(|s| format_money(s.average_order_value())) />
                    <StatCard label="Customers" icon_name="customers" value=figure(|s| s.total_customers.to_string()) />
                    <StatCard
                        label="Products"
                        icon_name="products"
                        value=figure(|s| s.total_products.to_string())
                        subtitle=figure(|s| format!("{} low on stock", s.low_stock_products))
                        warning=Signal::derive(move || summary.with(|s| s.as_ref().is_some_and(|s| s.low_stock_products > 0)))
                    />
                    <StatCard
                        label="New inquiries"
                        icon_name="inquiries"
                        value=figure(|s| s.new_inquiries.to_string())
                        warning=Signal::derive(move || summary.with(|s| s.as_ref().is_some_and(|s| s.new_inquiries > 0)))
                    />
                </div>

                <Show when=move || loading.get() && summary.with(Option::is_none)>
                    <Flex justify=FlexJustify::Center>
                        <Spinner />
                    </Flex>
                </Show>

                {move || summary.get().map(|s| {
                    let peak = s.peak_revenue();
                    view! {
                        <section class="dashboard-section">
                            <h2>"Sales"</h2>
                            <SalesChart points=s.sales peak=peak />
                        </section>
                        <section class="dashboard-section">
                            <h2>"Recent orders"</h2>
                            <RecentOrders orders=s.recent_orders />
                        </section>
                    }
                })}
            </div>
        </PageFrame>
    }
}

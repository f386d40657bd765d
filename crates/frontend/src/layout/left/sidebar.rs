//! Sidebar menu with collapsible groups.

use leptos::prelude::*;

use crate::domain::a001_product::Products;
use crate::domain::a002_category::Categories;
use crate::domain::a003_order::Orders;
use crate::domain::a004_customer::Customers;
use crate::domain::a005_coupon::Coupons;
use crate::domain::a006_courier::Couriers;
use crate::domain::a007_staff::StaffMembers;
use crate::domain::a008_media::MediaLibrary;
use crate::domain::a009_blog::BlogPosts;
use crate::domain::a010_job::Jobs;
use crate::domain::a011_faq::Faqs;
use crate::domain::a012_newsletter::Subscribers;
use crate::domain::a013_product_review::Reviews;
use crate::domain::a014_transaction::Transactions;
use crate::domain::a015_inquiry::Inquiries;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::{tab_label_for_key, DASHBOARD_KEY};
use crate::shared::icons::icon;
use crate::shared::resource::Resource;
use crate::system::auth::context::use_session;

#[derive(Clone, Debug, PartialEq)]
struct MenuGroup {
    id: &'static str,
    label: &'static str,
    icon: &'static str,
    items: Vec<(&'static str, &'static str)>, // (tab key, icon)
    admin_only: bool,
}

fn menu_groups() -> Vec<MenuGroup> {
    vec![
        MenuGroup {
            id: DASHBOARD_KEY,
            label: tab_label_for_key(DASHBOARD_KEY),
            icon: "dashboard",
            items: vec![],
            admin_only: false,
        },
        MenuGroup {
            id: "catalog",
            label: "Catalog",
            icon: "products",
            items: vec![
                (Products::TAB_KEY, "products"),
                (Categories::TAB_KEY, "categories"),
                (Reviews::TAB_KEY, "reviews"),
                (MediaLibrary::TAB_KEY, "media"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "sales",
            label: "Sales",
            icon: "orders",
            items: vec![
                (Orders::TAB_KEY, "orders"),
                (Customers::TAB_KEY, "customers"),
                (Coupons::TAB_KEY, "coupons"),
                (Transactions::TAB_KEY, "transactions"),
                (Couriers::TAB_KEY, "couriers"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "content",
            label: "Content",
            icon: "blog",
            items: vec![
                (BlogPosts::TAB_KEY, "blog"),
                (Jobs::TAB_KEY, "jobs"),
                (Faqs::TAB_KEY, "faq"),
                (Subscribers::TAB_KEY, "newsletter"),
                (Inquiries::TAB_KEY, "inquiries"),
            ],
            admin_only: false,
        },
        MenuGroup {
            id: "administration",
            label: "Administration",
            icon: "staff",
            items: vec![(StaffMembers::TAB_KEY, "staff")],
            admin_only: true,
        },
    ]
}

#[component]
pub fn Sidebar() -> impl IntoView {
    let ctx = use_context::<AppGlobalContext>().expect("AppGlobalContext not found");
    let session = use_session();

    let expanded_groups = RwSignal::new(vec!["catalog", "sales"]);
    let is_active = move |key: &str| ctx.active.with(|a| a.as_deref() == Some(key));

    let render_group = move |group: MenuGroup| {
        let group_id = group.id;
        let has_children = !group.items.is_empty();
        let items = group.items;

        view! {
            <div>
                <div
                    class="app-sidebar__item"
                    class:app-sidebar__item--active=move || !has_children && is_active(group_id)
                    on:click=move |_| {
                        if has_children {
                            expanded_groups.update(|open| {
                                match open.iter().position(|id| *id == group_id) {
                                    Some(pos) => {
                                        open.remove(pos);
                                    }
                                    None => open.push(group_id),
                                }
                            });
                        } else {
                            ctx.open_tab(group_id, group.label);
                        }
                    }
                >
                    <div class="app-sidebar__item-content">
                        {icon(group.icon)}
                        <span>{group.label}</span>
                    </div>
                    {has_children.then(|| view! {
                        <div
                            class="app-sidebar__chevron"
                            class:app-sidebar__chevron--expanded=move || expanded_groups.with(|open| open.contains(&group_id))
                        >
                            {icon("chevron-right")}
                        </div>
                    })}
                </div>
                {has_children.then(|| view! {
                    <Show when=move || expanded_groups.with(|open| open.contains(&group_id))>
                        <div class="app-sidebar__children">
                            {items.iter().map(|&(key, icon_name)| {
                                let label = tab_label_for_key(key);
                                view! {
                                    <div
                                        class="app-sidebar__item"
                                        class:app-sidebar__item--active=move || is_active(key)
                                        on:click=move |_| ctx.open_tab(key, label)
                                    >
                                        <div class="app-sidebar__item-content">
                                            {icon(icon_name)}
                                            <span>{label}</span>
                                        </div>
                                    </div>
                                }
                            }).collect_view()}
                        </div>
                    </Show>
                })}
            </div>
        }
    };

    view! {
        <div class="app-sidebar__content">
            {move || {
                let admin = session.is_admin();
                menu_groups()
                    .into_iter()
                    .filter(|group| admin || !group.admin_only)
                    .map(render_group)
                    .collect_view()
            }}
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_menu_item_has_a_title() {
        for group in menu_groups() {
            for (key, _) in group.items {
                assert!(!tab_label_for_key(key).is_empty(), "no title for {}", key);
            }
        }
    }

    #[test]
    fn staff_is_admin_only() {
        let groups = menu_groups();
        let admin_keys: Vec<_> = groups
            .iter()
            .filter(|g| g.admin_only)
            .flat_map(|g| g.items.iter().map(|(key, _)| *key))
            .collect();
        assert_eq!(admin_keys, vec![StaffMembers::TAB_KEY]);
    }
}

//! Table page shared by every resource list.

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::hook::ResourceListState;
use super::service::ResourceService;
use super::{Resource, NEW_ID};
use crate::layout::global_context::AppGlobalContext;
use crate::layout::tabs::detail_tab_label;
use crate::shared::components::pagination_controls::PaginationControls;
use crate::shared::config::config;
use crate::shared::icons::icon;
use crate::shared::notifications::use_notifier;
use crate::shared::page_frame::PageFrame;
use crate::shared::page_standard::PAGE_CAT_LIST;
use crate::system::auth::context::use_session;

/// How an item is laid out as one table row.
pub trait ListRow {
    /// Column titles with their minimum widths.
    fn columns() -> Vec<(&'static str, f32)>;
    /// One view per column, same order as [`ListRow::columns`].
    fn cells(&self) -> Vec<AnyView>;
}

/// A select box that narrows the list by one query parameter.
#[derive(Clone)]
pub struct FilterSpec {
    pub key: &'static str,
    pub label: &'static str,
    /// `(value, label)`; an empty value means "all".
    pub options: Vec<(String, String)>,
}

impl FilterSpec {
    pub fn new(key: &'static str, label: &'static str) -> Self {
        Self {
            key,
            label,
            options: vec![(String::new(), "All".to_string())],
        }
    }

    pub fn option(mut self, value: &str, label: &str) -> Self {
        self.options.push((value.to_string(), label.to_string()));
        self
    }
}

pub struct ListOptions {
    pub page_id: &'static str,
    pub title: &'static str,
    /// `(field, label)` the search box may target; empty hides the box.
    pub search_fields: Vec<(&'static str, &'static str)>,
    pub filters: Vec<FilterSpec>,
    pub create_label: &'static str,
    pub on_create: Option<Callback<()>>,
    pub on_open: Option<Callback<String>>,
    pub deletable: bool,
    /// Extra header buttons (exports and the like).
    pub toolbar: Option<ViewFn>,
}

impl ListOptions {
    pub fn new(page_id: &'static str, title: &'static str) -> Self {
        Self {
            page_id,
            title,
            search_fields: Vec::new(),
            filters: Vec::new(),
            create_label: "New",
            on_create: None,
            on_open: None,
            deletable: false,
            toolbar: None,
        }
    }

    /// Rows open a details tab of `R`; `entity` names one record.
    pub fn with_viewer<R: Resource>(mut self, ctx: AppGlobalContext, entity: &'static str) -> Self {
        self.on_open = Some(Callback::new(move |id: String| {
            ctx.open_tab(&R::details_key(&id), &detail_tab_label(entity, &id))
        }));
        self
    }

    /// Like [`ListOptions::with_viewer`], plus a "New" button.
    pub fn with_details<R: Resource>(self, ctx: AppGlobalContext, entity: &'static str) -> Self {
        let mut options = self.with_viewer::<R>(ctx, entity);
        options.on_create = Some(Callback::new(move |_| {
            ctx.open_tab(&R::details_key(NEW_ID), &format!("New {}", entity.to_lowercase()))
        }));
        options
    }
}

/// Browser confirmation prompt; `false` when it cannot be shown.
pub fn confirm(message: &str) -> bool {
    web_sys::window()
        .and_then(|w| w.confirm_with_message(message).ok())
        .unwrap_or(false)
}

pub fn resource_list_view<R>(state: ResourceListState<R>, options: ListOptions) -> impl IntoView
where
    R: Resource,
    R::Item: ListRow,
{
    let session = use_session();
    let notifier = use_notifier();

    let ListOptions {
        page_id,
        title,
        search_fields,
        filters,
        create_label,
        on_create,
        on_open,
        deletable,
        toolbar,
    } = options;

    if let Some((first, _)) = search_fields.first() {
        if state.search_by.get_untracked().is_empty() {
            state.search_by.set(first.to_string());
        }
    }
    let search_input = RwSignal::new(state.search_term.get_untracked());
    let has_actions = on_open.is_some() || deletable;

    let delete = move |id: String| {
        if !confirm("Delete this record? This cannot be undone.") {
            return;
        }
        let token = session.token.get_untracked();
        spawn_local(async move {
            match ResourceService::<R>::browser(token.as_deref()).delete(&id).await {
                Ok(message) => {
                    let message = if message.is_empty() {
                        "Deleted".to_string()
                    } else {
                        message
                    };
                    notifier.success(message);
                    state.reload();
                }
                Err(err) if err.is_unauthorized() => session.logout(),
                Err(err) => notifier.error(err.message),
            }
        });
    };

    let search_box = (!search_fields.is_empty()).then(|| {
        let fields = search_fields.clone();
        view! {
            <form
                class="list-search"
                on:submit=move |ev| {
                    ev.prevent_default();
                    state.set_search(search_input.get_untracked());
                }
            >
                <Flex gap=FlexGap::Small align=FlexAlign::Center>
                    <select
                        class="form__select"
                        on:change=move |ev| state.set_search_by(event_target_value(&ev))
                        prop:value=move || state.search_by.get()
                    >
                        {fields
                            .iter()
                            .map(|(field, label)| {
                                view! { <option value=*field>{*label}</option> }
                            })
                            .collect_view()}
                    </select>
                    <Input value=search_input placeholder="Search..." />
                    <Button appearance=ButtonAppearance::Secondary>{icon("search")}</Button>
                </Flex>
            </form>
        }
    });

    let filter_boxes = filters
        .into_iter()
        .map(|spec| {
            let key = spec.key;
            view! {
                <label class="list-filter">
                    <span class="list-filter__label">{spec.label}</span>
                    <select
                        class="form__select"
                        on:change=move |ev| state.set_filter(key, &event_target_value(&ev))
                        prop:value=move || state.filter(key)
                    >
                        {spec
                            .options
                            .into_iter()
                            .map(|(value, label)| view! { <option value=value>{label}</option> })
                            .collect_view()}
                    </select>
                </label>
            }
        })
        .collect_view();

    let header_cells = R::Item::columns()
        .into_iter()
        .map(|(title, min_width)| {
            view! { <TableHeaderCell resizable=false min_width=min_width>{title}</TableHeaderCell> }
        })
        .collect_view();

    let rows = move || {
        state
            .items
            .get()
            .into_iter()
            .map(|item| {
                let id = R::item_id(&item);
                let id_for_open = id.clone();
                let id_for_delete = id;
                let cells = item
                    .cells()
                    .into_iter()
                    .map(|cell| {
                        view! {
                            <TableCell>
                                <TableCellLayout truncate=true>{cell}</TableCellLayout>
                            </TableCell>
                        }
                    })
                    .collect_view();
                let actions = has_actions.then(|| {
                    view! {
                        <TableCell>
                            <Flex gap=FlexGap::Small>
                                {on_open.map(|open| {
                                    let id = id_for_open.clone();
                                    view! {
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| open.run(id.clone())
                                        >
                                            {icon("edit")}
                                        </Button>
                                    }
                                })}
                                {deletable.then(|| {
                                    let id = id_for_delete.clone();
                                    view! {
                                        <Button
                                            size=ButtonSize::Small
                                            appearance=ButtonAppearance::Subtle
                                            on_click=move |_| delete(id.clone())
                                        >
                                            {icon("delete")}
                                        </Button>
                                    }
                                })}
                            </Flex>
                        </TableCell>
                    }
                });
                view! {
                    <TableRow>
                        {cells}
                        {actions}
                    </TableRow>
                }
            })
            .collect_view()
    };

    let page_sizes: Vec<usize> = config()
        .lists
        .page_size_options
        .iter()
        .map(|size| *size as usize)
        .collect();

    view! {
        <PageFrame page_id=page_id category=PAGE_CAT_LIST>
            <div class="page__header">
                <div class="page__header-left">
                    <h1 class="page__title">{title}</h1>
                </div>
                <div class="page__header-right">
                    <Space>
                        {toolbar.map(|toolbar| toolbar.run())}
                        {on_create.map(|create| view! {
                            <Button appearance=ButtonAppearance::Primary on_click=move |_| create.run(())>
                                {icon("plus")}
                                {format!(" {}", create_label)}
                            </Button>
                        })}
                        <Button appearance=ButtonAppearance::Secondary on_click=move |_| state.reload()>
                            {icon("refresh")}
                            " Refresh"
                        </Button>
                    </Space>
                </div>
            </div>

            <div class="page__content">
                <Flex gap=FlexGap::Medium align=FlexAlign::End class="list-toolbar">
                    {search_box}
                    {filter_boxes}
                </Flex>

                {move || state.error.get().map(|e| view! {
                    <div class="warning-box warning-box--error">
                        <span class="warning-box__icon">"⚠"</span>
                        <span class="warning-box__text">{e}</span>
                    </div>
                })}

                <Show when=move || state.loading.get()>
                    <Flex justify=FlexJustify::Center>
                        <Spinner />
                    </Flex>
                </Show>

                <Table attr:id=format!("{}-table", page_id)>
                    <TableHeader>
                        <TableRow>
                            {header_cells}
                            {has_actions.then(|| view! {
                                <TableHeaderCell resizable=false min_width=90.0>"Actions"</TableHeaderCell>
                            })}
                        </TableRow>
                    </TableHeader>
                    <TableBody>{rows}</TableBody>
                </Table>

                <Show when=move || !state.loading.get() && state.items.with(|items| items.is_empty())>
                    <div class="list-empty">"Nothing found"</div>
                </Show>

                <PaginationControls
                    current_page=Signal::derive(move || state.page.get().saturating_sub(1) as usize)
                    total_pages=Signal::derive(move || state.total_pages.get() as usize)
                    total_count=Signal::derive(move || state.total.get() as usize)
                    page_size=Signal::derive(move || state.limit.get() as usize)
                    on_page_change=Callback::new(move |page: usize| state.set_page(page as u32 + 1))
                    on_page_size_change=Callback::new(move |size: usize| state.set_limit(size as u32))
                    page_size_options=page_sizes
                />
            </div>
        </PageFrame>
    }
}

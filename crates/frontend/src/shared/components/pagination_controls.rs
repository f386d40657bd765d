use leptos::prelude::*;

use crate::shared::icons::icon;

/// "21-40 of 95" for a 0-based `page`; "0 results" for an empty list.
pub fn range_label(page: usize, page_size: usize, total: usize) -> String {
    if total == 0 || page_size == 0 {
        return "0 results".to_string();
    }
    let first = (page * page_size + 1).min(total);
    let last = ((page + 1) * page_size).min(total);
    format!("{}-{} of {}", first, last, total)
}

/// Target page of a navigation step, kept inside `0..total_pages`.
fn step(page: usize, delta: isize, total_pages: usize) -> usize {
    let last = total_pages.saturating_sub(1);
    page.saturating_add_signed(delta).min(last)
}

/// First/previous/next/last buttons and a page size selector.
#[component]
pub fn PaginationControls(
    /// 0-based.
    #[prop(into)]
    current_page: Signal<usize>,
    #[prop(into)] total_pages: Signal<usize>,
    #[prop(into)] total_count: Signal<usize>,
    #[prop(into)] page_size: Signal<usize>,
    on_page_change: Callback<usize>,
    on_page_size_change: Callback<usize>,
    #[prop(optional)] page_size_options: Option<Vec<usize>>,
) -> impl IntoView {
    let sizes = page_size_options.unwrap_or_else(|| vec![10, 25, 50, 100]);
    let fallback_size = sizes.first().copied().unwrap_or(10);

    let at_start = move || current_page.get() == 0;
    let at_end = move || current_page.get() + 1 >= total_pages.get();
    let go = move |delta: isize| {
        let target = step(current_page.get_untracked(), delta, total_pages.get_untracked());
        if target != current_page.get_untracked() {
            on_page_change.run(target);
        }
    };

    view! {
        <div class="pagination-controls">
            <button class="pagination-btn" title="First page" disabled=at_start on:click=move |_| go(isize::MIN)>
                {icon("chevrons-left")}
            </button>
            <button class="pagination-btn" title="Previous page" disabled=at_start on:click=move |_| go(-1)>
                {icon("chevron-left")}
            </button>
            <span class="pagination-info">
                {move || range_label(current_page.get(), page_size.get(), total_count.get())}
            </span>
            <button class="pagination-btn" title="Next page" disabled=at_end on:click=move |_| go(1)>
                {icon("chevron-right")}
            </button>
            <button class="pagination-btn" title="Last page" disabled=at_end on:click=move |_| go(isize::MAX)>
                {icon("chevrons-right")}
            </button>
            <select
                class="page-size-select"
                prop:value=move || page_size.get().to_string()
                on:change=move |ev| {
                    on_page_size_change.run(event_target_value(&ev).parse().unwrap_or(fallback_size))
                }
            >
                {sizes.into_iter().map(|size| view! {
                    <option value=size.to_string() selected=move || page_size.get() == size>
                        {size.to_string()}
                    </option>
                }).collect_view()}
            </select>
        </div>
    }
}

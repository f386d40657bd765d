//! CSV/XLSX export buttons for resource lists.

use leptos::prelude::*;
use leptos::task::spawn_local;
use thaw::*;

use super::details::PageActions;
use super::hook::ResourceListState;
use super::service::ResourceService;
use super::Resource;
use crate::shared::export::{export_csv, export_xlsx, Exportable};
use crate::shared::icons::icon;

/// Rows fetched per request while collecting an export.
const EXPORT_PAGE_SIZE: u32 = 500;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExportFormat {
    Csv,
    Xlsx,
}

/// `subscribers-2026-10-19.csv`.
pub fn export_filename(stem: &str, date: &str, format: ExportFormat) -> String {
    let ext = match format {
        ExportFormat::Csv => "csv",
        ExportFormat::Xlsx => "xlsx",
    };
    format!("{}-{}.{}", stem, date, ext)
}

/// Header buttons that export every item matching the list's current
/// search and filters, not just the visible page.
pub fn export_toolbar<R>(state: ResourceListState<R>, stem: &'static str, sheet: &'static str) -> ViewFn
where
    R: Resource,
    R::Item: Exportable,
{
    let actions = PageActions::new();
    let busy = RwSignal::new(false);

    let export = move |format: ExportFormat| {
        if busy.get_untracked() {
            return;
        }
        busy.set(true);
        let query = state.query_untracked();
        let token = actions.token();
        spawn_local(async move {
            let result = ResourceService::<R>::browser(token.as_deref())
                .fetch_every(&query, EXPORT_PAGE_SIZE)
                .await;
            busy.try_set(false);
            let items = match result {
                Ok(items) => items,
                Err(err) => {
                    actions.report(err);
                    return;
                }
            };
            let today = chrono::Local::now().format("%Y-%m-%d").to_string();
            let filename = export_filename(stem, &today, format);
            let written = match format {
                ExportFormat::Csv => export_csv(&items, &filename),
                ExportFormat::Xlsx => export_xlsx(&items, sheet, &filename),
            };
            match written {
                Ok(()) => {
                    log::info!("{}: exported {} rows to {}", R::PATH, items.len(), filename);
                    actions.notifier().success(format!("Exported {} rows", items.len()));
                }
                Err(message) => actions.notifier().error(message),
            }
        });
    };

    ViewFn::from(move || {
        view! {
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=Signal::derive(move || busy.get())
                on_click=move |_| export(ExportFormat::Csv)
            >
                {icon("download")}
                " CSV"
            </Button>
            <Button
                appearance=ButtonAppearance::Secondary
                disabled=Signal::derive(move || busy.get())
                on_click=move |_| export(ExportFormat::Xlsx)
            >
                {icon("download")}
                " Excel"
            </Button>
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filenames_carry_date_and_extension() {
        assert_eq!(
            export_filename("subscribers", "2026-10-19", ExportFormat::Csv),
            "subscribers-2026-10-19.csv"
        );
        assert_eq!(
            export_filename("transactions", "2026-10-19", ExportFormat::Xlsx),
            "transactions-2026-10-19.xlsx"
        );
    }
}

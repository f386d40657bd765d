use contracts::domain::a010_job::aggregate::{EmploymentType, Job, JobForm};
use leptos::prelude::*;

use crate::domain::a010_job::api;
use crate::domain::a010_job::Jobs;
use crate::shared::api_client::ApiClient;
use crate::shared::components::{enum_options, CheckboxField, SelectField, TextAreaField, TextField};
use crate::shared::form::{non_empty, FormBanner, FormState};
use crate::shared::resource::{DetailsFrame, PageActions};

#[component]
pub fn JobDetails(id: Option<String>, on_close: Callback<()>) -> impl IntoView {
    let actions = PageActions::new();
    let state = FormState::new(JobForm {
        is_active: true,
        ..Default::default()
    });
    let loading = RwSignal::new(false);
    let current = RwSignal::new(None::<Job>);

    if let Some(id) = id.clone() {
        actions.load::<Jobs>(id, loading, move |job| {
            state.reset(JobForm::from(&job));
            current.set(Some(job));
        });
    }

    let title = {
        let is_new = id.is_none();
        Signal::derive(move || {
            if is_new {
                "New job".to_string()
            } else {
                current.with(|j| j.as_ref().map(|j| j.title.clone()).unwrap_or_default())
            }
        })
    };

    let save = Callback::new(move |_| {
        let id = id.clone();
        actions.submit(
            state,
            move |token, form| async move {
                api::save_job(&ApiClient::authorized(token.as_deref()), id.as_deref(), &form).await
            },
            move |_| on_close.run(()),
        );
    });

    let type_options = Signal::derive(|| {
        enum_options(&EmploymentType::ALL, EmploymentType::as_str, EmploymentType::label)
    });

    view! {
        <DetailsFrame
            page_id="a010_job--detail"
            title=title
            loading=loading
            saving=state.saving
            on_save=save
            on_close=on_close
        >
            <div class="details-form details-form--wide">
                <FormBanner state=state />
                <TextField
                    state=state
                    field="title"
                    label="Title"
                    get=|f: &JobForm| f.title.clone()
                    set=|f: &mut JobForm, v| f.title = v
                />
                <div class="details-form__grid">
                    <TextField
                        state=state
                        field="department"
                        label="Department"
                        get=|f: &JobForm| f.department.clone()
                        set=|f: &mut JobForm, v| f.department = v
                    />
                    <TextField
                        state=state
                        field="location"
                        label="Location"
                        get=|f: &JobForm| f.location.clone()
                        set=|f: &mut JobForm, v| f.location = v
                    />
                    <SelectField
                        state=state
                        field="employment_type"
                        label="Employment type"
                        options=type_options
                        get=|f: &JobForm| f.employment_type.as_str().to_string()
                        set=|f: &mut JobForm, v: String| {
                            if let Some(kind) = EmploymentType::parse(&v) {
                                f.employment_type = kind;
                            }
                        }
                    />
                    <TextField
                        state=state
                        field="salary_range"
                        label="Salary range"
                        placeholder="Optional"
                        get=|f: &JobForm| f.salary_range.clone().unwrap_or_default()
                        set=|f: &mut JobForm, v| f.salary_range = non_empty(v)
                    />
                    <TextField
                        state=state
                        field="deadline"
                        label="Application deadline"
                        kind="date"
                        get=|f: &JobForm| f.deadline.clone()
                        set=|f: &mut JobForm, v| f.deadline = v
                    />
                </div>
                <TextAreaField
                    state=state
                    field="description"
                    label="Description"
                    rows=10
                    get=|f: &JobForm| f.description.clone()
                    set=|f: &mut JobForm, v| f.description = v
                />
                <CheckboxField
                    state=state
                    field="is_active"
                    label="Accepting applications"
                    get=|f: &JobForm| f.is_active
                    set=|f: &mut JobForm, v| f.is_active = v
                />
            </div>
        </DetailsFrame>
    }
}

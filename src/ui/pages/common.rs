use std::time::Duration;

use dioxus::prelude::*;
use rfd::{MessageButtons, MessageDialog, MessageDialogResult, MessageLevel};

use crate::domain::entities::page::Page;
use crate::domain::entities::resource::Resource;
use crate::error::AdminResult;
use crate::platform::desktop::blocking::{run_blocking, run_service};
use crate::ui::components::form::{BUTTON_STYLE, PRIMARY_BUTTON_STYLE};
use crate::ui::state::app_state::AppState;
use crate::ui::state::form_flow::{deleted, Outcome};
use crate::ui::state::navigation::{Screen, Section};
use crate::ui::state::search::RequestGeneration;
use crate::usecase::services::resource_service::ResourceService;

pub fn confirm_delete(label: &str) -> bool {
    MessageDialog::new()
        .set_level(MessageLevel::Warning)
        .set_title(format!("{label} 삭제"))
        .set_description("정말 삭제하시겠습니까? 삭제 후에는 되돌릴 수 없습니다.")
        .set_buttons(MessageButtons::YesNo)
        .show()
        == MessageDialogResult::Yes
}

/// Fetches one record in the background and passes it to `on_loaded`.
pub fn load_record<R, F>(state: AppState, service: ResourceService<R>, id: i64, on_loaded: F)
where
    R: Resource,
    F: FnOnce(R) + 'static,
{
    let mut busy = state.busy;
    busy.set(true);
    spawn(async move {
        let result = run_service("get-record", move || service.get(id)).await;
        busy.set(false);
        match result {
            Ok(record) => on_loaded(record),
            Err(err) => state.report(&err),
        }
    });
}

/// Runs a mutation in the background, toasts its outcome and follows any
/// navigation it asks for. `after` runs only on success.
pub fn run_mutation_then<F, A>(state: AppState, label: &'static str, build: F, after: A)
where
    F: FnOnce() -> Outcome + Send + 'static,
    A: FnOnce() + 'static,
{
    let mut busy = state.busy;
    busy.set(true);
    spawn(async move {
        let outcome = run_blocking(label, build)
            .await
            .unwrap_or_else(Outcome::failed);
        busy.set(false);

        state.notify(outcome.toast_level(), outcome.message());
        match &outcome {
            Outcome::Success { next: Some(screen), .. } => state.navigate(*screen),
            Outcome::Failure { relogin: true, .. } => {
                let mut logged_in = state.logged_in;
                logged_in.set(false);
                state.navigate(Screen::home());
            }
            _ => {}
        }
        if outcome.is_success() {
            after();
        }
    });
}

pub fn run_mutation<F>(state: AppState, label: &'static str, build: F)
where
    F: FnOnce() -> Outcome + Send + 'static,
{
    run_mutation_then(state, label, build, || {});
}

pub fn delete_record<R: Resource>(
    state: AppState,
    service: ResourceService<R>,
    section: Section,
    id: i64,
) {
    if !confirm_delete(section.label()) {
        return;
    }
    run_mutation(state, "delete-record", move || deleted(service.delete(id), section));
}

/// Fetches a list page after `debounce`. Every call supersedes the previous
/// one: a stale ticket neither fires nor writes its result.
pub fn schedule_fetch<R, F>(
    state: AppState,
    debounce: Duration,
    mut generation: Signal<RequestGeneration>,
    mut target: Signal<Page<R>>,
    fetch: F,
) where
    R: Send + 'static,
    F: FnOnce() -> AdminResult<Page<R>> + Send + 'static,
{
    let ticket = generation.write().issue();
    spawn(async move {
        if !debounce.is_zero() {
            tokio::time::sleep(debounce).await;
        }
        if !generation.read().is_current(ticket) {
            return;
        }
        let result = run_service("list-page", fetch).await;
        if !generation.read().is_current(ticket) {
            tracing::debug!("dropping superseded list response");
            return;
        }
        match result {
            Ok(page) => target.set(page),
            Err(err) => state.report(&err),
        }
    });
}

#[component]
pub fn PageHeader(
    title: String,
    #[props(default)] on_create: Option<EventHandler<()>>,
    #[props(default)] on_back: Option<EventHandler<()>>,
) -> Element {
    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: space-between; margin-bottom: 12px;",
            div {
                style: "display: flex; align-items: center; gap: 8px;",
                if let Some(on_back) = on_back {
                    button { style: BUTTON_STYLE, onclick: move |_| on_back.call(()), "← 목록" }
                }
                h2 { style: "margin: 0;", "{title}" }
            }
            if let Some(on_create) = on_create {
                button { style: PRIMARY_BUTTON_STYLE, onclick: move |_| on_create.call(()), "신규 등록" }
            }
        }
    }
}

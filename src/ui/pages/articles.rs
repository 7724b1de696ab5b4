use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::entities::article::{Article, ArticleKind};
use crate::domain::entities::page::{Page, PageRequest};
use crate::platform::desktop::blocking::run_service;
use crate::ui::components::form::{TextField, DANGER_BUTTON_STYLE, PRIMARY_BUTTON_STYLE};
use crate::ui::components::markdown_editor::MarkdownEditor;
use crate::ui::components::pagination::Pagination;
use crate::ui::components::resource_table::ResourceTable;
use crate::ui::pages::common::{confirm_delete, run_mutation, schedule_fetch, PageHeader};
use crate::ui::state::app_state::{AppState, Services};
use crate::ui::state::form_flow::{created, deleted, updated};
use crate::ui::state::format::display_timestamp;
use crate::ui::state::navigation::{Screen, Section};
use crate::ui::state::search::RequestGeneration;
use crate::ui::state::table_state::{build_table_view, ColumnSpec, TableRecord, TableState};
use crate::usecase::services::article_service::ArticleDraft;
use crate::usecase::services::upload_service::UploadScope;

impl TableRecord for Article {
    fn row_id(&self) -> i64 {
        self.id
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.to_string()),
            "title" => Some(self.title.clone()),
            "campaignId" => self.campaign_id.map(|id| id.to_string()),
            _ => None,
        }
    }
}

fn article_columns(kind: ArticleKind) -> Vec<ColumnSpec<Article>> {
    let mut columns = vec![
        ColumnSpec::new("id", "ID").width("70px"),
        ColumnSpec::new("title", "제목"),
    ];
    if kind.has_campaign() {
        columns.push(ColumnSpec::new("campaignId", "캠페인 ID").width("100px"));
    }
    columns.push(
        ColumnSpec::new("createdAt", "작성일")
            .width("150px")
            .render(|article: &Article| display_timestamp(article.created_at.as_deref())),
    );
    columns.push(
        ColumnSpec::new("updatedAt", "수정일")
            .width("150px")
            .render(|article: &Article| display_timestamp(article.updated_at.as_deref())),
    );
    columns
}

#[component]
pub fn ArticleList(kind: ArticleKind) -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let page_size = services.config.page_size;
    let section = Section::Articles(kind);

    let service = use_signal(|| services.articles(kind));
    let page = use_signal(Page::<Article>::empty);
    let generation = use_signal(RequestGeneration::default);
    let mut table = use_signal(|| TableState::with_filter_column("title"));

    let fetch = move |index: u32| {
        let service = service.peek().clone();
        let request = PageRequest::new(index, page_size);
        schedule_fetch(state, Duration::ZERO, generation, page, move || {
            service.list(&request)
        });
    };

    use_effect(move || fetch(0));

    let columns = article_columns(kind);
    let view = build_table_view(&columns, &page.read().content, &table.read());
    let meta = page.read().meta();
    let title = format!("{} 관리", section.label());

    rsx! {
        PageHeader {
            title,
            on_create: move |_| state.navigate(Screen::Create(section)),
        }
        ResourceTable {
            view,
            on_sort: move |key| table.write().toggle_sort(key),
            on_row_click: move |id| state.navigate(Screen::Detail(section, id)),
            on_toggle_column: move |(key, visible)| table.write().set_column_visible(key, visible),
            on_filter: move |text: String| table.write().set_filter_text(&text),
        }
        Pagination { meta, on_change: move |index| fetch(index) }
    }
}

/// Create and edit share one screen; `id` is `None` when creating.
#[component]
pub fn ArticleEditor(kind: ArticleKind, #[props(!optional)] id: Option<i64>) -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let section = Section::Articles(kind);

    let service = use_signal(|| services.articles(kind));
    let mut draft = use_signal(ArticleDraft::blank);
    let mut loaded = use_signal(|| id.is_none());

    use_effect(move || {
        let Some(id) = id else {
            return;
        };
        let service = service.peek().clone();
        let mut busy = state.busy;
        busy.set(true);
        spawn(async move {
            let result = run_service("load-article", move || service.load(id)).await;
            busy.set(false);
            match result {
                Ok(found) => {
                    draft.set(found);
                    loaded.set(true);
                }
                Err(err) => state.report(&err),
            }
        });
    });

    let heading = match id {
        Some(_) => format!("{} 수정", section.label()),
        None => format!("{} 작성", section.label()),
    };
    let back = move |_| state.navigate(Screen::List(section));
    if !loaded() {
        return rsx! {
            PageHeader { title: heading, on_back: back }
            p { style: "color: #888;", "불러오는 중..." }
        };
    }

    let current = draft();
    let submit_label = if id.is_some() { "저장" } else { "등록" };

    rsx! {
        PageHeader { title: heading, on_back: back }
        div {
            style: "display: flex; flex-direction: column; gap: 8px;",
            TextField {
                label: "제목",
                value: current.title,
                required: true,
                on_input: move |value| draft.write().title = value,
            }
            if kind.has_campaign() {
                TextField {
                    label: "캠페인 ID",
                    value: current.campaign_id,
                    required: true,
                    on_input: move |value| draft.write().campaign_id = value,
                }
            }
            MarkdownEditor {
                value: current.markdown,
                scope: UploadScope::Markdown,
                on_change: move |value| draft.write().markdown = value,
            }
            div {
                style: "display: flex; gap: 8px;",
                button {
                    style: PRIMARY_BUTTON_STYLE,
                    disabled: (state.busy)(),
                    onclick: move |_| {
                        let service = service.peek().clone();
                        let snapshot = draft();
                        match id {
                            Some(id) => {
                                run_mutation(state, "update-article", move || {
                                    updated(service.update(id, &snapshot), section)
                                });
                            }
                            None => {
                                run_mutation(state, "create-article", move || {
                                    created(service.create(&snapshot), section)
                                });
                            }
                        }
                    },
                    "{submit_label}"
                }
                if let Some(id) = id {
                    button {
                        style: DANGER_BUTTON_STYLE,
                        disabled: (state.busy)(),
                        onclick: move |_| {
                            if !confirm_delete(section.label()) {
                                return;
                            }
                            let service = service.peek().clone();
                            run_mutation(state, "delete-article", move || {
                                deleted(service.delete(id), section)
                            });
                        },
                        "삭제"
                    }
                }
            }
        }
    }
}

use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::entities::page::{Page, PageRequest};
use crate::domain::entities::user::{User, UserPatch, UserStatus};
use crate::ui::components::form::{
    InfoRow, TextField, DANGER_BUTTON_STYLE, INPUT_STYLE, PRIMARY_BUTTON_STYLE,
};
use crate::ui::components::pagination::Pagination;
use crate::ui::components::resource_table::ResourceTable;
use crate::ui::pages::common::{
    delete_record, load_record, run_mutation_then, schedule_fetch, PageHeader,
};
use crate::ui::state::app_state::{AppState, Services};
use crate::ui::state::form_flow::updated;
use crate::ui::state::format::{display_optional, display_timestamp};
use crate::ui::state::navigation::{Screen, Section};
use crate::ui::state::search::RequestGeneration;
use crate::ui::state::table_state::{build_table_view, ColumnSpec, TableRecord, TableState};
use crate::usecase::services::resource_service::ResourceService;

impl TableRecord for User {
    fn row_id(&self) -> i64 {
        self.id
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.to_string()),
            "email" => Some(self.email.clone()),
            "nickname" => Some(self.nickname.clone()),
            "phone" => self.phone.clone(),
            "memo" => self.memo.clone(),
            _ => None,
        }
    }
}

fn user_columns() -> Vec<ColumnSpec<User>> {
    vec![
        ColumnSpec::new("id", "ID").width("70px"),
        ColumnSpec::new("email", "이메일"),
        ColumnSpec::new("nickname", "닉네임"),
        ColumnSpec::new("phone", "연락처").width("140px"),
        ColumnSpec::new("role", "구분")
            .width("90px")
            .render(|user: &User| user.role.label().to_string()),
        ColumnSpec::new("status", "상태")
            .width("80px")
            .render(|user: &User| user.status.label().to_string()),
        ColumnSpec::new("createdAt", "가입일")
            .width("150px")
            .render(|user: &User| display_timestamp(user.created_at.as_deref())),
    ]
}

#[component]
pub fn UserList() -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let page_size = services.config.page_size;
    let debounce = services.config.search_debounce;

    let service = use_signal(|| services.users.clone());
    let page = use_signal(Page::<User>::empty);
    let mut keyword = use_signal(String::new);
    let generation = use_signal(RequestGeneration::default);
    let mut table = use_signal(|| TableState::with_filter_column("nickname"));

    let fetch = move |index: u32, delay: Duration| {
        let service = service.peek().clone();
        let request = PageRequest::new(index, page_size).filter("keyword", &keyword.peek());
        schedule_fetch(state, delay, generation, page, move || service.list(&request));
    };

    use_effect(move || fetch(0, Duration::ZERO));

    let columns = user_columns();
    let view = build_table_view(&columns, &page.read().content, &table.read());
    let meta = page.read().meta();

    rsx! {
        PageHeader { title: "회원 관리" }
        div {
            style: "margin-bottom: 8px;",
            input {
                style: "{INPUT_STYLE} max-width: 360px;",
                placeholder: "이메일 또는 닉네임 검색",
                value: "{keyword}",
                oninput: move |event| {
                    keyword.set(event.value());
                    fetch(0, debounce);
                },
            }
        }
        ResourceTable {
            view,
            on_sort: move |key| table.write().toggle_sort(key),
            on_row_click: move |id| state.navigate(Screen::Detail(Section::Users, id)),
            on_toggle_column: move |(key, visible)| table.write().set_column_visible(key, visible),
            on_filter: move |text: String| table.write().set_filter_text(&text),
        }
        Pagination { meta, on_change: move |index| fetch(index, Duration::ZERO) }
    }
}

fn refresh_user(
    state: AppState,
    service: ResourceService<User>,
    id: i64,
    mut user: Signal<Option<User>>,
    mut status: Signal<UserStatus>,
    mut memo: Signal<String>,
) {
    load_record(state, service, id, move |found: User| {
        status.set(found.status);
        memo.set(found.memo.clone().unwrap_or_default());
        user.set(Some(found));
    });
}

#[component]
pub fn UserDetail(id: i64) -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();

    let user = use_signal(|| None::<User>);
    let mut status = use_signal(|| UserStatus::Active);
    let mut memo = use_signal(String::new);

    let on_mount = services.clone();
    use_effect(move || refresh_user(state, on_mount.users.clone(), id, user, status, memo));

    let back = move |_| state.navigate(Screen::List(Section::Users));
    let Some(current) = user() else {
        return rsx! {
            PageHeader { title: "회원 상세", on_back: back }
            p { style: "color: #888;", "불러오는 중..." }
        };
    };

    let on_save = services.clone();
    let on_delete = services.clone();
    let selected = status();
    let status_options: Vec<(&'static str, &'static str, bool)> = UserStatus::SELECTABLE
        .into_iter()
        .map(|option| (option.as_str(), option.label(), option == selected))
        .collect();

    rsx! {
        PageHeader { title: "회원 상세", on_back: back }
        div {
            style: "max-width: 720px; display: flex; flex-direction: column; gap: 16px;",
            div {
                InfoRow { label: "ID", value: current.id.to_string() }
                InfoRow { label: "이메일", value: current.email.clone() }
                InfoRow { label: "닉네임", value: current.nickname.clone() }
                InfoRow { label: "연락처", value: display_optional(current.phone.as_deref()) }
                InfoRow { label: "구분", value: current.role.label().to_string() }
                InfoRow { label: "가입일", value: display_timestamp(current.created_at.as_deref()) }
            }
            label {
                style: "display: flex; flex-direction: column; gap: 4px;",
                span { style: "font-size: 13px; color: #555;", "상태" }
                select {
                    style: INPUT_STYLE,
                    value: selected.as_str(),
                    onchange: move |event| status.set(UserStatus::parse(&event.value())),
                    for (value, label, is_selected) in status_options {
                        option { key: "{value}", value: "{value}", selected: is_selected, "{label}" }
                    }
                }
            }
            TextField {
                label: "관리자 메모",
                value: memo(),
                multiline: true,
                on_input: move |value| memo.set(value),
            }
            div {
                style: "display: flex; gap: 8px;",
                button {
                    style: PRIMARY_BUTTON_STYLE,
                    disabled: (state.busy)(),
                    onclick: move |_| {
                        let patch = UserPatch {
                            status: status(),
                            memo: memo(),
                        };
                        let service = on_save.users.clone();
                        let reload = on_save.users.clone();
                        run_mutation_then(
                            state,
                            "update-user",
                            move || updated(service.partial_update(id, &patch), Section::Users),
                            move || refresh_user(state, reload, id, user, status, memo),
                        );
                    },
                    "저장"
                }
                button {
                    style: DANGER_BUTTON_STYLE,
                    disabled: (state.busy)(),
                    onclick: move |_| delete_record(state, on_delete.users.clone(), Section::Users, id),
                    "삭제"
                }
            }
        }
    }
}

use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::entities::company::{Company, CompanyForm, CompanyMemoPatch};
use crate::domain::entities::page::{Page, PageRequest};
use crate::ui::components::form::{
    InfoRow, TextField, BUTTON_STYLE, DANGER_BUTTON_STYLE, INPUT_STYLE, PRIMARY_BUTTON_STYLE,
};
use crate::ui::components::pagination::Pagination;
use crate::ui::components::resource_table::ResourceTable;
use crate::ui::pages::common::{
    delete_record, load_record, run_mutation, run_mutation_then, schedule_fetch, PageHeader,
};
use crate::ui::state::app_state::{AppState, Services};
use crate::ui::state::form_flow::{created, updated};
use crate::ui::state::format::display_timestamp;
use crate::ui::state::navigation::{Screen, Section};
use crate::ui::state::search::RequestGeneration;
use crate::ui::state::table_state::{build_table_view, ColumnSpec, TableRecord, TableState};
use crate::usecase::services::resource_service::ResourceService;

impl TableRecord for Company {
    fn row_id(&self) -> i64 {
        self.id
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.to_string()),
            "companyName" => Some(self.company_name.clone()),
            "businessRegistrationNumber" => self.business_registration_number.clone(),
            "representativeName" => self.representative_name.clone(),
            "contactPhone" => self.contact_phone.clone(),
            _ => None,
        }
    }
}

fn company_columns() -> Vec<ColumnSpec<Company>> {
    vec![
        ColumnSpec::new("id", "ID").width("70px"),
        ColumnSpec::new("companyName", "업체명"),
        ColumnSpec::new("businessRegistrationNumber", "사업자등록번호").width("150px"),
        ColumnSpec::new("representativeName", "대표자").width("110px"),
        ColumnSpec::new("contactPhone", "연락처").width("140px"),
        ColumnSpec::new("createdAt", "등록일")
            .width("150px")
            .render(|company: &Company| display_timestamp(company.created_at.as_deref())),
    ]
}

#[component]
pub fn CompanyList() -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let page_size = services.config.page_size;
    let debounce = services.config.search_debounce;

    let service = use_signal(|| services.companies.clone());
    let page = use_signal(Page::<Company>::empty);
    let mut keyword = use_signal(String::new);
    let generation = use_signal(RequestGeneration::default);
    let mut table = use_signal(|| TableState::with_filter_column("companyName"));

    let fetch = move |index: u32, delay: Duration| {
        let service = service.peek().clone();
        let request = PageRequest::new(index, page_size).filter("keyword", &keyword.peek());
        schedule_fetch(state, delay, generation, page, move || service.list(&request));
    };

    use_effect(move || fetch(0, Duration::ZERO));

    let columns = company_columns();
    let view = build_table_view(&columns, &page.read().content, &table.read());
    let meta = page.read().meta();

    rsx! {
        PageHeader {
            title: "업체 관리",
            on_create: move |_| state.navigate(Screen::Create(Section::Companies)),
        }
        div {
            style: "margin-bottom: 8px;",
            input {
                style: "{INPUT_STYLE} max-width: 360px;",
                placeholder: "업체명 또는 사업자등록번호 검색",
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
            on_row_click: move |id| state.navigate(Screen::Detail(Section::Companies, id)),
            on_toggle_column: move |(key, visible)| table.write().set_column_visible(key, visible),
            on_filter: move |text: String| table.write().set_filter_text(&text),
        }
        Pagination { meta, on_change: move |index| fetch(index, Duration::ZERO) }
    }
}

#[component]
fn CompanyFields(mut form: Signal<CompanyForm>) -> Element {
    let current = form();

    rsx! {
        TextField {
            label: "업체명",
            value: current.company_name,
            required: true,
            on_input: move |value| form.write().company_name = value,
        }
        TextField {
            label: "사업자등록번호",
            value: current.business_registration_number,
            required: true,
            on_input: move |value| form.write().business_registration_number = value,
        }
        TextField {
            label: "대표자명",
            value: current.representative_name,
            on_input: move |value| form.write().representative_name = value,
        }
        TextField {
            label: "연락처",
            value: current.contact_phone,
            on_input: move |value| form.write().contact_phone = value,
        }
    }
}

#[component]
pub fn CompanyCreate() -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let mut form = use_signal(CompanyForm::default);

    rsx! {
        PageHeader {
            title: "업체 등록",
            on_back: move |_| state.navigate(Screen::List(Section::Companies)),
        }
        div {
            style: "max-width: 720px;",
            CompanyFields { form }
            TextField {
                label: "관리자 메모",
                value: form().memo,
                multiline: true,
                on_input: move |value| form.write().memo = value,
            }
            button {
                style: PRIMARY_BUTTON_STYLE,
                disabled: (state.busy)(),
                onclick: move |_| {
                    let payload = form();
                    let service = services.companies.clone();
                    run_mutation(state, "create-company", move || {
                        created(service.create(&payload), Section::Companies)
                    });
                },
                "등록"
            }
        }
    }
}

fn refresh_company(
    state: AppState,
    service: ResourceService<Company>,
    id: i64,
    mut company: Signal<Option<Company>>,
    mut form: Signal<CompanyForm>,
    mut memo: Signal<String>,
) {
    load_record(state, service, id, move |found: Company| {
        form.set(CompanyForm::from_company(&found));
        memo.set(found.memo.clone().unwrap_or_default());
        company.set(Some(found));
    });
}

#[component]
pub fn CompanyDetail(id: i64) -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();

    let company = use_signal(|| None::<Company>);
    let form = use_signal(CompanyForm::default);
    let mut memo = use_signal(String::new);

    let on_mount = services.clone();
    use_effect(move || refresh_company(state, on_mount.companies.clone(), id, company, form, memo));

    let back = move |_| state.navigate(Screen::List(Section::Companies));
    let Some(current) = company() else {
        return rsx! {
            PageHeader { title: "업체 상세", on_back: back }
            p { style: "color: #888;", "불러오는 중..." }
        };
    };

    let on_save = services.clone();
    let on_memo = services.clone();
    let on_delete = services.clone();

    rsx! {
        PageHeader { title: "업체 상세", on_back: back }
        div {
            style: "max-width: 720px; display: flex; flex-direction: column; gap: 16px;",
            div {
                InfoRow { label: "ID", value: current.id.to_string() }
                InfoRow { label: "등록일", value: display_timestamp(current.created_at.as_deref()) }
            }
            div {
                CompanyFields { form }
                div {
                    style: "display: flex; gap: 8px;",
                    button {
                        style: PRIMARY_BUTTON_STYLE,
                        disabled: (state.busy)(),
                        onclick: move |_| {
                            let mut payload = form();
                            payload.memo = memo();
                            let service = on_save.companies.clone();
                            let reload = on_save.companies.clone();
                            run_mutation_then(
                                state,
                                "update-company",
                                move || updated(service.update(id, &payload), Section::Companies),
                                move || refresh_company(state, reload, id, company, form, memo),
                            );
                        },
                        "정보 저장"
                    }
                    button {
                        style: DANGER_BUTTON_STYLE,
                        disabled: (state.busy)(),
                        onclick: move |_| delete_record(state, on_delete.companies.clone(), Section::Companies, id),
                        "삭제"
                    }
                }
            }
            div {
                TextField {
                    label: "관리자 메모",
                    value: memo(),
                    multiline: true,
                    on_input: move |value| memo.set(value),
                }
                button {
                    style: BUTTON_STYLE,
                    disabled: (state.busy)(),
                    onclick: move |_| {
                        let patch = CompanyMemoPatch { memo: memo() };
                        let service = on_memo.companies.clone();
                        run_mutation(state, "update-company-memo", move || {
                            updated(service.partial_update(id, &patch), Section::Companies)
                        });
                    },
                    "메모 저장"
                }
            }
        }
    }
}

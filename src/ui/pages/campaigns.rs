use std::time::Duration;

use dioxus::prelude::*;

use crate::domain::entities::campaign::{ApprovalPatch, ApprovalStatus, Campaign, CampaignForm};
use crate::domain::entities::page::{Page, PageRequest};
use crate::ui::components::form::{
    InfoRow, TextField, BUTTON_STYLE, DANGER_BUTTON_STYLE, PRIMARY_BUTTON_STYLE,
};
use crate::ui::components::pagination::Pagination;
use crate::ui::components::resource_table::ResourceTable;
use crate::ui::components::image_upload::pick_and_upload;
use crate::ui::pages::common::{
    delete_record, load_record, run_mutation, run_mutation_then, schedule_fetch, PageHeader,
};
use crate::ui::state::app_state::{AppState, Services};
use crate::ui::state::form_flow::{created, updated};
use crate::ui::state::format::{display_optional, display_timestamp};
use crate::ui::state::navigation::{Screen, Section};
use crate::ui::state::search::RequestGeneration;
use crate::ui::state::table_state::{build_table_view, ColumnSpec, TableRecord, TableState};
use crate::usecase::services::resource_service::ResourceService;
use crate::usecase::services::upload_service::UploadScope;

impl TableRecord for Campaign {
    fn row_id(&self) -> i64 {
        self.id
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.to_string()),
            "title" => Some(self.title.clone()),
            "campaignType" => self.campaign_type.clone(),
            "category" => self.category.clone(),
            "company" => self.company.as_ref().map(|company| company.company_name.clone()),
            _ => None,
        }
    }
}

fn applicants(campaign: &Campaign) -> String {
    match (campaign.current_applicants, campaign.max_applicants) {
        (Some(current), Some(max)) => format!("{current} / {max}"),
        (None, Some(max)) => format!("0 / {max}"),
        (Some(current), None) => current.to_string(),
        (None, None) => "-".to_string(),
    }
}

fn recruitment_period(campaign: &Campaign) -> String {
    format!(
        "{} ~ {}",
        display_timestamp(campaign.recruitment_start_date.as_deref()),
        display_timestamp(campaign.recruitment_end_date.as_deref())
    )
}

fn campaign_columns() -> Vec<ColumnSpec<Campaign>> {
    vec![
        ColumnSpec::new("id", "ID").width("70px"),
        ColumnSpec::new("title", "캠페인명"),
        ColumnSpec::new("company", "업체"),
        ColumnSpec::new("campaignType", "유형").width("100px"),
        ColumnSpec::new("category", "카테고리").width("100px"),
        ColumnSpec::new("approvalStatus", "승인상태")
            .width("90px")
            .render(|campaign: &Campaign| campaign.approval_status.label().to_string()),
        ColumnSpec::new("recruitment", "모집기간")
            .width("200px")
            .render(recruitment_period),
        ColumnSpec::new("applicants", "신청/정원")
            .width("90px")
            .render(applicants),
    ]
}

fn filter_button_style(active: bool) -> &'static str {
    if active {
        PRIMARY_BUTTON_STYLE
    } else {
        BUTTON_STYLE
    }
}

#[component]
pub fn CampaignList() -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let page_size = services.config.page_size;

    let service = use_signal(|| services.campaigns.clone());
    let page = use_signal(Page::<Campaign>::empty);
    let mut approval = use_signal(|| None::<ApprovalStatus>);
    let generation = use_signal(RequestGeneration::default);
    let mut table = use_signal(|| TableState::with_filter_column("title"));

    let fetch = move |index: u32| {
        let service = service.peek().clone();
        let mut request = PageRequest::new(index, page_size);
        if let Some(status) = *approval.peek() {
            request = request.filter("approvalStatus", status.as_str());
        }
        schedule_fetch(state, Duration::ZERO, generation, page, move || {
            service.list(&request)
        });
    };

    use_effect(move || fetch(0));

    let columns = campaign_columns();
    let view = build_table_view(&columns, &page.read().content, &table.read());
    let meta = page.read().meta();
    let active = approval();
    let filters: Vec<(Option<ApprovalStatus>, &'static str, &'static str)> =
        std::iter::once(None)
            .chain(ApprovalStatus::ALL.into_iter().map(Some))
            .map(|status| {
                (
                    status,
                    status.map(ApprovalStatus::label).unwrap_or("전체"),
                    filter_button_style(status == active),
                )
            })
            .collect();

    rsx! {
        PageHeader {
            title: "캠페인 관리",
            on_create: move |_| state.navigate(Screen::Create(Section::Campaigns)),
        }
        div {
            style: "display: flex; gap: 6px; margin-bottom: 8px;",
            for (status, label, style) in filters {
                button {
                    key: "{label}",
                    style: "{style}",
                    onclick: move |_| {
                        approval.set(status);
                        fetch(0);
                    },
                    "{label}"
                }
            }
        }
        ResourceTable {
            view,
            on_sort: move |key| table.write().toggle_sort(key),
            on_row_click: move |id| state.navigate(Screen::Detail(Section::Campaigns, id)),
            on_toggle_column: move |(key, visible)| table.write().set_column_visible(key, visible),
            on_filter: move |text: String| table.write().set_filter_text(&text),
        }
        Pagination { meta, on_change: move |index| fetch(index) }
    }
}

#[component]
fn CampaignFields(mut form: Signal<CampaignForm>) -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let current = form();
    let has_thumbnail = !current.thumbnail_url.trim().is_empty();
    let thumbnail = current.thumbnail_url.clone();

    rsx! {
        TextField {
            label: "캠페인명",
            value: current.title,
            required: true,
            on_input: move |value| form.write().title = value,
        }
        div {
            style: "display: flex; align-items: center; gap: 12px; margin-bottom: 10px;",
            if has_thumbnail {
                img {
                    src: "{thumbnail}",
                    style: "width: 96px; height: 96px; object-fit: cover; border-radius: 6px; border: 1px solid #eee;",
                }
            }
            button {
                style: BUTTON_STYLE,
                disabled: (state.busy)(),
                onclick: move |_| {
                    pick_and_upload(state, services.uploads.clone(), UploadScope::Campaign, move |image| {
                        form.write().thumbnail_url = image.url;
                    });
                },
                "썸네일 업로드"
            }
        }
        div {
            style: "display: grid; grid-template-columns: 1fr 1fr; column-gap: 12px;",
            TextField {
                label: "캠페인 유형",
                value: current.campaign_type,
                required: true,
                on_input: move |value| form.write().campaign_type = value,
            }
            TextField {
                label: "카테고리",
                value: current.category,
                on_input: move |value| form.write().category = value,
            }
            TextField {
                label: "모집 시작일",
                value: current.recruitment_start_date,
                required: true,
                on_input: move |value| form.write().recruitment_start_date = value,
            }
            TextField {
                label: "모집 종료일",
                value: current.recruitment_end_date,
                required: true,
                on_input: move |value| form.write().recruitment_end_date = value,
            }
            TextField {
                label: "모집 인원",
                value: current.max_applicants,
                on_input: move |value| form.write().max_applicants = value,
            }
            TextField {
                label: "업체 ID",
                value: current.company_id,
                required: true,
                on_input: move |value| form.write().company_id = value,
            }
        }
        h4 { style: "margin: 12px 0 6px;", "미션" }
        TextField {
            label: "미션 제목",
            value: current.mission_title,
            on_input: move |value| form.write().mission_title = value,
        }
        TextField {
            label: "키워드 (쉼표로 구분)",
            value: current.mission_keywords,
            on_input: move |value| form.write().mission_keywords = value,
        }
        TextField {
            label: "미션 가이드",
            value: current.mission_guide,
            multiline: true,
            on_input: move |value| form.write().mission_guide = value,
        }
        h4 { style: "margin: 12px 0 6px;", "위치" }
        TextField {
            label: "주소",
            value: current.address,
            on_input: move |value| form.write().address = value,
        }
        TextField {
            label: "상세 주소",
            value: current.detail_address,
            on_input: move |value| form.write().detail_address = value,
        }
        div {
            style: "display: grid; grid-template-columns: 1fr 1fr; column-gap: 12px;",
            TextField {
                label: "위도",
                value: current.latitude,
                on_input: move |value| form.write().latitude = value,
            }
            TextField {
                label: "경도",
                value: current.longitude,
                on_input: move |value| form.write().longitude = value,
            }
        }
    }
}

#[component]
pub fn CampaignCreate() -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let form = use_signal(CampaignForm::default);

    rsx! {
        PageHeader {
            title: "캠페인 등록",
            on_back: move |_| state.navigate(Screen::List(Section::Campaigns)),
        }
        div {
            style: "max-width: 760px;",
            CampaignFields { form }
            button {
                style: PRIMARY_BUTTON_STYLE,
                disabled: (state.busy)(),
                onclick: move |_| {
                    let payload = form();
                    let service = services.campaigns.clone();
                    run_mutation(state, "create-campaign", move || {
                        created(service.create(&payload), Section::Campaigns)
                    });
                },
                "등록"
            }
        }
    }
}

fn refresh_campaign(
    state: AppState,
    service: ResourceService<Campaign>,
    id: i64,
    mut campaign: Signal<Option<Campaign>>,
    mut form: Signal<CampaignForm>,
) {
    load_record(state, service, id, move |found: Campaign| {
        form.set(CampaignForm::from_campaign(&found));
        campaign.set(Some(found));
    });
}

#[component]
pub fn CampaignDetail(id: i64) -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();

    let campaign = use_signal(|| None::<Campaign>);
    let form = use_signal(CampaignForm::default);

    let on_mount = services.clone();
    use_effect(move || refresh_campaign(state, on_mount.campaigns.clone(), id, campaign, form));

    let back = move |_| state.navigate(Screen::List(Section::Campaigns));
    let Some(current) = campaign() else {
        return rsx! {
            PageHeader { title: "캠페인 상세", on_back: back }
            p { style: "color: #888;", "불러오는 중..." }
        };
    };

    let on_approval = services.clone();
    let on_save = services.clone();
    let on_delete = services.clone();
    let company_name = current
        .company
        .as_ref()
        .map(|company| company.company_name.clone())
        .unwrap_or_else(|| "-".to_string());
    let approval_actions: Vec<(ApprovalStatus, &'static str, &'static str)> = ApprovalStatus::ALL
        .into_iter()
        .filter(|status| *status != current.approval_status)
        .map(|status| {
            let style = if status == ApprovalStatus::Rejected {
                DANGER_BUTTON_STYLE
            } else {
                BUTTON_STYLE
            };
            (status, status.label(), style)
        })
        .collect();

    rsx! {
        PageHeader { title: "캠페인 상세", on_back: back }
        div {
            style: "max-width: 760px; display: flex; flex-direction: column; gap: 16px;",
            div {
                InfoRow { label: "ID", value: current.id.to_string() }
                InfoRow { label: "업체", value: company_name }
                InfoRow { label: "승인상태", value: current.approval_status.label().to_string() }
                InfoRow { label: "신청/정원", value: applicants(&current) }
                InfoRow { label: "모집기간", value: recruitment_period(&current) }
                InfoRow { label: "카테고리", value: display_optional(current.category.as_deref()) }
                InfoRow { label: "등록일", value: display_timestamp(current.created_at.as_deref()) }
            }
            div {
                style: "display: flex; gap: 8px; align-items: center;",
                span { style: "color: #555;", "승인상태 변경" }
                for (status, label, style) in approval_actions {
                    button {
                        key: "{label}",
                        style: "{style}",
                        disabled: (state.busy)(),
                        onclick: {
                            let campaigns = on_approval.campaigns.clone();
                            move |_| {
                                let patch = ApprovalPatch { approval_status: status };
                                let service = campaigns.clone();
                                let reload = campaigns.clone();
                                run_mutation_then(
                                    state,
                                    "update-campaign-approval",
                                    move || updated(service.partial_update(id, &patch), Section::Campaigns),
                                    move || refresh_campaign(state, reload, id, campaign, form),
                                );
                            }
                        },
                        "{label}"
                    }
                }
            }
            div {
                CampaignFields { form }
                div {
                    style: "display: flex; gap: 8px;",
                    button {
                        style: PRIMARY_BUTTON_STYLE,
                        disabled: (state.busy)(),
                        onclick: move |_| {
                            let payload = form();
                            let service = on_save.campaigns.clone();
                            let reload = on_save.campaigns.clone();
                            run_mutation_then(
                                state,
                                "update-campaign",
                                move || updated(service.update(id, &payload), Section::Campaigns),
                                move || refresh_campaign(state, reload, id, campaign, form),
                            );
                        },
                        "저장"
                    }
                    button {
                        style: DANGER_BUTTON_STYLE,
                        disabled: (state.busy)(),
                        onclick: move |_| delete_record(state, on_delete.campaigns.clone(), Section::Campaigns, id),
                        "삭제"
                    }
                }
            }
        }
    }
}

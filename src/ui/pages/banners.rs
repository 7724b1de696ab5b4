use dioxus::prelude::*;

use crate::domain::entities::banner::{sort_by_display_order, Banner, BannerForm};
use crate::platform::desktop::blocking::run_service;
use crate::ui::components::form::{
    InfoRow, TextField, BUTTON_STYLE, DANGER_BUTTON_STYLE, PRIMARY_BUTTON_STYLE,
};
use crate::ui::components::image_upload::pick_and_upload;
use crate::ui::components::resource_table::{table_container_style, table_header_cell_style};
use crate::ui::pages::common::{
    delete_record, load_record, run_mutation, run_mutation_then, PageHeader,
};
use crate::ui::state::app_state::{AppState, Services};
use crate::ui::state::form_flow::{created, updated};
use crate::ui::state::format::display_optional;
use crate::ui::state::navigation::{Screen, Section};
use crate::ui::state::toast::ToastLevel;
use crate::usecase::services::banner_order_service::stage;
use crate::usecase::services::resource_service::ResourceService;
use crate::usecase::services::upload_service::UploadScope;

fn load_banners(state: AppState, service: ResourceService<Banner>, mut banners: Signal<Vec<Banner>>) {
    let mut busy = state.busy;
    busy.set(true);
    spawn(async move {
        let result = run_service("list-banners", move || service.list_all()).await;
        busy.set(false);
        match result {
            Ok(mut loaded) => {
                sort_by_display_order(&mut loaded);
                banners.set(loaded);
            }
            Err(err) => state.report(&err),
        }
    });
}

fn row_style(dragging: bool, target: bool) -> &'static str {
    match (dragging, target) {
        (true, _) => "opacity: 0.4; border-bottom: 1px solid #f0f0f0; cursor: grabbing;",
        (false, true) => "border-top: 2px solid #4c6ef5; border-bottom: 1px solid #f0f0f0; cursor: grab;",
        (false, false) => "border-bottom: 1px solid #f0f0f0; cursor: grab;",
    }
}

/// Banners are shown unpaged in display order. Dragging a row onto another
/// shows the renumbered order at once and saves it in the background; a
/// failed save puts the previous order back.
#[component]
pub fn BannerList() -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();

    let mut banners = use_signal(Vec::<Banner>::new);
    let mut drag_from = use_signal(|| None::<usize>);
    let mut drag_over = use_signal(|| None::<usize>);

    let order_service = use_signal(|| services.banner_order.clone());
    use_effect(move || load_banners(state, services.banners.clone(), banners));

    let mut drop_at = move |to: usize| {
        let from = *drag_from.peek();
        drag_from.set(None);
        drag_over.set(None);
        let Some(from) = from else {
            return;
        };
        if *state.busy.peek() {
            return;
        }
        let mut reordered = banners.peek().clone();
        let Some(staged) = stage(&mut reordered, from, to) else {
            return;
        };
        banners.set(reordered);

        let service = order_service.peek().clone();
        let payload = staged.payload().to_vec();
        let mut busy = state.busy;
        busy.set(true);
        spawn(async move {
            let result = run_service("reorder-banners", move || service.commit(&payload)).await;
            busy.set(false);
            match result {
                Ok(_) => state.notify(ToastLevel::Success, "배너 순서가 저장되었습니다."),
                Err(err) => {
                    tracing::warn!(error = %err, from, to, "banner reorder rolled back");
                    banners.set(staged.rollback());
                    state.report(&err);
                }
            }
        });
    };

    let dragging = drag_from();
    let target = drag_over();
    let rows: Vec<(usize, i64, Banner, &'static str)> = banners
        .read()
        .iter()
        .cloned()
        .enumerate()
        .map(|(idx, banner)| {
            let style = row_style(dragging == Some(idx), target == Some(idx) && dragging != Some(idx));
            (idx, banner.id, banner, style)
        })
        .collect();
    let is_empty = rows.is_empty();
    let header_style = table_header_cell_style();

    rsx! {
        PageHeader {
            title: "배너 관리",
            on_create: move |_| state.navigate(Screen::Create(Section::Banners)),
        }
        p { style: "margin: 0 0 8px; color: #777; font-size: 13px;", "행을 끌어서 노출 순서를 변경할 수 있습니다." }
        div {
            style: table_container_style(),
            table {
                style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                thead {
                    tr {
                        th { style: "{header_style} width: 70px;", "순서" }
                        th { style: "{header_style} width: 140px;", "이미지" }
                        th { style: "{header_style}", "제목" }
                        th { style: "{header_style} width: 120px;", "위치" }
                        th { style: "{header_style}", "이동 링크" }
                    }
                }
                tbody {
                    if is_empty {
                        tr {
                            td {
                                colspan: "5",
                                style: "padding: 24px; text-align: center; color: #888;",
                                "등록된 배너가 없습니다."
                            }
                        }
                    }
                    for (idx, banner_id, banner, style) in rows {
                        tr {
                            key: "{banner_id}",
                            style: "{style}",
                            draggable: "true",
                            ondragstart: move |_| {
                                if !*state.busy.peek() {
                                    drag_from.set(Some(idx));
                                }
                            },
                            ondragover: move |event| {
                                event.prevent_default();
                                if drag_over() != Some(idx) {
                                    drag_over.set(Some(idx));
                                }
                            },
                            ondragend: move |_| {
                                drag_from.set(None);
                                drag_over.set(None);
                            },
                            ondrop: move |event| {
                                event.prevent_default();
                                drop_at(idx);
                            },
                            onclick: move |_| state.navigate(Screen::Detail(Section::Banners, banner_id)),
                            td { style: "padding: 8px 10px;", "{banner.display_order}" }
                            td {
                                style: "padding: 6px 10px;",
                                img {
                                    src: "{banner.banner_url}",
                                    style: "width: 120px; height: 48px; object-fit: cover; border-radius: 4px;",
                                    draggable: "false",
                                }
                            }
                            td { style: "padding: 8px 10px;", "{banner.title}" }
                            td { style: "padding: 8px 10px;", {display_optional(banner.position.as_deref())} }
                            td {
                                style: "padding: 8px 10px; max-width: 280px; overflow: hidden; text-overflow: ellipsis; white-space: nowrap;",
                                {display_optional(banner.redirect_url.as_deref())}
                            }
                        }
                    }
                }
            }
        }
    }
}

#[component]
fn BannerFields(mut form: Signal<BannerForm>) -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let current = form();
    let has_image = !current.banner_url.trim().is_empty();
    let image = current.banner_url.clone();

    rsx! {
        TextField {
            label: "배너 제목",
            value: current.title,
            required: true,
            on_input: move |value| form.write().title = value,
        }
        div {
            style: "display: flex; flex-direction: column; gap: 6px; margin-bottom: 10px;",
            span {
                style: "font-size: 13px; color: #555;",
                "배너 이미지"
                span { style: "color: #d92d20;", " *" }
            }
            if has_image {
                img {
                    src: "{image}",
                    style: "max-width: 480px; max-height: 160px; object-fit: contain; border: 1px solid #eee; border-radius: 6px;",
                }
            }
            div {
                button {
                    style: BUTTON_STYLE,
                    disabled: (state.busy)(),
                    onclick: move |_| {
                        pick_and_upload(state, services.uploads.clone(), UploadScope::Banner, move |image| {
                            form.write().banner_url = image.url;
                        });
                    },
                    if has_image { "이미지 변경" } else { "이미지 업로드" }
                }
            }
        }
        TextField {
            label: "이동 링크",
            value: current.redirect_url,
            on_input: move |value| form.write().redirect_url = value,
        }
        TextField {
            label: "노출 위치",
            value: current.position,
            on_input: move |value| form.write().position = value,
        }
        TextField {
            label: "설명",
            value: current.description,
            multiline: true,
            on_input: move |value| form.write().description = value,
        }
    }
}

#[component]
pub fn BannerCreate() -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let form = use_signal(BannerForm::default);

    rsx! {
        PageHeader {
            title: "배너 등록",
            on_back: move |_| state.navigate(Screen::List(Section::Banners)),
        }
        div {
            style: "max-width: 720px;",
            BannerFields { form }
            button {
                style: PRIMARY_BUTTON_STYLE,
                disabled: (state.busy)(),
                onclick: move |_| {
                    let payload = form();
                    let service = services.banners.clone();
                    run_mutation(state, "create-banner", move || {
                        created(service.create(&payload), Section::Banners)
                    });
                },
                "등록"
            }
        }
    }
}

fn refresh_banner(
    state: AppState,
    service: ResourceService<Banner>,
    id: i64,
    mut banner: Signal<Option<Banner>>,
    mut form: Signal<BannerForm>,
) {
    load_record(state, service, id, move |found: Banner| {
        form.set(BannerForm::from_banner(&found));
        banner.set(Some(found));
    });
}

#[component]
pub fn BannerDetail(id: i64) -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();

    let banner = use_signal(|| None::<Banner>);
    let form = use_signal(BannerForm::default);

    let on_mount = services.clone();
    use_effect(move || refresh_banner(state, on_mount.banners.clone(), id, banner, form));

    let back = move |_| state.navigate(Screen::List(Section::Banners));
    let Some(current) = banner() else {
        return rsx! {
            PageHeader { title: "배너 상세", on_back: back }
            p { style: "color: #888;", "불러오는 중..." }
        };
    };

    let on_save = services.clone();
    let on_delete = services.clone();

    rsx! {
        PageHeader { title: "배너 상세", on_back: back }
        div {
            style: "max-width: 720px; display: flex; flex-direction: column; gap: 16px;",
            div {
                InfoRow { label: "ID", value: current.id.to_string() }
                InfoRow { label: "노출 순서", value: current.display_order.to_string() }
            }
            div {
                BannerFields { form }
                div {
                    style: "display: flex; gap: 8px;",
                    button {
                        style: PRIMARY_BUTTON_STYLE,
                        disabled: (state.busy)(),
                        onclick: move |_| {
                            let payload = form();
                            let service = on_save.banners.clone();
                            let reload = on_save.banners.clone();
                            run_mutation_then(
                                state,
                                "update-banner",
                                move || updated(service.update(id, &payload), Section::Banners),
                                move || refresh_banner(state, reload, id, banner, form),
                            );
                        },
                        "저장"
                    }
                    button {
                        style: DANGER_BUTTON_STYLE,
                        disabled: (state.busy)(),
                        onclick: move |_| delete_record(state, on_delete.banners.clone(), Section::Banners, id),
                        "삭제"
                    }
                }
            }
        }
    }
}

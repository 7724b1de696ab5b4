use dioxus::prelude::*;

use crate::domain::entities::page::SortDirection;
use crate::ui::state::table_state::{TableBody, TableRow, TableView};

pub fn table_container_style() -> &'static str {
    "flex: 1; min-height: 0; overflow: auto; border: 1px solid #e2e2e2; border-radius: 8px;"
}

pub fn table_header_cell_style() -> &'static str {
    "position: sticky; top: 0; z-index: 10; background: #f6f7f9; text-align: left; padding: 8px 10px; border-bottom: 1px solid #ddd; cursor: pointer; user-select: none; white-space: nowrap;"
}

fn sort_marker(direction: Option<SortDirection>) -> &'static str {
    match direction {
        Some(SortDirection::Asc) => " ▲",
        Some(SortDirection::Desc) => " ▼",
        None => "",
    }
}

#[component]
fn ColumnVisibilityDropdown(
    view: TableView,
    on_toggle: EventHandler<(&'static str, bool)>,
) -> Element {
    let mut open = use_signal(|| false);

    rsx! {
        div {
            style: "position: relative; display: inline-block;",
            button {
                style: "border: 1px solid #bbb; background: #fff; padding: 4px 10px; border-radius: 6px; cursor: pointer;",
                onclick: move |event| {
                    event.stop_propagation();
                    let next = !open();
                    open.set(next);
                },
                "표시 컬럼"
            }
            if open() {
                div {
                    style: "position: absolute; right: 0; top: 32px; min-width: 180px; max-height: 320px; overflow-y: auto; background: #fff; border: 1px solid #bbb; border-radius: 8px; box-shadow: 0 10px 24px rgba(0,0,0,0.15); z-index: 1200; padding: 6px;",
                    onclick: move |event| event.stop_propagation(),
                    for toggle in view.toggles.iter().cloned() {
                        label {
                            key: "{toggle.key}",
                            style: "display: flex; align-items: center; gap: 8px; padding: 6px 4px; cursor: pointer;",
                            input {
                                r#type: "checkbox",
                                checked: toggle.visible,
                                onclick: move |_| on_toggle.call((toggle.key, !toggle.visible)),
                            }
                            span { "{toggle.label}" }
                        }
                    }
                }
            }
        }
    }
}

/// Sortable, filterable grid. Row clicks are routed to `on_row_click` with
/// the record id; the caller decides where that navigates.
#[component]
pub fn ResourceTable(
    view: TableView,
    on_sort: EventHandler<&'static str>,
    on_row_click: EventHandler<i64>,
    on_toggle_column: EventHandler<(&'static str, bool)>,
    on_filter: EventHandler<String>,
) -> Element {
    let filter_placeholder = view
        .filter_label
        .map(|label| format!("{label} 검색"))
        .unwrap_or_default();
    let header_cells: Vec<(&'static str, String, String)> = view
        .headers
        .iter()
        .map(|header| {
            (
                header.key,
                format!(
                    "{} width: {};",
                    table_header_cell_style(),
                    header.width.unwrap_or("auto")
                ),
                format!("{}{}", header.label, sort_marker(header.sort)),
            )
        })
        .collect();
    let body = match view.body.clone() {
        TableBody::Empty { colspan } => rsx! {
            tr {
                td {
                    colspan: "{colspan}",
                    style: "padding: 24px; text-align: center; color: #888;",
                    "검색 결과가 없습니다."
                }
            }
        },
        TableBody::Rows(rows) => rsx! {
            for TableRow { id, cells } in rows {
                tr {
                    key: "{id}",
                    style: "cursor: pointer; border-bottom: 1px solid #f0f0f0;",
                    onclick: move |_| on_row_click.call(id),
                    for (idx, cell) in cells.iter().enumerate() {
                        td {
                            key: "{idx}",
                            style: "padding: 8px 10px; white-space: nowrap; overflow: hidden; text-overflow: ellipsis; max-width: 320px;",
                            "{cell}"
                        }
                    }
                }
            }
        },
    };

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; min-height: 0; flex: 1;",
            div {
                style: "display: flex; justify-content: space-between; align-items: center; gap: 8px;",
                if view.filter_label.is_some() {
                    input {
                        style: "padding: 6px 10px; border: 1px solid #ccc; border-radius: 6px; min-width: 240px;",
                        placeholder: "{filter_placeholder}",
                        value: "{view.filter_text}",
                        oninput: move |event| on_filter.call(event.value()),
                    }
                } else {
                    span {}
                }
                ColumnVisibilityDropdown { view: view.clone(), on_toggle: on_toggle_column }
            }
            div {
                style: table_container_style(),
                table {
                    style: "width: 100%; border-collapse: collapse; font-size: 14px;",
                    thead {
                        tr {
                            for (key, style, label) in header_cells {
                                th {
                                    key: "{key}",
                                    style: "{style}",
                                    onclick: move |_| on_sort.call(key),
                                    "{label}"
                                }
                            }
                        }
                    }
                    tbody { {body} }
                }
            }
        }
    }
}

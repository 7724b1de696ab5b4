use dioxus::prelude::*;

use crate::domain::entities::page::PageMeta;
use crate::ui::state::pagination::{next_target, page_buttons, prev_target};

fn page_button_style(current: bool) -> &'static str {
    if current {
        "min-width: 32px; padding: 4px 8px; border: 1px solid #4c6ef5; background: #eef4ff; border-radius: 6px; font-weight: 600;"
    } else {
        "min-width: 32px; padding: 4px 8px; border: 1px solid #bbb; background: #fff; border-radius: 6px; cursor: pointer;"
    }
}

#[component]
pub fn Pagination(meta: PageMeta, on_change: EventHandler<u32>) -> Element {
    let prev = prev_target(&meta);
    let next = next_target(&meta);
    let buttons = page_buttons(&meta);
    let total = meta.total_elements;

    rsx! {
        div {
            style: "display: flex; align-items: center; justify-content: center; gap: 6px; padding: 10px 0;",
            button {
                style: page_button_style(false),
                disabled: prev.is_none(),
                onclick: move |_| {
                    if let Some(target) = prev {
                        on_change.call(target);
                    }
                },
                "이전"
            }
            for page_button in buttons {
                button {
                    key: "{page_button.index}",
                    style: page_button_style(page_button.current),
                    disabled: page_button.current,
                    onclick: move |_| on_change.call(page_button.index),
                    {page_button.label()}
                }
            }
            button {
                style: page_button_style(false),
                disabled: next.is_none(),
                onclick: move |_| {
                    if let Some(target) = next {
                        on_change.call(target);
                    }
                },
                "다음"
            }
            span { style: "margin-left: 12px; color: #666;", "총 {total}건" }
        }
    }
}

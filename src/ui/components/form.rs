use dioxus::prelude::*;

pub const INPUT_STYLE: &str =
    "padding: 6px 10px; border: 1px solid #ccc; border-radius: 6px; width: 100%; box-sizing: border-box;";

pub const PRIMARY_BUTTON_STYLE: &str =
    "padding: 6px 14px; border: 1px solid #4c6ef5; background: #4c6ef5; color: #fff; border-radius: 6px; cursor: pointer;";

pub const BUTTON_STYLE: &str =
    "padding: 6px 14px; border: 1px solid #bbb; background: #fff; border-radius: 6px; cursor: pointer;";

pub const DANGER_BUTTON_STYLE: &str =
    "padding: 6px 14px; border: 1px solid #d92d20; background: #fff; color: #d92d20; border-radius: 6px; cursor: pointer;";

#[component]
pub fn TextField(
    label: &'static str,
    value: String,
    #[props(default)] required: bool,
    #[props(default)] multiline: bool,
    on_input: EventHandler<String>,
) -> Element {
    rsx! {
        label {
            style: "display: flex; flex-direction: column; gap: 4px; margin-bottom: 10px;",
            span {
                style: "font-size: 13px; color: #555;",
                "{label}"
                if required {
                    span { style: "color: #d92d20;", " *" }
                }
            }
            if multiline {
                textarea {
                    style: "{INPUT_STYLE} min-height: 80px;",
                    value: "{value}",
                    oninput: move |event| on_input.call(event.value()),
                }
            } else {
                input {
                    style: INPUT_STYLE,
                    value: "{value}",
                    oninput: move |event| on_input.call(event.value()),
                }
            }
        }
    }
}

/// Read-only label/value pair for detail cards.
#[component]
pub fn InfoRow(label: &'static str, value: String) -> Element {
    rsx! {
        div {
            style: "display: flex; gap: 12px; padding: 6px 0; border-bottom: 1px solid #f2f2f2;",
            span { style: "width: 140px; color: #777; flex-shrink: 0;", "{label}" }
            span { style: "word-break: break-all;", "{value}" }
        }
    }
}

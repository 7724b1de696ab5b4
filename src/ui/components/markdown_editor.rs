use dioxus::prelude::*;

use crate::infra::markdown::bridge::MarkdownBridge;
use crate::ui::components::form::BUTTON_STYLE;
use crate::ui::components::image_upload::pick_and_upload;
use crate::ui::state::app_state::{AppState, Services};
use crate::ui::state::editor::{insert_image, EditorHandle, TextBuffer};
use crate::ui::state::toast::ToastLevel;
use crate::usecase::services::upload_service::UploadScope;

#[component]
pub fn MarkdownEditor(
    value: String,
    scope: UploadScope,
    on_change: EventHandler<String>,
) -> Element {
    let state = use_context::<AppState>();
    let services = use_context::<Services>();
    let preview = MarkdownBridge::default().markdown_to_html(&value);
    let current = value.clone();

    rsx! {
        div {
            style: "display: flex; flex-direction: column; gap: 8px; margin-bottom: 10px;",
            div {
                style: "display: flex; gap: 8px; align-items: center;",
                span { style: "font-size: 13px; color: #555;", "내용" span { style: "color: #d92d20;", " *" } }
                button {
                    style: BUTTON_STYLE,
                    disabled: (state.busy)(),
                    onclick: move |_| {
                        let current = current.clone();
                        pick_and_upload(state, services.uploads.clone(), scope, move |image| {
                            let mut editor = TextBuffer::new(&current);
                            insert_image(&mut editor, &image.file_name, &image.url);
                            on_change.call(editor.value());
                            state.notify(ToastLevel::Success, "이미지를 업로드했습니다.");
                        });
                    },
                    "이미지 업로드"
                }
            }
            div {
                style: "display: flex; gap: 12px; min-height: 320px;",
                textarea {
                    style: "flex: 1; padding: 10px; border: 1px solid #ccc; border-radius: 6px; font-family: monospace; font-size: 13px; resize: vertical;",
                    value: "{value}",
                    readonly: (state.busy)(),
                    oninput: move |event| on_change.call(event.value()),
                }
                div {
                    style: "flex: 1; padding: 10px; border: 1px solid #eee; border-radius: 6px; overflow: auto; background: #fcfcfc;",
                    dangerous_inner_html: "{preview}",
                }
            }
        }
    }
}

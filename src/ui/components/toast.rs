use dioxus::prelude::*;

use crate::ui::state::app_state::AppState;

#[component]
pub fn ToastHost() -> Element {
    let mut state = use_context::<AppState>();
    let toasts = state.toasts.read().items().to_vec();

    rsx! {
        div {
            style: "position: fixed; right: 16px; bottom: 16px; display: flex; flex-direction: column; gap: 8px; z-index: 2000;",
            for toast in toasts {
                div {
                    key: "{toast.id}",
                    style: {
                        let (background, color) = toast.level.colors();
                        format!("min-width: 260px; padding: 10px 14px; border-radius: 8px; background: {background}; color: {color}; box-shadow: 0 6px 16px rgba(0,0,0,0.12); cursor: pointer;")
                    },
                    onclick: move |_| state.toasts.write().dismiss(toast.id),
                    "{toast.message}"
                }
            }
        }
    }
}

use dioxus::prelude::*;

use crate::error::AdminError;
use crate::platform::desktop::blocking::run_service;
use crate::ui::components::form::{INPUT_STYLE, PRIMARY_BUTTON_STYLE};
use crate::ui::state::app_state::{AppState, Services};
use crate::ui::state::navigation::Screen;
use crate::ui::state::toast::ToastLevel;

#[component]
pub fn LoginPage() -> Element {
    let mut state = use_context::<AppState>();
    let services = use_context::<Services>();
    let mut email = use_signal(String::new);
    let mut password = use_signal(String::new);

    let submit = move || {
        let auth = services.auth.clone();
        let address = email.peek().clone();
        let secret = password.peek().clone();
        let mut busy = state.busy;
        busy.set(true);
        spawn(async move {
            let result = run_service("login", move || auth.login(&address, &secret)).await;
            busy.set(false);
            match result {
                Ok(()) => {
                    password.set(String::new());
                    state.logged_in.set(true);
                    state.navigate(Screen::home());
                    state.notify(ToastLevel::Success, "로그인되었습니다.");
                }
                // On the login form a 401 means bad credentials, not an expired session.
                Err(AdminError::Unauthorized) => {
                    state.notify(ToastLevel::Error, "이메일 또는 비밀번호가 올바르지 않습니다.");
                }
                Err(err) => state.report(&err),
            }
        });
    };

    rsx! {
        div {
            style: "height: 100vh; display: flex; align-items: center; justify-content: center; background: #f4f5f7;",
            form {
                style: "width: 360px; padding: 32px; background: #fff; border-radius: 12px; box-shadow: 0 10px 30px rgba(0,0,0,0.08); display: flex; flex-direction: column; gap: 12px;",
                onsubmit: move |event| {
                    event.prevent_default();
                    submit();
                },
                h2 { style: "margin: 0 0 8px; text-align: center;", "체험콕 관리자" }
                input {
                    style: INPUT_STYLE,
                    r#type: "email",
                    placeholder: "이메일",
                    value: "{email}",
                    oninput: move |event| email.set(event.value()),
                }
                input {
                    style: INPUT_STYLE,
                    r#type: "password",
                    placeholder: "비밀번호",
                    value: "{password}",
                    oninput: move |event| password.set(event.value()),
                }
                button {
                    style: "{PRIMARY_BUTTON_STYLE} padding: 10px;",
                    r#type: "submit",
                    disabled: (state.busy)(),
                    "로그인"
                }
            }
        }
    }
}

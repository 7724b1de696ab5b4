use std::sync::Arc;

use anyhow::{Context, Result};
use dioxus::prelude::*;

use crate::config::{default_session_db_path, AppConfig};
use crate::infra::http::attohttpc_transport::AttohttpcTransport;
use crate::infra::sqlite::session_repo::SqliteSessionStore;
use crate::platform::desktop::blocking::run_service;
use crate::ui::components::form::BUTTON_STYLE;
use crate::ui::components::toast::ToastHost;
use crate::ui::pages::articles::{ArticleEditor, ArticleList};
use crate::ui::pages::banners::{BannerCreate, BannerDetail, BannerList};
use crate::ui::pages::campaigns::{CampaignCreate, CampaignDetail, CampaignList};
use crate::ui::pages::companies::{CompanyCreate, CompanyDetail, CompanyList};
use crate::ui::pages::dashboard::Dashboard;
use crate::ui::pages::login::LoginPage;
use crate::ui::pages::users::{UserDetail, UserList};
use crate::ui::state::app_state::{AppState, Services};
use crate::ui::state::navigation::{Screen, Section};
use crate::ui::state::toast::ToastLevel;
use crate::usecase::ports::session::SessionStore;
use crate::usecase::services::api_client::ApiClient;

struct Boot {
    services: Services,
    logged_in: bool,
}

fn boot() -> Result<Boot> {
    let config = AppConfig::from_env().context("invalid configuration")?;
    let db_path = default_session_db_path()?;
    let session = Arc::new(SqliteSessionStore { db_path });
    session.init().context("failed to prepare session store")?;

    let transport = Arc::new(AttohttpcTransport::new(config.request_timeout));
    let api = Arc::new(ApiClient::new(&config.api_base_url, transport, session));
    tracing::info!(base_url = %config.api_base_url, "backend configured");

    let services = Services::new(config, api);
    let logged_in = services.auth.is_logged_in().unwrap_or_else(|err| {
        tracing::warn!(error = %err, "could not read stored session");
        false
    });
    Ok(Boot {
        services,
        logged_in,
    })
}

fn sidebar_item_style(active: bool) -> &'static str {
    if active {
        "display: block; width: 100%; text-align: left; padding: 10px 16px; border: none; background: #eef4ff; color: #364fc7; font-weight: 600; cursor: pointer;"
    } else {
        "display: block; width: 100%; text-align: left; padding: 10px 16px; border: none; background: transparent; color: #333; cursor: pointer;"
    }
}

fn screen_key(screen: Screen) -> String {
    format!("{screen:?}")
}

#[component]
fn Routed(screen: Screen) -> Element {
    match screen {
        Screen::List(Section::Dashboard) => rsx! { Dashboard {} },
        Screen::List(Section::Users) => rsx! { UserList {} },
        Screen::List(Section::Companies) => rsx! { CompanyList {} },
        Screen::List(Section::Campaigns) => rsx! { CampaignList {} },
        Screen::List(Section::Banners) => rsx! { BannerList {} },
        Screen::List(Section::Articles(kind)) => rsx! { ArticleList { kind } },
        Screen::Detail(Section::Users, id) => rsx! { UserDetail { id } },
        Screen::Detail(Section::Companies, id) => rsx! { CompanyDetail { id } },
        Screen::Detail(Section::Campaigns, id) => rsx! { CampaignDetail { id } },
        Screen::Detail(Section::Banners, id) => rsx! { BannerDetail { id } },
        Screen::Detail(Section::Articles(kind), id) => rsx! { ArticleEditor { kind, id: Some(id) } },
        Screen::Create(Section::Companies) => rsx! { CompanyCreate {} },
        Screen::Create(Section::Campaigns) => rsx! { CampaignCreate {} },
        Screen::Create(Section::Banners) => rsx! { BannerCreate {} },
        Screen::Create(Section::Articles(kind)) => rsx! { ArticleEditor { kind, id: None } },
        Screen::Detail(Section::Dashboard, _)
        | Screen::Create(Section::Dashboard)
        | Screen::Create(Section::Users) => rsx! { Dashboard {} },
    }
}

#[component]
fn Shell() -> Element {
    let mut state = use_context::<AppState>();
    let services = use_context::<Services>();
    let screen = (state.screen)();
    let active = screen.section();
    let key = screen_key(screen);
    let items: Vec<(Section, &'static str, &'static str)> = Section::SIDEBAR
        .into_iter()
        .map(|section| (section, section.label(), sidebar_item_style(section == active)))
        .collect();

    rsx! {
        div {
            style: "display: flex; height: 100vh; font-family: sans-serif; color: #222;",
            nav {
                style: "width: 200px; flex-shrink: 0; border-right: 1px solid #e2e2e2; background: #fafbfc; display: flex; flex-direction: column;",
                div { style: "padding: 18px 16px; font-weight: 700; font-size: 17px;", "체험콕 관리자" }
                for (section, label, style) in items {
                    button {
                        key: "{label}",
                        style: "{style}",
                        onclick: move |_| state.navigate(Screen::List(section)),
                        "{label}"
                    }
                }
                div { style: "flex: 1;" }
                button {
                    style: "{BUTTON_STYLE} margin: 12px;",
                    disabled: (state.busy)(),
                    onclick: move |_| {
                        let auth = services.auth.clone();
                        spawn(async move {
                            match run_service("logout", move || auth.logout()).await {
                                Ok(()) => state.notify(ToastLevel::Info, "로그아웃되었습니다."),
                                Err(err) => state.report(&err),
                            }
                            state.logged_in.set(false);
                            state.navigate(Screen::home());
                        });
                    },
                    "로그아웃"
                }
            }
            main {
                style: "flex: 1; min-width: 0; padding: 20px 24px; display: flex; flex-direction: column; overflow: auto;",
                if (state.busy)() {
                    div { style: "position: fixed; top: 0; left: 200px; right: 0; height: 3px; background: #4c6ef5;" }
                }
                Routed { key: "{key}", screen }
            }
        }
    }
}

#[component]
fn Session() -> Element {
    let state = use_context::<AppState>();
    rsx! {
        if (state.logged_in)() {
            Shell {}
        } else {
            LoginPage {}
        }
        ToastHost {}
    }
}

#[component]
fn Booted(logged_in: bool) -> Element {
    let state = AppState::new(logged_in);
    use_context_provider(|| state);
    rsx! { Session {} }
}

#[component]
pub fn App() -> Element {
    let booted = use_hook(|| match boot() {
        Ok(Boot {
            services,
            logged_in,
        }) => {
            provide_context(services);
            Ok(logged_in)
        }
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "startup failed");
            Err(format!("{err:#}"))
        }
    });

    match booted {
        Ok(logged_in) => rsx! { Booted { logged_in } },
        Err(err) => rsx! {
            div {
                style: "padding: 24px; font-family: sans-serif;",
                h3 { "관리자 앱을 시작할 수 없습니다." }
                p { "{err}" }
            }
        },
    }
}

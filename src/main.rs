mod app;
mod config;
mod error;
mod logging;

mod domain {
    pub mod entities {
        pub mod article;
        pub mod banner;
        pub mod campaign;
        pub mod company;
        pub mod health;
        pub mod page;
        pub mod resource;
        pub mod user;
    }
}

mod usecase {
    pub mod ports {
        pub mod http;
        pub mod session;
    }

    pub mod services {
        pub mod api_client;
        pub mod article_service;
        pub mod auth_service;
        pub mod banner_order_service;
        pub mod health_service;
        pub mod resource_service;
        pub mod upload_service;
    }
}

mod infra {
    pub mod http {
        pub mod attohttpc_transport;
    }

    pub mod markdown {
        pub mod bridge;
    }

    pub mod sqlite {
        pub mod schema;
        pub mod session_repo;
    }
}

mod platform {
    pub mod desktop {
        pub mod blocking;
    }
}

mod ui {
    pub mod components {
        pub mod form;
        pub mod health_chart;
        pub mod image_upload;
        pub mod markdown_editor;
        pub mod pagination;
        pub mod resource_table;
        pub mod toast;
    }

    pub mod pages {
        pub mod articles;
        pub mod banners;
        pub mod campaigns;
        pub mod common;
        pub mod companies;
        pub mod dashboard;
        pub mod login;
        pub mod users;
    }

    pub mod state {
        pub mod app_state;
        pub mod editor;
        pub mod form_flow;
        pub mod format;
        pub mod navigation;
        pub mod pagination;
        pub mod search;
        pub mod table_state;
        pub mod toast;
    }
}

#[cfg(test)]
mod tests;

use crate::config::default_webview_data_dir;

fn main() {
    logging::init_tracing();

    let webview_data_dir = match default_webview_data_dir() {
        Ok(dir) => dir,
        Err(err) => {
            tracing::error!(error = %format!("{err:#}"), "failed to prepare webview data directory");
            std::process::exit(1);
        }
    };

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            dioxus::desktop::Config::new()
                .with_window(dioxus::desktop::WindowBuilder::new().with_title("체험콕 관리자"))
                .with_data_directory(webview_data_dir),
        )
        .launch(app::App);
}

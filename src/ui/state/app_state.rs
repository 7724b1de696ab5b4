use std::sync::Arc;

use dioxus::prelude::*;

use crate::config::AppConfig;
use crate::domain::entities::article::ArticleKind;
use crate::domain::entities::banner::Banner;
use crate::domain::entities::campaign::Campaign;
use crate::domain::entities::company::Company;
use crate::domain::entities::resource::{BANNERS, CAMPAIGNS, COMPANIES, USERS};
use crate::domain::entities::user::User;
use crate::error::AdminError;
use crate::infra::markdown::bridge::{BridgeOptions, MarkdownBridge};
use crate::ui::state::navigation::Screen;
use crate::ui::state::toast::{ToastLevel, ToastQueue, TOAST_TTL};
use crate::usecase::services::api_client::ApiClient;
use crate::usecase::services::article_service::ArticleService;
use crate::usecase::services::auth_service::AuthService;
use crate::usecase::services::banner_order_service::BannerOrderService;
use crate::usecase::services::health_service::HealthService;
use crate::usecase::services::resource_service::ResourceService;
use crate::usecase::services::upload_service::UploadService;

/// Every backend-facing service, built once and shared through context.
#[derive(Clone)]
pub struct Services {
    pub config: AppConfig,
    api: Arc<ApiClient>,
    pub auth: Arc<AuthService>,
    pub users: ResourceService<User>,
    pub companies: ResourceService<Company>,
    pub campaigns: ResourceService<Campaign>,
    pub banners: ResourceService<Banner>,
    pub banner_order: Arc<BannerOrderService>,
    pub uploads: Arc<UploadService>,
    pub health: Arc<HealthService>,
}

impl Services {
    pub fn new(config: AppConfig, api: Arc<ApiClient>) -> Self {
        Self {
            config,
            auth: Arc::new(AuthService::new(api.clone())),
            users: ResourceService::new(api.clone(), USERS),
            companies: ResourceService::new(api.clone(), COMPANIES),
            campaigns: ResourceService::new(api.clone(), CAMPAIGNS),
            banners: ResourceService::new(api.clone(), BANNERS),
            banner_order: Arc::new(BannerOrderService::new(api.clone())),
            uploads: Arc::new(UploadService::new(api.clone())),
            health: Arc::new(HealthService::new(api.clone())),
            api,
        }
    }

    pub fn articles(&self, kind: ArticleKind) -> ArticleService {
        ArticleService::new(
            self.api.clone(),
            kind,
            MarkdownBridge::new(BridgeOptions::default()),
        )
    }
}

#[derive(Clone, Copy)]
pub struct AppState {
    pub screen: Signal<Screen>,
    pub logged_in: Signal<bool>,
    pub toasts: Signal<ToastQueue>,
    pub busy: Signal<bool>,
}

impl AppState {
    pub fn new(logged_in: bool) -> Self {
        Self {
            screen: use_signal(Screen::home),
            logged_in: use_signal(move || logged_in),
            toasts: use_signal(ToastQueue::default),
            busy: use_signal(|| false),
        }
    }

    pub fn navigate(mut self, screen: Screen) {
        self.screen.set(screen);
    }

    pub fn notify(mut self, level: ToastLevel, message: impl Into<String>) {
        let id = self.toasts.write().push(level, message);
        let mut toasts = self.toasts;
        spawn(async move {
            tokio::time::sleep(TOAST_TTL).await;
            toasts.write().dismiss(id);
        });
    }

    /// Toasts the error and, for an expired session, drops back to login.
    pub fn report(mut self, err: &AdminError) {
        tracing::warn!(error = %err, "request failed");
        self.notify(ToastLevel::Error, err.toast_message());
        if err.requires_login() {
            self.logged_in.set(false);
            self.screen.set(Screen::home());
        }
    }
}

use crate::domain::entities::article::ArticleKind;
use crate::domain::entities::resource::{Endpoint, BANNERS, CAMPAIGNS, COMPANIES, USERS};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Dashboard,
    Users,
    Companies,
    Campaigns,
    Banners,
    Articles(ArticleKind),
}

impl Section {
    pub const SIDEBAR: [Section; 8] = [
        Section::Dashboard,
        Section::Users,
        Section::Companies,
        Section::Campaigns,
        Section::Banners,
        Section::Articles(ArticleKind::Markdown),
        Section::Articles(ArticleKind::Notice),
        Section::Articles(ArticleKind::Post),
    ];

    pub fn endpoint(self) -> Option<Endpoint> {
        match self {
            Section::Dashboard => None,
            Section::Users => Some(USERS),
            Section::Companies => Some(COMPANIES),
            Section::Campaigns => Some(CAMPAIGNS),
            Section::Banners => Some(BANNERS),
            Section::Articles(kind) => Some(kind.endpoint()),
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Section::Dashboard => "대시보드",
            other => other.endpoint().map(|endpoint| endpoint.label).unwrap_or("-"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Screen {
    List(Section),
    Detail(Section, i64),
    Create(Section),
}

impl Screen {
    pub fn section(self) -> Section {
        match self {
            Screen::List(section) | Screen::Detail(section, _) | Screen::Create(section) => section,
        }
    }

    pub fn home() -> Self {
        Screen::List(Section::Dashboard)
    }
}

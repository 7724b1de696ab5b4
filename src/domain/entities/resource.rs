use std::str::FromStr;

use serde::de::DeserializeOwned;

/// A REST collection on the backend and the label shown in toasts for it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Endpoint {
    pub path: &'static str,
    pub label: &'static str,
}

impl Endpoint {
    pub fn item_path(&self, id: i64) -> String {
        format!("{}/{id}", self.path)
    }
}

pub const USERS: Endpoint = Endpoint {
    path: "/users",
    label: "회원",
};

pub const COMPANIES: Endpoint = Endpoint {
    path: "/companies",
    label: "업체",
};

pub const CAMPAIGNS: Endpoint = Endpoint {
    path: "/campaigns",
    label: "캠페인",
};

pub const BANNERS: Endpoint = Endpoint {
    path: "/api/banners",
    label: "배너",
};

pub const MARKDOWNS: Endpoint = Endpoint {
    path: "/api/admin/markdowns",
    label: "아티클",
};

pub const NOTICES: Endpoint = Endpoint {
    path: "/api/admin/notices",
    label: "공지사항",
};

pub const POSTS: Endpoint = Endpoint {
    path: "/api/admin/posts",
    label: "포스트",
};

pub trait Resource: DeserializeOwned + Clone + PartialEq + Send + 'static {
    fn id(&self) -> i64;
}

/// Form payloads list their required fields as `(label, value)`; a field is
/// missing when its value is blank after trimming. Numeric text inputs that
/// are filled in but do not parse are reported by `malformed_numbers`.
pub trait RequiredFields {
    fn required_fields(&self) -> Vec<(&'static str, &str)>;

    fn malformed_numbers(&self) -> Vec<&'static str> {
        Vec::new()
    }
}

/// `Some(label)` when `value` is non-blank and not a valid `T`.
pub fn malformed<T: FromStr>(label: &'static str, value: &str) -> Option<&'static str> {
    let trimmed = value.trim();
    (!trimmed.is_empty() && trimmed.parse::<T>().is_err()).then_some(label)
}

pub fn missing_fields<P: RequiredFields + ?Sized>(payload: &P) -> Vec<&'static str> {
    payload
        .required_fields()
        .into_iter()
        .filter(|(_, value)| value.trim().is_empty())
        .map(|(label, _)| label)
        .collect()
}

use std::collections::VecDeque;
use std::fs;
use std::path::PathBuf;
use std::sync::{Arc, Mutex};
use std::time::{Duration, SystemTime, UNIX_EPOCH};

use rusqlite::Connection;
use serde_json::{json, Value};

use crate::config::AppConfig;
use crate::domain::entities::article::ArticleKind;
use crate::domain::entities::banner::{Banner, BannerForm};
use crate::domain::entities::campaign::{ApprovalPatch, ApprovalStatus, CampaignForm};
use crate::domain::entities::company::{Company, CompanyForm};
use crate::domain::entities::health::{HealthHistory, HealthMetric, HealthSample, HEALTH_HISTORY_LEN};
use crate::domain::entities::page::{Page, PageMeta, PageRequest, SortDirection};
use crate::domain::entities::resource::{BANNERS, CAMPAIGNS, COMPANIES, USERS};
use crate::domain::entities::user::{User, UserPatch, UserStatus};
use crate::error::AdminError;
use crate::infra::markdown::bridge::{BridgeOptions, BulletMarker, MarkdownBridge};
use crate::infra::sqlite::schema::init_db;
use crate::infra::sqlite::session_repo::SqliteSessionStore;
use crate::ui::state::form_flow::{created, deleted, updated, Outcome};
use crate::ui::state::navigation::{Screen, Section};
use crate::ui::state::pagination::{next_target, page_buttons, prev_target};
use crate::ui::state::table_state::{build_table_view, ColumnSpec, TableBody, TableRecord, TableState};
use crate::ui::state::toast::{ToastLevel, ToastQueue};
use crate::usecase::ports::http::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};
use crate::usecase::ports::session::{SessionStore, SessionStoreError};
use crate::usecase::services::api_client::ApiClient;
use crate::usecase::services::article_service::{ArticleDraft, ArticleService};
use crate::usecase::services::auth_service::{AuthService, LOGIN_PATH};
use crate::usecase::services::banner_order_service::{stage, BannerOrderService};
use crate::usecase::services::health_service::HealthService;
use crate::usecase::services::resource_service::ResourceService;
use crate::usecase::services::upload_service::{UploadScope, UploadService};

const BASE_URL: &str = "http://api.test";

fn unique_test_dir(prefix: &str) -> PathBuf {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock should be after epoch")
        .as_nanos();
    std::env::temp_dir().join(format!("chekok-{prefix}-{nanos}"))
}

/// Records every request and answers from a script. An empty script answers
/// `200` with an empty body.
#[derive(Default)]
struct MockTransport {
    requests: Mutex<Vec<HttpRequest>>,
    responses: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
}

impl MockTransport {
    fn scripted(responses: Vec<Result<HttpResponse, TransportError>>) -> Arc<Self> {
        Arc::new(Self {
            requests: Mutex::new(Vec::new()),
            responses: Mutex::new(responses.into_iter().collect()),
        })
    }

    fn requests(&self) -> Vec<HttpRequest> {
        self.requests.lock().expect("requests lock").clone()
    }
}

impl HttpTransport for MockTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        self.requests.lock().expect("requests lock").push(request);
        self.responses
            .lock()
            .expect("responses lock")
            .pop_front()
            .unwrap_or_else(|| {
                Ok(HttpResponse {
                    status: 200,
                    body: Vec::new(),
                })
            })
    }
}

#[derive(Default)]
struct MemorySession {
    token: Mutex<Option<String>>,
}

impl MemorySession {
    fn with_token(token: &str) -> Arc<Self> {
        Arc::new(Self {
            token: Mutex::new(Some(token.to_string())),
        })
    }

    fn token(&self) -> Option<String> {
        self.token.lock().expect("token lock").clone()
    }
}

impl SessionStore for MemorySession {
    fn init(&self) -> Result<(), SessionStoreError> {
        Ok(())
    }

    fn load_token(&self) -> Result<Option<String>, SessionStoreError> {
        Ok(self.token())
    }

    fn save_token(&self, token: &str) -> Result<(), SessionStoreError> {
        *self.token.lock().expect("token lock") = Some(token.to_string());
        Ok(())
    }

    fn clear_token(&self) -> Result<(), SessionStoreError> {
        *self.token.lock().expect("token lock") = None;
        Ok(())
    }
}

fn respond(status: u16, body: Value) -> Result<HttpResponse, TransportError> {
    Ok(HttpResponse {
        status,
        body: serde_json::to_vec(&body).expect("fixture should encode"),
    })
}

fn api(transport: &Arc<MockTransport>, session: &Arc<MemorySession>) -> Arc<ApiClient> {
    Arc::new(ApiClient::new(
        &format!("{BASE_URL}/"),
        transport.clone(),
        session.clone(),
    ))
}

fn body_json(request: &HttpRequest) -> Value {
    serde_json::from_slice(request.body.as_deref().expect("request should carry a body"))
        .expect("body should be json")
}

fn banner(id: i64, title: &str, display_order: u32) -> Banner {
    Banner {
        id,
        title: title.to_string(),
        banner_url: format!("https://cdn.test/{title}.png"),
        redirect_url: None,
        description: None,
        position: None,
        display_order,
    }
}

#[derive(Debug, Clone, PartialEq)]
struct Row {
    id: i64,
    name: String,
    score: Option<String>,
}

impl TableRecord for Row {
    fn row_id(&self) -> i64 {
        self.id
    }

    fn field(&self, key: &str) -> Option<String> {
        match key {
            "id" => Some(self.id.to_string()),
            "name" => Some(self.name.clone()),
            "score" => self.score.clone(),
            _ => None,
        }
    }
}

fn row(id: i64, name: &str, score: Option<&str>) -> Row {
    Row {
        id,
        name: name.to_string(),
        score: score.map(str::to_string),
    }
}

fn row_columns() -> Vec<ColumnSpec<Row>> {
    vec![
        ColumnSpec::new("id", "ID"),
        ColumnSpec::new("name", "이름"),
        ColumnSpec::new("score", "점수"),
    ]
}

fn body_ids(body: &TableBody) -> Vec<i64> {
    match body {
        TableBody::Rows(rows) => rows.iter().map(|row| row.id).collect(),
        TableBody::Empty { .. } => Vec::new(),
    }
}

#[test]
fn empty_table_renders_single_row_spanning_declared_columns() {
    let mut state = TableState::default();
    state.set_column_visible("score", false);

    let view = build_table_view(&row_columns(), &[], &state);

    assert_eq!(view.body, TableBody::Empty { colspan: 3 });
    assert_eq!(view.headers.len(), 2, "hidden column should not get a header");
}

#[test]
fn filter_eliminating_every_row_renders_empty_row() {
    let records = vec![row(1, "Alpha", None), row(2, "Beta", None)];
    let mut state = TableState::with_filter_column("name");
    state.set_filter_text("zzz");

    let view = build_table_view(&row_columns(), &records, &state);

    assert_eq!(view.body, TableBody::Empty { colspan: 3 });
}

#[test]
fn sort_toggle_starts_ascending_and_flips_on_same_column() {
    let records = vec![
        row(1, "banana", Some("10")),
        row(2, "Apple", Some("9")),
        row(3, "cherry", Some("100")),
    ];
    let mut state = TableState::default();

    state.toggle_sort("name");
    let view = build_table_view(&row_columns(), &records, &state);
    assert_eq!(body_ids(&view.body), vec![2, 1, 3]);
    assert_eq!(view.headers[1].sort, Some(SortDirection::Asc));

    state.toggle_sort("name");
    let view = build_table_view(&row_columns(), &records, &state);
    assert_eq!(body_ids(&view.body), vec![3, 1, 2]);

    state.toggle_sort("score");
    let view = build_table_view(&row_columns(), &records, &state);
    assert_eq!(
        body_ids(&view.body),
        vec![2, 1, 3],
        "a new column starts ascending and compares numerically"
    );
    assert_eq!(view.headers[1].sort, None, "only one column carries a sort marker");
}

#[test]
fn sort_is_stable_for_equal_values() {
    let records = vec![
        row(1, "same", None),
        row(2, "SAME", None),
        row(3, "same", None),
    ];
    let mut state = TableState::default();
    state.toggle_sort("name");

    let view = build_table_view(&row_columns(), &records, &state);

    assert_eq!(body_ids(&view.body), vec![1, 2, 3]);
}

#[test]
fn filter_matches_substring_case_insensitively_on_designated_column() {
    let records = vec![
        row(1, "Seoul Cafe", Some("cafe")),
        row(2, "Busan Bakery", Some("cafe")),
        row(3, "CAFE Jeju", None),
    ];
    let mut state = TableState::with_filter_column("name");
    state.set_filter_text("  cafe ");

    let view = build_table_view(&row_columns(), &records, &state);

    assert_eq!(body_ids(&view.body), vec![1, 3]);
    assert_eq!(view.filter_label, Some("이름"));
}

#[test]
fn hidden_columns_are_dropped_and_missing_fields_render_blank() {
    let records = vec![row(1, "Alpha", None)];
    let mut state = TableState::default();
    state.set_column_visible("id", false);

    let view = build_table_view(&row_columns(), &records, &state);

    let TableBody::Rows(rows) = view.body else {
        panic!("expected rows");
    };
    assert_eq!(rows[0].cells, vec!["Alpha".to_string(), String::new()]);
    assert!(view.toggles.iter().any(|toggle| toggle.key == "id" && !toggle.visible));
    assert!(view.toggles.iter().any(|toggle| toggle.key == "name" && toggle.visible));
}

#[test]
fn custom_renderer_overrides_field_lookup() {
    let columns = vec![ColumnSpec::new("name", "이름").render(|row: &Row| row.name.to_uppercase())];

    let view = build_table_view(&columns, &[row(1, "kim", None)], &TableState::default());

    let TableBody::Rows(rows) = view.body else {
        panic!("expected rows");
    };
    assert_eq!(rows[0].cells, vec!["KIM".to_string()]);
}

fn meta(page: u32, total_pages: u32) -> PageMeta {
    PageMeta {
        page,
        size: 10,
        total_elements: u64::from(total_pages) * 10,
        total_pages,
        first: page == 0,
        last: total_pages == 0 || page + 1 == total_pages,
    }
}

#[test]
fn pagination_window_is_centred_and_clamped() {
    let indices = |meta: PageMeta| {
        page_buttons(&meta)
            .into_iter()
            .map(|button| button.index)
            .collect::<Vec<_>>()
    };

    assert_eq!(indices(meta(0, 10)), vec![0, 1, 2, 3, 4]);
    assert_eq!(indices(meta(5, 10)), vec![3, 4, 5, 6, 7]);
    assert_eq!(indices(meta(9, 10)), vec![5, 6, 7, 8, 9]);
    assert_eq!(indices(meta(1, 3)), vec![0, 1, 2]);
    assert!(page_buttons(&meta(0, 0)).is_empty());

    let current: Vec<_> = page_buttons(&meta(5, 10))
        .into_iter()
        .filter(|button| button.current)
        .map(|button| button.label())
        .collect();
    assert_eq!(current, vec!["6".to_string()]);
}

#[test]
fn pagination_prev_and_next_disable_at_edges() {
    assert_eq!(prev_target(&meta(0, 3)), None);
    assert_eq!(next_target(&meta(0, 3)), Some(1));
    assert_eq!(prev_target(&meta(2, 3)), Some(1));
    assert_eq!(next_target(&meta(2, 3)), None);
}

#[test]
fn page_request_query_lists_paging_sort_then_filters() {
    let request = PageRequest::new(2, 20)
        .sorted("createdAt", SortDirection::Desc)
        .filter("approvalStatus", "PENDING")
        .filter("keyword", "   ");

    assert_eq!(
        request.to_query(),
        vec![
            ("page".to_string(), "2".to_string()),
            ("size".to_string(), "20".to_string()),
            ("sortBy".to_string(), "createdAt".to_string()),
            ("sortDirection".to_string(), "DESC".to_string()),
            ("approvalStatus".to_string(), "PENDING".to_string()),
        ]
    );
}

#[test]
fn list_sends_page_query_with_bearer_token_and_decodes_page() {
    let transport = MockTransport::scripted(vec![respond(
        200,
        json!({
            "data": {
                "content": [
                    {"id": 1, "email": "a@test.kr", "nickname": "가", "role": "USER", "status": "ACTIVE"},
                    {"id": 2, "email": "b@test.kr", "nickname": "나", "role": "SUPER", "status": "SUSPENDED"}
                ],
                "number": 1,
                "size": 2,
                "totalElements": 6,
                "totalPages": 3,
                "first": false,
                "last": false
            }
        }),
    )]);
    let session = MemorySession::with_token("tok-1");
    let users: ResourceService<User> = ResourceService::new(api(&transport, &session), USERS);

    let page = users
        .list(&PageRequest::new(1, 2).filter("keyword", "kim"))
        .expect("list should succeed");

    assert_eq!(page.content.len(), 2);
    assert_eq!(page.content[1].status, UserStatus::Suspended);
    assert_eq!(page.meta(), PageMeta {
        page: 1,
        size: 2,
        total_elements: 6,
        total_pages: 3,
        first: false,
        last: false,
    });

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Get);
    assert_eq!(requests[0].url, format!("{BASE_URL}/users"));
    assert_eq!(requests[0].header("authorization"), Some("Bearer tok-1"));
    assert!(requests[0]
        .query
        .contains(&("keyword".to_string(), "kim".to_string())));
}

#[test]
fn page_accepts_page_alias_and_missing_flags() {
    let page: Page<Company> = serde_json::from_value(json!({
        "content": [{"id": 3, "companyName": "체험상회"}],
        "page": 4,
        "totalPages": 5
    }))
    .expect("page should decode");

    assert_eq!(page.number, 4);
    assert!(page.first && page.last);
    assert_eq!(page.content[0].company_name, "체험상회");
}

#[test]
fn create_with_required_fields_sends_one_post_and_returns_to_list() {
    let transport = MockTransport::scripted(vec![respond(201, json!({"message": "등록되었습니다"}))]);
    let session = MemorySession::with_token("tok");
    let companies: ResourceService<Company> = ResourceService::new(api(&transport, &session), COMPANIES);
    let form = CompanyForm {
        company_name: "체험상회".to_string(),
        business_registration_number: "123-45-67890".to_string(),
        ..CompanyForm::default()
    };

    let outcome = created(companies.create(&form), Section::Companies);

    assert_eq!(
        outcome,
        Outcome::Success {
            message: "등록되었습니다".to_string(),
            next: Some(Screen::List(Section::Companies)),
        }
    );
    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(requests[0].url, format!("{BASE_URL}/companies"));
    assert_eq!(requests[0].header("content-type"), Some("application/json"));
    assert_eq!(
        body_json(&requests[0]),
        json!({
            "companyName": "체험상회",
            "businessRegistrationNumber": "123-45-67890",
            "representativeName": "",
            "contactPhone": "",
            "memo": ""
        })
    );
}

#[test]
fn create_missing_required_fields_sends_nothing_and_names_fields() {
    let transport = MockTransport::scripted(Vec::new());
    let session = MemorySession::with_token("tok");
    let banners: ResourceService<Banner> = ResourceService::new(api(&transport, &session), BANNERS);
    let form = BannerForm {
        title: "   ".to_string(),
        ..BannerForm::default()
    };

    let result = banners.create(&form);

    assert_eq!(
        result,
        Err(AdminError::MissingFields(vec!["배너 제목", "배너 이미지"]))
    );
    assert!(transport.requests().is_empty(), "no request should be sent");

    let outcome = created(result, Section::Banners);
    assert_eq!(outcome.toast_level(), ToastLevel::Error);
    assert_eq!(outcome.message(), "필수 항목을 입력해주세요: 배너 제목, 배너 이미지");
    assert!(!outcome.is_success());
}

#[test]
fn partial_updates_patch_the_item_path() {
    let transport = MockTransport::scripted(Vec::new());
    let session = MemorySession::with_token("tok");
    let client = api(&transport, &session);
    let users: ResourceService<User> = ResourceService::new(client.clone(), USERS);
    let campaigns = ResourceService::<crate::domain::entities::campaign::Campaign>::new(client, CAMPAIGNS);

    let user_result = users.partial_update(
        5,
        &UserPatch {
            status: UserStatus::Suspended,
            memo: "반복 노쇼".to_string(),
        },
    );
    let approval_result = campaigns.partial_update(
        9,
        &ApprovalPatch {
            approval_status: ApprovalStatus::Approved,
        },
    );

    assert_eq!(
        updated(user_result, Section::Users).message(),
        "회원 정보가 수정되었습니다."
    );
    assert!(approval_result.is_ok());
    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, Method::Patch);
    assert_eq!(requests[0].url, format!("{BASE_URL}/users/5"));
    assert_eq!(
        body_json(&requests[0]),
        json!({"status": "SUSPENDED", "memo": "반복 노쇼"})
    );
    assert_eq!(requests[1].url, format!("{BASE_URL}/campaigns/9"));
    assert_eq!(body_json(&requests[1]), json!({"approvalStatus": "APPROVED"}));
}

#[test]
fn delete_outcome_navigates_back_to_list() {
    let transport = MockTransport::scripted(vec![respond(200, json!({"message": ""}))]);
    let session = MemorySession::with_token("tok");
    let banners: ResourceService<Banner> = ResourceService::new(api(&transport, &session), BANNERS);

    let outcome = deleted(banners.delete(4), Section::Banners);

    assert_eq!(
        outcome,
        Outcome::Success {
            message: "배너 삭제가 완료되었습니다.".to_string(),
            next: Some(Screen::List(Section::Banners)),
        }
    );
    let requests = transport.requests();
    assert_eq!(requests[0].method, Method::Delete);
    assert_eq!(requests[0].url, format!("{BASE_URL}/api/banners/4"));
    assert!(requests[0].body.is_none());
}

#[test]
fn campaign_form_serializes_nested_payload() {
    let form = CampaignForm {
        title: " 여름 체험단 ".to_string(),
        campaign_type: "VISIT".to_string(),
        recruitment_start_date: "2024-07-01".to_string(),
        recruitment_end_date: "2024-07-15".to_string(),
        max_applicants: "20".to_string(),
        company_id: "3".to_string(),
        mission_keywords: "맛집, 카페 ,,디저트".to_string(),
        latitude: "37.5".to_string(),
        ..CampaignForm::default()
    };

    let payload = serde_json::to_value(&form).expect("form should serialize");

    assert_eq!(payload["title"], json!("여름 체험단"));
    assert_eq!(payload["maxApplicants"], json!(20));
    assert_eq!(payload["companyId"], json!(3));
    assert_eq!(payload["thumbnailUrl"], Value::Null);
    assert_eq!(payload["missionInfo"]["keywords"], json!(["맛집", "카페", "디저트"]));
    assert_eq!(payload["location"]["latitude"], json!(37.5));
    assert_eq!(payload["location"]["longitude"], Value::Null);
}

#[test]
fn campaign_with_unparsable_numbers_is_rejected_before_any_request() {
    let transport = MockTransport::scripted(Vec::new());
    let session = MemorySession::with_token("tok");
    let campaigns = ResourceService::<crate::domain::entities::campaign::Campaign>::new(
        api(&transport, &session),
        CAMPAIGNS,
    );
    let form = CampaignForm {
        title: "여름 체험단".to_string(),
        campaign_type: "VISIT".to_string(),
        recruitment_start_date: "2024-07-01".to_string(),
        recruitment_end_date: "2024-07-15".to_string(),
        company_id: "abc".to_string(),
        max_applicants: "ten".to_string(),
        ..CampaignForm::default()
    };

    let result = campaigns.create(&form);

    assert_eq!(
        result,
        Err(AdminError::InvalidNumber(vec!["모집 인원", "업체 ID"]))
    );
    assert!(transport.requests().is_empty(), "no request should be sent");

    let outcome = created(result, Section::Campaigns);
    assert!(!outcome.is_success());
    assert_eq!(outcome.message(), "숫자로 입력해주세요: 모집 인원, 업체 ID");
}

#[test]
fn status_codes_map_to_error_categories() {
    assert_eq!(
        AdminError::from_status(400, Some("bad".to_string())),
        AdminError::BadRequest("bad".to_string())
    );
    assert_eq!(AdminError::from_status(401, None), AdminError::Unauthorized);
    assert!(matches!(AdminError::from_status(403, None), AdminError::Forbidden(_)));
    assert!(matches!(AdminError::from_status(404, None), AdminError::NotFound(_)));
    assert!(matches!(
        AdminError::from_status(503, None),
        AdminError::Server { status: 503, .. }
    ));
    assert!(matches!(
        AdminError::from_status(418, None),
        AdminError::UnexpectedStatus { status: 418, .. }
    ));
    assert!(AdminError::Unauthorized.requires_login());
    assert!(!AdminError::Forbidden(String::new()).requires_login());
}

#[test]
fn unauthorized_response_clears_stored_token() {
    let transport = MockTransport::scripted(vec![respond(401, json!({"message": "expired"}))]);
    let session = MemorySession::with_token("stale");
    let companies: ResourceService<Company> = ResourceService::new(api(&transport, &session), COMPANIES);

    let result = companies.get(1);

    assert_eq!(result, Err(AdminError::Unauthorized));
    assert_eq!(session.token(), None);
    let outcome = updated(result.map(|_| None), Section::Companies);
    assert_eq!(
        outcome,
        Outcome::Failure {
            message: "세션이 만료되었습니다. 다시 로그인해주세요.".to_string(),
            relogin: true,
        }
    );
}

#[test]
fn server_error_keeps_token_and_carries_server_message() {
    let transport = MockTransport::scripted(vec![respond(500, json!({"message": "db down"}))]);
    let session = MemorySession::with_token("tok");
    let users: ResourceService<User> = ResourceService::new(api(&transport, &session), USERS);

    let result = users.get(1);

    assert_eq!(
        result,
        Err(AdminError::Server {
            status: 500,
            message: "db down".to_string()
        })
    );
    assert_eq!(session.token(), Some("tok".to_string()));
}

#[test]
fn transport_failure_maps_to_generic_toast() {
    let transport = MockTransport::scripted(vec![Err(TransportError("connection refused".to_string()))]);
    let session = Arc::new(MemorySession::default());
    let users: ResourceService<User> = ResourceService::new(api(&transport, &session), USERS);

    let err = users.get(1).expect_err("transport failure should surface");

    assert_eq!(err, AdminError::Transport("connection refused".to_string()));
    assert_eq!(err.toast_message(), "요청 처리 중 오류가 발생했습니다.");
    assert!(
        transport.requests()[0].header("authorization").is_none(),
        "no token means no Authorization header"
    );
}

#[test]
fn upload_puts_bytes_to_presigned_url_and_returns_public_url() {
    let presigned = "https://bucket.test/banners/abc.png?X-Amz-Signature=xyz&X-Amz-Expires=300";
    let transport = MockTransport::scripted(vec![
        respond(200, json!({"data": {"presignedUrl": presigned}})),
        Ok(HttpResponse {
            status: 200,
            body: Vec::new(),
        }),
    ]);
    let session = MemorySession::with_token("tok");
    let uploads = UploadService::new(api(&transport, &session));

    let url = uploads
        .upload(UploadScope::Banner, "Main.PNG", vec![1, 2, 3])
        .expect("upload should succeed");

    assert_eq!(url, "https://bucket.test/banners/abc.png");
    let requests = transport.requests();
    assert_eq!(requests.len(), 2);
    assert_eq!(requests[0].method, Method::Post);
    assert_eq!(
        requests[0].url,
        format!("{BASE_URL}/api/images/banners/presigned-url")
    );
    assert_eq!(body_json(&requests[0]), json!({"fileExtension": "png"}));
    assert_eq!(requests[1].method, Method::Put);
    assert_eq!(requests[1].url, presigned);
    assert_eq!(requests[1].header("content-type"), Some("image/png"));
    assert_eq!(requests[1].body.as_deref(), Some(&[1u8, 2, 3][..]));
    assert!(
        requests[1].header("authorization").is_none(),
        "storage PUT must not carry the bearer token"
    );
}

#[test]
fn upload_presign_failure_skips_put() {
    let transport = MockTransport::scripted(vec![respond(500, json!({"message": "s3 down"}))]);
    let session = MemorySession::with_token("tok");
    let uploads = UploadService::new(api(&transport, &session));

    let result = uploads.upload(UploadScope::Campaign, "thumb.jpg", vec![0]);

    assert!(matches!(result, Err(AdminError::Server { .. })));
    assert_eq!(transport.requests().len(), 1, "no PUT after a failed presign");
}

#[test]
fn upload_storage_rejection_does_not_log_out() {
    let transport = MockTransport::scripted(vec![
        respond(200, json!({"data": {"presignedUrl": "https://bucket.test/a.webp?sig=1"}})),
        Ok(HttpResponse {
            status: 401,
            body: Vec::new(),
        }),
    ]);
    let session = MemorySession::with_token("tok");
    let uploads = UploadService::new(api(&transport, &session));

    let result = uploads.upload(UploadScope::Markdown, "a.webp", vec![0]);

    assert!(matches!(
        result,
        Err(AdminError::UnexpectedStatus { status: 401, .. })
    ));
    assert_eq!(session.token(), Some("tok".to_string()));
}

#[test]
fn upload_without_extension_is_rejected_before_any_request() {
    let transport = MockTransport::scripted(Vec::new());
    let session = MemorySession::with_token("tok");
    let uploads = UploadService::new(api(&transport, &session));

    let result = uploads.upload(UploadScope::Banner, "README", vec![0]);

    assert!(matches!(result, Err(AdminError::InvalidFile(_))));
    assert!(transport.requests().is_empty());
}

fn titles_and_orders(banners: &[Banner]) -> Vec<(&str, u32)> {
    banners
        .iter()
        .map(|banner| (banner.title.as_str(), banner.display_order))
        .collect()
}

#[test]
fn staged_move_is_applied_locally_before_any_request() {
    let transport = MockTransport::scripted(Vec::new());
    let session = MemorySession::with_token("tok");
    let service = BannerOrderService::new(api(&transport, &session));
    let mut banners = vec![banner(10, "A", 1), banner(20, "B", 2), banner(30, "C", 3)];

    let staged = stage(&mut banners, 2, 0).expect("move should stage");

    assert_eq!(titles_and_orders(&banners), vec![("C", 1), ("A", 2), ("B", 3)]);
    assert!(transport.requests().is_empty(), "nothing is sent while staging");

    service
        .commit(staged.payload())
        .expect("commit should succeed");

    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].method, Method::Patch);
    assert_eq!(
        requests[0].url,
        format!("{BASE_URL}/api/banners/display-order")
    );
    assert_eq!(
        body_json(&requests[0]),
        json!([
            {"id": 30, "displayOrder": 1},
            {"id": 10, "displayOrder": 2},
            {"id": 20, "displayOrder": 3}
        ])
    );
}

#[test]
fn failed_commit_rolls_back_to_previous_order() {
    let transport = MockTransport::scripted(vec![respond(500, json!({}))]);
    let session = MemorySession::with_token("tok");
    let service = BannerOrderService::new(api(&transport, &session));
    let original = vec![banner(10, "A", 1), banner(20, "B", 2), banner(30, "C", 3)];
    let mut banners = original.clone();

    let staged = stage(&mut banners, 0, 2).expect("move should stage");
    assert_eq!(titles_and_orders(&banners), vec![("B", 1), ("C", 2), ("A", 3)]);

    let result = service.commit(staged.payload());

    assert!(matches!(result, Err(AdminError::Server { .. })));
    assert_eq!(staged.rollback(), original);
}

#[test]
fn out_of_range_or_same_slot_move_stages_nothing() {
    let original = vec![banner(10, "A", 1), banner(20, "B", 2)];
    let mut banners = original.clone();

    assert!(stage(&mut banners, 0, 3).is_none());
    assert!(stage(&mut banners, 1, 1).is_none());
    assert_eq!(banners, original);
}

#[test]
fn login_saves_token_and_logout_clears_it() {
    let transport = MockTransport::scripted(vec![respond(
        200,
        json!({"data": {"accessToken": "fresh"}}),
    )]);
    let session = MemorySession::with_token("stale");
    let auth = AuthService::new(api(&transport, &session));

    auth.login(" admin@chekok.kr ", "pw")
        .expect("login should succeed");

    assert_eq!(session.token(), Some("fresh".to_string()));
    let requests = transport.requests();
    assert_eq!(requests[0].url, format!("{BASE_URL}{LOGIN_PATH}"));
    assert!(
        requests[0].header("authorization").is_none(),
        "stale token must not be sent with the login request"
    );
    assert_eq!(
        body_json(&requests[0]),
        json!({"email": "admin@chekok.kr", "password": "pw"})
    );
    assert!(auth.is_logged_in().expect("session readable"));

    auth.logout().expect("logout should succeed");
    assert!(!auth.is_logged_in().expect("session readable"));
}

#[test]
fn login_with_blank_fields_sends_nothing() {
    let transport = MockTransport::scripted(Vec::new());
    let session = Arc::new(MemorySession::default());
    let auth = AuthService::new(api(&transport, &session));

    let result = auth.login("  ", "");

    assert_eq!(result, Err(AdminError::MissingFields(vec!["이메일", "비밀번호"])));
    assert!(transport.requests().is_empty());
}

#[test]
fn health_sample_decodes_and_history_keeps_last_24() {
    let transport = MockTransport::scripted(vec![respond(
        200,
        json!({"data": {"cpuUsage": 41.5, "memoryUsage": 63.0, "diskUsage": 120.0, "activeConnections": 7}}),
    )]);
    let session = MemorySession::with_token("tok");
    let health = HealthService::new(api(&transport, &session));

    let sample = health.sample().expect("health should decode");
    assert_eq!(sample.active_connections, Some(7));
    assert_eq!(HealthMetric::Disk.value(&sample), 100.0, "values are clamped to 100");

    let mut history = HealthHistory::default();
    for idx in 0..(HEALTH_HISTORY_LEN + 6) {
        history.push(HealthSample {
            cpu_usage: idx as f64,
            ..sample.clone()
        });
    }

    assert_eq!(history.len(), HEALTH_HISTORY_LEN);
    let cpu = history.series(HealthMetric::Cpu);
    assert_eq!(cpu.first().copied(), Some(6.0), "oldest samples are evicted");
    assert_eq!(history.latest().map(|sample| sample.cpu_usage), Some(29.0));
}

#[test]
fn markdown_bridge_uses_atx_fenced_and_dash_bullets() {
    let bridge = MarkdownBridge::default();

    let markdown = bridge
        .html_to_markdown(
            "<h2>안내</h2><ul><li>사과</li></ul><pre><code>let x = 1;\n</code></pre>",
        )
        .expect("conversion should succeed");

    assert!(markdown.contains("## 안내"), "{markdown}");
    assert!(
        markdown
            .lines()
            .any(|line| line.trim_start().starts_with('-') && line.contains("사과")),
        "{markdown}"
    );
    assert!(markdown.contains("```"), "{markdown}");
    assert!(markdown.contains("let x = 1;"), "{markdown}");
}

#[test]
fn markdown_bridge_bullet_marker_is_configurable() {
    let bridge = MarkdownBridge::new(BridgeOptions {
        bullet_marker: BulletMarker::Asterisk,
    });

    let markdown = bridge
        .html_to_markdown("<ul><li>배</li></ul>")
        .expect("conversion should succeed");

    assert!(markdown.trim_start().starts_with('*'), "{markdown}");
}

#[test]
fn markdown_bridge_keeps_span_and_br_verbatim() {
    let bridge = MarkdownBridge::default();

    let markdown = bridge
        .html_to_markdown("<p>색상 <span style=\"color: red\">빨강</span> 첫 줄<br>둘째 줄</p>")
        .expect("conversion should succeed");

    assert!(
        markdown.contains("<span style=\"color: red\">빨강</span>"),
        "{markdown}"
    );
    assert!(markdown.contains("<br>"), "{markdown}");
}

#[test]
fn markdown_to_html_renders_tables_strikethrough_and_raw_html() {
    let bridge = MarkdownBridge::default();

    let html = bridge.markdown_to_html(
        "# 제목\n\n~~취소~~ <span style=\"color: blue\">파랑</span>\n\n| a | b |\n|---|---|\n| 1 | 2 |\n",
    );

    assert!(html.contains("<h1>제목</h1>"), "{html}");
    assert!(html.contains("<del>취소</del>"), "{html}");
    assert!(html.contains("<span style=\"color: blue\">파랑</span>"), "{html}");
    assert!(html.contains("<table>"), "{html}");
}

#[test]
fn article_service_loads_markdown_and_saves_html() {
    let transport = MockTransport::scripted(vec![respond(
        200,
        json!({"data": {"id": 8, "title": "공지", "content": "<h1>점검</h1>", "campaignId": 12}}),
    )]);
    let session = MemorySession::with_token("tok");
    let posts = ArticleService::new(
        api(&transport, &session),
        ArticleKind::Post,
        MarkdownBridge::default(),
    );

    let draft = posts.load(8).expect("load should succeed");
    assert_eq!(draft.title, "공지");
    assert_eq!(draft.markdown.trim(), "# 점검");
    assert_eq!(draft.campaign_id, "12");

    posts.update(8, &draft).expect("update should succeed");
    let requests = transport.requests();
    assert_eq!(requests[1].method, Method::Put);
    assert_eq!(requests[1].url, format!("{BASE_URL}/api/admin/posts/8"));
    let body = body_json(&requests[1]);
    assert_eq!(body["campaignId"], json!(12));
    assert!(body["content"]
        .as_str()
        .is_some_and(|content| content.contains("<h1>점검</h1>")));
}

#[test]
fn post_without_campaign_is_rejected_but_notice_is_not() {
    let transport = MockTransport::scripted(Vec::new());
    let session = MemorySession::with_token("tok");
    let client = api(&transport, &session);
    let draft = ArticleDraft {
        title: "제목".to_string(),
        markdown: "본문".to_string(),
        campaign_id: String::new(),
    };

    let post_result =
        ArticleService::new(client.clone(), ArticleKind::Post, MarkdownBridge::default())
            .create(&draft);
    assert_eq!(post_result, Err(AdminError::MissingFields(vec!["캠페인 ID"])));
    assert!(transport.requests().is_empty());

    ArticleService::new(client, ArticleKind::Notice, MarkdownBridge::default())
        .create(&draft)
        .expect("notice create should succeed");
    let requests = transport.requests();
    assert_eq!(requests.len(), 1);
    assert_eq!(requests[0].url, format!("{BASE_URL}/api/admin/notices"));
    assert!(body_json(&requests[0]).get("campaignId").is_none());
}

#[test]
fn post_with_unparsable_campaign_id_sends_nothing() {
    let transport = MockTransport::scripted(Vec::new());
    let session = MemorySession::with_token("tok");
    let posts = ArticleService::new(
        api(&transport, &session),
        ArticleKind::Post,
        MarkdownBridge::default(),
    );
    let draft = ArticleDraft {
        title: "후기".to_string(),
        markdown: "본문".to_string(),
        campaign_id: "x12".to_string(),
    };

    assert_eq!(
        posts.create(&draft),
        Err(AdminError::InvalidNumber(vec!["캠페인 ID"]))
    );
    assert_eq!(
        posts.update(7, &draft),
        Err(AdminError::InvalidNumber(vec!["캠페인 ID"]))
    );
    assert!(transport.requests().is_empty());
}

#[test]
fn blank_markdown_counts_as_missing_content() {
    let transport = MockTransport::scripted(Vec::new());
    let session = MemorySession::with_token("tok");
    let markdowns = ArticleService::new(
        api(&transport, &session),
        ArticleKind::Markdown,
        MarkdownBridge::default(),
    );

    let result = markdowns.create(&ArticleDraft {
        title: "아티클".to_string(),
        markdown: " \n ".to_string(),
        campaign_id: String::new(),
    });

    assert_eq!(result, Err(AdminError::MissingFields(vec!["내용"])));
}

#[test]
fn toast_queue_assigns_ids_and_dismisses() {
    let mut queue = ToastQueue::default();
    let first = queue.push(ToastLevel::Success, "저장");
    let second = queue.push(ToastLevel::Error, "실패");

    queue.dismiss(first);

    assert_ne!(first, second);
    assert_eq!(queue.items().len(), 1);
    assert_eq!(queue.items()[0].message, "실패");
}

#[test]
fn config_defaults_and_overrides_from_lookup() {
    let defaults = AppConfig::from_lookup(|_| None).expect("defaults should load");
    assert_eq!(defaults, AppConfig::default());
    assert_eq!(defaults.health_poll_interval, Duration::from_secs(300));
    assert_eq!(defaults.search_debounce, Duration::from_millis(300));

    let config = AppConfig::from_lookup(|key| match key {
        "CHEKOK_API_BASE_URL" => Some(" https://admin-api.chekok.kr ".to_string()),
        "CHEKOK_PAGE_SIZE" => Some("50".to_string()),
        "CHEKOK_REQUEST_TIMEOUT_SECS" => Some("15".to_string()),
        _ => None,
    })
    .expect("overrides should load");
    assert_eq!(config.api_base_url, "https://admin-api.chekok.kr");
    assert_eq!(config.page_size, 50);
    assert_eq!(config.request_timeout, Some(Duration::from_secs(15)));
}

#[test]
fn config_rejects_invalid_values() {
    let zero_page = AppConfig::from_lookup(|key| {
        (key == "CHEKOK_PAGE_SIZE").then(|| "0".to_string())
    });
    assert!(zero_page.is_err());

    let bad_poll = AppConfig::from_lookup(|key| {
        (key == "CHEKOK_HEALTH_POLL_SECS").then(|| "five".to_string())
    });
    assert!(bad_poll.is_err());
}

#[test]
fn init_db_creates_session_table() {
    let temp_dir = unique_test_dir("init-db");
    let db_path = temp_dir.join("nested").join("session.sqlite");

    let result = init_db(&db_path);

    assert!(result.is_ok(), "init_db should succeed: {result:?}");
    let conn = Connection::open(&db_path).expect("should open sqlite db");
    let table_count: i64 = conn
        .query_row(
            "SELECT COUNT(*) FROM sqlite_master WHERE type = 'table' AND name = 'session'",
            [],
            |row| row.get(0),
        )
        .expect("table count query should succeed");
    assert_eq!(table_count, 1, "session table should exist");

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

#[test]
fn sqlite_session_store_saves_replaces_and_clears_token() {
    let temp_dir = unique_test_dir("session-store");
    let store = SqliteSessionStore {
        db_path: temp_dir.join("session.sqlite"),
    };
    store.init().expect("init should succeed");

    assert_eq!(store.load_token().expect("load"), None);
    store.save_token("first").expect("save first");
    store.save_token("second").expect("save second");
    assert_eq!(store.load_token().expect("load"), Some("second".to_string()));

    let conn = Connection::open(&store.db_path).expect("should open sqlite db");
    let rows: i64 = conn
        .query_row("SELECT COUNT(*) FROM session", [], |row| row.get(0))
        .expect("count query should succeed");
    assert_eq!(rows, 1, "only one token row is ever stored");

    store.clear_token().expect("clear");
    assert_eq!(store.load_token().expect("load"), None);

    fs::remove_dir_all(&temp_dir).expect("should cleanup temp dir");
}

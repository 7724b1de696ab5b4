use std::marker::PhantomData;
use std::sync::Arc;

use serde::Serialize;

use crate::domain::entities::page::{Page, PageRequest};
use crate::domain::entities::resource::{missing_fields, Endpoint, RequiredFields, Resource};
use crate::error::{AdminError, AdminResult};
use crate::usecase::ports::http::Method;
use crate::usecase::services::api_client::ApiClient;

/// CRUD over one REST collection. Create and update check required fields
/// and numeric inputs before anything goes over the wire.
pub struct ResourceService<R: Resource> {
    api: Arc<ApiClient>,
    endpoint: Endpoint,
    _record: PhantomData<fn() -> R>,
}

impl<R: Resource> Clone for ResourceService<R> {
    fn clone(&self) -> Self {
        Self {
            api: self.api.clone(),
            endpoint: self.endpoint,
            _record: PhantomData,
        }
    }
}

impl<R: Resource> ResourceService<R> {
    pub fn new(api: Arc<ApiClient>, endpoint: Endpoint) -> Self {
        Self {
            api,
            endpoint,
            _record: PhantomData,
        }
    }

    pub fn endpoint(&self) -> Endpoint {
        self.endpoint
    }

    pub fn list(&self, request: &PageRequest) -> AdminResult<Page<R>> {
        self.api.fetch(self.endpoint.path, request.to_query())
    }

    /// Collections the backend returns unpaged (banners).
    pub fn list_all(&self) -> AdminResult<Vec<R>> {
        self.api.fetch(self.endpoint.path, Vec::new())
    }

    pub fn get(&self, id: i64) -> AdminResult<R> {
        self.api.fetch(&self.endpoint.item_path(id), Vec::new())
    }

    pub fn create<P: Serialize + RequiredFields>(&self, payload: &P) -> AdminResult<Option<String>> {
        ensure_complete(payload)?;
        self.api
            .command(Method::Post, self.endpoint.path, Some(payload))
    }

    pub fn update<P: Serialize + RequiredFields>(
        &self,
        id: i64,
        payload: &P,
    ) -> AdminResult<Option<String>> {
        ensure_complete(payload)?;
        self.api
            .command(Method::Put, &self.endpoint.item_path(id), Some(payload))
    }

    pub fn partial_update<P: Serialize + RequiredFields>(
        &self,
        id: i64,
        payload: &P,
    ) -> AdminResult<Option<String>> {
        ensure_complete(payload)?;
        self.api
            .command(Method::Patch, &self.endpoint.item_path(id), Some(payload))
    }

    pub fn delete(&self, id: i64) -> AdminResult<Option<String>> {
        self.api
            .command::<()>(Method::Delete, &self.endpoint.item_path(id), None)
    }
}

fn ensure_complete<P: RequiredFields>(payload: &P) -> AdminResult<()> {
    let missing = missing_fields(payload);
    if !missing.is_empty() {
        return Err(AdminError::MissingFields(missing));
    }
    let malformed = payload.malformed_numbers();
    if !malformed.is_empty() {
        return Err(AdminError::InvalidNumber(malformed));
    }
    Ok(())
}

//! Resource Client
//!
//! The four REST operations every resource supports, typed by `Resource`.
//! No retries, no caching: each call is exactly one request.

use std::marker::PhantomData;

use async_trait::async_trait;
use log::{debug, warn};
use serde::de::DeserializeOwned;

use crate::domain::EntityId;
use crate::envelope::{DeleteResponse, Envelope};
use crate::error::{ApiError, ApiResult};
use crate::query::ToQuery;
use crate::resource::Resource;
use crate::transport::{ApiRequest, ApiResponse, Transport};

pub struct ResourceClient<R: Resource, T> {
    transport: T,
    _resource: PhantomData<fn() -> R>,
}

impl<R: Resource, T: Clone> Clone for ResourceClient<R, T> {
    fn clone(&self) -> Self {
        Self::new(self.transport.clone())
    }
}

impl<R: Resource, T> ResourceClient<R, T> {
    pub fn new(transport: T) -> Self {
        Self {
            transport,
            _resource: PhantomData,
        }
    }
}

impl<R: Resource, T: Transport> ResourceClient<R, T> {
    /// GET the filtered list
    pub async fn list(&self, filter: &R::Filter) -> ApiResult<Vec<R::Record>> {
        let request = ApiRequest::get(R::PATH).with_query(filter.to_query());
        let response = execute(&self.transport, request).await?;
        let records = Envelope::<R::Record>::decode(&response.body)?.into_data()?;
        debug!("[{}] listed {} records", R::PATH, records.len());
        Ok(records)
    }

    /// POST a new record; `None` when the server only acknowledges
    pub async fn create(&self, payload: &R::Payload) -> ApiResult<Option<R::Record>> {
        let request = ApiRequest::post(R::PATH).with_body(serde_json::to_value(payload)?);
        let response = execute(&self.transport, request).await?;
        decode_optional(&response)
    }

    /// PUT the payload over record `id`
    pub async fn update(&self, id: EntityId, payload: &R::Payload) -> ApiResult<Option<R::Record>> {
        let request = ApiRequest::put(R::item_path(id)).with_body(serde_json::to_value(payload)?);
        let response = execute(&self.transport, request).await?;
        decode_optional(&response)
    }

    /// DELETE record `id`; returns the server's success flag
    pub async fn delete(&self, id: EntityId) -> ApiResult<bool> {
        let response = execute(&self.transport, ApiRequest::delete(R::item_path(id))).await?;
        if response.is_empty() {
            return Ok(true);
        }
        let reply: DeleteResponse = serde_json::from_str(&response.body)?;
        Ok(reply.success)
    }
}

/// Send one request and turn non-2xx statuses into errors.
pub(crate) async fn execute<T: Transport + ?Sized>(
    transport: &T,
    request: ApiRequest,
) -> ApiResult<ApiResponse> {
    let method = request.method;
    let target = request.path_and_query();
    debug!("{} {}", method.as_str(), target);

    let response = transport.send(request).await.map_err(|err| {
        warn!("{} {} failed: {}", method.as_str(), target, err);
        err
    })?;

    if response.is_success() {
        Ok(response)
    } else {
        let err = ApiError::from_status(response.status, &response.body);
        warn!("{} {} -> {}: {}", method.as_str(), target, response.status, err);
        Err(err)
    }
}

pub(crate) fn decode_optional<V: DeserializeOwned>(response: &ApiResponse) -> ApiResult<Option<V>> {
    if response.is_empty() {
        Ok(None)
    } else {
        Ok(Some(serde_json::from_str(&response.body)?))
    }
}

#[async_trait(?Send)]
impl<'a, T: Transport + ?Sized> Transport for &'a T {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        (**self).send(request).await
    }
}

#[async_trait(?Send)]
impl<T: Transport + ?Sized> Transport for std::rc::Rc<T> {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        (**self).send(request).await
    }
}

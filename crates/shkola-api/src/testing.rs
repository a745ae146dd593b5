//! In-memory server for client tests.
//!
//! Keeps one JSON table per path and answers list/create/update/delete the
//! way the real API does. Every request is recorded; queued failures are
//! served before the table is touched.

use std::cell::RefCell;
use std::collections::{BTreeMap, VecDeque};

use async_trait::async_trait;
use serde_json::{json, Value};

use crate::error::ApiResult;
use crate::transport::{ApiRequest, ApiResponse, Method, Transport};

#[derive(Default)]
pub struct FakeServer {
    tables: RefCell<BTreeMap<String, Vec<Value>>>,
    next_id: RefCell<i64>,
    scripted: RefCell<VecDeque<ApiResult<ApiResponse>>>,
    requests: RefCell<Vec<ApiRequest>>,
    /// Answer creates with an empty body instead of the stored record
    pub silent_create: bool,
}

impl FakeServer {
    pub fn new() -> Self {
        Self {
            next_id: RefCell::new(100),
            ..Default::default()
        }
    }

    pub fn seed(self, path: &str, rows: Vec<Value>) -> Self {
        self.tables.borrow_mut().insert(path.to_string(), rows);
        self
    }

    /// Serve `response` for the next request instead of the table
    pub fn script(&self, response: ApiResult<ApiResponse>) {
        self.scripted.borrow_mut().push_back(response);
    }

    pub fn fail_next(&self, status: u16, body: &str) {
        self.script(Ok(ApiResponse::new(status, body)));
    }

    pub fn rows(&self, path: &str) -> Vec<Value> {
        self.tables.borrow().get(path).cloned().unwrap_or_default()
    }

    pub fn requests(&self) -> Vec<ApiRequest> {
        self.requests.borrow().clone()
    }

    pub fn last_request(&self) -> Option<ApiRequest> {
        self.requests.borrow().last().cloned()
    }

    fn handle(&self, request: &ApiRequest) -> ApiResponse {
        let (collection, id) = match request.path.rsplit_once('/') {
            Some((head, tail)) => match tail.parse::<i64>() {
                Ok(id) => (head.to_string(), Some(id)),
                Err(_) => (request.path.clone(), None),
            },
            None => (request.path.clone(), None),
        };
        let mut tables = self.tables.borrow_mut();
        let table = tables.entry(collection).or_default();

        match (request.method, id) {
            (Method::Get, None) => {
                ApiResponse::new(200, json!({ "data": table.clone(), "success": true }).to_string())
            }
            (Method::Post, None) => {
                let mut record = request.body.clone().unwrap_or_else(|| json!({}));
                let id = {
                    let mut next = self.next_id.borrow_mut();
                    *next += 1;
                    *next
                };
                record["id"] = json!(id);
                table.push(record.clone());
                if self.silent_create {
                    ApiResponse::new(201, "")
                } else {
                    ApiResponse::new(201, record.to_string())
                }
            }
            (Method::Put, Some(id)) => match table.iter_mut().find(|r| r["id"] == json!(id)) {
                Some(row) => {
                    let mut record = request.body.clone().unwrap_or_else(|| json!({}));
                    record["id"] = json!(id);
                    *row = record.clone();
                    ApiResponse::new(200, record.to_string())
                }
                None => not_found(),
            },
            (Method::Delete, Some(id)) => {
                let before = table.len();
                table.retain(|r| r["id"] != json!(id));
                let removed = table.len() < before;
                ApiResponse::new(200, json!({ "success": removed }).to_string())
            }
            _ => not_found(),
        }
    }
}

fn not_found() -> ApiResponse {
    ApiResponse::new(404, json!({ "message": "Not found" }).to_string())
}

#[async_trait(?Send)]
impl Transport for FakeServer {
    async fn send(&self, request: ApiRequest) -> ApiResult<ApiResponse> {
        self.requests.borrow_mut().push(request.clone());
        if let Some(scripted) = self.scripted.borrow_mut().pop_front() {
            return scripted;
        }
        Ok(self.handle(&request))
    }
}

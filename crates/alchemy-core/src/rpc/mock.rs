use std::collections::HashMap;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::error::{ApiError, Error};

use super::RpcTransport;

enum Reply {
    Result(Option<serde_json::Value>),
    Api(ApiError),
}

/// A mock transport for namespace tests. Replies are canned per method via
/// the builder; every call is recorded for later inspection.
pub struct MockTransport {
    replies: HashMap<String, Reply>,
    calls: Mutex<Vec<(String, Vec<serde_json::Value>)>>,
}

impl MockTransport {
    pub fn builder() -> MockTransportBuilder {
        MockTransportBuilder {
            replies: HashMap::new(),
        }
    }

    /// Calls made so far, in order: `(method, params)`.
    pub fn calls(&self) -> Vec<(String, Vec<serde_json::Value>)> {
        self.calls.lock().expect("mock call log poisoned").clone()
    }
}

pub struct MockTransportBuilder {
    replies: HashMap<String, Reply>,
}

impl MockTransportBuilder {
    /// Reply to every `method` call with `result`.
    pub fn with_result(self, method: &str, result: serde_json::Value) -> Self {
        self.push(method, Reply::Result(Some(result)))
    }

    /// Reply to `method` with no result.
    pub fn with_empty(self, method: &str) -> Self {
        self.push(method, Reply::Result(None))
    }

    /// Reply to `method` only when its first param equals `first_param`.
    pub fn with_result_for(
        self,
        method: &str,
        first_param: &str,
        result: serde_json::Value,
    ) -> Self {
        self.push(&keyed(method, first_param), Reply::Result(Some(result)))
    }

    pub fn with_api_error(self, method: &str, code: i64, message: &str) -> Self {
        self.push(
            method,
            Reply::Api(ApiError {
                code,
                message: message.to_owned(),
                data: None,
            }),
        )
    }

    fn push(mut self, key: &str, reply: Reply) -> Self {
        self.replies.insert(key.to_owned(), reply);
        self
    }

    pub fn build(self) -> MockTransport {
        MockTransport {
            replies: self.replies,
            calls: Mutex::new(Vec::new()),
        }
    }
}

fn keyed(method: &str, first_param: &str) -> String {
    format!("{method}#{first_param}")
}

#[async_trait]
impl RpcTransport for MockTransport {
    async fn request(
        &self,
        method: &str,
        params: Vec<serde_json::Value>,
    ) -> Result<Option<serde_json::Value>, Error> {
        let first = params
            .first()
            .and_then(serde_json::Value::as_str)
            .map(|p| keyed(method, p));
        self.calls
            .lock()
            .expect("mock call log poisoned")
            .push((method.to_owned(), params));

        let reply = first
            .and_then(|key| self.replies.get(&key))
            .or_else(|| self.replies.get(method));

        match reply {
            Some(Reply::Result(result)) => Ok(result.clone()),
            Some(Reply::Api(err)) => Err(err.clone().into()),
            None => panic!("MockTransport has no reply registered for {method}"),
        }
    }
}

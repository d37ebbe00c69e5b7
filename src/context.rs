use crate::params::Params;
use crate::types::HttpMethod;
use hashbrown::HashMap;
use serde_json::Value;

/// What the router needs from a per-request object: the request line to
/// route on and a place to put the captured parameters.
pub trait Context {
    fn method(&self) -> HttpMethod;
    fn path(&self) -> &str;
    fn params(&self) -> &Params;
    fn set_params(&mut self, params: Params);

    fn param(&self, name: &str) -> Option<&str> {
        self.params().get(name)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Response {
    status: u16,
    headers: Vec<(String, String)>,
    body: Vec<u8>,
}

impl Default for Response {
    fn default() -> Self {
        Self {
            status: 200,
            headers: Vec::new(),
            body: Vec::new(),
        }
    }
}

impl Response {
    pub fn status(&self) -> u16 {
        self.status
    }

    pub fn set_status(&mut self, status: u16) {
        self.status = status;
    }

    /// Header names compare case-insensitively.
    pub fn header(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key.eq_ignore_ascii_case(name))
            .map(|(_, value)| value.as_str())
    }

    pub fn set_header(&mut self, name: &str, value: impl Into<String>) {
        let value = value.into();
        match self.headers.iter_mut().find(|(key, _)| key.eq_ignore_ascii_case(name)) {
            Some(entry) => entry.1 = value,
            None => self.headers.push((name.to_string(), value)),
        }
    }

    pub fn headers(&self) -> &[(String, String)] {
        &self.headers
    }

    pub fn body(&self) -> &[u8] {
        &self.body
    }

    pub fn write(&mut self, bytes: impl AsRef<[u8]>) {
        self.body.extend_from_slice(bytes.as_ref());
    }
}

/// In-memory request context used when the router is driven without a
/// transport, and by the test suite.
#[derive(Debug, Clone)]
pub struct RequestContext {
    method: HttpMethod,
    path: String,
    query: Option<String>,
    params: Params,
    store: HashMap<String, Value>,
    response: Response,
}

impl RequestContext {
    /// `target` is a request target as it appears on the request line; a
    /// `?` starts the query string.
    pub fn new(method: HttpMethod, target: &str) -> Self {
        let (path, query) = match memchr::memchr(b'?', target.as_bytes()) {
            Some(pos) => (&target[..pos], Some(target[pos + 1..].to_string())),
            None => (target, None),
        };
        Self {
            method,
            path: path.to_string(),
            query,
            params: Params::new(),
            store: HashMap::new(),
            response: Response::default(),
        }
    }

    pub fn query_string(&self) -> Option<&str> {
        self.query.as_deref()
    }

    /// First value for `name` in the query string, undecoded.
    pub fn query_param(&self, name: &str) -> Option<&str> {
        self.query.as_deref()?.split('&').find_map(|pair| {
            let (key, value) = pair.split_once('=').unwrap_or((pair, ""));
            (key == name).then_some(value)
        })
    }

    pub fn set(&mut self, key: impl Into<String>, value: Value) {
        self.store.insert(key.into(), value);
    }

    pub fn get(&self, key: &str) -> Option<&Value> {
        self.store.get(key)
    }

    pub fn remove(&mut self, key: &str) -> Option<Value> {
        self.store.remove(key)
    }

    pub fn response(&self) -> &Response {
        &self.response
    }

    pub fn response_mut(&mut self) -> &mut Response {
        &mut self.response
    }
}

impl Context for RequestContext {
    fn method(&self) -> HttpMethod {
        self.method
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn params(&self) -> &Params {
        &self.params
    }

    fn set_params(&mut self, params: Params) {
        self.params = params;
    }
}

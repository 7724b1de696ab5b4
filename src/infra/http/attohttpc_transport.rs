use std::time::Duration;

use attohttpc::header::HeaderName;
use attohttpc::{Method as AttoMethod, RequestBuilder};

use crate::usecase::ports::http::{HttpRequest, HttpResponse, HttpTransport, Method, TransportError};

pub struct AttohttpcTransport {
    timeout: Option<Duration>,
}

impl AttohttpcTransport {
    pub fn new(timeout: Option<Duration>) -> Self {
        Self { timeout }
    }
}

fn to_atto_method(method: Method) -> AttoMethod {
    match method {
        Method::Get => AttoMethod::GET,
        Method::Post => AttoMethod::POST,
        Method::Put => AttoMethod::PUT,
        Method::Patch => AttoMethod::PATCH,
        Method::Delete => AttoMethod::DELETE,
    }
}

impl HttpTransport for AttohttpcTransport {
    fn send(&self, request: HttpRequest) -> Result<HttpResponse, TransportError> {
        let mut builder = RequestBuilder::new(to_atto_method(request.method), &request.url)
            .params(request.query.iter().map(|(key, value)| (key.as_str(), value.as_str())));
        for (name, value) in &request.headers {
            let header = HeaderName::from_bytes(name.as_bytes())
                .map_err(|err| TransportError(format!("invalid header name {name}: {err}")))?;
            builder = builder
                .try_header(header, value.as_str())
                .map_err(|err| TransportError(format!("invalid header value for {name}: {err}")))?;
        }
        if let Some(timeout) = self.timeout {
            builder = builder.timeout(timeout);
        }

        let response = match request.body {
            Some(body) => builder.bytes(body).send(),
            None => builder.send(),
        }
        .map_err(|err| TransportError(format!("{} {}: {err}", request.method.as_str(), request.url)))?;

        let status = response.status().as_u16();
        let body = response
            .bytes()
            .map_err(|err| TransportError(format!("failed to read response body: {err}")))?;
        Ok(HttpResponse { status, body })
    }
}

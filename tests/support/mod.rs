//! Shared test doubles for behavior tests.

#![allow(dead_code)]

use std::future::Future;
use std::pin::Pin;
use std::sync::{Arc, Mutex};

use lienscope_core::{
    CalendarDate, FixedClock, FredAdapter, FredConfig, HttpClient, HttpError, HttpErrorKind,
    HttpRequest, HttpResponse, MarketDataClient,
};

/// Transport double that replays one canned outcome and records every request.
#[derive(Debug)]
pub struct RecordingHttpClient {
    response: Result<HttpResponse, HttpError>,
    requests: Mutex<Vec<HttpRequest>>,
}

impl RecordingHttpClient {
    pub fn json(body: &str) -> Self {
        Self::returning(Ok(HttpResponse::ok_json(body)))
    }

    pub fn status(status: u16, body: &str) -> Self {
        Self::returning(Ok(HttpResponse::new(status, body)))
    }

    pub fn connection_refused() -> Self {
        Self::returning(Err(HttpError::new(
            HttpErrorKind::Connect,
            "connection failed: connection refused",
        )))
    }

    fn returning(response: Result<HttpResponse, HttpError>) -> Self {
        Self {
            response,
            requests: Mutex::new(Vec::new()),
        }
    }

    pub fn recorded_requests(&self) -> Vec<HttpRequest> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .clone()
    }
}

impl HttpClient for RecordingHttpClient {
    fn execute<'a>(
        &'a self,
        request: HttpRequest,
    ) -> Pin<Box<dyn Future<Output = Result<HttpResponse, HttpError>> + Send + 'a>> {
        self.requests
            .lock()
            .expect("request store should not be poisoned")
            .push(request);
        let response = self.response.clone();
        Box::pin(async move { response })
    }
}

pub fn today() -> CalendarDate {
    CalendarDate::parse("2024-06-15").expect("valid date")
}

pub fn test_config() -> FredConfig {
    FredConfig::default()
        .with_base_url("https://fred.test/fred")
        .with_api_key("test-key")
}

/// Client wired to `transport`, pinned to [`today`].
pub fn client_with(transport: Arc<RecordingHttpClient>) -> MarketDataClient {
    let adapter = FredAdapter::new(transport, test_config());
    MarketDataClient::new(Arc::new(adapter)).with_clock(Arc::new(FixedClock::new(today())))
}

use std::fmt::{Display, Formatter};

use lienscope_core::ProviderId;
use serde::{Serialize, Serializer};
use time::format_description::well_known::Rfc3339;
use time::OffsetDateTime;
use uuid::Uuid;

/// Request identifier (UUID v4) attached to every emitted document.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct RequestId(Uuid);

impl RequestId {
    pub fn new_v4() -> Self {
        Self(Uuid::new_v4())
    }
}

impl Display for RequestId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0.hyphenated())
    }
}

/// Envelope metadata.
///
/// Field order is fixed to keep deterministic JSON serialization.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Metadata {
    pub request_id: RequestId,
    #[serde(serialize_with = "serialize_rfc3339")]
    pub generated_at: OffsetDateTime,
    pub latency_ms: u64,
    pub sources: Vec<ProviderId>,
    pub warnings: Vec<String>,
}

impl Metadata {
    pub fn new(sources: Vec<ProviderId>, latency_ms: u64) -> Self {
        Self {
            request_id: RequestId::new_v4(),
            generated_at: OffsetDateTime::now_utc(),
            latency_ms,
            sources,
            warnings: Vec::new(),
        }
    }

    pub fn push_warning(&mut self, warning: impl Into<String>) {
        self.warnings.push(warning.into());
    }
}

/// Top-level JSON document written to stdout.
#[derive(Debug, Clone, Serialize)]
pub struct Envelope<T> {
    pub meta: Metadata,
    pub data: T,
}

fn serialize_rfc3339<S>(value: &OffsetDateTime, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    let rendered = value.format(&Rfc3339).map_err(serde::ser::Error::custom)?;
    serializer.serialize_str(&rendered)
}

use std::fmt::{Display, Formatter};

use serde::{Deserialize, Serialize};

/// Origin of a series, surfaced to the consuming layer as a freshness badge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    /// Live observations from the FRED API.
    Fred,
    /// Locally generated fallback data.
    Synthetic,
}

impl ProviderId {
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fred => "fred",
            Self::Synthetic => "synthetic",
        }
    }

    pub const fn is_live(self) -> bool {
        matches!(self, Self::Fred)
    }
}

impl Display for ProviderId {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

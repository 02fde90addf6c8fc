use crate::error::UnknownQtiVersion;
use std::fmt;
use std::str::FromStr;

/// The requested QTI version.
///
/// Only QTI 1.2 documents are rendered. `2.1` is accepted and carried along so callers can ask
/// for it, but the package produced is the same.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum QtiVersion {
    #[default]
    V1_2,
    V2_1,
}

impl QtiVersion {
    pub const ALL: [QtiVersion; 2] = [QtiVersion::V1_2, QtiVersion::V2_1];

    pub fn as_str(&self) -> &'static str {
        match self {
            QtiVersion::V1_2 => "1.2",
            QtiVersion::V2_1 => "2.1",
        }
    }

    /// The version whose documents are actually rendered for this request.
    pub fn rendered(&self) -> QtiVersion {
        QtiVersion::V1_2
    }
}

impl fmt::Display for QtiVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for QtiVersion {
    type Err = UnknownQtiVersion;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        QtiVersion::ALL
            .into_iter()
            .find(|v| v.as_str() == s)
            .ok_or_else(|| UnknownQtiVersion(s.to_string()))
    }
}

use serde::{Deserialize, Serialize};

/// Case count reported for a single region (state code such as `SP`).
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct RegionCaseCount {
    #[serde(rename = "estado")]
    pub region: String,
    #[serde(rename = "casos")]
    pub case_count: u32,
}

impl RegionCaseCount {
    pub fn new(region: impl Into<String>, case_count: u32) -> Self {
        Self {
            region: region.into(),
            case_count,
        }
    }
}

/// Envelope returned by the CKAN `package_search` action.
///
/// Only the success flag is consumed; the search result itself is ignored.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct PackageSearchResponse {
    pub success: bool,
}

pub fn total_cases(rows: &[RegionCaseCount]) -> u64 {
    rows.iter().map(|r| u64::from(r.case_count)).sum()
}

mod tests;

pub use mpox_common::{total_cases, PackageSearchResponse, RegionCaseCount};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LoadPhase {
    #[default]
    Idle,
    Loading,
    Loaded,
    LoadedWithWarning,
}

impl LoadPhase {
    pub fn is_terminal(&self) -> bool {
        matches!(self, LoadPhase::Loaded | LoadPhase::LoadedWithWarning)
    }
}

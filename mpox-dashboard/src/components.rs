pub mod case_table;
pub mod summary_card;

pub use case_table::CaseTable;
pub use summary_card::SummaryCard;

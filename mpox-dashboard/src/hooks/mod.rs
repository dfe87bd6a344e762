pub mod use_dashboard;

pub use use_dashboard::{
    load_data, load_for_generation, use_dashboard, use_dashboard_with_service,
};

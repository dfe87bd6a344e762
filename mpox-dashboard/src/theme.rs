// Inline styles for the dashboard page (dark navy background, slate cards).

pub const PAGE_STYLE: &str =
    "padding: 20px; font-family: Arial; background: #0b1220; color: white; min-height: 100vh;";
pub const WARNING_STYLE: &str = "color: orange;";
pub const CARDS_STYLE: &str = "display: flex; gap: 20px; margin-top: 20px;";
pub const CARD_STYLE: &str = "background: #1c2536; padding: 15px; border-radius: 10px;";
pub const TABLE_STYLE: &str = "margin-top: 20px; width: 100%;";

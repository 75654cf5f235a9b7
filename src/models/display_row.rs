// src/models/display_row.rs

/// Column headers of the calls table, in display order.
pub const CALL_TABLE_HEADERS: [&str; 8] = [
    "Call ID",
    "Created On",
    "Recipient",
    "Status",
    "Started At",
    "Ended At",
    "Price",
    "Price Unit",
];

/// String projection of one call, ready for rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRow {
    pub call_sid: String,
    pub created_on: String,
    pub recipient: String,
    pub status: String,
    pub started_at: String,
    pub ended_at: String,
    pub price: String,
    pub price_unit: String,
}

impl DisplayRow {
    /// Cells in header order.
    pub fn cells(&self) -> [&str; 8] {
        [
            self.call_sid.as_str(),
            self.created_on.as_str(),
            self.recipient.as_str(),
            self.status.as_str(),
            self.started_at.as_str(),
            self.ended_at.as_str(),
            self.price.as_str(),
            self.price_unit.as_str(),
        ]
    }
}

// src/models/mod.rs
pub mod call;
pub mod display_row;

pub use call::CallRecord;
pub use display_row::{DisplayRow, CALL_TABLE_HEADERS};

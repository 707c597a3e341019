/// Layout item identifiers are caller-assigned strings (`item-3`, `item-<uuid>`).
pub type ItemId = String;

/// All timestamps are UTC.
pub type Timestamp = chrono::DateTime<chrono::Utc>;

use serde::{Deserialize, Serialize};

/// Quote as returned by the quote server. Only the bid is carried; it stays
/// a string end to end.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Quote {
    pub bid: String,
}

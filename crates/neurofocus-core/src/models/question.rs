use serde::{Deserialize, Serialize};
use ts_rs::TS;

use super::category::Category;

#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct Question {
    /// Stable identifier, unique within a profile.
    pub id: String,
    pub text: String,
    pub category: Category,
}

impl Question {
    pub fn new(id: impl Into<String>, text: impl Into<String>, category: Category) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
            category,
        }
    }
}

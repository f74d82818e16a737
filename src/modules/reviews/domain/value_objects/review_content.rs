use serde::{Deserialize, Serialize};

use crate::shared::domain::bounded_string;
use crate::shared::errors::AppResult;

const MAX_CONTENT_LEN: usize = 10000;

/// Review text plus publication flag. Empty content is allowed; the draft
/// flag flips freely and is independent of the reading state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReviewContent {
    value: String,
    is_draft: bool,
}

impl ReviewContent {
    pub fn new(value: impl Into<String>, is_draft: bool) -> AppResult<Self> {
        let value = value.into();
        bounded_string::validate_allow_empty("ReviewContent", &value, MAX_CONTENT_LEN)?;
        Ok(Self { value, is_draft })
    }

    /// Returns a replacement instance; the original stays untouched.
    pub fn update(&self, value: impl Into<String>, is_draft: bool) -> AppResult<ReviewContent> {
        Self::new(value, is_draft)
    }

    pub fn value(&self) -> &str {
        &self.value
    }

    pub fn is_draft(&self) -> bool {
        self.is_draft
    }
}

//! Comment entity.

use serde::{Deserialize, Serialize};

use super::record::{DocumentFields, ExtraFields};

/// A comment on a post. Content and the target post reference are opaque.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Comment {
    #[serde(flatten)]
    pub fields: ExtraFields,
}

impl DocumentFields for Comment {
    fn extra(&self) -> &ExtraFields {
        &self.fields
    }

    fn extra_mut(&mut self) -> &mut ExtraFields {
        &mut self.fields
    }
}

//! Wishlist entry entity: "user X saved post Y".

use serde::{Deserialize, Serialize};

use super::record::{DocumentFields, ExtraFields};

/// A saved post. Duplicates are allowed.
///
/// Only `user.email` is interpreted; the post reference and any snapshot of
/// the post the front-end stores are passed through untouched.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct WishlistEntry {
    #[serde(flatten)]
    pub fields: ExtraFields,
}

impl WishlistEntry {
    pub fn user_email(&self) -> Option<&str> {
        self.str_at(&["user", "email"])
    }

    pub fn belongs_to(&self, email: &str) -> bool {
        self.user_email() == Some(email)
    }
}

impl DocumentFields for WishlistEntry {
    fn extra(&self) -> &ExtraFields {
        &self.fields
    }

    fn extra_mut(&mut self) -> &mut ExtraFields {
        &mut self.fields
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_belongs_to() {
        let entry: WishlistEntry =
            serde_json::from_value(json!({ "user": { "email": "a@x.com" }, "blogId": "1" }))
                .unwrap();
        let odd: WishlistEntry = serde_json::from_value(json!({ "user": 7 })).unwrap();

        assert!(entry.belongs_to("a@x.com"));
        assert!(!entry.belongs_to("b@x.com"));
        assert!(!odd.belongs_to("7"));
    }
}

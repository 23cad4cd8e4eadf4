//! Blog post entity.

use serde::{Deserialize, Serialize};

use super::record::{DocumentFields, ExtraFields};

/// A blog post.
///
/// Posts are schema-less: every field the author sends is stored as-is.
/// `title` and `category` drive search and `owner.email` drives
/// authorization; they are read through accessors, so a value of another
/// type simply does not match.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Post {
    #[serde(flatten)]
    pub fields: ExtraFields,
}

impl Post {
    pub fn title(&self) -> Option<&str> {
        self.str_at(&["title"])
    }

    pub fn category(&self) -> Option<&str> {
        self.str_at(&["category"])
    }

    pub fn owner_email(&self) -> Option<&str> {
        self.str_at(&["owner", "email"])
    }

    /// Returns true if `owner.email` equals `email` exactly.
    pub fn is_owned_by(&self, email: &str) -> bool {
        self.owner_email() == Some(email)
    }
}

impl DocumentFields for Post {
    fn extra(&self) -> &ExtraFields {
        &self.fields
    }

    fn extra_mut(&mut self) -> &mut ExtraFields {
        &mut self.fields
    }
}

/// Title/category search over posts.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PostSearch {
    /// Case-insensitive regular expression matched against the title.
    pub search: String,
    /// Exact category; `None` matches every category.
    pub category: Option<String>,
}

impl PostSearch {
    /// Builds a search from raw query parameters.
    ///
    /// A missing search term matches every title and an empty category filter
    /// is treated as absent.
    pub fn new(search: Option<String>, category: Option<String>) -> Self {
        Self {
            search: search.unwrap_or_default(),
            category: category.filter(|c| !c.is_empty()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn post(value: serde_json::Value) -> Post {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_post_keeps_every_field() {
        let body = json!({
            "title": "Hello World",
            "category": null,
            "long_description": "body",
            "owner": { "email": "a@x.com", "photo": "p.png" }
        });

        let value = serde_json::to_value(post(body.clone())).unwrap();

        assert_eq!(value, body);
    }

    #[test]
    fn test_accessors_ignore_other_types() {
        let typed = post(json!({ "title": 5, "category": ["tech"], "owner": "a@x.com" }));

        assert_eq!(typed.title(), None);
        assert_eq!(typed.category(), None);
        assert_eq!(typed.owner_email(), None);
        assert!(!typed.is_owned_by("a@x.com"));
    }

    #[test]
    fn test_is_owned_by() {
        let owned = post(json!({ "owner": { "email": "a@x.com" } }));

        assert!(owned.is_owned_by("a@x.com"));
        assert!(!owned.is_owned_by("A@x.com"));
        assert!(!Post::default().is_owned_by("a@x.com"));
    }

    #[test]
    fn test_search_defaults() {
        let search = PostSearch::new(None, Some(String::new()));
        assert_eq!(search.search, "");
        assert!(search.category.is_none());

        let search = PostSearch::new(Some("foo".into()), Some("tech".into()));
        assert_eq!(search.search, "foo");
        assert_eq!(search.category.as_deref(), Some("tech"));
    }
}

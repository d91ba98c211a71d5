//! The paginated list envelope.
//!
//! Every list endpoint, and every embedded list such as `invoice.lines`,
//! wraps its records the same way:
//!
//! ```json
//! {
//!   "object": "list",
//!   "data": [ ... ],
//!   "has_more": false,
//!   "url": "/v1/invoices/in_123/lines"
//! }
//! ```

use serde::{Deserialize, Serialize};
use serde_with::{DefaultOnNull, serde_as};

use crate::Object;

/// One page of records in platform order.
///
/// Fetching further pages is left to the HTTP layer; [`List::next_cursor`]
/// gives it the `starting_after` value to send.
#[serde_as]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(bound(serialize = "T: Serialize", deserialize = "T: Deserialize<'de>"))]
pub struct List<T> {
    /// Always `"list"`.
    pub object: String,
    /// Whether more records exist after this page.
    pub has_more: bool,
    /// The URL this list can be fetched from.
    pub url: String,
    /// The records, in the order returned.
    #[serde_as(as = "DefaultOnNull")]
    #[serde(default = "Vec::new")]
    pub data: Vec<T>,
}

impl<T> List<T> {
    /// Number of records on this page.
    #[must_use]
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// Whether this page holds no records.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// Iterates the records in wire order.
    pub fn iter(&self) -> std::slice::Iter<'_, T> {
        self.data.iter()
    }

    /// Id of the last record when another page exists.
    #[must_use]
    pub fn next_cursor(&self) -> Option<&str>
    where
        T: Object,
    {
        if self.has_more {
            self.data.last().map(Object::id)
        } else {
            None
        }
    }
}

impl<T> IntoIterator for List<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.into_iter()
    }
}

impl<'a, T> IntoIterator for &'a List<T> {
    type Item = &'a T;
    type IntoIter = std::slice::Iter<'a, T>;

    fn into_iter(self) -> Self::IntoIter {
        self.data.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
    struct Item {
        id: String,
    }

    impl Object for Item {
        const OBJECT: &'static str = "item";

        fn id(&self) -> &str {
            &self.id
        }
    }

    #[test]
    fn test_list_preserves_wire_order() {
        let list: List<Item> = serde_json::from_value(json!({
            "object": "list",
            "has_more": true,
            "url": "/v1/items",
            "data": [{ "id": "it_3" }, { "id": "it_1" }, { "id": "it_2" }]
        }))
        .unwrap();
        let ids: Vec<&str> = list.iter().map(|item| item.id.as_str()).collect();
        assert_eq!(ids, ["it_3", "it_1", "it_2"]);
        assert_eq!(list.len(), 3);
        assert_eq!(list.next_cursor(), Some("it_2"));
    }

    #[test]
    fn test_list_missing_data_is_empty() {
        let list: List<Item> = serde_json::from_value(json!({
            "object": "list",
            "has_more": false,
            "url": "/v1/items"
        }))
        .unwrap();
        assert!(list.is_empty());
        assert_eq!(list.next_cursor(), None);
    }

    #[test]
    fn test_list_null_data_is_empty() {
        let list: List<Item> = serde_json::from_value(json!({
            "object": "list",
            "has_more": false,
            "url": "/v1/items",
            "data": null
        }))
        .unwrap();
        assert!(list.is_empty());
    }

    #[test]
    fn test_list_element_failure_fails_list() {
        let result: Result<List<Item>, _> = serde_json::from_value(json!({
            "object": "list",
            "has_more": false,
            "url": "/v1/items",
            "data": [{ "id": "it_1" }, { "name": "no id" }]
        }));
        assert!(result.is_err());
    }

    #[test]
    fn test_list_without_more_has_no_cursor() {
        let list: List<Item> = serde_json::from_value(json!({
            "object": "list",
            "has_more": false,
            "url": "/v1/items",
            "data": [{ "id": "it_1" }]
        }))
        .unwrap();
        assert_eq!(list.next_cursor(), None);
        assert_eq!(list.into_iter().count(), 1);
    }
}

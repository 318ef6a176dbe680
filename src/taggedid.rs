use std::borrow::Borrow;
use std::cmp::Ordering;
use std::convert::Infallible;
use std::fmt::{Debug, Display};
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// A string identifier that belongs to the entity `T`.
///
/// `T` only exists at compile time: a `TaggedId<User>` can never be passed
/// where a `TaggedId<Article>` is expected, yet both are a plain `String` at
/// runtime and serialize as a plain string. The contents are kept verbatim.
pub struct TaggedId<T> {
    value: String,
    // fn() -> T keeps Send/Sync and drop check independent of T
    tag: PhantomData<fn() -> T>,
}

impl<T> TaggedId<T> {
    pub fn new(value: impl Into<String>) -> TaggedId<T> {
        TaggedId {
            value: value.into(),
            tag: PhantomData,
        }
    }

    /// Creates an identifier from a random v4 uuid.
    pub fn generate() -> TaggedId<T> {
        TaggedId::new(Uuid::new_v4().to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.value
    }

    pub fn into_string(self) -> String {
        self.value
    }
}

impl<T> Clone for TaggedId<T> {
    fn clone(&self) -> TaggedId<T> {
        TaggedId::new(self.value.clone())
    }
}

impl<T> PartialEq for TaggedId<T> {
    fn eq(&self, other: &TaggedId<T>) -> bool {
        self.value == other.value
    }
}

impl<T> Eq for TaggedId<T> {}

impl<T> PartialOrd for TaggedId<T> {
    fn partial_cmp(&self, other: &TaggedId<T>) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for TaggedId<T> {
    fn cmp(&self, other: &TaggedId<T>) -> Ordering {
        self.value.cmp(&other.value)
    }
}

impl<T> Hash for TaggedId<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.value.hash(state);
    }
}

impl<T> Display for TaggedId<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Display::fmt(&self.value, f)
    }
}

impl<T> Debug for TaggedId<T> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> Result<(), std::fmt::Error> {
        Debug::fmt(&self.value, f)
    }
}

impl<T> From<&str> for TaggedId<T> {
    fn from(value: &str) -> TaggedId<T> {
        TaggedId::new(value)
    }
}

impl<T> From<String> for TaggedId<T> {
    fn from(value: String) -> TaggedId<T> {
        TaggedId::new(value)
    }
}

impl<T> From<TaggedId<T>> for String {
    fn from(id: TaggedId<T>) -> String {
        id.value
    }
}

impl<T> FromStr for TaggedId<T> {
    type Err = Infallible;
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TaggedId::new(s))
    }
}

impl<T> AsRef<str> for TaggedId<T> {
    fn as_ref(&self) -> &str {
        &self.value
    }
}

impl<T> Borrow<str> for TaggedId<T> {
    fn borrow(&self) -> &str {
        &self.value
    }
}

impl<T> Serialize for TaggedId<T> {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.value.serialize(serializer)
    }
}

impl<'de, T> Deserialize<'de> for TaggedId<T> {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(TaggedId::new(s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;
    use std::collections::hash_map::DefaultHasher;
    use std::collections::{HashMap, HashSet};
    use std::mem::size_of;

    struct Widget;
    type WidgetId = TaggedId<Widget>;

    // a tag that is neither Send, Sync, Clone nor Hash
    #[allow(dead_code)]
    struct Unshared(std::rc::Rc<()>);
    type UnsharedId = TaggedId<Unshared>;

    fn hash_of<H: Hash>(value: &H) -> u64 {
        let mut hasher = DefaultHasher::new();
        value.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn keeps_value_verbatim() {
        for raw in &["", " padded ", "MiXeD-Case", "emoji-🦀", "line\nbreak"] {
            let id = WidgetId::from(*raw);
            assert_eq!(id.as_str(), *raw);
            assert_eq!(id.to_string(), *raw);
        }
    }

    #[test]
    fn constructors_agree() {
        let from_new = WidgetId::new("widget-7");
        let from_str: WidgetId = "widget-7".into();
        let from_string: WidgetId = String::from("widget-7").into();
        let parsed: WidgetId = "widget-7".parse().unwrap();

        assert_eq!(from_new, from_str);
        assert_eq!(from_new, from_string);
        assert_eq!(from_new, parsed);
        assert_eq!(String::from(parsed), "widget-7".to_string());
    }

    #[test]
    fn debug_is_quoted_string() {
        assert_eq!(format!("{:?}", WidgetId::new("w-1")), "\"w-1\"");
    }

    #[test]
    fn serializes_as_plain_string() {
        let json = serde_json::to_string(&WidgetId::new("widget-7")).unwrap();
        assert_eq!(json, "\"widget-7\"");
    }

    #[test]
    fn deserializes_from_plain_string() {
        let id: WidgetId = serde_json::from_str("\"widget-7\"").unwrap();
        assert_eq!(id, WidgetId::new("widget-7"));
    }

    #[test]
    fn rejects_non_string_values() {
        for json in &["42", "4.2", "true", "null", "[\"widget-7\"]", "{\"value\":\"widget-7\"}"] {
            let result = serde_json::from_str::<WidgetId>(json);
            let err = result.unwrap_err();
            assert!(err.is_data(), "expected a data error for {}", json);
        }
    }

    #[test]
    fn no_bounds_on_tag() {
        fn assert_send_sync<S: Send + Sync>() {}
        assert_send_sync::<UnsharedId>();

        let id = UnsharedId::new("u-1");
        let copy = id.clone();
        assert_eq!(id, copy);
        assert_eq!(hash_of(&id), hash_of(&copy));
    }

    #[test]
    fn tag_takes_no_space() {
        assert_eq!(size_of::<WidgetId>(), size_of::<String>());
        assert_eq!(size_of::<UnsharedId>(), size_of::<String>());
    }

    #[test]
    fn map_lookup_by_str() {
        let mut names = HashMap::new();
        names.insert(WidgetId::new("widget-7"), "sprocket");

        assert_eq!(names.get("widget-7"), Some(&"sprocket"));
        assert_eq!(names.get("widget-8"), None);
    }

    #[test]
    fn orders_by_value() {
        let mut ids = vec![WidgetId::new("c"), WidgetId::new("a"), WidgetId::new("b")];
        ids.sort();
        let ids: Vec<&str> = ids.iter().map(WidgetId::as_str).collect();
        assert_eq!(ids, vec!["a", "b", "c"]);
    }

    #[test]
    fn generate_makes_distinct_uuids() {
        let ids: HashSet<WidgetId> = (0..64).map(|_| WidgetId::generate()).collect();
        assert_eq!(ids.len(), 64);
        for id in &ids {
            assert!(Uuid::parse_str(id.as_str()).is_ok(), "{} is not a uuid", id);
        }
    }

    proptest! {
        #[test]
        fn construction_is_identity(s in ".*") {
            let id = WidgetId::new(s.clone());
            prop_assert_eq!(id.as_str(), s.as_str());
        }

        // a tiny alphabet so equal pairs actually turn up
        #[test]
        fn equal_iff_strings_equal(a in "[ab]{0,2}", b in "[ab]{0,2}") {
            let left = WidgetId::new(a.clone());
            let right = WidgetId::new(b.clone());
            prop_assert_eq!(left == right, a == b);
            if left == right {
                prop_assert_eq!(hash_of(&left), hash_of(&right));
            }
        }

        #[test]
        fn hash_matches_str(s in ".*") {
            prop_assert_eq!(hash_of(&WidgetId::new(s.clone())), hash_of(&s.as_str()));
        }

        #[test]
        fn json_roundtrip(s in ".*") {
            let id = WidgetId::new(s);
            let json = serde_json::to_string(&id).unwrap();
            let parsed: WidgetId = serde_json::from_str(&json).unwrap();
            prop_assert_eq!(parsed, id);
        }
    }
}

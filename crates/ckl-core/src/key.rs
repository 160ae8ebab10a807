//! Structured storage keys for checklist state.
//!
//! The store is a flat string-keyed map, so every key is a serialized
//! `StateKey`: `<kind>:<escaped list name>[:<index>]`. The list name is
//! escaped (`\\` and `\:`) so two distinct lists can never produce the
//! same key, even when one name is a prefix of the other ("Todo" vs
//! "Todo2") or contains the delimiter itself.

/// One storage key, addressing a single stored value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StateKey {
    /// Checked state of item `index` (1-based), stored as "true"/"false".
    Item { list: String, index: u32 },
    /// Display label of item `index` (1-based).
    Label { list: String, index: u32 },
    /// Number of checked items, stored as a decimal string.
    CheckedCount { list: String },
    /// Total number of items, stored as a decimal string.
    TotalCount { list: String },
}

const KIND_ITEM: &str = "item";
const KIND_LABEL: &str = "label";
const KIND_CHECKED: &str = "checked";
const KIND_TOTAL: &str = "total";

impl StateKey {
    pub fn item(list: &str, index: u32) -> Self {
        StateKey::Item {
            list: list.to_string(),
            index,
        }
    }

    pub fn label(list: &str, index: u32) -> Self {
        StateKey::Label {
            list: list.to_string(),
            index,
        }
    }

    pub fn checked_count(list: &str) -> Self {
        StateKey::CheckedCount {
            list: list.to_string(),
        }
    }

    pub fn total_count(list: &str) -> Self {
        StateKey::TotalCount {
            list: list.to_string(),
        }
    }

    /// The list this key belongs to.
    pub fn list(&self) -> &str {
        match self {
            StateKey::Item { list, .. }
            | StateKey::Label { list, .. }
            | StateKey::CheckedCount { list }
            | StateKey::TotalCount { list } => list,
        }
    }

    /// String form for persistence: "kind:name" or "kind:name:index".
    pub fn to_storage_key(&self) -> String {
        match self {
            StateKey::Item { list, index } => format!("{KIND_ITEM}:{}:{index}", escape(list)),
            StateKey::Label { list, index } => format!("{KIND_LABEL}:{}:{index}", escape(list)),
            StateKey::CheckedCount { list } => format!("{KIND_CHECKED}:{}", escape(list)),
            StateKey::TotalCount { list } => format!("{KIND_TOTAL}:{}", escape(list)),
        }
    }

    /// Parse from persisted string key. Returns None for malformed keys
    /// (wrong segment count, unknown kind, non-numeric index).
    pub fn from_storage_key(s: &str) -> Option<Self> {
        let segments = split_segments(s);
        match segments.as_slice() {
            [kind, list] => {
                let list = list.clone();
                match kind.as_str() {
                    KIND_CHECKED => Some(StateKey::CheckedCount { list }),
                    KIND_TOTAL => Some(StateKey::TotalCount { list }),
                    _ => None,
                }
            }
            [kind, list, index] => {
                let index: u32 = index.parse().ok()?;
                let list = list.clone();
                match kind.as_str() {
                    KIND_ITEM => Some(StateKey::Item { list, index }),
                    KIND_LABEL => Some(StateKey::Label { list, index }),
                    _ => None,
                }
            }
            _ => None,
        }
    }
}

/// Escape a list name so ':' never collides with the segment delimiter.
fn escape(name: &str) -> String {
    let mut out = String::with_capacity(name.len());
    for c in name.chars() {
        match c {
            '\\' => out.push_str("\\\\"),
            ':' => out.push_str("\\:"),
            c => out.push(c),
        }
    }
    out
}

/// Split a serialized key on unescaped ':' and undo the escaping.
fn split_segments(s: &str) -> Vec<String> {
    let mut segments = Vec::new();
    let mut current = String::new();
    let mut chars = s.chars();
    while let Some(c) = chars.next() {
        match c {
            '\\' => {
                // Trailing lone backslash is kept literally.
                current.push(chars.next().unwrap_or('\\'));
            }
            ':' => segments.push(std::mem::take(&mut current)),
            c => current.push(c),
        }
    }
    segments.push(current);
    segments
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn key_roundtrip_all_kinds() {
        let keys = [
            StateKey::item("Groceries", 1),
            StateKey::label("Groceries", 12),
            StateKey::checked_count("Groceries"),
            StateKey::total_count("Groceries"),
        ];
        for key in keys {
            let s = key.to_storage_key();
            assert_eq!(StateKey::from_storage_key(&s), Some(key));
        }
    }

    #[test]
    fn prefix_names_never_collide() {
        // The naive "<name><index>" scheme made "Todo" item 21 collide
        // with "Todo2" item 1; the delimited form keeps them apart.
        let a = StateKey::item("Todo", 21).to_storage_key();
        let b = StateKey::item("Todo2", 1).to_storage_key();
        assert_ne!(a, b);

        let c = StateKey::checked_count("Todo").to_storage_key();
        let d = StateKey::total_count("Todo").to_storage_key();
        assert_ne!(c, d);
    }

    #[test]
    fn names_with_delimiter_roundtrip() {
        let key = StateKey::item("a:b\\c", 3);
        let s = key.to_storage_key();
        assert_eq!(StateKey::from_storage_key(&s), Some(key));

        // "a:b" item 1 vs "a" label-ish name — serialized forms differ.
        let e = StateKey::checked_count("a:b").to_storage_key();
        let f = StateKey::checked_count("a\\:b").to_storage_key();
        assert_ne!(e, f);
    }

    #[test]
    fn malformed_keys_rejected() {
        assert_eq!(StateKey::from_storage_key(""), None);
        assert_eq!(StateKey::from_storage_key("item"), None);
        assert_eq!(StateKey::from_storage_key("item:x:notanumber"), None);
        assert_eq!(StateKey::from_storage_key("mystery:x"), None);
        assert_eq!(StateKey::from_storage_key("checked:x:1"), None);
    }

    #[test]
    fn list_accessor() {
        assert_eq!(StateKey::item("Chores", 2).list(), "Chores");
        assert_eq!(StateKey::total_count("Chores").list(), "Chores");
    }
}

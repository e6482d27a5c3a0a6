use serde::{Deserialize, Serialize};

//
// ──────────────────────────────────────────────────────────
// PatchField (explicit PATCH semantics)
// ──────────────────────────────────────────────────────────
// - Unset: field omitted => stored value kept
// - Null: explicit null => stored value cleared
// - Value(v): replaced with v
//
// Patch structs mark every field with
// #[serde(default, skip_serializing_if = "PatchField::is_unset")]
// so the serialized patch is exactly the partial object to merge.
//

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PatchField<T> {
    #[serde(skip)]
    Unset,
    Null,
    Value(T),
}

impl<T> Default for PatchField<T> {
    fn default() -> Self {
        PatchField::Unset
    }
}

impl<T> PatchField<T> {
    pub fn is_unset(&self) -> bool {
        matches!(self, PatchField::Unset)
    }

    #[cfg(test)]
    pub fn is_null(&self) -> bool {
        matches!(self, PatchField::Null)
    }

    #[cfg(test)]
    pub fn as_value(&self) -> Option<&T> {
        if let PatchField::Value(v) = self {
            Some(v)
        } else {
            None
        }
    }
}

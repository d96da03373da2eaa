use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Shared identity and descriptive metadata carried by every model entity
///
/// The `owner_id` field is a weak back-reference: it is lookup-only and never
/// an ownership edge. The owner's collection, not this field, decides the
/// entity's lifetime.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ElementData {
    /// Unique identifier, immutable after creation (UUID v7 when generated)
    pub id: String,

    /// Optional human-readable name
    pub name: Option<String>,

    /// Optional short name
    pub short_name: Option<String>,

    /// Optional fully qualified name
    pub qualified_name: Option<String>,

    /// Optional free-text description
    pub description: Option<String>,

    /// Weak back-reference to the owning element, if any
    pub owner_id: Option<String>,
}

impl ElementData {
    /// Create element metadata with the given id and no descriptive fields
    pub fn new(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            name: None,
            short_name: None,
            qualified_name: None,
            description: None,
            owner_id: None,
        }
    }

    /// Create element metadata with a freshly generated id
    pub fn generate() -> Self {
        Self::new(fresh_id())
    }

    /// Set the name, builder-style
    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    /// Set the short name, builder-style
    pub fn with_short_name(mut self, short_name: impl Into<String>) -> Self {
        self.short_name = Some(short_name.into());
        self
    }

    /// Set the qualified name, builder-style
    pub fn with_qualified_name(mut self, qualified_name: impl Into<String>) -> Self {
        self.qualified_name = Some(qualified_name.into());
        self
    }

    /// Set the description, builder-style
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    /// Check whether this element currently records an owner
    pub fn has_owner(&self) -> bool {
        self.owner_id.is_some()
    }
}

/// Generate a fresh time-ordered id (UUID v7)
pub fn fresh_id() -> String {
    Uuid::now_v7().to_string()
}

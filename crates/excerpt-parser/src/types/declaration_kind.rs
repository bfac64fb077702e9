use serde::{Deserialize, Serialize};

/// The kind of a declaration node.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum DeclarationKind {
    Namespace,
    Type,
    Method,
    Property,
    Indexer,
    Event,
    Constructor,
    Destructor,
    Accessor(AccessorKind),
}

impl DeclarationKind {
    /// Whether accessor declarations may appear below this kind.
    #[must_use]
    pub const fn owns_accessors(self) -> bool {
        matches!(self, Self::Property | Self::Indexer | Self::Event)
    }
}

impl std::fmt::Display for DeclarationKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Namespace => "namespace",
            Self::Type => "type",
            Self::Method => "method",
            Self::Property => "property",
            Self::Indexer => "indexer",
            Self::Event => "event",
            Self::Constructor => "constructor",
            Self::Destructor => "destructor",
            Self::Accessor(accessor) => return write!(f, "accessor({accessor})"),
        };
        write!(f, "{s}")
    }
}

/// Accessor subkind, spelled the way it appears in source.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AccessorKind {
    Get,
    Set,
    Init,
    Add,
    Remove,
}

impl AccessorKind {
    pub const ALL: [Self; 5] = [Self::Get, Self::Set, Self::Init, Self::Add, Self::Remove];

    /// Parse an accessor keyword. Case-sensitive.
    #[must_use]
    pub fn from_keyword(keyword: &str) -> Option<Self> {
        match keyword {
            "get" => Some(Self::Get),
            "set" => Some(Self::Set),
            "init" => Some(Self::Init),
            "add" => Some(Self::Add),
            "remove" => Some(Self::Remove),
            _ => None,
        }
    }

    #[must_use]
    pub const fn keyword(self) -> &'static str {
        match self {
            Self::Get => "get",
            Self::Set => "set",
            Self::Init => "init",
            Self::Add => "add",
            Self::Remove => "remove",
        }
    }
}

impl std::fmt::Display for AccessorKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.keyword())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accessor_keywords_round_trip() {
        for accessor in AccessorKind::ALL {
            assert_eq!(AccessorKind::from_keyword(accessor.keyword()), Some(accessor));
        }
    }

    #[test]
    fn accessor_keywords_are_case_sensitive() {
        assert_eq!(AccessorKind::from_keyword("Get"), None);
        assert_eq!(AccessorKind::from_keyword("value"), None);
    }

    #[test]
    fn only_members_with_bodies_own_accessors() {
        assert!(DeclarationKind::Property.owns_accessors());
        assert!(DeclarationKind::Indexer.owns_accessors());
        assert!(DeclarationKind::Event.owns_accessors());
        assert!(!DeclarationKind::Method.owns_accessors());
        assert!(!DeclarationKind::Accessor(AccessorKind::Get).owns_accessors());
    }

    #[test]
    fn display_uses_snake_case() {
        assert_eq!(DeclarationKind::Constructor.to_string(), "constructor");
        assert_eq!(
            DeclarationKind::Accessor(AccessorKind::Remove).to_string(),
            "accessor(remove)"
        );
    }
}

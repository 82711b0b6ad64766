/// Field kinds that carry a preference ordinal.
///
/// Only these three kinds receive a `pref` during normalization;
/// every other field passes through untouched.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FieldKind {
    Email,
    Tel,
    Adr,
}

impl FieldKind {
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Email => "email",
            Self::Tel => "tel",
            Self::Adr => "adr",
        }
    }

    /// Maps a field name onto a tracked kind, if it is one.
    #[must_use]
    pub fn from_field(field: &str) -> Option<Self> {
        match field {
            "email" => Some(Self::Email),
            "tel" => Some(Self::Tel),
            "adr" => Some(Self::Adr),
            _ => None,
        }
    }

    /// All tracked kinds, in counter order.
    #[must_use]
    pub const fn all() -> [Self; 3] {
        [Self::Email, Self::Tel, Self::Adr]
    }
}

impl std::fmt::Display for FieldKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_field_tracked() {
        assert_eq!(FieldKind::from_field("email"), Some(FieldKind::Email));
        assert_eq!(FieldKind::from_field("tel"), Some(FieldKind::Tel));
        assert_eq!(FieldKind::from_field("adr"), Some(FieldKind::Adr));
    }

    #[test]
    fn from_field_untracked() {
        assert_eq!(FieldKind::from_field("fn"), None);
        assert_eq!(FieldKind::from_field("note"), None);
    }
}

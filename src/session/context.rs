/// The name/subject pair a conversation is framed around.
///
/// Both fields are guaranteed non-empty; the only way to build one is
/// through [`SessionContext::new`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionContext {
    name: String,
    subject: String,
}

impl SessionContext {
    /// Returns `None` if either field is empty or whitespace-only.
    pub fn new(name: impl Into<String>, subject: impl Into<String>) -> Option<Self> {
        let name = name.into().trim().to_string();
        let subject = subject.into().trim().to_string();

        if name.is_empty() || subject.is_empty() {
            return None;
        }

        Some(Self { name, subject })
    }

    /// Builds a context from values that may not have been supplied at all.
    pub fn from_parts(name: Option<String>, subject: Option<String>) -> Option<Self> {
        Self::new(name?, subject?)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn subject(&self) -> &str {
        &self.subject
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_new_trims_fields() {
        let context = SessionContext::new("  Alice ", "\tla mer\n").unwrap();
        assert_eq!(context.name(), "Alice");
        assert_eq!(context.subject(), "la mer");
    }

    #[test]
    fn test_new_rejects_blank_fields() {
        assert!(SessionContext::new("", "la mer").is_none());
        assert!(SessionContext::new("Alice", "   ").is_none());
    }

    #[test]
    fn test_from_parts_requires_both() {
        assert!(SessionContext::from_parts(None, Some("la mer".to_string())).is_none());
        assert!(SessionContext::from_parts(Some("Alice".to_string()), None).is_none());
        assert!(
            SessionContext::from_parts(Some("Alice".to_string()), Some("la mer".to_string()))
                .is_some()
        );
    }
}

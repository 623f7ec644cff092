use crate::session::SessionContext;

pub const PREAMBLE_TEMPLATE: &str = "Agis comme un chat bot qui répond aux question de {name}.
    Répond en commencent par son prénom et une salutation originale. La thématique est {subject}";

#[allow(clippy::literal_string_with_formatting_args)]
pub fn build_preamble(context: &SessionContext) -> String {
    // {name} and {subject} are placeholders for string replacement, not format arguments
    PREAMBLE_TEMPLATE
        .replace("{name}", context.name())
        .replace("{subject}", context.subject())
}

/// Builds the single user prompt sent for a question.
///
/// The preamble and the question are joined with no separator.
pub fn build_prompt(context: &SessionContext, question: &str) -> String {
    let mut prompt = build_preamble(context);
    prompt.push_str(question);
    prompt
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn context() -> SessionContext {
        SessionContext::new("Alice", "les volcans").unwrap()
    }

    #[test]
    fn test_build_preamble_interpolates_context() {
        let preamble = build_preamble(&context());
        assert!(preamble.starts_with("Agis comme un chat bot qui répond aux question de Alice."));
        assert!(preamble.ends_with("La thématique est les volcans"));
        assert!(!preamble.contains("{name}"));
        assert!(!preamble.contains("{subject}"));
    }

    #[test]
    fn test_build_prompt_joins_without_separator() {
        let prompt = build_prompt(&context(), "Pourquoi ça explose?");
        assert!(prompt.ends_with("les volcansPourquoi ça explose?"));
    }

    #[test]
    fn test_template_has_placeholders() {
        assert!(PREAMBLE_TEMPLATE.contains("{name}"));
        assert!(PREAMBLE_TEMPLATE.contains("{subject}"));
    }
}

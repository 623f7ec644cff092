//! Append-only record of the conversation.

pub const USER_LABEL: &str = "Vous :";
pub const ASSISTANT_LABEL: &str = "Réponse de l'IA :";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Assistant,
}

impl Speaker {
    pub const fn label(self) -> &'static str {
        match self {
            Self::User => USER_LABEL,
            Self::Assistant => ASSISTANT_LABEL,
        }
    }
}

/// One message of the conversation. Never changes once created.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Turn {
    pub speaker: Speaker,
    pub text: String,
}

impl Turn {
    pub fn user(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::User,
            text: text.into(),
        }
    }

    pub fn assistant(text: impl Into<String>) -> Self {
        Self {
            speaker: Speaker::Assistant,
            text: text.into(),
        }
    }

    /// The line shown for this turn, labeled by speaker.
    pub fn render(&self) -> String {
        format!("{} {}", self.speaker.label(), self.text)
    }
}

/// Turns in the order they happened.
///
/// The only mutation is [`Transcript::push_exchange`], which adds a question
/// and its answer together.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Transcript {
    turns: Vec<Turn>,
}

impl Transcript {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push_exchange(&mut self, question: impl Into<String>, answer: impl Into<String>) {
        self.turns.push(Turn::user(question));
        self.turns.push(Turn::assistant(answer));
    }

    pub fn turns(&self) -> &[Turn] {
        &self.turns
    }

    pub fn len(&self) -> usize {
        self.turns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.turns.is_empty()
    }

    pub fn render_lines(&self) -> Vec<String> {
        self.turns.iter().map(Turn::render).collect()
    }
}

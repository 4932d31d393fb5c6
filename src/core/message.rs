/// Who authored a transcript entry.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Role {
    User,
    Assistant,
}

impl Role {
    pub fn as_str(self) -> &'static str {
        match self {
            Role::User => "user",
            Role::Assistant => "assistant",
        }
    }

    pub fn is_user(self) -> bool {
        self == Role::User
    }

    pub fn is_assistant(self) -> bool {
        self == Role::Assistant
    }
}

/// One transcript entry. Immutable once created; owned exclusively by the
/// transcript store.
#[derive(Debug, Clone)]
pub struct Message {
    pub role: Role,
    pub content: String,
    /// Follow-up prompts the backend attached to an assistant reply.
    /// Always empty for user messages.
    pub suggestions: Vec<String>,
}

impl Message {
    pub fn user(content: impl Into<String>) -> Self {
        Self {
            role: Role::User,
            content: content.into(),
            suggestions: Vec::new(),
        }
    }

    pub fn assistant(content: impl Into<String>, suggestions: Vec<String>) -> Self {
        Self {
            role: Role::Assistant,
            content: content.into(),
            suggestions,
        }
    }

    pub fn is_user(&self) -> bool {
        self.role.is_user()
    }

    pub fn is_assistant(&self) -> bool {
        self.role.is_assistant()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn constructors_set_roles() {
        assert!(Message::user("hi").is_user());
        assert!(Message::assistant("hello", Vec::new()).is_assistant());
    }

    #[test]
    fn user_messages_carry_no_suggestions() {
        assert!(Message::user("hi").suggestions.is_empty());
    }
}

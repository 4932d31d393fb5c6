use regex::Regex;
use std::sync::OnceLock;

/// Closed set of language tags the highlighter is asked to color with.
///
/// The detector is a best-effort heuristic over the code text itself, not a
/// classifier; false positives are expected and acceptable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Language {
    Python,
    Java,
    Javascript,
    Sql,
    Json,
}

impl Language {
    pub fn as_str(self) -> &'static str {
        match self {
            Language::Python => "python",
            Language::Java => "java",
            Language::Javascript => "javascript",
            Language::Sql => "sql",
            Language::Json => "json",
        }
    }

    /// Upper-cased form used in code block headers.
    pub fn label(self) -> String {
        self.as_str().to_ascii_uppercase()
    }
}

struct Rule {
    tag: Language,
    matches: fn(&str) -> bool,
}

// Evaluated top to bottom, first match wins. A Java snippet that also uses
// JavaScript-looking keywords still routes to Java only because the Java rule
// runs first, so the order must not change.
const RULES: &[Rule] = &[
    Rule {
        tag: Language::Python,
        matches: looks_like_python,
    },
    Rule {
        tag: Language::Java,
        matches: looks_like_java,
    },
    Rule {
        tag: Language::Javascript,
        matches: looks_like_javascript,
    },
    Rule {
        tag: Language::Sql,
        matches: looks_like_sql,
    },
    Rule {
        tag: Language::Json,
        matches: looks_like_json,
    },
];

/// Guess a language tag for a code snippet. Total: every input maps to
/// exactly one tag, falling back to Python when nothing matches.
pub fn detect(code: &str) -> Language {
    RULES
        .iter()
        .find(|rule| (rule.matches)(code))
        .map(|rule| rule.tag)
        .unwrap_or(Language::Python)
}

fn looks_like_python(code: &str) -> bool {
    const TOKENS: [&str; 7] = [
        "import numpy",
        "import pandas",
        "def ",
        "print(",
        "plt.",
        "np.",
        "pd.",
    ];
    TOKENS.iter().any(|token| code.contains(token))
}

fn looks_like_java(code: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(public|class|static|void|int|String)\b").expect("java keyword pattern")
    })
    .is_match(code)
}

fn looks_like_javascript(code: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"\b(function|const|let|var)\b").expect("javascript keyword pattern")
    })
    .is_match(code)
        || code.contains("=>")
}

fn looks_like_sql(code: &str) -> bool {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        Regex::new(r"(?i)\b(SELECT|FROM|WHERE|INSERT)\b").expect("sql keyword pattern")
    })
    .is_match(code)
}

fn looks_like_json(code: &str) -> bool {
    code.contains(['{', '}']) && code.contains(['"', ':'])
}

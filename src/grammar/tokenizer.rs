//! Tokenizador de oraciones

use serde::Serialize;

use crate::lexicon::EDGE_PUNCTUATION;

/// Token normalizado: minúsculas y sin puntuación en los bordes
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(transparent)]
pub struct Token {
    text: String,
}

impl Token {
    /// Normaliza un fragmento; devuelve None si queda vacío
    pub fn normalize(raw: &str) -> Option<Self> {
        let stripped = raw.trim_matches(EDGE_PUNCTUATION);
        if stripped.is_empty() {
            return None;
        }
        Some(Self {
            text: stripped.to_lowercase(),
        })
    }

    pub fn as_str(&self) -> &str {
        &self.text
    }

    pub fn is_empty(&self) -> bool {
        self.text.is_empty()
    }
}

impl AsRef<str> for Token {
    fn as_ref(&self) -> &str {
        &self.text
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.text)
    }
}

/// Tokenizador de oraciones
#[derive(Debug, Default, Clone, Copy)]
pub struct Tokenizer;

impl Tokenizer {
    pub fn new() -> Self {
        Self
    }

    /// Divide por espacios en blanco y normaliza cada fragmento.
    /// Los fragmentos que quedan vacíos ("...", "!?") se descartan.
    pub fn tokenize(&self, text: &str) -> Vec<Token> {
        text.split_whitespace().filter_map(Token::normalize).collect()
    }
}

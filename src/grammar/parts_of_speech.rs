//! Clasificación de categorías gramaticales
//!
//! Cada token recibe exactamente una categoría. Las reglas se evalúan en orden
//! y gana la primera que coincide: "for" es conjunción aunque también esté en
//! la lista de preposiciones, y "its" es pronombre aunque termine en -s.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

use crate::lexicon;

use super::rules::{Rule, RuleChain};
use super::tokenizer::Token;

/// Categoría gramatical
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize)]
pub enum PartOfSpeech {
    Noun,
    Verb,
    Adjective,
    Adverb,
    Pronoun,
    Preposition,
    Conjunction,
    Article,
}

impl PartOfSpeech {
    /// Todas las categorías, en orden de presentación
    pub const ALL: [PartOfSpeech; 8] = [
        PartOfSpeech::Noun,
        PartOfSpeech::Verb,
        PartOfSpeech::Adjective,
        PartOfSpeech::Adverb,
        PartOfSpeech::Pronoun,
        PartOfSpeech::Preposition,
        PartOfSpeech::Conjunction,
        PartOfSpeech::Article,
    ];

    pub fn label(&self) -> &'static str {
        match self {
            PartOfSpeech::Noun => "Noun",
            PartOfSpeech::Verb => "Verb",
            PartOfSpeech::Adjective => "Adjective",
            PartOfSpeech::Adverb => "Adverb",
            PartOfSpeech::Pronoun => "Pronoun",
            PartOfSpeech::Preposition => "Preposition",
            PartOfSpeech::Conjunction => "Conjunction",
            PartOfSpeech::Article => "Article",
        }
    }
}

impl fmt::Display for PartOfSpeech {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

const RULES: &[Rule<str, PartOfSpeech>] = &[
    Rule::new("article", lexicon::is_article, PartOfSpeech::Article),
    Rule::new("pronoun", lexicon::is_pronoun, PartOfSpeech::Pronoun),
    Rule::new(
        "coordinating-conjunction",
        lexicon::is_coordinating_conjunction,
        PartOfSpeech::Conjunction,
    ),
    Rule::new("preposition", lexicon::is_preposition, PartOfSpeech::Preposition),
    Rule::new("adverb", lexicon::is_adverb_like, PartOfSpeech::Adverb),
    Rule::new("verb", lexicon::is_verb_like, PartOfSpeech::Verb),
    Rule::new("adjective", lexicon::is_adjective_like, PartOfSpeech::Adjective),
];

/// Orden de prioridad; sin coincidencia, el token es sustantivo
pub const PART_OF_SPEECH_RULES: RuleChain<str, PartOfSpeech> =
    RuleChain::new(RULES, PartOfSpeech::Noun);

/// Clasifica un token ya normalizado
pub fn classify_word(word: &str) -> PartOfSpeech {
    PART_OF_SPEECH_RULES.evaluate(word)
}

/// Tokens agrupados por categoría, en orden de aparición
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct PartsOfSpeechReport {
    buckets: BTreeMap<PartOfSpeech, Vec<Token>>,
}

impl PartsOfSpeechReport {
    /// Informe con todas las categorías vacías
    pub fn new() -> Self {
        Self {
            buckets: PartOfSpeech::ALL
                .iter()
                .map(|&category| (category, Vec::new()))
                .collect(),
        }
    }

    /// Clasifica cada token y lo añade a su categoría
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut report = Self::new();
        for token in tokens {
            report.push(classify_word(token.as_str()), token.clone());
        }
        report
    }

    fn push(&mut self, category: PartOfSpeech, token: Token) {
        self.buckets.entry(category).or_default().push(token);
    }

    pub fn get(&self, category: PartOfSpeech) -> &[Token] {
        self.buckets
            .get(&category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    /// Palabras de una categoría como texto
    pub fn words(&self, category: PartOfSpeech) -> Vec<&str> {
        self.get(category).iter().map(Token::as_str).collect()
    }

    /// Recorre las categorías en orden fijo, incluidas las vacías
    pub fn iter(&self) -> impl Iterator<Item = (PartOfSpeech, &[Token])> + '_ {
        PartOfSpeech::ALL
            .iter()
            .map(move |&category| (category, self.get(category)))
    }

    /// Total de tokens repartidos entre categorías
    pub fn total(&self) -> usize {
        self.buckets.values().map(Vec::len).sum()
    }
}

impl Default for PartsOfSpeechReport {
    fn default() -> Self {
        Self::new()
    }
}

//! Clasificación de la complejidad estructural de la oración

use std::fmt;

use serde::Serialize;

use crate::lexicon;

use super::rules::{Rule, RuleChain};
use super::tokenizer::Token;

/// Nivel de complejidad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ComplexityLevel {
    Simple,
    Compound,
    Complex,
    CompoundComplex,
}

impl ComplexityLevel {
    pub fn label(&self) -> &'static str {
        match self {
            ComplexityLevel::Simple => "Simple",
            ComplexityLevel::Compound => "Compound",
            ComplexityLevel::Complex => "Complex",
            ComplexityLevel::CompoundComplex => "Compound-Complex",
        }
    }
}

impl fmt::Display for ComplexityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Indicadores de unión de cláusulas
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ClauseSignals {
    pub comma: bool,
    pub semicolon: bool,
    pub coordinating_conjunction: bool,
    pub subordinating_conjunction: bool,
}

impl ClauseSignals {
    pub fn detect(sentence: &str, tokens: &[Token]) -> Self {
        Self {
            comma: sentence.contains(','),
            semicolon: sentence.contains(';'),
            coordinating_conjunction: tokens
                .iter()
                .any(|t| lexicon::is_coordinating_conjunction(t.as_str())),
            subordinating_conjunction: tokens
                .iter()
                .any(|t| lexicon::is_subordinating_conjunction(t.as_str())),
        }
    }

    /// Coordinante o coma
    pub fn compound_trigger(&self) -> bool {
        self.coordinating_conjunction || self.comma
    }

    /// Subordinante o punto y coma
    pub fn subordinate_trigger(&self) -> bool {
        self.subordinating_conjunction || self.semicolon
    }
}

fn compound_and_subordinate(s: &ClauseSignals) -> bool {
    s.compound_trigger() && s.subordinate_trigger()
}

fn subordinate(s: &ClauseSignals) -> bool {
    s.subordinate_trigger()
}

fn compound(s: &ClauseSignals) -> bool {
    s.compound_trigger()
}

const RULES: &[Rule<ClauseSignals, ComplexityLevel>] = &[
    Rule::new("compound+subordinate", compound_and_subordinate, ComplexityLevel::CompoundComplex),
    Rule::new("subordinate", subordinate, ComplexityLevel::Complex),
    Rule::new("compound", compound, ComplexityLevel::Compound),
];

pub const COMPLEXITY_RULES: RuleChain<ClauseSignals, ComplexityLevel> =
    RuleChain::new(RULES, ComplexityLevel::Simple);

/// Resultado del clasificador de complejidad
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ComplexityReport {
    pub level: ComplexityLevel,
    /// Coma o punto y coma
    pub has_punctuation_join: bool,
    pub has_coordinating_conjunction: bool,
    pub has_subordinate_clause: bool,
    pub word_count: usize,
}

/// Clasifica la complejidad de la oración
pub fn classify_complexity(sentence: &str, tokens: &[Token]) -> ComplexityReport {
    let signals = ClauseSignals::detect(sentence, tokens);
    ComplexityReport {
        level: COMPLEXITY_RULES.evaluate(&signals),
        has_punctuation_join: signals.comma || signals.semicolon,
        has_coordinating_conjunction: signals.coordinating_conjunction,
        has_subordinate_clause: signals.subordinating_conjunction,
        word_count: tokens.len(),
    }
}

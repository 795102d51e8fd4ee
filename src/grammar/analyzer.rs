//! Analizador gramatical
//!
//! Punto de entrada único: tokeniza una vez y pasa la misma lista de tokens a
//! los cuatro clasificadores, que no comparten estado entre sí.

use serde::Serialize;

use super::complexity::{classify_complexity, ComplexityReport};
use super::parts_of_speech::PartsOfSpeechReport;
use super::rules::RuleId;
use super::sentence_type::{classify_sentence_type, SentenceType, StructureFlags};
use super::tense::{classify_tense, explain_tense, Tense};
use super::tokenizer::Tokenizer;

/// Informe gramatical de una oración
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct GrammarAnalysisReport {
    pub parts_of_speech: PartsOfSpeechReport,
    pub tense: Tense,
    pub sentence_type: SentenceType,
    pub structure: StructureFlags,
    pub complexity: ComplexityReport,
    pub word_count: usize,
}

/// Analizador gramatical
#[derive(Debug, Default, Clone, Copy)]
pub struct GrammarAnalyzer {
    tokenizer: Tokenizer,
}

impl GrammarAnalyzer {
    pub fn new() -> Self {
        Self {
            tokenizer: Tokenizer::new(),
        }
    }

    /// Analiza una oración. Nunca falla: la entrada vacía produce un informe
    /// sin tokens con los valores por defecto de cada clasificador.
    pub fn analyze(&self, sentence: &str) -> GrammarAnalysisReport {
        let tokens = self.tokenizer.tokenize(sentence);
        let sentence_type = classify_sentence_type(sentence, &tokens);

        GrammarAnalysisReport {
            parts_of_speech: PartsOfSpeechReport::from_tokens(&tokens),
            tense: classify_tense(&tokens),
            sentence_type: sentence_type.sentence_type,
            structure: sentence_type.structure,
            complexity: classify_complexity(sentence, &tokens),
            word_count: tokens.len(),
        }
    }

    /// Analiza cada línea no vacía como una oración independiente
    pub fn analyze_lines(&self, text: &str) -> Vec<GrammarAnalysisReport> {
        sentences(text).map(|line| self.analyze(line)).collect()
    }

    /// Regla de tiempo verbal que decidió (None = presente simple por defecto)
    pub fn tense_rule(&self, sentence: &str) -> Option<RuleId> {
        explain_tense(&self.tokenizer.tokenize(sentence)).0
    }
}

/// Líneas no vacías de un texto, una oración por línea
pub fn sentences(text: &str) -> impl Iterator<Item = &str> {
    text.lines().filter(|line| !line.trim().is_empty())
}

/// Analiza una oración con el analizador por defecto
pub fn analyze(sentence: &str) -> GrammarAnalysisReport {
    GrammarAnalyzer::new().analyze(sentence)
}

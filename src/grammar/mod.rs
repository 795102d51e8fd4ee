//! Motor de análisis gramatical
//!
//! Tokenizador, cuatro clasificadores basados en reglas ordenadas y el
//! analizador que combina sus resultados.

pub mod analyzer;
pub mod complexity;
pub mod parts_of_speech;
pub mod rules;
pub mod sentence_type;
pub mod tense;
pub mod tokenizer;

pub use analyzer::{analyze, sentences, GrammarAnalysisReport, GrammarAnalyzer};
pub use complexity::{classify_complexity, ComplexityLevel, ComplexityReport};
pub use parts_of_speech::{classify_word, PartOfSpeech, PartsOfSpeechReport};
pub use rules::{Rule, RuleChain, RuleId};
pub use sentence_type::{classify_sentence_type, SentenceType, SentenceTypeReport, StructureFlags};
pub use tense::{classify_tense, explain_tense, Tense, TenseMarkers};
pub use tokenizer::{Token, Tokenizer};

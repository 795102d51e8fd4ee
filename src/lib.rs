//! Sentence Grammar - Analizador gramatical de oraciones en inglés
//!
//! Clasifica cada palabra por categoría gramatical y determina el tiempo
//! verbal, el tipo de oración y su complejidad estructural mediante reglas
//! ordenadas y un léxico cerrado. No hay estado global ni E/S.

pub mod config;
pub mod grammar;
pub mod lexicon;
pub mod report;

pub use config::{AppError, Config, OutputFormat};
pub use grammar::{
    analyze, ComplexityLevel, ComplexityReport, GrammarAnalysisReport, GrammarAnalyzer,
    PartOfSpeech, PartsOfSpeechReport, SentenceType, StructureFlags, Tense, Token,
};
pub use report::{render_feedback, render_json, render_json_all};

//! Presentación del informe gramatical
//!
//! Texto de retroalimentación para el jugador y salida JSON.

use crate::grammar::{ComplexityReport, GrammarAnalysisReport, Token};

/// Genera el bloque de texto con el análisis de una oración
pub fn render_feedback(report: &GrammarAnalysisReport) -> String {
    let mut lines = vec![
        format!("Sentence type: {}", report.sentence_type),
        format!("Tense: {}", report.tense),
        format!(
            "Complexity: {}{}",
            report.complexity.level,
            describe_triggers(&report.complexity)
        ),
        format!("Words: {}", report.word_count),
    ];

    // Solo categorías con palabras, en orden fijo
    for (category, tokens) in report.parts_of_speech.iter() {
        if tokens.is_empty() {
            continue;
        }
        lines.push(format!("{}: {}", category, join_tokens(tokens)));
    }

    lines.join("\n")
}

/// Serializa el informe como JSON legible
pub fn render_json(report: &GrammarAnalysisReport) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

/// Varios informes: un objeto si hay uno solo, una lista si hay más
pub fn render_json_all(reports: &[GrammarAnalysisReport]) -> Result<String, serde_json::Error> {
    match reports {
        [report] => render_json(report),
        _ => serde_json::to_string_pretty(reports),
    }
}

fn describe_triggers(complexity: &ComplexityReport) -> String {
    let mut triggers = Vec::new();
    if complexity.has_punctuation_join {
        triggers.push("punctuation join");
    }
    if complexity.has_coordinating_conjunction {
        triggers.push("coordinating conjunction");
    }
    if complexity.has_subordinate_clause {
        triggers.push("subordinate clause");
    }

    if triggers.is_empty() {
        String::new()
    } else {
        format!(" ({})", triggers.join(", "))
    }
}

fn join_tokens(tokens: &[Token]) -> String {
    tokens
        .iter()
        .map(Token::as_str)
        .collect::<Vec<_>>()
        .join(", ")
}

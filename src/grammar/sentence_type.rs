//! Clasificación del tipo de oración (enunciativa, interrogativa,
//! exclamativa, imperativa)

use std::fmt;

use serde::Serialize;

use crate::lexicon;

use super::rules::{Rule, RuleChain};
use super::tokenizer::Token;

/// Tipo de oración
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum SentenceType {
    Statement,
    Question,
    Exclamation,
    Command,
}

impl SentenceType {
    pub fn label(&self) -> &'static str {
        match self {
            SentenceType::Statement => "Statement",
            SentenceType::Question => "Question",
            SentenceType::Exclamation => "Exclamation",
            SentenceType::Command => "Command",
        }
    }
}

impl fmt::Display for SentenceType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Rasgos que deciden el tipo de oración
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SentenceSignals {
    pub question_mark: bool,
    pub exclamation_mark: bool,
    pub opens_with_question_word: bool,
    pub opens_with_command: bool,
}

impl SentenceSignals {
    /// Los signos se buscan en la oración original; el tokenizador ya los eliminó
    pub fn detect(sentence: &str, tokens: &[Token]) -> Self {
        let first = tokens.first().map(Token::as_str);
        Self {
            question_mark: sentence.contains('?'),
            exclamation_mark: sentence.contains('!'),
            opens_with_question_word: first.is_some_and(lexicon::is_question_word),
            opens_with_command: first.is_some_and(lexicon::is_command_opener),
        }
    }
}

fn is_question(s: &SentenceSignals) -> bool {
    s.question_mark || s.opens_with_question_word
}

fn is_exclamation(s: &SentenceSignals) -> bool {
    s.exclamation_mark
}

fn is_command(s: &SentenceSignals) -> bool {
    s.opens_with_command
}

const RULES: &[Rule<SentenceSignals, SentenceType>] = &[
    Rule::new("question", is_question, SentenceType::Question),
    Rule::new("exclamation", is_exclamation, SentenceType::Exclamation),
    Rule::new("command", is_command, SentenceType::Command),
];

pub const SENTENCE_TYPE_RULES: RuleChain<SentenceSignals, SentenceType> =
    RuleChain::new(RULES, SentenceType::Statement);

/// Rasgos estructurales que acompañan al tipo de oración
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StructureFlags {
    pub has_subject_pronoun: bool,
    pub has_object_pronoun: bool,
    /// Algún token con sufijo de adjetivo (-ful, -less, -ous) o de adverbio (-ly)
    pub has_modifier: bool,
}

impl StructureFlags {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut flags = Self::default();
        for token in tokens {
            let word = token.as_str();
            flags.has_subject_pronoun |= lexicon::is_subject_pronoun(word);
            flags.has_object_pronoun |= lexicon::is_object_pronoun(word);
            flags.has_modifier |=
                lexicon::has_adjective_suffix(word) || lexicon::has_adverb_suffix(word);
        }
        flags
    }
}

/// Resultado del clasificador de tipo de oración
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SentenceTypeReport {
    pub sentence_type: SentenceType,
    pub structure: StructureFlags,
}

/// Clasifica el tipo de oración
pub fn classify_sentence_type(sentence: &str, tokens: &[Token]) -> SentenceTypeReport {
    SentenceTypeReport {
        sentence_type: SENTENCE_TYPE_RULES.evaluate(&SentenceSignals::detect(sentence, tokens)),
        structure: StructureFlags::from_tokens(tokens),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Tokenizer;

    fn classify(text: &str) -> SentenceTypeReport {
        let tokens = Tokenizer::new().tokenize(text);
        classify_sentence_type(text, &tokens)
    }

    fn type_of(text: &str) -> SentenceType {
        classify(text).sentence_type
    }

    #[test]
    fn test_question() {
        assert_eq!(type_of("What is your name?"), SentenceType::Question);
        assert_eq!(type_of("Is it raining?"), SentenceType::Question);
        // sin signo, pero con interrogativo inicial
        assert_eq!(type_of("How old are you"), SentenceType::Question);
    }

    #[test]
    fn test_question_outranks_exclamation() {
        assert_eq!(type_of("Why would you do that?!"), SentenceType::Question);
        // el interrogativo inicial decide aunque la oración sea exclamativa
        assert_eq!(type_of("What a day!"), SentenceType::Question);
    }

    #[test]
    fn test_exclamation() {
        assert_eq!(type_of("That was amazing!"), SentenceType::Exclamation);
        assert_eq!(type_of("Please stop!"), SentenceType::Exclamation);
    }

    #[test]
    fn test_command() {
        assert_eq!(type_of("Please close the door."), SentenceType::Command);
        assert_eq!(type_of("Don't touch that."), SentenceType::Command);
        assert_eq!(type_of("Don\u{2019}t touch that."), SentenceType::Command);
        assert_eq!(type_of("Let's go home."), SentenceType::Command);
        assert_eq!(type_of("Let\u{2019}s go home."), SentenceType::Command);
        assert_eq!(type_of("Do your homework."), SentenceType::Command);
    }

    #[test]
    fn test_statement_is_default() {
        assert_eq!(type_of("The cat sat on the mat."), SentenceType::Statement);
        assert_eq!(type_of(""), SentenceType::Statement);
        assert_eq!(type_of("..."), SentenceType::Statement);
    }

    #[test]
    fn test_structure_flags() {
        let report = classify("She gave him a wonderful gift quickly.");
        assert!(report.structure.has_subject_pronoun);
        assert!(report.structure.has_object_pronoun);
        assert!(report.structure.has_modifier);

        let report = classify("The cat sat on the mat.");
        assert_eq!(report.structure, StructureFlags::default());
    }
}

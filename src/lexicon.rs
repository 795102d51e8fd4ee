//! Léxico de clases cerradas del inglés
//!
//! Módulo centralizado con todas las listas de palabras y sufijos que usan los
//! clasificadores. Ningún clasificador mantiene su propia copia.

/// Artículos
pub const ARTICLES: &[&str] = &["the", "a", "an"];

/// Pronombres personales en función de sujeto
pub const SUBJECT_PRONOUNS: &[&str] = &["i", "you", "he", "she", "it", "we", "they"];

/// Pronombres personales en función de objeto
pub const OBJECT_PRONOUNS: &[&str] = &["me", "him", "her", "us", "them"];

/// Posesivos
pub const POSSESSIVE_PRONOUNS: &[&str] = &["my", "your", "his", "its", "our", "their"];

/// Conjunciones coordinantes (FANBOYS)
pub const COORDINATING_CONJUNCTIONS: &[&str] = &["and", "but", "or", "nor", "for", "yet", "so"];

/// Conjunciones subordinantes que introducen cláusula dependiente
pub const SUBORDINATING_CONJUNCTIONS: &[&str] =
    &["because", "although", "while", "if", "when", "where", "since"];

/// Preposiciones
/// "for" también es conjunción; gana la conjunción por orden de reglas.
pub const PREPOSITIONS: &[&str] = &[
    "in", "on", "at", "by", "for", "with", "to", "from", "up", "down", "over", "under",
    "through", "between", "among",
];

/// Adverbios que no terminan en -ly
pub const ADVERB_EXCEPTIONS: &[&str] =
    &["very", "quite", "really", "well", "fast", "hard", "late", "early"];

/// Verbos copulativos, auxiliares y modales
pub const AUXILIARY_VERBS: &[&str] = &[
    "am", "is", "are", "was", "were", "be", "been", "being", "have", "has", "had", "do", "does",
    "did", "will", "would", "can", "could", "should", "may", "might", "must",
];

/// Formas de pasado irregulares frecuentes
pub const IRREGULAR_PAST_FORMS: &[&str] = &[
    "sat", "went", "ate", "saw", "came", "took", "made", "had", "did", "got", "gave", "found",
    "knew", "thought", "told", "became", "left", "felt", "brought", "began", "kept", "held",
    "wrote", "stood", "heard", "meant", "met", "ran", "paid", "sent", "built", "spoke", "fell",
    "drove", "broke", "chose", "bought", "caught", "taught", "slept", "won", "lost", "sold",
    "drank", "sang", "swam", "flew", "grew", "threw", "wore", "forgot", "understood", "said",
    "rode", "woke", "hid", "bit", "fought", "spent", "sought", "dug", "froze", "shook",
];

/// Adjetivos comunes sin sufijo reconocible
pub const COMMON_ADJECTIVES: &[&str] = &[
    "good", "bad", "big", "small", "new", "old", "young", "happy", "sad", "great", "little",
    "long", "short", "high", "low", "large", "hot", "cold", "nice", "easy", "difficult",
    "important", "different", "beautiful", "pretty", "tall", "rich", "poor", "strong",
    "weak", "clean", "dirty", "quiet", "loud", "soft", "warm", "cool", "dark", "bright",
    "blue", "green", "white", "black", "brown", "yellow", "right", "wrong", "true", "free",
    "full", "empty", "busy", "ready", "sure", "kind", "smart", "clever", "brave", "calm",
    "fresh", "sweet", "sour", "heavy", "light", "slow", "quick", "simple", "whole", "best",
    "better", "worse", "worst",
];

/// Marcadores de futuro
pub const WILL_MARKERS: &[&str] = &["will", "shall"];

/// Modales de "futuro en el pasado"
pub const WOULD_MARKERS: &[&str] = &["would", "could", "should"];

/// Formas de "have"
pub const HAVE_MARKERS: &[&str] = &["have", "has", "had"];

/// Participio y gerundio de "be"
pub const BEEN_MARKERS: &[&str] = &["been", "being"];

/// Pasado de "be"
pub const WAS_MARKERS: &[&str] = &["was", "were"];

/// Presente de "be"
pub const AM_MARKERS: &[&str] = &["am", "is", "are"];

/// Interrogativos que abren pregunta
pub const QUESTION_WORDS: &[&str] = &["what", "where", "when", "why", "how", "who"];

/// Primeras palabras de una orden (con apóstrofo recto y tipográfico)
pub const COMMAND_OPENERS: &[&str] = &["please", "don't", "don\u{2019}t", "do", "let's", "let\u{2019}s"];

/// Sufijo de adverbio
pub const ADVERB_SUFFIX: &str = "ly";

/// Gerundio
pub const ING_SUFFIX: &str = "ing";

/// Pasado regular
pub const ED_SUFFIX: &str = "ed";

/// Sufijos de verbo (gerundio, pasado regular, tercera persona)
pub const VERB_SUFFIXES: &[&str] = &[ING_SUFFIX, ED_SUFFIX, "s"];

/// Sufijos de adjetivo
pub const ADJECTIVE_SUFFIXES: &[&str] = &["ful", "less", "ous"];

/// Signos que se eliminan de los bordes de cada token
pub const EDGE_PUNCTUATION: &[char] = &['.', ',', '!', '?', ';', ':'];

fn contains(list: &[&str], word: &str) -> bool {
    list.contains(&word)
}

fn has_any_suffix(word: &str, suffixes: &[&str]) -> bool {
    suffixes.iter().any(|suffix| word.ends_with(suffix))
}

pub fn is_article(word: &str) -> bool {
    contains(ARTICLES, word)
}

pub fn is_subject_pronoun(word: &str) -> bool {
    contains(SUBJECT_PRONOUNS, word)
}

pub fn is_object_pronoun(word: &str) -> bool {
    contains(OBJECT_PRONOUNS, word)
}

/// Cualquier pronombre: sujeto, objeto o posesivo
pub fn is_pronoun(word: &str) -> bool {
    is_subject_pronoun(word) || is_object_pronoun(word) || contains(POSSESSIVE_PRONOUNS, word)
}

pub fn is_coordinating_conjunction(word: &str) -> bool {
    contains(COORDINATING_CONJUNCTIONS, word)
}

pub fn is_subordinating_conjunction(word: &str) -> bool {
    contains(SUBORDINATING_CONJUNCTIONS, word)
}

pub fn is_preposition(word: &str) -> bool {
    contains(PREPOSITIONS, word)
}

pub fn is_auxiliary(word: &str) -> bool {
    contains(AUXILIARY_VERBS, word)
}

pub fn is_irregular_past(word: &str) -> bool {
    contains(IRREGULAR_PAST_FORMS, word)
}

pub fn is_question_word(word: &str) -> bool {
    contains(QUESTION_WORDS, word)
}

pub fn is_command_opener(word: &str) -> bool {
    contains(COMMAND_OPENERS, word)
}

/// ¿Adverbio? Sufijo -ly o excepción conocida
pub fn is_adverb_like(word: &str) -> bool {
    has_adverb_suffix(word) || contains(ADVERB_EXCEPTIONS, word)
}

/// ¿Verbo? Auxiliar/modal, pasado irregular o sufijo verbal.
/// Heurística: cualquier palabra en -s cuenta como verbo, incluidos plurales ("cats").
pub fn is_verb_like(word: &str) -> bool {
    is_auxiliary(word) || is_irregular_past(word) || has_any_suffix(word, VERB_SUFFIXES)
}

/// ¿Adjetivo? Lista cerrada o sufijo -ful/-less/-ous
pub fn is_adjective_like(word: &str) -> bool {
    contains(COMMON_ADJECTIVES, word) || has_adjective_suffix(word)
}

pub fn has_adjective_suffix(word: &str) -> bool {
    has_any_suffix(word, ADJECTIVE_SUFFIXES)
}

pub fn has_adverb_suffix(word: &str) -> bool {
    word.ends_with(ADVERB_SUFFIX)
}

pub fn has_ing_suffix(word: &str) -> bool {
    word.ends_with(ING_SUFFIX)
}

pub fn has_ed_suffix(word: &str) -> bool {
    word.ends_with(ED_SUFFIX)
}

pub fn is_will_marker(word: &str) -> bool {
    contains(WILL_MARKERS, word)
}

pub fn is_would_marker(word: &str) -> bool {
    contains(WOULD_MARKERS, word)
}

pub fn is_have_marker(word: &str) -> bool {
    contains(HAVE_MARKERS, word)
}

pub fn is_been_marker(word: &str) -> bool {
    contains(BEEN_MARKERS, word)
}

pub fn is_was_marker(word: &str) -> bool {
    contains(WAS_MARKERS, word)
}

pub fn is_am_marker(word: &str) -> bool {
    contains(AM_MARKERS, word)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_for_is_both_conjunction_and_preposition() {
        assert!(is_coordinating_conjunction("for"));
        assert!(is_preposition("for"));
    }

    #[test]
    fn test_pronoun_sets() {
        assert!(is_pronoun("their"));
        assert!(is_pronoun("them"));
        assert!(is_subject_pronoun("we"));
        assert!(!is_subject_pronoun("us"));
        assert!(is_object_pronoun("us"));
    }

    #[test]
    fn test_verb_heuristic_accepts_plurals() {
        assert!(is_verb_like("studying"));
        assert!(is_verb_like("played"));
        assert!(is_verb_like("sat"));
        // Limitación conocida: plural tratado como verbo
        assert!(is_verb_like("cats"));
        assert!(!is_verb_like("cat"));
    }

    #[test]
    fn test_adverb_and_adjective_suffixes() {
        assert!(is_adverb_like("quickly"));
        assert!(is_adverb_like("fast"));
        assert!(is_adjective_like("careful"));
        assert!(is_adjective_like("hopeless"));
        assert!(is_adjective_like("famous"));
        assert!(is_adjective_like("happy"));
        assert!(!is_adjective_like("table"));
    }

    #[test]
    fn test_command_openers_accept_typographic_apostrophe() {
        assert!(is_command_opener("don't"));
        assert!(is_command_opener("don\u{2019}t"));
        assert!(is_command_opener("let's"));
        assert!(!is_command_opener("lets"));
    }

    #[test]
    fn test_shared_auxiliaries_cover_tense_markers() {
        for marker in HAVE_MARKERS
            .iter()
            .chain(BEEN_MARKERS)
            .chain(WAS_MARKERS)
            .chain(AM_MARKERS)
        {
            assert!(is_auxiliary(marker), "'{}' debería ser auxiliar", marker);
        }
    }
}

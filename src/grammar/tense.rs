//! Clasificación del tiempo verbal
//!
//! El tiempo depende de combinaciones de auxiliares, así que se calcula sobre
//! la oración completa: primero se extraen marcadores de presencia y después
//! se recorre una cadena de reglas de la combinación más específica a la más
//! simple.

use std::fmt;

use serde::Serialize;

use crate::lexicon;

use super::rules::{Rule, RuleChain, RuleId};
use super::tokenizer::Token;

/// Tiempo verbal
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize)]
pub enum Tense {
    #[default]
    PresentSimple,
    PresentContinuous,
    PresentPerfect,
    PresentPerfectContinuous,
    PastSimple,
    PastContinuous,
    PastPerfect,
    PastPerfectContinuous,
    FutureSimple,
    FutureContinuous,
    FuturePerfect,
    FuturePerfectContinuous,
    PastFutureSimple,
    PastFutureContinuous,
    PastFuturePerfect,
    PastFuturePerfectContinuous,
}

impl Tense {
    pub fn label(&self) -> &'static str {
        match self {
            Tense::PresentSimple => "Present Simple",
            Tense::PresentContinuous => "Present Continuous",
            Tense::PresentPerfect => "Present Perfect",
            Tense::PresentPerfectContinuous => "Present Perfect Continuous",
            Tense::PastSimple => "Past Simple",
            Tense::PastContinuous => "Past Continuous",
            Tense::PastPerfect => "Past Perfect",
            Tense::PastPerfectContinuous => "Past Perfect Continuous",
            Tense::FutureSimple => "Future Simple",
            Tense::FutureContinuous => "Future Continuous",
            Tense::FuturePerfect => "Future Perfect",
            Tense::FuturePerfectContinuous => "Future Perfect Continuous",
            Tense::PastFutureSimple => "Past Future Simple",
            Tense::PastFutureContinuous => "Past Future Continuous",
            Tense::PastFuturePerfect => "Past Future Perfect",
            Tense::PastFuturePerfectContinuous => "Past Future Perfect Continuous",
        }
    }
}

impl fmt::Display for Tense {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Marcadores de presencia sobre toda la oración
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct TenseMarkers {
    /// will / shall
    pub will: bool,
    /// would / could / should
    pub would: bool,
    /// have / has / had
    pub have: bool,
    /// been / being
    pub been: bool,
    /// algún token en -ing
    pub ing: bool,
    /// algún token en -ed
    pub ed: bool,
    /// pasado irregular (sat, went...)
    pub irregular_past: bool,
    /// was / were
    pub was: bool,
    /// am / is / are
    pub am: bool,
}

impl TenseMarkers {
    pub fn from_tokens(tokens: &[Token]) -> Self {
        let mut markers = Self::default();
        for token in tokens {
            let word = token.as_str();
            markers.will |= lexicon::is_will_marker(word);
            markers.would |= lexicon::is_would_marker(word);
            markers.have |= lexicon::is_have_marker(word);
            markers.been |= lexicon::is_been_marker(word);
            markers.ing |= lexicon::has_ing_suffix(word);
            markers.ed |= lexicon::has_ed_suffix(word);
            markers.irregular_past |= lexicon::is_irregular_past(word);
            markers.was |= lexicon::is_was_marker(word);
            markers.am |= lexicon::is_am_marker(word);
        }
        markers
    }
}

fn will_ing(m: &TenseMarkers) -> bool {
    m.will && m.ing
}

fn will_have_been(m: &TenseMarkers) -> bool {
    m.will && m.have && m.been
}

fn will_have(m: &TenseMarkers) -> bool {
    m.will && m.have
}

fn will(m: &TenseMarkers) -> bool {
    m.will
}

fn would_ing(m: &TenseMarkers) -> bool {
    m.would && m.ing
}

fn would_have_been(m: &TenseMarkers) -> bool {
    m.would && m.have && m.been
}

fn would_have(m: &TenseMarkers) -> bool {
    m.would && m.have
}

fn would(m: &TenseMarkers) -> bool {
    m.would
}

fn have_been_ing(m: &TenseMarkers) -> bool {
    m.have && m.been && m.ing
}

fn have_been(m: &TenseMarkers) -> bool {
    m.have && m.been
}

fn have_ed(m: &TenseMarkers) -> bool {
    m.have && m.ed
}

fn am_ing(m: &TenseMarkers) -> bool {
    m.am && m.ing
}

fn am(m: &TenseMarkers) -> bool {
    m.am
}

fn was_ing(m: &TenseMarkers) -> bool {
    m.was && m.ing
}

fn was_been_ing(m: &TenseMarkers) -> bool {
    m.was && m.been && m.ing
}

fn was_been(m: &TenseMarkers) -> bool {
    m.was && m.been
}

fn past_form(m: &TenseMarkers) -> bool {
    m.ed || m.irregular_past
}

fn was(m: &TenseMarkers) -> bool {
    m.was
}

// El orden importa: "will ... -ing" se comprueba antes que "will have been",
// y "was ... -ing" antes que "was been -ing", que por tanto nunca decide.
const RULES: &[Rule<TenseMarkers, Tense>] = &[
    Rule::new("will+ing", will_ing, Tense::FutureContinuous),
    Rule::new("will+have+been", will_have_been, Tense::FuturePerfectContinuous),
    Rule::new("will+have", will_have, Tense::FuturePerfect),
    Rule::new("will", will, Tense::FutureSimple),
    Rule::new("would+ing", would_ing, Tense::PastFutureContinuous),
    Rule::new("would+have+been", would_have_been, Tense::PastFuturePerfectContinuous),
    Rule::new("would+have", would_have, Tense::PastFuturePerfect),
    Rule::new("would", would, Tense::PastFutureSimple),
    Rule::new("have+been+ing", have_been_ing, Tense::PresentPerfectContinuous),
    Rule::new("have+been", have_been, Tense::PresentPerfect),
    Rule::new("have+ed", have_ed, Tense::PresentPerfect),
    Rule::new("am+ing", am_ing, Tense::PresentContinuous),
    Rule::new("am", am, Tense::PresentSimple),
    Rule::new("was+ing", was_ing, Tense::PastContinuous),
    Rule::new("was+been+ing", was_been_ing, Tense::PastPerfectContinuous),
    Rule::new("was+been", was_been, Tense::PastPerfect),
    Rule::new("past-form", past_form, Tense::PastSimple),
    Rule::new("was", was, Tense::PastSimple),
];

/// Orden de prioridad; sin coincidencia, presente simple
pub const TENSE_RULES: RuleChain<TenseMarkers, Tense> =
    RuleChain::new(RULES, Tense::PresentSimple);

/// Clasifica el tiempo verbal de una oración tokenizada
pub fn classify_tense(tokens: &[Token]) -> Tense {
    TENSE_RULES.evaluate(&TenseMarkers::from_tokens(tokens))
}

/// Como `classify_tense`, indicando qué regla decidió (None = presente por defecto)
pub fn explain_tense(tokens: &[Token]) -> (Option<RuleId>, Tense) {
    TENSE_RULES.explain(&TenseMarkers::from_tokens(tokens))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grammar::Tokenizer;

    fn tense_of(text: &str) -> Tense {
        classify_tense(&Tokenizer::new().tokenize(text))
    }

    #[test]
    fn test_markers() {
        let tokens = Tokenizer::new().tokenize("I have been studying English.");
        let markers = TenseMarkers::from_tokens(&tokens);
        assert!(markers.have && markers.been && markers.ing);
        assert!(!markers.will && !markers.was && !markers.ed);
    }

    #[test]
    fn test_future_family() {
        assert_eq!(tense_of("I will call you."), Tense::FutureSimple);
        assert_eq!(tense_of("We shall see."), Tense::FutureSimple);
        assert_eq!(tense_of("She will be working late."), Tense::FutureContinuous);
        assert_eq!(tense_of("They will have finished."), Tense::FuturePerfect);
        assert_eq!(
            tense_of("By June she will have been there."),
            Tense::FuturePerfectContinuous
        );
    }

    #[test]
    fn test_will_ing_outranks_perfect_continuous() {
        assert_eq!(
            tense_of("I will have been working for hours."),
            Tense::FutureContinuous
        );
    }

    #[test]
    fn test_past_future_family() {
        assert_eq!(tense_of("I would help."), Tense::PastFutureSimple);
        assert_eq!(tense_of("You could be sleeping."), Tense::PastFutureContinuous);
        assert_eq!(tense_of("He should have called."), Tense::PastFuturePerfect);
        assert_eq!(
            tense_of("It would have been nice."),
            Tense::PastFuturePerfectContinuous
        );
    }

    #[test]
    fn test_present_perfect_family() {
        assert_eq!(
            tense_of("I have been studying English for two years."),
            Tense::PresentPerfectContinuous
        );
        assert_eq!(tense_of("She has been there."), Tense::PresentPerfect);
        assert_eq!(tense_of("We have finished."), Tense::PresentPerfect);
    }

    #[test]
    fn test_present_family() {
        assert_eq!(tense_of("What is your name?"), Tense::PresentSimple);
        assert_eq!(tense_of("They are playing."), Tense::PresentContinuous);
        assert_eq!(tense_of("I am happy"), Tense::PresentSimple);
    }

    #[test]
    fn test_past_family() {
        assert_eq!(tense_of("It was raining."), Tense::PastContinuous);
        assert_eq!(tense_of("It was been there."), Tense::PastPerfect);
        assert_eq!(tense_of("We walked home."), Tense::PastSimple);
        assert_eq!(tense_of("The cat sat on the mat."), Tense::PastSimple);
        assert_eq!(tense_of("They were here."), Tense::PastSimple);
    }

    #[test]
    fn test_was_ing_shadows_was_been_ing() {
        assert_eq!(tense_of("It was being fixed."), Tense::PastContinuous);
    }

    #[test]
    fn test_have_without_perfect_markers_falls_through() {
        // "had" es pasado irregular; "have" solo no decide nada
        assert_eq!(tense_of("I had a dog."), Tense::PastSimple);
        assert_eq!(tense_of("I have a dog."), Tense::PresentSimple);
    }

    #[test]
    fn test_default_is_present_simple() {
        assert_eq!(tense_of(""), Tense::PresentSimple);
        assert_eq!(tense_of("Dogs bark."), Tense::PresentSimple);
        assert_eq!(TENSE_RULES.default_result(), Tense::PresentSimple);
    }

    #[test]
    fn test_explain_names_deciding_rule() {
        let tokens = Tokenizer::new().tokenize("Although it was raining, we went outside and played.");
        assert_eq!(
            explain_tense(&tokens),
            (Some(RuleId("was+ing")), Tense::PastContinuous)
        );
        let tokens = Tokenizer::new().tokenize("Dogs bark.");
        assert_eq!(explain_tense(&tokens), (None, Tense::PresentSimple));
    }

    #[test]
    fn test_rule_order() {
        let ids: Vec<&str> = TENSE_RULES.rule_ids().iter().map(|id| id.0).collect();
        assert_eq!(ids.first(), Some(&"will+ing"));
        assert_eq!(ids.last(), Some(&"was"));
        let position = |id: &str| ids.iter().position(|x| *x == id);
        assert!(position("have+been+ing") < position("am+ing"));
        assert!(position("am") < position("was+ing"));
    }
}

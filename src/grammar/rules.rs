//! Sistema de reglas ordenadas
//!
//! Cada clasificador declara su prioridad como una cadena de reglas estática:
//! la primera regla cuya condición se cumple decide el resultado y, si ninguna
//! se cumple, se usa el resultado por defecto de la cadena.

use std::fmt;

/// Identificador de regla
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct RuleId(pub &'static str);

impl fmt::Display for RuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.0)
    }
}

/// Regla: condición sobre la entrada y resultado si se cumple
pub struct Rule<I: ?Sized + 'static, T> {
    pub id: RuleId,
    pub condition: fn(&I) -> bool,
    pub result: T,
}

impl<I: ?Sized + 'static, T> Rule<I, T> {
    pub const fn new(id: &'static str, condition: fn(&I) -> bool, result: T) -> Self {
        Self {
            id: RuleId(id),
            condition,
            result,
        }
    }

    pub fn matches(&self, input: &I) -> bool {
        (self.condition)(input)
    }
}

impl<I: ?Sized + 'static, T: fmt::Debug> fmt::Debug for Rule<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Rule")
            .field("id", &self.id)
            .field("result", &self.result)
            .finish()
    }
}

/// Cadena de reglas evaluada en orden, con brazo por defecto obligatorio
pub struct RuleChain<I: ?Sized + 'static, T: 'static> {
    rules: &'static [Rule<I, T>],
    default: T,
}

impl<I: ?Sized + 'static, T: 'static> RuleChain<I, T> {
    pub const fn new(rules: &'static [Rule<I, T>], default: T) -> Self {
        Self { rules, default }
    }

    /// Identificadores en orden de prioridad
    pub fn rule_ids(&self) -> Vec<RuleId> {
        self.rules.iter().map(|rule| rule.id).collect()
    }

    /// Primera regla que se cumple, si existe
    pub fn first_match(&self, input: &I) -> Option<&Rule<I, T>> {
        self.rules.iter().find(|rule| rule.matches(input))
    }
}

impl<I: ?Sized + 'static, T: Copy + 'static> RuleChain<I, T> {
    pub fn default_result(&self) -> T {
        self.default
    }

    /// Evalúa la cadena: primera coincidencia o resultado por defecto
    pub fn evaluate(&self, input: &I) -> T {
        self.first_match(input)
            .map(|rule| rule.result)
            .unwrap_or(self.default)
    }

    /// Como `evaluate`, indicando qué regla decidió (None = brazo por defecto)
    pub fn explain(&self, input: &I) -> (Option<RuleId>, T) {
        match self.first_match(input) {
            Some(rule) => (Some(rule.id), rule.result),
            None => (None, self.default),
        }
    }
}

impl<I: ?Sized + 'static, T: fmt::Debug + 'static> fmt::Debug for RuleChain<I, T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("RuleChain")
            .field("rules", &self.rules)
            .field("default", &self.default)
            .finish()
    }
}

// src/noyau/expr.rs
//
// Expression = suite ordonnée de jetons (un seul niveau de l’arbre).
// Les sous-expressions sont possédées par le jeton-valeur qui les porte :
// arbre strict, aucun partage, aucun cycle.
//
// Invariant d’alternance : valeur, opérateur, valeur, ..., valeur.
// Une expression qui ne le respecte pas ne doit jamais être calculée.
//
// Le reste de l’API vit à côté :
// - analyse.rs : Expression::parse
// - pemdas.rs  : consolidation + calculate
// - format.rs  : Display + format_arbre

use super::jetons::{Token, Value};

#[derive(Clone, Debug, Default)]
pub struct Expression {
    pub(crate) tokens: Vec<Token>,
}

impl Expression {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_tokens(tokens: Vec<Token>) -> Self {
        Self { tokens }
    }

    pub fn tokens(&self) -> &[Token] {
        &self.tokens
    }

    pub fn len(&self) -> usize {
        self.tokens.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tokens.is_empty()
    }

    pub fn add_token(&mut self, token: Token) {
        self.tokens.push(token);
    }

    pub fn last_is_value(&self) -> bool {
        self.tokens.last().is_some_and(Token::is_value)
    }

    /// Alternance stricte valeur/opérateur, début et fin sur une valeur.
    pub fn is_valid(&self) -> bool {
        self.tokens.len() % 2 == 1
            && self
                .tokens
                .iter()
                .enumerate()
                .all(|(i, t)| t.is_value() == (i % 2 == 0))
    }
}

/// Démontage sans récursion : un peigne issu de la consolidation peut être très profond.
impl Drop for Expression {
    fn drop(&mut self) {
        let mut pile = std::mem::take(&mut self.tokens);
        while let Some(t) = pile.pop() {
            if let Token::Value(Value::Expression(mut e)) = t {
                pile.append(&mut e.tokens);
            }
        }
    }
}

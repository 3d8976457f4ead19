//! Noyau exact
//!
//! Organisation interne :
//! - rationnel.rs : rationnel exact (BigInt / BigInt) + fraction égyptienne
//! - jetons.rs    : Operation / Token / Value
//! - expr.rs      : Expression (suite de jetons) + invariant d’alternance
//! - analyse.rs   : lecture texte -> Expression (parenthèses, '*' implicite)
//! - pemdas.rs    : consolidation par paliers + calcul récursif
//! - format.rs    : infixe canonique, arbre indenté, affichage des rationnels
//! - reglages.rs  : réglages (profondeur max, décimal)
//! - erreur.rs    : erreurs typées
//! - eval.rs      : pipeline complet

pub mod analyse;
pub mod erreur;
pub mod eval;
pub mod expr;
pub mod format;
pub mod jetons;
pub mod pemdas;
pub mod rationnel;
pub mod reglages;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::{Error, ParseError};
pub use eval::{eval_expression, evaluate, parse_expression, render, Calcul, Demarche};
pub use expr::Expression;
pub use jetons::{Operation, Token, Value};
pub use rationnel::Rational;
pub use reglages::Reglages;

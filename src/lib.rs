//! exparser — calculatrice exacte
//!
//! Lit une expression arithmétique (entiers, décimaux, `+ - * / ^`, parenthèses,
//! multiplication implicite `2(3+1)`) et la calcule en rationnels exacts.
//! Seul `^` passe par les flottants.
//!
//! ```
//! use exparser::{eval_expression, Reglages};
//!
//! let c = eval_expression("1/2 + 1/3", &Reglages::default()).unwrap();
//! assert_eq!(c.affichage, "5/6");
//! ```

pub mod noyau;

pub use noyau::{
    eval_expression, evaluate, parse_expression, render, Calcul, Error, Expression, ParseError,
    Rational, Reglages,
};

// src/noyau/jetons.rs
//
// Jetons d’une expression : un opérateur OU une valeur (jamais les deux, jamais aucun).
// Une valeur est soit un rationnel, soit une sous-expression (groupe entre parenthèses
// ou triplet créé par la consolidation).

use std::fmt;

use super::erreur::{Error, Result};
use super::expr::Expression;
use super::rationnel::Rational;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operation {
    Add,
    Subtract,
    Multiply,
    Divide,
    Exponent,
}

impl Operation {
    pub fn from_char(c: char) -> Option<Operation> {
        match c {
            '+' => Some(Operation::Add),
            '-' => Some(Operation::Subtract),
            '*' => Some(Operation::Multiply),
            '/' => Some(Operation::Divide),
            '^' => Some(Operation::Exponent),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Operation::Add => '+',
            Operation::Subtract => '-',
            Operation::Multiply => '*',
            Operation::Divide => '/',
            Operation::Exponent => '^',
        }
    }

    /// Applique l’opérateur à deux rationnels déjà calculés.
    ///
    /// Exponent passe par les flottants (a^b peut être irrationnel) puis revient
    /// en rationnel via la valeur binaire exacte du flottant obtenu.
    pub fn apply(self, a: &Rational, b: &Rational) -> Result<Rational> {
        match self {
            Operation::Add => Ok(a.add(b)),
            Operation::Subtract => Ok(a.subtract(b)),
            Operation::Multiply => Ok(a.multiply(b)),
            Operation::Divide => a.divide(b),
            Operation::Exponent => puissance_flottante(a, b),
        }
    }
}

fn puissance_flottante(base: &Rational, exposant: &Rational) -> Result<Rational> {
    let v = base.as_float().powf(exposant.as_float());
    match Rational::from_float(v) {
        Some(r) => Ok(r),
        // 0^(-n) => inf
        None if base.is_zero() && exposant.is_negative() => Err(Error::DivideByZero),
        None => Err(Error::NonRepresentable(format!("{base}^{exposant} = {v}"))),
    }
}

impl fmt::Display for Operation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

/// Ce qui se calcule : un rationnel (feuille) ou une expression (noeud).
#[derive(Clone, Debug)]
pub enum Value {
    Rational(Rational),
    Expression(Expression),
}

impl Value {
    pub fn is_expression(&self) -> bool {
        matches!(self, Value::Expression(_))
    }

    pub fn calculate(&self) -> Result<Rational> {
        match self {
            Value::Rational(r) => Ok(r.clone()),
            Value::Expression(e) => e.calculate(),
        }
    }
}

#[derive(Clone, Debug)]
pub enum Token {
    Operation(Operation),
    Value(Value),
}

impl Token {
    pub fn is_operation(&self) -> bool {
        matches!(self, Token::Operation(_))
    }

    pub fn is_value(&self) -> bool {
        matches!(self, Token::Value(_))
    }

    pub fn operation(&self) -> Option<Operation> {
        match self {
            Token::Operation(op) => Some(*op),
            Token::Value(_) => None,
        }
    }

    pub fn value(&self) -> Option<&Value> {
        match self {
            Token::Value(v) => Some(v),
            Token::Operation(_) => None,
        }
    }
}

impl From<Operation> for Token {
    fn from(op: Operation) -> Self {
        Token::Operation(op)
    }
}

impl From<Rational> for Token {
    fn from(r: Rational) -> Self {
        Token::Value(Value::Rational(r))
    }
}

impl From<Expression> for Token {
    fn from(e: Expression) -> Self {
        Token::Value(Value::Expression(e))
    }
}

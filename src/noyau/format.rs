// src/noyau/format.rs
//
// Affichages (fonctions pures, aucune mutation) :
// - infixe canonique : Display pour Expression (sous-expressions entre parenthèses)
// - arbre indenté    : Expression::format_arbre (lecture / mise au point)
// - rationnel        : "n", "n/d", ou décimal

use std::fmt;

use num_bigint::BigInt;
use num_traits::{One, Zero};

use super::expr::Expression;
use super::jetons::{Token, Value};
use super::rationnel::Rational;

/* ------------------------ Infixe canonique ------------------------ */

impl fmt::Display for Expression {
    /// Le premier jeton est suivi en boucle (peigne gauche après consolidation) :
    /// "((1+2)+3)+4" s’écrit sans descendre récursivement à gauche.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut niveaux = vec![self];
        let mut courant = self;
        while let Some(Token::Value(Value::Expression(e))) = courant.tokens.first() {
            niveaux.push(e);
            courant = e;
        }

        for _ in 1..niveaux.len() {
            f.write_str("(")?;
        }
        for (k, niveau) in niveaux.iter().rev().enumerate() {
            if k > 0 {
                f.write_str(")")?;
            }
            let debut = usize::from(k > 0);
            for t in niveau.tokens.iter().skip(debut) {
                write!(f, "{t}")?;
            }
        }
        Ok(())
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Token::Operation(op) => write!(f, "{op}"),
            Token::Value(v) => write!(f, "{v}"),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Rational(r) => write!(f, "{r}"),
            Value::Expression(e) => write!(f, "({e})"),
        }
    }
}

/* ------------------------ Arbre indenté ------------------------ */

impl Expression {
    /// Une ligne par feuille, deux espaces par niveau, sous-expressions encadrées par
    /// "(" et ")" au niveau du parent. Feuilles en forme Debug : Rational(3/4), +, ...
    pub fn format_arbre(&self) -> String {
        let mut out = String::new();
        self.ecrire_arbre(&mut out, 0);
        out
    }

    fn ecrire_arbre(&self, out: &mut String, niveau: usize) {
        let marge = "  ".repeat(niveau);
        for t in &self.tokens {
            match t {
                Token::Value(Value::Expression(e)) => {
                    out.push_str(&format!("{marge}(\n"));
                    e.ecrire_arbre(out, niveau + 1);
                    out.push_str(&format!("{marge})\n"));
                }
                Token::Value(Value::Rational(r)) => out.push_str(&format!("{marge}{r:?}\n")),
                Token::Operation(op) => out.push_str(&format!("{marge}{op}\n")),
            }
        }
    }
}

/* ------------------------ Rationnels ------------------------ */

/// "n" si entier, "n/d" sinon.
/// Décimal si demandé, ou automatiquement quand d est une puissance de 10 (3/10 => 0.3) :
/// la valeur vient d’une division flottante, avec toujours une partie décimale (4 => "4.0").
pub fn format_rational(r: &Rational, decimal: bool) -> String {
    if decimal || est_puissance_de_dix(r.denom()) {
        format_flottant(r.as_float())
    } else {
        r.to_string()
    }
}

fn est_puissance_de_dix(d: &BigInt) -> bool {
    if d <= &BigInt::one() {
        return false;
    }
    let dix = BigInt::from(10);
    let mut x = d.clone();
    while (&x % &dix).is_zero() {
        x /= &dix;
    }
    x.is_one()
}

/// Écriture courte du flottant, avec notation scientifique hors de [1e-4, 1e16) :
/// 1e-07, 1.5e+20 (exposant signé, deux chiffres au moins).
fn format_flottant(v: f64) -> String {
    if v.is_finite() && v != 0.0 && !(1e-4..1e16).contains(&v.abs()) {
        let s = format!("{v:e}");
        if let Some((mantisse, exposant)) = s.split_once('e') {
            if let Ok(exposant) = exposant.parse::<i32>() {
                let signe = if exposant < 0 { '-' } else { '+' };
                return format!("{mantisse}e{signe}{:02}", exposant.abs());
            }
        }
        return s;
    }

    let s = v.to_string();
    if v.is_finite() && !s.contains('.') {
        format!("{s}.0")
    } else {
        s
    }
}

// src/noyau/analyse.rs
//
// Lecture texte -> Expression (descente récursive sur les parenthèses).
//
// Règles:
// - les espaces sont retirés avant la lecture
// - chiffres et '.' s’accumulent dans un littéral, lu par Rational::parse
// - + - * / ^ => jeton opérateur
// - '(' => sous-expression (lue récursivement), avec '*' implicite si une valeur précède :
//   "2(3+1)" et "(1+1)(2+2)"
// - tout autre caractère (y compris une ')' orpheline) est refusé
//
// NOTE:
// - Aucune précédence ici : un niveau = une suite plate de jetons.
//   La précédence est résolue plus tard (pemdas.rs).
// - Chaque niveau est vérifié (alternance) dès la lecture : "1+*2", "-3", "3+" sont des
//   erreurs de lecture, pas des erreurs de calcul.

use super::erreur::ParseError;
use super::expr::Expression;
use super::jetons::Operation;
use super::rationnel::Rational;
use super::reglages::Reglages;

impl Expression {
    /// Lit une expression avec les réglages par défaut.
    pub fn parse(texte: &str) -> Result<Expression, ParseError> {
        Self::parse_with(texte, &Reglages::default())
    }

    pub fn parse_with(texte: &str, reglages: &Reglages) -> Result<Expression, ParseError> {
        let chars: Vec<char> = texte.chars().filter(|c| !c.is_whitespace()).collect();
        if chars.is_empty() {
            return Err(ParseError::EntreeVide);
        }
        lire_niveau(&chars, 0, 0, reglages.profondeur_max)
    }
}

/// Lit un niveau. `decalage` = position de `chars[0]` dans le texte complet (sans espaces),
/// pour des messages d’erreur lisibles.
fn lire_niveau(
    chars: &[char],
    decalage: usize,
    profondeur: usize,
    profondeur_max: usize,
) -> Result<Expression, ParseError> {
    let mut ex = Expression::new();
    let mut nombre = String::new();

    let mut i: usize = 0;
    while i < chars.len() {
        let c = chars[i];

        if c.is_ascii_digit() || c == '.' {
            nombre.push(c);
            i += 1;
            continue;
        }

        vider_nombre(&mut ex, &mut nombre)?;

        if let Some(op) = Operation::from_char(c) {
            ex.add_token(op.into());
        } else if c == '(' {
            // '*' implicite : 2(…) et (…)(…)
            if ex.last_is_value() {
                ex.add_token(Operation::Multiply.into());
            }

            let fin = parenthese_fermante(chars, i).ok_or(ParseError::ParentheseNonFermee {
                pos: decalage + i,
            })?;
            if fin == i + 1 {
                return Err(ParseError::GroupeVide { pos: decalage + i });
            }
            if profondeur + 1 > profondeur_max {
                return Err(ParseError::ProfondeurExcessive {
                    max: profondeur_max,
                });
            }

            let sous = lire_niveau(
                &chars[i + 1..fin],
                decalage + i + 1,
                profondeur + 1,
                profondeur_max,
            )?;
            ex.add_token(sous.into());
            i = fin;
        } else {
            return Err(ParseError::CaractereInvalide {
                c,
                pos: decalage + i,
            });
        }

        i += 1;
    }

    vider_nombre(&mut ex, &mut nombre)?;

    if !ex.is_valid() {
        return Err(ParseError::SequenceInvalide(chars.iter().collect()));
    }
    Ok(ex)
}

/// Pousse le littéral en cours (s’il y en a un) comme jeton-valeur.
fn vider_nombre(ex: &mut Expression, nombre: &mut String) -> Result<(), ParseError> {
    if nombre.is_empty() {
        return Ok(());
    }
    let r = Rational::parse(nombre)?;
    ex.add_token(r.into());
    nombre.clear();
    Ok(())
}

/// Index de la ')' qui ferme la '(' située en `ouvrante`.
fn parenthese_fermante(chars: &[char], ouvrante: usize) -> Option<usize> {
    let mut niveau: usize = 0;
    for (j, &c) in chars.iter().enumerate().skip(ouvrante + 1) {
        match c {
            '(' => niveau += 1,
            ')' if niveau == 0 => return Some(j),
            ')' => niveau -= 1,
            _ => {}
        }
    }
    None
}

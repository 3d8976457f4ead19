//! Noyau — évaluation (pipeline réel)
//!
//! texte -> Expression (lecture + groupes) -> consolidation par niveau -> Rational -> texte
//!
//! Le noyau n’affiche rien et ne journalise rien : tout remonte à l’appelant.

use super::erreur::Result;
use super::expr::Expression;
use super::format::format_rational;
use super::rationnel::Rational;
use super::reglages::Reglages;

/// Lit une expression (réglages par défaut).
pub fn parse_expression(texte: &str) -> Result<Expression> {
    parse_expression_with(texte, &Reglages::default())
}

pub fn parse_expression_with(texte: &str, reglages: &Reglages) -> Result<Expression> {
    Ok(Expression::parse_with(texte, reglages)?)
}

pub fn evaluate(expr: &Expression) -> Result<Rational> {
    expr.calculate()
}

pub fn render(valeur: &Rational, decimal_only: bool) -> String {
    format_rational(valeur, decimal_only)
}

#[derive(Default, Clone, Debug)]
pub struct Demarche {
    /// Infixe canonique de l’expression lue.
    pub lue: String,
    /// Premier niveau après consolidation (précédence rendue visible).
    pub consolidee: String,
    /// Arbre indenté de l’expression lue.
    pub arbre: String,
}

#[derive(Clone, Debug)]
pub struct Calcul {
    pub valeur: Rational,
    pub affichage: String,
    pub demarche: Demarche,
}

/// API publique : lit, calcule, et formate selon `reglages.decimal`.
pub fn eval_expression(texte: &str, reglages: &Reglages) -> Result<Calcul> {
    let expr = parse_expression_with(texte, reglages)?;

    let valeur = evaluate(&expr)?;
    let affichage = render(&valeur, reglages.decimal);

    let mut consolidee = expr.clone();
    consolidee.pemdas();

    let demarche = Demarche {
        lue: expr.to_string(),
        consolidee: consolidee.to_string(),
        arbre: expr.format_arbre(),
    };

    Ok(Calcul {
        valeur,
        affichage,
        demarche,
    })
}

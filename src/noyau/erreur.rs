// src/noyau/erreur.rs
//
// Erreurs du noyau.
// - ParseError : tout ce qui vient de la lecture du texte
// - Error      : ce que renvoie le pipeline complet (lecture + calcul)
//
// Aucune erreur n’est “récupérable” : tout remonte tout de suite avec `?`.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParseError {
    #[error("nombre invalide: '{0}'")]
    NombreInvalide(String),

    #[error("parenthèse non fermée (position {pos})")]
    ParentheseNonFermee { pos: usize },

    #[error("caractère invalide '{c}' (position {pos})")]
    CaractereInvalide { c: char, pos: usize },

    #[error("entrée vide")]
    EntreeVide,

    #[error("groupe vide '()' (position {pos})")]
    GroupeVide { pos: usize },

    /// Opérateurs collés, opérateur en tête ou en fin de groupe ("1+*2", "-3", "3+").
    #[error("suite de jetons invalide: '{0}'")]
    SequenceInvalide(String),

    #[error("imbrication trop profonde (max {max})")]
    ProfondeurExcessive { max: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    #[error("erreur de lecture: {0}")]
    Parse(#[from] ParseError),

    #[error("division par zéro")]
    DivideByZero,

    /// Expression construite à la main qui ne respecte pas l’alternance valeur/opérateur.
    #[error("expression invalide: {0}")]
    InvalidExpression(String),

    /// Structure incohérente après consolidation : bug du noyau, jamais une faute de l’utilisateur.
    #[error("erreur interne: {0}")]
    Internal(String),

    #[error("résultat non représentable: {0}")]
    NonRepresentable(String),
}

// src/noyau/reglages.rs
//
// Réglages du pipeline. Pas de fichier de configuration : le binaire remplit
// cette structure depuis la ligne de commande, les tests utilisent Default.

/// Imbrication de parenthèses acceptée par défaut.
/// La lecture descend récursivement dans les parenthèses, le calcul aussi : cette borne
/// protège la pile. Les chaînes plates, elles, sont consolidées et calculées en boucle,
/// quelle que soit leur longueur.
pub const PROFONDEUR_MAX_DEFAUT: usize = 64;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    /// Nombre maximal de parenthèses imbriquées.
    pub profondeur_max: usize,
    /// Affichage décimal forcé du résultat.
    pub decimal: bool,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            profondeur_max: PROFONDEUR_MAX_DEFAUT,
            decimal: false,
        }
    }
}

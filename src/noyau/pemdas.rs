// src/noyau/pemdas.rs
//
// Précédence par consolidation, puis calcul récursif.
//
// Consolidation d’un niveau plat (>= 4 jetons) vers exactement 3 jetons :
//   palier 1 : ^
//   palier 2 : * /
//   palier 3 : + -
// Dans un palier : premier opérateur du palier en partant de la gauche,
// triplet (i-1, i, i+1) remplacé par un seul jeton-valeur (sous-expression), et ainsi de
// suite. Une seule passe suffit : le triplet formé reste à gauche du prochain opérateur.
//
// Conséquence assumée : ^ est associatif à GAUCHE ici. 2^3^2 = (2^3)^2 = 64.
//
// Une chaîne plate de n opérateurs devient un peigne gauche de profondeur n :
// le calcul descend ce peigne avec une boucle, pas par récursion.

use std::borrow::Cow;

use super::erreur::{Error, Result};
use super::expr::Expression;
use super::jetons::{Operation, Token, Value};
use super::rationnel::Rational;

const PALIERS: [&[Operation]; 3] = [
    &[Operation::Exponent],
    &[Operation::Multiply, Operation::Divide],
    &[Operation::Add, Operation::Subtract],
];

impl Expression {
    /// Applique les trois paliers dans l’ordre. Ne touche pas aux sous-expressions :
    /// elles seront consolidées à leur tour quand on les calculera.
    pub fn pemdas(&mut self) {
        for palier in PALIERS {
            self.consolidate(palier);
        }
    }

    /// Regroupe en triplets les opérations du palier, de gauche à droite,
    /// tant qu’il reste au moins 4 jetons.
    pub fn consolidate(&mut self, palier: &[Operation]) {
        let mut restants = self.tokens.len();
        if restants < 4 {
            return;
        }

        let mut sortie: Vec<Token> = Vec::with_capacity(restants);
        let mut jetons = std::mem::take(&mut self.tokens).into_iter().peekable();

        while let Some(t) = jetons.next() {
            let du_palier = t.operation().is_some_and(|op| palier.contains(&op));
            // alternance => un opérateur n’est jamais en bord de liste
            if du_palier && restants >= 4 && !sortie.is_empty() && jetons.peek().is_some() {
                if let (Some(gauche), Some(droite)) = (sortie.pop(), jetons.next()) {
                    sortie.push(Expression::from_tokens(vec![gauche, t, droite]).into());
                    restants -= 2;
                    continue;
                }
            }
            sortie.push(t);
        }

        self.tokens = sortie;
    }

    /// Réduit l’expression à un seul rationnel.
    ///
    /// - invalide => InvalidExpression
    /// - 1 jeton  => sa valeur (descente dans la sous-expression)
    /// - sinon    => consolidation (sur une copie si besoin), puis gauche `op` droite
    pub fn calculate(&self) -> Result<Rational> {
        if !self.is_valid() {
            return Err(Error::InvalidExpression(self.to_string()));
        }

        if let [seul] = self.tokens.as_slice() {
            return valeur(seul)?.calculate();
        }

        // 3 jetons : déjà un triplet, pas de copie
        let travail: Cow<'_, Expression> = if self.tokens.len() >= 4 {
            let mut copie = self.clone();
            copie.pemdas();
            Cow::Owned(copie)
        } else {
            Cow::Borrowed(self)
        };

        if !travail.is_valid() {
            return Err(Error::Internal(format!(
                "alternance perdue après consolidation: {travail}"
            )));
        }

        match travail.tokens.as_slice() {
            [gauche, Token::Operation(op), droite] => {
                // peigne gauche : on empile (op, droite) jusqu’à la feuille la plus à gauche
                let mut pile = vec![(*op, droite)];
                let mut feuille = gauche;
                while let Some([g, Token::Operation(o), d]) = triplet(feuille) {
                    pile.push((*o, d));
                    feuille = g;
                }

                let mut acc = valeur(feuille)?.calculate()?;
                while let Some((op, droite)) = pile.pop() {
                    let b = valeur(droite)?.calculate()?;
                    acc = op.apply(&acc, &b)?;
                }
                Ok(acc)
            }
            _ => Err(Error::Internal(format!(
                "{} jetons après consolidation (3 attendus): {travail}",
                travail.len()
            ))),
        }
    }
}

/// Sous-expression déjà réduite à un triplet valide, prête à être descendue sans récursion.
fn triplet(t: &Token) -> Option<&[Token]> {
    match t {
        Token::Value(Value::Expression(e)) if e.len() == 3 && e.is_valid() => {
            Some(e.tokens.as_slice())
        }
        _ => None,
    }
}

fn valeur(t: &Token) -> Result<&Value> {
    t.value()
        .ok_or_else(|| Error::Internal(format!("opérateur '{t:?}' à la place d’une valeur")))
}

// src/noyau/rationnel.rs
//
// Rationnel exact (numérateur / dénominateur en BigInt).
//
// Forme canonique (après toute opération qui simplifie) :
// - pgcd(|n|, d) == 1
// - d > 0 (le signe vit dans le numérateur)
// - zéro == 0/1
//
// Les opérations arithmétiques prennent des références et renvoient une valeur neuve :
// les opérandes ne sont jamais modifiés. Seuls `scale` et `simplify` modifient en place.

use std::fmt;
use std::str::FromStr;

use num_bigint::BigInt;
use num_integer::Integer;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::erreur::{Error, ParseError, Result};

#[derive(Clone)]
pub struct Rational {
    numer: BigInt,
    denom: BigInt,
}

impl Rational {
    /// Construit n/d sous forme canonique. d == 0 => DivideByZero.
    pub fn new<N: Into<BigInt>, D: Into<BigInt>>(numer: N, denom: D) -> Result<Self> {
        Ok(Self::new_raw(numer, denom)?.simplified())
    }

    /// Construit n/d tel quel (pas de simplification, signe non normalisé).
    pub fn new_raw<N: Into<BigInt>, D: Into<BigInt>>(numer: N, denom: D) -> Result<Self> {
        let denom = denom.into();
        if denom.is_zero() {
            return Err(Error::DivideByZero);
        }
        Ok(Self {
            numer: numer.into(),
            denom,
        })
    }

    pub fn from_integer<N: Into<BigInt>>(n: N) -> Self {
        Self {
            numer: n.into(),
            denom: BigInt::one(),
        }
    }

    pub fn zero() -> Self {
        Self::from_integer(0)
    }

    pub fn numer(&self) -> &BigInt {
        &self.numer
    }

    pub fn denom(&self) -> &BigInt {
        &self.denom
    }

    /// Lit un littéral entier ou décimal ("12", "0.1", ".5", "5.", "-2.25").
    /// Conversion exacte : "0.1" => 1/10, jamais de passage par un flottant.
    pub fn parse(texte: &str) -> std::result::Result<Self, ParseError> {
        let invalide = || ParseError::NombreInvalide(texte.to_string());

        let (negatif, corps) = match texte.strip_prefix('-') {
            Some(reste) => (true, reste),
            None => (false, texte.strip_prefix('+').unwrap_or(texte)),
        };

        let (entier, fraction) = corps.split_once('.').unwrap_or((corps, ""));
        if entier.is_empty() && fraction.is_empty() {
            return Err(invalide());
        }
        let chiffres_only = |s: &str| s.bytes().all(|b| b.is_ascii_digit());
        if !chiffres_only(entier) || !chiffres_only(fraction) {
            return Err(invalide());
        }

        let chiffres = format!("{entier}{fraction}");
        let mut numer = BigInt::parse_bytes(chiffres.as_bytes(), 10).ok_or_else(invalide)?;
        if negatif {
            numer = -numer;
        }
        let denom = BigInt::from(10).pow(fraction.len() as u32);

        Ok(Self { numer, denom }.simplified())
    }

    /* ------------------------ Forme canonique ------------------------ */

    /// Divise par le pgcd, replie le signe dans le numérateur, zéro => 0/1.
    pub fn simplify(&mut self) {
        if self.numer.is_zero() {
            self.denom = BigInt::one();
            return;
        }

        let g = self.numer.gcd(&self.denom);
        if !g.is_one() {
            self.numer /= &g;
            self.denom /= &g;
        }

        if self.denom.is_negative() {
            self.numer = -&self.numer;
            self.denom = -&self.denom;
        }
    }

    pub fn simplified(mut self) -> Self {
        self.simplify();
        self
    }

    pub fn is_simplified(&self) -> bool {
        self.denom.is_positive()
            && self.numer.gcd(&self.denom).is_one()
            && (!self.numer.is_zero() || self.denom.is_one())
    }

    /// Multiplie numérateur et dénominateur par `facteur` (même valeur, autre écriture).
    pub fn scale(&mut self, facteur: &BigInt) -> Result<()> {
        if facteur.is_zero() {
            return Err(Error::DivideByZero);
        }
        self.scale_par(facteur);
        Ok(())
    }

    fn scale_par(&mut self, facteur: &BigInt) {
        self.numer *= facteur;
        self.denom *= facteur;
    }

    /// Ramène deux copies au dénominateur commun d_a * d_b (sauf s’ils sont déjà égaux).
    fn meme_denominateur(a: &mut Rational, b: &mut Rational) {
        if a.denom != b.denom {
            let da = a.denom.clone();
            a.scale_par(&b.denom);
            b.scale_par(&da);
        }
    }

    /* ------------------------ Arithmétique ------------------------ */

    pub fn add(&self, other: &Rational) -> Rational {
        let (mut a, mut b) = (self.clone(), other.clone());
        Self::meme_denominateur(&mut a, &mut b);
        Rational {
            numer: a.numer + b.numer,
            denom: a.denom,
        }
        .simplified()
    }

    pub fn subtract(&self, other: &Rational) -> Rational {
        let (mut a, mut b) = (self.clone(), other.clone());
        Self::meme_denominateur(&mut a, &mut b);
        Rational {
            numer: a.numer - b.numer,
            denom: a.denom,
        }
        .simplified()
    }

    pub fn multiply(&self, other: &Rational) -> Rational {
        Rational {
            numer: &self.numer * &other.numer,
            denom: &self.denom * &other.denom,
        }
        .simplified()
    }

    pub fn divide(&self, other: &Rational) -> Result<Rational> {
        Ok(self.multiply(&other.reciprocal()?))
    }

    pub fn reciprocal(&self) -> Result<Rational> {
        if self.numer.is_zero() {
            return Err(Error::DivideByZero);
        }
        Ok(Rational {
            numer: self.denom.clone(),
            denom: self.numer.clone(),
        }
        .simplified())
    }

    /* ------------------------ Signe ------------------------ */

    pub fn is_zero(&self) -> bool {
        self.numer.is_zero()
    }

    // valable aussi hors forme canonique (dénominateur négatif)
    pub fn is_positive(&self) -> bool {
        !self.numer.is_zero() && self.numer.is_positive() == self.denom.is_positive()
    }

    pub fn is_negative(&self) -> bool {
        !self.is_zero() && !self.is_positive()
    }

    /* ------------------------ Conversions ------------------------ */

    pub fn to_big_rational(&self) -> BigRational {
        BigRational::new(self.numer.clone(), self.denom.clone())
    }

    /// Approximation flottante (arrondie au plus proche, sans overflow intermédiaire).
    pub fn as_float(&self) -> f64 {
        self.to_big_rational().to_f64().unwrap_or(f64::NAN)
    }

    /// Valeur binaire exacte d’un flottant fini (0.5 => 1/2). None si NaN ou infini.
    pub fn from_float(f: f64) -> Option<Rational> {
        BigRational::from_float(f).map(Rational::from)
    }

    /* ------------------------ Fraction égyptienne ------------------------ */

    /// Décomposition gloutonne en fractions unitaires : 3/4 => [1/2, 1/4].
    ///
    /// Le candidat 1/i part de i = 2 et avance à chaque tour sans jamais revenir en arrière ;
    /// il est retenu dès que le reste ne devient pas négatif. Arrêt sur un reste exactement nul.
    /// Aucune borne sur le nombre de tours : réservé à de petites entrées.
    /// None pour une valeur négative (la recherche ne finirait jamais).
    pub fn as_egyptian_fraction(&self) -> Option<Vec<Rational>> {
        self.egyptienne(None)
    }

    /// Même décomposition, abandonnée (None) après `max_candidats` candidats essayés.
    /// Les dénominateurs gloutons explosent vite (2^0.5 en flottant, 5/121, ...).
    pub fn as_egyptian_fraction_bornee(&self, max_candidats: u64) -> Option<Vec<Rational>> {
        self.egyptienne(Some(max_candidats))
    }

    fn egyptienne(&self, max_candidats: Option<u64>) -> Option<Vec<Rational>> {
        if self.is_negative() {
            return None;
        }

        let mut reste = self.clone().simplified();
        let mut out = Vec::new();
        let mut i = BigInt::from(2);
        let mut essais: u64 = 0;

        while !reste.is_zero() {
            if max_candidats.is_some_and(|max| essais >= max) {
                return None;
            }
            essais += 1;

            let candidat = Rational {
                numer: BigInt::one(),
                denom: i.clone(),
            };
            let y = reste.subtract(&candidat);
            if !y.is_negative() {
                out.push(candidat);
                reste = y;
            }
            i += 1u32;
        }

        Some(out)
    }
}

impl From<BigRational> for Rational {
    fn from(r: BigRational) -> Self {
        Rational {
            numer: r.numer().clone(),
            denom: r.denom().clone(),
        }
    }
}

impl FromStr for Rational {
    type Err = ParseError;

    fn from_str(s: &str) -> std::result::Result<Self, Self::Err> {
        Rational::parse(s)
    }
}

/// Égalité de valeur : 2/4 == 1/2, même hors forme canonique.
impl PartialEq for Rational {
    fn eq(&self, other: &Self) -> bool {
        &self.numer * &other.denom == &other.numer * &self.denom
    }
}

impl Eq for Rational {}

impl fmt::Display for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.denom.is_one() {
            write!(f, "{}", self.numer)
        } else {
            write!(f, "{}/{}", self.numer, self.denom)
        }
    }
}

impl fmt::Debug for Rational {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Rational({self})")
    }
}

//! Tests scientifiques (campagne) : propriétés du noyau contre une référence indépendante.
//!
//! But : vérifier les résultats avec autre chose que le noyau lui-même.
//! - référence : num_rational::BigRational (calculs faits à la main, ligne par ligne)
//! - précédence, '*' implicite, exactitude des fractions
//! - contrat d’erreurs (lecture vs calcul)
//! - fraction égyptienne : somme exacte + dénominateurs croissants
//!
//! Notes importantes :
//! - ^ est associatif à gauche (consolidation de gauche à droite) : 2^3^2 = 64.
//! - ^ passe par les flottants : on ne le teste qu’avec des résultats exactement
//!   représentables (entiers, puissances de 2).

use std::time::{Duration, Instant};

use num_bigint::BigInt;
use num_rational::BigRational;
use test_case::test_case;

use super::erreur::{Error, ParseError};
use super::eval::{evaluate, parse_expression, render};
use super::rationnel::Rational;

fn big(n: i64, d: i64) -> BigRational {
    BigRational::new(BigInt::from(n), BigInt::from(d))
}

fn valeur(expr: &str) -> Rational {
    let e = parse_expression(expr).unwrap_or_else(|err| panic!("expr={expr:?} err={err}"));
    evaluate(&e).unwrap_or_else(|err| panic!("expr={expr:?} err={err}"))
}

fn assert_exact_eq(expr: &str, attendu: &str) {
    assert_eq!(render(&valeur(expr), false), attendu, "expr={expr:?}");
}

fn assert_ref(expr: &str, reference: BigRational) {
    assert_eq!(valeur(expr).to_big_rational(), reference, "expr={expr:?}");
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Référence indépendante ------------------------ */

#[test]
fn sci_reference_fractions() {
    assert_ref("1/2 + 1/3", big(1, 2) + big(1, 3));
    assert_ref("3/4 - 5/6", big(3, 4) - big(5, 6));
    assert_ref("2/3 * 9/4", big(2, 3) * big(9, 1) / big(4, 1));
    assert_ref("(1/7)/(2/21)", big(1, 7) / big(2, 21));
    assert_ref("1.5 * 0.25 + 0.125", big(3, 2) * big(1, 4) + big(1, 8));
    assert_ref("10 - 2(3 - 0.5)", big(10, 1) - big(2, 1) * big(5, 2));
}

#[test]
fn sci_grands_entiers() {
    // au-delà de i64 : pas de débordement
    let r = valeur("99999999999999999999 * 99999999999999999999 + 1");
    let n: BigInt = "99999999999999999999".parse().unwrap();
    assert_eq!(r.to_big_rational(), BigRational::from_integer(&n * &n + 1));
}

/* ------------------------ Précédence ------------------------ */

#[test_case("2+3*4", "14" ; "produit avant somme")]
#[test_case("(2+3)*4", "20" ; "parentheses d abord")]
#[test_case("2^3^2", "64" ; "puissance a gauche")]
#[test_case("2*3^2", "18" ; "puissance avant produit")]
#[test_case("12/4/3", "1" ; "division a gauche")]
#[test_case("8-3-2", "3" ; "soustraction a gauche")]
#[test_case("1+2*3^2/6-1", "3" ; "trois paliers")]
#[test_case("2(3+1)", "8" ; "implicite apres nombre")]
#[test_case("(1+1)(2+2)", "8" ; "implicite entre groupes")]
#[test_case("2(3)(4)", "24" ; "implicite en chaine")]
#[test_case("1/3 + 1/3 + 1/3", "1" ; "tiers exacts")]
#[test_case("0.1 + 0.2 - 0.3", "0" ; "pas de derive flottante")]
fn sci_table(expr: &str, attendu: &str) {
    assert_exact_eq(expr, attendu);
}

#[test]
fn sci_puissance_flottante_exacte_si_representable() {
    assert_exact_eq("2^10", "1024");
    assert_exact_eq("4^0.5", "2");
    assert_exact_eq("2^(0-2)", "1/4");
    assert_exact_eq("0.5^3", "1/8");
}

#[test]
fn sci_puissance_non_entiere_approchee() {
    // 2^0.5 : valeur binaire du flottant, plus du tout exacte
    let r = valeur("2^0.5");
    assert_eq!(r.as_float(), 2f64.sqrt());
    assert_ne!(r.to_big_rational() * r.to_big_rational(), big(2, 1));
}

/* ------------------------ Simplification ------------------------ */

#[test]
fn sci_simplify_idempotent() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    for n in -30i64..=30 {
        for d in (-12i64..=12).filter(|d| *d != 0) {
            budget(t0, max);

            let mut x = Rational::new_raw(n, d).unwrap();
            x.simplify();
            let une = x.to_string();
            x.simplify();
            assert_eq!(x.to_string(), une, "n={n} d={d}");
            assert!(x.is_simplified(), "n={n} d={d}");
            assert_eq!(x.to_big_rational(), big(n, d), "n={n} d={d}");
        }
    }
}

#[test]
fn sci_resultats_toujours_canoniques() {
    for expr in ["6/4", "0*5/7", "(1-3)/4", "2/(0-6)", "0.50", "1/2-1/2"] {
        let r = valeur(expr);
        assert!(r.is_simplified(), "expr={expr:?} r={r:?}");
    }
}

/* ------------------------ Contrat d’erreurs ------------------------ */

#[test]
fn sci_erreurs() {
    assert!(matches!(
        parse_expression("(1+2"),
        Err(Error::Parse(ParseError::ParentheseNonFermee { .. }))
    ));

    let e = parse_expression("1/0").unwrap();
    assert_eq!(evaluate(&e).unwrap_err(), Error::DivideByZero);

    // opérateurs collés : toujours à la lecture, jamais au calcul
    assert!(matches!(
        parse_expression("1+*2"),
        Err(Error::Parse(ParseError::SequenceInvalide(_)))
    ));

    assert!(matches!(
        parse_expression("2 + abc"),
        Err(Error::Parse(ParseError::CaractereInvalide { c: 'a', .. }))
    ));

    let e = parse_expression("0^(0-1)").unwrap();
    assert_eq!(evaluate(&e).unwrap_err(), Error::DivideByZero);
}

/* ------------------------ Fraction égyptienne ------------------------ */

#[test]
fn sci_egyptienne() {
    let t0 = Instant::now();
    let max = Duration::from_secs(2);

    let trois_quarts = valeur("3/4");
    assert_eq!(
        trois_quarts.as_egyptian_fraction().unwrap(),
        vec![Rational::new(1, 2).unwrap(), Rational::new(1, 4).unwrap()]
    );

    for d in 2i64..=12 {
        for n in 1..d {
            budget(t0, max);

            let x = Rational::new(n, d).unwrap();
            let parts = x.as_egyptian_fraction().unwrap();

            let somme: BigRational = parts.iter().map(Rational::to_big_rational).sum();
            assert_eq!(somme, big(n, d), "x={x}");

            for w in parts.windows(2) {
                assert!(w[0].denom() < w[1].denom(), "x={x} parts={parts:?}");
            }
        }
    }
}

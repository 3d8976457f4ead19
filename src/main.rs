// src/main.rs
//
// exparser — point d’entrée ligne de commande
// -------------------------------------------
// But:
// - joindre les mots de l’expression (comme un shell les a découpés)
// - évaluer via le noyau exact
// - afficher le résultat (exact, ou décimal avec -f)
//
// Journalisation : stderr seulement, filtrée par RUST_LOG (défaut: warn).
// Le noyau, lui, ne journalise rien.

use anyhow::{bail, Context};
use clap::Parser;
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

use exparser::noyau::reglages::PROFONDEUR_MAX_DEFAUT;
use exparser::{eval_expression, Rational, Reglages};

/// Candidats essayés au plus par --egyptian (un résultat de ^ non exact ne finirait jamais).
const EGYPTIENNE_CANDIDATS_MAX: u64 = 5_000_000;

#[derive(Parser, Debug)]
#[command(
    name = "exparser",
    version,
    about = "Calcule une expression arithmétique en rationnels exacts."
)]
struct Args {
    /// Affiche le résultat en décimal (division flottante).
    #[arg(short = 'f', long = "float-only")]
    float_only: bool,

    /// Affiche l’arbre de l’expression lue avant le résultat.
    #[arg(long)]
    tree: bool,

    /// Affiche aussi la décomposition en fraction égyptienne (résultat positif seulement).
    #[arg(long)]
    egyptian: bool,

    /// Nombre maximal de parenthèses imbriquées.
    #[arg(long, default_value_t = PROFONDEUR_MAX_DEFAUT)]
    max_depth: usize,

    /// L’expression (les mots sont joints par un espace).
    expression: Vec<String>,
}

fn installer_journal() {
    let filtre = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filtre)
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();
}

fn main() -> anyhow::Result<()> {
    installer_journal();

    let args = Args::parse();
    let texte = args.expression.join(" ");
    if texte.trim().is_empty() {
        bail!("aucune expression fournie (ex: exparser \"2(3+1)\")");
    }

    let reglages = Reglages {
        profondeur_max: args.max_depth,
        decimal: args.float_only,
    };
    debug!(expression = %texte, ?reglages, "évaluation");

    let calcul = eval_expression(&texte, &reglages)
        .with_context(|| format!("impossible de calculer '{texte}'"))?;

    debug!(lue = %calcul.demarche.lue, consolidee = %calcul.demarche.consolidee, "démarche");
    info!(resultat = %calcul.valeur, "calculé");

    if args.tree {
        print!("{}", calcul.demarche.arbre);
    }

    println!("{}", calcul.affichage);

    if args.egyptian {
        println!("{}", fraction_egyptienne(&calcul.valeur, EGYPTIENNE_CANDIDATS_MAX)?);
    }

    Ok(())
}

fn fraction_egyptienne(valeur: &Rational, max_candidats: u64) -> anyhow::Result<String> {
    if !valeur.is_positive() {
        bail!("pas de fraction égyptienne pour {valeur} (valeur positive attendue)");
    }
    match valeur.as_egyptian_fraction_bornee(max_candidats) {
        Some(parts) => {
            let termes: Vec<String> = parts.iter().map(ToString::to_string).collect();
            Ok(termes.join(" + "))
        }
        None => bail!(
            "fraction égyptienne abandonnée pour {valeur} après {max_candidats} candidats \
             (dénominateurs trop grands, résultat de ^ approché ?)"
        ),
    }
}

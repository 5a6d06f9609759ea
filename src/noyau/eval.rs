//! Noyau — évaluation (pipeline réel)
//!
//! normaliser -> tokenize -> RPN -> pile f64 -> texte décimal canonique
//!
//! Chaque étape a sa propre erreur ; ici on les remonte telles quelles
//! (`?` vers `ErreurCalc`). C’est l’état d’édition qui les écrase en marqueur.

use tracing::debug;

use super::erreur::ErreurCalc;
use super::format::format_decimal;
use super::jetons::{format_jetons, normaliser, tokenize};
use super::rpn::{eval_rpn, to_rpn};

/// Démarche d’une évaluation réussie (jetons + RPN en texte).
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// Résultat complet d’une évaluation.
#[derive(Clone, Debug, PartialEq)]
pub struct Evaluation {
    /// Texte canonique (arrondi, sans zéros de queue, sans exposant).
    pub texte: String,
    pub valeur: f64,
    pub demarche: Demarche,
}

/// API publique : évalue une expression (glyphes d’affichage acceptés)
/// et retourne le texte canonique à `digits` décimales au plus.
pub fn eval_expression(expr_str: &str, digits: usize) -> Result<Evaluation, ErreurCalc> {
    // 1) Normalisation (× ÷ −, π / pi / e)
    let normalise = normaliser(expr_str);

    // 2) Jetons
    let jetons = tokenize(&normalise)?;
    let jetons_txt = format_jetons(&jetons);

    // 3) RPN
    let rpn = to_rpn(&jetons)?;
    let rpn_txt = format_jetons(&rpn);
    debug!(expr = expr_str, jetons = %jetons_txt, rpn = %rpn_txt, "pipeline");

    // 4) Valeur
    let valeur = eval_rpn(&rpn)?;

    // 5) Texte canonique (refuse NaN / ±∞)
    let texte = format_decimal(valeur, digits)?;

    Ok(Evaluation {
        texte,
        valeur,
        demarche: Demarche {
            jetons: jetons_txt,
            rpn: rpn_txt,
        },
    })
}

//! Noyau de la calculatrice (f64 + texte décimal canonique)
//!
//! Organisation interne :
//! - erreur.rs     : erreurs typées par étape + ErreurCalc
//! - operateurs.rs : table statique précédence / associativité / arité
//! - jetons.rs     : normalisation + tokenisation (moins unaire tranché ici)
//! - rpn.rs        : shunting-yard + évaluation de la RPN
//! - format.rs     : arrondi half-up, zéros de queue, sans exposant
//! - eval.rs       : pipeline complet

pub mod erreur;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod operateurs;
pub mod rpn;

#[cfg(test)]
mod tests_scientifiques;


// API publique minimale
pub use erreur::ErreurCalc;
pub use eval::{eval_expression, Demarche, Evaluation};

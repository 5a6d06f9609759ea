// src/lib.rs
//
// Calculatrice RPN — moteur d’expression
// --------------------------------------
// - noyau : normalisation, jetons, shunting-yard, pile RPN, texte décimal
// - app   : état d’édition (entrée, politique de saisie, marqueur d’erreur)
//
// Pas d’interface ici : l’appelant (clavier, écran) passe par `Calculatrice`.

pub mod app;
pub mod noyau;

pub use app::{Calculatrice, MoteurCalc, Reglages};
pub use noyau::{eval_expression, ErreurCalc};

//! src/noyau/erreur.rs
//!
//! Erreurs du noyau, une famille par étape :
//! - ErreurLex     : jetons (caractère ou identifiant inconnu)
//! - ErreurSyntaxe : shunting-yard (parenthèses, opérateurs mal placés)
//! - ErreurEval    : pile RPN (sous-dépassement, reste != 1)
//! - ErreurFormat  : résultat non fini (÷0, √ négatif, log ≤ 0…)
//!
//! `ErreurCalc` regroupe le tout pour le pipeline (`?` partout).
//! L’état d’édition les écrase toutes en un seul marqueur d’erreur.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurLex {
    #[error("caractère inattendu: '{car}' (position {position})")]
    Caractere { car: char, position: usize },

    #[error("identifiant inconnu: '{nom}' (position {position})")]
    IdentInconnu { nom: String, position: usize },
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurSyntaxe {
    #[error("expression vide")]
    ExpressionVide,

    #[error("parenthèse orpheline")]
    ParentheseOrpheline,

    #[error("séparateur ',' hors parenthèses")]
    VirguleHorsParentheses,

    /// Opérateur binaire là où une valeur est attendue.
    #[error("opérateur mal placé (jeton {position})")]
    OperateurMalPlace { position: usize },

    #[error("expression incomplète")]
    ExpressionIncomplete,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ErreurEval {
    #[error("nombre invalide: {0:?}")]
    NombreInvalide(String),

    #[error("pile vide pour '{jeton}'")]
    PileVide { jeton: String },

    #[error("jeton inattendu en RPN: '{0}'")]
    JetonInattendu(String),

    #[error("expression malformée ({restants} valeurs restantes)")]
    ExpressionMalformee { restants: usize },
}

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurFormat {
    #[error("résultat non fini: {0}")]
    NonFini(f64),

    #[error("texte décimal illisible: {0:?}")]
    TexteIllisible(String),
}

/// Erreur unifiée du pipeline.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ErreurCalc {
    #[error("lexique: {0}")]
    Lex(#[from] ErreurLex),

    #[error("syntaxe: {0}")]
    Syntaxe(#[from] ErreurSyntaxe),

    #[error("évaluation: {0}")]
    Eval(#[from] ErreurEval),

    #[error("format: {0}")]
    Format(#[from] ErreurFormat),
}

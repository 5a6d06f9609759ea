// src/app.rs
//
// Calculatrice — module App (racine)
// ----------------------------------
// Rôle:
// - Déclarer les sous-modules (etat.rs + saisie.rs)
// - Ré-exporter MoteurCalc / Reglages
// - Fournir le trait `Calculatrice` : les 4 opérations vues par l’appelant
//   (clavier, écran…), chacune rend le texte à afficher.
//
// Important:
// - L’appelant n’a jamais accès aux erreurs : seulement au texte.
// - Une seule instance par propriétaire : pas de verrou interne.

pub mod etat;
pub mod saisie;

// Ré-export pratique : `use crate::app::MoteurCalc;`
pub use etat::{MoteurCalc, Reglages};

/// Opérations d’édition exposées à l’interface.
pub trait Calculatrice {
    /// Ajoute un symbole de touche ("7", "+", "×", "sin(", "π"…).
    fn append(&mut self, symbole: &str) -> String;

    /// Remet l’entrée à "0".
    fn clear(&mut self) -> String;

    /// Retire le dernier caractère (jamais d’entrée vide).
    fn delete(&mut self) -> String;

    /// Évalue : résultat canonique, ou marqueur d’erreur.
    fn evaluate(&mut self) -> String;
}

impl Calculatrice for MoteurCalc {
    fn append(&mut self, symbole: &str) -> String {
        self.saisir(symbole);
        self.tampon().to_string()
    }

    fn clear(&mut self) -> String {
        self.reset_total();
        self.tampon().to_string()
    }

    fn delete(&mut self) -> String {
        self.retour_arriere();
        self.tampon().to_string()
    }

    fn evaluate(&mut self) -> String {
        self.calculer();
        self.tampon().to_string()
    }
}

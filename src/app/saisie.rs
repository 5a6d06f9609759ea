//! src/app/saisie.rs
//!
//! Symboles acceptés par la saisie (touches du clavier de la calculatrice).
//!
//! Rôle : classer un symbole texte une fois pour toutes, pour que l’état
//! d’édition raisonne sur un enum et pas sur des comparaisons de chaînes.

use crate::noyau::operateurs::Fonction;

/// Glyphes d’opérateurs tels qu’ils peuvent apparaître dans l’entrée.
const GLYPHES_OPERATEURS: [char; 8] = ['+', '-', '*', '/', '^', '×', '÷', '−'];

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Symbole {
    Chiffre(char),
    Point,
    /// Opérateur tel que saisi (ASCII ou glyphe d’affichage).
    Operateur(char),
    ParG,
    ParD,
    /// π ou e
    Constante(char),
    /// "sin(", "cos(", … : fonction + parenthèse ouvrante
    Fonction(Fonction),
}

impl Symbole {
    /// Lit un symbole de touche. None si la touche est inconnue.
    pub fn lire(s: &str) -> Option<Self> {
        if let Some(nom) = s.strip_suffix('(') {
            if !nom.is_empty() {
                return Fonction::depuis_nom(nom).map(Symbole::Fonction);
            }
        }

        let mut it = s.chars();
        let c = it.next()?;
        if it.next().is_some() {
            return None;
        }

        match c {
            '0'..='9' => Some(Symbole::Chiffre(c)),
            '.' => Some(Symbole::Point),
            '(' => Some(Symbole::ParG),
            ')' => Some(Symbole::ParD),
            'π' | 'e' => Some(Symbole::Constante(c)),
            _ if est_car_operateur(c) => Some(Symbole::Operateur(c)),
            _ => None,
        }
    }

    /// Texte inséré dans l’entrée.
    pub fn texte(&self) -> String {
        match self {
            Symbole::Chiffre(c) | Symbole::Operateur(c) | Symbole::Constante(c) => c.to_string(),
            Symbole::Point => ".".to_string(),
            Symbole::ParG => "(".to_string(),
            Symbole::ParD => ")".to_string(),
            Symbole::Fonction(f) => format!("{}(", f.nom()),
        }
    }

    pub fn est_operateur(&self) -> bool {
        matches!(self, Symbole::Operateur(_))
    }

    /// Ouvre un groupe qui réclame une multiplication implicite après une valeur.
    pub fn ouvre_groupe(&self) -> bool {
        matches!(
            self,
            Symbole::Fonction(_) | Symbole::ParG | Symbole::Constante(_)
        )
    }

    pub fn commence_nombre(&self) -> bool {
        matches!(self, Symbole::Chiffre(_) | Symbole::Point)
    }
}

pub fn est_car_operateur(c: char) -> bool {
    GLYPHES_OPERATEURS.contains(&c)
}

pub fn est_car_constante(c: char) -> bool {
    matches!(c, 'π' | 'e')
}

/// Dernier caractère d’une valeur complète : chiffre, ')' ou constante.
pub fn termine_valeur(c: char) -> bool {
    c.is_ascii_digit() || c == ')' || est_car_constante(c)
}

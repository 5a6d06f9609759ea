// src/noyau/jetons.rs
//
// Normalisation + tokenisation.
//
// 1) normaliser : glyphes d’affichage -> ASCII (× ÷ −), constantes -> texte décimal
// 2) tokenize   : texte normalisé -> suite de Jeton
//
// Le moins unaire est tranché ICI (et nulle part ailleurs) :
// '-' est unaire en tête, ou après un opérateur, un moins unaire, '(' ou ','.

use std::f64::consts::{E, PI};
use std::fmt;

use super::erreur::ErreurLex;
use super::operateurs::{Fonction, Operateur};

#[derive(Clone, Debug, PartialEq)]
pub enum Jeton {
    /// Texte décimal brut (parsé par l’évaluateur).
    Nombre(String),
    Op(Operateur),
    MoinsUnaire,
    Fonction(Fonction),
    ParG,
    ParD,
    Virgule,
}

impl fmt::Display for Jeton {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Jeton::Nombre(txt) => f.write_str(txt),
            Jeton::Op(op) => write!(f, "{op}"),
            Jeton::MoinsUnaire => f.write_str("neg"),
            Jeton::Fonction(fct) => write!(f, "{fct}"),
            Jeton::ParG => f.write_str("("),
            Jeton::ParD => f.write_str(")"),
            Jeton::Virgule => f.write_str(","),
        }
    }
}

/// Texte décimal d’une constante nommée en toutes lettres (pi, e).
fn constante(nom: &str) -> Option<String> {
    match nom {
        "pi" => Some(PI.to_string()),
        "e" => Some(E.to_string()),
        _ => None,
    }
}

/// Ramène l’entrée d’affichage à la forme canonique attendue par `tokenize`.
pub fn normaliser(s: &str) -> String {
    let chars: Vec<char> = s.chars().collect();
    let mut out = String::with_capacity(s.len());
    let mut i = 0;

    while i < chars.len() {
        let c = chars[i];

        match c {
            '×' => out.push('*'),
            '÷' => out.push('/'),
            '−' => out.push('-'),
            'π' => out.push_str(&PI.to_string()),
            _ if c.is_ascii_alphabetic() => {
                // mot entier : seuls "pi" et "e" isolés sont des constantes
                let start = i;
                while i < chars.len() && chars[i].is_ascii_alphabetic() {
                    i += 1;
                }
                let mot: String = chars[start..i].iter().collect();
                match constante(&mot) {
                    Some(txt) => out.push_str(&txt),
                    None => out.push_str(&mot),
                }
                continue;
            }
            _ => out.push(c),
        }
        i += 1;
    }

    out
}

/// Vrai si un '-' arrivant après `prec` doit être unaire.
fn moins_est_unaire(prec: Option<&Jeton>) -> bool {
    matches!(
        prec,
        None | Some(Jeton::Op(_))
            | Some(Jeton::MoinsUnaire)
            | Some(Jeton::ParG)
            | Some(Jeton::Virgule)
    )
}

/// Tokenize une chaîne normalisée.
/// Supporte:
/// - nombres décimaux (ex: 12, 1.5, .5) : munch maximal sur [0-9.]
/// - opérateurs + - * / ^ (moins unaire tranché ici)
/// - parenthèses ( ) et séparateur ,
/// - fonctions sin cos tan log ln sqrt (casse exacte)
pub fn tokenize(s: &str) -> Result<Vec<Jeton>, ErreurLex> {
    let mut out: Vec<Jeton> = Vec::new();
    let chars: Vec<char> = s.chars().collect();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_whitespace() {
            i += 1;
            continue;
        }

        // Opérateurs
        if let Some(op) = Operateur::depuis_car(c) {
            if op == Operateur::Moins && moins_est_unaire(out.last()) {
                out.push(Jeton::MoinsUnaire);
            } else {
                out.push(Jeton::Op(op));
            }
            i += 1;
            continue;
        }

        match c {
            '(' => out.push(Jeton::ParG),
            ')' => out.push(Jeton::ParD),
            ',' => out.push(Jeton::Virgule),

            _ if c.is_ascii_digit() || c == '.' => {
                let start = i;
                while i < chars.len() && (chars[i].is_ascii_digit() || chars[i] == '.') {
                    i += 1;
                }
                out.push(Jeton::Nombre(chars[start..i].iter().collect()));
                continue;
            }

            _ if c.is_ascii_alphabetic() => {
                let start = i;
                while i < chars.len() && chars[i].is_ascii_alphabetic() {
                    i += 1;
                }
                let nom: String = chars[start..i].iter().collect();
                let fct = Fonction::depuis_nom(&nom).ok_or(ErreurLex::IdentInconnu {
                    nom,
                    position: start,
                })?;
                out.push(Jeton::Fonction(fct));
                continue;
            }

            _ => return Err(ErreurLex::Caractere { car: c, position: i }),
        }
        i += 1;
    }

    Ok(out)
}

/// Format utilitaire (traces / démarche) : liste de jetons en texte.
pub fn format_jetons(jetons: &[Jeton]) -> String {
    jetons
        .iter()
        .map(Jeton::to_string)
        .collect::<Vec<_>>()
        .join(" ")
}

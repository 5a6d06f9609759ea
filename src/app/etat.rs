//! src/app/etat.rs
//!
//! État d’édition de la calculatrice (sans vue).
//!
//! Rôle : posséder l’entrée courante et appliquer la politique de saisie
//! avant que le texte n’atteigne le noyau :
//! - opérateur après opérateur : le dernier gagne
//! - un seul point par nombre
//! - multiplication implicite (2 sin( -> 2*sin(, )( -> )*( , 2π -> 2*π)
//!
//! Contrats :
//! - L’entrée n’est jamais vide ("0" quand il n’y a rien).
//! - Aucune erreur ne remonte : `calculer` écrase tout en marqueur d’erreur,
//!   la saisie suivante repart de "0".

use tracing::{debug, warn};

use super::saisie::{est_car_constante, est_car_operateur, termine_valeur, Symbole};
use crate::noyau::{eval_expression, Demarche, ErreurCalc};

/// Décimales par défaut du résultat.
pub const DIGITS_DEFAUT: usize = 10;

/// Garde-fou : on borne la précision.
pub const DIGITS_MAX: usize = 30;

/// Texte affiché après une évaluation ratée.
pub const MARQUEUR_ERREUR: &str = "Error";

const ENTREE_VIDE: &str = "0";

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Reglages {
    digits: usize,
    marqueur_erreur: String,
}

impl Default for Reglages {
    fn default() -> Self {
        Self {
            digits: DIGITS_DEFAUT,
            marqueur_erreur: MARQUEUR_ERREUR.to_string(),
        }
    }
}

impl Reglages {
    /// Précision bornée à DIGITS_MAX.
    pub fn avec_digits(mut self, digits: usize) -> Self {
        self.digits = digits.min(DIGITS_MAX);
        self
    }

    /// Marqueur vide refusé (on garde le marqueur par défaut).
    pub fn avec_marqueur(mut self, marqueur: impl Into<String>) -> Self {
        let m = marqueur.into();
        self.marqueur_erreur = if m.is_empty() {
            MARQUEUR_ERREUR.to_string()
        } else {
            m
        };
        self
    }

    pub fn digits(&self) -> usize {
        self.digits
    }

    pub fn marqueur_erreur(&self) -> &str {
        &self.marqueur_erreur
    }
}

#[derive(Clone, Debug)]
pub struct MoteurCalc {
    // --- entrée utilisateur (ou marqueur si en_erreur) ---
    entree: String,
    en_erreur: bool,

    // --- diagnostic de la dernière évaluation ---
    derniere_erreur: Option<ErreurCalc>,
    derniere_demarche: Option<Demarche>,

    // --- paramètres ---
    reglages: Reglages,
}

impl Default for MoteurCalc {
    fn default() -> Self {
        Self::avec_reglages(Reglages::default())
    }
}

impl MoteurCalc {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn avec_reglages(reglages: Reglages) -> Self {
        Self {
            entree: ENTREE_VIDE.to_string(),
            en_erreur: false,
            derniere_erreur: None,
            derniere_demarche: None,
            reglages,
        }
    }

    /* ------------------------ Lecture ------------------------ */

    /// Texte affiché : l’entrée, ou le marqueur d’erreur.
    pub fn tampon(&self) -> &str {
        &self.entree
    }

    pub fn en_erreur(&self) -> bool {
        self.en_erreur
    }

    /// Cause interne du dernier échec (tous types confondus côté affichage).
    pub fn derniere_erreur(&self) -> Option<&ErreurCalc> {
        self.derniere_erreur.as_ref()
    }

    pub fn derniere_demarche(&self) -> Option<&Demarche> {
        self.derniere_demarche.as_ref()
    }

    pub fn reglages(&self) -> &Reglages {
        &self.reglages
    }

    /* ------------------------ Actions “boutons” ------------------------ */

    /// AC : remise à "0" (sort de l’état d’erreur).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.entree.push_str(ENTREE_VIDE);
        self.en_erreur = false;
    }

    /// ⌫ : retire le dernier caractère ; jamais d’entrée vide.
    pub fn retour_arriere(&mut self) {
        if self.en_erreur {
            self.reset_total();
            return;
        }
        self.entree.pop();
        if self.entree.is_empty() {
            self.entree.push_str(ENTREE_VIDE);
        }
    }

    /// Touche quelconque. Les touches inconnues sont ignorées.
    pub fn saisir(&mut self, touche: &str) {
        let Some(sym) = Symbole::lire(touche) else {
            warn!(touche, "touche inconnue ignorée");
            return;
        };

        if self.en_erreur {
            self.reset_total();
        }

        self.applique(sym);
    }

    /// = : évalue l’entrée et la remplace par le résultat (ou le marqueur).
    pub fn calculer(&mut self) {
        if self.en_erreur {
            return;
        }

        match eval_expression(&self.entree, self.reglages.digits()) {
            Ok(ev) => {
                self.entree = ev.texte;
                self.derniere_demarche = Some(ev.demarche);
                self.derniere_erreur = None;
            }
            Err(e) => {
                debug!(entree = %self.entree, erreur = %e, "évaluation refusée");
                self.set_erreur(e);
            }
        }
    }

    /* ------------------------ Politique de saisie ------------------------ */

    fn applique(&mut self, sym: Symbole) {
        let dernier = self.entree.chars().last();

        // opérateur après opérateur : le dernier gagne
        if sym.est_operateur() && dernier.is_some_and(est_car_operateur) {
            self.entree.pop();
            self.entree.push_str(&sym.texte());
            return;
        }

        // un seul point par nombre
        if sym == Symbole::Point && self.nombre_en_cours().contains('.') {
            return;
        }

        // "0" seul : remplacé (sauf par '.' ou un opérateur, qui le prolongent)
        if self.entree == ENTREE_VIDE && sym != Symbole::Point && !sym.est_operateur() {
            self.entree = sym.texte();
            return;
        }

        if multiplication_implicite(dernier, sym) {
            self.entree.push('*');
        }
        self.entree.push_str(&sym.texte());
    }

    /// Suite finale maximale de chiffres / points de l’entrée.
    fn nombre_en_cours(&self) -> &str {
        let debut = self
            .entree
            .trim_end_matches(|c: char| c.is_ascii_digit() || c == '.');
        &self.entree[debut.len()..]
    }

    /// Place l’état d’erreur : l’entrée affiche le marqueur.
    fn set_erreur(&mut self, e: ErreurCalc) {
        self.entree.clear();
        self.entree.push_str(self.reglages.marqueur_erreur());
        self.en_erreur = true;
        self.derniere_erreur = Some(e);
        self.derniere_demarche = None;
    }
}

/// Vrai si `sym` collé à `dernier` doit être séparé par un '*'.
fn multiplication_implicite(dernier: Option<char>, sym: Symbole) -> bool {
    let Some(c) = dernier else {
        return false;
    };

    // 2 sin( | ) ( | π ( | 2 π
    if termine_valeur(c) && sym.ouvre_groupe() {
        return true;
    }

    // ) 2 | π 2 : une constante ne se colle jamais à un nombre
    (c == ')' || est_car_constante(c)) && sym.commence_nombre()
}

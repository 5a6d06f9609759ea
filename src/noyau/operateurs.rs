// src/noyau/operateurs.rs
//
// Table statique des opérateurs et fonctions.
// Lecture seule, partagée par le shunting-yard et l’évaluateur.
//
//   + -        : 1, gauche, binaire
//   * /        : 2, gauche, binaire
//   ^          : 3, droite, binaire
//   moins un.  : 4, droite, unaire
//   fonctions  : 5, gauche, unaire

use std::fmt;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Operateur {
    Plus,
    Moins,
    Fois,
    Divise,
    Puissance,
}

impl Operateur {
    pub fn depuis_car(c: char) -> Option<Self> {
        match c {
            '+' => Some(Self::Plus),
            '-' => Some(Self::Moins),
            '*' => Some(Self::Fois),
            '/' => Some(Self::Divise),
            '^' => Some(Self::Puissance),
            _ => None,
        }
    }

    pub fn symbole(self) -> char {
        match self {
            Self::Plus => '+',
            Self::Moins => '-',
            Self::Fois => '*',
            Self::Divise => '/',
            Self::Puissance => '^',
        }
    }

    /// Application binaire (a op b). Division par zéro : convention IEEE.
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Self::Plus => a + b,
            Self::Moins => a - b,
            Self::Fois => a * b,
            Self::Divise => a / b,
            Self::Puissance => a.powf(b),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction {
    Sin,
    Cos,
    Tan,
    Log,
    Ln,
    Sqrt,
}

impl Fonction {
    /// Correspondance sensible à la casse (pas de "SIN").
    pub fn depuis_nom(nom: &str) -> Option<Self> {
        match nom {
            "sin" => Some(Self::Sin),
            "cos" => Some(Self::Cos),
            "tan" => Some(Self::Tan),
            "log" => Some(Self::Log),
            "ln" => Some(Self::Ln),
            "sqrt" => Some(Self::Sqrt),
            _ => None,
        }
    }

    pub fn nom(self) -> &'static str {
        match self {
            Self::Sin => "sin",
            Self::Cos => "cos",
            Self::Tan => "tan",
            Self::Log => "log",
            Self::Ln => "ln",
            Self::Sqrt => "sqrt",
        }
    }

    /// Angles en radians ; log = base 10.
    pub fn appliquer(self, x: f64) -> f64 {
        match self {
            Self::Sin => x.sin(),
            Self::Cos => x.cos(),
            Self::Tan => x.tan(),
            Self::Log => x.log10(),
            Self::Ln => x.ln(),
            Self::Sqrt => x.sqrt(),
        }
    }
}

impl fmt::Display for Operateur {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.symbole())
    }
}

impl fmt::Display for Fonction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.nom())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativite {
    Gauche,
    Droite,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Descripteur {
    pub precedence: u8,
    pub associativite: Associativite,
    pub arite: u8,
}

const ADDITIF: Descripteur = Descripteur {
    precedence: 1,
    associativite: Associativite::Gauche,
    arite: 2,
};

const MULTIPLICATIF: Descripteur = Descripteur {
    precedence: 2,
    associativite: Associativite::Gauche,
    arite: 2,
};

const PUISSANCE: Descripteur = Descripteur {
    precedence: 3,
    associativite: Associativite::Droite,
    arite: 2,
};

pub const MOINS_UNAIRE: Descripteur = Descripteur {
    precedence: 4,
    associativite: Associativite::Droite,
    arite: 1,
};

pub const FONCTION: Descripteur = Descripteur {
    precedence: 5,
    associativite: Associativite::Gauche,
    arite: 1,
};

impl Operateur {
    pub fn descripteur(self) -> Descripteur {
        match self {
            Self::Plus | Self::Moins => ADDITIF,
            Self::Fois | Self::Divise => MULTIPLICATIF,
            Self::Puissance => PUISSANCE,
        }
    }
}

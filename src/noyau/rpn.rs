// src/noyau/rpn.rs
//
// Shunting-yard -> RPN -> valeur
// Objectif:
// - Convertir une suite de Jeton en RPN (postfix)
// - Puis évaluer la RPN avec une pile de f64
//
// Règles:
// - Fonction : empilée, sortie seulement quand sa ')' est résolue
//   ("sin ( x )" devient "x sin")
// - Op / MoinsUnaire : on dépile tant que le sommet lie plus fort
//   (ou aussi fort si T est associatif à gauche)
// - ^ et moins unaire sont associatifs à droite : 2^3^2 = 2^(3^2)
// - ',' : dépile jusqu’à '(' (fonctions actuelles unaires : un segment de
//   trop passe ici mais échoue à l’évaluation)

use super::erreur::{ErreurEval, ErreurSyntaxe};
use super::jetons::Jeton;
use super::operateurs::{Associativite, Descripteur, FONCTION, MOINS_UNAIRE};

/// Descripteur d’un jeton “opérateur” (None pour nombres et ponctuation).
fn descripteur(t: &Jeton) -> Option<Descripteur> {
    match t {
        Jeton::Op(op) => Some(op.descripteur()),
        Jeton::MoinsUnaire => Some(MOINS_UNAIRE),
        Jeton::Fonction(_) => Some(FONCTION),
        _ => None,
    }
}

/// Dépile vers `out` tout ce qui lie plus fort que `d`.
fn depile_selon(d: Descripteur, ops: &mut Vec<Jeton>, out: &mut Vec<Jeton>) {
    while let Some(top) = ops.last() {
        // '(' bloque (descripteur None)
        let Some(d_top) = descripteur(top) else {
            break;
        };

        let doit_pop = d_top.precedence > d.precedence
            || (d_top.precedence == d.precedence && d.associativite == Associativite::Gauche);

        if !doit_pop {
            break;
        }
        if let Some(j) = ops.pop() {
            out.push(j);
        }
    }
}

/// Convertit une suite de jetons en RPN (notation polonaise inversée).
///
/// Exemple:
///   jetons: [Nombre("2"), Op(*), Fonction(sin), ParG, Nombre("0"), ParD]
///   rpn:    [Nombre("2"), Nombre("0"), Fonction(sin), Op(*)]
pub fn to_rpn(jetons: &[Jeton]) -> Result<Vec<Jeton>, ErreurSyntaxe> {
    if jetons.is_empty() {
        return Err(ErreurSyntaxe::ExpressionVide);
    }

    let mut out: Vec<Jeton> = Vec::with_capacity(jetons.len());
    let mut ops: Vec<Jeton> = Vec::new();

    // Vrai quand la grammaire attend un opérande (début, après op, '(' …).
    // Sert à refuser les opérateurs binaires mal placés.
    let mut attend_valeur = true;

    for (position, jeton) in jetons.iter().enumerate() {
        match jeton {
            Jeton::Nombre(_) => {
                out.push(jeton.clone());
                attend_valeur = false;
            }

            Jeton::Fonction(_) | Jeton::ParG => {
                ops.push(jeton.clone());
                attend_valeur = true;
            }

            Jeton::MoinsUnaire => {
                depile_selon(MOINS_UNAIRE, &mut ops, &mut out);
                ops.push(Jeton::MoinsUnaire);
                attend_valeur = true;
            }

            Jeton::Op(op) => {
                if attend_valeur {
                    return Err(ErreurSyntaxe::OperateurMalPlace { position });
                }
                depile_selon(op.descripteur(), &mut ops, &mut out);
                ops.push(jeton.clone());
                attend_valeur = true;
            }

            Jeton::Virgule => {
                loop {
                    match ops.last() {
                        Some(Jeton::ParG) => break,
                        Some(_) => {
                            if let Some(j) = ops.pop() {
                                out.push(j);
                            }
                        }
                        None => return Err(ErreurSyntaxe::VirguleHorsParentheses),
                    }
                }
                attend_valeur = true;
            }

            Jeton::ParD => {
                if attend_valeur {
                    return Err(ErreurSyntaxe::ExpressionIncomplete);
                }

                // dépile jusqu’à '('
                loop {
                    match ops.pop() {
                        Some(Jeton::ParG) => break,
                        Some(j) => out.push(j),
                        None => return Err(ErreurSyntaxe::ParentheseOrpheline),
                    }
                }

                // si une fonction est au sommet, elle prend cet argument
                if matches!(ops.last(), Some(Jeton::Fonction(_))) {
                    if let Some(f) = ops.pop() {
                        out.push(f);
                    }
                }

                attend_valeur = false;
            }
        }
    }

    if attend_valeur {
        return Err(ErreurSyntaxe::ExpressionIncomplete);
    }

    // vide la pile ops
    while let Some(op) = ops.pop() {
        if matches!(op, Jeton::ParG | Jeton::ParD) {
            return Err(ErreurSyntaxe::ParentheseOrpheline);
        }
        out.push(op);
    }

    Ok(out)
}

/// Évalue une RPN avec une pile de valeurs.
///
/// Les résultats non finis (÷0, √ négatif…) passent : le formateur les refuse.
pub fn eval_rpn(rpn: &[Jeton]) -> Result<f64, ErreurEval> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    let pile_vide = |j: &Jeton| ErreurEval::PileVide {
        jeton: j.to_string(),
    };

    for jeton in rpn {
        match jeton {
            Jeton::Nombre(txt) => {
                let v: f64 = txt
                    .parse()
                    .map_err(|_| ErreurEval::NombreInvalide(txt.clone()))?;
                st.push(v);
            }

            Jeton::MoinsUnaire => {
                let x = st.pop().ok_or_else(|| pile_vide(jeton))?;
                st.push(-x);
            }

            Jeton::Op(op) => {
                // droite d’abord : l’avant-dernier est l’opérande gauche
                let b = st.pop().ok_or_else(|| pile_vide(jeton))?;
                let a = st.pop().ok_or_else(|| pile_vide(jeton))?;
                st.push(op.appliquer(a, b));
            }

            Jeton::Fonction(f) => {
                let x = st.pop().ok_or_else(|| pile_vide(jeton))?;
                st.push(f.appliquer(x));
            }

            Jeton::ParG | Jeton::ParD | Jeton::Virgule => {
                return Err(ErreurEval::JetonInattendu(jeton.to_string()));
            }
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(ErreurEval::ExpressionMalformee {
            restants: st.len(),
        }),
    }
}

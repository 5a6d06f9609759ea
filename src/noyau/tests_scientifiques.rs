//! Tests scientifiques (campagne) : invariants + robustesse + limites contrôlées.
//!
//! But : vérifier le pipeline contre des valeurs calculées à la main, sans
//! faire chauffer la machine.
//! - budget temps global
//! - tailles bornées (profondeur, longueur)
//!
//! Notes (aligné avec l’état actuel du noyau) :
//! - Le calcul est en f64 ; les comparaisons passent par le texte canonique
//!   (10 décimales), jamais par l’égalité brute des flottants.
//! - tan(π/2) est fini en f64 (≈ 1.6e16) : pas d’erreur, juste un grand nombre.

use std::time::{Duration, Instant};

use super::erreur::ErreurCalc;
use super::eval_expression;

fn eval_ok(expr: &str) -> String {
    eval_expression(expr, 10)
        .unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
        .texte
}

fn assert_texte(expr: &str, attendu: &str) {
    assert_eq!(eval_ok(expr), attendu, "expr={expr:?}");
}

fn assert_erreur(expr: &str) -> ErreurCalc {
    match eval_expression(expr, 10) {
        Ok(ev) => panic!("attendu une erreur: expr={expr:?} texte={:?}", ev.texte),
        Err(e) => e,
    }
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Précédence / associativité ------------------------ */

#[test]
fn sci_precedence_contre_reference() {
    // (expression, valeur de référence calculée en Rust avec la même précédence)
    let cas: [(&str, f64); 8] = [
        ("1+2*3", 1.0 + 2.0 * 3.0),
        ("(1+2)*3", (1.0 + 2.0) * 3.0),
        ("10-4-3", (10.0 - 4.0) - 3.0),
        ("100/10/5", (100.0 / 10.0) / 5.0),
        ("2*3^2", 2.0 * 9.0),
        ("1+2*3-4/2", 1.0 + 6.0 - 2.0),
        ("(7-2)*(3+1)/4", 5.0 * 4.0 / 4.0),
        ("2^2^3", 256.0),
    ];

    for (expr, attendu) in cas {
        let ev = eval_expression(expr, 10).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"));
        assert_eq!(ev.valeur, attendu, "expr={expr:?}");
    }
}

#[test]
fn sci_moins_unaire_enchaine() {
    assert_texte("--2", "2");
    assert_texte("---2", "-2");
    assert_texte("3--2", "5");
    assert_texte("3*-2", "-6");
    assert_texte("-(-(-1))", "-1");
    assert_texte("2^-2", "0.25");
}

#[test]
fn sci_fonctions_imbriquees() {
    assert_texte("sqrt(sqrt(16))", "2");
    assert_texte("sin(0)+cos(0)", "1");
    assert_texte("log(sqrt(100))", "1");
    assert_texte("ln(e^2)", "2");
    assert_texte("tan(π/4)", "1");
    assert_texte("-sqrt(9)", "-3");
}

/* ------------------------ Texte canonique ------------------------ */

#[test]
fn sci_pas_de_notation_scientifique() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    for n in 1..=22u32 {
        budget(t0, max);

        let grand = eval_ok(&format!("10^{n}"));
        assert!(!grand.contains('e'), "10^{n} -> {grand}");
        assert_eq!(grand.len(), n as usize + 1, "10^{n} -> {grand}");

        let petit = eval_ok(&format!("1/10^{n}"));
        assert!(!petit.contains('e'), "1/10^{n} -> {petit}");
        if n > 10 {
            assert_eq!(petit, "0", "1/10^{n}");
        }
    }
}

#[test]
fn sci_au_plus_dix_decimales_sans_zero_de_queue() {
    for expr in ["1/7", "22/7", "sqrt(2)", "π", "0.5+0.25", "1/8", "100/3"] {
        let t = eval_ok(expr);
        if let Some((_, frac)) = t.split_once('.') {
            assert!(frac.len() <= 10, "expr={expr:?} -> {t}");
            assert!(!frac.ends_with('0'), "expr={expr:?} -> {t}");
        }
    }
    assert_texte("1/8", "0.125");
    assert_texte("22/7", "3.1428571429");
}

#[test]
fn sci_idempotence_du_resultat() {
    for expr in ["1/7", "-22/7", "sqrt(2)", "2^40", "0.1*3", "-0.5"] {
        let premier = eval_ok(expr);
        let second = eval_ok(&premier);
        assert_eq!(premier, second, "expr={expr:?}");
    }
}

/* ------------------------ Erreurs ------------------------ */

#[test]
fn sci_erreurs_classees_par_etape() {
    assert!(matches!(assert_erreur("2$3"), ErreurCalc::Lex(_)));
    assert!(matches!(assert_erreur("abc"), ErreurCalc::Lex(_)));
    assert!(matches!(assert_erreur("((1)"), ErreurCalc::Syntaxe(_)));
    assert!(matches!(assert_erreur("1*/2"), ErreurCalc::Syntaxe(_)));
    assert!(matches!(assert_erreur("."), ErreurCalc::Eval(_)));
    assert!(matches!(assert_erreur("0/0"), ErreurCalc::Format(_)));
    assert!(matches!(assert_erreur("10^400"), ErreurCalc::Format(_)));
}

/* ------------------------ Limites ------------------------ */

#[test]
fn sci_longue_somme_et_parentheses_profondes() {
    let t0 = Instant::now();
    let max = Duration::from_millis(250);

    let somme = vec!["1"; 2000].join("+");
    assert_texte(&somme, "2000");
    budget(t0, max);

    let profond = format!("{}1{}", "(".repeat(500), ")".repeat(500));
    assert_texte(&profond, "1");
    budget(t0, max);

    let moins = format!("{}5", "-".repeat(301));
    assert_texte(&moins, "-5");
    budget(t0, max);
}

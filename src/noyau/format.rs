// src/noyau/format.rs
//
// Affichage décimal canonique d’un f64 :
// - refus des valeurs non finies (NaN, ±∞)
// - arrondi half-up (demi loin de zéro) à `digits` décimales, en rationnel exact
// - zéros de queue retirés, point final retiré
// - jamais de notation scientifique
//
// On part du texte décimal le plus court qui relit le même f64 (Display de Rust,
// sans exposant) : 0.1 + 0.2 = 0.30000000000000004 -> "0.3".

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::Signed;

use super::erreur::ErreurFormat;

fn pow10(n: usize) -> BigInt {
    BigInt::from(10).pow(n as u32)
}

/// Convertit un entier “scalé” (×10^digits) en texte décimal (toutes décimales).
pub fn scaled_to_decimal(mut scaled: BigInt, digits: usize) -> String {
    let neg = scaled.is_negative();
    if neg {
        scaled = -scaled;
    }

    let scale = pow10(digits);
    let int_part = &scaled / &scale;
    let frac_part = &scaled % &scale;

    let signe = if neg { "-" } else { "" };

    if digits == 0 {
        return format!("{signe}{int_part}");
    }

    let mut frac = frac_part.to_str_radix(10);
    while frac.len() < digits {
        frac.insert(0, '0');
    }

    format!("{signe}{int_part}.{frac}")
}

/// Valeur décimale exacte du texte le plus court d’un f64 fini.
fn decimal_exact(v: f64) -> Result<BigRational, ErreurFormat> {
    let txt = v.abs().to_string();
    let (ent, frac) = txt.split_once('.').unwrap_or((txt.as_str(), ""));

    let chiffres = format!("{ent}{frac}");
    let n = BigInt::parse_bytes(chiffres.as_bytes(), 10)
        .ok_or_else(|| ErreurFormat::TexteIllisible(txt.clone()))?;

    let r = BigRational::new(n, pow10(frac.len()));
    Ok(if v.is_sign_negative() { -r } else { r })
}

/// r -> entier “scalé” = round_half_up(r * 10^digits)
fn rational_scaled(r: &BigRational, digits: usize) -> BigInt {
    let scale = BigRational::from_integer(pow10(digits));
    // BigRational::round : demi-cas loin de zéro
    (r * scale).round().to_integer()
}

/// Retire les zéros de queue et le point final ("2.5000" -> "2.5", "3.000" -> "3").
fn retire_zeros(txt: String) -> String {
    if !txt.contains('.') {
        return txt;
    }
    txt.trim_end_matches('0').trim_end_matches('.').to_string()
}

/// Un passage : f64 -> texte arrondi.
fn arrondi_texte(v: f64, digits: usize) -> Result<String, ErreurFormat> {
    let r = decimal_exact(v)?;
    let scaled = rational_scaled(&r, digits);

    // zéro scalé n’est jamais négatif : pas de "-0"
    Ok(retire_zeros(scaled_to_decimal(scaled, digits)))
}

/// API publique : f64 -> texte canonique à `digits` décimales au plus.
///
/// Le texte est un point fixe : le relire puis le reformater le redonne tel quel.
/// Vers 16 chiffres significatifs, le texte arrondi peut relire un f64 dont le
/// plus court texte diffère ; un second passage par ce f64 relu stabilise.
pub fn format_decimal(v: f64, digits: usize) -> Result<String, ErreurFormat> {
    if !v.is_finite() {
        return Err(ErreurFormat::NonFini(v));
    }

    let premier = arrondi_texte(v, digits)?;
    let relu: f64 = premier
        .parse()
        .map_err(|_| ErreurFormat::TexteIllisible(premier.clone()))?;

    arrondi_texte(relu, digits)
}

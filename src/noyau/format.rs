// src/noyau/format.rs
//
// Affichage d’un résultat f64 (écran de la calculatrice).
// Le texte produit pour une valeur finie se ré-évalue en la même valeur (arrondie).

const INDEFINI: &str = "indéfini";

/// Plage affichée en notation décimale ; en dehors : notation `e`.
const DECIMAL_MIN: f64 = 1e-9;
const DECIMAL_MAX: f64 = 1e15;

/// f64 n’a pas plus de 17 chiffres significatifs utiles.
pub const CHIFFRES_MAX: usize = 17;

/// Formate `v` avec au plus `chiffres` chiffres significatifs, sans zéros finaux.
///
/// - 0.1+0.2 (12 chiffres) -> "0.3"
/// - -0 -> "0"
/// - 1e20 -> "1e20", 1.5e-10 -> "1.5e-10"
/// - ±inf -> "∞" / "-∞", NaN -> "indéfini"
pub fn format_resultat(v: f64, chiffres: usize) -> String {
    if v.is_nan() {
        return INDEFINI.to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "∞" } else { "-∞" }.to_string();
    }

    let chiffres = chiffres.clamp(1, CHIFFRES_MAX);

    // arrondi aux chiffres significatifs via la notation scientifique
    let arrondi: f64 = format!("{:.*e}", chiffres - 1, v).parse().unwrap_or(v);
    if arrondi == 0.0 {
        return "0".to_string();
    }

    // `{}` / `{:e}` donnent la plus courte écriture qui relit la même valeur
    if (DECIMAL_MIN..DECIMAL_MAX).contains(&arrondi.abs()) {
        format!("{arrondi}")
    } else {
        format!("{arrondi:e}")
    }
}

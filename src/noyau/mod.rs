//! Noyau scientifique (f64)
//!
//! Organisation interne :
//! - erreur.rs    : taxonomie d’erreurs
//! - jetons.rs    : tokenisation + multiplications implicites
//! - rpn.rs       : shunting-yard (infixe -> postfixe)
//! - fonctions.rs : constantes, fonctions, factorielle
//! - trig.rs      : mode d’angle DEG/RAD
//! - eval.rs      : pipeline complet
//! - format.rs    : affichage du résultat

pub mod erreur;
pub mod eval;
pub mod fonctions;
pub mod format;
pub mod jetons;
pub mod rpn;
pub mod trig;

#[cfg(test)]
mod tests_scientifiques;

#[cfg(test)]
mod tests_fuzz_safe;

// API publique minimale
pub use erreur::Error;
pub use eval::{evaluate, evaluate_avec_demarche, evaluate_rpn, Demarche};
pub use format::format_resultat;
pub use jetons::{tokenize, Token};
pub use rpn::to_postfix;
pub use trig::AngleMode;

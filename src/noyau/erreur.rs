// src/noyau/erreur.rs
//
// Taxonomie d’erreurs du noyau.
// Toutes terminales : le noyau ne corrige rien, l’UI décide de l’affichage.

use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// Symbole hors de la table des jetons.
    #[error("caractère inattendu: '{0}'")]
    UnexpectedCharacter(char),

    #[error("parenthèses mal appariées")]
    MismatchedParens,

    #[error("virgule hors d’un appel de fonction")]
    CommaOutsideFunction,

    /// Pile vide au moment de dépiler un opérande.
    #[error("opérande manquant (arité)")]
    ArityError,

    /// Après évaluation, la pile ne contient pas exactement une valeur.
    #[error("expression invalide")]
    InvalidExpression,

    #[error("identifiant inconnu: '{0}'")]
    UnknownIdentifier(String),

    #[error("factorielle d’un nombre négatif")]
    NegativeFactorial,

    #[error("factorielle d’un nombre non entier")]
    NonIntegerFactorial,

    #[error("factorielle trop grande (n > 170)")]
    FactorialTooLarge,

    #[error("mode d’angle inconnu: '{0}' (attendu DEG ou RAD)")]
    UnknownAngleMode(String),
}

pub type Result<T> = std::result::Result<T, Error>;

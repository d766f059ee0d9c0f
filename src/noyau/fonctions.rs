// src/noyau/fonctions.rs
//
// Tables fixes (constantes + fonctions) et factorielle.
// Immuables, sans état : partagées telles quelles par tous les appels.

use std::f64::consts::{E, PI};

use super::erreur::{Error, Result};
use super::trig::AngleMode;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction1 {
    Sin,
    Cos,
    Tan,
    Asin,
    Acos,
    Atan,
    Ln,
    Log,
    Sqrt,
    Exp,
    Abs,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Fonction2 {
    Pow,
    Min,
    Max,
}

pub const CONSTANTES: &[(&str, f64)] = &[("pi", PI), ("e", E)];

pub const FONCTIONS_1: &[(&str, Fonction1)] = &[
    ("sin", Fonction1::Sin),
    ("cos", Fonction1::Cos),
    ("tan", Fonction1::Tan),
    ("asin", Fonction1::Asin),
    ("acos", Fonction1::Acos),
    ("atan", Fonction1::Atan),
    ("ln", Fonction1::Ln),
    ("log", Fonction1::Log),
    ("sqrt", Fonction1::Sqrt),
    ("exp", Fonction1::Exp),
    ("abs", Fonction1::Abs),
];

pub const FONCTIONS_2: &[(&str, Fonction2)] = &[
    ("pow", Fonction2::Pow),
    ("min", Fonction2::Min),
    ("max", Fonction2::Max),
];

/// Au-delà, f64 déborde vers l’infini.
const FACTORIELLE_MAX: f64 = 170.0;

fn chercher<T: Copy>(table: &[(&str, T)], name: &str) -> Option<T> {
    table.iter().find(|(n, _)| *n == name).map(|(_, v)| *v)
}

pub fn constante(name: &str) -> Option<f64> {
    chercher(CONSTANTES, name)
}

pub fn fonction_1(name: &str) -> Option<Fonction1> {
    chercher(FONCTIONS_1, name)
}

pub fn fonction_2(name: &str) -> Option<Fonction2> {
    chercher(FONCTIONS_2, name)
}

/// Identificateurs reconnus comme fonctions (1 ou 2 arguments).
pub fn est_fonction(name: &str) -> bool {
    fonction_1(name).is_some() || fonction_2(name).is_some()
}

impl Fonction1 {
    /// sin/cos/tan : argument converti vers radians ;
    /// asin/acos/atan : résultat (radians) reconverti vers le mode actif.
    pub fn appliquer(self, x: f64, mode: AngleMode) -> f64 {
        match self {
            Fonction1::Sin => mode.vers_radians(x).sin(),
            Fonction1::Cos => mode.vers_radians(x).cos(),
            Fonction1::Tan => mode.vers_radians(x).tan(),
            Fonction1::Asin => mode.depuis_radians(x.asin()),
            Fonction1::Acos => mode.depuis_radians(x.acos()),
            Fonction1::Atan => mode.depuis_radians(x.atan()),
            Fonction1::Ln => x.ln(),
            Fonction1::Log => x.log10(),
            Fonction1::Sqrt => x.sqrt(),
            Fonction1::Exp => x.exp(),
            Fonction1::Abs => x.abs(),
        }
    }
}

impl Fonction2 {
    pub fn appliquer(self, a: f64, b: f64) -> f64 {
        match self {
            Fonction2::Pow => a.powf(b),
            Fonction2::Min => a.min(b),
            Fonction2::Max => a.max(b),
        }
    }
}

/// n! pour n entier dans [0, 170].
pub fn factorial(n: f64) -> Result<f64> {
    if n < 0.0 {
        return Err(Error::NegativeFactorial);
    }
    if n.fract() != 0.0 {
        // NaN et infini tombent ici aussi (fract() n’est pas 0)
        return Err(Error::NonIntegerFactorial);
    }
    if n > FACTORIELLE_MAX {
        return Err(Error::FactorialTooLarge);
    }

    let mut acc = 1.0;
    let mut k = 2.0;
    while k <= n {
        acc *= k;
        k += 1.0;
    }
    Ok(acc)
}

//! Noyau — évaluation (pipeline réel)
//!
//! tokenize -> RPN (shunting-yard) -> pile de valeurs f64
//!
//! Fonction pure : aucune I/O, aucun état partagé. Appelable en parallèle sans coordination.

use log::debug;

use super::erreur::{Error, Result};
use super::fonctions::{constante, factorial, fonction_1, fonction_2};
use super::jetons::{format_tokens, tokenize, BinOp, Token};
use super::rpn::to_postfix;
use super::trig::AngleMode;

/// Trace lisible du pipeline (jetons + RPN), affichée par l’UI.
#[derive(Default, Clone, Debug, PartialEq, Eq)]
pub struct Demarche {
    pub jetons: String,
    pub rpn: String,
}

/// API publique : évalue une expression dans le mode d’angle donné.
pub fn evaluate(expression: &str, mode: AngleMode) -> Result<f64> {
    let jetons = tokenize(expression)?;
    debug!("jetons: {}", format_tokens(&jetons));

    let rpn = to_postfix(&jetons)?;
    debug!("rpn: {}", format_tokens(&rpn));

    evaluate_rpn(&rpn, mode)
}

/// Même pipeline que [`evaluate`], avec la démarche (jetons, RPN) en plus.
pub fn evaluate_avec_demarche(expression: &str, mode: AngleMode) -> Result<(f64, Demarche)> {
    let jetons = tokenize(expression)?;
    let rpn = to_postfix(&jetons)?;

    let d = Demarche {
        jetons: format_tokens(&jetons),
        rpn: format_tokens(&rpn),
    };
    debug!("démarche: {d:?}");

    let v = evaluate_rpn(&rpn, mode)?;
    Ok((v, d))
}

/// Évalue une suite postfixée déjà réordonnée.
pub fn evaluate_rpn(rpn: &[Token], mode: AngleMode) -> Result<f64> {
    let mut st: Vec<f64> = Vec::with_capacity(rpn.len());

    for tok in rpn {
        match tok {
            Token::Number(v) => st.push(*v),

            Token::BinaryOperator(op) => {
                let b = depiler(&mut st)?;
                let a = depiler(&mut st)?;
                st.push(appliquer_binaire(*op, a, b));
            }

            Token::UnaryMinus => {
                let a = depiler(&mut st)?;
                st.push(-a);
            }

            Token::Identifier(name) => {
                let v = appliquer_identifiant(name, &mut st, mode)?;
                st.push(v);
            }

            Token::Percent => {
                let a = depiler(&mut st)?;
                st.push(a / 100.0);
            }

            Token::Factorial => {
                let a = depiler(&mut st)?;
                st.push(factorial(a)?);
            }

            // ne doivent jamais survivre au réordonnancement
            Token::LeftParen | Token::RightParen => return Err(Error::MismatchedParens),
            Token::Comma => return Err(Error::CommaOutsideFunction),
        }
    }

    match st.as_slice() {
        [v] => Ok(*v),
        _ => Err(Error::InvalidExpression),
    }
}

fn depiler(st: &mut Vec<f64>) -> Result<f64> {
    st.pop().ok_or(Error::ArityError)
}

/// Division par zéro : sémantique IEEE (inf / NaN), pas d’erreur.
fn appliquer_binaire(op: BinOp, a: f64, b: f64) -> f64 {
    match op {
        BinOp::Add => a + b,
        BinOp::Subtract => a - b,
        BinOp::Multiply => a * b,
        BinOp::Divide => a / b,
        BinOp::Power => a.powf(b),
    }
}

/// Constante, fonction à 1 argument, ou fonction à 2 arguments (b dépilé avant a).
fn appliquer_identifiant(name: &str, st: &mut Vec<f64>, mode: AngleMode) -> Result<f64> {
    if let Some(v) = constante(name) {
        return Ok(v);
    }
    if let Some(f) = fonction_1(name) {
        let x = depiler(st)?;
        return Ok(f.appliquer(x, mode));
    }
    if let Some(f) = fonction_2(name) {
        let b = depiler(st)?;
        let a = depiler(st)?;
        return Ok(f.appliquer(a, b));
    }
    Err(Error::UnknownIdentifier(name.to_string()))
}

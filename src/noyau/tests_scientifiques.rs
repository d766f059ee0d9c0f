//! Tests scientifiques (campagne) : précédence, postfixés, constantes, trig, erreurs.
//!
//! Tolérances : π et e à 1e-12 ; trig à 1e-10.

use std::f64::consts::{E, PI};
use std::time::{Duration, Instant};

use super::erreur::Error;
use super::{evaluate, format_resultat, AngleMode};

fn init_logs() {
    let _ = env_logger::builder().is_test(true).try_init();
}

fn eval_ok(expr: &str, mode: AngleMode) -> f64 {
    init_logs();
    evaluate(expr, mode).unwrap_or_else(|e| panic!("expr={expr:?} err={e}"))
}

fn deg(expr: &str) -> f64 {
    eval_ok(expr, AngleMode::Degrees)
}

fn rad(expr: &str) -> f64 {
    eval_ok(expr, AngleMode::Radians)
}

fn assert_proche(obtenu: f64, attendu: f64, tol: f64, expr: &str) {
    assert!(
        (obtenu - attendu).abs() < tol,
        "expr={expr:?} obtenu={obtenu} attendu={attendu}"
    );
}

/// Budget global anti-gel.
fn budget(start: Instant, max: Duration) {
    if start.elapsed() > max {
        panic!("budget temps dépassé: {:?}", max);
    }
}

/* ------------------------ Précédence ------------------------ */

#[test]
fn sci_precedence() {
    assert_eq!(deg("2+3*4"), 14.0);
    assert_eq!(deg("(2+3)*4"), 20.0);
    assert_eq!(deg("2^8"), 256.0);
    assert_eq!(deg("2^3^2"), 512.0);
    assert_eq!(deg("100/10/5"), 2.0);
    assert_eq!(deg("10-4-3"), 3.0);
}

#[test]
fn sci_moins_unaire() {
    assert_eq!(deg("-3+5"), 2.0);
    assert_eq!(deg("2*-3"), -6.0);
    assert_eq!(deg("2^-1"), 0.5);
    assert_eq!(deg("-(2+3)"), -5.0);
    assert_eq!(deg("max(-1,-2)"), -1.0);
    // le moins unaire lie plus fort que ^
    assert_eq!(deg("-2^2"), 4.0);
}

/* ------------------------ Postfixés ------------------------ */

#[test]
fn sci_postfixes() {
    assert_eq!(deg("50%"), 0.5);
    assert_eq!(deg("5!"), 120.0);
    assert_eq!(deg("0!"), 1.0);
    assert_eq!(deg("3!!"), 720.0);
    assert_eq!(deg("(2+1)!"), 6.0);
    assert_eq!(deg("200*10%"), 20.0);
}

#[test]
fn sci_factorielle_domaine() {
    let d = AngleMode::Degrees;
    assert_eq!(evaluate("-1!", d), Err(Error::NegativeFactorial));
    assert_eq!(evaluate("2.5!", d), Err(Error::NonIntegerFactorial));
    assert_eq!(evaluate("171!", d), Err(Error::FactorialTooLarge));
    assert!(deg("170!").is_finite());
}

/* ------------------------ Constantes ------------------------ */

#[test]
fn sci_constantes() {
    assert_proche(deg("pi"), PI, 1e-12, "pi");
    assert_proche(deg("e"), E, 1e-12, "e");
    assert_proche(deg("2pi"), 2.0 * PI, 1e-12, "2pi");
    assert_proche(deg("π"), PI, 1e-12, "π");
}

/* ------------------------ Trig + mode d’angle ------------------------ */

#[test]
fn sci_trig_modes() {
    assert_proche(deg("sin(30)"), 0.5, 1e-10, "sin(30) DEG");
    assert_proche(rad("sin(pi/2)"), 1.0, 1e-10, "sin(pi/2) RAD");
    assert_proche(deg("cos(60)"), 0.5, 1e-10, "cos(60) DEG");
    assert_proche(deg("tan(45)"), 1.0, 1e-10, "tan(45) DEG");
    assert_proche(rad("cos(pi)"), -1.0, 1e-10, "cos(pi) RAD");
}

#[test]
fn sci_trig_inverses() {
    assert_proche(deg("asin(0.5)"), 30.0, 1e-10, "asin DEG");
    assert_proche(deg("acos(0)"), 90.0, 1e-10, "acos DEG");
    assert_proche(rad("atan(1)"), PI / 4.0, 1e-12, "atan RAD");
}

#[test]
fn sci_mode_parse() {
    let m: AngleMode = "RAD".parse().unwrap();
    assert_proche(eval_ok("sin(pi/6)", m), 0.5, 1e-10, "RAD parsé");
}

/* ------------------------ Multiplication implicite ------------------------ */

#[test]
fn sci_multiplication_implicite() {
    assert_eq!(deg("2(3)"), 6.0);
    assert_eq!(deg("(1+1)(2+2)"), 8.0);
    assert_proche(deg("pi sin(90)"), PI, 1e-12, "pi sin(90)");
    assert_proche(deg("e pi"), E * PI, 1e-12, "e pi");
    assert_eq!(deg("2sqrt(9)"), 6.0);
    assert_proche(deg("5!pi"), 120.0 * PI, 1e-9, "5!pi");
}

/* ------------------------ Entrées malformées ------------------------ */

#[test]
fn sci_fonction_sans_parentheses_refusee() {
    init_logs();
    let d = AngleMode::Degrees;
    for expr in ["sin30", "sin pi", "sqrt 4", "sin cos(0)", "sin 30!"] {
        assert_eq!(evaluate(expr, d), Err(Error::ArityError), "expr={expr:?}");
    }
}

#[test]
fn sci_malformees() {
    init_logs();
    let d = AngleMode::Degrees;
    assert_eq!(evaluate(")", d), Err(Error::MismatchedParens));
    assert_eq!(evaluate("(-)", d), Err(Error::ArityError));
    assert_eq!(evaluate("1,2", d), Err(Error::CommaOutsideFunction));
    assert_eq!(evaluate("", d), Err(Error::InvalidExpression));
    // pas de multiplication implicite avant un nombre (sauf après un identifiant)
    assert_eq!(evaluate("3!2", d), Err(Error::InvalidExpression));
    assert_eq!(evaluate("1 $", d), Err(Error::UnexpectedCharacter('$')));
    assert_eq!(
        evaluate("bogus(2)", d),
        Err(Error::UnknownIdentifier("bogus".into()))
    );
}

/* ------------------------ Aller-retour ------------------------ */

#[test]
fn sci_aller_retour_resultat() {
    for expr in ["2^8", "1/3", "-7.25", "2^70", "1/3^30", "sqrt(2)"] {
        let v = deg(expr);
        let texte = format_resultat(v, 17);
        assert_eq!(deg(&texte), v, "expr={expr:?} texte={texte:?}");
    }
    assert_eq!(deg("256"), 256.0);
}

/* ------------------------ Stress contrôlé ------------------------ */

#[test]
fn sci_stress_profondeur_parentheses() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    // pas de récursion : la profondeur ne coûte que de la pile Vec
    let n = 5_000;
    let expr = format!("{}1{}", "(".repeat(n), ")".repeat(n));
    assert_eq!(deg(&expr), 1.0);
    budget(t0, max);
}

#[test]
fn sci_stress_longue_somme() {
    let t0 = Instant::now();
    let max = Duration::from_millis(500);

    let expr = vec!["0.5"; 2_000].join("+");
    assert_eq!(deg(&expr), 1000.0);
    budget(t0, max);
}

//! Tests fuzz safe : robustesse + déterminisme + aller-retour.
//!
//! - entrées arbitraires : jamais de panique, seulement Ok ou Err typé
//! - expressions générées (profondeur bornée) : résultat identique bit à bit d’un appel à l’autre
//! - un résultat fini, formaté puis relu, redonne la même valeur

use proptest::prelude::*;

use super::{evaluate, format_resultat, tokenize, to_postfix, AngleMode};

fn mode() -> impl Strategy<Value = AngleMode> {
    prop_oneof![Just(AngleMode::Degrees), Just(AngleMode::Radians)]
}

fn atome() -> impl Strategy<Value = String> {
    prop_oneof![
        (0u32..1000).prop_map(|n| n.to_string()),
        (0u32..100, 1u32..100).prop_map(|(a, b)| format!("{a}.{b}")),
        Just("pi".to_string()),
        Just("e".to_string()),
    ]
}

/// Expressions bien parenthésées, avec fonctions et postfixés.
fn expression() -> impl Strategy<Value = String> {
    atome().prop_recursive(4, 32, 3, |inner| {
        prop_oneof![
            (inner.clone(), "[-+*/^]", inner.clone()).prop_map(|(a, op, b)| format!("{a}{op}{b}")),
            inner.clone().prop_map(|a| format!("-({a})")),
            inner.clone().prop_map(|a| format!("({a})%")),
            (
                prop::sample::select(vec!["sin", "cos", "tan", "sqrt", "abs", "ln", "exp"]),
                inner.clone()
            )
                .prop_map(|(f, a)| format!("{f}({a})")),
            (
                prop::sample::select(vec!["pow", "min", "max"]),
                inner.clone(),
                inner
            )
                .prop_map(|(f, a, b)| format!("{f}({a},{b})")),
        ]
    })
}

proptest! {
    #[test]
    fn fuzz_jamais_de_panique(s in "[0-9a-z+\\-*/^().,%! ×÷π√]{0,40}", m in mode()) {
        let _ = evaluate(&s, m);
    }

    #[test]
    fn fuzz_unicode_arbitraire(s in "\\PC{0,30}") {
        let _ = evaluate(&s, AngleMode::Degrees);
    }

    #[test]
    fn fuzz_deterministe(expr in expression(), m in mode()) {
        let a = evaluate(&expr, m);
        let b = evaluate(&expr, m);
        match (a, b) {
            (Ok(x), Ok(y)) => prop_assert_eq!(x.to_bits(), y.to_bits()),
            (a, b) => prop_assert_eq!(a, b),
        }
    }

    #[test]
    fn fuzz_expressions_generees_valides(expr in expression(), m in mode()) {
        // structure toujours correcte : aucune erreur de parenthèses / arité
        let jetons = tokenize(&expr).unwrap();
        let rpn = to_postfix(&jetons).unwrap();
        prop_assert!(rpn.len() <= jetons.len());
        prop_assert!(evaluate(&expr, m).is_ok(), "expr={}", expr);
    }

    #[test]
    fn fuzz_aller_retour(expr in expression()) {
        if let Ok(v) = evaluate(&expr, AngleMode::Radians) {
            if v.is_finite() {
                let texte = format_resultat(v, 17);
                prop_assert_eq!(evaluate(&texte, AngleMode::Radians), Ok(v), "texte={}", texte);
            }
        }
    }
}

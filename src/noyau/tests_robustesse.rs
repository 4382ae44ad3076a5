//! Tests robustesse : cohérence validation -> jetons -> arbre.
//!
//! Invariant clé : une saisie VALIDÉE se construit toujours
//! (jamais d’opérandes insuffisants, de parenthèse orpheline ni d’opérandes en trop).
//! Seule erreur admise à l’évaluation : la division par zéro.

use proptest::prelude::*;

use super::construction::{build_tree, build_tree_with};
use super::erreurs::{CalcError, Erreur, ValidationError};
use super::eval::{analyse_expression, evaluate};
use super::jetons::tokenize;
use super::limites::Limites;
use super::validation::validate;

fn valeur(expr: &str) -> f64 {
    match analyse_expression(expr, &Limites::default()) {
        Ok(a) => a.valeur,
        Err(e) => panic!("expr={expr:?} err={e}"),
    }
}

/* ------------------------ Espaces ------------------------ */

#[test]
fn espaces_recolles_avec_operateur() {
    assert_eq!(valeur("12 + 3 4"), 46.0);
    assert_eq!(valeur("1 0 * 2"), 20.0);
    assert_eq!(tokenize("12 + 3 4"), tokenize("12+34"));
}

/* ------------------------ Cas limites du moins unaire ------------------------ */

#[test]
fn moins_apres_operateur() {
    assert_eq!(valeur("2--3"), 5.0);
    assert_eq!(valeur("2+-3"), -1.0);
    assert_eq!(valeur("2*-3"), -6.0);
    assert_eq!(valeur("2/-4"), -0.5);
    assert_eq!(valeur("2^-1"), 0.5);
    assert_eq!(valeur("2---3"), -1.0);
}

#[test]
fn moins_en_tete_et_apres_parenthese() {
    assert_eq!(valeur("-(-3)+1"), 4.0);
    assert_eq!(valeur("(-3)*2"), -6.0);
    assert_eq!(valeur("--3+1"), 4.0);
    assert_eq!(valeur("(-(2+3))*2"), -10.0);
}

#[test]
fn nombre_seul_parenthese_negatif() {
    assert_eq!(
        analyse_expression("(-3)", &Limites::default()).unwrap_err(),
        Erreur::Validation(ValidationError::BareNumber)
    );
}

#[test]
fn rejets_du_catalogue() {
    let cas = [
        ("5", ValidationError::BareNumber),
        ("", ValidationError::EmptyExpression),
        ("2 3", ValidationError::MissingOperator),
        ("2++3", ValidationError::ConsecutiveOperators),
        ("(2+3", ValidationError::UnbalancedParentheses),
        ("()", ValidationError::EmptyParentheses),
        ("2*", ValidationError::TrailingOperator),
    ];
    for (expr, attendu) in cas {
        assert_eq!(validate(expr), Err(attendu), "expr={expr:?}");
    }
}

#[test]
fn espaces_insignifiants() {
    assert_eq!(valeur(" 2 +   3 * 4 "), valeur("2+3*4"));
    assert_eq!(valeur("2 ^ 3 ^ 2"), 512.0);
}

#[test]
fn grands_entiers() {
    // au-delà de i64 : lecture sans borne, évaluation en f64
    let v = valeur("100000000000000000000*10");
    assert_eq!(v, 1e21);
}

#[test]
fn imbrication_profonde_refusee() {
    let expr = format!("{}1{}", "(1+".repeat(250), ")".repeat(250));
    assert!(validate(&expr).is_ok());
    assert_eq!(
        analyse_expression(&expr, &Limites::default()).unwrap_err(),
        Erreur::Calcul(CalcError::NestingTooDeep { limit: 200 })
    );

    let jetons = tokenize(&expr);
    let arbre = build_tree_with(&jetons, &Limites::avec_profondeur(300))
        .unwrap()
        .unwrap();
    assert_eq!(arbre.height(), 251);
    assert_eq!(evaluate(&arbre), Ok(251.0));
}

/* ------------------------ Campagne aléatoire ------------------------ */

proptest! {
    #[test]
    fn saisie_validee_toujours_construite(expr in "[0-9+*/^() -]{1,14}") {
        if validate(&expr).is_ok() {
            let arbre = build_tree(&tokenize(&expr));
            let arbre = match arbre {
                Ok(Some(a)) => a,
                autre => return Err(TestCaseError::fail(format!("{expr:?} -> {autre:?}"))),
            };

            match evaluate(&arbre) {
                Ok(_) | Err(CalcError::DivisionByZero) => {}
                Err(e) => return Err(TestCaseError::fail(format!("{expr:?} -> {e}"))),
            }
        }
    }

    #[test]
    fn validation_sans_panique(expr in "\\PC{0,20}") {
        let _ = validate(&expr);
        let _ = tokenize(&expr);
    }
}

//! Tests de propriétés : arbres aléatoires (proptest).
//!
//! Invariants vérifiés :
//! - l’infixe relu redonne EXACTEMENT le même arbre (donc la même valeur)
//! - préfixe / postfixe : un mot par noeud
//! - évaluation déterministe
//! - dessin : lignes de même largeur, hauteur = 1 par feuille + 2 par opérateur

use proptest::prelude::*;

use super::arbre::{Node, OperatorKind};
use super::construction::build_tree;
use super::eval::evaluate;
use super::format::{to_infix, to_postfix, to_prefix};
use super::jetons::tokenize;
use super::validation::validate;
use super::visualisation::visualize;

fn op_binaire() -> impl Strategy<Value = OperatorKind> {
    prop_oneof![
        Just(OperatorKind::Add),
        Just(OperatorKind::Sub),
        Just(OperatorKind::Mul),
        Just(OperatorKind::Div),
        Just(OperatorKind::Pow),
    ]
}

fn arbre_aleatoire() -> impl Strategy<Value = Node> {
    let feuille = (0u32..200).prop_map(Node::number);
    feuille.prop_recursive(6, 48, 2, |inner| {
        prop_oneof![
            1 => inner.clone().prop_map(Node::neg),
            4 => (op_binaire(), inner.clone(), inner)
                .prop_map(|(op, g, d)| Node::binary(op, g, d)),
        ]
    })
}

fn nb_noeuds(n: &Node) -> usize {
    match n {
        Node::Number(_) => 1,
        Node::Unary { operand, .. } => 1 + nb_noeuds(operand),
        Node::Binary { left, right, .. } => 1 + nb_noeuds(left) + nb_noeuds(right),
    }
}

fn lignes_attendues(n: &Node) -> usize {
    match n {
        Node::Number(_) => 1,
        Node::Unary { operand, .. } => 2 + lignes_attendues(operand),
        Node::Binary { left, right, .. } => {
            2 + lignes_attendues(left).max(lignes_attendues(right))
        }
    }
}

/// Résultat comparable bit à bit (NaN compris).
fn bits(r: Result<f64, super::erreurs::CalcError>) -> Result<u64, super::erreurs::CalcError> {
    r.map(f64::to_bits)
}

proptest! {
    #[test]
    fn infixe_relu_meme_arbre(t in arbre_aleatoire()) {
        let infixe = to_infix(&t);
        let relu = build_tree(&tokenize(&infixe));
        prop_assert_eq!(relu, Ok(Some(t.clone())), "infixe = {}", infixe);
    }

    #[test]
    fn infixe_valide_si_racine_binaire(t in arbre_aleatoire()) {
        if matches!(t, Node::Binary { .. }) {
            let infixe = to_infix(&t);
            prop_assert!(validate(&infixe).is_ok(), "infixe rejetée : {}", infixe);
        }
    }

    #[test]
    fn un_mot_par_noeud(t in arbre_aleatoire()) {
        let n = nb_noeuds(&t);
        prop_assert_eq!(to_prefix(&t).split(' ').count(), n);
        prop_assert_eq!(to_postfix(&t).split(' ').count(), n);
    }

    #[test]
    fn evaluation_deterministe(t in arbre_aleatoire()) {
        prop_assert_eq!(bits(evaluate(&t)), bits(evaluate(&t)));
    }

    #[test]
    fn dessin_rectangulaire(t in arbre_aleatoire()) {
        let lignes = visualize(&t);
        prop_assert_eq!(lignes.len(), lignes_attendues(&t));

        let largeur = lignes[0].chars().count();
        prop_assert!(lignes.iter().all(|l| l.chars().count() == largeur));
    }
}

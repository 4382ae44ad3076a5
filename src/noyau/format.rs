// src/noyau/format.rs

use num_rational::BigRational;
use num_traits::One;

use super::arbre::{Associativity, Node, OperatorKind};

/* ------------------------ Helpers rationnels ------------------------ */

/// `n` si entier, sinon `n/d`.
pub fn format_rationnel(r: &BigRational) -> String {
    let n = r.numer();
    let d = r.denom();
    if d.is_one() {
        format!("{n}")
    } else {
        format!("{n}/{d}")
    }
}

/* ------------------------ Préfixe / postfixe ------------------------ */

/// `<op> <gauche> <droite>` ; unaire : `- <enfant>`.
pub fn to_prefix(node: &Node) -> String {
    match node {
        Node::Number(n) => n.to_string(),
        Node::Unary { op, operand } => format!("{} {}", op.symbol(), to_prefix(operand)),
        Node::Binary { op, left, right } => {
            format!("{} {} {}", op.symbol(), to_prefix(left), to_prefix(right))
        }
    }
}

/// `<gauche> <droite> <op>` ; unaire : `<enfant> -`.
pub fn to_postfix(node: &Node) -> String {
    match node {
        Node::Number(n) => n.to_string(),
        Node::Unary { op, operand } => format!("{} {}", to_postfix(operand), op.symbol()),
        Node::Binary { op, left, right } => {
            format!("{} {} {}", to_postfix(left), to_postfix(right), op.symbol())
        }
    }
}

/* ------------------------ Infixe ------------------------ */

#[derive(Clone, Copy, PartialEq, Eq)]
enum Cote {
    Gauche,
    Droite,
}

/// L’enfant `enfant` de `parent` (côté `cote`) doit-il être entre parenthèses ?
/// - feuille / unaire : jamais (l’unaire porte déjà ses parenthèses)
/// - précédence plus faible que le parent : toujours
/// - droite de `^` : dès que précédence >= celle de `^`
/// - précédence égale : côté opposé à l’associativité du parent
fn parentheses_requises(parent: OperatorKind, enfant: &Node, cote: Cote) -> bool {
    let op = match enfant {
        Node::Binary { op, .. } => *op,
        Node::Number(_) | Node::Unary { .. } => return false,
    };

    let p_parent = parent.precedence();
    let p_enfant = op.precedence();

    if p_enfant < p_parent {
        return true;
    }

    if parent == OperatorKind::Pow && cote == Cote::Droite {
        return p_enfant >= p_parent;
    }

    p_enfant == p_parent
        && match parent.associativity() {
            Associativity::Left => cote == Cote::Droite,
            Associativity::Right => cote == Cote::Gauche,
        }
}

fn infixe_enfant(parent: OperatorKind, enfant: &Node, cote: Cote) -> String {
    let s = to_infix(enfant);
    if parentheses_requises(parent, enfant, cote) {
        format!("({s})")
    } else {
        s
    }
}

/// Forme infixe non ambiguë : relue par le même analyseur, elle redonne la même valeur.
/// Le moins unaire s’écrit `(-x)`.
pub fn to_infix(node: &Node) -> String {
    match node {
        Node::Number(n) => n.to_string(),

        Node::Unary { operand, .. } => match operand.as_ref() {
            Node::Binary { .. } => format!("(-({}))", to_infix(operand)),
            _ => format!("(-{})", to_infix(operand)),
        },

        Node::Binary { op, left, right } => format!(
            "{} {} {}",
            infixe_enfant(*op, left, Cote::Gauche),
            op.symbol(),
            infixe_enfant(*op, right, Cote::Droite)
        ),
    }
}

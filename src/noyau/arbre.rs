// src/noyau/arbre.rs
//
// Arbre d’expression (propriétaire unique, sans cycles).
// - Number : littéral entier (BigInt, pas de borne à la lecture)
// - Unary  : moins unaire (un seul enfant)
// - Binary : + - * / ^ (deux enfants)
//
// IMPORTANT :
// - L’arbre est immuable une fois construit (construction.rs).
// - Pas de convention “gauche absente = unaire” : deux variantes explicites.

use num_bigint::BigInt;

/// Associativité d’un opérateur (départage à précédence égale).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Associativity {
    Left,
    Right,
}

/// Ensemble FERMÉ des opérateurs supportés.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum OperatorKind {
    Add,
    Sub,
    Mul,
    Div,
    Pow,
    /// Moins unaire (préfixe).
    Neg,
}

impl OperatorKind {
    /// Classe de précédence : `+ -` (1) < `* /` (2) < `^` (3) < moins unaire (4).
    pub fn precedence(self) -> u8 {
        match self {
            OperatorKind::Add | OperatorKind::Sub => 1,
            OperatorKind::Mul | OperatorKind::Div => 2,
            OperatorKind::Pow => 3,
            OperatorKind::Neg => 4,
        }
    }

    /// `^` associe à droite. Le moins unaire est préfixe : on le traite à droite
    /// pour que `--3` ne réduise jamais un `-` encore sans opérande.
    pub fn associativity(self) -> Associativity {
        match self {
            OperatorKind::Pow | OperatorKind::Neg => Associativity::Right,
            _ => Associativity::Left,
        }
    }

    pub fn is_unary(self) -> bool {
        matches!(self, OperatorKind::Neg)
    }

    /// Symbole affiché (le moins unaire s’affiche `-`).
    pub fn symbol(self) -> char {
        match self {
            OperatorKind::Add => '+',
            OperatorKind::Sub | OperatorKind::Neg => '-',
            OperatorKind::Mul => '*',
            OperatorKind::Div => '/',
            OperatorKind::Pow => '^',
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Node {
    Number(BigInt),
    Unary {
        op: OperatorKind,
        operand: Box<Node>,
    },
    Binary {
        op: OperatorKind,
        left: Box<Node>,
        right: Box<Node>,
    },
}

impl Node {
    pub fn number(n: impl Into<BigInt>) -> Node {
        Node::Number(n.into())
    }

    pub fn neg(operand: Node) -> Node {
        Node::Unary {
            op: OperatorKind::Neg,
            operand: Box::new(operand),
        }
    }

    pub fn binary(op: OperatorKind, left: Node, right: Node) -> Node {
        Node::Binary {
            op,
            left: Box::new(left),
            right: Box::new(right),
        }
    }

    /// Hauteur (feuille = 1). Itératif : pas de récursion sur un arbre inconnu.
    pub fn height(&self) -> usize {
        let mut pile: Vec<(&Node, usize)> = vec![(self, 1)];
        let mut max = 0;

        while let Some((n, h)) = pile.pop() {
            max = max.max(h);
            match n {
                Node::Number(_) => {}
                Node::Unary { operand, .. } => pile.push((operand, h + 1)),
                Node::Binary { left, right, .. } => {
                    pile.push((left, h + 1));
                    pile.push((right, h + 1));
                }
            }
        }

        max
    }
}

// src/noyau/construction.rs
//
// Shunting-yard -> arbre (directement, sans passer par une RPN texte)
// Deux piles explicites :
// - pile des valeurs     : noeuds déjà construits (+ leur hauteur)
// - pile des opérateurs  : jetons opérateurs et '('
//
// Règles:
// - Num        : on empile une feuille
// - '('        : sur la pile des opérateurs
// - ')'        : on réduit jusqu’à '(' puis on la jette
// - opérateur  : on réduit tant que le sommet lie plus fort
//                (précédence > , ou == et opérateur courant associatif à gauche)
// - fin        : on réduit tout ce qui reste
//
// “Réduire” = dépiler un opérateur + ses opérandes, construire le noeud, le rempiler.

use super::arbre::{Associativity, Node, OperatorKind};
use super::erreurs::CalcError;
use super::jetons::Tok;
use super::limites::Limites;

/// Opérateur porté par un jeton. Erreur si le jeton n’est pas un opérateur
/// (seul un défaut du constructeur peut y mener).
fn operateur(tok: &Tok) -> Result<OperatorKind, CalcError> {
    match tok {
        Tok::Plus => Ok(OperatorKind::Add),
        Tok::Minus => Ok(OperatorKind::Sub),
        Tok::Star => Ok(OperatorKind::Mul),
        Tok::Slash => Ok(OperatorKind::Div),
        Tok::Caret => Ok(OperatorKind::Pow),
        Tok::UnaryMinus => Ok(OperatorKind::Neg),
        Tok::Num(_) | Tok::LPar | Tok::RPar => {
            Err(CalcError::UnknownOperator(format!("{tok:?}")))
        }
    }
}

struct Piles {
    valeurs: Vec<(Node, usize)>,
    ops: Vec<Tok>,
    limite: usize,
}

impl Piles {
    fn empile_valeur(&mut self, node: Node, hauteur: usize) -> Result<(), CalcError> {
        if hauteur > self.limite {
            return Err(CalcError::NestingTooDeep { limit: self.limite });
        }
        self.valeurs.push((node, hauteur));
        Ok(())
    }

    /// Dépile un opérateur et l’applique à la pile des valeurs.
    fn reduit(&mut self) -> Result<(), CalcError> {
        let Some(tok) = self.ops.pop() else {
            return Ok(());
        };

        if matches!(tok, Tok::LPar) {
            return Err(CalcError::UnmatchedParenthesis);
        }

        let op = operateur(&tok)?;

        if op.is_unary() {
            let (operand, h) = self
                .valeurs
                .pop()
                .ok_or(CalcError::InsufficientOperands { op: op.symbol() })?;
            log::trace!("réduction {op:?} (unaire)");
            return self.empile_valeur(Node::neg(operand), h + 1);
        }

        let manque = CalcError::InsufficientOperands { op: op.symbol() };
        if self.valeurs.len() < 2 {
            return Err(manque);
        }
        // premier dépilé = enfant droit
        let (right, hd) = self.valeurs.pop().ok_or_else(|| manque.clone())?;
        let (left, hg) = self.valeurs.pop().ok_or(manque)?;

        log::trace!("réduction {op:?} (binaire)");
        self.empile_valeur(Node::binary(op, left, right), hg.max(hd) + 1)
    }

    /// Le sommet de pile doit-il être réduit avant d’empiler `op` ?
    fn sommet_lie_plus_fort(&self, op: OperatorKind) -> Result<bool, CalcError> {
        let Some(top) = self.ops.last() else {
            return Ok(false);
        };
        if matches!(top, Tok::LPar) {
            return Ok(false);
        }

        let p_top = operateur(top)?.precedence();
        let p_op = op.precedence();

        Ok(p_top > p_op || (p_top == p_op && op.associativity() == Associativity::Left))
    }
}

/// Construit l’arbre avec les limites par défaut.
/// `Ok(None)` : aucun jeton (arbre “vide”).
pub fn build_tree(tokens: &[Tok]) -> Result<Option<Node>, CalcError> {
    build_tree_with(tokens, &Limites::default())
}

/// Construit l’arbre ; la hauteur de chaque noeud est bornée par `limites`.
pub fn build_tree_with(tokens: &[Tok], limites: &Limites) -> Result<Option<Node>, CalcError> {
    if tokens.is_empty() {
        return Ok(None);
    }

    let mut piles = Piles {
        valeurs: Vec::new(),
        ops: Vec::new(),
        limite: limites.profondeur_max,
    };

    for tok in tokens {
        match tok {
            Tok::Num(n) => piles.empile_valeur(Node::Number(n.clone()), 1)?,

            Tok::LPar => piles.ops.push(Tok::LPar),

            Tok::RPar => loop {
                match piles.ops.last() {
                    Some(Tok::LPar) => {
                        piles.ops.pop();
                        break;
                    }
                    Some(_) => piles.reduit()?,
                    None => return Err(CalcError::UnmatchedParenthesis),
                }
            },

            _ => {
                let op = operateur(tok)?;
                while piles.sommet_lie_plus_fort(op)? {
                    piles.reduit()?;
                }
                piles.ops.push(tok.clone());
            }
        }
    }

    while !piles.ops.is_empty() {
        piles.reduit()?;
    }

    match piles.valeurs.len() {
        0 => Ok(None),
        1 => Ok(piles.valeurs.pop().map(|(n, _)| n)),
        n => Err(CalcError::DanglingOperands(n)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::jetons::tokenize;
    use pretty_assertions::assert_eq;

    use OperatorKind::*;

    fn arbre(s: &str) -> Node {
        build_tree(&tokenize(s))
            .unwrap_or_else(|e| panic!("build_tree({s:?}) erreur: {e}"))
            .unwrap_or_else(|| panic!("build_tree({s:?}) vide"))
    }

    fn n(v: i64) -> Node {
        Node::number(v)
    }

    #[test]
    fn precedence() {
        assert_eq!(arbre("2+3*4"), Node::binary(Add, n(2), Node::binary(Mul, n(3), n(4))));
    }

    #[test]
    fn associativite_gauche() {
        assert_eq!(arbre("8-3-2"), Node::binary(Sub, Node::binary(Sub, n(8), n(3)), n(2)));
        assert_eq!(arbre("8/4/2"), Node::binary(Div, Node::binary(Div, n(8), n(4)), n(2)));
    }

    #[test]
    fn associativite_droite_puissance() {
        assert_eq!(arbre("2^3^2"), Node::binary(Pow, n(2), Node::binary(Pow, n(3), n(2))));
    }

    #[test]
    fn parentheses() {
        assert_eq!(arbre("(2+3)*4"), Node::binary(Mul, Node::binary(Add, n(2), n(3)), n(4)));
        assert_eq!(arbre("((7))"), n(7));
    }

    #[test]
    fn moins_unaire() {
        assert_eq!(arbre("-2+3"), Node::binary(Add, Node::neg(n(2)), n(3)));
        assert_eq!(arbre("3*-2"), Node::binary(Mul, n(3), Node::neg(n(2))));
        assert_eq!(arbre("-(2+3)"), Node::neg(Node::binary(Add, n(2), n(3))));
        // le moins unaire lie plus fort que ^
        assert_eq!(arbre("-2^2"), Node::binary(Pow, Node::neg(n(2)), n(2)));
        assert_eq!(arbre("2^-3"), Node::binary(Pow, n(2), Node::neg(n(3))));
    }

    #[test]
    fn moins_unaires_enchaines() {
        assert_eq!(arbre("--3"), Node::neg(Node::neg(n(3))));
        assert_eq!(arbre("2---3"), Node::binary(Sub, n(2), Node::neg(Node::neg(n(3)))));
    }

    #[test]
    fn vide() {
        assert_eq!(build_tree(&[]), Ok(None));
    }

    #[test]
    fn jetons_incoherents() {
        assert_eq!(
            build_tree(&tokenize("2+")),
            Err(CalcError::InsufficientOperands { op: '+' })
        );
        assert_eq!(
            build_tree(&[Tok::UnaryMinus]),
            Err(CalcError::InsufficientOperands { op: '-' })
        );
        assert_eq!(build_tree(&tokenize("(2+3")), Err(CalcError::UnmatchedParenthesis));
        assert_eq!(build_tree(&tokenize("2+3)")), Err(CalcError::UnmatchedParenthesis));
        // les espaces sont ignorés : "2 3" donne Num(23), d’où des jetons explicites
        assert_eq!(
            build_tree(&[Tok::Num(2.into()), Tok::Num(3.into())]),
            Err(CalcError::DanglingOperands(2))
        );
        assert_eq!(build_tree(&tokenize("2 3")), Ok(Some(n(23))));
    }

    #[test]
    fn limite_de_profondeur() {
        let limites = Limites::avec_profondeur(3);
        assert!(build_tree_with(&tokenize("1+2*3"), &limites).is_ok());
        assert_eq!(
            build_tree_with(&tokenize("1+2*3^4"), &limites),
            Err(CalcError::NestingTooDeep { limit: 3 })
        );

        let profond = format!("{}1{}", "(1+".repeat(300), ")".repeat(300));
        assert_eq!(
            build_tree(&tokenize(&profond)),
            Err(CalcError::NestingTooDeep { limit: 200 })
        );
    }
}

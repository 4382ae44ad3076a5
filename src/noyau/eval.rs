//! Noyau — évaluation (pipeline réel)
//!
//! validate -> tokenize -> build_tree -> evaluate (f64) + lecture exacte (ℚ)
//!          -> infixe / préfixe / postfixe -> dessin ASCII
//!
//! Remarque : la lecture exacte est un bonus d’affichage ; elle n’est jamais
//! une source d’erreur (None si la valeur n’est pas un rationnel fini).

use num_bigint::BigInt;
use num_rational::BigRational;
use num_traits::{One, Signed, ToPrimitive, Zero};

use super::arbre::{Node, OperatorKind};
use super::construction::build_tree_with;
use super::erreurs::{CalcError, Erreur};
use super::format::{to_infix, to_postfix, to_prefix};
use super::jetons::{tokenize, Tok};
use super::limites::Limites;
use super::validation::validate;
use super::visualisation::visualize;

/// Garde-fou : |exposant| maximal pour la lecture exacte (anti-gel BigInt).
const EXPOSANT_EXACT_MAX: u32 = 1024;

/// Garde-fou : taille maximale (en bits) d’un résultat de puissance exacte.
/// Sans lui, `(99^1000)^1000` demande ~2 millions de chiffres.
const BITS_EXACT_MAX: u64 = 1 << 16;

/// Réduction récursive (post-ordre) vers un flottant.
pub fn evaluate(node: &Node) -> Result<f64, CalcError> {
    match node {
        // to_f64 sur BigInt ne renvoie jamais None ; ±inf au-delà de f64::MAX
        Node::Number(n) => Ok(n.to_f64().unwrap_or(f64::NAN)),

        Node::Unary { op, operand } => match op {
            OperatorKind::Neg => Ok(-evaluate(operand)?),
            autre => Err(CalcError::UnknownOperator(format!("{autre:?} (unaire)"))),
        },

        Node::Binary { op, left, right } => {
            let a = evaluate(left)?;
            let b = evaluate(right)?;

            match op {
                OperatorKind::Add => Ok(a + b),
                OperatorKind::Sub => Ok(a - b),
                OperatorKind::Mul => Ok(a * b),
                OperatorKind::Div => {
                    if b == 0.0 {
                        return Err(CalcError::DivisionByZero);
                    }
                    Ok(a / b)
                }
                OperatorKind::Pow => Ok(a.powf(b)),
                OperatorKind::Neg => Err(CalcError::UnknownOperator("Neg (binaire)".into())),
            }
        }
    }
}

/// Variante sur l’arbre “éventuellement vide” : vide => 0.
pub fn evaluate_tree(arbre: Option<&Node>) -> Result<f64, CalcError> {
    match arbre {
        Some(node) => evaluate(node),
        None => Ok(0.0),
    }
}

/// Lecture EXACTE (rationnel). None si indéfini ou non rationnel :
/// division par zéro, exposant non entier, 0^(-n), exposant ou résultat trop grand.
pub fn evaluate_exact(node: &Node) -> Option<BigRational> {
    match node {
        Node::Number(n) => Some(BigRational::from_integer(n.clone())),

        Node::Unary { operand, .. } => evaluate_exact(operand).map(|x| -x),

        Node::Binary { op, left, right } => {
            let a = evaluate_exact(left)?;
            let b = evaluate_exact(right)?;

            match op {
                OperatorKind::Add => Some(a + b),
                OperatorKind::Sub => Some(a - b),
                OperatorKind::Mul => Some(a * b),
                OperatorKind::Div => {
                    if b.is_zero() {
                        None
                    } else {
                        Some(a / b)
                    }
                }
                OperatorKind::Pow => puissance_exacte(&a, &b),
                OperatorKind::Neg => None,
            }
        }
    }
}

/// a^b exact, seulement si b est un entier raisonnable.
fn puissance_exacte(a: &BigRational, b: &BigRational) -> Option<BigRational> {
    if !b.denom().is_one() {
        return None;
    }

    let n = b.numer().abs().to_u32()?;
    if n > EXPOSANT_EXACT_MAX {
        return None;
    }

    // taille du résultat ≈ (bits(p) + bits(q)) * n : on refuse AVANT pow
    let bits_base = a.numer().bits() + a.denom().bits();
    if bits_base.saturating_mul(u64::from(n)) > BITS_EXACT_MAX {
        return None;
    }

    let num: BigInt = a.numer().pow(n);
    let den: BigInt = a.denom().pow(n);

    if b.is_negative() {
        if num.is_zero() {
            return None;
        }
        Some(BigRational::new(den, num))
    } else {
        Some(BigRational::new(num, den))
    }
}

/// Tout ce que le pipeline produit pour UNE saisie.
#[derive(Clone, Debug)]
pub struct Analyse {
    pub jetons: Vec<Tok>,
    pub arbre: Node,
    pub valeur: f64,
    pub exacte: Option<BigRational>,
    pub infixe: String,
    pub prefixe: String,
    pub postfixe: String,
    pub dessin: Vec<String>,
}

/// API publique : valide, construit, évalue et rend une expression.
pub fn analyse_expression(expr: &str, limites: &Limites) -> Result<Analyse, Erreur> {
    // 1) Validation (avant tout)
    if let Err(e) = validate(expr) {
        log::debug!("saisie rejetée {expr:?} : {e:?}");
        return Err(e.into());
    }

    // 2) Jetons
    let jetons = tokenize(expr);
    log::debug!("jetons : {jetons:?}");

    // 3) Arbre
    let arbre = build_tree_with(&jetons, limites)?.ok_or(CalcError::EmptyTree)?;
    log::debug!("arbre construit, hauteur {}", arbre.height());

    // 4) Valeur (f64) + lecture exacte
    let valeur = evaluate(&arbre)?;
    let exacte = evaluate_exact(&arbre);
    log::debug!("valeur = {valeur}, exacte = {exacte:?}");

    // 5) Formes textuelles + dessin
    let infixe = to_infix(&arbre);
    let prefixe = to_prefix(&arbre);
    let postfixe = to_postfix(&arbre);
    let dessin = visualize(&arbre);

    Ok(Analyse {
        jetons,
        arbre,
        valeur,
        exacte,
        infixe,
        prefixe,
        postfixe,
        dessin,
    })
}

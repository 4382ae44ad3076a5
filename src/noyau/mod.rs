//! Noyau : arbre d’expressions arithmétiques
//!
//! Organisation interne :
//! - arbre.rs          : Node + OperatorKind (précédence, associativité)
//! - erreurs.rs        : erreurs typées (validation / calcul)
//! - limites.rs        : garde-fous (hauteur d’arbre)
//! - validation.rs     : contrôles syntaxiques avant jetons
//! - jetons.rs         : tokenisation (moins unaire vs soustraction)
//! - construction.rs   : shunting-yard à deux piles -> arbre
//! - eval.rs           : valeur f64 + lecture exacte + pipeline complet
//! - format.rs         : infixe / préfixe / postfixe
//! - visualisation.rs  : dessin ASCII centré

pub mod arbre;
pub mod construction;
pub mod erreurs;
pub mod eval;
pub mod format;
pub mod jetons;
pub mod limites;
pub mod validation;
pub mod visualisation;

#[cfg(test)]
mod tests_proprietes;

#[cfg(test)]
mod tests_robustesse;

// API publique
pub use arbre::{Associativity, Node, OperatorKind};
pub use construction::{build_tree, build_tree_with};
pub use erreurs::{CalcError, Erreur, ValidationError};
pub use eval::{analyse_expression, evaluate, evaluate_exact, evaluate_tree, Analyse};
pub use format::{format_rationnel, to_infix, to_postfix, to_prefix};
pub use jetons::{format_tokens, tokenize, Tok};
pub use limites::{Limites, PROFONDEUR_DEFAUT, PROFONDEUR_MAX};
pub use validation::validate;
pub use visualisation::visualize;

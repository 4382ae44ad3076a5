//! Noyau — erreurs typées.
//!
//! Deux niveaux :
//! - `ValidationError` : saisie rejetée AVANT tout traitement (syntaxe).
//! - `CalcError`       : construction de l’arbre / évaluation.
//!
//! Aucune n’est fatale : l’appelant affiche le message et attend la saisie suivante.

use thiserror::Error;

/// Catégories de rejet du validateur (une seule remontée par saisie).
#[derive(Clone, Copy, Debug, Error, PartialEq, Eq)]
pub enum ValidationError {
    #[error("Seul un nombre a été saisi : entrez une expression avec opérateurs (ex : 2+3, 4*5, -2+3)")]
    BareNumber,

    #[error("Expression vide")]
    EmptyExpression,

    #[error("Aucun opérateur entre les nombres : utilisez + - * / ^")]
    MissingOperator,

    #[error("Caractère non autorisé : '{0}'")]
    InvalidCharacter(char),

    #[error("Parenthèses vides () interdites")]
    EmptyParentheses,

    #[error("Parenthèses non équilibrées")]
    UnbalancedParentheses,

    #[error("Opérateur manquant avant une parenthèse ouvrante")]
    MissingOperatorBeforeParen,

    #[error("Opérateur manquant après une parenthèse fermante")]
    MissingOperatorAfterParen,

    #[error("Deux opérateurs consécutifs")]
    ConsecutiveOperators,

    #[error("L’expression ne peut pas se terminer par un opérateur")]
    TrailingOperator,

    #[error("L’expression ne peut pas commencer par un opérateur binaire")]
    LeadingBinaryOperator,

    #[error("Opérateur juste avant une parenthèse fermante")]
    OperatorBeforeCloseParen,

    #[error("Opérateur binaire juste après une parenthèse ouvrante")]
    BinaryOperatorAfterOpenParen,
}

/// Erreurs de construction (incohérence interne) et d’évaluation.
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum CalcError {
    #[error("opérandes insuffisants pour l’opérateur '{op}'")]
    InsufficientOperands { op: char },

    #[error("division par zéro")]
    DivisionByZero,

    #[error("opérateur inconnu : {0}")]
    UnknownOperator(String),

    #[error("parenthèse sans correspondance")]
    UnmatchedParenthesis,

    #[error("{0} opérandes restants sans opérateur")]
    DanglingOperands(usize),

    #[error("imbrication trop profonde (limite : {limit})")]
    NestingTooDeep { limit: usize },

    #[error("impossible de construire l’arbre (aucun jeton)")]
    EmptyTree,
}

/// Erreur du pipeline complet (validation OU calcul).
#[derive(Clone, Debug, Error, PartialEq, Eq)]
pub enum Erreur {
    #[error("Saisie incorrecte : {0}")]
    Validation(#[from] ValidationError),

    #[error("Erreur de calcul : {0}")]
    Calcul(#[from] CalcError),
}

//! Noyau — validation syntaxique (avant jetons).
//!
//! Rôle : rejeter une saisie mal formée avec UNE catégorie d’erreur.
//! Les contrôles travaillent sur la chaîne sans espaces, sauf :
//! - « opérateur manquant » (les espaces séparent deux nombres),
//! - « caractère non autorisé » (sur la saisie brute).
//!
//! Contrat : une chaîne validée se découpe en jetons et se construit en arbre
//! sans manque d’opérandes.

use super::erreurs::ValidationError;

fn is_operator(c: char) -> bool {
    matches!(c, '+' | '-' | '*' | '/' | '^')
}

fn is_autorise(c: char) -> bool {
    c.is_ascii_digit() || is_operator(c) || matches!(c, '(' | ')' | ' ')
}

fn sans_espaces(expr: &str) -> Vec<char> {
    expr.chars().filter(|c| *c != ' ').collect()
}

fn tous_chiffres(s: &[char]) -> bool {
    !s.is_empty() && s.iter().all(|c| c.is_ascii_digit())
}

/// `5`, `-5`, `(5)`, `(-5)`.
fn is_nombre_seul(s: &[char]) -> bool {
    let nombre_signe = |t: &[char]| {
        tous_chiffres(t) || (t.len() > 1 && t[0] == '-' && tous_chiffres(&t[1..]))
    };

    if nombre_signe(s) {
        return true;
    }

    s.len() >= 3 && s[0] == '(' && s[s.len() - 1] == ')' && nombre_signe(&s[1..s.len() - 1])
}

/// Au moins deux suites de chiffres, séparées par n’importe quoi (espaces inclus).
fn plusieurs_nombres(expr: &str) -> bool {
    let mut suites = 0;
    let mut dans_nombre = false;

    for c in expr.chars() {
        if c.is_ascii_digit() {
            if !dans_nombre {
                suites += 1;
                if suites >= 2 {
                    return true;
                }
            }
            dans_nombre = true;
        } else {
            dans_nombre = false;
        }
    }

    false
}

fn valide_parentheses(s: &[char]) -> Result<(), ValidationError> {
    if s.windows(2).any(|w| w[0] == '(' && w[1] == ')') {
        return Err(ValidationError::EmptyParentheses);
    }

    let mut niveau: i64 = 0;
    for &c in s {
        match c {
            '(' => niveau += 1,
            ')' => {
                niveau -= 1;
                if niveau < 0 {
                    return Err(ValidationError::UnbalancedParentheses);
                }
            }
            _ => {}
        }
    }
    if niveau > 0 {
        return Err(ValidationError::UnbalancedParentheses);
    }

    for w in s.windows(2) {
        if (w[0].is_ascii_digit() || w[0] == ')') && w[1] == '(' {
            return Err(ValidationError::MissingOperatorBeforeParen);
        }
        if w[0] == ')' && w[1].is_ascii_digit() {
            return Err(ValidationError::MissingOperatorAfterParen);
        }
    }

    Ok(())
}

/// Valide une saisie. Ordre des contrôles = ordre des messages (le premier gagne).
pub fn validate(expr: &str) -> Result<(), ValidationError> {
    let s = sans_espaces(expr);

    if s.is_empty() {
        return Err(ValidationError::EmptyExpression);
    }

    // Ne vise que les saisies SANS opérateur : ailleurs les espaces sont
    // insignifiants, "12 + 3 4" se lit 12 + 34.
    if !s.iter().copied().any(is_operator) && plusieurs_nombres(expr) {
        return Err(ValidationError::MissingOperator);
    }

    if is_nombre_seul(&s) {
        return Err(ValidationError::BareNumber);
    }

    if let Some(c) = expr.chars().find(|c| !is_autorise(*c)) {
        return Err(ValidationError::InvalidCharacter(c));
    }

    valide_parentheses(&s)?;

    // Seul un '-' peut suivre un opérateur (moins unaire).
    if s
        .windows(2)
        .any(|w| is_operator(w[0]) && is_operator(w[1]) && w[1] != '-')
    {
        return Err(ValidationError::ConsecutiveOperators);
    }

    // s non vide : contrôlé plus haut.
    if is_operator(s[s.len() - 1]) {
        return Err(ValidationError::TrailingOperator);
    }

    if is_operator(s[0]) && s[0] != '-' {
        return Err(ValidationError::LeadingBinaryOperator);
    }

    if s.windows(2).any(|w| is_operator(w[0]) && w[1] == ')') {
        return Err(ValidationError::OperatorBeforeCloseParen);
    }

    if s
        .windows(2)
        .any(|w| w[0] == '(' && is_operator(w[1]) && w[1] != '-')
    {
        return Err(ValidationError::BinaryOperatorAfterOpenParen);
    }

    Ok(())
}

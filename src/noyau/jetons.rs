// src/noyau/jetons.rs

use num_bigint::BigInt;

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Tok {
    Num(BigInt),

    Plus,
    Minus,      // soustraction (binaire)
    UnaryMinus, // moins unaire : début, après '(' ou après un opérateur
    Star,
    Slash,
    Caret, // ^

    LPar,
    RPar,
}

/// Tokenize une chaîne déjà validée (validation.rs).
/// - espaces ignorés
/// - suites de chiffres maximales -> Num (entier sans borne)
/// - '-' -> UnaryMinus s’il ouvre l’expression, suit '(' ou suit un opérateur,
///   sinon Minus
/// - + * / ^ ( ) -> un jeton chacun
///
/// Sur une saisie NON validée : les caractères inconnus sont ignorés (jamais de panique).
pub fn tokenize(s: &str) -> Vec<Tok> {
    let chars: Vec<char> = s.chars().filter(|c| !c.is_whitespace()).collect();
    let mut out = Vec::new();
    let mut i: usize = 0;

    while i < chars.len() {
        let c = chars[i];

        if c.is_ascii_digit() {
            let start = i;
            while i < chars.len() && chars[i].is_ascii_digit() {
                i += 1;
            }
            let txt: String = chars[start..i].iter().collect();
            // suite de chiffres ASCII non vide : parse_bytes ne peut pas échouer
            if let Some(n) = BigInt::parse_bytes(txt.as_bytes(), 10) {
                out.push(Tok::Num(n));
            }
            continue;
        }

        let tok = match c {
            '-' => {
                let unaire = i == 0 || matches!(chars[i - 1], '(' | '+' | '-' | '*' | '/' | '^');
                if unaire {
                    Tok::UnaryMinus
                } else {
                    Tok::Minus
                }
            }
            '+' => Tok::Plus,
            '*' => Tok::Star,
            '/' => Tok::Slash,
            '^' => Tok::Caret,
            '(' => Tok::LPar,
            ')' => Tok::RPar,
            _ => {
                log::debug!("tokenize: caractère ignoré {c:?}");
                i += 1;
                continue;
            }
        };

        out.push(tok);
        i += 1;
    }

    out
}

/// Format utilitaire (écho diagnostic) : liste de jetons en texte.
/// Le moins unaire s’écrit `u-`.
pub fn format_tokens(tokens: &[Tok]) -> String {
    let mut out = Vec::new();
    for t in tokens {
        let s = match t {
            Tok::Num(n) => n.to_string(),

            Tok::Plus => "+".to_string(),
            Tok::Minus => "-".to_string(),
            Tok::UnaryMinus => "u-".to_string(),
            Tok::Star => "*".to_string(),
            Tok::Slash => "/".to_string(),
            Tok::Caret => "^".to_string(),

            Tok::LPar => "(".to_string(),
            Tok::RPar => ")".to_string(),
        };
        out.push(s);
    }
    out.join(" ")
}

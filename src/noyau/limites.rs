// src/noyau/limites.rs
//
// Garde-fous du noyau (anti-gel / anti-débordement de pile).
// La construction, l’évaluation, le rendu et le dessin sont récursifs :
// on borne la hauteur de l’arbre dès la construction.

/// Hauteur d’arbre maximale par défaut.
pub const PROFONDEUR_DEFAUT: usize = 200;

/// Plafond absolu : au-delà, même la pile du fil principal devient fragile.
pub const PROFONDEUR_MAX: usize = 2000;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Limites {
    pub profondeur_max: usize,
}

impl Default for Limites {
    fn default() -> Self {
        Self {
            profondeur_max: PROFONDEUR_DEFAUT,
        }
    }
}

impl Limites {
    /// Limite bornée à `1..=PROFONDEUR_MAX`.
    pub fn avec_profondeur(profondeur: usize) -> Self {
        Self {
            profondeur_max: profondeur.clamp(1, PROFONDEUR_MAX),
        }
    }
}

//! src/app/etat.rs
//!
//! État UI (sans vue, sans noyau).
//!
//! Rôle : contenir l’état de l’application (entrée, résultats, erreur, limite)
//! et offrir des opérations simples (C/CLR/AC) sans logique d’affichage.
//!
//! Contrats :
//! - Aucune évaluation ici (pas de parsing).
//! - Actions déterministes, sans effet de bord caché.
//! - Défense en profondeur : la limite de hauteur passe par `Limites::avec_profondeur`.

use arbre_expr::noyau::{format_rationnel, format_tokens, Analyse, Limites};

/// Textes affichés pour UNE expression évaluée.
#[derive(Clone, Default, Debug)]
pub struct Resultats {
    pub valeur: String,
    pub exacte: String,
    pub jetons: String,
    pub infixe: String,
    pub prefixe: String,
    pub postfixe: String,
    pub dessin: String,
}

impl From<&Analyse> for Resultats {
    fn from(a: &Analyse) -> Self {
        Self {
            valeur: format!("{}", a.valeur),
            exacte: a
                .exacte
                .as_ref()
                .map(format_rationnel)
                .unwrap_or_else(|| "indisponible".to_string()),
            jetons: format_tokens(&a.jetons),
            infixe: a.infixe.clone(),
            prefixe: a.prefixe.clone(),
            postfixe: a.postfixe.clone(),
            dessin: a.dessin.join("\n"),
        }
    }
}

#[derive(Clone, Debug)]
pub struct AppArbre {
    // --- entrée utilisateur ---
    pub entree: String,

    // --- sorties ---
    pub resultats: Resultats,
    pub erreur: String, // message d’erreur (validation ou calcul)

    // --- paramètres ---
    pub limites: Limites,

    // --- UX ---
    // Permet à vue.rs de redonner le focus à l’entrée après un clic sur un bouton.
    pub focus_entree: bool,
}

impl Default for AppArbre {
    fn default() -> Self {
        Self {
            entree: String::new(),
            resultats: Resultats::default(),
            erreur: String::new(),
            limites: Limites::default(),
            focus_entree: true, // au lancement, on veut pouvoir taper tout de suite
        }
    }
}

impl AppArbre {
    /* ------------------------ Actions “boutons” (état seulement) ------------------------ */

    /// AC : remise à zéro totale (entrée + résultats + limite par défaut).
    pub fn reset_total(&mut self) {
        self.entree.clear();
        self.clear_resultats();
        self.limites = Limites::default();
        self.focus_entree = true;
    }

    /// C : effacer seulement l’entrée (sans toucher aux résultats).
    pub fn clear_entree(&mut self) {
        self.entree.clear();
        self.focus_entree = true;
    }

    /// CLR : effacer résultats + erreur (sans toucher à l’entrée).
    pub fn clear_resultats(&mut self) {
        self.resultats = Resultats::default();
        self.erreur.clear();
        self.focus_entree = true;
    }

    /// Utilitaire : placer une erreur.
    ///
    /// Choix UX : on CONSERVE le dernier résultat pour ne pas “effacer l’écran” sur une faute.
    pub fn set_erreur(&mut self, msg: impl Into<String>) {
        self.erreur = msg.into();
        self.focus_entree = true;
    }

    /// Utilitaire : déposer un résultat complet.
    pub fn set_resultats(&mut self, resultats: Resultats) {
        self.erreur.clear();
        self.resultats = resultats;
        self.focus_entree = true;
    }

    /// Garde-fou : hauteur d’arbre bornée (évite débordement de pile).
    pub fn set_profondeur(&mut self, profondeur: usize) {
        self.limites = Limites::avec_profondeur(profondeur);
        self.focus_entree = true;
    }
}

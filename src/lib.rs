//! Arbre d’expressions : analyse, évaluation et dessin d’expressions entières
//! (`+ - * / ^`, moins unaire, parenthèses).
//!
//! Le noyau est sans UI ; l’application egui (src/main.rs) n’en est qu’un client.

pub mod noyau;

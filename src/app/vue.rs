// src/app/vue.rs
//
// Vue (UI egui) — natif + web
// ---------------------------
// Objectifs :
// - Même AppArbre (etat.rs) pour natif + wasm
// - Clavier : Enter évalue (quand le champ a le focus)
// - Tactile : gros boutons, focus redonné après clic (focus_entree)
// - Dessin de l’arbre en monospace (les colonnes doivent tomber juste)

use eframe::egui;

use arbre_expr::noyau::{analyse_expression, PROFONDEUR_MAX};

use super::etat::{AppArbre, Resultats};

impl AppArbre {
    /// UI principale : à appeler depuis eframe::App::update(...)
    pub fn ui(&mut self, ui: &mut egui::Ui) {
        ui.spacing_mut().item_spacing = egui::vec2(6.0, 6.0);

        egui::ScrollArea::vertical()
            .auto_shrink([false, false])
            .show(ui, |ui| {
                ui.heading("Arbre d’expressions");
                ui.add_space(6.0);

                self.ui_entree(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_resultats(ui);

                ui.add_space(8.0);
                ui.separator();
                ui.add_space(8.0);

                self.ui_dessin(ui);
            });
    }

    fn ui_entree(&mut self, ui: &mut egui::Ui) {
        ui.label("Expression :");

        // IMPORTANT : id stable + focus contrôlé
        let resp = ui.add(
            egui::TextEdit::singleline(&mut self.entree)
                .desired_width(ui.available_width())
                .hint_text("Ex: 2+3*4, 2^3^2, -(2+3), 3*-2")
                .id_source("entree_edit")
                .code_editor(),
        );

        if self.focus_entree {
            resp.request_focus();
            self.focus_entree = false;
        }

        // --- Clavier : Enter évalue (seulement si le champ est focus) ---
        let enter = ui.input(|i| i.key_pressed(egui::Key::Enter));
        if resp.has_focus() && enter {
            self.eval_via_noyau();
            self.focus_entree = true;
        }

        ui.add_space(6.0);

        // Actions + limite
        ui.horizontal(|ui| {
            // Contrat: C = entrée seulement ; CLR = résultats seulement ; AC = tout
            self.bouton_action(ui, "C", "Efface seulement l’entrée", Action::ClearEntree);
            self.bouton_action(ui, "CLR", "Efface résultats + erreur", Action::ClearResultats);
            self.bouton_action(ui, "AC", "Remise à zéro totale", Action::ResetTotal);

            ui.separator();

            ui.label("Hauteur max :");
            let mut p = self.limites.profondeur_max as u32;
            let resp = ui.add(
                egui::DragValue::new(&mut p)
                    .speed(1)
                    .range(1..=PROFONDEUR_MAX as u32)
                    .suffix(" niveaux"),
            );
            if resp.changed() {
                self.set_profondeur(p as usize);
            }
        });

        ui.add_space(8.0);

        // Opérateurs + parenthèses + "="
        ui.horizontal_wrapped(|ui| {
            self.bouton_insert(ui, "(", InsertKind::OpenParen);
            self.bouton_insert(ui, ")", InsertKind::CloseParen);

            for op in ["+", "-", "*", "/", "^"] {
                self.bouton_insert(ui, op, InsertKind::Op);
            }

            ui.add_space(10.0);

            let eq = ui.add_sized([64.0, 32.0], egui::Button::new("="));
            if eq.clicked() {
                self.eval_via_noyau();
                self.focus_entree = true;
            }
        });

        ui.add_space(8.0);

        self.ui_pave_numerique(ui);

        if !self.erreur.is_empty() {
            ui.add_space(6.0);
            ui.colored_label(ui.visuals().error_fg_color, &self.erreur);
        }
    }

    fn ui_pave_numerique(&mut self, ui: &mut egui::Ui) {
        egui::Grid::new("pave_numerique_arbre")
            .num_columns(3)
            .spacing([6.0, 6.0])
            .show(ui, |ui| {
                for ligne in [["7", "8", "9"], ["4", "5", "6"], ["1", "2", "3"]] {
                    for chiffre in ligne {
                        self.bouton_insert(ui, chiffre, InsertKind::Digit);
                    }
                    ui.end_row();
                }

                self.bouton_insert(ui, "0", InsertKind::Digit);
                self.bouton_action(ui, "DEL", "Efface le dernier symbole", Action::Backspace);
                ui.label("");
                ui.end_row();
            });
    }

    /// Retire le dernier symbole (et les espaces qui l’entourent).
    fn backspace_entree(&mut self) {
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
        self.entree.pop();
        while self.entree.ends_with(' ') {
            self.entree.pop();
        }
    }

    fn ui_resultats(&mut self, ui: &mut egui::Ui) {
        let r = &self.resultats;
        Self::champ(ui, "Valeur", "valeur_out", &r.valeur);
        Self::champ(ui, "Exacte", "exacte_out", &r.exacte);
        Self::champ(ui, "Jetons", "jetons_out", &r.jetons);
        Self::champ(ui, "Infixe", "infixe_out", &r.infixe);
        Self::champ(ui, "Préfixe", "prefixe_out", &r.prefixe);
        Self::champ(ui, "Postfixe", "postfixe_out", &r.postfixe);
    }

    fn ui_dessin(&mut self, ui: &mut egui::Ui) {
        egui::CollapsingHeader::new("Arbre")
            .default_open(true)
            .show(ui, |ui| {
                let rows = self.resultats.dessin.lines().count().max(2);
                egui::ScrollArea::horizontal()
                    .id_salt("dessin_scroll")
                    .show(ui, |ui| {
                        Self::champ_monospace(ui, "dessin_out", &self.resultats.dessin, rows);
                    });
            });
    }

    fn champ(ui: &mut egui::Ui, titre: &str, id: &str, contenu: &str) {
        ui.add_space(4.0);
        ui.label(format!("{titre} :"));
        Self::champ_monospace(ui, id, contenu, 1);
    }

    fn champ_monospace(ui: &mut egui::Ui, id: &str, contenu: &str, rows: usize) {
        // Affichage lecture seule “stable”, sans TextEdit interactif.
        egui::Frame::group(ui.style())
            .fill(ui.visuals().extreme_bg_color)
            .show(ui, |ui| {
                ui.push_id(id, |ui| {
                    ui.set_min_width(ui.available_width());
                    ui.set_min_height(
                        rows as f32 * ui.text_style_height(&egui::TextStyle::Monospace),
                    );
                    ui.monospace(contenu);
                });
            });
    }

    fn bouton_action(&mut self, ui: &mut egui::Ui, label: &str, tip: &str, action: Action) {
        let resp = ui
            .add_sized([56.0, 30.0], egui::Button::new(label))
            .on_hover_text(tip);

        if resp.clicked() {
            match action {
                Action::ClearEntree => self.clear_entree(),
                Action::ClearResultats => self.clear_resultats(),
                Action::ResetTotal => self.reset_total(),
                Action::Backspace => self.backspace_entree(),
            }
            self.focus_entree = true;
        }
    }

    fn bouton_insert(&mut self, ui: &mut egui::Ui, texte: &str, kind: InsertKind) {
        let resp = ui.add_sized([46.0, 28.0], egui::Button::new(texte));
        if !resp.clicked() {
            return;
        }

        match kind {
            InsertKind::CloseParen => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                self.entree.push_str(texte);
            }
            InsertKind::OpenParen => {
                if let Some(c) = self.entree.chars().rev().find(|c| !c.is_whitespace()) {
                    if c.is_ascii_digit() || c == ')' {
                        self.entree.push(' ');
                    }
                }
                self.entree.push_str(texte);
            }
            InsertKind::Op => {
                while self.entree.ends_with(' ') {
                    self.entree.pop();
                }
                if !self.entree.is_empty() {
                    self.entree.push(' ');
                }
                self.entree.push_str(texte);
                self.entree.push(' ');
            }
            InsertKind::Digit => {
                // chiffres: pas d’espaces auto
                self.entree.push_str(texte);
            }
        }

        self.focus_entree = true;
    }

    /// Analyse l’expression via le noyau, puis dépose résultats ou erreur dans l’état UI.
    fn eval_via_noyau(&mut self) {
        match analyse_expression(&self.entree, &self.limites) {
            Ok(analyse) => {
                log::info!("{} = {}", self.entree.trim(), analyse.valeur);
                self.set_resultats(Resultats::from(&analyse));
            }
            Err(e) => {
                log::warn!("{:?} : {e}", self.entree);
                self.set_erreur(e.to_string());
            }
        }
        self.focus_entree = true;
    }
}

#[derive(Clone, Copy, Debug)]
enum Action {
    ClearEntree,
    ClearResultats,
    ResetTotal,
    Backspace,
}

#[derive(Clone, Copy, Debug)]
enum InsertKind {
    Digit,
    Op,
    OpenParen,
    CloseParen,
}

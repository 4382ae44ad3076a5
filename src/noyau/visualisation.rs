//! Noyau — dessin ASCII de l’arbre.
//!
//! Chaque sous-arbre devient un BLOC rectangulaire de lignes (même largeur),
//! avec la colonne de son “centre” (où se branche le parent).
//! - feuille  : son libellé, centre = largeur/2
//! - binaire  : libellé centré entre les deux centres enfants, puis `/` et `\`,
//!              puis les deux blocs côte à côte (écart fixe de 2 colonnes)
//! - unaire   : libellé puis `\`, tous deux au-dessus du centre de l’enfant
//!
//! Fonction pure : l’affichage ligne à ligne reste à l’appelant.

use super::arbre::Node;

/// Écart fixe entre deux sous-arbres voisins.
const ECART: usize = 2;

struct Bloc {
    lignes: Vec<String>,
    largeur: usize,
    centre: usize,
}

fn ligne_vide(largeur: usize) -> Vec<char> {
    vec![' '; largeur]
}

fn dessine(node: &Node) -> Bloc {
    match node {
        Node::Number(n) => {
            let label = n.to_string();
            let largeur = label.chars().count();
            Bloc {
                lignes: vec![label],
                largeur,
                centre: largeur / 2,
            }
        }

        Node::Unary { op, operand } => {
            let enfant = dessine(operand);
            let c = enfant.centre;

            let mut l1 = ligne_vide(enfant.largeur);
            let mut l2 = ligne_vide(enfant.largeur);
            l1[c] = op.symbol();
            l2[c] = '\\';

            let mut lignes = Vec::with_capacity(enfant.lignes.len() + 2);
            lignes.push(l1.into_iter().collect());
            lignes.push(l2.into_iter().collect());
            lignes.extend(enfant.lignes);

            Bloc {
                lignes,
                largeur: enfant.largeur,
                centre: c,
            }
        }

        Node::Binary { op, left, right } => {
            let g = dessine(left);
            let d = dessine(right);

            let largeur = g.largeur + ECART + d.largeur;
            let centre_g = g.centre;
            let centre_d = g.largeur + ECART + d.centre;
            let pos_op = (centre_g + centre_d) / 2;

            // libellé (1 caractère ici, mais on reste générique)
            let label: Vec<char> = op.symbol().to_string().chars().collect();
            let debut = pos_op.saturating_sub(label.len() / 2);
            let mut l_label = ligne_vide(largeur);
            for (i, ch) in label.iter().enumerate() {
                if let Some(case) = l_label.get_mut(debut + i) {
                    *case = *ch;
                }
            }

            // branches : seulement si le centre enfant est strictement à l’écart
            let mut l_branches = ligne_vide(largeur);
            if pos_op > centre_g {
                l_branches[centre_g] = '/';
            }
            if pos_op < centre_d {
                l_branches[centre_d] = '\\';
            }

            // hauteurs égales (lignes blanches) puis concaténation horizontale
            let hauteur = g.lignes.len().max(d.lignes.len());
            let blanc_g = " ".repeat(g.largeur);
            let blanc_d = " ".repeat(d.largeur);
            let sep = " ".repeat(ECART);

            let mut lignes = Vec::with_capacity(hauteur + 2);
            lignes.push(l_label.into_iter().collect());
            lignes.push(l_branches.into_iter().collect());
            for i in 0..hauteur {
                let lg = g.lignes.get(i).unwrap_or(&blanc_g);
                let ld = d.lignes.get(i).unwrap_or(&blanc_d);
                lignes.push(format!("{lg}{sep}{ld}"));
            }

            Bloc {
                lignes,
                largeur,
                centre: pos_op,
            }
        }
    }
}

/// Lignes du dessin, de la racine aux feuilles.
pub fn visualize(node: &Node) -> Vec<String> {
    dessine(node).lignes
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::noyau::construction::build_tree;
    use crate::noyau::jetons::tokenize;
    use pretty_assertions::assert_eq;

    fn dessin(s: &str) -> Vec<String> {
        visualize(&build_tree(&tokenize(s)).unwrap().unwrap())
    }

    #[test]
    fn feuille() {
        assert_eq!(visualize(&Node::number(42)), vec!["42"]);
    }

    #[test]
    fn binaire_simple() {
        assert_eq!(dessin("2+3"), vec![" +  ", "/  \\", "2  3"]);
    }

    #[test]
    fn unaire_centre_sur_enfant() {
        assert_eq!(dessin("-(2+3)"), vec![" -  ", " \\  ", " +  ", "/  \\", "2  3"]);
    }

    #[test]
    fn hauteurs_completees() {
        // 2 * (3 + 4) : le bloc gauche est complété par des lignes blanches
        assert_eq!(
            dessin("2*(3+4)"),
            vec![
                "  *    ",
                "/   \\  ",
                "2   +  ",
                "   /  \\",
                "   3  4",
            ]
        );
    }

    #[test]
    fn largeurs_egales() {
        let lignes = dessin("12^-(3-45)*6+789");
        let l0 = lignes[0].chars().count();
        assert!(lignes.iter().all(|l| l.chars().count() == l0));
    }
}

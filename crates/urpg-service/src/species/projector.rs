//! Altered-form projection.

use urpg_core::models::Species;

use crate::views::AlteredFormView;

/// Project one species. `None` yields a view with every field unset.
pub fn build_altered_form(species: Option<&Species>) -> AlteredFormView {
    species.map(AlteredFormView::from).unwrap_or_default()
}

/// Project the species sharing a catalog index, in the given order.
/// A lone occupant has no altered forms.
pub fn build_altered_form_list(species: &[Species]) -> Vec<AlteredFormView> {
    if species.len() < 2 {
        return Vec::new();
    }
    species.iter().map(AlteredFormView::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn form(dbid: i64, name: &str) -> Species {
        Species {
            dbid,
            dexno: 25,
            name: name.to_string(),
            display_name: name.to_string(),
            type1: "ELECTRIC".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn none_projects_to_empty_view() {
        let view = build_altered_form(None);
        assert_eq!(view.name, None);
        assert_eq!(view.dbid, 0);
        assert!(view.unique_attacks.is_empty());
    }

    #[test]
    fn copies_identity_and_stats() {
        let mut belle = form(2, "Pikachu-Belle");
        belle.form_name = Some("Belle".to_string());
        belle.type2 = Some("ICE".to_string());
        belle.set_base_stats(urpg_core::models::BaseStats {
            hp: 35,
            attack: 60,
            defense: 45,
            special_attack: 55,
            special_defense: 55,
            speed: 85,
        });

        let view = build_altered_form(Some(&belle));
        assert_eq!(view.dbid, 2);
        assert_eq!(view.name.as_deref(), Some("Pikachu-Belle"));
        assert_eq!(view.display_name.as_deref(), Some("Pikachu-Belle"));
        assert_eq!(view.form_name.as_deref(), Some("Belle"));
        assert_eq!(view.type1.as_deref(), Some("ELECTRIC"));
        assert_eq!(view.type2.as_deref(), Some("ICE"));
        assert_eq!(view.attack, 60);
        assert_eq!(view.speed, 85);
    }

    #[test]
    fn zero_or_one_entries_give_no_forms() {
        assert!(build_altered_form_list(&[]).is_empty());
        assert!(build_altered_form_list(&[form(1, "Pikachu")]).is_empty());
    }

    #[test]
    fn keeps_input_order() {
        let list = build_altered_form_list(&[form(1, "Pikachu"), form(2, "Pikachu-Belle")]);
        let dbids: Vec<i64> = list.iter().map(|f| f.dbid).collect();
        assert_eq!(dbids, vec![1, 2]);
    }
}

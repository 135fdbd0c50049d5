//! Unique-move computation across sibling forms.

use rustc_hash::{FxHashMap, FxHashSet};
use urpg_core::models::SpeciesAttack;

use crate::views::AlteredFormView;

/// Compare the move lists of sibling forms and record the differences.
///
/// `move_lists[i]` belongs to `forms[i]`. A move is unique unless every form
/// learns it by the same method. For each unique move, every form's
/// `unique_attacks` gets its own method, or `None` if it lacks the move.
/// Returns the unique move names in first-seen order.
pub fn apply_unique_moves(
    forms: &mut [AlteredFormView],
    move_lists: &[Vec<SpeciesAttack>],
) -> Vec<String> {
    let tables: Vec<FxHashMap<&str, &str>> = move_lists.iter().map(|m| method_table(m)).collect();

    let mut seen = FxHashSet::default();
    let mut names = Vec::new();
    for moves in move_lists {
        for m in moves {
            if seen.insert(m.attack_name.as_str()) {
                names.push(m.attack_name.as_str());
            }
        }
    }

    let mut unique = Vec::new();
    for name in names {
        let methods: Vec<Option<&str>> = tables.iter().map(|t| t.get(name).copied()).collect();
        let first = methods.first().copied().flatten();
        if first.is_some() && methods.iter().all(|m| *m == first) {
            continue;
        }

        for (form, method) in forms.iter_mut().zip(&methods) {
            form.unique_attacks
                .insert(name.to_string(), method.map(str::to_string));
        }
        unique.push(name.to_string());
    }
    unique
}

/// Move name → method for one form. The first row wins on a repeated name.
fn method_table(moves: &[SpeciesAttack]) -> FxHashMap<&str, &str> {
    let mut table = FxHashMap::default();
    for m in moves {
        table
            .entry(m.attack_name.as_str())
            .or_insert(m.method.as_str());
    }
    table
}

#[cfg(test)]
mod tests {
    use super::*;

    fn learns(name: &str, method: &str) -> SpeciesAttack {
        SpeciesAttack {
            attack_name: name.to_string(),
            method: method.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn single_form_has_no_unique_moves() {
        let mut forms = vec![AlteredFormView::default()];
        let lists = vec![vec![learns("Thunder", "LEVEL-UP"), learns("Growl", "LEVEL-UP")]];

        assert!(apply_unique_moves(&mut forms, &lists).is_empty());
        assert!(forms[0].unique_attacks.is_empty());
    }

    #[test]
    fn differing_and_missing_moves_are_unique() {
        let mut forms = vec![AlteredFormView::default(), AlteredFormView::default()];
        let lists = vec![
            vec![
                learns("Thundershock", "LEVEL-UP"),
                learns("Thunder", "LEVEL-UP"),
                learns("Volt Tackle", "SPECIAL"),
            ],
            vec![
                learns("Thundershock", "LEVEL-UP"),
                learns("Thunder", "SPECIAL"),
                learns("Icicle Crash", "SPECIAL"),
            ],
        ];

        let unique = apply_unique_moves(&mut forms, &lists);
        assert_eq!(unique, vec!["Thunder", "Volt Tackle", "Icicle Crash"]);

        let first = &forms[0].unique_attacks;
        assert!(!first.contains_key("Thundershock"));
        assert_eq!(first["Thunder"].as_deref(), Some("LEVEL-UP"));
        assert_eq!(first["Volt Tackle"].as_deref(), Some("SPECIAL"));
        assert_eq!(first["Icicle Crash"], None);

        let second = &forms[1].unique_attacks;
        assert_eq!(second["Thunder"].as_deref(), Some("SPECIAL"));
        assert_eq!(second["Volt Tackle"], None);
        assert_eq!(second["Icicle Crash"].as_deref(), Some("SPECIAL"));
    }

    #[test]
    fn first_row_wins_on_repeated_name() {
        let mut forms = vec![AlteredFormView::default(), AlteredFormView::default()];
        let lists = vec![
            vec![learns("Surf", "TM"), learns("Surf", "SPECIAL")],
            vec![learns("Surf", "TM")],
        ];

        assert!(apply_unique_moves(&mut forms, &lists).is_empty());
    }

    #[test]
    fn forms_with_no_moves_make_everything_unique() {
        let mut forms = vec![AlteredFormView::default(), AlteredFormView::default()];
        let lists = vec![vec![learns("Growl", "LEVEL-UP")], vec![]];

        assert_eq!(apply_unique_moves(&mut forms, &lists), vec!["Growl"]);
        assert_eq!(forms[1].unique_attacks["Growl"], None);
    }

    #[test]
    fn empty_input_is_empty() {
        let mut forms: Vec<AlteredFormView> = Vec::new();
        assert!(apply_unique_moves(&mut forms, &[]).is_empty());
    }
}

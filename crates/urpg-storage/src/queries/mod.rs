//! Query modules, one per table. Functions take a `&Connection` so they run
//! equally on a pooled reader, the writer, or inside a transaction.

pub mod abilities;
pub mod attacks;
pub mod cosmetic_forms;
pub mod species;
pub mod species_abilities;
pub mod species_attacks;

/// Build a `LIKE` pattern matching names that start with `prefix`.
/// `%`, `_` and the escape character itself are matched literally.
pub(crate) fn prefix_pattern(prefix: &str) -> String {
    let mut pattern = String::with_capacity(prefix.len() + 1);
    for c in prefix.chars() {
        if matches!(c, '%' | '_' | '\\') {
            pattern.push('\\');
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

//! Exact-then-prefix name resolution shared by every lookup service.

use urpg_core::errors::{ServiceResult, StorageError};

/// Resolve `name` to one record.
///
/// Empty input resolves to nothing without touching the store. An exact
/// match wins; otherwise the first prefix match in store order.
pub(crate) fn exact_then_prefix<T>(
    kind: &'static str,
    name: &str,
    exact: impl FnOnce(&str) -> Result<Option<T>, StorageError>,
    prefix: impl FnOnce(&str) -> Result<Vec<T>, StorageError>,
) -> ServiceResult<Option<T>> {
    if name.is_empty() {
        return Ok(None);
    }

    if let Some(found) = exact(name)? {
        return Ok(Some(found));
    }

    let candidates = prefix(name)?;
    tracing::debug!(
        kind,
        name,
        candidates = candidates.len(),
        "no exact match, falling back to prefix"
    );
    Ok(candidates.into_iter().next())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_name_skips_the_store() {
        let result = exact_then_prefix::<i32>(
            "species",
            "",
            |_| panic!("exact lookup must not run"),
            |_| panic!("prefix lookup must not run"),
        )
        .unwrap();
        assert_eq!(result, None);
    }

    #[test]
    fn exact_match_short_circuits() {
        let result = exact_then_prefix(
            "species",
            "Pikachu",
            |_| Ok(Some(1)),
            |_| panic!("prefix lookup must not run"),
        )
        .unwrap();
        assert_eq!(result, Some(1));
    }

    #[test]
    fn prefix_takes_first_candidate() {
        let result =
            exact_then_prefix("species", "Pika", |_| Ok(None), |_| Ok(vec![7, 3])).unwrap();
        assert_eq!(result, Some(7));
    }

    #[test]
    fn storage_errors_propagate() {
        let result = exact_then_prefix::<i32>(
            "species",
            "Pikachu",
            |_| {
                Err(StorageError::AmbiguousResult {
                    key: "species.name=Pikachu".to_string(),
                    count: 2,
                })
            },
            |_| Ok(vec![]),
        );
        assert!(result.unwrap_err().is_client_error());
    }
}

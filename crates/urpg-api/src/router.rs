//! Router: `(method, path)` → `ApiResponse`.
//!
//! Routes (relative to the configured base path):
//! - `GET /pokemon`: all species names
//! - `GET /pokemon/{name}`: species page by exact or prefix name
//! - `GET /pokemon/dex/{dexno}`: species page by catalog index
//! - `GET /ability/{name}`, `GET /attack/{name}`

use std::sync::Arc;

use urpg_service::{AbilityService, AttackService, SpeciesService};

use crate::errors::{ApiError, ApiResult};
use crate::path::segments;
use crate::response::ApiResponse;

#[derive(Debug, Clone, PartialEq, Eq)]
enum Route {
    SpeciesNames,
    SpeciesByName(String),
    SpeciesByDexno(String),
    AbilityByName(String),
    AttackByName(String),
}

impl Route {
    fn parse(segments: Vec<String>) -> Option<Self> {
        let mut parts = segments.into_iter();
        let resource = parts.next()?;
        let first = parts.next();
        let second = parts.next();
        if parts.next().is_some() {
            return None;
        }

        match (resource.as_str(), first, second) {
            ("pokemon", None, None) => Some(Route::SpeciesNames),
            ("pokemon", Some(dex), Some(dexno)) if dex == "dex" => {
                Some(Route::SpeciesByDexno(dexno))
            }
            ("pokemon", Some(name), None) => Some(Route::SpeciesByName(name)),
            ("ability", Some(name), None) => Some(Route::AbilityByName(name)),
            ("attack", Some(name), None) => Some(Route::AttackByName(name)),
            _ => None,
        }
    }
}

/// Dispatches requests to the lookup services.
pub struct Router {
    species: Arc<SpeciesService>,
    abilities: Arc<AbilityService>,
    attacks: Arc<AttackService>,
    base_path: String,
}

impl Router {
    pub fn new(
        species: Arc<SpeciesService>,
        abilities: Arc<AbilityService>,
        attacks: Arc<AttackService>,
    ) -> Self {
        Self {
            species,
            abilities,
            attacks,
            base_path: "/".to_string(),
        }
    }

    /// Mount the routes under `base_path` (e.g. `/api`).
    pub fn with_base_path(mut self, base_path: impl Into<String>) -> Self {
        self.base_path = base_path.into();
        self
    }

    pub fn base_path(&self) -> &str {
        &self.base_path
    }

    /// Handle one request. Never fails: errors become error responses.
    pub fn handle(&self, method: &str, path: &str) -> ApiResponse {
        match self.route(method, path) {
            Ok(response) => {
                tracing::debug!(method, path, status = response.status, "handled request");
                response
            }
            Err(err) => {
                let response = ApiResponse::from_error(&err);
                if response.status >= 500 {
                    tracing::warn!(method, path, error = %err, "request failed");
                } else {
                    tracing::debug!(method, path, status = response.status, error = %err, "request rejected");
                }
                response
            }
        }
    }

    fn route(&self, method: &str, path: &str) -> ApiResult<ApiResponse> {
        let not_found = || ApiError::NotFound {
            path: path.to_string(),
        };

        let segments = segments(path, &self.base_path)?.ok_or_else(not_found)?;
        let route = Route::parse(segments).ok_or_else(not_found)?;

        if method != "GET" {
            return Err(ApiError::MethodNotAllowed {
                method: method.to_string(),
                path: path.to_string(),
            });
        }

        match route {
            Route::SpeciesNames => ApiResponse::ok(&self.species.find_all_names()?),
            Route::SpeciesByName(name) => found_or_404(self.species.find_by_name(&name)?),
            Route::SpeciesByDexno(raw) => {
                let dexno = raw.parse::<i32>().map_err(|_| ApiError::InvalidRequest {
                    message: format!("dexno must be an integer, got '{raw}'"),
                })?;
                found_or_404(self.species.find_by_dexno(dexno)?)
            }
            Route::AbilityByName(name) => found_or_404(self.abilities.find_by_name(&name)?),
            Route::AttackByName(name) => found_or_404(self.attacks.find_by_name(&name)?),
        }
    }
}

fn found_or_404<T: serde::Serialize>(value: Option<T>) -> ApiResult<ApiResponse> {
    match value {
        Some(v) => ApiResponse::ok(&v),
        None => Ok(ApiResponse::not_found()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(path: &str) -> Option<Route> {
        Route::parse(segments(path, "/").unwrap().unwrap())
    }

    #[test]
    fn parses_known_routes() {
        assert_eq!(parse("/pokemon"), Some(Route::SpeciesNames));
        assert_eq!(
            parse("/pokemon/Pikachu"),
            Some(Route::SpeciesByName("Pikachu".to_string()))
        );
        assert_eq!(
            parse("/pokemon/dex/25"),
            Some(Route::SpeciesByDexno("25".to_string()))
        );
        assert_eq!(
            parse("/ability/Static"),
            Some(Route::AbilityByName("Static".to_string()))
        );
        assert_eq!(
            parse("/attack/Volt%20Tackle"),
            Some(Route::AttackByName("Volt Tackle".to_string()))
        );
    }

    #[test]
    fn rejects_unknown_routes() {
        assert_eq!(parse("/"), None);
        assert_eq!(parse("/trainer/Red"), None);
        assert_eq!(parse("/pokemon/Pikachu/moves"), None);
        assert_eq!(parse("/pokemon/dex/25/extra"), None);
        assert_eq!(parse("/ability"), None);
    }
}

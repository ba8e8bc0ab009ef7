//! Solver configuration.

use serde::{Deserialize, Serialize};

use crate::constructive::{Method, VogelFallback};

/// Configuration for [`solve`](super::solve).
///
/// Deserializes with every field optional; missing fields take their
/// defaults.
///
/// # Examples
///
/// ```
/// use u_transport::constructive::{Method, VogelFallback};
/// use u_transport::solver::SolverConfig;
///
/// let config = SolverConfig::default()
///     .with_methods(vec![Method::Vogel])
///     .with_vogel_fallback(VogelFallback::MinimumCost);
/// assert_eq!(config.methods, vec![Method::Vogel]);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SolverConfig {
    /// Methods to run, in report order. Duplicates are run once.
    pub methods: Vec<Method>,
    /// Behavior of VAM when no origin has a penalty but supply remains.
    pub vogel_fallback: VogelFallback,
}

impl Default for SolverConfig {
    fn default() -> Self {
        Self {
            methods: Method::ALL.to_vec(),
            vogel_fallback: VogelFallback::Stop,
        }
    }
}

impl SolverConfig {
    /// Sets the methods to run.
    pub fn with_methods(mut self, methods: Vec<Method>) -> Self {
        self.methods = methods;
        self
    }

    /// Sets the VAM fallback.
    pub fn with_vogel_fallback(mut self, fallback: VogelFallback) -> Self {
        self.vogel_fallback = fallback;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_runs_all_methods() {
        let config = SolverConfig::default();
        assert_eq!(
            config.methods,
            vec![Method::NorthwestCorner, Method::MinimumCost, Method::Vogel]
        );
        assert_eq!(config.vogel_fallback, VogelFallback::Stop);
    }

    #[test]
    fn test_deserialize_partial() {
        let config: SolverConfig =
            serde_json::from_str(r#"{"vogel_fallback": "minimum_cost"}"#).expect("valid json");
        assert_eq!(config.vogel_fallback, VogelFallback::MinimumCost);
        assert_eq!(config.methods.len(), 3);
    }

    #[test]
    fn test_deserialize_methods() {
        let config: SolverConfig =
            serde_json::from_str(r#"{"methods": ["vogel", "northwest_corner"]}"#)
                .expect("valid json");
        assert_eq!(config.methods, vec![Method::Vogel, Method::NorthwestCorner]);
        assert_eq!(config.vogel_fallback, VogelFallback::Stop);
    }
}

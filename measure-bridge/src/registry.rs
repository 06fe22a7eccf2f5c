//! Bridge Registry

use std::collections::{HashMap, HashSet};
use std::sync::Arc;

use measure_core::{Scalar, UnitError};
use measure_units::{CubicMetre, Density, Kilogram, Liter, Percentage, Tonne};

use crate::{BridgeMeta, ExternalValue, ScalarBridge, UnitBridge, ValueKind};

/// Suggestions below this score are noise
const MIN_SUGGESTION_SCORE: usize = 10;
const MAX_SUGGESTIONS: usize = 5;

/// Bridges keyed by unit name and symbol (case-insensitive)
#[derive(Clone, Default)]
pub struct BridgeRegistry {
    bridges: HashMap<String, Arc<dyn UnitBridge>>,
}

impl BridgeRegistry {
    pub fn new() -> Self {
        Self {
            bridges: HashMap::new(),
        }
    }

    pub fn with_bridge<B: UnitBridge + 'static>(mut self, bridge: B) -> Self {
        let meta = bridge.meta();
        let bridge: Arc<dyn UnitBridge> = Arc::new(bridge);
        self.bridges.insert(meta.name.to_lowercase(), Arc::clone(&bridge));
        self.bridges.insert(meta.symbol.to_lowercase(), bridge);
        self
    }

    pub fn with_unit<T: Scalar>(self) -> Self {
        self.with_bridge(ScalarBridge::<T>::new())
    }

    pub fn get(&self, unit: &str) -> Option<&dyn UnitBridge> {
        self.bridges.get(&unit.trim().to_lowercase()).map(|b| b.as_ref())
    }

    /// Like `get`, but reports similar names when the unit is unknown
    pub fn lookup(&self, unit: &str) -> Result<&dyn UnitBridge, UnitError> {
        self.get(unit).ok_or_else(|| {
            let suggestions = self.find_similar(unit);
            tracing::debug!(unit, ?suggestions, "no bridge registered");
            UnitError::unknown_unit(unit, suggestions)
        })
    }

    /// Read `source` as `unit`, then write it out as `destination`
    pub fn convert(
        &self,
        unit: &str,
        source: &ExternalValue,
        destination: ValueKind,
    ) -> Result<ExternalValue, UnitError> {
        self.lookup(unit)?.convert(source, destination)
    }

    /// Registered units, one entry per bridge, sorted by name
    pub fn units(&self) -> Vec<BridgeMeta> {
        let mut seen = HashSet::new();
        let mut units: Vec<BridgeMeta> = self
            .bridges
            .values()
            .map(|b| b.meta())
            .filter(|meta| seen.insert(meta.name))
            .collect();
        units.sort_by(|a, b| a.name.cmp(b.name));
        units
    }

    /// Registered keys similar to `unit`, best match first
    fn find_similar(&self, unit: &str) -> Vec<String> {
        let query = unit.trim().to_lowercase();
        let mut matches: Vec<(&String, usize)> = self
            .bridges
            .keys()
            .map(|key| (key, Self::similarity_score(&query, key)))
            .filter(|(_, score)| *score >= MIN_SUGGESTION_SCORE)
            .collect();

        matches.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(b.0)));
        matches
            .into_iter()
            .take(MAX_SUGGESTIONS)
            .map(|(key, _)| key.clone())
            .collect()
    }

    fn similarity_score(query: &str, candidate: &str) -> usize {
        if query.is_empty() {
            return 0;
        }

        let mut score = 0;

        if candidate.starts_with(query) {
            score += 100;
        } else if candidate.contains(query) {
            score += 50;
        } else if query.contains(candidate) {
            score += 30;
        }

        let query_chars: HashSet<char> = query.chars().collect();
        let candidate_chars: HashSet<char> = candidate.chars().collect();
        let common = query_chars.intersection(&candidate_chars).count();
        score += common * 2;

        let len_diff = query.len().abs_diff(candidate.len());
        if len_diff < 5 && score > 0 {
            score += 5 - len_diff;
        }

        score
    }
}

/// Register bridges for every unit type
pub fn load_unit_bridges(registry: BridgeRegistry) -> BridgeRegistry {
    registry
        // Mass
        .with_unit::<Kilogram>()
        .with_unit::<Tonne>()
        // Volume
        .with_unit::<Liter>()
        .with_unit::<CubicMetre>()
        // Derived
        .with_unit::<Density>()
        .with_unit::<Percentage>()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn registry() -> BridgeRegistry {
        load_unit_bridges(BridgeRegistry::new())
    }

    #[test]
    fn test_lookup_by_name_and_symbol() {
        let registry = registry();
        assert_eq!(registry.get("kilogram").unwrap().meta().symbol, "kg");
        assert_eq!(registry.get("KG").unwrap().meta().name, "kilogram");
        assert_eq!(registry.get("L").unwrap().meta().name, "liter");
        assert_eq!(registry.get(" m3 ").unwrap().meta().name, "cubic metre");
        assert_eq!(registry.get("kg/m3").unwrap().meta().name, "density");
        assert_eq!(registry.get("%").unwrap().meta().name, "percentage");
    }

    #[test]
    fn test_units() {
        let names: Vec<&str> = registry().units().iter().map(|m| m.name).collect();
        assert_eq!(
            names,
            vec!["cubic metre", "density", "kilogram", "liter", "percentage", "tonne"]
        );
    }

    #[test]
    fn test_convert() {
        let registry = registry();
        let out = registry
            .convert("tonne", &ExternalValue::from("1.5"), ValueKind::Double)
            .unwrap();
        assert_eq!(out, ExternalValue::Double(1.5));

        let out = registry.convert("%", &ExternalValue::Int(10), ValueKind::Text).unwrap();
        assert_eq!(out, ExternalValue::from("10 %"));
    }

    #[test]
    fn test_convert_propagates_bridge_errors() {
        let registry = registry();
        let err = registry.convert("kg", &ExternalValue::Bool(false), ValueKind::Text).unwrap_err();
        assert_eq!(err.code(), measure_core::codes::UNSUPPORTED_CONVERSION);

        let err = registry.convert("kg", &ExternalValue::from("1,5"), ValueKind::Text).unwrap_err();
        assert_eq!(err.code(), measure_core::codes::PARSE_ERROR);
    }

    #[test]
    fn test_unknown_unit_suggests() {
        let err = registry().lookup("kilo").err().unwrap();
        match err {
            UnitError::UnknownUnit { name, suggestions } => {
                assert_eq!(name, "kilo");
                assert_eq!(suggestions.first().map(String::as_str), Some("kilogram"));
            }
            other => panic!("unexpected error: {:?}", other),
        }
    }

    #[test]
    fn test_unknown_unit_without_suggestions() {
        let err = registry().lookup("zz").err().unwrap();
        assert_eq!(err, UnitError::unknown_unit("zz", vec![]));
    }

    #[test]
    fn test_shared_across_threads() {
        let registry = Arc::new(registry());
        let handles: Vec<_> = (0..4)
            .map(|i| {
                let registry = Arc::clone(&registry);
                std::thread::spawn(move || {
                    registry.convert("kg", &ExternalValue::Int(i), ValueKind::Double)
                })
            })
            .collect();
        for (i, handle) in handles.into_iter().enumerate() {
            let out = handle.join().unwrap().unwrap();
            assert_eq!(out, ExternalValue::Double(i as f64));
        }
    }
}

//! Rule registry
//!
//! Maps each variant to the rule that evaluates it. The standard registry
//! has a rule for every variant except `Police`, which has no legal
//! definition in this model.

use std::collections::HashMap;
use std::sync::Arc;

use crate::rules::{EligibilityRule, HazardousRule, PermanentRule, PointsRule, TeacherRule, TollRule};
use crate::variant::RuleVariant;

/// Rules keyed by the variant they implement
#[derive(Debug, Clone, Default)]
pub struct RuleRegistry {
    rules: HashMap<RuleVariant, Arc<dyn EligibilityRule>>,
}

impl RuleRegistry {
    /// Creates an empty registry
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry with the five implemented rules and a zero toll
    pub fn standard() -> Self {
        Self::new()
            .with_rule(PermanentRule)
            .with_rule(TollRule::default())
            .with_rule(PointsRule)
            .with_rule(TeacherRule)
            .with_rule(HazardousRule)
    }

    /// Registers a rule under its own variant, returning the rule it replaced
    pub fn register<R>(&mut self, rule: R) -> Option<Arc<dyn EligibilityRule>>
    where
        R: EligibilityRule + 'static,
    {
        self.rules.insert(rule.variant(), Arc::new(rule))
    }

    /// Builder form of [`register`](Self::register)
    pub fn with_rule<R>(mut self, rule: R) -> Self
    where
        R: EligibilityRule + 'static,
    {
        self.register(rule);
        self
    }

    pub fn get(&self, variant: RuleVariant) -> Option<Arc<dyn EligibilityRule>> {
        self.rules.get(&variant).cloned()
    }

    pub fn contains(&self, variant: RuleVariant) -> bool {
        self.rules.contains_key(&variant)
    }

    /// Registered variants in declaration order
    pub fn variants(&self) -> Vec<RuleVariant> {
        RuleVariant::ALL
            .into_iter()
            .filter(|variant| self.contains(*variant))
            .collect()
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core_kernel::ServiceDuration;

    #[test]
    fn test_standard_registry_omits_police() {
        let registry = RuleRegistry::standard();

        assert_eq!(registry.len(), 5);
        assert!(!registry.contains(RuleVariant::Police));
        assert_eq!(
            registry.variants(),
            vec![
                RuleVariant::Permanent,
                RuleVariant::TransitionToll,
                RuleVariant::TransitionPoints,
                RuleVariant::Teacher,
                RuleVariant::Hazardous,
            ]
        );
    }

    #[test]
    fn test_register_replaces_existing() {
        let mut registry = RuleRegistry::standard();
        let previous = registry.register(TollRule::new(ServiceDuration::new(1, 0, 0)));

        assert!(previous.is_some());
        assert_eq!(registry.len(), 5);
    }
}

//! Retirement rule variants

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::RetirementError;

/// The legal rule a simulation is evaluated under
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RuleVariant {
    /// Permanent rule for servants entering under the current regime
    #[serde(alias = "REGRA_PERMANENTE")]
    Permanent,
    /// Transition rule with an additional toll period
    #[serde(alias = "REGRA_TRANSICAO_PEDAGIO", alias = "REGRA_TRANSICAO_PEDÁGIO")]
    TransitionToll,
    /// Transition rule by points (age plus contribution)
    #[serde(alias = "REGRA_TRANSICAO_PONTOS")]
    TransitionPoints,
    /// Special rule for teachers
    #[serde(alias = "REGRA_ESPECIAL_PROFESSOR")]
    Teacher,
    /// Special rule for police officers
    #[serde(alias = "REGRA_ESPECIAL_POLICIAL")]
    Police,
    /// Special rule for hazardous service
    #[serde(alias = "REGRA_ESPECIAL_INSALUBRIDADE")]
    Hazardous,
}

impl RuleVariant {
    /// Every variant, in declaration order
    pub const ALL: [RuleVariant; 6] = [
        RuleVariant::Permanent,
        RuleVariant::TransitionToll,
        RuleVariant::TransitionPoints,
        RuleVariant::Teacher,
        RuleVariant::Police,
        RuleVariant::Hazardous,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            RuleVariant::Permanent => "permanent",
            RuleVariant::TransitionToll => "transition_toll",
            RuleVariant::TransitionPoints => "transition_points",
            RuleVariant::Teacher => "teacher",
            RuleVariant::Police => "police",
            RuleVariant::Hazardous => "hazardous",
        }
    }

    fn legacy_name(&self) -> &'static str {
        match self {
            RuleVariant::Permanent => "REGRA_PERMANENTE",
            RuleVariant::TransitionToll => "REGRA_TRANSICAO_PEDAGIO",
            RuleVariant::TransitionPoints => "REGRA_TRANSICAO_PONTOS",
            RuleVariant::Teacher => "REGRA_ESPECIAL_PROFESSOR",
            RuleVariant::Police => "REGRA_ESPECIAL_POLICIAL",
            RuleVariant::Hazardous => "REGRA_ESPECIAL_INSALUBRIDADE",
        }
    }

    /// Human readable summary of the rule
    pub fn description(&self) -> &'static str {
        match self {
            RuleVariant::Permanent => "Permanent rule",
            RuleVariant::TransitionToll => "Transition rule with toll",
            RuleVariant::TransitionPoints => "Transition rule by points",
            RuleVariant::Teacher => "Special rule for teachers",
            RuleVariant::Police => "Special rule for police officers",
            RuleVariant::Hazardous => "Special rule for hazardous service",
        }
    }
}

impl fmt::Display for RuleVariant {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for RuleVariant {
    type Err = RetirementError;

    /// Accepts the snake_case name in any case, with `-` or `_`, or the
    /// legacy upper-case name
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().replace('-', "_").replace('Á', "A");
        RuleVariant::ALL
            .into_iter()
            .find(|variant| {
                normalized.eq_ignore_ascii_case(variant.name())
                    || normalized.eq_ignore_ascii_case(variant.legacy_name())
            })
            .ok_or_else(|| RetirementError::unknown_variant(s))
    }
}

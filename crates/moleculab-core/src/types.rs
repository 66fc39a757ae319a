use serde::{Deserialize, Serialize};
use std::fmt;

/// How a candidate molecule was produced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum DiscoveryMethod {
    #[default]
    AiGenerated,
    Transformer,
    Gan,
    Vae,
    Reinforcement,
    NaturalProduct,
    Synthetic,
}

impl fmt::Display for DiscoveryMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            DiscoveryMethod::AiGenerated => "ai_generated",
            DiscoveryMethod::Transformer => "transformer",
            DiscoveryMethod::Gan => "gan",
            DiscoveryMethod::Vae => "vae",
            DiscoveryMethod::Reinforcement => "reinforcement",
            DiscoveryMethod::NaturalProduct => "natural_product",
            DiscoveryMethod::Synthetic => "synthetic",
        };
        write!(f, "{}", name)
    }
}

/// A caller-supplied reference to a molecule. All fields are optional; the
/// synthesizers fall back to fixed labels when nothing usable is present.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct MoleculeRef {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smiles: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
}

impl MoleculeRef {
    pub fn named(name: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            ..Self::default()
        }
    }

    /// Display name used for hash-based derivations: name, else SMILES,
    /// else a fixed fallback literal. Empty strings count as missing.
    pub fn display_name(&self) -> &str {
        self.first_label().unwrap_or("unknown")
    }

    /// Base label used for synthesis planning.
    pub fn base_label(&self) -> &str {
        self.first_label().unwrap_or("candidate")
    }

    fn first_label(&self) -> Option<&str> {
        self.name
            .as_deref()
            .filter(|s| !s.is_empty())
            .or_else(|| self.smiles.as_deref().filter(|s| !s.is_empty()))
    }
}

/// A generated candidate compound.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MoleculeCandidate {
    pub name: String,
    pub smiles: String,
    pub molecular_formula: String,
    /// Molecular weight in daltons.
    pub molecular_weight: f64,
    pub discovery_method: DiscoveryMethod,
    pub score: f64,
    pub confidence: f64,
}

/// Predicted interaction between a molecule and a protein target.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProteinInteraction {
    pub protein_name: String,
    /// kcal/mol; more negative is stronger.
    pub binding_affinity: f64,
    pub probability: f64,
    pub residues: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LipinskiProfile {
    pub rule_of_five_violations: u32,
    pub soluble: bool,
    pub permeable: bool,
}

/// ADMET-style toxicity summary for a molecule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ToxicityProfile {
    pub herg_risk: f64,
    /// Oral LD50 in rats, mg/kg.
    pub ld50_rat_oral: i64,
    pub lipinski: LipinskiProfile,
    pub alerts: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SynthesisStep {
    pub step_number: u32,
    pub action: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReactionConditions {
    pub step_number: u32,
    pub reagent: String,
    pub solvent: String,
    pub temperature_c: i32,
    pub time_hours: u32,
}

/// A proposed route paired with per-step conditions, joined by step number.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SynthesisPlan {
    pub route: Vec<SynthesisStep>,
    pub conditions: Vec<ReactionConditions>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeatureImportance {
    pub feature: String,
    pub importance: f64,
}

/// Model explanation: ranked feature importances plus a rationale sentence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Explanation {
    pub features: Vec<FeatureImportance>,
    pub text: String,
}

/// Result of molecule identification, tagged with where the answer came from.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IdentifiedMolecule {
    pub name: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub smiles: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub formula: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub weight: Option<f64>,
    /// Where the identification came from; filled in by the caller for
    /// provider-sourced payloads.
    #[serde(default)]
    pub source: String,
}

/// Whether a payload came from a configured provider or the synthetic path.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Provenance {
    Provider,
    Synthetic,
}

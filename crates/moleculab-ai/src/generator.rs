use moleculab_core::{round2, DiscoveryMethod, MoleculeCandidate, SeededRng};
use serde::Serialize;

/// Candidates produced per generation call.
pub const CANDIDATE_COUNT: usize = 3;

/// Skeleton every generated SMILES string is derived from. Mutation only
/// appends, so output length is always >= the skeleton length.
pub const BASE_SKELETON: &str = "CC(=O)OC1=CC=CC=C1C(=O)O";

const MUTATION_THRESHOLD: f64 = 0.97;

pub const NAME_PREFIXES: [&str; 7] = [
    "Nova-", "Quantum-", "Astra-", "Helio-", "Cerebra-", "Viva-", "Aether-",
];
pub const NAME_SUFFIXES: [&str; 6] = ["01", "12", "21", "42", "77", "90"];

/// Inputs to candidate generation. Doubles as the seed source: the canonical
/// JSON encoding of this struct determines the PRNG stream.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GenerationInput {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub target_disease: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub constraints: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub method: Option<DiscoveryMethod>,
}

/// Generate a fixed-size batch of candidate molecules for a target condition.
///
/// Deterministic: the same input yields the same candidates, in generation
/// order.
pub fn generate_candidates(input: &GenerationInput) -> Vec<MoleculeCandidate> {
    let mut rng = SeededRng::from_value(input);
    let method = input.method.unwrap_or_default();

    (0..CANDIDATE_COUNT)
        .map(|i| {
            let molecular_weight = round2(rng.in_range(150.0, 550.0));
            let score = round2(rng.in_range(0.6, 1.0));
            let confidence = round2(rng.in_range(0.6, 1.0));

            let prefix = NAME_PREFIXES[rng.index(NAME_PREFIXES.len())];
            let suffix = NAME_SUFFIXES[rng.index(NAME_SUFFIXES.len())];
            let name = format!("{}{}-{}", prefix, suffix, i + 1);

            let mut smiles = String::with_capacity(BASE_SKELETON.len() + 2);
            for c in BASE_SKELETON.chars() {
                smiles.push(c);
                if rng.next_f64() > MUTATION_THRESHOLD {
                    smiles.push('N');
                }
            }

            let molecular_formula = format!(
                "C{}H{}O{}",
                10 + rng.index(20),
                10 + rng.index(30),
                1 + rng.index(5)
            );

            MoleculeCandidate {
                name,
                smiles,
                molecular_formula,
                molecular_weight,
                discovery_method: method,
                score,
                confidence,
            }
        })
        .collect()
}

use moleculab_core::{json_seed, round2, MoleculeRef, ProteinInteraction, SeededRng};

/// Reference protein panel used when the caller does not supply targets.
pub const DEFAULT_TARGETS: [&str; 5] = ["ACE2", "Mpro", "NSP12", "DHFR", "HSP90"];

pub fn default_targets() -> Vec<String> {
    DEFAULT_TARGETS.iter().map(|t| t.to_string()).collect()
}

/// Predict binding interactions between a molecule and each target protein.
///
/// Output order matches the input target order; results are never sorted by
/// affinity. The seed folds together the molecule's serialized form and the
/// joined target list, so the same molecule/panel pair reproduces the same
/// predictions.
pub fn predict_interactions(
    molecule: &MoleculeRef,
    targets: &[String],
) -> Vec<ProteinInteraction> {
    let seed = (json_seed(molecule) + targets.join(",").len() as u32) % 1000;
    let mut rng = SeededRng::new(seed);

    targets
        .iter()
        .map(|protein| {
            let binding_affinity = round2(-6.0 - rng.next_f64() * 6.0);
            let probability = round2(rng.in_range(0.5, 1.0));
            let residue_count = 5 + rng.index(5);
            let residues = (0..residue_count)
                .map(|i| format!("RES{}:{}", rng.index(200), i))
                .collect();

            ProteinInteraction {
                protein_name: protein.clone(),
                binding_affinity,
                probability,
                residues,
            }
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspirin_default_panel_fixture() {
        let interactions =
            predict_interactions(&MoleculeRef::named("Aspirin"), &default_targets());
        assert_eq!(interactions.len(), 5);
        assert_eq!(interactions[0].protein_name, "ACE2");
        assert_eq!(interactions[0].binding_affinity, -7.52);
        assert_eq!(interactions[0].probability, 0.63);
        assert_eq!(interactions[0].residues.len(), 9);
        assert_eq!(interactions[0].residues[0], "RES59:0");
        assert_eq!(interactions[1].binding_affinity, -9.57);
    }

    #[test]
    fn output_order_matches_input_order() {
        let targets: Vec<String> = ["HSP90", "ACE2", "Mpro"]
            .iter()
            .map(|t| t.to_string())
            .collect();
        let interactions = predict_interactions(&MoleculeRef::named("Aspirin"), &targets);
        let names: Vec<&str> = interactions
            .iter()
            .map(|i| i.protein_name.as_str())
            .collect();
        assert_eq!(names, vec!["HSP90", "ACE2", "Mpro"]);
    }

    #[test]
    fn predictions_are_deterministic() {
        let molecule = MoleculeRef::named("Ibuprofen");
        let targets = default_targets();
        let a = predict_interactions(&molecule, &targets);
        let b = predict_interactions(&molecule, &targets);
        assert_eq!(a, b);
    }

    #[test]
    fn values_respect_documented_ranges() {
        let molecule = MoleculeRef {
            smiles: Some("CC(C)CC1=CC=C(C=C1)C(C)C(=O)O".to_string()),
            ..MoleculeRef::default()
        };
        for interaction in predict_interactions(&molecule, &default_targets()) {
            assert!((-12.0..=-6.0).contains(&interaction.binding_affinity));
            assert!((0.5..=1.0).contains(&interaction.probability));
            assert!((5..=9).contains(&interaction.residues.len()));
            for (i, residue) in interaction.residues.iter().enumerate() {
                let (pos, idx) = residue
                    .strip_prefix("RES")
                    .and_then(|r| r.split_once(':'))
                    .expect("residue marker format");
                assert!(pos.parse::<u32>().unwrap() < 200);
                assert_eq!(idx, i.to_string());
            }
        }
    }

    #[test]
    fn empty_targets_yield_no_interactions() {
        let interactions = predict_interactions(&MoleculeRef::named("Aspirin"), &[]);
        assert!(interactions.is_empty());
    }
}

use moleculab_core::{fold_hash, round2, LipinskiProfile, MoleculeRef, ToxicityProfile};

/// Fixed vocabulary of structural alert labels.
pub const STRUCTURAL_ALERTS: [&str; 2] = ["PAINS-A", "Reactive center"];

/// Derive a toxicity/ADMET profile for a molecule.
///
/// Every field is a direct function of the rolling hash of the molecule's
/// display name. This path deliberately does not touch the LCG; it is a
/// separate deterministic mapping with its own reproducibility contract.
pub fn assess_toxicity(molecule: &MoleculeRef) -> ToxicityProfile {
    let hash = fold_hash(molecule.display_name());

    let herg_risk = round2(0.1 + f64::from((hash % 7).abs()) / 10.0);
    let ld50_rat_oral =
        (50.0 + (hash.unsigned_abs() % 1000) as f64 / 1000.0 * 1950.0).round() as i64;

    let lipinski = LipinskiProfile {
        rule_of_five_violations: (hash % 3).unsigned_abs(),
        soluble: hash & 1 == 0,
        permeable: hash & 2 == 0,
    };

    let alert_count = (hash % 2).unsigned_abs() as usize;
    let alerts = STRUCTURAL_ALERTS[..alert_count]
        .iter()
        .map(|a| a.to_string())
        .collect();

    ToxicityProfile {
        herg_risk,
        ld50_rat_oral,
        lipinski,
        alerts,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn aspirin_fixture() {
        let profile = assess_toxicity(&MoleculeRef::named("Aspirin"));
        assert_eq!(profile.herg_risk, 0.6);
        assert_eq!(profile.ld50_rat_oral, 1633);
        assert_eq!(profile.lipinski.rule_of_five_violations, 1);
        assert!(profile.lipinski.soluble);
        assert!(profile.lipinski.permeable);
        assert!(profile.alerts.is_empty());
    }

    #[test]
    fn assessment_is_deterministic() {
        let molecule = MoleculeRef::named("Paracetamol");
        assert_eq!(assess_toxicity(&molecule), assess_toxicity(&molecule));
    }

    #[test]
    fn smiles_is_used_when_name_is_missing() {
        let by_smiles = MoleculeRef {
            smiles: Some("CC(=O)OC1=CC=CC=C1C(=O)O".to_string()),
            ..MoleculeRef::default()
        };
        let by_name = MoleculeRef::named("CC(=O)OC1=CC=CC=C1C(=O)O");
        assert_eq!(assess_toxicity(&by_smiles), assess_toxicity(&by_name));
    }

    #[test]
    fn anonymous_molecule_uses_fallback_label() {
        let empty = assess_toxicity(&MoleculeRef::default());
        let unknown = assess_toxicity(&MoleculeRef::named("unknown"));
        assert_eq!(empty, unknown);
    }

    #[test]
    fn values_respect_documented_ranges() {
        for name in ["Aspirin", "Ibuprofen", "Caffeine", "Quinine", "x", ""] {
            let profile = assess_toxicity(&MoleculeRef::named(name));
            assert!((0.1..=0.7).contains(&profile.herg_risk));
            assert!((50..=2000).contains(&profile.ld50_rat_oral));
            assert!(profile.lipinski.rule_of_five_violations <= 2);
            assert!(profile.alerts.len() <= 1);
        }
    }
}

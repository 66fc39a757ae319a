use moleculab_core::IdentifiedMolecule;
use once_cell::sync::Lazy;
use reqwest::Client;
use serde::Deserialize;
use std::collections::HashMap;

struct BuiltinMolecule {
    name: &'static str,
    formula: &'static str,
    smiles: &'static str,
    weight: Option<f64>,
}

static BUILTIN_MOLECULES: Lazy<HashMap<&'static str, BuiltinMolecule>> = Lazy::new(|| {
    let mut table = HashMap::new();
    // Inorganics
    table.insert(
        "ammonia",
        BuiltinMolecule {
            name: "Ammonia",
            formula: "NH3",
            smiles: "N",
            weight: Some(17.031),
        },
    );
    table.insert(
        "nh3",
        BuiltinMolecule {
            name: "Ammonia",
            formula: "NH3",
            smiles: "N",
            weight: Some(17.031),
        },
    );
    // Organics
    table.insert(
        "aspirin",
        BuiltinMolecule {
            name: "Aspirin",
            formula: "C9H8O4",
            smiles: "CC(=O)OC1=CC=CC=C1C(=O)O",
            weight: Some(180.16),
        },
    );
    table.insert(
        "paracetamol",
        BuiltinMolecule {
            name: "Paracetamol",
            formula: "C8H9NO2",
            smiles: "CC(=O)NC1=CC=C(O)C=C1",
            weight: Some(151.16),
        },
    );
    table.insert(
        "ibuprofen",
        BuiltinMolecule {
            name: "Ibuprofen",
            formula: "C13H18O2",
            smiles: "CC(C)CC1=CC=C(C=C1)C(C)C(=O)O",
            weight: Some(206.28),
        },
    );
    table.insert(
        "caffeine",
        BuiltinMolecule {
            name: "Caffeine",
            formula: "C8H10N4O2",
            smiles: "Cn1cnc2n(C)c(=O)n(C)c(=O)c12",
            weight: Some(194.19),
        },
    );
    table.insert(
        "quinine",
        BuiltinMolecule {
            name: "Quinine",
            formula: "C20H24N2O2",
            smiles: "CC[C@H]1C[C@@H]2C(=O)Nc3ccccc3C2=O",
            weight: Some(324.42),
        },
    );
    table
});

/// Identify a molecule from a free-text query without an external provider.
///
/// Resolution order: builtin table of common molecules, SMILES heuristic,
/// best-effort public lookups (OPSIN, PubChem), then a bare name record.
/// Public lookup failures are absorbed; the function always returns a
/// result.
pub async fn resolve_molecule(http: &Client, query: &str) -> IdentifiedMolecule {
    let q = query.trim();
    let key = q.to_lowercase();

    if let Some(hit) = BUILTIN_MOLECULES.get(key.as_str()) {
        return IdentifiedMolecule {
            name: hit.name.to_string(),
            smiles: Some(hit.smiles.to_string()),
            formula: Some(hit.formula.to_string()),
            weight: hit.weight,
            source: "builtin".to_string(),
        };
    }

    if is_smiles_like(q) {
        return IdentifiedMolecule {
            name: "Unknown (SMILES)".to_string(),
            smiles: Some(q.to_string()),
            formula: Some(formula_from_smiles(q)),
            weight: None,
            source: "heuristic".to_string(),
        };
    }

    // Assume a plain name and try the public services.
    let (opsin, pubchem) = tokio::join!(opsin_lookup(http, q), pubchem_lookup(http, q));
    let resolved = opsin.is_some() || pubchem.is_some();
    let (smiles, opsin_formula) = opsin.unzip();
    let (pubchem_formula, weight) = pubchem.unzip();

    IdentifiedMolecule {
        name: q.to_string(),
        smiles,
        formula: opsin_formula.flatten().or(pubchem_formula),
        weight: weight.flatten(),
        source: if resolved { "public" } else { "name" }.to_string(),
    }
}

/// A query looks like SMILES when it carries letters plus bond or branch
/// punctuation.
fn is_smiles_like(q: &str) -> bool {
    q.chars().any(|c| c.is_ascii_alphabetic()) && q.chars().any(|c| matches!(c, '=' | '(' | ')'))
}

/// Count element symbols (uppercase letter plus optional lowercase) in
/// first-appearance order.
fn formula_from_smiles(smiles: &str) -> String {
    let mut symbols: Vec<(String, u32)> = Vec::new();
    let mut chars = smiles.chars().peekable();
    while let Some(c) = chars.next() {
        if !c.is_ascii_uppercase() {
            continue;
        }
        let mut symbol = c.to_string();
        if let Some(next) = chars.peek() {
            if next.is_ascii_lowercase() {
                symbol.push(*next);
                chars.next();
            }
        }
        match symbols.iter_mut().find(|(s, _)| *s == symbol) {
            Some((_, count)) => *count += 1,
            None => symbols.push((symbol, 1)),
        }
    }

    symbols
        .into_iter()
        .map(|(symbol, count)| {
            if count > 1 {
                format!("{}{}", symbol, count)
            } else {
                symbol
            }
        })
        .collect()
}

async fn opsin_lookup(http: &Client, name: &str) -> Option<(String, Option<String>)> {
    #[derive(Deserialize)]
    struct OpsinResponse {
        smiles: Option<String>,
        formula: Option<String>,
    }

    let url = format!(
        "https://opsin.ch.cam.ac.uk/opsin/{}.json",
        encode_component(name)
    );
    let response = http.get(url).send().await.ok()?;
    if !response.status().is_success() {
        return None;
    }
    let body: OpsinResponse = response.json().await.ok()?;
    body.smiles.map(|smiles| (smiles, body.formula))
}

async fn pubchem_lookup(http: &Client, name: &str) -> Option<(String, Option<f64>)> {
    #[derive(Deserialize)]
    struct PubchemResponse {
        #[serde(rename = "PropertyTable")]
        property_table: PropertyTable,
    }
    #[derive(Deserialize)]
    struct PropertyTable {
        #[serde(rename = "Properties")]
        properties: Vec<PubchemProperties>,
    }
    #[derive(Deserialize)]
    struct PubchemProperties {
        #[serde(rename = "MolecularFormula")]
        molecular_formula: Option<String>,
        // PubChem serves weights as JSON strings.
        #[serde(rename = "MolecularWeight")]
        molecular_weight: Option<serde_json::Value>,
    }

    let url = format!(
        "https://pubchem.ncbi.nlm.nih.gov/rest/pug/compound/name/{}/property/MolecularFormula,MolecularWeight/JSON",
        encode_component(name)
    );
    let response = http.get(url).send().await.ok()?;
    if !response.status().is_success() {
        return None;
    }
    let body: PubchemResponse = response.json().await.ok()?;
    let props = body.property_table.properties.into_iter().next()?;
    let weight = props.molecular_weight.and_then(|value| {
        value
            .as_f64()
            .or_else(|| value.as_str().and_then(|s| s.parse().ok()))
    });
    props.molecular_formula.map(|formula| (formula, weight))
}

fn encode_component(value: &str) -> String {
    value
        .bytes()
        .map(|b| match b {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' => {
                (b as char).to_string()
            }
            _ => format!("%{:02X}", b),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn http() -> Client {
        Client::new()
    }

    #[tokio::test]
    async fn builtin_names_resolve_case_insensitively() {
        let molecule = resolve_molecule(&http(), "  Aspirin ").await;
        assert_eq!(molecule.name, "Aspirin");
        assert_eq!(molecule.formula.as_deref(), Some("C9H8O4"));
        assert_eq!(molecule.smiles.as_deref(), Some("CC(=O)OC1=CC=CC=C1C(=O)O"));
        assert_eq!(molecule.weight, Some(180.16));
        assert_eq!(molecule.source, "builtin");
    }

    #[tokio::test]
    async fn smiles_queries_use_the_heuristic() {
        let molecule = resolve_molecule(&http(), "CC(=O)OC1=CC=CC=C1C(=O)O").await;
        assert_eq!(molecule.name, "Unknown (SMILES)");
        assert_eq!(molecule.formula.as_deref(), Some("C9O4"));
        assert_eq!(molecule.source, "heuristic");
        assert!(molecule.weight.is_none());
    }

    #[test]
    fn formula_counts_two_letter_symbols() {
        assert_eq!(formula_from_smiles("ClCCl"), "Cl2C");
        assert_eq!(formula_from_smiles("CCO"), "C2O");
    }

    #[test]
    fn smiles_detection_requires_bond_punctuation() {
        assert!(is_smiles_like("CC(=O)O"));
        assert!(!is_smiles_like("benzatropine"));
        assert!(!is_smiles_like("12345"));
    }

    #[test]
    fn encode_component_escapes_reserved_bytes() {
        assert_eq!(encode_component("methyl salicylate"), "methyl%20salicylate");
        assert_eq!(encode_component("Aspirin"), "Aspirin");
    }
}

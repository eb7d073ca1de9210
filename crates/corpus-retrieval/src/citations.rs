//! Static citation registry mapping rule keys to regulatory references.

use lazy_static::lazy_static;
use std::collections::HashMap;

lazy_static! {
    static ref CITATION_REGISTRY: HashMap<&'static str, &'static str> = {
        let mut m = HashMap::new();
        m.insert(
            "companies_regulations_formation",
            "[CR2020] Companies Regulations 2020 — Formation & Registration documents",
        );
        m.insert(
            "companies_registrations_registered_office",
            "[CR2020-RO] Companies Regulations 2020 — Registered Office in ADGM",
        );
        m.insert(
            "checklist_registered_office",
            "[CHK] ADGM Registration & Incorporation checklist — Registered office details",
        );
        m.insert(
            "checklist_evidence_of_appointment",
            "[CHK] ADGM checklist — Evidence of appointment / signatures",
        );
        m.insert(
            "employment_regulations_minimums",
            "[ER2024] Employment Regulations 2024 — Minimum contents of employment contract",
        );
        m.insert(
            "employment_standard_template",
            "[TEMP2025] ADGM Standard Employment Contract Template (2025)",
        );
        m.insert(
            "companies_best_practices_drafting",
            "[BP] ADGM drafting best practices — definitions, numbering, cross-references",
        );
        m.insert(
            "adgm_courts",
            "[COURTS] ADGM Courts jurisdiction guidance",
        );
        m
    };
}

/// Resolve rule keys to citation strings, preserving order.
/// Unregistered keys are echoed back so an issue never loses its source.
pub fn cite(keys: &[&str]) -> Vec<String> {
    keys.iter()
        .map(|&key| match CITATION_REGISTRY.get(key) {
            Some(citation) => (*citation).to_string(),
            None => key.to_string(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_registered_keys_in_order() {
        let cites = cite(&["companies_regulations_formation", "adgm_courts"]);
        assert_eq!(cites.len(), 2);
        assert!(cites[0].starts_with("[CR2020]"));
        assert!(cites[1].starts_with("[COURTS]"));
    }

    #[test]
    fn echoes_unregistered_keys() {
        let cites = cite(&["no_such_rule"]);
        assert_eq!(cites, vec!["no_such_rule".to_string()]);
    }
}

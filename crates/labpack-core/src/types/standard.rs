//! Installed-standard models returned by `GET Standards`.

use serde::{Deserialize, Serialize};

/// A standard installed on the platform and the versions it accepts
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "PascalCase")]
pub struct StandardInfo {
    /// Standard name, e.g. "cloudshell_firewall_standard"
    pub standard_name: String,
    /// Supported versions, in the server's order
    pub versions: Vec<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_standard_info_decodes_with_version_order() {
        let json = r#"{
            "StandardName": "cloudshell_firewall_standard",
            "Versions": ["3.0.0", "3.0.1"]
        }"#;

        let standard: StandardInfo = serde_json::from_str(json).unwrap();

        assert_eq!(standard.standard_name, "cloudshell_firewall_standard");
        assert_eq!(standard.versions, vec!["3.0.0", "3.0.1"]);
    }

    #[test]
    fn test_standard_list_decodes() {
        let json = r#"[
            {"StandardName": "cloudshell_firewall_standard", "Versions": ["3.0.0", "3.0.1", "3.0.2"]},
            {"StandardName": "cloudshell_networking_standard", "Versions": ["5.0.0", "5.0.1", "5.0.2", "5.0.3", "5.0.4"]}
        ]"#;

        let standards: Vec<StandardInfo> = serde_json::from_str(json).unwrap();

        assert_eq!(standards.len(), 2);
        assert_eq!(standards[0].standard_name, "cloudshell_firewall_standard");
        assert_eq!(standards[1].versions.len(), 5);
    }
}

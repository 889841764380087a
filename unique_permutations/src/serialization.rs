use serde::{Deserialize, Serialize};

/// Summary of one enumeration run, suitable for JSON export.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct PermutationReport {
    /// The (already normalized) input the permutations were derived from.
    pub input: String,
    /// All unique permutations in strictly increasing lexicographic order.
    pub permutations: Vec<String>,
    /// Number of unique permutations.
    pub total: usize,
}

impl PermutationReport {
    pub fn new(input: String, permutations: Vec<String>) -> Self {
        let total = permutations.len();
        PermutationReport {
            input,
            permutations,
            total,
        }
    }
}

/// Serializes a report to a JSON string.
pub fn serialize_report(report: &PermutationReport) -> String {
    serde_json::to_string(report).expect("Failed to serialize PermutationReport")
}

/// Deserializes a report from a JSON string.
pub fn deserialize_report(serialized: &str) -> Result<PermutationReport, serde_json::Error> {
    serde_json::from_str(serialized)
}

use serde::{Deserialize, Serialize};

/// How the displayed stock subset is chosen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum SelectionMode {
    /// Top N constituents by price
    TopN,
    /// Explicit manual picks
    Manual,
}

impl Default for SelectionMode {
    fn default() -> Self {
        SelectionMode::TopN
    }
}

use serde::{Deserialize, Serialize};

/// The chemical formula of a structure in the three spellings producers emit.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Formula {
    /// The reduced formula (e.g., "SiO2").
    pub reduced: String,
    /// The full composition string (e.g., "Si4 O8").
    pub pretty: String,
    /// The anonymized formula (e.g., "AB2").
    pub anonymous: String,
}

/// Space group identification as reported by the producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SpaceGroup {
    /// The Hermann-Mauguin symbol, or "Unknown" when not determined.
    pub symbol: String,
    /// The international space group number, when determined.
    pub number: Option<i32>,
}

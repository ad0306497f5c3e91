use serde::{Deserialize, Serialize};

/// Line span of a contract unit within its source file. 1-based, inclusive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SourceLines {
    pub start: u32,
    pub end: u32,
}

/// One analyzed contract unit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ContractInfo {
    pub name: String,
    pub source_file: String,
    pub source_lines: SourceLines,
    pub is_upgradeable: bool,
}

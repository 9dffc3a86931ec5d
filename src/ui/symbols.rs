//! UI symbols (markers, labels)

/// Commit markers in the commit list
pub mod markers {
    /// Selected commit (●)
    pub const SELECTED: char = '●';
    /// Commit the selection is compared against (◆)
    pub const PREVIOUS: char = '◆';
    /// Any other commit (○)
    pub const NORMAL: char = '○';
}

/// Empty state indicators
pub mod empty {
    /// Label for commits whose message lists no data file
    pub const NO_FILE: &str = "(no data file)";
    /// Label for the oldest commit's predecessor
    pub const NO_PREVIOUS: &str = "no earlier commit";
}

//! Central constants for the gistbar application

/// Environment variables read once at startup
pub mod env {
    /// Access token used for all GitHub API calls
    pub const GH_TOKEN: &str = "GH_TOKEN";

    /// Account whose repositories are aggregated
    pub const GH_USERNAME: &str = "GH_USERNAME";

    /// Identifier of the gist the report is written into
    pub const GIST_ID: &str = "GIST_ID";

    /// Comma-separated language names excluded from the report
    pub const EXCLUDE: &str = "EXCLUDE";

    /// Comma-separated repository full names excluded from aggregation
    pub const EXCLUDE_REPO: &str = "EXCLUDE_REPO";
}

/// Report geometry
pub mod chart {
    /// Number of cells in a bar
    pub const BAR_WIDTH: usize = 20;

    /// Width of the language label column, trailing space included
    pub const LABEL_WIDTH: usize = 12;

    /// Width of the right-aligned percentage column
    pub const PERCENT_WIDTH: usize = 6;

    /// Filled bar cell
    pub const FILLED: &str = "█";

    /// Empty bar cell
    pub const EMPTY: &str = "░";
}

//! Shared constants for consultsim.

/// Default location of the simulated consulting database.
pub const DEFAULT_DB_PATH: &str = "output/consulting.db";

/// Project config file name looked up in the working directory.
pub const CONFIG_FILE_NAME: &str = "consultsim.toml";

/// Default seed for the title-history random stream.
pub const DEFAULT_SEED: u64 = 42;

/// Date format used for every date column written by consultsim.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

// Entity store tables.
pub const CONSULTANT_TABLE: &str = "Consultant";
pub const TITLE_TABLE: &str = "Title";
pub const DELIVERABLE_TABLE: &str = "Deliverable";
pub const MAPPING_TABLE: &str = "Consultant_Deliverable_Mapping";
pub const TITLE_HISTORY_TABLE: &str = "Consultant_Title_History";
pub const PROGRESS_TABLE: &str = "Deliverable_Progress_Month";

/// Explicit numeric key column on output tables that carry one.
pub const KEY_COLUMN: &str = "id";

/// Categorical tag column on output tables that carry one.
pub const TAG_COLUMN: &str = "event_type";

/// Tag written on title-history rows when the table has a tag column.
pub const TITLE_HISTORY_TAG: &str = "title_assignment";

/// Tag written on progress rows when the table has a tag column.
pub const PROGRESS_TAG: &str = "progress_update";

/// Number of synthetic title levels used when the store has none.
pub const SYNTHETIC_TITLE_COUNT: i64 = 6;

/// Salary `(mean, std)` per title level, junior first.
pub const DEFAULT_TITLE_SALARIES: [(f64, f64); 6] = [
    (100_000.0, 10_000.0), // Consultant
    (120_000.0, 10_000.0), // Senior Consultant
    (140_000.0, 10_000.0), // Manager
    (160_000.0, 20_000.0), // Senior Manager
    (180_000.0, 20_000.0), // Associate Partner
    (200_000.0, 20_000.0), // Partner
];

/// Salary band for levels beyond [`DEFAULT_TITLE_SALARIES`].
pub const FALLBACK_TITLE_SALARY: (f64, f64) = (200_000.0, 20_000.0);

/// Entry-title weights per level, front-loaded toward junior levels.
pub const DEFAULT_TITLE_WEIGHTS: [f64; 6] = [0.30, 0.30, 0.20, 0.10, 0.05, 0.05];

/// Entry weight for levels beyond [`DEFAULT_TITLE_WEIGHTS`].
pub const FALLBACK_TITLE_WEIGHT: f64 = 0.05;

/// Weights for drawing 0, 1, or 2 promotions.
pub const DEFAULT_PROMOTION_WEIGHTS: [f64; 3] = [0.34, 0.33, 0.33];

/// Probability that the final title in a chain is still held.
pub const DEFAULT_STILL_ACTIVE_PROBABILITY: f64 = 0.75;

/// Inclusive bounds on months spent in one title.
pub const DEFAULT_MIN_TENURE_MONTHS: u32 = 6;
pub const DEFAULT_MAX_TENURE_MONTHS: u32 = 24;

/// Simulation window as `(year, month, day)`.
pub const DEFAULT_SIMULATION_START: (i32, u32, u32) = (2020, 1, 1);
pub const DEFAULT_ENTRY_CUTOFF: (i32, u32, u32) = (2025, 1, 1);
pub const DEFAULT_SIMULATION_END: (i32, u32, u32) = (2025, 12, 1);

/// Upper bound on reported completion.
pub const MAX_PERCENTAGE: f64 = 100.0;

/// Storage key for the user profile record
pub const USER_PROFILE_KEY: &str = "user_profile";

/// Storage key for quiz results (goal cards + profile)
pub const QUIZ_RESULTS_KEY: &str = "quiz_results";

/// Storage key for portfolio data (accounts + totals)
pub const PORTFOLIO_DATA_KEY: &str = "portfolio_data";

/// Storage key for the generated portfolio summary
pub const PORTFOLIO_SUMMARY_KEY: &str = "portfolio_summary";

/// Storage key for raw extracted document data
pub const PORTFOLIO_EXTRACTED_DATA_KEY: &str = "portfolio_extracted_data";

/// Minimum selectable target amount
pub const TARGET_AMOUNT_MIN: f64 = 10_000.0;

/// Maximum selectable target amount
pub const TARGET_AMOUNT_MAX: f64 = 1_000_000.0;

/// Slider step for the target amount
pub const TARGET_AMOUNT_STEP: f64 = 10_000.0;

/// Default target amount before the user adjusts the slider
pub const TARGET_AMOUNT_DEFAULT: f64 = 100_000.0;

/// Pause after a successful quiz submission, in milliseconds
pub const GENERATION_PAUSE_MS: u64 = 2_000;

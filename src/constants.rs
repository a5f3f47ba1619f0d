// Audit log action names
pub const USER_REGISTERED: &str = "USER_REGISTERED";
pub const USER_LOGGED_IN: &str = "USER_LOGGED_IN";
pub const WATER_LOGGED: &str = "WATER_LOGGED";

/// Fallback daily intake goal when registration omits one, in milliliters.
pub const DEFAULT_DAILY_GOAL_ML: i64 = 2000;

/// Upper bound for a single logged entry, in milliliters.
pub const MAX_ENTRY_ML: i64 = 100_000;

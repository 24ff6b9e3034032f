// Contribution curve
pub const ACCURACY_FLOOR: f64 = 70.0;
pub const ACCURACY_ORIGIN: f64 = 55.0;
pub const ACCURACY_SPAN: f64 = 100.0 - ACCURACY_ORIGIN;
pub const PHI_ACCURACY: f64 = 100.0;
// Selection
pub const PHI_SLOTS: usize = 3;
pub const BEST_SLOTS: usize = 33;
pub const BEST_COUNTED: usize = 27;
pub const RATING_DIVISOR: f64 = 30.0;
pub const MAX_SCORE: i64 = 1_000_000;

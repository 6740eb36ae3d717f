pub mod appointments;
pub mod clinical;
pub mod condition;
pub mod documents;
pub mod output;
pub mod patient;
pub mod seed;
pub mod tables;
mod util;

pub use output::{GeneratedCounts, write_all};
pub use seed::{Seed, resource_id};

/// The fixed (patient id, organization id) seed pairs the whole fixture
/// set is derived from.
pub const SEED_PAIRS: [(&str, &str); 10] = [
    ("ePtdJFCrnl2edlBDdz1C5Ja", "eLJ.EJ4jKEIQOkrtDXtBi10Q71hA1XcW9a"),
    ("ePt2RJtBRnlWmTSHf6pWkLUy", "eLGk8cgSCifdFzctEq8oB7GVvouNndNWYzjFn"),
    ("ePtfDLkDmWJ6UuVTAIjvFu7", "eLMX1C.CI3.dXRZv7qdYdk2r7xgHWPB6PRWJ"),
    ("ePtICPhDeOZIiBOB-Y6sHrFH2ZUC", "eLpfS2ViRb1.n3U6t3wI973IPFlJ5F7WRd-"),
    ("ePt-lgotu2iXW7GboIRoL3u6", "eLDpyOpxyB9JKmyLDUwMbqJfgLq.nbK894R"),
    ("ePtHwnMztVuaP.coUNEhEk", "eLI-4kf3PGdlDcIfw84Jx3.l8S0QPnuQ0-KZe"),
    ("ePt.iqq8vH2BzNZV45pFCiR", "eLx.BTHRJJbykE0.E8.5clLCZFNV8S2QT6IN"),
    ("ePtDCajhDieQjEJ.Bq8F80", "eLgG9oiZ.jgttMkFp1CW54M2NhmABHkuE"),
    ("ePtmm3T207gmhZRnFyy5r2xJ7", "eLjua058LeDKK6jDHz2oCtIsjhvNK4p7M"),
    ("ePtj4mgblEv0.9BZhvWaXH6K2", "eLlOGPoZa70gyU-4gAIqK4.pdEuNb0lCo7pt-L"),
];

// ATS compatibility scoring. Deliberately heuristic: the keyword scorer is a
// deterministic coverage metric, the canned scorer replays a fixed demo
// result. Neither claims to model a real applicant tracking system.

pub mod handlers;
pub mod keywords;
pub mod scorer;

pub use scorer::{scorer_from_config, AtsReport, AtsScorer};

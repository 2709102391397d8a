pub mod error;
pub mod intent;
pub mod models;
pub mod reply;
pub mod results;
pub mod similarity;
pub mod tables;

pub use error::CoreError;
pub use intent::{correct_token, correct_typos, detect_intent, normalize_query, score_intents};
pub use models::*;
pub use reply::compose_reply;
pub use results::{build_results_for_family, build_results_for_key, web_fallback_record};

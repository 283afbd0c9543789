mod access_history;
mod lru_k_replacer;

pub use access_history::KDistance;
pub use lru_k_replacer::*;

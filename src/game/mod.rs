pub mod extractor;
pub mod rack;
pub mod round;
pub mod scorer;
pub mod session;
pub mod validator;

pub use extractor::WordExtractor;
pub use rack::Rack;
pub use round::{evaluate_round, AcceptedRound};
pub use scorer::Scorer;
pub use session::{Action, Event, Session};
pub use validator::WordValidator;

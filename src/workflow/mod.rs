mod session;

pub use session::{Alternative, CoachTargets, Evaluation, SessionState, SwapSession};

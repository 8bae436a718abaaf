pub mod state;

pub use state::{ConsoleState, Route};

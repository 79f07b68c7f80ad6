//! Service layer: trigger dispatch against the loaded settings.

mod call;
mod dispatcher;

pub use call::{CallEvent, CallProfile};
pub use dispatcher::{Dispatcher, USAGE};

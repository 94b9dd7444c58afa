//! # Events Module
//!
//! Model events (what changed), view events (what to redraw) and the bus that
//! fans them out.

pub mod event_bus;
pub mod model_events;
pub mod view_events;

pub use event_bus::{EventBus, ModelEventHandler, SimpleEventBus, ViewEventHandler};
pub use model_events::ModelEvent;
pub use view_events::{InputEvent, ViewEvent};

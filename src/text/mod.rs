//! Paragraph text-formatting views.

mod tabstops;

pub use tabstops::{Iter, TabStop, TabStopMut, TabStops, TabStopsMut};

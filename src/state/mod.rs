//! Client-side state modules.
//!
//! DESIGN
//! ======
//! The viewer's state is a single plain struct mutated through methods, so
//! every transition is testable without a browser or a reactive runtime.
//! Components hold it in one `RwSignal` provided through context.

pub mod viewer;

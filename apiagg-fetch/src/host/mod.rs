//! Host APIs for talking to the outside world.
//!
//! - [`http`] - HTTP transport abstraction and its reqwest implementation

pub mod http;

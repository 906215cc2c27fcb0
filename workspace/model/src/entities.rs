//! Domain models of the billboard dashboard.
//! These are the validated counterparts of the transport types in `common`:
//! a value of one of these types upholds every invariant of the payload it
//! was built from.

pub mod billboard;
pub mod forecast;


//! Single elevator car shared by concurrently acting agents, with floor
//! access decided by each occupant's clearance when the car arrives.
//!
//! - `utilities`: clearance levels, agents, the pending floor set, the access
//!   policy, configuration and event types.
//! - `modules`: the car and its dispatcher loop, requester threads and the
//!   announcer, plus [`modules::run`] which wires them together.

pub mod modules;
pub mod utilities;

//! Persona registry
//!
//! Static definitions of the evaluating agents: identity, display name,
//! role label, icon and instruction template.

pub mod entities;
pub mod registry;

pub use entities::{Persona, PersonaId};
pub use registry::{all_personas, get_persona};

//! Wire-format projections: list, detail and edit shapes per entity.
//! Decoupled from `models` so storage changes do not leak into the API.

pub mod company;
pub mod contact;
pub mod skill;

pub use company::*;
pub use contact::*;
pub use skill::*;

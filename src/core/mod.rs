pub mod engine;

pub use crate::domain::ports::{Confirmation, Delay, IdentityApi, TelephonyApi};
pub use engine::AssignEngine;

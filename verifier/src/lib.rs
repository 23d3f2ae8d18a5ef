pub mod batch;
pub mod verify;

pub use verify::Verifier;

//! Common test utilities shared across integration tests

#![expect(dead_code, reason = "each test binary uses a subset of the helpers")]

pub mod fixture;
pub mod owner;

#[allow(unused_imports, reason = "not every test binary uses every fixture helper")]
pub use fixture::{TestFixture, sample_catalog};
#[allow(unused_imports, reason = "not every test binary uses RecordingOwner")]
pub use owner::RecordingOwner;

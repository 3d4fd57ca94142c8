//! Domain models for bundlekit
//!
//! This module contains pure domain objects: what can be dumped, how a
//! resource is selected, and the device a set of APKs is extracted for.
//! These types carry no knowledge of the command line or of any backend.

pub mod device_spec;
pub mod dump_target;
pub mod resource;

pub use device_spec::{DeviceSpec, SdkRuntime};
pub use dump_target::DumpTarget;
pub use resource::{ResourcePredicate, ResourceSelector, ResourceTableEntry};

//! Bundled word list
//!
//! A compact general-purpose word list compiled into the binary at build
//! time, for running without an external dictionary file.

// Include the generated list from the build script
include!(concat!(env!("OUT_DIR"), "/bundled.rs"));

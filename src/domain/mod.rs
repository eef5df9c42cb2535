pub mod vertex;
pub mod edge;
pub mod triple;
pub mod metapath;
pub mod error;
pub mod fingerprint;
pub mod ports;

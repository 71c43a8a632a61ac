pub mod address;
pub mod capacity;
pub mod cidr;
pub mod cli;
pub mod common;
pub mod error;
pub mod netmask;
pub mod output;
pub mod process;

pub use cidr::{Cidr, describe, describe_from_prefix_string};
pub use error::IpcalcError;

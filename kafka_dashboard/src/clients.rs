mod config_store;
mod metadata;
mod rpc;

pub use config_store::*;
pub use metadata::*;
pub use rpc::*;

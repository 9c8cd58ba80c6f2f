pub mod decode;
pub mod init;
pub mod simulate;

pub use decode::{decode, DecodeArgs};
pub use init::{init, InitArgs};
pub use simulate::{simulate, SimulateArgs};

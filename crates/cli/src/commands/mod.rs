pub mod convert;
pub mod init;
pub mod inspect;

pub use convert::{handle_convert, ConvertArgs};
pub use init::{handle_init, InitArgs};
pub use inspect::{handle_inspect, InspectArgs};

pub mod flash;
pub mod logging;

pub mod canonical;
pub mod logging;

pub mod classify;
pub mod init;

pub use classify::{handle_classify, ClassifyConfig, ThresholdOverrides};
pub use init::init_config;

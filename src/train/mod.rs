pub mod pass_stats;
pub mod train_config;
pub mod loop_fn;

pub use pass_stats::PassStats;
pub use train_config::TrainConfig;
pub use loop_fn::train_loop;

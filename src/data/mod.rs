pub mod source;
pub mod xor;

pub use source::{TrainingData, TrainingSample};
pub use xor::XorTable;

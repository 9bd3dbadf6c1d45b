pub mod transfer;
pub mod transfer_type;

pub use transfer::TransferFunction;
pub use transfer_type::TransferType;

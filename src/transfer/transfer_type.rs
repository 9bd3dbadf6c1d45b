use serde::{Serialize, Deserialize};

use crate::transfer::transfer::TransferFunction;

/// Serializable selector for the built-in transfer functions.
///
/// `NetworkSpec` stores one of these; it resolves to a [`TransferFunction`]
/// at build time. `TransferFunction::Custom` carries function pointers and
/// therefore has no serializable counterpart — custom activations are wired
/// up in code, not in config files.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TransferType {
    Tanh,
    Rectifier,
}

impl TransferType {
    /// The strategy this selector names.
    pub fn function(self) -> TransferFunction {
        match self {
            TransferType::Tanh => TransferFunction::Tanh,
            TransferType::Rectifier => TransferFunction::Rectifier,
        }
    }
}

impl From<TransferType> for TransferFunction {
    fn from(kind: TransferType) -> TransferFunction {
        kind.function()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_to_matching_function() {
        assert_eq!(TransferType::Tanh.function(), TransferFunction::Tanh);
        assert_eq!(
            TransferType::Rectifier.function(),
            TransferFunction::Rectifier
        );
    }

    #[test]
    fn serializes_as_snake_case() {
        assert_eq!(
            serde_json::to_string(&TransferType::Rectifier).unwrap(),
            "\"rectifier\""
        );
        let parsed: TransferType = serde_json::from_str("\"tanh\"").unwrap();
        assert_eq!(parsed, TransferType::Tanh);
    }
}

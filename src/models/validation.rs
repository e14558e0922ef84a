use thiserror::Error;

/// Why a depth edit was refused. The entry keeps its previous values.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum ValidationError {
    #[error("negative depth")]
    NegativeDepth { value: f64 },

    #[error("depth_to must exceed depth_from")]
    InvalidDepthOrder { depth_from: f64, depth_to: f64 },
}

impl ValidationError {
    pub fn reason(&self) -> &'static str {
        match self {
            ValidationError::NegativeDepth { .. } => "negative depth",
            ValidationError::InvalidDepthOrder { .. } => "depth_to must exceed depth_from",
        }
    }

    /// Longer text for the transient notification.
    pub fn describe(&self) -> String {
        match self {
            ValidationError::NegativeDepth { value } => {
                format!("Depth must be a positive number (got {})", value)
            }
            ValidationError::InvalidDepthOrder {
                depth_from,
                depth_to,
            } => format!(
                "Depth To must be greater than Depth From ({:.2} → {:.2})",
                depth_from, depth_to
            ),
        }
    }
}

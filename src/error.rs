//! Layout error types

use thiserror::Error;

/// Errors produced while computing a layout
#[derive(Debug, Clone, PartialEq, Error)]
pub enum LayoutError {
    /// Page divisor must be a finite positive number
    #[error("hex size divisor must be positive, got {0}")]
    InvalidDivisor(f32),

    /// Zero-size, negative or non-finite viewport (e.g. a hidden container)
    #[error("viewport {width}x{height} has no drawable area")]
    EmptyViewport { width: f32, height: f32 },

    /// A page configuration failed validation
    #[error("invalid page config: {0}")]
    InvalidConfig(String),
}

impl LayoutError {
    /// Fatal errors are configuration mistakes; the rest are degraded
    /// states the page recovers from on the next resize.
    pub fn is_fatal(&self) -> bool {
        !matches!(self, LayoutError::EmptyViewport { .. })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fatality() {
        assert!(LayoutError::InvalidDivisor(0.0).is_fatal());
        assert!(LayoutError::InvalidConfig("rows".into()).is_fatal());
        assert!(
            !LayoutError::EmptyViewport {
                width: 0.0,
                height: 600.0
            }
            .is_fatal()
        );
    }

    #[test]
    fn test_display() {
        let err = LayoutError::EmptyViewport {
            width: 0.0,
            height: 0.0,
        };
        assert_eq!(err.to_string(), "viewport 0x0 has no drawable area");
    }
}

use thiserror::Error;

#[derive(Error, Debug)]
pub enum DeckError {
    #[error("slide index {index} is out of range (deck has {len} slides)")]
    OutOfRange { index: isize, len: usize },

    #[error("failed to resolve asset '{asset}': {source}")]
    AssetResolution {
        asset: String,
        #[source]
        source: std::io::Error,
    },

    #[error("a deck needs at least one slide")]
    EmptyDeck,
}

pub type Result<T> = std::result::Result<T, DeckError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_out_of_range_display() {
        let err = DeckError::OutOfRange { index: -1, len: 3 };
        assert_eq!(err.to_string(), "slide index -1 is out of range (deck has 3 slides)");
    }

    #[test]
    fn test_asset_resolution_keeps_source() {
        let err = DeckError::AssetResolution {
            asset: "flow-logo.jpg".to_string(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        };
        assert!(err.to_string().contains("flow-logo.jpg"));
        assert!(err.source().is_some());
    }
}

use std::collections::BTreeMap;

use crate::assets::{AssetLoader, ResolvedAsset};
use crate::error::{DeckError, Result};
use crate::slide::{AssetRef, Slide, Transition};

/// An immutable, non-empty sequence of slides with every image already resolved.
#[derive(Debug)]
pub struct Deck {
    slides: Vec<Slide>,
    assets: BTreeMap<AssetRef, ResolvedAsset>,
    default_transition: Vec<Transition>,
}

impl Deck {
    /// Resolve every referenced asset exactly once. Any failure aborts construction.
    pub fn new(slides: Vec<Slide>, loader: &mut impl AssetLoader) -> Result<Self> {
        if slides.is_empty() {
            return Err(DeckError::EmptyDeck);
        }

        let mut assets = BTreeMap::new();
        for asset in slides.iter().flat_map(Slide::assets) {
            if !assets.contains_key(asset) {
                let resolved = loader.load(asset)?;
                assets.insert(asset.clone(), resolved);
            }
        }

        tracing::info!("Built deck with {} slides and {} assets", slides.len(), assets.len());

        Ok(Self { slides, assets, default_transition: Vec::new() })
    }

    /// Transitions used by slides that do not declare their own.
    pub fn with_default_transition(mut self, transition: Vec<Transition>) -> Self {
        self.default_transition = transition;
        self
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    pub fn slide(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn asset(&self, asset: &AssetRef) -> Option<&ResolvedAsset> {
        self.assets.get(asset)
    }

    pub fn assets(&self) -> impl Iterator<Item = (&AssetRef, &ResolvedAsset)> {
        self.assets.iter()
    }

    pub fn transition_for(&self, index: usize) -> &[Transition] {
        match self.slides.get(index) {
            Some(slide) if !slide.transition.is_empty() => &slide.transition,
            _ => &self.default_transition,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::tests::MemoryLoader;
    use crate::slide::{ThemeColor::*, heading, image};

    #[test]
    fn test_empty_deck_is_rejected() {
        let err = Deck::new(Vec::new(), &mut MemoryLoader::default()).unwrap_err();
        assert!(matches!(err, DeckError::EmptyDeck));
    }

    #[test]
    fn test_assets_are_resolved_once() {
        let slides = vec![
            Slide::new(Primary).with(image("automated.png", 75)),
            Slide::new(Primary).with(image("automated.png", 50)),
            Slide::new(Primary).with(image("flow-logo.jpg", 50)),
        ];
        let mut loader = MemoryLoader::default().with("automated.png").with("flow-logo.jpg");
        let deck = Deck::new(slides, &mut loader).unwrap();

        assert_eq!(loader.requests, ["automated.png", "flow-logo.jpg"]);
        assert_eq!(deck.assets().count(), 2);
        assert!(deck.asset(&AssetRef::new("flow-logo.jpg")).is_some());
    }

    #[test]
    fn test_missing_asset_fails_construction() {
        let slides = vec![
            Slide::new(Primary).with(heading(1, Tertiary, "Flow")),
            Slide::new(Primary).with(image("invalid-name.png", 75)),
        ];
        let err = Deck::new(slides, &mut MemoryLoader::default()).unwrap_err();
        assert!(matches!(err, DeckError::AssetResolution { ref asset, .. } if asset == "invalid-name.png"));
    }

    #[test]
    fn test_transition_falls_back_to_deck_default() {
        let slides = vec![
            Slide::new(Primary).transition(&[Transition::Fade]),
            Slide::new(Secondary),
        ];
        let deck = Deck::new(slides, &mut MemoryLoader::default())
            .unwrap()
            .with_default_transition(vec![Transition::Zoom, Transition::Slide]);

        assert_eq!(deck.transition_for(0), [Transition::Fade]);
        assert_eq!(deck.transition_for(1), [Transition::Zoom, Transition::Slide]);
    }
}

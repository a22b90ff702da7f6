use crate::engine::Engine;
use crate::error::Result;
use crate::navigator::Navigator;
use crate::render::render;
use crate::state::{AdvanceResult, RetreatResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavEvent {
    Next,
    Previous,
    JumpTo(isize),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NavOutcome {
    Advanced(AdvanceResult),
    Retreated(RetreatResult),
    Jumped,
}

/// Routes input events to the navigator and hands the resulting frame to the engine.
pub struct Session<E: Engine> {
    navigator: Navigator,
    engine: E,
}

impl<E: Engine> Session<E> {
    pub fn new(navigator: Navigator, engine: E) -> Self {
        Self { navigator, engine }
    }

    pub fn navigator(&self) -> &Navigator {
        &self.navigator
    }

    pub fn engine(&self) -> &E {
        &self.engine
    }

    pub fn engine_mut(&mut self) -> &mut E {
        &mut self.engine
    }

    /// Present the frame under the cursor without moving it.
    pub fn start(&mut self) {
        self.present();
    }

    pub fn handle(&mut self, event: NavEvent) -> Result<NavOutcome> {
        let outcome = match event {
            NavEvent::Next => NavOutcome::Advanced(self.navigator.advance()),
            NavEvent::Previous => NavOutcome::Retreated(self.navigator.retreat()),
            NavEvent::JumpTo(index) => {
                self.navigator.jump_to(index)?;
                NavOutcome::Jumped
            }
        };
        let cursor = self.navigator.cursor();
        tracing::debug!("{:?} -> {:?} (slide {}, revealed {})", event, outcome, cursor.slide, cursor.revealed);
        self.present();
        Ok(outcome)
    }

    fn present(&mut self) {
        let frame = render(self.navigator.deck(), self.navigator.cursor());
        self.engine.present(&frame);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::tests::MemoryLoader;
    use crate::deck::Deck;
    use crate::error::DeckError;
    use crate::render::Frame;
    use crate::slide::{Slide, ThemeColor::*, heading, item, list};

    #[derive(Default)]
    struct Recorder {
        frames: Vec<(usize, Vec<bool>)>,
    }

    impl Engine for Recorder {
        fn present(&mut self, frame: &Frame<'_>) {
            let items = frame.blocks.iter().flat_map(|b| b.items_visible.iter().copied()).collect();
            self.frames.push((frame.slide_index, items));
        }
    }

    fn session() -> Session<Recorder> {
        let slides = vec![
            Slide::new(Primary).with(heading(1, Tertiary, "Flow")),
            Slide::new(Secondary).with(list(vec![
                item(Primary, "Facebook = Flow").appear(),
                item(Primary, "Microsoft = TypeScript").appear(),
            ])),
        ];
        let deck = Deck::new(slides, &mut MemoryLoader::default()).unwrap();
        Session::new(Navigator::new(deck), Recorder::default())
    }

    #[test]
    fn test_one_frame_per_event() {
        let mut session = session();
        session.start();
        assert_eq!(session.handle(NavEvent::Next).unwrap(), NavOutcome::Advanced(AdvanceResult::SlideChanged));
        assert_eq!(session.handle(NavEvent::Next).unwrap(), NavOutcome::Advanced(AdvanceResult::Revealed));
        assert_eq!(session.handle(NavEvent::Previous).unwrap(), NavOutcome::Retreated(RetreatResult::Hidden));
        assert_eq!(session.handle(NavEvent::JumpTo(0)).unwrap(), NavOutcome::Jumped);

        assert_eq!(
            session.engine().frames,
            [
                (0, vec![]),
                (1, vec![false, false]),
                (1, vec![true, false]),
                (1, vec![false, false]),
                (0, vec![]),
            ]
        );
    }

    #[test]
    fn test_boundary_events_still_present() {
        let mut session = session();
        assert_eq!(session.handle(NavEvent::Previous).unwrap(), NavOutcome::Retreated(RetreatResult::AtStart));
        assert_eq!(session.engine().frames.len(), 1);
    }

    #[test]
    fn test_failed_jump_presents_nothing() {
        let mut session = session();
        let err = session.handle(NavEvent::JumpTo(2)).unwrap_err();
        assert!(matches!(err, DeckError::OutOfRange { index: 2, len: 2 }));
        assert!(session.engine().frames.is_empty());
        assert_eq!(session.navigator().cursor().slide, 0);
    }
}

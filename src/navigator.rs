use crate::deck::Deck;
use crate::error::{DeckError, Result};
use crate::slide::Slide;
use crate::state::{AdvanceResult, Cursor, RetreatResult};

/// Owns the deck and the cursor, plus the reveal state each slide had when it was last left.
pub struct Navigator {
    deck: Deck,
    cursor: Cursor,
    // None: never left, so retreating into it shows everything.
    history: Vec<Option<usize>>,
}

impl Navigator {
    pub fn new(deck: Deck) -> Self {
        let history = vec![None; deck.len()];
        Self { deck, cursor: Cursor { slide: 0, revealed: 0 }, history }
    }

    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    pub fn cursor(&self) -> Cursor {
        self.cursor
    }

    pub fn current_slide(&self) -> &Slide {
        // Deck::new refuses empty decks and the cursor never leaves [0, len).
        &self.deck.slides()[self.cursor.slide]
    }

    pub fn gated_steps(&self, slide: usize) -> usize {
        self.deck.slide(slide).map_or(0, Slide::gated_steps)
    }

    pub fn advance(&mut self) -> AdvanceResult {
        if self.cursor.revealed < self.current_slide().gated_steps() {
            self.cursor.revealed += 1;
            return AdvanceResult::Revealed;
        }
        if self.cursor.slide + 1 >= self.deck.len() {
            return AdvanceResult::AtEnd;
        }
        self.enter(self.cursor.slide + 1, 0);
        AdvanceResult::SlideChanged
    }

    pub fn retreat(&mut self) -> RetreatResult {
        if self.cursor.revealed > 0 {
            self.cursor.revealed -= 1;
            return RetreatResult::Hidden;
        }
        if self.cursor.slide == 0 {
            return RetreatResult::AtStart;
        }
        let previous = self.cursor.slide - 1;
        let revealed = self.history[previous].unwrap_or_else(|| self.gated_steps(previous));
        self.enter(previous, revealed);
        RetreatResult::SlideChanged
    }

    /// Enter a slide fresh: nothing revealed, whatever its history.
    pub fn jump_to(&mut self, index: isize) -> Result<()> {
        let len = self.deck.len();
        let target = usize::try_from(index)
            .ok()
            .filter(|&i| i < len)
            .ok_or(DeckError::OutOfRange { index, len })?;
        self.enter(target, 0);
        Ok(())
    }

    fn enter(&mut self, slide: usize, revealed: usize) {
        self.history[self.cursor.slide] = Some(self.cursor.revealed);
        self.cursor = Cursor { slide, revealed };
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assets::tests::MemoryLoader;
    use crate::slide::{ThemeColor::*, heading, item, list};
    use rand::Rng;

    fn slide_with_gates(gates: usize) -> Slide {
        let items = (0..gates).map(|i| item(Primary, &format!("item {i}")).appear()).collect();
        Slide::new(Secondary).with(heading(4, Tertiary, "title")).with(list(items))
    }

    fn navigator(gates: &[usize]) -> Navigator {
        let slides = gates.iter().map(|&g| slide_with_gates(g)).collect();
        Navigator::new(Deck::new(slides, &mut MemoryLoader::default()).unwrap())
    }

    fn at(slide: usize, revealed: usize) -> Cursor {
        Cursor { slide, revealed }
    }

    fn random_gates() -> Vec<usize> {
        let mut rng = rand::rng();
        let len = rng.random_range(1..8);
        (0..len).map(|_| rng.random_range(0..4)).collect()
    }

    #[test]
    fn test_walkthrough_of_three_slides() {
        let mut nav = navigator(&[0, 2, 0]);
        assert_eq!(nav.cursor(), at(0, 0));

        assert_eq!(nav.advance(), AdvanceResult::SlideChanged);
        assert_eq!(nav.cursor(), at(1, 0));
        assert_eq!(nav.advance(), AdvanceResult::Revealed);
        assert_eq!(nav.cursor(), at(1, 1));
        assert_eq!(nav.advance(), AdvanceResult::Revealed);
        assert_eq!(nav.cursor(), at(1, 2));
        assert_eq!(nav.advance(), AdvanceResult::SlideChanged);
        assert_eq!(nav.cursor(), at(2, 0));
        assert_eq!(nav.advance(), AdvanceResult::AtEnd);
        assert_eq!(nav.cursor(), at(2, 0));
    }

    #[test]
    fn test_at_end_is_reached_exactly_after_all_steps() {
        for _ in 0..50 {
            let gates = random_gates();
            let mut nav = navigator(&gates);
            let steps = gates.iter().sum::<usize>() + gates.len() - 1;
            for _ in 0..steps {
                assert_ne!(nav.advance(), AdvanceResult::AtEnd, "deck {gates:?}");
            }
            assert_eq!(nav.advance(), AdvanceResult::AtEnd, "deck {gates:?}");
        }
    }

    #[test]
    fn test_advance_then_retreat_restores_cursor() {
        for _ in 0..50 {
            let gates = random_gates();
            let mut nav = navigator(&gates);
            loop {
                let before = nav.cursor();
                if nav.advance() == AdvanceResult::AtEnd {
                    break;
                }
                let after = nav.cursor();
                nav.retreat();
                assert_eq!(nav.cursor(), before, "deck {gates:?}");
                nav.advance();
                assert_eq!(nav.cursor(), after, "deck {gates:?}");
            }
        }
    }

    #[test]
    fn test_retreat_restores_previous_reveal_state() {
        let mut nav = navigator(&[3, 0]);
        nav.advance();
        nav.advance();
        nav.jump_to(1).unwrap();
        assert_eq!(nav.retreat(), RetreatResult::SlideChanged);
        assert_eq!(nav.cursor(), at(0, 2));
        assert_eq!(nav.retreat(), RetreatResult::Hidden);
        assert_eq!(nav.cursor(), at(0, 1));
    }

    #[test]
    fn test_retreat_into_unvisited_slide_shows_everything() {
        let mut nav = navigator(&[0, 2, 0]);
        nav.jump_to(2).unwrap();
        assert_eq!(nav.retreat(), RetreatResult::SlideChanged);
        assert_eq!(nav.cursor(), at(1, 2));
    }

    #[test]
    fn test_retreat_at_start() {
        let mut nav = navigator(&[1]);
        assert_eq!(nav.retreat(), RetreatResult::AtStart);
        nav.advance();
        assert_eq!(nav.retreat(), RetreatResult::Hidden);
        assert_eq!(nav.retreat(), RetreatResult::AtStart);
        assert_eq!(nav.cursor(), at(0, 0));
    }

    #[test]
    fn test_jump_to_resets_reveal_state() {
        let mut nav = navigator(&[0, 2, 0]);
        nav.advance();
        nav.advance();
        nav.advance();
        assert_eq!(nav.cursor(), at(1, 2));

        nav.jump_to(0).unwrap();
        nav.jump_to(1).unwrap();
        assert_eq!(nav.cursor(), at(1, 0));
    }

    #[test]
    fn test_jump_to_every_valid_index() {
        let mut nav = navigator(&[1, 2, 3]);
        for i in 0..3 {
            nav.jump_to(i).unwrap();
            assert_eq!(nav.cursor(), at(i as usize, 0));
            assert_eq!(nav.current_slide().gated_steps(), i as usize + 1);
        }
    }

    #[test]
    fn test_jump_out_of_range() {
        let mut nav = navigator(&[0, 0, 0]);
        nav.advance();
        for index in [-1, 3] {
            let err = nav.jump_to(index).unwrap_err();
            assert!(matches!(err, DeckError::OutOfRange { index: i, len: 3 } if i == index));
        }
        assert_eq!(nav.cursor(), at(1, 0));
    }
}

/// Position in the deck: which slide, and how many of its gated steps are showing.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub struct Cursor {
    pub slide: usize,
    pub revealed: usize,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum AdvanceResult {
    Revealed,     // Next gated step on the current slide is now visible
    SlideChanged, // Moved on to the next slide
    AtEnd,        // Already on the last step of the last slide
}

#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum RetreatResult {
    Hidden,       // Last revealed step on the current slide is hidden again
    SlideChanged, // Moved back to the previous slide
    AtStart,      // Already at the first slide with nothing revealed
}

#[derive(Debug, PartialEq, Clone, Copy)]
pub enum PresenterState {
    Showing,       // Current slide is fully on screen
    Transitioning, // Current slide is animating in
}

use crate::deck::Deck;
use crate::slide::{ContentBlock, Reveal, Slide, ThemeColor, Transition};
use crate::state::Cursor;

/// What a slide looks like at a given reveal state.
#[derive(Debug)]
pub struct Frame<'a> {
    pub slide_index: usize,
    pub background: ThemeColor,
    pub transition: &'a [Transition],
    pub blocks: Vec<FrameBlock<'a>>,
}

/// A block of the slide. Hidden blocks are kept so the layout does not jump when they appear.
#[derive(Debug)]
pub struct FrameBlock<'a> {
    pub content: &'a ContentBlock,
    pub visible: bool,
    /// One flag per list item, empty for other blocks.
    pub items_visible: Vec<bool>,
}

pub fn render(deck: &Deck, cursor: Cursor) -> Frame<'_> {
    let slide = &deck.slides()[cursor.slide];
    Frame {
        slide_index: cursor.slide,
        background: slide.background,
        transition: deck.transition_for(cursor.slide),
        blocks: project(slide, cursor.revealed),
    }
}

fn project(slide: &Slide, revealed: usize) -> Vec<FrameBlock<'_>> {
    let mut step = 0;
    let mut gate = |shown_upfront: bool| {
        if shown_upfront {
            return true;
        }
        step += 1;
        step <= revealed
    };

    slide
        .content
        .iter()
        .map(|block| {
            let visible = gate(block.reveal == Reveal::Shown);
            let items_visible = match &block.content {
                ContentBlock::List(items) => items.iter().map(|item| gate(item.revealed) && visible).collect(),
                _ => Vec::new(),
            };
            FrameBlock { content: &block.content, visible, items_visible }
        })
        .collect()
}

/// One line per slide: its number and the first piece of text on it.
pub fn outline(deck: &Deck) -> Vec<String> {
    deck.slides()
        .iter()
        .enumerate()
        .map(|(i, slide)| {
            let title = slide
                .content
                .iter()
                .find_map(|block| match &block.content {
                    ContentBlock::Heading(heading) => Some(heading.text.clone()),
                    ContentBlock::List(items) => items.first().map(|item| item.text.clone()),
                    ContentBlock::Code(code) => Some(format!("<{} code>", code.language)),
                    ContentBlock::Image(image) => Some(format!("<image {}>", image.asset.name())),
                    ContentBlock::Link(link) => Some(format!("{} ({})", link.label, link.url)),
                })
                .unwrap_or_default();
            let gates = slide.gated_steps();
            if gates > 0 {
                format!("{i:>3}  {title}  [+{gates}]")
            } else {
                format!("{i:>3}  {title}")
            }
        })
        .collect()
}

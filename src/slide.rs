use serde::{Deserialize, Serialize};

/// One of the four theme palette entries. Used for slide backgrounds and text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ThemeColor {
    Primary,
    Secondary,
    Tertiary,
    Quaternary,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Transition {
    Zoom,
    Fade,
    Slide,
    Appear,
}

/// Name of an image under the asset directory.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct AssetRef(String);

impl AssetRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self(name.into())
    }

    pub fn name(&self) -> &str {
        &self.0
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Heading {
    pub text: String,
    /// 1 is the largest, 6 the smallest.
    pub size: u8,
    pub color: ThemeColor,
    pub caps: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ListItem {
    pub text: String,
    pub color: ThemeColor,
    pub revealed: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock {
    pub language: String,
    pub source: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct ImageBlock {
    pub asset: AssetRef,
    pub width_percent: u8,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LinkBlock {
    pub url: String,
    pub label: String,
    pub color: ThemeColor,
    pub caps: bool,
}

#[derive(Debug, Clone, PartialEq)]
pub enum ContentBlock {
    Heading(Heading),
    List(Vec<ListItem>),
    Code(CodeBlock),
    Image(ImageBlock),
    Link(LinkBlock),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Reveal {
    Shown,
    OnAdvance,
}

/// A content block together with its reveal gate.
#[derive(Debug, Clone, PartialEq)]
pub struct Block {
    pub content: ContentBlock,
    pub reveal: Reveal,
}

impl Block {
    /// Hide this block until the next advance event.
    pub fn appear(mut self) -> Self {
        self.reveal = Reveal::OnAdvance;
        self
    }

    fn gated_steps(&self) -> usize {
        let own = usize::from(self.reveal == Reveal::OnAdvance);
        let items = match &self.content {
            ContentBlock::List(items) => items.iter().filter(|item| !item.revealed).count(),
            _ => 0,
        };
        own + items
    }
}

impl From<ContentBlock> for Block {
    fn from(content: ContentBlock) -> Self {
        Self { content, reveal: Reveal::Shown }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct Slide {
    pub background: ThemeColor,
    /// Empty means "use the deck default".
    pub transition: Vec<Transition>,
    pub content: Vec<Block>,
}

impl Slide {
    pub fn new(background: ThemeColor) -> Self {
        Self { background, transition: Vec::new(), content: Vec::new() }
    }

    pub fn transition(mut self, transition: &[Transition]) -> Self {
        self.transition = transition.to_vec();
        self
    }

    pub fn with(mut self, block: impl Into<Block>) -> Self {
        self.content.push(block.into());
        self
    }

    /// Number of advance events this slide absorbs before the deck moves on.
    pub fn gated_steps(&self) -> usize {
        self.content.iter().map(Block::gated_steps).sum()
    }

    pub fn assets(&self) -> impl Iterator<Item = &AssetRef> {
        self.content.iter().filter_map(|block| match &block.content {
            ContentBlock::Image(image) => Some(&image.asset),
            _ => None,
        })
    }
}

// --- Builders used by the talk definition ---

pub fn heading(size: u8, color: ThemeColor, text: &str) -> Heading {
    Heading { text: text.to_string(), size: size.clamp(1, 6), color, caps: false }
}

impl Heading {
    pub fn caps(mut self) -> Self {
        self.caps = true;
        self
    }
}

impl From<Heading> for Block {
    fn from(heading: Heading) -> Self {
        ContentBlock::Heading(heading).into()
    }
}

pub fn item(color: ThemeColor, text: &str) -> ListItem {
    ListItem { text: text.to_string(), color, revealed: true }
}

impl ListItem {
    pub fn appear(mut self) -> Self {
        self.revealed = false;
        self
    }
}

pub fn list(items: Vec<ListItem>) -> Block {
    ContentBlock::List(items).into()
}

pub fn code(language: &str, source: &str) -> Block {
    ContentBlock::Code(CodeBlock { language: language.to_string(), source: source.trim().to_string() }).into()
}

pub fn image(asset: &str, width_percent: u8) -> Block {
    ContentBlock::Image(ImageBlock { asset: AssetRef::new(asset), width_percent: width_percent.min(100) }).into()
}

pub fn link(url: &str, label: &str, color: ThemeColor) -> LinkBlock {
    LinkBlock { url: url.to_string(), label: label.to_string(), color, caps: false }
}

impl LinkBlock {
    pub fn caps(mut self) -> Self {
        self.caps = true;
        self
    }
}

impl From<LinkBlock> for Block {
    fn from(link: LinkBlock) -> Self {
        ContentBlock::Link(link).into()
    }
}

//! Deck data model
//!
//! Slides are plain data: a tree of typed content blocks built by
//! composition, rendered by `ui::components::slide_view`. The model carries
//! no behavior beyond indexed access; navigation lives in the update layer.

mod content;

pub use content::standard;

/// An ordered, immutable sequence of slides.
#[derive(Debug, Clone)]
pub struct Deck {
    slides: Vec<Slide>,
}

impl Deck {
    pub fn new(slides: Vec<Slide>) -> Self {
        Self { slides }
    }

    pub fn len(&self) -> usize {
        self.slides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slides.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Slide> {
        self.slides.get(index)
    }

    pub fn slides(&self) -> &[Slide] {
        &self.slides
    }

    /// Index of the last slide. Zero for an empty deck.
    pub fn last_index(&self) -> usize {
        self.slides.len().saturating_sub(1)
    }
}

impl Default for Deck {
    fn default() -> Self {
        content::standard()
    }
}

/// One screen of static presentational content.
#[derive(Debug, Clone)]
pub struct Slide {
    /// Short label shown in the window title; always non-empty.
    pub title: String,
    pub blocks: Vec<Block>,
    /// Speaker notes, carried for tooling but never rendered on stage.
    pub notes: Option<String>,
}

impl Slide {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            blocks: Vec::new(),
            notes: None,
        }
    }

    pub fn block(mut self, block: Block) -> Self {
        self.blocks.push(block);
        self
    }

    pub fn notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = Some(notes.into());
        self
    }
}

/// Visual emphasis of a heading or card.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Emphasis {
    /// Primary text color.
    #[default]
    Normal,
    /// Accent (lime) color.
    Accent,
    /// Gold highlight.
    Highlight,
    /// Red warning.
    Warning,
    /// Dimmed outline and muted text.
    Dimmed,
}

/// A typed content block within a slide.
#[derive(Debug, Clone)]
pub enum Block {
    /// Hero line on the title slide, 96px uppercase. Animated with the
    /// slide-in entrance.
    Title { text: String, emphasis: Emphasis },
    /// Section heading, h2 scale.
    Heading { text: String, emphasis: Emphasis },
    /// Supporting line under a title or heading. Animated with the fade-in
    /// entrance on the title slide.
    Subtitle { text: String },
    /// Body copy, h1 scale when `large`, body scale otherwise.
    Body { text: String, large: bool },
    /// Muted caption under an image or at the foot of a slide.
    Caption { text: String },
    /// Pull quote with a left accent rule and an attribution line.
    Quote { text: String, attribution: String },
    /// Image asset referenced by path, displayed at a fixed width.
    Image {
        path: String,
        width: f32,
        caption: Option<String>,
    },
    /// Full-width sponsor strip, slightly translucent.
    SponsorStrip { path: String },
    /// Grid of outlined cards, `columns` per row.
    Cards { columns: usize, cards: Vec<Card> },
    /// Vertical workflow with numbered bubbles and connecting arrows.
    Steps { steps: Vec<String> },
    /// Contact lines on the closing slide.
    Contact { lines: Vec<String> },
}

/// One cell of a card grid.
#[derive(Debug, Clone)]
pub struct Card {
    pub title: String,
    pub detail: String,
    pub emphasis: Emphasis,
}

impl Card {
    pub fn new(title: impl Into<String>, detail: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            detail: detail.into(),
            emphasis: Emphasis::Normal,
        }
    }

    pub fn emphasis(mut self, emphasis: Emphasis) -> Self {
        self.emphasis = emphasis;
        self
    }
}

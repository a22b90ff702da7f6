use crate::constants::*;
use crate::render::Frame;
use crate::slide::{AssetRef, ContentBlock, ThemeColor, Transition};

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Bounds {
    pub fn contains(&self, x: f32, y: f32) -> bool {
        x >= self.x && x <= self.x + self.w && y >= self.y && y <= self.y + self.h
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum ItemKind {
    Text { text: String, size: i32, color: ThemeColor, link: Option<String> },
    Bullet { color: ThemeColor },
    Code { lines: Vec<String>, size: i32 },
    Image { asset: AssetRef },
}

#[derive(Debug, Clone, PartialEq)]
pub struct Item {
    pub bounds: Bounds,
    pub visible: bool,
    pub kind: ItemKind,
}

/// A frame placed on the render canvas. Owns its text so it can outlive the frame.
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub slide_index: usize,
    pub background: ThemeColor,
    pub transition: Vec<Transition>,
    pub items: Vec<Item>,
}

impl Scene {
    /// URL of the visible link under the point, in canvas coordinates.
    pub fn link_at(&self, x: f32, y: f32) -> Option<&str> {
        self.items.iter().filter(|item| item.visible && item.bounds.contains(x, y)).find_map(|item| match &item.kind {
            ItemKind::Text { link: Some(url), .. } => Some(url.as_str()),
            _ => None,
        })
    }
}

/// Stack the frame's blocks in a centered column.
/// `measure` returns the pixel width of a string at a font size, `image_size` the pixel size of an asset.
pub fn layout(
    frame: &Frame<'_>,
    measure: impl Fn(&str, i32) -> f32,
    image_size: impl Fn(&AssetRef) -> Option<(f32, f32)>,
) -> Scene {
    let center = RENDER_WIDTH as f32 * 0.5;
    let left = center - CONTENT_WIDTH * 0.5;
    let mut items = Vec::new();
    let mut y = 0.0;

    for block in &frame.blocks {
        match block.content {
            ContentBlock::Heading(heading) => {
                let size = HEADING_SIZES[usize::from(heading.size.clamp(1, 6)) - 1];
                let text = if heading.caps { heading.text.to_uppercase() } else { heading.text.clone() };
                y = push_centered_text(&mut items, &text, size, heading.color, None, block.visible, y, &measure);
            }
            ContentBlock::List(list) => {
                let text_width = CONTENT_WIDTH - BULLET_INDENT;
                let wrapped: Vec<Vec<String>> =
                    list.iter().map(|item| wrap_text(&item.text, TEXT_SIZE, text_width, &measure)).collect();
                let widest = wrapped
                    .iter()
                    .flatten()
                    .map(|line| measure(line, TEXT_SIZE))
                    .fold(0.0, f32::max);
                let x = center - (widest + BULLET_INDENT) * 0.5;
                let line_height = TEXT_SIZE as f32 * LINE_SPACING;

                for ((item, lines), &visible) in list.iter().zip(&wrapped).zip(&block.items_visible) {
                    items.push(Item {
                        bounds: Bounds {
                            x,
                            y: y + TEXT_SIZE as f32 * 0.5 - BULLET_RADIUS,
                            w: BULLET_RADIUS * 2.0,
                            h: BULLET_RADIUS * 2.0,
                        },
                        visible,
                        kind: ItemKind::Bullet { color: item.color },
                    });
                    for line in lines {
                        items.push(Item {
                            bounds: Bounds { x: x + BULLET_INDENT, y, w: measure(line, TEXT_SIZE), h: TEXT_SIZE as f32 },
                            visible,
                            kind: ItemKind::Text { text: line.clone(), size: TEXT_SIZE, color: item.color, link: None },
                        });
                        y += line_height;
                    }
                }
                y += BLOCK_GAP;
            }
            ContentBlock::Code(code) => {
                let lines: Vec<String> = code.source.lines().map(str::to_string).collect();
                let size = fit_code_size(&lines, &measure);
                let h = lines.len() as f32 * size as f32 * LINE_SPACING + CODE_PADDING * 2.0;
                items.push(Item {
                    bounds: Bounds { x: left, y, w: CONTENT_WIDTH, h },
                    visible: block.visible,
                    kind: ItemKind::Code { lines, size },
                });
                y += h + BLOCK_GAP;
            }
            ContentBlock::Image(image) => {
                let mut w = CONTENT_WIDTH * f32::from(image.width_percent) / 100.0;
                let (iw, ih) = image_size(&image.asset).unwrap_or((w, w));
                let mut h = if iw > 0.0 { w * ih / iw } else { w };
                let max_h = RENDER_HEIGHT as f32 - MARGIN * 2.0;
                if h > max_h {
                    w *= max_h / h;
                    h = max_h;
                }
                items.push(Item {
                    bounds: Bounds { x: center - w * 0.5, y, w, h },
                    visible: block.visible,
                    kind: ItemKind::Image { asset: image.asset.clone() },
                });
                y += h + BLOCK_GAP;
            }
            ContentBlock::Link(link) => {
                let text = if link.caps { link.label.to_uppercase() } else { link.label.clone() };
                y = push_centered_text(&mut items, &text, TEXT_SIZE, link.color, Some(&link.url), block.visible, y, &measure);
            }
        }
    }

    let total = (y - BLOCK_GAP).max(0.0);
    let offset = ((RENDER_HEIGHT as f32 - total) * 0.5).max(MARGIN);
    for item in &mut items {
        item.bounds.y += offset;
    }

    Scene {
        slide_index: frame.slide_index,
        background: frame.background,
        transition: frame.transition.to_vec(),
        items,
    }
}

#[allow(clippy::too_many_arguments)]
fn push_centered_text(
    items: &mut Vec<Item>,
    text: &str,
    size: i32,
    color: ThemeColor,
    link: Option<&str>,
    visible: bool,
    mut y: f32,
    measure: &impl Fn(&str, i32) -> f32,
) -> f32 {
    let center = RENDER_WIDTH as f32 * 0.5;
    for line in wrap_text(text, size, CONTENT_WIDTH, measure) {
        let w = measure(&line, size);
        items.push(Item {
            bounds: Bounds { x: center - w * 0.5, y, w, h: size as f32 },
            visible,
            kind: ItemKind::Text { text: line, size, color, link: link.map(str::to_string) },
        });
        y += size as f32 * LINE_SPACING;
    }
    y + BLOCK_GAP
}

/// Greedy word wrap. A word wider than the limit gets a line of its own.
pub fn wrap_text(text: &str, size: i32, max_width: f32, measure: &impl Fn(&str, i32) -> f32) -> Vec<String> {
    let mut lines = Vec::new();
    let mut current = String::new();
    for word in text.split_whitespace() {
        if current.is_empty() {
            current.push_str(word);
            continue;
        }
        let candidate = format!("{current} {word}");
        if measure(&candidate, size) > max_width {
            lines.push(std::mem::replace(&mut current, word.to_string()));
        } else {
            current = candidate;
        }
    }
    if !current.is_empty() || lines.is_empty() {
        lines.push(current);
    }
    lines
}

// Largest font size at which the code fits the column and most of the canvas height.
fn fit_code_size(lines: &[String], measure: &impl Fn(&str, i32) -> f32) -> i32 {
    let max_w = CONTENT_WIDTH - CODE_PADDING * 2.0;
    let max_h = RENDER_HEIGHT as f32 * 0.75 - CODE_PADDING * 2.0;
    (MIN_CODE_SIZE..=CODE_SIZE)
        .rev()
        .find(|&size| {
            let widest = lines.iter().map(|line| measure(line, size)).fold(0.0, f32::max);
            widest <= max_w && lines.len() as f32 * size as f32 * LINE_SPACING <= max_h
        })
        .unwrap_or(MIN_CODE_SIZE)
}

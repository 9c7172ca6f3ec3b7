//! Sentence text with shimmering placeholder words.
//!
//! Words containing the shimmer pattern character are rendered as invisible
//! text overlaid with a [`Shimmer`](crate::widgets::shimmer::Shimmer) slot;
//! everything else renders as plain text. Words wrap with the flow layout,
//! each word followed by a single-space item, which reproduces inline text
//! wrapping closely enough for short loading sentences.

use glint_ui_graphics::{Point, Rect, Size};
use glint_ui_layout::flow::{measure_flow, place_flow};

/// Character a placeholder token is built from.
pub const SHIMMER_PATTERN_CHARACTER: char = '\u{262f}';

/// Vertical inset applied to a shimmer slot inside its word box.
pub const SHIMMER_SLOT_VERTICAL_INSET: f32 = 2.0;

/// Builds a placeholder token `count` characters wide, padded with spaces
/// so it always lands in its own word.
pub fn shimmer_text(count: usize) -> String {
    if count == 0 {
        return String::new();
    }
    let pattern: String = std::iter::repeat(SHIMMER_PATTERN_CHARACTER)
        .take(count)
        .collect();
    format!(" {pattern} ")
}

/// A single word of the sentence.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Word {
    pub value: String,
}

impl Word {
    /// Whether this word is a shimmer placeholder slot.
    pub fn is_shimmer(&self) -> bool {
        self.value.contains(SHIMMER_PATTERN_CHARACTER)
    }
}

/// External collaborator that measures a text fragment in the host's font.
pub trait TextMeasurer {
    fn measure(&self, text: &str) -> Size;
}

/// One laid-out flow item: a word or the space that follows one.
#[derive(Clone, Debug, PartialEq)]
pub enum FlowItem {
    Word(Word),
    Space,
}

/// A flow item with its resolved rect.
#[derive(Clone, Debug, PartialEq)]
pub struct PlacedItem {
    pub item: FlowItem,
    pub rect: Rect,
}

/// The laid-out sentence.
#[derive(Clone, Debug, PartialEq)]
pub struct TextFlowLayout {
    pub size: Size,
    pub items: Vec<PlacedItem>,
}

impl TextFlowLayout {
    /// Rects where the host draws shimmer placeholders, inset vertically
    /// inside their word boxes.
    pub fn shimmer_slots(&self) -> impl Iterator<Item = Rect> + '_ {
        self.items.iter().filter_map(|placed| match &placed.item {
            FlowItem::Word(word) if word.is_shimmer() => Some(Rect::new(
                placed.rect.x,
                placed.rect.y + SHIMMER_SLOT_VERTICAL_INSET,
                placed.rect.width,
                (placed.rect.height - 2.0 * SHIMMER_SLOT_VERTICAL_INSET).max(0.0),
            )),
            _ => None,
        })
    }
}

/// Sentence with shimmering loadable words.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ShimmerableText {
    text: String,
}

impl ShimmerableText {
    pub fn new(text: impl Into<String>) -> Self {
        Self { text: text.into() }
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    /// Splits the sentence into words, dropping the padding spaces.
    pub fn words(&self) -> Vec<Word> {
        self.text
            .split(' ')
            .filter(|fragment| !fragment.is_empty())
            .map(|fragment| Word {
                value: fragment.to_string(),
            })
            .collect()
    }

    /// Wraps the sentence at `max_width`, measuring fragments with
    /// `measurer`. Every word is followed by a single-space item so line
    /// breaks inherit natural word spacing.
    pub fn layout(&self, measurer: &dyn TextMeasurer, max_width: f32) -> TextFlowLayout {
        let mut items = Vec::new();
        for word in self.words() {
            items.push(FlowItem::Word(word));
            items.push(FlowItem::Space);
        }

        let sizes: Vec<Size> = items
            .iter()
            .map(|item| match item {
                FlowItem::Word(word) => measurer.measure(&word.value),
                FlowItem::Space => measurer.measure(" "),
            })
            .collect();

        let size = measure_flow(&sizes, max_width);
        let positions = place_flow(&sizes, Point::ZERO, max_width);

        TextFlowLayout {
            size,
            items: items
                .into_iter()
                .zip(positions)
                .zip(sizes)
                .map(|((item, position), item_size)| PlacedItem {
                    item,
                    rect: Rect::new(position.x, position.y, item_size.width, item_size.height),
                })
                .collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Fixed-advance font: every char is 10x20.
    struct MonoMeasurer;

    impl TextMeasurer for MonoMeasurer {
        fn measure(&self, text: &str) -> Size {
            Size::new(text.chars().count() as f32 * 10.0, 20.0)
        }
    }

    #[test]
    fn shimmer_text_pads_with_spaces() {
        assert_eq!(shimmer_text(0), "");
        assert_eq!(shimmer_text(3), " \u{262f}\u{262f}\u{262f} ");
    }

    #[test]
    fn words_split_and_detect_shimmer() {
        let text = format!("loading{}now", shimmer_text(4));
        let sentence = ShimmerableText::new(text);
        let words = sentence.words();

        assert_eq!(words.len(), 3);
        assert_eq!(words[0].value, "loading");
        assert!(!words[0].is_shimmer());
        assert!(words[1].is_shimmer());
        assert_eq!(words[2].value, "now");
    }

    #[test]
    fn layout_wraps_words_across_lines() {
        // "aaaa" + space + "bbbb" + space, 10px per char, wrapped at 60:
        // line 1 holds the first word and its space (50px), the second word
        // wraps.
        let sentence = ShimmerableText::new("aaaa bbbb");
        let layout = sentence.layout(&MonoMeasurer, 60.0);

        assert_eq!(layout.items.len(), 4);
        assert_eq!(layout.items[0].rect, Rect::new(0.0, 0.0, 40.0, 20.0));
        assert_eq!(layout.items[1].rect.x, 40.0);
        assert_eq!(layout.items[2].rect, Rect::new(0.0, 20.0, 40.0, 20.0));
        assert_eq!(layout.size, Size::new(50.0, 40.0));
    }

    #[test]
    fn shimmer_slots_are_inset_vertically() {
        let text = format!("ok{}", shimmer_text(3));
        let sentence = ShimmerableText::new(text);
        let layout = sentence.layout(&MonoMeasurer, 1000.0);

        let slots: Vec<Rect> = layout.shimmer_slots().collect();
        assert_eq!(slots.len(), 1);
        let slot = slots[0];
        assert_eq!(slot.height, 20.0 - 2.0 * SHIMMER_SLOT_VERTICAL_INSET);
        assert_eq!(slot.y, SHIMMER_SLOT_VERTICAL_INSET);
        assert_eq!(slot.width, 30.0);
    }
}

use crate::config::MilkcatItemRaw;
use crate::constants::{
    MILKCAT_WORD_TYPE_CHINESE, MILKCAT_WORD_TYPE_ENGLISH, MILKCAT_WORD_TYPE_NUMBER,
    MILKCAT_WORD_TYPE_PUNCTUATION, MILKCAT_WORD_TYPE_SYMBOL,
};
use crate::native::cstr_to_string;

/// One analyzed token, copied out of the engine's cursor buffers.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct Item {
    /// Surface word.
    pub word: String,
    /// Part-of-speech tag. Empty when the pipeline has no tagger.
    pub pos_tag: String,
    /// Engine word-type code (`MILKCAT_WORD_TYPE_*`).
    pub word_type: i32,
}

impl Item {
    /// Creates an item from owned parts.
    pub fn new(word: impl Into<String>, pos_tag: impl Into<String>, word_type: i32) -> Self {
        Self {
            word: word.into(),
            pos_tag: pos_tag.into(),
            word_type,
        }
    }

    /// Whether the engine classified this token as a Chinese word.
    pub fn is_chinese_word(&self) -> bool {
        self.word_type == MILKCAT_WORD_TYPE_CHINESE
    }

    /// Whether the engine classified this token as a latin word.
    pub fn is_english_word(&self) -> bool {
        self.word_type == MILKCAT_WORD_TYPE_ENGLISH
    }

    /// Whether the engine classified this token as a number.
    pub fn is_number(&self) -> bool {
        self.word_type == MILKCAT_WORD_TYPE_NUMBER
    }

    /// Whether the engine classified this token as punctuation or a symbol.
    pub fn is_punctuation(&self) -> bool {
        matches!(
            self.word_type,
            MILKCAT_WORD_TYPE_PUNCTUATION | MILKCAT_WORD_TYPE_SYMBOL
        )
    }

    /// `(word, pos_tag, word_type)` triple as returned by `parse`.
    pub fn into_tuple(self) -> (String, String, i32) {
        (self.word, self.pos_tag, self.word_type)
    }
}

impl From<Item> for (String, String, i32) {
    fn from(value: Item) -> Self {
        value.into_tuple()
    }
}

impl From<&MilkcatItemRaw> for Item {
    fn from(value: &MilkcatItemRaw) -> Self {
        Self {
            word: cstr_to_string(value.word),
            pos_tag: cstr_to_string(value.part_of_speech_tag),
            word_type: value.word_type,
        }
    }
}

//! Field selection and result shaping.
//!
//! A call selects any subset of `word`, `pos_tag` and `word_type`. The shape
//! of every element is decided once from that subset:
//!
//! - no field: nothing is produced and the engine is not run,
//! - one field: each element is the bare value,
//! - two or three fields: each element is a tuple in `(word, pos_tag, word_type)`
//!   order restricted to the selected fields.

use std::fmt;

use crate::model::Item;

/// One token field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    /// Surface word.
    Word,
    /// Part-of-speech tag.
    PosTag,
    /// Word-type code.
    WordType,
}

impl Field {
    /// Canonical tuple order.
    pub const ALL: [Field; 3] = [Field::Word, Field::PosTag, Field::WordType];

    fn take(self, item: &mut Item) -> Value {
        match self {
            Field::Word => Value::Text(std::mem::take(&mut item.word)),
            Field::PosTag => Value::Text(std::mem::take(&mut item.pos_tag)),
            Field::WordType => Value::Int(item.word_type),
        }
    }
}

/// Which fields a call exposes. Every flag defaults to `true`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Fields {
    /// Expose the surface word.
    pub word: bool,
    /// Expose the part-of-speech tag.
    pub pos_tag: bool,
    /// Expose the word-type code.
    pub word_type: bool,
}

impl Default for Fields {
    fn default() -> Self {
        Self::all()
    }
}

impl Fields {
    /// All three fields.
    pub const fn all() -> Self {
        Self {
            word: true,
            pos_tag: true,
            word_type: true,
        }
    }

    /// No field at all.
    pub const fn none() -> Self {
        Self {
            word: false,
            pos_tag: false,
            word_type: false,
        }
    }

    /// Sets whether the word is exposed.
    pub fn with_word(mut self, word: bool) -> Self {
        self.word = word;
        self
    }

    /// Sets whether the part-of-speech tag is exposed.
    pub fn with_pos_tag(mut self, pos_tag: bool) -> Self {
        self.pos_tag = pos_tag;
        self
    }

    /// Sets whether the word-type code is exposed.
    pub fn with_word_type(mut self, word_type: bool) -> Self {
        self.word_type = word_type;
        self
    }

    /// Whether `field` is selected.
    pub fn contains(&self, field: Field) -> bool {
        match field {
            Field::Word => self.word,
            Field::PosTag => self.pos_tag,
            Field::WordType => self.word_type,
        }
    }

    /// Selected fields in canonical order.
    pub fn selected(&self) -> Vec<Field> {
        Field::ALL
            .into_iter()
            .filter(|field| self.contains(*field))
            .collect()
    }
}

/// Element shape for one call, derived from [`Fields`].
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Shape {
    /// Each element is the bare value of one field.
    Scalar(Field),
    /// Each element is a tuple of two or three fields in canonical order.
    Tuple(Vec<Field>),
}

impl Shape {
    /// `None` when no field is selected.
    pub fn from_fields(fields: Fields) -> Option<Self> {
        let mut selected = fields.selected();
        match selected.len() {
            0 => None,
            1 => selected.pop().map(Shape::Scalar),
            _ => Some(Shape::Tuple(selected)),
        }
    }

    /// Fields this shape exposes, in canonical order.
    pub fn fields(&self) -> &[Field] {
        match self {
            Shape::Scalar(field) => std::slice::from_ref(field),
            Shape::Tuple(fields) => fields,
        }
    }

    /// Projects one item into this shape.
    pub fn apply(&self, mut item: Item) -> Row {
        match self {
            Shape::Scalar(field) => Row::Scalar(field.take(&mut item)),
            Shape::Tuple(fields) => {
                Row::Tuple(fields.iter().map(|field| field.take(&mut item)).collect())
            }
        }
    }
}

/// A single projected field value.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Value {
    /// Word or part-of-speech tag.
    Text(String),
    /// Word-type code.
    Int(i32),
}

impl Value {
    /// Text content, if this is a text value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(text) => Some(text),
            Value::Int(_) => None,
        }
    }

    /// Integer content, if this is a word-type value.
    pub fn as_int(&self) -> Option<i32> {
        match self {
            Value::Text(_) => None,
            Value::Int(value) => Some(*value),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Text(text) => f.write_str(text),
            Value::Int(value) => write!(f, "{value}"),
        }
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Text(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Text(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value)
    }
}

/// One projected element.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum Row {
    /// Bare value (exactly one field selected).
    Scalar(Value),
    /// Tuple in canonical order (two or three fields selected).
    Tuple(Vec<Value>),
}

impl Row {
    /// The bare value of a scalar row.
    pub fn into_scalar(self) -> Option<Value> {
        match self {
            Row::Scalar(value) => Some(value),
            Row::Tuple(_) => None,
        }
    }

    /// The values of a tuple row.
    pub fn into_tuple(self) -> Option<Vec<Value>> {
        match self {
            Row::Scalar(_) => None,
            Row::Tuple(values) => Some(values),
        }
    }
}

/// Collected output of a projected analysis.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Projection {
    /// No field was selected; the engine was not run.
    #[default]
    Void,
    /// One field selected: one bare value per token.
    Scalars(Vec<Value>),
    /// Two or three fields selected: one tuple per token.
    Tuples(Vec<Vec<Value>>),
}

impl Projection {
    /// Collects projected items under a fixed shape.
    pub fn collect_from<I>(shape: &Shape, items: I) -> Self
    where
        I: IntoIterator<Item = Item>,
    {
        let rows = items.into_iter().map(|item| shape.apply(item));
        match shape {
            Shape::Scalar(_) => Projection::Scalars(rows.filter_map(Row::into_scalar).collect()),
            Shape::Tuple(_) => Projection::Tuples(rows.filter_map(Row::into_tuple).collect()),
        }
    }

    /// Whether this is [`Projection::Void`].
    pub fn is_void(&self) -> bool {
        matches!(self, Projection::Void)
    }

    /// Number of elements; zero for `Void`.
    pub fn len(&self) -> usize {
        match self {
            Projection::Void => 0,
            Projection::Scalars(values) => values.len(),
            Projection::Tuples(rows) => rows.len(),
        }
    }

    /// Whether there are no elements.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Elements as [`Row`]s; empty for `Void`.
    pub fn into_rows(self) -> Vec<Row> {
        match self {
            Projection::Void => Vec::new(),
            Projection::Scalars(values) => values.into_iter().map(Row::Scalar).collect(),
            Projection::Tuples(rows) => rows.into_iter().map(Row::Tuple).collect(),
        }
    }
}

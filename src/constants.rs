//! Constants mirrored from MilkCat C API codes.

/// Analyzer preset: default word segmenter and part-of-speech tagger.
pub const MILKCAT_DEFAULT_ANALYZER: i32 = 0;
/// Analyzer preset: CRF model based word segmenter.
pub const MILKCAT_CRF_SEGMENTER: i32 = 1;
/// Analyzer preset: CRF model based word segmenter and part-of-speech tagger.
pub const MILKCAT_CRF_ANALYZER: i32 = 2;
/// Analyzer preset: default word segmenter without tagging.
pub const MILKCAT_DEFAULT_SEGMENTER: i32 = 3;
/// Analyzer preset: bigram model based word segmenter.
pub const MILKCAT_BIGRAM_SEGMENTER: i32 = 4;

/// Segmenter code: engine default.
pub const MILKCAT_SEGMENTER_DEFAULT: i32 = 0;
/// Segmenter code: CRF.
pub const MILKCAT_SEGMENTER_CRF: i32 = 1;
/// Segmenter code: unigram.
pub const MILKCAT_SEGMENTER_UNIGRAM: i32 = 2;
/// Segmenter code: bigram.
pub const MILKCAT_SEGMENTER_BIGRAM: i32 = 3;
/// Segmenter code: mixed bigram + CRF.
pub const MILKCAT_SEGMENTER_MIXED: i32 = 4;

/// Tagger code: no part-of-speech tagging.
pub const MILKCAT_TAGGER_NONE: i32 = 0;
/// Tagger code: HMM.
pub const MILKCAT_TAGGER_HMM: i32 = 1;
/// Tagger code: CRF.
pub const MILKCAT_TAGGER_CRF: i32 = 2;
/// Tagger code: mixed HMM + CRF.
pub const MILKCAT_TAGGER_MIXED: i32 = 3;

/// Word type: Chinese word.
pub const MILKCAT_WORD_TYPE_CHINESE: i32 = 0;
/// Word type: English (latin) word.
pub const MILKCAT_WORD_TYPE_ENGLISH: i32 = 1;
/// Word type: number.
pub const MILKCAT_WORD_TYPE_NUMBER: i32 = 2;
/// Word type: symbol.
pub const MILKCAT_WORD_TYPE_SYMBOL: i32 = 3;
/// Word type: punctuation.
pub const MILKCAT_WORD_TYPE_PUNCTUATION: i32 = 4;
/// Word type: anything else.
pub const MILKCAT_WORD_TYPE_OTHER: i32 = 5;

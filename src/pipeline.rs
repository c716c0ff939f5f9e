//! Segmenter/tagger selection.
//!
//! MilkCat exposes two ways of choosing an analysis pipeline: a single preset
//! code ([`AnalyzerType`]) and an independent segmenter/tagger pair
//! ([`SegmenterType`], [`TaggerType`]). Both resolve to a [`Pipeline`].

use crate::constants::{
    MILKCAT_BIGRAM_SEGMENTER, MILKCAT_CRF_ANALYZER, MILKCAT_CRF_SEGMENTER,
    MILKCAT_DEFAULT_ANALYZER, MILKCAT_DEFAULT_SEGMENTER, MILKCAT_SEGMENTER_BIGRAM,
    MILKCAT_SEGMENTER_CRF, MILKCAT_SEGMENTER_DEFAULT, MILKCAT_SEGMENTER_MIXED,
    MILKCAT_SEGMENTER_UNIGRAM, MILKCAT_TAGGER_CRF, MILKCAT_TAGGER_HMM, MILKCAT_TAGGER_MIXED,
    MILKCAT_TAGGER_NONE,
};

/// Word segmenter variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum SegmenterType {
    /// Whatever the engine uses when no segmenter is requested.
    #[default]
    Default,
    /// CRF model based segmenter.
    Crf,
    /// Unigram model based segmenter.
    Unigram,
    /// Bigram model based segmenter.
    Bigram,
    /// Bigram segmenter with CRF handling of out-of-vocabulary spans.
    Mixed,
}

impl SegmenterType {
    /// Decodes an engine code. Unknown codes keep the default segmenter.
    pub fn from_code(code: i32) -> Self {
        match code {
            MILKCAT_SEGMENTER_DEFAULT => SegmenterType::Default,
            MILKCAT_SEGMENTER_CRF => SegmenterType::Crf,
            MILKCAT_SEGMENTER_UNIGRAM => SegmenterType::Unigram,
            MILKCAT_SEGMENTER_BIGRAM => SegmenterType::Bigram,
            MILKCAT_SEGMENTER_MIXED => SegmenterType::Mixed,
            unknown => {
                log::debug!("unknown segmenter code {unknown}, keeping the default segmenter");
                SegmenterType::default()
            }
        }
    }

    /// Engine code for this variant.
    pub fn code(self) -> i32 {
        match self {
            SegmenterType::Default => MILKCAT_SEGMENTER_DEFAULT,
            SegmenterType::Crf => MILKCAT_SEGMENTER_CRF,
            SegmenterType::Unigram => MILKCAT_SEGMENTER_UNIGRAM,
            SegmenterType::Bigram => MILKCAT_SEGMENTER_BIGRAM,
            SegmenterType::Mixed => MILKCAT_SEGMENTER_MIXED,
        }
    }
}

/// Part-of-speech tagger variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TaggerType {
    /// Segmentation only; items carry an empty tag.
    None,
    /// HMM tagger.
    Hmm,
    /// CRF tagger.
    Crf,
    /// HMM tagger with CRF fallback. This is the engine's default tagger.
    #[default]
    Mixed,
}

impl TaggerType {
    /// Decodes an engine code. Unknown codes keep the default tagger
    /// ([`TaggerType::Mixed`]); code `0` explicitly disables tagging.
    pub fn from_code(code: i32) -> Self {
        match code {
            MILKCAT_TAGGER_NONE => TaggerType::None,
            MILKCAT_TAGGER_HMM => TaggerType::Hmm,
            MILKCAT_TAGGER_CRF => TaggerType::Crf,
            MILKCAT_TAGGER_MIXED => TaggerType::Mixed,
            unknown => {
                log::debug!("unknown tagger code {unknown}, keeping the default tagger");
                TaggerType::default()
            }
        }
    }

    /// Engine code for this variant.
    pub fn code(self) -> i32 {
        match self {
            TaggerType::None => MILKCAT_TAGGER_NONE,
            TaggerType::Hmm => MILKCAT_TAGGER_HMM,
            TaggerType::Crf => MILKCAT_TAGGER_CRF,
            TaggerType::Mixed => MILKCAT_TAGGER_MIXED,
        }
    }
}

/// Pre-paired segmenter + tagger preset understood by the engine.
///
/// Codes outside the known presets are carried as [`AnalyzerType::Other`] and
/// passed to the engine untouched; it decides whether they are valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum AnalyzerType {
    /// Default segmenter and tagger.
    #[default]
    Default,
    /// CRF segmenter, no tagging.
    CrfSegmenter,
    /// CRF segmenter and CRF tagger.
    CrfAnalyzer,
    /// Default segmenter, no tagging.
    DefaultSegmenter,
    /// Bigram segmenter, no tagging.
    BigramSegmenter,
    /// Engine-defined code this crate does not know about.
    Other(i32),
}

impl AnalyzerType {
    /// Wraps a raw preset code. Never fails.
    pub fn from_code(code: i32) -> Self {
        match code {
            MILKCAT_DEFAULT_ANALYZER => AnalyzerType::Default,
            MILKCAT_CRF_SEGMENTER => AnalyzerType::CrfSegmenter,
            MILKCAT_CRF_ANALYZER => AnalyzerType::CrfAnalyzer,
            MILKCAT_DEFAULT_SEGMENTER => AnalyzerType::DefaultSegmenter,
            MILKCAT_BIGRAM_SEGMENTER => AnalyzerType::BigramSegmenter,
            other => AnalyzerType::Other(other),
        }
    }

    /// Engine code for this preset.
    pub fn code(self) -> i32 {
        match self {
            AnalyzerType::Default => MILKCAT_DEFAULT_ANALYZER,
            AnalyzerType::CrfSegmenter => MILKCAT_CRF_SEGMENTER,
            AnalyzerType::CrfAnalyzer => MILKCAT_CRF_ANALYZER,
            AnalyzerType::DefaultSegmenter => MILKCAT_DEFAULT_SEGMENTER,
            AnalyzerType::BigramSegmenter => MILKCAT_BIGRAM_SEGMENTER,
            AnalyzerType::Other(code) => code,
        }
    }
}

impl From<i32> for AnalyzerType {
    fn from(code: i32) -> Self {
        AnalyzerType::from_code(code)
    }
}

/// Resolved pipeline selection handed to the engine when an analyzer is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Pipeline {
    /// One engine preset (`milkcat_new`).
    Preset(AnalyzerType),
    /// Explicit segmenter/tagger pair (`milkcat_parser_new`).
    Custom {
        /// Segmenter variant.
        segmenter: SegmenterType,
        /// Tagger variant.
        tagger: TaggerType,
    },
}

impl Pipeline {
    /// Builds a custom pipeline from raw split codes, applying the permissive
    /// per-axis fallback of [`SegmenterType::from_code`] and
    /// [`TaggerType::from_code`].
    pub fn from_codes(segmenter_code: i32, tagger_code: i32) -> Self {
        Pipeline::Custom {
            segmenter: SegmenterType::from_code(segmenter_code),
            tagger: TaggerType::from_code(tagger_code),
        }
    }
}

impl Default for Pipeline {
    fn default() -> Self {
        Pipeline::Preset(AnalyzerType::Default)
    }
}

impl From<AnalyzerType> for Pipeline {
    fn from(value: AnalyzerType) -> Self {
        Pipeline::Preset(value)
    }
}

impl From<(SegmenterType, TaggerType)> for Pipeline {
    fn from((segmenter, tagger): (SegmenterType, TaggerType)) -> Self {
        Pipeline::Custom { segmenter, tagger }
    }
}

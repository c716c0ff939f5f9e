use std::cell::RefCell;
use std::env;
use std::ffi::{CStr, CString, OsString};
use std::os::raw::{c_char, c_int, c_void};
use std::ptr;
use std::sync::{Mutex, OnceLock};

use crate::config::MilkcatItemRaw;
use crate::constants::{
    MILKCAT_BIGRAM_SEGMENTER, MILKCAT_CRF_ANALYZER, MILKCAT_CRF_SEGMENTER,
    MILKCAT_DEFAULT_ANALYZER, MILKCAT_DEFAULT_SEGMENTER, MILKCAT_TAGGER_NONE,
    MILKCAT_WORD_TYPE_CHINESE, MILKCAT_WORD_TYPE_ENGLISH, MILKCAT_WORD_TYPE_NUMBER,
    MILKCAT_WORD_TYPE_PUNCTUATION,
};
use crate::native::MilkcatApi;
use crate::runtime::MilkcatLibrary;

fn env_lock() -> &'static Mutex<()> {
    static LOCK: OnceLock<Mutex<()>> = OnceLock::new();
    LOCK.get_or_init(|| Mutex::new(()))
}

fn set_env_var(key: &str, value: &str) {
    #[allow(unused_unsafe)]
    unsafe {
        env::set_var(key, value);
    }
}

fn remove_env_var(key: &str) {
    #[allow(unused_unsafe)]
    unsafe {
        env::remove_var(key);
    }
}

/// Runs a closure while holding a global environment lock and applying overrides.
pub(crate) fn with_env_vars<T>(overrides: &[(&str, Option<&str>)], f: impl FnOnce() -> T) -> T {
    let _guard = env_lock()
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let backups: Vec<(&str, Option<OsString>)> = overrides
        .iter()
        .map(|(key, _)| (*key, env::var_os(key)))
        .collect();

    for (key, value) in overrides {
        match value {
            Some(value) => set_env_var(key, value),
            None => remove_env_var(key),
        }
    }

    let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(f));

    for (key, value) in backups.into_iter().rev() {
        match value {
            Some(value) => {
                #[allow(unused_unsafe)]
                unsafe {
                    env::set_var(key, value);
                }
            }
            None => remove_env_var(key),
        }
    }

    match result {
        Ok(result) => result,
        Err(payload) => std::panic::resume_unwind(payload),
    }
}

// ---------------------------------------------------------------------------
// In-process fake engine.
//
// Behaviour:
// - model paths containing "broken" fail to load,
// - model paths containing "no-crf" cannot build CRF presets,
// - segmentation is forward maximum matching over a small lexicon plus any
//   user dictionary words ("word TAG" per line), with digit/latin/punctuation
//   runs classified by word type,
// - the character '☠' aborts analysis: items before it are produced, then
//   the cursor ends and the last error is set.
//
// Diagnostics and the event log are thread-local, so parallel tests do not
// see each other's engine activity.
// ---------------------------------------------------------------------------

const BASE_LEXICON: &[(&str, &str)] = &[
    ("他", "PN"),
    ("来到", "VV"),
    ("了", "AS"),
    ("网易", "NR"),
    ("杭研", "NR"),
    ("大厦", "NN"),
    ("今天", "NT"),
    ("天气", "NN"),
    ("不错", "VA"),
];

const ABORT_CHAR: char = '☠';

thread_local! {
    static LAST_ERROR: RefCell<CString> = RefCell::new(CString::default());
    static EVENTS: RefCell<Vec<String>> = const { RefCell::new(Vec::new()) };
    static LAST_PIPELINE: RefCell<Option<FakePipeline>> = const { RefCell::new(None) };
}

/// Codes the fake engine received for the most recently built analyzer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(crate) enum FakePipeline {
    Preset(i32),
    Custom { segmenter: i32, tagger: i32 },
}

pub(crate) fn set_fake_error(message: &str) {
    let message = CString::new(message).unwrap_or_default();
    LAST_ERROR.with(|slot| *slot.borrow_mut() = message);
}

fn record(event: impl Into<String>) {
    EVENTS.with(|events| events.borrow_mut().push(event.into()));
}

/// Engine calls made on this thread since the last call.
pub(crate) fn take_fake_events() -> Vec<String> {
    EVENTS.with(|events| std::mem::take(&mut *events.borrow_mut()))
}

pub(crate) fn last_fake_pipeline() -> Option<FakePipeline> {
    LAST_PIPELINE.with(|slot| *slot.borrow())
}

struct FakeModel {
    lexicon: Vec<(String, String)>,
    crf_available: bool,
}

struct FakeAnalyzer {
    model: *const FakeModel,
    tagging: bool,
}

#[derive(Default)]
struct FakeCursor {
    items: Vec<(CString, CString, c_int)>,
    position: usize,
}

unsafe fn opt_str<'a>(pointer: *const c_char) -> Option<&'a str> {
    if pointer.is_null() {
        return None;
    }
    CStr::from_ptr(pointer).to_str().ok()
}

unsafe extern "C" fn fake_model_new(path: *const c_char) -> *mut c_void {
    record("model_new");
    let path = opt_str(path).unwrap_or("");
    if path.contains("broken") {
        set_fake_error("model data is malformed");
        return ptr::null_mut();
    }
    let model = FakeModel {
        lexicon: BASE_LEXICON
            .iter()
            .map(|(word, tag)| (word.to_string(), tag.to_string()))
            .collect(),
        crf_available: !path.contains("no-crf"),
    };
    Box::into_raw(Box::new(model)).cast()
}

unsafe extern "C" fn fake_model_destroy(model: *mut c_void) {
    record("model_destroy");
    if !model.is_null() {
        drop(Box::from_raw(model.cast::<FakeModel>()));
    }
}

unsafe extern "C" fn fake_model_set_userdict(model: *mut c_void, path: *const c_char) -> c_int {
    record("model_set_userdict");
    let Some(path) = opt_str(path) else {
        return 0;
    };
    let Ok(content) = std::fs::read_to_string(path) else {
        set_fake_error("cannot read user dictionary");
        return 0;
    };
    let model = &mut *model.cast::<FakeModel>();
    for line in content.lines().filter(|line| !line.trim().is_empty()) {
        let mut parts = line.split_whitespace();
        match (parts.next(), parts.next()) {
            (Some(word), Some(tag)) => model.lexicon.push((word.to_string(), tag.to_string())),
            _ => {
                set_fake_error("user dictionary line needs a word and a tag");
                return 0;
            }
        }
    }
    1
}

unsafe extern "C" fn fake_new(model: *mut c_void, analyzer_type: c_int) -> *mut c_void {
    record("new");
    LAST_PIPELINE.with(|slot| *slot.borrow_mut() = Some(FakePipeline::Preset(analyzer_type)));
    let fake_model = &*model.cast::<FakeModel>();
    let tagging = match analyzer_type {
        MILKCAT_DEFAULT_ANALYZER | MILKCAT_CRF_ANALYZER => true,
        MILKCAT_CRF_SEGMENTER | MILKCAT_DEFAULT_SEGMENTER | MILKCAT_BIGRAM_SEGMENTER => false,
        _ => {
            set_fake_error("unknown analyzer type");
            return ptr::null_mut();
        }
    };
    if matches!(analyzer_type, MILKCAT_CRF_SEGMENTER | MILKCAT_CRF_ANALYZER)
        && !fake_model.crf_available
    {
        set_fake_error("CRF segmenter model is missing");
        return ptr::null_mut();
    }
    Box::into_raw(Box::new(FakeAnalyzer {
        model: fake_model,
        tagging,
    }))
    .cast()
}

unsafe extern "C" fn fake_parser_new(
    model: *mut c_void,
    segmenter: c_int,
    tagger: c_int,
) -> *mut c_void {
    record("parser_new");
    LAST_PIPELINE.with(|slot| {
        *slot.borrow_mut() = Some(FakePipeline::Custom { segmenter, tagger })
    });
    Box::into_raw(Box::new(FakeAnalyzer {
        model: model.cast::<FakeModel>(),
        tagging: tagger != MILKCAT_TAGGER_NONE,
    }))
    .cast()
}

unsafe extern "C" fn fake_destroy(analyzer: *mut c_void) {
    record("destroy");
    if !analyzer.is_null() {
        drop(Box::from_raw(analyzer.cast::<FakeAnalyzer>()));
    }
}

unsafe extern "C" fn fake_cursor_new() -> *mut c_void {
    record("cursor_new");
    Box::into_raw(Box::<FakeCursor>::default()).cast()
}

unsafe extern "C" fn fake_cursor_destroy(cursor: *mut c_void) {
    record("cursor_destroy");
    if !cursor.is_null() {
        drop(Box::from_raw(cursor.cast::<FakeCursor>()));
    }
}

fn char_word_type(ch: char) -> c_int {
    if ch.is_ascii_digit() {
        MILKCAT_WORD_TYPE_NUMBER
    } else if ch.is_ascii_alphabetic() {
        MILKCAT_WORD_TYPE_ENGLISH
    } else if ch.is_ascii_punctuation() || "，。！？、；：".contains(ch) {
        MILKCAT_WORD_TYPE_PUNCTUATION
    } else {
        MILKCAT_WORD_TYPE_CHINESE
    }
}

fn segment(model: &FakeModel, text: &str, tagging: bool) -> Vec<(String, String, c_int)> {
    let chars: Vec<char> = text.chars().collect();
    let mut tokens = Vec::new();
    let mut index = 0;
    while index < chars.len() {
        let ch = chars[index];
        if ch.is_whitespace() {
            index += 1;
            continue;
        }
        let word_type = char_word_type(ch);
        let (word, tag) = if word_type == MILKCAT_WORD_TYPE_CHINESE {
            let matched = model
                .lexicon
                .iter()
                .filter(|(word, _)| {
                    let word_chars: Vec<char> = word.chars().collect();
                    chars[index..].starts_with(&word_chars)
                })
                .max_by_key(|(word, _)| word.chars().count());
            match matched {
                Some((word, tag)) => (word.clone(), tag.clone()),
                None => (ch.to_string(), "NN".to_string()),
            }
        } else {
            let run: String = chars[index..]
                .iter()
                .take_while(|next| !next.is_whitespace() && char_word_type(**next) == word_type)
                .collect();
            let tag = match word_type {
                MILKCAT_WORD_TYPE_NUMBER => "CD",
                MILKCAT_WORD_TYPE_PUNCTUATION => "PU",
                _ => "NN",
            };
            (run, tag.to_string())
        };
        index += word.chars().count();
        let tag = if tagging { tag } else { String::new() };
        tokens.push((word, tag, word_type));
    }
    tokens
}

unsafe extern "C" fn fake_analyze(analyzer: *mut c_void, cursor: *mut c_void, text: *const c_char) {
    record("analyze");
    let analyzer = &*analyzer.cast::<FakeAnalyzer>();
    let cursor = &mut *cursor.cast::<FakeCursor>();
    let text = opt_str(text).unwrap_or("");

    let (text, aborted) = match text.find(ABORT_CHAR) {
        Some(position) => (&text[..position], true),
        None => (text, false),
    };
    let model = &*analyzer.model;
    cursor.items = segment(model, text, analyzer.tagging)
        .into_iter()
        .filter_map(|(word, tag, word_type)| {
            Some((CString::new(word).ok()?, CString::new(tag).ok()?, word_type))
        })
        .collect();
    cursor.position = 0;
    if aborted {
        set_fake_error("analysis aborted");
    }
}

unsafe extern "C" fn fake_cursor_get_next(cursor: *mut c_void, item: *mut MilkcatItemRaw) -> c_int {
    let cursor = &mut *cursor.cast::<FakeCursor>();
    let Some((word, tag, word_type)) = cursor.items.get(cursor.position) else {
        return 0;
    };
    *item = MilkcatItemRaw {
        word: word.as_ptr(),
        part_of_speech_tag: tag.as_ptr(),
        word_type: *word_type,
    };
    cursor.position += 1;
    1
}

unsafe extern "C" fn fake_last_error() -> *const c_char {
    LAST_ERROR.with(|slot| slot.borrow().as_ptr())
}

unsafe extern "C" fn fake_version() -> *const c_char {
    b"0.0.0-fake\0".as_ptr().cast()
}

/// Symbol table backed by the fake engine.
pub(crate) fn fake_api() -> MilkcatApi {
    MilkcatApi {
        milkcat_model_new: fake_model_new,
        milkcat_model_destroy: fake_model_destroy,
        milkcat_model_set_userdict: fake_model_set_userdict,
        milkcat_new: fake_new,
        milkcat_parser_new: Some(fake_parser_new),
        milkcat_destroy: fake_destroy,
        milkcat_cursor_new: fake_cursor_new,
        milkcat_cursor_destroy: fake_cursor_destroy,
        milkcat_analyze: fake_analyze,
        milkcat_cursor_get_next: fake_cursor_get_next,
        milkcat_last_error: fake_last_error,
        milkcat_version: Some(fake_version),
    }
}

/// Fake library exporting every symbol.
pub(crate) fn fake_library() -> MilkcatLibrary {
    MilkcatLibrary::from_api(fake_api())
}

/// Fake library of an older engine without `milkcat_parser_new`/`milkcat_version`.
pub(crate) fn legacy_fake_library() -> MilkcatLibrary {
    MilkcatLibrary::from_api(MilkcatApi {
        milkcat_parser_new: None,
        milkcat_version: None,
        ..fake_api()
    })
}

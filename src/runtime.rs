use std::env;
use std::ffi::{CStr, CString};
use std::iter::FusedIterator;
use std::os::raw::c_int;
use std::path::{Path, PathBuf};
use std::ptr;
use std::sync::{Arc, Mutex, MutexGuard};

use crate::config::{MilkcatCursorHandle, MilkcatHandle, MilkcatItemRaw, MilkcatModelHandle};
use crate::discovery::{
    default_library_candidates, discover_default_library_path, LIBRARY_PATH_ENV,
};
use crate::error::{MilkcatError, Result};
use crate::model::Item;
use crate::native::{last_error_or, read_last_error, DynamicLibrary, LoadedLibrary, MilkcatApi};
use crate::pipeline::{AnalyzerType, Pipeline};
use crate::projection::{Fields, Projection, Row, Shape};
use crate::types::{MilkCatConfig, ModelConfig};

/// Handle to a loaded MilkCat dynamic library plus resolved function table.
///
/// Cloning is cheap; every clone shares the same loaded library.
#[derive(Clone)]
pub struct MilkcatLibrary {
    inner: Arc<LoadedLibrary>,
}

impl MilkcatLibrary {
    /// Loads a MilkCat dynamic library from an explicit path.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let library = DynamicLibrary::open(path.as_ref())?;
        let api = unsafe { MilkcatApi::load(&library)? };
        log::debug!("loaded milkcat library from {}", path.as_ref().display());
        Ok(Self {
            inner: Arc::new(LoadedLibrary {
                _library: Some(library),
                api,
            }),
        })
    }

    /// Loads MilkCat from common platform-specific locations and caches it.
    pub fn load_default() -> Result<Self> {
        static DEFAULT_LIBRARY: Mutex<Option<Arc<LoadedLibrary>>> = Mutex::new(None);

        let mut guard = DEFAULT_LIBRARY.lock().map_err(|_| {
            MilkcatError::LibraryLoad("failed to lock default library cache".to_string())
        })?;

        if let Some(inner) = guard.as_ref() {
            return Ok(Self {
                inner: inner.clone(),
            });
        }

        let loaded = Self::load_default_internal()?;
        *guard = Some(loaded.inner.clone());
        Ok(loaded)
    }

    fn load_default_internal() -> Result<Self> {
        let mut errors = Vec::new();

        if let Some(path) = discover_default_library_path() {
            match Self::load(&path) {
                Ok(loaded) => return Ok(loaded),
                Err(error) => {
                    log::warn!("failed to load milkcat from {}: {error}", path.display());
                    errors.push(format!("{}: {}", path.display(), error));
                }
            }
        }

        for candidate in default_library_candidates() {
            match Self::load(candidate) {
                Ok(loaded) => return Ok(loaded),
                Err(error) => errors.push(format!("{candidate}: {error}")),
            }
        }

        Err(MilkcatError::LibraryLoad(format!(
            "set {LIBRARY_PATH_ENV} to the dynamic library path. tried: {}",
            errors.join(" | ")
        )))
    }

    /// Loads from `MILKCAT_LIBRARY_PATH` if set, otherwise falls back to
    /// [`Self::load_default`].
    pub fn load_from_env_or_default() -> Result<Self> {
        match env::var_os(LIBRARY_PATH_ENV) {
            Some(path) if !path.is_empty() => Self::load(PathBuf::from(path)),
            _ => Self::load_default(),
        }
    }

    #[cfg(test)]
    pub(crate) fn from_api(api: MilkcatApi) -> Self {
        Self {
            inner: Arc::new(LoadedLibrary {
                _library: None,
                api,
            }),
        }
    }

    /// Returns whether the library can build explicit segmenter/tagger
    /// pipelines ([`Pipeline::Custom`]).
    pub fn supports_custom_pipeline(&self) -> bool {
        self.inner.api.milkcat_parser_new.is_some()
    }

    /// Returns the engine version string when the library exports one.
    pub fn version(&self) -> Option<String> {
        let version = self.inner.api.milkcat_version?;
        let pointer = unsafe { version() };
        if pointer.is_null() {
            return None;
        }
        Some(
            unsafe { CStr::from_ptr(pointer) }
                .to_string_lossy()
                .to_string(),
        )
    }

    /// Last diagnostic message reported by the engine, if any.
    pub fn last_error(&self) -> Option<String> {
        read_last_error(&self.inner.api)
    }

    /// Loads a [`Model`] with this library.
    pub fn model(&self, config: ModelConfig) -> Result<Model> {
        Model::load(self.inner.clone(), config)
    }
}

#[derive(Debug, Default)]
struct ModelState {
    analyzers: usize,
    user_dictionaries: Vec<PathBuf>,
}

struct ModelInner {
    library: Arc<LoadedLibrary>,
    handle: MilkcatModelHandle,
    model_path: Option<PathBuf>,
    state: Mutex<ModelState>,
}

// The engine model is read-only once built; user dictionary attachment goes
// through `state`, which also counts the analyzers reading it.
unsafe impl Send for ModelInner {}
unsafe impl Sync for ModelInner {}

impl ModelInner {
    fn lock_state(&self) -> MutexGuard<'_, ModelState> {
        self.state
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Drop for ModelInner {
    fn drop(&mut self) {
        if self.handle.is_null() {
            return;
        }
        unsafe {
            (self.library.api.milkcat_model_destroy)(self.handle);
        }
        self.handle = ptr::null_mut();
        log::debug!("released milkcat model");
    }
}

/// Loaded dictionary and model data, optionally overlaid with user
/// dictionaries.
///
/// `Model` is a shared handle: clones and every [`Analyzer`] built from it
/// reference the same engine model, which is released when the last of them
/// is dropped.
#[derive(Clone)]
pub struct Model {
    inner: Arc<ModelInner>,
}

impl Model {
    /// Loads a model with the default library. `None` selects the engine's
    /// bundled model.
    ///
    /// # Examples
    /// ```no_run
    /// use milkcat_rs::{Analyzer, AnalyzerType, Model};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let model = Model::new(None)?;
    /// let mut analyzer = Analyzer::new(&model, AnalyzerType::Default)?;
    /// for item in analyzer.analyze("他来到了网易杭研大厦")? {
    ///     println!("{}/{}", item.word, item.pos_tag);
    /// }
    /// # Ok(())
    /// # }
    /// ```
    pub fn new(model_path: Option<&Path>) -> Result<Self> {
        let config = ModelConfig {
            model_path: model_path.map(Path::to_path_buf),
            user_dictionary_path: None,
        };
        Self::from_config(config)
    }

    /// Loads a model with the default library from a full [`ModelConfig`].
    pub fn from_config(config: ModelConfig) -> Result<Self> {
        MilkcatLibrary::load_from_env_or_default()?.model(config)
    }

    fn load(library: Arc<LoadedLibrary>, config: ModelConfig) -> Result<Self> {
        if let Some(path) = config.model_path.as_ref() {
            if !path.exists() {
                return Err(MilkcatError::ModelLoad(format!(
                    "model path {} does not exist",
                    path.display()
                )));
            }
        }

        let model_path_c = config
            .model_path
            .as_ref()
            .map(|path| CString::new(path.to_string_lossy().to_string()))
            .transpose()?;
        let model_path_ptr = model_path_c
            .as_ref()
            .map_or(ptr::null(), |value| value.as_ptr());

        let handle = unsafe { (library.api.milkcat_model_new)(model_path_ptr) };
        if handle.is_null() {
            return Err(MilkcatError::ModelLoad(last_error_or(
                &library.api,
                "milkcat_model_new returned a null handle",
            )));
        }

        match config.model_path.as_ref() {
            Some(path) => log::debug!("loaded milkcat model from {}", path.display()),
            None => log::debug!("loaded bundled milkcat model"),
        }

        let model = Self {
            inner: Arc::new(ModelInner {
                library,
                handle,
                model_path: config.model_path,
                state: Mutex::new(ModelState::default()),
            }),
        };

        if let Some(path) = config.user_dictionary_path {
            model.set_user_dictionary(path)?;
        }

        Ok(model)
    }

    /// Attaches a user dictionary.
    ///
    /// Calling it again hands the new dictionary to the engine, which merges
    /// or replaces according to its own policy. Fails while any [`Analyzer`]
    /// holds this model.
    pub fn set_user_dictionary(&self, path: impl AsRef<Path>) -> Result<()> {
        let path = path.as_ref();
        let mut state = self.inner.lock_state();
        if state.analyzers > 0 {
            return Err(MilkcatError::InvalidArgument(format!(
                "cannot attach a user dictionary while {} analyzer(s) use this model",
                state.analyzers
            )));
        }
        if !path.exists() {
            return Err(MilkcatError::UserDictionary(format!(
                "{} does not exist",
                path.display()
            )));
        }

        let path_c = CString::new(path.to_string_lossy().to_string())?;
        let api = &self.inner.library.api;
        let accepted =
            unsafe { (api.milkcat_model_set_userdict)(self.inner.handle, path_c.as_ptr()) };
        if accepted == 0 {
            return Err(MilkcatError::UserDictionary(last_error_or(
                api,
                "milkcat_model_set_userdict rejected the dictionary",
            )));
        }

        log::debug!("attached user dictionary {}", path.display());
        state.user_dictionaries.push(path.to_path_buf());
        Ok(())
    }

    /// Legacy form of [`Self::set_user_dictionary`] reporting acceptance as a flag.
    pub fn set_userdict(&self, path: impl AsRef<Path>) -> bool {
        match self.set_user_dictionary(path) {
            Ok(()) => true,
            Err(error) => {
                log::debug!("user dictionary not attached: {error}");
                false
            }
        }
    }

    /// User dictionaries attached so far, in attachment order.
    pub fn user_dictionaries(&self) -> Vec<PathBuf> {
        self.inner.lock_state().user_dictionaries.clone()
    }

    /// Model directory, or `None` for the bundled model.
    pub fn model_path(&self) -> Option<&Path> {
        self.inner.model_path.as_deref()
    }

    /// Number of live analyzers built from this model.
    pub fn analyzer_count(&self) -> usize {
        self.inner.lock_state().analyzers
    }

    /// Library this model was loaded with.
    pub fn library(&self) -> MilkcatLibrary {
        MilkcatLibrary {
            inner: self.inner.library.clone(),
        }
    }

    fn api(&self) -> &MilkcatApi {
        &self.inner.library.api
    }
}

/// A configured segmentation + tagging pipeline bound to one [`Model`].
///
/// An analyzer owns exactly one engine cursor, reused by every call to
/// [`Analyzer::analyze`]. The returned [`Cursor`] borrows the analyzer
/// mutably, so starting a new analysis requires the previous cursor to be
/// gone. An analyzer can move between threads but is never shared.
pub struct Analyzer {
    model: Model,
    handle: MilkcatHandle,
    cursor: MilkcatCursorHandle,
    pipeline: Pipeline,
    last_error: Option<String>,
}

// Handles are owned exclusively by this analyzer.
unsafe impl Send for Analyzer {}

impl Analyzer {
    /// Builds an analyzer from an engine preset.
    pub fn new(model: &Model, analyzer_type: AnalyzerType) -> Result<Self> {
        Self::with_pipeline(model, Pipeline::Preset(analyzer_type))
    }

    /// Builds an analyzer from raw segmenter/tagger codes.
    ///
    /// Unknown codes are not errors: each axis keeps its default, see
    /// [`crate::SegmenterType::from_code`] and [`crate::TaggerType::from_code`].
    pub fn with_split(model: &Model, segmenter_type: i32, tagger_type: i32) -> Result<Self> {
        Self::with_pipeline(model, Pipeline::from_codes(segmenter_type, tagger_type))
    }

    /// Builds an analyzer for any [`Pipeline`].
    pub fn with_pipeline(model: &Model, pipeline: Pipeline) -> Result<Self> {
        let api = *model.api();
        let mut state = model.inner.lock_state();

        let handle = match pipeline {
            Pipeline::Preset(analyzer_type) => unsafe {
                (api.milkcat_new)(model.inner.handle, analyzer_type.code() as c_int)
            },
            Pipeline::Custom { segmenter, tagger } => {
                let parser_new =
                    require_optional_api(api.milkcat_parser_new, "milkcat_parser_new")?;
                unsafe {
                    parser_new(
                        model.inner.handle,
                        segmenter.code() as c_int,
                        tagger.code() as c_int,
                    )
                }
            }
        };
        if handle.is_null() {
            return Err(MilkcatError::PipelineConstruction(last_error_or(
                &api,
                "the engine returned a null analyzer handle",
            )));
        }

        let cursor = unsafe { (api.milkcat_cursor_new)() };
        if cursor.is_null() {
            unsafe {
                (api.milkcat_destroy)(handle);
            }
            return Err(MilkcatError::Api(last_error_or(
                &api,
                "milkcat_cursor_new returned a null handle",
            )));
        }

        state.analyzers += 1;
        drop(state);
        log::debug!("built milkcat analyzer for {pipeline:?}");

        Ok(Self {
            model: model.clone(),
            handle,
            cursor,
            pipeline,
            last_error: None,
        })
    }

    /// Pipeline this analyzer was built with.
    pub fn pipeline(&self) -> Pipeline {
        self.pipeline
    }

    /// Model this analyzer reads from.
    pub fn model(&self) -> &Model {
        &self.model
    }

    /// Starts analyzing `text` and returns a lazy cursor over its items.
    ///
    /// Whatever the previous cursor left unread is discarded. Empty text
    /// yields an empty cursor.
    ///
    /// # Examples
    /// ```no_run
    /// use milkcat_rs::{Analyzer, AnalyzerType, Model};
    ///
    /// # fn main() -> Result<(), Box<dyn std::error::Error>> {
    /// let model = Model::new(None)?;
    /// let mut analyzer = Analyzer::new(&model, AnalyzerType::Default)?;
    /// let words: Vec<String> = analyzer.analyze("今天天气不错")?.map(|item| item.word).collect();
    /// assert!(!words.is_empty());
    /// # Ok(())
    /// # }
    /// ```
    pub fn analyze(&mut self, text: &str) -> Result<Cursor<'_>> {
        let text_c = CString::new(text)?;
        Ok(self.start(&text_c))
    }

    /// Analyzes `text` and collects only the selected fields.
    ///
    /// With no field selected this returns [`Projection::Void`] without
    /// running the engine.
    pub fn analyze_with(&mut self, text: &str, fields: Fields) -> Result<Projection> {
        let text_c = CString::new(text)?;
        let Some(shape) = Shape::from_fields(fields) else {
            return Ok(Projection::Void);
        };
        Ok(Projection::collect_from(&shape, self.start(&text_c)))
    }

    /// Full `(word, pos_tag, word_type)` triples for every token.
    pub fn parse(&mut self, text: &str) -> Result<Vec<(String, String, i32)>> {
        Ok(self.analyze(text)?.map(Item::into_tuple).collect())
    }

    /// Segments `text` into words.
    pub fn seg(&mut self, text: &str) -> Result<Vec<String>> {
        Ok(self.analyze(text)?.map(|item| item.word).collect())
    }

    /// Segments `text` into `(word, pos_tag)` pairs.
    pub fn pos_tag(&mut self, text: &str) -> Result<Vec<(String, String)>> {
        Ok(self
            .analyze(text)?
            .map(|item| (item.word, item.pos_tag))
            .collect())
    }

    /// Diagnostic the engine raised during the latest analysis on this
    /// analyzer, if any.
    ///
    /// A cursor that stops early because the engine failed looks the same as
    /// one that reached the end of the text; this is the only way to tell.
    /// Messages left over from earlier engine calls are not reported. An
    /// engine message identical to the one already pending before the call
    /// cannot be told apart from it.
    pub fn last_error(&self) -> Option<String> {
        self.last_error.clone()
    }

    fn start(&mut self, text: &CStr) -> Cursor<'_> {
        self.last_error = None;
        if text.to_bytes().is_empty() {
            log::trace!("empty text, skipping engine call");
            return Cursor::exhausted(self);
        }
        log::trace!("analyzing {} bytes", text.to_bytes().len());
        let api = *self.model.api();
        let baseline = read_last_error(&api);
        unsafe {
            (api.milkcat_analyze)(self.handle, self.cursor, text.as_ptr());
        }
        self.note_new_error(baseline.as_deref());
        Cursor::new(self, baseline)
    }

    fn note_new_error(&mut self, baseline: Option<&str>) {
        let current = read_last_error(self.model.api());
        if current.is_some() && current.as_deref() != baseline {
            log::debug!("engine reported during analysis: {current:?}");
            self.last_error = current;
        }
    }
}

impl Drop for Analyzer {
    fn drop(&mut self) {
        let api = *self.model.api();
        // The cursor may point into pipeline buffers; it goes first.
        if !self.cursor.is_null() {
            unsafe {
                (api.milkcat_cursor_destroy)(self.cursor);
            }
            self.cursor = ptr::null_mut();
        }
        if !self.handle.is_null() {
            unsafe {
                (api.milkcat_destroy)(self.handle);
            }
            self.handle = ptr::null_mut();
        }
        let mut state = self.model.inner.lock_state();
        state.analyzers = state.analyzers.saturating_sub(1);
    }
}

/// Single-pass cursor over the items of one [`Analyzer::analyze`] call.
///
/// Items are pulled from the engine on demand and copied out immediately.
/// The cursor is not restartable; call `analyze` again to replay a text.
pub struct Cursor<'a> {
    analyzer: &'a mut Analyzer,
    peeked: Option<Item>,
    finished: bool,
    // Engine diagnostic pending before this analysis started.
    baseline: Option<String>,
}

impl<'a> Cursor<'a> {
    fn new(analyzer: &'a mut Analyzer, baseline: Option<String>) -> Self {
        Self {
            analyzer,
            peeked: None,
            finished: false,
            baseline,
        }
    }

    fn exhausted(analyzer: &'a mut Analyzer) -> Self {
        Self {
            analyzer,
            peeked: None,
            finished: true,
            baseline: None,
        }
    }

    /// Whether another item is available.
    pub fn has_next(&mut self) -> bool {
        self.current().is_some()
    }

    /// The item the cursor is positioned on, without consuming it.
    pub fn current(&mut self) -> Option<&Item> {
        if self.peeked.is_none() {
            self.peeked = self.fetch();
        }
        self.peeked.as_ref()
    }

    /// Moves past the current item.
    pub fn advance(&mut self) {
        if self.peeked.take().is_none() {
            let _ = self.fetch();
        }
    }

    /// Reshapes the remaining items according to `shape`.
    pub fn project(self, shape: Shape) -> Projected<'a> {
        Projected {
            cursor: self,
            shape,
        }
    }

    fn fetch(&mut self) -> Option<Item> {
        if self.finished {
            return None;
        }
        let api = self.analyzer.model.api();
        let mut raw = MilkcatItemRaw::default();
        let has_item = unsafe { (api.milkcat_cursor_get_next)(self.analyzer.cursor, &mut raw) };
        if has_item == 0 {
            self.finished = true;
            self.analyzer.note_new_error(self.baseline.as_deref());
            return None;
        }
        Some(Item::from(&raw))
    }
}

impl Iterator for Cursor<'_> {
    type Item = Item;

    fn next(&mut self) -> Option<Item> {
        match self.peeked.take() {
            Some(item) => Some(item),
            None => self.fetch(),
        }
    }
}

impl FusedIterator for Cursor<'_> {}

/// Lazy projection of a [`Cursor`] under a fixed [`Shape`].
pub struct Projected<'a> {
    cursor: Cursor<'a>,
    shape: Shape,
}

impl Projected<'_> {
    /// Shape applied to every element.
    pub fn shape(&self) -> &Shape {
        &self.shape
    }
}

impl Iterator for Projected<'_> {
    type Item = Row;

    fn next(&mut self) -> Option<Row> {
        self.cursor.next().map(|item| self.shape.apply(item))
    }
}

impl FusedIterator for Projected<'_> {}

/// High-level analyzer owning its model, configured in one step.
///
/// # Examples
/// ```no_run
/// use milkcat_rs::{AnalyzerType, MilkCat, MilkCatConfig};
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let config = MilkCatConfig::default()
///     .with_analyzer_type(AnalyzerType::CrfAnalyzer)
///     .with_user_dictionary("/path/to/userdict.txt");
/// let mut milkcat = MilkCat::from_config(config)?;
/// println!("{:?}", milkcat.pos_tag("今天天气不错")?);
/// # Ok(())
/// # }
/// ```
pub struct MilkCat {
    analyzer: Analyzer,
}

impl MilkCat {
    /// Creates an instance using [`MilkCatConfig::default`].
    pub fn new() -> Result<Self> {
        Self::from_config(MilkCatConfig::default())
    }

    /// Shorthand for selecting only the analyzer preset.
    pub fn with_analyzer_type(analyzer_type: AnalyzerType) -> Result<Self> {
        Self::from_config(MilkCatConfig::default().with_analyzer_type(analyzer_type))
    }

    /// Creates an instance from a full [`MilkCatConfig`].
    pub fn from_config(config: MilkCatConfig) -> Result<Self> {
        let library = match config.library_path.as_ref() {
            Some(path) => MilkcatLibrary::load(path)?,
            None => MilkcatLibrary::load_from_env_or_default()?,
        };
        Self::with_library(&library, config)
    }

    pub(crate) fn with_library(library: &MilkcatLibrary, config: MilkCatConfig) -> Result<Self> {
        let model = library.model(config.model)?;
        let analyzer = Analyzer::with_pipeline(&model, config.pipeline)?;
        Ok(Self { analyzer })
    }

    /// Segments `text` into words.
    pub fn seg(&mut self, text: &str) -> Result<Vec<String>> {
        self.analyzer.seg(text)
    }

    /// Segments `text` into `(word, pos_tag)` pairs.
    pub fn pos_tag(&mut self, text: &str) -> Result<Vec<(String, String)>> {
        self.analyzer.pos_tag(text)
    }

    /// Analyzes `text` exposing the selected fields.
    pub fn analyze(&mut self, text: &str, fields: Fields) -> Result<Projection> {
        self.analyzer.analyze_with(text, fields)
    }

    /// Underlying analyzer.
    pub fn analyzer(&self) -> &Analyzer {
        &self.analyzer
    }

    /// Underlying analyzer, for streaming access.
    pub fn analyzer_mut(&mut self) -> &mut Analyzer {
        &mut self.analyzer
    }

    /// Model the analyzer reads from.
    pub fn model(&self) -> &Model {
        self.analyzer.model()
    }
}

static SHARED_SEGMENTER: Mutex<Option<MilkCat>> = Mutex::new(None);
static SHARED_TAGGER: Mutex<Option<MilkCat>> = Mutex::new(None);

/// Runs `f` on the analyzer cached in `slot`, building it with `build` on
/// first use. A failed build leaves the slot empty so the next call retries.
/// The slot stays locked for the whole call; callers are serialised.
fn with_shared<T>(
    slot: &Mutex<Option<MilkCat>>,
    build: impl FnOnce() -> Result<MilkCat>,
    f: impl FnOnce(&mut MilkCat) -> Result<T>,
) -> Result<T> {
    let mut shared = slot
        .lock()
        .unwrap_or_else(|poisoned| poisoned.into_inner());
    let milkcat = match shared.take() {
        Some(milkcat) => milkcat,
        None => {
            let milkcat = build()?;
            log::debug!("built shared milkcat analyzer");
            milkcat
        }
    };
    f(shared.insert(milkcat))
}

pub(crate) fn shared_seg(
    slot: &Mutex<Option<MilkCat>>,
    build: impl FnOnce(AnalyzerType) -> Result<MilkCat>,
    text: &str,
) -> Result<Vec<String>> {
    with_shared(
        slot,
        || build(AnalyzerType::DefaultSegmenter),
        |milkcat| milkcat.seg(text),
    )
}

pub(crate) fn shared_pos_tag(
    slot: &Mutex<Option<MilkCat>>,
    build: impl FnOnce(AnalyzerType) -> Result<MilkCat>,
    text: &str,
) -> Result<Vec<(String, String)>> {
    with_shared(
        slot,
        || build(AnalyzerType::Default),
        |milkcat| milkcat.pos_tag(text),
    )
}

/// Segments `text` with a process-wide analyzer built on first use
/// ([`AnalyzerType::DefaultSegmenter`]). The first call loads the model.
pub fn seg(text: &str) -> Result<Vec<String>> {
    shared_seg(&SHARED_SEGMENTER, MilkCat::with_analyzer_type, text)
}

/// Segments and tags `text` with a process-wide analyzer built on first use
/// ([`AnalyzerType::Default`]). The first call loads the model.
pub fn pos_tag(text: &str) -> Result<Vec<(String, String)>> {
    shared_pos_tag(&SHARED_TAGGER, MilkCat::with_analyzer_type, text)
}

fn require_optional_api<T: Copy>(function: Option<T>, name: &'static str) -> Result<T> {
    function.ok_or_else(|| {
        MilkcatError::PipelineConstruction(format!(
            "{name} is unavailable in the loaded MilkCat library version"
        ))
    })
}

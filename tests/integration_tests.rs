use milkcat_rs::*;

// These run against a real MilkCat installation and are skipped (pass
// trivially) when the library or its bundled model cannot be loaded.
fn load_model() -> Option<Model> {
    let library = match MilkcatLibrary::load_from_env_or_default() {
        Ok(library) => library,
        Err(error) => {
            println!("skipping: {error}");
            return None;
        }
    };
    match library.model(ModelConfig::from_env()) {
        Ok(model) => Some(model),
        Err(error) => {
            println!("skipping: {error}");
            None
        }
    }
}

#[test]
fn test_all_sequential() {
    let Some(model) = load_model() else {
        return;
    };
    run_analyze(&model);
    run_projection(&model);
    run_segmenter_only(&model);
    run_user_dictionary(&model);
}

fn run_analyze(model: &Model) {
    println!("Starting run_analyze");
    let mut analyzer = Analyzer::new(model, AnalyzerType::Default).expect("analyzer");
    let text = "他来到了网易杭研大厦";
    let items: Vec<Item> = analyzer.analyze(text).expect("analyze").collect();

    assert!(!items.is_empty());
    let joined: String = items.iter().map(|item| item.word.as_str()).collect();
    assert_eq!(joined, text);
    assert!(items.iter().all(|item| !item.pos_tag.is_empty()));

    let again: Vec<Item> = analyzer.analyze(text).expect("analyze").collect();
    assert_eq!(items, again);
    assert!(analyzer.analyze("").expect("empty").next().is_none());
}

fn run_projection(model: &Model) {
    println!("Starting run_projection");
    let mut analyzer = Analyzer::new(model, AnalyzerType::Default).expect("analyzer");
    let text = "今天天气不错";

    let words = analyzer
        .analyze_with(text, Fields::none().with_word(true))
        .expect("words");
    let tuples = analyzer
        .analyze_with(text, Fields::all())
        .expect("tuples");
    assert!(matches!(words, Projection::Scalars(_)));
    assert!(matches!(tuples, Projection::Tuples(_)));
    assert_eq!(words.len(), tuples.len());
    assert!(analyzer
        .analyze_with(text, Fields::none())
        .expect("void")
        .is_void());
}

fn run_segmenter_only(model: &Model) {
    println!("Starting run_segmenter_only");
    let mut analyzer = Analyzer::new(model, AnalyzerType::DefaultSegmenter).expect("analyzer");
    let words = analyzer.seg("他来到了网易杭研大厦").expect("seg");
    assert!(words.len() > 1);

    if model.library().supports_custom_pipeline() {
        let mut custom = Analyzer::with_split(model, MILKCAT_SEGMENTER_BIGRAM, MILKCAT_TAGGER_HMM)
            .expect("custom pipeline");
        assert!(!custom.pos_tag("今天天气不错").expect("pos_tag").is_empty());
    }
}

fn run_user_dictionary(model: &Model) {
    println!("Starting run_user_dictionary");
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("userdict.txt");
    std::fs::write(&path, "杭研大厦 NR\n").expect("write dictionary");

    let library = model.library();
    let fresh = library
        .model(ModelConfig::from_env().with_user_dictionary(&path))
        .expect("model with user dictionary");
    let mut analyzer = Analyzer::new(&fresh, AnalyzerType::Default).expect("analyzer");
    let words = analyzer.seg("他来到了网易杭研大厦").expect("seg");
    assert!(
        words.iter().any(|word| word == "杭研大厦"),
        "user dictionary word should be kept whole: {words:?}"
    );
}

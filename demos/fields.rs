use milkcat_rs::{Analyzer, Fields, MilkCat, MilkCatConfig, Pipeline, SegmenterType, TaggerType};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = MilkCatConfig::default()
        .with_pipeline((SegmenterType::Bigram, TaggerType::Hmm));
    let mut milkcat = MilkCat::from_config(config)?;

    let text = "今天天气不错";
    println!("words: {:?}", milkcat.analyze(text, Fields::none().with_word(true))?);
    println!(
        "tags and types: {:?}",
        milkcat.analyze(text, Fields::all().with_word(false))?
    );

    let mut analyzer = Analyzer::with_split(milkcat.model(), 9, 0)?;
    println!("split codes resolved to {:?}", analyzer.pipeline());
    println!("{:?}", analyzer.seg(text)?);

    assert_ne!(analyzer.pipeline(), Pipeline::default());
    Ok(())
}

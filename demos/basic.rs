use milkcat_rs::{Analyzer, AnalyzerType, Model};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let model = Model::new(None)?;
    let mut analyzer = Analyzer::new(&model, AnalyzerType::Default)?;

    let text = "他来到了网易杭研大厦";
    for item in analyzer.analyze(text)? {
        println!("{}/{} (type {})", item.word, item.pos_tag, item.word_type);
    }

    if let Some(message) = analyzer.last_error() {
        eprintln!("engine reported: {message}");
    }

    Ok(())
}

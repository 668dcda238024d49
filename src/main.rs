use norddeck::deck;

const OUTPUT_PATH: &str = "nord_dark_theme.pptx";

fn run() -> norddeck::Result<()> {
    let pres = deck::build()?;
    pres.save(OUTPUT_PATH)?;

    let rule = "=".repeat(60);
    println!("{rule}");
    println!("\u{2713} Nord Dark Theme PowerPoint created successfully!");
    println!("{rule}");
    println!("\u{1F4C1} Location: {OUTPUT_PATH}");
    println!("\u{1F4CA} Slides: {}", pres.slides().len());
    println!();
    println!("Slide Contents:");
    for (i, line) in deck::SLIDE_CONTENTS.iter().enumerate() {
        println!("  {}. {line}", i + 1);
    }
    println!();
    println!("\u{1F3A8} Features:");
    for feature in deck::FEATURES {
        println!("  \u{2022} {feature}");
    }
    println!("{rule}");
    Ok(())
}

fn main() {
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

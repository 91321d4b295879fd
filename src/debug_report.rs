use tashkeel::{RunOutput, WordSummary};

mod ansi {
    pub const RESET: &str = "\x1b[0m";
    pub const DIM: &str = "\x1b[2m";
    pub const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const CYAN: &str = "\x1b[36m";
    pub const GRAY: &str = "\x1b[90m";

    pub struct Palette {
        enabled: bool,
    }

    impl Palette {
        pub fn new(enabled: bool) -> Self {
            Self { enabled }
        }

        pub fn paint(&self, s: impl AsRef<str>, color: &str) -> String {
            if self.enabled { format!("{}{}{}", color, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", BOLD, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            if self.enabled { format!("{}{}{}", DIM, s.as_ref(), RESET) } else { s.as_ref().to_string() }
        }
    }
}

pub fn print_run(run: &RunOutput, color: bool) {
    let palette = ansi::Palette::new(color);
    let details = &run.details;
    println!("\n{}", palette.bold(palette.paint(format!("⚙  Input: \"{}\"", run.text.trim()), ansi::CYAN)));

    println!("\n{}", palette.paint("━━━ Rules (evaluation order) ━━━", ansi::GRAY));
    for (idx, rule) in details.rules.iter().enumerate() {
        println!("  {} {}", palette.paint(format!("{}.", idx + 1), ansi::GRAY), palette.paint(rule, ansi::BLUE));
    }

    println!("\n{}", palette.paint("━━━ Words ━━━", ansi::GRAY));
    if details.trace.is_empty() {
        println!("{}", palette.dim("  No words classified"));
    } else {
        let mut sentence = None;
        for word in &details.trace {
            if sentence != Some(word.sentence) {
                sentence = Some(word.sentence);
                println!("  {}", palette.paint(format!("sentence {}", word.sentence + 1), ansi::YELLOW));
            }
            print_word(word, &palette);
        }
    }

    println!("\n{}", palette.paint("━━━ Output ━━━", ansi::GRAY));
    println!("  {}", palette.bold(palette.paint(&run.output, ansi::GREEN)));

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Classify: {}  │  Apply: {}  │  {} sentence(s), {} word(s)",
        palette.paint(format!("{:?}", details.total), ansi::GREEN),
        palette.paint(format!("{:?}", details.classify), ansi::CYAN),
        palette.dim(format!("{:?}", details.apply)),
        details.sentences,
        details.words,
    );
    println!();
}

fn print_word(word: &WordSummary, palette: &ansi::Palette) {
    let neighbours = format!(
        "prev: {}  next: {}",
        word.previous.as_deref().unwrap_or("–"),
        word.next.as_deref().unwrap_or("–")
    );
    println!(
        "    {} {} {} {}",
        palette.bold(&word.word),
        palette.dim("→"),
        palette.paint(&word.output, ansi::GREEN),
        palette.dim(format!("│ {neighbours}")),
    );

    let mut flags = Vec::new();
    if word.tanween {
        flags.push("tanween");
    }
    if word.pronoun {
        flags.push("pronoun");
    }
    println!(
        "      {} {}  {} {} / {}  {} {}",
        palette.dim("rule:"),
        palette.paint(&word.rule, ansi::CYAN),
        palette.dim("│"),
        palette.paint(&word.category, ansi::BLUE),
        palette.paint(&word.case, ansi::BLUE),
        palette.dim(format!("│ {}", flags.join(", "))),
        palette.dim(&word.traits),
    );
}

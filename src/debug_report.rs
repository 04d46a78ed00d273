use namecase::{Gender, PrepareMetrics, RuleId, WordCollection};

mod ansi {
    const RESET: &str = "\x1b[0m";
    const DIM: &str = "\x1b[2m";
    const BOLD: &str = "\x1b[1m";

    pub const GREEN: &str = "\x1b[32m";
    pub const YELLOW: &str = "\x1b[33m";
    pub const BLUE: &str = "\x1b[34m";
    pub const MAGENTA: &str = "\x1b[35m";
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
            self.wrap(color, s.as_ref())
        }

        /// Bold and colored in one escape run.
        pub fn strong(&self, s: impl AsRef<str>, color: &str) -> String {
            self.wrap(&format!("{BOLD}{color}"), s.as_ref())
        }

        pub fn bold(&self, s: impl AsRef<str>) -> String {
            self.wrap(BOLD, s.as_ref())
        }

        pub fn dim(&self, s: impl AsRef<str>) -> String {
            self.wrap(DIM, s.as_ref())
        }

        fn wrap(&self, codes: &str, s: &str) -> String {
            if self.enabled { format!("{codes}{s}{RESET}") } else { s.to_string() }
        }
    }
}

/// Labelled cases, one per line.
pub fn print_cases(input: &str, labels: &[&str], cases: &[String], color: bool) {
    let palette = ansi::Palette::new(color);
    println!("\n{}", palette.strong(format!("⚙  Declining: \"{}\"", input.trim()), ansi::CYAN));
    println!("\n{}", palette.paint("━━━ Cases ━━━", ansi::GRAY));

    let width = labels.iter().map(|l| l.chars().count()).max().unwrap_or(0);
    for (label, form) in labels.iter().zip(cases) {
        let pad = " ".repeat(width - label.chars().count());
        println!("  {}{}  {}", palette.paint(label, ansi::BLUE), pad, palette.strong(form, ansi::GREEN));
    }
    println!();
}

/// Per-word diagnostics: role, gender evidence and the rule that fired.
pub fn print_words(words: &WordCollection, metrics: &PrepareMetrics, color: bool) {
    let palette = ansi::Palette::new(color);

    println!("{}", palette.paint("━━━ Words ━━━", ansi::GRAY));
    if words.is_empty() {
        println!("{}", palette.dim("  No words"));
    }
    for word in words {
        let prob = word.gender_probability();
        println!(
            "  {} {} {} {}",
            palette.paint(format!("[{}]", word.position()), ansi::GRAY),
            palette.bold(word.raw()),
            palette.dim("│"),
            palette.paint(word.role().to_string(), ansi::BLUE),
        );
        println!(
            "      {} {}  {} {}  {} {}",
            palette.dim("gender:"),
            palette.paint(gender_label(word.gender()), ansi::MAGENTA),
            palette.dim("│ m/f:"),
            palette.paint(format!("{:.2}/{:.2}", prob.masculine, prob.feminine), ansi::YELLOW),
            palette.dim("│ rule:"),
            match word.rule() {
                RuleId::Matched(_) => palette.paint(word.rule().to_string(), ansi::CYAN),
                _ => palette.dim(word.rule().to_string()),
            }
        );
    }

    if metrics.unchanged > 0 {
        println!(
            "\n  {}",
            palette.paint(format!("{} word(s) matched no rule and were left as is", metrics.unchanged), ansi::YELLOW)
        );
        println!("{}", palette.dim("  Tip: Set NAMECASE_DEBUG_RULES=1 to see role scores and chain traces"));
    }

    println!("\n{}", palette.paint("━━━ Timing ━━━", ansi::GRAY));
    println!(
        "  Total: {}  │  Classify: {}  │  Decline: {}",
        palette.paint(format!("{:?}", metrics.total), ansi::GREEN),
        palette.paint(format!("{:?}", metrics.classify), ansi::CYAN),
        palette.dim(format!("{:?}", metrics.decline)),
    );
    println!();
}

fn gender_label(gender: Gender) -> &'static str {
    match gender {
        Gender::Male => "♂ male",
        Gender::Female => "♀ female",
        Gender::Unknown => "?",
    }
}

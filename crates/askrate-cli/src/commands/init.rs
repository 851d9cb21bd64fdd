//! The `askrate init` command.

use anyhow::Result;

pub fn execute() -> Result<()> {
    if std::path::Path::new("questions.toml").exists() {
        println!("questions.toml already exists, skipping.");
    } else {
        std::fs::write("questions.toml", STARTER_QUESTIONS)?;
        println!("Created questions.toml");
    }

    println!("\nNext steps:");
    println!("  1. Edit questions.toml with your own questions");
    println!("  2. Run: askrate validate --questions questions.toml");
    println!("  3. Run: askrate ask --questions questions.toml");

    Ok(())
}

const STARTER_QUESTIONS: &str = r#"[questionnaire]
id = "daily-checkin"
name = "Daily Check-in"
description = "Five quick yes/no questions about your day"

[[questions]]
text = "Did you sleep at least seven hours? "

[[questions]]
text = "Did you eat breakfast? "

[[questions]]
text = "Did you exercise today? "

[[questions]]
text = "Did you spend time outside? "

[[questions]]
text = "Are you feeling good about tomorrow? "
"#;

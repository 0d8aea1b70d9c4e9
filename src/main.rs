//! Café Persona CLI
//!
//! Scores a set of answers against the configured questionnaire, or resolves
//! a shared result link back into a category.

use anyhow::{bail, Result};
use tracing::warn;
use tracing_subscriber::EnvFilter;

use cafe_persona::{AnswerSet, Axis, ContentManager, QuizContent, ShareLink};

// ──────────────────────────────────────────────────────────────────────────────
// CONFIGURATION
// ──────────────────────────────────────────────────────────────────────────────

struct QuizConfig {
    /// Path to the quiz content JSON
    content_file: String,
}

impl QuizConfig {
    fn from_env() -> Self {
        Self {
            content_file: std::env::var("CAFE_QUIZ_CONTENT").unwrap_or_else(|_| "quiz_content.json".to_string()),
        }
    }
}

// ──────────────────────────────────────────────────────────────────────────────
// MAIN ENTRY POINT
// ──────────────────────────────────────────────────────────────────────────────

#[tokio::main]
async fn main() -> Result<()> {
    dotenv::dotenv().ok();

    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("cafe_persona=info"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(false)
        .init();

    let args: Vec<String> = std::env::args().skip(1).collect();
    let Some((command, rest)) = args.split_first() else {
        print_usage();
        return Ok(());
    };

    match command.as_str() {
        "score" => score(&load_content().await?, rest),
        "resolve" => resolve(&load_content().await?, rest),
        _ => {
            print_usage();
            Ok(())
        }
    }
}

async fn load_content() -> Result<QuizContent> {
    let config = QuizConfig::from_env();
    ContentManager::new(&config.content_file).load().await
}

fn print_usage() {
    println!("Usage:");
    println!("  cafe_persona score <question>=<option> ...");
    println!("  cafe_persona resolve '<share url or query>'");
}

fn parse_answers(args: &[String]) -> Result<AnswerSet> {
    let mut answers = AnswerSet::new();
    for arg in args {
        let Some((question, option)) = arg.split_once('=') else {
            bail!("Expected <question>=<option>, got '{}'", arg);
        };
        answers.answer(question.trim(), option.trim());
    }
    Ok(answers)
}

fn score(content: &QuizContent, args: &[String]) -> Result<()> {
    let answers = parse_answers(args)?;
    let missing = answers.unanswered(&content.questions);
    if !missing.is_empty() {
        warn!("Unanswered questions: {}", missing.join(", "));
    }

    let vector = content.build_vector(&answers);
    let link = content.share_link(&answers)?;

    println!("\n{}", "═".repeat(40));
    for axis in Axis::ALL {
        println!("  {:<8} {:>5.1}", axis.as_str(), vector.get(axis));
    }
    println!("{}", "═".repeat(40));
    println!("Result: {}", link.result.as_deref().unwrap_or_default());
    println!("Share:  ?{}", link.to_query());
    Ok(())
}

fn resolve(content: &QuizContent, args: &[String]) -> Result<()> {
    let Some(input) = args.first() else {
        bail!("resolve needs a share link or query string");
    };
    let resolution = ShareLink::parse(input).resolve(content)?;
    println!("Result: {} ({:?})", resolution.key, resolution.source);
    println!("Answers: {}", resolution.answers.len());
    Ok(())
}

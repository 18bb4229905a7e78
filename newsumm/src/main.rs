//! newsumm - Summarize already-fetched articles into a handful of sentences

use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use log::{LevelFilter, debug, warn};
use std::io::Read;
use std::path::{Path, PathBuf};
use summarizer::{Article, Document, DocumentBody, Summarizer, SummarizerConfig};

#[derive(Parser, Debug)]
#[command(name = "newsumm")]
#[command(about = "Summarize already-fetched articles into a handful of sentences", long_about = None)]
#[command(version)]
struct Args {
    /// Article to summarize (reads stdin when omitted)
    input: Option<PathBuf>,

    /// How to read the input
    #[arg(short, long, value_enum, default_value_t = InputFormat::Auto)]
    format: InputFormat,

    /// Language tag of the article (default from config)
    #[arg(short, long)]
    language: Option<String>,

    /// Number of sentences to keep (default from config)
    #[arg(short = 'n', long)]
    sentences: Option<usize>,

    /// Print the summary as an article JSON object
    #[arg(long, default_value_t = false)]
    json: bool,

    /// Source URL recorded in JSON output
    #[arg(long)]
    url: Option<String>,

    /// Warn when a summary sentence is longer than this many characters
    #[arg(long)]
    max_chars: Option<usize>,

    /// Enable debug output
    #[arg(short, long, default_value_t = false)]
    debug: bool,

    /// Subcommands
    #[command(subcommand)]
    command: Option<Commands>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum InputFormat {
    /// HTML when the file extension or content says so
    Auto,
    Html,
    Text,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Configuration management
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand, Debug)]
enum ConfigAction {
    /// Show current configuration
    Show,
    /// Set default summary length
    SetSentences {
        /// Number of sentences
        count: usize,
    },
    /// Set default language
    SetLanguage {
        /// Language tag, e.g. "en" or "de"
        tag: String,
    },
    /// Set directory with per-language resource overrides
    SetResourceDir {
        /// Directory containing <code>/stopwords.txt and <code>/abbreviations.txt
        path: PathBuf,
    },
}

#[tokio::main]
async fn main() {
    let args = Args::parse();
    init_logging(args.debug);

    if let Err(e) = run(args).await {
        eprintln!("Error: {e:#}");
        std::process::exit(1);
    }
}

fn init_logging(debug: bool) {
    let level = if debug {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .format_timestamp(None)
        .init();
}

async fn run(args: Args) -> Result<()> {
    if let Some(Commands::Config { action }) = &args.command {
        return handle_config_command(action);
    }

    let config = SummarizerConfig::load().context("Failed to load configuration")?;
    let language = args
        .language
        .clone()
        .unwrap_or_else(|| config.default_language.clone());
    let sentence_count = args.sentences.unwrap_or(config.sentence_count);

    let input = read_input(args.input.as_deref())?;
    let is_html = match args.format {
        InputFormat::Html => true,
        InputFormat::Text => false,
        InputFormat::Auto => looks_like_html(args.input.as_deref(), &input),
    };
    debug!(
        "Input: {} bytes, {}, language {}, {} sentences",
        input.len(),
        if is_html { "html" } else { "text" },
        language,
        sentence_count
    );

    let document = if is_html {
        Document::from_parts(Some(input), None)?
    } else {
        Document::from_parts(None, Some(input))?
    }
    .with_language(language)
    .with_sentence_count(sentence_count);

    let summarizer = Summarizer::new(config);
    let url = args.url.clone().unwrap_or_default();
    let article = match document.body() {
        DocumentBody::Html(html) => {
            summarizer
                .summarize_article(&url, html, document.language(), document.sentence_count())
                .await?
        }
        DocumentBody::Text(_) => {
            let sentences = summarizer.summarize(&document).await?;
            Article::new(url, String::new(), sentences, document.language())
        }
    };

    // Speech consumers reject utterances above a length limit
    if let Some(max) = args.max_chars.filter(|&max| !article.is_speakable(max)) {
        warn!("Summary has sentences longer than {} characters", max);
    }

    if args.json {
        println!("{}", article.to_json()?);
    } else {
        for sentence in &article.sentences {
            println!("{}", sentence);
        }
    }
    Ok(())
}

fn read_input(path: Option<&Path>) -> Result<String> {
    match path {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read {}", path.display())),
        None => {
            let mut input = String::new();
            std::io::stdin()
                .read_to_string(&mut input)
                .context("Failed to read stdin")?;
            Ok(input)
        }
    }
}

fn looks_like_html(path: Option<&Path>, content: &str) -> bool {
    let by_extension = path
        .and_then(|p| p.extension())
        .and_then(|ext| ext.to_str())
        .is_some_and(|ext| matches!(ext.to_ascii_lowercase().as_str(), "html" | "htm" | "xhtml"));
    by_extension || content.trim_start().starts_with('<')
}

fn handle_config_command(action: &ConfigAction) -> Result<()> {
    match action {
        ConfigAction::Show => {
            let config = SummarizerConfig::load()?;
            println!("Configuration file: {:?}", SummarizerConfig::config_path()?);
            println!();
            println!("sentence_count = {}", config.sentence_count);
            println!("default_language = \"{}\"", config.default_language);
            println!(
                "supported_languages = [{}]",
                config.supported_languages.join(", ")
            );
            println!("stemming = {}", config.stemming);
            if let Some(dir) = &config.resource_dir {
                println!("resource_dir = \"{}\"", dir.display());
            } else {
                println!("resource_dir = (builtin)");
            }
            for (tag, action) in &config.strip_tags {
                println!("strip_tags.{} = {:?}", tag, action);
            }
        }
        ConfigAction::SetSentences { count } => {
            let mut config = SummarizerConfig::load()?;
            config.sentence_count = *count;
            config.save()?;
            println!("Default sentence count set to: {}", config.sentence_count);
        }
        ConfigAction::SetLanguage { tag } => {
            let mut config = SummarizerConfig::load()?;
            config.default_language = tag.clone();
            config.validate()?;
            config.save()?;
            println!("Default language set to: {}", config.default_language);
        }
        ConfigAction::SetResourceDir { path } => {
            let mut config = SummarizerConfig::load()?;
            config.resource_dir = Some(path.clone());
            config.save()?;
            println!("Resource directory set to: {}", path.display());
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_detects_html_by_extension() {
        assert!(looks_like_html(Some(Path::new("page.HTML")), "plain words"));
        assert!(!looks_like_html(Some(Path::new("notes.txt")), "plain words"));
    }

    #[test]
    fn test_detects_html_by_content() {
        assert!(looks_like_html(None, "  \n<!DOCTYPE html><html></html>"));
        assert!(!looks_like_html(None, "Just a sentence."));
    }

    #[test]
    fn test_args_parse() {
        let args = Args::parse_from(["newsumm", "page.html", "-n", "3", "-l", "de", "--json"]);
        assert_eq!(args.sentences, Some(3));
        assert_eq!(args.language.as_deref(), Some("de"));
        assert!(args.json);
        assert_eq!(args.format, InputFormat::Auto);
        assert_eq!(args.max_chars, None);

        let args = Args::parse_from(["newsumm", "--format", "text", "--max-chars", "200"]);
        assert_eq!(args.format, InputFormat::Text);
        assert_eq!(args.max_chars, Some(200));
        assert!(args.input.is_none());
    }
}

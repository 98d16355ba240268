use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::{debug, info};

use wordcloud::config::{
    self, RunConfig, WindowConfig, DEFAULT_CLOUD_SIZE, DEFAULT_MIN_FREQUENCY, DEFAULT_MIN_LENGTH,
    DEFAULT_UPDATE_FREQUENCY, DEFAULT_WINDOW_SIZE,
};
use wordcloud::input::LineSource;
use wordcloud::output::{self, OutputFormat};
use wordcloud::pipeline::Pipeline;

/// Wordcloud: the most frequent words in a sliding window over streaming text.
///
/// Reads text from a file or standard input and, once the window is full,
/// prints the top words every few accepted words.
#[derive(Parser, Debug)]
#[command(name = "wordcloud", version, about)]
struct Cli {
    /// Number of words shown in each cloud
    #[arg(short = 'c', long, env = "WORDCLOUD_CLOUD_SIZE",
          default_value_t = DEFAULT_CLOUD_SIZE, value_parser = positive)]
    cloud_size: usize,

    /// Shortest word (in characters) that is counted
    #[arg(short = 'l', long = "length-at-least", env = "WORDCLOUD_MIN_LENGTH",
          default_value_t = DEFAULT_MIN_LENGTH)]
    min_length: usize,

    /// Number of recent words the window holds
    #[arg(short = 'w', long, env = "WORDCLOUD_WINDOW_SIZE",
          default_value_t = DEFAULT_WINDOW_SIZE, value_parser = positive)]
    window_size: usize,

    /// Fewest occurrences a word needs to appear in the cloud
    #[arg(short = 'f', long, env = "WORDCLOUD_MIN_FREQUENCY",
          default_value_t = DEFAULT_MIN_FREQUENCY, value_parser = positive)]
    min_frequency: usize,

    /// Accepted words between updates once the window is full
    #[arg(short = 'u', long, env = "WORDCLOUD_UPDATE_FREQUENCY",
          default_value_t = DEFAULT_UPDATE_FREQUENCY, value_parser = positive)]
    update_frequency: usize,

    /// File of words to ignore, one per line
    #[arg(short = 'i', long, env = "WORDCLOUD_IGNORE_LIST")]
    ignore_list: Option<PathBuf>,

    /// Also ignore common English stop words
    #[arg(long)]
    stop_words: bool,

    /// How updates are rendered
    #[arg(short = 'o', long, value_enum, env = "WORDCLOUD_OUTPUT",
          default_value_t = OutputFormat::Plain)]
    output: OutputFormat,

    /// Input file; reads standard input when omitted or "-"
    input: Option<PathBuf>,
}

impl Cli {
    fn into_config(self) -> RunConfig {
        let ignore = config::build_ignore_set(self.ignore_list.as_deref(), self.stop_words);
        RunConfig {
            window: WindowConfig {
                cloud_size: self.cloud_size,
                min_length: self.min_length,
                window_size: self.window_size,
                ignore,
                min_frequency: self.min_frequency,
            },
            update_frequency: self.update_frequency,
            input: LineSource::from_arg(self.input),
            output: self.output,
        }
    }
}

/// Parse a strictly positive count.
fn positive(s: &str) -> Result<usize, String> {
    match s.parse::<usize>() {
        Ok(0) => Err("must be greater than zero".to_string()),
        Ok(n) => Ok(n),
        Err(e) => Err(e.to_string()),
    }
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file if present (silently ignore if missing)
    let _ = dotenvy::dotenv();

    // Logs go to stderr; stdout carries only word clouds
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("wordcloud=warn")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = cli.into_config();
    debug!(
        cloud_size = config.window.cloud_size,
        window_size = config.window.window_size,
        ignored = config.window.ignore.len(),
        input = %config.input,
        "Configuration loaded"
    );

    let mut pipeline = Pipeline::new(&config)?;
    let reader = config
        .input
        .open()
        .await
        .with_context(|| format!("failed to open {}", config.input))?;
    let mut sink = output::make_sink(config.output, std::io::stdout());

    match pipeline.run(reader, sink.as_mut()).await {
        Ok(summary) => {
            debug!(?summary, "Run complete");
            Ok(())
        }
        Err(e) if e.is_broken_pipe() => {
            // Downstream consumer went away; that is a normal way to stop
            info!("Output closed, exiting");
            std::process::exit(0);
        }
        Err(e) => Err(e.into()),
    }
}

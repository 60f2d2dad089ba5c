use clap::Parser;
use color_eyre::Result;
use std::fs;
use std::io::{Read, Write, stdin};
use std::path::PathBuf;

use textstat::TextStatisticsReport;
use textstat::config::{self, ConfigResult, OutputFormat};
use textstat::error::TextStatError;
use textstat::stats::{TokenCount, compute_basic_statistics, render_report};
use textstat::tokenizer::{
    TiktokenProvider, encoding_for_model, supported_models, try_count_tokens,
};

/// Count characters, words, lines, paragraphs and tokens
#[derive(Parser, Debug)]
#[command(
    version,
    about = "Text statistics: characters, words, lines, paragraphs and LLM tokens"
)]
struct Args {
    /// Input text file (if not provided, reads from stdin)
    input: Option<PathBuf>,

    /// Also count tokens with the model's tokenizer
    #[arg(short, long)]
    tokens: bool,

    /// Model whose encoding is used for token counting (e.g. gpt-4o, gpt-4)
    #[arg(short, long)]
    model: Option<String>,

    /// Print the report as JSON
    #[arg(long)]
    json: bool,

    /// Write the report to a file instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,
}

/// Settings after merging CLI flags over the config file
#[derive(Debug)]
struct RunSettings {
    tokens: bool,
    model: String,
    format: OutputFormat,
}

fn main() -> Result<()> {
    init_logging();
    color_eyre::install()?;

    let ConfigResult { config, warning } = config::load_config();
    if let Some(warning) = warning {
        eprintln!("textstat: {}", warning);
    }

    let args = Args::parse();
    let settings = RunSettings {
        tokens: args.tokens || config.tokens.enabled,
        model: args.model.clone().unwrap_or(config.tokens.model),
        format: if args.json {
            OutputFormat::Json
        } else {
            config.output.format
        },
    };
    #[cfg(debug_assertions)]
    log::debug!("Run settings: {:?}", settings);

    if settings.tokens {
        validate_model(&settings.model)?;
    }

    let text = read_input(args.input.as_ref())?;
    let report = build_report(&text, &settings)?;
    let rendered = render(&report, settings.format)?;

    match args.output {
        Some(path) => {
            fs::write(&path, rendered)?;
            #[cfg(debug_assertions)]
            log::debug!("Report written to {:?}", path);
        }
        None => print!("{}", rendered),
    }

    Ok(())
}

/// Debug builds log everything to /tmp/textstat-debug.log; release builds
/// log warnings to stderr unless RUST_LOG says otherwise
fn init_logging() {
    let mut builder =
        env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"));

    #[cfg(debug_assertions)]
    {
        if let Ok(log_file) = fs::OpenOptions::new()
            .create(true)
            .append(true)
            .open("/tmp/textstat-debug.log")
        {
            builder
                .filter_level(log::LevelFilter::Debug)
                .target(env_logger::Target::Pipe(Box::new(log_file)));
        }
    }

    builder
        .format(|buf, record| {
            use std::time::SystemTime;
            let datetime: chrono::DateTime<chrono::Local> = SystemTime::now().into();
            writeln!(
                buf,
                "[{}] [{}] {}",
                datetime.format("%Y-%m-%dT%H:%M:%S%.3f"),
                record.level(),
                record.args()
            )
        })
        .init();
}

/// Reject models outside the fixed model table before doing any work
fn validate_model(model: &str) -> Result<(), TextStatError> {
    if encoding_for_model(model).is_some() {
        return Ok(());
    }
    Err(TextStatError::UnknownModel {
        model: model.to_string(),
        supported: supported_models().collect::<Vec<_>>().join(", "),
    })
}

fn read_input(path: Option<&PathBuf>) -> Result<String, TextStatError> {
    match path {
        Some(path) => Ok(fs::read_to_string(path)?),
        None => {
            let mut text = String::new();
            stdin().read_to_string(&mut text)?;
            Ok(text)
        }
    }
}

fn build_report(text: &str, settings: &RunSettings) -> Result<TextStatisticsReport, TextStatError> {
    let report = compute_basic_statistics(text);
    if !settings.tokens {
        return Ok(report);
    }

    // Unlike the engine, a tokenizer failure fails the run instead of reporting 0
    let provider = TiktokenProvider::new();
    let count = try_count_tokens(&provider, text, &settings.model)?;
    #[cfg(debug_assertions)]
    log::debug!("Counted {} tokens with {}", count, settings.model);

    Ok(report.with_tokens(TokenCount::Counted(count)))
}

fn render(report: &TextStatisticsReport, format: OutputFormat) -> Result<String, TextStatError> {
    let mut rendered = match format {
        OutputFormat::Text => render_report(report),
        OutputFormat::Json => serde_json::to_string_pretty(report)?,
    };
    rendered.push('\n');
    Ok(rendered)
}

mod api;

use clap::{Parser, Subcommand};
use std::path::Path;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tracing_appender::non_blocking::WorkerGuard;
use tracing_subscriber::EnvFilter;
use yatri_chat::guide::{GuideSession, SPOTS};
use yatri_chat::{dispatch, responses, ChatSession, QUICK_QUESTIONS};
use yatri_core::config::{self, YatriConfig};
use yatri_core::language::Language;
use yatri_core::message::Sender;
use yatri_core::traits::WeatherProvider;
use yatri_weather::{OpenWeatherProvider, WeatherQuery};

#[derive(Parser)]
#[command(
    name = "yatri",
    version,
    about = "Yatri — multilingual Jharkhand travel assistant"
)]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Path to config file.
    #[arg(short, long, default_value = "config.toml")]
    config: String,
}

#[derive(Subcommand)]
enum Commands {
    /// Start the HTTP API.
    Serve,
    /// Answer a single message and exit.
    Ask {
        /// Language to reply in when the message script is Latin.
        #[arg(short, long)]
        lang: Option<String>,
        /// The message to send.
        #[arg(trailing_var_arg = true)]
        message: Vec<String>,
    },
    /// Interactive chat session on stdin.
    Chat {
        /// Starting language.
        #[arg(short, long)]
        lang: Option<String>,
    },
    /// Interactive voice-guide session driven by typed transcripts.
    Guide,
    /// Show current conditions for a city or coordinates.
    Weather {
        #[arg(long, conflicts_with_all = ["lat", "lon"])]
        city: Option<String>,
        #[arg(long, requires = "lon", allow_negative_numbers = true)]
        lat: Option<f64>,
        #[arg(long, requires = "lat", allow_negative_numbers = true)]
        lon: Option<f64>,
    },
    /// Check configuration and response table health.
    Status,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let cfg = config::load(&cli.config)?;
    let _guard = init_logging(&cfg.yatri);

    responses::try_builtin()?;

    match cli.command {
        Commands::Serve => {
            let provider = OpenWeatherProvider::from_config(&cfg.weather)?;
            if !provider.is_configured() {
                tracing::warn!(
                    "weather key missing: set weather.api_key or {}",
                    config::WEATHER_KEY_ENV
                );
            }
            println!("{} — starting API...", cfg.yatri.name);
            let state = api::ApiState::new(
                Arc::new(provider),
                &cfg.api.api_key,
                cfg.chat.default_language,
            );
            api::serve(&cfg.api, state).await?;
        }
        Commands::Ask { lang, message } => {
            if message.is_empty() {
                anyhow::bail!("No message provided. Usage: yatri ask <message>");
            }
            let selected = parse_language(lang.as_deref(), cfg.chat.default_language)?;
            let reply = dispatch(&message.join(" "), selected);
            println!("{}", reply.text);
        }
        Commands::Chat { lang } => {
            let language = parse_language(lang.as_deref(), cfg.chat.default_language)?;
            let mut chat_cfg = cfg.chat.clone();
            chat_cfg.default_language = language;
            run_chat(ChatSession::from_config(&chat_cfg)).await?;
        }
        Commands::Guide => run_guide().await?,
        Commands::Weather { city, lat, lon } => {
            let provider = OpenWeatherProvider::from_config(&cfg.weather)?;
            let query = match (city, lat, lon) {
                (Some(city), _, _) => WeatherQuery::city(city),
                (None, Some(lat), Some(lon)) => WeatherQuery::coords(lat, lon),
                _ => WeatherQuery::city(cfg.weather.default_city.clone()),
            };
            let report = provider.current(&query).await?;
            println!("{}", report.location);
            println!(
                "  {}°C (feels like {}°C), {}",
                report.temperature, report.feels_like, report.description
            );
            println!(
                "  humidity {}%  wind {} m/s  pressure {} hPa  visibility {} m",
                report.humidity, report.wind_speed, report.pressure, report.visibility
            );
        }
        Commands::Status => {
            println!("{} — Status Check\n", cfg.yatri.name);
            println!("Config: {}", cli.config);
            println!("Default language: {}", cfg.chat.default_language.name());
            println!("Typing delay: {} ms", cfg.chat.typing_delay_ms);
            println!();

            let provider = OpenWeatherProvider::from_config(&cfg.weather)?;
            println!(
                "  {}: {}",
                provider.name(),
                if provider.is_configured() {
                    "configured"
                } else {
                    "no api key"
                }
            );
            println!("  api: {}:{}", cfg.api.host, cfg.api.port);
            println!(
                "  api auth: {}",
                if cfg.api.api_key.is_empty() {
                    "disabled"
                } else {
                    "enabled"
                }
            );
            println!("  responses: ok");
        }
    }

    Ok(())
}

/// Install the tracing subscriber. `RUST_LOG` overrides the configured level.
///
/// The returned guard must stay alive for file logging to flush.
fn init_logging(cfg: &YatriConfig) -> Option<WorkerGuard> {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cfg.log_level.as_str()));

    if cfg.log_file.is_empty() {
        tracing_subscriber::fmt().with_env_filter(filter).init();
        return None;
    }

    let path = Path::new(&cfg.log_file);
    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file = path
        .file_name()
        .map(|f| f.to_os_string())
        .unwrap_or_else(|| "yatri.log".into());

    let (writer, guard) = tracing_appender::non_blocking(tracing_appender::rolling::never(dir, file));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}

fn parse_language(code: Option<&str>, default: Language) -> anyhow::Result<Language> {
    match code {
        None => Ok(default),
        Some(code) => Language::from_str_loose(code)
            .ok_or_else(|| anyhow::anyhow!("unsupported language: {code}")),
    }
}

/// Line-oriented chat. `/lang <code>` switches language, `/quick` lists
/// suggested questions, `/quit` exits.
async fn run_chat(mut session: ChatSession) -> anyhow::Result<()> {
    if let Some(welcome) = session.transcript().last() {
        println!("{}\n", welcome.text);
    }

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        match line.split_once(' ').unwrap_or((line, "")) {
            ("/quit", _) => break,
            ("/quick", _) => {
                for (i, q) in QUICK_QUESTIONS.iter().enumerate() {
                    println!("  {}. {q}", i + 1);
                }
            }
            ("/lang", code) => match Language::from_str_loose(code.trim()) {
                Some(lang) => {
                    session.set_language(lang);
                    println!("Language: {} ({})", lang.name(), lang.native_name());
                }
                None => {
                    let codes: Vec<&str> = Language::ALL.iter().map(|l| l.code()).collect();
                    println!("Unknown language. Available: {}", codes.join(", "));
                }
            },
            _ => {
                if let Some(reply) = session.send(line).await {
                    if reply.sender == Sender::Assistant {
                        println!("\n{}\n", reply.text);
                    }
                }
            }
        }
    }
    Ok(())
}

/// Voice-guide loop. Each stdin line is treated as a speech transcript.
async fn run_guide() -> anyhow::Result<()> {
    println!("Destinations:");
    for spot in SPOTS {
        println!("  {} ({})", spot.name, spot.category);
    }
    println!("\nTry \"tell me about Hundru Falls\", \"next\", \"previous\", \"repeat\", \"stop\".\n");

    let mut guide = GuideSession::new(SPOTS);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        if line.trim() == "/quit" {
            break;
        }
        if let Some(speech) = guide.handle(&line) {
            if let Some(spot) = guide.selected() {
                println!("[{}: {}]", spot.name, guide.current_section().title());
            }
            println!("{speech}\n");
        }
    }
    Ok(())
}

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use field_translate::action::{self, TranslationRequest};
use field_translate::config::Config;
use field_translate::engine::EngineRegistry;
use field_translate::locale::{current_field_locale, default_target_locale};
use tracing::info;

#[derive(Parser)]
#[command(name = "field-translate")]
#[command(version)]
#[command(about = "Translate text through the configured translation engines", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List configured translation engines
    Engines,

    /// List the locales an engine supports
    Locales {
        /// Engine key (defaults to the configured default engine)
        #[arg(short, long)]
        engine: Option<String>,
    },

    /// Translate a piece of text
    Translate {
        /// Engine key (defaults to the configured default engine)
        #[arg(short, long)]
        engine: Option<String>,

        /// Source locale; omit to let the provider detect it
        #[arg(long)]
        from: Option<String>,

        /// Target locale; picked from the field locale when omitted
        #[arg(long)]
        to: Option<String>,

        /// Locale the text is being edited in, used to pick a default target
        #[arg(long)]
        field_locale: Option<String>,

        text: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env file (ignored in production)
    let _ = dotenvy::dotenv();

    // Initialize logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("field_translate=info".parse()?),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    // Bad engine configuration aborts here, before any request is made
    let config = Config::from_env()?;
    let registry = EngineRegistry::new(&config).context("Invalid translation engine configuration")?;

    match cli.command {
        Commands::Engines => {
            for name in registry.available_engines() {
                let display_name = registry
                    .descriptor(name)
                    .map(|descriptor| descriptor.display_name())
                    .unwrap_or(name);
                let marker = if name == registry.default_engine() {
                    " (default)"
                } else {
                    ""
                };
                println!("{}\t{}{}", name, display_name, marker);
            }
        }
        Commands::Locales { engine } => {
            let engine = engine.unwrap_or_else(|| registry.default_engine().to_string());
            for entry in &registry.supported_locales(&engine)? {
                println!("{}\t{}", entry.code, entry.label);
            }
        }
        Commands::Translate {
            engine,
            from,
            to,
            field_locale,
            text,
        } => {
            let engine = engine.unwrap_or_else(|| registry.default_engine().to_string());
            let target = match to {
                Some(target) => target,
                None => {
                    let app_locale = app_locale();
                    let current =
                        current_field_locale(None, field_locale.as_deref(), &app_locale);
                    let supported = registry.supported_locales(&engine)?;
                    default_target_locale(&supported, from.as_deref(), &current)
                        .with_context(|| format!("Engine '{}' offers no target locale", engine))?
                }
            };

            info!("Translating into '{}' with '{}'", target, engine);
            let request = TranslationRequest {
                engine,
                source_locale: from,
                target_locale: target,
                text,
            };
            let translated = action::translate(&registry, &request).await?;
            println!("{}", translated);
        }
    }

    Ok(())
}

/// Application locale from the environment ("pt_BR.UTF-8" -> "pt-br").
fn app_locale() -> String {
    std::env::var("LANG")
        .ok()
        .and_then(|lang| lang.split('.').next().map(str::to_string))
        .filter(|lang| !lang.is_empty() && lang != "C" && lang != "POSIX")
        .map(|lang| lang.replace('_', "-").to_ascii_lowercase())
        .unwrap_or_else(|| "en".to_string())
}

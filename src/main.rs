use anyhow::{Context, Result};
use clap::Parser;
use shiftcrack::cli::{Cli, Mode};
use shiftcrack::config::Settings;
use shiftcrack::profile::{train_profile, ENGLISH_REFERENCE};
use shiftcrack::{cipher, io, profile_store, recovery};
use tracing_subscriber::EnvFilter;

/// Initialize tracing subscriber for debug output
fn init_tracing(debug: bool) {
    if debug {
        tracing_subscriber::fmt()
            .with_env_filter(
                EnvFilter::from_default_env().add_directive(tracing::Level::TRACE.into()),
            )
            .with_writer(std::io::stderr)
            .init();
    }
}

/// Load settings from --config (if given) and apply flag overrides
fn load_settings(args: &Cli) -> Result<Settings> {
    let mut settings = match &args.config {
        Some(path) => Settings::from_toml(path)?,
        None => Settings::default(),
    };

    if let Some(scoring) = args.scoring {
        settings.scoring = scoring;
    }

    Ok(settings)
}

fn run_cipher(args: &Cli, settings: &Settings) -> Result<()> {
    let cipher_name = args.cipher.as_deref().unwrap_or(&settings.default_cipher);
    let input = io::read_input(args.input_file.as_deref(), settings.max_input_bytes)?;

    let output = match args.mode {
        Mode::Decode => cipher::decode(cipher_name, &args.key, &input)?,
        _ => cipher::encode(cipher_name, &args.key, &input)?,
    };

    io::write_output(args.output_file.as_deref(), &output)
}

fn run_train(args: &Cli, settings: &Settings) -> Result<()> {
    let source = args.text_file.as_deref().or(args.input_file.as_deref());
    let corpus = io::read_input(source, settings.max_input_bytes)?;
    let model = train_profile(&corpus)?;

    match &args.model_file {
        Some(path) => profile_store::save_profile_map(&model, path)
            .with_context(|| format!("Failed to save model: {}", path.display())),
        None => io::write_output(None, &profile_store::profile_map_to_json(&model)?),
    }
}

fn run_hack(args: &Cli, settings: &Settings) -> Result<()> {
    let reference = match &args.model_file {
        Some(path) => profile_store::load_profile(path)
            .with_context(|| format!("Failed to load model: {}", path.display()))?,
        None => ENGLISH_REFERENCE,
    };

    let input = io::read_input(args.input_file.as_deref(), settings.max_input_bytes)?;
    let result = recovery::recover_caesar_shift_with(&input, &reference, settings.scoring);

    tracing::info!(shift = result.shift, "hack complete");

    io::write_output(args.output_file.as_deref(), &result.plaintext)
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let settings = load_settings(&args)?;

    match args.mode {
        Mode::Encode | Mode::Decode => run_cipher(&args, &settings),
        Mode::Train => run_train(&args, &settings),
        Mode::Hack => run_hack(&args, &settings),
    }
}

use anyhow::{Context, Result};
use clap::Parser;
use contentstats::cli::{Cli, OutputFormat};
use contentstats::config::Config;
use contentstats::dashboard::Dashboard;
use contentstats::html_output::HtmlOutput;
use contentstats::json_output::JsonOutput;
use contentstats::text_output;
use std::fs;
use std::io::Write;
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

/// Load the config file (if any) and apply command-line overrides
fn load_config(args: &Cli) -> Result<Config> {
    let mut config = match &args.config {
        Some(path) => Config::from_toml(path)?,
        None => Config::default(),
    };

    if let Some(policy) = args.on_error {
        config.on_error = policy;
    }
    if let Some(palette) = args.palette {
        config.palette = palette;
    }

    if let Err(msg) = config.validate() {
        anyhow::bail!("Invalid configuration: {}", msg);
    }
    Ok(config)
}

fn render(dashboard: &Dashboard, format: OutputFormat) -> Result<String> {
    let layout = &dashboard.config().layout;
    Ok(match format {
        OutputFormat::Html => {
            HtmlOutput::new(layout.chart_width, layout.chart_height).to_html(dashboard)?
        }
        OutputFormat::Json => JsonOutput::from_dashboard(dashboard).to_json()?,
        OutputFormat::Text => text_output::to_text(dashboard),
    })
}

fn main() -> Result<()> {
    let args = Cli::parse();

    // Initialize tracing if --debug flag is set
    init_tracing(args.debug);

    let config = load_config(&args)?;
    let mut dashboard = Dashboard::new(config);
    dashboard
        .open(&args.file)
        .with_context(|| format!("Cannot render {}", args.file.display()))?;

    let rendered = render(&dashboard, args.format)?;

    match &args.output {
        Some(path) => {
            fs::write(path, rendered)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            tracing::info!("wrote {}", path.display());
        }
        None => {
            let mut stdout = std::io::stdout().lock();
            stdout.write_all(rendered.as_bytes())?;
            stdout.flush()?;
        }
    }

    Ok(())
}

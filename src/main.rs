#[cfg(feature = "native")]
mod cli {
    use std::path::PathBuf;

    use clap::{Parser, Subcommand};

    /// Render the changelog, FAQ and landing pages of the client website.
    #[derive(Debug, Parser)]
    #[command(name = "clientdocs", version)]
    pub struct Cli {
        /// Optional path to a TOML configuration file.
        #[arg(long, value_name = "PATH")]
        pub config: Option<PathBuf>,

        #[command(subcommand)]
        pub command: Command,
    }

    #[derive(Debug, Subcommand)]
    pub enum Command {
        /// Render the changelog page.
        Changelog {
            /// Write the page here instead of stdout.
            #[arg(long, value_name = "PATH")]
            out: Option<PathBuf>,
        },
        /// Render the FAQ page.
        Faq {
            /// Override the FAQ document location (file path or URL).
            #[arg(long, value_name = "PATH_OR_URL")]
            source: Option<String>,
            /// Write the page here instead of stdout.
            #[arg(long, value_name = "PATH")]
            out: Option<PathBuf>,
        },
        /// Render the landing page with the latest version badge.
        Badge {
            /// Write the page here instead of stdout.
            #[arg(long, value_name = "PATH")]
            out: Option<PathBuf>,
        },
        /// Render every page into a directory.
        Build {
            #[arg(long, value_name = "DIR", default_value = "dist")]
            out_dir: PathBuf,
        },
    }
}

#[cfg(feature = "native")]
async fn write_output(out: Option<&std::path::Path>, html: &str) -> anyhow::Result<()> {
    use anyhow::Context;

    match out {
        Some(path) => tokio::fs::write(path, html)
            .await
            .with_context(|| format!("Failed to write {}", path.display())),
        None => {
            print!("{html}");
            Ok(())
        }
    }
}

#[cfg(feature = "native")]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use clap::Parser;
    use clientdocs::config::Settings;
    use clientdocs::rendering::markdown::MarkdownRenderer;
    use clientdocs::site;
    use clientdocs::sources::faq::faq_source_for;
    use clientdocs::sources::releases::GithubReleaseSource;

    use cli::{Cli, Command};

    let cli = Cli::parse();
    let mut settings = Settings::load(cli.config.as_deref())?;

    // Logs go to stderr so rendered pages can be piped from stdout.
    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| settings.logging.level.clone().into()),
        )
        .init();

    let releases = GithubReleaseSource::from_settings(&settings.releases)?;
    let renderer = MarkdownRenderer::new(settings.markup.policy);
    tracing::debug!("Using sanitize policy {:?}", renderer.policy());

    match cli.command {
        Command::Changelog { out } => {
            let (page, _) =
                site::build_changelog_page(&releases, &renderer, &settings.elements).await?;
            write_output(out.as_deref(), &page.to_html()).await?;
        }
        Command::Faq { source, out } => {
            if let Some(source) = source {
                settings.faq.source = source;
            }
            let faq = faq_source_for(&settings.faq.source);
            let (page, _) =
                site::build_faq_page(faq.as_ref(), &renderer, &settings.elements).await?;
            write_output(out.as_deref(), &page.to_html()).await?;
        }
        Command::Badge { out } => {
            let (page, _) = site::build_landing_page(&releases, &settings.elements).await;
            write_output(out.as_deref(), &page.to_html()).await?;
        }
        Command::Build { out_dir } => {
            let faq = faq_source_for(&settings.faq.source);
            let report = site::write_site(
                &releases,
                faq.as_ref(),
                &renderer,
                &settings.elements,
                &out_dir,
            )
            .await?;
            if report.is_complete() {
                tracing::info!("Site built in {}", out_dir.display());
            } else {
                tracing::warn!(
                    "Site built in {} with error notices: {:?}",
                    out_dir.display(),
                    report
                );
            }
        }
    }

    Ok(())
}

// When compiled for WASM (client-side), there's no main function.
// The browser build is started by lib.rs::start().
#[cfg(not(feature = "native"))]
fn main() {}

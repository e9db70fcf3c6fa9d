//! Pugdown CLI - convert Markdown documents to Pug templates

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use colored::Colorize;
use std::path::PathBuf;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use pugdown_core::{RenderOptions, TransformPipeline, read_source};

/// Default artifact name, matching the download name of the original tool.
const DEFAULT_OUTPUT: &str = "Converted.pug";

#[derive(Parser)]
#[command(name = "pugdown")]
#[command(about = "Convert Markdown documents to Pug templates")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Convert a Markdown file and post-process the result
    Convert {
        /// Input Markdown file
        input: PathBuf,

        /// Output file (defaults to Converted.pug)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the converted document to stdout instead of writing a file
        #[arg(long)]
        stdout: bool,

        /// Skip the front-page header block
        #[arg(long)]
        no_title: bool,

        /// Keep [...] fragments literal instead of extracting variables
        #[arg(long)]
        no_square_variables: bool,

        /// Keep {{...}} fragments literal instead of extracting variables
        #[arg(long)]
        no_curly_variables: bool,

        /// Skip the include block
        #[arg(long)]
        no_imports: bool,

        /// Skip the footer invocation
        #[arg(long)]
        no_footer: bool,

        /// Keep strong tag lines emitted by the converter
        #[arg(long)]
        keep_strong: bool,

        /// Show verbose output
        #[arg(short, long)]
        verbose: bool,
    },

    /// List the pipeline passes in execution order
    ListPasses,
}

fn main() -> Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "pugdown=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Convert {
            input,
            output,
            stdout,
            no_title,
            no_square_variables,
            no_curly_variables,
            no_imports,
            no_footer,
            keep_strong,
            verbose,
        } => {
            let options = RenderOptions {
                title: !no_title,
                square_variables: !no_square_variables,
                curly_variables: !no_curly_variables,
                imports: !no_imports,
                footer: !no_footer,
                no_strong: !keep_strong,
            };

            if verbose {
                println!("Converting: {}", input.display());
            }

            let markdown = read_source(&input)?;
            let template = pugdown_markdown::render(&markdown);
            let document = TransformPipeline::standard().run(&template, &options);

            if stdout {
                print!("{document}");
            } else {
                let output_path = output.unwrap_or_else(|| PathBuf::from(DEFAULT_OUTPUT));
                std::fs::write(&output_path, &document)
                    .with_context(|| format!("Failed to write file: {}", output_path.display()))?;
                println!("{} Wrote {}", "✓".green(), output_path.display());
            }

            Ok(())
        }

        Commands::ListPasses => {
            println!("{}", "Pipeline passes (in execution order):".bold());
            for pass in TransformPipeline::standard().passes() {
                println!("  {} - {}", pass.name().cyan(), pass.description());
            }
            Ok(())
        }
    }
}

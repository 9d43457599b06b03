//! CoC Chargen - Entry Point
//!
//! `generate` asks a text model for a character and resolves its stats.
//! `assemble` skips the model and resolves stats from lists given on the
//! command line, which is handy for checking the rules by hand.

use clap::{Args, Parser, Subcommand, ValueEnum};
use coc_chargen::character::{AssemblyInput, AttributePolicy, Character, CharacterAssembler, Profile};
use coc_chargen::core::dice::seeded_rng;
use coc_chargen::core::error::Result;
use coc_chargen::core::GeneratorConfig;
use coc_chargen::llm::{random_idea, CharacterGenerator, LlmClient};
use coc_chargen::render::{render_json, render_text, write_report, ReportOptions};
use coc_chargen::skills::SkillCatalog;
use std::path::PathBuf;
use tokio::runtime::Runtime;
use tracing_subscriber::EnvFilter;

/// Call of Cthulhu character generator
#[derive(Parser, Debug)]
#[command(name = "coc-chargen")]
#[command(about = "Generate Call of Cthulhu characters with a text model and a rules engine")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    #[command(flatten)]
    common: CommonArgs,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Generate characters with the text model
    Generate(GenerateArgs),
    /// Build a character from explicit lists, no model involved
    Assemble(AssembleArgs),
}

#[derive(Args, Debug)]
struct CommonArgs {
    /// TOML configuration file
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    /// Skill catalog JSON (overrides config)
    #[arg(long, global = true)]
    skills: Option<PathBuf>,

    /// Random seed for reproducible dice
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Output format
    #[arg(long, global = true, value_enum, default_value_t = OutputFormat::Text)]
    format: OutputFormat,

    /// How to handle an unparseable attribute ordering (overrides config)
    #[arg(long, global = true, value_enum)]
    attribute_policy: Option<AttributePolicy>,
}

#[derive(Args, Debug)]
struct GenerateArgs {
    /// Short character request; a stock idea is used if omitted
    #[arg(long, short = 'r')]
    request: Option<String>,

    /// Number of characters to generate
    #[arg(long, short = 'n', default_value_t = 1)]
    count: u32,

    #[arg(long)]
    country: Option<String>,

    #[arg(long)]
    era: Option<String>,

    #[arg(long)]
    language: Option<String>,

    /// Don't write report files
    #[arg(long)]
    no_file: bool,
}

#[derive(Args, Debug)]
struct AssembleArgs {
    /// Comma-separated attribute codes, most important first
    #[arg(long)]
    attributes: String,

    /// Comma-separated occupational skills, most important first
    #[arg(long, default_value = "")]
    occupational: String,

    /// Comma-separated interest skills
    #[arg(long, default_value = "")]
    interests: String,

    #[arg(long, default_value = "Unnamed Investigator")]
    name: String,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum OutputFormat {
    Text,
    Json,
}

fn main() -> Result<()> {
    // Logs go to stderr; stdout carries the sheet
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("coc_chargen=info")),
        )
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    let mut config = match &cli.common.config {
        Some(path) => GeneratorConfig::load(path)?,
        None => GeneratorConfig::default(),
    };
    if let Some(path) = &cli.common.skills {
        config.catalog.path = path.clone();
    }
    if let Some(policy) = cli.common.attribute_policy {
        config.assembly.attribute_policy = policy;
    }

    let catalog = SkillCatalog::load(&config.catalog.path)?;

    let (mut rng, seed) = seeded_rng(cli.common.seed);
    tracing::info!(seed, "Dice seeded");

    match cli.command {
        Command::Generate(args) => {
            if let Some(country) = args.country {
                config.setting.country = country;
            }
            if let Some(era) = args.era {
                config.setting.era = era;
            }
            if let Some(language) = args.language {
                config.setting.language = language;
            }
            if args.no_file {
                config.output.write_file = false;
            }
            config.validate()?;

            let client = LlmClient::from_env()?;
            tracing::info!(model = client.model(), "Using text model");

            let rt = Runtime::new()?;
            let generator = CharacterGenerator::new(&client, &catalog, &config);

            for _ in 0..args.count {
                let request = match &args.request {
                    Some(request) => request.clone(),
                    None => random_idea(&mut rng).to_string(),
                };

                let pc = rt.block_on(generator.generate(&request, &mut rng))?;
                emit(&pc, &config, cli.common.format, Some(&request))?;
            }

            let usage = client.usage();
            tracing::info!(
                input = usage.input_tokens,
                output = usage.output_tokens,
                total = usage.total(),
                "Token usage"
            );
        }
        Command::Assemble(args) => {
            let assembler =
                CharacterAssembler::new(&catalog).with_policy(config.assembly.attribute_policy);
            let pc = assembler.assemble(
                AssemblyInput {
                    profile: Profile {
                        name: args.name,
                        ..Profile::default()
                    },
                    attribute_priority: &args.attributes,
                    occupational_skills: &args.occupational,
                    interest_skills: &args.interests,
                },
                &mut rng,
            )?;
            config.output.write_file = false;
            emit(&pc, &config, cli.common.format, None)?;
        }
    }

    Ok(())
}

/// Print the character and optionally write the text report
fn emit(pc: &Character, config: &GeneratorConfig, format: OutputFormat, request: Option<&str>) -> Result<()> {
    let options = ReportOptions {
        debug_section: config.output.debug_section,
        request,
    };
    let text = render_text(pc, &options);

    match format {
        OutputFormat::Text => {
            println!("=======================================");
            print!("{}", text);
        }
        OutputFormat::Json => println!("{}", render_json(pc)?),
    }

    if config.output.write_file {
        write_report(&config.output.directory, pc, &text)?;
    }

    Ok(())
}

//! Command-line interface over the drawing tools

use crate::algorithm::generator::GeneratorConfig;
use crate::io::configuration::{
    DEFAULT_DRAWINGS_TO_ANALYZE, DEFAULT_DRAWINGS_TO_GENERATE, DEFAULT_MAIN_RANGE,
    DEFAULT_MAX_ATTEMPTS, DEFAULT_RECENT_DRAWINGS, DEFAULT_SPECIAL_RANGE, DEFAULT_TOP_VALUES,
    SOCRATA_ENDPOINT,
};
use crate::io::display::{render_frequencies, render_tool_list};
use crate::io::error::{DrawError, Result, invalid_parameter};
use crate::io::provider::{DrawingProvider, JsonFileProvider, SocrataProvider};
use crate::model::ValidRange;
use crate::tool::descriptor::{ALL_TOOLS, FETCH_RECENT_DRAWINGS, GENERATE_DRAWINGS};
use crate::tool::registry::{ToolOutput, ToolRegistry};
use clap::{ArgAction, Args, Parser, Subcommand};
use serde_json::{Value, json};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "drawsmith")]
#[command(
    author,
    version,
    about = "Generate lottery drawings weighted by historical number frequency"
)]
/// Command-line arguments for the drawing generator
pub struct Cli {
    /// JSON file of historical drawings in the Socrata export format (the live API is used when absent)
    #[arg(short, long, global = true, env = "DRAWSMITH_SOURCE", value_name = "FILE")]
    pub source: Option<PathBuf>,

    /// Resource URL of the live API
    #[arg(
        long,
        global = true,
        env = "DRAWSMITH_ENDPOINT",
        default_value = SOCRATA_ENDPOINT,
        value_name = "URL"
    )]
    pub endpoint: String,

    /// Socrata application token for the live API
    #[arg(long, global = true, env = "DRAWSMITH_APP_TOKEN", hide_env_values = true)]
    pub app_token: Option<String>,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = ArgAction::Count)]
    pub verbose: u8,

    /// Suppress progress and log output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Operation to run
    #[command(subcommand)]
    pub command: Command,
}

/// Operations exposed on the command line
#[derive(Subcommand, Debug)]
pub enum Command {
    /// List the most recent drawings
    Recent {
        /// Number of drawings to list
        #[arg(short, default_value_t = DEFAULT_RECENT_DRAWINGS)]
        n: i64,
    },

    /// Generate drawings weighted by historical number frequency
    Generate(GenerateArgs),

    /// Show the most common main and special numbers
    Frequencies {
        /// Number of recent drawings to analyze
        #[arg(short, long, default_value_t = DEFAULT_DRAWINGS_TO_ANALYZE as usize)]
        analyze: usize,

        /// Number of values to show per category
        #[arg(short, long, default_value_t = DEFAULT_TOP_VALUES)]
        top: usize,
    },

    /// List the available tools
    Tools {
        /// Print the JSON function-calling schemas instead of a table
        #[arg(long)]
        schema: bool,
    },

    /// Invoke a tool by name, printing its JSON result
    Invoke {
        /// Tool name, e.g. generate-drawings
        tool: String,

        /// JSON object of named arguments
        #[arg(short, long, default_value = "{}")]
        args: String,
    },
}

/// Arguments of the generate command
#[derive(Args, Debug)]
pub struct GenerateArgs {
    /// Number of drawings to generate
    #[arg(short, long, default_value_t = DEFAULT_DRAWINGS_TO_GENERATE)]
    pub count: i64,

    /// Number of recent drawings to analyze
    #[arg(short, long, default_value_t = DEFAULT_DRAWINGS_TO_ANALYZE)]
    pub analyze: i64,

    /// Random seed for reproducible generation
    #[arg(long)]
    pub seed: Option<u64>,

    /// Valid range for main numbers
    #[arg(long, value_name = "LOW-HIGH", default_value_t = DEFAULT_MAIN_RANGE)]
    pub main_range: ValidRange,

    /// Valid range for the special number
    #[arg(long, value_name = "LOW-HIGH", default_value_t = DEFAULT_SPECIAL_RANGE)]
    pub special_range: ValidRange,

    /// Sampling attempts per drawing before the pool is declared degenerate
    #[arg(long, default_value_t = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: usize,

    /// Print drawings as JSON instead of a table
    #[arg(long)]
    pub json: bool,
}

impl GenerateArgs {
    /// Generator configuration selected by these arguments
    pub const fn generator_config(&self) -> GeneratorConfig {
        GeneratorConfig {
            main_range: self.main_range,
            special_range: self.special_range,
            max_attempts: self.max_attempts,
        }
    }
}

impl Cli {
    /// Provider selected by the global arguments
    pub fn provider(&self) -> Box<dyn DrawingProvider> {
        match &self.source {
            Some(path) => Box::new(JsonFileProvider::new(path.clone())),
            None => Box::new(
                SocrataProvider::new(self.app_token.clone()).with_endpoint(self.endpoint.clone()),
            ),
        }
    }

    /// Check if progress should be displayed
    pub const fn should_show_progress(&self) -> bool {
        !self.quiet
    }
}

/// Executes the parsed command against the selected provider
pub struct CommandRunner {
    cli: Cli,
}

impl CommandRunner {
    /// Create a runner for parsed arguments
    pub const fn new(cli: Cli) -> Self {
        Self { cli }
    }

    /// Run the command and print its output
    ///
    /// # Errors
    ///
    /// Returns any error raised by the provider, the analyzer, the generator
    /// or argument validation
    // Allow print for command output
    #[allow(clippy::print_stdout)]
    pub fn run(&self) -> Result<()> {
        let output = self.render()?;
        println!("{output}");
        Ok(())
    }

    /// Run the command and return the text it would print
    ///
    /// # Errors
    ///
    /// Same as [`Self::run`]
    pub fn render(&self) -> Result<String> {
        match &self.cli.command {
            Command::Recent { n } => {
                let mut registry = self.registry(GeneratorConfig::default(), None);
                let output = registry.invoke(FETCH_RECENT_DRAWINGS.name, &json!({ "n": n }))?;
                Ok(output.render_text())
            }
            Command::Generate(args) => {
                let mut registry = self.registry(args.generator_config(), args.seed);
                let output = registry.invoke(
                    GENERATE_DRAWINGS.name,
                    &json!({
                        "drawingsToGenerate": args.count,
                        "drawingsToAnalyze": args.analyze,
                    }),
                )?;
                if args.json {
                    output.to_json()
                } else {
                    Ok(output.render_text())
                }
            }
            Command::Frequencies { analyze, top } => {
                if *analyze == 0 {
                    return Err(invalid_parameter("analyze", analyze, &"must be at least 1"));
                }
                let registry = self.registry(GeneratorConfig::default(), None);
                let tables = registry.analyze_recent(*analyze)?;
                Ok(render_frequencies(&tables, *top))
            }
            Command::Tools { schema } => {
                if *schema {
                    let schemas: Vec<Value> = ALL_TOOLS.iter().map(|d| d.json_schema()).collect();
                    serde_json::to_string_pretty(&schemas).map_err(|source| {
                        DrawError::Serialization {
                            context: "tool schemas",
                            source,
                        }
                    })
                } else {
                    Ok(render_tool_list(&ALL_TOOLS))
                }
            }
            Command::Invoke { tool, args } => {
                let arguments: Value =
                    serde_json::from_str(args).map_err(|source| DrawError::Serialization {
                        context: "tool arguments",
                        source,
                    })?;
                let mut registry = self.registry(GeneratorConfig::default(), None);
                let output: ToolOutput = registry.invoke(tool, &arguments)?;
                output.to_json()
            }
        }
    }

    fn registry(
        &self,
        config: GeneratorConfig,
        seed: Option<u64>,
    ) -> ToolRegistry<Box<dyn DrawingProvider>> {
        ToolRegistry::new(self.cli.provider(), config, seed)
            .with_progress(self.cli.should_show_progress())
    }
}

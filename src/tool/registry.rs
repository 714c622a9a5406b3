use crate::algorithm::generator::{DrawingGenerator, GeneratorConfig};
use crate::algorithm::sampling::seeded_rng;
use crate::analysis::frequency::{FrequencyTables, analyze};
use crate::io::display::{render_drawings, render_recent_drawings};
use crate::io::error::{DrawError, Result, invalid_parameter};
use crate::io::progress::GenerationProgress;
use crate::io::provider::DrawingProvider;
use crate::model::SyntheticDrawing;
use crate::tool::descriptor::{
    ALL_TOOLS, FETCH_RECENT_DRAWINGS, GENERATE_DRAWINGS, ResolvedArgs, ToolDescriptor,
};
use rand::rngs::StdRng;
use serde::Serialize;
use serde_json::Value;
use tracing::info;

/// Result of a tool invocation
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum ToolOutput {
    /// Preformatted text
    Text(String),
    /// Generated drawings, serialized as arrays of six integers
    Drawings(Vec<SyntheticDrawing>),
}

impl ToolOutput {
    /// Human-readable rendering
    pub fn render_text(&self) -> String {
        match self {
            Self::Text(text) => text.clone(),
            Self::Drawings(drawings) => render_drawings(drawings),
        }
    }

    /// JSON rendering: a string for text, an array of arrays for drawings
    ///
    /// # Errors
    ///
    /// Returns `Serialization` if encoding fails
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string(self).map_err(|source| DrawError::Serialization {
            context: "tool output",
            source,
        })
    }
}

fn count_arg(args: &ResolvedArgs, name: &'static str) -> Result<usize> {
    let value = args
        .get(name)
        .ok_or_else(|| invalid_parameter(name, &"<missing>", &"argument was not resolved"))?;
    usize::try_from(value).map_err(|e| invalid_parameter(name, &value, &e))
}

/// Callable tools bound to a data provider, generator settings and a random source
///
/// Mirrors what a hosting agent runtime needs: the descriptors to build a
/// tool-call schema, and invocation by name with JSON arguments.
pub struct ToolRegistry<P: DrawingProvider> {
    provider: P,
    generator: DrawingGenerator,
    rng: StdRng,
    show_progress: bool,
}

impl<P: DrawingProvider> ToolRegistry<P> {
    /// Bind tools to a provider; `seed` makes generation reproducible
    pub fn new(provider: P, config: GeneratorConfig, seed: Option<u64>) -> Self {
        Self {
            provider,
            generator: DrawingGenerator::new(config),
            rng: seeded_rng(seed),
            show_progress: false,
        }
    }

    /// Draw a progress bar during large generation batches
    #[must_use]
    pub const fn with_progress(mut self, show_progress: bool) -> Self {
        self.show_progress = show_progress;
        self
    }

    /// The bound provider
    pub const fn provider(&self) -> &P {
        &self.provider
    }

    /// Metadata for every registered tool
    pub fn descriptors(&self) -> &'static [ToolDescriptor] {
        &ALL_TOOLS
    }

    /// Metadata for one tool
    ///
    /// # Errors
    ///
    /// Returns `UnknownTool` if no tool has this name
    pub fn descriptor(&self, name: &str) -> Result<&'static ToolDescriptor> {
        self.descriptors()
            .iter()
            .find(|d| d.name == name)
            .ok_or_else(|| DrawError::UnknownTool {
                name: name.to_string(),
            })
    }

    /// Invoke a tool by name with JSON arguments, applying declared defaults
    ///
    /// # Errors
    ///
    /// Returns `UnknownTool` or `InvalidParameter` for bad calls, otherwise
    /// whatever the tool itself returns
    pub fn invoke(&mut self, name: &str, args: &Value) -> Result<ToolOutput> {
        let descriptor = self.descriptor(name)?;
        let resolved = descriptor.resolve(args)?;
        info!(tool = descriptor.name, ?resolved, "invoking tool");

        if descriptor.name == FETCH_RECENT_DRAWINGS.name {
            let n = count_arg(&resolved, "n")?;
            self.fetch_recent_drawings(n).map(ToolOutput::Text)
        } else if descriptor.name == GENERATE_DRAWINGS.name {
            let to_generate = count_arg(&resolved, "drawingsToGenerate")?;
            let to_analyze = count_arg(&resolved, "drawingsToAnalyze")?;
            self.generate_drawings(to_generate, to_analyze)
                .map(ToolOutput::Drawings)
        } else {
            Err(DrawError::UnknownTool {
                name: name.to_string(),
            })
        }
    }

    /// Table of draw dates and winning numbers for the `n` most recent drawings
    ///
    /// # Errors
    ///
    /// Returns `ProviderUnavailable` if the provider fails or returns nothing
    pub fn fetch_recent_drawings(&self, n: usize) -> Result<String> {
        let records = self.provider.fetch_recent(n)?;
        Ok(render_recent_drawings(&records))
    }

    /// Frequency tables over the `n` most recent drawings
    ///
    /// # Errors
    ///
    /// Returns `ProviderUnavailable` if no drawings can be fetched, or
    /// `MalformedRecord` if any fetched record is malformed
    pub fn analyze_recent(&self, n: usize) -> Result<FrequencyTables> {
        let records = self.provider.fetch_recent(n)?;
        let numbers: Vec<&str> = records.iter().map(|r| r.winning_numbers.as_str()).collect();
        let tables = analyze(&numbers)?;
        info!(
            drawings = tables.drawings,
            main_observations = tables.main.total(),
            special_observations = tables.special.total(),
            "analyzed historical drawings"
        );
        Ok(tables)
    }

    /// Generate `to_generate` drawings weighted by the last `to_analyze` drawings
    ///
    /// Provider failures surface before any generation is attempted.
    ///
    /// # Errors
    ///
    /// Returns the errors of [`Self::analyze_recent`] and of drawing generation
    pub fn generate_drawings(
        &mut self,
        to_generate: usize,
        to_analyze: usize,
    ) -> Result<Vec<SyntheticDrawing>> {
        if to_generate == 0 {
            return Ok(Vec::new());
        }

        let tables = self.analyze_recent(to_analyze)?;
        let progress = if self.show_progress {
            GenerationProgress::new(to_generate)
        } else {
            GenerationProgress::hidden(to_generate)
        };

        let result =
            self.generator
                .generate_with(&tables, to_generate, &mut self.rng, |_| progress.advance());
        progress.finish();

        let drawings = result?;
        info!(count = drawings.len(), "generated drawings");
        Ok(drawings)
    }
}

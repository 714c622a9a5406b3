use crate::io::configuration::{
    DEFAULT_DRAWINGS_TO_ANALYZE, DEFAULT_DRAWINGS_TO_GENERATE, DEFAULT_RECENT_DRAWINGS,
};
use crate::io::error::{Result, invalid_parameter};
use serde_json::{Map, Value, json};
use std::collections::BTreeMap;

/// Value type a tool parameter accepts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ParameterKind {
    /// Whole number, JSON `integer`
    Integer,
}

impl ParameterKind {
    /// JSON schema type name
    pub const fn json_type(self) -> &'static str {
        match self {
            Self::Integer => "integer",
        }
    }
}

/// One declared tool parameter
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ParameterSpec {
    /// Argument name, exactly as callers must spell it
    pub name: &'static str,
    /// Accepted value type
    pub kind: ParameterKind,
    /// Value used when the caller omits the argument
    pub default: i64,
    /// Smallest accepted value
    pub minimum: i64,
    /// What the argument controls
    pub description: &'static str,
}

/// Self-describing metadata for a callable tool
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ToolDescriptor {
    /// Name the tool is invoked by
    pub name: &'static str,
    /// What the tool does; the first line is its summary
    pub description: &'static str,
    /// Declared parameters in order
    pub parameters: &'static [ParameterSpec],
    /// Description of the result
    pub returns: &'static str,
}

/// Lists the most recent historical drawings
pub const FETCH_RECENT_DRAWINGS: ToolDescriptor = ToolDescriptor {
    name: "fetch-recent-drawings",
    description: "A tool that fetches the most recent 'n' Powerball drawings.\n\
                  Returns a table with the draw date and winning numbers of each drawing.",
    parameters: &[ParameterSpec {
        name: "n",
        kind: ParameterKind::Integer,
        default: DEFAULT_RECENT_DRAWINGS,
        minimum: 1,
        description: "The number of Powerball drawings to fetch.",
    }],
    returns: "str: a table of the most recent 'n' Powerball drawings.",
};

/// Generates drawings weighted by historical number frequency
pub const GENERATE_DRAWINGS: ToolDescriptor = ToolDescriptor {
    name: "generate-drawings",
    description: "A tool that generates new Powerball drawings based on the frequency of numbers in previous drawings.\n\
                  Each drawing holds five distinct main numbers in ascending order followed by the Powerball.",
    parameters: &[
        ParameterSpec {
            name: "drawingsToGenerate",
            kind: ParameterKind::Integer,
            default: DEFAULT_DRAWINGS_TO_GENERATE,
            minimum: 0,
            description: "The number of new Powerball drawings to generate.",
        },
        ParameterSpec {
            name: "drawingsToAnalyze",
            kind: ParameterKind::Integer,
            default: DEFAULT_DRAWINGS_TO_ANALYZE,
            minimum: 1,
            description: "The number of previous drawings to analyze for frequency.",
        },
    ],
    returns: "list[list[int]]: new Powerball drawings, each a list of six integers.",
};

/// Every tool the crate exposes, in listing order
pub static ALL_TOOLS: [ToolDescriptor; 2] = [FETCH_RECENT_DRAWINGS, GENERATE_DRAWINGS];

/// Arguments after defaults have been applied and values validated
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ResolvedArgs {
    values: BTreeMap<&'static str, i64>,
}

impl ResolvedArgs {
    /// Value of a declared parameter
    pub fn get(&self, name: &str) -> Option<i64> {
        self.values.get(name).copied()
    }
}

impl ToolDescriptor {
    /// First line of the description
    pub fn summary(&self) -> &'static str {
        self.description.lines().next().unwrap_or_default().trim()
    }

    /// Look up a declared parameter
    pub fn parameter(&self, name: &str) -> Option<&'static ParameterSpec> {
        self.parameters.iter().find(|p| p.name == name)
    }

    /// Function-calling schema: name, description and a JSON-schema object of parameters
    pub fn json_schema(&self) -> Value {
        let properties: Map<String, Value> = self
            .parameters
            .iter()
            .map(|p| {
                (
                    p.name.to_string(),
                    json!({
                        "type": p.kind.json_type(),
                        "description": p.description,
                        "default": p.default,
                        "minimum": p.minimum,
                    }),
                )
            })
            .collect();

        json!({
            "name": self.name,
            "description": self.description,
            "parameters": {
                "type": "object",
                "properties": properties,
                "required": [],
            },
            "returns": self.returns,
        })
    }

    /// Apply defaults and validate a JSON argument object
    ///
    /// `null` is treated as an empty object.
    ///
    /// # Errors
    ///
    /// Returns `InvalidParameter` if the arguments are not an object, name an
    /// undeclared parameter, have the wrong type or fall below the minimum
    pub fn resolve(&self, args: &Value) -> Result<ResolvedArgs> {
        let empty = Map::new();
        let supplied = match args {
            Value::Null => &empty,
            Value::Object(map) => map,
            other => {
                return Err(invalid_parameter(
                    "arguments",
                    other,
                    &"expected a JSON object of named arguments",
                ));
            }
        };

        if let Some(unknown) = supplied.keys().find(|key| self.parameter(key).is_none()) {
            return Err(invalid_parameter(
                "arguments",
                unknown,
                &format!("'{}' does not accept this argument", self.name),
            ));
        }

        let mut values = BTreeMap::new();
        for param in self.parameters {
            let value = match supplied.get(param.name) {
                None | Some(Value::Null) => param.default,
                Some(raw) => match param.kind {
                    ParameterKind::Integer => raw
                        .as_i64()
                        .ok_or_else(|| invalid_parameter(param.name, raw, &"expected an integer"))?,
                },
            };
            if value < param.minimum {
                return Err(invalid_parameter(
                    param.name,
                    &value,
                    &format!("must be at least {}", param.minimum),
                ));
            }
            values.insert(param.name, value);
        }

        Ok(ResolvedArgs { values })
    }
}

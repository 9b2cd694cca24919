//! Template contracts
//!
//! A contract describes the inputs of one template as data: which input
//! holds the wires, which inputs are per-layer parameters, and a rule for
//! each named parameter. Contracts are stored as JSON and evaluated with the
//! validators in [`crate::utils::validation`].

use crate::error::{ParameterReason, Result, TemplateError};
use crate::shape::{Bound, Shape};
use crate::utils::{ParameterValidator, ShapeValidator};
use crate::value::{Value, ValueKind};
use crate::wires::Wires;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashSet};
use std::path::Path;

/// Rule applied to a single named parameter
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "rule", rename_all = "lowercase")]
pub enum ParameterRule {
    /// Shape check, optionally bounding the leading dimension
    Shape {
        shape: Shape,
        #[serde(default, skip_serializing_if = "Option::is_none")]
        bound: Option<Bound>,
    },
    /// Value must equal one of the options
    Options { options: Vec<serde_json::Value> },
    /// Value kind must be one of the listed kinds
    Type { types: Vec<ValueKind> },
}

impl ParameterRule {
    fn label(&self) -> &'static str {
        match self {
            Self::Shape { .. } => "shape",
            Self::Options { .. } => "options",
            Self::Type { .. } => "type",
        }
    }
}

/// A named parameter and its rule
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ParameterContract {
    pub name: String,
    #[serde(flatten)]
    pub rule: ParameterRule,
    /// Error text used when the rule fails
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
}

impl ParameterContract {
    fn failure_message(&self) -> String {
        self.message.clone().unwrap_or_else(|| {
            format!(
                "parameter '{}' violates its {} rule",
                self.name,
                self.rule.label()
            )
        })
    }
}

/// Input contract of a template
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TemplateContract {
    pub name: String,
    /// Name of the input holding the template's wires
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub wires: Option<String>,
    /// Inputs whose leading dimension is the number of layers
    #[serde(default)]
    pub layered: Vec<String>,
    #[serde(default)]
    pub parameters: Vec<ParameterContract>,
}

/// Outcome of a successful contract check
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct ContractReport {
    pub template: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub wires: Option<Wires>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub layers: Option<usize>,
    /// Shape of every parameter checked by a shape rule
    pub shapes: BTreeMap<String, Shape>,
}

impl TemplateContract {
    /// Parse and validate a contract from JSON text
    pub fn from_json_str(json: &str) -> Result<Self> {
        let contract: Self = serde_json::from_str(json)?;
        contract.validate()?;
        Ok(contract)
    }

    /// Load and validate a contract file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path)?;
        let contract = Self::from_json_str(&text)?;
        log::info!(
            "Loaded contract '{}' with {} parameter rule(s) from {}",
            contract.name,
            contract.parameters.len(),
            path.display()
        );
        Ok(contract)
    }

    /// Check the contract itself for internal consistency
    pub fn validate(&self) -> Result<()> {
        if self.name.trim().is_empty() {
            return Err(TemplateError::contract("template name cannot be empty"));
        }

        let mut names = HashSet::new();
        for param in &self.parameters {
            if param.name.is_empty() {
                return Err(TemplateError::contract(format!(
                    "template '{}' has a parameter with an empty name",
                    self.name
                )));
            }
            if !names.insert(param.name.as_str()) {
                return Err(TemplateError::contract(format!(
                    "parameter '{}' is declared more than once",
                    param.name
                )));
            }
            match &param.rule {
                ParameterRule::Options { options } if options.is_empty() => {
                    return Err(TemplateError::contract(format!(
                        "parameter '{}' has an empty options list",
                        param.name
                    )));
                },
                ParameterRule::Type { types } if types.is_empty() => {
                    return Err(TemplateError::contract(format!(
                        "parameter '{}' has an empty types list",
                        param.name
                    )));
                },
                _ => {},
            }
        }

        for layered in &self.layered {
            if !names.contains(layered.as_str()) {
                return Err(TemplateError::contract(format!(
                    "layered input '{}' is not a declared parameter",
                    layered
                )));
            }
        }

        Ok(())
    }

    /// Parse a JSON object of named inputs
    pub fn parse_inputs(json: &str) -> Result<BTreeMap<String, Value>> {
        match serde_json::from_str::<serde_json::Value>(json)? {
            serde_json::Value::Object(map) => Ok(map
                .into_iter()
                .map(|(name, value)| (name, Value::from(value)))
                .collect()),
            other => Err(TemplateError::contract(format!(
                "inputs must be a JSON object, got {}",
                Value::from(other).kind()
            ))),
        }
    }

    /// Check named inputs against every rule of the contract
    pub fn check(&self, inputs: &BTreeMap<String, Value>) -> Result<ContractReport> {
        let mut report = ContractReport {
            template: self.name.clone(),
            ..ContractReport::default()
        };

        if let Some(wires_name) = &self.wires {
            let wires = Self::input(inputs, wires_name)?;
            let list = ParameterValidator::check_wires(wires)?;
            report.wires = Some(Wires::try_from(list)?);
        }

        for param in &self.parameters {
            log::debug!("Checking parameter '{}' ({} rule)", param.name, param.rule.label());
            let value = Self::input(inputs, &param.name)?;
            let msg = param.failure_message();
            match &param.rule {
                ParameterRule::Shape { shape, bound } => {
                    ShapeValidator::check_shape(value, shape, *bound, &msg)?;
                    report
                        .shapes
                        .insert(param.name.clone(), ShapeValidator::get_shape(value)?);
                },
                ParameterRule::Options { options } => {
                    // Numeric options match across int and float, so `2.0` is in `[1, 2]`
                    let options: Vec<Value> = options
                        .iter()
                        .cloned()
                        .map(|option| Value::from(option).normalized())
                        .collect();
                    let value = value.clone().normalized();
                    ParameterValidator::check_is_in_options(&value, &options, &msg)?;
                },
                ParameterRule::Type { types } => {
                    ParameterValidator::check_type(value, types, &msg)?;
                },
            }
        }

        if !self.layered.is_empty() {
            let params = self
                .layered
                .iter()
                .map(|name| Self::input(inputs, name).cloned())
                .collect::<Result<Vec<Value>>>()?;
            report.layers = Some(ParameterValidator::check_number_of_layers(&params)?);
        }

        Ok(report)
    }

    fn input<'a>(inputs: &'a BTreeMap<String, Value>, name: &str) -> Result<&'a Value> {
        inputs.get(name).ok_or_else(|| {
            TemplateError::parameter(ParameterReason::MissingInput {
                name: name.to_string(),
            })
        })
    }
}

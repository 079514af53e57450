//! Processing API for craft recipe documents.
//!
//! An extensible interface over the pipeline: pick a stage (token stream,
//! syntax tree at a normalization stage, or the full balance run) and an
//! output format. The balance stage is what the binary prints by default:
//! every tree stage rendered as a treeviz diagram followed by the
//! equilibrium map, one line per element.

use std::fmt;

use serde::Serialize;

use crate::craft::lexer::{lex, Token};
use crate::craft::parser::{
    collapse_chains, flatten_expressions, parse, to_treeviz_str, SyntaxNode,
};
use crate::craft::recipe::build_recipe_tree;
use crate::craft::solver::{solve, EquilibriumMap};

/// Which pipeline stage to extract.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcessingStage {
    Tokens,
    Tree(TreeStage),
    Balance,
}

/// How far to normalize the syntax tree before rendering it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TreeStage {
    Raw,
    Collapsed,
    Flattened,
}

impl TreeStage {
    /// Parse a stage name as passed on the command line.
    pub fn from_string(stage: &str) -> Result<Self, ProcessingError> {
        match stage {
            "raw" => Ok(TreeStage::Raw),
            "collapsed" => Ok(TreeStage::Collapsed),
            "flat" => Ok(TreeStage::Flattened),
            _ => Err(ProcessingError::InvalidStage(stage.to_string())),
        }
    }
}

/// The output format.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Simple,
    Json,
    Treeviz,
}

impl OutputFormat {
    /// Parse a format name as passed on the command line.
    pub fn from_string(format: &str) -> Result<Self, ProcessingError> {
        match format {
            "simple" => Ok(OutputFormat::Simple),
            "json" => Ok(OutputFormat::Json),
            "treeviz" => Ok(OutputFormat::Treeviz),
            _ => Err(ProcessingError::InvalidFormat(format.to_string())),
        }
    }
}

/// A complete processing specification: stage plus format, validated for
/// compatibility at construction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ProcessingSpec {
    pub stage: ProcessingStage,
    pub format: OutputFormat,
}

impl ProcessingSpec {
    pub fn new(stage: ProcessingStage, format: OutputFormat) -> Result<Self, ProcessingError> {
        match (stage, format) {
            (ProcessingStage::Tokens, OutputFormat::Treeviz) => {
                Err(ProcessingError::IncompatibleSpec(
                    "format 'treeviz' only works with the tree stage".to_string(),
                ))
            }
            (ProcessingStage::Tree(_), OutputFormat::Simple) => {
                Err(ProcessingError::IncompatibleSpec(
                    "the tree stage renders as 'treeviz' or 'json'".to_string(),
                ))
            }
            (ProcessingStage::Balance, OutputFormat::Treeviz) => {
                Err(ProcessingError::IncompatibleSpec(
                    "the balance stage renders as 'simple' or 'json'".to_string(),
                ))
            }
            _ => Ok(ProcessingSpec { stage, format }),
        }
    }
}

/// Errors that can occur during processing.
#[derive(Debug, Clone, PartialEq)]
pub enum ProcessingError {
    InvalidStage(String),
    InvalidFormat(String),
    IncompatibleSpec(String),
    ParseFailed(String),
    RecipeFailed(String),
    SerializeFailed(String),
}

impl fmt::Display for ProcessingError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ProcessingError::InvalidStage(stage) => write!(f, "invalid stage: {}", stage),
            ProcessingError::InvalidFormat(format) => write!(f, "invalid format: {}", format),
            ProcessingError::IncompatibleSpec(msg) => write!(f, "incompatible spec: {}", msg),
            ProcessingError::ParseFailed(msg) => write!(f, "parse failed: {}", msg),
            ProcessingError::RecipeFailed(msg) => write!(f, "recipe extraction failed: {}", msg),
            ProcessingError::SerializeFailed(msg) => write!(f, "serialization failed: {}", msg),
        }
    }
}

impl std::error::Error for ProcessingError {}

/// The full balance run: every tree stage plus the equilibrium map.
#[derive(Debug, Clone, Serialize)]
pub struct BalanceReport {
    pub raw_tree: SyntaxNode,
    pub collapsed_tree: SyntaxNode,
    pub flattened_tree: SyntaxNode,
    pub equilibrium: EquilibriumMap,
}

impl BalanceReport {
    /// Human-readable rendering: the three trees, a divider, then one line
    /// per element.
    pub fn render(&self) -> String {
        let mut out = String::new();
        out.push_str(&to_treeviz_str(&self.raw_tree));
        out.push('\n');
        out.push_str(&to_treeviz_str(&self.collapsed_tree));
        out.push('\n');
        out.push_str(&to_treeviz_str(&self.flattened_tree));
        out.push('\n');
        out.push_str(&"-".repeat(80));
        out.push('\n');
        for (name, equilibrium) in &self.equilibrium {
            out.push_str(&format!("{:>16}\t{}\n", name, equilibrium));
        }
        out
    }
}

/// Run the full pipeline on a source document.
pub fn balance_source(source: &str) -> Result<BalanceReport, ProcessingError> {
    let tokens = lex(source);
    let raw_tree = parse(&tokens).map_err(|e| ProcessingError::ParseFailed(e.to_string()))?;

    let mut collapsed_tree = raw_tree.clone();
    collapse_chains(&mut collapsed_tree);

    let mut flattened_tree = collapsed_tree.clone();
    flatten_expressions(&mut flattened_tree);

    let recipe = build_recipe_tree(&flattened_tree)
        .map_err(|e| ProcessingError::RecipeFailed(e.to_string()))?;
    let equilibrium = solve(&recipe);

    Ok(BalanceReport {
        raw_tree,
        collapsed_tree,
        flattened_tree,
        equilibrium,
    })
}

/// Process a source document according to the given specification.
pub fn process_source(source: &str, spec: &ProcessingSpec) -> Result<String, ProcessingError> {
    match spec.stage {
        ProcessingStage::Tokens => {
            let tokens = lex(source);
            format_tokens(&tokens, spec.format)
        }
        ProcessingStage::Tree(tree_stage) => {
            let tree = syntax_tree(source, tree_stage)?;
            match spec.format {
                OutputFormat::Treeviz => Ok(to_treeviz_str(&tree)),
                _ => to_json(&tree),
            }
        }
        ProcessingStage::Balance => {
            let report = balance_source(source)?;
            match spec.format {
                OutputFormat::Json => to_json(&report),
                _ => Ok(report.render()),
            }
        }
    }
}

/// Parse a document and normalize the tree to the requested stage.
pub fn syntax_tree(source: &str, stage: TreeStage) -> Result<SyntaxNode, ProcessingError> {
    let tokens = lex(source);
    let mut tree = parse(&tokens).map_err(|e| ProcessingError::ParseFailed(e.to_string()))?;
    if stage != TreeStage::Raw {
        collapse_chains(&mut tree);
    }
    if stage == TreeStage::Flattened {
        flatten_expressions(&mut tree);
    }
    Ok(tree)
}

fn format_tokens(tokens: &[Token], format: OutputFormat) -> Result<String, ProcessingError> {
    match format {
        OutputFormat::Json => to_json(&tokens),
        _ => {
            let mut out = String::new();
            for token in tokens {
                out.push_str(&format!("{}\n", token));
            }
            Ok(out)
        }
    }
}

fn to_json<T: Serialize>(value: &T) -> Result<String, ProcessingError> {
    serde_json::to_string_pretty(value).map_err(|e| ProcessingError::SerializeFailed(e.to_string()))
}

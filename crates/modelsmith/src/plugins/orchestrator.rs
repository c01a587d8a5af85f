//! Orchestrator for the conversion pipeline
//!
//! The orchestrator manages the flow of data through all stages:
//! classify → parse (once per file) → enum registry → class assembly → document

use anyhow::Result;
use tracing::{debug, info, span, Level};

use crate::core::{ConversionConfig, Diagnostic, DiagnosticKind, Diagnostics, Parser};
use crate::model::{
    ClassAssembler, Document, DocumentBuilder, EnumRegistry, FileClassifier, FileModel, FileRole,
    StatechartEntry,
};
use crate::plugins::class::{Class, ClassDatabase, ClassParser, EnumDecl};
use crate::plugins::state::{StateDatabase, StateParser};
use crate::source::SourceFile;

/// Parsed content of one class diagram file
#[derive(Debug, Clone)]
pub struct ParsedClassFile {
    pub file_name: String,
    pub domain: String,
    pub classes: Vec<Class>,
    pub enums: Vec<EnumDecl>,
}

/// Every file parsed once, before any cross-referencing
#[derive(Debug, Clone, Default)]
pub struct SourceModel {
    /// Class diagram files in sorted file order
    pub class_files: Vec<ParsedClassFile>,
    /// Statecharts in sorted file order
    pub statecharts: Vec<StatechartEntry>,
}

/// Result of a full build
#[derive(Debug, Clone)]
pub struct BuildOutput {
    pub document: Document,
    pub diagnostics: Diagnostics,
}

/// Pipeline orchestrator
///
/// Holds the configuration and the parsers so callers can run a full
/// conversion without wiring each stage by hand.
pub struct Orchestrator {
    config: ConversionConfig,
    classifier: FileClassifier,
    class_parser: ClassParser,
    state_parser: StateParser,
}

impl Orchestrator {
    /// Create an orchestrator with the built-in tables
    pub fn new() -> Self {
        Self::with_config(ConversionConfig::default())
    }

    pub fn with_config(config: ConversionConfig) -> Self {
        Self {
            classifier: FileClassifier::from_config(&config),
            config,
            class_parser: ClassParser::new(),
            state_parser: StateParser::new(),
        }
    }

    pub fn config(&self) -> &ConversionConfig {
        &self.config
    }

    /// Role of a file under the current configuration
    pub fn classify(&self, file_name: &str) -> FileRole {
        self.classifier.classify(file_name)
    }

    fn parse_classes(
        &self,
        source: &SourceFile,
        diagnostics: &mut Diagnostics,
    ) -> Result<(Vec<Class>, Vec<EnumDecl>)> {
        let mut database = ClassDatabase::new();
        self.class_parser.parse(&source.content, &mut database)?;

        let (classes, enums, found) = database.into_parts();
        diagnostics.absorb(found, &source.file_name);
        Ok((classes, enums))
    }

    fn parse_statechart(&self, name: String, source: &SourceFile) -> Result<StatechartEntry> {
        let mut database = StateDatabase::new();
        self.state_parser.parse(&source.content, &mut database)?;

        Ok(StatechartEntry {
            name,
            states: database.states(),
            initial_state: database.initial_state(),
            transitions: database.into_transitions(),
        })
    }

    /// Parse every source exactly once
    ///
    /// `sources` must already be sorted by file name.
    pub fn parse_sources(
        &self,
        sources: &[SourceFile],
        diagnostics: &mut Diagnostics,
    ) -> Result<SourceModel> {
        let parse_span = span!(Level::INFO, "parse_sources", files = sources.len());
        let _enter = parse_span.enter();

        let mut model = SourceModel::default();

        for source in sources {
            match self.classify(&source.file_name) {
                FileRole::ClassDiagram { domain } => {
                    debug!(file = %source.file_name, %domain, "Parsing class diagram");
                    let (classes, enums) = self.parse_classes(source, diagnostics)?;
                    model.class_files.push(ParsedClassFile {
                        file_name: source.file_name.clone(),
                        domain,
                        classes,
                        enums,
                    });
                }
                FileRole::Statechart { name } => {
                    debug!(file = %source.file_name, %name, "Parsing state diagram");
                    model.statecharts.push(self.parse_statechart(name, source)?);
                }
                FileRole::Unassigned => diagnostics.push(
                    Diagnostic::new(
                        DiagnosticKind::SkippedFile,
                        "class diagram file matches no domain rule",
                    )
                    .in_file(&source.file_name),
                ),
                FileRole::Other => {
                    debug!(file = %source.file_name, "Ignoring file");
                }
            }
        }

        Ok(model)
    }

    /// Resolve a parsed source model into the output document
    pub fn assemble(&self, model: &SourceModel, diagnostics: &mut Diagnostics) -> Document {
        let assemble_span = span!(Level::INFO, "assemble_document");
        let _enter = assemble_span.enter();

        let registry = EnumRegistry::build(
            model.class_files.iter().flat_map(|file| {
                file.enums
                    .iter()
                    .map(move |decl| (file.file_name.as_str(), decl))
            }),
            &model.statecharts,
            &self.config.custom_enums,
            diagnostics,
        );

        let mut builder = DocumentBuilder::new(&self.config.model_name, &self.config.version);

        for file in &model.class_files {
            builder.add_domain(&file.domain, self.config.domain_description(&file.domain));
        }

        builder.enumerations(registry.to_enumerations());

        let assembler = ClassAssembler::new(&registry, &self.config.attribute_enums);
        for file in &model.class_files {
            for class in &file.classes {
                builder.add_class(assembler.assemble(&file.domain, class));
            }
        }

        for chart in &model.statecharts {
            builder.add_statechart(chart.clone());
        }

        let document = builder.build();
        info!(
            domains = document.domains.len(),
            enumerations = document.enumerations.len(),
            classes = document.classes.len(),
            statecharts = document.statecharts.len(),
            "Assembled document"
        );
        document
    }

    /// Run the full pipeline over sorted sources
    pub fn build(&self, sources: &[SourceFile]) -> Result<BuildOutput> {
        let build_span = span!(Level::INFO, "build_model", files = sources.len());
        let _enter = build_span.enter();

        info!("Starting model build");

        let mut diagnostics = Diagnostics::new();
        let model = self.parse_sources(sources, &mut diagnostics)?;
        let document = self.assemble(&model, &mut diagnostics);

        info!(diagnostics = diagnostics.len(), "Model build completed");
        Ok(BuildOutput {
            document,
            diagnostics,
        })
    }

    /// Convert one file on its own, keeping declared types and methods
    pub fn convert_file(&self, source: &SourceFile) -> Result<(FileModel, Diagnostics)> {
        let mut diagnostics = Diagnostics::new();
        let (classes, enums) = self.parse_classes(source, &mut diagnostics)?;
        Ok((FileModel::new(source.stem(), classes, enums), diagnostics))
    }
}

impl Default for Orchestrator {
    fn default() -> Self {
        Self::new()
    }
}

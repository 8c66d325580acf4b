//! # Field Assembler
//!
//! Turns one model's schema into a [`FieldList`]. A run is in exactly one of
//! two modes, fixed when it starts:
//!
//! ```text
//!   RunMode::Automatic { model }          RunMode::Interactive
//!            │                                     │
//!            ▼                                     ▼
//!   resolve model, read columns          ask model, resolve, read columns
//!            │                                     │
//!   every pooled column:                 until declined or pool empty:
//!     skip ignored timestamps              choose column → choose type
//!     first catalog type or skip           rules? visibility? sortable?
//!     derived rules                        continue?
//!            │                                     │
//!            └──────────────┬──────────────────────┘
//!                           ▼
//!            relationship fields (no name collisions)
//!                           ▼
//!                       FieldList
//! ```
//!
//! Columns are taken from the pool last-declared first.

use novagen_core::{
    ColumnDescriptor, EngineError, EngineResult, Interaction, SchemaProvider,
};
use novagen_ir::{
    FieldCandidatePool, FieldList, FieldsBuilder, RelationshipResolver, default_option_for,
    derive_rules, normalize_type, options_for,
};

use crate::config::GeneratorConfig;

// ============================================================================
// Prompts
// ============================================================================

/// Operator-facing prompt texts
pub mod prompts {
    pub const MODEL: &str = "What is the name of the Model?";
    pub const SELECT_FIELD: &str = "Select the field to include";
    pub const TYPE_OPTIONS: &str = "These are the options for the";
    pub const ATTACH_RULES: &str = "Do you want to attach rules?";
    pub const RULES: &str = "Type the name of the rule separated by a |";
    pub const VISIBILITY: &str = "Is there any special exception on the visibility of the field?";
    pub const VISIBILITY_METHODS: &str = "Type the name of the method separated by a |";
    pub const SORTABLE: &str = "Is it sortable?";
    pub const CONTINUE: &str = "Do you wish to continue?";

    /// Prompt offering the type options of one column
    pub fn type_options(name: &str, raw_type: &str) -> String {
        format!("{} {} ({})?", TYPE_OPTIONS, name, raw_type)
    }
}

// ============================================================================
// RunMode
// ============================================================================

/// How a run collects its fields
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunMode {
    /// The operator is asked for the model and every field detail
    Interactive,
    /// Defaults are derived from column metadata for the given model
    Automatic { model: String },
}

impl RunMode {
    /// Automatic when a model was supplied up front, interactive otherwise
    pub fn select(model: Option<String>) -> Self {
        match model {
            Some(model) => RunMode::Automatic { model },
            None => RunMode::Interactive,
        }
    }
}

// ============================================================================
// FieldAssembler
// ============================================================================

/// A resolved model and the columns waiting to become fields
struct PreparedModel {
    model: String,
    pool: FieldCandidatePool,
}

/// Assembles the field list of one model
pub struct FieldAssembler<'a, P: SchemaProvider + ?Sized> {
    provider: &'a P,
    config: &'a GeneratorConfig,
    resolver: RelationshipResolver,
}

impl<'a, P: SchemaProvider + ?Sized> FieldAssembler<'a, P> {
    pub fn new(provider: &'a P, config: &'a GeneratorConfig) -> Self {
        Self {
            provider,
            config,
            resolver: RelationshipResolver::new(config.relation_field_types.clone()),
        }
    }

    /// Run in the given mode
    ///
    /// `io` is only consulted in interactive mode.
    pub fn run(&self, mode: &RunMode, io: &mut dyn Interaction) -> EngineResult<FieldList> {
        match mode {
            RunMode::Interactive => self.run_interactive(io),
            RunMode::Automatic { model } => self.run_automatic(model),
        }
    }

    /// Derive every field from column metadata, without asking anything
    pub fn run_automatic(&self, identity: &str) -> EngineResult<FieldList> {
        let PreparedModel { model, mut pool } = self.prepare(identity)?;
        let mut builder = FieldsBuilder::new();

        for name in pool.names() {
            if let Some(column) = pool.pop(&name) {
                self.work_on_field_auto(&mut builder, &column)?;
            }
        }

        self.finish(model, builder)
    }

    /// Walk the operator through the fields of a model
    pub fn run_interactive(&self, io: &mut dyn Interaction) -> EngineResult<FieldList> {
        let identity = io.ask(prompts::MODEL)?;
        let PreparedModel { model, mut pool } = self.prepare(identity.trim())?;
        let mut builder = FieldsBuilder::new();

        while !pool.is_empty() {
            let selected = io.choice(prompts::SELECT_FIELD, &pool.names())?;
            let column = pool.pop(&selected).ok_or_else(|| {
                EngineError::interaction(format!("'{}' is not an available field", selected))
            })?;
            self.work_on_field_interactive(io, &mut builder, &column)?;

            if !io.confirm(prompts::CONTINUE)? || pool.is_empty() {
                break;
            }
        }

        self.finish(model, builder)
    }

    /// Resolve the model and pool its columns, last-declared first
    fn prepare(&self, identity: &str) -> EngineResult<PreparedModel> {
        let model = self.provider.resolve_model(identity)?;
        let columns = self.provider.columns_of(&model)?;
        let relations = self.resolver.count_mappable(self.provider, &model)?;

        if columns.is_empty() && relations == 0 {
            return Err(EngineError::empty_schema(model));
        }

        tracing::info!(
            model = %model,
            columns = columns.len(),
            relations,
            "model resolved"
        );

        Ok(PreparedModel {
            model,
            pool: FieldCandidatePool::tag(columns).reversed(),
        })
    }

    fn work_on_field_auto(
        &self,
        builder: &mut FieldsBuilder,
        column: &ColumnDescriptor,
    ) -> EngineResult<()> {
        if self.config.skips_column(&column.name) {
            tracing::debug!(column = %column.name, "skipping timestamp column");
            return Ok(());
        }

        let Some(type_option) = default_option_for(&column.raw_type) else {
            tracing::debug!(
                column = %column.name,
                raw_type = %column.raw_type,
                "no field type for column type, skipping"
            );
            return Ok(());
        };

        builder.add_field(&column.name, type_option)?;
        builder.add_rules(&derive_rules(column))
    }

    fn work_on_field_interactive(
        &self,
        io: &mut dyn Interaction,
        builder: &mut FieldsBuilder,
        column: &ColumnDescriptor,
    ) -> EngineResult<()> {
        let options = options_for(&column.raw_type);
        let type_option = if options.is_empty() {
            normalize_type(&column.raw_type)
        } else {
            let options: Vec<String> = options.iter().map(|o| o.to_string()).collect();
            io.choice(&prompts::type_options(&column.name, &column.raw_type), &options)?
        };

        if type_option.is_empty() {
            tracing::debug!(
                column = %column.name,
                raw_type = %column.raw_type,
                "column type is unusable as a field type, skipping"
            );
            return Ok(());
        }

        builder.add_field(&column.name, &type_option)?;

        if io.confirm(prompts::ATTACH_RULES)? {
            let rules = io.ask(prompts::RULES)?;
            builder.add_rules(&rules)?;
        }

        if io.confirm(prompts::VISIBILITY)? {
            let (headers, rows) = FieldsBuilder::available_visibility_methods();
            io.table(&headers, &rows)?;
            loop {
                let methods = io.ask(prompts::VISIBILITY_METHODS)?;
                if builder.add_visibility_methods(&methods)? {
                    break;
                }
                tracing::warn!(
                    field = %column.name,
                    unrecognized = ?FieldsBuilder::unrecognized_visibility_methods(&methods),
                    "visibility methods rejected"
                );
                io.table(&headers, &rows)?;
            }
        }

        if io.confirm(prompts::SORTABLE)? {
            builder.mark_sortable()?;
        }

        Ok(())
    }

    /// Append relationship fields and close the builder
    fn finish(&self, model: String, mut builder: FieldsBuilder) -> EngineResult<FieldList> {
        let taken = builder.field_names();
        for relationship in self.resolver.resolve(self.provider, &model, &taken)? {
            builder.add_relationship(relationship);
        }

        let fields = builder.finalize();
        if fields.is_empty() {
            return Err(EngineError::NoFieldsGenerated { model });
        }

        tracing::info!(model = %model, fields = fields.len(), "field list assembled");
        Ok(FieldList::new(model, fields))
    }
}

// ============================================================================
// Tests
// ============================================================================

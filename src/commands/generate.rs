//! The binding generation pipeline.
//!
//! load inputs -> resolve binding set -> plan every class -> emit and write
//! one class at a time.
//!
//! Planning (metadata lookup, superclass lookup, classification) runs for
//! every class before anything is written, so a bad class name aborts the
//! run without leaving a partial set of files behind.

use crate::analysis::{classify_class, resolve_binding_set, ClassPlan, Rejection, RootExclusion};
use crate::codegen::{generate_class, Banner, Naming};
use crate::core::{Hierarchy, Metadata};
use crate::errors::BindgenError;
use crate::io::FileSystem;
use crate::observability::{
    increment_done, set_current_class, set_phase, set_progress, GenerationPhase,
};
use crate::parsers::{parse_bridgesupport, parse_hierarchy};
use anyhow::{Context, Result};
use std::path::{Path, PathBuf};
use tracing::{debug, info, info_span, warn};

/// Everything a generation run needs, after CLI and config are merged.
#[derive(Debug, Clone)]
pub struct GenerateConfig {
    pub bridgesupport: PathBuf,
    pub hierarchy: PathBuf,
    pub classes: Vec<String>,
    pub output_dir: PathBuf,
    pub naming: Naming,
    pub exclusion: RootExclusion,
    pub banner: Banner,
    /// Build every artifact but write nothing.
    pub dry_run: bool,
}

/// Outcome for one bound class.
#[derive(Debug, Clone)]
pub struct ClassReport {
    pub class_name: String,
    pub parent_name: String,
    pub header: PathBuf,
    pub implementation: PathBuf,
    pub bound_methods: Vec<String>,
    pub rejected: Vec<Rejection>,
}

#[derive(Debug, Clone, Default)]
pub struct GenerationReport {
    /// Classes in generation order.
    pub classes: Vec<ClassReport>,
    /// Classes dropped because their bindings are hand-written.
    pub excluded: Vec<String>,
    pub dry_run: bool,
}

impl GenerationReport {
    pub fn bound_method_count(&self) -> usize {
        self.classes.iter().map(|c| c.bound_methods.len()).sum()
    }

    pub fn rejected_method_count(&self) -> usize {
        self.classes.iter().map(|c| c.rejected.len()).sum()
    }

    pub fn class(&self, name: &str) -> Option<&ClassReport> {
        self.classes.iter().find(|c| c.class_name == name)
    }
}

/// Read and parse both input files. Either failing aborts the run.
pub fn load_inputs<F: FileSystem>(
    fs: &F,
    hierarchy_path: &Path,
    bridgesupport_path: &Path,
) -> Result<(Hierarchy, Metadata)> {
    let hierarchy = {
        let _phase = set_phase(GenerationPhase::LoadingHierarchy);
        let text = fs.read_to_string(hierarchy_path)?;
        parse_hierarchy(&text)
            .map_err(|e| e.with_path(hierarchy_path))
            .context("Failed to load hierarchy file")?
    };
    debug!(classes = hierarchy.len(), "Loaded hierarchy");

    let metadata = {
        let _phase = set_phase(GenerationPhase::LoadingMetadata);
        let text = fs.read_to_string(bridgesupport_path)?;
        parse_bridgesupport(&text)
            .map_err(|e| e.with_path(bridgesupport_path))
            .context("Failed to load BridgeSupport file")?
    };
    debug!(classes = metadata.len(), "Loaded metadata");

    Ok((hierarchy, metadata))
}

struct PlannedClass {
    parent_name: String,
    plan: ClassPlan,
}

fn plan_class(
    hierarchy: &Hierarchy,
    metadata: &Metadata,
    class_name: &str,
) -> Result<PlannedClass, BindgenError> {
    let class = metadata
        .get(class_name)
        .ok_or_else(|| BindgenError::class_not_found(class_name))?;
    let parent_name = hierarchy
        .superclass_of(class_name)
        .ok_or_else(|| BindgenError::missing_superclass(class_name))?;

    let plan = classify_class(class);
    for rejection in &plan.rejected {
        warn!("NOT OK: {} ({})", rejection.selector(), rejection);
    }

    Ok(PlannedClass {
        parent_name: parent_name.to_string(),
        plan,
    })
}

/// Run the whole pipeline, writing through `fs`.
pub fn run_generate<F: FileSystem>(fs: &F, config: &GenerateConfig) -> Result<GenerationReport> {
    let (hierarchy, metadata) = load_inputs(fs, &config.hierarchy, &config.bridgesupport)?;

    let (bindings, excluded) = {
        let _phase = set_phase(GenerationPhase::ResolvingAncestors);
        let mut bindings = resolve_binding_set(&hierarchy, config.classes.as_slice())?;
        let excluded = config.exclusion.apply(&mut bindings);
        for class in &excluded {
            info!("Removing {} from bindings...", class);
        }
        (bindings, excluded)
    };

    let planned = {
        let _phase = set_phase(GenerationPhase::Classifying);
        bindings
            .iter()
            .map(|class_name| {
                let _class = set_current_class(class_name);
                plan_class(&hierarchy, &metadata, class_name)
            })
            .collect::<Result<Vec<_>, _>>()?
    };

    if !config.dry_run && !fs.exists(&config.output_dir) {
        fs.create_dir_all(&config.output_dir)?;
    }

    let mut report = GenerationReport {
        classes: Vec::with_capacity(planned.len()),
        excluded,
        dry_run: config.dry_run,
    };
    set_progress(0, planned.len());

    for PlannedClass { parent_name, plan } in planned {
        let span = info_span!("class", name = %plan.class_name);
        let _span = span.enter();
        let _class = set_current_class(&plan.class_name);

        let bindings = {
            let _phase = set_phase(GenerationPhase::Emitting);
            generate_class(plan, &parent_name, &config.naming, &config.banner)?
        };

        for artifact in bindings.artifacts() {
            let path = config.output_dir.join(&artifact.path);
            if config.dry_run {
                debug!(path = %path.display(), bytes = artifact.content.len(), "Skipping write (dry run)");
            } else {
                let _phase = set_phase(GenerationPhase::Writing);
                fs.write(&path, &artifact.content)
                    .with_context(|| format!("Failed to write bindings for {}", artifact.class_name))?;
                debug!(path = %path.display(), "Wrote artifact");
            }
        }

        let bound_methods: Vec<String> = bindings
            .plan
            .accepted
            .iter()
            .map(|m| m.selector.to_string())
            .collect();
        info!(
            bound = bound_methods.len(),
            skipped = bindings.plan.rejected.len(),
            "Generated bindings for {}",
            bindings.plan.class_name
        );

        report.classes.push(ClassReport {
            class_name: bindings.plan.class_name,
            parent_name,
            header: config.output_dir.join(&bindings.header.path),
            implementation: config.output_dir.join(&bindings.implementation.path),
            bound_methods,
            rejected: bindings.plan.rejected,
        });
        increment_done();
    }

    Ok(report)
}

//! Document type construction pipeline.
//!
//! Every declaration goes through the same stages, in this order:
//!
//! 1. **Registration** - the new type becomes visible in the registry
//! 2. **Inheritance** (`inheritance.rs`) - mixin fields are merged into the
//!    declared attributes
//! 3. **Finalization** (`foundation.rs`) - attributes and document-base
//!    mappings become the type's `Mapping`
//! 4. **Backrefs** (`backref.rs`) - inverse fields are injected into targets
//!
//! Inheritance has to see the declaration before it is finalized, and backref
//! synthesis needs the finished mapping, so the order is fixed. A failing stage
//! does not undo the registration of stage 1.
//!
//! `build_document_type` runs all stages for one declaration, which requires
//! relationship targets to be registered already. `DocumentBatch` runs the
//! same stages per declaration, but holds back stage 4 for types whose
//! targets are declared later in the batch, so forward references resolve.

mod backref;
mod foundation;
mod inheritance;

pub use backref::{BackrefLink, synthesize_backrefs};
pub use foundation::{finalize_mapping, validate_targets};
pub use inheritance::{InheritanceCandidates, ResolvedBase, inherit_fields};

use std::sync::Arc;

use crate::error::DocError;
use crate::registry;
use crate::schema::{Base, DocumentClass, DocumentDef};

/// Build, register and wire up a single document type.
pub fn build_document_type(def: DocumentDef) -> Result<Arc<DocumentClass>, DocError> {
    let class = construct(def)?;
    validate_targets(&class)?;
    synthesize_backrefs(&class)?;
    Ok(class)
}

// Stages 1-3: register, inherit, finalize.
fn construct(def: DocumentDef) -> Result<Arc<DocumentClass>, DocError> {
    let DocumentDef { name, bases, mut attrs } = def;

    let class = Arc::new(DocumentClass::new(name, bases));
    registry::register(Arc::clone(&class));

    let mapping = {
        let resolved = resolve_bases(&class)?;
        let inherited = inherit_fields(&mut attrs, &resolved);
        if !inherited.is_empty() {
            tracing::debug!(document = %class.name(), ?inherited, "inherited mixin fields");
        }
        finalize_mapping(attrs, &resolved)
    };
    *class.write_mapping() = mapping;

    Ok(class)
}

fn resolve_bases(class: &DocumentClass) -> Result<Vec<ResolvedBase<'_>>, DocError> {
    class
        .bases()
        .iter()
        .map(|base| match base {
            Base::Document(name) => registry::get(name)
                .map(ResolvedBase::Document)
                .map_err(|_| DocError::UnknownBase {
                    document: class.name().to_string(),
                    base: name.clone(),
                }),
            Base::Mixin(mixin) => Ok(ResolvedBase::Mixin(mixin.as_ref())),
        })
        .collect()
}

/// A set of declarations built together.
///
/// Declarations are constructed in insertion order, so a document base must be
/// added before the types extending it. Relationship targets may be declared
/// anywhere in the batch.
#[derive(Debug, Default)]
pub struct DocumentBatch {
    defs: Vec<DocumentDef>,
}

impl DocumentBatch {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, def: DocumentDef) -> &mut Self {
        self.defs.push(def);
        self
    }

    pub fn len(&self) -> usize {
        self.defs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.defs.is_empty()
    }

    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.defs.iter().map(|def| def.name.as_str())
    }

    /// Construct every declaration in order and wire up its backrefs.
    ///
    /// A type whose relationship targets are all registered is wired right
    /// after construction, so later subtypes in the batch inherit the
    /// backrefs injected into it. Types referencing a later declaration are
    /// wired once the whole batch is constructed.
    pub fn build(self) -> Result<BuiltBatch, DocError> {
        let mut classes = Vec::with_capacity(self.defs.len());
        let mut links = Vec::new();
        let mut deferred = Vec::new();

        for def in self.defs {
            let class = construct(def)?;
            if validate_targets(&class).is_ok() {
                links.extend(synthesize_backrefs(&class)?);
            } else {
                deferred.push(Arc::clone(&class));
            }
            classes.push(class);
        }

        for class in &deferred {
            validate_targets(class)?;
            links.extend(synthesize_backrefs(class)?);
        }

        tracing::info!(
            documents = classes.len(),
            deferred = deferred.len(),
            backrefs = links.len(),
            "built document batch"
        );
        Ok(BuiltBatch { classes, links })
    }
}

/// Types constructed by a batch, in declaration order, and the backref pairs
/// synthesized for them.
#[derive(Debug, Default)]
pub struct BuiltBatch {
    pub classes: Vec<Arc<DocumentClass>>,
    pub links: Vec<BackrefLink>,
}

impl Extend<DocumentDef> for DocumentBatch {
    fn extend<I: IntoIterator<Item = DocumentDef>>(&mut self, iter: I) {
        self.defs.extend(iter);
    }
}

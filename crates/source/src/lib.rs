//! Task source abstractions for the render session.
//!
//! A session doesn't load problem sets itself; the host hands it a
//! [`TaskSource`] and the session reads the tasks through it.
//!
//! ## Accepted JSON shapes
//!
//! - A bare array of tasks: `[{ "name": ..., "problems": [...] }, ...]`
//! - A document with run defaults: `{ "options": {...}, "tasks": [...] }`
//!
//! ## Example
//!
//! ```ignore
//! use folio_source::{TaskSource, VecTaskSource};
//!
//! let mut source = VecTaskSource::from_json_str(&json)?;
//! for task in source.tasks() {
//!     println!("{} problems", task.problems.len());
//! }
//! ```

use folio_types::{RenderOptions, Task};
use serde::de::value::{MapAccessDeserializer, SeqAccessDeserializer};
use serde::de::{MapAccess, SeqAccess, Visitor};
use serde::{Deserialize, Deserializer};
use std::fmt;
use std::io::Read;
use thiserror::Error;

/// Error type for loading tasks.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("Invalid task JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

/// Read access to the tasks of one render run.
///
/// Access is mutable because rendering flags graph configurations in place;
/// after a pass the source's tasks reflect that.
pub trait TaskSource {
    /// The tasks to render, in print order.
    fn tasks(&mut self) -> &mut [Task];

    /// Run-level defaults shipped with the data, if any.
    fn defaults(&self) -> Option<&RenderOptions> {
        None
    }
}

/// Either accepted JSON shape, normalized.
struct TaskDocument {
    tasks: Vec<Task>,
    defaults: Option<RenderOptions>,
}

#[derive(Deserialize)]
struct TaskFile {
    #[serde(default)]
    options: Option<RenderOptions>,
    tasks: Vec<Task>,
}

struct TaskDocumentVisitor;

// The shape is picked from the first token, so errors inside a task keep
// their own message and position.
impl<'de> Visitor<'de> for TaskDocumentVisitor {
    type Value = TaskDocument;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("an array of tasks or an object with a \"tasks\" array")
    }

    fn visit_seq<A>(self, seq: A) -> Result<Self::Value, A::Error>
    where
        A: SeqAccess<'de>,
    {
        let tasks = Vec::<Task>::deserialize(SeqAccessDeserializer::new(seq))?;
        Ok(TaskDocument {
            tasks,
            defaults: None,
        })
    }

    fn visit_map<A>(self, map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let file = TaskFile::deserialize(MapAccessDeserializer::new(map))?;
        Ok(TaskDocument {
            tasks: file.tasks,
            defaults: file.options,
        })
    }
}

impl<'de> Deserialize<'de> for TaskDocument {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(TaskDocumentVisitor)
    }
}

/// A task source backed by an in-memory vector.
#[derive(Debug, Default, Clone)]
pub struct VecTaskSource {
    tasks: Vec<Task>,
    defaults: Option<RenderOptions>,
}

impl VecTaskSource {
    pub fn new(tasks: Vec<Task>) -> Self {
        Self {
            tasks,
            defaults: None,
        }
    }

    pub fn with_defaults(mut self, defaults: RenderOptions) -> Self {
        self.defaults = Some(defaults);
        self
    }

    /// Parses either accepted JSON shape.
    pub fn from_json_str(json: &str) -> Result<Self, SourceError> {
        let document: TaskDocument = serde_json::from_str(json)?;
        Ok(Self::from_document(document))
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, SourceError> {
        let document: TaskDocument = serde_json::from_reader(reader)?;
        Ok(Self::from_document(document))
    }

    fn from_document(document: TaskDocument) -> Self {
        let source = Self {
            tasks: document.tasks,
            defaults: document.defaults,
        };
        log::debug!("Loaded {} task(s) from JSON.", source.tasks.len());
        source
    }

    pub fn len(&self) -> usize {
        self.tasks.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tasks.is_empty()
    }

    /// Gives the (possibly render-mutated) tasks back to the caller.
    pub fn into_inner(self) -> Vec<Task> {
        self.tasks
    }
}

impl TaskSource for VecTaskSource {
    fn tasks(&mut self) -> &mut [Task] {
        &mut self.tasks
    }

    fn defaults(&self) -> Option<&RenderOptions> {
        self.defaults.as_ref()
    }
}

// Blanket implementation for Box<dyn TaskSource>
impl<T: TaskSource + ?Sized> TaskSource for Box<T> {
    fn tasks(&mut self) -> &mut [Task] {
        (**self).tasks()
    }

    fn defaults(&self) -> Option<&RenderOptions> {
        (**self).defaults()
    }
}

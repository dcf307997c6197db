//! The bar-queue demonstration: composes the sequence operations over a roster of [`Person`]s.
//!
//! - [`run`] pipes `filter` → `filter_indexed` → `map_indexed`, and separately reduces the full
//!   roster to a total age.
//! - [`load_roster`] reads a roster from `.json` or `.csv`, picked by file extension.
//! - [`default_roster`] is the built-in six-person group.

use std::fmt::Display;
use std::fs::File;
use std::io::BufReader;
use std::path::Path;

use crate::error::{DemoError, DemoResult};
use crate::observability::{PipelineObserver, Stage, StageEvent};
use crate::processing::{filter, filter_indexed, map_indexed, reduce};
use crate::types::Person;

/// Options controlling the demonstration pipeline.
///
/// Use [`Default`] for the original bar rules.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DemoOptions {
    /// Minimum age (inclusive) to be admitted.
    pub min_age: i64,
    /// The bouncer lets in every `keep_every`-th admitted person, starting with the first.
    pub keep_every: usize,
}

impl Default for DemoOptions {
    fn default() -> Self {
        Self {
            min_age: 21,
            keep_every: 2,
        }
    }
}

impl DemoOptions {
    /// Checks that the options describe a runnable pipeline.
    pub fn validate(&self) -> DemoResult<()> {
        if self.keep_every == 0 {
            return Err(DemoError::InvalidOptions {
                message: "keep_every must be > 0".to_string(),
            });
        }
        Ok(())
    }
}

/// Every intermediate and final result of [`run`].
#[derive(Debug, Clone, PartialEq)]
pub struct DemoReport {
    /// People meeting the age requirement, in roster order.
    pub admitted: Vec<Person>,
    /// Admitted people at positions `0, keep_every, 2 * keep_every, ...`.
    pub queue: Vec<Person>,
    /// `"N. First Last"` for each queued person, numbered from 1.
    pub names: Vec<String>,
    /// Sum of all roster ages.
    pub total_age: f64,
    /// `total_age / roster.len()`, or `None` for an empty roster.
    pub average_age: Option<f64>,
}

/// The six people from the original bar scenario.
pub fn default_roster() -> Vec<Person> {
    vec![
        Person::new("Butter", "Riolu", 22),
        Person::new("Farmer", "Joes", 21),
        Person::new("Juke", "Duke", 21),
        Person::new("Life", "Happens", 24),
        Person::new("Looped", "Needs Help", 18),
        Person::new("Land", "Woof", 21),
    ]
}

/// Run the demonstration pipeline over `roster`.
///
/// When an observer is provided, it receives one [`StageEvent`] per stage, in execution order.
pub fn run(
    roster: &[Person],
    options: &DemoOptions,
    observer: Option<&dyn PipelineObserver>,
) -> DemoResult<DemoReport> {
    options.validate()?;

    let emit = |stage: Stage, input_len: usize, output_len: usize| {
        if let Some(obs) = observer {
            obs.on_stage(&StageEvent {
                stage,
                input_len,
                output_len,
            });
        }
    };

    let admitted = filter(roster, |p| p.age >= options.min_age);
    emit(Stage::Admit, roster.len(), admitted.len());

    let keep_every = options.keep_every;
    let queue = filter_indexed(&admitted, |_, idx| idx % keep_every == 0);
    emit(Stage::Queue, admitted.len(), queue.len());

    let names = map_indexed(&queue, |p, idx| {
        format!("{}. {} {}", idx + 1, p.first_name, p.last_name)
    });
    emit(Stage::Name, queue.len(), names.len());

    let total_age: f64 = reduce(roster, |acc, p| acc + p.age as f64);
    emit(Stage::TotalAge, roster.len(), 1);

    let average_age = if roster.is_empty() {
        None
    } else {
        Some(total_age / roster.len() as f64)
    };

    Ok(DemoReport {
        admitted,
        queue,
        names,
        total_age,
        average_age,
    })
}

/// Render items on one line, each followed by a single space.
pub fn render_line<T: Display>(items: &[T]) -> String {
    items.iter().map(|item| format!("{item} ")).collect()
}

/// Supported roster file formats.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RosterFormat {
    /// JSON array of `{first_name, last_name, age}` objects.
    Json,
    /// CSV with a `first_name,last_name,age` header.
    Csv,
}

impl RosterFormat {
    /// Parse a roster format from a file extension (case-insensitive).
    pub fn from_extension(ext: &str) -> Option<Self> {
        match ext.to_ascii_lowercase().as_str() {
            "json" => Some(Self::Json),
            "csv" => Some(Self::Csv),
            _ => None,
        }
    }

    fn from_path(path: &Path) -> Option<Self> {
        path.extension()
            .and_then(|e| e.to_str())
            .and_then(Self::from_extension)
    }
}

/// Load a roster from `path`, inferring the format from its extension.
pub fn load_roster(path: impl AsRef<Path>) -> DemoResult<Vec<Person>> {
    let path = path.as_ref();
    let format = RosterFormat::from_path(path).ok_or_else(|| DemoError::UnsupportedFormat {
        path: path.to_path_buf(),
    })?;

    match format {
        RosterFormat::Json => {
            let reader = BufReader::new(File::open(path)?);
            Ok(serde_json::from_reader(reader)?)
        }
        RosterFormat::Csv => {
            let mut rdr = csv::ReaderBuilder::new()
                .trim(csv::Trim::All)
                .from_path(path)?;
            let mut people = Vec::new();
            for row in rdr.deserialize::<Person>() {
                people.push(row?);
            }
            Ok(people)
        }
    }
}

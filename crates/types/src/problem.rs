use crate::content::ContentUnit;
use serde::de::{MapAccess, Visitor};
use serde::ser::SerializeMap;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use serde_json::Value;
use std::fmt;

pub const PROBLEM_KEY: &str = "problem";
pub const STEPS_KEY: &str = "steps";
pub const SOLUTION_KEY: &str = "solution";

/// One named entry of a problem record.
#[derive(Debug, Clone, PartialEq)]
pub enum ProblemField {
    /// The question body.
    Problem(Vec<ContentUnit>),
    /// The worked explanation.
    Steps(Vec<ContentUnit>),
    /// The final answer.
    Solution(Vec<ContentUnit>),
    /// Any key the renderer doesn't recognize. Its value is never rendered.
    Other { key: String, value: Value },
}

impl ProblemField {
    pub fn key(&self) -> &str {
        match self {
            ProblemField::Problem(_) => PROBLEM_KEY,
            ProblemField::Steps(_) => STEPS_KEY,
            ProblemField::Solution(_) => SOLUTION_KEY,
            ProblemField::Other { key, .. } => key,
        }
    }
}

/// A single exercise: named content sequences in the order the source record
/// listed them.
///
/// Key order matters. The renderer emits one container per key in exactly
/// this order, so it is kept as a list rather than a struct.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Problem {
    fields: Vec<ProblemField>,
}

impl Problem {
    /// A problem with only a body.
    pub fn new(body: impl IntoIterator<Item = ContentUnit>) -> Self {
        Self {
            fields: vec![ProblemField::Problem(body.into_iter().collect())],
        }
    }

    pub fn with_steps(self, steps: impl IntoIterator<Item = ContentUnit>) -> Self {
        self.with_field(ProblemField::Steps(steps.into_iter().collect()))
    }

    pub fn with_solution(self, solution: impl IntoIterator<Item = ContentUnit>) -> Self {
        self.with_field(ProblemField::Solution(solution.into_iter().collect()))
    }

    /// Sets a field. An existing field with the same key is replaced in place,
    /// keeping its position; a new key is appended.
    pub fn with_field(mut self, field: ProblemField) -> Self {
        match self.fields.iter_mut().find(|f| f.key() == field.key()) {
            Some(existing) => *existing = field,
            None => self.fields.push(field),
        }
        self
    }

    pub fn from_fields(fields: Vec<ProblemField>) -> Self {
        fields
            .into_iter()
            .fold(Self::default(), |problem, field| problem.with_field(field))
    }

    pub fn fields(&self) -> &[ProblemField] {
        &self.fields
    }

    pub fn fields_mut(&mut self) -> &mut [ProblemField] {
        &mut self.fields
    }

    pub fn body(&self) -> Option<&[ContentUnit]> {
        self.fields.iter().find_map(|f| match f {
            ProblemField::Problem(units) => Some(units.as_slice()),
            _ => None,
        })
    }

    pub fn steps(&self) -> Option<&[ContentUnit]> {
        self.fields.iter().find_map(|f| match f {
            ProblemField::Steps(units) => Some(units.as_slice()),
            _ => None,
        })
    }

    pub fn solution(&self) -> Option<&[ContentUnit]> {
        self.fields.iter().find_map(|f| match f {
            ProblemField::Solution(units) => Some(units.as_slice()),
            _ => None,
        })
    }
}

impl Serialize for Problem {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for field in &self.fields {
            match field {
                ProblemField::Problem(units)
                | ProblemField::Steps(units)
                | ProblemField::Solution(units) => map.serialize_entry(field.key(), units)?,
                ProblemField::Other { key, value } => map.serialize_entry(key, value)?,
            }
        }
        map.end()
    }
}

type NullableUnits = Option<Vec<ContentUnit>>;

struct ProblemVisitor;

impl<'de> Visitor<'de> for ProblemVisitor {
    type Value = Problem;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a problem record mapping keys to content-unit lists")
    }

    fn visit_map<A>(self, mut access: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut fields = Vec::with_capacity(access.size_hint().unwrap_or(3));
        while let Some(key) = access.next_key::<String>()? {
            // A null content list counts as an absent key.
            let field = match key.as_str() {
                PROBLEM_KEY => access.next_value::<NullableUnits>()?.map(ProblemField::Problem),
                STEPS_KEY => access.next_value::<NullableUnits>()?.map(ProblemField::Steps),
                SOLUTION_KEY => access.next_value::<NullableUnits>()?.map(ProblemField::Solution),
                _ => Some(ProblemField::Other {
                    value: access.next_value()?,
                    key,
                }),
            };
            fields.extend(field);
        }
        Ok(Problem::from_fields(fields))
    }
}

impl<'de> Deserialize<'de> for Problem {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_map(ProblemVisitor)
    }
}

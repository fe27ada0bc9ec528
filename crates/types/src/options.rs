use serde::{Deserialize, Deserializer, Serialize, de};
use serde_json::Value;

/// Presentation options for a render pass.
///
/// Every field is optional. Run-level options are merged *under* a task's own
/// values with [`RenderOptions::overlay`]: whatever the task sets wins, even an
/// explicit `false`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RenderOptions {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub school_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub teacher_name: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub student_id: Option<String>,
    #[serde(
        default,
        deserialize_with = "string_or_number",
        skip_serializing_if = "Option::is_none"
    )]
    pub student_name: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub with_answers: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub two_columns: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_title_page: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_student_id: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub display_student_name: Option<bool>,
}

/// Student ids often arrive as numbers; both forms are kept as text.
fn string_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    match Option::<Value>::deserialize(deserializer)? {
        None | Some(Value::Null) => Ok(None),
        Some(Value::String(s)) => Ok(Some(s)),
        Some(Value::Number(n)) => Ok(Some(n.to_string())),
        Some(other) => Err(de::Error::custom(format!(
            "expected a string or number, found {}",
            other
        ))),
    }
}

/// Treats an empty string like a missing one.
fn truthy(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|s| !s.is_empty())
}

impl RenderOptions {
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `self` with every field `top` sets replaced by `top`'s value.
    pub fn overlay(&self, top: &RenderOptions) -> RenderOptions {
        RenderOptions {
            name: top.name.clone().or_else(|| self.name.clone()),
            description: top.description.clone().or_else(|| self.description.clone()),
            school_name: top.school_name.clone().or_else(|| self.school_name.clone()),
            teacher_name: top.teacher_name.clone().or_else(|| self.teacher_name.clone()),
            student_id: top.student_id.clone().or_else(|| self.student_id.clone()),
            student_name: top.student_name.clone().or_else(|| self.student_name.clone()),
            with_answers: top.with_answers.or(self.with_answers),
            two_columns: top.two_columns.or(self.two_columns),
            display_title_page: top.display_title_page.or(self.display_title_page),
            display_student_id: top.display_student_id.or(self.display_student_id),
            display_student_name: top.display_student_name.or(self.display_student_name),
        }
    }

    pub fn with_answers(mut self, with_answers: bool) -> Self {
        self.with_answers = Some(with_answers);
        self
    }

    pub fn with_two_columns(mut self, two_columns: bool) -> Self {
        self.two_columns = Some(two_columns);
        self
    }

    pub fn with_title_page(mut self, display: bool) -> Self {
        self.display_title_page = Some(display);
        self
    }

    pub fn with_student_id(mut self, id: impl Into<String>, display: bool) -> Self {
        self.student_id = Some(id.into());
        self.display_student_id = Some(display);
        self
    }

    pub fn with_student_name(mut self, name: impl Into<String>, display: bool) -> Self {
        self.student_name = Some(name.into());
        self.display_student_name = Some(display);
        self
    }

    pub fn with_name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = Some(description.into());
        self
    }

    pub fn with_school_name(mut self, school: impl Into<String>) -> Self {
        self.school_name = Some(school.into());
        self
    }

    pub fn with_teacher_name(mut self, teacher: impl Into<String>) -> Self {
        self.teacher_name = Some(teacher.into());
        self
    }

    // Resolved accessors: missing flags are false, empty strings are absent.

    pub fn answers_shown(&self) -> bool {
        self.with_answers.unwrap_or(false)
    }

    pub fn two_column_layout(&self) -> bool {
        self.two_columns.unwrap_or(false)
    }

    pub fn title_page_shown(&self) -> bool {
        self.display_title_page.unwrap_or(false)
    }

    pub fn student_id_shown(&self) -> bool {
        self.display_student_id.unwrap_or(false)
    }

    pub fn student_name_shown(&self) -> bool {
        self.display_student_name.unwrap_or(false)
    }

    pub fn name_text(&self) -> Option<&str> {
        truthy(&self.name)
    }

    pub fn description_text(&self) -> Option<&str> {
        truthy(&self.description)
    }

    pub fn school_name_text(&self) -> Option<&str> {
        truthy(&self.school_name)
    }

    pub fn teacher_name_text(&self) -> Option<&str> {
        truthy(&self.teacher_name)
    }

    pub fn student_id_text(&self) -> Option<&str> {
        truthy(&self.student_id)
    }

    pub fn student_name_text(&self) -> Option<&str> {
        truthy(&self.student_name)
    }
}

//! Class tags attached to output nodes. The host's stylesheet keys off these.

pub const TASK: &str = "task";
pub const TITLE_PAGE: &str = "title-page";
pub const SCHOOL: &str = "school";
pub const TITLE: &str = "title";
pub const DESCRIPTION: &str = "description";
pub const TEACHER: &str = "teacher";
pub const STUDENT_INFO: &str = "student-info";
pub const STUDENT_ID: &str = "student-id";
pub const STUDENT_NAME: &str = "student-name";
pub const PROBLEM_SECTION: &str = "problem-section";
pub const TWO_COLUMNS: &str = "two-columns";
pub const PROBLEM: &str = "problem";
pub const STEPS: &str = "steps";
pub const ANSWER: &str = "answer";
pub const PROBLEM_PLACEHOLDER: &str = "problem-placeholder";
pub const GRAPH: &str = "graph";
pub const OPTIONS: &str = "options";
pub const OPTION: &str = "option";
pub const HIGHLIGHT: &str = "highlight";

/// No class tags, for untagged nodes built with the tagged constructors.
pub const NONE: [&str; 0] = [];

use folio_idf::{DocNode, classes};
use folio_types::RenderOptions;

/// Builds the cover block of a task from its merged settings.
///
/// Fields appear in a fixed order (school, title, description, teacher,
/// student info) and only when present and non-empty. The student-info block
/// exists whenever a student id or name is set, even if neither line is
/// displayed.
pub fn render_title_page(settings: &RenderOptions) -> DocNode {
    let mut page = DocNode::block([classes::TITLE_PAGE], Vec::new());

    if let Some(school) = settings.school_name_text() {
        page.push(DocNode::paragraph([classes::SCHOOL], school));
    }

    if let Some(name) = settings.name_text() {
        page.push(DocNode::heading([classes::TITLE], 1, name));
    }

    if let Some(description) = settings.description_text() {
        page.push(DocNode::paragraph([classes::DESCRIPTION], description));
    }

    if let Some(teacher) = settings.teacher_name_text() {
        page.push(DocNode::paragraph([classes::TEACHER], teacher));
    }

    let student_id = settings.student_id_text();
    let student_name = settings.student_name_text();
    if student_id.is_some() || student_name.is_some() {
        let mut info = DocNode::block([classes::STUDENT_INFO], Vec::new());

        if let Some(id) = student_id
            && settings.student_id_shown()
        {
            info.push(DocNode::paragraph([classes::STUDENT_ID], format!("SID: {}", id)));
        }

        if let Some(name) = student_name
            && settings.student_name_shown()
        {
            info.push(DocNode::paragraph([classes::STUDENT_NAME], name));
        }

        page.push(info);
    }

    page
}

mod common;

use common::fixtures::*;
use common::{TestResult, render, session};
use folio::idf::classes;
use folio::{
    ContentUnit, DocNode, RenderError, RenderOptions, RenderSurface, Task, VecTaskSource,
};
use serde_json::json;
use std::time::Duration;
use tokio::time::Instant;

fn problem_headers(task: &DocNode) -> Vec<String> {
    task.find_all_by_class(classes::PROBLEM)
        .iter()
        .filter_map(|p| p.children()[0].text_content().map(str::to_string))
        .collect()
}

#[tokio::test(start_paused = true)]
async fn test_one_section_per_task_in_order() -> TestResult {
    let mut tasks = vec![
        Task::new(vec![text_problem("first", "1")]),
        Task::new(vec![text_problem("second", "2"), text_problem("third", "3")]),
    ];
    let pass = render(&mut tasks, &RenderOptions::new()).await?;

    assert_eq!(pass.nodes.len(), 2);
    assert!(pass.nodes.iter().all(|n| n.has_class(classes::TASK)));
    assert_eq!(problem_headers(pass.task(0)), ["Problem 1"]);
    assert_eq!(problem_headers(pass.task(1)), ["Problem 1", "Problem 2"]);
    assert_eq!(pass.report.tasks, 2);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_hidden_answers_get_stand_ins() -> TestResult {
    let mut tasks = vec![quiz()];
    let pass = render(&mut tasks, &RenderOptions::new()).await?;

    assert_eq!(pass.count(classes::STEPS), 0);
    assert_eq!(pass.count(classes::ANSWER), 0);
    // Text solution of problem 1; the options solution of problem 3 gets none.
    assert_eq!(pass.count(classes::PROBLEM_PLACEHOLDER), 1);
    // Body graph of problem 2, its blank grid, and the graph option of problem 3.
    assert_eq!(pass.graphs().len(), 3);
    assert_eq!(pass.report.complexity, 3);
    assert_eq!(pass.dispatched, 3);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_shown_answers_render_steps_and_solutions() -> TestResult {
    let mut tasks = vec![quiz()];
    let pass = render(&mut tasks, &RenderOptions::new().with_answers(true)).await?;

    assert_eq!(pass.count(classes::PROBLEM_PLACEHOLDER), 0);
    assert_eq!(pass.count(classes::STEPS), 1);
    assert_eq!(pass.count(classes::ANSWER), 3);
    assert_eq!(pass.count(classes::HIGHLIGHT), 3);
    assert_eq!(pass.report.complexity, pass.graphs().len());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_problem_keys_keep_their_order() -> TestResult {
    let json = json!([{
        "problems": [{
            "solution": [{ "type": "text", "value": "42" }],
            "hint": [{ "type": "text", "value": "Think." }],
            "problem": [{ "type": "text", "value": "What is six times seven?" }]
        }]
    }]);
    let mut source = VecTaskSource::from_json_str(&json.to_string())?;

    let mut session = session();
    session.render_from(&mut source, &RenderOptions::new())?.await;

    let problem = session.surface().nodes()[0]
        .find_first_by_class(classes::PROBLEM)
        .ok_or("no problem block")?;
    let children = problem.children();
    assert_eq!(children.len(), 4);
    assert_eq!(children[0].kind(), "heading");
    // Hidden solution and unrecognized key: empty, untagged containers.
    assert!(children[1].children().is_empty() && children[1].classes().is_empty());
    assert!(children[2].children().is_empty() && children[2].classes().is_empty());
    // The body container carries the question and the stand-in.
    assert_eq!(children[3].children().len(), 2);
    assert!(children[3].children()[1].has_class(classes::PROBLEM_PLACEHOLDER));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_title_page_and_student_info() -> TestResult {
    let mut tasks = vec![quiz()];
    let options = RenderOptions::new()
        .with_title_page(true)
        .with_student_id("12345", true)
        .with_student_name("Ada", false);
    let pass = render(&mut tasks, &options).await?;

    let title_page = pass
        .task(0)
        .find_first_by_class(classes::TITLE_PAGE)
        .ok_or("no title page")?;
    let kinds: Vec<_> = title_page.children().iter().map(|c| c.kind()).collect();
    assert_eq!(kinds, ["paragraph", "heading", "paragraph", "paragraph", "block"]);

    let title = title_page.find_first_by_class(classes::TITLE).ok_or("no title")?;
    assert_eq!(title.text_content(), Some("Quadratics Quiz"));

    let info = title_page
        .find_first_by_class(classes::STUDENT_INFO)
        .ok_or("no student info")?;
    assert_eq!(info.children().len(), 1);
    assert_eq!(info.children()[0].text_content(), Some("SID: 12345"));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_task_settings_override_run_options() -> TestResult {
    let mut tasks = vec![
        Task::new(vec![text_problem("a", "1")]),
        Task::new(vec![text_problem("b", "2")])
            .with_options(RenderOptions::new().with_answers(false).with_two_columns(false)),
    ];
    let run = RenderOptions::new().with_answers(true).with_two_columns(true);
    let pass = render(&mut tasks, &run).await?;

    assert_eq!(pass.task(0).count_by_class(classes::ANSWER), 1);
    assert_eq!(pass.task(0).count_by_class(classes::TWO_COLUMNS), 1);
    assert_eq!(pass.task(1).count_by_class(classes::ANSWER), 0);
    assert_eq!(pass.task(1).count_by_class(classes::TWO_COLUMNS), 0);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_graphs_switch_to_print_mode_in_place() -> TestResult {
    let mut tasks = vec![quiz()];
    render(&mut tasks, &RenderOptions::new()).await?;

    let problems = &tasks[0].problems;
    match &problems[1].body().ok_or("no body")?[1] {
        ContentUnit::Graph(config) => assert!(config.print_mode),
        other => panic!("expected a graph, got {}", other.kind()),
    }
    match &problems[2].body().ok_or("no body")?[1] {
        ContentUnit::Options(units) => match &units[1] {
            ContentUnit::Graph(config) => assert!(config.print_mode),
            other => panic!("expected a graph option, got {}", other.kind()),
        },
        other => panic!("expected options, got {}", other.kind()),
    }
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_completion_waits_per_graph() -> TestResult {
    let mut session = session();
    let mut tasks = vec![quiz()];
    let start = Instant::now();

    let mut completion = session.render(&mut tasks, &RenderOptions::new())?;
    assert_eq!(completion.report().delay, Duration::from_millis(150));

    let early = tokio::time::timeout(Duration::from_millis(149), &mut completion).await;
    assert!(early.is_err());

    let report = completion.await;
    assert!(start.elapsed() >= Duration::from_millis(150));
    assert_eq!(report.complexity, 3);
    assert!(!session.surface().is_visible());
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_no_graphs_completes_immediately() -> TestResult {
    let mut tasks = vec![Task::new(vec![text_problem("q", "a")])];
    let start = Instant::now();
    let pass = render(&mut tasks, &RenderOptions::new()).await?;

    assert_eq!(pass.report.delay, Duration::ZERO);
    assert_eq!(start.elapsed(), Duration::ZERO);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_unknown_units_are_skipped() -> TestResult {
    let json = json!([{
        "problems": [{
            "problem": [
                { "type": "video", "value": "clip.mp4" },
                { "type": "text", "value": "Describe the clip." }
            ],
            "solution": [{ "type": "video", "value": "answer.mp4" }]
        }]
    }]);
    let mut source = VecTaskSource::from_json_str(&json.to_string())?;

    let mut session = session();
    let report = session.render_from(&mut source, &RenderOptions::new())?.await;

    assert_eq!(report.complexity, 0);
    let task = &session.surface().nodes()[0];
    assert_eq!(task.count_by_class(classes::PROBLEM_PLACEHOLDER), 1);
    let body = &task.find_first_by_class(classes::PROBLEM).ok_or("no problem")?.children()[1];
    assert_eq!(body.children()[0].text_content(), Some("Describe the clip."));
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_missing_body_fails_the_pass() -> TestResult {
    let json = json!([{
        "problems": [
            { "problem": [{ "type": "text", "value": "fine" }] },
            { "steps": [{ "type": "text", "value": "orphaned" }] }
        ]
    }]);
    let mut source = VecTaskSource::from_json_str(&json.to_string())?;

    let mut session = session();
    let result = session.render_from(&mut source, &RenderOptions::new());

    match result {
        Err(RenderError::MissingProblemBody { index }) => assert_eq!(index, 1),
        Err(other) => panic!("unexpected error: {}", other),
        Ok(_) => panic!("expected the pass to fail"),
    }
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_task_document_defaults_apply() -> TestResult {
    let mut source = VecTaskSource::from_json_str(&quiz_document().to_string())?;

    let mut session = session();
    let report = session.render_from(&mut source, &RenderOptions::new())?.await;

    assert_eq!(report.complexity, 3);
    let task = &session.surface().nodes()[0];
    assert_eq!(task.count_by_class(classes::TITLE_PAGE), 1);
    assert_eq!(problem_headers(task).len(), 3);
    Ok(())
}

#[tokio::test(start_paused = true)]
async fn test_html_output() -> TestResult {
    let mut tasks = vec![quiz()];
    let pass = render(&mut tasks, &RenderOptions::new().with_title_page(true)).await?;
    let html = pass.html();

    assert!(html.starts_with("<section class=\"task\">"));
    assert!(html.contains("<h1 class=\"title\">Quadratics Quiz</h1>"));
    assert!(html.contains("<h2>Problem 3</h2>"));
    assert!(html.contains("class=\"graph\" data-graph=\""));
    assert!(html.contains("What is 2 + 2?"));
    Ok(())
}

fn worked_graph_task() -> Task {
    Task::new(vec![
        folio::Problem::new([ContentUnit::text("Graph the inequality y > x.")])
            .with_steps([ContentUnit::graph(folio::GraphConfig::default())])
            .with_solution([ContentUnit::options([
                ContentUnit::text("shade above"),
                ContentUnit::graph(folio::GraphConfig::default()),
            ])]),
    ])
}

fn step_graph_flag(task: &Task) -> Option<bool> {
    match task.problems[0].steps()?.first()? {
        ContentUnit::Graph(config) => Some(config.print_mode),
        _ => None,
    }
}

#[tokio::test(start_paused = true)]
async fn test_step_graphs_follow_answer_visibility() -> TestResult {
    let mut shown = vec![worked_graph_task()];
    let pass = render(&mut shown, &RenderOptions::new().with_answers(true)).await?;
    assert_eq!(pass.report.complexity, 2);
    assert_eq!(pass.dispatched, 2);
    assert_eq!(pass.report.delay, Duration::from_millis(100));
    assert_eq!(step_graph_flag(&shown[0]), Some(true));

    let mut hidden = vec![worked_graph_task()];
    let pass = render(&mut hidden, &RenderOptions::new()).await?;
    assert_eq!(pass.report.complexity, 0);
    assert_eq!(pass.dispatched, 0);
    assert_eq!(step_graph_flag(&hidden[0]), Some(false));
    Ok(())
}

use folio::{ContentUnit, GraphConfig, Problem, RenderOptions, Task};
use serde_json::{Value, json};

/// A problem with a text body and a text solution.
pub fn text_problem(question: &str, answer: &str) -> Problem {
    Problem::new([ContentUnit::text(question)]).with_solution([ContentUnit::text(answer)])
}

/// A problem asking for a sketch: graph body, worked steps, graph solution.
pub fn graph_problem() -> Problem {
    Problem::new([
        ContentUnit::text("Sketch y = x^2."),
        ContentUnit::graph(GraphConfig::default()),
    ])
    .with_steps([ContentUnit::text("The vertex is at the origin.")])
    .with_solution([ContentUnit::graph(GraphConfig::default())])
}

/// A multiple-choice problem whose second option is a graph.
pub fn choice_problem() -> Problem {
    Problem::new([
        ContentUnit::text("Which curve is increasing?"),
        ContentUnit::options([
            ContentUnit::text("y = -x"),
            ContentUnit::graph(GraphConfig::default()),
        ]),
    ])
    .with_solution([ContentUnit::options([ContentUnit::text("b")])])
}

pub fn quiz_options() -> RenderOptions {
    RenderOptions::new()
        .with_name("Quadratics Quiz")
        .with_description("Answer every question.")
        .with_school_name("Northside High")
        .with_teacher_name("R. Ortega")
}

pub fn quiz() -> Task {
    Task::new(vec![
        text_problem("What is 2 + 2?", "4"),
        graph_problem(),
        choice_problem(),
    ])
    .with_options(quiz_options())
}

/// The same quiz as [`quiz`], as a task file with run defaults.
pub fn quiz_document() -> Value {
    json!({
        "options": { "displayTitlePage": true },
        "tasks": [{
            "name": "Quadratics Quiz",
            "description": "Answer every question.",
            "schoolName": "Northside High",
            "teacherName": "R. Ortega",
            "problems": [
                {
                    "problem": [{ "type": "text", "value": "What is 2 + 2?" }],
                    "solution": [{ "type": "text", "value": "4" }]
                },
                {
                    "problem": [
                        { "type": "text", "value": "Sketch y = x^2." },
                        { "type": "graph", "value": { "renderEngine": "desmos" } }
                    ],
                    "steps": [{ "type": "text", "value": "The vertex is at the origin." }],
                    "solution": [{ "type": "graph", "value": {} }]
                },
                {
                    "problem": [
                        { "type": "text", "value": "Which curve is increasing?" },
                        { "type": "options", "value": [
                            { "type": "text", "value": "y = -x" },
                            { "type": "graph", "value": {} }
                        ]}
                    ],
                    "solution": [{ "type": "options", "value": [{ "type": "text", "value": "b" }] }]
                }
            ]
        }]
    })
}

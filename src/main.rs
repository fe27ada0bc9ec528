use clap::Parser;
use folio::idf::html::to_html;
use folio::{
    NoopPrintTrigger, RenderError, RenderOptions, RenderSurface, SessionBuilder, VecTaskSource,
};
use std::fs::{self, File};
use std::io::{self, BufReader, Write};
use std::path::PathBuf;
use std::time::Duration;

/// Renders a JSON task file into printable HTML.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Path to the task file: a task array or `{ "options": ..., "tasks": [...] }`
    input: PathBuf,

    /// Write the HTML here instead of stdout
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Render steps and solutions instead of placeholders
    #[arg(long, default_value_t = false)]
    with_answers: bool,

    /// Lay problems out in two columns
    #[arg(long, default_value_t = false)]
    two_columns: bool,

    /// Prepend a title page to each task
    #[arg(long, default_value_t = false)]
    title_page: bool,

    #[arg(long)]
    student_id: Option<String>,

    #[arg(long)]
    student_name: Option<String>,

    #[arg(long)]
    school: Option<String>,

    #[arg(long)]
    teacher: Option<String>,

    /// Settle time per graph, in milliseconds
    #[arg(long)]
    delay_ms: Option<u64>,
}

impl Args {
    /// Only flags that were given end up set, so file defaults still apply.
    fn render_options(&self) -> RenderOptions {
        let mut options = RenderOptions::new();
        if self.with_answers {
            options = options.with_answers(true);
        }
        if self.two_columns {
            options = options.with_two_columns(true);
        }
        if self.title_page {
            options = options.with_title_page(true);
        }
        if let Some(id) = &self.student_id {
            options = options.with_student_id(id.clone(), true);
        }
        if let Some(name) = &self.student_name {
            options = options.with_student_name(name.clone(), true);
        }
        if let Some(school) = &self.school {
            options = options.with_school_name(school.clone());
        }
        if let Some(teacher) = &self.teacher {
            options = options.with_teacher_name(teacher.clone());
        }
        options
    }
}

#[tokio::main]
async fn main() -> Result<(), RenderError> {
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("folio=info"))
        .init();

    let args = Args::parse();

    log::info!("Loading tasks from {}", args.input.display());
    let file = File::open(&args.input)?;
    let mut source = VecTaskSource::from_reader(BufReader::new(file))?;

    let mut builder = SessionBuilder::new();
    if let Some(ms) = args.delay_ms {
        builder = builder.with_delay_per_graph(Duration::from_millis(ms));
    }
    let mut printer = builder.build_printer(NoopPrintTrigger);

    let report = printer
        .print_from(&mut source, &args.render_options())
        .await?;
    log::info!(
        "Rendered {} task(s) with {} graph(s), settled after {:?}.",
        report.tasks,
        report.complexity,
        report.delay
    );

    let html = to_html(printer.session().surface().nodes());
    match &args.output {
        Some(path) => {
            fs::write(path, html)?;
            log::info!("Wrote {}", path.display());
        }
        None => {
            let mut stdout = io::stdout().lock();
            stdout.write_all(html.as_bytes())?;
            stdout.write_all(b"\n")?;
        }
    }

    Ok(())
}

mod script;

use std::cell::RefCell;
use std::fs::{self, File};
use std::io::{self, BufRead, BufReader};
use std::rc::Rc;

use carousel3d::drag::DragOutcome;
use carousel3d::geometry::Transform;
use carousel3d::policy::NavigationPolicy;
use carousel3d::{
    Carousel, CarouselKind, Child, CircularCarousel, ContextError, GestureOptions, GestureUpdate, LinearCarousel,
    OptionsError, RingOptions, StripOptions, Trigger, TriggerRole,
};
use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

use crate::script::{Event, parse_event_line};

#[derive(Debug, thiserror::Error)]
enum CliError {
    #[error("failed to read {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },
    #[error(transparent)]
    Options(#[from] OptionsError),
    #[error("line {line}: invalid event: {source}")]
    Event {
        line: usize,
        #[source]
        source: serde_json::Error,
    },
    #[error("line {line}: {source}")]
    Navigation {
        line: usize,
        #[source]
        source: ContextError,
    },
    #[error("--fps must be a positive number, got {0}")]
    InvalidFps(f64),
    #[error("invalid JSON output: {0}")]
    Output(#[from] serde_json::Error),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
enum Kind {
    Ring,
    Strip,
}

#[derive(Parser, Debug)]
#[command(name = "carousel-sim", about = "Drive a headless ring or strip carousel from a JSONL event script")]
struct Cli {
    #[arg(long, value_enum, env = "CAROUSEL_KIND", default_value = "ring")]
    kind: Kind,

    #[arg(long, env = "CAROUSEL_OPTIONS", help = "JSON options file for the chosen kind")]
    options: Option<String>,

    #[arg(long, default_value_t = 5, help = "Number of items to lay out")]
    items: usize,

    #[arg(long, default_value = "-", help = "Event script path, or - for stdin")]
    input: String,

    #[arg(long, env = "CAROUSEL_SIM_FPS", default_value_t = 60.0)]
    fps: f64,

    #[arg(long, default_value_t = false, help = "Print only the final snapshot")]
    quiet: bool,
}

/// State after one script event, printed as a single JSON line.
#[derive(Debug, Serialize)]
struct StepReport {
    line: usize,
    event: &'static str,
    active_index: Option<usize>,
    offset: f64,
    notified: Vec<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    drag: Option<&'static str>,
}

#[derive(Debug, Serialize)]
struct ItemReport {
    index: usize,
    transform: Transform,
}

/// Final layout, printed once at the end of the script.
#[derive(Debug, Serialize)]
struct Snapshot {
    kind: CarouselKind,
    count: usize,
    active_index: Option<usize>,
    offset: f64,
    root: Transform,
    items: Vec<ItemReport>,
    gesture: GestureOptions,
}

fn main() -> Result<(), CliError> {
    tracing_subscriber::fmt().with_env_filter(EnvFilter::from_default_env()).with_writer(io::stderr).init();

    let cli = Cli::parse();
    if !cli.fps.is_finite() || cli.fps <= 0.0 {
        return Err(CliError::InvalidFps(cli.fps));
    }

    let options = cli.options.as_deref().map(read_file).transpose()?;
    match cli.kind {
        Kind::Ring => {
            let options = options.as_deref().map_or_else(|| Ok(RingOptions::default()), RingOptions::from_json)?;
            simulate(CircularCarousel::new(&options), &cli)
        }
        Kind::Strip => {
            let options = options.as_deref().map_or_else(|| Ok(StripOptions::default()), StripOptions::from_json)?;
            simulate(LinearCarousel::new(&options), &cli)
        }
    }
}

fn simulate<P: NavigationPolicy>(mut carousel: Carousel<P>, cli: &Cli) -> Result<(), CliError> {
    let notified = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&notified);
    carousel.on_index_change(move |index| sink.borrow_mut().push(index));

    let dt = 1.0 / cli.fps;
    let mut items = cli.items;
    carousel.render(placeholders(items));
    tracing::info!(kind = %carousel.kind(), items, fps = cli.fps, "sim: started");

    let reader = open_input(&cli.input)?;
    for (n, line) in reader.lines().enumerate() {
        let line_no = n + 1;
        let line = line.map_err(|source| CliError::Io { path: cli.input.clone(), source })?;
        let Some(event) = parse_event_line(&line).map_err(|source| CliError::Event { line: line_no, source })? else {
            continue;
        };

        let drag = apply(&mut carousel, event, &mut items, dt)
            .map_err(|source| CliError::Navigation { line: line_no, source })?;
        tracing::debug!(line = line_no, event = event.name(), active_index = ?carousel.active_index(), "sim: applied");

        let changes: Vec<usize> = notified.borrow_mut().drain(..).collect();
        if !cli.quiet {
            let report = StepReport {
                line: line_no,
                event: event.name(),
                active_index: carousel.active_index(),
                offset: carousel.offset(),
                notified: changes,
                drag,
            };
            print_line(&report)?;
        }
    }

    print_json(&snapshot(&mut carousel, items))
}

/// Apply one event. Returns the drag outcome for `drag` events.
fn apply<P: NavigationPolicy>(
    carousel: &mut Carousel<P>,
    event: Event,
    items: &mut usize,
    dt: f64,
) -> Result<Option<&'static str>, ContextError> {
    match event {
        Event::Next => {
            carousel.next();
        }
        Event::Prev => {
            carousel.prev();
        }
        Event::Goto { index } => {
            carousel.go_to(index);
        }
        Event::Drag { dx, dy, pointer, steps } => {
            return Ok(Some(drag(carousel, [dx, dy], pointer, steps, dt)));
        }
        Event::Frames { count } => {
            for _ in 0..count {
                carousel.frame(dt);
            }
        }
        Event::Trigger { role } => {
            let kind = carousel.kind();
            let trigger = match role {
                TriggerRole::Next => Trigger::next(kind),
                TriggerRole::Prev => Trigger::prev(kind),
            };
            carousel.activate(trigger)?;
        }
        Event::Items { count } => {
            *items = count;
            carousel.render(placeholders(count));
        }
        Event::Controlled { index } => carousel.set_controlled_index(index),
        Event::DragEnabled { enabled } => carousel.set_drag_enabled(enabled),
    }
    Ok(None)
}

/// Run a whole gesture, one frame per intermediate move.
#[allow(clippy::cast_precision_loss)]
fn drag<P: NavigationPolicy>(
    carousel: &mut Carousel<P>,
    movement: [f64; 2],
    pointer: Option<i32>,
    steps: usize,
    dt: f64,
) -> &'static str {
    carousel.on_gesture(&GestureUpdate::start(pointer));
    let steps = steps.max(1);
    for step in 1..=steps {
        let t = step as f64 / steps as f64;
        carousel.on_gesture(&GestureUpdate::moved([movement[0] * t, movement[1] * t], pointer));
        carousel.frame(dt);
    }
    match carousel.on_gesture(&GestureUpdate::end(movement, pointer)) {
        DragOutcome::Ignored => "ignored",
        DragOutcome::Dragging { .. } => "dragging",
        DragOutcome::Commit { .. } => "commit",
        DragOutcome::Revert { .. } => "revert",
    }
}

fn snapshot<P: NavigationPolicy>(carousel: &mut Carousel<P>, count: usize) -> Snapshot {
    let scene = carousel.render(placeholders(count));
    let items = scene
        .root
        .children
        .iter()
        .filter_map(|node| node.content.map(|index| ItemReport { index, transform: node.transform }))
        .collect();
    Snapshot {
        kind: carousel.kind(),
        count: carousel.count(),
        active_index: carousel.active_index(),
        offset: carousel.offset(),
        root: scene.root.transform,
        items,
        gesture: carousel.gesture_options(),
    }
}

fn placeholders(count: usize) -> Vec<Child<usize>> {
    (0..count).map(Child::Item).collect()
}

fn read_file(path: &str) -> Result<String, CliError> {
    fs::read_to_string(path).map_err(|source| CliError::Io { path: path.to_owned(), source })
}

fn open_input(path: &str) -> Result<Box<dyn BufRead>, CliError> {
    if path == "-" {
        return Ok(Box::new(BufReader::new(io::stdin())));
    }
    let file = File::open(path).map_err(|source| CliError::Io { path: path.to_owned(), source })?;
    Ok(Box::new(BufReader::new(file)))
}

fn print_line<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string(value)?;
    println!("{rendered}");
    Ok(())
}

fn print_json<T: Serialize>(value: &T) -> Result<(), CliError> {
    let rendered = serde_json::to_string_pretty(value)?;
    println!("{rendered}");
    Ok(())
}

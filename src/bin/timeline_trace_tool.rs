use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;
use timeline_zoom::api::{
    EngineSnapshot, TickLabelConfig, TimelineEngine, TimelineEngineConfig, ZoomBehavior,
    ZoomDirection,
};
use timeline_zoom::core::{EventInterval, Viewport};
use timeline_zoom::render::NullRenderer;

const USAGE: &str =
    "usage: timeline_trace_tool <replay|verify> --input <path> [--output <path>]";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CommandKind {
    Replay,
    Verify,
}

#[derive(Debug)]
struct CliArgs {
    command: CommandKind,
    input: PathBuf,
    output: Option<PathBuf>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TraceFile {
    trace_name: String,
    viewport: TraceViewport,
    #[serde(default)]
    zoom_behavior: ZoomBehavior,
    #[serde(default)]
    label_config: TickLabelConfig,
    range: TraceRange,
    #[serde(default)]
    events: Vec<EventInterval>,
    steps: Vec<TraceStep>,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
struct TraceViewport {
    width: u32,
    height: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
struct TraceRange {
    start: i64,
    end: i64,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct TraceStep {
    action: TraceAction,
    /// Expected visible window after the action, checked by `verify`.
    #[serde(default)]
    expect_window: Option<TraceRange>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
enum TraceAction {
    SetRange {
        start: i64,
        end: i64,
    },
    SetEvents {
        events: Vec<EventInterval>,
    },
    Zoom {
        pointer_x: f64,
        container_width: f64,
        direction: ZoomDirection,
    },
    Wheel {
        delta_y: f64,
        pointer_x: f64,
        container_width: f64,
    },
    PanStart {
        pointer_x: f64,
    },
    PanMove {
        pointer_x: f64,
        container_width: f64,
    },
    PanEnd,
    PointerLeave,
    ResetWindow,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CaptureFile {
    trace_name: String,
    steps: Vec<CapturedStep>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
struct CapturedStep {
    action: TraceAction,
    changed: bool,
    error: Option<String>,
    snapshot: EngineSnapshot,
}

fn main() {
    // No-op unless built with the `telemetry` feature.
    let _ = timeline_zoom::telemetry::init_default_tracing();
    if let Err(err) = run() {
        eprintln!("error: {err}");
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let args = parse_args()?;
    let raw = fs::read_to_string(&args.input)
        .map_err(|err| format!("failed to read `{}`: {err}", args.input.display()))?;
    let trace: TraceFile =
        serde_json::from_str(&raw).map_err(|err| format!("invalid json: {err}"))?;
    let capture = replay_trace(&trace)?;

    match args.command {
        CommandKind::Replay => {
            let output = args
                .output
                .ok_or_else(|| "replay requires --output".to_owned())?;
            write_json(&output, &capture)
        }
        CommandKind::Verify => {
            verify_capture(&trace, &capture)?;
            println!(
                "{}: {} steps match",
                trace.trace_name,
                trace.steps.len()
            );
            Ok(())
        }
    }
}

fn replay_trace(trace: &TraceFile) -> Result<CaptureFile, String> {
    let mut config =
        TimelineEngineConfig::new(Viewport::new(trace.viewport.width, trace.viewport.height))
            .with_zoom_behavior(trace.zoom_behavior);
    config.label_config = trace.label_config;
    let mut engine = TimelineEngine::new(NullRenderer::default(), config)
        .map_err(|err| format!("engine init failed: {err}"))?;

    engine
        .set_range(trace.range.start, trace.range.end)
        .map_err(|err| format!("initial range rejected: {err}"))?;
    engine
        .set_events(trace.events.clone())
        .map_err(|err| format!("initial events rejected: {err}"))?;

    let steps = trace
        .steps
        .iter()
        .map(|step| {
            let (changed, error) = match apply_action(&mut engine, &step.action) {
                Ok(changed) => (changed, None),
                Err(err) => (false, Some(err)),
            };
            CapturedStep {
                action: step.action.clone(),
                changed,
                error,
                snapshot: engine.snapshot(),
            }
        })
        .collect();

    Ok(CaptureFile {
        trace_name: trace.trace_name.clone(),
        steps,
    })
}

fn apply_action(
    engine: &mut TimelineEngine<NullRenderer>,
    action: &TraceAction,
) -> Result<bool, String> {
    let result = match action {
        TraceAction::SetRange { start, end } => engine.set_range(*start, *end).map(|()| true),
        TraceAction::SetEvents { events } => engine.set_events(events.clone()).map(|()| true),
        TraceAction::Zoom {
            pointer_x,
            container_width,
            direction,
        } => engine.zoom(*pointer_x, *container_width, *direction),
        TraceAction::Wheel {
            delta_y,
            pointer_x,
            container_width,
        } => engine.wheel_zoom(*delta_y, *pointer_x, *container_width),
        TraceAction::PanStart { pointer_x } => engine.pan_start(*pointer_x).map(|event| event.is_some()),
        TraceAction::PanMove {
            pointer_x,
            container_width,
        } => engine.pan_move(*pointer_x, *container_width),
        TraceAction::PanEnd => Ok(engine.pan_end().is_some()),
        TraceAction::PointerLeave => Ok(engine.pointer_leave().is_some()),
        TraceAction::ResetWindow => Ok(engine.reset_window()),
    };
    result.map_err(|err| err.to_string())
}

fn verify_capture(trace: &TraceFile, capture: &CaptureFile) -> Result<(), String> {
    let mut mismatches = Vec::new();
    for (index, (step, captured)) in trace.steps.iter().zip(&capture.steps).enumerate() {
        let Some(expected) = step.expect_window else {
            continue;
        };
        let observed = captured.snapshot.window.map(|window| TraceRange {
            start: window.start(),
            end: window.end(),
        });
        if observed != Some(expected) {
            mismatches.push(format!(
                "step {index}: expected window {expected:?}, observed {observed:?}"
            ));
        }
    }
    if mismatches.is_empty() {
        Ok(())
    } else {
        Err(format!(
            "{} mismatches in `{}`:\n{}",
            mismatches.len(),
            trace.trace_name,
            mismatches.join("\n")
        ))
    }
}

fn write_json<T: Serialize>(path: &PathBuf, value: &T) -> Result<(), String> {
    let payload = serde_json::to_string_pretty(value)
        .map_err(|err| format!("failed to serialize json: {err}"))?;
    fs::write(path, payload).map_err(|err| format!("failed to write `{}`: {err}", path.display()))
}

fn parse_args() -> Result<CliArgs, String> {
    let mut args = std::env::args().skip(1);
    let command = match args.next().as_deref() {
        Some("replay") => CommandKind::Replay,
        Some("verify") => CommandKind::Verify,
        _ => return Err(USAGE.to_owned()),
    };

    let mut input = None::<PathBuf>;
    let mut output = None::<PathBuf>;

    while let Some(flag) = args.next() {
        match flag.as_str() {
            "--input" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --input".to_owned())?;
                input = Some(PathBuf::from(value));
            }
            "--output" => {
                let value = args
                    .next()
                    .ok_or_else(|| "missing value for --output".to_owned())?;
                output = Some(PathBuf::from(value));
            }
            "--help" | "-h" => return Err(USAGE.to_owned()),
            _ => return Err(format!("unknown argument `{flag}`")),
        }
    }

    let input = input.ok_or_else(|| "missing --input".to_owned())?;
    Ok(CliArgs {
        command,
        input,
        output,
    })
}

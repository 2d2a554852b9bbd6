use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use planar::{CastCfg, Point, Segment};
use std::path::Path;
use tracing_subscriber::fmt::SubscriberBuilder;

mod eval;
mod input;
mod provenance;

use eval::Evaluator;
use input::{QueryDoc, ShapeReport};

#[derive(Parser)]
#[command(name = "planar-cli")]
#[command(about = "Evaluate containment and crossing queries on integer 2D shapes")]
struct Cmd {
    /// Fixed seed for polygon ray casting; by default each query point derives its own
    #[arg(long, global = true)]
    seed: Option<u64>,

    /// Random ray directions tried before the deterministic fallback scan
    #[arg(long, global = true, default_value_t = CastCfg::default().max_random_attempts)]
    max_attempts: usize,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Does the shape contain the point? Prints true/false
    Contains {
        /// Shape JSON, or @path to a JSON file
        #[arg(long)]
        shape: String,
        /// Point as x,y
        #[arg(long, allow_hyphen_values = true)]
        point: String,
    },
    /// Does the shape share a point with the segment? Prints true/false
    Crosses {
        #[arg(long)]
        shape: String,
        /// Segment as x1,y1,x2,y2
        #[arg(long, allow_hyphen_values = true)]
        segment: String,
    },
    /// Print the shape's textual rendering
    Render {
        #[arg(long)]
        shape: String,
    },
    /// Evaluate a batch query file and write results plus a provenance sidecar
    Run {
        #[arg(long)]
        input: String,
        #[arg(long)]
        out: String,
    },
    /// Print a small provenance JSON block
    Report,
}

fn main() -> Result<()> {
    SubscriberBuilder::default()
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
    let cmd = Cmd::parse();
    let ev = Evaluator {
        cfg: CastCfg {
            max_random_attempts: cmd.max_attempts,
            ..CastCfg::default()
        },
        seed: cmd.seed,
    };
    match cmd.action {
        Action::Contains { shape, point } => contains(&ev, &shape, &point),
        Action::Crosses { shape, segment } => crosses(&ev, &shape, &segment),
        Action::Render { shape } => render(&shape),
        Action::Run { input, out } => run(&ev, input, out),
        Action::Report => report(&ev),
    }
}

fn contains(ev: &Evaluator, shape: &str, point: &str) -> Result<()> {
    let s = input::read_shape(shape)?;
    let p = input::point(input::parse_xy(point)?)?;
    let hit = ev.contains(&s, &p);
    tracing::info!(shape = %s, point = %p, hit, "contains");
    println!("{hit}");
    Ok(())
}

fn crosses(ev: &Evaluator, shape: &str, segment: &str) -> Result<()> {
    let s = input::read_shape(shape)?;
    let seg = input::segment(input::parse_segment(segment)?)?;
    let hit = ev.crosses(&s, &seg);
    tracing::info!(shape = %s, segment = %seg, hit, "crosses");
    println!("{hit}");
    Ok(())
}

fn render(shape: &str) -> Result<()> {
    let s = input::read_shape(shape)?;
    println!("{s}");
    Ok(())
}

/// Evaluate every shape of a query document against all its points and segments.
fn evaluate(ev: &Evaluator, doc: &QueryDoc) -> Result<Vec<ShapeReport>> {
    let points = doc
        .points
        .iter()
        .map(|xy| input::point(*xy))
        .collect::<Result<Vec<Point>>>()?;
    let segments = doc
        .segments
        .iter()
        .map(|pair| input::segment(*pair))
        .collect::<Result<Vec<Segment>>>()?;
    doc.shapes
        .iter()
        .enumerate()
        .map(|(i, sd)| {
            let shape = sd.build().with_context(|| format!("shape #{i}"))?;
            Ok(ev.report(&shape, &points, &segments))
        })
        .collect()
}

fn run(ev: &Evaluator, input: String, out: String) -> Result<()> {
    tracing::info!(input, out, seed = ?ev.seed, "run");
    let text = std::fs::read_to_string(&input).with_context(|| format!("reading {input}"))?;
    let doc: QueryDoc =
        serde_json::from_str(&text).with_context(|| format!("parsing query file {input}"))?;
    let reports = evaluate(ev, &doc)?;
    tracing::info!(
        shapes = doc.shapes.len(),
        points = doc.points.len(),
        segments = doc.segments.len(),
        "evaluated"
    );

    let out_path = Path::new(&out);
    if let Some(parent) = out_path.parent() {
        if !parent.as_os_str().is_empty() {
            std::fs::create_dir_all(parent)?;
        }
    }
    std::fs::write(&out, serde_json::to_vec_pretty(&reports)?)
        .with_context(|| format!("writing {out}"))?;

    let payload = provenance::Payload::new(serde_json::json!({
        "input": input,
        "seed": ev.seed,
        "max_attempts": ev.cfg.max_random_attempts,
        "max_component": ev.cfg.max_component,
    }));
    provenance::write_sidecar(&out, payload)?;
    Ok(())
}

fn report(ev: &Evaluator) -> Result<()> {
    let params = serde_json::json!({
        "seed": ev.seed,
        "max_attempts": ev.cfg.max_random_attempts,
    });
    let obj = provenance::document(params, &[]);
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::Value;
    use tempfile::tempdir;

    const QUERY: &str = r#"{
        "shapes": [
            {"kind": "polygon", "vertices": [[0,0],[4,0],[4,4],[0,4]]},
            {"kind": "circle", "center": [0,0], "radius": 5},
            {"kind": "ray", "origin": [0,0], "direction": [1,0]}
        ],
        "points": [[2,2],[0,0],[5,5],[-3,0]],
        "segments": [[[-1,2],[1,2]], [[10,10],[11,11]]]
    }"#;

    #[test]
    fn evaluate_reports_every_shape() {
        let doc: QueryDoc = serde_json::from_str(QUERY).unwrap();
        let reports = evaluate(&Evaluator::default(), &doc).unwrap();
        assert_eq!(reports.len(), 3);
        assert_eq!(reports[0].contains, vec![true, true, false, false]);
        assert_eq!(reports[0].crosses, vec![true, false]);
        assert_eq!(reports[1].contains, vec![true, true, false, true]);
        assert_eq!(reports[2].contains, vec![false, true, false, false]);
    }

    #[test]
    fn evaluate_names_the_invalid_shape() {
        let doc: QueryDoc = serde_json::from_str(
            r#"{"shapes": [{"kind": "point", "x": 0, "y": 0},
                           {"kind": "line", "first": [1,1], "second": [1,1]}]}"#,
        )
        .unwrap();
        let err = evaluate(&Evaluator::default(), &doc).unwrap_err();
        assert!(format!("{err:#}").contains("shape #1"));
    }

    #[test]
    fn run_writes_results_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("query.json");
        std::fs::write(&input, QUERY).unwrap();
        let out = dir.path().join("nested").join("results.json");
        run(
            &Evaluator::default(),
            input.to_string_lossy().into_owned(),
            out.to_string_lossy().into_owned(),
        )
        .unwrap();
        let results: Value = serde_json::from_slice(&std::fs::read(&out).unwrap()).unwrap();
        assert_eq!(results.as_array().unwrap().len(), 3);
        assert_eq!(results[1]["rendering"], "Circle(Point(0, 0), 5)");
        let sidecar = dir.path().join("nested").join("results.provenance.json");
        assert!(sidecar.exists());
    }
}

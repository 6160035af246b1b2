use anyhow::{Context, Result};
use clap::{Parser, Subcommand, ValueEnum};
use hull2d::rand::{draw_points, CloudCfg, CloudShape, ReplayToken};
use hull2d::{Hull, HullBuilder, HullCfg, YAxis};
use serde::Serialize;
use std::path::{Path, PathBuf};
use tracing_subscriber::fmt::SubscriberBuilder;

mod io;
mod provenance;

use provenance::Payload;

#[derive(Parser)]
#[command(name = "cli")]
#[command(about = "Convex hulls of planar point sets")]
struct Cmd {
    /// Optional run label; propagated to outputs and logs
    #[arg(long)]
    tag: Option<String>,

    #[command(subcommand)]
    action: Action,
}

#[derive(Subcommand)]
enum Action {
    /// Build the hull of a CSV point set (columns x, y) and write it as JSON
    Hull {
        #[arg(long)]
        input: PathBuf,
        #[arg(long)]
        out: PathBuf,
        /// Treat y as growing upward (reverses the traversal direction)
        #[arg(long)]
        y_up: bool,
        /// Always run the full sweep, even for axis-aligned collinear input
        #[arg(long)]
        no_fast_path: bool,
    },
    /// Write a seeded point cloud as CSV (columns id, x, y)
    Sample {
        #[arg(long)]
        count: usize,
        #[arg(long, default_value_t = 0)]
        seed: u64,
        #[arg(long, default_value_t = 0)]
        index: u64,
        #[arg(long, value_enum, default_value_t = Shape::Square)]
        shape: Shape,
        /// Half-width (square, lattice) or radius (disk)
        #[arg(long, default_value_t = 1.0)]
        extent: f64,
        #[arg(long)]
        out: PathBuf,
    },
    /// Print a small provenance JSON block
    Report,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum Shape {
    Square,
    Disk,
    Lattice,
}

impl Shape {
    fn to_cloud_shape(self, extent: f64) -> CloudShape {
        match self {
            Shape::Square => CloudShape::Square { half_width: extent },
            Shape::Disk => CloudShape::Disk { radius: extent },
            Shape::Lattice => CloudShape::Lattice {
                half_width: extent.abs().round() as i32,
            },
        }
    }
}

fn main() -> Result<()> {
    SubscriberBuilder::default().with_target(false).init();
    let cmd = Cmd::parse();
    match cmd.action {
        Action::Hull {
            input,
            out,
            y_up,
            no_fast_path,
        } => {
            let cfg = HullCfg {
                y_axis: if y_up { YAxis::Up } else { YAxis::Down },
                axis_collinear_fast_path: !no_fast_path,
            };
            hull(&input, &out, cfg, cmd.tag)
        }
        Action::Sample {
            count,
            seed,
            index,
            shape,
            extent,
            out,
        } => {
            let cfg = CloudCfg {
                count,
                shape: shape.to_cloud_shape(extent),
            };
            sample(cfg, ReplayToken::new(seed, index), &out, cmd.tag)
        }
        Action::Report => report(cmd.tag),
    }
}

#[derive(Debug, Serialize)]
struct VertexDoc {
    id: u64,
    x: f64,
    y: f64,
}

#[derive(Debug, Serialize)]
struct HullDoc {
    boundary: Vec<VertexDoc>,
    vertex_count: usize,
    area: f64,
    degenerate: bool,
    y_axis: &'static str,
}

impl HullDoc {
    fn from_hull(h: &Hull) -> Self {
        Self {
            boundary: h
                .boundary()
                .iter()
                .map(|p| VertexDoc {
                    id: p.id,
                    x: p.x,
                    y: p.y,
                })
                .collect(),
            vertex_count: h.vertices().len(),
            area: h.area(),
            degenerate: h.is_degenerate(),
            y_axis: match h.y_axis() {
                YAxis::Down => "down",
                YAxis::Up => "up",
            },
        }
    }
}

fn hull(input: &Path, out: &Path, cfg: HullCfg, tag: Option<String>) -> Result<()> {
    tracing::info!(
        input = %input.display(),
        out = %out.display(),
        y_axis = ?cfg.y_axis,
        tag = ?tag,
        "hull"
    );
    let ps = io::read_points_csv(input)?;
    let h = HullBuilder::new(cfg)
        .build(&ps)
        .with_context(|| format!("building hull of {}", input.display()))?;
    tracing::info!(
        points = ps.len(),
        vertices = h.vertices().len(),
        area = h.area(),
        "hull_done"
    );
    io::write_json(out, &HullDoc::from_hull(&h))?;

    let payload = Payload::new(serde_json::json!({
        "command": "hull",
        "input": input.to_string_lossy(),
        "points": ps.len(),
        "y_axis": format!("{:?}", cfg.y_axis),
        "axis_collinear_fast_path": cfg.axis_collinear_fast_path
    }))
    .with_tag(tag);
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn sample(cfg: CloudCfg, tok: ReplayToken, out: &Path, tag: Option<String>) -> Result<()> {
    tracing::info!(count = cfg.count, seed = tok.seed, index = tok.index, tag = ?tag, "sample");
    let ps = draw_points(cfg, tok);
    io::write_points_csv(out, &ps)?;

    let payload = Payload::new(serde_json::json!({
        "command": "sample",
        "count": cfg.count,
        "shape": format!("{:?}", cfg.shape),
        "seed": tok.seed,
        "index": tok.index
    }))
    .with_tag(tag);
    provenance::write_sidecar(out, payload)?;
    Ok(())
}

fn report(tag: Option<String>) -> Result<()> {
    let obj = serde_json::json!({
        "code_rev": provenance::current_git_rev(),
        "lib_version": hull2d::VERSION,
        "tag": tag,
        "params": {},
        "outputs": []
    });
    println!("{}", serde_json::to_string_pretty(&obj)?);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use hull2d::PointSet;
    use serde_json::Value;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn hull_doc_reports_closed_boundary() {
        let ps = PointSet::from_coords([(0.0, 0.0), (4.0, 0.0), (2.0, 4.0), (2.0, 1.0)]);
        let h = HullBuilder::default().build(&ps).unwrap();
        let doc = HullDoc::from_hull(&h);
        assert_eq!(doc.vertex_count, 3);
        assert_eq!(doc.boundary.len(), 4);
        assert_eq!(doc.boundary[0].id, doc.boundary[3].id);
        assert!((doc.area - 8.0).abs() < 1e-12);
        assert!(!doc.degenerate);
        assert_eq!(doc.y_axis, "down");
    }

    #[test]
    fn hull_command_writes_json_and_sidecar() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("square.csv");
        fs::write(&input, "x,y\n0,0\n0,2\n2,0\n2,2\n1,1\n").unwrap();
        let out = dir.path().join("out/hull.json");
        hull(&input, &out, HullCfg::default(), Some("t".into())).unwrap();

        let doc: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert_eq!(doc["vertex_count"], 4);
        assert_eq!(doc["boundary"].as_array().unwrap().len(), 5);
        assert_eq!(doc["area"], 4.0);
        assert!(dir.path().join("out/hull.provenance.json").exists());
    }

    #[test]
    fn hull_command_rejects_empty_csv() {
        let dir = tempdir().unwrap();
        let input = dir.path().join("empty.csv");
        fs::write(&input, "x,y\n").unwrap();
        let out = dir.path().join("hull.json");
        assert!(hull(&input, &out, HullCfg::default(), None).is_err());
        assert!(!out.exists());
    }

    #[test]
    fn sample_then_hull() {
        let dir = tempdir().unwrap();
        let cloud = dir.path().join("cloud.csv");
        let cfg = CloudCfg {
            count: 50,
            shape: Shape::Lattice.to_cloud_shape(10.0),
        };
        sample(cfg, ReplayToken::new(3, 1), &cloud, None).unwrap();
        let out = dir.path().join("hull.json");
        hull(&cloud, &out, HullCfg::default(), None).unwrap();
        let doc: Value = serde_json::from_slice(&fs::read(&out).unwrap()).unwrap();
        assert!(doc["vertex_count"].as_u64().unwrap() >= 3);
    }
}

//! CSV and JSON file helpers.

use anyhow::{bail, Context, Result};
use hull2d::PointSet;
use polars::prelude::*;
use serde::Serialize;
use std::fs::{self, File};
use std::path::Path;

pub fn ensure_parent(path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() {
            fs::create_dir_all(parent)
                .with_context(|| format!("creating output dir {}", parent.display()))?;
        }
    }
    Ok(())
}

/// Read columns `x` and `y` (any numeric type) into a fresh `PointSet`.
/// Ids follow row order. Empty cells are rejected.
pub fn read_points_csv(path: &Path) -> Result<PointSet> {
    let df = LazyCsvReader::new(path)
        .with_infer_schema_length(Some(100))
        .finish()
        .with_context(|| format!("opening {}", path.display()))?
        .select([
            col("x").cast(DataType::Float64),
            col("y").cast(DataType::Float64),
        ])
        .collect()
        .with_context(|| format!("reading columns x, y from {}", path.display()))?;
    let xs = df.column("x")?.f64()?;
    let ys = df.column("y")?.f64()?;
    let mut ps = PointSet::new();
    for (row, (x, y)) in xs.into_iter().zip(ys.into_iter()).enumerate() {
        match (x, y) {
            (Some(x), Some(y)) => {
                ps.append(x, y);
            }
            _ => bail!("{}: row {row} is missing a coordinate", path.display()),
        }
    }
    tracing::debug!(rows = ps.len(), path = %path.display(), "points_csv_read");
    Ok(ps)
}

/// Write `id,x,y` rows in current sequence order.
pub fn write_points_csv(path: &Path, ps: &PointSet) -> Result<()> {
    let ids: Vec<u64> = ps.iter().map(|p| p.id).collect();
    let mut df = df!(
        "id" => ids,
        "x" => ps.x_coords(),
        "y" => ps.y_coords()
    )?;
    ensure_parent(path)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    CsvWriter::new(&mut file)
        .include_header(true)
        .finish(&mut df)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

pub fn write_json<T: Serialize>(path: &Path, value: &T) -> Result<()> {
    ensure_parent(path)?;
    fs::write(path, serde_json::to_vec_pretty(value)?)
        .with_context(|| format!("writing {}", path.display()))?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn reads_integer_columns_as_floats() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,y\n0,0\n4,0\n2,4\n2,1\n").unwrap();
        let ps = read_points_csv(&path).unwrap();
        assert_eq!(ps.x_coords(), vec![0.0, 4.0, 2.0, 2.0]);
        assert_eq!(ps.y_coords(), vec![0.0, 0.0, 4.0, 1.0]);
        assert_eq!(ps.next_id(), 4);
    }

    #[test]
    fn extra_columns_are_ignored() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "label,y,x\na,1.5,-2.0\nb,0.25,3.0\n").unwrap();
        let ps = read_points_csv(&path).unwrap();
        assert_eq!(ps.x_coords(), vec![-2.0, 3.0]);
        assert_eq!(ps.y_coords(), vec![1.5, 0.25]);
    }

    #[test]
    fn missing_cell_is_an_error() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("pts.csv");
        fs::write(&path, "x,y\n0.0,0.0\n1.0,\n").unwrap();
        assert!(read_points_csv(&path).is_err());
    }

    #[test]
    fn written_cloud_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("nested/cloud.csv");
        let ps = PointSet::from_coords([(0.5, -1.0), (2.0, 3.25)]);
        write_points_csv(&path, &ps).unwrap();
        let text = fs::read_to_string(&path).unwrap();
        assert!(text.starts_with("id,x,y"));
        let back = read_points_csv(&path).unwrap();
        assert_eq!(back.x_coords(), ps.x_coords());
        assert_eq!(back.y_coords(), ps.y_coords());
    }
}

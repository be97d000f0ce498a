//! Tabular output of curves and relaxation trajectories via polars.
//!
//! Files ending in `.parquet` are written as Parquet, anything else as CSV
//! with a header row.

use anyhow::{Context, Result};
use gridknot::{PolygonalCurve, RelaxationEngine};
use polars::prelude::*;
use std::fs::File;
use std::path::Path;

/// Long-format trajectory: one row per (recorded step, vertex).
#[derive(Default)]
pub struct FrameRecorder {
    step: Vec<u32>,
    vertex: Vec<u32>,
    x: Vec<f64>,
    y: Vec<f64>,
    z: Vec<f64>,
    stuck: Vec<u32>,
    frames: usize,
}

impl FrameRecorder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends the engine's current rope as frame `step`.
    pub fn record(&mut self, step: usize, engine: &RelaxationEngine) {
        let flags = engine.stuck_flags();
        for (i, (p, s)) in engine.rope().vertices().iter().zip(flags).enumerate() {
            self.step.push(step as u32);
            self.vertex.push(i as u32);
            self.x.push(p.x);
            self.y.push(p.y);
            self.z.push(p.z);
            self.stuck.push(u32::from(s));
        }
        self.frames += 1;
    }

    pub fn frames(&self) -> usize {
        self.frames
    }

    pub fn finish(self) -> PolarsResult<DataFrame> {
        df!(
            "step" => self.step,
            "vertex" => self.vertex,
            "x" => self.x,
            "y" => self.y,
            "z" => self.z,
            "stuck" => self.stuck,
        )
    }
}

/// One row per curve vertex; `lifted` marks crossing vertices.
pub fn curve_frame(curve: &PolygonalCurve, lifted: &[bool]) -> PolarsResult<DataFrame> {
    let v = curve.vertices();
    let vertex: Vec<u32> = (0..v.len() as u32).collect();
    let lifted: Vec<u32> = (0..v.len())
        .map(|i| u32::from(lifted.get(i).copied().unwrap_or(false)))
        .collect();
    df!(
        "vertex" => vertex,
        "x" => v.iter().map(|p| p.x).collect::<Vec<f64>>(),
        "y" => v.iter().map(|p| p.y).collect::<Vec<f64>>(),
        "z" => v.iter().map(|p| p.z).collect::<Vec<f64>>(),
        "lifted" => lifted,
    )
}

/// Writes `df` to `path`, choosing the format from the extension.
pub fn write_frame<P: AsRef<Path>>(df: &mut DataFrame, path: P) -> Result<()> {
    let path = path.as_ref();
    crate::ensure_parent(path)?;
    let mut file = File::create(path).with_context(|| format!("creating {}", path.display()))?;
    let parquet = path
        .extension()
        .is_some_and(|ext| ext.eq_ignore_ascii_case("parquet"));
    if parquet {
        ParquetWriter::new(file)
            .finish(df)
            .with_context(|| format!("writing parquet {}", path.display()))?;
    } else {
        CsvWriter::new(&mut file)
            .include_header(true)
            .finish(df)
            .with_context(|| format!("writing csv {}", path.display()))?;
    }
    tracing::debug!(
        path = %path.display(),
        rows = df.height(),
        cols = df.width(),
        "frame written"
    );
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use gridknot::diagram::samples;
    use gridknot::extract::extract;
    use gridknot::SimulationParams;
    use tempfile::tempdir;

    fn unknot_engine() -> RelaxationEngine {
        let curve = extract(&samples::unknot()).unwrap().curve;
        RelaxationEngine::new(curve, SimulationParams::default()).unwrap()
    }

    #[test]
    fn recorder_emits_long_format() {
        let mut eng = unknot_engine();
        let mut rec = FrameRecorder::new();
        rec.record(0, &eng);
        eng.step();
        rec.record(1, &eng);
        assert_eq!(rec.frames(), 2);
        let df = rec.finish().unwrap();
        assert_eq!(df.shape(), (8, 6));
        let names: Vec<String> = df.get_column_names().iter().map(|s| s.to_string()).collect();
        assert_eq!(names, ["step", "vertex", "x", "y", "z", "stuck"]);
    }

    #[test]
    fn curve_frame_marks_lifted_vertices() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("trefoil.csv");
        let e = extract(&samples::trefoil()).unwrap();
        let mut df = curve_frame(&e.curve, &e.lifted).unwrap();
        assert_eq!(df.height(), 24);
        write_frame(&mut df, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().skip(1).filter(|l| l.ends_with(",1")).count(), 3);
    }

    #[test]
    fn csv_output_has_header() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("out").join("curve.csv");
        let e = extract(&samples::unknot()).unwrap();
        let mut df = curve_frame(&e.curve, &e.lifted).unwrap();
        write_frame(&mut df, &path).unwrap();
        let text = std::fs::read_to_string(&path).unwrap();
        assert_eq!(text.lines().next(), Some("vertex,x,y,z,lifted"));
        assert_eq!(text.lines().count(), 5);
    }

    #[test]
    fn parquet_output_reads_back() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("frames.parquet");
        let mut rec = FrameRecorder::new();
        rec.record(0, &unknot_engine());
        let mut df = rec.finish().unwrap();
        write_frame(&mut df, &path).unwrap();
        let back = ParquetReader::new(File::open(&path).unwrap())
            .finish()
            .unwrap();
        assert_eq!(back.shape(), (4, 6));
    }
}

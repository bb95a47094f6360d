//! CSV output backend.
//!
//! Creates two files in the configured output directory:
//! - `agent_poses.csv`
//! - `step_summaries.csv`

use std::fs::File;
use std::path::Path;

use csv::Writer;

use crate::writer::OutputWriter;
use crate::{OutputResult, PoseRow, StepSummaryRow};

/// Writes simulation output to two CSV files.
pub struct CsvWriter {
    poses: Writer<File>,
    summaries: Writer<File>,
    finished: bool,
}

impl CsvWriter {
    /// Open (or create) the two CSV files in `dir` and write the header rows.
    pub fn new(dir: &Path) -> OutputResult<Self> {
        let mut poses = Writer::from_path(dir.join("agent_poses.csv"))?;
        poses.write_record(["kind", "agent_id", "stepno", "x", "z", "heading", "speed"])?;

        let mut summaries = Writer::from_path(dir.join("step_summaries.csv"))?;
        summaries.write_record(["stepno", "t", "dt"])?;

        Ok(Self {
            poses,
            summaries,
            finished: false,
        })
    }
}

impl OutputWriter for CsvWriter {
    fn write_poses(&mut self, rows: &[PoseRow]) -> OutputResult<()> {
        for row in rows {
            self.poses.write_record(&[
                row.kind.as_str().to_string(),
                row.agent_id.to_string(),
                row.stepno.to_string(),
                format!("{:.3}", row.x),
                format!("{:.3}", row.z),
                format!("{:.4}", row.heading),
                format!("{:.3}", row.speed),
            ])?;
        }
        Ok(())
    }

    fn write_step_summary(&mut self, row: &StepSummaryRow) -> OutputResult<()> {
        self.summaries.write_record(&[
            row.stepno.to_string(),
            format!("{:.4}", row.t),
            format!("{:.4}", row.dt),
        ])?;
        Ok(())
    }

    fn finish(&mut self) -> OutputResult<()> {
        if self.finished {
            return Ok(());
        }
        self.finished = true;
        self.poses.flush()?;
        self.summaries.flush()?;
        Ok(())
    }
}

//! Integration tests for gt-output.

#[cfg(test)]
mod csv_tests {
    use tempfile::TempDir;

    use crate::csv::CsvWriter;
    use crate::row::{AgentKind, PoseRow, StepSummaryRow};
    use crate::writer::OutputWriter;

    fn tmp() -> TempDir {
        tempfile::tempdir().expect("create temp dir")
    }

    fn pose_row(kind: AgentKind, agent_id: u32, stepno: u64) -> PoseRow {
        PoseRow {
            kind,
            agent_id,
            stepno,
            x: agent_id as f32 * 10.0,
            z: -5.0,
            heading: 1.5708,
            speed: 2.5,
        }
    }

    fn summary_row(stepno: u64) -> StepSummaryRow {
        StepSummaryRow { stepno, t: stepno as f64 / 60.0, dt: 1.0 / 60.0 }
    }

    #[test]
    fn csv_files_created() {
        let dir = tmp();
        let _w = CsvWriter::new(dir.path()).unwrap();
        assert!(dir.path().join("agent_poses.csv").exists());
        assert!(dir.path().join("step_summaries.csv").exists());
    }

    #[test]
    fn csv_headers_correct() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_poses.csv")).unwrap();
        let headers: Vec<_> = rdr.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers, ["kind", "agent_id", "stepno", "x", "z", "heading", "speed"]);

        let mut rdr2 = csv::Reader::from_path(dir.path().join("step_summaries.csv")).unwrap();
        let headers2: Vec<_> = rdr2.headers().unwrap().iter().map(str::to_owned).collect();
        assert_eq!(headers2, ["stepno", "t", "dt"]);
    }

    #[test]
    fn csv_pose_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        let rows = vec![
            pose_row(AgentKind::Vehicle, 0, 5),
            pose_row(AgentKind::Pedestrian, 1, 5),
            pose_row(AgentKind::Roamer, 2, 5),
        ];
        w.write_poses(&rows).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("agent_poses.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 3);
        assert_eq!(&read_rows[0][0], "vehicle");
        assert_eq!(&read_rows[1][0], "pedestrian");
        assert_eq!(&read_rows[2][0], "roamer");
        assert_eq!(&read_rows[2][1], "2"); // agent_id
        assert_eq!(&read_rows[2][2], "5"); // stepno
        assert_eq!(&read_rows[2][3], "20.000"); // x
    }

    #[test]
    fn csv_step_summary_round_trip() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_step_summary(&summary_row(3)).unwrap();
        w.finish().unwrap();

        let mut rdr = csv::Reader::from_path(dir.path().join("step_summaries.csv")).unwrap();
        let read_rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(read_rows.len(), 1);
        assert_eq!(&read_rows[0][0], "3"); // stepno
        assert_eq!(&read_rows[0][1], "0.0500"); // t = 3/60
    }

    #[test]
    fn csv_finish_idempotent() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.finish().unwrap();
        w.finish().unwrap(); // second call should not panic
    }

    #[test]
    fn csv_empty_pose_batch_ok() {
        let dir = tmp();
        let mut w = CsvWriter::new(dir.path()).unwrap();
        w.write_poses(&[]).unwrap(); // should return Ok(())
    }

    #[test]
    fn integration_csv() {
        use gt_core::WorldConfig;
        use gt_sim::CityBuilder;

        use crate::observer::SimOutputObserver;

        let config = WorldConfig {
            seed: 1,
            vehicles: 4,
            pedestrians: 6,
            roamers: 2,
            snapshot_every: 10,
            ..WorldConfig::default()
        };
        let mut sim = CityBuilder::new(config).build().unwrap();

        let dir = tmp();
        let writer = CsvWriter::new(dir.path()).unwrap();
        let mut obs = SimOutputObserver::new(writer);
        sim.run_fixed(30, 1.0 / 60.0, &mut obs);
        assert!(obs.take_error().is_none(), "no write errors expected");

        // snapshot_every = 10 → snapshots at steps 10, 20, 30:
        // 3 snapshots × (4 + 6 + 2) agents = 36 pose rows
        let mut rdr = csv::Reader::from_path(dir.path().join("agent_poses.csv")).unwrap();
        let rows: Vec<_> = rdr.records().map(|r| r.unwrap()).collect();
        assert_eq!(rows.len(), 36, "expected 3 snapshots x 12 agents");

        // one summary per step
        let mut rdr2 = csv::Reader::from_path(dir.path().join("step_summaries.csv")).unwrap();
        let summaries: Vec<_> = rdr2.records().map(|r| r.unwrap()).collect();
        assert_eq!(summaries.len(), 30);
    }
}

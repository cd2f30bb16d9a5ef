use crate::geometry::{Coord, Position};
use crate::harness::PointNorms;
use crate::record::*;
use crate::sketch::{ConstraintDescriptor, SketchDescriptor};
use crate::solver::PerVariant;
use chrono::NaiveDate;
use tempfile::TempDir;

fn clock() -> FixedClock {
    FixedClock(NaiveDate::from_ymd_opt(2024, 3, 5).unwrap().and_hms_opt(14, 7, 33).unwrap())
}

fn sample_record() -> ResultRecord {
    let mut record = ResultRecord::default();
    record.points.insert(
        "p1".to_string(),
        PointRecord {
            original: Coord::new(0.0, 1.0),
            l1: SolvedPoint {
                x: 0.1,
                y: 1.0,
                norms: Some(PointNorms { l1_norm: 0.1, l2_norm: 0.010000000000000002, non_zero_results: 1 }),
            },
            l2: SolvedPoint {
                x: 0.05,
                y: 0.95,
                norms: Some(PointNorms { l1_norm: 0.1, l2_norm: 0.005, non_zero_results: 2 }),
            },
        },
    );
    record.points.insert(
        "p3".to_string(),
        PointRecord {
            original: Coord::new(4.0, 3.0),
            l1: SolvedPoint { x: 5.0, y: 2.0, norms: None },
            l2: SolvedPoint { x: 5.0, y: 2.0, norms: None },
        },
    );
    record.lines.insert(
        "l3".to_string(),
        LineRecord {
            source: "p3".to_string(),
            target: "p1".to_string(),
            points: Some(LineEndpoints {
                source: EndpointRecord {
                    original: Coord::new(4.0, 3.0),
                    l1: Coord::new(5.0, 2.0),
                    l2: Coord::new(5.0, 2.0),
                },
                target: EndpointRecord {
                    original: Coord::new(0.0, 1.0),
                    l1: Coord::new(0.1, 1.0),
                    l2: Coord::new(0.05, 0.95),
                },
            }),
        },
    );
    record.constraints.insert(
        "c1".to_string(),
        ConstraintDescriptor::Angle { entities: ["l3".to_string(), "l3".to_string()], value: -1.2566370614359172 },
    );
    record.angles.insert(
        "c1".to_string(),
        AngleCheck {
            requested: Some(-72.0),
            original: Some(0.0),
            measured: PerVariant::new(Some(71.99999), None),
        },
    );
    record.results = RunResults {
        l1_norm: PerVariant::new(0.1, 0.1),
        l2_norm: PerVariant::new(0.010000000000000002, 0.005),
        non_zero_results: PerVariant::new(1, 2),
        variables: 4,
        time: PerVariant::new(0.0123456789, 0.02),
        steps: PerVariant::new(3, 7),
    };
    record
}

#[test]
fn test_result_file_name() {
    assert_eq!(result_file_name(clock().now(), 3), "2024-03-05T1407--3.json");
    assert_eq!(result_file_name(clock().now(), 0), "2024-03-05T1407--0.json");
}

#[test]
fn test_write_then_read_round_trip() {
    let dir = TempDir::new().unwrap();
    let record = sample_record();

    let path = write_result(dir.path(), &record, 12, &clock()).unwrap();
    assert_eq!(path, dir.path().join("2024-03-05T1407--12.json"));

    let back = read_result(&path).unwrap();
    assert_eq!(back, record);
}

#[test]
fn test_written_layout() {
    let dir = TempDir::new().unwrap();
    let path = write_result(dir.path(), &sample_record(), 0, &clock()).unwrap();
    let body = std::fs::read_to_string(&path).unwrap();

    // Two-space indentation.
    assert!(body.starts_with("{\n  \"points\": {"));

    let value: serde_json::Value = serde_json::from_str(&body).unwrap();
    assert_eq!(value["points"]["p1"]["ORIGINAL"]["y"], 1.0);
    assert_eq!(value["points"]["p1"]["L2"]["non_zero_results"], 2);
    // Moved points carry coordinates only.
    assert!(value["points"]["p3"]["L1"].get("l1_norm").is_none());
    assert_eq!(value["lines"]["l3"]["points"]["source"]["L1"]["x"], 5.0);
    assert_eq!(value["Results"]["steps"]["L2"], 7);
    assert_eq!(value["Results"]["variables"], 4);
    assert!(value["angles"]["c1"]["measured"]["L2"].is_null());
}

#[test]
fn test_angles_live_beside_constraints() {
    let value = serde_json::to_value(sample_record()).unwrap();

    assert_eq!(value["angles"]["c1"]["requested"], -72.0);
    let constraint = value["constraints"]["c1"].as_object().unwrap();
    let mut keys: Vec<&str> = constraint.keys().map(String::as_str).collect();
    keys.sort_unstable();
    assert_eq!(keys, vec!["entities", "type", "value"]);

    // Replay only needs the constraints.
    let mut stripped = sample_record();
    stripped.angles.clear();
    assert_eq!(stripped.to_sketch(), sample_record().to_sketch());
}

#[test]
fn test_read_tolerates_older_schema() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("old.json");
    std::fs::write(
        &path,
        r#"{
  "points": { "p1": { "ORIGINAL": { "x": 0, "y": 0 }, "L1": { "x": 0, "y": 0 }, "L2": { "x": 0, "y": 0 } } },
  "lines": { "l1": ["p1", "p1"] },
  "constraints": {},
  "Results": {
    "l1_norm": { "L1": 0.0, "L2": 0.0 },
    "l2_norm": { "L1": 0.0, "L2": 0.0 },
    "non_zero_results": { "L1": 0, "L2": 0 },
    "variables": 2
  }
}"#,
    )
    .unwrap();

    let record = read_result(&path).unwrap();
    assert!(record.circles.is_empty());
    assert!(record.moves.is_empty());
    assert!(record.angles.is_empty());
    assert_eq!(record.lines["l1"].points, None);
    assert_eq!(record.points["p1"].l1.norms, None);
    assert_eq!(record.results.steps, PerVariant::new(0, 0));
}

#[test]
fn test_read_reports_malformed_file() {
    let dir = TempDir::new().unwrap();
    let path = dir.path().join("broken.json");
    std::fs::write(&path, "{ \"points\": {} }").unwrap();

    assert!(matches!(read_result(&path), Err(RecordError::Json { .. })));
    assert!(matches!(read_result(&dir.path().join("missing.json")), Err(RecordError::Io { .. })));
}

#[test]
fn test_to_sketch_replays_original_geometry() {
    let mut record = sample_record();
    record.moves.insert(
        "m1".to_string(),
        crate::sketch::MoveDescriptor::new("p3", Position::new(5.0, 2.0)),
    );

    let sketch: SketchDescriptor = record.to_sketch();
    assert_eq!(sketch.points["p1"], Position::new(0.0, 1.0));
    assert_eq!(sketch.points["p3"], Position::new(4.0, 3.0));
    assert_eq!(sketch.lines["l3"].source, "p3");
    assert_eq!(sketch.constraints, record.constraints);
    assert_eq!(sketch.moved_points().collect::<Vec<_>>(), vec!["p3"]);
    assert!(sketch.validate().is_ok());
}

use crate::geometry::Position;
use crate::sketch::types::{ConstraintDescriptor, SketchDescriptor, SketchError};

const RIGHT_TRIANGLE: &str = r#"{
  "points": { "p1": [0, 1], "p2": [4, 1], "p3": [4, 3] },
  "lines": { "l1": ["p1", "p2"], "l2": ["p2", "p3"], "l3": ["p3", "p1"] },
  "constraints": {
    "c1": { "type": "LENGTH", "entities": ["l1"], "value": 4 },
    "c4": { "type": "ORTHOGONAL", "entities": ["l1", "l2"] },
    "c5": { "type": "ANGLE", "entities": ["l2", "l1"], "value": -1.2566370614359172 }
  },
  "moves": { "m1": { "point": "p3", "values": [5, 2] } }
}"#;

#[test]
fn test_parse_sketch_description() {
    let sketch: SketchDescriptor = serde_json::from_str(RIGHT_TRIANGLE).unwrap();

    assert_eq!(sketch.points["p2"], Position::new(4.0, 1.0));
    assert_eq!(sketch.lines["l3"].source, "p3");
    assert_eq!(sketch.lines["l3"].target, "p1");
    assert!(sketch.circles.is_empty());
    assert_eq!(sketch.moves["m1"].values, Position::new(5.0, 2.0));
    assert_eq!(sketch.moved_points().collect::<Vec<_>>(), vec!["p3"]);

    match &sketch.constraints["c5"] {
        ConstraintDescriptor::Angle { entities, value } => {
            assert_eq!(entities, &["l2".to_string(), "l1".to_string()]);
            assert!((value.to_degrees() + 72.0).abs() < 1e-9);
        }
        other => panic!("unexpected constraint {:?}", other),
    }
    assert!(sketch.validate().is_ok());
}

#[test]
fn test_constraint_arity_is_checked_while_parsing() {
    let json = r#"{ "type": "ORTHOGONAL", "entities": ["l1"] }"#;
    assert!(serde_json::from_str::<ConstraintDescriptor>(json).is_err());

    let json = r#"{ "type": "MIDPOINT", "entities": ["p1", "p2", "p3"] }"#;
    let c: ConstraintDescriptor = serde_json::from_str(json).unwrap();
    assert_eq!(c.type_name(), "MIDPOINT");
    assert_eq!(c.value(), None);
}

#[test]
fn test_length_and_angle_require_value() {
    let json = r#"{ "type": "LENGTH", "entities": ["l1"] }"#;
    assert!(serde_json::from_str::<ConstraintDescriptor>(json).is_err());

    let json = r#"{ "type": "ANGLE", "entities": ["l1", "l2"] }"#;
    assert!(serde_json::from_str::<ConstraintDescriptor>(json).is_err());
}

#[test]
fn test_unknown_constraint_type_is_rejected() {
    let json = r#"{ "type": "TANGENT", "entities": ["l1", "c1"] }"#;
    assert!(serde_json::from_str::<ConstraintDescriptor>(json).is_err());
}

#[test]
fn test_circle_descriptor_format() {
    let sketch: SketchDescriptor = serde_json::from_str(
        r#"{ "points": { "p1": [0, 0] }, "circles": { "c1": ["p1", 2] } }"#,
    )
    .unwrap();
    assert_eq!(sketch.circles["c1"].center, "p1");
    assert_eq!(sketch.circles["c1"].radius, 2.0);

    let json = serde_json::to_string(&sketch.circles).unwrap();
    assert_eq!(json, r#"{"c1":["p1",2.0]}"#);
}

#[test]
fn test_validate_reports_dangling_references() {
    let sketch = SketchDescriptor::new()
        .with_point("p1", Position::new(0.0, 0.0))
        .with_move("m1", "p7", Position::new(1.0, 1.0));
    assert_eq!(
        sketch.validate(),
        Err(SketchError::UnresolvedEntityReference {
            owner: "move 'm1'".to_string(),
            entity: "p7".to_string(),
        })
    );

    let sketch = SketchDescriptor::new()
        .with_point("p1", Position::new(0.0, 0.0))
        .with_constraint(
            "c1",
            ConstraintDescriptor::Coincident { entities: ["p1".to_string(), "q".to_string()] },
        );
    assert!(matches!(
        sketch.validate(),
        Err(SketchError::UnresolvedEntityReference { entity, .. }) if entity == "q"
    ));
}

use crate::geometry::Position;
use crate::sketch::factory::{build_constraints, BuiltSketch};
use crate::sketch::types::{ConstraintDescriptor, SketchDescriptor, SketchError};
use crate::solver::tests_support::RecordingSession;
use crate::solver::{EntityHandle, EntityKind, LineHandle, PointHandle, SolverConstraint};
use std::collections::BTreeMap;

fn s(v: &str) -> String {
    v.to_string()
}

fn triangle() -> SketchDescriptor {
    SketchDescriptor::new()
        .with_point("p1", Position::new(0.0, 1.0))
        .with_point("p2", Position::new(4.0, 1.0))
        .with_point("p3", Position::new(4.0, 3.0))
        .with_line("l1", "p1", "p2")
        .with_line("l2", "p2", "p3")
        .with_line("l3", "p3", "p1")
}

#[test]
fn test_construct_shares_point_entities() {
    let sketch = triangle().with_circle("c1", "p1", 2.0);
    let mut session = RecordingSession::default();
    let built = BuiltSketch::construct(&mut session, &sketch).unwrap();

    assert_eq!(session.points.len(), 3);
    assert_eq!(session.lines.len(), 3);
    // l1 ends where l2 starts: the same point entity, not a copy.
    assert_eq!(session.lines[built.lines["l1"].0][1], session.lines[built.lines["l2"].0][0]);
    assert_eq!(session.circles, vec![(built.points["p1"], 2.0)]);
}

#[test]
fn test_construct_rejects_unknown_line_endpoint() {
    let sketch = triangle().with_line("l4", "p1", "p9");
    let mut session = RecordingSession::default();
    let err = BuiltSketch::construct(&mut session, &sketch).unwrap_err();
    assert_eq!(
        err,
        SketchError::UnresolvedEntityReference { owner: s("line 'l4'"), entity: s("p9") }
    );
}

#[test]
fn test_factory_builds_every_kind() {
    let sketch = triangle()
        .with_point("p4", Position::new(2.0, 2.0))
        .with_constraint("c1", ConstraintDescriptor::Length { entities: [s("l1")], value: 6.0 })
        .with_constraint("c2", ConstraintDescriptor::Orthogonal { entities: [s("l1"), s("l2")] })
        .with_constraint("c3", ConstraintDescriptor::Coincident { entities: [s("p1"), s("p4")] })
        .with_constraint("c4", ConstraintDescriptor::PointOn { entities: [s("p4"), s("l3")] })
        .with_constraint("c5", ConstraintDescriptor::Equal { entities: [s("l1"), s("l3")] })
        .with_constraint("c6", ConstraintDescriptor::Angle { entities: [s("l3"), s("l1")], value: -1.2 })
        .with_constraint(
            "c7",
            ConstraintDescriptor::CenterTriangle { entities: [s("p1"), s("p2"), s("p3"), s("p4")] },
        )
        .with_constraint("c8", ConstraintDescriptor::MidPoint { entities: [s("p1"), s("p2"), s("p4")] });

    let mut session = RecordingSession::default();
    let built = BuiltSketch::construct(&mut session, &sketch).unwrap();
    let constraints = build_constraints(&built, &sketch.constraints).unwrap();

    let p = |n: &str| built.points[n];
    let l = |n: &str| built.lines[n];

    assert_eq!(
        constraints,
        vec![
            SolverConstraint::Length { line: l("l1"), value: 6.0 },
            SolverConstraint::Orthogonal { lines: [l("l1"), l("l2")] },
            SolverConstraint::Coincident { points: [p("p1"), p("p4")] },
            SolverConstraint::PointOn { point: p("p4"), on: EntityHandle::Line(l("l3")) },
            SolverConstraint::Equal { lines: [l("l1"), l("l3")] },
            SolverConstraint::Angle { lines: [l("l3"), l("l1")], value: -1.2 },
            SolverConstraint::CenterTriangle { corners: [p("p1"), p("p2"), p("p3")], center: p("p4") },
            SolverConstraint::MidPoint { ends: [p("p1"), p("p2")], midpoint: p("p4") },
        ]
    );
}

#[test]
fn test_point_on_point_resolves_to_point() {
    let mut built = BuiltSketch::default();
    built.points.insert(s("p1"), PointHandle(0));
    built.points.insert(s("p2"), PointHandle(1));

    let constraints: BTreeMap<_, _> = [(s("c1"), ConstraintDescriptor::PointOn { entities: [s("p1"), s("p2")] })]
        .into_iter()
        .collect();
    let out = build_constraints(&built, &constraints).unwrap();
    assert_eq!(
        out,
        vec![SolverConstraint::PointOn { point: PointHandle(0), on: EntityHandle::Point(PointHandle(1)) }]
    );
}

#[test]
fn test_lines_win_over_points_with_same_name() {
    let mut built = BuiltSketch::default();
    built.points.insert(s("a"), PointHandle(0));
    built.lines.insert(s("a"), LineHandle(7));

    assert_eq!(built.resolve("test", "a").unwrap(), EntityHandle::Line(LineHandle(7)));
}

#[test]
fn test_unknown_constraint_entity() {
    let sketch = triangle()
        .with_constraint("c1", ConstraintDescriptor::Orthogonal { entities: [s("l1"), s("l9")] });
    let mut session = RecordingSession::default();
    let built = BuiltSketch::construct(&mut session, &sketch).unwrap();

    let err = build_constraints(&built, &sketch.constraints).unwrap_err();
    assert_eq!(
        err,
        SketchError::UnresolvedEntityReference { owner: s("constraint 'c1'"), entity: s("l9") }
    );
}

#[test]
fn test_wrong_entity_kind() {
    let sketch = triangle()
        .with_constraint("c1", ConstraintDescriptor::Length { entities: [s("p1")], value: 2.0 });
    let mut session = RecordingSession::default();
    let built = BuiltSketch::construct(&mut session, &sketch).unwrap();

    let err = build_constraints(&built, &sketch.constraints).unwrap_err();
    assert_eq!(
        err,
        SketchError::EntityKindMismatch {
            owner: s("constraint 'c1'"),
            entity: s("p1"),
            expected: EntityKind::Line,
        }
    );
    assert_eq!(err.to_string(), "constraint 'c1' expects a line for 'p1'");
}

#[test]
fn test_line_named_like_a_point_keeps_point_slots() {
    let sketch = SketchDescriptor::new()
        .with_point("a", Position::new(0.0, 0.0))
        .with_point("b", Position::new(1.0, 0.0))
        .with_line("a", "a", "b")
        .with_line("m", "a", "b")
        .with_circle("c", "a", 1.0);
    assert_eq!(sketch.validate(), Ok(()));

    let mut session = RecordingSession::default();
    let built = BuiltSketch::construct(&mut session, &sketch).unwrap();

    assert_eq!(session.lines[built.lines["m"].0], [built.points["a"], built.points["b"]]);
    assert_eq!(session.circles, vec![(built.points["a"], 1.0)]);
    // Constraint slots still see the line first.
    assert_eq!(built.resolve("c1", "a"), Ok(EntityHandle::Line(built.lines["a"])));
}

#[test]
fn test_named_point_ignores_lines() {
    let mut session = RecordingSession::default();
    let built = BuiltSketch::construct(&mut session, &triangle()).unwrap();

    assert_eq!(built.named_point("move 'm1'", "p2"), Ok(built.points["p2"]));
    assert_eq!(
        built.named_point("move 'm1'", "l1"),
        Err(SketchError::UnresolvedEntityReference { owner: s("move 'm1'"), entity: s("l1") })
    );
}

//! Target detection: range and cone boundaries, occlusion by obstacles, and
//! how raycaster failures are handled.
use glam::Vec2;
use lookout::geometry::dir_from_angle;
use lookout::pose::Pose;
use lookout::raycast::{LayerMask, RaycastError, RaycastHit, Raycaster, SegmentWorld};
use lookout::vision::{detect, is_visible, Detection};
use mockall::mock;
use rstest::rstest;

mock! {
    pub Caster {}
    impl Raycaster for Caster {
        fn cast(
            &self,
            origin: Vec2,
            direction: Vec2,
            max_distance: f32,
            mask: LayerMask,
        ) -> Result<Option<RaycastHit>, RaycastError>;
    }
}

const RADIUS: f32 = 5.0;
const ANGLE: f32 = 90.0;

fn guard() -> Pose {
    Pose::new(Vec2::new(2.0, 2.0), 60.0)
}

#[rstest]
#[case::just_inside(RADIUS - 0.01, Detection::Visible)]
#[case::just_outside(RADIUS + 0.01, Detection::OutOfRange)]
fn radius_boundary(#[case] distance: f32, #[case] expected: Detection) {
    let pose = guard();
    let target = pose.position + pose.forward() * distance;
    let outcome = detect(&pose, target, RADIUS, ANGLE, LayerMask::ALL, &SegmentWorld::new());
    assert_eq!(outcome, expected);
}

#[rstest]
#[case::inside_left(ANGLE / 2.0 - 1.0, true)]
#[case::inside_right(-(ANGLE / 2.0 - 1.0), true)]
#[case::outside_left(ANGLE / 2.0 + 1.0, false)]
#[case::outside_right(-(ANGLE / 2.0 + 1.0), false)]
fn cone_boundary(#[case] offset: f32, #[case] expected: bool) {
    let pose = guard();
    let target = pose.position + dir_from_angle(pose.heading + offset) * 3.0;
    assert_eq!(
        is_visible(&pose, target, RADIUS, ANGLE, LayerMask::ALL, &SegmentWorld::new()),
        expected
    );
}

#[rstest]
fn wall_between_guard_and_target_occludes() {
    let pose = Pose::new(Vec2::ZERO, 0.0);
    let target = Vec2::new(4.0, 0.0);
    let world = SegmentWorld::new().with_segment(
        Vec2::new(2.0, -1.0),
        Vec2::new(2.0, 1.0),
        LayerMask::layer(0),
    );
    assert_eq!(
        detect(&pose, target, RADIUS, ANGLE, LayerMask::ALL, &world),
        Detection::Occluded
    );
    // A mask that ignores the wall's layer sees straight through it.
    assert!(is_visible(&pose, target, RADIUS, ANGLE, LayerMask::layer(1), &world));
}

#[rstest]
fn wall_behind_target_does_not_occlude() {
    let pose = Pose::new(Vec2::ZERO, 0.0);
    let world = SegmentWorld::new().with_segment(
        Vec2::new(4.0, -1.0),
        Vec2::new(4.0, 1.0),
        LayerMask::ALL,
    );
    assert!(is_visible(&pose, Vec2::new(3.0, 0.0), RADIUS, ANGLE, LayerMask::ALL, &world));
}

#[rstest]
fn occlusion_ray_is_limited_to_target_distance() {
    let mut caster = MockCaster::new();
    caster
        .expect_cast()
        .times(1)
        .withf(|_, _, max_distance, _| (*max_distance - 3.0).abs() < 1e-5)
        .returning(|_, _, _, _| Ok(None));
    let pose = Pose::new(Vec2::ZERO, 90.0);
    assert!(is_visible(&pose, Vec2::new(0.0, 3.0), RADIUS, ANGLE, LayerMask::ALL, &caster));
}

#[rstest]
fn service_errors_count_as_clear() {
    let mut caster = MockCaster::new();
    caster
        .expect_cast()
        .returning(|_, _, _, _| Err(RaycastError::Service("physics offline".into())));
    let pose = Pose::new(Vec2::ZERO, 0.0);
    assert_eq!(
        detect(&pose, Vec2::new(2.0, 0.0), RADIUS, ANGLE, LayerMask::ALL, &caster),
        Detection::Visible
    );
}

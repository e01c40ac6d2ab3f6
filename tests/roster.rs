//! Roster ticking, sighting events and thread-safety of guard state.
use glam::Vec2;
use lookout::guard::Guard;
use lookout::pose::Pose;
use lookout::raycast::{LayerMask, SegmentWorld};
use lookout::roster::{GuardId, GuardRoster, SightingEvent};
use rstest::{fixture, rstest};
use static_assertions::assert_impl_all;
use test_utils::cone_settings;

assert_impl_all!(Guard: Send, Sync, Clone);
assert_impl_all!(GuardRoster: Send, Sync);
assert_impl_all!(SightingEvent: Send, Sync, Copy);

const DT: f32 = 1.0 / 60.0;

fn stationary(position: Vec2, heading: f32) -> Guard {
    Guard::new(cone_settings(90.0, 5.0), vec![position], heading)
}

#[fixture]
fn roster() -> (GuardRoster, [GuardId; 3]) {
    let mut roster = GuardRoster::new();
    let mut spawn = |guard: Guard| roster.spawn(guard).expect("id available");
    let east = spawn(stationary(Vec2::ZERO, 0.0));
    let west = spawn(stationary(Vec2::new(8.0, 0.0), 180.0));
    let north = spawn(stationary(Vec2::new(4.0, -4.0), 90.0));
    (roster, [east, west, north])
}

#[rstest]
fn every_seeing_guard_reports_each_tick(roster: (GuardRoster, [GuardId; 3])) {
    let (mut roster, [east, west, north]) = roster;
    let target = Vec2::new(4.0, 0.0);
    for _ in 0..3 {
        let events = roster.tick_all(DT, &SegmentWorld::new(), Some(target));
        let ids: Vec<GuardId> = events.iter().map(|event| event.guard).collect();
        assert_eq!(ids, vec![east, west, north]);
        assert!(events.iter().all(|event| event.target == target));
    }
}

#[rstest]
fn walls_silence_blocked_guards(roster: (GuardRoster, [GuardId; 3])) {
    let (mut roster, [east, _, north]) = roster;
    let world = SegmentWorld::new().with_segment(
        Vec2::new(5.0, -1.0),
        Vec2::new(5.0, 1.0),
        LayerMask::ALL,
    );
    let events = roster.tick_all(DT, &world, Some(Vec2::new(4.0, 0.0)));
    let ids: Vec<GuardId> = events.iter().map(|event| event.guard).collect();
    assert_eq!(ids, vec![east, north]);
}

#[rstest]
fn event_carries_pose_at_detection() {
    let mut roster = GuardRoster::new();
    let settings = cone_settings(90.0, 5.0);
    let walker = roster
        .spawn(Guard::new(
            settings,
            vec![Vec2::ZERO, Vec2::new(0.0, 10.0)],
            0.0,
        ))
        .expect("id available");
    if let Some(guard) = roster.get_mut(walker) {
        guard.set_pose(Pose::new(Vec2::new(0.0, -1.0), 90.0));
    }
    let events = roster.tick_all(DT, &SegmentWorld::new(), Some(Vec2::new(0.0, 2.0)));
    assert_eq!(events.len(), 1);
    assert_eq!(events[0].guard_pose, Pose::new(Vec2::new(0.0, -1.0), 90.0));
    let moved = roster.get(walker).expect("still spawned").pose();
    assert!(moved.position.y > -1.0);
}

#[rstest]
fn despawned_guards_stop_reporting(roster: (GuardRoster, [GuardId; 3])) {
    let (mut roster, [east, west, north]) = roster;
    assert!(roster.despawn(west).is_some());
    let events = roster.tick_all(DT, &SegmentWorld::new(), Some(Vec2::new(4.0, 0.0)));
    let ids: Vec<GuardId> = events.iter().map(|event| event.guard).collect();
    assert_eq!(ids, vec![east, north]);
    assert!(roster.get(west).is_none());
}

#[rstest]
fn guards_tick_independently_across_threads() {
    let world = SegmentWorld::new();
    let mut guards: Vec<Guard> = (0..4_u8)
        .map(|i| {
            let x = f32::from(i) * 10.0;
            Guard::new(
                cone_settings(90.0, 5.0),
                vec![Vec2::new(x, 0.0), Vec2::new(x, 5.0)],
                0.0,
            )
        })
        .collect();
    std::thread::scope(|scope| {
        for guard in &mut guards {
            let world = &world;
            scope.spawn(move || {
                for _ in 0..30 {
                    guard.tick(DT, world, None);
                }
            });
        }
    });
    assert!(guards.iter().all(|guard| !guard.polygon().is_empty()));
}

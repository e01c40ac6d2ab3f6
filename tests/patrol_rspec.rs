//! Behavioural tests for a guard walking a two-point beat.
//!
//! These rspec-style tests drive a guard back and forth between two
//! waypoints and check where it stands and what it sees at each phase.
use glam::Vec2;
use lookout::config::GuardSettings;
use lookout::guard::Guard;
use lookout::patrol::PatrolMode;
use lookout::raycast::SegmentWorld;
use test_utils::cone_settings;

const DT: f32 = 0.1;

#[derive(Clone, Debug)]
struct Env {
    settings: GuardSettings,
    world: SegmentWorld,
}

impl Default for Env {
    fn default() -> Self {
        Self {
            settings: cone_settings(90.0, 5.0),
            world: SegmentWorld::new(),
        }
    }
}

impl Env {
    fn guard(&self) -> Guard {
        Guard::new(
            self.settings,
            vec![Vec2::ZERO, Vec2::new(2.0, 0.0)],
            0.0,
        )
    }

    fn run(&self, guard: &mut Guard, ticks: usize) {
        for _ in 0..ticks {
            guard.tick(DT, &self.world, None);
        }
    }
}

#[test]
fn guard_walks_its_beat() {
    rspec::run(&rspec::given("a guard on a two-point beat", Env::default(), |ctx| {
        ctx.then("it starts on the first waypoint", |env| {
            let guard = env.guard();
            assert_eq!(guard.pose().position, Vec2::ZERO);
            assert_eq!(guard.patrol().mode(), PatrolMode::Moving);
        });

        ctx.when("the first dwell has expired", |ctx| {
            ctx.then("it heads for the second waypoint", |env| {
                let mut guard = env.guard();
                let mut ticks = 0;
                while guard.patrol().cursor().index == 0 {
                    env.run(&mut guard, 1);
                    ticks += 1;
                    assert!(ticks < 20, "dwell never expired");
                }
                // One tick to arrive, about ten to dwell for a second.
                assert!((10..=12).contains(&ticks));
                assert_eq!(guard.pose().position, Vec2::ZERO);
                env.run(&mut guard, 1);
                assert!(guard.pose().position.x > 0.0);
                assert!(guard.pose().heading.abs() < 1e-4);
            });
        });

        ctx.when("it reaches the far end", |ctx| {
            ctx.then("it turns around to walk back", |env| {
                let mut guard = env.guard();
                let mut outbound = false;
                let mut turned = false;
                for _ in 0..60 {
                    env.run(&mut guard, 1);
                    outbound |= guard.patrol().cursor().index == 1;
                    if outbound && guard.patrol().cursor().index == 0 && guard.pose().position.x < 1.9 {
                        turned = true;
                        break;
                    }
                }
                assert!(turned, "guard never walked back");
                assert!((guard.pose().heading.abs() - 180.0).abs() < 1e-3);
            });

            ctx.then("its view follows the new heading", |env| {
                let mut guard = env.guard();
                env.run(&mut guard, 40);
                let forward = guard.pose().forward();
                assert!(guard.can_see(guard.pose().position + forward * 3.0, &env.world));
                assert!(!guard.can_see(guard.pose().position - forward * 3.0, &env.world));
            });
        });
    }));
}

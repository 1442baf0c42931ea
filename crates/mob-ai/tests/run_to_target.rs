use goal_selector::{Goal, GoalFlags, GoalSelector};
use mob_ai::testing::FakeMob;
use mob_ai::{BlockPos, EntityId, GameMode, Path, RunToTargetGoal, TargetInfo, Tick, Vec3};

const TARGET: EntityId = EntityId(7);

fn hunter() -> FakeMob {
    let mut mob = FakeMob::new(EntityId(1), Vec3::ORIGIN);
    mob.target = Some(TargetInfo::creature(TARGET, Vec3::new(20.0, 0.0, 0.0)));
    mob.navigation.planned = Some(Path::new(vec![
        BlockPos::new(1, 0, 0),
        BlockPos::new(20, 0, 0),
    ]));
    mob
}

fn run(selector: &mut GoalSelector<FakeMob>, mob: &mut FakeMob, ticks: std::ops::Range<u64>) {
    for tick in ticks {
        mob.time = Tick(tick);
        selector.step(mob, tick);
    }
}

/// Takes over movement once the world clock reaches `from`.
struct Flee {
    from: u64,
}

impl Goal<FakeMob> for Flee {
    fn can_start(&mut self, mob: &mut FakeMob) -> bool {
        mob.time.0 >= self.from
    }

    fn flags(&self) -> GoalFlags {
        GoalFlags::MOVE
    }
}

#[test]
fn chase_runs_until_target_is_close() {
    let mut selector = GoalSelector::new();
    let chase = selector.add_goal(2, Box::new(RunToTargetGoal::new(1.2, 12.0, 4.0, false)));
    let mut mob = hunter();

    run(&mut selector, &mut mob, 0..1);
    assert!(selector.is_active(chase));
    assert_eq!(selector.lock_owner(GoalFlags::MOVE), Some(chase));
    assert!(mob.aggressive);
    assert_eq!(mob.navigation.followed.len(), 1);
    assert_eq!(mob.navigation.move_requests, vec![(TARGET, 1.2)]);

    // Odd ticks only run every-tick goals; the chase keeps looking.
    run(&mut selector, &mut mob, 1..10);
    assert!(selector.is_active(chase));
    assert_eq!(mob.looked_at.len(), 10);

    mob.target = Some(TargetInfo::creature(TARGET, Vec3::new(2.0, 0.0, 0.0)));
    run(&mut selector, &mut mob, 10..11);

    assert!(!selector.is_active(chase));
    assert_eq!(mob.target, None);
    assert!(!mob.aggressive);
    assert!(mob.navigation.done);
    assert_eq!(mob.navigation.stop_calls, 1);
}

#[test]
fn chase_does_not_restart_within_check_interval() {
    let mut selector = GoalSelector::new();
    let chase = selector.add_goal(2, Box::new(RunToTargetGoal::new(1.0, 12.0, 4.0, false)));
    let mut mob = hunter();

    run(&mut selector, &mut mob, 0..1);
    assert!(selector.is_active(chase));

    // Navigation finishes: the chase ends and the target is forgotten.
    mob.navigation.done = true;
    run(&mut selector, &mut mob, 1..3);
    assert!(!selector.is_active(chase));

    mob.target = Some(TargetInfo::creature(TARGET, Vec3::new(20.0, 0.0, 0.0)));
    run(&mut selector, &mut mob, 3..20);
    assert!(!selector.is_active(chase));
    assert_eq!(mob.navigation.create_calls, 1);

    run(&mut selector, &mut mob, 20..21);
    assert!(selector.is_active(chase));
    assert_eq!(mob.navigation.create_calls, 2);
}

#[test]
fn higher_priority_goal_interrupts_chase() {
    let mut selector = GoalSelector::new();
    let flee = selector.add_goal(1, Box::new(Flee { from: 4 }));
    let chase = selector.add_goal(2, Box::new(RunToTargetGoal::new(1.0, 12.0, 4.0, false)));
    let mut mob = hunter();

    run(&mut selector, &mut mob, 0..4);
    assert!(selector.is_active(chase));

    run(&mut selector, &mut mob, 4..5);
    assert!(selector.is_active(flee));
    assert!(!selector.is_active(chase));
    assert!(!mob.aggressive);
    assert_eq!(mob.navigation.stop_calls, 1);
    assert_eq!(selector.lock_owner(GoalFlags::LOOK), None);
}

#[test]
fn exempt_observer_ends_chase_but_stays_targeted() {
    let mut selector = GoalSelector::new();
    let chase = selector.add_goal(2, Box::new(RunToTargetGoal::new(1.0, 12.0, 4.0, true)));
    let mut mob = hunter();
    let observer = TargetInfo::player(TARGET, Vec3::new(20.0, 0.0, 0.0), GameMode::Creative);
    mob.target = Some(observer);

    run(&mut selector, &mut mob, 0..1);
    assert!(selector.is_active(chase));

    run(&mut selector, &mut mob, 1..3);
    assert!(!selector.is_active(chase));
    assert_eq!(mob.target, Some(observer));
    assert!(!mob.aggressive);
}

#[test]
fn restriction_bounds_blind_chase() {
    let mut selector = GoalSelector::new();
    let chase = selector.add_goal(2, Box::new(RunToTargetGoal::new(1.0, 12.0, 4.0, true)));
    let mut mob = hunter();
    mob.line_of_sight = false;
    mob.restriction = Some((BlockPos::new(0, 0, 0), 32.0));

    run(&mut selector, &mut mob, 0..6);
    assert!(selector.is_active(chase));
    assert_eq!(mob.line_of_sight_checks, 0);

    mob.target = Some(TargetInfo::creature(TARGET, Vec3::new(40.0, 0.0, 0.0)));
    run(&mut selector, &mut mob, 6..7);
    assert!(!selector.is_active(chase));
}

use super::*;
use crate::action::ActionHandler;
use crate::env::{ConfigOracle, PlayerForm};
use crate::state::{ActorId, BgCheckFlags, Vec3f};
use crate::testing::{FakeConfig, FakeHost, FakeWorld, HostCall, idle_table, spawned_dog};

fn update(
    dog: &mut DogState,
    host: &mut FakeHost,
    world: &FakeWorld,
    config: Option<&FakeConfig>,
    table: &ActionTable,
) -> FrameOutcome {
    let hooks = default_hooks();
    let env = DogEnv::new(world, config.map(|c| c as &dyn ConfigOracle));
    DogEngine::new(dog, table, &hooks).update(&env, host)
}

fn bark_then_sit(dog: &mut DogState, _host: &mut dyn DogHost, _frame: &FrameInputs) {
    dog.action = DogAction::SitNextToPlayer;
}

fn noop(_dog: &mut DogState, _host: &mut dyn DogHost, _frame: &FrameInputs) {}

/// Answers the single-value reads differently from the combined read.
struct SplitConfig;

impl ConfigOracle for SplitConfig {
    fn dog_behavior(&self) -> DogBehaviorOption {
        DogBehaviorOption::None
    }

    fn settings(&self) -> (DogBehaviorOption, DogConfig) {
        let tuning = DogConfig {
            player_run_speed: 0.5,
            ..DogConfig::default()
        };
        (DogBehaviorOption::Goron, tuning)
    }
}

#[test]
fn frame_inputs_come_from_one_settings_read() {
    let world = FakeWorld::default();
    let env = DogEnv::with_config(&world, &SplitConfig);

    let frame = FrameInputs::sample(&env);

    assert_eq!(frame.option, DogBehaviorOption::Goron);
    assert_eq!(frame.tuning.player_run_speed, 0.5);
}

#[test]
fn cutscene_freezes_everything_but_the_selected_index() {
    let mut dog = spawned_dog();
    dog.body.bg_check = BgCheckFlags::WATER_TOUCH;
    let mut world = FakeWorld::locked_in_clock_tower();
    world.selected.index = 4;
    let mut host = FakeHost::default();

    let outcome = update(
        &mut dog,
        &mut host,
        &world,
        Some(&FakeConfig(DogBehaviorOption::Zora)),
        &idle_table(),
    );

    assert!(outcome.is_frozen());
    assert_eq!(outcome.action_ran, None);
    assert_eq!(dog.selected_dog_index, 4);
    assert_eq!(dog.action, DogAction::IdleMove);
    assert!(host.calls.is_empty());
}

#[test]
fn locked_player_outside_clock_tower_still_updates() {
    let mut dog = spawned_dog();
    let mut world = FakeWorld::locked_in_clock_tower();
    world.scene = SceneId::Other;
    let mut host = FakeHost::default();

    let outcome = update(&mut dog, &mut host, &world, None, &idle_table());

    assert!(!outcome.is_frozen());
    assert_eq!(host.count(HostCall::UpdateSkeleton), 1);
}

#[test]
fn spawn_tag_is_demoted_on_first_update() {
    let mut dog = spawned_dog();
    let mut host = FakeHost::default();
    let world = FakeWorld::default();

    let outcome = update(&mut dog, &mut host, &world, None, &idle_table());

    assert_eq!(outcome.behavior_after, DogBehavior::Default);
    assert_eq!(outcome.decision, Decision::Unchanged);
    assert_eq!(host.count(HostCall::SetupIdleMove), 0);
    assert_eq!(dog.frames, 1);
}

#[test]
fn human_tag_after_spawn_returns_to_default_through_selector() {
    let mut dog = spawned_dog();
    let mut host = FakeHost::default();
    let world = FakeWorld::default();
    let table = idle_table();

    update(&mut dog, &mut host, &world, None, &table);
    dog.behavior = DogBehavior::Human;
    let outcome = update(&mut dog, &mut host, &world, None, &table);

    assert_eq!(outcome.decision, Decision::ReturnToDefault);
    assert_eq!(dog.behavior, DogBehavior::Default);
    assert_eq!(host.count(HostCall::SetupIdleMove), 1);
}

#[test]
fn zora_running_player_installs_and_runs_approach() {
    let mut dog = spawned_dog();
    dog.body.xz_dist_to_player = 120.0;
    let mut host = FakeHost::default();

    let outcome = update(
        &mut dog,
        &mut host,
        &FakeWorld::with_speed(4.0),
        Some(&FakeConfig(DogBehaviorOption::Zora)),
        &idle_table(),
    );

    assert_eq!(
        outcome.decision,
        Decision::Override(DogBehaviorOption::Zora)
    );
    assert_eq!(outcome.action_ran, Some(DogAction::ApproachPlayer));
    assert_eq!(dog.behavior, DogBehavior::Zora);
    assert_eq!(dog.skel.animation, DogAnimation::Run);
}

#[test]
fn zora_standing_player_keeps_dog_waiting() {
    let mut dog = spawned_dog();
    let mut host = FakeHost::default();

    let outcome = update(
        &mut dog,
        &mut host,
        &FakeWorld::with_speed(0.0),
        Some(&FakeConfig(DogBehaviorOption::Zora)),
        &idle_table(),
    );

    assert_eq!(dog.behavior, DogBehavior::ZoraWait);
    assert_eq!(outcome.action_ran, Some(DogAction::IdleMove));
    assert_eq!(host.count(HostCall::SetupIdleMove), 1);
}

#[test]
fn swim_setup_overrides_selected_routine() {
    let mut dog = spawned_dog();
    dog.body.bg_check = BgCheckFlags::WATER_TOUCH;
    let mut host = FakeHost::default();

    let outcome = update(
        &mut dog,
        &mut host,
        &FakeWorld::with_speed(4.0),
        Some(&FakeConfig(DogBehaviorOption::Zora)),
        &idle_table(),
    );

    assert!(outcome.entered_swim);
    assert_eq!(outcome.action_ran, Some(DogAction::SetupSwim));
    assert_eq!(dog.skel.animation, DogAnimation::Swim);
    let swim_animation = HostCall::ChangeAnimation(DogAnimation::Swim);
    assert!(host.calls.contains(&swim_animation));
}

#[test]
fn carried_dog_does_not_start_swimming() {
    let mut dog = spawned_dog();
    dog.body.bg_check = BgCheckFlags::WATER_TOUCH;
    dog.body.parent = Some(ActorId::PLAYER);
    let mut host = FakeHost::default();
    let world = FakeWorld::default();

    let outcome = update(&mut dog, &mut host, &world, None, &idle_table());

    assert!(!outcome.entered_swim);
    assert_eq!(outcome.action_ran, Some(DogAction::IdleMove));
}

#[test]
fn hooks_see_the_routine_that_ran() {
    let table = ActionTable::builder()
        .handler(DogAction::IdleBark, bark_then_sit)
        .fallback(Arc::new(noop) as Arc<dyn ActionHandler>)
        .build()
        .unwrap();
    let mut dog = spawned_dog();
    dog.behavior = DogBehavior::Default;
    dog.action = DogAction::IdleBark;
    dog.body.xz_dist_to_player = 1_000.0;
    let mut host = FakeHost::default();

    let outcome = update(
        &mut dog,
        &mut host,
        &FakeWorld::default(),
        Some(&FakeConfig(DogBehaviorOption::Deku)),
        &table,
    );

    assert_eq!(outcome.action_ran, Some(DogAction::IdleBark));
    assert_eq!(outcome.action_after, DogAction::SitNextToPlayer);
    assert_eq!(outcome.hooks_fired.as_slice(), &["allow_idle_bark_pickup"]);
    assert_eq!(host.count(HostCall::TryPickUp), 1);

    let position = |call: HostCall| host.calls.iter().position(|c| *c == call);
    let pickup = position(HostCall::TryPickUp);
    assert!(pickup < position(HostCall::UpdateCylinder));
}

#[test]
fn successful_pickup_switches_to_held() {
    let mut dog = spawned_dog();
    dog.body.xz_dist_to_player = 1_000.0;
    let mut host = FakeHost {
        pickup_succeeds: true,
        ..FakeHost::default()
    };

    let outcome = update(
        &mut dog,
        &mut host,
        &FakeWorld::default(),
        Some(&FakeConfig(DogBehaviorOption::Goron)),
        &idle_table(),
    );

    assert_eq!(outcome.hooks_fired.as_slice(), &["allow_idle_move_pickup"]);
    assert_eq!(dog.action, DogAction::Held);
    assert!(!outcome.obstacle_collision);
}

#[test]
fn no_pickup_without_configuration() {
    let mut dog = spawned_dog();
    let mut host = FakeHost::default();
    let world = FakeWorld::default();

    let outcome = update(&mut dog, &mut host, &world, None, &idle_table());

    assert!(outcome.hooks_fired.is_empty());
    assert_eq!(host.count(HostCall::TryPickUp), 0);
}

#[test]
fn unknown_stored_value_behaves_as_unset() {
    let mut configured = spawned_dog();
    let mut unset = spawned_dog();
    configured.behavior = DogBehavior::GoronWait;
    unset.behavior = DogBehavior::GoronWait;
    configured.frames = 10;
    unset.frames = 10;
    let mut host_a = FakeHost::default();
    let mut host_b = FakeHost::default();
    let world = FakeWorld::with_speed(3.0);
    let table = idle_table();

    let a = update(
        &mut configured,
        &mut host_a,
        &world,
        Some(&FakeConfig(DogBehaviorOption::from_raw(9))),
        &table,
    );
    let b = update(&mut unset, &mut host_b, &world, None, &table);

    assert_eq!(a, b);
    assert_eq!(a.decision, Decision::ReturnToDefault);
    assert_eq!(configured, unset);
    assert_eq!(host_a.calls, host_b.calls);
}

#[test]
fn stock_form_reaction_runs_when_unconfigured() {
    let mut dog = spawned_dog();
    let mut host = FakeHost {
        react_to_form: true,
        form_reaction: DogAction::BarkAtGoron,
        ..FakeHost::default()
    };

    let outcome = update(
        &mut dog,
        &mut host,
        &FakeWorld::default().form(PlayerForm::Goron),
        None,
        &idle_table(),
    );

    assert_eq!(outcome.decision, Decision::FormReaction);
    assert_eq!(outcome.action_ran, Some(DogAction::BarkAtGoron));
}

#[test]
fn forced_goron_arms_jump_attack_hitbox() {
    let mut dog = spawned_dog();
    dog.behavior = DogBehavior::Goron;
    dog.action = DogAction::JumpAttack;
    let mut host = FakeHost::default();

    let outcome = update(
        &mut dog,
        &mut host,
        &FakeWorld::default(),
        Some(&FakeConfig(DogBehaviorOption::Goron)),
        &idle_table(),
    );

    assert!(outcome.attack_collision);
    assert!(host.calls.contains(&HostCall::RegisterAttack));
}

#[test]
fn unconfigured_deku_player_arms_jump_attack_hitbox() {
    let mut dog = spawned_dog();
    dog.action = DogAction::JumpAttack;
    let mut host = FakeHost::default();

    let outcome = update(
        &mut dog,
        &mut host,
        &FakeWorld::default().form(PlayerForm::Deku),
        None,
        &idle_table(),
    );

    assert!(outcome.attack_collision);
}

#[test]
fn tilt_eases_toward_floor_each_frame() {
    let mut dog = spawned_dog();
    let mut host = FakeHost {
        floor: Vec3f::new(1.0, 2.0, -1.0),
        ..FakeHost::default()
    };
    let world = FakeWorld::default();
    let table = idle_table();

    update(&mut dog, &mut host, &world, None, &table);
    assert!((dog.cur_rot.x - 0.1).abs() < 1e-6);
    assert!((dog.cur_rot.z + 0.1).abs() < 1e-6);
    assert_eq!(dog.cur_rot.y, 0.0);

    for _ in 0..60 {
        update(&mut dog, &mut host, &world, None, &table);
    }
    assert!((dog.cur_rot.x - 1.0).abs() < 0.01);
}

#[test]
fn frame_ends_with_collision_then_skeleton() {
    let mut dog = spawned_dog();
    let mut host = FakeHost::default();
    let world = FakeWorld::default();

    update(&mut dog, &mut host, &world, None, &idle_table());

    assert_eq!(
        host.calls,
        vec![
            HostCall::UpdateCylinder,
            HostCall::ResetAttack,
            HostCall::RegisterObstacle,
            HostCall::UpdateGroundContact,
            HostCall::UpdateSkeleton,
        ]
    );
}

#[test]
fn configuration_change_is_seen_next_frame() {
    let mut dog = spawned_dog();
    let mut host = FakeHost::default();
    let world = FakeWorld::with_speed(2.0);
    let table = idle_table();

    update(&mut dog, &mut host, &world, None, &table);
    assert_eq!(dog.behavior, DogBehavior::Default);

    update(
        &mut dog,
        &mut host,
        &world,
        Some(&FakeConfig(DogBehaviorOption::Deku)),
        &table,
    );
    assert_eq!(dog.behavior, DogBehavior::Deku);
    assert_eq!(dog.action, DogAction::ApproachPlayerToAttack);
}

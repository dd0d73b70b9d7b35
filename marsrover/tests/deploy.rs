//! End-to-end deployment scenarios: parse, replay, settle.

use marsrover::{DeployError, Deployment, DeploymentEngine, Direction, Position};

fn deploy(engine: &mut DeploymentEngine, coordinates: &str, commands: &str) -> Deployment {
    engine
        .deploy(coordinates, commands)
        .expect("deployment should succeed")
}

#[test]
fn invalid_coordinates_format_is_rejected() {
    let mut engine = DeploymentEngine::new();
    let err = engine.deploy("3 4 N", "f,f,f,f").unwrap_err();
    assert_eq!(err, DeployError::InvalidFormat);
    assert_eq!(
        err.to_string(),
        "invalid coordinates; specify in the format of e.g. 3,4,N"
    );
}

#[test]
fn invalid_coordinates_length_is_rejected() {
    let mut engine = DeploymentEngine::new();
    assert_eq!(
        engine.deploy("3,4", "f,f,f,f"),
        Err(DeployError::InvalidFormat)
    );
}

#[test]
fn invalid_commands_format_is_rejected_naming_the_token() {
    let mut engine = DeploymentEngine::new();
    let err = engine.deploy("3,4,N", "f f f f").unwrap_err();
    assert_eq!(err, DeployError::InvalidCommand("f f f f".to_owned()));
    assert_eq!(err.to_string(), "invalid command: f f f f");
}

#[test]
fn invalid_direction_is_rejected_naming_the_token() {
    let mut engine = DeploymentEngine::new();
    let err = engine.deploy("3,4,Hello", "f,f,f,f").unwrap_err();
    assert_eq!(err, DeployError::InvalidDirection("Hello".to_owned()));
    assert_eq!(err.to_string(), "invalid direction: Hello");
}

#[test]
fn deploying_onto_a_settled_rover_is_rejected() {
    let mut engine = DeploymentEngine::new();
    deploy(&mut engine, "1,1,N", "l");
    assert_eq!(
        engine.deploy("1,1,N", "l"),
        Err(DeployError::OccupiedStart)
    );
}

#[test]
fn deployment_outside_the_grid_is_rejected() {
    let mut engine = DeploymentEngine::new();
    assert_eq!(
        engine.deploy("100,200,N", "l"),
        Err(DeployError::OutOfBounds)
    );
    // 99 is the first index past the edge.
    assert_eq!(engine.deploy("99,0,N", "l"), Err(DeployError::OutOfBounds));
    assert_eq!(engine.deploy("0,99,N", "l"), Err(DeployError::OutOfBounds));
}

#[test]
fn driving_off_the_grid_aborts_the_deployment() {
    let mut engine = DeploymentEngine::new();
    assert_eq!(
        engine.deploy("97,97,N", "f,f,f"),
        Err(DeployError::OutOfBounds)
    );
    // The aborted rover settled nowhere: its path is still free.
    deploy(&mut engine, "97,97,N", "l");
    deploy(&mut engine, "98,97,N", "l");
}

#[test]
fn turning_follows_the_clockwise_cycle() {
    let cases = [
        ("10,10,N", "r", Direction::East),
        ("11,11,N", "l", Direction::West),
        ("12,12,N", "r,r", Direction::South),
        ("13,13,N", "l,l,l,l", Direction::North),
        ("14,14,E", "l", Direction::North),
        ("15,15,E", "r", Direction::South),
        ("16,16,E", "r,r", Direction::West),
        ("17,17,E", "l,l,l,l", Direction::East),
        ("18,18,S", "l", Direction::East),
        ("19,19,S", "l,l", Direction::North),
        ("20,20,S", "r", Direction::West),
        ("21,21,S", "r,r,r,r", Direction::South),
        ("22,22,W", "l", Direction::South),
        ("23,23,W", "l,l", Direction::East),
        ("24,24,W", "r", Direction::North),
        ("25,25,W", "r,r,r,r", Direction::West),
    ];
    let mut engine = DeploymentEngine::new();
    for (coordinates, commands, expected) in cases {
        let deployment = deploy(&mut engine, coordinates, commands);
        assert_eq!(
            deployment.facing, expected,
            "{coordinates} {commands} should face {expected}"
        );
        // Turning never moves the rover off its start cell.
        let start: Vec<&str> = coordinates.split(',').collect();
        assert_eq!(
            deployment.position,
            Position::new(start[0].parse().unwrap(), start[1].parse().unwrap())
        );
    }
}

#[test]
fn turn_right_leaves_the_rover_in_place() {
    let mut engine = DeploymentEngine::new();
    let deployment = deploy(&mut engine, "10,10,N", "r");
    assert_eq!(deployment.position, Position::new(10, 10));
    assert_eq!(deployment.facing, Direction::East);
}

#[test]
fn forward_advances_x_when_facing_north() {
    let mut engine = DeploymentEngine::new();
    let deployment = deploy(&mut engine, "30,30,N", "f,f,f,f");
    assert_eq!(deployment.position, Position::new(34, 30));
    assert_eq!(deployment.facing, Direction::North);
}

#[test]
fn backward_retreats_x_when_facing_north() {
    let mut engine = DeploymentEngine::new();
    let deployment = deploy(&mut engine, "31,31,N", "b,b,b,b");
    assert_eq!(deployment.position, Position::new(27, 31));
    assert_eq!(deployment.facing, Direction::North);
}

#[test]
fn turn_right_then_forward_advances_y() {
    let mut engine = DeploymentEngine::new();
    let deployment = deploy(&mut engine, "42,42,N", "r,f,f,f,f");
    assert_eq!(deployment.position, Position::new(42, 46));
    assert_eq!(deployment.facing, Direction::East);
}

#[test]
fn turn_right_then_backward_retreats_y() {
    let mut engine = DeploymentEngine::new();
    let deployment = deploy(&mut engine, "43,43,N", "r,b,b,b,b");
    assert_eq!(deployment.position, Position::new(43, 39));
    assert_eq!(deployment.facing, Direction::East);
}

#[test]
fn turn_left_then_forward_retreats_y() {
    let mut engine = DeploymentEngine::new();
    let deployment = deploy(&mut engine, "44,44,N", "l,f,f,f,f");
    assert_eq!(deployment.position, Position::new(44, 40));
    assert_eq!(deployment.facing, Direction::West);
}

#[test]
fn turn_left_then_backward_advances_y() {
    let mut engine = DeploymentEngine::new();
    let deployment = deploy(&mut engine, "45,45,N", "l,b,b,b,b");
    assert_eq!(deployment.position, Position::new(45, 49));
    assert_eq!(deployment.facing, Direction::West);
}

#[test]
fn collision_halts_one_cell_short() {
    let mut engine = DeploymentEngine::new();
    // Settle a rover at (70,70).
    deploy(&mut engine, "70,70,N", "r");

    // A second rover drives toward it and halts just before contact.
    let deployment = deploy(&mut engine, "68,70,N", "f,f");
    assert_eq!(deployment.position, Position::new(69, 70));
    assert_eq!(deployment.facing, Direction::North);

    // The halted cell is settled too.
    assert_eq!(
        engine.deploy("69,70,N", "l"),
        Err(DeployError::OccupiedStart)
    );
}

#[test]
fn collision_drops_the_remaining_commands() {
    let mut engine = DeploymentEngine::new();
    deploy(&mut engine, "50,50,N", "r");

    // The trailing turns and moves after the collision never run, so the
    // rover keeps the facing it had when it was blocked.
    let deployment = deploy(&mut engine, "48,50,N", "f,f,l,f,f");
    assert_eq!(deployment.position, Position::new(49, 50));
    assert_eq!(deployment.facing, Direction::North);
}

#[test]
fn collision_on_the_first_move_settles_at_the_start() {
    let mut engine = DeploymentEngine::new();
    deploy(&mut engine, "60,60,N", "r");

    let deployment = deploy(&mut engine, "59,60,N", "f,l");
    assert_eq!(deployment.position, Position::new(59, 60));
    assert_eq!(deployment.facing, Direction::North);

    // The start cell is now settled.
    assert_eq!(
        engine.deploy("59,60,E", "r"),
        Err(DeployError::OccupiedStart)
    );
}

#[test]
fn settled_rovers_accumulate_across_deployments() {
    let mut engine = DeploymentEngine::new();
    deploy(&mut engine, "5,5,E", "f,f");
    deploy(&mut engine, "5,9,W", "f");

    // (5,7) and (5,8) are settled; a rover driving east along row 5 from
    // (5,6) is blocked immediately.
    let deployment = deploy(&mut engine, "5,6,E", "f,f,f");
    assert_eq!(deployment.position, Position::new(5, 6));
    assert_eq!(deployment.facing, Direction::East);
}

//! Player control: turns intents into heading changes and thrust.

use hecs::{Entity, World};

use tankwar_core::components::{Motion, PlayerStats, Turret};
use tankwar_core::constants::{
    CANON_ROTATE_SPEED, FUEL_SPEED_FACTOR, PLAYER_SPEED, PLAYER_TURN_SPEED,
};
use tankwar_core::types::{wrap_degrees, Transform};

use crate::intents::Intents;
use crate::steering;

/// Apply keyboard turn and thrust intents to the tank.
/// The turn is applied first, so thrust follows the new heading.
pub fn steer(world: &mut World, tank: Entity, intents: &Intents) {
    let fuel = match world.get::<&PlayerStats>(tank) {
        Ok(stats) => stats.fuel,
        Err(_) => return,
    };

    let Ok((transform, motion)) = world.query_one_mut::<(&mut Transform, &mut Motion)>(tank)
    else {
        return;
    };

    transform.rotate(steering::turn_delta(
        intents.tank_left,
        intents.tank_right,
        PLAYER_TURN_SPEED,
    ));

    motion.change += steering::thrust_displacement(
        transform.angle,
        intents.tank_forward,
        intents.tank_backward,
        PLAYER_SPEED,
        fuel,
        FUEL_SPEED_FACTOR,
    );
}

/// Apply the joystick X axis to the tank heading, at keyboard turn speed.
pub fn apply_joystick(world: &mut World, tank: Entity, intents: &Intents) {
    if let Ok(mut transform) = world.get::<&mut Transform>(tank) {
        transform.rotate(steering::joystick_turn(
            intents.joystick_x,
            PLAYER_TURN_SPEED,
        ));
    }
}

/// Rotate the turret relative to its host while a canon-turn intent is held.
pub fn turn_turret(world: &mut World, turret: Entity, intents: &Intents) {
    if let Ok(mut state) = world.get::<&mut Turret>(turret) {
        let delta =
            steering::turn_delta(intents.canon_left, intents.canon_right, CANON_ROTATE_SPEED);
        state.relative_angle = wrap_degrees(state.relative_angle + delta);
    }
}

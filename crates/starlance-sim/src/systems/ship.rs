//! Ship movement system.
//!
//! The ship chases the unprojected pointer position on the depth-zero
//! plane with a per-frame exponential lag, clamped to the visible
//! playfield. Bank is proportional to the instantaneous lag distance,
//! rolling the hull against the turn direction.

use glam::Vec3;
use hecs::World;

use starlance_core::components::{Bank, PlayerShip, Position};
use starlance_core::constants::{BANK_FACTOR, SHIP_FLOOR_Y, SHIP_LAG, SHIP_MARGIN};
use starlance_core::input::InputState;
use starlance_core::projection;

pub fn run(world: &mut World, input: &InputState, width: f32, height: f32) {
    // World-space screen bounds at depth zero, from the two opposite
    // screen corners.
    let corner_a = match projection::unproject(-1.0, -1.0, 0.0, width, height) {
        Some(p) => p,
        None => return,
    };
    let corner_b = match projection::unproject(1.0, 1.0, 0.0, width, height) {
        Some(p) => p,
        None => return,
    };
    let min_x = corner_a.x.min(corner_b.x) + SHIP_MARGIN;
    let max_x = corner_a.x.max(corner_b.x) - SHIP_MARGIN;
    let min_y = corner_a.y.min(corner_b.y).max(SHIP_FLOOR_Y);
    let max_y = corner_a.y.max(corner_b.y) - SHIP_MARGIN;

    let raw = match projection::unproject(input.pointer.x, input.pointer.y, 0.0, width, height)
    {
        Some(p) => p,
        None => return,
    };
    let target = Vec3::new(raw.x.clamp(min_x, max_x), raw.y.clamp(min_y, max_y), 0.0);

    for (_entity, (_ship, pos, bank)) in
        world.query_mut::<(&PlayerShip, &mut Position, &mut Bank)>()
    {
        pos.0.x += (target.x - pos.0.x) * SHIP_LAG;
        pos.0.y += (target.y - pos.0.y) * SHIP_LAG;
        bank.0 = (pos.0.x - target.x) * BANK_FACTOR;
    }
}

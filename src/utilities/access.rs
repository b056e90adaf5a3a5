use super::clearance::ClearanceLevel;

/// Whether an agent with `clearance` may leave the car at `floor`.
///
/// The lobby is open to everyone and floor 1 needs at least `Medium`. Every
/// floor above that needs `High`; the top floor of a building with four or
/// more floors is matched by equality rather than ordering. Floors outside
/// the building are never accessible.
pub fn can_access(clearance: ClearanceLevel, floor: u8, num_floors: u8) -> bool {
    if floor >= num_floors {
        return false
    }
    match floor {
        0 => true,
        1 => clearance >= ClearanceLevel::Medium,
        f if f == num_floors - 1 && f >= 3 => clearance == ClearanceLevel::High,
        _ => clearance >= ClearanceLevel::High,
    }
}

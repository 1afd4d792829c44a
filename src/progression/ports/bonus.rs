//! Source of the random point bonus added to generated tasks.

/// Largest bonus the generator will add to a task's base points.
pub const MAX_POINT_BONUS: u32 = 5;

/// Supplies one bonus per generated task.
///
/// Implementations may return any value; the generator clamps it to
/// `0..=MAX_POINT_BONUS`. The bonus never influences unlock or gating rules.
pub trait PointBonus {
    /// Draws the bonus for the next generated task.
    fn next_bonus(&mut self) -> u32;
}

impl<B: PointBonus + ?Sized> PointBonus for &mut B {
    fn next_bonus(&mut self) -> u32 {
        (**self).next_bonus()
    }
}

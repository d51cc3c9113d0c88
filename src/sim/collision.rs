//! Collision detection and catch scoring
//!
//! The cart is a band anchored to the bottom edge. An item touches it on the
//! first tick its bottom edge drops below the cart's top line while its
//! horizontal span overlaps the cart. This is a single sample per tick against
//! the cart's current position; there is no swept test, so the cart and an item
//! that cross paths between two samples never register.

use glam::Vec2;

use super::rewards::RewardKind;
use super::state::{Cart, Tally};
use crate::consts::*;

/// Check whether a square sprite (top-left at `pos`, side `size`) touches the cart
#[inline]
pub fn cart_catches(cart: &Cart, pos: Vec2, size: f32) -> bool {
    pos.y + size > PLAYFIELD_HEIGHT - CART_HEIGHT && pos.x + size > cart.left() && pos.x < cart.right()
}

/// Check whether a sprite has fallen past the bottom edge
#[inline]
pub fn below_playfield(pos: Vec2) -> bool {
    pos.y >= PLAYFIELD_HEIGHT
}

/// Credit a caught reward to the score and its tally slot
#[inline]
pub fn credit_reward(score: &mut u64, tally: &mut Tally, kind: RewardKind) {
    *score += kind.value() as u64;
    tally.increment(kind);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn centered_cart() -> Cart {
        Cart::default()
    }

    #[test]
    fn test_catch_directly_above_cart() {
        let cart = centered_cart();
        // Bottom edge one pixel past the cart's top line
        let pos = Vec2::new(cart.x - REWARD_SIZE / 2.0, PLAYFIELD_HEIGHT - CART_HEIGHT - REWARD_SIZE + 1.0);
        assert!(cart_catches(&cart, pos, REWARD_SIZE));
    }

    #[test]
    fn test_no_catch_resting_on_top_line() {
        let cart = centered_cart();
        let pos = Vec2::new(cart.x, PLAYFIELD_HEIGHT - CART_HEIGHT - REWARD_SIZE);
        assert!(!cart_catches(&cart, pos, REWARD_SIZE));
    }

    #[test]
    fn test_horizontal_edges_are_exclusive() {
        let cart = centered_cart();
        let y = PLAYFIELD_HEIGHT - CART_HEIGHT;

        // Right edge of sprite exactly at the cart's left edge
        let touching_left = Vec2::new(cart.left() - HAZARD_SIZE, y);
        assert!(!cart_catches(&cart, touching_left, HAZARD_SIZE));

        // Left edge of sprite exactly at the cart's right edge
        let touching_right = Vec2::new(cart.right(), y);
        assert!(!cart_catches(&cart, touching_right, HAZARD_SIZE));

        // One pixel of overlap on either side
        assert!(cart_catches(&cart, touching_left + Vec2::X, HAZARD_SIZE));
        assert!(cart_catches(&cart, touching_right - Vec2::X, HAZARD_SIZE));
    }

    #[test]
    fn test_below_playfield() {
        assert!(!below_playfield(Vec2::new(0.0, PLAYFIELD_HEIGHT - 0.5)));
        assert!(below_playfield(Vec2::new(0.0, PLAYFIELD_HEIGHT)));
    }

    #[test]
    fn test_credit_reward() {
        let mut score = 7;
        let mut tally = Tally::default();
        credit_reward(&mut score, &mut tally, RewardKind::Gem);
        assert_eq!(score, 17);
        assert_eq!(tally.get(RewardKind::Gem), 1);
        assert_eq!(tally.total(), 1);
    }
}

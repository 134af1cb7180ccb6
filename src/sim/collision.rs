//! Collision and scoring evaluation
//!
//! Runs once per playing tick after all positions have been updated:
//! ground first, then scoring, then obstacle penetration. Obstacles are
//! visited oldest first and the first fatal hit ends the evaluation.

use serde::{Deserialize, Serialize};

use super::body::Body;
use super::modifiers::Modifiers;
use super::obstacles::{Obstacle, ObstaclePool};
use crate::config::GameConfig;

/// What ended the run
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Collision {
    Ground,
    /// Index into the obstacle sequence at the time of the hit
    Obstacle { index: usize },
}

/// Result of one evaluation pass
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Evaluation {
    /// Obstacles newly passed this tick
    pub passed: u32,
    /// Terminal collision, if any
    pub collision: Option<Collision>,
}

/// Ground test. Clamps the body onto the ground line when it reaches it.
/// Returns true if the contact is fatal.
pub fn check_ground(body: &mut Body, modifiers: &Modifiers, config: &GameConfig) -> bool {
    let ground = config.ground_line();
    if body.bottom() < ground {
        return false;
    }
    body.pos.y = ground - body.radius;
    if modifiers.invincible {
        // Stop sinking so the contact does not repeat every tick
        body.vel_y = 0.0;
        false
    } else {
        true
    }
}

/// Whether the obstacle is entirely behind the body
pub fn is_passed(body: &Body, obstacle: &Obstacle, width: f32) -> bool {
    obstacle.right(width) < body.left()
}

/// Whether the body touches the solid part of an obstacle
pub fn hits_obstacle(body: &Body, obstacle: &Obstacle, width: f32) -> bool {
    let overlaps_x = body.right() > obstacle.x && body.left() < obstacle.right(width);
    overlaps_x && (body.top() < obstacle.gap_top || body.bottom() > obstacle.gap_bottom())
}

/// Mark newly passed obstacles as scored. Each obstacle scores at most once.
pub fn score_passed(body: &Body, obstacles: &mut ObstaclePool, config: &GameConfig) -> u32 {
    let mut passed = 0;
    for obstacle in obstacles.iter_mut() {
        if !obstacle.scored && is_passed(body, obstacle, config.obstacle_width) {
            obstacle.scored = true;
            passed += 1;
        }
    }
    passed
}

/// First obstacle the body penetrates, oldest first
pub fn first_hit(body: &Body, obstacles: &ObstaclePool, config: &GameConfig) -> Option<usize> {
    obstacles
        .iter()
        .position(|o| hits_obstacle(body, o, config.obstacle_width))
}

/// Full evaluation for one tick
pub fn evaluate(
    body: &mut Body,
    obstacles: &mut ObstaclePool,
    modifiers: &Modifiers,
    config: &GameConfig,
) -> Evaluation {
    if check_ground(body, modifiers, config) {
        return Evaluation {
            passed: 0,
            collision: Some(Collision::Ground),
        };
    }

    let passed = score_passed(body, obstacles, config);

    let collision = if modifiers.invincible {
        None
    } else {
        first_hit(body, obstacles, config).map(|index| Collision::Obstacle { index })
    };

    Evaluation { passed, collision }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::consts::*;
    use proptest::prelude::*;

    fn body_at(y: f32) -> Body {
        let config = GameConfig::new();
        let mut body = Body::new(&config);
        body.pos.y = y;
        body
    }

    #[test]
    fn test_ground_clamps_and_kills() {
        let config = GameConfig::new();
        let mut body = body_at(config.ground_line() - 1.0);
        let mut pool = ObstaclePool::new();

        let eval = evaluate(&mut body, &mut pool, &Modifiers::default(), &config);
        assert_eq!(eval.collision, Some(Collision::Ground));
        assert_eq!(body.pos.y, WORLD_HEIGHT - GROUND_HEIGHT - BODY_RADIUS);
    }

    #[test]
    fn test_ground_with_invincibility_stops_sinking() {
        let config = GameConfig::new();
        let mut body = body_at(config.ground_line());
        body.vel_y = 400.0;
        let mods = Modifiers {
            invincible: true,
            ..Default::default()
        };
        let mut pool = ObstaclePool::new();

        let eval = evaluate(&mut body, &mut pool, &mods, &config);
        assert_eq!(eval.collision, None);
        assert_eq!(body.vel_y, 0.0);
        assert_eq!(body.bottom(), config.ground_line());
    }

    #[test]
    fn test_top_edge_above_gap_collides() {
        let config = GameConfig::new();
        // Gap [100, 250], body centered inside the obstacle's span
        let mut pool = ObstaclePool::new();
        pool.push(Obstacle::new(BODY_X - 20.0, 100.0, 150.0));
        let mut body = body_at(90.0);

        let eval = evaluate(&mut body, &mut pool, &Modifiers::default(), &config);
        assert_eq!(eval.collision, Some(Collision::Obstacle { index: 0 }));
    }

    #[test]
    fn test_body_inside_gap_is_safe() {
        let config = GameConfig::new();
        let mut pool = ObstaclePool::new();
        pool.push(Obstacle::new(BODY_X - 20.0, 100.0, 150.0));
        let mut body = body_at(175.0);

        let eval = evaluate(&mut body, &mut pool, &Modifiers::default(), &config);
        assert_eq!(eval, Evaluation::default());
    }

    #[test]
    fn test_bottom_edge_below_gap_collides() {
        let config = GameConfig::new();
        let mut pool = ObstaclePool::new();
        pool.push(Obstacle::new(BODY_X, 100.0, 150.0));
        let mut body = body_at(240.0);

        let eval = evaluate(&mut body, &mut pool, &Modifiers::default(), &config);
        assert_eq!(eval.collision, Some(Collision::Obstacle { index: 0 }));
    }

    #[test]
    fn test_first_hit_is_oldest() {
        let config = GameConfig::new();
        let mut pool = ObstaclePool::new();
        pool.push(Obstacle::new(BODY_X - 30.0, 300.0, 20.0));
        pool.push(Obstacle::new(BODY_X - 10.0, 300.0, 20.0));
        let body = body_at(100.0);
        assert_eq!(first_hit(&body, &pool, &config), Some(0));
    }

    #[test]
    fn test_scoring_once_per_obstacle() {
        let config = GameConfig::new();
        let mut pool = ObstaclePool::new();
        // Right edge at BODY_X - BODY_RADIUS - 1: fully behind the body
        pool.push(Obstacle::new(BODY_X - BODY_RADIUS - 1.0 - OBSTACLE_WIDTH, 100.0, 150.0));
        let mut body = body_at(175.0);

        let eval = evaluate(&mut body, &mut pool, &Modifiers::default(), &config);
        assert_eq!(eval.passed, 1);
        let eval = evaluate(&mut body, &mut pool, &Modifiers::default(), &config);
        assert_eq!(eval.passed, 0);
        assert!(pool.get(0).unwrap().scored);
    }

    #[test]
    fn test_touching_edge_is_not_passed() {
        let config = GameConfig::new();
        let body = body_at(175.0);
        let obstacle = Obstacle::new(body.left() - OBSTACLE_WIDTH, 100.0, 150.0);
        assert!(!is_passed(&body, &obstacle, config.obstacle_width));
    }

    #[test]
    fn test_invincible_still_scores() {
        let config = GameConfig::new();
        let mut pool = ObstaclePool::new();
        pool.push(Obstacle::new(BODY_X - BODY_RADIUS - 1.0 - OBSTACLE_WIDTH, 100.0, 150.0));
        // Second obstacle overlaps the body outside its gap
        pool.push(Obstacle::new(BODY_X - 20.0, 300.0, 20.0));
        let mut body = body_at(100.0);
        let mods = Modifiers {
            invincible: true,
            ..Default::default()
        };

        let eval = evaluate(&mut body, &mut pool, &mods, &config);
        assert_eq!(eval.passed, 1);
        assert_eq!(eval.collision, None);
        assert!(pool.get(0).unwrap().scored);
        assert!(!pool.get(1).unwrap().scored);
    }

    proptest! {
        #[test]
        fn invincible_never_collides(
            y in -100.0f32..600.0,
            xs in proptest::collection::vec(-200.0f32..500.0, 0..6),
            gap_top in 40.0f32..150.0,
        ) {
            let config = GameConfig::new();
            let mods = Modifiers { invincible: true, ..Default::default() };
            let mut pool = ObstaclePool::new();
            let mut xs = xs;
            xs.sort_by(|a, b| a.total_cmp(b));
            for x in xs {
                pool.push(Obstacle::new(x, gap_top, 140.0));
            }
            let mut body = body_at(y);
            let behind = pool.iter().filter(|o| is_passed(&body, o, config.obstacle_width)).count();
            let eval = evaluate(&mut body, &mut pool, &mods, &config);
            prop_assert_eq!(eval.collision, None);
            prop_assert_eq!(eval.passed as usize, behind);
            prop_assert!(body.bottom() <= config.ground_line());
        }
    }
}

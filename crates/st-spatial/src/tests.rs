//! Unit tests for st-spatial.

use glam::{Quat, Vec3};

use crate::{
    Collider, ColliderScene, ColliderTag, KinematicNav, LayerMask, NavAgent, PathStatus,
    TriggerPolicy, VisibilityProbe,
};

// ── Helpers ───────────────────────────────────────────────────────────────────

/// Player sphere 5 units ahead, a wall box between 2 and 3 units, low.
fn corridor_scene() -> ColliderScene {
    let mut scene = ColliderScene::new();
    scene
        .add(Collider::sphere(Vec3::new(0.0, 1.0, 5.0), 0.5).with_tag(ColliderTag::Player).on_layer(3))
        .unwrap();
    scene
        .add(Collider::aabb(Vec3::new(-2.0, 0.0, 2.0), Vec3::new(2.0, 0.5, 3.0)))
        .unwrap();
    scene
}

fn run(nav: &mut KinematicNav, seconds: f32, dt: f32) {
    let steps = (seconds / dt).round() as usize;
    for _ in 0..steps {
        nav.advance(dt);
    }
}

// ── LayerMask ─────────────────────────────────────────────────────────────────

#[cfg(test)]
mod layer_mask {
    use super::*;

    #[test]
    fn single_and_without() {
        let mask = LayerMask::ALL.without(8);
        assert!(!mask.contains(8));
        assert!(mask.contains(0));
        assert!(mask.contains(31));
        assert_eq!(LayerMask::single(2), LayerMask(4));
    }

    #[test]
    fn out_of_range_layer_is_empty() {
        assert_eq!(LayerMask::single(40), LayerMask::NONE);
        assert!(!LayerMask::ALL.contains(40));
    }
}

// ── ColliderScene ─────────────────────────────────────────────────────────────

#[cfg(test)]
mod scene {
    use super::*;
    use crate::SpatialError;

    #[test]
    fn ray_hits_player_sphere() {
        let scene = corridor_scene();
        let hit = scene
            .raycast(Vec3::new(0.0, 1.0, 0.0), Vec3::Z, 20.0, LayerMask::ALL, TriggerPolicy::Collide)
            .unwrap();
        assert_eq!(hit.tag, ColliderTag::Player);
        assert!((hit.distance - 4.5).abs() < 1e-4, "got {}", hit.distance);
        assert!((hit.point - Vec3::new(0.0, 1.0, 4.5)).length() < 1e-4);
    }

    #[test]
    fn nearest_obstruction_wins() {
        let scene = corridor_scene();
        // Aim low through the wall.
        let origin = Vec3::new(0.0, 0.25, 0.0);
        let hit = scene
            .raycast(origin, Vec3::Z, 20.0, LayerMask::ALL, TriggerPolicy::Collide)
            .unwrap();
        assert_eq!(hit.tag, ColliderTag::Untagged);
        assert!((hit.distance - 2.0).abs() < 1e-4);
    }

    #[test]
    fn max_distance_limits_hits() {
        let scene = corridor_scene();
        let hit = scene.raycast(Vec3::new(0.0, 1.0, 0.0), Vec3::Z, 4.0, LayerMask::ALL, TriggerPolicy::Collide);
        assert!(hit.is_none());
    }

    #[test]
    fn masked_layers_are_transparent() {
        let scene = corridor_scene();
        let hit = scene.raycast(
            Vec3::new(0.0, 1.0, 0.0),
            Vec3::Z,
            20.0,
            LayerMask::ALL.without(3),
            TriggerPolicy::Collide,
        );
        assert!(hit.is_none());
    }

    #[test]
    fn triggers_respect_policy() {
        let mut scene = ColliderScene::new();
        scene.add(Collider::sphere(Vec3::new(0.0, 0.0, 3.0), 1.0).as_trigger()).unwrap();
        let collide = scene.raycast(Vec3::ZERO, Vec3::Z, 10.0, LayerMask::ALL, TriggerPolicy::Collide);
        let ignore = scene.raycast(Vec3::ZERO, Vec3::Z, 10.0, LayerMask::ALL, TriggerPolicy::Ignore);
        assert!(collide.is_some());
        assert!(ignore.is_none());
    }

    #[test]
    fn origin_inside_collider_is_ignored() {
        let mut scene = ColliderScene::new();
        scene.add(Collider::sphere(Vec3::ZERO, 2.0)).unwrap();
        scene.add(Collider::aabb(Vec3::splat(-1.0), Vec3::splat(1.0))).unwrap();
        assert!(scene.raycast(Vec3::ZERO, Vec3::X, 10.0, LayerMask::ALL, TriggerPolicy::Collide).is_none());
    }

    #[test]
    fn ray_pointing_away_misses() {
        let scene = corridor_scene();
        let hit = scene.raycast(Vec3::new(0.0, 1.0, 0.0), -Vec3::Z, 20.0, LayerMask::ALL, TriggerPolicy::Collide);
        assert!(hit.is_none());
    }

    #[test]
    fn zero_direction_misses() {
        let scene = corridor_scene();
        assert!(scene.raycast(Vec3::ZERO, Vec3::ZERO, 20.0, LayerMask::ALL, TriggerPolicy::Collide).is_none());
    }

    #[test]
    fn line_of_sight_blocked_by_wall() {
        let scene = corridor_scene();
        assert!(!scene.line_of_sight(Vec3::new(0.0, 0.25, 0.0), Vec3::new(0.0, 0.25, 4.0), LayerMask::ALL));
        assert!(scene.line_of_sight(Vec3::new(0.0, 2.0, 0.0), Vec3::new(0.0, 2.0, 4.0), LayerMask::ALL));
    }

    #[test]
    fn translate_moves_collider() {
        let mut scene = corridor_scene();
        let id = crate::ColliderId(0);
        scene.get_mut(id).unwrap().translate(Vec3::new(0.0, 0.0, 10.0));
        let hit = scene
            .raycast(Vec3::new(0.0, 1.0, 0.0), Vec3::Z, 30.0, LayerMask::ALL, TriggerPolicy::Collide)
            .unwrap();
        assert!((hit.distance - 14.5).abs() < 1e-4);
    }

    #[test]
    fn invalid_shapes_rejected() {
        let mut scene = ColliderScene::new();
        assert!(matches!(
            scene.add(Collider::sphere(Vec3::ZERO, -1.0)),
            Err(SpatialError::InvalidShape(_))
        ));
        assert!(matches!(
            scene.add(Collider::sphere(Vec3::ZERO, 1.0).on_layer(32)),
            Err(SpatialError::InvalidLayer(32))
        ));
        assert!(scene.is_empty());
    }
}

// ── KinematicNav ──────────────────────────────────────────────────────────────

#[cfg(test)]
mod kinematic_nav {
    use super::*;

    #[test]
    fn starts_without_path() {
        let nav = KinematicNav::new(Vec3::ZERO, 2.0);
        assert!(!nav.has_path());
        assert_eq!(nav.remaining_distance(), 0.0);
        assert_eq!(nav.path_status(), PathStatus::Complete);
    }

    #[test]
    fn walks_to_destination_and_drops_path() {
        let mut nav = KinematicNav::new(Vec3::ZERO, 2.0);
        nav.set_destination(Vec3::new(0.0, 0.0, 4.0));
        assert!(nav.has_path());
        assert!((nav.remaining_distance() - 4.0).abs() < 1e-6);

        run(&mut nav, 1.0, 0.1);
        assert!((nav.remaining_distance() - 2.0).abs() < 1e-3);
        assert!((nav.velocity().length() - 2.0).abs() < 1e-3);

        run(&mut nav, 1.5, 0.1);
        assert!(!nav.has_path());
        assert!((nav.position() - Vec3::new(0.0, 0.0, 4.0)).length() < 1e-5);
    }

    #[test]
    fn faces_direction_of_travel() {
        let mut nav = KinematicNav::new(Vec3::ZERO, 1.0);
        nav.set_destination(Vec3::new(5.0, 0.0, 0.0));
        nav.advance(0.1);
        assert!((nav.forward() - Vec3::X).length() < 1e-4);
    }

    #[test]
    fn stopped_agent_holds_position() {
        let mut nav = KinematicNav::new(Vec3::ZERO, 2.0);
        nav.set_destination(Vec3::new(0.0, 0.0, 4.0));
        nav.set_stopped(true);
        run(&mut nav, 1.0, 0.1);
        assert_eq!(nav.position(), Vec3::ZERO);
        assert_eq!(nav.velocity(), Vec3::ZERO);
        assert!(nav.has_path());
    }

    #[test]
    fn destination_at_current_position_has_no_path() {
        let mut nav = KinematicNav::new(Vec3::ONE, 2.0);
        nav.set_destination(Vec3::ONE);
        assert!(!nav.has_path());
    }

    #[test]
    fn outside_walkable_area_is_partial() {
        let mut nav = KinematicNav::new(Vec3::ZERO, 2.0)
            .with_walkable_area(Vec3::new(-5.0, 0.0, -5.0), Vec3::new(5.0, 0.0, 5.0));
        nav.set_destination(Vec3::new(0.0, 0.0, 9.0));
        assert_eq!(nav.path_status(), PathStatus::Partial);
        assert_eq!(nav.destination(), Some(Vec3::new(0.0, 0.0, 5.0)));

        nav.set_destination(Vec3::new(1.0, 0.0, 1.0));
        assert_eq!(nav.path_status(), PathStatus::Complete);
    }

    #[test]
    fn arriving_at_clamped_destination_clears_partial() {
        let mut nav = KinematicNav::new(Vec3::ZERO, 2.0)
            .with_walkable_area(Vec3::new(-5.0, 0.0, -5.0), Vec3::new(5.0, 0.0, 5.0));
        nav.set_destination(Vec3::new(0.0, 0.0, 9.0));
        assert_eq!(nav.path_status(), PathStatus::Partial);

        run(&mut nav, 3.0, 0.1);
        assert!(!nav.has_path());
        assert_eq!(nav.path_status(), PathStatus::Complete);
    }

    #[test]
    fn clamped_request_from_the_border_has_no_partial_path() {
        let mut nav = KinematicNav::new(Vec3::new(0.0, 0.0, 5.0), 2.0)
            .with_walkable_area(Vec3::new(-5.0, 0.0, -5.0), Vec3::new(5.0, 0.0, 5.0));
        nav.set_destination(Vec3::new(0.0, 0.0, 9.0));
        assert!(!nav.has_path());
        assert_eq!(nav.path_status(), PathStatus::Complete);
    }

    #[test]
    fn rotation_can_be_set_by_caller() {
        let mut nav = KinematicNav::new(Vec3::ZERO, 2.0);
        nav.set_rotation(Quat::from_rotation_y(std::f32::consts::FRAC_PI_2));
        assert!((nav.forward() - Vec3::X).length() < 1e-5);
    }
}

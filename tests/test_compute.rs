use platformer::compute::*;
use platformer::config::{GRAVITY, JUMP, STOMP_BOUNCE};
use platformer::entities::*;

fn ledge() -> Rect {
    // Spans x ∈ [100, 300], y ∈ [200, 220]
    Rect::new(100.0, 200.0, 200.0, 20.0)
}

fn player_at(x: f32, y: f32) -> Player {
    let mut p = Player::new();
    p.body.rect.x = x;
    p.body.rect.y = y;
    p
}

// ── move_body ─────────────────────────────────────────────────────────────────

#[test]
fn airborne_velocity_grows_by_gravity_every_frame() {
    let mut body = Body::new(0.0, 0.0, 10.0, 10.0);
    let mut last = body.vy;
    for _ in 0..200 {
        move_body(&mut body, &[]);
        assert!((body.vy - (last + GRAVITY)).abs() < 1e-3);
        assert!(body.vy > last);
        assert!(!body.grounded);
        last = body.vy;
    }
    // No terminal velocity
    assert!(body.vy > 150.0);
}

#[test]
fn velocity_is_applied_to_position() {
    let mut body = Body::new(10.0, 20.0, 10.0, 10.0);
    body.vx = 3.0;
    move_body(&mut body, &[]);
    assert_eq!(body.rect.x, 13.0);
    assert!((body.rect.y - (20.0 + GRAVITY)).abs() < 1e-6);
}

#[test]
fn falling_body_lands_on_platform() {
    let mut body = Body::new(150.0, 150.0, 30.0, 50.0);
    body.vy = 5.0;
    move_body(&mut body, &[ledge()]);
    assert_eq!(body.rect.bottom(), 200.0);
    assert_eq!(body.vy, 0.0);
    assert!(body.grounded);
}

#[test]
fn rising_body_passes_through_platform() {
    let mut body = Body::new(150.0, 215.0, 30.0, 50.0);
    body.vy = -10.0;
    move_body(&mut body, &[ledge()]);
    assert!(!body.grounded);
    assert!(body.vy < 0.0);
}

#[test]
fn body_beside_platform_keeps_falling() {
    let mut body = Body::new(400.0, 180.0, 30.0, 50.0);
    body.vy = 5.0;
    move_body(&mut body, &[ledge()]);
    assert!(!body.grounded);
    assert!(body.vy > 5.0);
}

#[test]
fn highest_of_overlapping_platforms_wins() {
    let lower = Rect::new(0.0, 230.0, 400.0, 20.0);
    let upper = Rect::new(0.0, 210.0, 400.0, 20.0);
    let mut body = Body::new(50.0, 170.0, 30.0, 50.0);
    body.vy = 20.0;
    // Creation order puts the lower ledge last; the upper surface still wins
    move_body(&mut body, &[upper, lower]);
    assert_eq!(body.rect.bottom(), 210.0);
    assert!(body.grounded);
}

#[test]
fn grounded_body_skips_gravity_for_one_frame() {
    let mut body = Body::new(150.0, 150.0, 30.0, 50.0);
    body.grounded = true;
    move_body(&mut body, &[ledge()]);
    assert_eq!(body.vy, 0.0);
    assert_eq!(body.rect.bottom(), 200.0);
    // Touching is not overlapping, so grounded is recomputed as false
    assert!(!body.grounded);
}

// ── jump ──────────────────────────────────────────────────────────────────────

#[test]
fn jump_only_when_grounded() {
    let mut p = Player::new();
    jump(&mut p);
    assert_eq!(p.body.vy, 0.0);

    p.body.grounded = true;
    jump(&mut p);
    assert_eq!(p.body.vy, JUMP);
    assert!(!p.body.grounded);
}

// ── update_player ─────────────────────────────────────────────────────────────

#[test]
fn stomp_removes_enemy_and_scores() {
    let mut p = player_at(300.0, 300.0);
    p.body.vy = 4.0;
    // After the move the player spans y ≈ 304.8..354.8; enemy bottom is 372
    let mut enemies = vec![Enemy::with_speed(300.0, 340.0, 50.0, 1.0)];

    let mode = update_player(&mut p, &[], &mut enemies);

    assert!(enemies.is_empty());
    assert_eq!(p.score, 100);
    assert_eq!(p.lives, 3);
    assert!((p.body.vy - JUMP * STOMP_BOUNCE).abs() < 1e-6);
    assert_eq!(mode, Mode::Playing);
}

#[test]
fn side_contact_costs_a_life_and_respawns() {
    let mut p = player_at(300.0, 300.0);
    let mut enemies = vec![Enemy::with_speed(310.0, 300.0, 50.0, 1.0)];

    let mode = update_player(&mut p, &[], &mut enemies);

    assert_eq!(enemies.len(), 1);
    assert_eq!(p.lives, 2);
    assert_eq!(p.score, 0);
    assert_eq!((p.body.rect.x, p.body.rect.y), (100.0, 100.0));
    assert_eq!(mode, Mode::Playing);
}

#[test]
fn respawn_clears_velocity() {
    let mut p = player_at(300.0, 300.0);
    p.body.vx = 5.0;
    p.body.vy = -8.0;
    let mut enemies = vec![Enemy::with_speed(300.0, 290.0, 50.0, 1.0)];

    update_player(&mut p, &[], &mut enemies);

    assert_eq!(p.lives, 2);
    assert_eq!(p.body.vx, 0.0);
    assert_eq!(p.body.vy, 0.0);
}

#[test]
fn rising_into_enemy_is_not_a_stomp() {
    let mut p = player_at(300.0, 340.0);
    p.body.vy = -5.0;
    let mut enemies = vec![Enemy::with_speed(300.0, 310.0, 50.0, 1.0)];

    update_player(&mut p, &[], &mut enemies);

    assert_eq!(enemies.len(), 1);
    assert_eq!(p.lives, 2);
}

#[test]
fn only_touched_enemies_are_affected() {
    let mut p = player_at(300.0, 300.0);
    p.body.vy = 4.0;
    let mut enemies = vec![
        Enemy::with_speed(600.0, 100.0, 50.0, 1.0),
        Enemy::with_speed(300.0, 340.0, 50.0, 1.0),
        Enemy::with_speed(50.0, 500.0, 50.0, 1.0),
    ];

    update_player(&mut p, &[], &mut enemies);

    assert_eq!(enemies.len(), 2);
    assert_eq!(enemies[0].body.rect.x, 600.0);
    assert_eq!(enemies[1].body.rect.x, 50.0);
    assert_eq!(p.score, 100);
}

#[test]
fn clamp_left_edge() {
    let mut p = player_at(-50.0, 100.0);
    update_player(&mut p, &[], &mut Vec::new());
    assert_eq!(p.body.rect.x, 0.0);
}

#[test]
fn clamp_right_edge() {
    let mut p = player_at(900.0, 100.0);
    update_player(&mut p, &[], &mut Vec::new());
    assert_eq!(p.body.rect.x, 770.0);
}

#[test]
fn three_hits_end_the_game() {
    let mut p = Player::new();
    // Sits over the spawn point so every respawn collides again
    let mut enemies = vec![Enemy::with_speed(100.0, 110.0, 50.0, 1.0)];

    assert_eq!(update_player(&mut p, &[], &mut enemies), Mode::Playing);
    assert_eq!(p.lives, 2);
    assert_eq!(update_player(&mut p, &[], &mut enemies), Mode::Playing);
    assert_eq!(p.lives, 1);
    assert_eq!(update_player(&mut p, &[], &mut enemies), Mode::GameOver);
    assert_eq!(p.lives, 0);

    // Lives never wrap below zero
    update_player(&mut p, &[], &mut enemies);
    assert_eq!(p.lives, 0);
}

#[test]
fn player_animation_advances_on_update() {
    let mut p = Player::new();
    for _ in 0..10 {
        update_player(&mut p, &[], &mut Vec::new());
    }
    assert_eq!(p.anim.frame(), 1);
    assert_eq!(p.anim.frame_id(), Some("player_idle2"));
}

// ── update_enemy ──────────────────────────────────────────────────────────────

#[test]
fn enemy_walks_at_its_speed() {
    let mut e = Enemy::with_speed(250.0, 368.0, 100.0, 2.0);
    let floor = [Rect::new(0.0, 400.0, 800.0, 20.0)];
    update_enemy(&mut e, &floor);
    assert_eq!(e.body.vx, 2.0);
    assert_eq!(e.body.rect.x, 252.0);
}

#[test]
fn enemy_turns_around_at_range() {
    let mut e = Enemy::with_speed(250.0, 368.0, 10.0, 2.0);
    let floor = [Rect::new(0.0, 400.0, 800.0, 20.0)];

    for _ in 0..5 {
        update_enemy(&mut e, &floor);
    }
    assert_eq!(e.body.rect.x, 260.0);
    assert!(e.body.facing_right);

    update_enemy(&mut e, &floor);
    assert_eq!(e.speed, -2.0);
    assert!(!e.body.facing_right);
    assert_eq!(e.body.rect.x, 258.0);
}

#[test]
fn enemy_patrol_stays_near_range() {
    let mut e = Enemy::with_speed(250.0, 368.0, 30.0, 1.7);
    let floor = [Rect::new(0.0, 400.0, 800.0, 20.0)];
    for _ in 0..1000 {
        update_enemy(&mut e, &floor);
        assert!((e.body.rect.x - e.start_x).abs() <= e.range + 2.0 * 1.7);
    }
}

#[test]
fn enemy_falls_onto_ledge() {
    let mut e = Enemy::with_speed(250.0, 350.0, 100.0, 1.0);
    let ledge = [Rect::new(200.0, 400.0, 200.0, 20.0)];
    for _ in 0..30 {
        update_enemy(&mut e, &ledge);
    }
    assert_eq!(e.body.rect.bottom(), 400.0);
}

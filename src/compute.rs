/// Per-frame game logic.
///
/// Each function mutates the entity it is handed in place. Nothing here
/// touches rendering or input; the caller decides what the frame's
/// intentions (horizontal velocity, jump) are before calling in.

use crate::config::{GRAVITY, JUMP, SPAWN, STOMP_BOUNCE, STOMP_SCORE, WIDTH};
use crate::entities::{Body, Enemy, Mode, Player, Rect};

// ── Physics ───────────────────────────────────────────────────────────────────

/// Apply gravity and velocity, then land on a platform if one was hit.
///
/// A landing candidate is any platform the body overlaps while descending
/// with its bottom past the platform's top. When several qualify in the
/// same frame the one with the highest surface wins.
pub fn move_body(body: &mut Body, platforms: &[Rect]) {
    if !body.grounded {
        body.vy += GRAVITY;
    }

    body.rect.x += body.vx;
    body.rect.y += body.vy;

    body.grounded = false;
    if body.vy <= 0.0 {
        return;
    }

    let landing = platforms
        .iter()
        .filter(|p| body.rect.intersects(p) && body.rect.bottom() > p.top())
        .min_by(|a, b| a.top().total_cmp(&b.top()));

    if let Some(platform) = landing {
        body.rect.set_bottom(platform.top());
        body.vy = 0.0;
        body.grounded = true;
    }
}

/// Keep the whole body inside `[0, WIDTH]` horizontally.
pub fn clamp_to_screen(body: &mut Body) {
    body.rect.x = body.rect.x.clamp(0.0, WIDTH - body.rect.w);
}

// ── Player ────────────────────────────────────────────────────────────────────

/// Jump if standing on something; otherwise a no-op.
pub fn jump(player: &mut Player) {
    if player.body.grounded {
        player.body.vy = JUMP;
        player.body.grounded = false;
    }
}

/// Put the player back at the spawn point, at rest.
pub fn respawn(player: &mut Player) {
    player.body.rect.x = SPAWN.0;
    player.body.rect.y = SPAWN.1;
    player.body.vx = 0.0;
    player.body.vy = 0.0;
    player.body.grounded = false;
}

/// Stomping from above: descending and the player's feet are still above
/// the enemy's.
pub fn is_stomp(player: &Body, enemy: &Body) -> bool {
    player.vy > 0.0 && player.rect.bottom() < enemy.rect.bottom()
}

/// Advance the player one frame and resolve contact with every enemy.
///
/// Stomped enemies are removed from `enemies`. Returns the mode the game
/// should be in afterwards.
pub fn update_player(player: &mut Player, platforms: &[Rect], enemies: &mut Vec<Enemy>) -> Mode {
    move_body(&mut player.body, platforms);

    enemies.retain(|enemy| {
        if !player.body.rect.intersects(&enemy.body.rect) {
            return true;
        }
        if is_stomp(&player.body, &enemy.body) {
            player.score += STOMP_SCORE;
            player.body.vy = JUMP * STOMP_BOUNCE;
            log::debug!("stomped enemy at x={:.1}, score={}", enemy.body.rect.x, player.score);
            false
        } else {
            player.lives = player.lives.saturating_sub(1);
            respawn(player);
            log::debug!("player hit, lives={}", player.lives);
            true
        }
    });

    clamp_to_screen(&mut player.body);
    player.anim.update();

    if player.lives == 0 {
        Mode::GameOver
    } else {
        Mode::Playing
    }
}

// ── Enemy ─────────────────────────────────────────────────────────────────────

/// Patrol back and forth around the spawn anchor.
pub fn update_enemy(enemy: &mut Enemy, platforms: &[Rect]) {
    if (enemy.body.rect.x - enemy.start_x).abs() >= enemy.range {
        enemy.speed = -enemy.speed;
        enemy.body.facing_right = enemy.speed > 0.0;
    }

    enemy.body.vx = enemy.speed;
    move_body(&mut enemy.body, platforms);
    enemy.anim.update();
}

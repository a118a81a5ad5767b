//! Gameplay scenarios driven through the public session API.

use tui_bomber::core::{
    DropOutcome, FireOutcome, Field, GameRules, GunEvent, Motion, RoundStatus, Session, SimpleRng,
    World,
};
use tui_bomber::types::Heading;

fn session(width: u16, height: u16, heights: Vec<u16>) -> Session {
    Session::with_world(
        Field::new(width, height),
        World::from_heights(heights),
        GameRules::default(),
    )
}

/// Tick until the bomb is gone, returning the number of ticks taken.
fn tick_until_bomb_lands(s: &mut Session) -> u32 {
    let mut ticks = 0;
    while s.bomb().is_some() {
        s.tick();
        ticks += 1;
        assert!(ticks < 100, "bomb never landed");
    }
    ticks
}

#[test]
fn test_three_bombs_level_a_tower_and_win() {
    let mut heights = vec![0; 60];
    heights[5] = 3;
    let mut s = session(60, 24, heights);

    for hit in 1..=3 {
        *s.bomber_mut() = tui_bomber::core::Bomber::new(3, 1, Heading::Right);
        assert_eq!(s.drop_bomb(), DropOutcome::Dropped);
        assert_eq!(s.bomb().unwrap().x, 5);
        tick_until_bomb_lands(&mut s);
        assert_eq!(s.world().height_at(5), 3 - hit);
        assert_eq!(s.score(), 10 * hit as u32);
    }

    assert!(s.world().is_cleared());
    let report = s.tick();
    assert!(report.won);
    assert_eq!(s.status(), RoundStatus::Won);
}

#[test]
fn test_ammo_runs_out_after_five_misses() {
    let mut s = session(80, 24, vec![0; 80]);
    s.bomber_mut().x = 10;

    for left in (0..5).rev() {
        assert_eq!(s.fire_gun(), FireOutcome::Fired);
        assert_eq!(s.ammo(), left);
        while s.bullet().is_some() {
            s.tick();
        }
    }

    assert_eq!(s.fire_gun(), FireOutcome::NoAmmo);
    assert!(s.bullet().is_none());
    assert_eq!(s.ammo(), 0);
}

#[test]
fn test_left_edge_flips_and_descends() {
    let mut s = session(40, 24, vec![0; 40]);
    *s.bomber_mut() = tui_bomber::core::Bomber::new(0, 5, Heading::Left);

    let report = s.tick();
    assert_eq!(report.motion, Some(Motion::Turned));
    let b = s.bomber();
    assert_eq!((b.x, b.y, b.heading), (0, 6, Heading::Right));
}

#[test]
fn test_bullet_at_max_range_is_cleared_without_refund() {
    let mut s = session(80, 24, vec![0; 80]);
    s.bomber_mut().x = 10;
    assert_eq!(s.fire_gun(), FireOutcome::Fired);

    let mut last = None;
    while s.bullet().is_some() {
        last = s.tick().gun;
    }
    assert_eq!(last, Some(GunEvent::OutOfRange));
    assert_eq!(s.score(), 0);
    assert_eq!(s.ammo(), GameRules::default().ammo - 1);
}

#[test]
fn test_gun_hit_holds_bomber_for_one_tick() {
    // A wall of height 6 on a 24-row screen: top row 17, bullet flies on row 18.
    let mut heights = vec![0; 80];
    for h in heights.iter_mut().skip(20).take(10) {
        *h = 6;
    }
    let mut s = session(80, 24, heights);
    *s.bomber_mut() = tui_bomber::core::Bomber::new(10, 18, Heading::Right);

    assert_eq!(s.fire_gun(), FireOutcome::Fired);
    let mut hit = false;
    for _ in 0..10 {
        if let Some(GunEvent::Hit { .. }) = s.tick().gun {
            hit = true;
            break;
        }
    }
    assert!(hit);
    let x = s.bomber().x;
    assert_eq!(s.tick().motion, Some(Motion::Held));
    assert_eq!(s.bomber().x, x);
}

#[test]
fn test_random_round_never_grows_buildings() {
    let mut s = Session::new(Field::new(80, 24), GameRules::default(), 2024);
    let mut rng = SimpleRng::new(99);
    let mut before = s.world().heights().to_vec();

    while !s.is_over() && s.ticks() < 5_000 {
        match rng.next_range(8) {
            0 => {
                s.drop_bomb();
            }
            1 => {
                s.fire_gun();
            }
            _ => {}
        }
        s.tick();

        let after = s.world().heights().to_vec();
        assert!(before.iter().zip(&after).all(|(b, a)| a <= b));
        assert_eq!(s.world().is_cleared(), after.iter().all(|&h| h == 0));
        before = after;
    }
    assert!(s.is_over());
}

#[test]
fn test_generated_heights_stay_in_range() {
    let field = Field::new(90, 30);
    let s = Session::new(field, GameRules::default(), 5);
    assert_eq!(s.world().width(), 90);
    assert!(s.world().heights().iter().all(|&h| (1..=10).contains(&h)));
}

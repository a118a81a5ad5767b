use tui_bomber::core::{Bomber, Field, GameRules, Session, World};
use tui_bomber::term::{palette, GameView, Hud, MessageLine};
use tui_bomber::types::Heading;

fn hud(message: &MessageLine) -> Hud<'_> {
    Hud {
        player: "Ace",
        message,
        scroll: 0,
    }
}

#[test]
fn term_view_draws_status_line_and_sprite() {
    let session = Session::with_world(Field::new(60, 20), World::flat(60), GameRules::default());
    let message = MessageLine::new("HELLO");
    let fb = GameView::new().render(&session, &hud(&message));

    assert!(fb.row_text(0).starts_with("Player: Ace  Score: 0  Ammo: 5"));
    assert_eq!(&fb.row_text(1)[..4], "^==-");
    assert_eq!(fb.get(0, 1).unwrap().style, palette::BOMBER);
    assert!(fb.row_text(19).starts_with("HELLO   HELLO"));
}

#[test]
fn term_view_draws_left_sprite_bomb_and_bullet() {
    let mut session =
        Session::with_world(Field::new(60, 20), World::flat(60), GameRules::default());
    *session.bomber_mut() = Bomber::new(30, 4, Heading::Left);
    session.drop_bomb();
    session.fire_gun();

    let message = MessageLine::default();
    let fb = GameView::new().render(&session, &hud(&message));

    assert_eq!(&fb.row_text(4)[30..34], "-==^");
    // Bomb under the belly, bullet two columns ahead of the nose.
    assert_eq!(fb.get(31, 5).unwrap().ch, '*');
    assert_eq!(fb.get(28, 4).unwrap().ch, '-');
    assert!(fb.row_text(0).contains("Ammo: 4"));
}

#[test]
fn term_view_low_altitude_warning_names_threshold() {
    let session = Session::with_world(Field::new(60, 20), World::flat(60), GameRules::default());
    let message = MessageLine::default();
    let view = GameView::new();
    let mut fb = view.render(&session, &hud(&message));
    view.draw_low_altitude_warning(&mut fb, 5);
    assert!(fb.row_text(1).starts_with("TOO LOW TO BOMB! (Need 5 units)"));
}

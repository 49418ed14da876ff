#![forbid(unsafe_code)]

//! Full key-event flows through the tabbed shell, asserted against the
//! rendered frame.

use std::rc::Rc;

use mktui_demo::AppModel;
use mktui_model::{Cart, demo_catalog};
use mktui_term::{App, Event, Frame, KeyCode, KeyEvent};

const WIDTH: u16 = 70;
const HEIGHT: u16 = 14;

fn press(app: &mut AppModel, code: KeyCode) {
    app.update(Event::Key(KeyEvent::new(code)));
}

fn render(app: &AppModel) -> Frame {
    let mut frame = Frame::new(WIDTH, HEIGHT);
    app.view(&mut frame);
    frame
}

fn screen_text(frame: &Frame) -> String {
    (0..HEIGHT)
        .map(|y| frame.buffer.row_text(y))
        .collect::<Vec<_>>()
        .join("\n")
}

#[test]
fn cabbage_and_pikles_total_one_fifty() {
    let mut app = AppModel::new(Rc::new(demo_catalog()), Cart::empty());

    let text = screen_text(&render(&app));
    assert!(text.contains("[Inventory]"));
    assert!(text.contains("Cabbage"));

    // Open Cabbage, add it, go back.
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Esc);

    // Move to Pikles (third row), add it.
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Down);
    press(&mut app, KeyCode::Enter);
    let text = screen_text(&render(&app));
    assert!(text.contains("Pikles"));
    assert!(text.contains("In cart: 0"));
    press(&mut app, KeyCode::Enter);

    let names: Vec<String> = app
        .cart()
        .items()
        .iter()
        .map(|item| item.name().to_string())
        .collect();
    assert_eq!(names, ["Cabbage", "Pikles"]);

    press(&mut app, KeyCode::Char('2'));
    let text = screen_text(&render(&app));
    assert!(text.contains("[Cart]"));
    assert!(text.contains("1. Cabbage"));
    assert!(text.contains("2. Pikles"));
    assert!(text.contains("Total: 1.50"));
}

#[test]
fn the_same_item_twice_is_two_rows() {
    let mut app = AppModel::new(Rc::new(demo_catalog()), Cart::empty());

    // Stay in the detail view and add twice.
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    assert_eq!(app.cart().len(), 2);

    let text = screen_text(&render(&app));
    assert!(text.contains("In cart: 2"));

    press(&mut app, KeyCode::Esc);
    press(&mut app, KeyCode::Right);
    let text = screen_text(&render(&app));
    assert!(text.contains("1. Cabbage"));
    assert!(text.contains("2. Cabbage"));
    assert!(text.contains("Total: 2.00"));
}

#[test]
fn no_adds_renders_the_empty_cart() {
    let mut app = AppModel::new(Rc::new(demo_catalog()), Cart::empty());
    press(&mut app, KeyCode::Char('2'));
    let text = screen_text(&render(&app));
    assert!(text.contains("Cart is empty"));
    assert!(!text.contains("Total:"));
    assert!(text.contains("0 items"));
    assert!(text.contains("total 0.00"));
}

#[test]
fn footer_announces_adds_through_the_subscription() {
    let mut app = AppModel::new(Rc::new(demo_catalog()), Cart::empty());
    press(&mut app, KeyCode::Enter);
    press(&mut app, KeyCode::Enter);
    let text = screen_text(&render(&app));
    assert!(text.contains("Added Cabbage (1 in cart)"));
}

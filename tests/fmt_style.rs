use vislog::fmt::{colorize, colorize_badge};
use vislog::{Category, Color, Palette, Role};

#[test]
fn timestamp_role_paints_gray_foreground() {
    let palette = Palette::default();
    let painted = palette.paint(Role::Timestamp, "2026-08-06T10:00:00");
    assert_eq!(painted, colorize("2026-08-06T10:00:00", Color::gray()));
}

#[test]
fn title_role_paints_badge_on_category_background() {
    let palette = Palette::default();
    let painted = palette.paint(Role::Title(Category::Info), " [ INFO ] ");
    assert_eq!(
        painted,
        colorize_badge(" [ INFO ] ", Color::white(), Color::blue())
    );
}

#[test]
fn log_body_stays_plain() {
    let palette = Palette::default();
    assert_eq!(palette.paint(Role::Body(Category::Log), "plain"), "plain");
}

#[test]
fn colored_bodies_use_the_category_foreground() {
    let palette = Palette::default();
    assert_eq!(
        palette.paint(Role::Body(Category::Warn), "careful"),
        colorize("careful", Color::yellow())
    );
}

#[test]
fn category_overrides_replace_both_badge_and_body() {
    let accent = Color::new(10, 20, 30);
    let palette = Palette::new().category(Category::Success, accent);

    assert_eq!(
        palette.paint(Role::Body(Category::Success), "done"),
        colorize("done", accent)
    );
    assert_eq!(
        palette.paint(Role::Title(Category::Success), " [ SUCCESS ] "),
        colorize_badge(" [ SUCCESS ] ", Color::white(), accent)
    );
}

#[test]
fn timestamp_override_applies() {
    let accent = Color::new(90, 90, 90);
    let palette = Palette::new().timestamp(accent);
    assert_eq!(palette.paint(Role::Timestamp, "t"), colorize("t", accent));
}

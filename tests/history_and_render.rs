use eframe_sketch::{
    BrushSettings, DrawingEngine, Effect, EngineConfig, RandomSource, StrokeRef, Tool,
};
use egui::{Color32, pos2};

/// Deterministic randomness so effect colors are reproducible
struct Counter(u32);

impl RandomSource for Counter {
    fn next_u32(&mut self) -> u32 {
        self.0 = self.0.wrapping_mul(1_664_525).wrapping_add(1_013_904_223);
        self.0
    }
}

fn engine() -> DrawingEngine<Counter> {
    DrawingEngine::with_random(EngineConfig::default(), Counter(42)).unwrap()
}

fn line<R: RandomSource>(engine: &mut DrawingEngine<R>, settings: &BrushSettings, offset: f32) -> StrokeRef {
    engine.begin_stroke(pos2(offset, offset)).unwrap();
    engine.update_stroke(pos2(offset + 5.0, offset), settings).unwrap();
    engine.update_stroke(pos2(offset + 5.0, offset + 5.0), settings).unwrap();
    engine.end_stroke().unwrap()
}

#[test]
fn test_undo_on_empty_history() {
    let mut engine = engine();
    assert!(engine.undo().is_none());
    assert!(engine.undo().is_none());
    assert_eq!(engine.history().len(), 0);
}

#[test]
fn test_undo_removes_most_recent_only() {
    let mut engine = engine();
    let settings = BrushSettings::default();
    let strokes: Vec<_> = (0..4).map(|i| line(&mut engine, &settings, i as f32 * 10.0)).collect();

    let removed = engine.undo().unwrap();
    assert_eq!(removed.id(), strokes[3].id());
    assert_eq!(engine.history().len(), 3);

    let remaining: Vec<_> = engine.history().strokes().iter().map(|s| s.id()).collect();
    let expected: Vec<_> = strokes[..3].iter().map(|s| s.id()).collect();
    assert_eq!(remaining, expected);
    for (kept, original) in engine.history().strokes().iter().zip(&strokes) {
        assert_eq!(kept.points(), original.points());
    }
}

#[test]
fn test_clear_all_is_idempotent() {
    let mut engine = engine();
    let settings = BrushSettings::default();
    line(&mut engine, &settings, 0.0);
    line(&mut engine, &settings, 10.0);

    engine.clear_all();
    assert!(engine.history().is_empty());
    engine.clear_all();
    assert!(engine.history().is_empty());
}

#[test]
fn test_eraser_forces_background() {
    let mut engine = engine();
    for effect in [Effect::Normal, Effect::Rainbow, Effect::Sprinkles] {
        let settings = BrushSettings {
            effect,
            eraser: true,
            color: Color32::RED,
            ..BrushSettings::default()
        };
        engine.begin_stroke(pos2(0.0, 0.0)).unwrap();
        for i in 0..10 {
            let stroke = engine.update_stroke(pos2(i as f32, 0.0), &settings).unwrap();
            assert_eq!(stroke.color(), Color32::WHITE);
        }
        engine.end_stroke().unwrap();
    }
}

#[test]
fn test_normal_effect_uses_flat_color_and_width() {
    let mut engine = engine();
    let settings = BrushSettings {
        color: Color32::DARK_BLUE,
        width: 12.0,
        ..BrushSettings::default()
    };
    let stroke = line(&mut engine, &settings, 0.0);
    assert_eq!(stroke.color(), Color32::DARK_BLUE);
    assert_eq!(stroke.width(), 12.0);
}

#[test]
fn test_rainbow_stroke_takes_last_resolved_color() {
    let mut engine = engine();
    let palette = engine.config().rainbow_palette.clone();
    let settings = BrushSettings::default().with_effect(Effect::Rainbow);

    engine.begin_stroke(pos2(0.0, 0.0)).unwrap();
    let mut last = Color32::TRANSPARENT;
    for i in 0..20 {
        let stroke = engine.update_stroke(pos2(i as f32, 0.0), &settings).unwrap();
        assert!(palette.contains(&stroke.color()));
        last = stroke.color();
    }
    let committed = engine.end_stroke().unwrap();
    assert_eq!(committed.color(), last);
}

#[test]
fn test_sprinkles_give_saturated_colors() {
    let mut engine = engine();
    let settings = BrushSettings::default().with_effect(Effect::Sprinkles);
    engine.begin_stroke(pos2(0.0, 0.0)).unwrap();
    for i in 0..20 {
        let color = engine.update_stroke(pos2(i as f32, 0.0), &settings).unwrap().color();
        let channels = [color.r(), color.g(), color.b()];
        assert_eq!(channels.iter().max(), Some(&255));
        assert_eq!(channels.iter().min(), Some(&0));
    }
}

#[test]
fn test_bulk_recolor_toggle_restores_original_colors() {
    let mut engine = engine();
    let red = BrushSettings {
        color: Color32::RED,
        ..BrushSettings::default()
    };
    let blue = BrushSettings {
        color: Color32::BLUE,
        ..BrushSettings::default()
    };
    line(&mut engine, &red, 0.0);
    line(&mut engine, &blue, 10.0);

    assert!(engine.toggle_filter());
    assert!(engine.is_filter_active());
    assert!(engine.history().strokes().iter().all(|s| s.color() == Color32::GRAY));

    assert!(!engine.apply_bulk_recolor(Color32::GRAY));
    let colors: Vec<_> = engine.history().strokes().iter().map(|s| s.color()).collect();
    assert_eq!(colors, vec![Color32::RED, Color32::BLUE]);
}

#[test]
fn test_render_order_and_purity() {
    let mut engine = engine();
    let settings = BrushSettings::default().with_tool(Tool::Rectangle);
    let first = line(&mut engine, &settings, 0.0);
    let second = line(&mut engine, &settings, 20.0);

    engine.begin_stroke(pos2(100.0, 100.0)).unwrap();
    engine.update_stroke(pos2(110.0, 110.0), &settings).unwrap();
    let active_id = engine.in_progress().unwrap().id();

    let commands = engine.render_commands();
    let ids: Vec<_> = commands.iter().map(|c| c.stroke_id).collect();
    assert_eq!(ids, vec![first.id(), second.id(), active_id]);

    let again = engine.render_commands();
    assert_eq!(commands, again);
    assert_eq!(engine.history().len(), 2);
    assert_eq!(engine.in_progress().unwrap().points().len(), 5);
}

#[test]
fn test_render_skips_unstarted_stroke() {
    let mut engine = engine();
    engine.begin_stroke(pos2(0.0, 0.0)).unwrap();
    assert!(engine.render_commands().is_empty());

    engine.update_stroke(pos2(0.0, 0.0), &BrushSettings::default()).unwrap();
    let commands = engine.render_commands();
    assert_eq!(commands.len(), 1);
    assert_eq!(commands[0].points, vec![pos2(0.0, 0.0)]);
}

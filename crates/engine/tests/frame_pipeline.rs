use dom::{Document, ElementData};
use engine::{Engine, EngineConfig};
use layout::{MonospaceFont, MonospaceProvider, ProviderMeasurer};
use paint::PaintCommand;

#[test]
fn runs_a_frame_end_to_end() {
    let _ = env_logger::builder().is_test(true).try_init();

    let mut doc = Document::new();
    let mut data = ElementData::new("p");
    data.set_attribute("style", "color: red");
    let p = doc.create_element(data);
    let text = doc.create_text("hello world");
    doc.append_child(p, text);
    doc.append_child(doc.root(), p);

    let provider = MonospaceProvider { font: MonospaceFont { advance_px: 8.0 } };
    let measurer = ProviderMeasurer { provider: &provider };
    let config = EngineConfig::new(800.0, 600.0);
    let engine = Engine::new(config, &measurer).expect("valid config");

    let frame = engine.run_frame(&doc, &[]);
    assert!(!frame.root_box.children.is_empty());
    assert!(frame
        .paint_commands
        .iter()
        .any(|c| matches!(c, PaintCommand::TextRun { text, .. } if text == "hello world")));
}

#[test]
fn rejects_invalid_config_before_any_frame_runs() {
    let provider = MonospaceProvider { font: MonospaceFont { advance_px: 8.0 } };
    let measurer = ProviderMeasurer { provider: &provider };
    let config = EngineConfig::new(-1.0, 600.0);
    assert!(Engine::new(config, &measurer).is_err());
}
